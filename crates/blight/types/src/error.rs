use thiserror::Error;

/// Errors raised while validating input or resolving a rule.
///
/// Every variant is a local validation failure; nothing here is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlightError {
    #[error("invalid input at observation {index}: {reason}")]
    InvalidInput { index: usize, reason: String },

    #[error("unknown rule: {0}")]
    UnknownRule(String),

    #[error("missing parameter for rule {rule}: {key}")]
    MissingParameter { rule: String, key: String },

    #[error("invalid parameter {key} for rule {rule}: {reason}")]
    InvalidParameter {
        rule: String,
        key: String,
        reason: String,
    },

    #[error("rule book has no parameters for rule: {0}")]
    MissingRuleSet(String),
}

impl BlightError {
    pub fn invalid_input(index: usize, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            index,
            reason: reason.into(),
        }
    }

    pub fn missing_parameter(rule: impl Into<String>, key: impl Into<String>) -> Self {
        Self::MissingParameter {
            rule: rule.into(),
            key: key.into(),
        }
    }

    pub fn invalid_parameter(
        rule: impl Into<String>,
        key: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidParameter {
            rule: rule.into(),
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience type alias for rule engine results.
pub type BlightResult<T> = Result<T, BlightError>;
