use thiserror::Error;

use blight_types::BlightError;

/// Errors from the advisory layer around the rule engine.
#[derive(Debug, Error)]
pub enum AdvisorError {
    #[error(transparent)]
    Engine(#[from] BlightError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed YAML in {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    #[error("{path} is missing required columns: {}", columns.join(", "))]
    MissingColumns { path: String, columns: Vec<String> },

    #[error("{path} line {line}: {reason}")]
    InvalidRecord {
        path: String,
        line: u64,
        reason: String,
    },

    #[error("{path}: {format} is not supported here")]
    UnsupportedFormat { path: String, format: &'static str },

    #[error("field not found: {0}")]
    FieldNotFound(String),

    #[error("weather source {source_name} failed: {reason}")]
    WeatherUnavailable { source_name: String, reason: String },
}

/// Convenience type alias for advisory results.
pub type AdvisorResult<T> = Result<T, AdvisorError>;
