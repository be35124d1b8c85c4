//! CLI error types

use thiserror::Error;

use blight_advisor::AdvisorError;
use blight_types::BlightError;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    /// Rule engine error
    #[error(transparent)]
    Engine(#[from] BlightError),

    /// Advisory layer error (files, fields, weather sources)
    #[error(transparent)]
    Advisor(#[from] AdvisorError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;
