//! Configuration for the blight CLI

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlightConfig {
    /// Input file locations
    #[serde(default)]
    pub paths: PathsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the CLI finds its inputs when no flag says otherwise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Rule book (JSON or YAML)
    #[serde(default = "default_rules_path")]
    pub rules: PathBuf,

    /// Field records (JSON or YAML)
    #[serde(default = "default_fields_path")]
    pub fields: PathBuf,

    /// Directory of `.txt` reference documents
    #[serde(default = "default_literature_dir")]
    pub literature: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            rules: default_rules_path(),
            fields: default_fields_path(),
            literature: default_literature_dir(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level, used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_rules_path() -> PathBuf {
    PathBuf::from("rules.yaml")
}

fn default_fields_path() -> PathBuf {
    PathBuf::from("fields.json")
}

fn default_literature_dir() -> PathBuf {
    PathBuf::from("literature")
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl BlightConfig {
    /// Load configuration: defaults, then the optional file, then `BLIGHT_*`
    /// environment variables.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        // Add default configuration
        builder = builder.add_source(config::Config::try_from(&BlightConfig::default())?);

        // Add file configuration if provided
        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        // Add environment variables with BLIGHT_ prefix
        builder = builder.add_source(
            config::Environment::with_prefix("BLIGHT")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
