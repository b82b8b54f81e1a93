//! Errors raised while loading and checking plugin-demo configuration

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Why a configuration could not be used
#[derive(Error, Debug)]
pub enum ConfigError {
    /// `output.format`, `--format` or `PLUGIN_DEMO_OUTPUT_FORMAT` named no known format
    #[error("Unknown output format '{0}' (expected json, yaml or text)")]
    UnknownFormat(String),

    /// The file parsed but breaks a rule (version, empty import name)
    #[error("Invalid plugin-demo configuration: {0}")]
    Invalid(String),

    /// A field or override holds a value outside its allowed set
    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    /// The plugin's `configure` hook refused the `host` block
    #[error("Plugin rejected the host block: {0}")]
    HostRejected(#[from] plugin_demo::PluginError),

    /// Two configurations with different versions cannot be merged
    #[error("Cannot merge config version {found} into version {expected}")]
    VersionMismatch { expected: String, found: String },

    #[error("No configuration file at {0}")]
    NotFound(String),

    #[error("Config files must end in .yaml, .yml or .json: {0}")]
    UnsupportedFile(String),

    #[error("Cannot access configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Malformed JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
