//! Error types for the plugin

use thiserror::Error;

/// Result type alias for plugin operations
pub type Result<T> = std::result::Result<T, PluginError>;

/// Main error type for plugin operations
///
/// Missing data is never an error here: lookups report it as `None`. Only
/// genuine operational failures and malformed invocations end up in this type.
#[derive(Error, Debug)]
pub enum PluginError {
    /// Operating system failure, passed through unchanged
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Function invoked with the wrong number of arguments
    #[error("{function} expects {expected} argument(s), got {got}")]
    Arity {
        /// Function key
        function: String,
        /// Declared arity
        expected: usize,
        /// Number of arguments supplied
        got: usize,
    },

    /// Function argument had the wrong shape
    #[error("{function}: argument {index} must be a {expected}, got {got}")]
    ArgumentType {
        /// Function key
        function: String,
        /// Zero-based argument position
        index: usize,
        /// Expected value kind
        expected: &'static str,
        /// Supplied value kind
        got: &'static str,
    },

    /// Host supplied an unusable configuration block
    #[error("Invalid plugin configuration: {0}")]
    Config(String),

    /// Configuration block given as text was not JSON
    #[error("Host configuration is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PluginError {
    /// Create a configuration error with context
    pub fn config<S: Into<String>>(msg: S) -> Self {
        PluginError::Config(msg.into())
    }

    /// Whether this error came straight from the operating system
    pub fn is_io(&self) -> bool {
        matches!(self, PluginError::Io(_))
    }
}
