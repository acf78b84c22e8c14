// file: src/error.rs
// version: 1.0.0
// guid: 3f1c9a52-7d4e-4b8a-9e21-6c0d5b7a8f14

use thiserror::Error;

/// Result type alias for the application
pub type Result<T> = std::result::Result<T, AppError>;

/// Text shown when a failure has no usable description
pub const UNKNOWN_FAILURE: &str = "An unknown error occurred.";

/// Text shown when the command runs without a selected file
pub const MISSING_INPUT: &str = "No image file selected.";

/// Outcome of a failed conversion
///
/// `Display` renders the failure description only; [`ConvertError::user_message`]
/// renders the full text surfaced to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    #[error("{}", MISSING_INPUT)]
    MissingInput,

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("{0}")]
    Launch(String),

    #[error("{0}")]
    ScriptReported(String),

    #[error("{}", UNKNOWN_FAILURE)]
    Unknown,
}

impl ConvertError {
    /// Create a new configuration error
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Message shown to the user for this failure
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingInput => MISSING_INPUT.to_string(),
            other => format!("Conversion failed: {}", other),
        }
    }
}

/// Failure reported by a process runner
#[derive(Error, Debug)]
pub enum RunError {
    /// The process could not be started
    #[error("{0}")]
    Launch(#[from] std::io::Error),

    /// The runner failed with a describable error
    #[error("{0}")]
    Failed(String),

    /// The runner failed with a value that carries no description
    #[error("opaque runner failure")]
    Opaque,
}

impl From<RunError> for ConvertError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Launch(e) => ConvertError::Launch(e.to_string()),
            RunError::Failed(msg) => ConvertError::Launch(msg),
            RunError::Opaque => ConvertError::Unknown,
        }
    }
}

/// Command registry errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command already registered: {0}")]
    Duplicate(String),

    #[error("command not found: {0}")]
    Unknown(String),
}

/// Host-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl AppError {
    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new logging error
    pub fn logging(msg: impl Into<String>) -> Self {
        Self::Logging(msg.into())
    }
}
