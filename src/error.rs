use thiserror::Error;

/// Unified error type for frontkit operations
#[derive(Error, Debug)]
pub enum FrontkitError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Manifest error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Version error: {0}")]
    Version(String),

    #[error("Unsupported tag '{0}': expected the last five characters to be D.D.D")]
    UnsupportedTag(String),

    #[error("Scaffold error: {0}")]
    Scaffold(String),

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Release step failed: {0}")]
    Release(String),
}

/// Convenience type alias for Results in frontkit
pub type Result<T> = std::result::Result<T, FrontkitError>;

impl FrontkitError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        FrontkitError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        FrontkitError::Version(msg.into())
    }

    pub fn scaffold(msg: impl Into<String>) -> Self {
        FrontkitError::Scaffold(msg.into())
    }

    pub fn prompt(msg: impl Into<String>) -> Self {
        FrontkitError::Prompt(msg.into())
    }

    /// Create a release pipeline error with context
    pub fn release(msg: impl Into<String>) -> Self {
        FrontkitError::Release(msg.into())
    }
}
