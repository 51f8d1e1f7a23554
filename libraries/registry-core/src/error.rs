/// Core error types for the user registry
use thiserror::Error;

/// Result type alias using `RegistryError`
pub type Result<T> = std::result::Result<T, RegistryError>;

/// Core error type for the user registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required value was absent or blank
    #[error("Missing parameter: {0}")]
    MissingParameter(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Username already taken
    #[error("Duplicate entry: {0}")]
    Duplicate(String),
}

impl RegistryError {
    /// Create a missing parameter error
    pub fn missing(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }
}
