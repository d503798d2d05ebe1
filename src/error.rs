use thiserror::Error;

/// Unified error type for drafterino operations
#[derive(Error, Debug)]
pub enum DrafterError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid previous version: {0}")]
    InvalidVersion(String),

    #[error("Unknown bump type: {0}")]
    UnknownBumpCategory(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Hosting API request failed: {0}")]
    Hosting(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in drafterino
pub type Result<T> = std::result::Result<T, DrafterError>;

impl DrafterError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        DrafterError::Config(msg.into())
    }

    /// Create a version error with context
    pub fn invalid_version(msg: impl Into<String>) -> Self {
        DrafterError::InvalidVersion(msg.into())
    }

    /// Create an unknown bump category error
    pub fn unknown_bump(category: impl Into<String>) -> Self {
        DrafterError::UnknownBumpCategory(category.into())
    }

    /// Create a hosting API error with context
    pub fn hosting(msg: impl Into<String>) -> Self {
        DrafterError::Hosting(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DrafterError::config("CONFIG is empty");
        assert_eq!(err.to_string(), "Configuration error: CONFIG is empty");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: DrafterError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (DrafterError::config("x"), "Configuration error"),
            (DrafterError::invalid_version("x"), "Invalid previous version"),
            (DrafterError::unknown_bump("x"), "Unknown bump type"),
            (DrafterError::hosting("x"), "Hosting API request failed"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_unknown_bump_keeps_category_name() {
        let err = DrafterError::unknown_bump("hotfix");
        assert_eq!(err.to_string(), "Unknown bump type: hotfix");
    }
}
