use thiserror::Error;

/// Unified error type for release-toolkit operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Encoding overflow: {field} value {value} does not fit in {width} digit(s)")]
    EncodingOverflow {
        field: &'static str,
        value: u32,
        width: usize,
    },

    #[error("Invalid build code: {0}")]
    InvalidBuildCode(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Interaction failed: {0}")]
    Interaction(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-toolkit
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a version parsing error for the offending input
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid state error with context
    pub fn invalid_state(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidState(msg.into())
    }

    /// Create an overflow error for a field that exceeds its digit width
    pub fn overflow(field: &'static str, value: u32, width: usize) -> Self {
        ReleaseError::EncodingOverflow {
            field,
            value,
            width,
        }
    }

    /// Create a build code error with context
    pub fn build_code(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidBuildCode(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create an interaction error with context
    pub fn interaction(msg: impl Into<String>) -> Self {
        ReleaseError::Interaction(msg.into())
    }

    /// The offending input, when this is a version parsing error
    pub fn offending_input(&self) -> Option<&str> {
        match self {
            ReleaseError::InvalidVersion { input, .. } => Some(input),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_invalid_version_carries_input() {
        let err = ReleaseError::invalid_version("trunk", "no numeric components");
        assert_eq!(err.offending_input(), Some("trunk"));
        assert_eq!(
            err.to_string(),
            "Invalid version 'trunk': no numeric components"
        );
    }

    #[test]
    fn test_overflow_display() {
        let err = ReleaseError::overflow("minor", 123, 2);
        assert_eq!(
            err.to_string(),
            "Encoding overflow: minor value 123 does not fit in 2 digit(s)"
        );
        assert_eq!(err.offending_input(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::invalid_version("x", "y"), "Invalid version"),
            (ReleaseError::invalid_state("x"), "Invalid state"),
            (ReleaseError::build_code("x"), "Invalid build code"),
            (ReleaseError::interaction("x"), "Interaction failed"),
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
}
