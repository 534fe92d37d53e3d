//! Error types for rendering and analysis.

use thiserror::Error;

/// Errors raised while configuring or running a consumer.
#[derive(Debug, Error)]
pub enum ArtError {
    /// A setting was outside its valid range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Writing to the output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ArtError::InvalidParameter {
            name: "width",
            value: "must be positive".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid parameter 'width': must be positive");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err: ArtError = io.into();
        assert!(matches!(err, ArtError::Io(_)));
        assert_eq!(err.to_string(), "Output error: closed");
    }
}
