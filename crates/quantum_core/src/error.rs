//! Error types for stream configuration.
//!
//! Construction and sampling are total once parameters are valid, so the
//! only failures live at parameter build time.

use thiserror::Error;

/// Configuration error for stream parameters.
///
/// # Examples
/// ```
/// use quantum_core::ConfigError;
///
/// let err = ConfigError::ZeroSize { name: "universes" };
/// assert_eq!(format!("{}", err), "Invalid size 'universes': must be positive");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A table size constant was zero.
    #[error("Invalid size '{name}': must be positive")]
    ZeroSize {
        /// Name of the offending constant.
        name: &'static str,
    },

    /// A reduction constant was out of range.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_size_display() {
        let err = ConfigError::ZeroSize { name: "samples" };
        assert_eq!(err.to_string(), "Invalid size 'samples': must be positive");
    }

    #[test]
    fn test_invalid_parameter_display() {
        let err = ConfigError::InvalidParameter {
            name: "sample_stride",
            value: "must be positive".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'sample_stride': must be positive"
        );
    }
}
