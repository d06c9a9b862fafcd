//! Error types for the printer table core.
//!
//! - [`CsvError`] - reading and decoding a listing file
//! - [`ConfigError`] - bad month overrides or offsets
//! - [`PageError`] - top-level errors for the command-line renderer
//!
//! Rendering and IPv4 checks are total and never fail, so nothing here
//! covers them.

use thiserror::Error;

// =============================================================================
// CSV Reading Errors
// =============================================================================

/// Errors while reading a listing file.
#[derive(Debug, Error)]
pub enum CsvError {
    /// Failed to read file.
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    /// Bytes could not be decoded with the detected charset.
    #[error("Failed to decode content as {encoding}")]
    EncodingError { encoding: String },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors in naming configuration (month overrides, offsets).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Month override is not `MM-YYYY`.
    #[error("Invalid month '{0}', expected MM-YYYY")]
    InvalidMonth(String),

    /// Offset is not a whole number of days.
    #[error("Invalid day offset '{0}'")]
    InvalidOffset(String),

    /// Offset moves the date outside the supported calendar.
    #[error("Day offset {0} is out of range")]
    OffsetOutOfRange(i64),
}

// =============================================================================
// Page Errors (top-level)
// =============================================================================

/// Top-level errors for producing a rendered page from a file.
#[derive(Debug, Error)]
pub enum PageError {
    /// Listing file could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Naming configuration is invalid.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Output could not be written.
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Some checked values are not linkable IPv4 addresses.
    #[error("{0} value(s) are not linkable IPv4 addresses")]
    InvalidAddresses(usize),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV reading.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for configuration parsing.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for page production.
pub type PageResult<T> = Result<T, PageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_conversion_chain() {
        let config_err = ConfigError::InvalidMonth("13-2024".into());
        let page_err: PageError = config_err.into();
        assert!(page_err.to_string().contains("13-2024"));

        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let page_err: PageError = CsvError::from(io).into();
        assert!(page_err.to_string().starts_with("CSV error"));
        assert!(page_err.to_string().contains("gone"));
    }

    #[test]
    fn test_invalid_addresses_format() {
        let err = PageError::InvalidAddresses(2);
        assert_eq!(err.to_string(), "2 value(s) are not linkable IPv4 addresses");
    }

    #[test]
    fn test_encoding_error_format() {
        let err = CsvError::EncodingError {
            encoding: "shift_jis".into(),
        };
        assert_eq!(err.to_string(), "Failed to decode content as shift_jis");
    }
}
