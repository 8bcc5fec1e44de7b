//! Error handling for widetex pipelines
//!
//! This module provides a unified error type and result type for all
//! splitting and rendering operations.

use std::fmt;

/// Pipeline error type
#[derive(Debug, Clone)]
pub enum WideTableError {
    /// Invalid argument - a caller-supplied parameter is out of range
    InvalidArgument { message: String },
    /// Malformed markup - a rendered block is missing expected structure
    MalformedMarkup { message: String },
    /// Parse error - tabular input could not be parsed
    ParseError {
        message: String,
        line: Option<usize>,
    },
    /// IO error (for file operations)
    IoError { message: String },
}

impl fmt::Display for WideTableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WideTableError::InvalidArgument { message } => {
                write!(f, "Invalid argument: {}", message)
            }
            WideTableError::MalformedMarkup { message } => {
                write!(f, "Malformed markup: {}", message)
            }
            WideTableError::ParseError { message, line } => {
                if let Some(l) = line {
                    write!(f, "Parse error at line {}: {}", l, message)
                } else {
                    write!(f, "Parse error: {}", message)
                }
            }
            WideTableError::IoError { message } => {
                write!(f, "IO error: {}", message)
            }
        }
    }
}

impl std::error::Error for WideTableError {}

impl From<std::io::Error> for WideTableError {
    fn from(err: std::io::Error) -> Self {
        WideTableError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type for pipeline operations
pub type WideTableResult<T> = Result<T, WideTableError>;

// Convenience constructors for errors
impl WideTableError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        WideTableError::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn malformed_markup(message: impl Into<String>) -> Self {
        WideTableError::MalformedMarkup {
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        WideTableError::ParseError {
            message: message.into(),
            line: None,
        }
    }

    pub fn parse_at(message: impl Into<String>, line: usize) -> Self {
        WideTableError::ParseError {
            message: message.into(),
            line: Some(line),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = WideTableError::invalid_argument("column width must be positive");
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("column width"));
    }

    #[test]
    fn test_malformed_markup_display() {
        let err = WideTableError::malformed_markup("no \\toprule line in block 2");
        assert!(err.to_string().contains("Malformed markup"));
        assert!(err.to_string().contains("toprule"));
    }

    #[test]
    fn test_parse_error_with_location() {
        let err = WideTableError::parse_at("ragged record", 7);
        assert!(err.to_string().contains("line 7"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing.csv");
        let err: WideTableError = io.into();
        assert!(matches!(err, WideTableError::IoError { .. }));
    }
}
