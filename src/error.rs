//! Error types for afinidad operations.
//!
//! Loading and lookup failures abort the pipeline. An uncomputable
//! correlation is not an error at all: it surfaces as `None` and is
//! filtered downstream.

use std::fmt;

/// Main error type for afinidad operations.
///
/// Covers malformed input records, missing matrix columns, dimension
/// mismatches between paired samples, and I/O failures.
///
/// # Examples
///
/// ```
/// use afinidad::error::AfinidadError;
///
/// let err = AfinidadError::FormatError {
///     line: 12,
///     message: "invalid digit found in string".to_string(),
/// };
/// assert!(err.to_string().contains("line 12"));
/// ```
#[derive(Debug)]
pub enum AfinidadError {
    /// Input row could not be decoded into the expected columns.
    FormatError {
        /// 1-based line number of the offending record (0 if unknown)
        line: usize,
        /// Decoder error description
        message: String,
    },

    /// Requested title has no column in the rating matrix.
    MissingColumn {
        /// The title that was looked up
        title: String,
    },

    /// Paired samples have incompatible lengths.
    DimensionMismatch {
        /// Expected length description
        expected: String,
        /// Actual length found
        actual: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for AfinidadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AfinidadError::FormatError { line, message } => {
                if *line == 0 {
                    write!(f, "Malformed record: {message}")
                } else {
                    write!(f, "Malformed record on line {line}: {message}")
                }
            }
            AfinidadError::MissingColumn { title } => {
                write!(f, "No rating column for title: {title:?}")
            }
            AfinidadError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {expected}, got {actual}")
            }
            AfinidadError::Io(e) => write!(f, "I/O error: {e}"),
            AfinidadError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for AfinidadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AfinidadError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for AfinidadError {
    fn from(err: std::io::Error) -> Self {
        AfinidadError::Io(err)
    }
}

impl From<csv::Error> for AfinidadError {
    fn from(err: csv::Error) -> Self {
        let line_of = |pos: &Option<csv::Position>| {
            pos.as_ref()
                .map_or(0, |p| usize::try_from(p.line()).unwrap_or(0))
        };
        match err.into_kind() {
            csv::ErrorKind::Io(e) => AfinidadError::Io(e),
            csv::ErrorKind::Deserialize { pos, err } => AfinidadError::FormatError {
                line: line_of(&pos),
                message: err.to_string(),
            },
            csv::ErrorKind::UnequalLengths {
                pos,
                expected_len,
                len,
            } => AfinidadError::FormatError {
                line: line_of(&pos),
                message: format!("expected {expected_len} fields, got {len}"),
            },
            other => AfinidadError::FormatError {
                line: 0,
                message: format!("{other:?}"),
            },
        }
    }
}

impl From<&str> for AfinidadError {
    fn from(msg: &str) -> Self {
        AfinidadError::Other(msg.to_string())
    }
}

impl From<String> for AfinidadError {
    fn from(msg: String) -> Self {
        AfinidadError::Other(msg)
    }
}

impl AfinidadError {
    /// Create a dimension mismatch error with descriptive context
    #[must_use]
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::DimensionMismatch {
            expected: format!("{context}={expected}"),
            actual: format!("{actual}"),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::Other(format!("empty input: {context}"))
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, AfinidadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_display() {
        let err = AfinidadError::FormatError {
            line: 7,
            message: "invalid digit found in string".to_string(),
        };
        assert!(err.to_string().contains("line 7"));
        assert!(err.to_string().contains("invalid digit"));
    }

    #[test]
    fn test_format_error_unknown_line() {
        let err = AfinidadError::FormatError {
            line: 0,
            message: "truncated record".to_string(),
        };
        let msg = err.to_string();
        assert!(!msg.contains("line"));
        assert!(msg.contains("truncated record"));
    }

    #[test]
    fn test_missing_column_display() {
        let err = AfinidadError::MissingColumn {
            title: "Star Wars (1977)".to_string(),
        };
        assert!(err.to_string().contains("Star Wars (1977)"));
        assert!(err.to_string().contains("No rating column"));
    }

    #[test]
    fn test_dimension_mismatch_display() {
        let err = AfinidadError::DimensionMismatch {
            expected: "4".to_string(),
            actual: "3".to_string(),
        };
        assert!(err.to_string().contains("Dimension mismatch"));
    }

    #[test]
    fn test_from_str() {
        let err: AfinidadError = "test error".into();
        assert!(matches!(err, AfinidadError::Other(_)));
        assert_eq!(err.to_string(), "test error");
    }

    #[test]
    fn test_from_string() {
        let err: AfinidadError = "test error".to_string().into();
        assert!(matches!(err, AfinidadError::Other(_)));
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: AfinidadError = io_err.into();
        assert!(matches!(err, AfinidadError::Io(_)));
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_source_io() {
        use std::error::Error;
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = AfinidadError::Io(io_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_error_source_other() {
        use std::error::Error;
        let err = AfinidadError::Other("test".to_string());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_dimension_mismatch_helper() {
        let err = AfinidadError::dimension_mismatch("values in x", 4, 3);
        let msg = err.to_string();
        assert!(msg.contains("values in x=4"));
        assert!(msg.contains('3'));
    }

    #[test]
    fn test_empty_input_helper() {
        let err = AfinidadError::empty_input("rating records");
        let msg = err.to_string();
        assert!(msg.contains("empty input"));
        assert!(msg.contains("rating records"));
    }
}
