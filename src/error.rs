//! Unified error type for the minimizers library.
//!
//! Library code uses `MinimizerError` while CLI code uses `anyhow::Result`
//! for convenience.
//!
//! # Error Categories
//!
//! - **Config**: Invalid parameters (window size, divisibility, unknown names)
//! - **Invariant**: A scheme found no admissible substring in a window
//! - **OutOfRange**: Window too short, or an empty enumerator was queried
//! - **Io**: File system operations while loading input sequences
//! - **Format**: Unparseable sequence input

use std::fmt;
use std::path::PathBuf;

/// Unified error type for the minimizers library.
#[derive(Debug)]
pub enum MinimizerError {
    /// Misconfiguration detected at construction or formula-selection time.
    Config(String),

    /// A window violated a precondition the selection scheme relies on.
    Invariant {
        scheme: &'static str,
        detail: String,
    },

    /// An offset or length fell outside its allowed range.
    OutOfRange {
        context: String,
        limit: usize,
        actual: usize,
    },

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: std::io::Error,
    },

    /// Invalid sequence file contents.
    Format { path: PathBuf, detail: String },
}

impl fmt::Display for MinimizerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinimizerError::Config(msg) => write!(f, "Configuration error: {}", msg),
            MinimizerError::Invariant { scheme, detail } => {
                write!(f, "Invariant violated in {}: {}", scheme, detail)
            }
            MinimizerError::OutOfRange {
                context,
                limit,
                actual,
            } => {
                write!(
                    f,
                    "Out of range in {}: limit is {}, got {}",
                    context, limit, actual
                )
            }
            MinimizerError::Io {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "I/O error during {} on '{}': {}",
                    operation,
                    path.display(),
                    source
                )
            }
            MinimizerError::Format { path, detail } => {
                write!(f, "Invalid format in '{}': {}", path.display(), detail)
            }
        }
    }
}

impl std::error::Error for MinimizerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MinimizerError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MinimizerError {
    fn from(err: std::io::Error) -> Self {
        MinimizerError::Io {
            path: PathBuf::new(),
            operation: "unknown",
            source: err,
        }
    }
}

/// Convenience type alias for Results using MinimizerError.
pub type Result<T> = std::result::Result<T, MinimizerError>;

// ============================================================================
// Helper constructors
// ============================================================================

impl MinimizerError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        MinimizerError::Config(msg.into())
    }

    /// Create an invariant violation for the named scheme.
    pub fn invariant(scheme: &'static str, detail: impl Into<String>) -> Self {
        MinimizerError::Invariant {
            scheme,
            detail: detail.into(),
        }
    }

    /// Create an out-of-range error.
    pub fn out_of_range(context: impl Into<String>, limit: usize, actual: usize) -> Self {
        MinimizerError::OutOfRange {
            context: context.into(),
            limit,
            actual,
        }
    }

    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, operation: &'static str, source: std::io::Error) -> Self {
        MinimizerError::Io {
            path: path.into(),
            operation,
            source,
        }
    }

    /// Create a format error.
    pub fn format(path: impl Into<PathBuf>, detail: impl Into<String>) -> Self {
        MinimizerError::Format {
            path: path.into(),
            detail: detail.into(),
        }
    }

    /// True for errors caused by the caller's parameters rather than the data.
    pub fn is_config(&self) -> bool {
        matches!(self, MinimizerError::Config(_))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MinimizerError::config("k must be divisible by w");
        assert!(err.to_string().contains("k must be divisible by w"));
        assert!(err.is_config());
    }

    #[test]
    fn test_invariant_error_display() {
        let err = MinimizerError::invariant("rotational_orig", "no k-mer in restricted set");
        let msg = err.to_string();
        assert!(msg.contains("rotational_orig"));
        assert!(msg.contains("no k-mer in restricted set"));
        assert!(!err.is_config());
    }

    #[test]
    fn test_out_of_range_display() {
        let err = MinimizerError::out_of_range("window length", 8, 5);
        let msg = err.to_string();
        assert!(msg.contains("window length"));
        assert!(msg.contains('8'));
        assert!(msg.contains('5'));
    }

    #[test]
    fn test_io_error_display() {
        let err = MinimizerError::io(
            "/path/to/reads.fa",
            "open",
            std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/path/to/reads.fa"));
        assert!(msg.contains("open"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_format_error_display() {
        let err = MinimizerError::format("/path/to/reads.fa", "missing header");
        let msg = err.to_string();
        assert!(msg.contains("/path/to/reads.fa"));
        assert!(msg.contains("missing header"));
    }

    #[test]
    fn test_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err = MinimizerError::io("/path", "open", io_err);
        assert!(std::error::Error::source(&err).is_some());

        let err = MinimizerError::config("bad");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: MinimizerError = io_err.into();

        match err {
            MinimizerError::Io { operation, .. } => assert_eq!(operation, "unknown"),
            _ => panic!("Expected Io variant"),
        }
    }
}
