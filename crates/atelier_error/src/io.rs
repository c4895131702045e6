//! File input error types.

/// Kinds of file input errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum IoErrorKind {
    /// No file at the given path
    #[display("File not found: {}", _0)]
    NotFound(String),
    /// The file exists but could not be read
    #[display("Failed to read file: {}", _0)]
    Read(String),
}

/// File input error with location tracking.
///
/// Covers getting the bytes off disk; parsing them is a
/// [`JsonError`](crate::JsonError).
///
/// # Examples
///
/// ```
/// use atelier_error::{IoError, IoErrorKind};
///
/// let err = IoError::new(IoErrorKind::NotFound("posts/21.json".to_string()));
/// assert!(format!("{}", err).contains("File not found: posts/21.json"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("IO Error: {} at line {} in {}", kind, line, file)]
pub struct IoError {
    /// The kind of error that occurred
    pub kind: IoErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IoError {
    /// Create a new IO error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IoErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Classify a failed read of `path`.
    #[track_caller]
    pub fn read(path: &std::path::Path, err: &std::io::Error) -> Self {
        let detail = format!("{}: {}", path.display(), err);
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::new(IoErrorKind::NotFound(detail)),
            _ => Self::new(IoErrorKind::Read(detail)),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &IoErrorKind {
        &self.kind
    }
}
