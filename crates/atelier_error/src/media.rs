//! Media ordering error types.

/// Specific error conditions when resolving media order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// A post would end up with no media at all
    #[display("Post must contain at least one media item")]
    EmptyPost,
    /// A media order reference could not be parsed
    #[display("Invalid media order reference '{}'", _0)]
    InvalidReference(String),
}

/// Media error with location tracking.
///
/// # Examples
///
/// ```
/// use atelier_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::EmptyPost);
/// assert!(format!("{}", err).contains("at least one media item"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &MediaErrorKind {
        &self.kind
    }
}
