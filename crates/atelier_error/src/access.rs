//! Access gate error types.

/// Specific access error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum AccessErrorKind {
    /// Viewer holds none of the roles the post requires
    #[display("Access denied to post {}: {}", post, reason)]
    Denied {
        /// Post identifier
        post: String,
        /// Reason for denial
        reason: String,
    },
}

/// Access error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Access Error: {} at line {} in {}", kind, line, file)]
pub struct AccessError {
    /// The specific error kind
    pub kind: AccessErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl AccessError {
    /// Create a new access error with location tracking.
    #[track_caller]
    pub fn new(kind: AccessErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AccessErrorKind {
        &self.kind
    }
}
