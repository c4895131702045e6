//! Submission error types.

/// Why a submission did not go through.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum SubmissionErrorKind {
    /// The session does not satisfy submit eligibility
    #[display("Submission not allowed: {}", _0)]
    NotEligible(String),
    /// The handler received the payload and refused it
    #[display("Submission rejected ({}): {}", status, message)]
    Rejected {
        /// Status code reported by the handler
        status: u16,
        /// Message reported by the handler
        message: String,
    },
    /// The payload never reached the handler
    #[display("Submission transport failed: {}", _0)]
    Transport(String),
}

/// Submission error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Submission Error: {} at line {} in {}", kind, line, file)]
pub struct SubmissionError {
    /// The kind of error that occurred
    pub kind: SubmissionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl SubmissionError {
    /// Create a new submission error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: SubmissionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &SubmissionErrorKind {
        &self.kind
    }
}
