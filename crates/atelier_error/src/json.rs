//! Errors for JSON documents: post files read by the CLI and placements it prints.

/// A post or placement document that could not be read from or written to
/// JSON.
///
/// # Examples
///
/// ```
/// use atelier_error::JsonError;
///
/// let err = JsonError::new("missing field `authorId`");
/// assert!(err.to_string().starts_with("JSON document rejected: missing field `authorId`"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON document rejected: {} at line {} in {}", message, line, file)]
pub struct JsonError {
    /// Parser or serializer detail
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl JsonError {
    /// Record a JSON failure at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for JsonError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        Self::new(format!("{:?}: {}", err.classify(), err))
    }
}
