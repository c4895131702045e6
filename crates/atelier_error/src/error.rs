//! Top-level error wrapper types.

use crate::{
    AccessError, ConfigError, IoError, JsonError, MediaError, PreferencesError, SubmissionError,
};

/// Every error condition the Atelier crates can surface.
///
/// # Examples
///
/// ```
/// use atelier_error::{AtelierError, ConfigError};
///
/// let config_err = ConfigError::new("Unreadable configuration");
/// let err: AtelierError = config_err.into();
/// assert!(format!("{}", err).contains("Invalid atelier configuration"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AtelierErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// File input error
    #[from(IoError)]
    Io(IoError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Media order resolution error
    #[from(MediaError)]
    Media(MediaError),
    /// Submission error
    #[from(SubmissionError)]
    Submission(SubmissionError),
    /// Access gate error
    #[from(AccessError)]
    Access(AccessError),
    /// Preference storage error
    #[from(PreferencesError)]
    Preferences(PreferencesError),
}

/// Atelier error with kind discrimination.
///
/// # Examples
///
/// ```
/// use atelier_error::{AtelierResult, MediaError, MediaErrorKind};
///
/// fn resolve() -> AtelierResult<()> {
///     Err(MediaError::new(MediaErrorKind::EmptyPost))?
/// }
///
/// assert!(resolve().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Atelier Error: {}", _0)]
pub struct AtelierError(Box<AtelierErrorKind>);

impl AtelierError {
    /// Create a new error from a kind.
    pub fn new(kind: AtelierErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AtelierErrorKind {
        &self.0
    }
}

impl<T> From<T> for AtelierError
where
    T: Into<AtelierErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Atelier operations.
pub type AtelierResult<T> = std::result::Result<T, AtelierError>;
