//! Editor preference storage error types.

/// Kinds of preference storage errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PreferencesErrorKind {
    /// Failed to read the preferences file
    #[display("Failed to read preferences: {}", _0)]
    Read(String),
    /// Failed to write the preferences file
    #[display("Failed to write preferences: {}", _0)]
    Write(String),
    /// Preferences file exists but could not be parsed
    #[display("Failed to parse preferences: {}", _0)]
    Parse(String),
}

/// Preference storage error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Preferences Error: {} at line {} in {}", kind, line, file)]
pub struct PreferencesError {
    /// The kind of error that occurred
    pub kind: PreferencesErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PreferencesError {
    /// Create a new preferences error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PreferencesErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PreferencesErrorKind {
        &self.kind
    }
}

#[cfg(feature = "toml")]
impl From<toml::de::Error> for PreferencesError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        Self::new(PreferencesErrorKind::Parse(err.to_string()))
    }
}

#[cfg(feature = "toml")]
impl From<toml::ser::Error> for PreferencesError {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::new(PreferencesErrorKind::Write(err.to_string()))
    }
}
