//! Errors raised while assembling `atelier.toml` layers.

/// A configuration layer that could not be read, merged or deserialized.
///
/// Raised by `AtelierConfig` loading; a missing optional layer (home or
/// working directory) is skipped and never produces one.
///
/// # Examples
///
/// ```
/// use atelier_error::ConfigError;
///
/// let err = ConfigError::new("assets.blur: expected a string");
/// assert_eq!(err.message, "assets.blur: expected a string");
/// assert!(err.to_string().starts_with("Invalid atelier configuration: assets.blur"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Invalid atelier configuration: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What was wrong with the layer
    pub message: String,
    /// Line of the call that raised it
    pub line: u32,
    /// Source file of the call that raised it
    pub file: &'static str,
}

impl ConfigError {
    /// Record a configuration failure at the caller's location.
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
