//! Temporary display resources for local files.

use atelier_core::LocalFile;

/// A temporary display handle created from a local file, such as an object
/// URL.
///
/// Handles are neither `Clone` nor `Copy`: releasing one consumes it, so a
/// handle can be released at most once.
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct PreviewHandle {
    url: String,
}

impl PreviewHandle {
    /// Wrap a display URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// The display URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Creates and releases preview handles.
///
/// The editor calls [`PreviewProvider::release`] exactly once for every
/// handle it obtained, when the owning item is removed or the session is torn
/// down.
pub trait PreviewProvider: Send + Sync {
    /// Create a preview for a file, or `None` when previews are unavailable.
    fn create(&self, file: &LocalFile) -> Option<PreviewHandle>;

    /// Release a preview created by this provider.
    fn release(&self, handle: PreviewHandle);
}

/// Provider for headless use: never creates previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPreviews;

impl PreviewProvider for NoPreviews {
    fn create(&self, _file: &LocalFile) -> Option<PreviewHandle> {
        None
    }

    fn release(&self, _handle: PreviewHandle) {}
}
