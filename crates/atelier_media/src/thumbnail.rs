//! Thumbnail selection, kept apart from the ordered media.

use crate::{PreviewHandle, PreviewProvider};
use atelier_core::{LocalFile, MimeClass};
use std::sync::Arc;
use tracing::debug;

/// What will happen to the cover thumbnail on submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ThumbnailSelection {
    /// Leave whatever the backend stores (possibly nothing)
    Existing,
    /// The author removed the stored thumbnail
    Cleared,
    /// Upload this file as the new thumbnail
    Replaced(LocalFile),
}

/// Holds the thumbnail selection and its preview.
pub struct ThumbnailSlot {
    selection: ThumbnailSelection,
    has_stored: bool,
    cleared_stored: bool,
    preview: Option<PreviewHandle>,
    previews: Arc<dyn PreviewProvider>,
}

impl std::fmt::Debug for ThumbnailSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThumbnailSlot")
            .field("selection", &self.selection)
            .field("has_stored", &self.has_stored)
            .field("cleared_stored", &self.cleared_stored)
            .field("preview", &self.preview)
            .finish()
    }
}

impl ThumbnailSlot {
    /// Create a slot. `has_stored` tells whether the post already has a
    /// thumbnail.
    pub fn new(has_stored: bool, previews: Arc<dyn PreviewProvider>) -> Self {
        Self {
            selection: ThumbnailSelection::Existing,
            has_stored,
            cleared_stored: false,
            preview: None,
            previews,
        }
    }

    /// Current selection.
    pub fn selection(&self) -> &ThumbnailSelection {
        &self.selection
    }

    /// Preview of a replacement file, if any.
    pub fn preview(&self) -> Option<&PreviewHandle> {
        self.preview.as_ref()
    }

    /// The replacement file, if one is picked.
    pub fn replacement(&self) -> Option<&LocalFile> {
        match &self.selection {
            ThumbnailSelection::Replaced(file) => Some(file),
            _ => None,
        }
    }

    /// Pick a replacement thumbnail. Only images are accepted; anything else
    /// is ignored and returns `false`.
    pub fn pick(&mut self, file: LocalFile) -> bool {
        if file.mime_class() != Some(MimeClass::Image) {
            debug!(name = %file.name(), "Ignoring non-image thumbnail");
            return false;
        }
        self.release_preview();
        self.preview = self.previews.create(&file);
        self.selection = ThumbnailSelection::Replaced(file);
        true
    }

    /// Remove the current thumbnail.
    ///
    /// Removing a picked replacement falls back to the stored thumbnail,
    /// unless that was removed earlier. Removing the stored thumbnail marks
    /// it cleared.
    pub fn remove(&mut self) {
        self.release_preview();
        if matches!(self.selection, ThumbnailSelection::Existing) && self.has_stored {
            self.cleared_stored = true;
        }
        self.selection = if self.cleared_stored {
            ThumbnailSelection::Cleared
        } else {
            ThumbnailSelection::Existing
        };
    }

    /// Whether the submission must ask the backend to drop its thumbnail.
    pub fn clear_requested(&self) -> bool {
        matches!(self.selection, ThumbnailSelection::Cleared)
    }

    /// Forget the selection, releasing any preview.
    pub fn reset(&mut self) {
        self.release_preview();
        self.selection = ThumbnailSelection::Existing;
        self.cleared_stored = false;
    }

    fn release_preview(&mut self) {
        if let Some(handle) = self.preview.take() {
            self.previews.release(handle);
        }
    }
}

impl Drop for ThumbnailSlot {
    fn drop(&mut self) {
        self.release_preview();
    }
}
