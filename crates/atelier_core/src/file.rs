//! Locally selected files that have not been uploaded yet.

use crate::MimeClass;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file the author picked or dropped into the editor.
///
/// The editor treats this as an opaque handle: it never reads the bytes,
/// only the declared MIME type decides whether the file is accepted.
///
/// # Examples
///
/// ```
/// use atelier_core::{LocalFileBuilder, MimeClass};
///
/// let file = LocalFileBuilder::default()
///     .name("cover.png")
///     .mime("image/png")
///     .size_bytes(2048u64)
///     .build()
///     .unwrap();
///
/// assert_eq!(file.mime_class(), Some(MimeClass::Image));
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct LocalFile {
    /// File name as reported by the picker.
    name: String,

    /// Declared MIME type.
    mime: String,

    /// Size in bytes.
    #[builder(default)]
    #[serde(default)]
    size_bytes: u64,

    /// Location on disk, when the file came from one.
    #[builder(default)]
    #[serde(default)]
    path: Option<PathBuf>,
}

impl LocalFile {
    /// Create a file handle without a backing path.
    pub fn new(name: impl Into<String>, mime: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            mime: mime.into(),
            size_bytes,
            path: None,
        }
    }

    /// Coarse media class of this file, `None` when it is neither image nor video.
    pub fn mime_class(&self) -> Option<MimeClass> {
        MimeClass::from_mime(&self.mime)
    }
}
