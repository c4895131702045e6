//! Backend-facing encoding of the final media order.
//!
//! The final order freely interleaves stored and new media, but the backend
//! receives new files as a separate upload batch. Each reference therefore
//! lives in one of two namespaces: a stored item's id, or a file's position
//! within the upload batch.
//!
//! On the wire the order travels as a comma-separated form field, for example
//! `e:2,n:0,n:1`.

use atelier_core::{LocalFile, RemoteId};
use atelier_error::{MediaError, MediaErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One entry of the canonical order.
///
/// # Examples
///
/// ```
/// use atelier_core::RemoteId;
/// use atelier_media::EncodedRef;
///
/// let remote = EncodedRef::Remote { id: RemoteId(2) };
/// assert_eq!(remote.to_string(), "e:2");
/// assert_eq!("n:0".parse::<EncodedRef>().unwrap(), EncodedRef::Local { batch_index: 0 });
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EncodedRef {
    /// Keep the stored item with this id at this position
    #[display("e:{}", id)]
    Remote {
        /// Stored item id
        id: RemoteId,
    },
    /// Place the uploaded file at this batch position here
    #[display("n:{}", batch_index)]
    Local {
        /// Zero-based position within the upload batch
        #[serde(rename = "batchIndex")]
        batch_index: usize,
    },
}

impl FromStr for EncodedRef {
    type Err = MediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || MediaError::new(MediaErrorKind::InvalidReference(trimmed.to_string()));

        if let Some(raw) = trimmed.strip_prefix("e:") {
            let id = raw.trim().parse::<u64>().map_err(|_| invalid())?;
            Ok(EncodedRef::Remote { id: RemoteId(id) })
        } else if let Some(raw) = trimmed.strip_prefix("n:") {
            let batch_index = raw.trim().parse::<usize>().map_err(|_| invalid())?;
            Ok(EncodedRef::Local { batch_index })
        } else {
            Err(invalid())
        }
    }
}

/// Join references into the wire form.
pub fn to_wire(refs: &[EncodedRef]) -> String {
    refs.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse the wire form, skipping blank and malformed entries the way the
/// receiving handler does.
pub fn parse_wire(wire: &str) -> Vec<EncodedRef> {
    wire.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter_map(|entry| entry.parse().ok())
        .collect()
}

/// Snapshot of the final media order ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct CanonicalOrder {
    /// References in final display order.
    refs: Vec<EncodedRef>,
    /// Local files in upload batch order; `Local { batch_index }` indexes
    /// into this list.
    local_files: Vec<LocalFile>,
}

impl CanonicalOrder {
    pub(crate) fn new(refs: Vec<EncodedRef>, local_files: Vec<LocalFile>) -> Self {
        Self { refs, local_files }
    }

    /// The order in wire form.
    pub fn wire(&self) -> String {
        to_wire(&self.refs)
    }

    /// Split into references and batch files.
    pub fn into_parts(self) -> (Vec<EncodedRef>, Vec<LocalFile>) {
        (self.refs, self.local_files)
    }
}
