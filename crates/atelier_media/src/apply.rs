//! Receiving side of the canonical order: placing stored and uploaded media.

use crate::EncodedRef;
use atelier_core::RemoteId;
use atelier_error::{MediaError, MediaErrorKind};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, instrument};

/// One slot of a post's final media list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlacedMedia {
    /// Stored item kept as is
    Existing {
        /// Stored id
        id: RemoteId,
    },
    /// File from the upload batch
    Uploaded {
        /// Position in the upload batch
        #[serde(rename = "batchIndex")]
        batch_index: usize,
    },
}

/// Resolve a submitted order against what the backend stores.
///
/// References to removed, unknown or already placed items are skipped, as
/// are batch indices outside the upload batch. Stored items the order never
/// mentions keep their stored order after the mentioned ones, followed by
/// unmentioned uploads in batch order.
///
/// # Errors
///
/// Returns [`MediaErrorKind::EmptyPost`] when nothing is left to place.
///
/// # Examples
///
/// ```
/// use atelier_core::RemoteId;
/// use atelier_media::{apply_media_order, parse_wire, PlacedMedia};
///
/// let existing = [RemoteId(1), RemoteId(2), RemoteId(3)];
/// let placed = apply_media_order(&existing, &[RemoteId(1)], 1, &parse_wire("n:0,e:3")).unwrap();
/// assert_eq!(
///     placed,
///     vec![
///         PlacedMedia::Uploaded { batch_index: 0 },
///         PlacedMedia::Existing { id: RemoteId(3) },
///         PlacedMedia::Existing { id: RemoteId(2) },
///     ]
/// );
/// ```
#[instrument(skip_all, fields(existing = existing.len(), removed = removed.len(), new_count, refs = order.len()))]
pub fn apply_media_order(
    existing: &[RemoteId],
    removed: &[RemoteId],
    new_count: usize,
    order: &[EncodedRef],
) -> Result<Vec<PlacedMedia>, MediaError> {
    let removed: HashSet<RemoteId> = removed.iter().copied().collect();
    let kept: HashSet<RemoteId> = existing
        .iter()
        .copied()
        .filter(|id| !removed.contains(id))
        .collect();

    let mut placed = Vec::with_capacity(kept.len() + new_count);
    let mut used_remote = HashSet::new();
    let mut used_local = HashSet::new();

    for reference in order {
        match *reference {
            EncodedRef::Remote { id } => {
                if kept.contains(&id) && used_remote.insert(id) {
                    placed.push(PlacedMedia::Existing { id });
                } else {
                    debug!(%id, "Skipping stored reference");
                }
            }
            EncodedRef::Local { batch_index } => {
                if batch_index < new_count && used_local.insert(batch_index) {
                    placed.push(PlacedMedia::Uploaded { batch_index });
                } else {
                    debug!(batch_index, "Skipping upload reference");
                }
            }
        }
    }

    for &id in existing {
        if kept.contains(&id) && used_remote.insert(id) {
            placed.push(PlacedMedia::Existing { id });
        }
    }
    for batch_index in 0..new_count {
        if used_local.insert(batch_index) {
            placed.push(PlacedMedia::Uploaded { batch_index });
        }
    }

    if placed.is_empty() {
        return Err(MediaError::new(MediaErrorKind::EmptyPost));
    }
    debug!(placed = placed.len(), "Resolved media order");
    Ok(placed)
}
