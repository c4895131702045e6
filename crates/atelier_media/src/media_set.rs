//! Registry and order sequence behind a single set of operations.

use crate::{
    CanonicalOrder, Direction, MediaItem, MediaRegistry, MediaToken, OrderSequence,
    PreviewProvider,
};
use atelier_core::{LocalFile, RemoteId, StoredMedia};
use std::sync::Arc;
use tracing::{debug, instrument};

/// The media of one editing session.
///
/// Every mutation updates the registry and the order sequence together, so a
/// token is live in the registry exactly when it is in the sequence.
/// Operations on unknown or already removed tokens are no-ops, which keeps
/// stale UI events (a drag payload for a deleted item, a double click on
/// delete) harmless.
///
/// # Examples
///
/// ```
/// use atelier_core::{LocalFile, MimeClass, RemoteId, StoredMedia};
/// use atelier_media::{EncodedRef, MediaSet, MediaToken, NoPreviews};
/// use std::sync::Arc;
///
/// let stored = [StoredMedia::new(1u64, MimeClass::Image, false)];
/// let mut media = MediaSet::seeded(&stored, Arc::new(NoPreviews));
///
/// let added = media.add_local(vec![
///     LocalFile::new("clip.mp4", "video/mp4", 10),
///     LocalFile::new("notes.txt", "text/plain", 10),
/// ]);
/// assert_eq!(added.len(), 1);
///
/// media.move_before(&added[0], &MediaToken::Remote(RemoteId(1)));
/// let order = media.to_canonical_encoding();
/// assert_eq!(
///     order.refs(),
///     &[EncodedRef::Local { batch_index: 0 }, EncodedRef::Remote { id: RemoteId(1) }]
/// );
/// ```
#[derive(Debug)]
pub struct MediaSet {
    registry: MediaRegistry,
    order: OrderSequence,
    local_added: usize,
}

impl MediaSet {
    /// Create an empty set (create mode).
    pub fn new(previews: Arc<dyn PreviewProvider>) -> Self {
        Self {
            registry: MediaRegistry::new(previews),
            order: OrderSequence::default(),
            local_added: 0,
        }
    }

    /// Create a set seeded with a post's stored media, in stored order
    /// (edit mode). Repeated ids are registered once.
    #[instrument(skip_all, fields(stored = stored.len()))]
    pub fn seeded(stored: &[StoredMedia], previews: Arc<dyn PreviewProvider>) -> Self {
        let mut set = Self::new(previews);
        let tokens: Vec<MediaToken> = stored
            .iter()
            .filter_map(|media| set.registry.seed_remote(media))
            .collect();
        set.order.append(tokens);
        debug!(live = set.registry.len(), "Seeded media set");
        set
    }

    /// Add local files, keeping only images and videos.
    ///
    /// Accepted files get fresh tokens, appended to the end of the order.
    /// Returns the new tokens in input order.
    #[instrument(skip_all)]
    pub fn add_local(&mut self, files: impl IntoIterator<Item = LocalFile>) -> Vec<MediaToken> {
        let tokens: Vec<MediaToken> = files
            .into_iter()
            .filter_map(|file| self.registry.insert_local(file))
            .collect();
        self.order.append(tokens.iter().copied());
        self.local_added += tokens.len();
        debug!(accepted = tokens.len(), "Added local files");
        tokens
    }

    /// Remove a stored item and remember its id for the backend.
    #[instrument(skip(self, token), fields(token = %token))]
    pub fn mark_remote_removed(&mut self, token: &MediaToken) {
        if self.registry.take_remote(token) {
            self.order.remove(token);
        }
    }

    /// Remove a local file. Nothing is remembered; the backend never saw it.
    #[instrument(skip(self, token), fields(token = %token))]
    pub fn remove_local(&mut self, token: &MediaToken) {
        if self.registry.take_local(token) {
            self.order.remove(token);
        }
    }

    /// Remove any item, dispatching on its origin.
    pub fn remove(&mut self, token: &MediaToken) {
        match token {
            MediaToken::Remote(_) => self.mark_remote_removed(token),
            MediaToken::Local(_) => self.remove_local(token),
        }
    }

    /// Swap an item with its neighbour.
    pub fn move_adjacent(&mut self, token: &MediaToken, direction: Direction) -> bool {
        self.order.move_adjacent(token, direction)
    }

    /// Move `source` directly in front of `target`.
    pub fn move_before(&mut self, source: &MediaToken, target: &MediaToken) -> bool {
        self.order.move_before(source, target)
    }

    /// Whether the token refers to a live item.
    pub fn is_live(&self, token: &MediaToken) -> bool {
        self.registry.is_live(token)
    }

    /// Look up a live item.
    pub fn get(&self, token: &MediaToken) -> Option<&MediaItem> {
        self.registry.get(token)
    }

    /// Live tokens in display order.
    pub fn tokens(&self) -> Vec<MediaToken> {
        self.order.live(&self.registry).collect()
    }

    /// Number of live items in the order.
    pub fn effective_count(&self) -> usize {
        self.order.effective_count(&self.registry)
    }

    /// How many local files were accepted over the session, including ones
    /// removed since.
    pub fn local_added(&self) -> usize {
        self.local_added
    }

    /// The item in the cover slot.
    pub fn cover(&self) -> Option<&MediaItem> {
        self.order
            .cover(&self.registry)
            .and_then(|token| self.registry.get(&token))
    }

    /// Whether the cover slot holds a video.
    pub fn cover_is_video(&self) -> bool {
        self.cover().is_some_and(|item| item.mime_class().is_video())
    }

    /// Remote ids removed this session.
    pub fn removed_remote_ids(&self) -> &[RemoteId] {
        self.registry.removed_remote_ids()
    }

    /// Encode the current order for submission. Does not mutate the set.
    pub fn to_canonical_encoding(&self) -> CanonicalOrder {
        self.order.to_canonical_encoding(&self.registry)
    }

    /// The underlying registry.
    pub fn registry(&self) -> &MediaRegistry {
        &self.registry
    }

    /// The underlying order sequence.
    pub fn order(&self) -> &OrderSequence {
        &self.order
    }

    /// Discard every item, releasing all previews.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.registry.clear();
        self.order = OrderSequence::default();
        self.local_added = 0;
        debug!("Media set reset");
    }
}
