//! Registry of candidate media items and their tokens.

use crate::{LocalKey, MediaToken, PreviewHandle, PreviewProvider};
use atelier_core::{LocalFile, MimeClass, RemoteId, StoredMedia};
use derive_getters::Getters;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Whether an item is a new local file or already stored remotely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Origin {
    /// Selected during this session, not uploaded yet
    #[display("local")]
    Local,
    /// Already stored by the backend
    #[display("remote")]
    Remote,
}

/// A file selected during the session.
#[derive(Debug, Getters)]
pub struct LocalMedia {
    /// The file handle.
    file: LocalFile,
    /// Image or video.
    mime_class: MimeClass,
    /// Display handle, released when the item leaves the registry.
    preview: Option<PreviewHandle>,
}

/// An item seeded from the post being edited.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct RemoteMedia {
    /// Backend identifier.
    id: RemoteId,
    /// Image or video.
    mime_class: MimeClass,
    /// Whether a dedicated thumbnail is stored.
    has_thumbnail: bool,
}

/// One candidate media item.
#[derive(Debug)]
pub enum MediaItem {
    /// New local file
    Local(LocalMedia),
    /// Stored remote item
    Remote(RemoteMedia),
}

impl MediaItem {
    /// Where the item lives.
    pub fn origin(&self) -> Origin {
        match self {
            MediaItem::Local(_) => Origin::Local,
            MediaItem::Remote(_) => Origin::Remote,
        }
    }

    /// Image or video.
    pub fn mime_class(&self) -> MimeClass {
        match self {
            MediaItem::Local(local) => local.mime_class,
            MediaItem::Remote(remote) => remote.mime_class,
        }
    }
}

/// Owns every live media item of a session, keyed by token.
///
/// Mutation goes through [`crate::MediaSet`], which keeps the registry and
/// the order sequence in step. Preview handles of local items are released
/// exactly once: on removal, on [`MediaRegistry::clear`], or on drop.
pub struct MediaRegistry {
    items: HashMap<MediaToken, MediaItem>,
    minted: HashSet<LocalKey>,
    removed_remote_ids: Vec<RemoteId>,
    previews: Arc<dyn PreviewProvider>,
}

impl std::fmt::Debug for MediaRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaRegistry")
            .field("items", &self.items)
            .field("minted", &self.minted.len())
            .field("removed_remote_ids", &self.removed_remote_ids)
            .finish()
    }
}

impl MediaRegistry {
    /// Create an empty registry.
    pub fn new(previews: Arc<dyn PreviewProvider>) -> Self {
        Self {
            items: HashMap::new(),
            minted: HashSet::new(),
            removed_remote_ids: Vec::new(),
            previews,
        }
    }

    /// Whether the token refers to an item currently in the registry.
    pub fn is_live(&self, token: &MediaToken) -> bool {
        self.items.contains_key(token)
    }

    /// Look up a live item.
    pub fn get(&self, token: &MediaToken) -> Option<&MediaItem> {
        self.items.get(token)
    }

    /// Number of live items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether no items are live.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Remote ids explicitly dropped this session, in removal order.
    pub fn removed_remote_ids(&self) -> &[RemoteId] {
        &self.removed_remote_ids
    }

    /// Register a stored item. Returns `None` if it is already registered.
    #[instrument(skip(self, media), fields(id = %media.id()))]
    pub(crate) fn seed_remote(&mut self, media: &StoredMedia) -> Option<MediaToken> {
        let token = MediaToken::Remote(*media.id());
        if self.items.contains_key(&token) {
            debug!("Remote item already registered");
            return None;
        }
        self.items.insert(
            token,
            MediaItem::Remote(RemoteMedia {
                id: *media.id(),
                mime_class: *media.mime_class(),
                has_thumbnail: *media.has_thumbnail(),
            }),
        );
        Some(token)
    }

    /// Register a local file under a fresh token.
    ///
    /// Files that are neither image nor video are dropped and yield `None`.
    #[instrument(skip(self, file), fields(name = %file.name(), mime = %file.mime()))]
    pub(crate) fn insert_local(&mut self, file: LocalFile) -> Option<MediaToken> {
        let Some(mime_class) = file.mime_class() else {
            debug!("Ignoring non-media file");
            return None;
        };

        let key = LocalKey::mint(&self.minted);
        self.minted.insert(key);
        let token = MediaToken::Local(key);

        let preview = self.previews.create(&file);
        self.items.insert(
            token,
            MediaItem::Local(LocalMedia {
                file,
                mime_class,
                preview,
            }),
        );
        debug!(%token, "Registered local file");
        Some(token)
    }

    /// Drop a remote item and record its id for the backend.
    ///
    /// Returns `false` (and records nothing) for unknown or local tokens.
    #[instrument(skip(self, token), fields(token = %token))]
    pub(crate) fn take_remote(&mut self, token: &MediaToken) -> bool {
        let MediaToken::Remote(id) = token else {
            return false;
        };
        if self.items.remove(token).is_none() {
            debug!("Remote token not live");
            return false;
        }
        if !self.removed_remote_ids.contains(id) {
            self.removed_remote_ids.push(*id);
        }
        debug!("Marked remote item removed");
        true
    }

    /// Drop a local item outright, releasing its preview.
    ///
    /// Returns `false` for unknown or remote tokens.
    #[instrument(skip(self, token), fields(token = %token))]
    pub(crate) fn take_local(&mut self, token: &MediaToken) -> bool {
        if !token.is_local() {
            return false;
        }
        match self.items.remove(token) {
            Some(item) => {
                self.release(item);
                debug!("Removed local item");
                true
            }
            None => {
                debug!("Local token not live");
                false
            }
        }
    }

    /// Drop every item and removal record, releasing all previews.
    ///
    /// Minted keys are kept so tokens stay unique across a reset.
    pub(crate) fn clear(&mut self) {
        let items: Vec<MediaItem> = self.items.drain().map(|(_, item)| item).collect();
        for item in items {
            self.release(item);
        }
        self.removed_remote_ids.clear();
    }

    fn release(&self, item: MediaItem) {
        if let MediaItem::Local(LocalMedia {
            preview: Some(handle),
            ..
        }) = item
        {
            self.previews.release(handle);
        }
    }
}

impl Drop for MediaRegistry {
    fn drop(&mut self) {
        self.clear();
    }
}
