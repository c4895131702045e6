//! Posts and the media already stored with them.

use crate::{ChannelId, FocusPoint, MimeClass, PostId, RemoteId, RoleId, UserId};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A media item the backend already stores for a post.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
pub struct StoredMedia {
    /// Backend identifier.
    #[builder(setter(into))]
    id: RemoteId,

    /// Image or video.
    mime_class: MimeClass,

    /// Whether a dedicated thumbnail is stored alongside.
    #[builder(default)]
    #[serde(default)]
    has_thumbnail: bool,
}

impl StoredMedia {
    /// Create a stored media record.
    pub fn new(id: impl Into<RemoteId>, mime_class: MimeClass, has_thumbnail: bool) -> Self {
        Self {
            id: id.into(),
            mime_class,
            has_thumbnail,
        }
    }
}

/// A post as published by an author.
///
/// # Examples
///
/// ```
/// use atelier_core::{PostBuilder, RoleId, UserId};
///
/// let post = PostBuilder::default()
///     .id(7u64)
///     .author_id(UserId::from("author-1"))
///     .allowed_role_ids([RoleId::from("tier1"), RoleId::from("vip")].into_iter().collect::<std::collections::BTreeSet<_>>())
///     .build()
///     .unwrap();
///
/// assert_eq!(post.allowed_role_ids().len(), 2);
/// assert!(post.media().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize, derive_builder::Builder)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct Post {
    /// Post identifier.
    id: PostId,

    /// Author of the post.
    author_id: UserId,

    /// Title.
    #[builder(default)]
    #[serde(default)]
    title: String,

    /// Description.
    #[builder(default)]
    #[serde(default)]
    description: String,

    /// Roles allowed to see the full asset. Empty means nobody but the author.
    #[builder(default)]
    #[serde(default)]
    allowed_role_ids: BTreeSet<RoleId>,

    /// Channels the post was announced in.
    #[builder(default)]
    #[serde(default)]
    channel_ids: BTreeSet<ChannelId>,

    /// Focus point of the cover item.
    #[builder(default)]
    #[serde(default)]
    focus_point: FocusPoint,

    /// Publication time.
    #[builder(default = "Utc::now()")]
    #[serde(default = "Utc::now")]
    timestamp: DateTime<Utc>,

    /// Stored media in display order.
    #[builder(default)]
    #[serde(default)]
    media: Vec<StoredMedia>,
}

impl Post {
    /// The first stored media item, which is the cover.
    pub fn cover(&self) -> Option<&StoredMedia> {
        self.media.first()
    }
}
