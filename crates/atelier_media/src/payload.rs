//! The submission payload and the handler that receives it.

use crate::EncodedRef;
use atelier_core::{ChannelId, FocusPoint, LocalFile, PostId, RemoteId, RoleId};
use atelier_error::SubmissionError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything an external handler needs to create or patch a post.
///
/// The payload is a snapshot: building it never changes the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    /// Post being edited; `None` when creating
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<PostId>,
    /// Title, trimmed
    pub title: String,
    /// Description, trimmed
    pub description: String,
    /// Allowed roles: trimmed, non-empty, deduplicated
    pub allowed_role_ids: Vec<RoleId>,
    /// Channels: deduplicated
    pub channel_ids: Vec<ChannelId>,
    /// New files in upload batch order
    pub ordered_local_files: Vec<LocalFile>,
    /// Final display order across stored items and new files
    pub canonical_order: Vec<EncodedRef>,
    /// Stored items dropped this session; only present when editing
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub removed_remote_ids: Option<Vec<RemoteId>>,
    /// Replacement thumbnail, uploaded separately from the ordered media
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<LocalFile>,
    /// Whether the stored thumbnail must be dropped
    pub clear_thumbnail: bool,
    /// Cover focus point, clamped and rounded to one decimal
    pub focus_point: FocusPoint,
    /// Publication date, serialised as RFC 3339
    pub post_date: DateTime<Utc>,
}

/// What a handler reports back after accepting a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReceipt {
    /// Id of the created or updated post
    pub post_id: PostId,
}

/// External collaborator that delivers a payload to the backend.
///
/// Returning an error means the submission was not applied; the editing
/// session stays as it was so the author can retry.
#[async_trait::async_trait]
pub trait SubmissionHandler: Send + Sync {
    /// Deliver the payload.
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, SubmissionError>;
}
