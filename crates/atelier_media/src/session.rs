//! Author editing session: form state around the media set.

use crate::{
    EditorPreferences, MediaSet, MemoryPreferences, NoPreviews, PreferenceStore, PreviewProvider,
    SubmissionHandler, SubmissionPayload, SubmitReceipt, ThumbnailSlot,
};
use atelier_core::{ChannelId, FocusPoint, LocalFile, Post, PostId, RoleId};
use atelier_error::{SubmissionError, SubmissionErrorKind};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Whether the session creates a post or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditMode {
    /// New post; every media item is a local file
    Create,
    /// Existing post, seeded with its stored media
    Edit {
        /// Post being edited
        post_id: PostId,
    },
}

/// Role and channel selections used when nothing was remembered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorDefaults {
    /// Roles preselected for new posts
    #[serde(default)]
    pub role_ids: Vec<RoleId>,
    /// Channels preselected for new posts
    #[serde(default)]
    pub channel_ids: Vec<ChannelId>,
}

/// Collaborators injected into every editing session.
#[derive(Clone)]
pub struct SessionServices {
    /// Creates and releases local file previews
    pub previews: Arc<dyn PreviewProvider>,
    /// Remembers UI preferences between sessions
    pub preferences: Arc<dyn PreferenceStore>,
    /// Fallback selections
    pub defaults: EditorDefaults,
}

impl SessionServices {
    /// Bundle the given collaborators with empty defaults.
    pub fn new(previews: Arc<dyn PreviewProvider>, preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            previews,
            preferences,
            defaults: EditorDefaults::default(),
        }
    }

    /// No previews, in-memory preferences.
    pub fn headless() -> Self {
        Self::new(Arc::new(NoPreviews), Arc::new(MemoryPreferences::default()))
    }

    /// Replace the fallback selections.
    pub fn with_defaults(mut self, defaults: EditorDefaults) -> Self {
        self.defaults = defaults;
        self
    }
}

impl std::fmt::Debug for SessionServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionServices")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

/// State of one author editing session.
///
/// Opening a session always starts from scratch; nothing carries over from a
/// previous one except remembered preferences. A rejected submission leaves
/// the session untouched, an accepted one discards it.
#[derive(Debug)]
pub struct EditSession {
    mode: EditMode,
    title: String,
    description: String,
    role_ids: Vec<RoleId>,
    channel_ids: Vec<ChannelId>,
    post_date: DateTime<Utc>,
    focus_point: FocusPoint,
    thumbnail: ThumbnailSlot,
    media: MediaSet,
    panel_open: bool,
    services: SessionServices,
}

impl EditSession {
    /// Open a session for a new post.
    ///
    /// Roles and channels start from the last submitted selection, or from
    /// the configured defaults when nothing is remembered.
    #[instrument(skip_all)]
    pub fn create(services: &SessionServices) -> Self {
        let prefs = load_preferences(services.preferences.as_ref());
        let role_ids = if prefs.last_role_ids.is_empty() {
            services.defaults.role_ids.clone()
        } else {
            prefs.last_role_ids
        };
        let channel_ids = if prefs.last_channel_ids.is_empty() {
            services.defaults.channel_ids.clone()
        } else {
            prefs.last_channel_ids
        };

        let mut session = Self::blank(EditMode::Create, false, prefs.panel_open, services);
        for role in role_ids {
            session.add_role(role.as_str());
        }
        for channel in channel_ids {
            session.add_channel(channel.as_str());
        }
        debug!(roles = session.role_ids.len(), "Opened create session");
        session
    }

    /// Open a session editing `post`, seeded with its stored media.
    #[instrument(skip_all, fields(post = %post.id()))]
    pub fn edit(post: &Post, services: &SessionServices) -> Self {
        let prefs = load_preferences(services.preferences.as_ref());
        let has_stored_thumbnail = post.cover().is_some_and(|cover| *cover.has_thumbnail());

        let mut session = Self::blank(
            EditMode::Edit { post_id: *post.id() },
            has_stored_thumbnail,
            prefs.panel_open,
            services,
        );
        session.title = post.title().clone();
        session.description = post.description().clone();
        session.post_date = *post.timestamp();
        session.focus_point = *post.focus_point();
        session.media = MediaSet::seeded(post.media(), services.previews.clone());
        for role in post.allowed_role_ids() {
            session.add_role(role.as_str());
        }
        for channel in post.channel_ids() {
            session.add_channel(channel.as_str());
        }
        debug!(media = session.media.effective_count(), "Opened edit session");
        session
    }

    fn blank(
        mode: EditMode,
        has_stored_thumbnail: bool,
        panel_open: bool,
        services: &SessionServices,
    ) -> Self {
        Self {
            mode,
            title: String::new(),
            description: String::new(),
            role_ids: Vec::new(),
            channel_ids: Vec::new(),
            post_date: Utc::now(),
            focus_point: FocusPoint::default(),
            thumbnail: ThumbnailSlot::new(has_stored_thumbnail, services.previews.clone()),
            media: MediaSet::new(services.previews.clone()),
            panel_open,
            services: services.clone(),
        }
    }

    /// Create or edit.
    pub fn mode(&self) -> EditMode {
        self.mode
    }

    /// Title as typed.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Description as typed.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Set the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Selected roles in selection order.
    pub fn role_ids(&self) -> &[RoleId] {
        &self.role_ids
    }

    /// Select a role. Blank ids and repeats are ignored.
    pub fn add_role(&mut self, raw: &str) -> bool {
        match RoleId::parse(raw) {
            Some(role) if !self.role_ids.contains(&role) => {
                self.role_ids.push(role);
                true
            }
            _ => false,
        }
    }

    /// Deselect a role. No-op when it is not selected.
    pub fn remove_role(&mut self, role: &RoleId) -> bool {
        let before = self.role_ids.len();
        self.role_ids.retain(|r| r != role);
        self.role_ids.len() != before
    }

    /// Selected channels in selection order.
    pub fn channel_ids(&self) -> &[ChannelId] {
        &self.channel_ids
    }

    /// Select a channel. Blank ids and repeats are ignored.
    pub fn add_channel(&mut self, raw: &str) -> bool {
        match ChannelId::parse(raw) {
            Some(channel) if !self.channel_ids.contains(&channel) => {
                self.channel_ids.push(channel);
                true
            }
            _ => false,
        }
    }

    /// Deselect a channel. No-op when it is not selected.
    pub fn remove_channel(&mut self, channel: &ChannelId) -> bool {
        let before = self.channel_ids.len();
        self.channel_ids.retain(|c| c != channel);
        self.channel_ids.len() != before
    }

    /// Publication date.
    pub fn post_date(&self) -> DateTime<Utc> {
        self.post_date
    }

    /// Set the publication date.
    pub fn set_post_date(&mut self, post_date: DateTime<Utc>) {
        self.post_date = post_date;
    }

    /// Focus point as picked.
    pub fn focus_point(&self) -> FocusPoint {
        self.focus_point
    }

    /// Whether the cover allows focus picking. Video covers do not.
    pub fn focus_picking_enabled(&self) -> bool {
        !self.media.cover_is_video()
    }

    /// Set the focus point. Ignored while the cover is a video.
    pub fn set_focus_point(&mut self, focus_point: FocusPoint) -> bool {
        if !self.focus_picking_enabled() {
            debug!("Focus picking disabled for video cover");
            return false;
        }
        self.focus_point = focus_point;
        true
    }

    /// Thumbnail selection.
    pub fn thumbnail(&self) -> &ThumbnailSlot {
        &self.thumbnail
    }

    /// Pick a replacement thumbnail; non-images are ignored.
    pub fn pick_thumbnail(&mut self, file: LocalFile) -> bool {
        self.thumbnail.pick(file)
    }

    /// Remove the current thumbnail.
    pub fn remove_thumbnail(&mut self) {
        self.thumbnail.remove();
    }

    /// Media of this session.
    pub fn media(&self) -> &MediaSet {
        &self.media
    }

    /// Media of this session, for add/remove/reorder.
    pub fn media_mut(&mut self) -> &mut MediaSet {
        &mut self.media
    }

    /// Whether the author panel is open.
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Open or close the author panel, remembering the choice.
    pub fn set_panel_open(&mut self, open: bool) {
        self.panel_open = open;
        let store = self.services.preferences.as_ref();
        let mut prefs = load_preferences(store);
        prefs.panel_open = open;
        save_preferences(store, &prefs);
    }

    /// Whether the session may be submitted.
    ///
    /// Creating needs at least one local file and at least one live item.
    /// Editing needs at least one live item, new or stored.
    pub fn can_submit(&self) -> bool {
        let live = self.media.effective_count();
        match self.mode {
            EditMode::Create => self.media.local_added() > 0 && live > 0,
            EditMode::Edit { .. } => live > 0,
        }
    }

    /// Build the submission payload without changing the session.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionErrorKind::NotEligible`] when
    /// [`EditSession::can_submit`] is false.
    #[instrument(skip(self), fields(mode = ?self.mode))]
    pub fn payload(&self) -> Result<SubmissionPayload, SubmissionError> {
        if !self.can_submit() {
            let reason = match self.mode {
                EditMode::Create => "a new post needs at least one image or video",
                EditMode::Edit { .. } => "a post must keep at least one media item",
            };
            return Err(SubmissionError::new(SubmissionErrorKind::NotEligible(
                reason.to_string(),
            )));
        }

        let (canonical_order, ordered_local_files) =
            self.media.to_canonical_encoding().into_parts();

        let (post_id, removed_remote_ids) = match self.mode {
            EditMode::Create => (None, None),
            EditMode::Edit { post_id } => {
                (Some(post_id), Some(self.media.removed_remote_ids().to_vec()))
            }
        };

        Ok(SubmissionPayload {
            post_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            allowed_role_ids: self.role_ids.clone(),
            channel_ids: self.channel_ids.clone(),
            ordered_local_files,
            canonical_order,
            removed_remote_ids,
            thumbnail: self.thumbnail.replacement().cloned(),
            clear_thumbnail: self.thumbnail.clear_requested(),
            focus_point: self.focus_point.normalized(),
            post_date: self.post_date,
        })
    }

    /// Submit through `handler`.
    ///
    /// On rejection the session is left exactly as it was. On success the
    /// role and channel selections are remembered and the session is
    /// discarded.
    ///
    /// # Errors
    ///
    /// Returns the eligibility error from [`EditSession::payload`] or the
    /// handler's error.
    #[instrument(skip_all, fields(mode = ?self.mode))]
    pub async fn submit(
        &mut self,
        handler: &dyn SubmissionHandler,
    ) -> Result<SubmitReceipt, SubmissionError> {
        let payload = self.payload()?;
        info!(
            media = payload.canonical_order.len(),
            uploads = payload.ordered_local_files.len(),
            "Submitting post"
        );

        match handler.submit(&payload).await {
            Ok(receipt) => {
                info!(post = %receipt.post_id, "Submission accepted");
                self.remember_selections();
                self.discard();
                Ok(receipt)
            }
            Err(e) => {
                warn!(error = %e, "Submission failed, keeping editing state");
                Err(e)
            }
        }
    }

    /// Abandon the session, releasing every preview.
    pub fn cancel(mut self) {
        self.discard();
    }

    fn remember_selections(&self) {
        let store = self.services.preferences.as_ref();
        let mut prefs = load_preferences(store);
        prefs.last_role_ids = self.role_ids.clone();
        prefs.last_channel_ids = self.channel_ids.clone();
        save_preferences(store, &prefs);
    }

    fn discard(&mut self) {
        self.media.reset();
        self.thumbnail.reset();
        self.title.clear();
        self.description.clear();
        self.role_ids.clear();
        self.channel_ids.clear();
        self.focus_point = FocusPoint::default();
        self.post_date = Utc::now();
        debug!("Session discarded");
    }
}

fn load_preferences(store: &dyn PreferenceStore) -> EditorPreferences {
    store.load().unwrap_or_else(|e| {
        warn!(error = %e, "Failed to load editor preferences, using defaults");
        EditorPreferences::default()
    })
}

fn save_preferences(store: &dyn PreferenceStore, prefs: &EditorPreferences) {
    if let Err(e) = store.save(prefs) {
        warn!(error = %e, "Failed to save editor preferences");
    }
}
