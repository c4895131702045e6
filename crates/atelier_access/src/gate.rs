//! Per-surface access decisions.

use crate::{AssetResolver, AssetUrl, TemplateAssetResolver, access_label, can_access};
use atelier_core::{Post, PostId, RoleId, Viewer, ViewerRoles};
use atelier_error::{AccessError, AccessErrorKind};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Viewer-facing places that show posts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum Surface {
    /// Card in the gallery grid
    #[display("gallery_card")]
    GalleryCard,
    /// Full post view
    #[display("detail_view")]
    DetailView,
    /// Author side panel
    #[display("panel")]
    Panel,
    /// Download endpoint
    #[display("download")]
    Download,
}

/// Outcome of gating one post on one surface.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct AccessDecision {
    /// Post the decision is about.
    post_id: PostId,
    /// Surface that asked.
    surface: Surface,
    /// Whether the full assets may be shown.
    allowed: bool,
    /// Lock caption; only present when access is denied.
    label: Option<String>,
    /// URL for the cover item, if the post has media.
    cover: Option<AssetUrl>,
}

/// Applies [`can_access`] uniformly across every surface.
///
/// The gate holds no per-viewer state; every call evaluates afresh.
///
/// # Examples
///
/// ```
/// use atelier_access::{AccessGate, Surface};
/// use atelier_core::{MimeClass, PostBuilder, RoleId, StoredMedia, UserId, Viewer, ViewerRoles};
///
/// let post = PostBuilder::default()
///     .id(1u64)
///     .author_id(UserId::from("7"))
///     .allowed_role_ids([RoleId::from("vip")].into_iter().collect::<std::collections::BTreeSet<_>>())
///     .media(vec![StoredMedia::new(10u64, MimeClass::Image, false)])
///     .build()
///     .unwrap();
///
/// let gate = AccessGate::default();
/// let decisions = gate.evaluate(&[post], &ViewerRoles::none(), &Viewer::anonymous(), Surface::GalleryCard);
/// assert!(!decisions[0].allowed());
/// assert_eq!(decisions[0].label().as_deref(), Some("Requires: vip"));
/// ```
#[derive(Clone)]
pub struct AccessGate {
    resolver: Arc<dyn AssetResolver>,
    role_names: BTreeMap<RoleId, String>,
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(Arc::new(TemplateAssetResolver::default()))
    }
}

impl std::fmt::Debug for AccessGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessGate")
            .field("role_names", &self.role_names)
            .finish_non_exhaustive()
    }
}

impl AccessGate {
    /// Create a gate resolving asset URLs through `resolver`.
    pub fn new(resolver: Arc<dyn AssetResolver>) -> Self {
        Self {
            resolver,
            role_names: BTreeMap::new(),
        }
    }

    /// Display names used in lock captions.
    pub fn with_role_names(mut self, role_names: BTreeMap<RoleId, String>) -> Self {
        self.role_names = role_names;
        self
    }

    /// Decide one post.
    pub fn decide(
        &self,
        post: &Post,
        roles: &ViewerRoles,
        viewer: &Viewer,
        surface: Surface,
    ) -> AccessDecision {
        let allowed = can_access(post, roles, viewer);
        AccessDecision {
            post_id: *post.id(),
            surface,
            allowed,
            label: (!allowed).then(|| access_label(post, &self.role_names)),
            cover: post
                .cover()
                .map(|media| self.resolver.resolve(post, media, allowed)),
        }
    }

    /// Decide every post for one surface, in input order.
    #[instrument(skip_all, fields(posts = posts.len(), %surface))]
    pub fn evaluate(
        &self,
        posts: &[Post],
        roles: &ViewerRoles,
        viewer: &Viewer,
        surface: Surface,
    ) -> Vec<AccessDecision> {
        let decisions: Vec<AccessDecision> = posts
            .iter()
            .map(|post| self.decide(post, roles, viewer, surface))
            .collect();
        debug!(
            allowed = decisions.iter().filter(|d| d.allowed).count(),
            "Evaluated surface"
        );
        decisions
    }

    /// Gate a download.
    ///
    /// # Errors
    ///
    /// Returns [`AccessErrorKind::Denied`] when the viewer may not access
    /// the post.
    #[instrument(skip_all, fields(post = %post.id()))]
    pub fn ensure_download(
        &self,
        post: &Post,
        roles: &ViewerRoles,
        viewer: &Viewer,
    ) -> Result<(), AccessError> {
        if can_access(post, roles, viewer) {
            return Ok(());
        }
        debug!("Download denied");
        Err(AccessError::new(AccessErrorKind::Denied {
            post: post.id().to_string(),
            reason: access_label(post, &self.role_names),
        }))
    }
}
