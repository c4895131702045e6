//! Asset URL resolution for gated media.

use atelier_core::{Post, StoredMedia};
use serde::{Deserialize, Serialize};

/// URL handed to a surface for one media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum AssetUrl {
    /// The real asset
    #[display("{}", _0)]
    Unlocked(String),
    /// A stand-in shown to viewers without access
    #[display("{}", _0)]
    Placeholder(String),
}

impl AssetUrl {
    /// The URL, whatever its kind.
    pub fn as_str(&self) -> &str {
        match self {
            AssetUrl::Unlocked(url) | AssetUrl::Placeholder(url) => url,
        }
    }

    /// Whether this is the real asset.
    pub fn is_unlocked(&self) -> bool {
        matches!(self, AssetUrl::Unlocked(_))
    }
}

/// Maps a media item and an access decision to a URL.
///
/// What a placeholder looks like is up to the asset service; the gate only
/// decides which kind to ask for.
pub trait AssetResolver: Send + Sync {
    /// Resolve the URL of `media` on `post`.
    fn resolve(&self, post: &Post, media: &StoredMedia, allowed: bool) -> AssetUrl;
}

/// URL templates for [`TemplateAssetResolver`].
///
/// `{id}` is replaced by the media id and `{post}` by the post id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetTemplates {
    /// Full asset
    #[serde(default = "default_full")]
    pub full: String,
    /// Stored thumbnail
    #[serde(default = "default_thumbnail")]
    pub thumbnail: String,
    /// Server-rendered blur
    #[serde(default = "default_blur")]
    pub blur: String,
}

fn default_full() -> String {
    "/images/{id}".to_string()
}

fn default_thumbnail() -> String {
    "/images/{id}/thumb".to_string()
}

fn default_blur() -> String {
    "/images/{id}/blur".to_string()
}

impl Default for AssetTemplates {
    fn default() -> Self {
        Self {
            full: default_full(),
            thumbnail: default_thumbnail(),
            blur: default_blur(),
        }
    }
}

/// Builds URLs by filling in [`AssetTemplates`].
///
/// Viewers with access get the full asset. Viewers without access get the
/// stored thumbnail when there is one, else the blur.
///
/// # Examples
///
/// ```
/// use atelier_access::{AssetResolver, AssetUrl, TemplateAssetResolver};
/// use atelier_core::{MimeClass, PostBuilder, StoredMedia, UserId};
///
/// let media = StoredMedia::new(9u64, MimeClass::Image, false);
/// let post = PostBuilder::default()
///     .id(1u64)
///     .author_id(UserId::from("7"))
///     .media(vec![media.clone()])
///     .build()
///     .unwrap();
///
/// let resolver = TemplateAssetResolver::default();
/// assert_eq!(resolver.resolve(&post, &media, true), AssetUrl::Unlocked("/images/9".into()));
/// assert_eq!(resolver.resolve(&post, &media, false), AssetUrl::Placeholder("/images/9/blur".into()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateAssetResolver {
    templates: AssetTemplates,
}

impl TemplateAssetResolver {
    /// Resolve with the given templates.
    pub fn new(templates: AssetTemplates) -> Self {
        Self { templates }
    }

    /// The templates in use.
    pub fn templates(&self) -> &AssetTemplates {
        &self.templates
    }

    fn fill(template: &str, post: &Post, media: &StoredMedia) -> String {
        template
            .replace("{id}", &media.id().to_string())
            .replace("{post}", &post.id().to_string())
    }
}

impl AssetResolver for TemplateAssetResolver {
    fn resolve(&self, post: &Post, media: &StoredMedia, allowed: bool) -> AssetUrl {
        if allowed {
            AssetUrl::Unlocked(Self::fill(&self.templates.full, post, media))
        } else if *media.has_thumbnail() {
            AssetUrl::Placeholder(Self::fill(&self.templates.thumbnail, post, media))
        } else {
            AssetUrl::Placeholder(Self::fill(&self.templates.blur, post, media))
        }
    }
}
