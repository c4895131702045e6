//! Coarse MIME classification for media items.

use serde::{Deserialize, Serialize};

/// The only media classes a post can carry.
///
/// Classification looks at the top-level MIME type alone; the content itself
/// is never inspected.
///
/// # Examples
///
/// ```
/// use atelier_core::MimeClass;
///
/// assert_eq!(MimeClass::from_mime("image/webp"), Some(MimeClass::Image));
/// assert_eq!(MimeClass::from_mime("Video/MP4"), Some(MimeClass::Video));
/// assert_eq!(MimeClass::from_mime("application/pdf"), None);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum MimeClass {
    /// Still image (PNG, JPEG, WebP, GIF, ...)
    #[display("image")]
    Image,
    /// Video (MP4, WebM, MOV, ...)
    #[display("video")]
    Video,
}

impl MimeClass {
    /// Classify a MIME type string, returning `None` for anything that is not
    /// an image or a video.
    ///
    /// Only the full `type/subtype` form is accepted; a bare `image` is not.
    pub fn from_mime(mime: &str) -> Option<Self> {
        let (top, subtype) = mime.trim().split_once('/')?;
        if subtype.trim().is_empty() {
            return None;
        }
        let top = top.trim();
        if top.eq_ignore_ascii_case("image") {
            Some(MimeClass::Image)
        } else if top.eq_ignore_ascii_case("video") {
            Some(MimeClass::Video)
        } else {
            None
        }
    }

    /// Convert to string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeClass::Image => "image",
            MimeClass::Video => "video",
        }
    }

    /// Whether this class is a video.
    pub fn is_video(&self) -> bool {
        matches!(self, MimeClass::Video)
    }
}
