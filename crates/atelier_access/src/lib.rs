//! Role-intersection access gate for Atelier gallery surfaces.
//!
//! Identity is resolved elsewhere; this crate only decides, given a viewer's
//! role set, whether a post's full assets may be shown or downloaded. The
//! same predicate backs every surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod assets;
mod gate;
mod predicate;

pub use assets::{AssetResolver, AssetTemplates, AssetUrl, TemplateAssetResolver};
pub use gate::{AccessDecision, AccessGate, Surface};
pub use predicate::{access_label, can_access, is_post_author};
