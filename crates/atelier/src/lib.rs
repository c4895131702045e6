//! Atelier: media ordering and role-gated access for gallery posts.
//!
//! This facade re-exports the Atelier crates and adds the pieces an
//! application needs around them: layered configuration, post files and
//! tracing setup.
//!
//! # Crates
//!
//! - `atelier_core`: posts, stored media, local files, viewers
//! - `atelier_media`: editing sessions and the canonical media order
//! - `atelier_access`: the role-intersection gate
//! - `atelier_error`: error types
//!
//! # Quick Start
//!
//! ```no_run
//! use atelier::{AtelierConfig, EditSession, LocalFile, NoPreviews};
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AtelierConfig::load()?;
//! let services = config.session_services(Arc::new(NoPreviews));
//!
//! let mut session = EditSession::create(&services);
//! session.media_mut().add_local(vec![LocalFile::new("cover.png", "image/png", 1024)]);
//! let payload = session.payload()?;
//! println!("{}", serde_json::to_string_pretty(&payload)?);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod post_file;
mod telemetry;

pub use config::{AtelierConfig, EditorConfig};
pub use post_file::load_post;
pub use telemetry::init_tracing;

pub use atelier_access::*;
pub use atelier_core::*;
pub use atelier_error::*;
pub use atelier_media::*;
