//! Media token reconciliation engine for the Atelier post editor.
//!
//! A post carries an ordered list of images and videos. While editing, that
//! list mixes items the backend already stores with files the author just
//! picked. This crate tracks both kinds behind a single [`MediaToken`] type,
//! keeps a display order over them, and produces the canonical order the
//! backend applies on submit.
//!
//! # Architecture
//!
//! - [`MediaRegistry`]: live items keyed by token, plus removed stored ids
//! - [`OrderSequence`]: display order over tokens
//! - [`MediaSet`]: both of the above behind one set of operations
//! - [`EditSession`]: form state, thumbnail, preferences and submission
//! - [`apply_media_order`]: the receiving side of the canonical order
//!
//! # Example
//!
//! ```
//! use atelier_core::{LocalFile, MimeClass, RemoteId, StoredMedia};
//! use atelier_media::{MediaSet, MediaToken, NoPreviews};
//! use std::sync::Arc;
//!
//! let stored = [
//!     StoredMedia::new(1u64, MimeClass::Image, false),
//!     StoredMedia::new(2u64, MimeClass::Image, false),
//! ];
//! let mut media = MediaSet::seeded(&stored, Arc::new(NoPreviews));
//! media.add_local(vec![LocalFile::new("f1.png", "image/png", 1)]);
//! media.mark_remote_removed(&MediaToken::Remote(RemoteId(1)));
//!
//! let order = media.to_canonical_encoding();
//! assert_eq!(order.wire(), "e:2,n:0");
//! assert_eq!(media.removed_remote_ids(), &[RemoteId(1)]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod apply;
mod encoding;
mod media_set;
mod order;
mod payload;
mod preferences;
mod preview;
mod registry;
mod session;
mod thumbnail;
mod token;

pub use apply::{PlacedMedia, apply_media_order};
pub use encoding::{CanonicalOrder, EncodedRef, parse_wire, to_wire};
pub use media_set::MediaSet;
pub use order::{Direction, OrderSequence};
pub use payload::{SubmissionHandler, SubmissionPayload, SubmitReceipt};
pub use preferences::{EditorPreferences, MemoryPreferences, PreferenceStore, TomlPreferences};
pub use preview::{NoPreviews, PreviewHandle, PreviewProvider};
pub use registry::{LocalMedia, MediaItem, MediaRegistry, Origin, RemoteMedia};
pub use session::{EditMode, EditSession, EditorDefaults, SessionServices};
pub use thumbnail::{ThumbnailSelection, ThumbnailSlot};
pub use token::{LocalKey, MediaToken};
