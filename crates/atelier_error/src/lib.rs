//! Error types for the Atelier media editor.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! Stale references and non-media files are not errors anywhere in Atelier;
//! they are filtered or ignored by the operations that meet them.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod access;
mod config;
mod error;
mod io;
mod json;
mod media;
mod preferences;
mod submission;

pub use access::{AccessError, AccessErrorKind};
pub use config::ConfigError;
pub use error::{AtelierError, AtelierErrorKind, AtelierResult};
pub use io::{IoError, IoErrorKind};
pub use json::JsonError;
pub use media::{MediaError, MediaErrorKind};
pub use preferences::{PreferencesError, PreferencesErrorKind};
pub use submission::{SubmissionError, SubmissionErrorKind};
