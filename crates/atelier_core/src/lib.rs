//! Core data types for the Atelier media editor.
//!
//! This crate provides the types shared by the media editing engine and the
//! access gate: identifiers, posts and their stored media, local files, and
//! viewer identity.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod file;
mod focus;
mod ids;
mod mime;
mod post;
mod viewer;

pub use file::{LocalFile, LocalFileBuilder};
pub use focus::FocusPoint;
pub use ids::{ChannelId, PostId, RemoteId, RoleId, UserId};
pub use mime::MimeClass;
pub use post::{Post, PostBuilder, StoredMedia, StoredMediaBuilder};
pub use viewer::{Viewer, ViewerRoles};
