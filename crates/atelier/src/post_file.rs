//! Posts stored as JSON files, in the shape the backend serves them.

use atelier_core::Post;
use atelier_error::{AtelierResult, IoError, JsonError};
use std::path::Path;
use tracing::{debug, instrument};

/// Read and parse a post from a JSON file.
///
/// # Errors
///
/// An [`IoError`] when the file cannot be read, a [`JsonError`] when its
/// contents are not a post.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn load_post(path: impl AsRef<Path>) -> AtelierResult<Post> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| IoError::read(path, &e))?;
    let post: Post = serde_json::from_str(&text).map_err(|e| {
        JsonError::new(format!("Post file {} is not a valid post: {}", path.display(), e))
    })?;
    debug!(post = %post.id(), media = post.media().len(), "Loaded post");
    Ok(post)
}
