//! Access decision command handler.

use atelier::{AtelierConfig, AtelierResult, Surface, Viewer, ViewerRoles, load_post};
use std::path::Path;
use tracing::{debug, instrument};

/// Evaluate the gate for one post and print the decision.
#[instrument(skip(config, roles), fields(post = %post_path.display()))]
pub fn handle_access(
    config: &AtelierConfig,
    post_path: &Path,
    roles: &[String],
    viewer: Option<String>,
    author: bool,
    surface: Surface,
) -> AtelierResult<()> {
    let post = load_post(post_path)?;

    let roles: ViewerRoles = roles
        .iter()
        .map(|role| role.trim())
        .filter(|role| !role.is_empty())
        .collect();
    let viewer = match viewer {
        Some(id) if author => Viewer::author(id),
        Some(id) => Viewer::user(id),
        None => Viewer::anonymous(),
    };
    debug!(roles = roles.len(), ?viewer, "Evaluating access");

    let gate = config.access_gate();
    if surface == Surface::Download {
        match gate.ensure_download(&post, &roles, &viewer) {
            Ok(()) => println!("post {}: download allowed", post.id()),
            Err(e) => println!("post {}: {}", post.id(), e.kind()),
        }
        return Ok(());
    }

    let decision = gate.decide(&post, &roles, &viewer, surface);
    let verdict = if *decision.allowed() { "allowed" } else { "locked" };
    println!("post {} on {}: {}", decision.post_id(), decision.surface(), verdict);
    if let Some(label) = decision.label() {
        println!("  {}", label);
    }
    if let Some(cover) = decision.cover() {
        println!("  cover: {}", cover);
    }
    Ok(())
}
