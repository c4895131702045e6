//! The role-intersection predicate.

use atelier_core::{Post, RoleId, Viewer, ViewerRoles};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Whether `viewer` may see the full assets of `post`.
///
/// The post's author always has access. Anyone else needs at least one of the
/// post's allowed roles. A post without allowed roles is closed to everyone
/// but its author.
///
/// # Examples
///
/// ```
/// use atelier_access::can_access;
/// use atelier_core::{PostBuilder, RoleId, UserId, Viewer, ViewerRoles};
///
/// let post = PostBuilder::default()
///     .id(1u64)
///     .author_id(UserId::from("7"))
///     .allowed_role_ids(["tier1", "vip"].into_iter().map(RoleId::from).collect::<std::collections::BTreeSet<_>>())
///     .build()
///     .unwrap();
///
/// let free: ViewerRoles = ["free"].into_iter().collect();
/// let vip: ViewerRoles = ["vip"].into_iter().collect();
///
/// assert!(!can_access(&post, &free, &Viewer::user("8")));
/// assert!(can_access(&post, &vip, &Viewer::user("8")));
/// assert!(can_access(&post, &free, &Viewer::author("7")));
/// ```
#[instrument(skip_all, fields(post = %post.id()))]
pub fn can_access(post: &Post, roles: &ViewerRoles, viewer: &Viewer) -> bool {
    if is_post_author(post, viewer) {
        debug!("Author bypass");
        return true;
    }
    if post.allowed_role_ids().is_empty() {
        debug!("No roles configured, closed to non-authors");
        return false;
    }
    let allowed = post.allowed_role_ids().iter().any(|role| roles.holds(role));
    debug!(allowed, "Evaluated role intersection");
    allowed
}

/// Whether `viewer` is flagged as an author and wrote `post`.
pub fn is_post_author(post: &Post, viewer: &Viewer) -> bool {
    viewer.is_author && viewer.id.as_ref() == Some(post.author_id())
}

/// Caption shown on locked content, naming the roles that unlock it.
///
/// Role ids are shown through `role_names` when a display name is known.
///
/// ```
/// use atelier_access::access_label;
/// use atelier_core::{PostBuilder, RoleId, UserId};
/// use std::collections::BTreeMap;
///
/// let post = PostBuilder::default().id(1u64).author_id(UserId::from("7")).build().unwrap();
/// assert_eq!(access_label(&post, &BTreeMap::new()), "Requires: (no roles)");
/// ```
pub fn access_label(post: &Post, role_names: &BTreeMap<RoleId, String>) -> String {
    if post.allowed_role_ids().is_empty() {
        return "Requires: (no roles)".to_string();
    }
    let names: Vec<&str> = post
        .allowed_role_ids()
        .iter()
        .map(|role| {
            role_names
                .get(role)
                .map(String::as_str)
                .unwrap_or_else(|| role.as_str())
        })
        .collect();
    format!("Requires: {}", names.join(", "))
}
