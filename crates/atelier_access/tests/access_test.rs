//! Tests for gating posts loaded the way the backend serves them.

use atelier_access::{AccessGate, AssetResolver, AssetUrl, Surface, can_access};
use atelier_core::{Post, StoredMedia, Viewer, ViewerRoles};
use std::sync::Arc;

fn load(json: &str) -> Post {
    serde_json::from_str(json).unwrap()
}

fn tiered_post() -> Post {
    load(
        r#"{
            "id": 21,
            "authorId": "42",
            "title": "Valentines set",
            "allowedRoleIds": ["tier1", "vip"],
            "media": [{"id": 300, "mimeClass": "image", "hasThumbnail": true}]
        }"#,
    )
}

#[test]
fn test_role_scenarios() {
    let post = tiered_post();
    let free: ViewerRoles = ["free"].into_iter().collect();
    let vip: ViewerRoles = ["vip"].into_iter().collect();

    assert!(!can_access(&post, &free, &Viewer::user("7")));
    assert!(can_access(&post, &vip, &Viewer::user("7")));
    assert!(can_access(&post, &free, &Viewer::author("42")));
}

#[test]
fn test_post_without_roles_is_private() {
    let post = load(r#"{"id": 22, "authorId": "42"}"#);
    let everything: ViewerRoles = ["free", "tier1", "vip", "admin"].into_iter().collect();

    assert!(!can_access(&post, &everything, &Viewer::user("7")));
    assert!(!can_access(&post, &everything, &Viewer::anonymous()));
    assert!(can_access(&post, &ViewerRoles::none(), &Viewer::author("42")));
}

struct CdnResolver;

impl AssetResolver for CdnResolver {
    fn resolve(&self, post: &Post, media: &StoredMedia, allowed: bool) -> AssetUrl {
        if allowed {
            AssetUrl::Unlocked(format!("cdn://{}/{}", post.id(), media.id()))
        } else {
            AssetUrl::Placeholder("cdn://locked.png".to_string())
        }
    }
}

#[test]
fn test_gate_uses_injected_resolver() {
    let gate = AccessGate::new(Arc::new(CdnResolver));
    let posts = [tiered_post(), load(r#"{"id": 23, "authorId": "1"}"#)];
    let vip: ViewerRoles = ["vip"].into_iter().collect();

    let decisions = gate.evaluate(&posts, &vip, &Viewer::user("7"), Surface::Panel);
    assert_eq!(decisions.len(), 2);
    assert_eq!(
        decisions[0].cover(),
        &Some(AssetUrl::Unlocked("cdn://21/300".to_string()))
    );
    assert!(!decisions[1].allowed());
    assert_eq!(decisions[1].cover(), &None);
    assert_eq!(decisions[1].label().as_deref(), Some("Requires: (no roles)"));
}

#[test]
fn test_locked_card_shows_stored_thumbnail() {
    let gate = AccessGate::default();
    let decision = gate.decide(
        &tiered_post(),
        &ViewerRoles::none(),
        &Viewer::anonymous(),
        Surface::GalleryCard,
    );
    assert_eq!(
        decision.cover(),
        &Some(AssetUrl::Placeholder("/images/300/thumb".to_string()))
    );
    assert_eq!(decision.label().as_deref(), Some("Requires: tier1, vip"));
}
