//! Tests for editing sessions: eligibility, payloads, submission and previews.

use async_trait::async_trait;
use atelier_core::{
    FocusPoint, LocalFile, MimeClass, Post, PostBuilder, PostId, RemoteId, RoleId, StoredMedia,
    UserId,
};
use atelier_error::{SubmissionError, SubmissionErrorKind};
use atelier_media::{
    EditMode, EditSession, EditorDefaults, EditorPreferences, EncodedRef, MediaToken,
    MemoryPreferences, PreferenceStore, PreviewHandle, PreviewProvider, SessionServices,
    SubmissionHandler, SubmissionPayload, SubmitReceipt, ThumbnailSelection,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
struct CountingPreviews {
    created: AtomicUsize,
    released: Mutex<Vec<String>>,
}

impl CountingPreviews {
    fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }

    fn released(&self) -> Vec<String> {
        self.released.lock().unwrap().clone()
    }
}

impl PreviewProvider for CountingPreviews {
    fn create(&self, file: &LocalFile) -> Option<PreviewHandle> {
        self.created.fetch_add(1, Ordering::SeqCst);
        Some(PreviewHandle::new(format!("preview:{}", file.name())))
    }

    fn release(&self, handle: PreviewHandle) {
        self.released.lock().unwrap().push(handle.url().to_string());
    }
}

/// Handler that fails until told otherwise and records what it saw.
#[derive(Default)]
struct ScriptedHandler {
    reject: bool,
    seen: Mutex<Vec<SubmissionPayload>>,
}

#[async_trait]
impl SubmissionHandler for ScriptedHandler {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<SubmitReceipt, SubmissionError> {
        self.seen.lock().unwrap().push(payload.clone());
        if self.reject {
            return Err(SubmissionError::new(SubmissionErrorKind::Rejected {
                status: 500,
                message: "storage unavailable".to_string(),
            }));
        }
        Ok(SubmitReceipt {
            post_id: payload.post_id.unwrap_or(PostId(99)),
        })
    }
}

fn services(previews: Arc<CountingPreviews>) -> (SessionServices, Arc<MemoryPreferences>) {
    let prefs = Arc::new(MemoryPreferences::default());
    let services = SessionServices::new(previews, prefs.clone());
    (services, prefs)
}

fn image(name: &str) -> LocalFile {
    LocalFile::new(name, "image/jpeg", 2048)
}

fn post(media: Vec<StoredMedia>) -> Post {
    PostBuilder::default()
        .id(PostId(12))
        .author_id(UserId::from("author"))
        .title("Sunset")
        .description("  golden hour  ")
        .allowed_role_ids([RoleId::from("tier1")].into_iter().collect::<std::collections::BTreeSet<_>>())
        .channel_ids(std::collections::BTreeSet::new())
        .focus_point(FocusPoint::new(10.0, 90.0))
        .media(media)
        .build()
        .unwrap()
}

#[test]
fn test_create_requires_local_files() {
    let (services, _) = services(Arc::default());
    let mut session = EditSession::create(&services);
    assert_eq!(session.mode(), EditMode::Create);
    assert!(!session.can_submit());

    let added = session.media_mut().add_local(vec![image("a.jpg")]);
    assert!(session.can_submit());

    session.media_mut().remove(&added[0]);
    assert!(!session.can_submit());
    let err = session.payload().unwrap_err();
    assert!(matches!(err.kind(), SubmissionErrorKind::NotEligible(_)));
}

#[test]
fn test_edit_requires_one_live_item() {
    let (services, _) = services(Arc::default());
    let post = post(vec![StoredMedia::new(1u64, MimeClass::Image, false)]);
    let mut session = EditSession::edit(&post, &services);
    assert!(session.can_submit());

    session.media_mut().remove(&MediaToken::Remote(RemoteId(1)));
    assert!(!session.can_submit());

    session.media_mut().add_local(vec![image("b.jpg")]);
    assert!(session.can_submit());
}

#[test]
fn test_edit_payload_carries_removals_and_normalised_focus() {
    let (services, _) = services(Arc::default());
    let post = post(vec![
        StoredMedia::new(1u64, MimeClass::Image, true),
        StoredMedia::new(2u64, MimeClass::Image, false),
    ]);
    let mut session = EditSession::edit(&post, &services);
    session.media_mut().remove(&MediaToken::Remote(RemoteId(1)));
    assert!(session.set_focus_point(FocusPoint::new(-4.0, 66.666)));
    session.remove_thumbnail();

    let payload = session.payload().unwrap();
    assert_eq!(payload.post_id, Some(PostId(12)));
    assert_eq!(payload.description, "golden hour");
    assert_eq!(payload.removed_remote_ids, Some(vec![RemoteId(1)]));
    assert_eq!(payload.canonical_order, vec![EncodedRef::Remote { id: RemoteId(2) }]);
    assert_eq!(payload.focus_point, FocusPoint::new(0.0, 66.7));
    assert!(payload.clear_thumbnail);
    assert_eq!(payload.allowed_role_ids, vec![RoleId::from("tier1")]);
}

#[test]
fn test_create_payload_omits_removed_ids() {
    let (services, _) = services(Arc::default());
    let mut session = EditSession::create(&services);
    session.media_mut().add_local(vec![image("a.jpg")]);

    let payload = session.payload().unwrap();
    assert_eq!(payload.post_id, None);
    assert_eq!(payload.removed_remote_ids, None);

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json.get("removedRemoteIds").is_none());
    assert!(json.get("canonicalOrder").is_some());
}

#[test]
fn test_roles_and_channels_are_trimmed_and_deduplicated() {
    let (services, _) = services(Arc::default());
    let mut session = EditSession::create(&services);

    assert!(session.add_role(" vip "));
    assert!(!session.add_role("vip"));
    assert!(!session.add_role("   "));
    assert!(session.add_channel("gallery"));
    assert!(!session.add_channel("gallery"));

    assert_eq!(session.role_ids(), &[RoleId::from("vip")]);
    assert!(session.remove_role(&RoleId::from("vip")));
    assert!(!session.remove_role(&RoleId::from("vip")));
}

#[test]
fn test_focus_is_locked_for_video_cover() {
    let (services, _) = services(Arc::default());
    let mut session = EditSession::create(&services);
    session
        .media_mut()
        .add_local(vec![LocalFile::new("clip.mp4", "video/mp4", 1)]);

    assert!(!session.focus_picking_enabled());
    assert!(!session.set_focus_point(FocusPoint::new(10.0, 10.0)));
    assert_eq!(session.focus_point(), FocusPoint::default());
}

#[test]
fn test_thumbnail_replacement_only_accepts_images() {
    let (services, _) = services(Arc::default());
    let mut session = EditSession::create(&services);

    assert!(!session.pick_thumbnail(LocalFile::new("clip.mp4", "video/mp4", 1)));
    assert!(session.pick_thumbnail(image("thumb.jpg")));
    assert!(matches!(
        session.thumbnail().selection(),
        ThumbnailSelection::Replaced(_)
    ));
}

#[tokio::test]
async fn test_rejected_submit_keeps_state() {
    let previews = Arc::new(CountingPreviews::default());
    let (services, prefs) = services(previews.clone());
    let mut session = EditSession::create(&services);
    session.set_title("Draft");
    session.add_role("vip");
    session.media_mut().add_local(vec![image("a.jpg"), image("b.jpg")]);

    let handler = ScriptedHandler {
        reject: true,
        ..Default::default()
    };
    let err = session.submit(&handler).await.unwrap_err();
    assert!(matches!(err.kind(), SubmissionErrorKind::Rejected { status: 500, .. }));

    assert_eq!(session.title(), "Draft");
    assert_eq!(session.media().effective_count(), 2);
    assert!(previews.released().is_empty());
    assert!(prefs.load().unwrap().last_role_ids.is_empty());

    let handler = ScriptedHandler::default();
    let receipt = session.submit(&handler).await.unwrap();
    assert_eq!(receipt.post_id, PostId(99));
}

#[tokio::test]
async fn test_accepted_submit_discards_and_remembers_selection() {
    let previews = Arc::new(CountingPreviews::default());
    let (services, prefs) = services(previews.clone());
    let mut session = EditSession::create(&services);
    session.add_role("vip");
    session.add_channel("gallery");
    session.media_mut().add_local(vec![image("a.jpg")]);
    session.pick_thumbnail(image("thumb.jpg"));

    let handler = ScriptedHandler::default();
    session.submit(&handler).await.unwrap();

    assert_eq!(session.media().effective_count(), 0);
    assert!(session.role_ids().is_empty());
    assert_eq!(session.thumbnail().selection(), &ThumbnailSelection::Existing);

    let mut released = previews.released();
    released.sort();
    assert_eq!(released, vec!["preview:a.jpg", "preview:thumb.jpg"]);
    assert_eq!(previews.created(), 2);

    let saved = prefs.load().unwrap();
    assert_eq!(saved.last_role_ids, vec![RoleId::from("vip")]);

    // The next create session starts from the remembered selection.
    let next = EditSession::create(&services);
    assert_eq!(next.role_ids(), &[RoleId::from("vip")]);
    assert_eq!(next.channel_ids().len(), 1);
}

#[test]
fn test_create_falls_back_to_configured_defaults() {
    let services = SessionServices::headless().with_defaults(EditorDefaults {
        role_ids: vec![RoleId::from("free")],
        channel_ids: Vec::new(),
    });
    let session = EditSession::create(&services);
    assert_eq!(session.role_ids(), &[RoleId::from("free")]);
}

#[test]
fn test_panel_state_is_persisted() {
    let prefs = Arc::new(MemoryPreferences::new(EditorPreferences::default()));
    let services = SessionServices::new(Arc::new(CountingPreviews::default()), prefs.clone());
    let mut session = EditSession::create(&services);
    assert!(!session.panel_open());

    session.set_panel_open(true);
    assert!(prefs.load().unwrap().panel_open);
    assert!(EditSession::create(&services).panel_open());
}

#[test]
fn test_every_preview_released_once_on_cancel() {
    let previews = Arc::new(CountingPreviews::default());
    let (services, _) = services(previews.clone());
    let mut session = EditSession::create(&services);
    let added = session
        .media_mut()
        .add_local(vec![image("a.jpg"), image("b.jpg"), image("c.jpg")]);
    session.media_mut().remove(&added[1]);
    session.media_mut().remove(&added[1]);

    session.cancel();

    let mut released = previews.released();
    released.sort();
    assert_eq!(
        released,
        vec!["preview:a.jpg", "preview:b.jpg", "preview:c.jpg"]
    );
}
