//! Tests for layered configuration and the services built from it.

use atelier::{
    AtelierConfig, EditSession, NoPreviews, PostBuilder, PreferenceStore,
    RoleId, Surface, UserId, Viewer, ViewerRoles,
};
use std::sync::Arc;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, text: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, text).unwrap();
    path
}

#[test]
fn test_from_file_reads_sections() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "atelier.toml",
        r#"
[editor]
default_role_ids = ["free", "tier1"]
default_channel_ids = ["gallery"]

[assets]
full = "https://cdn.example/{id}"

[roles]
tier1 = "Tier 1"
"#,
    );

    let config = AtelierConfig::from_file(&path).unwrap();
    assert_eq!(
        config.editor.default_role_ids,
        vec![RoleId::from("free"), RoleId::from("tier1")]
    );
    assert_eq!(config.assets.full, "https://cdn.example/{id}");
    assert_eq!(config.assets.blur, "/images/{id}/blur");
    assert_eq!(config.roles.get(&RoleId::from("tier1")).map(String::as_str), Some("Tier 1"));
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(AtelierConfig::from_file(dir.path().join("absent.toml")).is_err());
    assert!(AtelierConfig::load_with(Some(&dir.path().join("absent.toml"))).is_err());
}

#[test]
fn test_extra_file_overrides_bundled_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "override.toml",
        "[assets]\nblur = \"/locked/{post}.png\"\n",
    );

    let config = AtelierConfig::load_with(Some(&path)).unwrap();
    assert_eq!(config.assets.blur, "/locked/{post}.png");
    assert_eq!(config.assets.thumbnail, "/images/{id}/thumb");
}

#[test]
fn test_session_services_use_configured_store_and_defaults() {
    let dir = TempDir::new().unwrap();
    let prefs_path = dir.path().join("prefs").join("preferences.toml");
    let path = write(
        &dir,
        "atelier.toml",
        &format!(
            "[editor]\ndefault_role_ids = [\"free\"]\npreferences_path = {:?}\n",
            prefs_path.display().to_string()
        ),
    );

    let config = AtelierConfig::from_file(&path).unwrap();
    let services = config.session_services(Arc::new(NoPreviews));
    let mut session = EditSession::create(&services);
    assert_eq!(session.role_ids(), &[RoleId::from("free")]);

    session.set_panel_open(true);
    assert!(prefs_path.exists());
    assert!(config.editor.preference_store().load().unwrap().panel_open);
}

#[test]
fn test_access_gate_uses_role_names_and_templates() {
    let dir = TempDir::new().unwrap();
    let path = write(
        &dir,
        "atelier.toml",
        "[assets]\nblur = \"/blur/{post}/{id}\"\n[roles]\nvip = \"VIP\"\n",
    );
    let config = AtelierConfig::from_file(&path).unwrap();

    let post = PostBuilder::default()
        .id(4u64)
        .author_id(UserId::from("a"))
        .allowed_role_ids([RoleId::from("vip")].into_iter().collect::<std::collections::BTreeSet<_>>())
        .media(vec![atelier::StoredMedia::new(40u64, atelier::MimeClass::Image, false)])
        .build()
        .unwrap();

    let decision = config.access_gate().decide(
        &post,
        &ViewerRoles::none(),
        &Viewer::anonymous(),
        Surface::GalleryCard,
    );
    assert_eq!(decision.label().as_deref(), Some("Requires: VIP"));
    assert_eq!(
        decision.cover().as_ref().map(|url| url.as_str()),
        Some("/blur/4/40")
    );
}
