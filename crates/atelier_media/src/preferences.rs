//! Persisted editor preferences, behind an injected store.

use atelier_core::{ChannelId, RoleId};
use atelier_error::{PreferencesError, PreferencesErrorKind};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, instrument};

/// UI state remembered between editing sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditorPreferences {
    /// Whether the author panel was left open
    #[serde(default)]
    pub panel_open: bool,
    /// Roles chosen for the last submitted post
    #[serde(default)]
    pub last_role_ids: Vec<RoleId>,
    /// Channels chosen for the last submitted post
    #[serde(default)]
    pub last_channel_ids: Vec<ChannelId>,
}

/// Where editor preferences are read from and written to.
pub trait PreferenceStore: Send + Sync {
    /// Load stored preferences, or defaults when nothing is stored.
    fn load(&self) -> Result<EditorPreferences, PreferencesError>;

    /// Replace the stored preferences.
    fn save(&self, preferences: &EditorPreferences) -> Result<(), PreferencesError>;
}

/// In-process store, lost when dropped.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    inner: Mutex<EditorPreferences>,
}

impl MemoryPreferences {
    /// Start from the given preferences.
    pub fn new(preferences: EditorPreferences) -> Self {
        Self {
            inner: Mutex::new(preferences),
        }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn load(&self) -> Result<EditorPreferences, PreferencesError> {
        self.inner
            .lock()
            .map(|prefs| prefs.clone())
            .map_err(|e| PreferencesError::new(PreferencesErrorKind::Read(e.to_string())))
    }

    fn save(&self, preferences: &EditorPreferences) -> Result<(), PreferencesError> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|e| PreferencesError::new(PreferencesErrorKind::Write(e.to_string())))?;
        *guard = preferences.clone();
        Ok(())
    }
}

/// Store backed by a TOML file.
///
/// # Examples
///
/// ```no_run
/// use atelier_media::{PreferenceStore, TomlPreferences};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let store = TomlPreferences::at_default_location();
/// let prefs = store.load()?;
/// println!("panel open: {}", prefs.panel_open);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TomlPreferences {
    path: PathBuf,
}

impl TomlPreferences {
    /// Store preferences at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `~/.config/atelier/preferences.toml`, or `./atelier-preferences.toml`
    /// when no config directory is known.
    pub fn at_default_location() -> Self {
        let path = dirs::config_dir()
            .map(|dir| dir.join("atelier").join("preferences.toml"))
            .unwrap_or_else(|| PathBuf::from("atelier-preferences.toml"));
        Self::new(path)
    }

    /// The backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for TomlPreferences {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> Result<EditorPreferences, PreferencesError> {
        if !self.path.exists() {
            debug!("No preferences file, using defaults");
            return Ok(EditorPreferences::default());
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| PreferencesError::new(PreferencesErrorKind::Read(e.to_string())))?;
        Ok(toml::from_str(&text)?)
    }

    #[instrument(skip(self, preferences), fields(path = %self.path.display()))]
    fn save(&self, preferences: &EditorPreferences) -> Result<(), PreferencesError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|e| PreferencesError::new(PreferencesErrorKind::Write(e.to_string())))?;
        }
        let text = toml::to_string(preferences)?;
        std::fs::write(&self.path, text)
            .map_err(|e| PreferencesError::new(PreferencesErrorKind::Write(e.to_string())))?;
        debug!("Saved preferences");
        Ok(())
    }
}
