//! Layered Atelier configuration.
//!
//! Sources, later overriding earlier:
//! - Bundled defaults (include_str! from atelier.toml)
//! - `~/.config/atelier/atelier.toml`
//! - `./atelier.toml`

use atelier_access::{AccessGate, AssetTemplates, TemplateAssetResolver};
use atelier_core::{ChannelId, RoleId};
use atelier_error::{AtelierResult, ConfigError};
use atelier_media::{EditorDefaults, PreviewProvider, SessionServices, TomlPreferences};
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, instrument};

const DEFAULT_CONFIG: &str = include_str!("../../../atelier.toml");

/// Editor settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Roles preselected for new posts
    #[serde(default)]
    pub default_role_ids: Vec<RoleId>,

    /// Channels preselected for new posts
    #[serde(default)]
    pub default_channel_ids: Vec<ChannelId>,

    /// Preferences file; the user config directory when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences_path: Option<PathBuf>,
}

impl EditorConfig {
    /// Fallback selections for new posts.
    pub fn defaults(&self) -> EditorDefaults {
        EditorDefaults {
            role_ids: self.default_role_ids.clone(),
            channel_ids: self.default_channel_ids.clone(),
        }
    }

    /// The preference store this configuration points at.
    pub fn preference_store(&self) -> TomlPreferences {
        match &self.preferences_path {
            Some(path) => TomlPreferences::new(path),
            None => TomlPreferences::at_default_location(),
        }
    }
}

/// Top-level Atelier configuration.
///
/// # Example
///
/// ```no_run
/// use atelier::AtelierConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = AtelierConfig::load()?;
/// println!("blur template: {}", config.assets.blur);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AtelierConfig {
    /// Editor settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Asset URL templates
    #[serde(default)]
    pub assets: AssetTemplates,

    /// Display names for role ids
    #[serde(default)]
    pub roles: BTreeMap<RoleId, String>,
}

impl AtelierConfig {
    /// Load configuration from a single file, without bundled defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> AtelierResult<Self> {
        debug!("Loading configuration from file");

        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                ))
            })?;
        Self::deserialize_from(settings)
    }

    /// Load bundled defaults overridden by the user's files.
    ///
    /// Missing user files are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if a present file cannot be parsed.
    #[instrument]
    pub fn load() -> AtelierResult<Self> {
        Self::load_with(None)
    }

    /// Like [`AtelierConfig::load`], with `extra` layered on top when given.
    ///
    /// # Errors
    ///
    /// Returns an error if `extra` is missing or any file cannot be parsed.
    #[instrument]
    pub fn load_with(extra: Option<&Path>) -> AtelierResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder =
            Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/atelier/atelier.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("atelier").required(false));

        if let Some(path) = extra {
            builder = builder.add_source(File::from(path));
        }

        let settings = builder
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build configuration: {}", e)))?;
        Self::deserialize_from(settings)
    }

    fn deserialize_from(settings: Config) -> AtelierResult<Self> {
        Ok(settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Failed to parse configuration: {}", e)))?)
    }

    /// Collaborators for editing sessions, using the configured preference
    /// store and defaults.
    pub fn session_services(&self, previews: Arc<dyn PreviewProvider>) -> SessionServices {
        SessionServices::new(previews, Arc::new(self.editor.preference_store()))
            .with_defaults(self.editor.defaults())
    }

    /// An access gate resolving URLs through the configured templates.
    pub fn access_gate(&self) -> AccessGate {
        AccessGate::new(Arc::new(TemplateAssetResolver::new(self.assets.clone())))
            .with_role_names(self.roles.clone())
    }
}
