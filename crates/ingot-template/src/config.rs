//! Layered configuration
//!
//! Config is loaded with three layers of precedence (highest wins):
//! 1. Environment variables: `INGOT_PROFILE`, `INGOT_SETTINGS_DIR`
//! 2. Project-local: `.ingot/config.toml`
//! 3. Global: `~/.ingot/config.toml`

use crate::dispatcher::FailurePolicy;
use crate::store::TomlSettingsStore;
use ingot_core::{IngotError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PROFILE: &str = "INGOT_PROFILE";
const ENV_SETTINGS_DIR: &str = "INGOT_SETTINGS_DIR";

/// `[import]` section of a config file; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImportSection {
    #[serde(default)]
    pub profile: Option<String>,
    #[serde(default)]
    pub settings_dir: Option<PathBuf>,
    #[serde(default)]
    pub failure_policy: Option<FailurePolicy>,
}

/// Top-level config file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IngotConfigFile {
    #[serde(default)]
    pub import: ImportSection,
}

/// Resolved configuration with environment variable overrides applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngotConfig {
    /// Profile remembered import choices are stored under
    pub profile: String,
    /// Directory holding one settings file per profile
    pub settings_dir: PathBuf,
    pub failure_policy: FailurePolicy,
}

impl Default for IngotConfig {
    fn default() -> Self {
        Self {
            profile: crate::generator::DEFAULT_PROFILE.to_string(),
            settings_dir: PathBuf::from(".ingot/settings"),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl IngotConfig {
    /// Load config with layered precedence: global < project < env vars
    pub fn load() -> Result<Self> {
        let mut config = Self::default();

        // Layer 1: Global config (~/.ingot/config.toml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                config.merge(Self::load_file(&global_path)?);
            }
        }

        // Layer 2: Project-local config (.ingot/config.toml)
        let local_path = PathBuf::from(".ingot/config.toml");
        if local_path.exists() {
            config.merge(Self::load_file(&local_path)?);
        }

        // Layer 3: Environment variable overrides
        config.apply_env_overrides();

        Ok(config)
    }

    /// Load config from a specific file path only (for testing)
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let mut config = Self::default();
        config.merge(Self::load_file(path)?);
        config.apply_env_overrides();
        Ok(config)
    }

    /// Settings store rooted at [`IngotConfig::settings_dir`]
    pub fn settings_store(&self) -> TomlSettingsStore {
        TomlSettingsStore::new(&self.settings_dir)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".ingot").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<IngotConfigFile> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            IngotError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })
    }

    fn merge(&mut self, overlay: IngotConfigFile) {
        let import = overlay.import;
        if let Some(profile) = import.profile {
            self.profile = profile;
        }
        if let Some(dir) = import.settings_dir {
            self.settings_dir = dir;
        }
        if let Some(policy) = import.failure_policy {
            self.failure_policy = policy;
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(profile) = std::env::var(ENV_PROFILE) {
            if !profile.trim().is_empty() {
                self.profile = profile.trim().to_string();
            }
        }
        if let Ok(dir) = std::env::var(ENV_SETTINGS_DIR) {
            if !dir.trim().is_empty() {
                self.settings_dir = PathBuf::from(dir);
            }
        }
    }
}
