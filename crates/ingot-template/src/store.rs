//! TOML file backed settings store
//!
//! Each profile is one file, `<root>/<profile>.toml`, holding a flat table of
//! setting paths:
//!
//! ```toml
//! "Templates/ModelFromFile/ImportMaterials" = true
//! "Templates/ModelFromFile/DefaultSkeleton" = ""
//! ```

use crate::settings::SettingsStore;
use ingot_core::{IngotError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings persisted as one TOML file per profile
#[derive(Debug)]
pub struct TomlSettingsStore {
    root: PathBuf,
    /// Profiles with unsaved changes, holding the full table to write back
    dirty: HashMap<String, toml::Table>,
}

impl TomlSettingsStore {
    /// Create a store rooted at `root`; the directory is created on first save
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            dirty: HashMap::new(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `profile`
    pub fn profile_path(&self, profile: &str) -> Result<PathBuf> {
        validate_profile(profile)?;
        Ok(self.root.join(format!("{}.toml", profile)))
    }

    /// True if `profile` has staged changes
    pub fn has_unsaved_changes(&self, profile: &str) -> bool {
        self.dirty.contains_key(profile)
    }

    fn read_table(&self, profile: &str) -> Result<toml::Table> {
        let path = self.profile_path(profile)?;
        if !path.exists() {
            return Ok(toml::Table::new());
        }
        let content = fs::read_to_string(&path)?;
        toml::from_str::<toml::Table>(&content).map_err(|e| {
            IngotError::SettingsError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }
}

impl SettingsStore for TomlSettingsStore {
    fn get(&self, key: &str, profile: &str) -> Option<toml::Value> {
        if let Some(table) = self.dirty.get(profile) {
            return table.get(key).cloned();
        }
        match self.read_table(profile) {
            Ok(table) => table.get(key).cloned(),
            Err(e) => {
                tracing::warn!(profile, error = %e, "unreadable settings, using defaults");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: toml::Value, profile: &str) {
        if !self.dirty.contains_key(profile) {
            let table = self.read_table(profile).unwrap_or_else(|e| {
                tracing::warn!(profile, error = %e, "discarding unreadable settings");
                toml::Table::new()
            });
            self.dirty.insert(profile.to_string(), table);
        }
        if let Some(table) = self.dirty.get_mut(profile) {
            table.insert(key.to_string(), value);
        }
    }

    fn save(&mut self, profile: &str) -> Result<()> {
        let Some(table) = self.dirty.get(profile) else {
            return Ok(());
        };

        let path = self.profile_path(profile)?;
        fs::create_dir_all(&self.root)?;

        // Write next to the target and rename so readers never see a partial file
        let tmp = path.with_extension("toml.tmp");
        fs::write(&tmp, toml::to_string_pretty(table)?)?;
        fs::rename(&tmp, &path)?;

        self.dirty.remove(profile);
        tracing::debug!(profile, path = %path.display(), "saved settings");
        Ok(())
    }
}

fn validate_profile(profile: &str) -> Result<()> {
    let valid = !profile.is_empty()
        && profile != "."
        && profile != ".."
        && !profile.contains(['/', '\\']);
    if valid {
        Ok(())
    } else {
        Err(IngotError::SettingsError(format!(
            "invalid profile name '{}'",
            profile
        )))
    }
}
