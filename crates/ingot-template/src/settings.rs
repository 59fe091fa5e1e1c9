//! Typed, profile-scoped user settings
//!
//! Settings are stored as loosely typed `toml::Value`s keyed by a slash
//! separated path. A [`SettingsKey`] pairs such a path with a Rust type and a
//! default, and a [`SettingsSchema`] groups the keys the import template uses.

use ingot_core::{AssetId, Result};
use ingot_import::{ImportLogger, TracingLogger};
use std::collections::{BTreeMap, HashMap};

/// Persistent key/value settings, partitioned by user profile
pub trait SettingsStore {
    /// Current value of `key` for `profile`, if any
    fn get(&self, key: &str, profile: &str) -> Option<toml::Value>;

    /// Stage a value; it becomes durable on [`SettingsStore::save`]
    fn set(&mut self, key: &str, value: toml::Value, profile: &str);

    /// Persist staged values for `profile`
    fn save(&mut self, profile: &str) -> Result<()>;
}

/// Conversion between a Rust type and its stored representation
pub trait SettingValue: Sized + Clone {
    fn to_value(&self) -> toml::Value;
    fn from_value(value: &toml::Value) -> Option<Self>;
}

impl SettingValue for bool {
    fn to_value(&self) -> toml::Value {
        toml::Value::Boolean(*self)
    }

    fn from_value(value: &toml::Value) -> Option<Self> {
        value.as_bool()
    }
}

impl SettingValue for AssetId {
    fn to_value(&self) -> toml::Value {
        if self.is_empty() {
            toml::Value::String(String::new())
        } else {
            toml::Value::String(self.to_string())
        }
    }

    fn from_value(value: &toml::Value) -> Option<Self> {
        value.as_str().and_then(|s| s.parse().ok())
    }
}

/// A named setting with a type and a default
#[derive(Debug, Clone)]
pub struct SettingsKey<T> {
    name: String,
    default: T,
}

impl<T: SettingValue> SettingsKey<T> {
    pub fn new(name: impl Into<String>, default: T) -> Self {
        Self {
            name: name.into(),
            default,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Read the value for `profile`, falling back to the default when missing
    /// or stored with an incompatible type
    pub fn get(&self, store: &dyn SettingsStore, profile: &str) -> T {
        self.get_or_warn(store, profile, &TracingLogger)
    }

    /// Like [`SettingsKey::get`], reporting an incompatible stored value to `logger`
    pub fn get_or_warn(
        &self,
        store: &dyn SettingsStore,
        profile: &str,
        logger: &dyn ImportLogger,
    ) -> T {
        match store.get(&self.name, profile) {
            Some(raw) => T::from_value(&raw).unwrap_or_else(|| {
                logger.warning(&format!(
                    "Ignoring setting '{}' for profile '{}': unexpected value {}",
                    self.name, profile, raw
                ));
                self.default.clone()
            }),
            None => self.default.clone(),
        }
    }

    pub fn set(&self, store: &mut dyn SettingsStore, value: &T, profile: &str) {
        store.set(&self.name, value.to_value(), profile);
    }
}

/// Values the import template remembers between runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDefaults {
    pub import_materials: bool,
    pub import_textures: bool,
    pub import_skeleton: bool,
    /// Skeleton the user last chose to reuse, or [`AssetId::EMPTY`]
    pub skeleton_id: AssetId,
}

/// The settings keys used by the import template
#[derive(Debug, Clone)]
pub struct SettingsSchema {
    pub import_materials: SettingsKey<bool>,
    pub import_textures: SettingsKey<bool>,
    pub import_skeleton: SettingsKey<bool>,
    pub default_skeleton: SettingsKey<AssetId>,
}

impl SettingsSchema {
    /// Keys under `Templates/ModelFromFile/`, everything imported by default
    pub fn model_from_file() -> Self {
        Self::with_prefix("Templates/ModelFromFile")
    }

    /// Same keys under a different prefix
    pub fn with_prefix(prefix: &str) -> Self {
        let prefix = prefix.trim_end_matches('/');
        Self {
            import_materials: SettingsKey::new(format!("{}/ImportMaterials", prefix), true),
            import_textures: SettingsKey::new(format!("{}/ImportTextures", prefix), true),
            import_skeleton: SettingsKey::new(format!("{}/ImportSkeleton", prefix), true),
            default_skeleton: SettingsKey::new(format!("{}/DefaultSkeleton", prefix), AssetId::EMPTY),
        }
    }

    /// Read every remembered value for `profile`; unusable values are
    /// reported to `logger` and replaced by their defaults
    pub fn load(
        &self,
        store: &dyn SettingsStore,
        profile: &str,
        logger: &dyn ImportLogger,
    ) -> PersistedDefaults {
        PersistedDefaults {
            import_materials: self.import_materials.get_or_warn(store, profile, logger),
            import_textures: self.import_textures.get_or_warn(store, profile, logger),
            import_skeleton: self.import_skeleton.get_or_warn(store, profile, logger),
            skeleton_id: self.default_skeleton.get_or_warn(store, profile, logger),
        }
    }

    /// Stage every value for `profile`; the caller decides when to save
    pub fn stage(&self, store: &mut dyn SettingsStore, defaults: &PersistedDefaults, profile: &str) {
        self.import_materials.set(store, &defaults.import_materials, profile);
        self.import_textures.set(store, &defaults.import_textures, profile);
        self.import_skeleton.set(store, &defaults.import_skeleton, profile);
        self.default_skeleton.set(store, &defaults.skeleton_id, profile);
    }
}

impl Default for SettingsSchema {
    fn default() -> Self {
        Self::model_from_file()
    }
}

/// In-memory store; staged values become visible to `persisted` on save
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    staged: HashMap<String, BTreeMap<String, toml::Value>>,
    saved: HashMap<String, BTreeMap<String, toml::Value>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Values written by the last save of `profile`
    pub fn persisted(&self, profile: &str) -> Option<&BTreeMap<String, toml::Value>> {
        self.saved.get(profile)
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str, profile: &str) -> Option<toml::Value> {
        self.staged
            .get(profile)
            .and_then(|values| values.get(key))
            .or_else(|| self.saved.get(profile).and_then(|values| values.get(key)))
            .cloned()
    }

    fn set(&mut self, key: &str, value: toml::Value, profile: &str) {
        self.staged
            .entry(profile.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    fn save(&mut self, profile: &str) -> Result<()> {
        if let Some(staged) = self.staged.remove(profile) {
            self.saved.entry(profile.to_string()).or_default().extend(staged);
        }
        Ok(())
    }
}
