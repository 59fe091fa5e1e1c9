//! Shared test doubles for the generator integration tests

#![allow(dead_code)]

use ingot_asset::{
    AssetContent, AssetKind, AssetReference, MaterialAsset, ModelAsset, SkeletonAsset,
    TextureAsset,
};
use ingot_core::{AssetId, AssetLocation, IngotError, Result};
use ingot_import::{AssetImporter, ImportLogger, ImportedAsset, OutputSelection};
use ingot_template::{DialogOutcome, ImportPrompt, PromptParameters, SettingsStore};
use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Once;

static TRACING: Once = Once::new();

/// Route `tracing` output through the test harness; `RUST_LOG` picks the level
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn loc(path: &str) -> AssetLocation {
    AssetLocation::new(path).unwrap()
}

pub fn temp_dir(prefix: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("{}_{}", prefix, uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

/// Importer for `.model` files producing model, material, texture and skeleton
/// named after the file stem (or a fixed name).
///
/// With `ignore_selection` it returns every category regardless of what was
/// requested, like a sloppy third-party importer.
pub struct StubModelImporter {
    pub name: &'static str,
    pub fixed_name: Option<&'static str>,
    pub ignore_selection: bool,
}

impl StubModelImporter {
    pub fn new() -> Self {
        Self {
            name: "stub-model",
            fixed_name: None,
            ignore_selection: false,
        }
    }

    pub fn named(name: &'static str) -> Self {
        Self {
            name: "stub-model",
            fixed_name: Some(name),
            ignore_selection: false,
        }
    }
}

impl AssetImporter for StubModelImporter {
    fn name(&self) -> &str {
        self.name
    }

    fn supported_extensions(&self) -> &[&str] {
        &["model"]
    }

    fn output_kinds(&self) -> Vec<AssetKind> {
        AssetKind::ALL.to_vec()
    }

    fn import(
        &self,
        path: &Path,
        selection: &OutputSelection,
        logger: &dyn ImportLogger,
    ) -> Result<Vec<ImportedAsset>> {
        let stem = match self.fixed_name {
            Some(name) => name.to_string(),
            None => path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| IngotError::import(path.display().to_string(), "no file name"))?
                .to_string(),
        };
        logger.info(&format!("stub import of {}", path.display()));

        let wants = |kind| self.ignore_selection || selection.includes(kind);
        let mut out = Vec::new();

        let texture = ImportedAsset::new(
            loc(&format!("{}_tex", stem)),
            AssetContent::Texture(TextureAsset {
                id: AssetId::new(),
                source: None,
                width: 16,
                height: 16,
                format: "rgba8".to_string(),
            }),
        );
        let texture_ref = AssetReference::new(texture.content.id(), texture.location.clone());

        let material = ImportedAsset::new(
            loc(&format!("{}_mat", stem)),
            AssetContent::Material(MaterialAsset {
                id: AssetId::new(),
                source: None,
                base_color: [0.5, 0.4, 0.3, 1.0],
                textures: if wants(AssetKind::Texture) {
                    vec![texture_ref]
                } else {
                    vec![]
                },
            }),
        );
        let material_ref = AssetReference::new(material.content.id(), material.location.clone());

        let skeleton = ImportedAsset::new(
            loc(&format!("{}_skeleton", stem)),
            AssetContent::Skeleton(SkeletonAsset {
                id: AssetId::new(),
                source: None,
                joints: vec!["root".to_string(), "hips".to_string()],
            }),
        );
        let skeleton_ref = AssetReference::new(skeleton.content.id(), skeleton.location.clone());

        out.push(ImportedAsset::new(
            loc(&stem),
            AssetContent::Model(ModelAsset {
                id: AssetId::new(),
                source: None,
                meshes: vec![format!("{}_mesh", stem)],
                materials: if wants(AssetKind::Material) {
                    vec![material_ref]
                } else {
                    vec![]
                },
                skeleton: if wants(AssetKind::Skeleton) {
                    Some(skeleton_ref)
                } else {
                    None
                },
                properties: HashMap::new(),
            }),
        ));
        if wants(AssetKind::Material) {
            out.push(material);
        }
        if wants(AssetKind::Texture) {
            out.push(texture);
        }
        if wants(AssetKind::Skeleton) {
            out.push(skeleton);
        }
        Ok(out)
    }
}

/// Importer for `.broken` files that always fails
pub struct FailingImporter;

impl AssetImporter for FailingImporter {
    fn name(&self) -> &str {
        "failing"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["broken"]
    }

    fn output_kinds(&self) -> Vec<AssetKind> {
        vec![AssetKind::Model]
    }

    fn import(
        &self,
        path: &Path,
        _selection: &OutputSelection,
        _logger: &dyn ImportLogger,
    ) -> Result<Vec<ImportedAsset>> {
        Err(IngotError::IoError(std::io::Error::new(
            std::io::ErrorKind::UnexpectedEof,
            format!("truncated file {}", path.display()),
        )))
    }
}

/// Importer for `.png` files that only produces textures
pub struct TextureOnlyImporter;

impl AssetImporter for TextureOnlyImporter {
    fn name(&self) -> &str {
        "texture-only"
    }

    fn supported_extensions(&self) -> &[&str] {
        &["png", "model"]
    }

    fn output_kinds(&self) -> Vec<AssetKind> {
        vec![AssetKind::Texture]
    }

    fn import(
        &self,
        path: &Path,
        _selection: &OutputSelection,
        _logger: &dyn ImportLogger,
    ) -> Result<Vec<ImportedAsset>> {
        panic!("texture importer must never be chosen for {}", path.display());
    }
}

/// Prompt that answers from a script and records what it was shown
pub struct ScriptedPrompt {
    answer: Box<dyn FnMut(&PromptParameters) -> DialogOutcome>,
    pub shown: Vec<PromptParameters>,
}

impl ScriptedPrompt {
    pub fn confirm_with<F>(edit: F) -> Self
    where
        F: Fn(&mut PromptParameters) + 'static,
    {
        Self {
            answer: Box::new(move |initial: &PromptParameters| {
                let mut answer = initial.clone();
                edit(&mut answer);
                DialogOutcome::Confirm(answer)
            }),
            shown: Vec::new(),
        }
    }

    pub fn accept() -> Self {
        Self::confirm_with(|_| {})
    }

    pub fn cancel() -> Self {
        Self {
            answer: Box::new(|_: &PromptParameters| DialogOutcome::Cancel),
            shown: Vec::new(),
        }
    }
}

impl ImportPrompt for ScriptedPrompt {
    fn show(&mut self, initial: &PromptParameters) -> DialogOutcome {
        self.shown.push(initial.clone());
        (self.answer)(initial)
    }
}

/// Settings store that counts every access and can refuse to save
#[derive(Default)]
pub struct RecordingStore {
    pub values: HashMap<(String, String), toml::Value>,
    pub gets: Cell<usize>,
    pub sets: Vec<String>,
    pub saves: Vec<String>,
    pub fail_saves: bool,
}

impl RecordingStore {
    pub fn accesses(&self) -> usize {
        self.gets.get() + self.sets.len() + self.saves.len()
    }
}

impl SettingsStore for RecordingStore {
    fn get(&self, key: &str, profile: &str) -> Option<toml::Value> {
        self.gets.set(self.gets.get() + 1);
        self.values
            .get(&(profile.to_string(), key.to_string()))
            .cloned()
    }

    fn set(&mut self, key: &str, value: toml::Value, profile: &str) {
        self.sets.push(key.to_string());
        self.values.insert((profile.to_string(), key.to_string()), value);
    }

    fn save(&mut self, profile: &str) -> Result<()> {
        self.saves.push(profile.to_string());
        if self.fail_saves {
            return Err(IngotError::SettingsError("disk is read-only".to_string()));
        }
        Ok(())
    }
}
