//! Importer trait and its output type

use crate::logger::ImportLogger;
use crate::selection::OutputSelection;
use ingot_asset::{AssetContent, AssetKind};
use ingot_core::{AssetLocation, Result};
use std::path::Path;

/// One asset produced by an importer, located relative to the import target
#[derive(Debug, Clone, PartialEq)]
pub struct ImportedAsset {
    pub location: AssetLocation,
    pub content: AssetContent,
}

impl ImportedAsset {
    pub fn new(location: AssetLocation, content: AssetContent) -> Self {
        Self { location, content }
    }
}

/// Trait implemented by each file-format importer
pub trait AssetImporter: Send + Sync {
    /// Importer name (e.g. "fbx", "gltf")
    fn name(&self) -> &str;

    /// File extensions this importer accepts, lowercase and without the dot
    fn supported_extensions(&self) -> &[&str];

    /// Output categories this importer is able to produce
    fn output_kinds(&self) -> Vec<AssetKind>;

    /// Import `path`, producing only the categories in `selection`
    fn import(
        &self,
        path: &Path,
        selection: &OutputSelection,
        logger: &dyn ImportLogger,
    ) -> Result<Vec<ImportedAsset>>;

    /// Whether this importer accepts `path`, judged by extension
    fn can_import(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext = ext.to_lowercase();
                self.supported_extensions().iter().any(|s| *s == ext)
            })
            .unwrap_or(false)
    }

    fn produces(&self, kind: AssetKind) -> bool {
        self.output_kinds().contains(&kind)
    }
}
