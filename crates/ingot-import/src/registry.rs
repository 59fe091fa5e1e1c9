//! Importer registry
//!
//! Keeps importers in registration order; lookups preserve that order so the
//! first registered importer wins when several accept the same file.

use crate::importer::AssetImporter;
use ingot_asset::AssetKind;
use std::path::Path;

/// Ordered collection of available importers
#[derive(Default)]
pub struct ImporterRegistry {
    importers: Vec<Box<dyn AssetImporter>>,
}

impl ImporterRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an importer; earlier registrations take precedence
    pub fn register(&mut self, importer: Box<dyn AssetImporter>) {
        tracing::debug!(
            importer = importer.name(),
            extensions = ?importer.supported_extensions(),
            "registered importer"
        );
        self.importers.push(importer);
    }

    /// Builder form of [`ImporterRegistry::register`]
    pub fn with(mut self, importer: Box<dyn AssetImporter>) -> Self {
        self.register(importer);
        self
    }

    /// All importers that accept `path`, in registration order
    pub fn find_importers_for_file(&self, path: &Path) -> Vec<&dyn AssetImporter> {
        self.importers
            .iter()
            .filter(|i| i.can_import(path))
            .map(|i| &**i)
            .collect()
    }

    /// First importer that accepts `path` and can produce `kind`
    pub fn find_importer_producing(&self, path: &Path, kind: AssetKind) -> Option<&dyn AssetImporter> {
        self.find_importers_for_file(path)
            .into_iter()
            .find(|i| i.produces(kind))
    }

    /// Names of all registered importers
    pub fn names(&self) -> Vec<&str> {
        self.importers.iter().map(|i| i.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.importers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.importers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::importer::ImportedAsset;
    use crate::logger::ImportLogger;
    use crate::selection::OutputSelection;
    use ingot_core::Result;

    struct StubImporter {
        name: &'static str,
        extensions: &'static [&'static str],
        kinds: Vec<AssetKind>,
    }

    impl AssetImporter for StubImporter {
        fn name(&self) -> &str {
            self.name
        }

        fn supported_extensions(&self) -> &[&str] {
            self.extensions
        }

        fn output_kinds(&self) -> Vec<AssetKind> {
            self.kinds.clone()
        }

        fn import(
            &self,
            _path: &Path,
            _selection: &OutputSelection,
            _logger: &dyn ImportLogger,
        ) -> Result<Vec<ImportedAsset>> {
            Ok(vec![])
        }
    }

    fn registry() -> ImporterRegistry {
        ImporterRegistry::new()
            .with(Box::new(StubImporter {
                name: "images",
                extensions: &["png", "fbx"],
                kinds: vec![AssetKind::Texture],
            }))
            .with(Box::new(StubImporter {
                name: "fbx",
                extensions: &["fbx"],
                kinds: AssetKind::ALL.to_vec(),
            }))
            .with(Box::new(StubImporter {
                name: "fbx-legacy",
                extensions: &["fbx"],
                kinds: vec![AssetKind::Model],
            }))
    }

    #[test]
    fn test_find_preserves_registration_order() {
        let registry = registry();
        let found: Vec<&str> = registry
            .find_importers_for_file(Path::new("raw/chair.fbx"))
            .into_iter()
            .map(|i| i.name())
            .collect();
        assert_eq!(found, vec!["images", "fbx", "fbx-legacy"]);
    }

    #[test]
    fn test_extension_match_ignores_case() {
        let registry = registry();
        assert_eq!(registry.find_importers_for_file(Path::new("CHAIR.FBX")).len(), 3);
        assert!(registry.find_importers_for_file(Path::new("chair")).is_empty());
        assert!(registry.find_importers_for_file(Path::new("chair.obj")).is_empty());
    }

    #[test]
    fn test_find_importer_producing_skips_incapable() {
        let registry = registry();
        let importer = registry
            .find_importer_producing(Path::new("chair.fbx"), AssetKind::Model)
            .unwrap();
        assert_eq!(importer.name(), "fbx");
        assert!(registry
            .find_importer_producing(Path::new("wood.png"), AssetKind::Model)
            .is_none());
    }

    #[test]
    fn test_names() {
        assert_eq!(registry().names(), vec!["images", "fbx", "fbx-legacy"]);
        assert_eq!(registry().len(), 3);
    }
}
