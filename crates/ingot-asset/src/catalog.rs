//! Catalog of assets already present in a project

use crate::artifact::ImportedArtifact;
use crate::lookup::{ExistingAssets, SkeletonLookup};
use crate::types::{AssetKind, AssetMeta, AssetReference};
use ingot_core::{AssetId, AssetLocation};
use std::collections::HashMap;

/// Catalog of known assets and their metadata
#[derive(Debug, Default)]
pub struct AssetCatalog {
    /// Assets indexed by id
    assets: HashMap<AssetId, AssetMeta>,
    /// Case-folded location to id index
    location_index: HashMap<String, AssetId>,
}

impl AssetCatalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset in the catalog, replacing any previous entry with the same id
    pub fn register(&mut self, meta: AssetMeta) {
        if let Some(previous) = self.assets.get(&meta.id) {
            self.location_index.remove(&previous.location.key());
        }
        self.location_index.insert(meta.location.key(), meta.id);
        self.assets.insert(meta.id, meta);
    }

    /// Register every artifact of a finished import
    pub fn register_artifacts<'a, I>(&mut self, artifacts: I)
    where
        I: IntoIterator<Item = &'a ImportedArtifact>,
    {
        for artifact in artifacts {
            self.register(artifact.to_meta());
        }
    }

    /// Get asset metadata by id
    pub fn get(&self, id: AssetId) -> Option<&AssetMeta> {
        self.assets.get(&id)
    }

    /// Get the number of registered assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl SkeletonLookup for AssetCatalog {
    fn find_asset_by_id(&self, id: AssetId) -> Option<AssetReference> {
        if id.is_empty() {
            return None;
        }
        self.get(id)
            .filter(|meta| meta.kind == AssetKind::Skeleton)
            .map(AssetMeta::reference)
    }
}

impl ExistingAssets for AssetCatalog {
    fn contains_location(&self, location: &AssetLocation) -> bool {
        self.location_index.contains_key(&location.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AssetContent, SkeletonAsset};

    fn meta(location: &str, kind: AssetKind) -> AssetMeta {
        AssetMeta {
            id: AssetId::new(),
            location: AssetLocation::new(location).unwrap(),
            kind,
            source_path: None,
        }
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = AssetCatalog::new();
        let skeleton = meta("Characters/hero_skeleton", AssetKind::Skeleton);
        let id = skeleton.id;
        catalog.register(skeleton);

        assert!(catalog.get(id).is_some());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_location_lookup_ignores_case() {
        let mut catalog = AssetCatalog::new();
        catalog.register(meta("Characters/Hero", AssetKind::Model));

        let lowered = AssetLocation::new("characters/hero").unwrap();
        assert!(catalog.contains_location(&lowered));
    }

    #[test]
    fn test_reregister_moves_location() {
        let mut catalog = AssetCatalog::new();
        let mut m = meta("Characters/hero", AssetKind::Model);
        catalog.register(m.clone());

        m.location = AssetLocation::new("Characters/villain").unwrap();
        catalog.register(m);

        assert!(!catalog.contains_location(&AssetLocation::new("Characters/hero").unwrap()));
        assert!(catalog.contains_location(&AssetLocation::new("Characters/villain").unwrap()));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_skeleton_lookup_requires_skeleton_kind() {
        let mut catalog = AssetCatalog::new();
        let skeleton = meta("Characters/rig", AssetKind::Skeleton);
        let model = meta("Characters/hero", AssetKind::Model);
        let (skeleton_id, model_id) = (skeleton.id, model.id);
        catalog.register(skeleton);
        catalog.register(model);

        let found = catalog.find_asset_by_id(skeleton_id).unwrap();
        assert_eq!(found.location.as_str(), "Characters/rig");
        assert!(catalog.find_asset_by_id(model_id).is_none());
        assert!(catalog.find_asset_by_id(AssetId::EMPTY).is_none());
        assert!(catalog.find_asset_by_id(AssetId::new()).is_none());
    }

    #[test]
    fn test_register_artifacts_claims_locations() {
        let mut catalog = AssetCatalog::new();
        let rig = ImportedArtifact::new(
            AssetLocation::new("Characters/rig").unwrap(),
            AssetContent::Skeleton(SkeletonAsset {
                id: AssetId::new(),
                source: Some("raw/rig.fbx".to_string()),
                joints: vec![],
            }),
        );
        catalog.register_artifacts([&rig]);

        assert!(catalog.contains_location(&AssetLocation::new("characters/RIG").unwrap()));
        assert_eq!(catalog.find_asset_by_id(rig.id()), Some(rig.reference()));
        assert_eq!(catalog.get(rig.id()).unwrap().source_path.as_deref(), Some("raw/rig.fbx"));
    }
}
