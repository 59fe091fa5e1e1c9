//! Imported artifacts and their target locations

use crate::types::{AssetContent, AssetKind, AssetMeta, AssetReference};
use ingot_core::{AssetId, AssetLocation};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The ordered output of one import run
pub type ArtifactSet = Vec<ImportedArtifact>;

/// An asset produced by an import, placed at its final location
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportedArtifact {
    pub location: AssetLocation,
    pub content: AssetContent,
}

impl ImportedArtifact {
    pub fn new(location: AssetLocation, content: AssetContent) -> Self {
        Self { location, content }
    }

    pub fn id(&self) -> AssetId {
        self.content.id()
    }

    pub fn kind(&self) -> AssetKind {
        self.content.kind()
    }

    /// Asset name (last segment of the location)
    pub fn name(&self) -> &str {
        self.location.name()
    }

    /// Change the asset name, keeping its directory
    pub fn rename(&mut self, name: &str) {
        self.location = self.location.with_name(name);
    }

    /// A reference other assets can hold to this artifact
    pub fn reference(&self) -> AssetReference {
        AssetReference::new(self.id(), self.location.clone())
    }

    /// Catalog metadata for registering this artifact once it is saved
    pub fn to_meta(&self) -> AssetMeta {
        AssetMeta {
            id: self.id(),
            location: self.location.clone(),
            kind: self.kind(),
            source_path: self.content.source().map(String::from),
        }
    }
}

/// Refresh the location of every reference that points inside `artifacts`.
///
/// References are matched by id; references to assets outside the set are
/// left as they are.
pub fn relink_references(artifacts: &mut [ImportedArtifact]) {
    let locations: HashMap<AssetId, AssetLocation> = artifacts
        .iter()
        .map(|a| (a.id(), a.location.clone()))
        .collect();

    for artifact in artifacts.iter_mut() {
        for reference in artifact.content.references_mut() {
            if let Some(location) = locations.get(&reference.id) {
                if reference.location != *location {
                    reference.location = location.clone();
                }
            }
        }
    }
}
