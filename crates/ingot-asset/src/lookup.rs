//! Lookups the import pipeline performs against the surrounding project

use crate::types::AssetReference;
use ingot_core::{AssetId, AssetLocation};

/// Resolves a persisted skeleton id back to a live asset
pub trait SkeletonLookup {
    /// Returns `None` when the id is empty or the asset no longer exists
    fn find_asset_by_id(&self, id: AssetId) -> Option<AssetReference>;
}

/// Answers whether a location is already taken in the target namespace
pub trait ExistingAssets {
    fn contains_location(&self, location: &AssetLocation) -> bool;
}

/// An empty project: nothing exists, nothing resolves
#[derive(Debug, Default, Clone, Copy)]
pub struct NoExistingAssets;

impl SkeletonLookup for NoExistingAssets {
    fn find_asset_by_id(&self, _id: AssetId) -> Option<AssetReference> {
        None
    }
}

impl ExistingAssets for NoExistingAssets {
    fn contains_location(&self, _location: &AssetLocation) -> bool {
        false
    }
}
