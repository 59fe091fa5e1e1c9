//! Ingot Asset - Imported artifacts and the existing-asset catalog
//!
//! This crate provides the closed set of artifact variants an import can
//! produce, the references between them, and a catalog of assets that
//! already live in a project namespace.

mod artifact;
mod catalog;
mod lookup;
mod types;

pub use artifact::{relink_references, ArtifactSet, ImportedArtifact};
pub use catalog::AssetCatalog;
pub use lookup::{ExistingAssets, NoExistingAssets, SkeletonLookup};
pub use types::{
    AssetContent, AssetKind, AssetMeta, AssetReference, MaterialAsset, ModelAsset, SkeletonAsset,
    TextureAsset,
};
