//! Ingot Core - Foundational types for the Ingot import pipeline
//!
//! This crate provides the core types that all other Ingot crates depend on:
//! - `AssetId` - Stable asset identifiers
//! - `AssetLocation` - Namespaced asset paths
//! - Error types and Result alias

mod error;
mod id;
mod location;

pub use error::{IngotError, Result};
pub use id::AssetId;
pub use location::AssetLocation;
