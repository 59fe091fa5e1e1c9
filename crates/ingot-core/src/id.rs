//! Stable asset identifiers

use crate::error::{IngotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A stable asset identifier that survives renames and moves.
///
/// References between assets (model to skeleton, material to texture) are
/// keyed by `AssetId`, so changing an asset's location never breaks them.
/// The nil UUID is reserved as [`AssetId::EMPTY`], meaning "no asset".
#[derive(Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetId(Uuid);

impl AssetId {
    /// The empty identifier
    pub const EMPTY: AssetId = AssetId(Uuid::nil());

    /// Create a new random AssetId
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create an AssetId from an existing UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// True for [`AssetId::EMPTY`]
    pub fn is_empty(&self) -> bool {
        self.0.is_nil()
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromStr for AssetId {
    type Err = IngotError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Ok(Self::EMPTY);
        }
        Uuid::parse_str(trimmed)
            .map(Self)
            .map_err(|e| IngotError::InvalidAssetId(format!("'{}': {}", s, e)))
    }
}

impl fmt::Debug for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetId({})", self.0)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
