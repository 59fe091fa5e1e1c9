//! Namespaced asset locations

use crate::error::{IngotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A forward-slash separated asset path inside a project, e.g. `Models/Props/chair`.
///
/// Locations are stored normalized: no leading or trailing separator, no empty
/// segments, and backslashes converted to `/`. The empty location is the
/// namespace root.
#[derive(Clone, Default, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AssetLocation(String);

impl AssetLocation {
    /// Parse and normalize a location
    pub fn new(path: &str) -> Result<Self> {
        let mut segments = Vec::new();
        for segment in path.split(['/', '\\']) {
            match segment.trim() {
                "" | "." => continue,
                ".." => {
                    return Err(IngotError::InvalidLocation(format!(
                        "'{}' escapes its namespace",
                        path
                    )))
                }
                s => segments.push(s),
            }
        }
        Ok(Self(segments.join("/")))
    }

    /// The namespace root
    pub fn root() -> Self {
        Self::default()
    }

    /// True for the namespace root
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Combine this location with a relative one
    pub fn join(&self, relative: &AssetLocation) -> AssetLocation {
        match (self.is_root(), relative.is_root()) {
            (true, _) => relative.clone(),
            (false, true) => self.clone(),
            (false, false) => Self(format!("{}/{}", self.0, relative.0)),
        }
    }

    /// Last path segment
    pub fn name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or("")
    }

    /// Everything before the last segment
    pub fn parent(&self) -> AssetLocation {
        match self.0.rfind('/') {
            Some(idx) => Self(self.0[..idx].to_string()),
            None => Self::root(),
        }
    }

    /// Same directory, different last segment
    pub fn with_name(&self, name: &str) -> AssetLocation {
        self.parent().join(&Self(name.to_string()))
    }

    /// Case-folded form used for uniqueness checks
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AssetLocation {
    type Error = IngotError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl From<AssetLocation> for String {
    fn from(location: AssetLocation) -> Self {
        location.0
    }
}

impl fmt::Debug for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssetLocation({:?})", self.0)
    }
}

impl fmt::Display for AssetLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
