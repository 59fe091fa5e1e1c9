//! Asset type definitions

use ingot_core::{AssetId, AssetLocation};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Categories of output an import can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Model,
    Material,
    Texture,
    Skeleton,
}

impl AssetKind {
    pub const ALL: [AssetKind; 4] = [
        AssetKind::Model,
        AssetKind::Material,
        AssetKind::Texture,
        AssetKind::Skeleton,
    ];
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetKind::Model => write!(f, "model"),
            AssetKind::Material => write!(f, "material"),
            AssetKind::Texture => write!(f, "texture"),
            AssetKind::Skeleton => write!(f, "skeleton"),
        }
    }
}

/// A reference from one asset to another.
///
/// The id is authoritative; the location is carried along so references can be
/// displayed and written out without a catalog round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetReference {
    pub id: AssetId,
    pub location: AssetLocation,
}

impl AssetReference {
    pub fn new(id: AssetId, location: AssetLocation) -> Self {
        Self { id, location }
    }
}

impl fmt::Display for AssetReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.location)
    }
}

/// Imported model (geometry plus links to its materials and skeleton)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelAsset {
    pub id: AssetId,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub meshes: Vec<String>,
    #[serde(default)]
    pub materials: Vec<AssetReference>,
    #[serde(default)]
    pub skeleton: Option<AssetReference>,
    #[serde(default)]
    pub properties: HashMap<String, toml::Value>,
}

/// Imported PBR material
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialAsset {
    pub id: AssetId,
    #[serde(default)]
    pub source: Option<String>,
    pub base_color: [f32; 4],
    #[serde(default)]
    pub textures: Vec<AssetReference>,
}

/// Imported texture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextureAsset {
    pub id: AssetId,
    #[serde(default)]
    pub source: Option<String>,
    pub width: u32,
    pub height: u32,
    pub format: String,
}

/// Imported skeleton (joint hierarchy, names only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkeletonAsset {
    pub id: AssetId,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub joints: Vec<String>,
}

/// Payload of an imported artifact
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AssetContent {
    Model(ModelAsset),
    Material(MaterialAsset),
    Texture(TextureAsset),
    Skeleton(SkeletonAsset),
}

impl AssetContent {
    pub fn kind(&self) -> AssetKind {
        match self {
            AssetContent::Model(_) => AssetKind::Model,
            AssetContent::Material(_) => AssetKind::Material,
            AssetContent::Texture(_) => AssetKind::Texture,
            AssetContent::Skeleton(_) => AssetKind::Skeleton,
        }
    }

    pub fn id(&self) -> AssetId {
        match self {
            AssetContent::Model(m) => m.id,
            AssetContent::Material(m) => m.id,
            AssetContent::Texture(t) => t.id,
            AssetContent::Skeleton(s) => s.id,
        }
    }

    /// Source file this content was imported from, if recorded
    pub fn source(&self) -> Option<&str> {
        match self {
            AssetContent::Model(m) => m.source.as_deref(),
            AssetContent::Material(m) => m.source.as_deref(),
            AssetContent::Texture(t) => t.source.as_deref(),
            AssetContent::Skeleton(s) => s.source.as_deref(),
        }
    }

    pub fn set_source(&mut self, source: String) {
        let slot = match self {
            AssetContent::Model(m) => &mut m.source,
            AssetContent::Material(m) => &mut m.source,
            AssetContent::Texture(t) => &mut t.source,
            AssetContent::Skeleton(s) => &mut s.source,
        };
        *slot = Some(source);
    }

    pub fn as_model(&self) -> Option<&ModelAsset> {
        match self {
            AssetContent::Model(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_model_mut(&mut self) -> Option<&mut ModelAsset> {
        match self {
            AssetContent::Model(m) => Some(m),
            _ => None,
        }
    }

    /// Visit every outgoing reference held by this content
    pub fn references_mut(&mut self) -> Vec<&mut AssetReference> {
        match self {
            AssetContent::Model(m) => m.materials.iter_mut().chain(m.skeleton.as_mut()).collect(),
            AssetContent::Material(m) => m.textures.iter_mut().collect(),
            AssetContent::Texture(_) | AssetContent::Skeleton(_) => Vec::new(),
        }
    }

    /// Drop every outgoing reference whose target is in `ids`
    pub fn remove_references_to(&mut self, ids: &HashSet<AssetId>) {
        match self {
            AssetContent::Model(m) => {
                m.materials.retain(|r| !ids.contains(&r.id));
                if m.skeleton.as_ref().is_some_and(|s| ids.contains(&s.id)) {
                    m.skeleton = None;
                }
            }
            AssetContent::Material(m) => m.textures.retain(|r| !ids.contains(&r.id)),
            AssetContent::Texture(_) | AssetContent::Skeleton(_) => {}
        }
    }
}

/// Catalog metadata for an asset that exists in a project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetMeta {
    pub id: AssetId,
    pub location: AssetLocation,
    #[serde(rename = "type")]
    pub kind: AssetKind,
    #[serde(default)]
    pub source_path: Option<String>,
}

impl AssetMeta {
    pub fn reference(&self) -> AssetReference {
        AssetReference::new(self.id, self.location.clone())
    }
}
