//! The confirmed choices for one import run

use ingot_asset::{AssetKind, AssetReference};
use ingot_import::OutputSelection;

/// What the user asked the import to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportConfiguration {
    pub import_materials: bool,
    pub import_textures: bool,
    pub import_skeleton: bool,
    /// Existing skeleton every imported model is rebound to.
    /// Only set when the user explicitly chose to reuse one.
    pub skeleton_to_reuse: Option<AssetReference>,
}

impl ImportConfiguration {
    /// Models are always requested; other outputs follow their flags
    pub fn output_selection(&self) -> OutputSelection {
        OutputSelection::models_only()
            .with(AssetKind::Material, self.import_materials)
            .with(AssetKind::Texture, self.import_textures)
            .with(AssetKind::Skeleton, self.import_skeleton)
    }
}

impl Default for ImportConfiguration {
    fn default() -> Self {
        Self {
            import_materials: true,
            import_textures: true,
            import_skeleton: true,
            skeleton_to_reuse: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_always_has_models() {
        let config = ImportConfiguration {
            import_materials: false,
            import_textures: false,
            import_skeleton: false,
            skeleton_to_reuse: None,
        };
        let selection = config.output_selection();
        assert!(selection.includes(AssetKind::Model));
        assert_eq!(selection.kinds().count(), 1);
    }

    #[test]
    fn test_selection_follows_flags() {
        let config = ImportConfiguration {
            import_materials: true,
            import_textures: false,
            import_skeleton: true,
            skeleton_to_reuse: None,
        };
        let selection = config.output_selection();
        assert!(selection.includes(AssetKind::Material));
        assert!(!selection.includes(AssetKind::Texture));
        assert!(selection.includes(AssetKind::Skeleton));
    }
}
