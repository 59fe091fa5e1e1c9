//! Rebinds imported models onto a reused skeleton

use ingot_asset::{AssetReference, ImportedArtifact};

/// Point every model in `artifacts` at `skeleton`.
///
/// Does nothing when `skeleton` is `None`; other artifact kinds are never
/// touched. Returns the number of models rebound.
pub fn apply_skeleton_reuse(
    artifacts: &mut [ImportedArtifact],
    skeleton: Option<&AssetReference>,
) -> usize {
    let Some(skeleton) = skeleton else {
        return 0;
    };

    let mut rebound = 0;
    for model in artifacts.iter_mut().filter_map(|a| a.content.as_model_mut()) {
        model.skeleton = Some(skeleton.clone());
        rebound += 1;
    }
    rebound
}
