//! Collision-free asset locations

use ingot_asset::{relink_references, ArtifactSet, ExistingAssets};
use ingot_core::AssetLocation;
use std::collections::HashSet;

/// Give every artifact a location that is unique in the batch and in `existing`.
///
/// Artifacts are visited in order; the first one to claim a location keeps it
/// and later ones get `_1`, `_2`, ... appended to their name. Comparison ignores
/// case. References between artifacts of the batch follow the renames.
pub fn make_unique_names<E>(mut artifacts: ArtifactSet, existing: &E) -> ArtifactSet
where
    E: ExistingAssets + ?Sized,
{
    let mut taken: HashSet<String> = HashSet::with_capacity(artifacts.len());
    let mut renamed = false;

    for artifact in artifacts.iter_mut() {
        let unique = compute_unique_location(&artifact.location, |candidate| {
            taken.contains(&candidate.key()) || existing.contains_location(candidate)
        });

        if unique != artifact.location {
            tracing::debug!(from = %artifact.location, to = %unique, "renamed to avoid collision");
            artifact.rename(unique.name());
            renamed = true;
        }
        taken.insert(artifact.location.key());
    }

    if renamed {
        relink_references(&mut artifacts);
    }
    artifacts
}

/// First of `location`, `location_1`, `location_2`, ... for which `is_taken` is false
pub fn compute_unique_location<F>(location: &AssetLocation, mut is_taken: F) -> AssetLocation
where
    F: FnMut(&AssetLocation) -> bool,
{
    if !is_taken(location) {
        return location.clone();
    }

    let base = location.name().to_string();
    (1u32..)
        .map(|n| location.with_name(&format!("{}_{}", base, n)))
        .find(|candidate| !is_taken(candidate))
        .unwrap_or_else(|| location.clone())
}
