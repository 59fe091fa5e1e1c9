//! Runs the importer for each source file and collects the produced artifacts

use crate::configuration::ImportConfiguration;
use ingot_asset::{relink_references, ArtifactSet, AssetKind, ImportedArtifact};
use ingot_core::{AssetLocation, IngotError, Result};
use ingot_import::{ImportLogger, ImporterRegistry};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// What to do when an importer fails on one file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Log the failure, drop that file's output and keep going
    #[default]
    Continue,
    /// Abort the whole import with the first failure
    Strict,
}

/// Imports a list of files through the registry
pub struct ImportDispatcher<'a> {
    registry: &'a ImporterRegistry,
    policy: FailurePolicy,
}

impl<'a> ImportDispatcher<'a> {
    pub fn new(registry: &'a ImporterRegistry, policy: FailurePolicy) -> Self {
        Self { registry, policy }
    }

    /// Import every file in order.
    ///
    /// Artifacts are placed under `target`, grouped by file in input order,
    /// keeping each importer's own ordering within a file.
    pub fn dispatch(
        &self,
        files: &[PathBuf],
        config: &ImportConfiguration,
        target: &AssetLocation,
        logger: &dyn ImportLogger,
    ) -> Result<ArtifactSet> {
        let mut artifacts = ArtifactSet::new();

        for file in files {
            match self.import_file(file, config, target, logger) {
                Ok(Some(mut produced)) => artifacts.append(&mut produced),
                Ok(None) => {}
                Err(e) => match self.policy {
                    FailurePolicy::Continue => {
                        logger.error(&format!(
                            "Failed to import file \"{}\": {}",
                            file.display(),
                            e
                        ));
                    }
                    FailurePolicy::Strict => return Err(e),
                },
            }
        }

        Ok(artifacts)
    }

    /// `Ok(None)` when no importer handles the file
    fn import_file(
        &self,
        file: &Path,
        config: &ImportConfiguration,
        target: &AssetLocation,
        logger: &dyn ImportLogger,
    ) -> Result<Option<ArtifactSet>> {
        let Some(importer) = self.registry.find_importer_producing(file, AssetKind::Model) else {
            logger.warning(&format!("No importer found for file \"{}\"", file.display()));
            return Ok(None);
        };

        let selection = config.output_selection();
        tracing::debug!(
            file = %file.display(),
            importer = importer.name(),
            "importing"
        );

        let imported = importer
            .import(file, &selection, logger)
            .map_err(|e| match e {
                err @ IngotError::ImportError { .. } => err,
                other => IngotError::import(file.display().to_string(), other.to_string()),
            })?;

        let mut artifacts = ArtifactSet::with_capacity(imported.len());
        let mut dropped = HashSet::new();
        for asset in imported {
            let kind = asset.content.kind();
            if !selection.includes(kind) {
                logger.debug(&format!(
                    "Dropping {} '{}' from \"{}\": not selected",
                    kind,
                    asset.location,
                    file.display()
                ));
                dropped.insert(asset.content.id());
                continue;
            }

            let mut content = asset.content;
            if content.source().is_none() {
                content.set_source(file.display().to_string());
            }
            artifacts.push(ImportedArtifact::new(target.join(&asset.location), content));
        }

        if !dropped.is_empty() {
            for artifact in artifacts.iter_mut() {
                artifact.content.remove_references_to(&dropped);
            }
        }
        relink_references(&mut artifacts);
        Ok(Some(artifacts))
    }
}
