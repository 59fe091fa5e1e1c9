//! Turns remembered defaults plus the user's answer into an import configuration

use crate::configuration::ImportConfiguration;
use crate::prompt::{DialogOutcome, ImportPrompt, PromptParameters};
use crate::settings::{PersistedDefaults, SettingsSchema, SettingsStore};
use ingot_asset::SkeletonLookup;
use ingot_core::AssetId;
use ingot_import::ImportLogger;

/// Result of asking the user for an import configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Confirmed(ImportConfiguration),
    Cancelled,
}

/// Resolves the import configuration for one run
#[derive(Debug, Clone, Default)]
pub struct ImportConfigurationResolver {
    schema: SettingsSchema,
}

impl ImportConfigurationResolver {
    pub fn new(schema: SettingsSchema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &SettingsSchema {
        &self.schema
    }

    /// Parameters the prompt opens with: last used values, plus the last
    /// skeleton as a suggestion if it still exists
    pub fn initial_parameters<L>(
        &self,
        store: &dyn SettingsStore,
        profile: &str,
        lookup: &L,
        logger: &dyn ImportLogger,
    ) -> PromptParameters
    where
        L: SkeletonLookup + ?Sized,
    {
        let defaults = self.schema.load(store, profile, logger);
        let suggested = if defaults.skeleton_id.is_empty() {
            None
        } else {
            let found = lookup.find_asset_by_id(defaults.skeleton_id);
            if found.is_none() {
                tracing::debug!(
                    skeleton = %defaults.skeleton_id,
                    "remembered skeleton no longer exists"
                );
            }
            found
        };

        PromptParameters {
            import_materials: defaults.import_materials,
            import_textures: defaults.import_textures,
            import_skeleton: defaults.import_skeleton,
            reuse_skeleton: suggested.is_some(),
            skeleton_to_reuse: suggested,
        }
    }

    /// Ask the user, then remember the answer.
    ///
    /// On cancel nothing is written. On confirm every remembered value is
    /// written and saved, even if unchanged; a failed save is reported to
    /// `logger` but does not cancel the import.
    pub fn resolve<L>(
        &self,
        store: &mut dyn SettingsStore,
        profile: &str,
        lookup: &L,
        prompt: &mut dyn ImportPrompt,
        logger: &dyn ImportLogger,
    ) -> Resolution
    where
        L: SkeletonLookup + ?Sized,
    {
        let initial = self.initial_parameters(&*store, profile, lookup, logger);

        let answer = match prompt.show(&initial) {
            DialogOutcome::Cancel => {
                tracing::debug!(profile, "import prompt cancelled");
                return Resolution::Cancelled;
            }
            DialogOutcome::Confirm(answer) => answer,
        };

        let config = ImportConfiguration {
            import_materials: answer.import_materials,
            import_textures: answer.import_textures,
            import_skeleton: answer.import_skeleton,
            skeleton_to_reuse: if answer.reuse_skeleton {
                answer.skeleton_to_reuse
            } else {
                None
            },
        };

        let remembered = PersistedDefaults {
            import_materials: config.import_materials,
            import_textures: config.import_textures,
            import_skeleton: config.import_skeleton,
            skeleton_id: config
                .skeleton_to_reuse
                .as_ref()
                .map(|s| s.id)
                .unwrap_or(AssetId::EMPTY),
        };
        self.schema.stage(store, &remembered, profile);
        if let Err(e) = store.save(profile) {
            logger.error(&format!(
                "Could not save import settings for profile '{}': {}",
                profile, e
            ));
        }

        Resolution::Confirmed(config)
    }
}
