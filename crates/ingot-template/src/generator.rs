//! The model-from-file template generator
//!
//! `generate` drives one import:
//! resolve configuration (may abort) -> dispatch -> skeleton reuse -> unique names.

use crate::config::IngotConfig;
use crate::dispatcher::{FailurePolicy, ImportDispatcher};
use crate::naming::make_unique_names;
use crate::postprocess::apply_skeleton_reuse;
use crate::prompt::ImportPrompt;
use crate::resolver::{ImportConfigurationResolver, Resolution};
use crate::settings::{SettingsSchema, SettingsStore};
use crate::store::TomlSettingsStore;
use ingot_asset::{ArtifactSet, ExistingAssets, ImportedArtifact, SkeletonLookup};
use ingot_core::{AssetLocation, Result};
use ingot_import::{ImportLogger, ImporterRegistry};
use std::path::PathBuf;

pub const DEFAULT_PROFILE: &str = "default";

/// One invocation of the template
#[derive(Debug, Clone)]
pub struct ImportRequest {
    /// Source files, in the order their artifacts should appear
    pub files: Vec<PathBuf>,
    /// Namespace the artifacts are created in
    pub target: AssetLocation,
    /// User profile the remembered choices belong to; the generator's
    /// default profile when unset
    pub profile: Option<String>,
}

impl ImportRequest {
    pub fn new<I, P>(files: I, target: AssetLocation) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            target,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }
}

/// Outcome of [`ModelFromFileGenerator::generate`]
#[derive(Debug, Clone, PartialEq)]
pub enum GenerateOutcome {
    /// Artifacts ready to be added to the project
    Done(Vec<ImportedArtifact>),
    /// The user cancelled; nothing was imported or remembered
    Aborted,
}

impl GenerateOutcome {
    pub fn artifacts(&self) -> &[ImportedArtifact] {
        match self {
            GenerateOutcome::Done(artifacts) => artifacts,
            GenerateOutcome::Aborted => &[],
        }
    }

    pub fn is_aborted(&self) -> bool {
        matches!(self, GenerateOutcome::Aborted)
    }
}

/// What the template creates when it is used without any source file
pub trait BaseTemplate {
    fn create_assets(&self, request: &ImportRequest, logger: &dyn ImportLogger) -> ArtifactSet;
}

/// Creates nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct EmptyTemplate;

impl BaseTemplate for EmptyTemplate {
    fn create_assets(&self, request: &ImportRequest, _logger: &dyn ImportLogger) -> ArtifactSet {
        tracing::debug!(target_location = %request.target, "no source files, nothing to import");
        ArtifactSet::new()
    }
}

/// Imports models (and optionally their materials, textures and skeleton)
/// from source files
pub struct ModelFromFileGenerator<S> {
    settings: S,
    registry: ImporterRegistry,
    resolver: ImportConfigurationResolver,
    policy: FailurePolicy,
    profile: String,
    fallback: Box<dyn BaseTemplate>,
}

impl<S: SettingsStore> ModelFromFileGenerator<S> {
    pub fn new(settings: S, registry: ImporterRegistry) -> Self {
        Self {
            settings,
            registry,
            resolver: ImportConfigurationResolver::default(),
            policy: FailurePolicy::default(),
            profile: DEFAULT_PROFILE.to_string(),
            fallback: Box::new(EmptyTemplate),
        }
    }

    pub fn with_schema(mut self, schema: SettingsSchema) -> Self {
        self.resolver = ImportConfigurationResolver::new(schema);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Profile used for requests that do not name one
    pub fn with_default_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    pub fn with_fallback(mut self, fallback: Box<dyn BaseTemplate>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn settings(&self) -> &S {
        &self.settings
    }

    pub fn registry(&self) -> &ImporterRegistry {
        &self.registry
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn default_profile(&self) -> &str {
        &self.profile
    }

    /// Run the template for `request`.
    ///
    /// `session` answers skeleton lookups and reports which locations are
    /// already taken. Only a strict failure policy turns importer errors into
    /// an `Err`; otherwise they are logged and the file is skipped.
    pub fn generate<P>(
        &mut self,
        request: &ImportRequest,
        session: &P,
        prompt: &mut dyn ImportPrompt,
        logger: &dyn ImportLogger,
    ) -> Result<GenerateOutcome>
    where
        P: SkeletonLookup + ExistingAssets + ?Sized,
    {
        if request.files.is_empty() {
            return Ok(GenerateOutcome::Done(
                self.fallback.create_assets(request, logger),
            ));
        }

        let profile = request.profile.as_deref().unwrap_or(&self.profile);
        let config = match self.resolver.resolve(
            &mut self.settings,
            profile,
            session,
            prompt,
            logger,
        ) {
            Resolution::Confirmed(config) => config,
            Resolution::Cancelled => return Ok(GenerateOutcome::Aborted),
        };

        let dispatcher = ImportDispatcher::new(&self.registry, self.policy);
        let mut artifacts = dispatcher.dispatch(&request.files, &config, &request.target, logger)?;

        let rebound = apply_skeleton_reuse(&mut artifacts, config.skeleton_to_reuse.as_ref());
        if rebound > 0 {
            tracing::debug!(models = rebound, "rebound models to reused skeleton");
        }

        let artifacts = make_unique_names(artifacts, session);
        tracing::info!(
            files = request.files.len(),
            artifacts = artifacts.len(),
            target_location = %request.target,
            "import finished"
        );
        Ok(GenerateOutcome::Done(artifacts))
    }
}

impl ModelFromFileGenerator<TomlSettingsStore> {
    /// Generator using the settings directory, profile and failure policy
    /// from `config`
    pub fn from_config(config: &IngotConfig, registry: ImporterRegistry) -> Self {
        Self::new(config.settings_store(), registry)
            .with_failure_policy(config.failure_policy)
            .with_default_profile(config.profile.clone())
    }
}
