//! Ingot Template - The model-from-file import template
//!
//! Given source files dropped into the editor, the template asks the user
//! which outputs to import (remembering the previous answer per profile),
//! runs the matching importers, rewires models onto a reused skeleton and
//! gives every produced asset a unique location.

pub mod config;
pub mod configuration;
pub mod dispatcher;
pub mod generator;
pub mod naming;
pub mod postprocess;
pub mod prompt;
pub mod resolver;
pub mod settings;
pub mod store;

pub use config::IngotConfig;
pub use configuration::ImportConfiguration;
pub use dispatcher::{FailurePolicy, ImportDispatcher};
pub use generator::{BaseTemplate, EmptyTemplate, GenerateOutcome, ImportRequest, ModelFromFileGenerator};
pub use naming::make_unique_names;
pub use postprocess::apply_skeleton_reuse;
pub use prompt::{AcceptDefaultsPrompt, DialogOutcome, ImportPrompt, PromptParameters};
pub use resolver::{ImportConfigurationResolver, Resolution};
pub use settings::{
    MemorySettingsStore, PersistedDefaults, SettingValue, SettingsKey, SettingsSchema,
    SettingsStore,
};
pub use store::TomlSettingsStore;
