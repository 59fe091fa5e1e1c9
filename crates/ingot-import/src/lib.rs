//! Ingot Import - Importer seam
//!
//! Importers for individual file formats live outside this workspace. This
//! crate defines what they must implement, how they are registered and
//! selected, and the logging sink they report through.

mod importer;
mod logger;
mod registry;
mod selection;

pub use importer::{AssetImporter, ImportedAsset};
pub use logger::{ImportLogger, LogLevel, MemoryLogger, TracingLogger};
pub use registry::ImporterRegistry;
pub use selection::OutputSelection;
