//! Error types for Ingot

use thiserror::Error;

/// The main error type for Ingot operations
#[derive(Debug, Error)]
pub enum IngotError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParseError(String),

    #[error("TOML serialization error: {0}")]
    TomlSerError(String),

    #[error("Invalid asset location: {0}")]
    InvalidLocation(String),

    #[error("Invalid asset id: {0}")]
    InvalidAssetId(String),

    #[error("Asset error: {0}")]
    AssetError(String),

    #[error("Import error: {file}: {message}")]
    ImportError { file: String, message: String },

    #[error("Settings error: {0}")]
    SettingsError(String),

    #[error("Config error: {0}")]
    ConfigError(String),
}

/// Result type alias for Ingot operations
pub type Result<T> = std::result::Result<T, IngotError>;

impl IngotError {
    /// Build an import error for a source file
    pub fn import(file: impl Into<String>, message: impl Into<String>) -> Self {
        IngotError::ImportError {
            file: file.into(),
            message: message.into(),
        }
    }
}

impl From<toml::de::Error> for IngotError {
    fn from(err: toml::de::Error) -> Self {
        IngotError::TomlParseError(err.to_string())
    }
}

impl From<toml::ser::Error> for IngotError {
    fn from(err: toml::ser::Error) -> Self {
        IngotError::TomlSerError(err.to_string())
    }
}
