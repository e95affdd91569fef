//! Error types for modding-tools
//!
//! All modules use `ModToolsResult<T>` as their return type.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modding-tools operations
pub type ModToolsResult<T> = Result<T, ModToolsError>;

/// All errors that can occur in modding-tools
#[derive(Error, Debug)]
pub enum ModToolsError {
    // Configuration errors
    #[error("Invalid configuration at {path}: {reason}")]
    ConfigInvalid { path: PathBuf, reason: String },

    #[error("Failed to create config directory {path}: {source}")]
    ConfigDirCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Version data errors
    #[error("Malformed version data in {file}: {reason}")]
    VersionDataInvalid { file: String, reason: String },

    #[error("Version data source not found: {0}")]
    VersionSourceNotFound(PathBuf),

    // Dependency errors
    #[error("Invalid dependency notation '{notation}': {reason}")]
    NotationInvalid { notation: String, reason: String },

    #[error("Unknown mod loader platform: {0}")]
    UnknownPlatform(String),

    #[error("Could not detect the mod loader platform for {0}")]
    PlatformUndetected(String),

    // Archive errors
    #[error("Archive error in {path}: {source}")]
    Archive {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("Malformed metadata entry {entry}: {reason}")]
    MetadataInvalid { entry: String, reason: String },

    // IO errors
    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    // General errors
    #[error("Internal error: {0}")]
    Internal(String),

    #[error("{0}")]
    User(String),
}

impl ModToolsError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create an archive error for the given jar
    pub fn archive(path: impl Into<PathBuf>, source: zip::result::ZipError) -> Self {
        Self::Archive {
            path: path.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::VersionDataInvalid { .. } => {
                Some("Fix the version data file or point --source at a valid directory")
            }
            Self::VersionSourceNotFound(_) => {
                Some("Run: modding-tools config set catalog.versions_source builtin")
            }
            Self::PlatformUndetected(_) => Some("Pass --platform fabric|forge|neoforge"),
            Self::UnknownPlatform(_) => Some("Valid platforms: fabric, forge, neoforge"),
            _ => None,
        }
    }
}
