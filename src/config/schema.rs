//! Configuration schema for modding-tools
//!
//! Global configuration is stored at `~/.config/modding-tools/config.toml`.
//! A project-local `modtools.toml` may override any of it and declares the
//! build unit and its mod dependencies.

use crate::catalog::source::BUILTIN_LOCATION;
use crate::deps::DependencyKind;
use crate::platform::Platform;
use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Version catalog settings
    pub catalog: CatalogConfig,

    /// Build unit settings (project-local)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<ProjectConfig>,

    /// Declared mod dependencies (project-local)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dependencies: Vec<DependencyDecl>,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Enable verbose logging
    pub verbose: bool,

    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            log_format: "text".to_string(),
        }
    }
}

/// Version catalog settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog name as referenced from build scripts
    pub name: String,

    /// Clear the resolution cache before resolving
    pub clear_cache: bool,

    /// `builtin` or a directory holding `_base.json`, overlays and `index.txt`
    pub versions_source: String,

    /// Minecraft version used when no project property names one
    pub default_minecraft_version: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            name: "nyfs".to_string(),
            clear_cache: false,
            versions_source: BUILTIN_LOCATION.to_string(),
            default_minecraft_version: None,
        }
    }
}

/// Build unit settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Project name (defaults to the project directory name)
    pub name: Option<String>,

    /// Build-unit path (defaults to `:<name>`)
    pub path: Option<String>,

    /// Mod id written into metadata (defaults to the project name)
    pub mod_id: Option<String>,

    /// Loader platform; detected from name, path and plugins when unset
    pub platform: Option<Platform>,

    /// Gradle plugin ids applied to the project
    pub plugins: Vec<String>,
}

/// A `[[dependencies]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDecl {
    /// Maven coordinate `group:artifact:version`
    pub notation: String,

    #[serde(default = "default_kind")]
    pub kind: DependencyKind,

    /// Mod id override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_id: Option<String>,

    /// Minimum version override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

fn default_kind() -> DependencyKind {
    DependencyKind::Required
}
