//! The build unit a command operates on
//!
//! Combines the `[project]` table of `modtools.toml`, the project
//! directory and `gradle.properties` into the values commands need.

use crate::config::{Config, DependencyDecl};
use crate::deps::notation::Declared;
use crate::deps::DependencyHandler;
use crate::error::ModToolsResult;
use crate::platform::{self, Platform};
use crate::properties::PropertyLookup;
use std::path::Path;
use tracing::debug;

/// Property names consulted for the mod id, in order
pub const MOD_ID_PROPERTIES: &[&str] = &["mod_id", "modId"];

/// A resolved build unit
#[derive(Debug, Clone)]
pub struct BuildUnit {
    pub name: String,

    /// Tracker key, e.g. `:fabric`
    pub path: String,

    pub mod_id: String,

    pub platform: Option<Platform>,

    pub properties: PropertyLookup,
}

impl BuildUnit {
    /// Resolve the unit for `project_dir`
    pub fn resolve(config: &Config, project_dir: &Path) -> ModToolsResult<Self> {
        let project = config.project.clone().unwrap_or_default();
        let properties = PropertyLookup::load(project_dir)?;

        let name = project.name.unwrap_or_else(|| {
            project_dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "root".to_string())
        });
        let path = project.path.unwrap_or_else(|| format!(":{}", name));

        let mod_id = project
            .mod_id
            .or_else(|| MOD_ID_PROPERTIES.iter().find_map(|p| properties.get(p)))
            .unwrap_or_else(|| name.clone());

        let platform = project
            .platform
            .or_else(|| platform::detect(&name, &path, &project.plugins));
        debug!(
            "Build unit {} (mod id {}, platform {:?})",
            path, mod_id, platform
        );

        Ok(Self {
            name,
            path,
            mod_id,
            platform,
            properties,
        })
    }
}

/// Declare every `[[dependencies]]` entry through `handler`
pub fn declare_all(handler: &DependencyHandler<'_>, decls: &[DependencyDecl]) -> Vec<Declared> {
    decls
        .iter()
        .filter_map(|decl| {
            handler.declare(
                &decl.notation,
                decl.mod_id.as_deref(),
                decl.version.as_deref(),
                decl.kind,
            )
        })
        .collect()
}
