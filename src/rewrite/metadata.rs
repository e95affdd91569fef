//! Loader metadata transforms
//!
//! - Fabric: `fabric.mod.json`, dependencies merged into the `depends` and
//!   `recommends` objects
//! - Forge: `META-INF/mods.toml`, one `[[dependencies.<modid>]]` block
//!   appended per dependency with a `mandatory` flag
//! - NeoForge: `META-INF/neoforge.mods.toml`, same blocks with a `type`
//!   label. NeoForge jars may also carry a Forge-style `META-INF/mods.toml`.
//!
//! TOML files are appended to rather than re-serialized; both loaders
//! accept repeated `[[dependencies.<modid>]]` arrays.

use crate::deps::{DependencyKind, ModDependency};
use crate::error::{ModToolsError, ModToolsResult};
use crate::platform::Platform;
use serde_json::{Map, Value};

pub const FABRIC_MOD_JSON: &str = "fabric.mod.json";
pub const FORGE_MODS_TOML: &str = "META-INF/mods.toml";
pub const NEOFORGE_MODS_TOML: &str = "META-INF/neoforge.mods.toml";

/// Metadata file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataFormat {
    FabricJson,
    ForgeToml,
    NeoForgeToml,
}

impl MetadataFormat {
    /// Format of `entry` when it is a metadata file for `platform`
    pub fn for_entry(platform: Platform, entry: &str) -> Option<Self> {
        match (platform, entry) {
            (Platform::Fabric, FABRIC_MOD_JSON) => Some(Self::FabricJson),
            (Platform::Forge, FORGE_MODS_TOML) => Some(Self::ForgeToml),
            (Platform::NeoForge, NEOFORGE_MODS_TOML) => Some(Self::NeoForgeToml),
            (Platform::NeoForge, FORGE_MODS_TOML) => Some(Self::ForgeToml),
            _ => None,
        }
    }

    /// Rewrite `content` (named `entry`) to declare `deps`
    pub fn apply(
        &self,
        entry: &str,
        content: &[u8],
        mod_id: &str,
        deps: &[ModDependency],
    ) -> ModToolsResult<Vec<u8>> {
        match self {
            Self::FabricJson => fabric_mod_json(entry, content, deps),
            Self::ForgeToml | Self::NeoForgeToml => {
                let text = std::str::from_utf8(content).map_err(|e| {
                    ModToolsError::MetadataInvalid {
                        entry: entry.to_string(),
                        reason: e.to_string(),
                    }
                })?;
                Ok(append_toml_blocks(text, mod_id, deps, *self).into_bytes())
            }
        }
    }
}

/// Merge dependencies into a `fabric.mod.json` document
pub fn fabric_mod_json(
    entry: &str,
    content: &[u8],
    deps: &[ModDependency],
) -> ModToolsResult<Vec<u8>> {
    let invalid = |reason: String| ModToolsError::MetadataInvalid {
        entry: entry.to_string(),
        reason,
    };

    let mut json: Value = serde_json::from_slice(content).map_err(|e| invalid(e.to_string()))?;
    let root = json
        .as_object_mut()
        .ok_or_else(|| invalid("expected a JSON object".to_string()))?;

    for section in ["depends", "recommends"] {
        if !root.get(section).is_some_and(Value::is_object) {
            root.insert(section.to_string(), Value::Object(Map::new()));
        }
    }

    for dep in deps {
        let section = match dep.kind {
            DependencyKind::Required | DependencyKind::Embedded => "depends",
            DependencyKind::Optional => "recommends",
        };
        if let Some(Value::Object(map)) = root.get_mut(section) {
            map.insert(dep.mod_id.clone(), Value::String(format!(">={}", dep.version)));
        }
    }

    Ok(serde_json::to_vec_pretty(&json)?)
}

/// Append one dependency block per entry in `deps` to a mods.toml file
pub fn append_toml_blocks(
    text: &str,
    mod_id: &str,
    deps: &[ModDependency],
    format: MetadataFormat,
) -> String {
    let mut out = String::from(text);

    for dep in deps {
        out.push_str(&format!("\n\n[[dependencies.{}]]\n", mod_id));
        out.push_str(&format!("modId=\"{}\"\n", dep.mod_id));
        match format {
            MetadataFormat::NeoForgeToml => {
                let label = if dep.kind.is_mandatory() { "required" } else { "optional" };
                out.push_str(&format!("type=\"{}\"\n", label));
            }
            _ => out.push_str(&format!("mandatory={}\n", dep.kind.is_mandatory())),
        }
        out.push_str(&format!("versionRange=\"[{},)\"\n", dep.version));
        out.push_str("ordering=\"NONE\"\n");
        out.push_str("side=\"BOTH\"");
    }

    out
}
