//! Mod loader platforms and detection

use crate::error::ModToolsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gradle plugin applied by Fabric projects
pub const FABRIC_LOOM_PLUGIN: &str = "fabric-loom";
/// Gradle plugin applied by NeoForge projects
pub const NEOFORGE_MODDEV_PLUGIN: &str = "net.neoforged.moddev";
/// Gradle plugin applied by Forge projects
pub const FORGE_GRADLE_PLUGIN: &str = "net.minecraftforge.gradle";

/// Supported mod loaders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Fabric,
    Forge,
    #[serde(rename = "neoforge")]
    NeoForge,
}

impl Platform {
    /// Configuration that bundles embedded dependencies into the jar
    pub fn embed_configuration(&self) -> &'static str {
        match self {
            Self::Fabric => "include",
            Self::Forge | Self::NeoForge => "jarJar",
        }
    }

    /// Archive tasks whose output carries mod metadata
    pub fn archive_tasks(&self) -> &'static [&'static str] {
        match self {
            Self::Fabric => &["jar", "remapJar"],
            Self::Forge | Self::NeoForge => &["jar", "jarJar"],
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fabric => "fabric",
            Self::Forge => "forge",
            Self::NeoForge => "neoforge",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Platform {
    type Err = ModToolsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fabric" => Ok(Self::Fabric),
            "forge" => Ok(Self::Forge),
            "neoforge" => Ok(Self::NeoForge),
            other => Err(ModToolsError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Infer the platform of a build unit.
///
/// Precedence: name/path containing `fabric`, then `neoforge`, then
/// `forge`; then the loader Gradle plugins in the same order.
pub fn detect(name: &str, path: &str, plugins: &[String]) -> Option<Platform> {
    let name = name.to_lowercase();
    let path = path.to_lowercase();
    let mentions = |needle: &str| name.contains(needle) || path.contains(needle);
    let has_plugin = |id: &str| plugins.iter().any(|p| p == id);

    if mentions("fabric") {
        Some(Platform::Fabric)
    } else if mentions("neoforge") {
        Some(Platform::NeoForge)
    } else if mentions("forge") {
        Some(Platform::Forge)
    } else if has_plugin(FABRIC_LOOM_PLUGIN) {
        Some(Platform::Fabric)
    } else if has_plugin(NEOFORGE_MODDEV_PLUGIN) {
        Some(Platform::NeoForge)
    } else if has_plugin(FORGE_GRADLE_PLUGIN) {
        Some(Platform::Forge)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_by_name() {
        assert_eq!(detect("mymod-fabric", ":x", &[]), Some(Platform::Fabric));
        assert_eq!(detect("NeoForge", ":x", &[]), Some(Platform::NeoForge));
        assert_eq!(detect("forge", ":x", &[]), Some(Platform::Forge));
    }

    #[test]
    fn detect_by_path() {
        assert_eq!(detect("loader", ":neoforge:loader", &[]), Some(Platform::NeoForge));
        assert_eq!(detect("loader", ":Forge", &[]), Some(Platform::Forge));
    }

    #[test]
    fn neoforge_is_not_mistaken_for_forge() {
        assert_eq!(detect("neoforge", ":neoforge", &[]), Some(Platform::NeoForge));
    }

    #[test]
    fn fabric_name_beats_neoforge_path() {
        assert_eq!(detect("fabric", ":neoforge", &[]), Some(Platform::Fabric));
    }

    #[test]
    fn name_beats_plugins() {
        let plugins = vec![FABRIC_LOOM_PLUGIN.to_string()];
        assert_eq!(detect("forge", ":forge", &plugins), Some(Platform::Forge));
    }

    #[test]
    fn detect_by_plugins() {
        let plugins = vec![
            FORGE_GRADLE_PLUGIN.to_string(),
            NEOFORGE_MODDEV_PLUGIN.to_string(),
        ];
        assert_eq!(detect("common", ":common", &plugins), Some(Platform::NeoForge));
        assert_eq!(
            detect("mod", ":mod", &[FORGE_GRADLE_PLUGIN.to_string()]),
            Some(Platform::Forge)
        );
    }

    #[test]
    fn detect_none() {
        assert_eq!(detect("common", ":common", &["java".to_string()]), None);
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("NEOFORGE".parse::<Platform>().unwrap(), Platform::NeoForge);
        assert_eq!(Platform::NeoForge.to_string(), "neoforge");
        assert!("quilt".parse::<Platform>().is_err());
    }

    #[test]
    fn embed_configuration() {
        assert_eq!(Platform::Fabric.embed_configuration(), "include");
        assert_eq!(Platform::NeoForge.embed_configuration(), "jarJar");
    }
}
