//! Mod dependency declarations
//!
//! Build units declare the mods they depend on; declarations are kept per
//! build unit by the `DependencyTracker` and later written into the jar's
//! loader metadata.

pub mod notation;
pub mod tracker;

pub use notation::{DependencyHandler, Notation};
pub use tracker::DependencyTracker;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a dependency is declared in mod metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Required,
    Optional,
    /// Required, and bundled inside the mod jar
    Embedded,
}

impl DependencyKind {
    /// Whether the loader must refuse to start without the dependency
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Self::Required | Self::Embedded)
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Embedded => "embedded",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for DependencyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "required" => Ok(Self::Required),
            "optional" => Ok(Self::Optional),
            "embedded" => Ok(Self::Embedded),
            other => Err(format!(
                "unknown dependency kind '{}': expected required, optional or embedded",
                other
            )),
        }
    }
}

/// A declared mod dependency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModDependency {
    /// Mod identifier as the loader knows it
    pub mod_id: String,

    /// Minimum version
    pub version: String,

    pub kind: DependencyKind,
}

impl ModDependency {
    pub fn new(mod_id: impl Into<String>, version: impl Into<String>, kind: DependencyKind) -> Self {
        Self {
            mod_id: mod_id.into(),
            version: version.into(),
            kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_mandatory() {
        assert!(DependencyKind::Required.is_mandatory());
        assert!(DependencyKind::Embedded.is_mandatory());
        assert!(!DependencyKind::Optional.is_mandatory());
    }

    #[test]
    fn kind_parse_and_display() {
        assert_eq!("Embedded".parse::<DependencyKind>(), Ok(DependencyKind::Embedded));
        assert_eq!(DependencyKind::Optional.to_string(), "optional");
        assert!("soft".parse::<DependencyKind>().is_err());
    }

    #[test]
    fn kind_serde_lowercase() {
        let dep = ModDependency::new("sodium", "0.5.8", DependencyKind::Required);
        let json = serde_json::to_string(&dep).unwrap();
        assert!(json.contains(r#""kind":"required""#));
    }
}
