//! Dependency notations and declaration
//!
//! A notation is a Maven coordinate string
//! `group:artifact[:version[:classifier]][@extension]`. When a build unit
//! declares a mod dependency without an explicit mod id or version, both
//! are inferred from the coordinate.

use crate::deps::{DependencyKind, DependencyTracker, ModDependency};
use crate::error::{ModToolsError, ModToolsResult};
use crate::platform::Platform;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;
use tracing::warn;

/// Configuration every mod dependency is added to
pub const IMPLEMENTATION: &str = "implementation";

static LEADING_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.?[0-9]*").expect("valid version pattern"));

// Loader and common-module suffixes stripped from artifact names
const MOD_ID_SUFFIXES: &[&str] = &[
    "-fabric",
    "-forge",
    "-neoforge",
    "_fabric",
    "_forge",
    "_neoforge",
    "-common",
    "_common",
];

/// Parsed Maven coordinate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notation {
    pub group: String,
    pub name: String,
    pub version: Option<String>,
    pub classifier: Option<String>,
    pub extension: Option<String>,
}

impl Notation {
    pub fn parse(notation: &str) -> ModToolsResult<Self> {
        let invalid = |reason: &str| ModToolsError::NotationInvalid {
            notation: notation.to_string(),
            reason: reason.to_string(),
        };

        let (coords, extension) = match notation.trim().split_once('@') {
            Some((coords, ext)) if !ext.is_empty() => (coords, Some(ext.to_string())),
            Some(_) => return Err(invalid("empty extension after '@'")),
            None => (notation.trim(), None),
        };

        let parts: Vec<&str> = coords.split(':').collect();
        if parts.len() < 2 || parts.len() > 4 {
            return Err(invalid("expected group:artifact[:version[:classifier]]"));
        }
        if parts.iter().any(|p| p.is_empty()) {
            return Err(invalid("empty coordinate segment"));
        }

        Ok(Self {
            group: parts[0].to_string(),
            name: parts[1].to_string(),
            version: parts.get(2).map(|s| s.to_string()),
            classifier: parts.get(3).map(|s| s.to_string()),
            extension,
        })
    }

    /// Mod id guessed from the artifact name
    pub fn inferred_mod_id(&self) -> Option<String> {
        let mut id = self.name.to_lowercase();
        for suffix in MOD_ID_SUFFIXES {
            id = id.replace(suffix, "");
        }
        let id = id.replace('-', "_");
        (!id.is_empty()).then_some(id)
    }

    /// Minimum version guessed from the coordinate's version
    pub fn inferred_version(&self) -> Option<String> {
        let version = self.version.as_deref()?;
        match LEADING_VERSION.find(version) {
            Some(m) => Some(m.as_str().to_string()),
            None => version.split('-').next().map(str::to_string),
        }
    }
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)?;
        if let Some(version) = &self.version {
            write!(f, ":{}", version)?;
        }
        if let Some(classifier) = &self.classifier {
            write!(f, ":{}", classifier)?;
        }
        if let Some(extension) = &self.extension {
            write!(f, "@{}", extension)?;
        }
        Ok(())
    }
}

/// Outcome of declaring one dependency
#[derive(Debug, Clone, Serialize)]
pub struct Declared {
    pub notation: Notation,

    /// Tracked metadata entry; `None` when mod id or version could not be
    /// determined
    pub dependency: Option<ModDependency>,

    /// Gradle configurations the dependency belongs in
    pub configurations: Vec<&'static str>,
}

/// Declares mod dependencies for one build unit
#[derive(Debug)]
pub struct DependencyHandler<'a> {
    tracker: &'a DependencyTracker,
    unit: String,
    platform: Option<Platform>,
}

impl<'a> DependencyHandler<'a> {
    pub fn new(tracker: &'a DependencyTracker, unit: impl Into<String>, platform: Option<Platform>) -> Self {
        Self {
            tracker,
            unit: unit.into(),
            platform,
        }
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn required(&self, notation: &str, mod_id: Option<&str>, version: Option<&str>) -> Option<Declared> {
        self.declare(notation, mod_id, version, DependencyKind::Required)
    }

    pub fn optional(&self, notation: &str, mod_id: Option<&str>, version: Option<&str>) -> Option<Declared> {
        self.declare(notation, mod_id, version, DependencyKind::Optional)
    }

    pub fn embedded(&self, notation: &str, mod_id: Option<&str>, version: Option<&str>) -> Option<Declared> {
        self.declare(notation, mod_id, version, DependencyKind::Embedded)
    }

    /// Parse, track and route one dependency. An unparseable notation is
    /// logged and skipped.
    pub fn declare(
        &self,
        notation: &str,
        mod_id: Option<&str>,
        version: Option<&str>,
        kind: DependencyKind,
    ) -> Option<Declared> {
        let notation = match Notation::parse(notation) {
            Ok(n) => n,
            Err(e) => {
                warn!("{}", e);
                return None;
            }
        };

        let mod_id = mod_id.map(str::to_string).or_else(|| notation.inferred_mod_id());
        let version = version.map(str::to_string).or_else(|| notation.inferred_version());

        let dependency = match (mod_id, version) {
            (Some(mod_id), Some(version)) => {
                let dep = ModDependency::new(mod_id, version, kind);
                self.tracker.record(&self.unit, dep.clone());
                Some(dep)
            }
            _ => {
                warn!(
                    "Could not determine mod id and version for {}, not adding it to metadata",
                    notation
                );
                None
            }
        };

        let mut configurations = vec![IMPLEMENTATION];
        if kind == DependencyKind::Embedded {
            match self.platform {
                Some(platform) => configurations.push(platform.embed_configuration()),
                None => warn!(
                    "Could not add {} to an embed configuration: unknown platform for {}",
                    notation, self.unit
                ),
            }
        }

        Some(Declared {
            notation,
            dependency,
            configurations,
        })
    }
}
