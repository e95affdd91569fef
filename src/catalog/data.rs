//! Version data model
//!
//! A `VersionData` is a snapshot of four keyed mappings (versions,
//! libraries, bundles, plugins) parsed from a JSON data file. Overlays are
//! merged onto the base data with a right-biased union per mapping.

use crate::error::{ModToolsError, ModToolsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Library coordinates pointing at a named version
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDef {
    /// Maven group
    pub group: String,

    /// Maven artifact
    pub artifact: String,

    /// Name of the entry in `versions` this library uses
    #[serde(rename = "version")]
    pub version_ref: String,
}

/// Gradle plugin coordinates
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PluginDef {
    /// Plugin id
    pub id: String,

    /// Either a version reference name or a literal version
    pub version: String,
}

/// Resolved version data for one data file or merge result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionData {
    /// Version name -> version string
    pub versions: BTreeMap<String, String>,

    /// Library alias -> coordinates
    pub libraries: BTreeMap<String, LibraryDef>,

    /// Bundle alias -> ordered library aliases
    pub bundles: BTreeMap<String, Vec<String>>,

    /// Plugin alias -> coordinates
    pub plugins: BTreeMap<String, PluginDef>,
}

impl VersionData {
    /// Parse a data file. `file` is only used for error messages.
    pub fn parse(file: &str, json: &str) -> ModToolsResult<Self> {
        serde_json::from_str(json).map_err(|e| ModToolsError::VersionDataInvalid {
            file: file.to_string(),
            reason: e.to_string(),
        })
    }

    /// Merge `overlay` onto `base`. Overlay entries replace base entries
    /// with the same key, per mapping.
    pub fn merge(base: &Self, overlay: &Self) -> Self {
        let mut merged = base.clone();
        merged.versions.extend(overlay.versions.clone());
        merged.libraries.extend(overlay.libraries.clone());
        merged.bundles.extend(overlay.bundles.clone());
        merged.plugins.extend(overlay.plugins.clone());
        merged
    }

    /// True when all four mappings are empty
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
            && self.libraries.is_empty()
            && self.bundles.is_empty()
            && self.plugins.is_empty()
    }
}
