//! Version catalog emission
//!
//! Renders resolved `VersionData` as a Gradle `libs.versions.toml`
//! document, the format Gradle reads version catalogs from.

use crate::catalog::data::{PluginDef, VersionData};
use toml_edit::{value, Array, DocumentMut, InlineTable, Item, Table, Value};
use tracing::warn;

/// Gradle catalog names use `-` where the data files use `_`
pub fn catalog_name(name: &str) -> String {
    name.replace('_', "-")
}

/// How a plugin declares its version in the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginVersion {
    /// `version = ""`
    Empty,
    /// `version.ref = "<name>"`
    Ref(String),
    /// `version = "<literal>"`
    Literal(String),
}

/// Decide whether a plugin version points at a catalog version or is a literal
pub fn plugin_version(plugin: &PluginDef, data: &VersionData) -> PluginVersion {
    let version = plugin.version.as_str();
    if version.is_empty() {
        PluginVersion::Empty
    } else if data.versions.contains_key(version)
        || data.versions.contains_key(&version.replace('-', "_"))
    {
        PluginVersion::Ref(catalog_name(version))
    } else {
        PluginVersion::Literal(version.to_string())
    }
}

/// Render `data` as a `libs.versions.toml` document.
///
/// `header` is written as a leading comment when given.
pub fn render_catalog(data: &VersionData, header: Option<&str>) -> String {
    let mut doc = DocumentMut::new();

    if !data.versions.is_empty() {
        let mut versions = Table::new();
        for (name, version) in &data.versions {
            versions.insert(&catalog_name(name), value(version.as_str()));
        }
        doc.insert("versions", Item::Table(versions));
    }

    if !data.libraries.is_empty() {
        let mut libraries = Table::new();
        for (alias, lib) in &data.libraries {
            if !data.versions.contains_key(&lib.version_ref) {
                warn!(
                    "Library {} refers to unknown version {}",
                    alias, lib.version_ref
                );
            }
            let mut entry = InlineTable::new();
            entry.insert("group", Value::from(lib.group.as_str()));
            entry.insert("name", Value::from(lib.artifact.as_str()));
            entry.insert("version", version_ref(&catalog_name(&lib.version_ref)));
            libraries.insert(alias, value(entry));
        }
        doc.insert("libraries", Item::Table(libraries));
    }

    if !data.bundles.is_empty() {
        let mut bundles = Table::new();
        for (alias, members) in &data.bundles {
            let array: Array = members.iter().map(String::as_str).collect();
            bundles.insert(alias, value(array));
        }
        doc.insert("bundles", Item::Table(bundles));
    }

    if !data.plugins.is_empty() {
        let mut plugins = Table::new();
        for (alias, plugin) in &data.plugins {
            let mut entry = InlineTable::new();
            entry.insert("id", Value::from(plugin.id.as_str()));
            let version = match plugin_version(plugin, data) {
                PluginVersion::Empty => Value::from(""),
                PluginVersion::Ref(name) => version_ref(&name),
                PluginVersion::Literal(literal) => Value::from(literal),
            };
            entry.insert("version", version);
            plugins.insert(alias, value(entry));
        }
        doc.insert("plugins", Item::Table(plugins));
    }

    match header {
        Some(header) => format!("# {}\n\n{}", header, doc),
        None => doc.to_string(),
    }
}

/// `version.ref = "<name>"` as a dotted inline key
fn version_ref(name: &str) -> Value {
    let mut reference = InlineTable::new();
    reference.insert("ref", Value::from(name));
    reference.set_dotted(true);
    Value::InlineTable(reference)
}
