//! Gradle project property lookup
//!
//! Properties come from `ORG_GRADLE_PROJECT_<name>` environment variables
//! and the project's `gradle.properties`, environment first, matching how
//! Gradle itself resolves project properties.

use crate::error::{ModToolsError, ModToolsResult};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Minecraft version used when no property names one
pub const DEFAULT_MINECRAFT_VERSION: &str = "1.20.1";

/// Property names consulted for the minecraft version, in order
pub const MINECRAFT_VERSION_PROPERTIES: &[&str] = &["minecraft_version", "minecraftVersion"];

const ENV_PREFIX: &str = "ORG_GRADLE_PROJECT_";

/// Project properties for one build directory
#[derive(Debug, Clone, Default)]
pub struct PropertyLookup {
    file: HashMap<String, String>,
}

impl PropertyLookup {
    /// Load `gradle.properties` from `project_dir` if present
    pub fn load(project_dir: &Path) -> ModToolsResult<Self> {
        let path = project_dir.join("gradle.properties");
        if !path.is_file() {
            debug!("No gradle.properties in {}", project_dir.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .map_err(|e| ModToolsError::io(format!("reading {}", path.display()), e))?;
        Ok(Self::parse(&content))
    }

    /// Parse Java properties text (`key=value`, `key: value`, `#`/`!` comments)
    pub fn parse(content: &str) -> Self {
        let mut file = HashMap::new();
        let mut lines = content.lines();

        while let Some(line) = lines.next() {
            let mut line = line.trim_start().to_string();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }
            // Continuation lines end in an odd number of backslashes
            while line.ends_with('\\') && trailing_backslashes(&line) % 2 == 1 {
                line.pop();
                match lines.next() {
                    Some(next) => line.push_str(next.trim_start()),
                    None => break,
                }
            }

            let (key, value) = split_entry(&line);
            file.insert(key.to_string(), value.trim_end().to_string());
        }

        Self { file }
    }

    /// Look up a property, environment first
    pub fn get(&self, name: &str) -> Option<String> {
        std::env::var(format!("{}{}", ENV_PREFIX, name))
            .ok()
            .or_else(|| self.file.get(name).cloned())
    }

    /// `minecraft_version`, else `minecraftVersion`, else the default
    pub fn minecraft_version(&self) -> String {
        self.minecraft_version_or(None)
    }

    /// Like [`minecraft_version`](Self::minecraft_version) with a configured
    /// fallback ahead of the built-in default
    pub fn minecraft_version_or(&self, fallback: Option<&str>) -> String {
        MINECRAFT_VERSION_PROPERTIES
            .iter()
            .find_map(|name| self.get(name))
            .or_else(|| fallback.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_MINECRAFT_VERSION.to_string())
    }
}

/// Split at the first unescaped `=`, `:` or whitespace. Whitespace around
/// the separator is dropped, and a whitespace separator may be followed by
/// one `=` or `:`.
fn split_entry(line: &str) -> (&str, &str) {
    let mut escaped = false;
    let key_end = line
        .char_indices()
        .find(|&(_, c)| {
            let separator = !escaped && (c == '=' || c == ':' || c.is_whitespace());
            escaped = !escaped && c == '\\';
            separator
        })
        .map(|(pos, _)| pos);

    let Some(key_end) = key_end else {
        return (line, "");
    };

    let key = &line[..key_end];
    let mut rest = line[key_end..].trim_start();
    if line[key_end..].starts_with(char::is_whitespace) {
        if let Some(stripped) = rest.strip_prefix(['=', ':']) {
            rest = stripped;
        }
    } else {
        rest = rest[1..].trim_start();
    }
    (key, rest.trim_start())
}

fn trailing_backslashes(line: &str) -> usize {
    line.chars().rev().take_while(|c| *c == '\\').count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn clear_env() {
        for name in MINECRAFT_VERSION_PROPERTIES {
            std::env::remove_var(format!("{}{}", ENV_PREFIX, name));
        }
    }

    #[test]
    fn parse_properties() {
        let props = PropertyLookup::parse(
            "# comment\n! also comment\nmod_id=example\nmod_name : Example Mod\n\norg.gradle.jvmargs=-Xmx3G\nflag\n",
        );
        assert_eq!(props.file["mod_id"], "example");
        assert_eq!(props.file["mod_name"], "Example Mod");
        assert_eq!(props.file["org.gradle.jvmargs"], "-Xmx3G");
        assert_eq!(props.file["flag"], "");
    }

    #[test]
    fn parse_whitespace_separator() {
        let props = PropertyLookup::parse(
            "minecraft_version 1.21.1\nmod_id\t=  example\nloader :  neoforge\nsplit\\ key=value\n",
        );
        assert_eq!(props.file["minecraft_version"], "1.21.1");
        assert_eq!(props.file["mod_id"], "example");
        assert_eq!(props.file["loader"], "neoforge");
        assert_eq!(props.file["split\\ key"], "value");
    }

    #[test]
    #[serial]
    fn whitespace_separated_minecraft_version() {
        clear_env();
        let props = PropertyLookup::parse("minecraft_version 1.21.1\n");
        assert_eq!(props.get("minecraft_version").as_deref(), Some("1.21.1"));
        assert_eq!(props.minecraft_version(), "1.21.1");
    }

    #[test]
    fn parse_continuation_lines() {
        let props = PropertyLookup::parse("authors=a, \\\n    b\npath=C:\\\\\n");
        assert_eq!(props.file["authors"], "a, b");
        assert_eq!(props.file["path"], "C:\\\\");
    }

    #[test]
    #[serial]
    fn minecraft_version_precedence() {
        clear_env();
        let props = PropertyLookup::parse("minecraftVersion=1.21\nminecraft_version=1.20.4\n");
        assert_eq!(props.minecraft_version(), "1.20.4");

        let props = PropertyLookup::parse("minecraftVersion=1.21\n");
        assert_eq!(props.minecraft_version(), "1.21");

        assert_eq!(PropertyLookup::default().minecraft_version(), "1.20.1");
    }

    #[test]
    #[serial]
    fn configured_fallback() {
        clear_env();
        let empty = PropertyLookup::default();
        assert_eq!(empty.minecraft_version_or(Some("1.21.1")), "1.21.1");

        let props = PropertyLookup::parse("minecraft_version=1.20.4\n");
        assert_eq!(props.minecraft_version_or(Some("1.21.1")), "1.20.4");
    }

    #[test]
    #[serial]
    fn environment_wins() {
        clear_env();
        std::env::set_var("ORG_GRADLE_PROJECT_minecraftVersion", "1.21.1");
        let props = PropertyLookup::parse("minecraftVersion=1.20\n");
        assert_eq!(props.minecraft_version(), "1.21.1");
        clear_env();
    }

    #[test]
    #[serial]
    fn load_from_dir() {
        clear_env();
        let temp = TempDir::new().unwrap();
        assert_eq!(PropertyLookup::load(temp.path()).unwrap().minecraft_version(), "1.20.1");

        std::fs::write(temp.path().join("gradle.properties"), "minecraft_version=1.21.1\n").unwrap();
        assert_eq!(PropertyLookup::load(temp.path()).unwrap().minecraft_version(), "1.21.1");
    }
}
