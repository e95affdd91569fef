//! Version data sources
//!
//! A source hands out the raw text of named data files:
//! - `_base.json`: base data
//! - `{key}.json`: per-minecraft-version overlays
//! - `index.txt`: generated list of overlay keys, one per line
//!
//! Sources:
//! 1. Built-in: compiled into the binary via `include_str!`
//! 2. Directory: a folder on disk (`catalog.versions_source`)
//! 3. Memory: an in-process map, used by tests and embedders

use crate::error::{ModToolsError, ModToolsResult};
use std::collections::HashMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Location value that selects the built-in data
pub const BUILTIN_LOCATION: &str = "builtin";

/// Name of the base data file
pub const BASE_FILE: &str = "_base.json";

/// Name of the generated key index
pub const INDEX_FILE: &str = "index.txt";

// Built-in data embedded at compile time
const BUILTIN_FILES: &[(&str, &str)] = &[
    (BASE_FILE, include_str!("../../versions/_base.json")),
    (INDEX_FILE, include_str!("../../versions/index.txt")),
    ("1.20.1.json", include_str!("../../versions/1.20.1.json")),
    ("1.20.4.json", include_str!("../../versions/1.20.4.json")),
    ("1.21.1.json", include_str!("../../versions/1.21.1.json")),
];

/// Read access to version data files
pub trait VersionSource: Send + Sync + fmt::Debug {
    /// Read a data file by name. Returns `None` if the file does not exist.
    fn read(&self, file: &str) -> ModToolsResult<Option<String>>;

    /// Human readable location, for logs
    fn describe(&self) -> String;
}

/// Open the source named by a location setting: `builtin` or a directory.
pub fn open_source(location: &str) -> ModToolsResult<Box<dyn VersionSource>> {
    if location.is_empty() || location == BUILTIN_LOCATION {
        return Ok(Box::new(BuiltinSource));
    }

    let dir = PathBuf::from(location);
    if !dir.is_dir() {
        return Err(ModToolsError::VersionSourceNotFound(dir));
    }
    Ok(Box::new(DirSource::new(dir)))
}

/// Data compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSource;

impl VersionSource for BuiltinSource {
    fn read(&self, file: &str) -> ModToolsResult<Option<String>> {
        Ok(BUILTIN_FILES
            .iter()
            .find(|(name, _)| *name == file)
            .map(|(_, content)| (*content).to_string()))
    }

    fn describe(&self) -> String {
        "built-in version data".to_string()
    }
}

/// Data files in a directory on disk
#[derive(Debug, Clone)]
pub struct DirSource {
    dir: PathBuf,
}

impl DirSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl VersionSource for DirSource {
    fn read(&self, file: &str) -> ModToolsResult<Option<String>> {
        let path = self.dir.join(file);
        if !path.is_file() {
            return Ok(None);
        }

        std::fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| ModToolsError::io(format!("reading version data {}", path.display()), e))
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}

/// In-memory data files
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    files: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a file
    pub fn with_file(mut self, name: impl Into<String>, content: impl Into<String>) -> Self {
        self.files.insert(name.into(), content.into());
        self
    }
}

impl VersionSource for MemorySource {
    fn read(&self, file: &str) -> ModToolsResult<Option<String>> {
        Ok(self.files.get(file).cloned())
    }

    fn describe(&self) -> String {
        format!("in-memory version data ({} files)", self.files.len())
    }
}
