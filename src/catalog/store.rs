//! Version data store
//!
//! Loads base data, per-version overlays, and the list of known overlay
//! keys from a `VersionSource`, memoizing results in a `ResolutionCache`.

use crate::catalog::data::VersionData;
use crate::catalog::source::{VersionSource, BASE_FILE, INDEX_FILE};
use crate::error::ModToolsResult;
use parking_lot::Mutex;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

/// Keys starting with this prefix are reserved for the base file
pub const RESERVED_PREFIX: char = '_';

/// Memoized resolution state.
///
/// Populated lazily; only `clear` invalidates it. Callers may hold one
/// cache per run to isolate results.
#[derive(Debug, Default)]
pub struct ResolutionCache {
    base: Mutex<Option<Arc<VersionData>>>,
    known_keys: Mutex<Option<Arc<BTreeSet<String>>>>,
    resolved: Mutex<HashMap<String, Arc<VersionData>>>,
}

impl ResolutionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop base data, known keys and every resolved entry
    pub fn clear(&self) {
        *self.base.lock() = None;
        *self.known_keys.lock() = None;
        self.resolved.lock().clear();
        debug!("Version resolution cache cleared");
    }

    pub fn resolved(&self, key: &str) -> Option<Arc<VersionData>> {
        self.resolved.lock().get(key).cloned()
    }

    pub fn insert_resolved(&self, key: &str, data: Arc<VersionData>) {
        self.resolved.lock().insert(key.to_string(), data);
    }

    /// Number of resolved keys held
    pub fn resolved_len(&self) -> usize {
        self.resolved.lock().len()
    }
}

/// Version data store over a source
#[derive(Debug)]
pub struct VersionStore {
    source: Box<dyn VersionSource>,
    cache: Arc<ResolutionCache>,
}

impl VersionStore {
    /// Create a store with a fresh cache
    pub fn new(source: Box<dyn VersionSource>) -> Self {
        Self::with_cache(source, Arc::new(ResolutionCache::new()))
    }

    /// Create a store sharing an existing cache
    pub fn with_cache(source: Box<dyn VersionSource>, cache: Arc<ResolutionCache>) -> Self {
        Self { source, cache }
    }

    pub fn cache(&self) -> &Arc<ResolutionCache> {
        &self.cache
    }

    pub fn source(&self) -> &dyn VersionSource {
        self.source.as_ref()
    }

    /// Load base data. Empty data if the base file is absent; parse
    /// failures are fatal.
    pub fn load_base(&self) -> ModToolsResult<Arc<VersionData>> {
        if let Some(base) = self.cache.base.lock().clone() {
            return Ok(base);
        }

        let data = match self.source.read(BASE_FILE)? {
            Some(json) => VersionData::parse(BASE_FILE, &json)?,
            None => {
                debug!("No {} in {}, using empty base", BASE_FILE, self.source.describe());
                VersionData::default()
            }
        };

        let data = Arc::new(data);
        *self.cache.base.lock() = Some(data.clone());
        Ok(data)
    }

    /// Load the overlay for `key`, if one exists
    pub fn load_overlay(&self, key: &str) -> ModToolsResult<Option<VersionData>> {
        if !is_valid_key(key) {
            debug!("Ignoring invalid version key '{}'", key);
            return Ok(None);
        }

        let file = format!("{}.json", key);
        match self.source.read(&file)? {
            Some(json) => Ok(Some(VersionData::parse(&file, &json)?)),
            None => Ok(None),
        }
    }

    /// All overlay keys from the index, in lexicographic order
    pub fn list_known_keys(&self) -> ModToolsResult<Arc<BTreeSet<String>>> {
        if let Some(keys) = self.cache.known_keys.lock().clone() {
            return Ok(keys);
        }

        let keys: BTreeSet<String> = self
            .source
            .read(INDEX_FILE)?
            .unwrap_or_default()
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with(RESERVED_PREFIX))
            .map(str::to_string)
            .collect();

        debug!("{} known version keys", keys.len());
        let keys = Arc::new(keys);
        *self.cache.known_keys.lock() = Some(keys.clone());
        Ok(keys)
    }
}

/// A key may only name a file inside the source: no separators, no `..`
fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains("..")
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::MemorySource;

    fn store(source: MemorySource) -> VersionStore {
        VersionStore::new(Box::new(source))
    }

    #[test]
    fn base_absent_is_empty() {
        let store = store(MemorySource::new());
        assert!(store.load_base().unwrap().is_empty());
    }

    #[test]
    fn base_is_cached() {
        let store = store(MemorySource::new().with_file(BASE_FILE, r#"{"versions":{"a":"1"}}"#));
        let first = store.load_base().unwrap();
        let second = store.load_base().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn malformed_base_is_fatal() {
        let store = store(MemorySource::new().with_file(BASE_FILE, "[1, 2"));
        assert!(store.load_base().is_err());
    }

    #[test]
    fn overlay_absent_is_none() {
        let store = store(MemorySource::new());
        assert!(store.load_overlay("1.20.1").unwrap().is_none());
    }

    #[test]
    fn overlay_present() {
        let store =
            store(MemorySource::new().with_file("1.20.json", r#"{"versions":{"mc":"1.20"}}"#));
        let overlay = store.load_overlay("1.20").unwrap().unwrap();
        assert_eq!(overlay.versions["mc"], "1.20");
    }

    #[test]
    fn overlay_rejects_traversal_keys() {
        let store = store(MemorySource::new().with_file("../x.json", "{}"));
        assert!(store.load_overlay("../x").unwrap().is_none());
        assert!(store.load_overlay("a/b").unwrap().is_none());
        assert!(store.load_overlay("").unwrap().is_none());
    }

    #[test]
    fn known_keys_skip_reserved_and_blank() {
        let store = store(
            MemorySource::new().with_file(INDEX_FILE, "_base\n1.21\n\n  1.20.1  \n1.20\n"),
        );
        let keys: Vec<String> = store.list_known_keys().unwrap().iter().cloned().collect();
        assert_eq!(keys, vec!["1.20", "1.20.1", "1.21"]);
    }

    #[test]
    fn known_keys_without_index_is_empty() {
        let store = store(MemorySource::new());
        assert!(store.list_known_keys().unwrap().is_empty());
    }

    #[test]
    fn clear_drops_everything() {
        let store = store(
            MemorySource::new()
                .with_file(BASE_FILE, "{}")
                .with_file(INDEX_FILE, "1.20\n"),
        );
        let base = store.load_base().unwrap();
        store.list_known_keys().unwrap();
        store.cache().insert_resolved("1.20", base.clone());

        store.cache().clear();

        assert_eq!(store.cache().resolved_len(), 0);
        assert!(!Arc::ptr_eq(&base, &store.load_base().unwrap()));
    }

    #[test]
    fn valid_keys() {
        assert!(is_valid_key("1.20.1"));
        assert!(is_valid_key("24w14a"));
        assert!(is_valid_key("1.21-pre1"));
        assert!(!is_valid_key("1..2"));
        assert!(!is_valid_key("1.20 1"));
    }
}
