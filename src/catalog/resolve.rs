//! Version resolution
//!
//! Resolves a requested minecraft version to merged version data:
//! 1. Exact overlay `{key}.json`, merged onto base data
//! 2. Nearest known key sharing its `major.minor` prefix with the request
//! 3. First known key not tried yet
//! 4. Base data alone
//!
//! A per-call visited set stops fallback chains that loop back on
//! themselves. Resolution never fails because a version is unknown.

use crate::catalog::data::VersionData;
use crate::catalog::source::VersionSource;
use crate::catalog::store::VersionStore;
use crate::error::ModToolsResult;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves version keys against a store, memoizing results
#[derive(Debug)]
pub struct VersionResolver {
    store: VersionStore,
}

impl VersionResolver {
    pub fn new(store: VersionStore) -> Self {
        Self { store }
    }

    /// Resolver with a fresh cache over `source`
    pub fn from_source(source: Box<dyn VersionSource>) -> Self {
        Self::new(VersionStore::new(source))
    }

    pub fn store(&self) -> &VersionStore {
        &self.store
    }

    /// Resolve `requested` to version data
    pub fn resolve(&self, requested: &str) -> ModToolsResult<Arc<VersionData>> {
        if let Some(hit) = self.store.cache().resolved(requested) {
            return Ok(hit);
        }

        let mut visited = HashSet::new();
        let data = self.resolve_key(requested, &mut visited)?;
        self.store.cache().insert_resolved(requested, data.clone());
        Ok(data)
    }

    /// Drop all memoized data; the next resolution reloads everything
    pub fn clear_cache(&self) {
        self.store.cache().clear();
    }

    fn resolve_key(
        &self,
        key: &str,
        visited: &mut HashSet<String>,
    ) -> ModToolsResult<Arc<VersionData>> {
        let cache = self.store.cache();
        if let Some(hit) = cache.resolved(key) {
            return Ok(hit);
        }

        let base = self.store.load_base()?;

        if !visited.insert(key.to_string()) {
            debug!("Fallback chain looped back to {}, using base data", key);
            cache.insert_resolved(key, base.clone());
            return Ok(base);
        }

        if let Some(overlay) = self.store.load_overlay(key)? {
            debug!("Resolved {} from its overlay", key);
            let merged = Arc::new(VersionData::merge(&base, &overlay));
            cache.insert_resolved(key, merged.clone());
            return Ok(merged);
        }

        let known = self.store.list_known_keys()?;
        match fallback_key(key, &known, visited) {
            Some(next) => {
                info!("No version data for {}, falling back to {}", key, next);
                self.resolve_key(&next, visited)
            }
            None => {
                info!("No version data for {}, using base data", key);
                Ok(base)
            }
        }
    }
}

/// Text of `key` before its last `.`, or all of it
fn major_minor(key: &str) -> &str {
    key.rsplit_once('.').map_or(key, |(head, _)| head)
}

/// Pick the next key to try after `requested` had no overlay.
///
/// Prefix matches win, longest prefix first, ties in lexicographic order.
/// Otherwise the lexicographically first key not yet visited.
fn fallback_key(
    requested: &str,
    known: &BTreeSet<String>,
    visited: &HashSet<String>,
) -> Option<String> {
    let mut best: Option<(usize, &String)> = None;
    for key in known.iter().filter(|k| k.as_str() != requested) {
        let prefix = major_minor(key);
        if !requested.starts_with(prefix) {
            continue;
        }
        if best.map_or(true, |(len, _)| prefix.len() > len) {
            best = Some((prefix.len(), key));
        }
    }

    best.map(|(_, key)| key.clone())
        .or_else(|| known.iter().find(|k| !visited.contains(*k)).cloned())
}
