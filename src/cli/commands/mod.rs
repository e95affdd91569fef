//! CLI command implementations

pub mod catalog;
pub mod completions;
pub mod config;
pub mod deps;
pub mod inject;
pub mod repos;
pub mod versions;

pub use catalog::execute as catalog;
pub use completions::execute as completions;
pub use config::execute as config;
pub use deps::execute as deps;
pub use inject::execute as inject;
pub use repos::execute as repos;
pub use versions::execute as versions;

use crate::catalog::{open_source, ResolutionCache, VersionResolver, VersionStore};
use crate::config::Config;
use crate::error::ModToolsResult;
use std::sync::Arc;
use tracing::debug;

/// Build a resolver over `--source` or the configured version data
fn resolver(config: &Config, source: Option<&str>) -> ModToolsResult<VersionResolver> {
    resolver_with_cache(config, source, Arc::new(ResolutionCache::new()))
}

/// Like [`resolver`], memoizing into a cache the caller keeps alive
fn resolver_with_cache(
    config: &Config,
    source: Option<&str>,
    cache: Arc<ResolutionCache>,
) -> ModToolsResult<VersionResolver> {
    let location = source.unwrap_or(&config.catalog.versions_source);
    let source = open_source(location)?;
    debug!("Version data source: {}", source.describe());
    Ok(VersionResolver::new(VersionStore::with_cache(source, cache)))
}
