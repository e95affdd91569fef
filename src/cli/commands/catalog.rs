//! Catalog command - render the version catalog for a Minecraft version

use super::resolver_with_cache;
use crate::catalog::emit::catalog_name;
use crate::catalog::{render_catalog, ResolutionCache, VersionData, VersionResolver};
use crate::cli::args::CatalogArgs;
use crate::config::Config;
use crate::error::{ModToolsError, ModToolsResult};
use crate::properties::PropertyLookup;
use crate::ui::{self, UiContext};
use std::path::Path;
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, info};

/// Execute the catalog command
pub async fn execute(args: CatalogArgs, config: &Config, project_dir: &Path) -> ModToolsResult<()> {
    execute_with_cache(args, config, project_dir, Arc::new(ResolutionCache::new())).await
}

/// Execute the catalog command against a resolution cache that outlives
/// this call. `--clear-cache` and `catalog.clear_cache` drop whatever the
/// cache already holds before resolving.
pub async fn execute_with_cache(
    args: CatalogArgs,
    config: &Config,
    project_dir: &Path,
    cache: Arc<ResolutionCache>,
) -> ModToolsResult<()> {
    let resolver = resolver_with_cache(config, args.source.as_deref(), cache)?;

    let version = match args.minecraft_version {
        Some(version) => version,
        None => PropertyLookup::load(project_dir)?
            .minecraft_version_or(config.catalog.default_minecraft_version.as_deref()),
    };

    let clear = args.clear_cache || config.catalog.clear_cache;
    let data = resolve_version(&resolver, &version, clear)?;
    let name = catalog_name(&config.catalog.name);
    info!(
        "Resolved {} versions and {} libraries for Minecraft {}",
        data.versions.len(),
        data.libraries.len(),
        version
    );

    let header = format!("Catalog '{}' for Minecraft {}", name, version);
    let rendered = render_catalog(&data, Some(&header));

    let Some(output) = args.output else {
        print!("{}", rendered);
        return Ok(());
    };

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| ModToolsError::io(format!("creating {}", parent.display()), e))?;
    }
    fs::write(&output, rendered)
        .await
        .map_err(|e| ModToolsError::io(format!("writing catalog to {}", output.display()), e))?;

    let ctx = UiContext::detect();
    ui::step_ok_detail(
        &ctx,
        &format!("Wrote catalog '{}' for Minecraft {}", name, version),
        &output.display().to_string(),
    );
    Ok(())
}

/// Resolve `version`, optionally dropping memoized data first
fn resolve_version(
    resolver: &VersionResolver,
    version: &str,
    clear: bool,
) -> ModToolsResult<Arc<VersionData>> {
    if clear {
        debug!(
            "Clearing {} memoized resolutions",
            resolver.store().cache().resolved_len()
        );
        resolver.clear_cache();
    }
    resolver.resolve(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::source::BASE_FILE;
    use crate::catalog::{MemorySource, VersionStore};
    use tempfile::TempDir;

    fn args(version: Option<&str>, output: Option<std::path::PathBuf>) -> CatalogArgs {
        CatalogArgs {
            minecraft_version: version.map(str::to_string),
            output,
            source: None,
            clear_cache: false,
        }
    }

    #[tokio::test]
    async fn writes_catalog_file() {
        let temp = TempDir::new().unwrap();
        let output = temp.path().join("gradle").join("nyfs.versions.toml");

        execute(args(Some("1.21.1"), Some(output.clone())), &Config::default(), temp.path())
            .await
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("[versions]"));
        assert!(content.contains("Minecraft 1.21.1"));
    }

    fn resolver_over(minecraft: &str, cache: &Arc<ResolutionCache>) -> VersionResolver {
        let source = MemorySource::new()
            .with_file(BASE_FILE, format!(r#"{{"versions": {{"minecraft": "{}"}}}}"#, minecraft));
        VersionResolver::new(VersionStore::with_cache(Box::new(source), cache.clone()))
    }

    #[test]
    fn clear_flag_drops_shared_cache() {
        let cache = Arc::new(ResolutionCache::new());
        let first = resolver_over("1.20.1", &cache);
        resolve_version(&first, "1.20.1", false).unwrap();

        // Same cache, new data: without clearing the stale result wins
        let second = resolver_over("1.21.1", &cache);
        let stale = resolve_version(&second, "1.20.1", false).unwrap();
        assert_eq!(stale.versions["minecraft"], "1.20.1");

        let fresh = resolve_version(&second, "1.20.1", true).unwrap();
        assert_eq!(fresh.versions["minecraft"], "1.21.1");
    }

    #[tokio::test]
    async fn config_clear_cache_applies_to_shared_cache() {
        let temp = TempDir::new().unwrap();
        let data = temp.path().join("versions");
        std::fs::create_dir_all(&data).unwrap();
        std::fs::write(data.join(BASE_FILE), r#"{"versions": {"minecraft": "1.21"}}"#).unwrap();

        let cache = Arc::new(ResolutionCache::new());
        resolver_over("1.20.1", &cache).resolve("1.21").unwrap();

        let mut config = Config::default();
        config.catalog.clear_cache = true;
        let output = temp.path().join("libs.versions.toml");
        let mut catalog_args = args(Some("1.21"), Some(output.clone()));
        catalog_args.source = Some(data.display().to_string());

        execute_with_cache(catalog_args, &config, temp.path(), cache)
            .await
            .unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert!(content.contains("minecraft = \"1.21\""));
    }

    #[tokio::test]
    async fn missing_source_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let mut catalog_args = args(Some("1.20.1"), None);
        catalog_args.source = Some(temp.path().join("nope").display().to_string());

        let err = execute(catalog_args, &Config::default(), temp.path())
            .await
            .unwrap_err();
        assert!(matches!(err, ModToolsError::VersionSourceNotFound(_)));
    }
}
