//! Config command - show or edit configuration

use crate::cli::args::{ConfigAction, ConfigArgs};
use crate::config::{Config, ConfigManager, LOCAL_CONFIG_FILE};
use crate::error::{ModToolsError, ModToolsResult};
use crate::ui::{self, UiContext};
use std::path::Path;
use tokio::fs;

/// Keys accepted by `config set`
const VALID_KEYS: &[&str] = &[
    "general.verbose",
    "general.log_format",
    "catalog.name",
    "catalog.clear_cache",
    "catalog.versions_source",
    "catalog.default_minecraft_version",
];

/// Execute the config command
pub async fn execute(
    args: ConfigArgs,
    config: &Config,
    manager: &ConfigManager,
    project_dir: &Path,
) -> ModToolsResult<()> {
    match args.action {
        None | Some(ConfigAction::Show) => show_config(config)?,
        Some(ConfigAction::Path) => show_path(manager),
        Some(ConfigAction::Init { force }) => init_config(manager, force).await?,
        Some(ConfigAction::Set { key, value, local }) => {
            if local {
                set_local_value(&project_dir.join(LOCAL_CONFIG_FILE), &key, &value).await?
            } else {
                set_value(manager, &key, &value).await?
            }
        }
    }

    Ok(())
}

fn show_config(config: &Config) -> ModToolsResult<()> {
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

fn show_path(manager: &ConfigManager) {
    println!("{}", manager.path().display());
}

async fn init_config(manager: &ConfigManager, force: bool) -> ModToolsResult<()> {
    let ctx = UiContext::detect();
    let path = manager.path();

    if path.exists() && !force {
        ui::step_warn_hint(
            &ctx,
            &format!("Config already exists at {}", path.display()),
            "Use --force to overwrite",
        );
        return Ok(());
    }

    manager.save(&Config::default()).await?;

    ui::step_ok_detail(
        &ctx,
        "Configuration initialized",
        &path.display().to_string(),
    );

    Ok(())
}

/// Set a key in the global config. Only the global file is read so local
/// overrides never leak into it.
async fn set_value(manager: &ConfigManager, key: &str, value: &str) -> ModToolsResult<()> {
    let ctx = UiContext::detect();
    let mut config = manager.load().await?;

    let parts: Vec<&str> = key.split('.').collect();
    match parts.as_slice() {
        ["general", "verbose"] => config.general.verbose = parse_bool(value)?,
        ["general", "log_format"] => config.general.log_format = parse_log_format(value)?,

        ["catalog", "name"] => config.catalog.name = value.to_string(),
        ["catalog", "clear_cache"] => config.catalog.clear_cache = parse_bool(value)?,
        ["catalog", "versions_source"] => config.catalog.versions_source = value.to_string(),
        ["catalog", "default_minecraft_version"] => {
            config.catalog.default_minecraft_version = Some(value.to_string())
        }

        _ => {
            ui::step_error_detail(&ctx, "Unknown config key", key);
            ui::remark(&ctx, "Valid keys:");
            for key in VALID_KEYS {
                eprintln!("  {}", key);
            }
            return Err(ModToolsError::User(format!("Unknown config key: {}", key)));
        }
    }

    manager.save(&config).await?;
    ui::step_ok(&ctx, &format!("Set {} = {}", key, value));

    Ok(())
}

async fn set_local_value(local_path: &Path, key: &str, value: &str) -> ModToolsResult<()> {
    let ctx = UiContext::detect();

    if !VALID_KEYS.contains(&key) {
        return Err(ModToolsError::User(format!("Unknown config key: {}", key)));
    }

    // Keep comments and the [[dependencies]] layout of the project file
    let content = if local_path.exists() {
        fs::read_to_string(local_path)
            .await
            .map_err(|e| ModToolsError::io(format!("reading {}", local_path.display()), e))?
    } else {
        String::new()
    };
    let mut doc: toml_edit::DocumentMut =
        content
            .parse()
            .map_err(|e: toml_edit::TomlError| ModToolsError::ConfigInvalid {
                path: local_path.to_path_buf(),
                reason: e.to_string(),
            })?;

    set_document_value(&mut doc, key, value)?;

    fs::write(local_path, doc.to_string())
        .await
        .map_err(|e| ModToolsError::io(format!("writing {}", local_path.display()), e))?;

    ui::step_ok(
        &ctx,
        &format!("Set {} = {} in {}", key, value, local_path.display()),
    );

    Ok(())
}

/// Set a `table.key` entry, creating the table when needed
fn set_document_value(doc: &mut toml_edit::DocumentMut, key: &str, value: &str) -> ModToolsResult<()> {
    let (table, leaf) = key
        .split_once('.')
        .ok_or_else(|| ModToolsError::User(format!("Expected table.key, got: {}", key)))?;

    let item = doc
        .entry(table)
        .or_insert_with(|| toml_edit::Item::Table(toml_edit::Table::new()));
    let table = item
        .as_table_like_mut()
        .ok_or_else(|| ModToolsError::User(format!("Expected table for key: {}", key)))?;

    let toml_value = match value {
        "true" => toml_edit::value(true),
        "false" => toml_edit::value(false),
        _ => toml_edit::value(value),
    };
    table.insert(leaf, toml_value);
    Ok(())
}

fn parse_bool(value: &str) -> ModToolsResult<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(ModToolsError::User(format!(
            "Invalid boolean value: {}. Use true/false",
            value
        ))),
    }
}

fn parse_log_format(value: &str) -> ModToolsResult<String> {
    match value {
        "text" | "json" => Ok(value.to_string()),
        _ => Err(ModToolsError::User(format!(
            "Invalid log format: {}. Use text/json",
            value
        ))),
    }
}
