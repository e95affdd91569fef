//! Modding Tools - version catalogs and mod metadata for Minecraft mods
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use modding_tools::cli::{commands, Cli, Commands};
use modding_tools::config::{Config, ConfigManager};
use modding_tools::error::{ModToolsError, ModToolsResult};
use modding_tools::ui::{self, UiContext};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ModToolsResult<()> {
    let cli = Cli::parse();

    // Completions need neither config nor logging
    if let Commands::Completions(args) = cli.command {
        return commands::completions(args);
    }

    let project_dir = match cli.project_dir {
        Some(ref dir) => dir.clone(),
        None => std::env::current_dir()
            .map_err(|e| ModToolsError::io("getting current directory", e))?,
    };

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };

    let local_config_path = if cli.no_local {
        None
    } else {
        ConfigManager::find_local_config(&project_dir)
    };

    let config = config_manager
        .load_merged(local_config_path.as_deref())
        .await?;

    init_logging(cli.verbose, &config);
    if UiContext::detect().is_interactive() {
        ui::init_theme();
    }
    match local_config_path {
        Some(ref path) => debug!("Found local config: {}", path.display()),
        None if cli.no_local => debug!("Local config discovery disabled (--no-local)"),
        None => {}
    }

    match cli.command {
        Commands::Completions(_) => unreachable!("Completions handled above"),
        Commands::Catalog(args) => commands::catalog(args, &config, &project_dir).await,
        Commands::Versions(args) => commands::versions(args, &config).await,
        Commands::Inject(args) => commands::inject(args, &config, &project_dir).await,
        Commands::Deps(args) => commands::deps(args, &config, &project_dir).await,
        Commands::Repos(args) => commands::repos(args).await,
        Commands::Config(args) => {
            commands::config(args, &config, &config_manager, &project_dir).await
        }
    }
}

/// 0 = warn, 1 = info, 2+ = debug; `general.verbose` counts as one `-v`
fn init_logging(verbose: u8, config: &Config) {
    let level = verbose.max(u8::from(config.general.verbose));
    let filter = match level {
        0 => EnvFilter::new("modding_tools=warn"),
        1 => EnvFilter::new("modding_tools=info"),
        _ => EnvFilter::new("modding_tools=debug"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time();

    if config.general.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }
}
