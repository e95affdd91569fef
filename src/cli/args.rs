//! CLI argument definitions using clap derive

use crate::platform::Platform;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// Modding Tools - version catalogs and mod metadata for Minecraft mod builds
///
/// Resolves per-Minecraft-version library data into a Gradle version
/// catalog and injects declared mod dependencies into built jars.
#[derive(Parser, Debug)]
#[command(name = "modding-tools")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "MODTOOLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip local modtools.toml discovery
    #[arg(long, global = true)]
    pub no_local: bool,

    /// Project directory (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub project_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the version catalog for a Minecraft version
    Catalog(CatalogArgs),

    /// List Minecraft versions with dedicated version data
    Versions(VersionsArgs),

    /// Inject mod dependencies into built jars
    Inject(InjectArgs),

    /// Show declared mod dependencies for the project
    Deps(DepsArgs),

    /// Show the Maven repositories mod projects use
    Repos(ReposArgs),

    /// Show or edit configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the catalog command
#[derive(Parser, Debug)]
pub struct CatalogArgs {
    /// Minecraft version (defaults to the minecraft_version project property)
    #[arg(id = "minecraft_version", value_name = "VERSION")]
    pub minecraft_version: Option<String>,

    /// Write the catalog to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Version data directory (overrides catalog.versions_source)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Clear the resolution cache before resolving
    #[arg(long)]
    pub clear_cache: bool,
}

/// Arguments for the versions command
#[derive(Parser, Debug)]
pub struct VersionsArgs {
    /// Version data directory (overrides catalog.versions_source)
    #[arg(short, long)]
    pub source: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the inject command
#[derive(Parser, Debug)]
pub struct InjectArgs {
    /// Jar files to rewrite (e.g. the jar and remapJar outputs)
    #[arg(required = true)]
    pub jars: Vec<PathBuf>,

    /// Loader platform (detected from the project when omitted)
    #[arg(short, long)]
    pub platform: Option<Platform>,

    /// Mod id of the jar being rewritten
    #[arg(short, long)]
    pub mod_id: Option<String>,

    /// Required dependency (group:artifact:version)
    #[arg(long = "require", value_name = "NOTATION")]
    pub required: Vec<String>,

    /// Optional dependency (group:artifact:version)
    #[arg(long = "optional", value_name = "NOTATION")]
    pub optional: Vec<String>,

    /// Embedded dependency (group:artifact:version)
    #[arg(long = "embed", value_name = "NOTATION")]
    pub embedded: Vec<String>,

    /// Ignore [[dependencies]] from modtools.toml
    #[arg(long)]
    pub no_declared: bool,
}

/// Arguments for the deps command
#[derive(Parser, Debug)]
pub struct DepsArgs {
    /// Output format
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,
}

/// Arguments for the repos command
#[derive(Parser, Debug)]
pub struct ReposArgs {
    /// Show plugin repositories instead of dependency repositories
    #[arg(long)]
    pub plugins: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Subcommand for config
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Initialize default configuration
    Init {
        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., catalog.name)
        key: String,
        /// Value to set
        value: String,
        /// Write to project-local modtools.toml instead of global config
        #[arg(long)]
        local: bool,
    },
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Target shell
    pub shell: Shell,
}

/// Output format for listing commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// JSON output
    Json,
    /// Simple text (one per line)
    Plain,
    /// Gradle Kotlin DSL
    Kotlin,
}
