//! Deps command - show declared mod dependencies

use crate::cli::args::{DepsArgs, OutputFormat};
use crate::config::Config;
use crate::deps::{DependencyHandler, DependencyTracker};
use crate::error::ModToolsResult;
use crate::project::{declare_all, BuildUnit};
use crate::ui::{self, UiContext};
use serde_json::json;
use std::path::Path;

/// Execute the deps command
pub async fn execute(args: DepsArgs, config: &Config, project_dir: &Path) -> ModToolsResult<()> {
    let unit = BuildUnit::resolve(config, project_dir)?;
    let tracker = DependencyTracker::new();
    let handler = DependencyHandler::new(&tracker, unit.path.clone(), unit.platform);
    let declared = declare_all(&handler, &config.dependencies);

    match args.format {
        OutputFormat::Json => {
            let out = json!({
                "unit": unit.path,
                "mod_id": unit.mod_id,
                "platform": unit.platform,
                "declared": declared,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Plain | OutputFormat::Kotlin => {
            for entry in &declared {
                for configuration in &entry.configurations {
                    println!("{}(\"{}\")", configuration, entry.notation);
                }
            }
        }
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::intro(&ctx, &format!("Dependencies of {}", unit.path));
            ui::key_value(&ctx, "Mod id", &unit.mod_id);
            match unit.platform {
                Some(platform) => {
                    ui::key_value(&ctx, "Platform", &platform.to_string());
                    ui::key_value(&ctx, "Rewrites after", &platform.archive_tasks().join(", "));
                }
                None => ui::key_value(&ctx, "Platform", "unknown"),
            }

            ui::section(&ctx, "Declared");
            if declared.is_empty() {
                ui::remark(&ctx, "No [[dependencies]] in modtools.toml");
            }
            for entry in &declared {
                let buckets = entry.configurations.join(", ");
                match &entry.dependency {
                    Some(dep) => ui::step_ok_detail(
                        &ctx,
                        &format!("{} {} >= {} [{}]", dep.kind, dep.mod_id, dep.version, buckets),
                        &entry.notation.to_string(),
                    ),
                    None => ui::step_warn_hint(
                        &ctx,
                        &format!("{} [{}]", entry.notation, buckets),
                        "not added to metadata; set mod_id and version",
                    ),
                }
            }
            ui::outro_success(&ctx, &format!("{} tracked", tracker.fetch(&unit.path).len()));
        }
    }

    Ok(())
}
