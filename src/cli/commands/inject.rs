//! Inject command - write declared mod dependencies into built jars

use crate::cli::args::InjectArgs;
use crate::config::Config;
use crate::deps::{DependencyHandler, DependencyTracker};
use crate::error::{ModToolsError, ModToolsResult};
use crate::project::{declare_all, BuildUnit};
use crate::rewrite::{rewrite_jar, RewriteOutcome, SkipReason};
use crate::ui::{self, UiContext};
use std::path::Path;
use tracing::debug;

/// Execute the inject command
pub async fn execute(args: InjectArgs, config: &Config, project_dir: &Path) -> ModToolsResult<()> {
    let ctx = UiContext::detect();
    let unit = BuildUnit::resolve(config, project_dir)?;

    let platform = args
        .platform
        .or(unit.platform)
        .ok_or_else(|| ModToolsError::PlatformUndetected(unit.path.clone()))?;
    let mod_id = args.mod_id.unwrap_or_else(|| unit.mod_id.clone());

    let tracker = DependencyTracker::new();
    let handler = DependencyHandler::new(&tracker, unit.path.clone(), Some(platform));
    if !args.no_declared {
        declare_all(&handler, &config.dependencies);
    }
    for notation in &args.required {
        handler.required(notation, None, None);
    }
    for notation in &args.optional {
        handler.optional(notation, None, None);
    }
    for notation in &args.embedded {
        handler.embedded(notation, None, None);
    }

    let deps = tracker.fetch(&unit.path);
    debug!("{} dependencies tracked for {}", deps.len(), unit.path);

    for jar in args.jars {
        let jar = project_dir.join(jar);
        let task_jar = jar.clone();
        let task_mod_id = mod_id.clone();
        let task_deps = deps.clone();

        let outcome = tokio::task::spawn_blocking(move || {
            rewrite_jar(&task_jar, platform, &task_mod_id, &task_deps)
        })
        .await
        .map_err(|e| ModToolsError::Internal(format!("jar rewrite task failed: {}", e)))?;

        match outcome {
            Ok(RewriteOutcome::Rewritten {
                modified_entries,
                total_entries,
            }) if modified_entries.is_empty() => ui::step_warn_hint(
                &ctx,
                &format!("No {} metadata in {}", platform, jar.display()),
                &format!("{} entries copied unchanged", total_entries),
            ),
            Ok(RewriteOutcome::Rewritten {
                modified_entries, ..
            }) => ui::step_ok_detail(
                &ctx,
                &format!("Added {} dependencies to {}", deps.len(), jar.display()),
                &modified_entries.join(", "),
            ),
            Ok(RewriteOutcome::Skipped(SkipReason::NoDependencies)) => {
                ui::step_info(&ctx, &format!("No mod dependencies for {}", jar.display()))
            }
            Ok(RewriteOutcome::Skipped(SkipReason::MissingArchive)) => ui::step_warn(
                &ctx,
                &format!("Jar file does not exist: {}", jar.display()),
            ),
            Err(e) => {
                ui::step_error_detail(&ctx, &format!("Failed to rewrite {}", jar.display()), &e.to_string());
                return Err(e);
            }
        }
    }

    Ok(())
}
