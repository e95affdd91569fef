//! Repos command - show Maven repositories for mod projects

use crate::cli::args::{OutputFormat, ReposArgs};
use crate::error::ModToolsResult;
use crate::repositories::{kotlin_block, DEPENDENCY_REPOSITORIES, PLUGIN_REPOSITORIES};
use crate::ui::{self, UiContext};

/// Execute the repos command
pub async fn execute(args: ReposArgs) -> ModToolsResult<()> {
    let (title, repositories) = if args.plugins {
        ("Plugin repositories", PLUGIN_REPOSITORIES)
    } else {
        ("Dependency repositories", DEPENDENCY_REPOSITORIES)
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(repositories)?),
        OutputFormat::Kotlin => println!("{}", kotlin_block(repositories)),
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::section(&ctx, title);
            for repo in repositories {
                ui::key_value(&ctx, &repo.to_kotlin_dsl(), repo.url);
            }
        }
        OutputFormat::Plain => {
            for repo in repositories {
                println!("{}", repo.url);
            }
        }
    }

    Ok(())
}
