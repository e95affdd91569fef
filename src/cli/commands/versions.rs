//! Versions command - list Minecraft versions with dedicated data

use super::resolver;
use crate::cli::args::{OutputFormat, VersionsArgs};
use crate::config::Config;
use crate::error::ModToolsResult;
use crate::ui::{self, UiContext};

/// Execute the versions command
pub async fn execute(args: VersionsArgs, config: &Config) -> ModToolsResult<()> {
    let resolver = resolver(config, args.source.as_deref())?;
    let keys = resolver.store().list_known_keys()?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&*keys)?);
        }
        OutputFormat::Table => {
            let ctx = UiContext::detect();
            ui::section(&ctx, &format!("Version data ({})", resolver.store().source().describe()));
            if keys.is_empty() {
                ui::remark(&ctx, "No versions listed; every request resolves to base data");
            }
            for key in keys.iter() {
                ui::step_info(&ctx, key);
            }
        }
        OutputFormat::Plain | OutputFormat::Kotlin => {
            for key in keys.iter() {
                println!("{}", key);
            }
        }
    }

    Ok(())
}
