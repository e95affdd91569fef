//! UI module for consistent CLI output
//!
//! Uses `cliclack` styling in interactive terminals with automatic
//! fallback to plain, prefix-tagged lines in CI and when output is piped
//! (e.g. a Gradle `exec` task).
//!
//! # Example
//!
//! ```rust,ignore
//! use modding_tools::ui::{self, UiContext};
//!
//! let ctx = UiContext::detect();
//!
//! ui::intro(&ctx, "Version catalog");
//! ui::step_ok_detail(&ctx, "Resolved", "1.20.1");
//! ui::step_warn_hint(&ctx, "Platform not detected", "Pass --platform");
//! ```

mod context;
mod output;
mod theme;

pub use context::UiContext;
pub use output::{
    intro, key_value, outro_success, remark, section, step_error_detail, step_info, step_ok,
    step_ok_detail, step_warn, step_warn_hint,
};
pub use theme::{init_theme, ModToolsTheme};
