//! Custom theme for cliclack output

use cliclack::ThemeState;
use console::Style;

/// Green branding, matching the launcher palette mod authors expect
#[derive(Debug, Clone, Default)]
pub struct ModToolsTheme;

impl cliclack::Theme for ModToolsTheme {
    fn bar_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().green(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().green().dim(),
        }
    }

    fn state_symbol_color(&self, state: &ThemeState) -> Style {
        match state {
            ThemeState::Active => Style::new().green(),
            ThemeState::Error(_) => Style::new().red(),
            ThemeState::Cancel => Style::new().dim(),
            ThemeState::Submit => Style::new().cyan(),
        }
    }
}

/// Initialize the global theme
pub fn init_theme() {
    cliclack::set_theme(ModToolsTheme);
}
