//! Theme Commands
//!
//! One `theme-<name>` command per palette.

use alloc::format;

use crate::session::ThemeId;
use crate::shell::{Command, CommandRegistry, CommandResult, ShellContext, ShellError};

/// Switches the session theme
pub struct ThemeCommand {
    theme: ThemeId,
    description: &'static str,
}

impl Command for ThemeCommand {
    fn name(&self) -> &'static str {
        self.theme.command_name()
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.theme = self.theme;
        log::info!("theme -> {}", self.theme.name());
        Ok(CommandResult::line(format!(
            "Switched to {} theme!",
            self.theme.display_name()
        )))
    }
}

const fn theme(theme: ThemeId, description: &'static str) -> ThemeCommand {
    ThemeCommand { theme, description }
}

/// Static instances, in menu order
pub static THEME_CMDS: [ThemeCommand; 20] = [
    theme(ThemeId::Matrix, "Switch to matrix theme"),
    theme(ThemeId::Solarized, "Switch to solarized theme"),
    theme(ThemeId::Dracula, "Switch to dracula theme"),
    theme(ThemeId::Hacker, "Switch to hacker theme"),
    theme(ThemeId::Cyberpunk, "Switch to cyberpunk theme"),
    theme(ThemeId::Monokai, "Switch to monokai theme"),
    theme(ThemeId::Nord, "Switch to nord theme"),
    theme(ThemeId::TerminalClassic, "Switch to terminal classic theme"),
    theme(ThemeId::Whiteout, "Switch to whiteout theme"),
    theme(ThemeId::Abyss, "Switch to abyss theme"),
    theme(ThemeId::Ocean, "Switch to ocean theme"),
    theme(ThemeId::Forest, "Switch to forest theme"),
    theme(ThemeId::Sunset, "Switch to sunset theme"),
    theme(ThemeId::Neon, "Switch to neon theme"),
    theme(ThemeId::Pastel, "Switch to pastel theme"),
    theme(ThemeId::Midnight, "Switch to midnight theme"),
    theme(ThemeId::Retro, "Switch to retro theme"),
    theme(ThemeId::Arctic, "Switch to arctic theme"),
    theme(ThemeId::Lava, "Switch to lava theme"),
    theme(ThemeId::Twilight, "Switch to twilight theme"),
];

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    for cmd in THEME_CMDS.iter() {
        registry.register(cmd);
    }
    registry
}
