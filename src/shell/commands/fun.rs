//! Fun Zone Commands
//!
//! The easter-egg command set unlocked by `fun-zone`: visual effects, joke
//! simulations, dice, quotes, fortunes and the ASCII art gallery.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{LOADING_RESET_MS, MATRIX_RAIN_MS, SUDO_RANDOM_DELAY_MS};
use crate::data::{ascii, sayings};
use crate::rng::{choose, range_inclusive};
use crate::session::TimerAction;
use crate::shell::{Command, CommandRegistry, CommandResult, ShellContext, ShellError};

// ============================================================================
// Mode switches
// ============================================================================

/// Fun-zone command - unlock the fun command set
pub struct FunZoneCommand;

impl Command for FunZoneCommand {
    fn name(&self) -> &'static str {
        "fun-zone"
    }
    fn description(&self) -> &'static str {
        "Enter fun mode with special commands"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.fun_zone = true;
        log::info!("entered fun zone");
        Ok(CommandResult::lines(&[
            "🎮 ENTERING FUN ZONE 🎮",
            "Admin privileges granted!",
            "Type \"help\" to see fun commands",
            "Type \"exit-fun\" to return to normal mode",
        ]))
    }
}

/// Static instance
pub static FUN_ZONE_CMD: FunZoneCommand = FunZoneCommand;

/// Exit-fun command - leave the fun zone
///
/// The interpreter handles `exit-fun` ahead of any registry lookup; this
/// entry keeps it listed and completable inside the fun zone.
pub struct ExitFunCommand;

impl Command for ExitFunCommand {
    fn name(&self) -> &'static str {
        "exit-fun"
    }
    fn description(&self) -> &'static str {
        "Leave the fun zone"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.fun_zone = false;
        ctx.state.mode.help_context = None;
        Ok(CommandResult::line(
            "Exited fun zone and all contexts. Back to main menu! 💼",
        ))
    }
}

/// Static instance
pub static EXIT_FUN_CMD: ExitFunCommand = ExitFunCommand;

// ============================================================================
// Effects
// ============================================================================

/// Rain command - matrix rain overlay for a few seconds
pub struct RainCommand;

impl Command for RainCommand {
    fn name(&self) -> &'static str {
        "rain"
    }
    fn description(&self) -> &'static str {
        "Trigger matrix rain effect"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.matrix_rain = true;
        ctx.schedule(MATRIX_RAIN_MS, TimerAction::StopRain);
        Ok(CommandResult::line("Initiating matrix rain..."))
    }
}

/// Static instance
pub static RAIN_CMD: RainCommand = RainCommand;

/// Hack command - fake hacking session with a spinner
pub struct HackCommand;

impl Command for HackCommand {
    fn name(&self) -> &'static str {
        "hack"
    }
    fn description(&self) -> &'static str {
        "Simulate a hacking process"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.loading = true;
        ctx.schedule(LOADING_RESET_MS, TimerAction::ClearLoading);
        Ok(CommandResult::lines(&[
            "Hacking in progress...",
            "Bypassing firewall...",
            "Accessing system files...",
            "Hack complete! (Just kidding)",
        ]))
    }
}

/// Static instance
pub static HACK_CMD: HackCommand = HackCommand;

// ============================================================================
// Canned simulations
// ============================================================================

/// A fun command that prints fixed lines
pub struct CannedCommand {
    name: &'static str,
    description: &'static str,
    lines: &'static [&'static str],
}

impl Command for CannedCommand {
    fn name(&self) -> &'static str {
        self.name
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::lines(self.lines))
    }
}

/// Static instance
pub static DEBUGGING_SIMULATOR_CMD: CannedCommand = CannedCommand {
    name: "debugging-simulator",
    description: "Run a debugging simulation",
    lines: &[
        "🐛 DEBUGGING SIMULATOR 🐛",
        "Error: Cannot read property \"undefined\" of undefined",
        "Line 42: const bug = undefined.whoops();",
        "How to fix: 1. Add null check, 2. Use optional chaining, 3. Blame the intern",
        "Bug fixed! Ship it! 🚀",
    ],
};

/// Static instance
pub static DEPLOY_WAR_CMD: CannedCommand = CannedCommand {
    name: "deploy-war",
    description: "Simulate a git deployment war",
    lines: &[
        "⚔️ GIT DEPLOYMENT WAR ⚔️",
        "$ git push origin main",
        "Counting objects: 1337...",
        "Compressing objects: 100%",
        "❌ BUILD FAILED! Error: Missing semicolon",
        "Crisis averted... for now.",
    ],
};

/// Static instance
pub static SUDO_BOOT_CMD: CannedCommand = CannedCommand {
    name: "sudo-boot",
    description: "Simulate a system reboot",
    lines: &[
        "SYSTEM REBOOT INITIATED",
        "BIOS Version 1.33.7",
        "CPU: Intel i9-9999K @ 5.0GHz",
        "Loading OS...",
        "System ready! Welcome back! 🖥️",
    ],
};

// ============================================================================
// Random picks
// ============================================================================

/// Sudo-random command - open a random website after a countdown
pub struct SudoRandomCommand;

impl Command for SudoRandomCommand {
    fn name(&self) -> &'static str {
        "sudo-random"
    }
    fn description(&self) -> &'static str {
        "Open a random website"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let site = choose(ctx.rng, sayings::RANDOM_SITES)
            .ok_or(ShellError::ExecutionFailed("No sites to teleport to"))?;
        ctx.schedule(SUDO_RANDOM_DELAY_MS, TimerAction::OpenUrl(String::from(*site)));
        Ok(CommandResult::lines(&[
            "RANDOM WEBSITE TELEPORTER",
            "Scanning the multiverse...",
            "Preparing teleportation...",
            "3... 2... 1... 🚀",
        ]))
    }
}

/// Static instance
pub static SUDO_RANDOM_CMD: SudoRandomCommand = SudoRandomCommand;

/// Dice command - roll a six-sided die
pub struct DiceCommand;

impl Command for DiceCommand {
    fn name(&self) -> &'static str {
        "dice"
    }
    fn description(&self) -> &'static str {
        "Roll a six-sided die"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let roll = range_inclusive(ctx.rng, 1, 6);
        Ok(CommandResult::line(format!("You rolled a {}!", roll)))
    }
}

/// Static instance
pub static DICE_CMD: DiceCommand = DiceCommand;

/// Prints one random entry of a list
pub struct PickCommand {
    name: &'static str,
    description: &'static str,
    pool: &'static [&'static str],
}

impl Command for PickCommand {
    fn name(&self) -> &'static str {
        self.name
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let pick = choose(ctx.rng, self.pool).ok_or(ShellError::ExecutionFailed("Nothing to say"))?;
        Ok(CommandResult::line(*pick))
    }
}

/// Static instance
pub static QUOTE_CMD: PickCommand = PickCommand {
    name: "quote",
    description: "Display a random quote",
    pool: sayings::QUOTES,
};

/// Static instance
pub static FORTUNE_CMD: PickCommand = PickCommand {
    name: "fortune",
    description: "Display a random fortune",
    pool: sayings::FORTUNES,
};

// ============================================================================
// ASCII art
// ============================================================================

/// Ascii command - list the gallery
pub struct AsciiCommand;

impl Command for AsciiCommand {
    fn name(&self) -> &'static str {
        "ascii"
    }
    fn description(&self) -> &'static str {
        "View ASCII art gallery"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let mut lines = Vec::new();
        lines.push(String::from("ASCII Art Gallery"));
        lines.push(String::from("Available ASCII art:"));
        lines.extend(ascii::keys().map(|k| format!("• {}", k)));
        lines.push(String::from("Try: ascii-<name> (e.g., ascii-doge)"));
        Ok(CommandResult::Text(lines))
    }
}

/// Static instance
pub static ASCII_CMD: AsciiCommand = AsciiCommand;

/// Lines for `ascii-<name>`: the art, or a listing of what exists
pub fn ascii_art(name: &str) -> Vec<String> {
    if name.is_empty() {
        return alloc::vec![String::from("Provide text after ascii- (e.g., ascii-doge)")];
    }

    let key = format!("ascii-{}", name);
    match ascii::art(&key) {
        Some(art) => art.lines().map(String::from).collect(),
        None => {
            let mut lines = Vec::new();
            lines.push(format!("ASCII art for \"{}\" not found.", name));
            lines.push(String::from("Available ASCII art:"));
            lines.extend(ascii::keys().map(|k| format!("• {}", k)));
            lines
        }
    }
}

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(&FUN_ZONE_CMD);
    registry.register(&EXIT_FUN_CMD);
    registry.register(&RAIN_CMD);
    registry.register(&HACK_CMD);
    registry.register(&DEBUGGING_SIMULATOR_CMD);
    registry.register(&DEPLOY_WAR_CMD);
    registry.register(&SUDO_BOOT_CMD);
    registry.register(&SUDO_RANDOM_CMD);
    registry.register(&DICE_CMD);
    registry.register(&ASCII_CMD);
    registry.register(&QUOTE_CMD);
    registry.register(&FORTUNE_CMD);
    registry
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::HistoryLedger;
    use crate::host::{GeoPosition, Host, HostError};
    use crate::rng::SessionRng;
    use crate::session::{SessionState, TimerQueue};
    use crate::vfs::filesystem;

    struct QuietHost;

    impl Host for QuietHost {
        fn now_ms(&self) -> u64 {
            0
        }
        fn local_time(&self) -> Option<String> {
            None
        }
        fn public_ip(&mut self) -> Result<String, HostError> {
            Err(HostError::Unavailable)
        }
        fn geolocate(&mut self) -> Result<GeoPosition, HostError> {
            Err(HostError::Unavailable)
        }
        fn open_url(&mut self, _url: &str) {}
        fn reload(&mut self) {}
    }

    fn run(cmd: &dyn Command, state: &mut SessionState, timers: &mut TimerQueue, seed: u64) -> CommandResult {
        let history = HistoryLedger::new();
        let mut host = QuietHost;
        let mut rng = SessionRng::new(seed);
        let mut ctx = ShellContext {
            state,
            history: &history,
            fs: filesystem(),
            host: &mut host,
            rng: &mut rng,
            timers,
            now_ms: 10_000,
        };
        match cmd.execute(&[], &mut ctx) {
            Ok(result) => result,
            Err(e) => panic!("{} failed: {}", cmd.name(), e),
        }
    }

    #[test]
    fn test_rain_schedules_stop() {
        let mut state = SessionState::new(0);
        let mut timers = TimerQueue::new();
        run(&RAIN_CMD, &mut state, &mut timers, 1);
        assert!(state.mode.matrix_rain);
        assert!(timers.drain_due(14_999).is_empty());
        assert_eq!(timers.drain_due(15_000), [TimerAction::StopRain]);
    }

    #[test]
    fn test_hack_schedules_loading_reset() {
        let mut state = SessionState::new(0);
        let mut timers = TimerQueue::new();
        run(&HACK_CMD, &mut state, &mut timers, 1);
        assert!(state.mode.loading);
        assert_eq!(timers.drain_due(15_000), [TimerAction::ClearLoading]);
    }

    #[test]
    fn test_sudo_random_opens_known_site_later() {
        let mut state = SessionState::new(0);
        let mut timers = TimerQueue::new();
        run(&SUDO_RANDOM_CMD, &mut state, &mut timers, 9);
        let fired = timers.drain_due(11_500);
        match fired.as_slice() {
            [TimerAction::OpenUrl(url)] => assert!(sayings::RANDOM_SITES.contains(&url.as_str())),
            other => panic!("unexpected timers {:?}", other),
        }
    }

    #[test]
    fn test_dice_in_range() {
        let mut state = SessionState::new(0);
        let mut timers = TimerQueue::new();
        for seed in 1..50 {
            let CommandResult::Text(lines) = run(&DICE_CMD, &mut state, &mut timers, seed) else {
                panic!("dice should print");
            };
            let face = lines[0]
                .strip_prefix("You rolled a ")
                .and_then(|s| s.strip_suffix('!'))
                .and_then(|s| s.parse::<u32>().ok());
            assert!(face.is_some_and(|f| (1..=6).contains(&f)), "{}", lines[0]);
        }
    }

    #[test]
    fn test_ascii_art_lookup() {
        let art = ascii_art("doge");
        assert!(art.len() > 3);
        assert_eq!(
            ascii_art(""),
            ["Provide text after ascii- (e.g., ascii-doge)"]
        );
    }
}
