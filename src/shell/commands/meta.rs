//! Meta Commands
//!
//! help, the three menu commands that enter a help context (portfolio,
//! games, theme), and weather. Merged last, so the `games` menu replaces
//! the plain games listing in the full registry.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use super::{CommandRegistry, default_commands};
use crate::rng::{choose, range_inclusive};
use crate::session::HelpContext;
use crate::shell::{Command, CommandResult, ShellContext, ShellError};

/// Commands always listed at the top of `help`
const BASE_COMMANDS: &[&str] = &[
    "help", "portfolio", "about", "contact", "whoami", "games", "fun-zone", "theme", "weather",
    "ls", "cd", "cat",
];

/// `• name - description` for every command of a registry
fn bullet_list<'a>(
    registry: &'a CommandRegistry,
    prefix: Option<&'static str>,
) -> impl Iterator<Item = String> + 'a {
    registry
        .commands()
        .iter()
        .filter(move |c| prefix.is_none_or(|p| c.name().starts_with(p)))
        .map(|c| format!("• {} - {}", c.name(), c.description()))
}

fn push_heading(lines: &mut Vec<String>, title: &str, rule: &str) {
    lines.push(String::from(title));
    lines.push(String::from(rule));
    lines.push(String::new());
}

const GAME_CONTROLS: &[&str] = &[
    "🎮 GAME CONTROLS",
    "===============",
    "• Press Q to quit any game",
    "• Use arrow keys for movement in supported games",
];

// ============================================================================
// Help Command
// ============================================================================

/// Help command - list commands for the current mode
pub struct HelpCommand;

impl Command for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn description(&self) -> &'static str {
        "Show available commands"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let commands = default_commands();
        let mut lines = Vec::new();

        push_heading(&mut lines, "AVAILABLE COMMANDS", "=================");
        for name in BASE_COMMANDS {
            if let Some(cmd) = commands.full.find(name) {
                lines.push(format!("• {} - {}", name, cmd.description()));
            }
        }

        let mode = &ctx.state.mode;
        match (mode.help_context, mode.fun_zone) {
            (Some(HelpContext::Games), _) => {
                lines.push(String::new());
                push_heading(&mut lines, "🎮 AVAILABLE GAMES", "=================");
                lines.extend(bullet_list(&commands.games, Some("game-")));
                lines.push(String::new());
                lines.extend(GAME_CONTROLS.iter().map(|l| String::from(*l)));
            }
            (Some(HelpContext::Portfolio), _) => {
                lines.push(String::new());
                push_heading(&mut lines, "📋 PORTFOLIO COMMANDS", "====================");
                lines.extend(bullet_list(&commands.portfolio, None));
            }
            (Some(HelpContext::Theme), _) => {
                lines.push(String::new());
                push_heading(&mut lines, "🌈 THEME COMMANDS", "================");
                lines.extend(bullet_list(&commands.theme, Some("theme-")));
            }
            (None, true) => {
                lines.push(String::new());
                push_heading(&mut lines, "🎉 FUN ZONE COMMANDS", "=================");
                lines.extend(bullet_list(&commands.fun, None));
            }
            (None, false) => {}
        }

        lines.push(String::new());
        lines.push(String::from(
            "💡 Navigation tips: Use ↑/↓ for history, Tab for autocompletion, Ctrl+C to interrupt",
        ));
        lines.push(String::new());
        Ok(CommandResult::Text(lines))
    }
}

/// Static instance
pub static HELP_CMD: HelpCommand = HelpCommand;

// ============================================================================
// Menu Commands
// ============================================================================

/// Enters a help context and prints that menu
pub struct MenuCommand {
    context: HelpContext,
    description: &'static str,
}

impl Command for MenuCommand {
    fn name(&self) -> &'static str {
        self.context.name()
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.help_context = Some(self.context);
        log::info!("help context -> {}", self.context.name());

        let commands = default_commands();
        let mut lines = Vec::new();
        match self.context {
            HelpContext::Portfolio => {
                push_heading(&mut lines, "📋 PORTFOLIO COMMANDS", "====================");
                lines.extend(bullet_list(&commands.portfolio, None));
            }
            HelpContext::Games => {
                push_heading(&mut lines, "🎮 AVAILABLE GAMES", "=================");
                lines.extend(bullet_list(&commands.games, Some("game-")));
                lines.push(String::new());
                lines.extend(GAME_CONTROLS.iter().map(|l| String::from(*l)));
            }
            HelpContext::Theme => {
                push_heading(&mut lines, "🌈 THEME COMMANDS", "================");
                lines.extend(bullet_list(&commands.theme, Some("theme-")));
            }
        }
        lines.push(String::new());
        Ok(CommandResult::Text(lines))
    }
}

/// Static instance
pub static PORTFOLIO_MENU_CMD: MenuCommand = MenuCommand {
    context: HelpContext::Portfolio,
    description: "View my portfolio",
};

/// Static instance
pub static GAMES_MENU_CMD: MenuCommand = MenuCommand {
    context: HelpContext::Games,
    description: "List available games",
};

/// Static instance
pub static THEME_MENU_CMD: MenuCommand = MenuCommand {
    context: HelpContext::Theme,
    description: "Change terminal theme",
};

// ============================================================================
// Weather Command
// ============================================================================

/// Weather command - mock report for the visitor's position
pub struct WeatherCommand;

const CONDITIONS: &[&str] = &["Sunny", "Cloudy", "Rainy", "Partly Cloudy"];

impl Command for WeatherCommand {
    fn name(&self) -> &'static str {
        "weather"
    }
    fn description(&self) -> &'static str {
        "Get current weather information"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let position = match ctx.host.geolocate() {
            Ok(position) => position,
            Err(e) => {
                log::warn!("geolocation failed: {}", e);
                return Ok(CommandResult::lines(&[
                    "",
                    "❌ Weather service unavailable",
                    "Unable to fetch weather data. Please check location permissions.",
                    "",
                ]));
            }
        };

        let temperature = range_inclusive(ctx.rng, 5, 34);
        let conditions = choose(ctx.rng, CONDITIONS).copied().unwrap_or("Clear");
        let humidity = range_inclusive(ctx.rng, 40, 79);
        let wind = range_inclusive(ctx.rng, 5, 24);
        let updated = ctx.host.local_time().unwrap_or_else(|| String::from("just now"));

        Ok(CommandResult::Text(alloc::vec![
            String::new(),
            String::from("🌤️  WEATHER REPORT"),
            String::from("================="),
            String::new(),
            format!(
                "📍 Location: Your Location ({:.2}, {:.2})",
                position.latitude, position.longitude
            ),
            format!("🌡️  Temperature: {}°C", temperature),
            format!("☁️  Conditions: {}", conditions),
            format!("💧 Humidity: {}%", humidity),
            format!("💨 Wind Speed: {} km/h", wind),
            format!("🕐 Updated: {}", updated),
            String::new(),
        ]))
    }
}

/// Static instance
pub static WEATHER_CMD: WeatherCommand = WeatherCommand;

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(&HELP_CMD);
    registry.register(&GAMES_MENU_CMD);
    registry.register(&PORTFOLIO_MENU_CMD);
    registry.register(&THEME_MENU_CMD);
    registry.register(&WEATHER_CMD);
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

    struct GeoHost {
        position: Option<GeoPosition>,
    }

    impl Host for GeoHost {
        fn now_ms(&self) -> u64 {
            0
        }
        fn local_time(&self) -> Option<String> {
            Some(String::from("10:00:00"))
        }
        fn public_ip(&mut self) -> Result<String, HostError> {
            Err(HostError::Unavailable)
        }
        fn geolocate(&mut self) -> Result<GeoPosition, HostError> {
            self.position.ok_or(HostError::PermissionDenied)
        }
        fn open_url(&mut self, _url: &str) {}
        fn reload(&mut self) {}
    }

    fn run(cmd: &dyn Command, state: &mut SessionState, host: &mut GeoHost) -> Vec<String> {
        let history = HistoryLedger::new();
        let mut rng = SessionRng::new(5);
        let mut timers = TimerQueue::new();
        let mut ctx = ShellContext {
            state,
            history: &history,
            fs: filesystem(),
            host,
            rng: &mut rng,
            timers: &mut timers,
            now_ms: 0,
        };
        match cmd.execute(&[], &mut ctx) {
            Ok(CommandResult::Text(lines)) => lines,
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_menu_sets_context() {
        let mut state = SessionState::new(0);
        let mut host = GeoHost { position: None };
        let lines = run(&PORTFOLIO_MENU_CMD, &mut state, &mut host);
        assert_eq!(state.mode.help_context, Some(HelpContext::Portfolio));
        assert_eq!(lines[0], "📋 PORTFOLIO COMMANDS");
        assert!(lines.contains(&String::from("• about - Learn about me")));

        let lines = run(&THEME_MENU_CMD, &mut state, &mut host);
        assert_eq!(state.mode.help_context, Some(HelpContext::Theme));
        assert!(lines.contains(&String::from("• theme-terminal-classic - Switch to terminal classic theme")));
    }

    #[test]
    fn test_bullet_list_filters_by_prefix() {
        let commands = default_commands();
        let themes: Vec<String> = bullet_list(&commands.theme, Some("theme-")).collect();
        assert_eq!(themes.len(), commands.theme.len());
        assert_eq!(themes[0], "• theme-matrix - Switch to matrix theme");

        let all: Vec<String> = bullet_list(&commands.portfolio, None).collect();
        assert_eq!(all.len(), commands.portfolio.len());
    }

    #[test]
    fn test_games_menu_lists_launchers_only() {
        let mut state = SessionState::new(0);
        let mut host = GeoHost { position: None };
        let lines = run(&GAMES_MENU_CMD, &mut state, &mut host);
        assert!(lines.contains(&String::from("• game-snake - Play Snake game")));
        assert!(!lines.iter().any(|l| l.starts_with("• games ")));
    }

    #[test]
    fn test_help_shows_context_block() {
        let mut state = SessionState::new(0);
        let mut host = GeoHost { position: None };
        let plain = run(&HELP_CMD, &mut state, &mut host);
        assert_eq!(plain[0], "AVAILABLE COMMANDS");
        assert!(!plain.iter().any(|l| l.contains("GAME CONTROLS")));

        state.mode.help_context = Some(HelpContext::Games);
        let games = run(&HELP_CMD, &mut state, &mut host);
        assert!(games.iter().any(|l| l.contains("GAME CONTROLS")));
    }

    #[test]
    fn test_weather_fallback_on_denied_location() {
        let mut state = SessionState::new(0);
        let mut host = GeoHost { position: None };
        let lines = run(&WEATHER_CMD, &mut state, &mut host);
        assert_eq!(lines[1], "❌ Weather service unavailable");
    }

    #[test]
    fn test_weather_report() {
        let mut state = SessionState::new(0);
        let mut host = GeoHost {
            position: Some(GeoPosition {
                latitude: 37.7749,
                longitude: -122.4194,
            }),
        };
        let lines = run(&WEATHER_CMD, &mut state, &mut host);
        assert_eq!(lines[1], "🌤️  WEATHER REPORT");
        assert_eq!(lines[4], "📍 Location: Your Location (37.77, -122.42)");
        assert_eq!(lines[9], "🕐 Updated: 10:00:00");
    }
}
