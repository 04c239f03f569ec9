//! Session State
//!
//! The cross-cutting mode flags of a terminal session (theme, fun zone, help
//! context, active game, visual effects) plus the working directory, and the
//! queue of delayed effects that command handlers schedule.
//!
//! Handlers reach this through `ShellContext`; the session shell touches it
//! directly only for timers, Ctrl+C and game completion.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::HOME_DIR;
use crate::data::themes::{Palette, palette_for};
use crate::vfs::basename;

// ============================================================================
// Help Context
// ============================================================================

/// The menu the user has entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelpContext {
    Portfolio,
    Games,
    Theme,
}

impl HelpContext {
    /// Name of the menu command that enters this context
    pub fn name(&self) -> &'static str {
        match self {
            HelpContext::Portfolio => "portfolio",
            HelpContext::Games => "games",
            HelpContext::Theme => "theme",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "portfolio" => Some(HelpContext::Portfolio),
            "games" => Some(HelpContext::Games),
            "theme" => Some(HelpContext::Theme),
            _ => None,
        }
    }
}

// ============================================================================
// Themes
// ============================================================================

/// Visual theme identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeId {
    #[default]
    Matrix,
    Solarized,
    Dracula,
    Hacker,
    Cyberpunk,
    Monokai,
    Nord,
    TerminalClassic,
    Whiteout,
    Abyss,
    Ocean,
    Forest,
    Sunset,
    Neon,
    Pastel,
    Midnight,
    Retro,
    Arctic,
    Lava,
    Twilight,
}

impl ThemeId {
    /// Every theme, in menu order
    pub const ALL: [ThemeId; 20] = [
        ThemeId::Matrix,
        ThemeId::Solarized,
        ThemeId::Dracula,
        ThemeId::Hacker,
        ThemeId::Cyberpunk,
        ThemeId::Monokai,
        ThemeId::Nord,
        ThemeId::TerminalClassic,
        ThemeId::Whiteout,
        ThemeId::Abyss,
        ThemeId::Ocean,
        ThemeId::Forest,
        ThemeId::Sunset,
        ThemeId::Neon,
        ThemeId::Pastel,
        ThemeId::Midnight,
        ThemeId::Retro,
        ThemeId::Arctic,
        ThemeId::Lava,
        ThemeId::Twilight,
    ];

    /// Short name, as used after `theme-`
    pub fn name(&self) -> &'static str {
        match self {
            ThemeId::Matrix => "matrix",
            ThemeId::Solarized => "solarized",
            ThemeId::Dracula => "dracula",
            ThemeId::Hacker => "hacker",
            ThemeId::Cyberpunk => "cyberpunk",
            ThemeId::Monokai => "monokai",
            ThemeId::Nord => "nord",
            ThemeId::TerminalClassic => "terminal-classic",
            ThemeId::Whiteout => "whiteout",
            ThemeId::Abyss => "abyss",
            ThemeId::Ocean => "ocean",
            ThemeId::Forest => "forest",
            ThemeId::Sunset => "sunset",
            ThemeId::Neon => "neon",
            ThemeId::Pastel => "pastel",
            ThemeId::Midnight => "midnight",
            ThemeId::Retro => "retro",
            ThemeId::Arctic => "arctic",
            ThemeId::Lava => "lava",
            ThemeId::Twilight => "twilight",
        }
    }

    /// Name as shown in messages ("terminal classic")
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeId::TerminalClassic => "terminal classic",
            other => other.name(),
        }
    }

    /// The `theme-<name>` command that selects this theme
    pub fn command_name(&self) -> &'static str {
        match self {
            ThemeId::Matrix => "theme-matrix",
            ThemeId::Solarized => "theme-solarized",
            ThemeId::Dracula => "theme-dracula",
            ThemeId::Hacker => "theme-hacker",
            ThemeId::Cyberpunk => "theme-cyberpunk",
            ThemeId::Monokai => "theme-monokai",
            ThemeId::Nord => "theme-nord",
            ThemeId::TerminalClassic => "theme-terminal-classic",
            ThemeId::Whiteout => "theme-whiteout",
            ThemeId::Abyss => "theme-abyss",
            ThemeId::Ocean => "theme-ocean",
            ThemeId::Forest => "theme-forest",
            ThemeId::Sunset => "theme-sunset",
            ThemeId::Neon => "theme-neon",
            ThemeId::Pastel => "theme-pastel",
            ThemeId::Midnight => "theme-midnight",
            ThemeId::Retro => "theme-retro",
            ThemeId::Arctic => "theme-arctic",
            ThemeId::Lava => "theme-lava",
            ThemeId::Twilight => "theme-twilight",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.name() == name)
    }

    pub fn palette(&self) -> Palette {
        palette_for(*self)
    }
}

// ============================================================================
// Games
// ============================================================================

/// Mini-game identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameId {
    Snake,
    Twenty48,
    Guess,
    TicTacToe,
    Memory,
    Hangman,
    Trivia,
    Minesweeper,
    MemoryMatch,
}

impl GameId {
    /// Every game, in menu order
    pub const ALL: [GameId; 9] = [
        GameId::Snake,
        GameId::Twenty48,
        GameId::Guess,
        GameId::TicTacToe,
        GameId::Memory,
        GameId::Hangman,
        GameId::Trivia,
        GameId::Minesweeper,
        GameId::MemoryMatch,
    ];

    /// Short name, as used after `game-`
    pub fn name(&self) -> &'static str {
        match self {
            GameId::Snake => "snake",
            GameId::Twenty48 => "2048",
            GameId::Guess => "guess",
            GameId::TicTacToe => "tictactoe",
            GameId::Memory => "memory",
            GameId::Hangman => "hangman",
            GameId::Trivia => "trivia",
            GameId::Minesweeper => "minesweeper",
            GameId::MemoryMatch => "memorymatch",
        }
    }

    /// The `game-<name>` command that starts this game
    pub fn command_name(&self) -> &'static str {
        match self {
            GameId::Snake => "game-snake",
            GameId::Twenty48 => "game-2048",
            GameId::Guess => "game-guess",
            GameId::TicTacToe => "game-tictactoe",
            GameId::Memory => "game-memory",
            GameId::Hangman => "game-hangman",
            GameId::Trivia => "game-trivia",
            GameId::Minesweeper => "game-minesweeper",
            GameId::MemoryMatch => "game-memorymatch",
        }
    }

    /// Title used in descriptions ("Play Tic Tac Toe game")
    pub fn title(&self) -> &'static str {
        match self {
            GameId::Snake => "Snake",
            GameId::Twenty48 => "2048",
            GameId::Guess => "Guess",
            GameId::TicTacToe => "Tic Tac Toe",
            GameId::Memory => "Memory",
            GameId::Hangman => "Hangman",
            GameId::Trivia => "Trivia",
            GameId::Minesweeper => "Minesweeper",
            GameId::MemoryMatch => "Memory Match",
        }
    }

    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|g| g.name() == name)
    }
}

// ============================================================================
// Mode State
// ============================================================================

/// Cross-cutting session flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeState {
    pub theme: ThemeId,
    pub fun_zone: bool,
    pub help_context: Option<HelpContext>,
    pub active_game: Option<GameId>,
    pub matrix_rain: bool,
    /// Shows the renderer's spinner
    pub loading: bool,
    pub session_start_ms: u64,
}

impl ModeState {
    pub fn new(session_start_ms: u64) -> Self {
        Self {
            theme: ThemeId::default(),
            fun_zone: false,
            help_context: None,
            active_game: None,
            matrix_rain: false,
            loading: false,
            session_start_ms,
        }
    }
}

/// Mode flags plus the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    pub mode: ModeState,
    cwd: String,
}

impl SessionState {
    pub fn new(session_start_ms: u64) -> Self {
        Self {
            mode: ModeState::new(session_start_ms),
            cwd: String::from(HOME_DIR),
        }
    }

    /// Current working directory (absolute)
    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Set the working directory
    ///
    /// Callers must have checked that `path` names a directory.
    pub fn set_cwd(&mut self, path: &str) {
        self.cwd = String::from(path);
    }

    /// Location segment of the prompt: `~` at home, else the last segment
    pub fn prompt_location(&self) -> &str {
        if self.cwd == HOME_DIR {
            "~"
        } else {
            basename(&self.cwd)
        }
    }
}

// ============================================================================
// Timer Queue
// ============================================================================

/// A delayed effect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimerAction {
    ClearLoading,
    StopRain,
    OpenUrl(String),
    Reload,
}

/// Pending delayed effects, fired by the session shell once due
///
/// Entries are independent; scheduling never replaces an earlier entry.
#[derive(Debug, Clone, Default)]
pub struct TimerQueue {
    entries: Vec<(u64, TimerAction)>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire at `due_ms`
    pub fn schedule(&mut self, due_ms: u64, action: TimerAction) {
        log::trace!("timer scheduled at {}ms: {:?}", due_ms, action);
        self.entries.push((due_ms, action));
    }

    /// Remove and return every action due at `now_ms`, earliest first
    ///
    /// Entries with the same due time come out in scheduling order.
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<TimerAction> {
        let mut due: Vec<(u64, TimerAction)> = Vec::new();
        let mut i = 0;
        while i < self.entries.len() {
            if self.entries[i].0 <= now_ms {
                due.push(self.entries.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, action)| action).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_defaults() {
        let state = SessionState::new(0);
        assert_eq!(state.cwd(), "/home/rahil");
        assert_eq!(state.prompt_location(), "~");
        assert_eq!(state.mode.theme, ThemeId::Matrix);
        assert!(!state.mode.fun_zone);
        assert!(state.mode.help_context.is_none());
        assert!(state.mode.active_game.is_none());
    }

    #[test]
    fn test_prompt_location_uses_last_segment() {
        let mut state = SessionState::new(0);
        state.set_cwd("/home/rahil/projects");
        assert_eq!(state.prompt_location(), "projects");
    }

    #[test]
    fn test_theme_names_round_trip() {
        for theme in ThemeId::ALL {
            assert_eq!(ThemeId::from_name(theme.name()), Some(theme));
            assert_eq!(theme.command_name().strip_prefix("theme-"), Some(theme.name()));
        }
        assert_eq!(ThemeId::TerminalClassic.display_name(), "terminal classic");
    }

    #[test]
    fn test_game_command_names() {
        for game in GameId::ALL {
            assert_eq!(GameId::parse(game.name()), Some(game));
            assert_eq!(game.command_name().strip_prefix("game-"), Some(game.name()));
        }
        assert_eq!(GameId::parse("pong"), None);
    }

    #[test]
    fn test_timer_queue_fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(5_000, TimerAction::StopRain);
        timers.schedule(1_500, TimerAction::OpenUrl(String::from("https://a")));
        timers.schedule(5_000, TimerAction::ClearLoading);

        assert!(timers.drain_due(1_000).is_empty());
        assert_eq!(
            timers.drain_due(1_500),
            [TimerAction::OpenUrl(String::from("https://a"))]
        );
        assert_eq!(
            timers.drain_due(9_000),
            [TimerAction::StopRain, TimerAction::ClearLoading]
        );
        assert!(timers.is_empty());
    }
}
