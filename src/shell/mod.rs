//! Shell Module
//!
//! The command interpreter. Commands implement the `Command` trait and are
//! registered in a `CommandRegistry`; the `Interpreter` parses a raw input
//! line, works out which commands are visible in the current mode, and
//! dispatches to the matching handler.
//!
//! Dispatch order:
//! - `exit-fun` and `help` (global, work in every mode)
//! - the menu commands `portfolio`, `games`, `theme`
//! - `project-<id>` links
//! - the visible command set of the current mode
//! - `ascii-<name>` inside the fun zone
//! - otherwise "command not found"

pub mod commands;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use rand_core::RngCore;

use crate::config::HOME_DIR;
use crate::data::portfolio::project_url;
use crate::history::HistoryLedger;
use crate::host::Host;
use crate::session::{GameId, HelpContext, SessionState, TimerAction, TimerQueue};
use crate::vfs::{Filesystem, FsError, normalize_path};

// Re-export commonly used items
pub use commands::{CommandRegistry, CommandSet, VisibleSet};

// ============================================================================
// Shell Context (per-dispatch view of the session)
// ============================================================================

/// Everything a command handler may read or change
pub struct ShellContext<'a> {
    /// Mode flags and working directory
    pub state: &'a mut SessionState,
    /// Submitted commands, read-only to handlers
    pub history: &'a HistoryLedger,
    /// The simulated file system
    pub fs: &'a Filesystem,
    /// External collaborators
    pub host: &'a mut dyn Host,
    /// Randomness for dice, quotes and friends
    pub rng: &'a mut dyn RngCore,
    /// Delayed effects
    pub timers: &'a mut TimerQueue,
    /// Host time at dispatch
    pub now_ms: u64,
}

impl<'a> ShellContext<'a> {
    /// Get the current working directory
    pub fn cwd(&self) -> &str {
        self.state.cwd()
    }

    /// Set the current working directory
    pub fn set_cwd(&mut self, path: &str) {
        self.state.set_cwd(path);
    }

    /// Resolve a path relative to the current working directory
    ///
    /// `~` and `~/...` are taken from the home directory. A `~` segment
    /// anywhere else restarts from home too, so the result is always a
    /// canonical path.
    pub fn resolve_path(&self, path: &str) -> String {
        let segments: Vec<&str> = path.split('/').collect();
        if let Some(last_home) = segments.iter().rposition(|s| *s == "~") {
            if last_home > 0 {
                let rest = segments[last_home + 1..].join("/");
                return normalize_path(&format!("{}/{}", HOME_DIR, rest));
            }
        }

        if path == "~" {
            String::from(HOME_DIR)
        } else if let Some(rest) = path.strip_prefix("~/") {
            normalize_path(&format!("{}/{}", HOME_DIR, rest))
        } else if path.starts_with('/') {
            normalize_path(path)
        } else {
            let full_path = if self.cwd() == "/" {
                format!("/{}", path)
            } else {
                format!("{}/{}", self.cwd(), path)
            };
            normalize_path(&full_path)
        }
    }

    /// Schedule a delayed effect relative to now
    pub fn schedule(&mut self, delay_ms: u64, action: TimerAction) {
        self.timers.schedule(self.now_ms.saturating_add(delay_ms), action);
    }
}

// ============================================================================
// Shell Error Types
// ============================================================================

/// Errors a command handler reports; each renders as one output line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// Missing or malformed arguments
    Usage(&'static str),
    /// `cd` target does not exist
    NoSuchDirectory(String),
    /// File system lookup failed for an argument
    Fs {
        command: &'static str,
        arg: String,
        error: FsError,
    },
    /// Command execution failed
    ExecutionFailed(&'static str),
}

impl core::fmt::Display for ShellError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ShellError::Usage(usage) => write!(f, "Usage: {}", usage),
            ShellError::NoSuchDirectory(arg) => write!(f, "cd: {}: No such directory", arg),
            ShellError::Fs {
                command,
                arg,
                error,
            } => write!(f, "{}: {}: {}", command, arg, error),
            ShellError::ExecutionFailed(msg) => write!(f, "{}", msg),
        }
    }
}

// ============================================================================
// Command Result
// ============================================================================

/// What a dispatched command asks the session to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Append these lines to the output
    Text(Vec<String>),
    /// Wipe the rendered line buffer
    ClearScreen,
    /// Hand control to the game host
    EnterGame(GameId),
    /// End the session
    Exit,
    /// Nothing to do (empty input)
    Unhandled,
}

impl CommandResult {
    /// A single output line
    pub fn line(text: impl Into<String>) -> Self {
        CommandResult::Text(vec![text.into()])
    }

    /// Several output lines from static text
    pub fn lines(lines: &[&str]) -> Self {
        CommandResult::Text(lines.iter().map(|l| l.to_string()).collect())
    }
}

// ============================================================================
// Command Trait
// ============================================================================

/// A command that can be executed by the interpreter
///
/// Commands are stateless and should be implemented as unit structs (or
/// structs of constant data), registered by `&'static` reference.
pub trait Command: Sync {
    /// The name typed at the prompt
    fn name(&self) -> &'static str;

    /// One-line description for help text
    fn description(&self) -> &'static str;

    /// Detailed usage information
    fn usage(&self) -> &'static str {
        ""
    }

    /// Execute the command
    ///
    /// - `args`: lowercased arguments after the command name
    /// - `ctx`: session view with the state the handler may read or change
    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError>;
}

// ============================================================================
// Line Parsing
// ============================================================================

/// Trim and lowercase a raw input line
pub fn normalize_line(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Split a normalized line into the command and its arguments
pub fn split_command(line: &str) -> Option<(&str, Vec<&str>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?;
    Some((command, words.collect()))
}

// ============================================================================
// Interpreter
// ============================================================================

/// Resolves input lines against a command set
pub struct Interpreter {
    commands: &'static CommandSet,
}

impl Interpreter {
    /// Interpreter over the default command set
    pub fn new() -> Self {
        Self {
            commands: commands::default_commands(),
        }
    }

    pub fn with_commands(commands: &'static CommandSet) -> Self {
        Self { commands }
    }

    pub fn commands(&self) -> &'static CommandSet {
        self.commands
    }

    /// Interpret one raw input line
    pub fn execute(&self, raw: &str, ctx: &mut ShellContext) -> CommandResult {
        let line = normalize_line(raw);
        let Some((command, args)) = split_command(&line) else {
            return CommandResult::Unhandled;
        };

        if command == "exit-fun" {
            ctx.state.mode.fun_zone = false;
            ctx.state.mode.help_context = None;
            log::info!("left fun zone and help context");
            return CommandResult::line("Exited fun zone and all contexts. Back to main menu! 💼");
        }

        if command == "help" || HelpContext::from_name(command).is_some() {
            log::debug!("dispatch {} (global)", command);
            return self.run(command, &args, ctx, self.commands.full.find(command));
        }

        if command.starts_with("project-") {
            return match project_url(command) {
                Some(url) => {
                    log::info!("opening project link {}", url);
                    ctx.host.open_url(url);
                    CommandResult::line(format!("🚀 Opening project link: {}", url))
                }
                None => CommandResult::line(format!(
                    "Project \"{}\" not found. Type 'projects' to see a list of available projects.",
                    command
                )),
            };
        }

        let visible = self.commands.visible(&ctx.state.mode);
        if let Some(handler) = visible.find(command) {
            log::debug!("dispatch {}", command);
            return self.run(command, &args, ctx, Some(handler));
        }

        if ctx.state.mode.fun_zone {
            if let Some(name) = command.strip_prefix("ascii-") {
                return CommandResult::Text(commands::fun::ascii_art(name));
            }
        }

        log::debug!("not visible: {}", command);
        CommandResult::line(format!(
            "Command not found: {}. Type 'help' for available commands.",
            line
        ))
    }

    fn run(
        &self,
        command: &str,
        args: &[&str],
        ctx: &mut ShellContext,
        handler: Option<&'static dyn Command>,
    ) -> CommandResult {
        let Some(handler) = handler else {
            return CommandResult::line(format!(
                "Command not found: {}. Type 'help' for available commands.",
                command
            ));
        };
        match handler.execute(args, ctx) {
            Ok(CommandResult::Text(lines)) if lines.is_empty() => CommandResult::line(format!(
                "Command \"{}\" executed but returned no output.",
                command
            )),
            Ok(result) => result,
            Err(e) => {
                log::debug!("{} failed: {:?}", command, e);
                CommandResult::line(e.to_string())
            }
        }
    }

    /// First visible command name starting with `prefix`
    pub fn suggest(&self, prefix: &str, state: &SessionState) -> Option<&'static str> {
        let prefix = prefix.to_lowercase();
        self.commands
            .visible(&state.mode)
            .names()
            .find(|name| name.starts_with(prefix.as_str()))
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
