//! System Commands
//!
//! Basic shell commands over the simulated file system and session:
//! whoami, pwd, ls, cd, cat, tree, clear, exit, uptime, history, date

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use crate::config::{HOME_DIR, USER_NAME};
use crate::shell::{Command, CommandRegistry, CommandResult, ShellContext, ShellError};
use crate::vfs::{FsError, FsNode};

// ============================================================================
// Whoami Command
// ============================================================================

/// Whoami command - prints the user name
pub struct WhoamiCommand;

impl Command for WhoamiCommand {
    fn name(&self) -> &'static str {
        "whoami"
    }
    fn description(&self) -> &'static str {
        "Display current user information"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::line(USER_NAME))
    }
}

/// Static instance
pub static WHOAMI_CMD: WhoamiCommand = WhoamiCommand;

// ============================================================================
// Pwd Command
// ============================================================================

/// Pwd command - print working directory
pub struct PwdCommand;

impl Command for PwdCommand {
    fn name(&self) -> &'static str {
        "pwd"
    }
    fn description(&self) -> &'static str {
        "Print working directory"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::line(ctx.cwd()))
    }
}

/// Static instance
pub static PWD_CMD: PwdCommand = PwdCommand;

// ============================================================================
// Ls Command
// ============================================================================

/// Ls command - list directory contents
pub struct LsCommand;

impl Command for LsCommand {
    fn name(&self) -> &'static str {
        "ls"
    }
    fn description(&self) -> &'static str {
        "List directory contents"
    }
    fn usage(&self) -> &'static str {
        "ls [path]"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let (arg, path) = match args.first() {
            Some(arg) => (*arg, ctx.resolve_path(arg)),
            None => (".", ctx.cwd().to_string()),
        };

        let dir = ctx.fs.directory(&path).map_err(|error| ShellError::Fs {
            command: "ls",
            arg: arg.to_string(),
            error,
        })?;
        let children = dir.children().unwrap_or(&[]);
        if children.is_empty() {
            return Ok(CommandResult::line("Directory is empty."));
        }

        let mut lines = Vec::with_capacity(children.len() + 2);
        lines.push(String::from("Directory listing:"));
        for child in children {
            let tag = if child.is_dir() { "[DIR]" } else { "[FILE]" };
            lines.push(format!("{} {}", tag, child.name()));
        }
        lines.push(String::new());
        Ok(CommandResult::Text(lines))
    }
}

/// Static instance
pub static LS_CMD: LsCommand = LsCommand;

// ============================================================================
// Cd Command
// ============================================================================

/// Cd command - change working directory
pub struct CdCommand;

impl Command for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn description(&self) -> &'static str {
        "Change directory"
    }
    fn usage(&self) -> &'static str {
        "cd <directory> or cd .. to go up"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let arg = args.first().copied().unwrap_or("~");

        if arg == ".." && ctx.cwd() == HOME_DIR {
            return Ok(CommandResult::line("Already in home directory"));
        }

        let target = ctx.resolve_path(arg);
        match ctx.fs.directory(&target) {
            Ok(_) => {
                ctx.set_cwd(&target);
                log::debug!("cwd -> {}", target);
                Ok(CommandResult::line(format!("Changed directory to {}", target)))
            }
            Err(FsError::NotFound) => Err(ShellError::NoSuchDirectory(arg.to_string())),
            Err(error) => Err(ShellError::Fs {
                command: "cd",
                arg: arg.to_string(),
                error,
            }),
        }
    }
}

/// Static instance
pub static CD_CMD: CdCommand = CdCommand;

// ============================================================================
// Cat Command
// ============================================================================

/// Cat command - display file contents
pub struct CatCommand;

impl Command for CatCommand {
    fn name(&self) -> &'static str {
        "cat"
    }
    fn description(&self) -> &'static str {
        "Display file contents"
    }
    fn usage(&self) -> &'static str {
        "cat <filename>"
    }

    fn execute(&self, args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let Some(arg) = args.first() else {
            return Err(ShellError::Usage(self.usage()));
        };

        let path = ctx.resolve_path(arg);
        let content = ctx.fs.read_file(&path).map_err(|error| ShellError::Fs {
            command: "cat",
            arg: arg.to_string(),
            error,
        })?;

        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Ok(CommandResult::Text(lines))
    }
}

/// Static instance
pub static CAT_CMD: CatCommand = CatCommand;

// ============================================================================
// Tree Command
// ============================================================================

/// Tree command - draw the directory tree below the working directory
pub struct TreeCommand;

impl Command for TreeCommand {
    fn name(&self) -> &'static str {
        "tree"
    }
    fn description(&self) -> &'static str {
        "Show the directory tree"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let root = ctx
            .fs
            .directory(ctx.cwd())
            .map_err(|_| ShellError::ExecutionFailed("tree: working directory is gone"))?;

        let mut lines = vec![String::from(".")];
        draw_tree(root, "", &mut lines);

        let (dirs, files) = root.count();
        lines.push(String::new());
        lines.push(format!(
            "{} {}, {} {}",
            dirs,
            if dirs == 1 { "directory" } else { "directories" },
            files,
            if files == 1 { "file" } else { "files" }
        ));
        Ok(CommandResult::Text(lines))
    }
}

fn draw_tree(node: &FsNode, prefix: &str, out: &mut Vec<String>) {
    let children = node.children().unwrap_or(&[]);
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { "└── " } else { "├── " };
        let slash = if child.is_dir() { "/" } else { "" };
        out.push(format!("{}{}{}{}", prefix, branch, child.name(), slash));
        if child.is_dir() {
            let next = format!("{}{}", prefix, if last { "    " } else { "│   " });
            draw_tree(child, &next, out);
        }
    }
}

/// Static instance
pub static TREE_CMD: TreeCommand = TreeCommand;

// ============================================================================
// Clear / Exit Commands
// ============================================================================

/// Clear command - wipe the screen
pub struct ClearCommand;

impl Command for ClearCommand {
    fn name(&self) -> &'static str {
        "clear"
    }
    fn description(&self) -> &'static str {
        "Clear the terminal screen"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::ClearScreen)
    }
}

/// Static instance
pub static CLEAR_CMD: ClearCommand = ClearCommand;

/// Exit command - end the session
pub struct ExitCommand;

impl Command for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn description(&self) -> &'static str {
        "End the session"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::Exit)
    }
}

/// Static instance
pub static EXIT_CMD: ExitCommand = ExitCommand;

// ============================================================================
// Uptime Command
// ============================================================================

/// Uptime command - time since the session started
pub struct UptimeCommand;

impl Command for UptimeCommand {
    fn name(&self) -> &'static str {
        "uptime"
    }
    fn description(&self) -> &'static str {
        "Display terminal uptime"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        let secs = ctx.now_ms.saturating_sub(ctx.state.mode.session_start_ms) / 1000;
        Ok(CommandResult::line(format!(
            "Terminal uptime: {}m {}s",
            secs / 60,
            secs % 60
        )))
    }
}

/// Static instance
pub static UPTIME_CMD: UptimeCommand = UptimeCommand;

// ============================================================================
// History Command
// ============================================================================

/// History command - list submitted commands
pub struct HistoryCommand;

impl Command for HistoryCommand {
    fn name(&self) -> &'static str {
        "history"
    }
    fn description(&self) -> &'static str {
        "Show command history"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        if ctx.history.is_empty() {
            return Ok(CommandResult::line("No command history available"));
        }
        Ok(CommandResult::Text(ctx.history.entries().to_vec()))
    }
}

/// Static instance
pub static HISTORY_CMD: HistoryCommand = HistoryCommand;

// ============================================================================
// Date Command
// ============================================================================

/// Date command - current local date and time
pub struct DateCommand;

impl Command for DateCommand {
    fn name(&self) -> &'static str {
        "date"
    }
    fn description(&self) -> &'static str {
        "Show the current date and time"
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        match ctx.host.local_time() {
            Some(now) => Ok(CommandResult::line(now)),
            None => {
                log::warn!("host has no wall clock");
                Err(ShellError::ExecutionFailed("date: clock unavailable"))
            }
        }
    }
}

/// Static instance
pub static DATE_CMD: DateCommand = DateCommand;

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(&WHOAMI_CMD);
    registry.register(&PWD_CMD);
    registry.register(&LS_CMD);
    registry.register(&CD_CMD);
    registry.register(&CAT_CMD);
    registry.register(&TREE_CMD);
    registry.register(&CLEAR_CMD);
    registry.register(&EXIT_CMD);
    registry.register(&UPTIME_CMD);
    registry.register(&HISTORY_CMD);
    registry.register(&DATE_CMD);
    registry
}

// ============================================================================
// Unit Tests
// ============================================================================
