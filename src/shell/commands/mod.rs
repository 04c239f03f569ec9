//! Shell Commands Module
//!
//! Contains all command implementations organized by topic. Each topic
//! builds its own sub-registry; the full registry is their ordered merge.

pub mod fun;
pub mod games;
pub mod meta;
pub mod portfolio;
pub mod system;
pub mod theme;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::hash::{BuildHasherDefault, Hasher};
use hashbrown::HashMap;
use once_cell::race::OnceBox;

use super::Command;
use crate::session::{HelpContext, ModeState};

// Re-export static command instances
pub use fun::{
    ASCII_CMD, DEBUGGING_SIMULATOR_CMD, DEPLOY_WAR_CMD, DICE_CMD, EXIT_FUN_CMD, FORTUNE_CMD,
    FUN_ZONE_CMD, HACK_CMD, QUOTE_CMD, RAIN_CMD, SUDO_BOOT_CMD, SUDO_RANDOM_CMD,
};
pub use games::{GAME_CMDS, GAMES_LIST_CMD};
pub use meta::{GAMES_MENU_CMD, HELP_CMD, PORTFOLIO_MENU_CMD, THEME_MENU_CMD, WEATHER_CMD};
pub use portfolio::{ABOUT_CMD, CONTACT_CMD, EXPERIENCE_CMD, PROJECTS_CMD, WORK_CMD};
pub use system::{
    CAT_CMD, CD_CMD, CLEAR_CMD, DATE_CMD, EXIT_CMD, HISTORY_CMD, LS_CMD, PWD_CMD, TREE_CMD,
    UPTIME_CMD, WHOAMI_CMD,
};
pub use theme::THEME_CMDS;

// ============================================================================
// Command Registry
// ============================================================================

/// FNV-1a hasher for the name index
#[derive(Default)]
pub struct FnvHasher(u64);

impl Hasher for FnvHasher {
    fn write(&mut self, bytes: &[u8]) {
        const FNV_PRIME: u64 = 0x100000001b3;
        const FNV_OFFSET: u64 = 0xcbf29ce484222325;

        if self.0 == 0 {
            self.0 = FNV_OFFSET;
        }
        for byte in bytes {
            self.0 ^= *byte as u64;
            self.0 = self.0.wrapping_mul(FNV_PRIME);
        }
    }

    fn finish(&self) -> u64 {
        self.0
    }
}

type NameIndex = HashMap<&'static str, usize, BuildHasherDefault<FnvHasher>>;

/// Ordered registry of commands with a name index
pub struct CommandRegistry {
    commands: Vec<&'static dyn Command>,
    index: NameIndex,
}

impl CommandRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            index: NameIndex::default(),
        }
    }

    /// Register a command
    ///
    /// A command whose name is already registered replaces the earlier
    /// handler and keeps its position.
    pub fn register(&mut self, command: &'static dyn Command) {
        match self.index.get(command.name()) {
            Some(&slot) => {
                log::trace!("command {} replaced", command.name());
                self.commands[slot] = command;
            }
            None => {
                self.index.insert(command.name(), self.commands.len());
                self.commands.push(command);
            }
        }
    }

    /// Register every command of another registry, in its order
    pub fn merge(&mut self, other: &CommandRegistry) {
        for command in &other.commands {
            self.register(*command);
        }
    }

    /// Find a command by name
    pub fn find(&self, name: &str) -> Option<&'static dyn Command> {
        self.index.get(name).map(|&slot| self.commands[slot])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get all registered commands, in registration order
    pub fn commands(&self) -> &[&'static dyn Command] {
        &self.commands
    }

    /// Command names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name())
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Command Set (sub-registries plus their merge)
// ============================================================================

/// The topic sub-registries and the full merged registry
pub struct CommandSet {
    pub portfolio: CommandRegistry,
    pub system: CommandRegistry,
    pub games: CommandRegistry,
    pub fun: CommandRegistry,
    pub theme: CommandRegistry,
    pub meta: CommandRegistry,
    /// Merge of all of the above, in that order
    pub full: CommandRegistry,
}

impl CommandSet {
    /// Commands dispatchable in the given mode
    ///
    /// A help context restricts to that menu's sub-registry; otherwise the
    /// fun zone restricts to the fun commands; otherwise everything.
    pub fn visible(&self, mode: &ModeState) -> VisibleSet<'_> {
        match (mode.help_context, mode.fun_zone) {
            (Some(HelpContext::Portfolio), _) => VisibleSet::all_of(&self.portfolio),
            (Some(HelpContext::Games), _) => VisibleSet::all_of(&self.games),
            (Some(HelpContext::Theme), _) => VisibleSet {
                registry: &self.theme,
                prefix: Some("theme-"),
            },
            (None, true) => VisibleSet::all_of(&self.fun),
            (None, false) => VisibleSet::all_of(&self.full),
        }
    }
}

/// A registry view filtered to the names valid in the current mode
#[derive(Clone, Copy)]
pub struct VisibleSet<'a> {
    registry: &'a CommandRegistry,
    prefix: Option<&'static str>,
}

impl<'a> VisibleSet<'a> {
    fn all_of(registry: &'a CommandRegistry) -> Self {
        Self {
            registry,
            prefix: None,
        }
    }

    fn admits(&self, name: &str) -> bool {
        self.prefix.is_none_or(|p| name.starts_with(p))
    }

    pub fn find(&self, name: &str) -> Option<&'static dyn Command> {
        if self.admits(name) {
            self.registry.find(name)
        } else {
            None
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    /// Visible names, in registry order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + 'a {
        let prefix = self.prefix;
        self.registry
            .names()
            .filter(move |name| prefix.is_none_or(|p| name.starts_with(p)))
    }
}

/// Create and populate the default command set
pub fn create_default_commands() -> CommandSet {
    let portfolio = portfolio::registry();
    let system = system::registry();
    let games = games::registry();
    let fun = fun::registry();
    let theme = theme::registry();
    let meta = meta::registry();

    let mut full = CommandRegistry::new();
    for sub in [&portfolio, &system, &games, &fun, &theme, &meta] {
        full.merge(sub);
    }
    log::debug!("command registry built with {} commands", full.len());

    CommandSet {
        portfolio,
        system,
        games,
        fun,
        theme,
        meta,
        full,
    }
}

/// The shared default command set, built on first use
pub fn default_commands() -> &'static CommandSet {
    static COMMANDS: OnceBox<CommandSet> = OnceBox::new();
    COMMANDS.get_or_init(|| Box::new(create_default_commands()))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_overrides_keep_position() {
        let set = default_commands();
        let names: Vec<&str> = set.full.names().collect();
        let games_pos = names.iter().position(|n| *n == "games");
        let snake_pos = names.iter().position(|n| *n == "game-snake");
        assert!(games_pos < snake_pos);
        assert_eq!(names.iter().filter(|n| **n == "games").count(), 1);
        let games = set.full.find("games").map(|c| c.description());
        assert_eq!(games, Some(GAMES_MENU_CMD.description()));
    }

    #[test]
    fn test_full_registry_starts_with_portfolio() {
        let set = default_commands();
        let names: Vec<&str> = set.full.names().take(5).collect();
        assert_eq!(names, ["about", "work", "projects", "experience", "contact"]);
    }

    #[test]
    fn test_every_sub_registry_name_is_in_full() {
        let set = default_commands();
        for sub in [&set.portfolio, &set.system, &set.games, &set.fun, &set.theme, &set.meta] {
            for name in sub.names() {
                assert!(set.full.contains(name), "{}", name);
            }
        }
    }

    #[test]
    fn test_visible_sets() {
        let set = default_commands();
        let mut mode = ModeState::new(0);
        assert!(set.visible(&mode).contains("about"));
        assert!(set.visible(&mode).contains("theme-nord"));

        mode.fun_zone = true;
        assert!(set.visible(&mode).contains("dice"));
        assert!(!set.visible(&mode).contains("about"));

        mode.help_context = Some(HelpContext::Theme);
        assert!(set.visible(&mode).contains("theme-nord"));
        assert!(!set.visible(&mode).contains("dice"));
        assert!(set.visible(&mode).names().all(|n| n.starts_with("theme-")));
    }

    #[test]
    fn test_register_replaces_in_place() {
        let mut registry = CommandRegistry::new();
        registry.register(&games::GAMES_LIST_CMD);
        registry.register(&ABOUT_CMD);
        registry.register(&GAMES_MENU_CMD);
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.names().collect::<Vec<_>>(), ["games", "about"]);
    }
}
