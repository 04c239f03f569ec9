//! Game Commands
//!
//! `game-<name>` launchers and the plain `games` listing of the games menu.

use crate::session::GameId;
use crate::shell::{Command, CommandRegistry, CommandResult, ShellContext, ShellError};

/// Starts one mini-game
pub struct GameCommand {
    game: GameId,
    description: &'static str,
}

impl GameCommand {
    pub fn game(&self) -> GameId {
        self.game
    }
}

impl Command for GameCommand {
    fn name(&self) -> &'static str {
        self.game.command_name()
    }
    fn description(&self) -> &'static str {
        self.description
    }

    fn execute(&self, _args: &[&str], ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        ctx.state.mode.active_game = Some(self.game);
        log::info!("starting game {}", self.game.name());
        Ok(CommandResult::EnterGame(self.game))
    }
}

/// Static instances, in menu order
pub static GAME_CMDS: [GameCommand; 9] = [
    GameCommand {
        game: GameId::Snake,
        description: "Play Snake game",
    },
    GameCommand {
        game: GameId::Twenty48,
        description: "Play 2048 game",
    },
    GameCommand {
        game: GameId::Guess,
        description: "Play Guess game",
    },
    GameCommand {
        game: GameId::TicTacToe,
        description: "Play Tic Tac Toe game",
    },
    GameCommand {
        game: GameId::Memory,
        description: "Play Memory game",
    },
    GameCommand {
        game: GameId::Hangman,
        description: "Play Hangman game",
    },
    GameCommand {
        game: GameId::Trivia,
        description: "Play Trivia game",
    },
    GameCommand {
        game: GameId::Minesweeper,
        description: "Play Minesweeper game",
    },
    GameCommand {
        game: GameId::MemoryMatch,
        description: "Play Memory Match game",
    },
];

// ============================================================================
// Games Listing
// ============================================================================

/// Plain listing of the games
///
/// Shadowed in the full registry by the `games` menu command.
pub struct GamesListCommand;

impl Command for GamesListCommand {
    fn name(&self) -> &'static str {
        "games"
    }
    fn description(&self) -> &'static str {
        "List available games"
    }

    fn execute(&self, _args: &[&str], _ctx: &mut ShellContext) -> Result<CommandResult, ShellError> {
        Ok(CommandResult::lines(&[
            "🎮 AVAILABLE GAMES",
            "=================",
            "game-snake     - Classic snake game",
            "game-2048      - Terminal version of 2048",
            "game-minesweeper - Minesweeper game",
            "game-guess     - Number guessing game",
            "game-tictactoe - Tic Tac Toe",
            "game-memory    - Memory card game",
            "game-hangman   - Hangman game",
            "game-trivia    - Trivia quiz game",
            "game-memorymatch - Memory match game",
            "Type any game command to start playing!",
        ]))
    }
}

/// Static instance
pub static GAMES_LIST_CMD: GamesListCommand = GamesListCommand;

pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(&GAMES_LIST_CMD);
    for cmd in GAME_CMDS.iter() {
        registry.register(cmd);
    }
    registry
}
