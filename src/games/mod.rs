//! Mini-games
//!
//! Each game is a self-contained state machine behind the [`Game`] trait.
//! While one runs, [`GameHost`] owns all keyboard input and the rendered
//! frame; the session only forwards keys and clock ticks and waits for
//! [`Finished`].

mod guess;
mod hangman;
mod memory;
mod memorymatch;
mod minesweeper;
mod snake;
mod tictactoe;
mod trivia;
mod twenty48;

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use crate::session::GameId;
use crate::terminal::Key;

pub use guess::GuessGame;
pub use hangman::HangmanGame;
pub use memory::MemoryGame;
pub use memorymatch::MemoryMatchGame;
pub use minesweeper::MinesweeperGame;
pub use snake::SnakeGame;
pub use tictactoe::TicTacToeGame;
pub use trivia::TriviaGame;
pub use twenty48::Twenty48Game;

/// Outcome reported when a game ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finished {
    /// `None` for games that keep no score
    pub score: Option<u32>,
}

impl Finished {
    pub const fn scored(score: u32) -> Self {
        Self { score: Some(score) }
    }

    pub const fn unscored() -> Self {
        Self { score: None }
    }
}

/// A mini-game
pub trait Game {
    fn id(&self) -> GameId;

    /// Title screen, shown until the player presses Space
    fn title(&self) -> Vec<String>;

    /// Called once when the title screen is dismissed
    fn start(&mut self, _now_ms: u64, _rng: &mut dyn RngCore) {}

    fn handle_input(&mut self, key: Key, now_ms: u64, rng: &mut dyn RngCore);

    /// Clock tick; only games with timed behavior override this
    fn tick(&mut self, _now_ms: u64, _rng: &mut dyn RngCore) {}

    fn render(&self) -> Vec<String>;

    fn is_over(&self) -> Option<Finished>;
}

/// Build a fresh game
pub fn create_game(id: GameId, rng: &mut dyn RngCore) -> Box<dyn Game> {
    match id {
        GameId::Snake => Box::new(SnakeGame::new()),
        GameId::Twenty48 => Box::new(Twenty48Game::new()),
        GameId::Guess => Box::new(GuessGame::new(rng)),
        GameId::TicTacToe => Box::new(TicTacToeGame::new()),
        GameId::Memory => Box::new(MemoryGame::new(rng)),
        GameId::Hangman => Box::new(HangmanGame::new(rng)),
        GameId::Trivia => Box::new(TriviaGame::new()),
        GameId::Minesweeper => Box::new(MinesweeperGame::new()),
        GameId::MemoryMatch => Box::new(MemoryMatchGame::new(rng)),
    }
}

/// Title line followed by a rule of the same display width
pub(crate) fn heading(title: &str) -> [String; 2] {
    let width = title.chars().count();
    [String::from(title), "━".repeat(width)]
}

pub(crate) fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|l| String::from(*l)).collect()
}

// ============================================================================
// Game Host
// ============================================================================

/// Runs one game from title screen to completion
pub struct GameHost {
    game: Box<dyn Game>,
    started: bool,
    quit_on_title: bool,
    reported: bool,
}

impl GameHost {
    pub fn new(id: GameId, rng: &mut dyn RngCore) -> Self {
        Self::with_game(create_game(id, rng))
    }

    pub fn with_game(game: Box<dyn Game>) -> Self {
        Self {
            game,
            started: false,
            quit_on_title: false,
            reported: false,
        }
    }

    pub fn id(&self) -> GameId {
        self.game.id()
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn handle_key(&mut self, key: Key, now_ms: u64, rng: &mut dyn RngCore) {
        if self.reported {
            return;
        }
        if !self.started {
            match key {
                Key::Char(' ') => {
                    self.started = true;
                    log::debug!("{} started", self.game.id().name());
                    self.game.start(now_ms, rng);
                }
                Key::Char('q') | Key::Char('Q') => self.quit_on_title = true,
                _ => {}
            }
            return;
        }
        self.game.handle_input(key, now_ms, rng);
    }

    pub fn tick(&mut self, now_ms: u64, rng: &mut dyn RngCore) {
        if self.started && !self.reported {
            self.game.tick(now_ms, rng);
        }
    }

    /// Current frame: the title screen before start, the game after
    pub fn render(&self) -> Vec<String> {
        if self.started {
            return self.game.render();
        }
        let mut lines = self.game.title();
        lines.push(String::new());
        lines.push(String::from("Press SPACE to start!"));
        lines
    }

    /// Returns the outcome once; later calls yield `None`
    pub fn poll_finished(&mut self) -> Option<Finished> {
        if self.reported {
            return None;
        }
        let outcome = if self.quit_on_title {
            Some(Finished::unscored())
        } else if self.started {
            self.game.is_over()
        } else {
            None
        };
        if outcome.is_some() {
            self.reported = true;
        }
        outcome
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
