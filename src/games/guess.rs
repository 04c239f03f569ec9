//! Number guessing game
//!
//! Keeps no score. After a correct guess the next key returns to the shell.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::rng::range_inclusive;
use crate::session::GameId;
use crate::terminal::Key;

const LOW: u32 = 1;
const HIGH: u32 = 100;
const MAX_DIGITS: usize = 3;

pub struct GuessGame {
    target: u32,
    input: String,
    attempts: u32,
    feedback: Option<String>,
    won: bool,
    over: bool,
}

impl GuessGame {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self::with_target(range_inclusive(rng, LOW, HIGH))
    }

    pub fn with_target(target: u32) -> Self {
        Self {
            target,
            input: String::new(),
            attempts: 0,
            feedback: None,
            won: false,
            over: false,
        }
    }

    fn submit(&mut self) {
        let Ok(guess) = self.input.parse::<u32>() else {
            return;
        };
        self.input.clear();
        self.attempts += 1;

        let feedback = if guess == self.target {
            self.won = true;
            format!("🎉 Correct! You guessed it in {} attempts!", self.attempts)
        } else if guess < self.target {
            String::from("📈 Too low! Try a higher number.")
        } else {
            String::from("📉 Too high! Try a lower number.")
        };
        self.feedback = Some(feedback);
    }
}

impl Game for GuessGame {
    fn id(&self) -> GameId {
        GameId::Guess
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🎯 NUMBER GUESSING GAME").into();
        lines.extend(owned(&[
            "",
            "I'm thinking of a number between 1 and 100!",
            "",
            "Controls:",
            "• Type numbers and press Enter to guess",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, _rng: &mut dyn RngCore) {
        if self.won {
            self.over = true;
            return;
        }
        match key {
            Key::Enter => self.submit(),
            Key::Char('q') => self.over = true,
            Key::Char(c) if c.is_ascii_digit() && self.input.len() < MAX_DIGITS => {
                self.input.push(c)
            }
            Key::Backspace => {
                self.input.pop();
            }
            _ => {}
        }
    }

    fn render(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🎯 GUESS THE NUMBER (1-100)").into();
        lines.push(format!("Attempts: {}", self.attempts));
        lines.push(String::new());
        if let Some(feedback) = &self.feedback {
            lines.push(feedback.clone());
        }
        lines.push(String::new());
        if self.won {
            lines.push(String::from("Press any key to return to terminal..."));
        } else {
            lines.push(format!("Your guess: {}_", self.input));
            lines.push(String::new());
            lines.push(String::from("Type a number and press Enter!"));
        }
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        self.over.then(Finished::unscored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    fn guess(game: &mut GuessGame, rng: &mut SessionRng, digits: &str) {
        for c in digits.chars() {
            game.handle_input(Key::Char(c), 0, rng);
        }
        game.handle_input(Key::Enter, 0, rng);
    }

    #[test]
    fn test_target_in_range() {
        let mut rng = SessionRng::new(21);
        for _ in 0..50 {
            let game = GuessGame::new(&mut rng);
            assert!((LOW..=HIGH).contains(&game.target));
        }
    }

    #[test]
    fn test_feedback_then_any_key_ends() {
        let mut rng = SessionRng::new(1);
        let mut game = GuessGame::with_target(42);

        guess(&mut game, &mut rng, "10");
        assert_eq!(game.feedback.as_deref(), Some("📈 Too low! Try a higher number."));
        guess(&mut game, &mut rng, "90");
        assert_eq!(game.feedback.as_deref(), Some("📉 Too high! Try a lower number."));
        guess(&mut game, &mut rng, "42");
        assert_eq!(
            game.feedback.as_deref(),
            Some("🎉 Correct! You guessed it in 3 attempts!")
        );
        assert_eq!(game.is_over(), None);

        game.handle_input(Key::Char('x'), 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::unscored()));
    }

    #[test]
    fn test_backspace_and_empty_enter() {
        let mut rng = SessionRng::new(1);
        let mut game = GuessGame::with_target(5);
        game.handle_input(Key::Enter, 0, &mut rng);
        assert_eq!(game.attempts, 0);

        game.handle_input(Key::Char('7'), 0, &mut rng);
        game.handle_input(Key::Backspace, 0, &mut rng);
        game.handle_input(Key::Char('5'), 0, &mut rng);
        game.handle_input(Key::Enter, 0, &mut rng);
        assert!(game.won);
    }

    #[test]
    fn test_quit_unscored() {
        let mut rng = SessionRng::new(1);
        let mut game = GuessGame::with_target(5);
        game.handle_input(Key::Char('q'), 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::unscored()));
    }
}
