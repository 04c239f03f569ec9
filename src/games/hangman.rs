//! Hangman with programming words
//!
//! `q` quits; none of the words contain a Q.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::rng::choose;
use crate::session::GameId;
use crate::terminal::Key;

const WORDS: &[&str] = &[
    "JAVASCRIPT",
    "REACT",
    "TYPESCRIPT",
    "NODEJS",
    "PYTHON",
    "CODING",
    "DEVELOPER",
    "PROGRAMMING",
];

const MAX_WRONG: u32 = 6;

/// Gallows for a given number of wrong guesses
fn gallows(wrong: u32) -> [&'static str; 7] {
    [
        "  +---+",
        "  |   |",
        if wrong >= 1 { "  |   O" } else { "  |" },
        match wrong {
            0 | 1 => "  |",
            2 => "  |   |",
            _ => "  |  /|\\",
        },
        if wrong >= 4 { "  |  / \\" } else { "  |" },
        "  |",
        "=========",
    ]
}

pub struct HangmanGame {
    word: &'static str,
    guessed: Vec<char>,
    wrong: u32,
    quit: bool,
}

impl HangmanGame {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self::with_word(choose(rng, WORDS).copied().unwrap_or(WORDS[0]))
    }

    fn with_word(word: &'static str) -> Self {
        Self {
            word,
            guessed: Vec::new(),
            wrong: 0,
            quit: false,
        }
    }

    fn won(&self) -> bool {
        self.word.chars().all(|c| self.guessed.contains(&c))
    }

    fn lost(&self) -> bool {
        self.wrong >= MAX_WRONG
    }

    fn guess(&mut self, letter: char) {
        if self.guessed.contains(&letter) {
            return;
        }
        self.guessed.push(letter);
        if !self.word.contains(letter) {
            self.wrong += 1;
        }
    }

    fn masked_word(&self) -> String {
        let letters: Vec<String> = self
            .word
            .chars()
            .map(|c| {
                if self.guessed.contains(&c) {
                    String::from(c)
                } else {
                    String::from("_")
                }
            })
            .collect();
        letters.join(" ")
    }
}

impl Game for HangmanGame {
    fn id(&self) -> GameId {
        GameId::Hangman
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🎯 HANGMAN").into();
        lines.extend(owned(&[
            "",
            "Guess the programming word!",
            "",
            "Controls:",
            "• Type letters to guess",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, _rng: &mut dyn RngCore) {
        if self.won() || self.lost() {
            return;
        }
        match key {
            Key::Char('q') => self.quit = true,
            Key::Char(c) if c.is_ascii_alphabetic() => self.guess(c.to_ascii_uppercase()),
            _ => {}
        }
    }

    fn render(&self) -> Vec<String> {
        let status = if self.won() {
            "YOU WIN!"
        } else if self.lost() {
            "GAME OVER!"
        } else {
            "Playing"
        };
        let mut lines: Vec<String> = heading(&format!(
            "🎯 HANGMAN | Wrong: {}/{} | {}",
            self.wrong, MAX_WRONG, status
        ))
        .into();
        lines.extend(gallows(self.wrong).iter().map(|l| String::from(*l)));
        lines.push(String::new());
        lines.push(format!("Word: {}", self.masked_word()));
        lines.push(String::new());
        let guessed: Vec<String> = self.guessed.iter().map(|c| String::from(*c)).collect();
        lines.push(format!("Guessed: {}", guessed.join(", ")));
        if self.won() {
            lines.push(String::from("Congratulations! You guessed the word!"));
        } else if self.lost() {
            lines.push(format!("Game Over! The word was: {}", self.word));
        }
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        if self.quit || self.lost() {
            Some(Finished::scored(0))
        } else if self.won() {
            Some(Finished::scored(100u32.saturating_sub(self.wrong * 10)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    fn press(game: &mut HangmanGame, keys: &str) {
        let mut rng = SessionRng::new(1);
        for c in keys.chars() {
            game.handle_input(Key::Char(c), 0, &mut rng);
        }
    }

    #[test]
    fn test_no_word_contains_quit_key() {
        assert!(WORDS.iter().all(|w| !w.contains('Q')));
    }

    #[test]
    fn test_win_scores_by_wrong_guesses() {
        let mut game = HangmanGame::with_word("REACT");
        press(&mut game, "rezact");
        assert_eq!(game.wrong, 1);
        assert_eq!(game.is_over(), Some(Finished::scored(90)));
        assert_eq!(game.masked_word(), "R E A C T");
    }

    #[test]
    fn test_repeat_guess_not_counted() {
        let mut game = HangmanGame::with_word("PYTHON");
        press(&mut game, "zzzZ");
        assert_eq!(game.wrong, 1);
        assert_eq!(game.guessed, ['Z']);
    }

    #[test]
    fn test_six_misses_lose() {
        let mut game = HangmanGame::with_word("REACT");
        press(&mut game, "bdfghi");
        assert!(game.lost());
        assert_eq!(game.is_over(), Some(Finished::scored(0)));
        assert!(game.render().contains(&String::from("Game Over! The word was: REACT")));
    }

    #[test]
    fn test_gallows_grows() {
        assert_eq!(gallows(0)[2], "  |");
        assert_eq!(gallows(2)[3], "  |   |");
        assert_eq!(gallows(4)[4], "  |  / \\");
    }
}
