//! Memory Match: pick cards directly with `1`-`9` and `a`-`g`
//!
//! Every card turned counts as a move.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::memory::{deal, pairs_score};
use super::{Finished, Game, heading, owned};
use crate::config::CARD_FLIP_BACK_MS;
use crate::session::GameId;
use crate::terminal::Key;

const SYMBOLS: [char; 8] = ['★', '●', '■', '▲', '▼', '◆', '♥', '♠'];
const CARDS: usize = 16;
const LABELS: [char; CARDS] = [
    '1', '2', '3', '4', '5', '6', '7', '8', '9', 'a', 'b', 'c', 'd', 'e', 'f', 'g',
];

fn card_for(key: char) -> Option<usize> {
    LABELS.iter().position(|&l| l == key.to_ascii_lowercase())
}

pub struct MemoryMatchGame {
    cards: Vec<char>,
    matched: [bool; CARDS],
    face_up: Vec<usize>,
    hide_at: Option<u64>,
    moves: u32,
    quit: bool,
}

impl MemoryMatchGame {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self::with_cards(deal(SYMBOLS, rng))
    }

    fn with_cards(cards: Vec<char>) -> Self {
        Self {
            cards,
            matched: [false; CARDS],
            face_up: Vec::new(),
            hide_at: None,
            moves: 0,
            quit: false,
        }
    }

    fn won(&self) -> bool {
        self.matched.iter().all(|&m| m)
    }

    fn select(&mut self, index: usize, now_ms: u64) {
        if self.face_up.len() >= 2 || self.face_up.contains(&index) || self.matched[index] {
            return;
        }
        self.face_up.push(index);
        self.moves += 1;

        if let [first, second] = self.face_up[..] {
            if self.cards[first] == self.cards[second] {
                self.matched[first] = true;
                self.matched[second] = true;
                self.face_up.clear();
            } else {
                self.hide_at = Some(now_ms + CARD_FLIP_BACK_MS);
            }
        }
    }
}

impl Game for MemoryMatchGame {
    fn id(&self) -> GameId {
        GameId::MemoryMatch
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🧠 MEMORY MATCH").into();
        lines.extend(owned(&[
            "",
            "Match all pairs!",
            "",
            "Controls:",
            "• Keys 1-9, A-G to select cards",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, now_ms: u64, _rng: &mut dyn RngCore) {
        if self.won() {
            return;
        }
        match key {
            Key::Char('q') => self.quit = true,
            Key::Char(c) => {
                if let Some(index) = card_for(c) {
                    self.select(index, now_ms);
                }
            }
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64, _rng: &mut dyn RngCore) {
        if self.hide_at.is_some_and(|due| now_ms >= due) {
            self.hide_at = None;
            self.face_up.clear();
        }
    }

    fn render(&self) -> Vec<String> {
        let status = if self.won() { "YOU WIN!" } else { "Playing" };
        let mut lines: Vec<String> =
            heading(&format!("🧠 MEMORY MATCH | Moves: {} | {}", self.moves, status)).into();

        for row in 0..4 {
            let cells: Vec<String> = (row * 4..row * 4 + 4)
                .map(|i| {
                    let face = if self.matched[i] || self.face_up.contains(&i) {
                        self.cards[i]
                    } else {
                        '■'
                    };
                    format!("{}:{}", LABELS[i].to_ascii_uppercase(), face)
                })
                .collect();
            lines.push(cells.join("  "));
        }

        lines.push(String::new());
        if self.won() {
            lines.push(format!("Congratulations! Final score: {}", pairs_score(self.moves)));
        } else {
            lines.push(String::from("Press 1-9, A-G to flip a card"));
        }
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        if self.quit {
            Some(Finished::scored(0))
        } else if self.won() {
            Some(Finished::scored(pairs_score(self.moves)))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    fn ordered() -> MemoryMatchGame {
        MemoryMatchGame::with_cards(SYMBOLS.iter().flat_map(|&s| [s, s]).collect())
    }

    fn press(game: &mut MemoryMatchGame, keys: &str, now_ms: u64) {
        let mut rng = SessionRng::new(1);
        for c in keys.chars() {
            game.handle_input(Key::Char(c), now_ms, &mut rng);
        }
    }

    #[test]
    fn test_key_mapping() {
        assert_eq!(card_for('1'), Some(0));
        assert_eq!(card_for('9'), Some(8));
        assert_eq!(card_for('a'), Some(9));
        assert_eq!(card_for('G'), Some(15));
        assert_eq!(card_for('h'), None);
        assert_eq!(card_for('0'), None);
    }

    #[test]
    fn test_match_and_mismatch() {
        let mut rng = SessionRng::new(1);
        let mut game = ordered();
        press(&mut game, "12", 0);
        assert!(game.matched[0] && game.matched[1]);

        press(&mut game, "35", 500);
        assert_eq!(game.face_up, [2, 4]);
        game.tick(1_499, &mut rng);
        assert_eq!(game.face_up.len(), 2);
        game.tick(1_500, &mut rng);
        assert!(game.face_up.is_empty());
        assert_eq!(game.moves, 4);
    }

    #[test]
    fn test_win_scores_each_flip() {
        let mut game = ordered();
        press(&mut game, "123456789abcdefg", 0);
        assert_eq!(game.moves, 16);
        assert_eq!(game.is_over(), Some(Finished::scored(84)));
    }

    #[test]
    fn test_quit() {
        let mut game = ordered();
        press(&mut game, "1q", 0);
        assert_eq!(game.is_over(), Some(Finished::scored(0)));
    }
}
