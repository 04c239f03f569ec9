//! Memory: flip cards with a cursor and find the eight pairs

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::config::CARD_FLIP_BACK_MS;
use crate::rng::shuffle;
use crate::session::GameId;
use crate::terminal::Key;

const SYMBOLS: [char; 8] = ['♠', '♣', '♥', '♦', '★', '♪', '☀', '☽'];
const CARDS: usize = 16;
const COLUMNS: usize = 4;

/// Deck of shuffled pairs
pub(crate) fn deal<const N: usize>(symbols: [char; N], rng: &mut dyn RngCore) -> Vec<char> {
    let mut cards: Vec<char> = symbols.iter().chain(symbols.iter()).copied().collect();
    shuffle(rng, &mut cards);
    cards
}

/// Score for a cleared board
pub(crate) fn pairs_score(moves: u32) -> u32 {
    100u32.saturating_sub(moves)
}

pub struct MemoryGame {
    cards: Vec<char>,
    matched: [bool; CARDS],
    flipped: Vec<usize>,
    /// When a mismatched pair turns face down again
    flip_back_at: Option<u64>,
    cursor: usize,
    moves: u32,
    quit: bool,
}

impl MemoryGame {
    pub fn new(rng: &mut dyn RngCore) -> Self {
        Self::with_cards(deal(SYMBOLS, rng))
    }

    fn with_cards(cards: Vec<char>) -> Self {
        Self {
            cards,
            matched: [false; CARDS],
            flipped: Vec::new(),
            flip_back_at: None,
            cursor: 0,
            moves: 0,
            quit: false,
        }
    }

    fn won(&self) -> bool {
        self.matched.iter().all(|&m| m)
    }

    fn flip(&mut self, now_ms: u64) {
        let index = self.cursor;
        if self.flipped.len() >= 2 || self.flipped.contains(&index) || self.matched[index] {
            return;
        }
        self.flipped.push(index);

        if let [first, second] = self.flipped[..] {
            self.moves += 1;
            if self.cards[first] == self.cards[second] {
                self.matched[first] = true;
                self.matched[second] = true;
                self.flipped.clear();
            } else {
                self.flip_back_at = Some(now_ms + CARD_FLIP_BACK_MS);
            }
        }
    }
}

impl Game for MemoryGame {
    fn id(&self) -> GameId {
        GameId::Memory
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🧠 MEMORY GAME").into();
        lines.extend(owned(&[
            "",
            "Match all pairs of symbols!",
            "",
            "Controls:",
            "• Arrow keys to move cursor",
            "• Enter to flip card",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, now_ms: u64, _rng: &mut dyn RngCore) {
        if self.won() {
            return;
        }
        match key {
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(CARDS - 1),
            Key::Up => self.cursor = self.cursor.saturating_sub(COLUMNS),
            Key::Down => self.cursor = (self.cursor + COLUMNS).min(CARDS - 1),
            Key::Enter => self.flip(now_ms),
            Key::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64, _rng: &mut dyn RngCore) {
        if self.flip_back_at.is_some_and(|due| now_ms >= due) {
            self.flip_back_at = None;
            self.flipped.clear();
        }
    }

    fn render(&self) -> Vec<String> {
        let matched = self.matched.iter().filter(|&&m| m).count();
        let status = if self.won() { "YOU WIN!" } else { "Playing" };
        let mut lines: Vec<String> = heading(&format!(
            "🧠 MEMORY GAME | Moves: {} | Matched: {}/{} | {}",
            self.moves, matched, CARDS, status
        ))
        .into();

        lines.extend(self.cards.chunks(COLUMNS).enumerate().map(|(r, chunk)| {
            chunk
                .iter()
                .enumerate()
                .map(|(c, &symbol)| {
                    let index = r * COLUMNS + c;
                    let face = if self.matched[index] || self.flipped.contains(&index) {
                        symbol
                    } else {
                        '?'
                    };
                    if index == self.cursor {
                        format!("[{}]", face)
                    } else {
                        format!(" {} ", face)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        }));

        lines.push(String::new());
        if self.won() {
            lines.push(format!("Congratulations! Final score: {}", pairs_score(self.moves)));
        } else {
            lines.push(String::from("Arrow keys to move | Enter to flip | Q to quit"));
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
