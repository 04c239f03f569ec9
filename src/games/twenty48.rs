//! 2048
//!
//! Score is the sum of every merged tile. Reaching a 2048 tile ends the game,
//! as does a full board with no merge left.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::rng::pick_index;
use crate::session::GameId;
use crate::terminal::Key;

const SIZE: usize = 4;
const WINNING_TILE: u32 = 2048;

type Board = [[u32; SIZE]; SIZE];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slide {
    Left,
    Right,
    Up,
    Down,
}

/// Compact one line toward index 0, merging equal neighbours once
///
/// Returns the merged line and the points it earned.
fn slide_line(line: [u32; SIZE]) -> ([u32; SIZE], u32) {
    let tiles: Vec<u32> = line.iter().copied().filter(|&v| v != 0).collect();
    let mut out = [0; SIZE];
    let mut points = 0;
    let mut write = 0;
    let mut i = 0;
    while i < tiles.len() {
        if i + 1 < tiles.len() && tiles[i] == tiles[i + 1] {
            let merged = tiles[i] * 2;
            out[write] = merged;
            points += merged;
            i += 2;
        } else {
            out[write] = tiles[i];
            i += 1;
        }
        write += 1;
    }
    (out, points)
}

/// Board coordinates of line `n`, ordered in the slide direction
fn line_cells(slide: Slide, n: usize) -> [(usize, usize); SIZE] {
    let mut cells = [(0, 0); SIZE];
    for (k, cell) in cells.iter_mut().enumerate() {
        *cell = match slide {
            Slide::Left => (n, k),
            Slide::Right => (n, SIZE - 1 - k),
            Slide::Up => (k, n),
            Slide::Down => (SIZE - 1 - k, n),
        };
    }
    cells
}

/// Apply a slide; returns the new board, points earned and whether anything moved
fn apply_slide(board: &Board, slide: Slide) -> (Board, u32, bool) {
    let mut next = *board;
    let mut points = 0;
    for n in 0..SIZE {
        let cells = line_cells(slide, n);
        let mut line = [0; SIZE];
        for (k, &(r, c)) in cells.iter().enumerate() {
            line[k] = board[r][c];
        }
        let (merged, earned) = slide_line(line);
        points += earned;
        for (k, &(r, c)) in cells.iter().enumerate() {
            next[r][c] = merged[k];
        }
    }
    let moved = next != *board;
    (next, points, moved)
}

fn add_random_tile(board: &mut Board, rng: &mut dyn RngCore) {
    let empty: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| board[r][c] == 0)
        .collect();
    if empty.is_empty() {
        return;
    }
    let (r, c) = empty[pick_index(rng, empty.len())];
    // 90% twos, 10% fours
    board[r][c] = if rng.next_u32() % 10 == 0 { 4 } else { 2 };
}

pub struct Twenty48Game {
    board: Board,
    score: u32,
    over: bool,
}

impl Twenty48Game {
    pub fn new() -> Self {
        Self {
            board: [[0; SIZE]; SIZE],
            score: 0,
            over: false,
        }
    }

    fn slide(&mut self, slide: Slide, rng: &mut dyn RngCore) {
        let (next, points, moved) = apply_slide(&self.board, slide);
        if !moved {
            return;
        }
        self.board = next;
        self.score += points;
        add_random_tile(&mut self.board, rng);

        if self.board.iter().flatten().any(|&v| v >= WINNING_TILE) {
            log::info!("2048 reached, score {}", self.score);
            self.over = true;
        } else if self.is_stuck() {
            self.over = true;
        }
    }

    fn is_stuck(&self) -> bool {
        [Slide::Left, Slide::Right, Slide::Up, Slide::Down]
            .iter()
            .all(|&s| !apply_slide(&self.board, s).2)
    }
}

impl Default for Twenty48Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for Twenty48Game {
    fn id(&self) -> GameId {
        GameId::Twenty48
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🎮 2048 GAME").into();
        lines.extend(owned(&[
            "",
            "Controls:",
            "• Arrow keys to move tiles",
            "• Q to quit",
            "• Combine tiles to reach 2048!",
        ]));
        lines
    }

    fn start(&mut self, _now_ms: u64, rng: &mut dyn RngCore) {
        add_random_tile(&mut self.board, rng);
        add_random_tile(&mut self.board, rng);
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, rng: &mut dyn RngCore) {
        if self.over {
            return;
        }
        match key {
            Key::Left => self.slide(Slide::Left, rng),
            Key::Right => self.slide(Slide::Right, rng),
            Key::Up => self.slide(Slide::Up, rng),
            Key::Down => self.slide(Slide::Down, rng),
            Key::Char('q') => self.over = true,
            _ => {}
        }
    }

    fn render(&self) -> Vec<String> {
        let status = if self.over { "GAME OVER" } else { "Playing" };
        let mut lines: Vec<String> =
            heading(&format!("🎮 2048 | Score: {} | {}", self.score, status)).into();
        for row in &self.board {
            let cells: Vec<String> = row
                .iter()
                .map(|&v| match v {
                    0 => String::from("    ·"),
                    v => format!("{:>5}", v),
                })
                .collect();
            lines.push(cells.join("|"));
        }
        lines.push(String::from("Use arrow keys to move | Q to quit"));
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        self.over.then(|| Finished::scored(self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    #[test]
    fn test_slide_line_merges_once() {
        assert_eq!(slide_line([2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(slide_line([0, 2, 0, 2]), ([4, 0, 0, 0], 4));
        assert_eq!(slide_line([4, 4, 8, 0]), ([8, 8, 0, 0], 8));
        assert_eq!(slide_line([2, 4, 8, 16]), ([2, 4, 8, 16], 0));
    }

    #[test]
    fn test_directions() {
        let board: Board = [[2, 0, 0, 2], [0, 0, 0, 0], [0, 0, 0, 0], [2, 0, 0, 0]];

        let (left, points, moved) = apply_slide(&board, Slide::Left);
        assert!(moved);
        assert_eq!(points, 4);
        assert_eq!(left[0], [4, 0, 0, 0]);

        let (right, _, _) = apply_slide(&board, Slide::Right);
        assert_eq!(right[0], [0, 0, 0, 4]);
        assert_eq!(right[3], [0, 0, 0, 2]);

        let (up, points, _) = apply_slide(&board, Slide::Up);
        assert_eq!(points, 4);
        assert_eq!(up[0], [4, 0, 0, 2]);
        assert_eq!(up[3], [0, 0, 0, 0]);

        let (down, _, _) = apply_slide(&board, Slide::Down);
        assert_eq!(down[3], [4, 0, 0, 2]);
    }

    #[test]
    fn test_start_places_two_tiles() {
        let mut rng = SessionRng::new(4);
        let mut game = Twenty48Game::new();
        game.start(0, &mut rng);
        let tiles: Vec<u32> = game.board.iter().flatten().copied().filter(|&v| v != 0).collect();
        assert_eq!(tiles.len(), 2);
        assert!(tiles.iter().all(|&v| v == 2 || v == 4));
    }

    #[test]
    fn test_move_adds_tile_and_scores() {
        let mut rng = SessionRng::new(4);
        let mut game = Twenty48Game::new();
        game.board = [[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]];
        game.handle_input(Key::Left, 0, &mut rng);
        assert_eq!(game.score, 4);
        assert_eq!(game.board.iter().flatten().filter(|&&v| v != 0).count(), 2);

        // a slide that moves nothing adds no tile
        game.board = [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]];
        game.handle_input(Key::Left, 0, &mut rng);
        assert_eq!(game.board, [[4, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
    }

    #[test]
    fn test_reaching_2048_ends() {
        let mut rng = SessionRng::new(4);
        let mut game = Twenty48Game::new();
        game.board = [[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]];
        game.handle_input(Key::Left, 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::scored(2048)));
    }

    #[test]
    fn test_quit_keeps_score() {
        let mut rng = SessionRng::new(4);
        let mut game = Twenty48Game::new();
        game.score = 12;
        game.handle_input(Key::Char('q'), 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::scored(12)));
    }
}
