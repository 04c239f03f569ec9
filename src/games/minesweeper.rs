//! Minesweeper
//!
//! 9x9 board with 10 mines. Cells are chosen by typing a row digit, then a
//! column digit, then `r` to reveal or `f` to toggle a flag. Mines are laid
//! on the first reveal so it is never fatal.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::rng::pick_index;
use crate::session::GameId;
use crate::terminal::Key;

const SIZE: usize = 9;
const MINES: usize = 10;
const SAFE_CELLS: usize = SIZE * SIZE - MINES;

#[derive(Debug, Clone, Copy, Default)]
struct Cell {
    mine: bool,
    adjacent: u8,
    revealed: bool,
    flagged: bool,
}

/// Where the row/column/action entry currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Row,
    Column(usize),
    Action(usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Playing,
    Won,
    Lost,
    Quit,
}

fn neighbours(row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> {
    let rows = row.saturating_sub(1)..=(row + 1).min(SIZE - 1);
    rows.flat_map(move |r| {
        let cols = col.saturating_sub(1)..=(col + 1).min(SIZE - 1);
        cols.map(move |c| (r, c))
    })
    .filter(move |&(r, c)| (r, c) != (row, col))
}

pub struct MinesweeperGame {
    cells: [[Cell; SIZE]; SIZE],
    mines_placed: bool,
    entry: Entry,
    state: State,
    moves: u32,
    started_ms: u64,
    elapsed_secs: u32,
}

impl MinesweeperGame {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::default(); SIZE]; SIZE],
            mines_placed: false,
            entry: Entry::Row,
            state: State::Playing,
            moves: 0,
            started_ms: 0,
            elapsed_secs: 0,
        }
    }

    fn place_mines(&mut self, safe: (usize, usize), rng: &mut dyn RngCore) {
        let mut candidates: Vec<(usize, usize)> = (0..SIZE)
            .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
            .filter(|&cell| cell != safe)
            .collect();
        for _ in 0..MINES {
            let (r, c) = candidates.swap_remove(pick_index(rng, candidates.len()));
            self.cells[r][c].mine = true;
        }
        for r in 0..SIZE {
            for c in 0..SIZE {
                let count = neighbours(r, c)
                    .filter(|&(nr, nc)| self.cells[nr][nc].mine)
                    .count();
                self.cells[r][c].adjacent = count as u8;
            }
        }
        self.mines_placed = true;
        log::debug!("mines placed avoiding ({}, {})", safe.0, safe.1);
    }

    fn reveal(&mut self, row: usize, col: usize, rng: &mut dyn RngCore) {
        let cell = self.cells[row][col];
        if cell.revealed || cell.flagged {
            return;
        }
        if !self.mines_placed {
            self.place_mines((row, col), rng);
        }
        self.moves += 1;

        if self.cells[row][col].mine {
            self.cells[row][col].revealed = true;
            self.state = State::Lost;
            for cell in self.cells.iter_mut().flatten().filter(|c| c.mine) {
                cell.revealed = true;
            }
            return;
        }

        let mut pending = alloc::vec![(row, col)];
        while let Some((r, c)) = pending.pop() {
            let cell = &mut self.cells[r][c];
            if cell.revealed || cell.flagged || cell.mine {
                continue;
            }
            cell.revealed = true;
            if cell.adjacent == 0 {
                pending.extend(neighbours(r, c));
            }
        }
        self.check_won();
    }

    fn toggle_flag(&mut self, row: usize, col: usize) {
        let cell = &mut self.cells[row][col];
        if cell.revealed {
            return;
        }
        cell.flagged = !cell.flagged;
        self.moves += 1;
        self.check_won();
    }

    fn check_won(&mut self) {
        if !self.mines_placed {
            return;
        }
        let cells = self.cells.iter().flatten();
        let revealed = cells.clone().filter(|c| c.revealed).count();
        let flagged_mines = cells.filter(|c| c.flagged && c.mine).count();
        if revealed == SAFE_CELLS || flagged_mines == MINES {
            log::info!("minesweeper cleared in {} moves", self.moves);
            self.state = State::Won;
        }
    }

    fn flags(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.flagged).count()
    }

    fn score(&self) -> u32 {
        let base = 100 + SAFE_CELLS as u32 * 10;
        base.saturating_sub(self.elapsed_secs)
            .saturating_sub(self.moves * 2)
    }

    fn update_clock(&mut self, now_ms: u64) {
        if self.state == State::Playing {
            self.elapsed_secs = (now_ms.saturating_sub(self.started_ms) / 1000) as u32;
        }
    }
}

impl Default for MinesweeperGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for MinesweeperGame {
    fn id(&self) -> GameId {
        GameId::Minesweeper
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("💣 MINESWEEPER").into();
        lines.extend(owned(&[
            "",
            "Clear the board without hitting a mine!",
            "",
            "Controls:",
            "• 1-9 to select row, then column",
            "• R to reveal, F to flag/unflag",
            "• Backspace to cancel a selection",
            "• Q to quit",
        ]));
        lines
    }

    fn start(&mut self, now_ms: u64, _rng: &mut dyn RngCore) {
        self.started_ms = now_ms;
    }

    fn handle_input(&mut self, key: Key, now_ms: u64, rng: &mut dyn RngCore) {
        if self.state != State::Playing {
            return;
        }
        self.update_clock(now_ms);

        let digit = match key {
            Key::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
            _ => None,
        };
        match (self.entry, key, digit) {
            (_, Key::Char('q'), _) => self.state = State::Quit,
            (_, Key::Backspace, _) => self.entry = Entry::Row,
            (Entry::Row, _, Some(row)) => self.entry = Entry::Column(row),
            (Entry::Column(row), _, Some(col)) => self.entry = Entry::Action(row, col),
            (Entry::Action(row, col), Key::Char('r' | 'R'), _) => {
                self.entry = Entry::Row;
                self.reveal(row, col, rng);
            }
            (Entry::Action(row, col), Key::Char('f' | 'F'), _) => {
                self.entry = Entry::Row;
                self.toggle_flag(row, col);
            }
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64, _rng: &mut dyn RngCore) {
        self.update_clock(now_ms);
    }

    fn render(&self) -> Vec<String> {
        let status = match self.state {
            State::Won => "YOU WIN!",
            State::Lost => "GAME OVER!",
            _ => "Playing",
        };
        let mut lines: Vec<String> = heading(&format!(
            "💣 MINESWEEPER | Moves: {} | Flags: {}/{} | Time: {}s | {}",
            self.moves,
            self.flags(),
            MINES,
            self.elapsed_secs,
            status
        ))
        .into();

        lines.push(String::from("   1 2 3 4 5 6 7 8 9"));
        for (r, row) in self.cells.iter().enumerate() {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Cell { flagged: true, .. } => String::from("⚑"),
                    Cell { revealed: false, .. } => String::from("■"),
                    Cell { mine: true, .. } => String::from("*"),
                    Cell { adjacent: 0, .. } => String::from("·"),
                    Cell { adjacent, .. } => format!("{}", adjacent),
                })
                .collect();
            lines.push(format!("{}  {}", r + 1, cells.join(" ")));
        }

        lines.push(String::new());
        lines.push(match (self.state, self.entry) {
            (State::Won, _) => format!("You won! Score: {}", self.score()),
            (State::Lost, _) => String::from("Game Over!"),
            (_, Entry::Row) => String::from("Select row (1-9)"),
            (_, Entry::Column(r)) => format!("Row {} | Select column (1-9)", r + 1),
            (_, Entry::Action(r, c)) => {
                format!("Cell {},{} | R to reveal, F to flag", r + 1, c + 1)
            }
        });
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        match self.state {
            State::Playing => None,
            State::Won => Some(Finished::scored(self.score())),
            State::Lost | State::Quit => Some(Finished::scored(0)),
        }
    }
}
