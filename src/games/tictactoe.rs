//! Tic Tac Toe, two players on one keyboard

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::session::GameId;
use crate::terminal::Key;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    X,
    O,
}

impl Mark {
    fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    fn other(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {
    Win(Mark),
    Tie,
}

fn outcome(board: &[Option<Mark>; 9]) -> Option<Outcome> {
    for [a, b, c] in LINES {
        if let Some(mark) = board[a] {
            if board[b] == Some(mark) && board[c] == Some(mark) {
                return Some(Outcome::Win(mark));
            }
        }
    }
    board.iter().all(Option::is_some).then_some(Outcome::Tie)
}

pub struct TicTacToeGame {
    board: [Option<Mark>; 9],
    player: Mark,
    cursor: usize,
    outcome: Option<Outcome>,
    over: bool,
}

impl TicTacToeGame {
    pub fn new() -> Self {
        Self {
            board: [None; 9],
            player: Mark::X,
            cursor: 0,
            outcome: None,
            over: false,
        }
    }

    fn place(&mut self) {
        if self.board[self.cursor].is_some() {
            return;
        }
        self.board[self.cursor] = Some(self.player);
        self.outcome = outcome(&self.board);
        if self.outcome.is_none() {
            self.player = self.player.other();
        }
    }
}

impl Default for TicTacToeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TicTacToeGame {
    fn id(&self) -> GameId {
        GameId::TicTacToe
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("⭕ TIC TAC TOE").into();
        lines.extend(owned(&[
            "",
            "Two players, one keyboard!",
            "",
            "Controls:",
            "• Arrow keys to move cursor",
            "• Enter to place X/O",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, _rng: &mut dyn RngCore) {
        if self.outcome.is_some() {
            self.over = true;
            return;
        }
        match key {
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(8),
            Key::Up => self.cursor = self.cursor.saturating_sub(3),
            Key::Down => self.cursor = (self.cursor + 3).min(8),
            Key::Enter => self.place(),
            Key::Char('q') => self.over = true,
            _ => {}
        }
    }

    fn render(&self) -> Vec<String> {
        let status = match self.outcome {
            None => String::from("Playing"),
            Some(Outcome::Tie) => String::from("TIE GAME!"),
            Some(Outcome::Win(mark)) => format!("{} WINS!", mark.symbol()),
        };
        let mut lines: Vec<String> = heading(&format!(
            "⭕ TIC TAC TOE | Player: {} | {}",
            self.player.symbol(),
            status
        ))
        .into();

        for row in 0..3 {
            if row > 0 {
                lines.push(String::from("---|---|---"));
            }
            let cells: Vec<String> = (0..3)
                .map(|col| {
                    let index = row * 3 + col;
                    let mark = self.board[index].map_or(' ', Mark::symbol);
                    if index == self.cursor {
                        format!("[{}]", mark)
                    } else {
                        format!(" {} ", mark)
                    }
                })
                .collect();
            lines.push(cells.join("|"));
        }

        lines.push(String::new());
        if self.outcome.is_some() {
            lines.push(String::from("Press any key to return to terminal..."));
        } else {
            lines.push(String::from("Arrow keys to move | Enter to place | Q to quit"));
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

    fn play(game: &mut TicTacToeGame, cells: &[usize]) {
        let mut rng = SessionRng::new(1);
        for &cell in cells {
            game.cursor = cell;
            game.handle_input(Key::Enter, 0, &mut rng);
        }
    }

    #[test]
    fn test_cursor_clamps() {
        let mut rng = SessionRng::new(1);
        let mut game = TicTacToeGame::new();
        game.handle_input(Key::Up, 0, &mut rng);
        game.handle_input(Key::Left, 0, &mut rng);
        assert_eq!(game.cursor, 0);
        for _ in 0..4 {
            game.handle_input(Key::Down, 0, &mut rng);
        }
        assert_eq!(game.cursor, 8);
    }

    #[test]
    fn test_row_win_then_any_key() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.outcome, Some(Outcome::Win(Mark::X)));
        assert_eq!(game.player, Mark::X);
        assert_eq!(game.is_over(), None);

        let mut rng = SessionRng::new(1);
        game.handle_input(Key::Char('z'), 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::unscored()));
    }

    #[test]
    fn test_tie() {
        let mut game = TicTacToeGame::new();
        // X O X / X O O / O X X
        play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(game.outcome, Some(Outcome::Tie));
    }

    #[test]
    fn test_occupied_cell_ignored() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[4, 4]);
        assert_eq!(game.board[4], Some(Mark::X));
        assert_eq!(game.player, Mark::O);
    }

    #[test]
    fn test_render_marks_cursor() {
        let mut game = TicTacToeGame::new();
        play(&mut game, &[0]);
        game.cursor = 4;
        let frame = game.render();
        assert_eq!(frame[0], "⭕ TIC TAC TOE | Player: O | Playing");
        assert_eq!(frame[2], " X |   |   ");
        assert_eq!(frame[4], "   |[ ]|   ");
    }
}
