//! Snake
//!
//! 20x20 board, one step every `SNAKE_STEP_MS`. Each food is worth 10.

use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::config::SNAKE_STEP_MS;
use crate::rng::pick_index;
use crate::session::GameId;
use crate::terminal::Key;

const BOARD_SIZE: i32 = 20;
const FOOD_POINTS: u32 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    fn in_bounds(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    fn delta(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }
}

pub struct SnakeGame {
    /// Head first
    body: VecDeque<Point>,
    food: Point,
    heading: Heading,
    score: u32,
    over: bool,
    next_step_ms: u64,
}

impl SnakeGame {
    pub fn new() -> Self {
        let mut body = VecDeque::new();
        body.push_back(Point::new(10, 10));
        Self {
            body,
            food: Point::new(15, 15),
            heading: Heading::Up,
            score: 0,
            over: false,
            next_step_ms: 0,
        }
    }

    fn head(&self) -> Point {
        self.body.front().copied().unwrap_or(Point::new(10, 10))
    }

    fn step(&mut self, rng: &mut dyn RngCore) {
        let (dx, dy) = self.heading.delta();
        let head = self.head();
        let next = Point::new(head.x + dx, head.y + dy);

        if !next.in_bounds() || self.body.contains(&next) {
            log::debug!("snake crashed at ({}, {})", next.x, next.y);
            self.over = true;
            return;
        }

        self.body.push_front(next);
        if next == self.food {
            self.score += FOOD_POINTS;
            self.place_food(rng);
        } else {
            self.body.pop_back();
        }
    }

    fn place_food(&mut self, rng: &mut dyn RngCore) {
        let free: Vec<Point> = (0..BOARD_SIZE)
            .flat_map(|y| (0..BOARD_SIZE).map(move |x| Point::new(x, y)))
            .filter(|p| !self.body.contains(p))
            .collect();
        if free.is_empty() {
            self.over = true;
            return;
        }
        self.food = free[pick_index(rng, free.len())];
    }

    fn turn(&mut self, heading: Heading) {
        if heading != self.heading.opposite() {
            self.heading = heading;
        }
    }
}

impl Default for SnakeGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for SnakeGame {
    fn id(&self) -> GameId {
        GameId::Snake
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("🐍 SNAKE GAME").into();
        lines.extend(owned(&["", "Controls:", "• Arrow keys to move", "• Q to quit"]));
        lines
    }

    fn start(&mut self, now_ms: u64, _rng: &mut dyn RngCore) {
        self.next_step_ms = now_ms + SNAKE_STEP_MS;
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, _rng: &mut dyn RngCore) {
        match key {
            Key::Up => self.turn(Heading::Up),
            Key::Down => self.turn(Heading::Down),
            Key::Left => self.turn(Heading::Left),
            Key::Right => self.turn(Heading::Right),
            Key::Char('q') => self.over = true,
            _ => {}
        }
    }

    fn tick(&mut self, now_ms: u64, rng: &mut dyn RngCore) {
        while !self.over && now_ms >= self.next_step_ms {
            self.step(rng);
            self.next_step_ms += SNAKE_STEP_MS;
        }
    }

    fn render(&self) -> Vec<String> {
        let status = if self.over { "GAME OVER" } else { "Playing" };
        let mut lines: Vec<String> =
            heading(&format!("🐍 SNAKE | Score: {} | {}", self.score, status)).into();

        let head = self.head();
        for y in 0..BOARD_SIZE {
            let row: Vec<&str> = (0..BOARD_SIZE)
                .map(|x| {
                    let p = Point::new(x, y);
                    if p == head {
                        "█"
                    } else if self.body.contains(&p) {
                        "▓"
                    } else if p == self.food {
                        "●"
                    } else {
                        "·"
                    }
                })
                .collect();
            lines.push(row.join(" "));
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

    fn started() -> (SnakeGame, SessionRng) {
        let mut rng = SessionRng::new(11);
        let mut game = SnakeGame::new();
        game.start(0, &mut rng);
        (game, rng)
    }

    #[test]
    fn test_moves_up_each_step() {
        let (mut game, mut rng) = started();
        game.tick(100, &mut rng);
        assert_eq!(game.head(), Point::new(10, 10));
        game.tick(150, &mut rng);
        assert_eq!(game.head(), Point::new(10, 9));
        game.tick(450, &mut rng);
        assert_eq!(game.head(), Point::new(10, 7));
    }

    #[test]
    fn test_reverse_is_ignored() {
        let (mut game, mut rng) = started();
        game.handle_input(Key::Down, 0, &mut rng);
        assert_eq!(game.heading, Heading::Up);
        game.handle_input(Key::Left, 0, &mut rng);
        assert_eq!(game.heading, Heading::Left);
    }

    #[test]
    fn test_eating_food_grows_and_scores() {
        let (mut game, mut rng) = started();
        game.food = Point::new(10, 9);
        game.tick(150, &mut rng);
        assert_eq!(game.score, 10);
        assert_eq!(game.body.len(), 2);
        assert!(!game.body.contains(&game.food));
    }

    #[test]
    fn test_wall_collision_ends_with_score() {
        let (mut game, mut rng) = started();
        game.score = 30;
        // ten steps reach row 0, the eleventh leaves the board
        game.tick(SNAKE_STEP_MS * 11, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::scored(30)));
        assert_eq!(game.head(), Point::new(10, 0));
    }

    #[test]
    fn test_quit() {
        let (mut game, mut rng) = started();
        game.handle_input(Key::Char('q'), 0, &mut rng);
        assert_eq!(game.is_over(), Some(Finished::scored(0)));
    }

    #[test]
    fn test_render_board() {
        let (game, _) = started();
        let frame = game.render();
        assert_eq!(frame[0], "🐍 SNAKE | Score: 0 | Playing");
        assert_eq!(frame.len(), 2 + 20 + 1);
        assert!(frame[2 + 10].contains('█'));
        assert!(frame[2 + 15].contains('●'));
    }
}
