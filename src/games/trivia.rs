//! Trivia quiz: five questions, 20 points each

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use rand_core::RngCore;

use super::{Finished, Game, heading, owned};
use crate::session::GameId;
use crate::terminal::Key;

struct Question {
    prompt: &'static str,
    answers: [&'static str; 4],
    correct: usize,
}

const QUESTIONS: &[Question] = &[
    Question {
        prompt: "What does CSS stand for?",
        answers: [
            "Cascading Style Sheets",
            "Creative Style System",
            "Computer Style Sheets",
            "Colorful Style Script",
        ],
        correct: 0,
    },
    Question {
        prompt: "Which language runs in a web browser?",
        answers: ["Java", "C++", "JavaScript", "Python"],
        correct: 2,
    },
    Question {
        prompt: "What is the purpose of Git?",
        answers: [
            "Database Management",
            "Version Control",
            "Web Hosting",
            "Code Debugging",
        ],
        correct: 1,
    },
    Question {
        prompt: "What does API stand for?",
        answers: [
            "Application Program Interface",
            "Advanced Programming Interface",
            "Automated Process Integration",
            "App Processing Interface",
        ],
        correct: 0,
    },
    Question {
        prompt: "Which is a NoSQL database?",
        answers: ["MySQL", "PostgreSQL", "MongoDB", "SQLite"],
        correct: 2,
    },
];

const POINTS: u32 = 20;

pub struct TriviaGame {
    current: usize,
    score: u32,
    quit: bool,
}

impl TriviaGame {
    pub fn new() -> Self {
        Self {
            current: 0,
            score: 0,
            quit: false,
        }
    }

    fn answer(&mut self, choice: usize) {
        let Some(question) = QUESTIONS.get(self.current) else {
            return;
        };
        if choice == question.correct {
            self.score += POINTS;
        }
        self.current += 1;
    }
}

impl Default for TriviaGame {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for TriviaGame {
    fn id(&self) -> GameId {
        GameId::Trivia
    }

    fn title(&self) -> Vec<String> {
        let mut lines: Vec<String> = heading("❓ TRIVIA QUIZ").into();
        lines.extend(owned(&[
            "",
            "Test your coding knowledge!",
            "",
            "Controls:",
            "• Keys 1-4 to select answers",
            "• Q to quit",
        ]));
        lines
    }

    fn handle_input(&mut self, key: Key, _now_ms: u64, _rng: &mut dyn RngCore) {
        match key {
            Key::Char(c @ '1'..='4') => self.answer(c as usize - '1' as usize),
            Key::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn render(&self) -> Vec<String> {
        let shown = (self.current + 1).min(QUESTIONS.len());
        let mut lines: Vec<String> = heading(&format!(
            "❓ TRIVIA QUIZ | Score: {} | Question {}/{}",
            self.score,
            shown,
            QUESTIONS.len()
        ))
        .into();

        match QUESTIONS.get(self.current) {
            Some(question) => {
                lines.push(String::from(question.prompt));
                lines.push(String::new());
                for (i, answer) in question.answers.iter().enumerate() {
                    lines.push(format!("{}. {}", i + 1, answer));
                }
                lines.push(String::new());
                lines.push(String::from("Press 1-4 to answer"));
            }
            None => lines.push(format!("Game Over! Final Score: {}", self.score)),
        }
        lines
    }

    fn is_over(&self) -> Option<Finished> {
        (self.quit || self.current >= QUESTIONS.len()).then(|| Finished::scored(self.score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SessionRng;

    fn press(game: &mut TriviaGame, keys: &str) {
        let mut rng = SessionRng::new(1);
        for c in keys.chars() {
            game.handle_input(Key::Char(c), 0, &mut rng);
        }
    }

    #[test]
    fn test_all_correct() {
        let mut game = TriviaGame::new();
        press(&mut game, "13213");
        assert_eq!(game.is_over(), Some(Finished::scored(100)));
    }

    #[test]
    fn test_mixed_answers() {
        let mut game = TriviaGame::new();
        press(&mut game, "1111");
        assert_eq!(game.score, 40);
        assert_eq!(game.is_over(), None);
        press(&mut game, "4");
        assert_eq!(game.is_over(), Some(Finished::scored(40)));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut game = TriviaGame::new();
        press(&mut game, "05x");
        assert_eq!(game.current, 0);
    }

    #[test]
    fn test_quit_keeps_score() {
        let mut game = TriviaGame::new();
        press(&mut game, "1q");
        assert_eq!(game.is_over(), Some(Finished::scored(20)));
    }

    #[test]
    fn test_render_question() {
        let game = TriviaGame::new();
        let frame = game.render();
        assert_eq!(frame[0], "❓ TRIVIA QUIZ | Score: 0 | Question 1/5");
        assert_eq!(frame[2], "What does CSS stand for?");
        assert_eq!(frame[4], "1. Cascading Style Sheets");
    }
}
