//! Typewriter reveal
//!
//! Output blocks are shown word by word. [`Typewriter`] yields the partial
//! frames and the delay before each one; the renderer decides whether to
//! animate or just take the last frame.

use alloc::string::String;
use alloc::vec::Vec;

use crate::config::{REVEAL_LINE_DELAY_MS, REVEAL_WORD_DELAY_MS};

/// One step of a reveal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Wait this long before showing the frame
    pub delay_ms: u64,
    pub lines: Vec<String>,
}

/// Iterator of partial frames for a block of output lines
pub struct Typewriter {
    lines: Vec<String>,
    shown: Vec<String>,
    line: usize,
    word: usize,
}

impl Typewriter {
    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            shown: Vec::new(),
            line: 0,
            word: 0,
        }
    }
}

impl Iterator for Typewriter {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        let current = self.lines.get(self.line)?;
        let words: Vec<&str> = current.split(' ').collect();

        let delay_ms = match (self.line, self.word) {
            (0, 0) => 0,
            (_, 0) => REVEAL_LINE_DELAY_MS,
            _ => REVEAL_WORD_DELAY_MS,
        };

        let partial = words[..=self.word].join(" ");
        if self.word == 0 {
            self.shown.push(partial);
        } else if let Some(last) = self.shown.last_mut() {
            *last = partial;
        }

        self.word += 1;
        if self.word >= words.len() {
            self.line += 1;
            self.word = 0;
        }

        Some(Frame {
            delay_ms,
            lines: self.shown.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(text: &[&str]) -> Vec<String> {
        text.iter().map(|l| String::from(*l)).collect()
    }

    #[test]
    fn test_word_by_word_frames() {
        let frames: Vec<Frame> = Typewriter::new(lines(&["Hello big world", "", "bye"])).collect();
        let shown: Vec<Vec<String>> = frames.iter().map(|f| f.lines.clone()).collect();
        assert_eq!(
            shown,
            [
                lines(&["Hello"]),
                lines(&["Hello big"]),
                lines(&["Hello big world"]),
                lines(&["Hello big world", ""]),
                lines(&["Hello big world", "", "bye"]),
            ]
        );
        let delays: Vec<u64> = frames.iter().map(|f| f.delay_ms).collect();
        assert_eq!(delays, [0, 50, 50, 100, 100]);
    }

    #[test]
    fn test_last_frame_is_full_block() {
        let block = lines(&["a b", "c"]);
        let last = Typewriter::new(block.clone()).last().map(|f| f.lines);
        assert_eq!(last, Some(block));
    }

    #[test]
    fn test_empty_block() {
        assert_eq!(Typewriter::new(Vec::new()).next(), None);
    }
}
