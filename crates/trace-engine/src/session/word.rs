use serde::Serialize;

use crate::tracking::letter::LetterSession;

/// Where a letter of the word stands, for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LetterStatus {
    Done,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterProgress {
    pub ch: char,
    pub status: LetterStatus,
}

/// The word being traced and the letter the user is on.
#[derive(Debug, Clone)]
pub struct WordSession {
    word: Vec<char>,
    letter_index: usize,
    /// Strokes of the current (or, once the word is done, the last traced) letter.
    letter: Option<LetterSession>,
}

impl WordSession {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.chars().collect(),
            letter_index: 0,
            letter: None,
        }
    }

    pub fn text(&self) -> String {
        self.word.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.word.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    pub fn letter_index(&self) -> usize {
        self.letter_index
    }

    /// Character at the current index, `None` once past the end.
    pub fn current_char(&self) -> Option<char> {
        self.word.get(self.letter_index).copied()
    }

    pub fn is_finished(&self) -> bool {
        self.letter_index >= self.word.len()
    }

    /// Move to the next character. The index never moves backward.
    pub fn advance(&mut self) {
        if !self.is_finished() {
            self.letter_index += 1;
        }
    }

    pub fn letter(&self) -> Option<&LetterSession> {
        self.letter.as_ref()
    }

    pub fn letter_mut(&mut self) -> Option<&mut LetterSession> {
        self.letter.as_mut()
    }

    /// Replace the loaded letter, discarding all previous stroke state.
    pub fn set_letter(&mut self, letter: LetterSession) {
        self.letter = Some(letter);
    }

    pub fn progress(&self) -> Vec<LetterProgress> {
        self.word
            .iter()
            .enumerate()
            .map(|(i, &ch)| LetterProgress {
                ch,
                status: match i.cmp(&self.letter_index) {
                    std::cmp::Ordering::Less => LetterStatus::Done,
                    std::cmp::Ordering::Equal => LetterStatus::Active,
                    std::cmp::Ordering::Greater => LetterStatus::Pending,
                },
            })
            .collect()
    }
}
