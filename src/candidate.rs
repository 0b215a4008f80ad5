//! Candidate words and the upstream answer contract.
//!
//! A [`WordCandidate`] is a (clue, answer) pair handed to the layout engine by
//! the word-selection layer. Answers are expected to arrive already normalized
//! to NFC, between [`MIN_ANSWER_GLYPHS`] and [`MAX_ANSWER_GLYPHS`] glyphs, with
//! no whitespace or digits. The engine itself only *requires* a non-empty
//! answer; out-of-contract candidates are skipped rather than rejected, so the
//! stricter checks live here as a helper for callers that want to warn early.

use serde::{Deserialize, Serialize};

/// Shortest answer the word-selection layer is supposed to supply.
pub const MIN_ANSWER_GLYPHS: usize = 4;
/// Longest answer the word-selection layer is supposed to supply.
pub const MAX_ANSWER_GLYPHS: usize = 10;

/// A (clue, answer) pair eligible for placement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCandidate {
    pub clue: String,
    pub answer: String,
}

impl WordCandidate {
    #[must_use]
    pub fn new(clue: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            clue: clue.into(),
            answer: answer.into(),
        }
    }

    /// The answer as an ordered glyph sequence. Intersection compares glyphs,
    /// not bytes, so multi-byte letters behave like any other letter.
    #[must_use]
    pub(crate) fn glyphs(&self) -> Vec<char> {
        self.answer.chars().collect()
    }
}

/// Whether an answer satisfies the documented upstream contract:
/// 4–10 glyphs, no whitespace, no digits.
///
/// The engine does not enforce this (it places what it can); the CLI uses it
/// to flag candidates that slipped past the word-selection layer.
#[must_use]
pub fn is_playable_answer(answer: &str) -> bool {
    let glyphs = answer.chars().count();
    (MIN_ANSWER_GLYPHS..=MAX_ANSWER_GLYPHS).contains(&glyphs)
        && !answer.chars().any(|c| c.is_whitespace() || c.is_ascii_digit())
}
