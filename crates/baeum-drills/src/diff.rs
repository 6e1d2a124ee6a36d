//! Character-level comparison for incorrect transcriptions.
//!
//! A display aid only: grading stays whole-string equality. Characters are
//! aligned by index up to the length of the longer string; a position missing
//! on either side is a mismatch.

use serde::{Deserialize, Serialize};

/// One aligned character position in an expected/submitted comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CharDiff {
    /// Both strings have this character.
    Match(char),
    /// The strings disagree at this position. Either side may be absent when
    /// one string is shorter.
    Mismatch {
        /// Character of the expected string, if present.
        expected: Option<char>,
        /// Character of the submission, if present.
        submitted: Option<char>,
    },
}

/// Compare two strings character by character, aligned by index.
pub fn diff_chars(expected: &str, submitted: &str) -> Vec<CharDiff> {
    let expected: Vec<char> = expected.chars().collect();
    let submitted: Vec<char> = submitted.chars().collect();
    let len = expected.len().max(submitted.len());

    (0..len)
        .map(|i| {
            let e = expected.get(i).copied();
            let s = submitted.get(i).copied();
            match (e, s) {
                (Some(a), Some(b)) if a == b => CharDiff::Match(a),
                _ => CharDiff::Mismatch {
                    expected: e,
                    submitted: s,
                },
            }
        })
        .collect()
}
