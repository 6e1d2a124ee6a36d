//! Session-scoped attempt history.
//!
//! A chronological log of graded submissions, kept only for the lifetime of
//! the session. Exports render to a `String` for the front-end to print;
//! nothing is persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which drill produced a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DrillKind {
    /// Romanization to Hangul.
    Romanization,
    /// Multiple-choice vocabulary.
    Vocabulary,
    /// Timed transcription race.
    TypingRace,
    /// Verb-tense selector.
    Tense,
}

impl std::fmt::Display for DrillKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Romanization => write!(f, "Romanization"),
            Self::Vocabulary => write!(f, "Vocabulary"),
            Self::TypingRace => write!(f, "Typing Race"),
            Self::Tense => write!(f, "Tense"),
        }
    }
}

/// One graded submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// The drill that graded the submission.
    pub drill: DrillKind,
    /// The prompt that was shown.
    pub prompt: String,
    /// What the user submitted.
    pub submitted: String,
    /// The expected value.
    pub expected: String,
    /// Whether the submission was correct.
    pub correct: bool,
    /// When the submission was graded.
    pub timestamp: DateTime<Utc>,
}

/// A chronological log of graded attempts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct History {
    records: Vec<AttemptRecord>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn append(&mut self, record: AttemptRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[AttemptRecord] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no attempt has been graded yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the history as plain text.
    pub fn export_text(&self) -> String {
        let mut out = String::from("Attempt History\n===============\n\n");
        for record in &self.records {
            let mark = if record.correct { "o" } else { "x" };
            out.push_str(&format!(
                "[{mark}] {} | {} -> {} (expected: {})\n",
                record.drill, record.prompt, record.submitted, record.expected
            ));
        }
        out
    }

    /// Render the history as markdown.
    pub fn export_markdown(&self) -> String {
        let mut out = String::from("# Attempt History\n\n");
        for record in &self.records {
            let mark = if record.correct { "correct" } else { "wrong" };
            out.push_str(&format!(
                "- **{}** — {}: `{}` ({mark}, expected `{}`)\n",
                record.drill, record.prompt, record.submitted, record.expected
            ));
        }
        out
    }
}
