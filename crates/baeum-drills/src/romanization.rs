//! Romanization to Hangul drill.
//!
//! Shows a romanized Korean word; the user types the Hangul spelling.
//! Submissions are always graded, including empty ones (an empty submission
//! is simply incorrect).

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use baeum_core::{Bank, WordPair};

use crate::config::DrillConfig;
use crate::grade::Feedback;
use crate::history::{AttemptRecord, DrillKind, History};
use crate::score::Scoreboard;

/// An interactive romanization drill session.
pub struct RomanizationDrill {
    bank: Bank<WordPair>,
    rng: StdRng,
    current: usize,
    last: Option<Feedback>,
    score: Scoreboard,
    history: History,
}

impl RomanizationDrill {
    /// Start a session over `bank`, picking the first word.
    pub fn new(bank: Bank<WordPair>, config: DrillConfig) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let current = bank.pick(&mut rng);
        Self {
            bank,
            rng,
            current,
            last: None,
            score: Scoreboard::new(),
            history: History::new(),
        }
    }

    /// The word currently being drilled.
    pub fn current(&self) -> &WordPair {
        self.bank.get(self.current)
    }

    /// The running counters.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// The attempt history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feedback for the last submission on the current word, if any.
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last.as_ref()
    }

    /// Grade a submission against the current word's Hangul spelling.
    pub fn submit(&mut self, input: &str) -> Feedback {
        let item = self.bank.get(self.current);
        let feedback = Feedback::from_text(&item.hangul, input);
        let prompt = item.romanized.clone();

        self.score.record(feedback.correct);
        self.history.append(AttemptRecord {
            drill: DrillKind::Romanization,
            prompt,
            submitted: feedback.submitted.clone(),
            expected: feedback.expected.clone(),
            correct: feedback.correct,
            timestamp: Utc::now(),
        });
        self.last = Some(feedback.clone());
        feedback
    }

    /// Pick a fresh word (repeats allowed) and discard ungraded state.
    pub fn next(&mut self) {
        self.current = self.bank.pick(&mut self.rng);
        self.last = None;
    }
}
