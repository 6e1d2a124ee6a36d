//! Verb-tense selector drill.
//!
//! Shows an English sentence and the three candidate verb forms. Unlike the
//! vocabulary quiz, options keep their authored dataset order (present, past,
//! future) so learners can lean on the position while studying.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;

use baeum_core::{Bank, TenseQuestion};

use crate::config::DrillConfig;
use crate::error::{DrillError, DrillResult};
use crate::grade::Feedback;
use crate::history::{AttemptRecord, DrillKind, History};
use crate::score::Scoreboard;

/// An interactive tense-selector session.
pub struct TenseDrill {
    bank: Bank<TenseQuestion>,
    rng: StdRng,
    current: usize,
    last: Option<Feedback>,
    score: Scoreboard,
    history: History,
}

impl TenseDrill {
    /// Start a session over `bank`, picking the first question.
    pub fn new(bank: Bank<TenseQuestion>, config: DrillConfig) -> Self {
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

    /// The question currently being asked.
    pub fn current(&self) -> &TenseQuestion {
        self.bank.get(self.current)
    }

    /// The presented options, in authored order.
    pub fn choices(&self) -> &[String] {
        &self.bank.get(self.current).choices
    }

    /// The running counters.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// The attempt history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feedback for the last submission on the current question, if any.
    pub fn last_feedback(&self) -> Option<&Feedback> {
        self.last.as_ref()
    }

    /// Grade the option at `index` (into [`TenseDrill::choices`]).
    ///
    /// An out-of-range index is rejected without moving any counters.
    pub fn submit(&mut self, index: usize) -> DrillResult<Feedback> {
        let item = self.bank.get(self.current);
        let selected = item
            .choices
            .get(index)
            .ok_or_else(|| DrillError::InvalidChoice {
                index,
                len: item.choices.len(),
            })?
            .clone();

        let feedback = Feedback::from_choice(&item.answer, &selected);
        let prompt = item.prompt.clone();

        self.score.record(feedback.correct);
        self.history.append(AttemptRecord {
            drill: DrillKind::Tense,
            prompt,
            submitted: feedback.submitted.clone(),
            expected: feedback.expected.clone(),
            correct: feedback.correct,
            timestamp: Utc::now(),
        });
        self.last = Some(feedback.clone());
        Ok(feedback)
    }

    /// Pick a fresh question (repeats allowed) and discard ungraded state.
    pub fn next(&mut self) {
        self.current = self.bank.pick(&mut self.rng);
        self.last = None;
    }
}
