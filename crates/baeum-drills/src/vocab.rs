//! Multiple-choice vocabulary quiz.
//!
//! Shows an English prompt and four Korean options. The option order is
//! shuffled once per item selection and then held fixed in session state, so
//! re-reading the choices between submissions never reorders them.

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use baeum_core::{Bank, VocabQuestion};

use crate::config::DrillConfig;
use crate::error::{DrillError, DrillResult};
use crate::grade::Feedback;
use crate::history::{AttemptRecord, DrillKind, History};
use crate::score::Scoreboard;

/// An interactive vocabulary quiz session.
pub struct VocabQuiz {
    bank: Bank<VocabQuestion>,
    rng: StdRng,
    current: usize,
    choices: Vec<String>,
    last: Option<Feedback>,
    score: Scoreboard,
    history: History,
}

impl VocabQuiz {
    /// Start a session over `bank`, picking and shuffling the first question.
    pub fn new(bank: Bank<VocabQuestion>, config: DrillConfig) -> Self {
        let mut quiz = Self {
            bank,
            rng: StdRng::seed_from_u64(config.seed),
            current: 0,
            choices: Vec::new(),
            last: None,
            score: Scoreboard::new(),
            history: History::new(),
        };
        quiz.advance();
        quiz
    }

    /// The question currently being asked.
    pub fn current(&self) -> &VocabQuestion {
        self.bank.get(self.current)
    }

    /// The presented options, in this item's shuffled order.
    pub fn choices(&self) -> &[String] {
        &self.choices
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

    /// Grade the option at `index` (into [`VocabQuiz::choices`]).
    ///
    /// An out-of-range index is rejected without moving any counters: making
    /// a selection is a precondition, not a graded event.
    pub fn submit(&mut self, index: usize) -> DrillResult<Feedback> {
        let selected = self
            .choices
            .get(index)
            .ok_or_else(|| DrillError::InvalidChoice {
                index,
                len: self.choices.len(),
            })?
            .clone();

        let item = self.bank.get(self.current);
        let feedback = Feedback::from_choice(&item.answer, &selected);
        let prompt = item.prompt.clone();

        self.score.record(feedback.correct);
        self.history.append(AttemptRecord {
            drill: DrillKind::Vocabulary,
            prompt,
            submitted: feedback.submitted.clone(),
            expected: feedback.expected.clone(),
            correct: feedback.correct,
            timestamp: Utc::now(),
        });
        self.last = Some(feedback.clone());
        Ok(feedback)
    }

    /// Pick a fresh question (repeats allowed), reshuffle its options, and
    /// discard ungraded state.
    pub fn next(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.current = self.bank.pick(&mut self.rng);
        let mut choices = self.bank.get(self.current).choices.clone();
        choices.shuffle(&mut self.rng);
        self.choices = choices;
        self.last = None;
    }
}
