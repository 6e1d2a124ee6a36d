//! Timed transcription race.
//!
//! Shows a full Korean sentence; the user types it back exactly. The timer
//! starts whenever a new sentence is chosen, and elapsed time is recorded in
//! seconds rounded to two decimals. A correct submission that beats the
//! current mode's best time replaces it; each mode keeps its own best for the
//! whole session. The elapsed time is advisory display data, never a
//! deadline.

use std::time::Instant;

use chrono::Utc;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use baeum_core::{Bank, TypingSentence};

use crate::config::DrillConfig;
use crate::diff::{CharDiff, diff_chars};
use crate::error::{DrillError, DrillResult};
use crate::grade::Feedback;
use crate::history::{AttemptRecord, DrillKind, History};
use crate::score::Scoreboard;

/// Race difficulty: which sentence bank is in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceMode {
    /// Single short sentences.
    Easy,
    /// Three-sentence paragraphs.
    Hard,
}

impl RaceMode {
    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> DrillResult<Self> {
        match s.to_lowercase().trim() {
            "easy" | "e" => Ok(Self::Easy),
            "hard" | "h" => Ok(Self::Hard),
            other => Err(DrillError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for RaceMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "Easy"),
            Self::Hard => write!(f, "Hard"),
        }
    }
}

/// The outcome of grading one race submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceFeedback {
    /// Whether the transcription matched exactly.
    pub correct: bool,
    /// The sentence that was expected.
    pub expected: String,
    /// The transcription as graded.
    pub submitted: String,
    /// Seconds from sentence display to submission, rounded to two decimals.
    pub elapsed_secs: f64,
    /// Whether this submission set a new best time for the current mode.
    pub new_best: bool,
    /// Character comparison against the expected sentence, present on
    /// incorrect submissions for downstream rendering.
    pub diff: Option<Vec<CharDiff>>,
}

/// An interactive transcription-race session.
pub struct TypeRace {
    easy: Bank<TypingSentence>,
    hard: Bank<TypingSentence>,
    mode: RaceMode,
    rng: StdRng,
    current: usize,
    started: Instant,
    best_easy: Option<f64>,
    best_hard: Option<f64>,
    last: Option<RaceFeedback>,
    score: Scoreboard,
    history: History,
}

impl TypeRace {
    /// Start a session in easy mode, picking the first sentence.
    pub fn new(
        easy: Bank<TypingSentence>,
        hard: Bank<TypingSentence>,
        config: DrillConfig,
    ) -> Self {
        let mut rng = StdRng::seed_from_u64(config.seed);
        let current = easy.pick(&mut rng);
        Self {
            easy,
            hard,
            mode: RaceMode::Easy,
            rng,
            current,
            started: Instant::now(),
            best_easy: None,
            best_hard: None,
            last: None,
            score: Scoreboard::new(),
            history: History::new(),
        }
    }

    /// The sentence currently being raced.
    pub fn current(&self) -> &TypingSentence {
        self.bank().get(self.current)
    }

    /// The active difficulty mode.
    pub fn mode(&self) -> RaceMode {
        self.mode
    }

    /// The best recorded time for `mode`, if any.
    pub fn best_time(&self, mode: RaceMode) -> Option<f64> {
        match mode {
            RaceMode::Easy => self.best_easy,
            RaceMode::Hard => self.best_hard,
        }
    }

    /// The running counters.
    pub fn score(&self) -> &Scoreboard {
        &self.score
    }

    /// The attempt history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Feedback for the last submission on the current sentence, if any.
    pub fn last_feedback(&self) -> Option<&RaceFeedback> {
        self.last.as_ref()
    }

    /// Switch difficulty. Picks a sentence from the other bank and restarts
    /// the timer; best times are per-mode and survive the switch. Switching
    /// to the mode already in play does nothing.
    pub fn set_mode(&mut self, mode: RaceMode) {
        if mode == self.mode {
            return;
        }
        self.mode = mode;
        self.advance();
    }

    /// Pick a fresh sentence (repeats allowed), restart the timer, and
    /// discard ungraded state.
    pub fn next(&mut self) {
        self.advance();
    }

    /// Grade a transcription of the current sentence.
    ///
    /// Returns `None` for an empty submission: no grading event takes place
    /// and no counters move. Whitespace-only input is graded (and fails)
    /// like any other text.
    pub fn submit(&mut self, input: &str) -> Option<RaceFeedback> {
        let elapsed = round2(self.started.elapsed().as_secs_f64());
        self.grade_at(input, elapsed)
    }

    fn advance(&mut self) {
        self.current = match self.mode {
            RaceMode::Easy => self.easy.pick(&mut self.rng),
            RaceMode::Hard => self.hard.pick(&mut self.rng),
        };
        self.started = Instant::now();
        self.last = None;
    }

    fn bank(&self) -> &Bank<TypingSentence> {
        match self.mode {
            RaceMode::Easy => &self.easy,
            RaceMode::Hard => &self.hard,
        }
    }

    /// Grade `input` as if submitted `elapsed_secs` after the sentence was
    /// shown. Split out from [`TypeRace::submit`] so timing-dependent
    /// behavior is testable.
    fn grade_at(&mut self, input: &str, elapsed_secs: f64) -> Option<RaceFeedback> {
        if input.is_empty() {
            return None;
        }

        let item = self.bank().get(self.current);
        let graded = Feedback::from_text(&item.hangul, input);
        let prompt = item.hangul.clone();

        let mut new_best = false;
        if graded.correct {
            let best = match self.mode {
                RaceMode::Easy => &mut self.best_easy,
                RaceMode::Hard => &mut self.best_hard,
            };
            if best.is_none_or(|b| elapsed_secs < b) {
                *best = Some(elapsed_secs);
                new_best = true;
            }
        }

        let diff = if graded.correct {
            None
        } else {
            Some(diff_chars(&graded.expected, &graded.submitted))
        };

        self.score.record(graded.correct);
        self.history.append(AttemptRecord {
            drill: DrillKind::TypingRace,
            prompt,
            submitted: graded.submitted.clone(),
            expected: graded.expected.clone(),
            correct: graded.correct,
            timestamp: Utc::now(),
        });

        let feedback = RaceFeedback {
            correct: graded.correct,
            expected: graded.expected,
            submitted: graded.submitted,
            elapsed_secs,
            new_best,
            diff,
        };
        self.last = Some(feedback.clone());
        Some(feedback)
    }
}

/// Round to two decimal places.
fn round2(secs: f64) -> f64 {
    (secs * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str = "오늘 날씨가 정말 좋아요.";
    const HARD: &str = "주말에 여행을 갔어요. 친구들과 바다를 보러 갔어요. 날씨가 정말 좋았어요.";

    fn sentence(hangul: &str) -> TypingSentence {
        TypingSentence {
            hangul: hangul.to_string(),
            translation: String::new(),
        }
    }

    fn race() -> TypeRace {
        let easy = Bank::new(vec![sentence(EASY)]).unwrap();
        let hard = Bank::new(vec![sentence(HARD)]).unwrap();
        TypeRace::new(easy, hard, DrillConfig::default())
    }

    #[test]
    fn mode_parsing() {
        assert_eq!(RaceMode::parse("easy").unwrap(), RaceMode::Easy);
        assert_eq!(RaceMode::parse("HARD").unwrap(), RaceMode::Hard);
        assert_eq!(RaceMode::parse("h").unwrap(), RaceMode::Hard);
        assert_eq!(
            RaceMode::parse("medium").unwrap_err(),
            DrillError::UnknownMode("medium".to_string())
        );
    }

    #[test]
    fn first_correct_time_becomes_best() {
        let mut race = race();
        let feedback = race.grade_at(EASY, 4.21).unwrap();
        assert!(feedback.correct);
        assert!(feedback.new_best);
        assert_eq!(race.best_time(RaceMode::Easy), Some(4.21));
    }

    #[test]
    fn best_time_updates_only_on_strictly_lower() {
        let mut race = race();
        race.grade_at(EASY, 4.21).unwrap();

        let faster = race.grade_at(EASY, 3.99).unwrap();
        assert!(faster.new_best);
        assert_eq!(race.best_time(RaceMode::Easy), Some(3.99));

        let slower = race.grade_at(EASY, 5.00).unwrap();
        assert!(!slower.new_best);
        assert_eq!(race.best_time(RaceMode::Easy), Some(3.99));

        let equal = race.grade_at(EASY, 3.99).unwrap();
        assert!(!equal.new_best);
        assert_eq!(race.best_time(RaceMode::Easy), Some(3.99));
    }

    #[test]
    fn incorrect_submission_never_touches_best_time() {
        let mut race = race();
        let feedback = race.grade_at("틀린 문장", 0.01).unwrap();
        assert!(!feedback.correct);
        assert!(!feedback.new_best);
        assert_eq!(race.best_time(RaceMode::Easy), None);
    }

    #[test]
    fn best_time_never_increases() {
        let mut race = race();
        let times = [7.5, 6.2, 6.9, 4.0, 4.0, 8.8, 3.1];
        let mut prev_best = f64::INFINITY;
        for t in times {
            race.grade_at(EASY, t).unwrap();
            let best = race.best_time(RaceMode::Easy).unwrap();
            assert!(best <= prev_best);
            prev_best = best;
        }
        assert_eq!(prev_best, 3.1);
    }

    #[test]
    fn empty_submission_is_a_no_op() {
        let mut race = race();
        assert!(race.submit("").is_none());
        assert_eq!(race.score().attempts, 0);
        assert!(race.history().is_empty());
        assert!(race.last_feedback().is_none());
    }

    #[test]
    fn whitespace_only_submission_is_graded() {
        let mut race = race();
        let feedback = race.grade_at("   ", 1.0).unwrap();
        assert!(!feedback.correct);
        assert_eq!(race.score().attempts, 1);
    }

    #[test]
    fn incorrect_submission_carries_a_diff() {
        let mut race = race();
        let feedback = race.grade_at("오늘 날씨가 정말 좋아요!", 2.0).unwrap();
        assert!(!feedback.correct);
        let diff = feedback.diff.unwrap();
        assert_eq!(diff.len(), EASY.chars().count());
        assert!(matches!(diff[diff.len() - 1], CharDiff::Mismatch { .. }));
    }

    #[test]
    fn correct_submission_has_no_diff() {
        let mut race = race();
        let feedback = race.grade_at(EASY, 2.0).unwrap();
        assert!(feedback.diff.is_none());
    }

    #[test]
    fn submission_is_trimmed_before_grading() {
        let mut race = race();
        let feedback = race.grade_at(&format!("  {EASY}\n"), 2.0).unwrap();
        assert!(feedback.correct);
    }

    #[test]
    fn mode_switch_changes_bank_and_keeps_best_times() {
        let mut race = race();
        race.grade_at(EASY, 4.21).unwrap();

        race.set_mode(RaceMode::Hard);
        assert_eq!(race.mode(), RaceMode::Hard);
        assert_eq!(race.current().hangul, HARD);
        assert_eq!(race.best_time(RaceMode::Easy), Some(4.21));
        assert_eq!(race.best_time(RaceMode::Hard), None);

        race.grade_at(HARD, 20.5).unwrap();
        assert_eq!(race.best_time(RaceMode::Hard), Some(20.5));

        race.set_mode(RaceMode::Easy);
        assert_eq!(race.best_time(RaceMode::Easy), Some(4.21));
        assert_eq!(race.best_time(RaceMode::Hard), Some(20.5));
    }

    #[test]
    fn switching_to_the_same_mode_keeps_state() {
        let mut race = race();
        race.grade_at("wrong", 1.0).unwrap();
        assert!(race.last_feedback().is_some());
        race.set_mode(RaceMode::Easy);
        assert!(race.last_feedback().is_some());
    }

    #[test]
    fn next_restarts_without_losing_counters() {
        let mut race = race();
        race.grade_at(EASY, 4.21).unwrap();
        race.next();
        assert!(race.last_feedback().is_none());
        assert_eq!(race.score().attempts, 1);
        assert_eq!(race.best_time(RaceMode::Easy), Some(4.21));
    }

    #[test]
    fn live_timer_produces_nonnegative_elapsed() {
        let mut race = race();
        let feedback = race.submit(EASY).unwrap();
        assert!(feedback.elapsed_secs >= 0.0);
    }

    #[test]
    fn rounding_to_two_decimals() {
        assert_eq!(round2(4.214_9), 4.21);
        assert_eq!(round2(4.215_1), 4.22);
        assert_eq!(round2(0.0), 0.0);
    }
}
