//! Running counters for a drill session.

use serde::{Deserialize, Serialize};

/// Correct/attempt counters plus the current streak.
///
/// `correct` and `attempts` are monotonically non-decreasing for the lifetime
/// of the session; `streak` is the length of the trailing run of correct
/// submissions and resets to 0 on any incorrect one. Nothing resets the
/// counters but starting a new session.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Total correct submissions.
    pub correct: u32,
    /// Total graded submissions.
    pub attempts: u32,
    /// Consecutive correct submissions since the last incorrect one.
    pub streak: u32,
}

impl Scoreboard {
    /// Create a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one graded submission.
    pub fn record(&mut self, correct: bool) {
        self.attempts += 1;
        if correct {
            self.correct += 1;
            self.streak += 1;
        } else {
            self.streak = 0;
        }
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} correct out of {} attempts (streak {})",
            self.correct, self.attempts, self.streak
        )
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn starts_at_zero() {
        let score = Scoreboard::new();
        assert_eq!(score.correct, 0);
        assert_eq!(score.attempts, 0);
        assert_eq!(score.streak, 0);
    }

    #[test]
    fn correct_increments_all() {
        let mut score = Scoreboard::new();
        score.record(true);
        score.record(true);
        assert_eq!(score.correct, 2);
        assert_eq!(score.attempts, 2);
        assert_eq!(score.streak, 2);
    }

    #[test]
    fn incorrect_resets_streak_only() {
        let mut score = Scoreboard::new();
        score.record(true);
        score.record(true);
        score.record(false);
        assert_eq!(score.correct, 2);
        assert_eq!(score.attempts, 3);
        assert_eq!(score.streak, 0);

        score.record(true);
        assert_eq!(score.streak, 1);
    }

    #[test]
    fn display_format() {
        let mut score = Scoreboard::new();
        score.record(true);
        score.record(false);
        assert_eq!(
            score.to_string(),
            "1 correct out of 2 attempts (streak 0)"
        );
    }

    proptest! {
        /// `streak` equals the length of the trailing run of correct
        /// submissions, and the counters stay consistent, for any sequence.
        #[test]
        fn streak_is_trailing_run(outcomes in proptest::collection::vec(any::<bool>(), 0..200)) {
            let mut score = Scoreboard::new();
            for &correct in &outcomes {
                let before = score;
                score.record(correct);
                // Monotonicity: attempts moves by exactly 1, correct never drops.
                prop_assert_eq!(score.attempts, before.attempts + 1);
                prop_assert!(score.correct >= before.correct);
            }

            let trailing = outcomes.iter().rev().take_while(|&&c| c).count() as u32;
            let total_correct = outcomes.iter().filter(|&&c| c).count() as u32;
            prop_assert_eq!(score.streak, trailing);
            prop_assert_eq!(score.correct, total_correct);
            prop_assert_eq!(score.attempts, outcomes.len() as u32);
            prop_assert!(score.correct <= score.attempts);
        }
    }
}
