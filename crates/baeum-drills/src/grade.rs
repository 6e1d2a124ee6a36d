//! Grading rules shared by the four drills.
//!
//! Grading is a pure comparison with no partial credit, fuzzy matching, or
//! normalization. Free-text submissions are trimmed of leading and trailing
//! whitespace before comparison; the expected string is compared as authored.

use serde::{Deserialize, Serialize};

/// Grade a free-text submission against the expected string.
///
/// Case- and whitespace-sensitive apart from trimming the submission.
pub fn text(expected: &str, submitted: &str) -> bool {
    submitted.trim() == expected
}

/// Grade a selected option against the item's answer.
pub fn choice(expected: &str, selected: &str) -> bool {
    selected == expected
}

/// The outcome of grading one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Whether the submission matched the expected value.
    pub correct: bool,
    /// The expected value, for display alongside incorrect answers.
    pub expected: String,
    /// The value the user submitted, as graded.
    pub submitted: String,
}

impl Feedback {
    /// Grade a free-text submission and package the result.
    pub fn from_text(expected: &str, submitted: &str) -> Self {
        Self {
            correct: text(expected, submitted),
            expected: expected.to_string(),
            submitted: submitted.trim().to_string(),
        }
    }

    /// Grade a selected option and package the result.
    pub fn from_choice(expected: &str, selected: &str) -> Self {
        Self {
            correct: choice(expected, selected),
            expected: expected.to_string(),
            submitted: selected.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_match() {
        assert!(text("친구", "친구"));
        assert!(choice("친구", "친구"));
    }

    #[test]
    fn submission_is_trimmed() {
        assert!(text("친구", " 친구"));
        assert!(text("친구", "친구  "));
        assert!(text("친구", "\t친구\n"));
    }

    #[test]
    fn expected_is_not_trimmed() {
        // An authored trailing space is part of the expected value.
        assert!(!text("친구 ", "친구"));
        assert!(!text("친구 ", "친구 "));
    }

    #[test]
    fn case_sensitive() {
        assert!(!text("Annyeong", "annyeong"));
    }

    #[test]
    fn interior_whitespace_matters() {
        assert!(!text("잘 지내", "잘  지내"));
        assert!(!text("잘 지내", "잘지내"));
    }

    #[test]
    fn no_fuzzy_matching() {
        assert!(!text("맛있어요", "맛있어"));
        assert!(!choice("먹어요", "먹었습니다"));
    }

    #[test]
    fn grading_is_idempotent() {
        for (expected, submitted) in [("친구", "친구"), ("친구", "엄마"), ("", "")] {
            assert_eq!(text(expected, submitted), text(expected, submitted));
        }
    }

    #[test]
    fn feedback_records_trimmed_submission() {
        let fb = Feedback::from_text("친구", " 친구");
        assert!(fb.correct);
        assert_eq!(fb.expected, "친구");
        assert_eq!(fb.submitted, "친구");
    }

    #[test]
    fn feedback_for_wrong_choice() {
        let fb = Feedback::from_choice("아빠", "엄마");
        assert!(!fb.correct);
        assert_eq!(fb.expected, "아빠");
        assert_eq!(fb.submitted, "엄마");
    }
}
