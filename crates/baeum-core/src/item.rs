//! Typed practice items, one variant per drill.
//!
//! Every drill works over exactly one of these record types. Choice-based
//! items guarantee (after bank validation) that `answer` is one of `choices`;
//! free-text items carry the authoritative target string directly.

use serde::{Deserialize, Serialize};

/// An item that can live in a [`Bank`](crate::Bank).
///
/// `validate` is called once per item at bank construction so malformed data
/// fails fast with a data-integrity error instead of surfacing at grading
/// time.
pub trait BankItem {
    /// Check this item's internal invariants. Returns a description of the
    /// violation, if any.
    fn validate(&self) -> Result<(), String>;
}

/// A romanized Korean word and its Hangul spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordPair {
    /// Romanized form shown as the prompt (e.g. "chingu").
    pub romanized: String,
    /// Expected Hangul spelling (e.g. "친구").
    pub hangul: String,
    /// English gloss shown with correct answers.
    pub gloss: String,
}

impl BankItem for WordPair {
    fn validate(&self) -> Result<(), String> {
        if self.romanized.is_empty() {
            return Err("romanized form is empty".to_string());
        }
        if self.hangul.is_empty() {
            return Err("hangul form is empty".to_string());
        }
        Ok(())
    }
}

/// A multiple-choice vocabulary question with four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabQuestion {
    /// English prompt word or phrase.
    pub prompt: String,
    /// The four Korean options, in authored order.
    pub choices: Vec<String>,
    /// The correct option. Must be one of `choices`.
    pub answer: String,
}

impl BankItem for VocabQuestion {
    fn validate(&self) -> Result<(), String> {
        validate_choices(&self.prompt, &self.choices, &self.answer, 4)
    }
}

/// A full Korean sentence for the typing race.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypingSentence {
    /// The sentence to transcribe, exactly as it must be typed.
    pub hangul: String,
    /// English translation shown after grading.
    pub translation: String,
}

impl BankItem for TypingSentence {
    fn validate(&self) -> Result<(), String> {
        if self.hangul.is_empty() {
            return Err("sentence is empty".to_string());
        }
        Ok(())
    }
}

/// A verb-tense question with three options (present, past, future).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TenseQuestion {
    /// English sentence whose tense must be matched.
    pub prompt: String,
    /// The three verb forms, in authored order. Never shuffled.
    pub choices: Vec<String>,
    /// The correct form. Must be one of `choices`.
    pub answer: String,
}

impl BankItem for TenseQuestion {
    fn validate(&self) -> Result<(), String> {
        validate_choices(&self.prompt, &self.choices, &self.answer, 3)
    }
}

/// Shared invariants for choice-based items.
fn validate_choices(
    prompt: &str,
    choices: &[String],
    answer: &str,
    expected_len: usize,
) -> Result<(), String> {
    if prompt.is_empty() {
        return Err("prompt is empty".to_string());
    }
    if choices.len() != expected_len {
        return Err(format!(
            "expected {expected_len} choices, found {}",
            choices.len()
        ));
    }
    if !choices.iter().any(|c| c == answer) {
        return Err(format!("answer '{answer}' is not among the choices"));
    }
    Ok(())
}
