pub mod bank;
pub mod guide;
pub mod list;
pub mod play;

use std::path::Path;

use serde::de::DeserializeOwned;

use baeum_core::{Bank, BankItem, CoreResult};

/// The four drills, as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drill {
    Romanization,
    Vocab,
    Race,
    Tense,
}

impl Drill {
    /// Parse a drill name (case-insensitive, with common aliases).
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "romanization" | "rom" | "hangul" => Ok(Self::Romanization),
            "vocab" | "vocabulary" => Ok(Self::Vocab),
            "race" | "typing" | "typeracer" => Ok(Self::Race),
            "tense" | "tenses" => Ok(Self::Tense),
            other => Err(format!(
                "unknown drill '{other}' (use: romanization, vocab, race, tense)"
            )),
        }
    }
}

/// Load a bank from `file` when given, otherwise fall back to the built-in
/// dataset.
fn bank_or_builtin<T>(
    file: Option<&Path>,
    builtin: fn() -> CoreResult<Bank<T>>,
) -> Result<Bank<T>, String>
where
    T: BankItem + DeserializeOwned,
{
    let bank = match file {
        Some(path) => Bank::from_json_file(path),
        None => builtin(),
    };
    bank.map_err(|e| e.to_string())
}
