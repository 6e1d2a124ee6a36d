//! Item model and static item banks for the baeum drill engine.
//!
//! Provides the typed practice items used by the four drills (word pairs,
//! multiple-choice questions, typing sentences), the immutable [`Bank`]
//! collection they live in, and the built-in Korean datasets. Banks validate
//! their items once at construction and are never mutated afterwards.

pub mod bank;
pub mod data;
pub mod error;
pub mod item;

pub use bank::Bank;
pub use error::{CoreError, CoreResult};
pub use item::{BankItem, TenseQuestion, TypingSentence, VocabQuestion, WordPair};
