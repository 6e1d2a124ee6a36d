//! Session-scoped quiz and drill engine.
//!
//! Four independent drill sessions over static item banks: romanization to
//! Hangul, multiple-choice vocabulary, a timed transcription race, and a
//! verb-tense selector. Each session owns its own seeded RNG, current item,
//! counters, and attempt history; sessions never share mutable state, and
//! every operation is a synchronous request/response step.
//!
//! A session alternates between two phases: *awaiting input* (a current item
//! is shown, nothing graded yet) and *graded* (the last feedback is
//! available). `submit` grades and moves to the graded phase; `next` picks a
//! fresh item from either phase, discarding ungraded input. Counters survive
//! every transition and reset only when the session is dropped.

pub mod config;
pub mod diff;
pub mod error;
pub mod grade;
pub mod history;
pub mod race;
pub mod romanization;
pub mod score;
pub mod tense;
pub mod vocab;

pub use config::DrillConfig;
pub use diff::{CharDiff, diff_chars};
pub use error::{DrillError, DrillResult};
pub use grade::Feedback;
pub use history::{AttemptRecord, DrillKind, History};
pub use race::{RaceFeedback, RaceMode, TypeRace};
pub use romanization::RomanizationDrill;
pub use score::Scoreboard;
pub use tense::TenseDrill;
pub use vocab::VocabQuiz;
