//! # times_table_drill
//!
//! A single-player multiplication quiz engine with a terminal front-end.
//!
//! The player picks a multiplication table (2–12) and a question count
//! (5, 10 or 20), then answers that many randomly drawn `a x b` questions,
//! getting right/wrong feedback and a running score after each one.
//!
//! ## How it works
//!
//! 1. A [`SettingsModel`] holds the two picker values and rejects anything
//!    outside the offered choices.
//! 2. [`SettingsModel::start_game`] hands a validated [`GameConfig`] to
//!    [`start_session`] (or [`GameSession::new`] with your own
//!    [`OperandSource`]).
//! 3. The [`GameSession`] state machine moves through `AwaitingAnswer` →
//!    `ShowingFeedback` → … → `Finished`. Calls made in the wrong state are
//!    rejected with [`QuizError::InvalidState`] and change nothing.
//!
//! ## Key features
//!
//! - **Deterministic**: pass `rng_seed: Some(u64)` to replay the exact same
//!   questions, or drive a session from a [`SequenceSource`] in tests.
//! - **Front-end agnostic**: the engine never renders. [`view_adapter`] turns
//!   a session into a JSON view model; [`console`] is a line-based terminal UI.
//!
//! ## Quick start
//!
//! ```rust
//! use times_table_drill::{start_session, SessionRequest, SessionState, SettingsModel};
//!
//! let mut settings = SettingsModel::new();
//! settings.set_table(7).unwrap();
//! settings.set_question_total(10).unwrap();
//!
//! let request = SessionRequest::from(settings.start_game()).seeded(42);
//! let mut session = start_session(request).unwrap();
//!
//! let q = session.question();
//! println!("{} = ?", q);
//! let result = session.submit_answer(i64::from(q.expected_answer())).unwrap();
//! assert!(result.correct);
//! assert_eq!(session.score(), 1);
//!
//! assert_eq!(session.advance().unwrap(), SessionState::AwaitingAnswer);
//! assert_eq!(session.question_index(), 2);
//! ```

pub mod config;
pub mod console;
pub mod logging;
pub mod quiz_engine;
pub mod view_adapter;

pub use quiz_engine::{
    start_session, AnswerResult, GameConfig, GameSession, OperandSource, Question, QuizError,
    RngSource, SeededSession, SequenceSource, SessionRequest, SessionSnapshot, SessionState,
    SettingsModel,
};
pub use view_adapter::{settings_view, to_view_state};

#[cfg(test)]
mod tests;
