//! Core quiz engine: settings validation, operand drawing and the per-game
//! state machine.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | Shared types: config, question, answer result, state tag, snapshot |
//! | `error`     | `QuizError` — rejected configuration values and invalid transitions |
//! | `operands`  | `OperandSource` trait, rand-backed and scripted sources |
//! | `settings`  | `SettingsModel` — the two values picked before a game |
//! | `session`   | `GameSession` — question / feedback / finished state machine |
//! | `generator` | `start_session()` — seeded or entropy-backed session entry point |
//! | `helpers`   | Feedback and label wording shared by all front-ends |

pub mod error;
pub mod generator;
pub mod helpers;
pub mod models;
pub mod operands;
pub mod session;
pub mod settings;

pub use error::QuizError;
pub use generator::{start_session, SeededSession, SessionRequest};
pub use models::{
    AnswerResult, GameConfig, Question, SessionSnapshot, SessionState,
    DEFAULT_QUESTION_TOTAL, DEFAULT_TABLE, MAX_SECOND_OPERAND, MAX_TABLE, MIN_TABLE,
    QUESTION_TOTALS,
};
pub use operands::{OperandSource, RngSource, SequenceSource};
pub use session::GameSession;
pub use settings::SettingsModel;
