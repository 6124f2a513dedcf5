use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Settings domain
// ---------------------------------------------------------------------------

/// Smallest multiplication table a player can pick.
pub const MIN_TABLE: u32 = 2;
/// Largest multiplication table a player can pick.
pub const MAX_TABLE: u32 = 12;
/// The second operand is always drawn from `1..=MAX_SECOND_OPERAND`.
pub const MAX_SECOND_OPERAND: u32 = 12;
/// Allowed question counts, in picker order.
pub const QUESTION_TOTALS: [u32; 3] = [5, 10, 20];

pub const DEFAULT_TABLE: u32 = 3;
pub const DEFAULT_QUESTION_TOTAL: u32 = 5;

/// The validated pair handed from the settings screen to a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub table: u32,
    pub question_total: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            table: DEFAULT_TABLE,
            question_total: DEFAULT_QUESTION_TOTAL,
        }
    }
}

// ---------------------------------------------------------------------------
// Questions and results
// ---------------------------------------------------------------------------

/// One multiplication question: `first x second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub first: u32,
    pub second: u32,
}

impl Question {
    /// Both operands are at most 12, so the product never exceeds 144.
    pub fn expected_answer(self) -> u32 {
        self.first * self.second
    }

    /// True if `value` is exactly the product. Negative input never matches.
    pub fn is_correct(self, value: i64) -> bool {
        value == i64::from(self.expected_answer())
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {}", self.first, self.second)
    }
}

/// Outcome of the most recent answer check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerResult {
    pub correct: bool,
    pub expected_answer: u32,
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionState {
    AwaitingAnswer,
    ShowingFeedback { correct: bool },
    Finished,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingAnswer                       => write!(f, "AwaitingAnswer"),
            SessionState::ShowingFeedback { correct: true }    => write!(f, "ShowingFeedback(correct)"),
            SessionState::ShowingFeedback { correct: false }   => write!(f, "ShowingFeedback(wrong)"),
            SessionState::Finished                             => write!(f, "Finished"),
        }
    }
}

/// Read-only projection of a session, polled by the presentation layer
/// after each call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub state: SessionState,
    pub table: u32,
    pub question_index: u32,
    pub question_total: u32,
    pub first_operand: u32,
    pub second_operand: u32,
    pub user_answer: Option<i64>,
    pub score: u32,
    pub last_result: Option<AnswerResult>,
}
