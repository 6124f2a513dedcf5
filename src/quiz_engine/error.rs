use crate::quiz_engine::models::SessionState;

/// Rejected operations. Both kinds are recoverable: the model is left exactly
/// as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    #[error("invalid {field}: {value} ({allowed})")]
    InvalidConfig {
        field: &'static str,
        value: i64,
        allowed: &'static str,
    },

    #[error("cannot {operation} while {state}")]
    InvalidState {
        operation: &'static str,
        state: SessionState,
    },
}

impl QuizError {
    pub(crate) fn table(value: impl Into<i64>) -> Self {
        QuizError::InvalidConfig {
            field: "table",
            value: value.into(),
            allowed: "expected 2..=12",
        }
    }

    pub(crate) fn question_total(value: impl Into<i64>) -> Self {
        QuizError::InvalidConfig {
            field: "question total",
            value: value.into(),
            allowed: "expected one of 5, 10, 20",
        }
    }

    pub fn is_invalid_state(&self) -> bool {
        matches!(self, QuizError::InvalidState { .. })
    }

    pub fn is_invalid_config(&self) -> bool {
        matches!(self, QuizError::InvalidConfig { .. })
    }
}
