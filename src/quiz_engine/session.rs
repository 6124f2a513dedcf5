//! The per-game state machine.
//!
//! ```text
//!                 submit_answer                advance (not last)
//!  AwaitingAnswer ─────────────► ShowingFeedback ──────────────► AwaitingAnswer
//!        ▲                              │
//!        │ restart                      │ advance (last question)
//!        └────────────── Finished ◄─────┘
//! ```
//!
//! Every operation either applies completely or returns a [`QuizError`] and
//! leaves the session untouched.

use tracing::{debug, info, warn};

use crate::quiz_engine::{
    error::QuizError,
    models::{AnswerResult, GameConfig, Question, SessionSnapshot, SessionState},
    operands::{draw_question, OperandSource},
    settings,
};

#[derive(Debug, Clone)]
pub struct GameSession<S> {
    session_id: String,
    config: GameConfig,
    state: SessionState,
    question_index: u32,
    question: Question,
    user_answer: Option<i64>,
    score: u32,
    last_result: Option<AnswerResult>,
    source: S,
}

impl<S: OperandSource> GameSession<S> {
    /// Start a session on question 1 with freshly drawn operands.
    ///
    /// Rejects a pair outside the settings domain so every running session
    /// has `table` in `2..=12` and at least one question.
    pub fn new(config: GameConfig, mut source: S) -> Result<Self, QuizError> {
        let config = settings::validate(config)?;
        let question = draw_question(&mut source, config.table);
        let session_id = format!("MT{:02}", config.table);
        debug!(%session_id, %question, "session created");
        Ok(GameSession {
            session_id,
            config,
            state: SessionState::AwaitingAnswer,
            question_index: 1,
            question,
            user_answer: None,
            score: 0,
            last_result: None,
            source,
        })
    }

    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = session_id.into();
        self
    }

    // -----------------------------------------------------------------------
    // Transitions
    // -----------------------------------------------------------------------

    /// Check `value` against the current question.
    pub fn submit_answer(&mut self, value: i64) -> Result<AnswerResult, QuizError> {
        self.require(SessionState::AwaitingAnswer, "submit an answer")?;

        let expected_answer = self.question.expected_answer();
        let correct = self.question.is_correct(value);
        if correct {
            self.score += 1;
        }
        let result = AnswerResult { correct, expected_answer };

        self.user_answer = Some(value);
        self.last_result = Some(result);
        self.state = SessionState::ShowingFeedback { correct };
        debug!(
            session_id = %self.session_id,
            question = %self.question,
            value,
            correct,
            score = self.score,
            "answer checked"
        );
        Ok(result)
    }

    /// Leave the feedback screen: next question, or `Finished` after the last.
    pub fn advance(&mut self) -> Result<SessionState, QuizError> {
        if !matches!(self.state, SessionState::ShowingFeedback { .. }) {
            return Err(self.reject("advance"));
        }

        if self.is_last_question() {
            self.state = SessionState::Finished;
            info!(
                session_id = %self.session_id,
                score = self.score,
                question_total = self.config.question_total,
                "session finished"
            );
        } else {
            self.question_index += 1;
            self.next_question();
        }
        Ok(self.state)
    }

    /// Replay the same table and length from question 1. Only valid once the
    /// session has finished.
    pub fn restart(&mut self) -> Result<(), QuizError> {
        self.require(SessionState::Finished, "restart")?;
        self.question_index = 1;
        self.score = 0;
        self.next_question();
        info!(session_id = %self.session_id, "session restarted");
        Ok(())
    }

    fn next_question(&mut self) {
        self.question = draw_question(&mut self.source, self.config.table);
        self.user_answer = None;
        self.last_result = None;
        self.state = SessionState::AwaitingAnswer;
        debug!(
            session_id = %self.session_id,
            question_index = self.question_index,
            question = %self.question,
            "question drawn"
        );
    }

    fn require(&self, expected: SessionState, operation: &'static str) -> Result<(), QuizError> {
        if self.state == expected {
            Ok(())
        } else {
            Err(self.reject(operation))
        }
    }

    fn reject(&self, operation: &'static str) -> QuizError {
        warn!(session_id = %self.session_id, state = %self.state, operation, "rejected operation");
        QuizError::InvalidState { operation, state: self.state }
    }
}

impl<S> GameSession<S> {
    // -----------------------------------------------------------------------
    // Read-only projections
    // -----------------------------------------------------------------------

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn table(&self) -> u32 {
        self.config.table
    }

    pub fn question_total(&self) -> u32 {
        self.config.question_total
    }

    /// 1-based.
    pub fn question_index(&self) -> u32 {
        self.question_index
    }

    pub fn question(&self) -> Question {
        self.question
    }

    pub fn first_operand(&self) -> u32 {
        self.question.first
    }

    pub fn second_operand(&self) -> u32 {
        self.question.second
    }

    pub fn user_answer(&self) -> Option<i64> {
        self.user_answer
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn last_result(&self) -> Option<AnswerResult> {
        self.last_result
    }

    pub fn is_last_question(&self) -> bool {
        self.question_index == self.config.question_total
    }

    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Finished
    }

    #[cfg(test)]
    pub(crate) fn source(&self) -> &S {
        &self.source
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session_id: self.session_id.clone(),
            state: self.state,
            table: self.config.table,
            question_index: self.question_index,
            question_total: self.config.question_total,
            first_operand: self.question.first,
            second_operand: self.question.second,
            user_answer: self.user_answer,
            score: self.score,
            last_result: self.last_result,
        }
    }
}
