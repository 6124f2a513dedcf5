//! Shared wording for every front-end.
//!
//! The engine owns no rendering, but the labels shown around a question
//! (progress, feedback alert, action button) depend on session state. Keeping
//! them here means the terminal front-end and the JSON projection always
//! agree.

use crate::quiz_engine::{
    models::{AnswerResult, Question},
    session::GameSession,
};

pub const SETTINGS_TITLE: &str = "Settings";
pub const TABLE_HEADING: &str = "Choose your difficulty";
pub const QUESTION_TOTAL_HEADING: &str = "How many questions do you want";
pub const START_LABEL: &str = "GO!";
pub const SUBMIT_LABEL: &str = "DONE";
pub const CONTINUE_LABEL: &str = "Continue";
pub const FINISH_LABEL: &str = "Finish";
pub const PLAY_AGAIN_LABEL: &str = "Play Again";

/// Alert title for a checked answer.
pub fn feedback_title(result: AnswerResult) -> &'static str {
    if result.correct { "Correct!" } else { "Wrong!" }
}

/// Alert body; always reveals the product, right or wrong.
pub fn feedback_message(result: AnswerResult) -> String {
    format!("The answer is {}", result.expected_answer)
}

/// Label of the button that dismisses feedback.
///
/// On the last question it reads "Finish": dismissing moves to the summary,
/// where "Play Again" is offered.
pub fn action_label<S>(session: &GameSession<S>) -> &'static str {
    if session.is_last_question() { FINISH_LABEL } else { CONTINUE_LABEL }
}

/// e.g. "3 / 10".
pub fn progress_label<S>(session: &GameSession<S>) -> String {
    format!("{} / {}", session.question_index(), session.question_total())
}

/// e.g. "7 x 8".
pub fn prompt(question: Question) -> String {
    question.to_string()
}

pub fn score_label(score: u32) -> String {
    format!("Score: {score}")
}

/// Closing line once a session has finished.
pub fn summary_line<S>(session: &GameSession<S>) -> String {
    format!(
        "You scored {} out of {} on the {} times table.",
        session.score(),
        session.question_total(),
        session.table()
    )
}
