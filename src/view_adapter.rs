use serde_json::{json, Value};
use crate::quiz_engine::{
    helpers::{
        action_label, feedback_message, feedback_title, progress_label, prompt, score_label,
        summary_line, PLAY_AGAIN_LABEL, QUESTION_TOTAL_HEADING, SETTINGS_TITLE, START_LABEL,
        SUBMIT_LABEL, TABLE_HEADING,
    },
    models::{AnswerResult, SessionState, MAX_TABLE, MIN_TABLE, QUESTION_TOTALS},
    session::GameSession,
    settings::SettingsModel,
};

/// Short state tag used by the client to pick a screen.
fn screen_str(state: SessionState) -> &'static str {
    match state {
        SessionState::AwaitingAnswer          => "question",
        SessionState::ShowingFeedback { .. }  => "feedback",
        SessionState::Finished                => "finished",
    }
}

/// Build the feedback alert block.
fn feedback_alert<S>(session: &GameSession<S>, result: AnswerResult) -> Value {
    json!({
        "title": feedback_title(result),
        "message": feedback_message(result),
        "button": action_label(session),
        "correct": result.correct
    })
}

/// Map the settings screen to a ready-to-render JSON object.
pub fn settings_view(settings: &SettingsModel) -> Value {
    let tables: Vec<u32> = (MIN_TABLE..=MAX_TABLE).collect();
    json!({
        "screen": "settings",
        "title": SETTINGS_TITLE,
        "table": {
            "heading": TABLE_HEADING,
            "choices": tables,
            "selected": settings.table()
        },
        "question_total": {
            "heading": QUESTION_TOTAL_HEADING,
            "choices": QUESTION_TOTALS,
            "selected": settings.question_total()
        },
        "start_button": START_LABEL
    })
}

/// Map a running session to a ready-to-render JSON object.
///
/// `alert` is only present while feedback is showing and `summary` only once
/// the session has finished; both are `null` otherwise, so a client can bind
/// visibility directly to them.
pub fn to_view_state<S>(session: &GameSession<S>) -> Value {
    let state = session.state();

    let alert = match (state, session.last_result()) {
        (SessionState::ShowingFeedback { .. }, Some(result)) => feedback_alert(session, result),
        _ => Value::Null,
    };

    let summary = if state == SessionState::Finished {
        json!({
            "score": session.score(),
            "question_total": session.question_total(),
            "text": summary_line(session),
            "button": PLAY_AGAIN_LABEL
        })
    } else {
        Value::Null
    };

    json!({
        "screen": screen_str(state),
        "session_id": session.session_id(),
        "progress": progress_label(session),
        "prompt": prompt(session.question()),
        "score": score_label(session.score()),
        "user_answer": session.user_answer(),
        "submit_button": SUBMIT_LABEL,
        "alert": alert,
        "summary": summary,
        "snapshot": session.snapshot()
    })
}
