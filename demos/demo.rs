//! Scripted walkthrough of the quiz engine.
//!
//! Run with: `cargo run --example demo`
//!
//! 1. **Settings hand-off**: pick table 7 and ten questions, then start a
//!    seeded session from the picked values.
//! 2. **A full game**: answer every question (every third one wrong on
//!    purpose), printing the JSON view model the way a reactive front-end
//!    would receive it.
//! 3. **Rejected calls**: show that out-of-order operations are refused and
//!    leave the session as it was.
//!
//! `rng_seed: Some(u64)` makes the output reproducible run to run.

use times_table_drill::{
    start_session, to_view_state, settings_view, SessionRequest, SessionState, SettingsModel,
};

fn main() {
    // ── Settings ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Settings ══");
    println!();

    let mut settings = SettingsModel::new();
    println!("{}", settings_view(&settings));
    if let Err(e) = settings.set_table(15) {
        println!("  set_table(15) rejected: {e}");
    }
    settings.set_table(7).expect("7 is a valid table");
    settings.set_question_total(10).expect("10 is an offered count");
    let game = settings.start_game();
    println!("  Starting: table {} / {} questions", game.table, game.question_total);

    // ── One game ─────────────────────────────────────────────────────────────
    println!();
    println!("══ Seeded game (seed=7007) ══");
    println!();

    let mut session = start_session(SessionRequest::from(game).seeded(7007))
        .expect("settings produced a valid request");
    println!("  Session: {}", session.session_id());

    while session.state() == SessionState::AwaitingAnswer {
        let q = session.question();
        let answer = if session.question_index() % 3 == 0 {
            i64::from(q.expected_answer()) + 1
        } else {
            i64::from(q.expected_answer())
        };
        session.submit_answer(answer).expect("awaiting an answer");

        let view = to_view_state(&session);
        println!(
            "  [{}] {} = {:<4} {} {}",
            view["progress"].as_str().unwrap_or_default(),
            view["prompt"].as_str().unwrap_or_default(),
            answer,
            view["alert"]["title"].as_str().unwrap_or_default(),
            view["score"].as_str().unwrap_or_default(),
        );
        session.advance().expect("showing feedback");
    }

    let view = to_view_state(&session);
    println!();
    println!("  {}", view["summary"]["text"].as_str().unwrap_or_default());

    // ── Rejections ───────────────────────────────────────────────────────────
    println!();
    println!("══ Rejected calls ══");
    println!();

    if let Err(e) = session.submit_answer(1) {
        println!("  submit_answer after finish: {e}");
    }
    session.restart().expect("finished sessions can restart");
    if let Err(e) = session.advance() {
        println!("  advance before answering:   {e}");
    }
    println!("  After restart: question {} / {}, score {}",
        session.question_index(), session.question_total(), session.score());
}
