//! Crate-level tests for `times_table_drill`.
//!
//! Included from `lib.rs` under `#[cfg(test)]`.
//!
//! | Group | What is tested |
//! |-------|----------------|
//! | Determinism | Same seed → identical question sequence and ID; different seeds vary |
//! | Arithmetic | Expected answer is the exact product for every table / operand pair |
//! | Scoring | Correct answer adds exactly one; score never passes the question index |
//! | Lifecycle | Finished exactly after `question_total` answers; restart keeps difficulty |
//! | Rejections | Double submit, early advance, early restart are all no-ops |
//! | Scenarios | The 3 x 4 walkthrough; a perfect five-question game |
//! | Entropy | `rng_seed: None` produces a valid session (smoke test) |

use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::quiz_engine::{
    start_session, AnswerResult, GameConfig, GameSession, Question, QuizError, SeededSession,
    SequenceSource, SessionRequest, SessionState, SettingsModel, QUESTION_TOTALS,
};

// ── helpers ──────────────────────────────────────────────────────────────────

fn req(table: u32, question_total: u32, seed: u64) -> SessionRequest {
    SessionRequest { table, question_total, rng_seed: Some(seed) }
}

fn seeded(table: u32, question_total: u32, seed: u64) -> SeededSession {
    start_session(req(table, question_total, seed)).unwrap()
}

/// Answer the current question correctly.
fn answer_right(s: &mut SeededSession) -> AnswerResult {
    let expected = s.question().expected_answer();
    s.submit_answer(i64::from(expected)).unwrap()
}

/// Every question of a seeded session, answering 0 each time.
fn questions_of(mut s: SeededSession) -> Vec<Question> {
    let mut out = Vec::new();
    while !s.is_finished() {
        out.push(s.question());
        s.submit_answer(0).unwrap();
        s.advance().unwrap();
    }
    out
}

const SEEDS: [u64; 5] = [1, 42, 999, 0xDEAD_BEEF, 7];

// ── determinism ──────────────────────────────────────────────────────────────

#[test]
fn same_seed_produces_identical_session() {
    for seed in SEEDS {
        let a = seeded(8, 20, seed);
        let b = seeded(8, 20, seed);
        assert_eq!(a.session_id(), b.session_id(), "session_id mismatch for seed={seed}");
        assert_eq!(questions_of(a), questions_of(b), "questions mismatch for seed={seed}");
    }
}

#[test]
fn different_seeds_produce_varied_questions() {
    let mut same_count = 0usize;
    let pairs = 40u64;
    for seed in 0..pairs {
        let a = questions_of(seeded(12, 10, seed));
        let b = questions_of(seeded(12, 10, seed + 500));
        if a == b {
            same_count += 1;
        }
    }
    assert!(same_count < 2, "Too many identical sequences across seeds ({same_count}/{pairs})");
}

#[test]
fn session_id_carries_table_number() {
    let s = seeded(7, 5, 1);
    assert!(s.session_id().starts_with("MT07-"), "unexpected id {}", s.session_id());
    assert_eq!(s.session_id().len(), "MT07-".len() + 8);
}

#[test]
fn entropy_seed_produces_a_valid_session() {
    let s = start_session(SessionRequest::new()).unwrap();
    assert_eq!(s.table(), 3);
    assert_eq!(s.question_total(), 5);
    assert_eq!(s.state(), SessionState::AwaitingAnswer);
    assert!((1..=3).contains(&s.first_operand()));
    assert!((1..=12).contains(&s.second_operand()));
}

#[test]
fn start_session_rejects_bad_request() {
    let err = start_session(req(1, 5, 1)).unwrap_err();
    assert!(matches!(err, QuizError::InvalidConfig { field: "table", value: 1, .. }), "{err:?}");
    let err = start_session(req(5, 12, 1)).unwrap_err();
    assert!(err.is_invalid_config(), "{err:?}");
}

// ── arithmetic ───────────────────────────────────────────────────────────────

#[test]
fn expected_answer_is_exact_product_for_every_pair() {
    for table in 2..=12u32 {
        for second in 1..=12u32 {
            let config = GameConfig { table, question_total: 5 };
            let mut s = GameSession::new(config, SequenceSource::new([table, second])).unwrap();
            assert_eq!(s.question(), Question { first: table, second });
            let result = s.submit_answer(i64::from(table * second)).unwrap();
            assert!(result.correct, "{table} x {second}");
            assert_eq!(result.expected_answer, table * second);
        }
    }
}

#[test]
fn operands_stay_within_table_for_every_draw() {
    for table in 2..=12 {
        for seed in SEEDS {
            for q in questions_of(seeded(table, 20, seed)) {
                assert!((1..=table).contains(&q.first), "first {} out of range for {table}", q.first);
                assert!((1..=12).contains(&q.second), "second {} out of range", q.second);
            }
        }
    }
}

// ── scoring ──────────────────────────────────────────────────────────────────

#[test]
fn correct_answer_adds_exactly_one() {
    for seed in SEEDS {
        let mut s = seeded(9, 10, seed);
        while !s.is_finished() {
            let before = s.score();
            answer_right(&mut s);
            assert_eq!(s.score(), before + 1);
            s.advance().unwrap();
        }
        assert_eq!(s.score(), 10);
    }
}

#[test]
fn score_never_exceeds_question_index() {
    let mut pick = StdRng::seed_from_u64(3);
    for seed in SEEDS {
        let mut s = seeded(6, 20, seed);
        while !s.is_finished() {
            assert!(s.score() <= s.question_index());
            if pick.gen_bool(0.5) {
                answer_right(&mut s);
            } else {
                s.submit_answer(-1).unwrap();
            }
            assert!(s.score() <= s.question_index());
            s.advance().unwrap();
        }
        assert!(s.score() <= s.question_total());
    }
}

// ── lifecycle ────────────────────────────────────────────────────────────────

#[test]
fn finishes_after_exactly_question_total_answers() {
    for total in QUESTION_TOTALS {
        let mut s = seeded(4, total, 11);
        for n in 1..=total {
            assert!(!s.is_finished(), "finished early at question {n} of {total}");
            assert_eq!(s.question_index(), n);
            s.submit_answer(0).unwrap();
            s.advance().unwrap();
        }
        assert!(s.is_finished(), "not finished after {total} questions");
    }
}

#[test]
fn restart_resets_score_and_index_and_keeps_difficulty() {
    let mut s = seeded(11, 10, 5);
    while !s.is_finished() {
        answer_right(&mut s);
        s.advance().unwrap();
    }
    assert_eq!(s.score(), 10);

    s.restart().unwrap();
    assert_eq!(s.score(), 0);
    assert_eq!(s.question_index(), 1);
    assert_eq!(s.table(), 11);
    assert_eq!(s.question_total(), 10);
    assert_eq!(s.state(), SessionState::AwaitingAnswer);
}

#[test]
fn settings_hand_off_matches_session() {
    let mut settings = SettingsModel::new();
    settings.set_table(12).unwrap();
    settings.set_question_total(20).unwrap();
    let s = start_session(SessionRequest::from(settings.start_game()).seeded(9)).unwrap();
    assert_eq!((s.table(), s.question_total()), (12, 20));
}

// ── rejections ───────────────────────────────────────────────────────────────

#[test]
fn double_submit_is_rejected_and_score_unchanged() {
    let mut s = seeded(5, 5, 42);
    answer_right(&mut s);
    let snapshot = s.snapshot();
    let again = i64::from(s.question().expected_answer());
    let err = s.submit_answer(again).unwrap_err();
    assert!(err.is_invalid_state());
    assert_eq!(s.snapshot(), snapshot, "rejected call must not mutate the session");
}

#[test]
fn rejected_calls_leave_session_untouched() {
    let mut s = seeded(5, 5, 42);
    let before = s.snapshot();
    assert!(s.advance().unwrap_err().is_invalid_state());
    assert!(s.restart().unwrap_err().is_invalid_state());
    assert_eq!(s.snapshot(), before);
}

// ── scenarios ────────────────────────────────────────────────────────────────

#[test]
fn walkthrough_three_times_four() {
    let config = GameConfig { table: 5, question_total: 5 };
    let mut s = GameSession::new(config, SequenceSource::new([3, 4, 3, 4])).unwrap();
    assert_eq!((s.first_operand(), s.second_operand()), (3, 4));

    let result = s.submit_answer(12).unwrap();
    assert!(result.correct);
    assert_eq!(s.score(), 1);
    assert_eq!(s.state(), SessionState::ShowingFeedback { correct: true });

    assert_eq!(s.advance().unwrap(), SessionState::AwaitingAnswer);
    assert_eq!(s.question_index(), 2);
    assert_eq!((s.first_operand(), s.second_operand()), (3, 4));

    s.submit_answer(1).unwrap();
    assert_eq!(s.score(), 1);
    assert_eq!(s.last_result(), Some(AnswerResult { correct: false, expected_answer: 12 }));
    assert_eq!(s.state(), SessionState::ShowingFeedback { correct: false });
}

#[test]
fn five_correct_answers_finish_with_full_score() {
    let mut s = seeded(5, 5, 1234);
    for _ in 0..5 {
        assert!(answer_right(&mut s).correct);
        s.advance().unwrap();
    }
    assert_eq!(s.score(), 5);
    assert_eq!(s.state(), SessionState::Finished);
}

#[test]
fn snapshot_serializes_with_state_tag() {
    let mut s = GameSession::new(GameConfig::default(), SequenceSource::new([2, 7]))
        .unwrap()
        .with_session_id("MT03-TEST");
    s.submit_answer(14).unwrap();
    let json = serde_json::to_value(s.snapshot()).unwrap();
    assert_eq!(json["state"]["kind"], "showing_feedback");
    assert_eq!(json["state"]["correct"], true);
    assert_eq!(json["last_result"]["expected_answer"], 14);
    assert_eq!(json["user_answer"], 14);
}
