// Integration tests (native) for the `vocab-drop` crate.
// These tests avoid wasm-specific functionality and exercise pure Rust logic so
// they can run under `cargo test` on the host.

use vocab_drop::quiz::config::{Difficulty, Mode, ModeSelection, SessionConfig, Speed};
use vocab_drop::quiz::session::{DropOutcome, SessionEngine};
use vocab_drop::rng::GameRng;

// A full practice session driven end to end: selection, pool, drops with a
// deliberate mistake, bar ticks, and final score accounting.
#[test]
fn practice_session_end_to_end() {
    let selection = ModeSelection {
        mode: Some(Mode::Practice),
        difficulty: Some(Difficulty::Mover),
        speed: Some(Speed::Slow),
    };
    let config = selection.resolve("food", "Nina").expect("complete selection");
    let mut engine = SessionEngine::new(config, GameRng::seeded(99));
    assert!(!engine.pool_is_empty());

    engine.tick(0.0);
    let mut expected_score = 0i64;
    let mut now = 0.0;
    for _ in 0..12 {
        now += 500.0;
        assert!(!engine.tick(now));
        let idx = engine.matched_pairs().len();
        let set: Vec<_> = engine.current_set().to_vec();
        if idx == 1 && engine.wrong_total() == 0 {
            // One wrong answer along the way.
            match engine.handle_drop(set[idx].id, set[(idx + 1) % set.len()].id) {
                DropOutcome::Incorrect { penalty } => expected_score -= penalty,
                other => panic!("expected incorrect, got {other:?}"),
            }
            continue;
        }
        match engine.handle_drop(set[idx].id, set[idx].id) {
            DropOutcome::Correct { points, .. } => expected_score += points,
            other => panic!("expected correct, got {other:?}"),
        }
    }
    assert_eq!(engine.score(), expected_score);
    assert_eq!(engine.final_score(), expected_score);
    assert!(engine.is_playing());
    assert_eq!(engine.wrong_total(), 1);
}

// Challenge sessions report the count-based score no matter how the running
// score was displayed along the way.
#[test]
fn challenge_session_final_score_rule() {
    let config = SessionConfig {
        mode: Mode::Challenge,
        category: "numbers".to_string(),
        difficulty: Difficulty::Flyer,
        speed: None,
        player: "Ben".to_string(),
    };
    let mut engine = SessionEngine::new(config, GameRng::seeded(4));
    engine.tick(0.0);
    for _ in 0..5 {
        let idx = engine.matched_pairs().len();
        let id = engine.current_set()[idx].id;
        assert!(matches!(
            engine.handle_drop(id, id),
            DropOutcome::Correct { .. }
        ));
    }
    assert_eq!(engine.correct_total(), 5);
    assert!(engine.tick(60_000.0)); // time up
    assert_eq!(engine.final_score(), 500);
    assert!(!engine.is_playing());
}

// Session state stays internally consistent across a pool wraparound.
#[test]
fn long_session_survives_many_reshuffles() {
    let config = SessionConfig {
        mode: Mode::Practice,
        category: "letters".to_string(),
        difficulty: Difficulty::Starter,
        speed: Some(Speed::Slow),
        player: "Ada".to_string(),
    };
    let mut engine = SessionEngine::new(config, GameRng::seeded(21));
    let set_count = engine.set_count();
    assert!(set_count >= 2);

    let mut completed = 0;
    while completed < set_count * 3 {
        let idx = engine.matched_pairs().len();
        let set_len = engine.current_set().len();
        assert!((3..=5).contains(&set_len));
        assert!(idx < set_len);
        let id = engine.current_set()[idx].id;
        if let DropOutcome::Correct {
            set_complete: true, ..
        } = engine.handle_drop(id, id)
        {
            completed += 1;
        }
    }
    assert!(engine.is_playing());
    assert_eq!(engine.correct_total() as usize, completed * 3);
}
