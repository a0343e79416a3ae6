//! Browser boundary for the quiz engine.
//!
//! The engine itself (pool, sets, scoring, combo, timers) is pure Rust in
//! the submodules; this module owns the one active session in a
//! `thread_local!`, drives its timers from an animation-frame loop, and
//! exposes wasm-bindgen entry points the JS frontend calls for drops,
//! pause/resume, snapshots, and the leaderboard.
//!
//! Cancellation: each started session bumps an epoch counter; the frame
//! loop captures the epoch it was started for and stops the moment the
//! session it belongs to is gone or superseded, so late callbacks never
//! touch a newer session.

pub mod combo;
pub mod config;
pub mod pool;
pub mod session;
pub mod timer;

use std::cell::{Cell, RefCell};

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::leaderboard::{Leaderboard, Player};
use crate::rng::GameRng;
use crate::speech;
use crate::storage::LocalStore;
use config::{Difficulty, Mode, ModeSelection, Speed};
use session::{DropOutcome, SessionEngine};

struct ActiveSession {
    engine: SessionEngine,
    epoch: u64,
    recorded: bool,
}

// RefCell::new isn't const-friendly for the Option pattern used here; same
// shape as other session singletons in this codebase.
thread_local! {
    static ACTIVE: RefCell<Option<ActiveSession>> = RefCell::new(None);
    static EPOCH: Cell<u64> = Cell::new(0);
}

fn warn(msg: &str) {
    web_sys::console::warn_1(&JsValue::from_str(msg));
}

// --- Session lifecycle --------------------------------------------------------

/// Start a new session. `speed` is only honored in practice mode; study mode
/// ignores `difficulty` as well. Incomplete selections are rejected so the
/// UI keeps its mode picker open.
#[wasm_bindgen]
pub fn start_session(
    mode: &str,
    category: &str,
    difficulty: &str,
    speed: &str,
    player: &str,
) -> Result<(), JsValue> {
    let selection = ModeSelection {
        mode: Mode::parse(mode),
        difficulty: Difficulty::parse(difficulty),
        speed: Speed::parse(speed),
    };
    let config = selection
        .resolve(category, player)
        .ok_or_else(|| JsValue::from_str("incomplete mode selection"))?;
    let engine = SessionEngine::new(config, GameRng::from_entropy());
    if engine.pool_is_empty() {
        // Usable-but-empty state: the session starts, the frontend shows
        // "no items" from the snapshot.
        warn("category has no items; starting empty session");
    }
    let epoch = EPOCH.with(|e| {
        let next = e.get() + 1;
        e.set(next);
        next
    });
    ACTIVE.with(|cell| {
        cell.replace(Some(ActiveSession {
            engine,
            epoch,
            recorded: false,
        }))
    });
    ensure_overlays()?;
    update_overlays();
    start_tick_loop(epoch);
    Ok(())
}

/// End the active session early (back-to-home, mode switch). Scored modes
/// still record their result.
#[wasm_bindgen]
pub fn end_session() {
    ACTIVE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            active.engine.stop();
            record_result(active);
        }
        // Dropping the session invalidates the epoch check in the loop.
        cell.replace(None);
    });
}

#[wasm_bindgen]
pub fn pause_session() {
    ACTIVE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            active.engine.pause();
        }
    });
}

#[wasm_bindgen]
pub fn resume_session() {
    ACTIVE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            active.engine.resume();
        }
    });
}

/// Study-mode browsing: show the next set.
#[wasm_bindgen]
pub fn next_set() {
    ACTIVE.with(|cell| {
        if let Some(active) = cell.borrow_mut().as_mut() {
            active.engine.browse_next_set();
        }
    });
}

// --- Drop handling -----------------------------------------------------------

/// Evaluate a drop of `item_id` onto `zone_id`. Returns a JSON outcome for
/// the frontend. All engine state is mutated before the pronunciation is
/// scheduled, so a quick follow-up drop always sees consistent state.
#[wasm_bindgen]
pub fn drop_item(item_id: &str, zone_id: &str) -> String {
    let result = ACTIVE.with(|cell| {
        let mut cell = cell.borrow_mut();
        let Some(active) = cell.as_mut() else {
            return None;
        };
        let outcome = active.engine.handle_drop(item_id, zone_id);
        Some((outcome, active.engine.score(), active.engine.combo_multiplier()))
    });
    let Some((outcome, score, multiplier)) = result else {
        return serde_json::json!({ "status": "ignored", "reason": "no_session" }).to_string();
    };
    let json = match outcome {
        DropOutcome::Correct {
            points,
            label,
            set_complete,
        } => {
            // Fire-and-forget; scoring above never waits on this.
            speech::speak(label);
            serde_json::json!({
                "status": "correct",
                "points": points,
                "setComplete": set_complete,
                "score": score,
                "multiplier": multiplier,
            })
        }
        DropOutcome::Incorrect { penalty } => serde_json::json!({
            "status": "incorrect",
            "penalty": penalty,
            "score": score,
            "multiplier": multiplier,
        }),
        DropOutcome::Ignored(reason) => serde_json::json!({
            "status": "ignored",
            "reason": reason,
        }),
    };
    update_overlays();
    json.to_string()
}

// --- Snapshots ----------------------------------------------------------------

/// Current set items (display order) and drop zones (independently shuffled
/// order) as JSON, plus an overall status string.
#[wasm_bindgen]
pub fn current_set_json() -> String {
    ACTIVE.with(|cell| {
        let cell = cell.borrow();
        let Some(active) = cell.as_ref() else {
            return serde_json::json!({ "status": "no_session" }).to_string();
        };
        let engine = &active.engine;
        let status = if engine.pool_is_empty() {
            "empty"
        } else if engine.is_playing() {
            "playing"
        } else {
            "over"
        };
        serde_json::json!({
            "status": status,
            "items": engine.current_set(),
            "zones": engine.zones(),
            "matched": engine.matched_pairs().len(),
        })
        .to_string()
    })
}

/// Score, combo, timers, and flags as JSON.
#[wasm_bindgen]
pub fn session_status_json() -> String {
    ACTIVE.with(|cell| {
        let cell = cell.borrow();
        let Some(active) = cell.as_ref() else {
            return serde_json::json!({ "status": "no_session" }).to_string();
        };
        let engine = &active.engine;
        serde_json::json!({
            "mode": engine.config().mode,
            "playing": engine.is_playing(),
            "paused": engine.is_paused(),
            "score": engine.score(),
            "finalScore": engine.final_score(),
            "multiplier": engine.combo_multiplier(),
            "perfectSets": engine.consecutive_perfect_sets(),
            "setIndex": engine.set_index(),
            "correct": engine.correct_total(),
            "wrong": engine.wrong_total(),
            "remainingSecs": engine.remaining_secs(),
            "barLevel": engine.bar_level(),
        })
        .to_string()
    })
}

// --- Leaderboard --------------------------------------------------------------

/// Full leaderboard as JSON, insertion order. Read failures degrade to an
/// empty list.
#[wasm_bindgen]
pub fn leaderboard_json() -> String {
    let (board, err) = Leaderboard::load(LocalStore);
    if let Some(e) = err {
        warn(&format!("leaderboard load failed, starting fresh: {e}"));
    }
    serde_json::to_string(board.players()).unwrap_or_else(|_| "[]".to_string())
}

/// Empty the leaderboard. Idempotent; failures are logged, not raised.
#[wasm_bindgen]
pub fn clear_leaderboard() {
    let (mut board, err) = Leaderboard::load(LocalStore);
    if let Some(e) = err {
        warn(&format!("leaderboard load failed: {e}"));
    }
    if let Err(e) = board.clear() {
        warn(&format!("leaderboard clear failed: {e}"));
    }
}

fn record_result(active: &mut ActiveSession) {
    if active.recorded {
        return;
    }
    active.recorded = true;
    let cfg = active.engine.config();
    if cfg.mode == Mode::Study {
        return;
    }
    let (mut board, load_err) = Leaderboard::load(LocalStore);
    if let Some(e) = load_err {
        warn(&format!("leaderboard load failed, starting fresh: {e}"));
    }
    let record = Player {
        name: cfg.player.clone(),
        score: active.engine.final_score(),
        mode: cfg.mode.as_str().to_string(),
        category: cfg.category.clone(),
        difficulty: cfg.difficulty.as_str().to_string(),
        speed: cfg.speed.map(|s| s.as_str().to_string()).unwrap_or_default(),
        timestamp: js_sys::Date::now(),
    };
    // Best effort: on write failure the in-memory list already holds the
    // record and the warning is all the user sees.
    if let Err(e) = board.add_player(record) {
        warn(&format!("leaderboard write failed: {e}"));
    }
}

// --- Tick loop & overlays ------------------------------------------------------

type FrameCallback = std::rc::Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn start_tick_loop(epoch: u64) {
    let f: FrameCallback = std::rc::Rc::new(RefCell::new(None));
    let g = f.clone();
    *g.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        let keep_going = ACTIVE.with(|cell| {
            let mut cell = cell.borrow_mut();
            match cell.as_mut() {
                // Only the session this loop was started for is ours.
                Some(active) if active.epoch == epoch => {
                    if active.engine.tick(ts) {
                        record_result(active);
                    }
                    active.engine.is_playing()
                }
                _ => false,
            }
        });
        update_overlays();
        if keep_going {
            if let Some(w) = window() {
                let _ = w
                    .request_animation_frame(f.borrow().as_ref().unwrap().as_ref().unchecked_ref());
            }
        }
    }) as Box<dyn FnMut(f64)>));
    if let Some(w) = window() {
        let _ = w.request_animation_frame(g.borrow().as_ref().unwrap().as_ref().unchecked_ref());
    }
}

fn ensure_overlays() -> Result<(), JsValue> {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return Ok(());
    };
    if doc.get_element_by_id("vd-score").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("vd-score");
            div.set_text_content(Some("Score: 0"));
            div.set_attribute("style", "position:fixed; top:10px; left:12px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#ffd166; z-index:45; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    if doc.get_element_by_id("vd-timer").is_none() {
        if let Some(body) = doc.body() {
            let div = doc.create_element("div")?;
            div.set_id("vd-timer");
            div.set_text_content(Some(""));
            div.set_attribute("style", "position:fixed; top:10px; left:170px; font-family:'Fira Code', monospace; font-size:15px; padding:4px 8px; background:rgba(0,0,0,0.42); border:1px solid #333; border-radius:6px; color:#9ad1ff; z-index:44; letter-spacing:0.5px;").ok();
            body.append_child(&div)?;
        }
    }
    Ok(())
}

fn update_overlays() {
    let Some(doc) = window().and_then(|w| w.document()) else {
        return;
    };
    ACTIVE.with(|cell| {
        let cell = cell.borrow();
        let Some(active) = cell.as_ref() else {
            return;
        };
        let engine = &active.engine;
        if let Some(el) = doc.get_element_by_id("vd-score") {
            el.set_text_content(Some(&format!("Score: {}", engine.score())));
        }
        if let Some(el) = doc.get_element_by_id("vd-timer") {
            let text = if !engine.is_playing() {
                "Time up!".to_string()
            } else if let Some(secs) = engine.remaining_secs() {
                format!("{secs}s")
            } else if let Some(level) = engine.bar_level() {
                format!("{level:.0}%")
            } else {
                String::new()
            };
            el.set_text_content(Some(&text));
        }
    });
}
