//! Vocab Drop core crate.
//!
//! Drag-and-drop vocabulary matching game for young learners: the frontend
//! shows a handful of labeled items (animals, colors, letters, numbers,
//! clothing, food) and matching drop zones; the player drags each item onto
//! its zone across timed or untimed sessions. Everything that decides the
//! game (pool building, set scheduling, match evaluation, combo streaks,
//! timers, mode configuration, leaderboard persistence) lives in pure Rust
//! modules that run under native `cargo test`. The `quiz` module wires the
//! engine to the browser through wasm-bindgen (session lifecycle, the
//! animation-frame tick loop, localStorage, speech synthesis).

use wasm_bindgen::prelude::*;

pub mod catalog;
pub mod leaderboard;
pub mod quiz;
pub mod rng;
pub mod speech;
pub mod storage;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
