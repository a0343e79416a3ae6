//! Item pool construction.
//!
//! A pool is the flat, shuffled list of items a session plays through,
//! partitioned into sets of three. Difficulty tiers are cumulative: `mover`
//! plays starter plus mover words, `flyer` plays everything. Starter pools
//! are capped so the youngest players see a short, repeating vocabulary.

use crate::catalog::{self, ItemDef};
use crate::quiz::config::Difficulty;
use crate::rng::GameRng;

/// Items presented per set. A trailing partial group merges into the
/// previous set, so real set sizes are 3..=5.
pub const SET_SIZE: usize = 3;

/// Pool cap applied at starter difficulty.
pub const STARTER_CAP: usize = 12;

/// Build the session pool for a category and difficulty: concatenate tiers
/// up to the selected one, shuffle globally, cap for starter.
///
/// An unknown or empty category yields an empty pool. That is a reportable
/// state, not an error; the session starts and shows "no items".
pub fn build_pool(category_id: &str, difficulty: Difficulty, rng: &mut GameRng) -> Vec<ItemDef> {
    let Some(cat) = catalog::find(category_id) else {
        return Vec::new();
    };
    let mut items: Vec<ItemDef> = Vec::new();
    items.extend_from_slice(cat.starter);
    if matches!(difficulty, Difficulty::Mover | Difficulty::Flyer) {
        items.extend_from_slice(cat.mover);
    }
    if matches!(difficulty, Difficulty::Flyer) {
        items.extend_from_slice(cat.flyer);
    }
    rng.shuffle(&mut items);
    if difficulty == Difficulty::Starter {
        items.truncate(STARTER_CAP);
    }
    items
}

/// Partition a flat pool into sets of [`SET_SIZE`], merging a trailing
/// partial group into the previous set. A pool smaller than one set becomes
/// a single undersized set (or no sets at all when empty).
pub fn partition_sets(items: Vec<ItemDef>) -> Vec<Vec<ItemDef>> {
    let mut sets: Vec<Vec<ItemDef>> = Vec::with_capacity(items.len() / SET_SIZE + 1);
    for item in items {
        let start_new = sets.last().is_none_or(|last| last.len() >= SET_SIZE);
        if start_new {
            sets.push(Vec::with_capacity(SET_SIZE));
        }
        sets.last_mut().unwrap().push(item);
    }
    if sets.len() >= 2 && sets.last().is_some_and(|s| s.len() < SET_SIZE) {
        let partial = sets.pop().unwrap();
        sets.last_mut().unwrap().extend(partial);
    }
    sets
}
