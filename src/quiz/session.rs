//! Quiz session engine.
//!
//! One [`SessionEngine`] owns all mutable state for an active session: the
//! scheduled sets, matched pairs, score, combo streak, and timers. Every
//! mutation happens synchronously inside `handle_drop` or `tick`, so the
//! single-threaded event loop never observes a half-applied drop.
//!
//! Set scheduling: the pool is partitioned into sets of three; completing a
//! set advances to the next; running past the last set reshuffles the whole
//! pool and starts over, so timed modes never run out of material.

use serde::Serialize;

use crate::catalog::ItemDef;
use crate::quiz::combo::{ComboTracker, MISTAKE_PENALTY};
use crate::quiz::config::{Mode, SessionConfig};
use crate::quiz::pool;
use crate::quiz::timer::{
    BAR_EXTEND_PCT, BAR_SHRINK_PCT, BarTimer, CHALLENGE_SECS, CountdownTimer,
};
use crate::rng::GameRng;

/// A labeled target derived 1:1 from one item of the current set. The zone
/// id always equals the id of exactly one item in the set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DropZone {
    pub id: &'static str,
    pub label: &'static str,
}

/// Recorded only for correct drops; zone ids never repeat within a set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchedPair {
    pub item_id: &'static str,
    pub zone_id: &'static str,
}

/// Why a drop was ignored. Ignored drops mutate nothing; the frontend shows
/// a transient warning at most.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// Session over, not started, or paused.
    NotPlaying,
    /// Study mode has no matching mechanics.
    StudyMode,
    /// The dragged item is not part of the current set.
    NotInSet,
    /// The item was already matched this set.
    AlreadyMatched,
}

/// Result of evaluating one drop.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropOutcome {
    Correct {
        /// Score delta applied (0 in modes without incremental scoring).
        points: i64,
        /// Word to pronounce.
        label: &'static str,
        /// True when this drop completed the set (the engine has already
        /// advanced to the next one).
        set_complete: bool,
    },
    Incorrect {
        /// Score delta applied, as a positive penalty amount.
        penalty: i64,
    },
    Ignored(IgnoreReason),
}

pub struct SessionEngine {
    config: SessionConfig,
    sets: Vec<Vec<ItemDef>>,
    set_index: usize,
    zones: Vec<DropZone>,
    matched: Vec<MatchedPair>,
    set_mistake: bool,
    combo: ComboTracker,
    score: i64,
    correct_total: u32,
    wrong_total: u32,
    playing: bool,
    paused: bool,
    countdown: Option<CountdownTimer>,
    bar: Option<BarTimer>,
    rng: GameRng,
}

impl SessionEngine {
    pub fn new(config: SessionConfig, mut rng: GameRng) -> Self {
        let items = pool::build_pool(&config.category, config.difficulty, &mut rng);
        let sets = pool::partition_sets(items);
        let countdown = match config.mode {
            Mode::Challenge => Some(CountdownTimer::new(CHALLENGE_SECS)),
            _ => None,
        };
        let bar = match (config.mode, config.speed) {
            (Mode::Practice, Some(speed)) => Some(BarTimer::new(speed)),
            _ => None,
        };
        let mut engine = Self {
            config,
            sets,
            set_index: 0,
            zones: Vec::new(),
            matched: Vec::new(),
            set_mistake: false,
            combo: ComboTracker::new(),
            score: 0,
            correct_total: 0,
            wrong_total: 0,
            playing: true,
            paused: false,
            countdown,
            bar,
            rng,
        };
        engine.enter_current_set();
        engine
    }

    // --- Set scheduling -------------------------------------------------

    /// Shuffle the display order of the entered set and derive its zones,
    /// shuffled independently so item and zone positions never line up.
    fn enter_current_set(&mut self) {
        self.matched.clear();
        self.set_mistake = false;
        let Some(set) = self.sets.get_mut(self.set_index) else {
            self.zones.clear();
            return;
        };
        self.rng.shuffle(set);
        self.zones = set
            .iter()
            .map(|item| DropZone {
                id: item.id,
                label: item.label,
            })
            .collect();
        self.rng.shuffle(&mut self.zones);
    }

    /// Move to the next set, reshuffling and repartitioning the whole pool
    /// once it is exhausted. The UI-settle delay between sets is cosmetic
    /// and owned by the frontend; state advances immediately.
    fn advance_set(&mut self) {
        if self.sets.is_empty() {
            return;
        }
        self.set_index += 1;
        if self.set_index >= self.sets.len() {
            let mut items: Vec<ItemDef> = self.sets.drain(..).flatten().collect();
            self.rng.shuffle(&mut items);
            self.sets = pool::partition_sets(items);
            self.set_index = 0;
        }
        self.enter_current_set();
    }

    /// Study-mode browsing: move on to the next set without matching.
    pub fn browse_next_set(&mut self) {
        if self.config.mode == Mode::Study && self.playing {
            self.advance_set();
        }
    }

    // --- Match evaluation -------------------------------------------------

    /// Evaluate one drop. Score and combo mutations happen here,
    /// synchronously, before the caller schedules any sound or animation;
    /// the set-completion check runs after the matched pair is recorded.
    pub fn handle_drop(&mut self, item_id: &str, zone_id: &str) -> DropOutcome {
        if !self.playing || self.paused {
            return DropOutcome::Ignored(IgnoreReason::NotPlaying);
        }
        if self.config.mode == Mode::Study {
            return DropOutcome::Ignored(IgnoreReason::StudyMode);
        }
        let Some(set) = self.sets.get(self.set_index) else {
            return DropOutcome::Ignored(IgnoreReason::NotInSet);
        };
        let Some(item) = set.iter().find(|i| i.id == item_id) else {
            return DropOutcome::Ignored(IgnoreReason::NotInSet);
        };
        let item = *item;
        if self.matched.iter().any(|p| p.item_id == item.id) {
            return DropOutcome::Ignored(IgnoreReason::AlreadyMatched);
        }

        if item.id != zone_id {
            return self.apply_incorrect();
        }

        // Correct: score first (multiplier as of this drop), then record the
        // pair, then check completion.
        let points = match self.config.mode {
            Mode::Practice => self.combo.scored_points(),
            // Challenge scores by correct count; the running score mirrors
            // the end-of-session rule so both always agree.
            Mode::Challenge => crate::quiz::combo::BASE_POINTS,
            Mode::Study => 0,
        };
        self.score += points;
        self.correct_total += 1;
        if let Some(bar) = self.bar.as_mut() {
            bar.extend(BAR_EXTEND_PCT);
        }
        self.matched.push(MatchedPair {
            item_id: item.id,
            zone_id: item.id,
        });

        let set_complete = self.matched.len() == self.sets[self.set_index].len();
        if set_complete {
            if !self.set_mistake {
                self.combo.on_perfect_set();
            }
            self.advance_set();
        }
        DropOutcome::Correct {
            points,
            label: item.label,
            set_complete,
        }
    }

    fn apply_incorrect(&mut self) -> DropOutcome {
        // Streak and multiplier reset the instant a mistake happens,
        // independent of when the current set ends.
        self.set_mistake = true;
        self.combo.on_mistake();
        self.wrong_total += 1;
        let penalty = match self.config.mode {
            Mode::Practice => MISTAKE_PENALTY,
            _ => 0,
        };
        self.score -= penalty;
        if let Some(bar) = self.bar.as_mut() {
            bar.shrink(BAR_SHRINK_PCT);
        }
        DropOutcome::Incorrect { penalty }
    }

    // --- Timers & lifecycle ---------------------------------------------

    /// Drive the session timer with the current timestamp (ms). Returns
    /// `true` exactly once, on the tick where time runs out; the session
    /// stops playing at that moment.
    pub fn tick(&mut self, now: f64) -> bool {
        if !self.playing || self.paused {
            return false;
        }
        let expired = match (&mut self.countdown, &mut self.bar) {
            (Some(countdown), _) => countdown.tick(now),
            (_, Some(bar)) => bar.tick(now),
            _ => false,
        };
        if expired {
            self.playing = false;
        }
        expired
    }

    pub fn pause(&mut self) {
        if !self.playing {
            return;
        }
        self.paused = true;
        if let Some(t) = self.countdown.as_mut() {
            t.pause();
        }
        if let Some(b) = self.bar.as_mut() {
            b.pause();
        }
    }

    pub fn resume(&mut self) {
        // Timers re-arm on their next tick; no elapsed time is charged.
        self.paused = false;
    }

    /// Stop accepting input (manual end or back-to-home).
    pub fn stop(&mut self) {
        self.playing = false;
    }

    /// Final score for the leaderboard. Challenge sessions score purely by
    /// correct count; other modes keep their incremental score.
    pub fn final_score(&self) -> i64 {
        match self.config.mode {
            Mode::Challenge => self.correct_total as i64 * crate::quiz::combo::BASE_POINTS,
            _ => self.score,
        }
    }

    // --- Read-only views ---------------------------------------------------

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The items of the current set in display order. Empty when the pool
    /// is empty.
    pub fn current_set(&self) -> &[ItemDef] {
        self.sets
            .get(self.set_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Drop zones for the current set, in their own shuffled order.
    pub fn zones(&self) -> &[DropZone] {
        &self.zones
    }

    pub fn matched_pairs(&self) -> &[MatchedPair] {
        &self.matched
    }

    /// True when the category produced no items at all. The session is
    /// usable but empty and the frontend should say so.
    pub fn pool_is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn combo_multiplier(&self) -> f64 {
        self.combo.multiplier()
    }

    pub fn consecutive_perfect_sets(&self) -> u32 {
        self.combo.perfect_sets()
    }

    pub fn correct_total(&self) -> u32 {
        self.correct_total
    }

    pub fn wrong_total(&self) -> u32 {
        self.wrong_total
    }

    pub fn set_index(&self) -> usize {
        self.set_index
    }

    pub fn set_count(&self) -> usize {
        self.sets.len()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Challenge mode: whole seconds left.
    pub fn remaining_secs(&self) -> Option<u32> {
        self.countdown.as_ref().map(CountdownTimer::remaining_secs)
    }

    /// Practice mode: bar level in percent.
    pub fn bar_level(&self) -> Option<f64> {
        self.bar.as_ref().map(BarTimer::level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::config::{Difficulty, Mode, SessionConfig, Speed};

    fn practice_config() -> SessionConfig {
        SessionConfig {
            mode: Mode::Practice,
            category: "animals".to_string(),
            difficulty: Difficulty::Flyer,
            speed: Some(Speed::Normal),
            player: "Tester".to_string(),
        }
    }

    #[test]
    fn zones_are_derived_one_to_one_from_the_set() {
        let engine = SessionEngine::new(practice_config(), GameRng::seeded(1));
        let set = engine.current_set();
        let zones = engine.zones();
        assert_eq!(set.len(), zones.len());
        for item in set {
            assert_eq!(zones.iter().filter(|z| z.id == item.id).count(), 1);
        }
    }

    #[test]
    fn matched_pairs_never_exceed_set_size() {
        let mut engine = SessionEngine::new(practice_config(), GameRng::seeded(2));
        for _ in 0..20 {
            let set: Vec<ItemDef> = engine.current_set().to_vec();
            let before = engine.matched_pairs().len();
            assert!(before < set.len());
            let id = set[before].id;
            match engine.handle_drop(id, id) {
                DropOutcome::Correct { set_complete, .. } => {
                    if set_complete {
                        assert_eq!(engine.matched_pairs().len(), 0); // new set entered
                    } else {
                        assert_eq!(engine.matched_pairs().len(), before + 1);
                    }
                }
                other => panic!("expected correct, got {other:?}"),
            }
        }
    }

    #[test]
    fn exhausted_pool_reshuffles_and_keeps_going() {
        let mut engine = SessionEngine::new(practice_config(), GameRng::seeded(3));
        let total_sets = engine.set_count();
        // Complete every set once, then one more: index must wrap to 0.
        for _ in 0..total_sets {
            loop {
                let id = engine.current_set()[engine.matched_pairs().len()].id;
                if let DropOutcome::Correct { set_complete: true, .. } = engine.handle_drop(id, id)
                {
                    break;
                }
            }
        }
        assert_eq!(engine.set_index(), 0);
        assert!(!engine.current_set().is_empty());
        assert!(engine.is_playing());
    }
}
