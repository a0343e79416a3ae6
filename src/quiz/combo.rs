//! Combo / streak tracking.
//!
//! The streak counts consecutive mistake-free sets. Three perfect sets in a
//! row unlock a score multiplier that grows by 0.5x per further perfect set,
//! capped at 2.5x. Any mistake resets the streak (and therefore the
//! multiplier) immediately, not at the end of the current set.

/// Points awarded for a correct match before the multiplier is applied.
pub const BASE_POINTS: i64 = 100;

/// Penalty subtracted for an incorrect drop in practice mode.
pub const MISTAKE_PENALTY: i64 = 50;

const STREAK_THRESHOLD: u32 = 3;
const MULTIPLIER_CAP: f64 = 2.5;

#[derive(Debug, Default)]
pub struct ComboTracker {
    perfect_sets: u32,
}

impl ComboTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Consecutive mistake-free sets completed so far.
    pub fn perfect_sets(&self) -> u32 {
        self.perfect_sets
    }

    /// Current multiplier: 1.0 below the streak threshold, then
    /// `1.0 + (streak - 2) * 0.5` capped at 2.5.
    pub fn multiplier(&self) -> f64 {
        if self.perfect_sets < STREAK_THRESHOLD {
            1.0
        } else {
            (1.0 + (self.perfect_sets - 2) as f64 * 0.5).min(MULTIPLIER_CAP)
        }
    }

    /// Points for one correct match at the current multiplier.
    pub fn scored_points(&self) -> i64 {
        (BASE_POINTS as f64 * self.multiplier()).round() as i64
    }

    /// A set finished with zero mistakes.
    pub fn on_perfect_set(&mut self) {
        self.perfect_sets += 1;
    }

    /// Any incorrect drop. Resets streak and multiplier at once.
    pub fn on_mistake(&mut self) {
        self.perfect_sets = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplier_ladder() {
        let mut combo = ComboTracker::new();
        assert_eq!(combo.multiplier(), 1.0);
        combo.on_perfect_set();
        combo.on_perfect_set();
        assert_eq!(combo.multiplier(), 1.0); // 2 sets: still base
        combo.on_perfect_set();
        assert_eq!(combo.multiplier(), 1.5); // 3 sets
        combo.on_perfect_set();
        assert_eq!(combo.multiplier(), 2.0); // 4 sets
        combo.on_perfect_set();
        assert_eq!(combo.multiplier(), 2.5); // 5 sets: capped
        combo.on_perfect_set();
        assert_eq!(combo.multiplier(), 2.5); // stays capped
    }

    #[test]
    fn mistake_resets_instantly() {
        let mut combo = ComboTracker::new();
        for _ in 0..4 {
            combo.on_perfect_set();
        }
        assert_eq!(combo.multiplier(), 2.0);
        combo.on_mistake();
        assert_eq!(combo.perfect_sets(), 0);
        assert_eq!(combo.multiplier(), 1.0);
    }

    #[test]
    fn scored_points_rounds() {
        let mut combo = ComboTracker::new();
        assert_eq!(combo.scored_points(), 100);
        for _ in 0..3 {
            combo.on_perfect_set();
        }
        assert_eq!(combo.scored_points(), 150);
    }
}
