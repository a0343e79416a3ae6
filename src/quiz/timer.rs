//! Session timers.
//!
//! Both timers are pure state machines driven by an injected timestamp (the
//! boundary feeds them `performance.now()`, tests feed them literals). They
//! do no I/O and report expiry through the return value of `tick`, which is
//! `true` exactly once per timer lifetime.
//!
//! Pausing works by dropping the last-seen timestamp: the next tick then
//! re-arms instead of counting the paused interval as elapsed.

use crate::quiz::config::Speed;

/// Fixed challenge session length.
pub const CHALLENGE_SECS: u32 = 60;

/// Bar refill granted per correct answer in practice mode, in percent.
pub const BAR_EXTEND_PCT: f64 = 2.0;

/// Bar drain applied per incorrect answer in practice mode, in percent.
pub const BAR_SHRINK_PCT: f64 = 3.0;

// --- Countdown (challenge mode) ---------------------------------------------

/// Counts down a fixed duration while the session is playing and unpaused.
#[derive(Debug)]
pub struct CountdownTimer {
    remaining_ms: f64,
    last_ms: Option<f64>,
    expired: bool,
}

impl CountdownTimer {
    pub fn new(secs: u32) -> Self {
        Self {
            remaining_ms: secs as f64 * 1000.0,
            last_ms: None,
            expired: false,
        }
    }

    /// Whole seconds left, rounded up so the display only shows 0 at expiry.
    pub fn remaining_secs(&self) -> u32 {
        (self.remaining_ms / 1000.0).ceil().max(0.0) as u32
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Freeze the countdown. Elapsed state is preserved; the next tick
    /// re-arms without charging the paused interval.
    pub fn pause(&mut self) {
        self.last_ms = None;
    }

    /// Advance to `now` (milliseconds). Returns `true` exactly once, on the
    /// tick that crosses zero.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.expired {
            return false;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now);
            return false;
        };
        let elapsed = (now - last).max(0.0);
        self.last_ms = Some(now);
        self.remaining_ms -= elapsed;
        if self.remaining_ms <= 0.0 {
            self.remaining_ms = 0.0;
            self.expired = true;
            return true;
        }
        false
    }
}

// --- Depletable bar (practice mode) ------------------------------------------

/// Continuously draining bar, refilled by correct answers and drained further
/// by mistakes. Level is a percentage in [0, 100].
#[derive(Debug)]
pub struct BarTimer {
    level: f64,
    drain_per_ms: f64,
    last_ms: Option<f64>,
    expired: bool,
}

impl BarTimer {
    pub fn new(speed: Speed) -> Self {
        Self {
            level: 100.0,
            drain_per_ms: 100.0 / speed.drain_ms(),
            last_ms: None,
            expired: false,
        }
    }

    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn expired(&self) -> bool {
        self.expired
    }

    /// Reward: refill by `pct`, clamped to 100.
    pub fn extend(&mut self, pct: f64) {
        if self.expired {
            return;
        }
        self.level = (self.level + pct).clamp(0.0, 100.0);
    }

    /// Penalty: drain by `pct`, clamped to 0. Shrinking to exactly zero does
    /// not fire expiry by itself; the next tick does, keeping the expiry path
    /// single.
    pub fn shrink(&mut self, pct: f64) {
        if self.expired {
            return;
        }
        self.level = (self.level - pct).clamp(0.0, 100.0);
    }

    /// Freeze depletion.
    pub fn pause(&mut self) {
        self.last_ms = None;
    }

    /// Advance to `now` (milliseconds). Returns `true` exactly once, when
    /// the level reaches zero.
    pub fn tick(&mut self, now: f64) -> bool {
        if self.expired {
            return false;
        }
        let Some(last) = self.last_ms else {
            self.last_ms = Some(now);
            return false;
        };
        let elapsed = (now - last).max(0.0);
        self.last_ms = Some(now);
        self.level -= elapsed * self.drain_per_ms;
        if self.level <= 0.0 {
            self.level = 0.0;
            self.expired = true;
            return true;
        }
        false
    }
}
