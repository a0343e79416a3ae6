//! Game mode configuration.
//!
//! The frontend lets the player pick mode, difficulty, and speed one widget
//! at a time, so selections arrive piecemeal. [`ModeSelection`] models the
//! partially-chosen state; only a complete selection resolves into a
//! [`SessionConfig`], which is what the engine consumes. Challenge mode has
//! no speed selector.

use serde::Serialize;

/// Longest accepted player display name, in characters.
pub const MAX_PLAYER_NAME_CHARS: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Non-scored browsing of vocabulary items, no matching mechanics.
    Study,
    /// Bar-timer gated session with incremental scoring and combo bonuses.
    Practice,
    /// Fixed 60-second session scored by correct count.
    Challenge,
}

impl Mode {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "study" => Some(Mode::Study),
            "practice" => Some(Mode::Practice),
            "challenge" => Some(Mode::Challenge),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Study => "study",
            Mode::Practice => "practice",
            Mode::Challenge => "challenge",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Starter,
    Mover,
    Flyer,
}

impl Difficulty {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "starter" => Some(Difficulty::Starter),
            "mover" => Some(Difficulty::Mover),
            "flyer" => Some(Difficulty::Flyer),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Starter => "starter",
            Difficulty::Mover => "mover",
            Difficulty::Flyer => "flyer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Speed {
    Slow,
    Normal,
    Fast,
}

impl Speed {
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "slow" => Some(Speed::Slow),
            "normal" => Some(Speed::Normal),
            "fast" => Some(Speed::Fast),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Speed::Slow => "slow",
            Speed::Normal => "normal",
            Speed::Fast => "fast",
        }
    }

    /// Milliseconds for the practice bar to drain from 100% to empty.
    pub fn drain_ms(self) -> f64 {
        match self {
            Speed::Slow => 90_000.0,
            Speed::Normal => 60_000.0,
            Speed::Fast => 30_000.0,
        }
    }
}

/// A possibly-incomplete mode selection, as collected by the UI.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModeSelection {
    pub mode: Option<Mode>,
    pub difficulty: Option<Difficulty>,
    pub speed: Option<Speed>,
}

impl ModeSelection {
    /// True once every field the chosen mode requires is present. The UI
    /// stays in its selecting state until this holds.
    pub fn is_complete(&self) -> bool {
        match self.mode {
            None => false,
            Some(Mode::Study) => true,
            Some(Mode::Practice) => self.difficulty.is_some() && self.speed.is_some(),
            Some(Mode::Challenge) => self.difficulty.is_some(),
        }
    }

    /// Normalize into a session configuration, or `None` while incomplete.
    /// Challenge mode drops any stray speed choice; study mode drops both.
    pub fn resolve(&self, category: &str, player: &str) -> Option<SessionConfig> {
        if !self.is_complete() {
            return None;
        }
        let mode = self.mode?;
        let (difficulty, speed) = match mode {
            Mode::Study => (self.difficulty.unwrap_or(Difficulty::Starter), None),
            Mode::Practice => (self.difficulty?, Some(self.speed?)),
            Mode::Challenge => (self.difficulty?, None),
        };
        Some(SessionConfig {
            mode,
            category: category.to_string(),
            difficulty,
            speed,
            player: player.chars().take(MAX_PLAYER_NAME_CHARS).collect(),
        })
    }
}

/// Fully normalized session configuration.
#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub mode: Mode,
    pub category: String,
    pub difficulty: Difficulty,
    pub speed: Option<Speed>,
    pub player: String,
}
