//! Rules configuration.
//!
//! Every tunable constant of the dungeon crawl lives in `RulesConfig`.
//! `RulesConfig::default()` is the standard game; the `with_*` builders
//! exist for variants and tests. Builders clamp values that would make the
//! engine's invariants unsatisfiable (a zero-card room, a threshold at or
//! above capacity, health above the cap).
//!
//! A config read from JSON or assembled through its public fields skips the
//! builders. `GameEngine` runs every config through `normalized()` on
//! construction, which applies the same clamps.

use serde::{Deserialize, Serialize};

/// Longest a notice may stay up: one day.
pub const MAX_NOTICE_DURATION_MS: u64 = 24 * 60 * 60 * 1000;

/// Tunable game constants.
///
/// ## Example
///
/// ```
/// use dungeon_deck::core::RulesConfig;
///
/// let config = RulesConfig::default().with_seed(7).with_starting_health(12);
/// assert_eq!(config.max_health, 20);
/// assert_eq!(config.starting_health, 12);
/// assert_eq!(config.seed, Some(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Upper bound for player health. Healing never exceeds it.
    pub max_health: i64,

    /// Health at game start and after restart.
    pub starting_health: i64,

    /// Maximum number of cards in the dungeon room.
    pub dungeon_capacity: usize,

    /// Refill only when the room holds this many cards or fewer.
    pub refill_threshold: usize,

    /// Number of events retained in the history.
    pub history_capacity: usize,

    /// Flat score for using a heal card.
    pub heal_score: i64,

    /// Flat score for equipping a weapon.
    pub equip_score: i64,

    /// Score per point of monster damage on a weapon kill.
    pub kill_multiplier: i64,

    /// How long a notice stays up, in milliseconds (at most one day).
    pub notice_duration_ms: u64,

    /// Shuffle seed. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            max_health: 20,
            starting_health: 20,
            dungeon_capacity: 4,
            refill_threshold: 1,
            history_capacity: 20,
            heal_score: 5,
            equip_score: 10,
            kill_multiplier: 10,
            notice_duration_ms: 3000,
            seed: None,
        }
    }
}

impl RulesConfig {
    /// Apply every builder clamp to the current field values.
    #[must_use]
    pub fn normalized(self) -> Self {
        let Self {
            max_health,
            starting_health,
            dungeon_capacity,
            refill_threshold,
            history_capacity,
            notice_duration_ms,
            ..
        } = self;
        self.with_max_health(max_health)
            .with_starting_health(starting_health)
            .with_dungeon_capacity(dungeon_capacity)
            .with_refill_threshold(refill_threshold)
            .with_history_capacity(history_capacity)
            .with_notice_duration_ms(notice_duration_ms)
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the health cap (at least 1). Starting health is pulled down to fit.
    #[must_use]
    pub fn with_max_health(mut self, max_health: i64) -> Self {
        self.max_health = max_health.max(1);
        self.starting_health = self.starting_health.min(self.max_health);
        self
    }

    /// Set starting health, clamped to `1..=max_health`.
    #[must_use]
    pub fn with_starting_health(mut self, health: i64) -> Self {
        self.starting_health = health.clamp(1, self.max_health);
        self
    }

    /// Set room capacity (at least 1). The refill threshold is pulled below it.
    #[must_use]
    pub fn with_dungeon_capacity(mut self, capacity: usize) -> Self {
        self.dungeon_capacity = capacity.max(1);
        self.refill_threshold = self.refill_threshold.min(self.dungeon_capacity - 1);
        self
    }

    /// Set the refill threshold, clamped below room capacity.
    #[must_use]
    pub fn with_refill_threshold(mut self, threshold: usize) -> Self {
        self.refill_threshold = threshold.min(self.dungeon_capacity - 1);
        self
    }

    /// Set history capacity (at least 1).
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity.max(1);
        self
    }

    /// Set how long notices stay up, capped at one day.
    #[must_use]
    pub fn with_notice_duration_ms(mut self, millis: u64) -> Self {
        self.notice_duration_ms = millis.min(MAX_NOTICE_DURATION_MS);
        self
    }

    /// Notice lifetime as a `chrono` duration, capped at one day.
    #[must_use]
    pub fn notice_duration(&self) -> chrono::Duration {
        let millis = self.notice_duration_ms.min(MAX_NOTICE_DURATION_MS);
        chrono::Duration::milliseconds(i64::try_from(millis).unwrap_or(i64::MAX))
    }
}
