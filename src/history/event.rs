//! History entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What kind of action an entry records.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A heal card was used.
    Heal,
    /// A monster was killed with the weapon.
    Kill,
    /// A monster was fought without weapon benefit.
    BareHanded,
    /// A weapon was equipped.
    Equip,
    /// The weapon was discarded.
    Discard,
    /// Game started, won or lost.
    ///
    /// Not an action: this sixth kind sits alongside the five action kinds
    /// above so lifecycle entries are not mislabelled as heals.
    Milestone,
}

impl EventKind {
    /// Stable lowercase name, as used in serialized form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            EventKind::Heal => "heal",
            EventKind::Kill => "kill",
            EventKind::BareHanded => "bare_handed",
            EventKind::Equip => "equip",
            EventKind::Discard => "discard",
            EventKind::Milestone => "milestone",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable record of something that happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Kind tag.
    pub kind: EventKind,
    /// Human-readable description.
    pub message: String,
    /// When it was recorded.
    pub timestamp: DateTime<Utc>,
}

impl GameEvent {
    /// Create an event stamped with the current time.
    #[must_use]
    pub fn new(kind: EventKind, message: impl Into<String>) -> Self {
        Self::at(kind, message, Utc::now())
    }

    /// Create an event with an explicit timestamp.
    #[must_use]
    pub fn at(kind: EventKind, message: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            message: message.into(),
            timestamp,
        }
    }

    /// 24-hour `HH:MM:SS` time of day.
    #[must_use]
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
