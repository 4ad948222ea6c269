//! The equipped-weapon slot and its fatigue.

use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// At most one equipped weapon plus the damage of its most recent kill.
///
/// `last_kill` is 0 whenever the slot is empty and is reset by every equip
/// and discard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeaponSlot {
    weapon: Option<Card>,
    last_kill: i64,
}

impl WeaponSlot {
    /// An empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The equipped weapon, if any.
    #[must_use]
    pub fn weapon(&self) -> Option<&Card> {
        self.weapon.as_ref()
    }

    /// Whether a weapon is equipped.
    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.weapon.is_some()
    }

    /// Damage of the last monster this weapon killed, 0 if none yet.
    #[must_use]
    pub fn last_kill(&self) -> i64 {
        self.last_kill
    }

    /// Strongest monster the weapon can still kill, or `None` when unarmed.
    ///
    /// A fresh weapon kills up to its own damage. After its first kill it is
    /// limited to the lesser of that and the last kill's damage.
    #[must_use]
    pub fn kill_limit(&self) -> Option<i64> {
        self.weapon.map(|weapon| {
            if self.last_kill > 0 {
                weapon.damage().min(self.last_kill)
            } else {
                weapon.damage()
            }
        })
    }

    /// Equip `card`, returning the weapon it replaces.
    pub fn equip(&mut self, card: Card) -> Option<Card> {
        self.last_kill = 0;
        self.weapon.replace(card)
    }

    /// Unequip and return the weapon.
    pub fn discard(&mut self) -> Option<Card> {
        self.last_kill = 0;
        self.weapon.take()
    }

    /// Record a weapon kill. Ignored when unarmed.
    pub fn record_kill(&mut self, damage: i64) {
        if self.weapon.is_some() {
            self.last_kill = damage;
        }
    }
}
