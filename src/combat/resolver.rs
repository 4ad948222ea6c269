//! Combat resolution - computing what a card does to the player.
//!
//! Everything here is pure: the resolver reads the weapon slot, health and
//! rules config, and reports an `Outcome` plus its health and score deltas.
//! The engine applies them.
//!
//! ## Monster precedence
//!
//! 1. No weapon: bare-handed.
//! 2. Monster stronger than the weapon: bare-handed.
//! 3. Weapon has killed before and the monster is stronger than that kill:
//!    bare-handed (fatigue).
//! 4. Otherwise the weapon kills it and the player takes no damage.

use serde::{Deserialize, Serialize};

use super::weapon::WeaponSlot;
use crate::cards::{Card, CardRole};
use crate::core::config::RulesConfig;

/// Why a monster was fought without weapon benefit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BareHandedReason {
    /// No weapon equipped.
    Unarmed,
    /// Monster damage exceeds the weapon's damage.
    WeaponTooWeak,
    /// Monster damage exceeds the weapon's last kill.
    WeaponFatigued,
}

/// How a monster encounter plays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Engagement {
    /// The weapon kills the monster; no damage taken.
    WeaponKill,
    /// The player takes the monster's full damage.
    BareHanded(BareHandedReason),
}

impl Engagement {
    /// Whether the player takes damage.
    #[must_use]
    pub fn takes_damage(&self) -> bool {
        matches!(self, Engagement::BareHanded(_))
    }
}

/// Effect of using a single card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Healed by `applied` (0 for a wasted heal).
    Heal { applied: i64 },
    /// Equipped the card, replacing `replaced` if a weapon was held.
    Equip { replaced: Option<Card> },
    /// Fought a monster.
    Fight(Engagement),
}

impl Outcome {
    /// Whether the player takes damage.
    #[must_use]
    pub fn takes_damage(&self) -> bool {
        matches!(self, Outcome::Fight(engagement) if engagement.takes_damage())
    }

    /// Whether this is a heal that restores nothing.
    #[must_use]
    pub fn is_wasted_heal(&self) -> bool {
        matches!(self, Outcome::Heal { applied: 0 })
    }
}

/// Pure combat rules.
pub struct CombatResolver;

impl CombatResolver {
    /// Decide how fighting `monster` resolves with the current weapon.
    #[must_use]
    pub fn engage(slot: &WeaponSlot, monster: &Card) -> Engagement {
        let Some(weapon) = slot.weapon() else {
            return Engagement::BareHanded(BareHandedReason::Unarmed);
        };

        if monster.damage() > weapon.damage() {
            return Engagement::BareHanded(BareHandedReason::WeaponTooWeak);
        }

        if slot.last_kill() > 0 && monster.damage() > slot.last_kill() {
            return Engagement::BareHanded(BareHandedReason::WeaponFatigued);
        }

        Engagement::WeaponKill
    }

    /// Health actually restored by `card`: never past `max_health`.
    #[must_use]
    pub fn heal_applied(health: i64, max_health: i64, card: &Card) -> i64 {
        card.heal().min(max_health - health).max(0)
    }

    /// Resolve `card` against the current state, dispatching on its role.
    #[must_use]
    pub fn resolve(config: &RulesConfig, slot: &WeaponSlot, health: i64, card: &Card) -> Outcome {
        match card.role() {
            CardRole::Heal => Outcome::Heal {
                applied: Self::heal_applied(health, config.max_health, card),
            },
            CardRole::Weapon => Outcome::Equip {
                replaced: slot.weapon().copied(),
            },
            CardRole::Monster => Outcome::Fight(Self::engage(slot, card)),
        }
    }

    /// Change to player health.
    #[must_use]
    pub fn health_delta(outcome: &Outcome, card: &Card) -> i64 {
        match outcome {
            Outcome::Heal { applied } => *applied,
            Outcome::Equip { .. } => 0,
            Outcome::Fight(Engagement::WeaponKill) => 0,
            Outcome::Fight(Engagement::BareHanded(_)) => -card.damage(),
        }
    }

    /// Change to score.
    ///
    /// Heals and equips pay a flat amount; a weapon kill pays damage times
    /// the kill multiplier; a bare-handed fight pays the damage taken.
    #[must_use]
    pub fn score_delta(config: &RulesConfig, outcome: &Outcome, card: &Card) -> i64 {
        match outcome {
            Outcome::Heal { .. } => config.heal_score,
            Outcome::Equip { .. } => config.equip_score,
            Outcome::Fight(Engagement::WeaponKill) => card.damage() * config.kill_multiplier,
            Outcome::Fight(Engagement::BareHanded(_)) => card.damage(),
        }
    }
}
