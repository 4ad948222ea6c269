//! # dungeon-deck
//!
//! Rules engine for a single-player dungeon crawl played with a standard
//! 52-card deck.
//!
//! ## Rules
//!
//! - The dungeon room shows up to four cards. Use them one at a time.
//! - Hearts heal (never above 20 health).
//! - Diamonds are weapons. Equipping replaces the current weapon.
//! - Clubs and spades are monsters. A weapon kills a monster no stronger
//!   than itself, but after its first kill it only handles monsters no
//!   stronger than the last one it killed. Otherwise the player fights
//!   bare-handed and takes the monster's damage.
//! - The room refills once it is down to one card.
//! - Use all 52 cards with health above zero to win.
//!
//! ## Design
//!
//! - **Explicit session**: One `GameEngine` per game, owned by its caller.
//!   No globals.
//! - **Pure combat**: `combat::CombatResolver` computes outcomes; only the
//!   engine mutates state.
//! - **Injectable randomness**: Shuffling goes through `core::RandomSource`,
//!   so tests can script the deck order.
//! - **Fail closed**: Actions before the deal, after the end, or at a bad
//!   index are rejected with `core::GameError` and change nothing.
//!
//! ## Modules
//!
//! - `core`: Actions, configuration, errors, notices, RNG
//! - `cards`: Cards, suits, the deck
//! - `zones`: The dungeon room and its refill policy
//! - `combat`: Weapon slot and combat resolution
//! - `history`: Bounded newest-first event log
//! - `audio`: Ambient audio collaborator
//! - `rules`: The game engine

pub mod audio;
pub mod cards;
pub mod combat;
pub mod core;
pub mod history;
pub mod rules;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, GameError, GameRng, GameRngState, Notice, NoticeTicket, NoticeTone, RandomSource,
    RulesConfig, ScriptedRng,
};

pub use crate::cards::{Card, CardRole, Deck, Suit, DECK_SIZE};

pub use crate::zones::Dungeon;

pub use crate::combat::{BareHandedReason, CombatResolver, Engagement, Outcome, WeaponSlot};

pub use crate::history::{EventKind, EventLog, GameEvent};

pub use crate::audio::{AmbientAudio, Silence};

pub use crate::rules::{GameEngine, GameResult, Phase, Resolution};
