//! Game orchestration.
//!
//! `GameEngine` owns the deck, dungeon, weapon, health, score, history and
//! notices for one session, and is the only thing that mutates them. It
//! validates each action, asks `combat` what happens, applies it, refills
//! the room and checks for the end of the game.

pub mod engine;
pub mod resolution;

pub use engine::{GameEngine, GameResult, LegalActions, Phase};
pub use resolution::Resolution;
