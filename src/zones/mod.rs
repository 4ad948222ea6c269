//! Card locations outside the deck.
//!
//! The only zone with rules of its own is the dungeon room. The equipped
//! weapon is a single slot owned by the engine, and consumed cards are
//! discarded without being tracked.
//!
//! ## Key Types
//!
//! - `Dungeon`: Ordered room of up to `capacity` playable cards, with the
//!   low-water refill policy

pub mod dungeon;

pub use dungeon::Dungeon;
