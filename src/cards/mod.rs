//! Cards and the draw pile.
//!
//! ## Key Types
//!
//! - `Card`: Suit + rank value with derived damage, heal and display text
//! - `Suit`: Hearts, diamonds, clubs, spades
//! - `CardRole`: What a suit does in the dungeon (heal, weapon, monster)
//! - `Deck`: Front-consumed pile with `standard`, `shuffle` and `draw`

pub mod card;
pub mod deck;

pub use card::{Card, CardRole, Suit, ACE, JACK, KING, MIN_RANK, QUEEN};
pub use deck::{Deck, Drawn, DECK_SIZE};
