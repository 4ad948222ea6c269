//! Errors returned by the action API and by card validation.
//!
//! None of these are fatal. A rejected action leaves the game exactly as it
//! was; the caller may simply try something else.

use thiserror::Error;

use crate::cards::Card;

/// Why an action was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// No game has been dealt yet.
    #[error("game has not started")]
    NotStarted,

    /// The game is won or lost; restart to play again.
    #[error("game is over")]
    GameOver,

    /// Discard requested with no weapon equipped.
    #[error("no weapon equipped")]
    NoWeapon,

    /// The dungeon has no card at this index.
    #[error("no card at dungeon index {index} (room holds {len})")]
    InvalidIndex { index: usize, len: usize },

    /// The dungeon slot holds a different card than the caller expected.
    #[error("dungeon index {index} holds {found}, not {expected}")]
    CardMismatch {
        index: usize,
        expected: Card,
        found: Card,
    },

    /// A card rank outside `2..=14`, e.g. from untrusted JSON.
    #[error("card rank must be 2-14, got {rank}")]
    InvalidRank { rank: u8 },
}
