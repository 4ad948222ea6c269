//! What a successful action did.

use serde::{Deserialize, Serialize};

use super::engine::GameResult;
use crate::cards::Card;
use crate::combat::Outcome;
use crate::core::NoticeTicket;
use crate::history::EventKind;

/// Summary of one applied action, so callers need not diff state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// The card acted on (the discarded weapon for a discard).
    pub card: Card,
    /// History tag recorded for the action.
    pub kind: EventKind,
    /// Combat outcome; `None` for a discard.
    pub outcome: Option<Outcome>,
    /// Change to player health.
    pub health_delta: i64,
    /// Change to score.
    pub score_delta: i64,
    /// Cards drawn into the dungeon afterwards.
    pub refilled: usize,
    /// Set when this action ended the game.
    pub result: Option<GameResult>,
    /// Ticket of the notice left showing; schedule its clear with this.
    pub notice: NoticeTicket,
}
