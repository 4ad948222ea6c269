//! Game history: what happened, newest first.
//!
//! The history is purely observational. Nothing in it feeds back into rules.
//!
//! ## Key Types
//!
//! - `GameEvent`: Kind-tagged, timestamped message
//! - `EventKind`: heal, kill, bare_handed, equip, discard, milestone
//! - `EventLog`: Bounded log that evicts its oldest entry when full

mod event;
mod log;

pub use event::{EventKind, GameEvent};
pub use log::EventLog;
