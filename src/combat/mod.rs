//! Combat: weapon state and pure resolution rules.
//!
//! ## Key Types
//!
//! - `WeaponSlot`: Equipped weapon plus last-kill fatigue
//! - `CombatResolver`: Decides outcomes and their health/score deltas
//! - `Outcome`, `Engagement`, `BareHandedReason`: What happened and why

mod resolver;
mod weapon;

pub use resolver::{BareHandedReason, CombatResolver, Engagement, Outcome};
pub use weapon::WeaponSlot;
