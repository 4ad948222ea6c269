//! Player actions.
//!
//! There are only two verbs: use the dungeon card at an index (what that
//! does depends on its suit) or discard the equipped weapon.

use serde::{Deserialize, Serialize};

/// A single player action.
///
/// ## Example
///
/// ```
/// use dungeon_deck::core::Action;
///
/// let action = Action::UseCard { index: 2 };
/// assert_eq!(action.card_index(), Some(2));
/// assert_eq!(Action::DiscardWeapon.card_index(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// Use the dungeon card at `index`.
    UseCard { index: usize },
    /// Discard the equipped weapon.
    DiscardWeapon,
}

impl Action {
    /// Dungeon index this action targets, if any.
    #[must_use]
    pub fn card_index(&self) -> Option<usize> {
        match self {
            Action::UseCard { index } => Some(*index),
            Action::DiscardWeapon => None,
        }
    }
}
