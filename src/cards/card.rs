//! Playing cards and the role each suit plays in the dungeon.
//!
//! A `Card` is a plain value: a suit and a rank in `2..=14`. Everything
//! else (damage, healing, display text) is derived from those two fields.
//! Hearts heal, diamonds are weapons, clubs and spades are monsters.

use serde::{Deserialize, Serialize};

use crate::core::GameError;

/// Lowest rank in the deck.
pub const MIN_RANK: u8 = 2;
/// Jack.
pub const JACK: u8 = 11;
/// Queen.
pub const QUEEN: u8 = 12;
/// King.
pub const KING: u8 = 13;
/// Ace (highest rank).
pub const ACE: u8 = 14;

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suit {
    Hearts,
    Diamonds,
    Clubs,
    Spades,
}

impl Suit {
    /// All suits in canonical deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
            Suit::Spades => '♠',
        }
    }

    /// What cards of this suit do when used.
    #[must_use]
    pub const fn role(self) -> CardRole {
        match self {
            Suit::Hearts => CardRole::Heal,
            Suit::Diamonds => CardRole::Weapon,
            Suit::Clubs | Suit::Spades => CardRole::Monster,
        }
    }
}

/// Gameplay role of a card, determined by its suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardRole {
    /// Restores health.
    Heal,
    /// Becomes the equipped weapon.
    Weapon,
    /// Must be fought.
    Monster,
}

impl CardRole {
    /// Short human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            CardRole::Heal => "Heal",
            CardRole::Weapon => "Weapon",
            CardRole::Monster => "Monster",
        }
    }
}

/// A playing card.
///
/// ## Example
///
/// ```
/// use dungeon_deck::cards::{Card, CardRole, Suit};
///
/// let queen = Card::new(Suit::Spades, 12);
/// assert_eq!(queen.role(), CardRole::Monster);
/// assert_eq!(queen.damage(), 12);
/// assert_eq!(queen.to_string(), "Q♠");
/// ```
///
/// Deserialization goes through `try_new`, so an out-of-range rank is
/// rejected rather than producing an impossible card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    /// Suit.
    pub suit: Suit,
    /// Rank in `2..=14` (11 = J, 12 = Q, 13 = K, 14 = A).
    pub rank: u8,
}

/// Unvalidated wire form of a `Card`.
#[derive(Deserialize)]
struct RawCard {
    suit: Suit,
    rank: u8,
}

impl TryFrom<RawCard> for Card {
    type Error = GameError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.suit, raw.rank).ok_or(GameError::InvalidRank { rank: raw.rank })
    }
}

impl Card {
    /// Create a card.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `2..=14`. Use `try_new` for untrusted input.
    #[must_use]
    pub fn new(suit: Suit, rank: u8) -> Self {
        match Self::try_new(suit, rank) {
            Some(card) => card,
            None => panic!("Card rank must be {MIN_RANK}-{ACE}, got {rank}"),
        }
    }

    /// Create a card, or `None` if `rank` is outside `2..=14`.
    #[must_use]
    pub fn try_new(suit: Suit, rank: u8) -> Option<Self> {
        (MIN_RANK..=ACE).contains(&rank).then_some(Self { suit, rank })
    }

    /// Role of this card in the dungeon.
    #[must_use]
    pub const fn role(&self) -> CardRole {
        self.suit.role()
    }

    /// Damage dealt as a monster, or attack strength as a weapon.
    #[must_use]
    pub const fn damage(&self) -> i64 {
        self.rank as i64
    }

    /// Health restored as a heal card.
    #[must_use]
    pub const fn heal(&self) -> i64 {
        self.rank as i64
    }

    /// Rank as shown on the card face.
    #[must_use]
    pub fn display_value(&self) -> String {
        match self.rank {
            JACK => "J".to_string(),
            QUEEN => "Q".to_string(),
            KING => "K".to_string(),
            ACE => "A".to_string(),
            n => n.to_string(),
        }
    }

    /// Unicode symbol of this card's suit.
    #[must_use]
    pub const fn suit_symbol(&self) -> char {
        self.suit.symbol()
    }

    /// Effect summary: "7 HP", "7 ATK" or "7 DMG".
    #[must_use]
    pub fn effect_label(&self) -> String {
        match self.role() {
            CardRole::Heal => format!("{} HP", self.heal()),
            CardRole::Weapon => format!("{} ATK", self.damage()),
            CardRole::Monster => format!("{} DMG", self.damage()),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.display_value(), self.suit_symbol())
    }
}
