//! The draw pile.
//!
//! A `Deck` is consumed strictly from the front. Building is deterministic
//! (suits in `Suit::ALL` order, ranks ascending); randomness enters only
//! through `shuffle`, which takes any `RandomSource`.
//!
//! Backed by `im::Vector`, so front draws are cheap and cloning the deck
//! for an outcome preview is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::card::{Card, Suit, ACE, MIN_RANK};
use crate::core::rng::RandomSource;

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Cards handed out by a single draw. Rooms never take more than four.
pub type Drawn = SmallVec<[Card; 4]>;

/// Ordered pile of cards remaining to be drawn.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vector<Card>,
}

impl Deck {
    /// The full 52-card deck in canonical (unshuffled) order.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| (MIN_RANK..=ACE).map(move |rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// A deck holding exactly `cards`, front first.
    #[must_use]
    pub fn from_cards(cards: impl IntoIterator<Item = Card>) -> Self {
        Self {
            cards: cards.into_iter().collect(),
        }
    }

    /// Uniformly permute the deck in place (Fisher-Yates).
    ///
    /// Walks from the last index down to 1, swapping each position with one
    /// drawn from `[0, i]`.
    pub fn shuffle<R: RandomSource>(&mut self, rng: &mut R) {
        for i in (1..self.cards.len()).rev() {
            let j = rng.next_index(i + 1);
            self.cards.swap(i, j);
        }
    }

    /// Remove up to `count` cards from the front.
    ///
    /// Returns fewer than `count` when the deck runs out; never fails.
    pub fn draw(&mut self, count: usize) -> Drawn {
        let mut drawn = Drawn::new();
        for _ in 0..count {
            match self.cards.pop_front() {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        drawn
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
