//! The dungeon room: the cards currently in play.
//!
//! The room keeps insertion order (oldest first). Removing a card by index
//! shifts the later cards down without reordering them.
//!
//! ## Refill policy
//!
//! The room is topped up only once it has nearly emptied: when it holds
//! `refill_threshold` cards or fewer and the deck still has cards. It then
//! draws `min(capacity - len, deck.len())` cards onto the end. With the
//! standard threshold of 1 the player clears three of four cards and
//! carries the last one into the next room.

use smallvec::SmallVec;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};

/// Cards in the current room, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dungeon {
    cards: SmallVec<[Card; 4]>,
    capacity: usize,
    refill_threshold: usize,
}

impl Dungeon {
    /// An empty room.
    ///
    /// `refill_threshold` is clamped below `capacity`.
    #[must_use]
    pub fn new(capacity: usize, refill_threshold: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            cards: SmallVec::new(),
            capacity,
            refill_threshold: refill_threshold.min(capacity - 1),
        }
    }

    /// Number of cards in the room.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the room is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the room, oldest first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Card at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Remove and return the card at `index`, keeping the rest in order.
    pub fn remove(&mut self, index: usize) -> Option<Card> {
        (index < self.cards.len()).then(|| self.cards.remove(index))
    }

    /// Empty the room.
    pub fn clear(&mut self) {
        self.cards.clear();
    }

    /// Fill an empty room straight from the deck, up to capacity.
    ///
    /// Used when dealing a new game. Returns how many cards were placed.
    pub fn deal(&mut self, deck: &mut Deck) -> usize {
        let drawn = deck.draw(self.capacity.saturating_sub(self.cards.len()));
        let count = drawn.len();
        self.cards.extend(drawn);
        count
    }

    /// Whether the refill policy would draw right now.
    #[must_use]
    pub fn needs_refill(&self, deck: &Deck) -> bool {
        self.cards.len() <= self.refill_threshold && !deck.is_empty()
    }

    /// Apply the refill policy. Returns how many cards were drawn (0 if the
    /// room was above the threshold or the deck was empty).
    pub fn refill(&mut self, deck: &mut Deck) -> usize {
        if !self.needs_refill(deck) {
            return 0;
        }
        self.deal(deck)
    }
}

impl Default for Dungeon {
    fn default() -> Self {
        Self::new(4, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn clubs(ranks: &[u8]) -> Vec<Card> {
        ranks.iter().map(|&r| Card::new(Suit::Clubs, r)).collect()
    }

    #[test]
    fn test_deal_fills_to_capacity() {
        let mut deck = Deck::standard();
        let mut room = Dungeon::default();

        assert_eq!(room.deal(&mut deck), 4);
        assert_eq!(room.len(), 4);
        assert_eq!(deck.len(), 48);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5]));
        let mut room = Dungeon::default();
        room.deal(&mut deck);

        assert_eq!(room.remove(1), Some(Card::new(Suit::Clubs, 3)));
        assert_eq!(room.cards(), clubs(&[2, 4, 5]).as_slice());
        assert_eq!(room.remove(7), None);
        assert_eq!(room.len(), 3);
    }

    #[test]
    fn test_no_refill_above_threshold() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6, 7]));
        let mut room = Dungeon::default();
        room.deal(&mut deck);
        room.remove(0);
        room.remove(0);

        // Two cards left: above the threshold of one.
        assert_eq!(room.refill(&mut deck), 0);
        assert_eq!(room.len(), 2);
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_refill_at_threshold_appends() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6, 7, 8, 9]));
        let mut room = Dungeon::default();
        room.deal(&mut deck);
        room.remove(0);
        room.remove(0);
        room.remove(0);

        assert_eq!(room.refill(&mut deck), 3);
        assert_eq!(room.cards(), clubs(&[5, 6, 7, 8]).as_slice());
        assert_eq!(deck.len(), 1);
    }

    #[test]
    fn test_refill_limited_by_deck() {
        let mut deck = Deck::from_cards(clubs(&[2, 3, 4, 5, 6]));
        let mut room = Dungeon::default();
        room.deal(&mut deck);
        for _ in 0..4 {
            room.remove(0);
        }

        assert_eq!(room.refill(&mut deck), 1);
        assert_eq!(room.len(), 1);
        assert!(deck.is_empty());
        assert_eq!(room.refill(&mut deck), 0);
    }

    #[test]
    fn test_threshold_clamped_below_capacity() {
        let mut deck = Deck::standard();
        let mut room = Dungeon::new(2, 5);
        room.deal(&mut deck);

        assert!(!room.needs_refill(&deck));
        room.remove(0);
        assert!(room.needs_refill(&deck));
    }
}
