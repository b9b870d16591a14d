//! A single 52-card deck and its undealt pool.

use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE, FaceValue, Suit};

/// An ordered deck of undealt cards.
///
/// A new deck holds one of every card, suit-major and face-value-minor.
/// Cards leave the deck from the front when dealt.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Creates a full deck in canonical order.
    ///
    /// ```
    /// use cardtable::{Card, DECK_SIZE, Deck, FaceValue, Suit};
    ///
    /// let deck = Deck::new();
    /// assert_eq!(deck.len(), DECK_SIZE);
    /// assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, FaceValue::Ace));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for face_value in FaceValue::ALL {
                cards.push(Card::new(suit, face_value));
            }
        }

        Self { cards }
    }

    /// Builds a deck holding exactly the given cards, front first.
    #[must_use]
    pub const fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Returns the undealt cards, front first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the number of undealt cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been dealt.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes and returns the front card.
    pub fn deal(&mut self) -> Option<Card> {
        if self.cards.is_empty() {
            None
        } else {
            Some(self.cards.remove(0))
        }
    }

    /// Shuffles the undealt cards in place.
    ///
    /// Forward Fisher–Yates: for each position `i`, a uniformly chosen index in
    /// `i..n` is swapped into it. Decks with fewer than two cards are untouched.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let n = self.cards.len();
        if n < 2 {
            return;
        }

        for i in 0..n - 1 {
            let j = rng.random_range(i..n);
            self.cards.swap(i, j);
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
