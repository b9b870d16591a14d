//! Players and their hands.

use alloc::string::String;
use alloc::vec::Vec;

use crate::card::Card;

/// Identifier of a player within a single game.
pub type PlayerId = u32;

/// A player seated in a game.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Player {
    id: PlayerId,
    name: Option<String>,
    hand: Vec<Card>,
}

impl Player {
    /// Creates a player with an empty hand and no name.
    #[must_use]
    pub const fn new(id: PlayerId) -> Self {
        Self {
            id,
            name: None,
            hand: Vec::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the player ID.
    #[must_use]
    pub const fn id(&self) -> PlayerId {
        self.id
    }

    /// Returns the display name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the cards in hand, in the order they were received.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.hand
    }

    /// Returns the number of cards in hand.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Sum of the face-value weights of every card in hand.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.hand.iter().map(Card::weight).sum()
    }

    pub(crate) fn receive(&mut self, card: Card) {
        self.hand.push(card);
    }
}
