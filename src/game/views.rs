use alloc::vec::Vec;

use crate::card::{Card, Suit};
use crate::error::GameError;
use crate::player::Player;
use crate::tally::{SuitCounts, UndealtGrouping};

use super::Game;

impl Game {
    /// Iterates over every undealt card, deck by deck, front first.
    pub fn undealt(&self) -> impl Iterator<Item = &Card> {
        self.decks.iter().flat_map(|deck| deck.cards().iter())
    }

    /// Returns the number of undealt cards across all decks.
    #[must_use]
    pub fn undealt_len(&self) -> usize {
        self.decks.iter().map(crate::deck::Deck::len).sum()
    }

    /// Counts the undealt cards of each suit.
    ///
    /// Every suit is present in the result, with zero when none remain.
    #[must_use]
    pub fn undealt_by_suit(&self) -> SuitCounts {
        let mut counts: SuitCounts = Suit::ALL.into_iter().map(|suit| (suit, 0)).collect();
        for card in self.undealt() {
            *counts.entry(card.suit).or_insert(0) += 1;
        }
        counts
    }

    /// Groups the undealt cards by suit, then face value, with a count for each.
    ///
    /// Only combinations with at least one undealt card appear.
    #[must_use]
    pub fn undealt_grouped(&self) -> UndealtGrouping {
        let mut grouping = UndealtGrouping::new();
        for card in self.undealt() {
            *grouping
                .entry(card.suit)
                .or_default()
                .entry(card.face_value)
                .or_insert(0) += 1;
        }
        grouping
    }

    /// Returns the players ranked by descending hand score.
    ///
    /// Players with equal scores keep their join order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameHasNoPlayers`] if the roster is empty.
    pub fn ranked_players(&self) -> Result<Vec<&Player>, GameError> {
        if self.players.is_empty() {
            return Err(GameError::GameHasNoPlayers(self.id));
        }

        let mut ranked: Vec<(u32, &Player)> = self
            .players
            .iter()
            .map(|player| (player.score(), player))
            .collect();
        // Stable, so ties stay in join order.
        ranked.sort_by(|a, b| b.0.cmp(&a.0));

        Ok(ranked.into_iter().map(|(_, player)| player).collect())
    }
}
