use alloc::vec::Vec;

use rand::Rng;

use crate::card::{Card, DECK_SIZE};
use crate::error::GameError;
use crate::player::PlayerId;

use super::Game;

impl Game {
    /// Deals one card from the front of every non-empty deck to a player.
    ///
    /// Decks are visited in the order they were added. Each dealt card leaves
    /// its deck. Nothing is dealt once the hand reaches `max_hand_size`, so a
    /// call on a full hand is a successful no-op. The limit never exceeds
    /// [`DECK_SIZE`].
    ///
    /// Returns the cards dealt by this call.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player has this ID.
    pub fn deal_to(
        &mut self,
        player_id: PlayerId,
        max_hand_size: usize,
    ) -> Result<Vec<Card>, GameError> {
        let max_hand_size = max_hand_size.min(DECK_SIZE);
        let index = self.position(player_id)?;
        let player = &mut self.players[index];

        let mut dealt = Vec::new();
        for deck in &mut self.decks {
            if player.hand_len() >= max_hand_size {
                break;
            }
            if let Some(card) = deck.deal() {
                player.receive(card);
                dealt.push(card);
            }
        }

        Ok(dealt)
    }

    /// Shuffles each deck independently with the given generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for deck in &mut self.decks {
            deck.shuffle(rng);
        }
    }
}
