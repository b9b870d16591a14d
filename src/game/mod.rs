//! Game sessions: a roster of players and the decks they are dealt from.

use alloc::vec::Vec;

use crate::deck::Deck;
use crate::error::GameError;
use crate::options::DuplicatePlayers;
use crate::player::{Player, PlayerId};

mod dealing;
mod views;

/// Identifier of a game within a registry.
pub type GameId = u32;

/// A card-game session.
///
/// The game exclusively owns its players and decks; they are created by
/// add calls and dropped when removed or when the game itself is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Game {
    id: GameId,
    /// Players in the order they joined.
    players: Vec<Player>,
    /// Decks in the order they were added.
    decks: Vec<Deck>,
    /// Next server-assigned player ID; `None` once the ID space is used up.
    #[cfg_attr(feature = "serde", serde(skip))]
    next_player_id: Option<PlayerId>,
}

impl Game {
    /// Creates an empty game.
    #[must_use]
    pub const fn new(id: GameId) -> Self {
        Self {
            id,
            players: Vec::new(),
            decks: Vec::new(),
            next_player_id: Some(1),
        }
    }

    /// Returns the game ID.
    #[must_use]
    pub const fn id(&self) -> GameId {
        self.id
    }

    /// Returns the roster in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the decks in the order they were added.
    #[must_use]
    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Attaches a deck to the game.
    pub fn add_deck(&mut self, deck: Deck) {
        self.decks.push(deck);
    }

    /// Seats a new player under the next sequential ID and returns a copy.
    ///
    /// IDs start at 1 and never repeat within a game, including IDs that were
    /// supplied through [`Game::insert_player`].
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerIdsExhausted`] once an ID of `u32::MAX` has
    /// been handed out or inserted, or [`GameError::PlayerAlreadyExists`] if
    /// the next ID is somehow already seated.
    pub fn join(&mut self, name: Option<&str>) -> Result<Player, GameError> {
        let id = self
            .next_player_id
            .ok_or(GameError::PlayerIdsExhausted(self.id))?;
        if self.player(id).is_ok() {
            return Err(GameError::PlayerAlreadyExists(id));
        }

        let player = match name {
            Some(name) => Player::new(id).with_name(name),
            None => Player::new(id),
        };
        self.next_player_id = id.checked_add(1);
        self.players.push(player.clone());
        Ok(player)
    }

    /// Seats a caller-built player, keeping its ID, and returns a copy.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerAlreadyExists`] if the ID is taken and
    /// `duplicates` is [`DuplicatePlayers::Reject`].
    pub fn insert_player(
        &mut self,
        player: Player,
        duplicates: DuplicatePlayers,
    ) -> Result<Player, GameError> {
        let id = player.id();
        if duplicates == DuplicatePlayers::Reject && self.player(id).is_ok() {
            return Err(GameError::PlayerAlreadyExists(id));
        }

        if self.next_player_id.is_some_and(|next| id >= next) {
            self.next_player_id = id.checked_add(1);
        }
        self.players.push(player.clone());
        Ok(player)
    }

    /// Removes a player and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player has this ID.
    pub fn remove_player(&mut self, player_id: PlayerId) -> Result<Player, GameError> {
        let index = self.position(player_id)?;
        Ok(self.players.remove(index))
    }

    /// Returns the first player with this ID.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::PlayerNotFound`] if no player has this ID.
    pub fn player(&self, player_id: PlayerId) -> Result<&Player, GameError> {
        self.players
            .iter()
            .find(|player| player.id() == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))
    }

    fn position(&self, player_id: PlayerId) -> Result<usize, GameError> {
        self.players
            .iter()
            .position(|player| player.id() == player_id)
            .ok_or(GameError::PlayerNotFound(player_id))
    }
}
