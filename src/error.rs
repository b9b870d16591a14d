//! Error types for registry operations.

use thiserror::Error;

use crate::game::GameId;
use crate::player::PlayerId;

/// Errors returned by [`GameRegistry`](crate::GameRegistry) operations.
///
/// Every variant is an ordinary, recoverable outcome carrying the offending id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    /// A game with this id is already registered.
    #[error("game {0} already exists")]
    GameAlreadyExists(GameId),
    /// No game with this id is registered.
    #[error("game {0} not found")]
    GameNotFound(GameId),
    /// The game has no player with this id.
    #[error("player {0} not found")]
    PlayerNotFound(PlayerId),
    /// The game's roster is empty.
    #[error("game {0} does not have players")]
    GameHasNoPlayers(GameId),
    /// The roster already holds a player with this id.
    ///
    /// Caller-supplied ids hit this only when duplicate players are rejected,
    /// see [`DuplicatePlayers`](crate::DuplicatePlayers). Server-assigned ids
    /// are always checked.
    #[error("player {0} already exists")]
    PlayerAlreadyExists(PlayerId),
    /// Every player ID of the game has been handed out.
    #[error("game {0} has no player ids left")]
    PlayerIdsExhausted(GameId),
}
