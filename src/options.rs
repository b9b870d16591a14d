//! Registry configuration options.

use crate::card::DECK_SIZE;

/// How caller-supplied player ids that collide with the roster are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DuplicatePlayers {
    /// Append the player anyway; lookups resolve to the first match.
    #[default]
    Allow,
    /// Fail with [`GameError::PlayerAlreadyExists`](crate::GameError::PlayerAlreadyExists).
    Reject,
}

/// Configuration options for a [`GameRegistry`](crate::GameRegistry).
///
/// Use the builder pattern to customize options:
///
/// ```
/// use cardtable::{DuplicatePlayers, RegistryOptions};
///
/// let options = RegistryOptions::default()
///     .with_initial_decks(2)
///     .with_max_hand_size(13)
///     .with_duplicate_players(DuplicatePlayers::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryOptions {
    /// Most cards a player may hold; dealing stops at this size.
    pub max_hand_size: usize,
    /// Decks attached to every game when it is created.
    pub initial_decks: u8,
    /// Handling of caller-supplied player ids already on the roster.
    pub duplicate_players: DuplicatePlayers,
}

impl Default for RegistryOptions {
    fn default() -> Self {
        Self {
            max_hand_size: DECK_SIZE,
            initial_decks: 0,
            duplicate_players: DuplicatePlayers::Allow,
        }
    }
}

impl RegistryOptions {
    /// Sets the maximum hand size.
    ///
    /// Values above [`DECK_SIZE`] are clamped to it.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::{DECK_SIZE, RegistryOptions};
    ///
    /// let options = RegistryOptions::default().with_max_hand_size(100);
    /// assert_eq!(options.max_hand_size, DECK_SIZE);
    /// ```
    #[must_use]
    pub fn with_max_hand_size(mut self, max_hand_size: usize) -> Self {
        self.max_hand_size = max_hand_size.min(DECK_SIZE);
        self
    }

    /// Sets the number of decks each new game starts with.
    ///
    /// # Example
    ///
    /// ```
    /// use cardtable::RegistryOptions;
    ///
    /// let options = RegistryOptions::default().with_initial_decks(1);
    /// assert_eq!(options.initial_decks, 1);
    /// ```
    #[must_use]
    pub const fn with_initial_decks(mut self, initial_decks: u8) -> Self {
        self.initial_decks = initial_decks;
        self
    }

    /// Sets how duplicate caller-supplied player ids are handled.
    #[must_use]
    pub const fn with_duplicate_players(mut self, duplicate_players: DuplicatePlayers) -> Self {
        self.duplicate_players = duplicate_players;
        self
    }
}
