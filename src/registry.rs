//! The game registry: owner of every active game and entry point for all
//! operations on them.

use alloc::sync::Arc;
use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, info, warn};

use crate::sync::Mutex;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::GameError;
use crate::game::{Game, GameId};
use crate::options::RegistryOptions;
use crate::player::{Player, PlayerId};
use crate::tally::{SuitCounts, UndealtGrouping};

/// A registered game plus the state that lives and dies with it.
struct Session {
    /// Set once the game has been deleted.
    retired: bool,
    game: Game,
    /// Shuffle source, private to this game.
    rng: ChaCha8Rng,
}

type Slot = Arc<Mutex<Session>>;

/// Registry of concurrently running card games.
///
/// Each game sits behind its own lock, so operations on different games do
/// not contend. The registry-wide lock is held only to look up, insert, or
/// remove a game.
///
/// # Example
///
/// ```
/// use cardtable::{GameRegistry, RegistryOptions};
///
/// let registry = GameRegistry::new(RegistryOptions::default(), 42);
/// registry.create_game(1).unwrap();
/// registry.add_deck(1).unwrap();
/// let player = registry.add_player(1, Some("ada")).unwrap();
///
/// registry.shuffle(1).unwrap();
/// let dealt = registry.deal_cards(1, player.id()).unwrap();
/// assert_eq!(dealt.len(), 1);
/// ```
pub struct GameRegistry {
    options: RegistryOptions,
    games: Mutex<HashMap<GameId, Slot>>,
    /// Seeds the per-game generators.
    seeds: Mutex<ChaCha8Rng>,
}

impl GameRegistry {
    /// Creates an empty registry with the given seed.
    ///
    /// The seed makes every shuffle reproducible for a given sequence of calls.
    #[must_use]
    pub fn new(options: RegistryOptions, seed: u64) -> Self {
        Self {
            options,
            games: Mutex::new(HashMap::new()),
            seeds: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }

    /// Returns the registry options.
    #[must_use]
    pub const fn options(&self) -> &RegistryOptions {
        &self.options
    }

    /// Runs `f` against a live game.
    ///
    /// The registry lock is released before the game lock is taken.
    fn with_session<R>(
        &self,
        game_id: GameId,
        f: impl FnOnce(&mut Session) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        let slot = self
            .games
            .lock()
            .get(&game_id)
            .cloned()
            .ok_or(GameError::GameNotFound(game_id))?;

        let mut session = slot.lock();
        if session.retired {
            return Err(GameError::GameNotFound(game_id));
        }
        f(&mut *session)
    }

    fn with_game<R>(
        &self,
        game_id: GameId,
        f: impl FnOnce(&mut Game) -> Result<R, GameError>,
    ) -> Result<R, GameError> {
        self.with_session(game_id, |session| f(&mut session.game))
    }

    /// Registers a new game.
    ///
    /// The game starts with [`RegistryOptions::initial_decks`] fresh decks.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameAlreadyExists`] if the id is taken.
    pub fn create_game(&self, game_id: GameId) -> Result<(), GameError> {
        let mut games = self.games.lock();
        if games.contains_key(&game_id) {
            warn!(game_id, "game already exists");
            return Err(GameError::GameAlreadyExists(game_id));
        }

        let mut game = Game::new(game_id);
        for _ in 0..self.options.initial_decks {
            game.add_deck(Deck::new());
        }
        let rng = ChaCha8Rng::seed_from_u64(self.seeds.lock().next_u64());

        games.insert(
            game_id,
            Arc::new(Mutex::new(Session {
                retired: false,
                game,
                rng,
            })),
        );
        drop(games);

        info!(game_id, decks = self.options.initial_decks, "game created");
        Ok(())
    }

    /// Deletes a game along with its players and decks.
    ///
    /// Operations already waiting on the game observe it as missing.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn delete_game(&self, game_id: GameId) -> Result<(), GameError> {
        let slot = self
            .games
            .lock()
            .remove(&game_id)
            .ok_or(GameError::GameNotFound(game_id))?;
        slot.lock().retired = true;

        info!(game_id, "game deleted");
        Ok(())
    }

    /// Returns whether a game with this id is registered.
    #[must_use]
    pub fn contains(&self, game_id: GameId) -> bool {
        self.games.lock().contains_key(&game_id)
    }

    /// Returns the ids of all registered games in ascending order.
    #[must_use]
    pub fn game_ids(&self) -> Vec<GameId> {
        let mut ids: Vec<GameId> = self.games.lock().keys().copied().collect();
        ids.sort_unstable();
        ids
    }

    /// Returns the number of registered games.
    #[must_use]
    pub fn len(&self) -> usize {
        self.games.lock().len()
    }

    /// Returns whether no games are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.lock().is_empty()
    }

    /// Returns a copy of a game's current state.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn snapshot(&self, game_id: GameId) -> Result<Game, GameError> {
        self.with_game(game_id, |game| Ok(game.clone()))
    }

    /// Attaches a fresh 52-card deck to a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn add_deck(&self, game_id: GameId) -> Result<(), GameError> {
        self.with_game(game_id, |game| {
            game.add_deck(Deck::new());
            info!(game_id, decks = game.decks().len(), "deck added");
            Ok(())
        })
    }

    /// Returns the number of decks attached to a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn deck_count(&self, game_id: GameId) -> Result<usize, GameError> {
        self.with_game(game_id, |game| Ok(game.decks().len()))
    }

    /// Seats a new player with a server-assigned id.
    ///
    /// Ids are sequential per game, starting at 1.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id, or
    /// [`GameError::PlayerIdsExhausted`] once the game has used every id.
    pub fn add_player(&self, game_id: GameId, name: Option<&str>) -> Result<Player, GameError> {
        self.with_game(game_id, |game| {
            let player = game.join(name)?;
            info!(game_id, player_id = player.id(), "player added");
            Ok(player)
        })
    }

    /// Seats a caller-built player, keeping its id.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id, or
    /// [`GameError::PlayerAlreadyExists`] if the id is taken and duplicates
    /// are rejected.
    pub fn add_player_with_id(&self, game_id: GameId, player: Player) -> Result<Player, GameError> {
        let duplicates = self.options.duplicate_players;
        self.with_game(game_id, |game| {
            let player = game.insert_player(player, duplicates)?;
            info!(game_id, player_id = player.id(), "player added");
            Ok(player)
        })
    }

    /// Removes a player from a game.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] or [`GameError::PlayerNotFound`].
    pub fn remove_player(&self, game_id: GameId, player_id: PlayerId) -> Result<(), GameError> {
        self.with_game(game_id, |game| {
            let player = game.remove_player(player_id)?;
            info!(game_id, player_id, cards = player.hand_len(), "player removed");
            Ok(())
        })
    }

    /// Returns a copy of a player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] or [`GameError::PlayerNotFound`].
    pub fn player(&self, game_id: GameId, player_id: PlayerId) -> Result<Player, GameError> {
        self.with_game(game_id, |game| game.player(player_id).cloned())
    }

    /// Returns a player's hand.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] or [`GameError::PlayerNotFound`].
    pub fn player_cards(&self, game_id: GameId, player_id: PlayerId) -> Result<Vec<Card>, GameError> {
        self.with_game(game_id, |game| Ok(game.player(player_id)?.cards().to_vec()))
    }

    /// Deals a player one card from each non-empty deck.
    ///
    /// A hand already holding [`RegistryOptions::max_hand_size`] cards is left
    /// unchanged. Returns the cards dealt by this call.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] or [`GameError::PlayerNotFound`].
    pub fn deal_cards(&self, game_id: GameId, player_id: PlayerId) -> Result<Vec<Card>, GameError> {
        let max_hand_size = self.options.max_hand_size;
        self.with_game(game_id, |game| {
            let dealt = game.deal_to(player_id, max_hand_size)?;
            debug!(
                game_id,
                player_id,
                dealt = dealt.len(),
                undealt = game.undealt_len(),
                "cards dealt"
            );
            Ok(dealt)
        })
    }

    /// Returns the players ordered by descending hand score.
    ///
    /// A player's score is the sum of the face-value weights in hand. Equal
    /// scores keep join order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`], or [`GameError::GameHasNoPlayers`]
    /// if the roster is empty.
    pub fn sorted_players(&self, game_id: GameId) -> Result<Vec<Player>, GameError> {
        self.with_game(game_id, |game| {
            Ok(game
                .ranked_players()?
                .into_iter()
                .cloned()
                .collect())
        })
    }

    /// Counts the undealt cards of each suit across all of a game's decks.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn undealt_cards(&self, game_id: GameId) -> Result<SuitCounts, GameError> {
        self.with_game(game_id, |game| Ok(game.undealt_by_suit()))
    }

    /// Counts the undealt cards by suit and face value, both in ascending order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn sorted_remaining_undealt_cards(
        &self,
        game_id: GameId,
    ) -> Result<UndealtGrouping, GameError> {
        self.with_game(game_id, |game| Ok(game.undealt_grouped()))
    }

    /// Returns every undealt card, deck by deck in current order.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn remaining_cards(&self, game_id: GameId) -> Result<Vec<Card>, GameError> {
        self.with_game(game_id, |game| Ok(game.undealt().copied().collect()))
    }

    /// Shuffles each of a game's decks independently.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::GameNotFound`] if no game has this id.
    pub fn shuffle(&self, game_id: GameId) -> Result<(), GameError> {
        self.with_session(game_id, |session| {
            session.game.shuffle(&mut session.rng);
            debug!(game_id, decks = session.game.decks().len(), "decks shuffled");
            Ok(())
        })
    }
}

impl core::fmt::Debug for GameRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GameRegistry")
            .field("options", &self.options)
            .field("games", &self.game_ids())
            .finish_non_exhaustive()
    }
}
