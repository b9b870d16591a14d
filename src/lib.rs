//! A registry of concurrent card-game sessions with optional `no_std` support.
//!
//! The crate provides a [`GameRegistry`] that owns every active [`Game`].
//! Each game holds a roster of [`Player`]s and any number of standard
//! 52-card [`Deck`]s, and the registry exposes the operations to seat
//! players, attach decks, deal, shuffle, and compute derived views such as
//! undealt-card counts and score rankings.
//!
//! # Example
//!
//! ```
//! use cardtable::{GameRegistry, RegistryOptions, Suit};
//!
//! let registry = GameRegistry::new(RegistryOptions::default(), 7);
//! registry.create_game(1).unwrap();
//! registry.add_deck(1).unwrap();
//!
//! let undealt = registry.undealt_cards(1).unwrap();
//! assert_eq!(undealt[&Suit::Spades], 13);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod options;
pub mod player;
pub mod registry;
pub mod tally;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, FaceValue, Suit};
pub use deck::Deck;
pub use error::GameError;
pub use game::{Game, GameId};
pub use options::{DuplicatePlayers, RegistryOptions};
pub use player::{Player, PlayerId};
pub use registry::GameRegistry;
pub use tally::{FaceValueCounts, SuitCounts, UndealtGrouping};
