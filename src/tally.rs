//! Aggregated views over a game's undealt cards.

use alloc::collections::BTreeMap;

use crate::card::{FaceValue, Suit};

/// Undealt card count per suit, ordered by suit.
pub type SuitCounts = BTreeMap<Suit, usize>;

/// Undealt card count per face value, ordered by face value.
pub type FaceValueCounts = BTreeMap<FaceValue, usize>;

/// Undealt cards grouped by suit, then face value.
///
/// Each leaf is the number of undealt cards with that suit and face value.
/// With several decks attached a leaf can exceed one.
pub type UndealtGrouping = BTreeMap<Suit, FaceValueCounts>;
