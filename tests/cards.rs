//! Card, deck, player, and game entity tests.

use std::collections::HashSet;

use cardtable::{Card, DECK_SIZE, Deck, DuplicatePlayers, FaceValue, Game, GameError, Player, Suit};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, face_value: FaceValue) -> Card {
    Card::new(suit, face_value)
}

#[test]
fn new_deck_holds_every_card_once() {
    let deck = Deck::new();
    assert_eq!(deck.len(), DECK_SIZE);

    let distinct: HashSet<Card> = deck.cards().iter().copied().collect();
    assert_eq!(distinct.len(), DECK_SIZE);

    for suit in Suit::ALL {
        for face_value in FaceValue::ALL {
            assert!(distinct.contains(&card(suit, face_value)));
        }
    }
}

#[test]
fn new_deck_is_suit_major() {
    let deck = Deck::new();
    let cards = deck.cards();

    assert_eq!(cards[0], card(Suit::Hearts, FaceValue::Ace));
    assert_eq!(cards[12], card(Suit::Hearts, FaceValue::King));
    assert_eq!(cards[13], card(Suit::Diamonds, FaceValue::Ace));
    assert_eq!(cards[51], card(Suit::Spades, FaceValue::King));
}

#[test]
fn cards_compare_by_value() {
    assert_eq!(card(Suit::Clubs, FaceValue::Ten), card(Suit::Clubs, FaceValue::Ten));
    assert_ne!(card(Suit::Clubs, FaceValue::Ten), card(Suit::Spades, FaceValue::Ten));
    assert_ne!(card(Suit::Clubs, FaceValue::Ten), card(Suit::Clubs, FaceValue::Jack));
}

#[test]
fn face_value_weights_and_labels() {
    let weights: Vec<u32> = FaceValue::ALL.iter().map(|v| v.weight()).collect();
    assert_eq!(weights, (1..=13).collect::<Vec<u32>>());

    assert_eq!(card(Suit::Spades, FaceValue::Ace).to_string(), "A♠");
    assert_eq!(card(Suit::Hearts, FaceValue::Ten).to_string(), "10♥");
    assert_eq!(card(Suit::Diamonds, FaceValue::Queen).weight(), 12);
}

#[test]
fn deck_deals_from_the_front() {
    let mut deck = Deck::from_cards(vec![
        card(Suit::Hearts, FaceValue::Two),
        card(Suit::Clubs, FaceValue::Nine),
    ]);

    assert_eq!(deck.deal(), Some(card(Suit::Hearts, FaceValue::Two)));
    assert_eq!(deck.deal(), Some(card(Suit::Clubs, FaceValue::Nine)));
    assert_eq!(deck.deal(), None);
    assert!(deck.is_empty());
}

#[test]
fn shuffle_keeps_the_same_cards() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);

    assert_eq!(deck.len(), DECK_SIZE);
    assert_ne!(deck, Deck::new());

    let mut sorted = deck.cards().to_vec();
    sorted.sort();
    let mut canonical = Deck::new().cards().to_vec();
    canonical.sort();
    assert_eq!(sorted, canonical);
}

#[test]
fn shuffle_of_tiny_decks_is_a_no_op() {
    let mut rng = ChaCha8Rng::seed_from_u64(3);

    let mut empty = Deck::from_cards(Vec::new());
    empty.shuffle(&mut rng);
    assert!(empty.is_empty());

    let single = card(Suit::Spades, FaceValue::Seven);
    let mut one = Deck::from_cards(vec![single]);
    one.shuffle(&mut rng);
    assert_eq!(one.cards(), &[single]);
}

#[test]
fn game_assigns_sequential_player_ids() {
    let mut game = Game::new(1);
    assert_eq!(game.join(None).unwrap().id(), 1);
    assert_eq!(game.join(Some("bob")).unwrap().id(), 2);
    assert_eq!(game.player(2).unwrap().name(), Some("bob"));

    game.insert_player(Player::new(10), DuplicatePlayers::Allow).unwrap();
    assert_eq!(game.join(None).unwrap().id(), 11);
}

#[test]
fn game_rejects_duplicate_ids_when_asked() {
    let mut game = Game::new(1);
    game.insert_player(Player::new(4), DuplicatePlayers::Reject).unwrap();

    assert_eq!(
        game.insert_player(Player::new(4), DuplicatePlayers::Reject).unwrap_err(),
        GameError::PlayerAlreadyExists(4)
    );

    game.insert_player(Player::new(4).with_name("twin"), DuplicatePlayers::Allow)
        .unwrap();
    assert_eq!(game.players().len(), 2);
    // Lookups resolve to the first player seated under an id.
    assert_eq!(game.player(4).unwrap().name(), None);
}

#[test]
fn ranking_orders_by_descending_score() {
    let mut game = Game::new(9);
    let first = game.join(Some("first")).unwrap().id();
    let second = game.join(Some("second")).unwrap().id();
    let third = game.join(Some("third")).unwrap().id();

    game.add_deck(Deck::from_cards(vec![
        card(Suit::Hearts, FaceValue::King),
        card(Suit::Hearts, FaceValue::Queen),
        card(Suit::Hearts, FaceValue::Five),
        card(Suit::Hearts, FaceValue::Ten),
        card(Suit::Spades, FaceValue::King),
        card(Suit::Spades, FaceValue::Seven),
    ]));

    for _ in 0..3 {
        game.deal_to(first, DECK_SIZE).unwrap();
    }
    game.deal_to(second, DECK_SIZE).unwrap();
    for _ in 0..2 {
        game.deal_to(third, DECK_SIZE).unwrap();
    }

    let ranked = game.ranked_players().unwrap();
    let scores: Vec<u32> = ranked.iter().map(|p| p.score()).collect();
    let ids: Vec<u32> = ranked.iter().map(|p| p.id()).collect();

    assert_eq!(scores, vec![30, 20, 10]);
    assert_eq!(ids, vec![first, third, second]);
    assert!(game.decks()[0].is_empty());
}

#[test]
fn ranking_ties_keep_join_order() {
    let mut game = Game::new(2);
    for name in ["a", "b", "c"] {
        game.join(Some(name)).unwrap();
    }

    let names: Vec<&str> = game
        .ranked_players()
        .unwrap()
        .iter()
        .filter_map(|p| p.name())
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn ranking_an_empty_roster_fails() {
    let game = Game::new(5);
    assert_eq!(
        game.ranked_players().unwrap_err(),
        GameError::GameHasNoPlayers(5)
    );
}

#[test]
fn deal_takes_one_card_from_each_deck() {
    let mut game = Game::new(1);
    let player = game.join(None).unwrap().id();
    game.add_deck(Deck::new());
    game.add_deck(Deck::from_cards(Vec::new()));
    game.add_deck(Deck::new());

    let dealt = game.deal_to(player, DECK_SIZE).unwrap();
    assert_eq!(
        dealt,
        vec![
            card(Suit::Hearts, FaceValue::Ace),
            card(Suit::Hearts, FaceValue::Ace),
        ]
    );
    assert_eq!(game.undealt_len(), 2 * DECK_SIZE - 2);
    assert_eq!(game.player(player).unwrap().cards(), dealt.as_slice());
}

#[test]
fn deal_stops_at_the_hand_limit_mid_pass() {
    let mut game = Game::new(1);
    let player = game.join(None).unwrap().id();
    game.add_deck(Deck::new());
    game.add_deck(Deck::new());

    assert_eq!(game.deal_to(player, 3).unwrap().len(), 2);
    assert_eq!(game.deal_to(player, 3).unwrap().len(), 1);
    assert!(game.deal_to(player, 3).unwrap().is_empty());

    assert_eq!(game.player(player).unwrap().hand_len(), 3);
    assert_eq!(game.undealt_len(), 2 * DECK_SIZE - 3);
}

#[test]
fn deal_to_a_missing_player_fails() {
    let mut game = Game::new(1);
    game.add_deck(Deck::new());

    assert_eq!(
        game.deal_to(8, DECK_SIZE).unwrap_err(),
        GameError::PlayerNotFound(8)
    );
    assert_eq!(game.undealt_len(), DECK_SIZE);
}

#[test]
fn join_stops_when_player_ids_run_out() {
    let mut game = Game::new(3);
    game.insert_player(Player::new(u32::MAX - 1), DuplicatePlayers::Reject)
        .unwrap();

    assert_eq!(game.join(None).unwrap().id(), u32::MAX);
    assert_eq!(game.join(None).unwrap_err(), GameError::PlayerIdsExhausted(3));
    assert_eq!(game.join(None).unwrap_err(), GameError::PlayerIdsExhausted(3));

    let ids: Vec<u32> = game.players().iter().map(Player::id).collect();
    assert_eq!(ids, vec![u32::MAX - 1, u32::MAX]);
}

#[test]
fn deal_never_fills_a_hand_past_one_deck() {
    let mut game = Game::new(1);
    let player = game.join(None).unwrap().id();
    for _ in 0..3 {
        game.add_deck(Deck::new());
    }

    for _ in 0..DECK_SIZE {
        game.deal_to(player, usize::MAX).unwrap();
    }

    assert_eq!(game.player(player).unwrap().hand_len(), DECK_SIZE);
    assert_eq!(game.undealt_len(), 2 * DECK_SIZE);
}
