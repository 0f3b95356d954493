//! Game integration tests.

use bjgame::{
    Card, Deck, EmptyDeckError, Game, GameError, GameOptions, GameState, Outcome, Rank, Suit,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn game_from_draws(draws: &[Card]) -> Game {
    game_with_options(GameOptions::default(), draws)
}

fn game_with_options(options: GameOptions, draws: &[Card]) -> Game {
    Game::from_deck(options, Deck::from_draw_order(draws))
}

#[test]
fn start_round_deals_player_dealer_alternately() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Two),    // player
        card(Suit::Hearts, Rank::Three),  // dealer
        card(Suit::Hearts, Rank::Four),   // player
        card(Suit::Hearts, Rank::Five),   // dealer
        card(Suit::Hearts, Rank::Six),    // left in deck
    ]);
    assert_eq!(game.state(), GameState::NotStarted);

    game.start_round().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Four)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Suit::Hearts, Rank::Three), card(Suit::Hearts, Rank::Five)]
    );
    assert_eq!(game.player_value(), 6);
    assert_eq!(game.dealer_value(), 8);
    assert_eq!(game.cards_remaining(), 1);
}

#[test]
fn hit_appends_one_card_and_reports_bust() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Nine),   // dealer
        card(Suit::Spades, Rank::Six),   // player
        card(Suit::Diamonds, Rank::Eight), // dealer
        card(Suit::Hearts, Rank::Five),  // player hit
        card(Suit::Clubs, Rank::King),   // player hit
    ]);
    game.start_round().unwrap();

    assert!(!game.hit().unwrap());
    assert_eq!(game.player_hand().len(), 3);
    assert_eq!(game.player_value(), 21);
    assert_eq!(game.state(), GameState::PlayerTurn);

    assert!(game.hit().unwrap());
    assert_eq!(game.player_hand().len(), 4);
    assert_eq!(game.player_value(), 31);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.dealer_hand().len(), 2);

    assert_eq!(game.determine_winner(), Ok(Outcome::PlayerBust));
    assert_eq!(
        game.dealer_hit(),
        Err(GameError::InvalidState(GameState::RoundOver))
    );
}

#[test]
fn dealer_draws_on_16() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Ten),    // dealer
        card(Suit::Spades, Rank::Nine),  // player
        card(Suit::Diamonds, Rank::Six), // dealer
        card(Suit::Clubs, Rank::Three),  // dealer draw
        card(Suit::Hearts, Rank::Two),   // must stay in deck
    ]);
    game.start_round().unwrap();
    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.dealer_value(), 16);

    assert!(game.dealer_hit().unwrap());
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.dealer_value(), 19);
    assert_eq!(game.state(), GameState::DealerTurn);

    assert!(!game.dealer_hit().unwrap());
    assert_eq!(game.dealer_hand().len(), 3);
    assert_eq!(game.cards_remaining(), 1);
    assert_eq!(game.state(), GameState::RoundOver);

    assert_eq!(game.determine_winner(), Ok(Outcome::Push));
}

#[test]
fn dealer_stands_on_hard_and_soft_17() {
    for hole in [Rank::Seven, Rank::Ace] {
        let up = if hole == Rank::Ace { Rank::Six } else { Rank::Ten };
        let mut game = game_from_draws(&[
            card(Suit::Hearts, Rank::Ten),  // player
            card(Suit::Clubs, up),          // dealer
            card(Suit::Spades, Rank::Ten),  // player
            card(Suit::Diamonds, hole),     // dealer
            card(Suit::Hearts, Rank::Four), // never drawn
        ]);
        game.start_round().unwrap();
        game.stand().unwrap();
        assert_eq!(game.dealer_value(), 17);

        assert!(!game.dealer_hit().unwrap());
        assert_eq!(game.dealer_hand().len(), 2);
        assert_eq!(game.cards_remaining(), 1);
        assert_eq!(game.determine_winner(), Ok(Outcome::PlayerWins));
    }
}

#[test]
fn dealer_hits_soft_17_when_configured() {
    let options = GameOptions::default().with_stand_on_soft_17(false);
    let mut game = game_with_options(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),   // player
            card(Suit::Clubs, Rank::Ace),    // dealer
            card(Suit::Spades, Rank::Eight), // player
            card(Suit::Diamonds, Rank::Six), // dealer
            card(Suit::Hearts, Rank::Two),   // dealer draw
        ],
    );
    game.start_round().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_hand().is_soft());

    assert!(game.dealer_hit().unwrap());
    assert_eq!(game.dealer_value(), 19);
    assert!(!game.dealer_hit().unwrap());
    assert_eq!(game.determine_winner(), Ok(Outcome::DealerWins));
}

#[test]
fn dealer_bust_stops_drawing() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Nine),  // player
        card(Suit::Clubs, Rank::Ten),    // dealer
        card(Suit::Spades, Rank::Ten),   // player
        card(Suit::Diamonds, Rank::Six), // dealer
        card(Suit::Hearts, Rank::King),  // dealer draw
    ]);
    game.start_round().unwrap();
    game.stand().unwrap();

    assert!(!game.dealer_hit().unwrap());
    assert_eq!(game.dealer_value(), 26);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.determine_winner(), Ok(Outcome::DealerBust));
}

#[test]
fn dealer_play_draws_until_it_stands() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),     // player
        card(Suit::Clubs, Rank::Two),      // dealer
        card(Suit::Spades, Rank::Queen),   // player
        card(Suit::Diamonds, Rank::Three), // dealer
        card(Suit::Hearts, Rank::Four),    // dealer draw
        card(Suit::Clubs, Rank::Five),     // dealer draw
        card(Suit::Spades, Rank::Three),   // dealer draw
        card(Suit::Hearts, Rank::King),    // never drawn
    ]);
    game.start_round().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Spades, Rank::Three),
        ]
    );
    assert_eq!(game.dealer_value(), 17);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.determine_winner(), Ok(Outcome::PlayerWins));
}

#[test]
fn outcome_from_final_values() {
    assert_eq!(Outcome::from_values(20, 19), Outcome::PlayerWins);
    assert_eq!(Outcome::from_values(22, 18), Outcome::PlayerBust);
    assert_eq!(Outcome::from_values(19, 22), Outcome::DealerBust);
    assert_eq!(Outcome::from_values(18, 18), Outcome::Push);
    assert_eq!(Outcome::from_values(17, 20), Outcome::DealerWins);
    assert_eq!(Outcome::from_values(23, 25), Outcome::PlayerBust);

    assert_eq!(Outcome::PlayerBust.to_string(), "player busts, house wins");
    assert_eq!(Outcome::Push.to_string(), "push/tie");
    assert!(Outcome::DealerBust.player_won());
    assert!(!Outcome::Push.player_won());
}

#[test]
fn operations_reject_wrong_state() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
        card(Suit::Diamonds, Rank::Nine),
    ]);
    let not_started = Err(GameError::InvalidState(GameState::NotStarted));
    assert_eq!(game.hit(), not_started.map(|()| false));
    assert_eq!(game.stand(), not_started);
    assert_eq!(game.dealer_hit(), not_started.map(|()| false));
    assert_eq!(game.dealer_play(), not_started.map(|()| Vec::new()));
    assert_eq!(game.determine_winner(), not_started.map(|()| Outcome::Push));

    game.start_round().unwrap();
    let player_turn = GameError::InvalidState(GameState::PlayerTurn);
    assert_eq!(game.start_round(), Err(player_turn));
    assert_eq!(game.dealer_hit(), Err(player_turn));
    assert_eq!(game.determine_winner(), Err(player_turn));
    assert_eq!(
        player_turn.to_string(),
        "operation not valid in the PlayerTurn state"
    );

    game.stand().unwrap();
    let dealer_turn = GameError::InvalidState(GameState::DealerTurn);
    assert_eq!(game.hit(), Err(dealer_turn));
    assert_eq!(game.stand(), Err(dealer_turn));
    assert_eq!(game.start_round(), Err(dealer_turn));
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn start_round_with_short_deck_changes_nothing() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
    ]);

    assert_eq!(game.start_round(), Err(GameError::EmptyDeck(EmptyDeckError)));
    assert_eq!(game.state(), GameState::NotStarted);
    assert!(game.player_hand().is_empty());
    assert!(game.dealer_hand().is_empty());
    assert_eq!(game.cards_remaining(), 3);
}

#[test]
fn deck_runs_out_between_rounds() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Ten),    // dealer
        card(Suit::Spades, Rank::Eight), // player
        card(Suit::Diamonds, Rank::Seven), // dealer
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
    ]);
    game.start_round().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.determine_winner(), Ok(Outcome::PlayerWins));

    let err = game.start_round().unwrap_err();
    assert_eq!(err, GameError::EmptyDeck(EmptyDeckError));
    assert_eq!(err.to_string(), "the deck is empty");
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player_value(), 18);
    assert_eq!(game.cards_remaining(), 2);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Spades, Rank::Six),
        card(Suit::Diamonds, Rank::Seven),
    ]);
    game.start_round().unwrap();

    assert_eq!(game.hit(), Err(GameError::EmptyDeck(EmptyDeckError)));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);
}

#[test]
fn new_round_replaces_hands() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Ten),     // dealer
        card(Suit::Spades, Rank::Four),   // player
        card(Suit::Diamonds, Rank::Nine), // dealer
        card(Suit::Hearts, Rank::King),   // player hit, bust
        card(Suit::Hearts, Rank::Two),    // round two
        card(Suit::Clubs, Rank::Three),
        card(Suit::Spades, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
    ]);
    game.start_round().unwrap();
    assert!(game.hit().unwrap());
    assert_eq!(game.determine_winner(), Ok(Outcome::PlayerBust));

    game.start_round().unwrap();
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.player_hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Spades, Rank::Five)]
    );
    assert_eq!(
        game.dealer_hand().cards(),
        &[card(Suit::Clubs, Rank::Three), card(Suit::Diamonds, Rank::Six)]
    );
    assert_eq!(game.cards_remaining(), 0);
}

#[test]
fn same_seed_deals_same_round() {
    let mut first = Game::new(GameOptions::default(), 7);
    let mut second = Game::with_rng(GameOptions::default(), &mut ChaCha8Rng::seed_from_u64(7));
    first.start_round().unwrap();
    second.start_round().unwrap();

    assert_eq!(first.player_hand(), second.player_hand());
    assert_eq!(first.dealer_hand(), second.dealer_hand());
    assert_eq!(first.cards_remaining(), 48);
}

#[test]
fn options_name_the_parties() {
    let options = GameOptions::default()
        .with_player_name("Alice")
        .with_dealer_name("House");
    let game = Game::new(options, 1);

    assert_eq!(game.player().name(), "Alice");
    assert_eq!(game.dealer().name(), "House");
    assert!(game.options().stand_on_soft_17);
}
