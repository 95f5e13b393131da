//! Game integration tests.

#![allow(clippy::float_cmp, clippy::cast_possible_wrap)]

use bjsim::{
    Action, ActionError, BetError, Card, DECK_SIZE, DealError, DeckError, FlatBettingStrategy,
    Game, GameOptions, GameState, HandOutcome, PlayError, Player, Rank, RoundError, RoundingMode,
    Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// One player with 1000 and the default strategy, who bets 100.
fn single_player_game(draws: &[Card]) -> Game {
    let mut game = Game::new(1, 1000, GameOptions::default(), 1);
    assert_eq!(game.place_bets(), 1);
    game.deck.stack(draws);
    game
}

fn flat_player(name: &str, money: usize, amount: usize) -> Player {
    Player::with_strategy(name, money, Box::new(FlatBettingStrategy::new(amount)))
}

#[test]
fn default_bet_is_ten_percent_of_bankroll() {
    let mut game = Game::new(1, 1000, GameOptions::default(), 1);
    assert_eq!(game.place_bet(0, 10, 500), Ok(100));

    let player = game.player(0).unwrap();
    assert_eq!(player.money(), 900);
    assert_eq!(player.current_bet(), 100);
}

#[test]
fn bet_errors() {
    let players = vec![flat_player("Short", 5, 10), flat_player("Zero", 50, 0)];
    let mut game = Game::with_players(players, GameOptions::default(), 1);

    assert_eq!(
        game.place_bet(0, 10, 500),
        Err(BetError::InsufficientFunds { bet: 10, money: 5 })
    );
    assert_eq!(game.place_bet(1, 0, 0), Err(BetError::ZeroBet));
    assert_eq!(game.place_bet(2, 10, 500), Err(BetError::PlayerNotFound));

    // Rejected bets leave the bankrolls alone.
    assert_eq!(game.player(0).unwrap().money(), 5);
    assert_eq!(game.player(0).unwrap().current_bet(), 0);
    assert_eq!(game.player(1).unwrap().money(), 50);

    assert_eq!(game.place_bet(1, 10, 500), Ok(10));
    assert_eq!(game.place_bet(1, 10, 500), Err(BetError::AlreadyPlaced));

    // Only the player who could bet is dealt in.
    game.deal_initial_cards().unwrap();
    assert_eq!(game.betting_order(), &[1]);
    assert_eq!(game.place_bet(0, 1, 1), Err(BetError::InvalidState));
}

#[test]
fn bankroll_below_minimum_sits_out() {
    let players = vec![Player::new("Short", 5), Player::new("Flush", 1000)];
    let mut game = Game::with_players(players, GameOptions::default(), 1);

    assert!(!game.can_bet(0));
    assert!(game.can_bet(1));
    assert!(!game.can_bet(2));

    assert_eq!(game.place_bets(), 1);
    assert_eq!(game.player(0).unwrap().money(), 5);
    assert_eq!(game.player(0).unwrap().current_bet(), 0);

    game.deal_initial_cards().unwrap();
    assert_eq!(game.betting_order(), &[1]);
    assert!(game.players_have_money());
}

#[test]
fn deal_errors() {
    let mut game = Game::new(1, 1000, GameOptions::default(), 1);
    assert_eq!(game.deal_initial_cards(), Err(DealError::NoBets));

    game.place_bets();
    game.deck.stack(&[
        card(Rank::Nine, Suit::Hearts),
        card(Rank::Five, Suit::Clubs),
        card(Rank::Seven, Suit::Diamonds),
    ]);
    assert_eq!(
        game.deal_initial_cards(),
        Err(DealError::Deck(DeckError::Empty))
    );
    assert_eq!(game.state(), GameState::AwaitingBets);
    assert_eq!(game.cards_remaining(), 3);
    assert!(game.player(0).unwrap().hand().is_empty());
}

#[test]
fn deal_is_round_robin_with_dealer_last() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Two, Suit::Hearts),    // player 1
        card(Rank::Three, Suit::Hearts),  // player 2
        card(Rank::Four, Suit::Hearts),   // dealer hole
        card(Rank::Five, Suit::Hearts),   // player 1
        card(Rank::Six, Suit::Hearts),    // player 2
        card(Rank::Seven, Suit::Hearts),  // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert_eq!(game.state(), GameState::Dealt);
    assert_eq!(game.cards_remaining(), 0);

    assert_eq!(
        game.player(0).unwrap().hand().cards(),
        &[card(Rank::Two, Suit::Hearts), card(Rank::Five, Suit::Hearts)]
    );
    assert_eq!(
        game.player(1).unwrap().hand().cards(),
        &[card(Rank::Three, Suit::Hearts), card(Rank::Six, Suit::Hearts)]
    );
    assert_eq!(game.dealer().hand_value(), 11);
    assert_eq!(
        game.dealer().up_card(),
        Some(&card(Rank::Seven, Suit::Hearts))
    );
}

#[test]
fn basic_round_flow_player_wins() {
    let mut game = single_player_game(&[
        card(Rank::King, Suit::Spades),    // player
        card(Rank::King, Suit::Diamonds),  // dealer hole
        card(Rank::Queen, Suit::Hearts),   // player
        card(Rank::Seven, Suit::Clubs),    // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert!(!game.check_for_blackjacks().unwrap());
    assert_eq!(game.state(), GameState::PlayerTurns);
    assert_eq!(game.current_player(), Some(0));

    assert_eq!(game.player_action(0, Action::Stand), Ok(true));
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.current_player(), None);

    let drawn = game.dealer_turn().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(game.state(), GameState::Settlement);

    let result = game.settle_round().unwrap();
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(result.dealer_value, 17);
    assert!(!result.settled_on_blackjack);

    let player_result = result.player(0).unwrap();
    assert_eq!(player_result.outcome, HandOutcome::Win);
    assert_eq!(player_result.payout, 200);
    assert_eq!(player_result.net, 100);
    assert_eq!(player_result.player_value, 20);
    assert_eq!(game.player(0).unwrap().money(), 1100);
    assert_eq!(game.last_result(), Some(&result));
}

#[test]
fn dealer_draws_below_seventeen_and_busts() {
    let mut game = single_player_game(&[
        card(Rank::Ten, Suit::Spades),    // player
        card(Rank::Ten, Suit::Diamonds),  // dealer hole
        card(Rank::Eight, Suit::Hearts),  // player
        card(Rank::Six, Suit::Clubs),     // dealer up
        card(Rank::King, Suit::Spades),   // dealer draw
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    game.player_action(0, Action::Stand).unwrap();

    let drawn = game.dealer_turn().unwrap();
    assert_eq!(drawn, vec![card(Rank::King, Suit::Spades)]);

    let result = game.settle_round().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(game.player(0).unwrap().money(), 1100);
}

#[test]
fn lower_total_loses_and_equal_total_pushes() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Ten, Suit::Spades),    // player 1
        card(Rank::Ten, Suit::Hearts),    // player 2
        card(Rank::Ten, Suit::Diamonds),  // dealer hole
        card(Rank::Six, Suit::Spades),    // player 1
        card(Rank::Eight, Suit::Hearts),  // player 2
        card(Rank::Eight, Suit::Clubs),   // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    game.player_action(0, Action::Stand).unwrap();
    assert_eq!(game.current_player(), Some(1));
    game.player_action(1, Action::Stand).unwrap();
    game.dealer_turn().unwrap();

    let result = game.settle_round().unwrap();
    assert_eq!(result.player(0).unwrap().outcome, HandOutcome::Lose);
    assert_eq!(result.player(1).unwrap().outcome, HandOutcome::Push);
    assert_eq!(game.player(0).unwrap().money(), 900);
    assert_eq!(game.player(1).unwrap().money(), 1000);
}

#[test]
fn player_blackjack_is_paid_at_the_check() {
    let mut game = single_player_game(&[
        card(Rank::Ace, Suit::Spades),     // player
        card(Rank::Nine, Suit::Diamonds),  // dealer hole
        card(Rank::King, Suit::Hearts),    // player
        card(Rank::Eight, Suit::Clubs),    // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert!(game.check_for_blackjacks().unwrap());
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.current_player(), None);

    let result = game.last_result().unwrap();
    assert!(result.settled_on_blackjack);
    assert_eq!(result.players[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.players[0].payout, 250);
    assert_eq!(game.player(0).unwrap().money(), 1150);

    assert_eq!(
        game.player_action(0, Action::Hit),
        Err(ActionError::InvalidState)
    );
}

#[test]
fn blackjack_ends_the_round_for_everyone() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Ace, Suit::Spades),    // player 1
        card(Rank::Ten, Suit::Clubs),     // player 2
        card(Rank::Nine, Suit::Hearts),   // dealer hole
        card(Rank::King, Suit::Hearts),   // player 1
        card(Rank::Nine, Suit::Diamonds), // player 2
        card(Rank::Eight, Suit::Spades),  // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert!(game.check_for_blackjacks().unwrap());

    // Player 2 never gets a turn and forfeits the stake: any natural ends the round.
    let result = game.last_result().unwrap();
    assert_eq!(result.player(0).unwrap().outcome, HandOutcome::Blackjack);
    assert_eq!(result.player(1).unwrap().outcome, HandOutcome::Forfeit);
    assert_eq!(result.player(1).unwrap().net, -100);
    assert_eq!(game.player(0).unwrap().money(), 1150);
    assert_eq!(game.player(1).unwrap().money(), 900);
}

#[test]
fn dealer_blackjack_beats_player() {
    let mut game = single_player_game(&[
        card(Rank::Ten, Suit::Spades),    // player
        card(Rank::Ace, Suit::Diamonds),  // dealer hole
        card(Rank::Nine, Suit::Hearts),   // player
        card(Rank::King, Suit::Clubs),    // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert!(game.check_for_blackjacks().unwrap());

    let result = game.last_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(game.player(0).unwrap().money(), 900);
}

#[test]
fn both_blackjack_push() {
    let mut game = single_player_game(&[
        card(Rank::Ace, Suit::Spades),    // player
        card(Rank::Ace, Suit::Diamonds),  // dealer hole
        card(Rank::King, Suit::Hearts),   // player
        card(Rank::Queen, Suit::Clubs),   // dealer up
    ]);

    game.deal_initial_cards().unwrap();
    assert!(game.check_for_blackjacks().unwrap());

    let result = game.last_result().unwrap();
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
    assert_eq!(result.players[0].net, 0);
    assert_eq!(game.player(0).unwrap().money(), 1000);
}

#[test]
fn blackjack_payout_rounding() {
    let options = GameOptions::default().with_rounding_blackjack(RoundingMode::Up);
    let mut game = Game::new(1, 150, options, 1);
    assert_eq!(game.place_bets(), 1);
    game.deck.stack(&[
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Diamonds),
        card(Rank::Jack, Suit::Hearts),
        card(Rank::Eight, Suit::Clubs),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();

    // 15 × 2.5 = 37.5, rounded up.
    assert_eq!(game.last_result().unwrap().players[0].payout, 38);
    assert_eq!(game.player(0).unwrap().money(), 135 + 38);
}

#[test]
fn bust_loses_and_dealer_skips_drawing() {
    let mut game = single_player_game(&[
        card(Rank::Ten, Suit::Spades),    // player
        card(Rank::Ten, Suit::Diamonds),  // dealer hole
        card(Rank::Six, Suit::Hearts),    // player
        card(Rank::Five, Suit::Clubs),    // dealer up
        card(Rank::King, Suit::Spades),   // player hit
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();

    assert_eq!(game.player_action(0, Action::Hit), Ok(true));
    assert!(game.player(0).unwrap().has_busted());
    assert_eq!(game.state(), GameState::DealerTurn);

    // The dealer holds 15 but has nobody left to beat.
    assert!(game.dealer_turn().unwrap().is_empty());
    assert_eq!(game.dealer().hand_value(), 15);

    let result = game.settle_round().unwrap();
    assert_eq!(result.players[0].outcome, HandOutcome::Lose);
    assert_eq!(result.players[0].player_value, 26);
    assert_eq!(game.player(0).unwrap().money(), 900);
}

#[test]
fn bust_loses_even_when_dealer_busts() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Ten, Suit::Spades),    // player 1
        card(Rank::Ten, Suit::Hearts),    // player 2
        card(Rank::Ten, Suit::Diamonds),  // dealer hole
        card(Rank::Six, Suit::Spades),    // player 1
        card(Rank::Eight, Suit::Hearts),  // player 2
        card(Rank::Six, Suit::Clubs),     // dealer up
        card(Rank::King, Suit::Spades),   // player 1 hit
        card(Rank::Queen, Suit::Clubs),   // dealer draw
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    assert_eq!(game.player_action(0, Action::Hit), Ok(true));
    assert_eq!(game.player_action(1, Action::Stand), Ok(true));

    // Player 2 is still in, so the dealer plays out 16 and busts.
    assert_eq!(game.dealer_turn().unwrap().len(), 1);

    let result = game.settle_round().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.player(0).unwrap().outcome, HandOutcome::Lose);
    assert_eq!(result.player(1).unwrap().outcome, HandOutcome::Win);
    assert_eq!(game.player(0).unwrap().money(), 900);
    assert_eq!(game.player(1).unwrap().money(), 1100);
}

#[test]
fn hit_keeps_the_turn_until_stand() {
    let mut game = single_player_game(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Four, Suit::Spades),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();

    assert_eq!(game.player_action(0, Action::Hit), Ok(false));
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.player(0).unwrap().hand_value(), 9);

    // Three cards: doubling is no longer allowed.
    assert!(!game.can_double(0));
    assert_eq!(
        game.player_action(0, Action::DoubleDown),
        Err(ActionError::CannotDouble)
    );
    assert_eq!(game.current_player(), Some(0));
    assert_eq!(game.player(0).unwrap().current_bet(), 100);
}

#[test]
fn double_down_adds_to_bet_and_ends_turn() {
    let players = vec![flat_player("Doubler", 1000, 100)];
    let mut game = Game::with_players(players, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Five, Suit::Hearts),   // player
        card(Rank::Ten, Suit::Clubs),     // dealer hole
        card(Rank::Six, Suit::Diamonds),  // player
        card(Rank::Seven, Suit::Spades),  // dealer up
        card(Rank::Nine, Suit::Spades),   // double draw
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    assert!(game.can_double(0));

    assert_eq!(game.player_action(0, Action::DoubleDown), Ok(true));
    assert_eq!(game.state(), GameState::DealerTurn);

    let player = game.player(0).unwrap();
    assert_eq!(player.current_bet(), 200);
    assert_eq!(player.money(), 800);
    assert_eq!(player.hand().len(), 3);
    assert_eq!(player.hand_value(), 20);

    game.dealer_turn().unwrap();
    let result = game.settle_round().unwrap();
    assert_eq!(result.players[0].bet, 200);
    assert_eq!(result.players[0].payout, 400);
    assert_eq!(game.player(0).unwrap().money(), 1200);
}

#[test]
fn double_down_with_default_strategy_raises_by_its_bet() {
    let mut game = single_player_game(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Two, Suit::Spades),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    game.player_action(0, Action::DoubleDown).unwrap();

    // 10% of the remaining 900, capped by the current bet of 100.
    let player = game.player(0).unwrap();
    assert_eq!(player.current_bet(), 190);
    assert_eq!(player.money(), 810);
}

#[test]
fn double_down_needs_bankroll_to_cover_bet() {
    let players = vec![flat_player("Broke", 150, 100)];
    let mut game = Game::with_players(players, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Five, Suit::Hearts),
        card(Rank::Ten, Suit::Clubs),
        card(Rank::Six, Suit::Diamonds),
        card(Rank::Seven, Suit::Spades),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();

    assert!(!game.can_double(0));
    assert_eq!(
        game.player_action(0, Action::DoubleDown),
        Err(ActionError::CannotDouble)
    );
    assert_eq!(game.player(0).unwrap().money(), 50);
}

#[test]
fn actions_are_checked_against_the_turn() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Nine, Suit::Clubs),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Eight, Suit::Spades),
        card(Rank::Seven, Suit::Clubs),
    ]);

    game.deal_initial_cards().unwrap();
    assert_eq!(
        game.player_action(0, Action::Stand),
        Err(ActionError::InvalidState)
    );
    game.check_for_blackjacks().unwrap();

    assert_eq!(
        game.player_action(1, Action::Hit),
        Err(ActionError::NotYourTurn)
    );
    assert_eq!(
        game.player_action(5, Action::Hit),
        Err(ActionError::PlayerNotFound)
    );
    assert!(!game.can_double(1));

    game.player_action(0, Action::Stand).unwrap();
    assert_eq!(game.current_player(), Some(1));
    assert_eq!(
        game.player_action(0, Action::Stand),
        Err(ActionError::NotYourTurn)
    );
}

#[test]
fn round_steps_reject_wrong_state() {
    let mut game = Game::new(1, 1000, GameOptions::default(), 1);

    assert_eq!(game.check_for_blackjacks(), Err(RoundError::InvalidState));
    assert_eq!(game.dealer_turn(), Err(RoundError::InvalidState));
    assert_eq!(game.settle_round(), Err(RoundError::InvalidState));
    assert_eq!(game.next_round(), Err(RoundError::InvalidState));
    assert_eq!(
        game.player_action(0, Action::Hit),
        Err(ActionError::InvalidState)
    );
}

#[test]
fn empty_deck_mid_round_is_aborted_with_refunds() {
    let mut game = single_player_game(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();

    assert_eq!(
        game.player_action(0, Action::Hit),
        Err(ActionError::Deck(DeckError::Empty))
    );
    assert_eq!(game.current_player(), Some(0));

    let result = game.abort_round().unwrap();
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
    assert_eq!(result.players[0].payout, 100);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player(0).unwrap().money(), 1000);
}

#[test]
fn abort_before_the_deal_refunds_placed_bets() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 1);
    assert_eq!(game.place_bet(0, 10, 500), Ok(100));
    assert_eq!(game.player(0).unwrap().money(), 900);

    let result = game.abort_round().unwrap();
    assert_eq!(result.players.len(), 1);
    assert_eq!(result.players[0].seat, 0);
    assert_eq!(result.players[0].outcome, HandOutcome::Push);
    assert_eq!(result.players[0].payout, 100);
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player(0).unwrap().money(), 1000);
    assert_eq!(game.player(0).unwrap().current_bet(), 0);
    assert_eq!(game.player(1).unwrap().money(), 1000);

    assert_eq!(game.abort_round(), Err(RoundError::InvalidState));
    assert_eq!(game.next_round(), Ok(true));
}

#[test]
fn next_round_clears_table_and_ends_when_broke() {
    let players = vec![flat_player("All In", 100, 100)];
    let mut game = Game::with_players(players, GameOptions::default(), 1);
    game.place_bets();
    game.deck.stack(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ace, Suit::Diamonds),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::King, Suit::Clubs),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    assert_eq!(game.player(0).unwrap().money(), 0);
    assert!(!game.players_have_money());

    assert_eq!(game.next_round(), Ok(false));
    assert_eq!(game.state(), GameState::GameOver);
    assert!(game.player(0).unwrap().hand().is_empty());
    assert!(game.dealer().hand().is_empty());
    assert!(game.last_result().is_none());

    assert_eq!(game.next_round(), Ok(false));
    assert_eq!(game.place_bet(0, 10, 10), Err(BetError::InvalidState));
}

#[test]
fn next_round_reopens_betting() {
    let mut game = single_player_game(&[
        card(Rank::King, Suit::Spades),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]);

    game.deal_initial_cards().unwrap();
    game.check_for_blackjacks().unwrap();
    game.player_action(0, Action::Stand).unwrap();
    game.dealer_turn().unwrap();
    game.settle_round().unwrap();

    assert_eq!(game.next_round(), Ok(true));
    assert_eq!(game.state(), GameState::AwaitingBets);
    assert!(game.betting_order().is_empty());
    assert_eq!(game.player(0).unwrap().current_bet(), 0);

    // Next bet is 10% of the new bankroll of 1100.
    assert_eq!(game.place_bet(0, 10, 500), Ok(110));
}

#[test]
fn table_without_money_starts_over() {
    let game = Game::new(3, 0, GameOptions::default(), 1);
    assert_eq!(game.state(), GameState::GameOver);
    assert!(!game.players_have_money());
}

#[test]
fn reshuffle_when_penetration_reached() {
    let mut game = Game::new(1, 1000, GameOptions::default().with_penetration(0.5), 1);
    assert!(!game.needs_reshuffle());

    game.deck.stack(&[card(Rank::Two, Suit::Hearts); 10]);
    assert!(game.needs_reshuffle());
    assert_eq!(game.check_and_reshuffle(), Ok(true));
    assert_eq!(game.cards_remaining(), DECK_SIZE);
    assert_eq!(game.check_and_reshuffle(), Ok(false));
}

#[test]
fn zero_penetration_never_reshuffles() {
    let mut game = Game::new(1, 1000, GameOptions::default().with_penetration(0.0), 1);
    game.deck.stack(&[]);
    assert!(!game.needs_reshuffle());
}

#[test]
fn reshuffle_rejected_mid_round() {
    let mut game = single_player_game(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]);
    game.deal_initial_cards().unwrap();

    assert!(game.reset_deck().is_err());
    assert!(game.check_and_reshuffle().is_err());
}

#[test]
fn play_round_runs_a_scripted_round() {
    let mut game = single_player_game(&[
        card(Rank::Ten, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Six, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
        card(Rank::Three, Suit::Spades),
    ]);

    let mut seen = Vec::new();
    let result = game
        .play_round(|turn| {
            seen.push((turn.seat, turn.player.hand_value(), turn.dealer_up_card));
            if turn.player.hand_value() < 17 {
                Action::Hit
            } else {
                Action::Stand
            }
        })
        .unwrap();

    let up = Some(card(Rank::Seven, Suit::Clubs));
    assert_eq!(seen, vec![(0, 16, up), (0, 19, up)]);
    assert_eq!(result.players[0].outcome, HandOutcome::Win);
    assert_eq!(game.state(), GameState::RoundOver);
}

#[test]
fn play_round_aborts_on_empty_deck() {
    let mut game = Game::new(1, 1000, GameOptions::default(), 1);
    game.deck.stack(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]);

    let err = game.play_round(|_| Action::Hit).unwrap_err();
    assert_eq!(err, PlayError::Action(ActionError::Deck(DeckError::Empty)));
    assert_eq!(game.state(), GameState::RoundOver);
    assert_eq!(game.player(0).unwrap().money(), 1000);
    assert_eq!(game.next_round(), Ok(true));
}

#[test]
fn play_round_rebuilds_a_short_deck() {
    let mut game = Game::new(2, 1000, GameOptions::default(), 9);
    game.deck.stack(&[card(Rank::Two, Suit::Hearts); 3]);

    let result = game.play_round(|_| Action::Stand).unwrap();
    assert_eq!(result.players.len(), 2);
    assert!(game.cards_remaining() <= DECK_SIZE - 6);
}

#[test]
fn play_round_rejects_wrong_state() {
    let mut game = single_player_game(&[
        card(Rank::Two, Suit::Spades),
        card(Rank::Ten, Suit::Diamonds),
        card(Rank::Three, Suit::Hearts),
        card(Rank::Seven, Suit::Clubs),
    ]);
    game.deal_initial_cards().unwrap();

    assert_eq!(
        game.play_round(|_| Action::Stand),
        Err(PlayError::Deal(DealError::InvalidState))
    );
}

#[test]
fn money_is_conserved_across_many_rounds() {
    let options = GameOptions::default().with_penetration(0.25);
    let mut game = Game::new(4, 1000, options, 2024);
    let mut rounds = 0;

    while rounds < 50 {
        game.check_and_reshuffle().unwrap();
        let before: usize = game.players().iter().map(Player::money).sum();
        let result = game
            .play_round(|turn| match turn.player.hand_value() {
                11 if turn.can_double => Action::DoubleDown,
                value if value < 17 => Action::Hit,
                _ => Action::Stand,
            })
            .unwrap();
        let after: usize = game.players().iter().map(Player::money).sum();

        let net: isize = result.players.iter().map(|r| r.net).sum();
        assert_eq!(after as isize - before as isize, net);
        for player in game.players() {
            assert_eq!(player.current_bet(), 0);
        }

        rounds += 1;
        if !game.next_round().unwrap() {
            break;
        }
    }

    assert!(rounds > 0);
}
