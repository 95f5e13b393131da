//! Game engine and round state management.

use alloc::format;
use alloc::vec::Vec;

use crate::card::DECK_SIZE;
use crate::deck::Deck;
use crate::error::{ReshuffleError, RoundError};
use crate::options::GameOptions;
use crate::player::{Dealer, Player};
use crate::result::RoundResult;

mod actions;
mod bet;
mod blackjack;
mod dealer;
mod round;
pub mod state;

pub use round::TurnView;
pub use state::GameState;

/// A single blackjack table: the deck, the seated players, the dealer and
/// the round in progress.
///
/// Operations must be called in round order; each one checks the
/// [`GameState`] and returns an `InvalidState` error when called out of
/// sequence. A typical round:
///
/// ```
/// use bjsim::{Action, Game, GameOptions};
///
/// let mut game = Game::new(2, 1000, GameOptions::default(), 7);
/// game.place_bets();
/// game.deal_initial_cards().unwrap();
/// if !game.check_for_blackjacks().unwrap() {
///     while let Some(seat) = game.current_player() {
///         game.player_action(seat, Action::Stand).unwrap();
///     }
///     game.dealer_turn().unwrap();
///     game.settle_round().unwrap();
/// }
/// let more = game.next_round().unwrap();
/// assert!(more);
/// ```
#[derive(Debug)]
pub struct Game {
    /// The deck. Exposed so rounds can be scripted with [`Deck::stack`].
    pub deck: Deck,
    /// Table options.
    pub options: GameOptions,
    state: GameState,
    players: Vec<Player>,
    dealer: Dealer,
    /// Seats that bet this round, in seat order.
    betting_order: Vec<usize>,
    /// Index into `betting_order` of the player whose turn it is.
    turn: usize,
    last_result: Option<RoundResult>,
}

impl Game {
    /// Creates a table with `num_players` players named "Player 1", "Player 2", ...,
    /// each starting with `initial_money` and the default betting strategy.
    #[must_use]
    pub fn new(num_players: usize, initial_money: usize, options: GameOptions, seed: u64) -> Self {
        let players = (1..=num_players)
            .map(|n| Player::new(format!("Player {n}"), initial_money))
            .collect();
        Self::with_players(players, options, seed)
    }

    /// Creates a table with the given players, in seat order.
    #[must_use]
    pub fn with_players(players: Vec<Player>, options: GameOptions, seed: u64) -> Self {
        let mut game = Self {
            deck: Deck::new(seed),
            options,
            state: GameState::AwaitingBets,
            players,
            dealer: Dealer::new(),
            betting_order: Vec::new(),
            turn: 0,
            last_result: None,
        };
        if !game.players_have_money() {
            game.state = GameState::GameOver;
        }
        game
    }

    /// Returns the current game state.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the players in seat order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Returns the player in `seat`.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&Player> {
        self.players.get(seat)
    }

    /// Returns the player in `seat` mutably, e.g. to swap their betting strategy.
    pub fn player_mut(&mut self, seat: usize) -> Option<&mut Player> {
        self.players.get_mut(seat)
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    /// Returns the seats that bet this round, in playing order.
    #[must_use]
    pub fn betting_order(&self) -> &[usize] {
        &self.betting_order
    }

    /// Returns the seat whose turn it is, if players are acting.
    #[must_use]
    pub fn current_player(&self) -> Option<usize> {
        if self.state != GameState::PlayerTurns {
            return None;
        }
        self.betting_order.get(self.turn).copied()
    }

    /// Returns the result of the current round once it is resolved.
    #[must_use]
    pub const fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.remaining()
    }

    /// Returns whether any player still has money to bet.
    #[must_use]
    pub fn players_have_money(&self) -> bool {
        self.players.iter().any(|player| player.money() > 0)
    }

    /// Rebuilds and reshuffles the full deck.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn reset_deck(&mut self) -> Result<(), ReshuffleError> {
        if !matches!(
            self.state,
            GameState::AwaitingBets | GameState::RoundOver | GameState::GameOver
        ) {
            return Err(ReshuffleError::InvalidState);
        }

        self.deck.reset();
        log::debug!("deck reset");
        Ok(())
    }

    /// Returns whether the deck needs reshuffling based on penetration.
    ///
    /// Returns `true` if the remaining cards are below the penetration threshold.
    /// If penetration is 0, always returns `false`.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        if self.options.penetration == 0.0 {
            return false;
        }

        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for card counts"
        )]
        let used_ratio = 1.0 - (self.deck.remaining() as f64 / DECK_SIZE as f64);

        used_ratio >= self.options.penetration
    }

    /// Checks penetration and reshuffles if needed.
    ///
    /// This should be called between rounds. Returns `true` if a reshuffle
    /// was performed.
    ///
    /// # Errors
    ///
    /// Returns an error if a round is in progress.
    pub fn check_and_reshuffle(&mut self) -> Result<bool, ReshuffleError> {
        if self.needs_reshuffle() {
            self.reset_deck()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Clears the table after a resolved round.
    ///
    /// Hands and bets are cleared; a bet still outstanding at this point
    /// stays forfeited. Returns `true` and reopens betting if any player has
    /// money left, otherwise moves to [`GameState::GameOver`] and returns
    /// `false`.
    ///
    /// # Errors
    ///
    /// Returns an error if the current round has not been resolved.
    pub fn next_round(&mut self) -> Result<bool, RoundError> {
        match self.state {
            GameState::RoundOver => {}
            GameState::GameOver => return Ok(false),
            _ => return Err(RoundError::InvalidState),
        }

        for player in &mut self.players {
            player.clear_hand();
        }
        self.dealer.clear_hand();
        self.betting_order.clear();
        self.turn = 0;
        self.last_result = None;

        if self.players_have_money() {
            self.state = GameState::AwaitingBets;
            Ok(true)
        } else {
            log::info!("every player is out of money, game over");
            self.state = GameState::GameOver;
            Ok(false)
        }
    }
}
