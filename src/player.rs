//! Players and the dealer.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;
use core::fmt;

use crate::card::Card;
use crate::error::BetError;
use crate::hand::{BLACKJACK_VALUE, Hand};
use crate::strategy::{BettingStrategy, DefaultBettingStrategy};

/// A seated player with a bankroll.
pub struct Player {
    name: String,
    money: usize,
    hand: Hand,
    current_bet: usize,
    strategy: Box<dyn BettingStrategy>,
}

impl Player {
    /// Creates a player using the [`DefaultBettingStrategy`].
    #[must_use]
    pub fn new(name: impl Into<String>, money: usize) -> Self {
        Self::with_strategy(name, money, Box::new(DefaultBettingStrategy::new()))
    }

    /// Creates a player with a custom betting strategy.
    #[must_use]
    pub fn with_strategy(
        name: impl Into<String>,
        money: usize,
        strategy: Box<dyn BettingStrategy>,
    ) -> Self {
        Self {
            name: name.into(),
            money,
            hand: Hand::new(),
            current_bet: 0,
            strategy,
        }
    }

    /// Places a bet chosen by the player's strategy within `min_bet..=max_bet`.
    ///
    /// The amount is deducted from the bankroll immediately and added to the
    /// current bet, so a second call (a double down) raises the wager instead
    /// of replacing it. Returns the amount just placed.
    ///
    /// # Errors
    ///
    /// Returns an error, leaving the player untouched, if the strategy asks
    /// for nothing or for more than the bankroll.
    pub fn place_bet(&mut self, min_bet: usize, max_bet: usize) -> Result<usize, BetError> {
        let bet = self.strategy.determine_bet(self.money, min_bet, max_bet);
        if bet == 0 {
            return Err(BetError::ZeroBet);
        }
        if bet > self.money {
            return Err(BetError::InsufficientFunds {
                bet,
                money: self.money,
            });
        }

        self.money -= bet;
        self.current_bet += bet;
        Ok(bet)
    }

    /// Credits `payout` (stake included) and clears the bet.
    pub const fn win_bet(&mut self, payout: usize) {
        self.money += payout;
        self.current_bet = 0;
    }

    /// Forfeits the bet, which was already taken from the bankroll.
    pub const fn lose_bet(&mut self) {
        self.current_bet = 0;
    }

    /// Returns the bet to the bankroll without profit.
    pub const fn push_bet(&mut self) {
        self.money += self.current_bet;
        self.current_bet = 0;
    }

    /// Adds a card to the player's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Clears the hand and resets the current bet.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
        self.current_bet = 0;
    }

    pub(crate) fn clear_cards(&mut self) {
        self.hand.clear();
    }

    /// Swaps the betting strategy.
    pub fn set_betting_strategy(&mut self, strategy: Box<dyn BettingStrategy>) {
        self.strategy = strategy;
    }

    /// Returns the player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the bankroll, excluding the current bet.
    #[must_use]
    pub const fn money(&self) -> usize {
        self.money
    }

    /// Returns the player's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the amount wagered this round, including any double down.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the value of the player's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the player holds a natural.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the player's hand is over 21.
    #[must_use]
    pub fn has_busted(&self) -> bool {
        self.hand.value() > BLACKJACK_VALUE
    }

    /// Returns whether the player has a blackjack or has busted.
    #[must_use]
    pub fn has_blackjack_or_busted(&self) -> bool {
        self.has_blackjack() || self.has_busted()
    }

    /// Returns whether the player still has a live wager this round.
    #[must_use]
    pub fn is_in_play(&self) -> bool {
        self.current_bet > 0 && !self.has_busted()
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("name", &self.name)
            .field("money", &self.money)
            .field("hand", &self.hand)
            .field("current_bet", &self.current_bet)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}'s hand: {} (value {})", self.name, self.hand, self.hand_value())
    }
}

/// The house. Holds a hand and follows a fixed drawing rule.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Hand,
}

impl Dealer {
    /// Value at or above which the dealer stands.
    pub const STAND_VALUE: u8 = 17;

    /// Creates a dealer with an empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { hand: Hand::new() }
    }

    /// Adds a card to the dealer's hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Clears the dealer's hand.
    pub fn clear_hand(&mut self) {
        self.hand.clear();
    }

    /// Returns the dealer's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Returns the value of the dealer's hand.
    #[must_use]
    pub fn hand_value(&self) -> u8 {
        self.hand.value()
    }

    /// Returns whether the dealer holds a natural.
    #[must_use]
    pub fn has_blackjack(&self) -> bool {
        self.hand.is_blackjack()
    }

    /// Returns whether the dealer's hand is over 21.
    #[must_use]
    pub fn has_busted(&self) -> bool {
        self.hand.is_bust()
    }

    /// Returns whether the dealer must draw under the standard rule (stand on 17).
    #[must_use]
    pub fn should_hit(&self) -> bool {
        self.should_hit_below(Self::STAND_VALUE)
    }

    /// Returns whether the dealer must draw when standing on `stand_value`.
    ///
    /// Soft and hard totals are treated alike.
    #[must_use]
    pub fn should_hit_below(&self, stand_value: u8) -> bool {
        self.hand.value() < stand_value
    }

    /// The face-up card. The first card dealt to the dealer is the hole card.
    #[must_use]
    pub fn up_card(&self) -> Option<&Card> {
        self.hand.cards().get(1)
    }
}

impl fmt::Display for Dealer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Dealer's hand: {} (value {})", self.hand, self.hand_value())
    }
}
