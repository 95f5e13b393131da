//! Round result types.

extern crate alloc;

use alloc::vec::Vec;

/// How a player's wager was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player wins with a natural.
    Blackjack,
    /// Player loses (player busts or dealer has higher value).
    Lose,
    /// Push (tie), stake returned.
    Push,
    /// The round ended at the blackjack check before this player had a
    /// turn; the stake is not returned.
    Forfeit,
}

/// Result for a single player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerResult {
    /// Seat index of the player.
    pub seat: usize,
    /// The outcome of the wager.
    pub outcome: HandOutcome,
    /// Total amount wagered, double down included.
    pub bet: usize,
    /// Amount credited back to the bankroll, stake included.
    pub payout: usize,
    /// Net result (positive = profit, negative = loss).
    pub net: isize,
    /// The player's final hand value.
    pub player_value: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// Results for each player who bet, in seat order.
    pub players: Vec<PlayerResult>,
    /// The dealer's final hand value.
    pub dealer_value: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
    /// Whether the round was resolved at the blackjack check.
    pub settled_on_blackjack: bool,
}

impl RoundResult {
    /// Returns the result for `seat`, if that player bet this round.
    #[must_use]
    pub fn player(&self, seat: usize) -> Option<&PlayerResult> {
        self.players.iter().find(|result| result.seat == seat)
    }
}
