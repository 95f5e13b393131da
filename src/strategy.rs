//! Betting policies.

use core::fmt::Debug;

/// Decides how much a player wagers.
///
/// Implementations are pure: the same inputs must yield the same bet. The
/// engine validates the result, so a policy may return an amount the player
/// cannot afford; such a bet is rejected without changing any state.
pub trait BettingStrategy: Debug {
    /// Returns the amount to bet given the player's available money and the
    /// bounds for this wager.
    fn determine_bet(&self, available_money: usize, min_bet: usize, max_bet: usize) -> usize;
}

/// Bets a fixed percentage of the available money, clamped to the bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DefaultBettingStrategy {
    percent: usize,
}

impl DefaultBettingStrategy {
    /// Share of the bankroll wagered by default, in percent.
    pub const BET_PERCENTAGE: usize = 10;

    /// Creates the default 10% strategy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            percent: Self::BET_PERCENTAGE,
        }
    }

    /// Creates a strategy betting `percent` of the bankroll.
    #[must_use]
    pub const fn with_percent(percent: usize) -> Self {
        Self { percent }
    }
}

impl Default for DefaultBettingStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl BettingStrategy for DefaultBettingStrategy {
    fn determine_bet(&self, available_money: usize, min_bet: usize, max_bet: usize) -> usize {
        let bet = available_money.saturating_mul(self.percent) / 100;
        // Not `clamp`: the minimum wins when the bounds cross.
        bet.min(max_bet).max(min_bet)
    }
}

/// Always bets the same amount, clamped to the bounds.
///
/// Useful for scripted players and for feeding a human's chosen amount
/// through the regular betting path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlatBettingStrategy {
    /// The amount to bet.
    pub amount: usize,
}

impl FlatBettingStrategy {
    /// Creates a flat strategy.
    #[must_use]
    pub const fn new(amount: usize) -> Self {
        Self { amount }
    }
}

impl BettingStrategy for FlatBettingStrategy {
    fn determine_bet(&self, _available_money: usize, min_bet: usize, max_bet: usize) -> usize {
        self.amount.min(max_bet).max(min_bet)
    }
}
