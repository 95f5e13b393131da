//! Error types for game operations.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors raised by the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// A draw was attempted on an exhausted deck.
    #[error("cannot draw from an empty deck")]
    Empty,
}

/// Errors that can occur during betting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Invalid game state for betting.
    #[error("invalid game state for betting")]
    InvalidState,
    /// The player already has a bet on this round.
    #[error("player already placed a bet this round")]
    AlreadyPlaced,
    /// Bet amount is zero.
    #[error("bet amount is zero")]
    ZeroBet,
    /// Bet amount exceeds the bankroll.
    #[error("insufficient funds: bet {bet} exceeds bankroll {money}")]
    InsufficientFunds {
        /// The rejected bet.
        bet: usize,
        /// The bankroll at the time of the bet.
        money: usize,
    },
}

/// Errors that can occur during dealing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game state for dealing.
    #[error("invalid game state for dealing")]
    InvalidState,
    /// No players have placed bets.
    #[error("no players have placed bets")]
    NoBets,
    /// The deck ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game state for this action.
    #[error("invalid game state for this action")]
    InvalidState,
    /// Not this player's turn.
    #[error("not this player's turn")]
    NotYourTurn,
    /// Player not found.
    #[error("player not found")]
    PlayerNotFound,
    /// Cannot double down on this hand.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The additional double-down wager was rejected.
    #[error("double down wager rejected: {0}")]
    Bet(#[from] BetError),
    /// The deck ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors from the round-level steps: blackjack check, dealer turn and settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RoundError {
    /// Invalid game state for this step.
    #[error("invalid game state for this step")]
    InvalidState,
    /// The deck ran out.
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Errors that can occur during reshuffling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReshuffleError {
    /// Invalid game state for reshuffling.
    #[error("invalid game state for reshuffling")]
    InvalidState,
}

/// Text that does not name a player action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid action `{0}`, expected (h)it, (s)tand or (d)ouble")]
pub struct ParseActionError(pub String);

/// Errors from [`Game::play_round`](crate::Game::play_round).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    /// Dealing failed.
    #[error(transparent)]
    Deal(#[from] DealError),
    /// A player action failed.
    #[error(transparent)]
    Action(#[from] ActionError),
    /// A round-level step failed.
    #[error(transparent)]
    Round(#[from] RoundError),
}
