//! Game state types.

/// Round state.
///
/// ```text
/// AwaitingBets -> Dealt -> (blackjack check) -> RoundOver
///                                            -> PlayerTurns -> DealerTurn -> Settlement -> RoundOver
/// RoundOver -> AwaitingBets | GameOver
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Accepting bets for the next round.
    AwaitingBets,
    /// Initial cards are out; the blackjack check is next.
    Dealt,
    /// Waiting for player actions.
    PlayerTurns,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Hands are final and wagers can be settled.
    Settlement,
    /// Every wager of the round is resolved.
    RoundOver,
    /// No player has money left.
    GameOver,
}
