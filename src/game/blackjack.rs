use alloc::vec::Vec;

use crate::error::RoundError;
use crate::result::HandOutcome;

use super::{Game, GameState};

impl Game {
    /// Checks the freshly dealt hands for naturals.
    ///
    /// If nobody holds a natural, play moves on to the player turns and
    /// `false` is returned. Otherwise the round is resolved on the spot and
    /// `true` is returned:
    ///
    /// - player and dealer both have blackjack: push;
    /// - only the player has blackjack: paid at [`GameOptions::blackjack_payout`];
    /// - only the dealer has blackjack: the player loses.
    ///
    /// A player without a natural never gets a turn once anyone at the table
    /// has one, even when the dealer has no blackjack. Their stake is
    /// forfeited ([`HandOutcome::Forfeit`]).
    ///
    /// [`GameOptions::blackjack_payout`]: crate::GameOptions::blackjack_payout
    ///
    /// # Errors
    ///
    /// Returns an error if the initial cards have not just been dealt.
    pub fn check_for_blackjacks(&mut self) -> Result<bool, RoundError> {
        if self.state != GameState::Dealt {
            return Err(RoundError::InvalidState);
        }

        let dealer_blackjack = self.dealer.has_blackjack();
        let player_blackjack = self
            .betting_order
            .iter()
            .any(|&seat| self.players[seat].has_blackjack());

        if !dealer_blackjack && !player_blackjack {
            self.turn = 0;
            self.state = GameState::PlayerTurns;
            log::debug!("no blackjack, player turns begin");
            return Ok(false);
        }

        if dealer_blackjack {
            log::info!("dealer has blackjack");
        }

        let order = self.betting_order.clone();
        let mut results = Vec::with_capacity(order.len());
        for seat in order {
            let player = &self.players[seat];
            let (outcome, payout) = match (player.has_blackjack(), dealer_blackjack) {
                (true, true) => (HandOutcome::Push, player.current_bet()),
                (true, false) => (
                    HandOutcome::Blackjack,
                    self.blackjack_payout(player.current_bet()),
                ),
                (false, true) => (HandOutcome::Lose, 0),
                (false, false) => (HandOutcome::Forfeit, 0),
            };
            results.push(self.resolve_wager(seat, outcome, payout));
        }

        self.finish_round(results, true);
        Ok(true)
    }
}
