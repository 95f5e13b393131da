use alloc::vec::Vec;

use crate::card::Card;
use crate::error::RoundError;
use crate::options::RoundingMode;
use crate::result::{HandOutcome, PlayerResult, RoundResult};

use super::{Game, GameState};

#[cfg(feature = "std")]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => amount.ceil() as usize,
        RoundingMode::Down => amount.floor() as usize,
        RoundingMode::Nearest => amount.round() as usize,
    }
}

#[cfg(all(not(feature = "std"), feature = "alloc"))]
fn round_amount(amount: f64, mode: RoundingMode) -> usize {
    match mode {
        RoundingMode::Up => libm::ceil(amount) as usize,
        RoundingMode::Down => libm::floor(amount) as usize,
        RoundingMode::Nearest => libm::round(amount) as usize,
    }
}

impl Game {
    /// Checks if any player still has a live, non-busted wager.
    fn any_player_in_game(&self) -> bool {
        self.betting_order
            .iter()
            .any(|&seat| self.players[seat].is_in_play())
    }

    /// Total returned for a winning natural on `bet`, stake included.
    pub(super) fn blackjack_payout(&self, bet: usize) -> usize {
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for monetary values"
        )]
        let amount = (bet as f64) * self.options.blackjack_payout;
        round_amount(amount, self.options.rounding_blackjack)
    }

    /// Applies `outcome` to the player in `seat` and records it.
    pub(super) fn resolve_wager(
        &mut self,
        seat: usize,
        outcome: HandOutcome,
        payout: usize,
    ) -> PlayerResult {
        let player = &mut self.players[seat];
        let bet = player.current_bet();

        let payout = match outcome {
            HandOutcome::Win | HandOutcome::Blackjack => {
                player.win_bet(payout);
                payout
            }
            HandOutcome::Push => {
                player.push_bet();
                bet
            }
            HandOutcome::Lose | HandOutcome::Forfeit => {
                player.lose_bet();
                0
            }
        };

        log::info!(
            "{}: {outcome:?}, bet {bet}, paid {payout}, bankroll {}",
            player.name(),
            player.money()
        );

        #[expect(clippy::cast_possible_wrap, reason = "payout values fit in isize")]
        let net = payout as isize - bet as isize;

        PlayerResult {
            seat,
            outcome,
            bet,
            payout,
            net,
            player_value: player.hand_value(),
        }
    }

    pub(super) fn finish_round(
        &mut self,
        players: Vec<PlayerResult>,
        settled_on_blackjack: bool,
    ) -> RoundResult {
        let result = RoundResult {
            players,
            dealer_value: self.dealer.hand_value(),
            dealer_bust: self.dealer.has_busted(),
            dealer_blackjack: self.dealer.has_blackjack(),
            settled_on_blackjack,
        };
        self.last_result = Some(result.clone());
        self.state = GameState::RoundOver;
        result
    }

    /// Dealer plays their hand: draws while the value is below
    /// [`GameOptions::dealer_stands_on`], soft or hard.
    ///
    /// The dealer does not draw at all when every player has busted.
    /// Returns the cards drawn.
    ///
    /// [`GameOptions::dealer_stands_on`]: crate::GameOptions::dealer_stands_on
    ///
    /// # Errors
    ///
    /// Returns an error if the game is not in the dealer turn or the deck runs
    /// out while the dealer must draw.
    pub fn dealer_turn(&mut self) -> Result<Vec<Card>, RoundError> {
        if self.state != GameState::DealerTurn {
            return Err(RoundError::InvalidState);
        }

        let mut drawn_cards = Vec::new();

        if self.any_player_in_game() {
            while self.dealer.should_hit_below(self.options.dealer_stands_on) {
                let card = self.deck.draw()?;
                self.dealer.add_card(card);
                drawn_cards.push(card);
            }
            log::debug!(
                "dealer stands with {} after {} draw(s)",
                self.dealer.hand_value(),
                drawn_cards.len()
            );
        }

        self.state = GameState::Settlement;

        Ok(drawn_cards)
    }

    /// Compares every wager against the dealer and pays out.
    ///
    /// - player bust: lose, whatever the dealer holds;
    /// - dealer bust: win, paid `bet × 2`;
    /// - higher value wins `bet × 2`, lower value loses, equal pushes.
    ///
    /// # Errors
    ///
    /// Returns an error if the dealer has not finished their turn.
    pub fn settle_round(&mut self) -> Result<RoundResult, RoundError> {
        if self.state != GameState::Settlement {
            return Err(RoundError::InvalidState);
        }

        let dealer_value = self.dealer.hand_value();
        let dealer_bust = self.dealer.has_busted();

        let order = self.betting_order.clone();
        let mut results = Vec::with_capacity(order.len());

        for seat in order {
            let player = &self.players[seat];
            let player_value = player.hand_value();
            let win = player.current_bet() * 2;

            let (outcome, payout) = if player.has_busted() {
                (HandOutcome::Lose, 0)
            } else if dealer_bust || player_value > dealer_value {
                (HandOutcome::Win, win)
            } else if player_value < dealer_value {
                (HandOutcome::Lose, 0)
            } else {
                (HandOutcome::Push, player.current_bet())
            };

            results.push(self.resolve_wager(seat, outcome, payout));
        }

        Ok(self.finish_round(results, false))
    }

    /// Ends the round in progress and returns every outstanding bet.
    ///
    /// Used when the round cannot finish, typically because the deck ran out
    /// or the table is closing; no bankroll loses money to an unfinished
    /// round. Bets placed while betting is still open are refunded too.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress.
    pub fn abort_round(&mut self) -> Result<RoundResult, RoundError> {
        if matches!(self.state, GameState::RoundOver | GameState::GameOver) {
            return Err(RoundError::InvalidState);
        }

        log::warn!("round aborted, refunding outstanding bets");

        // Betting order is only built at the deal, so scan every seat.
        let seats: Vec<usize> = (0..self.players.len())
            .filter(|&seat| self.players[seat].current_bet() > 0)
            .collect();
        let mut results = Vec::with_capacity(seats.len());
        for seat in seats {
            results.push(self.resolve_wager(seat, HandOutcome::Push, 0));
        }

        Ok(self.finish_round(results, false))
    }
}
