use crate::action::Action;
use crate::card::Card;
use crate::error::{DealError, PlayError, RoundError};
use crate::player::Player;
use crate::result::RoundResult;

use super::{Game, GameState};

/// What a decision callback sees on a player's turn.
#[derive(Debug, Clone, Copy)]
pub struct TurnView<'a> {
    /// Seat of the acting player.
    pub seat: usize,
    /// The acting player.
    pub player: &'a Player,
    /// The dealer's face-up card.
    pub dealer_up_card: Option<Card>,
    /// Whether [`Action::DoubleDown`] is currently allowed.
    pub can_double: bool,
}

impl Game {
    /// Plays one full round: strategy bets for every player with money, the
    /// deal, the blackjack check, a turn per player driven by `decide`, the
    /// dealer turn and settlement.
    ///
    /// If any step fails mid-round the round is aborted, refunding every
    /// outstanding bet, before the error is returned. Call
    /// [`next_round`](Self::next_round) afterwards to clear the table.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, nobody can bet, `decide`
    /// picks an action that is not allowed, or the deck runs out.
    pub fn play_round<F>(&mut self, mut decide: F) -> Result<RoundResult, PlayError>
    where
        F: FnMut(TurnView<'_>) -> Action,
    {
        if self.state != GameState::AwaitingBets {
            return Err(DealError::InvalidState.into());
        }

        self.place_bets();
        match self.deal_initial_cards() {
            Err(DealError::Deck(err)) => {
                log::warn!("{err} before the deal, rebuilding the deck");
                self.deck.reset();
                self.deal_initial_cards()?;
            }
            other => other?,
        }

        match self.run_dealt_round(&mut decide) {
            Ok(result) => Ok(result),
            Err(err) => {
                self.abort_round()?;
                Err(err)
            }
        }
    }

    fn run_dealt_round<F>(&mut self, decide: &mut F) -> Result<RoundResult, PlayError>
    where
        F: FnMut(TurnView<'_>) -> Action,
    {
        if self.check_for_blackjacks()? {
            // Resolved at the blackjack check; the result is recorded there.
            return self
                .last_result
                .clone()
                .ok_or(PlayError::Round(RoundError::InvalidState));
        }

        while let Some(seat) = self.current_player() {
            let view = TurnView {
                seat,
                player: &self.players[seat],
                dealer_up_card: self.dealer.up_card().copied(),
                can_double: self.can_double(seat),
            };
            let action = decide(view);
            self.player_action(seat, action)?;
        }

        self.dealer_turn()?;
        Ok(self.settle_round()?)
    }
}
