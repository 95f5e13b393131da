use crate::action::Action;
use crate::error::{ActionError, DeckError};

use super::{Game, GameState};

impl Game {
    fn ensure_player_turn(&self, seat: usize) -> Result<(), ActionError> {
        if self.state != GameState::PlayerTurns {
            return Err(ActionError::InvalidState);
        }

        if seat >= self.players.len() {
            return Err(ActionError::PlayerNotFound);
        }

        if self.current_player() != Some(seat) {
            return Err(ActionError::NotYourTurn);
        }

        Ok(())
    }

    /// Applies `action` for the player in `seat` and returns whether their
    /// turn is over.
    ///
    /// - [`Action::Hit`] draws one card; the turn ends only on a bust.
    /// - [`Action::Stand`] ends the turn.
    /// - [`Action::DoubleDown`] raises the wager through the player's strategy
    ///   (bounded by the table minimum and the current bet), draws exactly one
    ///   card and ends the turn.
    ///
    /// When the last player's turn ends the game moves to the dealer turn.
    ///
    /// # Errors
    ///
    /// Returns an error if players are not acting, it is not this seat's turn,
    /// a double down is not allowed, or the deck is empty. A rejected action
    /// does not consume the turn.
    pub fn player_action(&mut self, seat: usize, action: Action) -> Result<bool, ActionError> {
        self.ensure_player_turn(seat)?;

        let turn_ended = match action {
            Action::Hit => self.hit(seat)?,
            Action::Stand => {
                let player = &self.players[seat];
                log::debug!("{} stands on {}", player.name(), player.hand_value());
                true
            }
            Action::DoubleDown => {
                self.double_down(seat)?;
                true
            }
        };

        if turn_ended {
            self.advance_turn();
        }

        Ok(turn_ended)
    }

    /// Returns whether the player in `seat` may double down right now: it is
    /// their turn, they hold exactly two cards, and they can cover the
    /// current bet.
    #[must_use]
    pub fn can_double(&self, seat: usize) -> bool {
        if self.current_player() != Some(seat) {
            return false;
        }

        self.players.get(seat).is_some_and(|player| {
            player.hand().len() == 2 && player.money() >= player.current_bet()
        })
    }

    fn hit(&mut self, seat: usize) -> Result<bool, ActionError> {
        let card = self.deck.draw()?;
        let player = &mut self.players[seat];
        player.add_card(card);

        let busted = player.has_busted();
        if busted {
            log::debug!("{} busts with {}", player.name(), player.hand_value());
        }
        Ok(busted)
    }

    fn double_down(&mut self, seat: usize) -> Result<(), ActionError> {
        if !self.can_double(seat) {
            return Err(ActionError::CannotDouble);
        }
        if self.deck.remaining() == 0 {
            return Err(DeckError::Empty.into());
        }

        let min_bet = self.options.min_bet;
        let player = &mut self.players[seat];
        let current_bet = player.current_bet();
        let raise = player.place_bet(min_bet, current_bet)?;

        let card = self.deck.draw()?;
        player.add_card(card);
        log::debug!(
            "{} doubles by {raise} to {}, draws {card}",
            player.name(),
            player.current_bet()
        );

        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn += 1;
        if self.turn >= self.betting_order.len() {
            log::debug!("player turns over");
            self.state = GameState::DealerTurn;
        }
    }
}
