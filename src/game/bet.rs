use crate::error::{BetError, DealError, DeckError};

use super::{Game, GameState};

impl Game {
    /// Places a bet for the player in `seat`, chosen by their strategy within
    /// `min_bet..=max_bet`. Returns the amount placed.
    ///
    /// A human's chosen amount can be fed through the same path by passing it
    /// as both bounds.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is closed, the seat is empty, the player
    /// already bet this round, or the strategy's amount is zero or exceeds the
    /// bankroll. A rejected bet changes nothing.
    pub fn place_bet(
        &mut self,
        seat: usize,
        min_bet: usize,
        max_bet: usize,
    ) -> Result<usize, BetError> {
        if self.state != GameState::AwaitingBets {
            return Err(BetError::InvalidState);
        }

        let player = self
            .players
            .get_mut(seat)
            .ok_or(BetError::PlayerNotFound)?;

        if player.current_bet() > 0 {
            return Err(BetError::AlreadyPlaced);
        }

        let bet = player.place_bet(min_bet, max_bet)?;
        log::debug!("{} bets {bet}", player.name());
        Ok(bet)
    }

    /// Returns whether the player in `seat` can cover the table minimum.
    ///
    /// Players who cannot sit the round out.
    #[must_use]
    pub fn can_bet(&self, seat: usize) -> bool {
        self.players
            .get(seat)
            .is_some_and(|player| player.money() > 0 && player.money() >= self.options.min_bet)
    }

    /// Offers a bet with the table limits to every player who can cover the
    /// minimum and has not bet yet.
    ///
    /// Players whose bet is rejected sit the round out. Returns the number of
    /// players with a bet on the table.
    pub fn place_bets(&mut self) -> usize {
        let (min_bet, max_bet) = (self.options.min_bet, self.options.max_bet);

        for seat in 0..self.players.len() {
            if self.players[seat].current_bet() > 0 {
                continue;
            }
            if !self.can_bet(seat) {
                log::debug!("{} sits out below the table minimum", self.players[seat].name());
                continue;
            }
            if let Err(err) = self.place_bet(seat, min_bet, max_bet) {
                log::debug!("{} sits out: {err}", self.players[seat].name());
            }
        }

        self.players
            .iter()
            .filter(|player| player.current_bet() > 0)
            .count()
    }

    /// Deals two cards to every player with a bet and to the dealer, one card
    /// at a time: each player in seat order, then the dealer, twice.
    ///
    /// # Errors
    ///
    /// Returns an error if betting is not open, nobody has bet, or the deck
    /// cannot cover the deal. Nothing is dealt in the error case.
    pub fn deal_initial_cards(&mut self) -> Result<(), DealError> {
        if self.state != GameState::AwaitingBets {
            return Err(DealError::InvalidState);
        }

        self.betting_order = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, player)| player.current_bet() > 0)
            .map(|(seat, _)| seat)
            .collect();

        if self.betting_order.is_empty() {
            return Err(DealError::NoBets);
        }

        let cards_needed = (self.betting_order.len() + 1) * 2;
        if self.cards_remaining() < cards_needed {
            self.betting_order.clear();
            return Err(DeckError::Empty.into());
        }

        for player in &mut self.players {
            player.clear_cards();
        }
        self.dealer.clear_hand();

        for _ in 0..2 {
            for &seat in &self.betting_order {
                let card = self.deck.draw()?;
                self.players[seat].add_card(card);
            }
            let card = self.deck.draw()?;
            self.dealer.add_card(card);
        }

        self.turn = 0;
        self.last_result = None;
        self.state = GameState::Dealt;
        log::info!(
            "dealt {} player(s), {} cards left",
            self.betting_order.len(),
            self.cards_remaining()
        );

        Ok(())
    }
}
