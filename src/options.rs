//! Table configuration.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bjsim::GameOptions;
///
/// let options = GameOptions::default()
///     .with_min_bet(5)
///     .with_max_bet(200)
///     .with_blackjack_payout(2.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Table minimum bet.
    pub min_bet: usize,
    /// Table maximum bet.
    pub max_bet: usize,
    /// Total returned on a winning natural, as a multiple of the bet
    /// (2.5 = stake back plus 3:2 profit).
    pub blackjack_payout: f64,
    /// The dealer draws while the hand is below this value.
    pub dealer_stands_on: u8,
    /// Rounding mode for blackjack payouts.
    pub rounding_blackjack: RoundingMode,
    /// Deck penetration (fraction of the deck played before reshuffle).
    /// 0 to disable reshuffling.
    pub penetration: f64,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            min_bet: 10,
            max_bet: 500,
            blackjack_payout: 2.5,
            dealer_stands_on: 17,
            rounding_blackjack: RoundingMode::Down,
            penetration: 0.5,
        }
    }
}

impl GameOptions {
    /// Sets the table minimum.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_min_bet(25);
    /// assert_eq!(options.min_bet, 25);
    /// ```
    #[must_use]
    pub const fn with_min_bet(mut self, min_bet: usize) -> Self {
        self.min_bet = min_bet;
        self
    }

    /// Sets the table maximum.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_max_bet(1000);
    /// assert_eq!(options.max_bet, 1000);
    /// ```
    #[must_use]
    pub const fn with_max_bet(mut self, max_bet: usize) -> Self {
        self.max_bet = max_bet;
        self
    }

    /// Sets the total multiple returned on a winning natural.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_payout(2.2);
    /// assert_eq!(options.blackjack_payout, 2.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_payout(mut self, multiplier: f64) -> Self {
        self.blackjack_payout = multiplier;
        self
    }

    /// Sets the value the dealer stands on.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, value: u8) -> Self {
        self.dealer_stands_on = value;
        self
    }

    /// Sets the rounding mode for blackjack payouts.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the deck penetration that triggers a reshuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use bjsim::GameOptions;
    ///
    /// let options = GameOptions::default().with_penetration(0.0);
    /// assert_eq!(options.penetration, 0.0);
    /// ```
    #[must_use]
    pub const fn with_penetration(mut self, penetration: f64) -> Self {
        self.penetration = penetration;
        self
    }
}
