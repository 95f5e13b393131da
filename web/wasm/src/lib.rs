use bjsim::{
    Action, Card, Game, GameOptions, GameState, HandOutcome, Player, PlayerResult, RoundResult,
    Suit,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(players: u32, money: u32, seed: u32) -> Self {
        Self {
            game: Game::new(
                players as usize,
                money as usize,
                GameOptions::default(),
                seed as u64,
            ),
        }
    }

    pub fn reset(&mut self, players: u32, money: u32, seed: u32) {
        *self = Self::new(players, money, seed);
    }

    /// Bets for every player through their strategy. Returns how many bet.
    pub fn place_bets(&mut self) -> u32 {
        self.game.place_bets() as u32
    }

    /// Bets exactly `amount` for `seat`.
    pub fn place_bet(&mut self, seat: u32, amount: u32) -> Result<u32, JsValue> {
        let amount = amount as usize;
        self.game
            .place_bet(seat as usize, amount, amount)
            .map(|bet| bet as u32)
            .map_err(js_err)
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.deal_initial_cards().map_err(js_err)
    }

    pub fn check_for_blackjacks(&mut self) -> Result<bool, JsValue> {
        self.game.check_for_blackjacks().map_err(js_err)
    }

    pub fn hit(&mut self, seat: u32) -> Result<bool, JsValue> {
        self.act(seat, Action::Hit)
    }

    pub fn stand(&mut self, seat: u32) -> Result<bool, JsValue> {
        self.act(seat, Action::Stand)
    }

    pub fn double_down(&mut self, seat: u32) -> Result<bool, JsValue> {
        self.act(seat, Action::DoubleDown)
    }

    /// Parses `h`, `s` or `d` and applies it for `seat`.
    pub fn action(&mut self, seat: u32, input: &str) -> Result<bool, JsValue> {
        let action: Action = input.parse().map_err(js_err)?;
        self.act(seat, action)
    }

    pub fn dealer_turn(&mut self) -> Result<(), JsValue> {
        self.game.dealer_turn().map(|_| ()).map_err(js_err)
    }

    pub fn settle_round(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.settle_round().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn abort_round(&mut self) -> Result<JsValue, JsValue> {
        let result = self.game.abort_round().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    /// The resolved round, including one settled at the blackjack check.
    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        match self.game.last_result() {
            Some(result) => to_js_value(&JsRoundResult::from(result.clone())),
            None => Ok(JsValue::NULL),
        }
    }

    pub fn next_round(&mut self) -> Result<bool, JsValue> {
        self.game.next_round().map_err(js_err)
    }

    pub fn check_and_reshuffle(&mut self) -> Result<bool, JsValue> {
        self.game.check_and_reshuffle().map_err(js_err)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let players = self
            .game
            .players()
            .iter()
            .enumerate()
            .map(|(seat, player)| JsPlayer::from_player(seat, player, self.game.can_double(seat)))
            .collect();

        let snapshot = Snapshot {
            state: state_to_str(state),
            players,
            dealer: JsDealer::from_game(&self.game),
            current_player: self.game.current_player().map(|seat| seat as u32),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

impl WasmGame {
    fn act(&mut self, seat: u32, action: Action) -> Result<bool, JsValue> {
        self.game
            .player_action(seat as usize, action)
            .map_err(js_err)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    players: Vec<JsPlayer>,
    dealer: JsDealer,
    current_player: Option<u32>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    value: u8,
}

#[derive(Serialize)]
struct JsPlayer {
    seat: u32,
    name: String,
    money: u32,
    bet: u32,
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    is_blackjack: bool,
    is_bust: bool,
    can_double: bool,
}

impl JsPlayer {
    fn from_player(seat: usize, player: &Player, can_double: bool) -> Self {
        let hand = player.hand();
        Self {
            seat: seat as u32,
            name: player.name().to_string(),
            money: player.money() as u32,
            bet: player.current_bet() as u32,
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_blackjack: hand.is_blackjack(),
            is_bust: hand.is_bust(),
            can_double,
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    /// The hole card is `None` until the players have acted.
    cards: Vec<Option<JsCard>>,
    value: Option<u8>,
    is_blackjack: bool,
    is_bust: bool,
    hole_revealed: bool,
}

impl JsDealer {
    fn from_game(game: &Game) -> Self {
        let hole_revealed = !matches!(game.state(), GameState::Dealt | GameState::PlayerTurns);
        let dealer = game.dealer();
        let cards = dealer
            .hand()
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (hole_revealed || index > 0).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            value: hole_revealed.then(|| dealer.hand_value()),
            is_blackjack: hole_revealed && dealer.has_blackjack(),
            is_bust: dealer.has_busted(),
            hole_revealed,
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    players: Vec<JsPlayerResult>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_blackjack: bool,
    settled_on_blackjack: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            players: result.players.into_iter().map(JsPlayerResult::from).collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_blackjack: result.dealer_blackjack,
            settled_on_blackjack: result.settled_on_blackjack,
        }
    }
}

#[derive(Serialize)]
struct JsPlayerResult {
    seat: u32,
    outcome: &'static str,
    bet: u32,
    payout: u32,
    net: i32,
    player_value: u8,
}

impl From<PlayerResult> for JsPlayerResult {
    fn from(result: PlayerResult) -> Self {
        Self {
            seat: result.seat as u32,
            outcome: outcome_to_str(result.outcome),
            bet: result.bet as u32,
            payout: result.payout as u32,
            net: result.net as i32,
            player_value: result.player_value,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank.label(),
        value: card.value(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::AwaitingBets => "AwaitingBets",
        GameState::Dealt => "Dealt",
        GameState::PlayerTurns => "PlayerTurns",
        GameState::DealerTurn => "DealerTurn",
        GameState::Settlement => "Settlement",
        GameState::RoundOver => "RoundOver",
        GameState::GameOver => "GameOver",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Win => "Win",
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::Lose => "Lose",
        HandOutcome::Push => "Push",
        HandOutcome::Forfeit => "Forfeit",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
