//! Console blackjack: interactive hot-seat play or an automatic simulation.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{
    Action, ActionError, Card, DealError, Game, GameOptions, HandOutcome, RoundError, RoundResult,
    Suit, TurnView,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bjsim", about = "Single-table blackjack against the dealer")]
struct Args {
    /// Number of players at the table
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u8).range(1..=6))]
    players: u8,

    /// Starting bankroll for every player
    #[arg(long, default_value_t = 1000)]
    money: usize,

    /// Table minimum bet
    #[arg(long, default_value_t = 10)]
    min_bet: usize,

    /// Table maximum bet
    #[arg(long, default_value_t = 500)]
    max_bet: usize,

    /// Fraction of the deck dealt before it is reshuffled (0 disables)
    #[arg(long, default_value_t = 0.5)]
    penetration: f64,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Ask each player for their bet instead of using the 10% strategy
    #[arg(long)]
    manual_bets: bool,

    /// Simulate rounds without prompting; players hit below 17
    #[arg(long)]
    auto: bool,

    /// Number of rounds to simulate with --auto
    #[arg(long, default_value_t = 100)]
    rounds: usize,
}

enum Flow {
    Continue,
    Quit,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    log::info!("starting with seed {seed}");

    let options = GameOptions::default()
        .with_min_bet(args.min_bet)
        .with_max_bet(args.max_bet)
        .with_penetration(args.penetration);
    let mut game = Game::new(usize::from(args.players), args.money, options, seed);

    if args.auto {
        run_auto(&mut game, args.rounds);
    } else {
        run_console(&mut game, args.manual_bets);
    }

    print_final_bankrolls(&game);
}

fn run_console(game: &mut Game, manual_bets: bool) {
    println!("Welcome to Blackjack!");
    println!("Try to get as close to 21 as possible without going over.");
    println!(
        "Dealer stands on {} and draws below it.",
        game.options.dealer_stands_on
    );
    println!("Type 'q' at any prompt to quit. Good luck!\n");

    loop {
        if game.check_and_reshuffle() == Ok(true) {
            println!("Deck reshuffled.");
        }

        print_game_state(game);

        if let Flow::Quit = collect_bets(game, manual_bets) {
            refund_open_bets(game);
            return;
        }

        match game.deal_initial_cards() {
            Ok(()) => {}
            Err(DealError::Deck(err)) => {
                println!("{err}; shuffling a fresh deck.");
                if game.reset_deck().is_err() || game.deal_initial_cards().is_err() {
                    println!("Could not deal the round.");
                    refund_open_bets(game);
                    return;
                }
            }
            Err(err) => {
                println!("Could not deal the round: {err}");
                refund_open_bets(game);
                return;
            }
        }

        print_initial_hands(game);

        match play_dealt_round(game) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => {
                refund_open_bets(game);
                return;
            }
            Err(err) => {
                println!("Round cannot finish: {err}. Bets are returned.");
                if let Err(err) = game.abort_round() {
                    println!("Abort error: {err}");
                    return;
                }
            }
        }

        if let Some(result) = game.last_result() {
            print_results(game, result);
        }

        let play_again = ask_yes_no("Do you want to play another round? (y/n): ");
        match game.next_round() {
            Ok(true) if play_again => {}
            Ok(true) => return,
            Ok(false) => {
                println!("\nEvery player is out of money.");
                return;
            }
            Err(err) => {
                println!("Round error: {err}");
                return;
            }
        }
    }
}

fn collect_bets(game: &mut Game, manual_bets: bool) -> Flow {
    let (min_bet, max_bet) = (game.options.min_bet, game.options.max_bet);

    for seat in 0..game.players().len() {
        let Some(player) = game.player(seat) else {
            continue;
        };
        if player.money() == 0 {
            continue;
        }
        let name = player.name().to_string();
        let money = player.money();

        if manual_bets {
            if !game.can_bet(seat) {
                println!("{name} sits out: bankroll ${money} is below the ${min_bet} minimum");
                continue;
            }
            loop {
                let prompt = format!(
                    "{name}, bet amount ({min_bet}-{}, 0 to sit out): ",
                    max_bet.min(money)
                );
                let Some(amount) = prompt_usize(&prompt) else {
                    return Flow::Quit;
                };
                if amount == 0 {
                    println!("{name} sits out");
                    break;
                }
                if amount < min_bet || amount > max_bet {
                    println!("Bets must be between {min_bet} and {max_bet}.");
                    continue;
                }
                // A human's amount goes through the strategy path as both bounds.
                match game.place_bet(seat, amount, amount) {
                    Ok(bet) => {
                        println!("{name} bets ${bet}");
                        break;
                    }
                    Err(err) => println!("Bet rejected: {err}"),
                }
            }
        } else {
            match game.place_bet(seat, min_bet, max_bet) {
                Ok(bet) => println!("{name} bets ${bet}"),
                Err(err) => println!("{name} sits out: {err}"),
            }
        }
    }

    Flow::Continue
}

fn play_dealt_round(game: &mut Game) -> Result<Flow, RoundError> {
    if game.check_for_blackjacks()? {
        for &seat in game.betting_order() {
            if let Some(player) = game.player(seat).filter(|p| p.has_blackjack()) {
                println!("{} has Blackjack!", player.name());
            }
        }
        if game.dealer().has_blackjack() {
            println!("Dealer has Blackjack!");
        }
        return Ok(Flow::Continue);
    }

    let mut announced = None;
    while let Some(seat) = game.current_player() {
        let Some(player) = game.player(seat) else {
            break;
        };
        if announced != Some(seat) {
            println!("\n{}'s turn:", player.name());
            println!("{}", format_player(game, seat));
            announced = Some(seat);
        }

        let prompt = if game.can_double(seat) {
            "Do you want to (h)it, (s)tand, or (d)ouble down? "
        } else {
            "Do you want to (h)it or (s)tand? "
        };
        let Some(input) = prompt_line(prompt) else {
            return Ok(Flow::Quit);
        };
        if input == "q" || input == "quit" {
            return Ok(Flow::Quit);
        }

        let action: Action = match input.parse() {
            Ok(action) => action,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match game.player_action(seat, action) {
            Ok(_) => {
                println!("{}", format_player(game, seat));
                if game.player(seat).is_some_and(|p| p.has_busted()) {
                    println!("{} busts!", game.player(seat).map_or("", |p| p.name()));
                }
            }
            Err(ActionError::CannotDouble | ActionError::Bet(_)) => {
                println!("You can't double down.");
            }
            Err(ActionError::Deck(err)) => return Err(err.into()),
            Err(err) => println!("Action error: {err}"),
        }
    }

    println!("\nDealer's turn:");
    println!("{}", format_dealer(game, false));
    let drawn = game.dealer_turn()?;
    for card in drawn {
        println!("Dealer draws {}", format_card(&card));
    }

    game.settle_round()?;
    Ok(Flow::Continue)
}

/// Returns every stake still on the table before leaving mid-round.
fn refund_open_bets(game: &mut Game) {
    if game
        .abort_round()
        .is_ok_and(|result| !result.players.is_empty())
    {
        println!("Round abandoned. Bets are returned.");
    }
}

fn run_auto(game: &mut Game, rounds: usize) {
    let mut played = 0;

    for round in 1..=rounds {
        if game.check_and_reshuffle() == Ok(true) {
            log::info!("deck reshuffled before round {round}");
        }

        match game.play_round(mimic_dealer) {
            Ok(result) => {
                played += 1;
                println!("Round {round}: {}", summarize(game, &result));
            }
            Err(err) => println!("Round {round} aborted: {err}"),
        }

        if game.next_round() != Ok(true) {
            break;
        }
    }

    println!("\nSimulated {played} round(s).");
}

/// Hits below 17 like the dealer, doubling on 10 or 11 when allowed.
fn mimic_dealer(turn: TurnView<'_>) -> Action {
    match turn.player.hand_value() {
        10 | 11 if turn.can_double => Action::DoubleDown,
        value if value < 17 => Action::Hit,
        _ => Action::Stand,
    }
}

fn summarize(game: &Game, result: &RoundResult) -> String {
    let parts: Vec<String> = result
        .players
        .iter()
        .map(|r| {
            let name = game.player(r.seat).map_or("?", |p| p.name());
            format!("{name} {:?} ({:+})", r.outcome, r.net)
        })
        .collect();
    format!("dealer {} | {}", result.dealer_value, parts.join(", "))
}

fn print_game_state(game: &Game) {
    println!("\n--- Current Game State ---");
    for player in game.players() {
        println!("{}'s bankroll: ${}", player.name(), player.money());
    }
    println!("Cards remaining in the deck: {}", game.cards_remaining());
}

fn print_initial_hands(game: &Game) {
    println!("\n--- Initial Hands ---");
    for &seat in game.betting_order() {
        println!("{}", format_player(game, seat));
    }
    println!("{}", format_dealer(game, true));
}

fn print_results(game: &Game, result: &RoundResult) {
    println!("\n--- Final Hands ---");
    for player_result in &result.players {
        println!("{}", format_player(game, player_result.seat));
    }
    println!("{}", format_dealer(game, false));

    for player_result in &result.players {
        let name = game.player(player_result.seat).map_or("?", |p| p.name());
        let line = match player_result.outcome {
            HandOutcome::Win if result.dealer_bust => format!("Dealer busts. {name} wins!"),
            HandOutcome::Win => format!("{name} wins!"),
            HandOutcome::Blackjack => format!("{name} wins with Blackjack!"),
            HandOutcome::Push => format!("{name} pushes."),
            HandOutcome::Lose if result.dealer_blackjack => {
                format!("{name} loses to Dealer's Blackjack.")
            }
            HandOutcome::Lose if player_result.player_value > 21 => {
                format!("{name} busts. Dealer wins.")
            }
            HandOutcome::Lose => format!("Dealer wins against {name}."),
            HandOutcome::Forfeit => format!("{name} loses; the round ended on a Blackjack."),
        };
        println!("{line} (net {:+})", player_result.net);
    }
}

fn print_final_bankrolls(game: &Game) {
    println!("\nThank you for playing Blackjack!");
    for player in game.players() {
        println!("{}'s final bankroll: ${}", player.name(), player.money());
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt)?;
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn ask_yes_no(prompt: &str) -> bool {
    loop {
        match prompt_line(prompt).as_deref() {
            Some("y" | "yes") => return true,
            Some("n" | "no" | "q" | "quit") | None => return false,
            Some(_) => println!("Invalid input. Please enter 'y' for yes or 'n' for no."),
        }
    }
}

fn format_player(game: &Game, seat: usize) -> String {
    game.player(seat).map_or_else(String::new, |player| {
        let cards = player
            .hand()
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ");
        format!(
            "{}'s hand: {cards} (value {}, bet ${})",
            player.name(),
            player.hand_value(),
            player.current_bet()
        )
    })
}

fn format_dealer(game: &Game, hide_hole: bool) -> String {
    let dealer = game.dealer();
    if hide_hole {
        let up = dealer
            .up_card()
            .map_or_else(|| "??".to_string(), format_card);
        return format!("Dealer's hand: [hidden] {up}");
    }

    let cards = dealer
        .hand()
        .cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ");
    format!("Dealer's hand: {cards} (value {})", dealer.hand_value())
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs | Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
