//! Terminal blackjack against the dealer.

use core::time::Duration;
use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use bjgame::{Card, Game, GameError, GameOptions, GameState, Hand};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug, Clone)]
#[command(name = "bjgame", version, about = "Play blackjack against the dealer", long_about = None)]
struct Cli {
    /// Shuffle seed; a time-based seed is used when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between dealer draws (ms)
    #[arg(long, default_value_t = 1000)]
    dealer_delay_ms: u64,

    /// Dealer hits soft 17 instead of standing
    #[arg(long, default_value_t = false)]
    hit_soft_17: bool,

    /// Display name of the player
    #[arg(short, long, default_value = "Player")]
    name: String,

    /// Print the image asset id of every card
    #[arg(long, default_value_t = false)]
    show_assets: bool,

    /// Verbose logging to stderr
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let options = GameOptions::default()
        .with_player_name(cli.name.clone())
        .with_stand_on_soft_17(!cli.hit_soft_17);
    let mut game = Game::new(options, seed);

    tracing::info!(seed, "session started");
    println!("Blackjack (seed {seed}). Actions: h(it), s(tand), q(uit).");

    loop {
        match game.start_round() {
            Ok(()) => {}
            Err(GameError::EmptyDeck(_)) => {
                println!("The deck is out of cards. Game over.");
                break;
            }
            Err(err) => {
                println!("Error: {err}");
                break;
            }
        }

        match play_round(&mut game, &cli) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                println!("Error: {err}");
                break;
            }
        }

        match prompt_line("\nPress Enter for the next round, 'q' to quit: ").as_deref() {
            None | Some("q" | "quit") => break,
            Some(_) => {}
        }
    }

    println!("Goodbye.");
}

fn init_tracing(debug: bool) {
    let default_filter = if debug { "debug" } else { "bjgame=warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(debug)
        .init();
}

/// Plays one dealt round. Returns `Ok(false)` if the user quit.
fn play_round(game: &mut Game, cli: &Cli) -> Result<bool, GameError> {
    while game.state() == GameState::PlayerTurn {
        print_table(game, cli.show_assets);

        let Some(action) = prompt_line("Action: ") else {
            return Ok(false);
        };
        match action.as_str() {
            "h" | "hit" => {
                if game.hit()? {
                    println!("Bust at {}.", game.player_value());
                }
            }
            "s" | "stand" => game.stand()?,
            "q" | "quit" => return Ok(false),
            _ => println!("Unknown action."),
        }
    }

    if game.state() == GameState::DealerTurn {
        let delay = Duration::from_millis(cli.dealer_delay_ms);
        println!("{} plays.", game.dealer().name());
        while game.dealer_hit()? {
            print_table(game, cli.show_assets);
            thread::sleep(delay);
        }
    }

    print_table(game, cli.show_assets);
    let outcome = game.determine_winner()?;
    println!("Result: {outcome}");

    Ok(true)
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

fn print_table(game: &Game, show_assets: bool) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());
    for party in [game.dealer(), game.player()] {
        println!(
            "{}: {} (value {})",
            party.name(),
            format_hand(party.hand(), show_assets),
            party.value()
        );
    }
}

fn format_hand(hand: &Hand, show_assets: bool) -> String {
    let cards: Vec<String> = hand.cards().iter().map(ToString::to_string).collect();
    let mut text = cards.join(" ");

    if show_assets {
        let assets: Vec<String> = hand.cards().iter().map(asset_id).collect();
        text.push_str(&format!(" [{}]", assets.join(", ")));
    }

    text
}

/// Image file a graphical front end would show for `card`.
fn asset_id(card: &Card) -> String {
    format!("img/{}_of_{}.png", card.rank.symbol(), card.suit.name())
}
