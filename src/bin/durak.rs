//! Durak CLI - play one automated game and print the results.

use clap::Parser;
use durak_sim::cards::Suit;
use durak_sim::core::{GameConfig, GameRng};
use durak_sim::games::durak::DurakGameBuilder;
use tracing::info;

#[derive(Parser)]
#[command(name = "durak")]
#[command(about = "Simulate one round of Durak between automated players")]
struct Args {
    /// Number of players (2-8)
    #[arg(short, long, default_value = "4")]
    players: usize,

    /// Seed for a reproducible game; random if omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Fix the trump suit instead of taking it from the last card
    #[arg(long)]
    trump: Option<Suit>,

    /// Abandon the game after this many turns
    #[arg(long, default_value = "10000")]
    max_turns: u32,

    /// Per-turn debug logging, plus the shuffled deck
    #[arg(short, long)]
    debug: bool,

    /// Print the final report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.debug { "debug" } else { "warn" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("== Card Game `Durak` ==");

    let seed = args.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let mut config = GameConfig::new(args.players)
        .with_seed(seed)
        .with_max_turns(args.max_turns);
    if let Some(trump) = args.trump {
        config = config.with_trump(trump);
    }

    let mut game = DurakGameBuilder::new().config(config).build()?;
    info!(game = %game.id(), seed, trump = %game.registry().trump(), "starting game");

    let report = game.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
