#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use battleship_bot::{init_logging, simulate, Bot, PhasedBot, SimConfig, DEFAULT_BOARD_SIZE, DEFAULT_GAMES};

#[cfg(feature = "std")]
use clap::Parser;
#[cfg(feature = "std")]
use rand::Rng;

#[derive(Parser)]
#[command(author, version, about = "Play many battleship games with the phased parity bot and report shot counts.", long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of independent games to play.
    #[arg(long, default_value_t = DEFAULT_GAMES)]
    games: usize,
    /// Side length of the square board.
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    board_size: usize,
    #[arg(long, help = "Fix RNG seed for reproducible runs (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print the report as JSON instead of a text summary.
    #[arg(long)]
    json: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| rand::rng().random());
    let config = SimConfig {
        games: cli.games,
        board_size: cli.board_size,
        seed,
    };

    let mut bot = PhasedBot::new();
    log::info!("bot: {}", bot.authors());
    let report = simulate(&config, &mut bot).map_err(|e| anyhow::anyhow!(e))?;

    if cli.json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        println!("{}", report);
    }
    Ok(())
}
