//! Session driver: plays many independent games with one bot and reports how
//! many shots each took.

use alloc::vec::Vec;
use core::fmt;
use log::{debug, info};
use rand::{rngs::SmallRng, SeedableRng};

use crate::core::{Board, BoardError, StrategyError, DEFAULT_BOARD_SIZE, DEFAULT_GAMES, SHIPS};
use crate::strategy::Bot;

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimConfig {
    pub games: usize,
    pub board_size: usize,
    /// Master seed; every game's RNG is derived from it.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            board_size: DEFAULT_BOARD_SIZE,
            seed: 0,
        }
    }
}

/// Errors that abort a simulation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// The bot broke its contract.
    Strategy(StrategyError),
    /// The fleet could not be set up.
    Board(BoardError),
    /// A game ran past the turn cap without sinking every ship.
    TurnLimit { turns: usize },
}

impl From<StrategyError> for SimError {
    fn from(err: StrategyError) -> Self {
        SimError::Strategy(err)
    }
}

impl From<BoardError> for SimError {
    fn from(err: BoardError) -> Self {
        SimError::Board(err)
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::Strategy(e) => write!(f, "strategy error: {}", e),
            SimError::Board(e) => write!(f, "board error: {}", e),
            SimError::TurnLimit { turns } => {
                write!(f, "game not finished after {} turns", turns)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SimError {}

/// Turn cap for one game: every cell probed once plus room for skipped
/// scan candidates.
pub fn turn_limit(board_size: usize) -> usize {
    board_size * board_size * 4
}

/// Play one game on `board` until every ship is sunk. Returns the number of
/// shots the board recorded.
pub fn run_session(
    bot: &mut dyn Bot,
    board: &mut Board,
    rng: &mut SmallRng,
) -> Result<usize, SimError> {
    bot.initialize(board)?;
    let limit = turn_limit(board.size());
    let mut turns = 0;
    while !board.all_sunk() {
        if turns == limit {
            return Err(SimError::TurnLimit { turns });
        }
        turns += 1;
        bot.fire_shot(board, rng)?;
    }
    debug!("game over after {} turns, {} shots", turns, board.shots());
    Ok(board.shots())
}

/// Summary over all games of a run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub struct Report {
    pub games: usize,
    pub board_size: usize,
    pub min: usize,
    pub max: usize,
    pub mean: f64,
    pub std_dev: f64,
    /// Shots taken in each game, in play order.
    pub results: Vec<usize>,
}

impl Report {
    pub fn from_results(board_size: usize, results: Vec<usize>) -> Self {
        let games = results.len();
        let min = results.iter().copied().min().unwrap_or(0);
        let max = results.iter().copied().max().unwrap_or(0);
        let (mean, std_dev) = if games == 0 {
            (0.0, 0.0)
        } else {
            let n = games as f64;
            let mean = results.iter().map(|&r| r as f64).sum::<f64>() / n;
            let var = results
                .iter()
                .map(|&r| {
                    let d = r as f64 - mean;
                    d * d
                })
                .sum::<f64>()
                / n;
            (mean, libm::sqrt(var))
        };
        Report {
            games,
            board_size,
            min,
            max,
            mean,
            std_dev,
            results,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} games on a {}x{} board",
            self.games, self.board_size, self.board_size
        )?;
        writeln!(f, "  average shots: {:.2}", self.mean)?;
        writeln!(f, "  std deviation: {:.2}", self.std_dev)?;
        write!(f, "  best: {}  worst: {}", self.min, self.max)
    }
}

/// Play `config.games` independent games with `bot`, each on a freshly
/// placed standard fleet.
pub fn simulate(config: &SimConfig, bot: &mut dyn Bot) -> Result<Report, SimError> {
    info!(
        "running {} games on a {}x{} board (seed {})",
        config.games, config.board_size, config.board_size, config.seed
    );
    let mut master = SmallRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.games);
    for game in 0..config.games {
        let mut rng = SmallRng::from_rng(&mut master);
        let mut board = Board::new(config.board_size);
        board.place_fleet(&mut rng, &SHIPS)?;
        let shots = run_session(bot, &mut board, &mut rng)?;
        debug!("game {}: {} shots", game + 1, shots);
        results.push(shots);
    }
    let report = Report::from_results(config.board_size, results);
    info!("average {:.2} shots over {} games", report.mean, report.games);
    Ok(report)
}
