//! Common types: engine guess results and the error enums shared by the
//! reference engine and the targeting strategy.

use core::fmt;

use super::cell::Cell;

/// Result of a guess against the reference engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Guess hit a ship segment that was not yet hit.
    Hit,
    /// Guess missed all ships.
    Miss,
    /// Guess sank a ship, carrying its name.
    Sink(&'static str),
}

impl GuessResult {
    /// `true` for both `Hit` and `Sink`.
    pub fn is_hit(self) -> bool {
        !matches!(self, GuessResult::Miss)
    }
}

/// Errors returned by [`Board`](super::board::Board) operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Cell is outside the board.
    OutOfBounds(Cell),
    /// Guess was already made at this position.
    AlreadyGuessed(Cell),
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship placement runs off the board.
    ShipOutOfBounds,
    /// Random placement gave up.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(cell) => write!(f, "Cell {} is outside the board", cell),
            BoardError::AlreadyGuessed(cell) => {
                write!(f, "Guess was already made at {}", cell)
            }
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

/// Errors raised by the targeting strategy. All of them are contract
/// violations by the caller, never runtime conditions of a well-driven session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrategyError {
    /// A phase was configured with parity spacing zero.
    InvalidSpacing,
    /// A random fallback target was requested with no live cells left.
    GridExhausted,
    /// A turn was requested before `initialize`.
    NotInitialized,
}

impl fmt::Display for StrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyError::InvalidSpacing => write!(f, "Parity spacing must be at least 1"),
            StrategyError::GridExhausted => {
                write!(f, "No unprobed cells remain for a fallback shot")
            }
            StrategyError::NotInitialized => {
                write!(f, "Bot fired before the session was initialized")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for StrategyError {}
