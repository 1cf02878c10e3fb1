use super::cell::Cell;

/// The game engine a bot plays against.
///
/// The engine owns the ships and the shot record. A bot only sees the board
/// dimension, the outcome of each probe, and how many ships have gone down.
pub trait Engine {
    /// Board dimension `N` of the square board.
    fn board_size(&self) -> usize;

    /// Fire at `cell` and report whether a ship occupied it. Duplicate or
    /// off-board probes are rejected by the engine and reported as a miss.
    fn probe(&mut self, cell: Cell) -> bool;

    /// Number of fully destroyed ships. Never decreases within a game.
    fn sunk_ship_count(&self) -> usize;
}
