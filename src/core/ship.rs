//! Ship definitions and placement geometry for the reference engine.

use core::fmt;

use super::cell::Cell;
use super::common::BoardError;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on a square board, tracking how many of its segments were hit.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Cell,
    hits: usize,
}

impl Ship {
    /// Place a ship with its first segment at `origin`, extending right
    /// (horizontal) or down (vertical). Fails if it does not fit on a
    /// `board_size`×`board_size` board.
    pub fn new(
        ship_type: ShipType,
        orientation: Orientation,
        origin: Cell,
        board_size: usize,
    ) -> Result<Self, BoardError> {
        let len = ship_type.length();
        let far = match orientation {
            Orientation::Horizontal => origin.col + len,
            Orientation::Vertical => origin.row + len,
        };
        if len == 0 || far > board_size || !origin.in_bounds(board_size) {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok(Ship {
            ship_type,
            orientation,
            origin,
            hits: 0,
        })
    }

    /// Cells covered by the ship, starting at the origin.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let Ship {
            origin,
            orientation,
            ..
        } = *self;
        (0..self.ship_type.length()).map(move |i| match orientation {
            Orientation::Horizontal => Cell::new(origin.row, origin.col + i),
            Orientation::Vertical => Cell::new(origin.row + i, origin.col),
        })
    }

    /// Returns `true` if the ship covers `cell`.
    pub fn contains(&self, cell: Cell) -> bool {
        let len = self.ship_type.length();
        match self.orientation {
            Orientation::Horizontal => {
                cell.row == self.origin.row
                    && cell.col >= self.origin.col
                    && cell.col < self.origin.col + len
            }
            Orientation::Vertical => {
                cell.col == self.origin.col
                    && cell.row >= self.origin.row
                    && cell.row < self.origin.row + len
            }
        }
    }

    /// Record a hit on one of the ship's segments. The board guarantees each
    /// cell is guessed at most once.
    pub fn register_hit(&mut self) {
        self.hits = (self.hits + 1).min(self.ship_type.length());
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits == self.ship_type.length()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// First segment of the ship.
    pub fn origin(&self) -> Cell {
        self.origin
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits,
        )
    }
}
