//! Board coordinates and the four orthogonal directions.
//!
//! Every neighbour lookup goes through [`Cell::step`], which clips against the
//! board edge, so callers never special-case corners or borders.

use core::fmt;

/// One (row, column) coordinate on a square board, 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

/// Orthogonal direction on the board. `Up` decreases the row, `Right`
/// increases the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions in probing order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, col) delta of a single step.
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns `true` if the cell lies on an `size`×`size` board.
    pub fn in_bounds(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// Linear key `row * size + col`.
    pub fn index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    /// Inverse of [`Cell::index`].
    pub fn from_index(index: usize, size: usize) -> Self {
        Self::new(index / size, index % size)
    }

    /// Move by a signed offset, returning `None` when the result leaves the board.
    pub fn offset(self, d_row: isize, d_col: isize, size: usize) -> Option<Cell> {
        let row = self.row.checked_add_signed(d_row)?;
        let col = self.col.checked_add_signed(d_col)?;
        let cell = Cell::new(row, col);
        cell.in_bounds(size).then_some(cell)
    }

    /// The adjacent cell in `dir`, if it is on the board.
    pub fn step(self, dir: Direction, size: usize) -> Option<Cell> {
        let (d_row, d_col) = dir.delta();
        self.offset(d_row, d_col, size)
    }

    /// In-bounds orthogonal neighbours in up, right, down, left order.
    pub fn neighbors(self, size: usize) -> impl Iterator<Item = Cell> {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(dir, size))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Cell::new(row, col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
