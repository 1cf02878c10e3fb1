//! The set of cells that have not been probed or pruned in the current session.

use alloc::vec::Vec;
use rand::Rng;

use super::cell::Cell;

/// Live cells of one session, keyed by `row * size + col`.
///
/// Membership, removal and uniform sampling are all O(1): `slots` is a dense
/// list of live keys and `position` maps each key back to its slot.
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    slots: Vec<usize>,
    position: Vec<Option<usize>>,
}

impl Grid {
    /// A grid with every cell of a `size`×`size` board live.
    pub fn new(size: usize) -> Self {
        let total = size * size;
        Self {
            size,
            slots: (0..total).collect(),
            position: (0..total).map(Some).collect(),
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of live cells.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns `true` if `cell` is on the board and still live.
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size) && self.position[cell.index(self.size)].is_some()
    }

    /// Remove `cell`, returning whether it was live. Removed cells never come back.
    pub fn remove(&mut self, cell: Cell) -> bool {
        if !cell.in_bounds(self.size) {
            return false;
        }
        let key = cell.index(self.size);
        let Some(slot) = self.position[key].take() else {
            return false;
        };
        self.slots.swap_remove(slot);
        if let Some(&moved) = self.slots.get(slot) {
            self.position[moved] = Some(slot);
        }
        true
    }

    /// Returns `true` if at least one orthogonal neighbour of `cell` is live.
    pub fn has_live_neighbor(&self, cell: Cell) -> bool {
        cell.neighbors(self.size).any(|n| self.contains(n))
    }

    /// Pick a live cell uniformly at random, or `None` if the grid is empty.
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Cell> {
        if self.slots.is_empty() {
            return None;
        }
        let slot = rng.random_range(0..self.slots.len());
        Some(Cell::from_index(self.slots[slot], self.size))
    }

    /// Iterate live cells in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.slots
            .iter()
            .map(move |&key| Cell::from_index(key, self.size))
    }
}
