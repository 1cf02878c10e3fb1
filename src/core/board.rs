//! Reference engine: a square board holding a fleet and the shot record.

use alloc::vec::Vec;
use core::fmt;
use log::{trace, warn};
use rand::Rng;

use super::cell::Cell;
use super::common::{BoardError, GuessResult};
use super::config::PLACEMENT_ATTEMPTS;
use super::engine::Engine;
use super::ship::{Orientation, Ship, ShipType};

/// Main board state: ship placements and guesses.
pub struct Board {
    size: usize,
    ships: Vec<Ship>,
    /// Index into `ships` for every occupied cell.
    occupancy: Vec<Option<usize>>,
    guessed: Vec<bool>,
    shots: usize,
    sunk: usize,
}

impl Board {
    /// Create an empty `size`×`size` board (no ships placed).
    pub fn new(size: usize) -> Self {
        let total = size * size;
        Board {
            size,
            ships: Vec::new(),
            occupancy: (0..total).map(|_| None).collect(),
            guessed: (0..total).map(|_| false).collect(),
            shots: 0,
            sunk: 0,
        }
    }

    /// Board dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Number of accepted guesses.
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Number of ships sunk so far.
    pub fn sunk_count(&self) -> usize {
        self.sunk
    }

    /// Returns `true` when at least one ship is placed and all are sunk.
    pub fn all_sunk(&self) -> bool {
        !self.ships.is_empty() && self.sunk == self.ships.len()
    }

    /// Returns `true` if a ship covers `cell`.
    pub fn is_occupied(&self, cell: Cell) -> bool {
        cell.in_bounds(self.size) && self.occupancy[cell.index(self.size)].is_some()
    }

    /// Place a ship with its first segment at `origin`.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        origin: Cell,
        orientation: Orientation,
    ) -> Result<(), BoardError> {
        let ship = Ship::new(ship_type, orientation, origin, self.size)?;
        if ship.cells().any(|c| self.is_occupied(c)) {
            return Err(BoardError::ShipOverlaps);
        }
        let id = self.ships.len();
        for c in ship.cells() {
            self.occupancy[c.index(self.size)] = Some(id);
        }
        self.ships.push(ship);
        Ok(())
    }

    /// Returns a random (origin, orientation) for `ship_type` that neither
    /// overlaps nor touches edge-to-edge any ship already placed.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(Cell, Orientation), BoardError> {
        let len = ship_type.length();
        if len == 0 || len > self.size {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..PLACEMENT_ATTEMPTS {
            let orient = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orient {
                Orientation::Horizontal => (self.size - 1, self.size - len),
                Orientation::Vertical => (self.size - len, self.size - 1),
            };
            let origin = Cell::new(rng.random_range(0..=max_r), rng.random_range(0..=max_c));
            let ship = Ship::new(ship_type, orient, origin, self.size)?;
            let clear = ship.cells().all(|c| {
                !self.is_occupied(c) && c.neighbors(self.size).all(|n| !self.is_occupied(n))
            });
            if clear {
                return Ok((origin, orient));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place every ship of `fleet` at random, non-touching positions.
    pub fn place_fleet<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        fleet: &[ShipType],
    ) -> Result<(), BoardError> {
        for &ship_type in fleet {
            let (origin, orient) = self.random_placement(rng, ship_type)?;
            self.place(ship_type, origin, orient)?;
        }
        Ok(())
    }

    /// Process a guess at `cell`, marking it and reporting the result.
    pub fn guess(&mut self, cell: Cell) -> Result<GuessResult, BoardError> {
        if !cell.in_bounds(self.size) {
            return Err(BoardError::OutOfBounds(cell));
        }
        let key = cell.index(self.size);
        if self.guessed[key] {
            return Err(BoardError::AlreadyGuessed(cell));
        }
        self.guessed[key] = true;
        self.shots += 1;

        let Some(id) = self.occupancy[key] else {
            return Ok(GuessResult::Miss);
        };
        let ship = &mut self.ships[id];
        ship.register_hit();
        if ship.is_sunk() {
            self.sunk += 1;
            Ok(GuessResult::Sink(ship.ship_type().name()))
        } else {
            Ok(GuessResult::Hit)
        }
    }
}

impl Engine for Board {
    fn board_size(&self) -> usize {
        self.size
    }

    fn probe(&mut self, cell: Cell) -> bool {
        match self.guess(cell) {
            Ok(result) => {
                trace!("probe {} -> {:?}", cell, result);
                result.is_hit()
            }
            Err(e) => {
                warn!("rejected probe: {}", e);
                false
            }
        }
    }

    fn sunk_ship_count(&self) -> usize {
        self.sunk
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {},\n  shots: {},\n  sunk: {},\n  ships: {:?}\n}}",
            self.size, self.shots, self.sunk, self.ships
        )
    }
}
