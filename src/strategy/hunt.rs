//! Hunt/sink traversal: from one hit, march outward in the four cardinal
//! directions to trace the rest of the ship.

use alloc::vec::Vec;
use core::ops::ControlFlow;
use log::trace;

use crate::core::{Cell, Direction, Engine, Grid};

struct Traversal<'a, E: Engine + ?Sized> {
    origin: Cell,
    grid: &'a mut Grid,
    engine: &'a mut E,
    segments: Vec<Cell>,
    sunk: bool,
}

impl<E: Engine + ?Sized> Traversal<'_, E> {
    /// Probe outward from the origin until a miss, a dead cell, or the edge.
    /// Continues with whether anything was hit; breaks on the early exit.
    fn march(&mut self, dir: Direction) -> ControlFlow<(), bool> {
        let size = self.grid.size();
        let mut found = false;
        let mut cursor = self.origin;
        while let Some(next) = cursor.step(dir, size) {
            if !self.grid.contains(next) {
                break;
            }
            self.grid.remove(next);
            let hit = self.engine.probe(next);
            trace!("hunt {:?} {} -> {}", dir, next, if hit { "hit" } else { "miss" });
            if !hit {
                break;
            }
            self.segments.push(next);
            found = true;
            if self.sunk {
                return ControlFlow::Break(());
            }
            cursor = next;
        }
        ControlFlow::Continue(found)
    }

    fn run(&mut self) -> ControlFlow<()> {
        let vertical = self.march(Direction::Up)?;
        let mut horizontal = false;
        if !vertical {
            horizontal = self.march(Direction::Right)?;
        }
        if !horizontal {
            self.march(Direction::Down)?;
        }
        if !vertical {
            self.march(Direction::Left)?;
        }
        ControlFlow::Continue(())
    }
}

/// Trace the ship hit at `origin`, which the caller has already removed from
/// `grid`. Returns the ship's cells starting with `origin`.
///
/// Direction order is up, right, down, left. A hit going up locks the ship
/// vertical and skips right and left; a hit going right locks it horizontal
/// and skips down. Every probed cell leaves the grid.
///
/// The sunk check is sampled once before any directional probe, so it cannot
/// see the sinking this traversal causes and all permitted directions are
/// always explored.
pub fn hunt<E: Engine + ?Sized>(origin: Cell, grid: &mut Grid, engine: &mut E) -> Vec<Cell> {
    let sunk_before = engine.sunk_ship_count();
    let sunk = engine.sunk_ship_count() == sunk_before + 1;

    let mut segments = Vec::new();
    segments.push(origin);
    let mut traversal = Traversal {
        origin,
        grid,
        engine,
        segments,
        sunk,
    };
    let _ = traversal.run();
    traversal.segments
}
