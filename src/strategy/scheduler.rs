//! Phase scheduler: walks the three candidate sequences in order, then falls
//! back to uniform random selection over the live grid.

use alloc::vec::Vec;
use core::fmt;
use log::debug;
use rand::Rng;

use crate::core::{build_candidates, Cell, Grid, PhaseSpec, StrategyError};

/// Scheduler state. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Phase {
    /// Widest parity spacing; every live candidate is probed.
    Coarse,
    /// Medium spacing; probed only next to a live cell.
    Medium,
    /// Finest spacing; probed only next to a live cell.
    Fine,
    /// Uniform random selection over the live grid.
    Fallback,
}

impl Phase {
    const SCANS: [Phase; 3] = [Phase::Coarse, Phase::Medium, Phase::Fine];

    fn slot(self) -> Option<usize> {
        match self {
            Phase::Coarse => Some(0),
            Phase::Medium => Some(1),
            Phase::Fine => Some(2),
            Phase::Fallback => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Coarse => write!(f, "phase 1 (coarse)"),
            Phase::Medium => write!(f, "phase 2 (medium)"),
            Phase::Fine => write!(f, "phase 3 (fine)"),
            Phase::Fallback => write!(f, "fallback"),
        }
    }
}

/// What the scheduler decided for one turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Fire at `cell`.
    Probe { phase: Phase, cell: Cell },
    /// The scheduled candidate was dead or isolated; its slot is spent.
    Skip { phase: Phase, cell: Cell },
}

/// Three precomputed candidate sequences plus how far each has been consumed.
#[derive(Debug, Clone)]
pub struct PhaseScheduler {
    sequences: [Vec<Cell>; 3],
    cursors: [usize; 3],
    phase: Phase,
}

impl PhaseScheduler {
    /// Precompute the sequences of `specs` for a `size`×`size` board.
    pub fn new(size: usize, specs: &[PhaseSpec; 3]) -> Result<Self, StrategyError> {
        let sequences = [
            build_candidates(size, &specs[0])?,
            build_candidates(size, &specs[1])?,
            build_candidates(size, &specs[2])?,
        ];
        let mut scheduler = Self {
            sequences,
            cursors: [0; 3],
            phase: Phase::Coarse,
        };
        scheduler.phase = scheduler.current_phase();
        Ok(scheduler)
    }

    /// The phase the next turn will draw from.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Full candidate sequence of a scan phase; empty for `Fallback`.
    pub fn sequence(&self, phase: Phase) -> &[Cell] {
        match phase.slot() {
            Some(i) => &self.sequences[i],
            None => &[],
        }
    }

    /// Number of candidates consumed from a scan phase.
    pub fn cursor(&self, phase: Phase) -> usize {
        phase.slot().map_or(0, |i| self.cursors[i])
    }

    /// Returns `true` once every scan sequence is consumed.
    pub fn is_exhausted(&self) -> bool {
        self.phase == Phase::Fallback
    }

    fn current_phase(&self) -> Phase {
        for (i, phase) in Phase::SCANS.into_iter().enumerate() {
            if self.cursors[i] < self.sequences[i].len() {
                return phase;
            }
        }
        Phase::Fallback
    }

    /// Decide this turn's target against the live `grid`.
    ///
    /// A scan candidate always advances its cursor, whether or not it is
    /// probed. Fallback requires a non-empty grid.
    pub fn next_target<R: Rng + ?Sized>(
        &mut self,
        grid: &Grid,
        rng: &mut R,
    ) -> Result<Target, StrategyError> {
        let phase = self.phase;
        let Some(slot) = phase.slot() else {
            let cell = grid.random_cell(rng).ok_or(StrategyError::GridExhausted)?;
            return Ok(Target::Probe { phase, cell });
        };

        let cell = self.sequences[slot][self.cursors[slot]];
        self.cursors[slot] += 1;
        self.phase = self.current_phase();
        if self.phase != phase {
            debug!("{} exhausted, moving to {}", phase, self.phase);
        }

        let live = grid.contains(cell);
        let eligible = match phase {
            Phase::Coarse => live,
            _ => live && grid.has_live_neighbor(cell),
        };
        Ok(if eligible {
            Target::Probe { phase, cell }
        } else {
            Target::Skip { phase, cell }
        })
    }
}
