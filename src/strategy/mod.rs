//! Targeting strategy
//!
//! This module defines the [`Bot`] trait and the phased parity bot:
//! - `scheduler`: the three scan phases and the random fallback
//! - `hunt`: tracing a ship from its first hit
//! - `prune`: dropping the dead zone around a traced ship
//!
//! All mutable state lives in a [`Session`], created fresh by
//! [`Bot::initialize`] for every game.

use alloc::vec::Vec;
use log::debug;
use rand::{rngs::SmallRng, Rng};

use crate::core::{Cell, Engine, Grid, PhaseSpec, StrategyError, PHASES};

pub mod hunt;
pub mod prune;
pub mod scheduler;

pub use hunt::hunt;
pub use prune::prune_dead_zone;
pub use scheduler::{Phase, PhaseScheduler, Target};

/// Result of one turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The scheduled candidate was not worth probing; nothing was fired.
    Skipped { phase: Phase, cell: Cell },
    /// The primary probe missed.
    Miss { phase: Phase, cell: Cell },
    /// The primary probe hit. `ship` holds the traced segments starting at
    /// `cell`; `pruned` counts dead-zone cells removed afterwards.
    Hit {
        phase: Phase,
        cell: Cell,
        ship: Vec<Cell>,
        pruned: usize,
    },
}

impl TurnOutcome {
    /// Scheduler phase the turn was drawn from.
    pub fn phase(&self) -> Phase {
        match *self {
            TurnOutcome::Skipped { phase, .. }
            | TurnOutcome::Miss { phase, .. }
            | TurnOutcome::Hit { phase, .. } => phase,
        }
    }

    /// Returns `true` if the primary probe was fired.
    pub fn fired(&self) -> bool {
        !matches!(self, TurnOutcome::Skipped { .. })
    }
}

/// Interface between a session driver and a targeting bot.
pub trait Bot {
    /// Reset all per-game state. Called once per game before any shot.
    fn initialize(&mut self, engine: &dyn Engine) -> Result<(), StrategyError>;

    /// Take one turn against `engine`.
    fn fire_shot(
        &mut self,
        engine: &mut dyn Engine,
        rng: &mut SmallRng,
    ) -> Result<TurnOutcome, StrategyError>;

    /// Who wrote the bot.
    fn authors(&self) -> &'static str;
}

/// Per-game state: the live grid and the scheduler.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    scheduler: PhaseScheduler,
}

impl Session {
    /// Fresh session on a `size`×`size` board with the standard phases.
    pub fn new(size: usize) -> Result<Self, StrategyError> {
        Self::with_phases(size, &PHASES)
    }

    /// Fresh session with custom scan phases.
    pub fn with_phases(size: usize, phases: &[PhaseSpec; 3]) -> Result<Self, StrategyError> {
        Ok(Self {
            grid: Grid::new(size),
            scheduler: PhaseScheduler::new(size, phases)?,
        })
    }

    /// Cells neither probed nor pruned.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn scheduler(&self) -> &PhaseScheduler {
        &self.scheduler
    }

    /// Take one turn: pick a target, probe it, and on a hit trace and prune
    /// the ship.
    pub fn take_turn<E, R>(&mut self, engine: &mut E, rng: &mut R) -> Result<TurnOutcome, StrategyError>
    where
        E: Engine + ?Sized,
        R: Rng + ?Sized,
    {
        let (phase, cell) = match self.scheduler.next_target(&self.grid, rng)? {
            Target::Skip { phase, cell } => return Ok(TurnOutcome::Skipped { phase, cell }),
            Target::Probe { phase, cell } => (phase, cell),
        };

        self.grid.remove(cell);
        if !engine.probe(cell) {
            return Ok(TurnOutcome::Miss { phase, cell });
        }

        let ship = hunt(cell, &mut self.grid, engine);
        let pruned = prune_dead_zone(&mut self.grid, &ship);
        debug!(
            "{}: ship of {} traced from {}, {} dead cells pruned, {} live",
            phase,
            ship.len(),
            cell,
            pruned,
            self.grid.len()
        );
        Ok(TurnOutcome::Hit {
            phase,
            cell,
            ship,
            pruned,
        })
    }
}

/// Bot that scans from the board centre on three parity lattices of
/// decreasing spacing, sinks whatever it hits, then guesses at random.
#[derive(Debug, Default)]
pub struct PhasedBot {
    session: Option<Session>,
}

impl PhasedBot {
    pub fn new() -> Self {
        Self::default()
    }

    /// State of the current game, if one was initialized.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }
}

impl Bot for PhasedBot {
    fn initialize(&mut self, engine: &dyn Engine) -> Result<(), StrategyError> {
        self.session = Some(Session::new(engine.board_size())?);
        Ok(())
    }

    fn fire_shot(
        &mut self,
        engine: &mut dyn Engine,
        rng: &mut SmallRng,
    ) -> Result<TurnOutcome, StrategyError> {
        self.session
            .as_mut()
            .ok_or(StrategyError::NotInitialized)?
            .take_turn(engine, rng)
    }

    fn authors(&self) -> &'static str {
        "phased parity bot"
    }
}
