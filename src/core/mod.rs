//! Core data model and reference engine (no_std compatible)
//!
//! Cells, the live-cell grid, candidate sequences, and a square board that
//! implements [`Engine`] so the strategy can be driven end to end. Only
//! `alloc`, `rand` and `log` are required.

pub mod board;
pub mod candidates;
pub mod cell;
pub mod common;
pub mod config;
pub mod engine;
pub mod grid;
pub mod ship;

// Re-export commonly used types
pub use board::Board;
pub use candidates::{build_candidates, PhaseSpec};
pub use cell::{Cell, Direction};
pub use common::{BoardError, GuessResult, StrategyError};
pub use config::*;
pub use engine::Engine;
pub use grid::Grid;
pub use ship::{Orientation, Ship, ShipType};
