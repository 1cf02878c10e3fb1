#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod sim;
pub mod strategy;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
pub use sim::{run_session, simulate, Report, SimConfig, SimError};
pub use strategy::{
    hunt, prune_dead_zone, Bot, Phase, PhaseScheduler, PhasedBot, Session, Target, TurnOutcome,
};
