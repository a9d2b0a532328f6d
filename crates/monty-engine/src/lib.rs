//! Monty Hall game engine
//!
//! Core logic for the three-door Monty Hall puzzle: resolving single trials,
//! batch win-rate simulation, and a step-by-step interactive session with
//! per-strategy history. This crate is compiled to:
//! - Native (for the command-line harness)
//! - WASM (for a browser frontend)

mod door;
mod error;
mod history;
mod random;
mod session;
mod simulation;
mod trial;

#[cfg(feature = "wasm")]
mod wasm;

pub use door::{generate_arrangement, Arrangement, Door, Slot, DOOR_COUNT};
pub use error::{ErrorKind, MontyError};
pub use history::{History, HistorySnapshot};
pub use random::{expand_seed, Seed, SeededRng};
pub use session::{Session, SessionView, Step};
pub use simulation::{simulate, simulate_win_rate, SimulationConfig, SimulationReport};
#[cfg(feature = "parallel")]
pub use simulation::simulate_win_rate_parallel;
pub use trial::{
    final_choice, host_reveal, play_arranged, play_trial, resolve, settle, Outcome, Strategy, Trial,
};
