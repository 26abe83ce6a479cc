//! Headless runs of the simulation for tuning and regression checks.
//!
//! Each run drives a [`Session`](crate::core::session::Session) with a
//! scripted autopilot instead of a keyboard, using the same `step` as the
//! terminal game.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::{autopilot_wants_jump, run_simulation, simulate_single_run};
