//! Flappy Bird - terminal arcade game library
//!
//! Exposes the simulation, its configuration and the session driver for the
//! binaries and tests. The terminal renderer lives in `ui`.

pub mod build_info;
pub mod core;
pub mod game;
pub mod input;
pub mod simulator;
pub mod ui;

pub use crate::core::config::GameConfig;
pub use crate::core::session::{Session, TickClock};
pub use game::snapshot::Snapshot;
pub use game::types::{GameState, LossCause, Obstacle, Outcome, Rect, StepInput, StepResult};
