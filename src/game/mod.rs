//! Flappy Bird simulation.
//!
//! A bird falls under gravity and jumps on request; obstacles with a gap
//! scroll in from the right. Hitting an obstacle or leaving the screen ends
//! the run as a loss, passing enough obstacles ends it as a win.

pub mod logic;
pub mod snapshot;
pub mod types;

pub use logic::*;
pub use snapshot::*;
pub use types::*;
