//! Configuration, timing and run ownership around the simulation.

pub mod config;
pub mod constants;
pub mod logging;
pub mod session;

pub use config::{ConfigError, GameConfig};
pub use session::{Session, TickClock};
