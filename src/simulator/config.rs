//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a batch of headless runs.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of runs to perform
    pub num_runs: u32,

    /// Seed of the first run; run N uses seed + N (None = random)
    pub seed: Option<u64>,

    /// Ticks after which a still-running game counts as timed out
    pub max_ticks_per_run: u64,

    /// Game tuning shared by every run
    pub game: GameConfig,

    /// Print one line per run
    pub verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            max_ticks_per_run: 10_000,
            game: GameConfig::default(),
            verbose: false,
        }
    }
}

impl SimConfig {
    /// Seed for the run at `run_idx`.
    pub fn seed_for_run(&self, run_idx: u32) -> Option<u64> {
        self.seed.map(|seed| seed.wrapping_add(run_idx as u64))
    }
}
