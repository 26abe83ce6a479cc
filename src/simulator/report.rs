//! Simulation report generation.

use crate::game::snapshot::Snapshot;
use crate::game::types::{LossCause, Outcome};
use std::fmt;

/// Result of one headless run.
#[derive(Debug, Clone)]
pub struct RunStats {
    pub seed: Option<u64>,
    pub outcome: Outcome,
    pub score: u32,
    pub ticks: u64,
    pub jumps: u32,
    /// Most obstacles alive at once; bounded thanks to eviction.
    pub peak_obstacles: usize,
    pub final_snapshot: Snapshot,
}

/// Aggregated results from multiple runs.
#[derive(Debug, Clone, Default)]
pub struct SimReport {
    pub num_runs: u32,
    pub wins: u32,
    pub collisions: u32,
    pub out_of_bounds: u32,
    pub timed_out: u32,
    pub avg_score: f64,
    pub best_score: u32,
    pub avg_ticks: f64,
    pub peak_obstacles: usize,
    pub runs: Vec<RunStats>,
}

impl SimReport {
    pub fn from_runs(runs: Vec<RunStats>) -> Self {
        let num_runs = runs.len() as u32;
        if num_runs == 0 {
            return Self::default();
        }

        Self {
            num_runs,
            wins: count_outcome(&runs, Outcome::Won),
            collisions: count_outcome(&runs, Outcome::Lost(LossCause::Collision)),
            out_of_bounds: count_outcome(&runs, Outcome::Lost(LossCause::OutOfBounds)),
            timed_out: count_outcome(&runs, Outcome::Ongoing),
            avg_score: runs.iter().map(|r| r.score as f64).sum::<f64>() / num_runs as f64,
            best_score: runs.iter().map(|r| r.score).max().unwrap_or(0),
            avg_ticks: runs.iter().map(|r| r.ticks as f64).sum::<f64>() / num_runs as f64,
            peak_obstacles: runs.iter().map(|r| r.peak_obstacles).max().unwrap_or(0),
            runs,
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.num_runs == 0 {
            return 0.0;
        }
        self.wins as f64 / self.num_runs as f64
    }
}

fn count_outcome(runs: &[RunStats], outcome: Outcome) -> u32 {
    runs.iter().filter(|r| r.outcome == outcome).count() as u32
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simulation Report ({} runs) ===", self.num_runs)?;
        writeln!(
            f,
            "Wins: {} ({:.1}%)",
            self.wins,
            self.win_rate() * 100.0
        )?;
        writeln!(
            f,
            "Losses: {} collision, {} out of bounds",
            self.collisions, self.out_of_bounds
        )?;
        writeln!(f, "Timed out: {}", self.timed_out)?;
        writeln!(
            f,
            "Score: avg {:.2}, best {}",
            self.avg_score, self.best_score
        )?;
        writeln!(f, "Ticks: avg {:.1}", self.avg_ticks)?;
        write!(f, "Peak obstacles alive: {}", self.peak_obstacles)
    }
}
