//! Read-only view of a game handed to renderers.

use super::types::{GameState, Outcome, Rect};
use crate::core::config::GameConfig;
use serde::Serialize;

/// Top and bottom solid spans of one obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ObstacleSnapshot {
    pub top: Rect,
    pub bottom: Rect,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub screen_width: f64,
    pub screen_height: f64,
    pub bird: Rect,
    pub bird_velocity: f64,
    pub obstacles: Vec<ObstacleSnapshot>,
    pub score: u32,
    pub win_score: u32,
    pub outcome: Outcome,
    pub tick: u64,
}

impl Snapshot {
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        Self {
            screen_width: config.screen_width,
            screen_height: config.screen_height,
            bird: state.bird_rect(config),
            bird_velocity: state.bird_velocity,
            obstacles: state
                .obstacles
                .iter()
                .map(|o| ObstacleSnapshot {
                    top: o.top_span(config),
                    bottom: o.bottom_span(config),
                })
                .collect(),
            score: state.score,
            win_score: config.win_score,
            outcome: state.outcome,
            tick: state.tick_count,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Fraction of the win score reached, clamped to 1.0.
    pub fn progress(&self) -> f64 {
        if self.win_score == 0 {
            return 0.0;
        }
        (self.score as f64 / self.win_score as f64).min(1.0)
    }
}
