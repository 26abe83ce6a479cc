//! Flappy Bird data structures.
//!
//! The bird falls under gravity, the player jumps, and obstacles with a gap
//! scroll in from the right edge.

use crate::core::config::GameConfig;
use serde::Serialize;
use std::collections::VecDeque;

/// Axis-aligned rectangle in screen pixels, y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Rect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Strict overlap. Rectangles sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x2 > other.x1 && self.x1 < other.x2 && self.y2 > other.y1 && self.y1 < other.y2
    }
}

/// Why a run was lost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LossCause {
    /// The bird left the screen through the top or bottom edge.
    OutOfBounds,
    /// The bird hit an obstacle.
    Collision,
}

/// Run outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Outcome {
    #[default]
    Ongoing,
    Lost(LossCause),
    Won,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// A single obstacle: two solid spans with a passable gap between them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    /// Leading (left) edge.
    pub x: f64,
    /// Y coordinate where the gap begins.
    pub gap_y: f64,
}

impl Obstacle {
    pub fn new(x: f64, gap_y: f64) -> Self {
        Self { x, gap_y }
    }

    /// Solid span above the gap: `[0, gap_y)`.
    pub fn top_span(&self, config: &GameConfig) -> Rect {
        Rect::new(self.x, 0.0, self.x + config.obstacle_width, self.gap_y)
    }

    /// Solid span below the gap: `[gap_y + gap_height, screen_height)`.
    pub fn bottom_span(&self, config: &GameConfig) -> Rect {
        Rect::new(
            self.x,
            self.gap_y + config.gap_height,
            self.x + config.obstacle_width,
            config.screen_height,
        )
    }

    pub fn mid_x(&self, config: &GameConfig) -> f64 {
        self.x + config.obstacle_width / 2.0
    }

    /// Trailing edge has passed the left edge of the screen.
    pub fn is_off_screen(&self, config: &GameConfig) -> bool {
        self.x + config.obstacle_width < 0.0
    }
}

/// Input gathered between two ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInput {
    pub jump_requested: bool,
}

impl StepInput {
    pub const IDLE: StepInput = StepInput {
        jump_requested: false,
    };
    pub const JUMP: StepInput = StepInput {
        jump_requested: true,
    };
}

/// What happened during one `step` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepResult {
    /// Outcome after the step.
    pub outcome: Outcome,
    /// The state was already terminal; nothing changed.
    pub rejected: bool,
    pub jumped: bool,
    /// A new obstacle was appended.
    pub spawned: bool,
    /// The score went up this tick.
    pub scored: bool,
    /// Obstacles dropped after leaving the screen.
    pub evicted: usize,
}

/// The whole mutable simulation state.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Top edge of the bird.
    pub bird_y: f64,
    /// Vertical velocity in px/tick (positive = downward).
    pub bird_velocity: f64,
    /// Oldest first; the back is the most recently spawned.
    pub obstacles: VecDeque<Obstacle>,
    pub score: u32,
    pub outcome: Outcome,
    /// Ticks simulated this run.
    pub tick_count: u64,
}

impl GameState {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            bird_y: config.start_bird_y(),
            bird_velocity: 0.0,
            obstacles: VecDeque::new(),
            score: 0,
            outcome: Outcome::Ongoing,
            tick_count: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn bird_rect(&self, config: &GameConfig) -> Rect {
        Rect::new(
            config.bird_x,
            self.bird_y,
            config.bird_x + config.bird_width,
            self.bird_y + config.bird_height,
        )
    }

    /// Bird is fully inside `[0, screen_height]` vertically.
    pub fn bird_in_bounds(&self, config: &GameConfig) -> bool {
        self.bird_y >= 0.0 && self.bird_y + config.bird_height <= config.screen_height
    }

    /// First obstacle whose trailing edge is still right of the bird's left edge.
    pub fn next_obstacle(&self, config: &GameConfig) -> Option<&Obstacle> {
        self.obstacles
            .iter()
            .find(|o| o.x + config.obstacle_width > config.bird_x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_defaults() {
        let config = GameConfig::default();
        let state = GameState::new(&config);
        assert_eq!(state.bird_y, 300.0);
        assert_eq!(state.bird_velocity, 0.0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.outcome, Outcome::Ongoing);
        assert!(!state.is_terminal());
    }

    #[test]
    fn test_rect_overlap_is_strict() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let touching = Rect::new(10.0, 0.0, 20.0, 10.0);
        let inside = Rect::new(9.0, 9.0, 20.0, 20.0);
        assert!(!a.overlaps(&touching));
        assert!(!touching.overlaps(&a));
        assert!(a.overlaps(&inside));
    }

    #[test]
    fn test_obstacle_spans() {
        let config = GameConfig::default();
        let obstacle = Obstacle::new(100.0, 200.0);
        assert_eq!(obstacle.top_span(&config), Rect::new(100.0, 0.0, 150.0, 200.0));
        assert_eq!(
            obstacle.bottom_span(&config),
            Rect::new(100.0, 350.0, 150.0, 600.0)
        );
        assert_eq!(obstacle.mid_x(&config), 125.0);
    }

    #[test]
    fn test_obstacle_off_screen_needs_trailing_edge_past_zero() {
        let config = GameConfig::default();
        assert!(!Obstacle::new(-50.0, 100.0).is_off_screen(&config));
        assert!(Obstacle::new(-50.5, 100.0).is_off_screen(&config));
    }

    #[test]
    fn test_bird_bounds() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.bird_y = 0.0;
        assert!(state.bird_in_bounds(&config));
        state.bird_y = 570.0;
        assert!(state.bird_in_bounds(&config));
        state.bird_y = 570.5;
        assert!(!state.bird_in_bounds(&config));
        state.bird_y = -0.5;
        assert!(!state.bird_in_bounds(&config));
    }

    #[test]
    fn test_next_obstacle_skips_passed_ones() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config);
        state.obstacles.push_back(Obstacle::new(-10.0, 100.0));
        state.obstacles.push_back(Obstacle::new(180.0, 200.0));
        let next = state.next_obstacle(&config).unwrap();
        assert_eq!(next.x, 180.0);
    }

    #[test]
    fn test_outcome_terminal() {
        assert!(!Outcome::Ongoing.is_terminal());
        assert!(Outcome::Won.is_terminal());
        assert!(Outcome::Lost(LossCause::Collision).is_terminal());
    }
}
