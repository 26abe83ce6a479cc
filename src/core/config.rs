//! Game configuration.
//!
//! Every tuning constant of the simulation lives here. Defaults reproduce the
//! classic 400x600 game; a JSON file may override any subset of fields.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

/// Configuration for a play session. Fixed once a session starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: f64,
    pub screen_height: f64,

    /// Fixed left edge of the bird.
    pub bird_x: f64,
    pub bird_width: f64,
    pub bird_height: f64,
    /// Starting top edge of the bird (None = vertically centered).
    pub initial_bird_y: Option<f64>,

    pub obstacle_width: f64,
    pub gap_height: f64,
    /// Minimum distance between a gap and the top/bottom edge of the screen.
    pub gap_margin: f64,
    /// Horizontal distance every obstacle moves per tick.
    pub obstacle_speed: f64,
    /// Distance the newest obstacle travels before the next one spawns.
    pub spawn_spacing: f64,

    /// Added to the bird's velocity every tick.
    pub gravity: f64,
    /// Velocity the bird is set to on a jump (negative = upward).
    pub jump_impulse: f64,

    /// Score that ends the run as a win.
    pub win_score: u32,
    pub ticks_per_second: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            bird_x: BIRD_X,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            initial_bird_y: None,
            obstacle_width: OBSTACLE_WIDTH,
            gap_height: GAP_HEIGHT,
            gap_margin: GAP_MARGIN,
            obstacle_speed: OBSTACLE_SPEED,
            spawn_spacing: SPAWN_SPACING,
            gravity: GRAVITY_ACCEL,
            jump_impulse: JUMP_IMPULSE,
            win_score: WIN_SCORE,
            ticks_per_second: TICKS_PER_SECOND,
        }
    }
}

/// Reasons a configuration is rejected.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositive(&'static str),
    GapDoesNotFit { gap_height: f64, margin: f64, screen_height: f64 },
    BirdOffScreen,
    BirdTooTall { bird_height: f64, screen_height: f64 },
    StartOutOfBounds(f64),
    UpwardJumpRequired(f64),
    ZeroWinScore,
    ZeroTickRate,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive(field) => write!(f, "{} must be greater than zero", field),
            Self::GapDoesNotFit {
                gap_height,
                margin,
                screen_height,
            } => write!(
                f,
                "gap of {} with margin {} does not fit a screen {} tall",
                gap_height, margin, screen_height
            ),
            Self::BirdOffScreen => write!(f, "bird does not fit horizontally on screen"),
            Self::BirdTooTall {
                bird_height,
                screen_height,
            } => write!(
                f,
                "bird {} tall does not fit a screen {} tall",
                bird_height, screen_height
            ),
            Self::StartOutOfBounds(y) => {
                write!(f, "initial_bird_y {} puts the bird off screen", y)
            }
            Self::UpwardJumpRequired(v) => {
                write!(f, "jump_impulse must be negative (upward), got {}", v)
            }
            Self::ZeroWinScore => write!(f, "win_score must be at least 1"),
            Self::ZeroTickRate => write!(f, "ticks_per_second must be at least 1"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for io::Error {
    fn from(err: ConfigError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &Path) -> io::Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json).map_err(|e| {
            io::Error::new(e.kind(), format!("{}: {}", path.display(), e))
        })
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> io::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("screen_width", self.screen_width),
            ("screen_height", self.screen_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("obstacle_width", self.obstacle_width),
            ("gap_height", self.gap_height),
            ("obstacle_speed", self.obstacle_speed),
            ("spawn_spacing", self.spawn_spacing),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(ConfigError::NonPositive(field));
            }
        }

        if self.gap_margin < 0.0
            || self.gap_height + 2.0 * self.gap_margin > self.screen_height
        {
            return Err(ConfigError::GapDoesNotFit {
                gap_height: self.gap_height,
                margin: self.gap_margin,
                screen_height: self.screen_height,
            });
        }

        if self.bird_x < 0.0 || self.bird_x + self.bird_width > self.screen_width {
            return Err(ConfigError::BirdOffScreen);
        }

        if self.bird_height >= self.screen_height {
            return Err(ConfigError::BirdTooTall {
                bird_height: self.bird_height,
                screen_height: self.screen_height,
            });
        }

        let start = self.start_bird_y();
        if !(start >= 0.0 && start <= self.screen_height - self.bird_height) {
            return Err(ConfigError::StartOutOfBounds(start));
        }

        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::UpwardJumpRequired(self.jump_impulse));
        }

        if self.win_score == 0 {
            return Err(ConfigError::ZeroWinScore);
        }

        if self.ticks_per_second == 0 {
            return Err(ConfigError::ZeroTickRate);
        }

        Ok(())
    }

    /// Top edge of the bird at the start of a run.
    pub fn start_bird_y(&self) -> f64 {
        self.initial_bird_y
            .unwrap_or((self.screen_height / 2.0).floor())
    }

    /// Horizontal center of the bird. The bird never moves horizontally.
    pub fn bird_mid_x(&self) -> f64 {
        self.bird_x + self.bird_width / 2.0
    }

    /// Inclusive range of valid gap offsets.
    pub fn gap_offset_range(&self) -> (f64, f64) {
        let min = self.gap_margin;
        let max = self.screen_height - self.gap_height - self.gap_margin;
        (min, max.max(min))
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.ticks_per_second.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_classic_game() {
        let config = GameConfig::default();
        assert_eq!(config.screen_width, 400.0);
        assert_eq!(config.screen_height, 600.0);
        assert_eq!(config.gap_height, 150.0);
        assert_eq!(config.jump_impulse, -100.0);
        assert_eq!(config.win_score, 10);
        assert_eq!(config.ticks_per_second, 30);
        assert_eq!(config.start_bird_y(), 300.0);
        assert_eq!(config.bird_mid_x(), 70.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_gap_offset_range() {
        let config = GameConfig::default();
        assert_eq!(config.gap_offset_range(), (50.0, 400.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(r#"{ "win_score": 3, "jump_impulse": -12.5 }"#)
            .unwrap();
        assert_eq!(config.win_score, 3);
        assert_eq!(config.jump_impulse, -12.5);
        assert_eq!(config.screen_width, 400.0);
        assert_eq!(config.obstacle_speed, 5.0);
    }

    #[test]
    fn test_malformed_json_is_invalid_data() {
        let err = GameConfig::from_json("{ not json").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn test_invalid_values_are_invalid_input() {
        let err = GameConfig::from_json(r#"{ "jump_impulse": 10.0 }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_validate_rejects_gap_taller_than_screen() {
        let config = GameConfig {
            gap_height: 550.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GapDoesNotFit { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_dimensions() {
        let config = GameConfig {
            obstacle_speed: 0.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::NonPositive("obstacle_speed"))
        );
    }

    #[test]
    fn test_validate_rejects_zero_rates() {
        let config = GameConfig {
            win_score: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWinScore));

        let config = GameConfig {
            ticks_per_second: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroTickRate));
    }

    #[test]
    fn test_validate_rejects_bird_off_screen() {
        let config = GameConfig {
            bird_x: 380.0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::BirdOffScreen));
    }

    #[test]
    fn test_validate_rejects_bird_taller_than_screen() {
        let config = GameConfig {
            bird_height: 600.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::BirdTooTall { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_start_below_floor() {
        let err = GameConfig::from_json(r#"{ "initial_bird_y": 900.0 }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);

        let config = GameConfig {
            initial_bird_y: Some(571.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::StartOutOfBounds(571.0)));
    }

    #[test]
    fn test_validate_start_edges() {
        for y in [0.0, 570.0] {
            let config = GameConfig {
                initial_bird_y: Some(y),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "start {} should be accepted", y);
        }
        let config = GameConfig {
            initial_bird_y: Some(-1.0),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::StartOutOfBounds(-1.0)));
    }

    #[test]
    fn test_load_missing_file_is_not_found() {
        let path = std::env::temp_dir().join("flappy_bird_no_such_config_8d1f.json");
        let err = GameConfig::load(&path).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_error_messages_name_the_field() {
        let msg = ConfigError::NonPositive("gap_height").to_string();
        assert!(msg.contains("gap_height"));
    }

    #[test]
    fn test_tick_interval() {
        let config = GameConfig::default();
        let interval = config.tick_interval();
        assert!((interval.as_secs_f64() - 1.0 / 30.0).abs() < 1e-9);
    }
}
