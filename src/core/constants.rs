// Playfield (pixels)
pub const SCREEN_WIDTH: f64 = 400.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Bird
pub const BIRD_X: f64 = 50.0;
pub const BIRD_WIDTH: f64 = 40.0;
pub const BIRD_HEIGHT: f64 = 30.0;

// Obstacles
pub const OBSTACLE_WIDTH: f64 = 50.0;
pub const GAP_HEIGHT: f64 = 150.0;
pub const GAP_MARGIN: f64 = 50.0;
pub const OBSTACLE_SPEED: f64 = 5.0; // px/tick
pub const SPAWN_SPACING: f64 = 200.0;

// Physics (per tick)
pub const GRAVITY_ACCEL: f64 = 1.0;
pub const JUMP_IMPULSE: f64 = -100.0;

// Scoring
pub const WIN_SCORE: u32 = 10;

// Tick and timing
pub const TICKS_PER_SECOND: u32 = 30;
pub const INPUT_POLL_MS: u64 = 5;
pub const MAX_CATCH_UP_TICKS: u32 = 5;

// Logging
pub const LOG_FILE_NAME: &str = "flappy_bird.log";
