//! Behavior tests for the per-tick simulation.
//!
//! Each test drives `step` directly with a seeded ChaCha RNG so obstacle gaps
//! are reproducible.

use flappy_bird::game::logic::{check_collision, step};
use flappy_bird::{GameConfig, GameState, LossCause, Obstacle, Outcome, Rect, StepInput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

/// Gravity off: the bird hovers at its start height forever.
fn hovering_config() -> GameConfig {
    GameConfig {
        gravity: 0.0,
        ..Default::default()
    }
}

// =============================================================================
// Physics
// =============================================================================

#[test]
fn test_gravity_increases_velocity_by_exactly_gravity() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = rng();

    let mut previous = state.bird_velocity;
    for _ in 0..10 {
        let result = step(&mut state, StepInput::IDLE, &config, &mut rng);
        assert_eq!(result.outcome, Outcome::Ongoing);
        assert_eq!(state.bird_velocity, previous + config.gravity);
        assert!(state.bird_velocity > previous);
        previous = state.bird_velocity;
    }
}

#[test]
fn test_jump_sets_same_velocity_from_any_prior_velocity() {
    let config = GameConfig::default();
    let mut rng = rng();

    for prior in [0.0, 12.0, 45.0, -30.0] {
        let mut state = GameState::new(&config);
        state.bird_y = 450.0;
        state.bird_velocity = prior;
        step(&mut state, StepInput::JUMP, &config, &mut rng);
        assert_eq!(state.bird_velocity, config.jump_impulse, "prior {}", prior);
        assert_eq!(state.bird_y, 350.0);
    }
}

#[test]
fn test_out_of_bounds_seed_ends_run_on_first_tick() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.bird_y = -1.0;

    let result = step(&mut state, StepInput::IDLE, &config, &mut rng());

    assert!(state.is_terminal());
    assert_eq!(result.outcome, Outcome::Lost(LossCause::OutOfBounds));
    assert!(state.obstacles.is_empty());
}

#[test]
fn test_falling_bird_hits_floor() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    let mut rng = rng();

    let mut ticks = 0;
    while !state.is_terminal() {
        step(&mut state, StepInput::IDLE, &config, &mut rng);
        ticks += 1;
        assert!(ticks < 100, "bird never reached the floor");
    }
    assert_eq!(state.outcome, Outcome::Lost(LossCause::OutOfBounds));
    // 300 + n(n+1)/2 + 30 > 600 first holds at n = 23
    assert_eq!(ticks, 23);
}

// =============================================================================
// Collision
// =============================================================================

#[test]
fn test_rect_overlap_exactness() {
    let bird = Rect::new(50.0, 50.0, 100.0, 80.0);
    let top_span = Rect::new(40.0, 0.0, 80.0, 90.0);
    assert!(bird.overlaps(&top_span));

    let shifted = Rect::new(101.0, 0.0, 140.0, 90.0);
    assert!(!bird.overlaps(&shifted));
}

#[test]
fn test_check_collision_against_obstacle_spans() {
    let config = GameConfig {
        obstacle_width: 40.0,
        ..Default::default()
    };
    let bird = Rect::new(50.0, 50.0, 100.0, 80.0);

    // Top span [40, 80] x [0, 90]
    assert!(check_collision(bird, &[Obstacle::new(40.0, 90.0)], &config));
    // Same gap, shifted right of the bird
    assert!(!check_collision(bird, &[Obstacle::new(101.0, 90.0)], &config));
    // Edge contact only
    assert!(!check_collision(bird, &[Obstacle::new(100.0, 90.0)], &config));
}

#[test]
fn test_any_obstacle_hit_ends_run() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.obstacles.push_back(Obstacle::new(300.0, 250.0));
    state.obstacles.push_back(Obstacle::new(70.0, 50.0));

    let result = step(&mut state, StepInput::IDLE, &config, &mut rng());
    assert_eq!(result.outcome, Outcome::Lost(LossCause::Collision));
}

// =============================================================================
// Obstacles
// =============================================================================

#[test]
fn test_spawn_spacing() {
    let config = hovering_config();
    let mut state = GameState::new(&config);
    let mut rng = rng();

    step(&mut state, StepInput::IDLE, &config, &mut rng);
    assert_eq!(state.obstacles.len(), 1);
    assert_eq!(
        state.obstacles[0].x,
        config.screen_width - config.obstacle_speed
    );

    let mut ticks = 1;
    while state.obstacles.len() == 1 {
        let result = step(&mut state, StepInput::IDLE, &config, &mut rng);
        assert_eq!(result.outcome, Outcome::Ongoing);
        ticks += 1;
        assert!(ticks < 100);
    }

    let first = state.obstacles[0];
    let travelled = config.screen_width - first.x;
    assert!(travelled >= config.spawn_spacing);
    assert_eq!(ticks, 42);
    assert_eq!(first.x, 190.0);
    assert_eq!(state.obstacles[1].x, 395.0);
}

#[test]
fn test_gap_offsets_stay_within_margins() {
    let config = hovering_config();
    let mut rng = rng();
    let (min, max) = config.gap_offset_range();

    for _ in 0..200 {
        let mut state = GameState::new(&config);
        step(&mut state, StepInput::IDLE, &config, &mut rng);
        let gap = state.obstacles[0].gap_y;
        assert!(gap >= min && gap <= max, "gap {} outside [{}, {}]", gap, min, max);
    }
}

#[test]
fn test_offscreen_obstacles_are_evicted() {
    let config = hovering_config();
    let mut state = GameState::new(&config);
    // Trailing edge at 1.0; one more scroll puts it at -4.0
    state.obstacles.push_back(Obstacle::new(-49.0, 250.0));
    state.obstacles.push_back(Obstacle::new(150.0, 250.0));

    let result = step(&mut state, StepInput::IDLE, &config, &mut rng());
    assert_eq!(result.evicted, 1);
    assert_eq!(state.obstacles.len(), 2);
    assert_eq!(state.obstacles[0].x, 145.0);
}

// =============================================================================
// Scoring and win
// =============================================================================

#[test]
fn test_win_when_midpoint_crosses_bird() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.score = 9;
    state.obstacles.push_back(Obstacle::new(60.0, 250.0));
    let mut rng = rng();

    let mut scored_at = None;
    for tick in 1..=10 {
        let result = step(&mut state, StepInput::IDLE, &config, &mut rng);
        if result.scored {
            scored_at = Some(tick);
        }
        if state.is_terminal() {
            break;
        }
    }

    // Midpoint sits on the bird's midpoint after tick 3, left of it after tick 4
    assert_eq!(scored_at, Some(4));
    assert_eq!(state.score, 10);
    assert_eq!(state.outcome, Outcome::Won);
}

#[test]
fn test_step_after_terminal_is_rejected() {
    let config = GameConfig::default();
    let mut state = GameState::new(&config);
    state.bird_y = 590.0;
    let mut rng = rng();

    let first = step(&mut state, StepInput::IDLE, &config, &mut rng);
    assert!(first.outcome.is_terminal());
    assert!(!first.rejected);

    let frozen = state.clone();
    let second = step(&mut state, StepInput::JUMP, &config, &mut rng);
    assert!(second.rejected);
    assert_eq!(second.outcome, first.outcome);
    assert_eq!(state, frozen);
}
