//! Per-tick simulation for Flappy Bird.

use super::types::{GameState, LossCause, Obstacle, Outcome, Rect, StepInput, StepResult};
use crate::core::config::GameConfig;
use rand::Rng;
use std::collections::VecDeque;
use tracing::debug;

/// Advance the game by one tick.
///
/// Order within a tick: gravity, jump, integrate, bounds, collision, spawn,
/// scroll, evict, score, win. A terminal state is left untouched and the
/// call is reported as rejected.
pub fn step<R: Rng>(
    state: &mut GameState,
    input: StepInput,
    config: &GameConfig,
    rng: &mut R,
) -> StepResult {
    if state.is_terminal() {
        return StepResult {
            outcome: state.outcome,
            rejected: true,
            ..Default::default()
        };
    }

    let mut result = StepResult::default();

    // A state handed over out of bounds never gets simulated
    if !state.bird_in_bounds(config) {
        return finish(state, result, Outcome::Lost(LossCause::OutOfBounds));
    }

    state.tick_count += 1;

    state.bird_velocity += config.gravity;
    if input.jump_requested {
        // Overwrite, not additive
        state.bird_velocity = config.jump_impulse;
        result.jumped = true;
    }
    state.bird_y += state.bird_velocity;

    if !state.bird_in_bounds(config) {
        return finish(state, result, Outcome::Lost(LossCause::OutOfBounds));
    }

    if check_collision(state.bird_rect(config), &state.obstacles, config) {
        return finish(state, result, Outcome::Lost(LossCause::Collision));
    }

    result.spawned = spawn_if_due(&mut state.obstacles, config, rng);
    advance_obstacles(&mut state.obstacles, config);
    result.evicted = evict_off_screen(&mut state.obstacles, config);

    let gained = count_crossings(&state.obstacles, config);
    if gained > 0 {
        state.score += gained;
        result.scored = true;
        debug!(score = state.score, tick = state.tick_count, "scored");
    }

    if state.score >= config.win_score {
        return finish(state, result, Outcome::Won);
    }

    result.outcome = state.outcome;
    result
}

fn finish(state: &mut GameState, mut result: StepResult, outcome: Outcome) -> StepResult {
    state.outcome = outcome;
    result.outcome = outcome;
    debug!(
        ?outcome,
        score = state.score,
        tick = state.tick_count,
        "run ended"
    );
    result
}

/// True if the bird overlaps either solid span of any obstacle.
pub fn check_collision<'a, I>(bird: Rect, obstacles: I, config: &GameConfig) -> bool
where
    I: IntoIterator<Item = &'a Obstacle>,
{
    obstacles.into_iter().any(|obstacle| {
        bird.overlaps(&obstacle.top_span(config)) || bird.overlaps(&obstacle.bottom_span(config))
    })
}

/// Spawn when the lane is empty or the newest obstacle has cleared the spacing.
pub fn should_spawn(obstacles: &VecDeque<Obstacle>, config: &GameConfig) -> bool {
    match obstacles.back() {
        None => true,
        Some(last) => last.x < config.screen_width - config.spawn_spacing,
    }
}

/// Append a new obstacle at the right edge if the spawn policy allows it.
pub fn spawn_if_due<R: Rng>(
    obstacles: &mut VecDeque<Obstacle>,
    config: &GameConfig,
    rng: &mut R,
) -> bool {
    if !should_spawn(obstacles, config) {
        return false;
    }
    let gap_y = random_gap_y(config, rng);
    obstacles.push_back(Obstacle::new(config.screen_width, gap_y));
    debug!(gap_y, "spawned obstacle");
    true
}

/// Whole-pixel gap offset, uniform over the configured range (inclusive).
pub fn random_gap_y<R: Rng>(config: &GameConfig, rng: &mut R) -> f64 {
    let (min, max) = config.gap_offset_range();
    let lo = min.ceil() as i64;
    let hi = max.floor() as i64;
    if hi <= lo {
        return min;
    }
    rng.gen_range(lo..=hi) as f64
}

pub fn advance_obstacles(obstacles: &mut VecDeque<Obstacle>, config: &GameConfig) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= config.obstacle_speed;
    }
}

/// Drop obstacles from the front once they are fully off screen.
pub fn evict_off_screen(obstacles: &mut VecDeque<Obstacle>, config: &GameConfig) -> usize {
    let mut evicted = 0;
    while obstacles
        .front()
        .is_some_and(|o| o.is_off_screen(config))
    {
        obstacles.pop_front();
        evicted += 1;
    }
    if evicted > 0 {
        debug!(evicted, remaining = obstacles.len(), "evicted obstacles");
    }
    evicted
}

/// Obstacles whose midpoint crossed the bird's midpoint during the last scroll.
///
/// Crossing means the midpoint was at or right of the bird's midpoint before
/// the scroll and is strictly left of it after, so each obstacle scores once.
pub fn count_crossings(obstacles: &VecDeque<Obstacle>, config: &GameConfig) -> u32 {
    let bird_mid = config.bird_mid_x();
    obstacles
        .iter()
        .filter(|o| {
            let now = o.mid_x(config);
            let before = now + config.obstacle_speed;
            before >= bird_mid && now < bird_mid
        })
        .count() as u32
}
