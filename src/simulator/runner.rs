//! Headless runner driving sessions with a scripted player.

use super::config::SimConfig;
use super::report::{RunStats, SimReport};
use crate::core::config::GameConfig;
use crate::core::session::Session;
use crate::game::types::GameState;
use tracing::{debug, info};

/// Run every configured session and aggregate the results.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let seed = config.seed_for_run(run_idx);
        let stats = simulate_single_run(&config.game, seed, config.max_ticks_per_run);

        if config.verbose {
            println!(
                "Run {}/{} (seed {:?}) - {:?}, score {}, ticks {}, jumps {}",
                run_idx + 1,
                config.num_runs,
                seed,
                stats.outcome,
                stats.score,
                stats.ticks,
                stats.jumps
            );
        }
        all_runs.push(stats);
    }

    let report = SimReport::from_runs(all_runs);
    info!(
        runs = report.num_runs,
        wins = report.wins,
        avg_score = report.avg_score,
        "simulation finished"
    );
    report
}

/// Play one game to completion (or `max_ticks`) with the autopilot.
pub fn simulate_single_run(game: &GameConfig, seed: Option<u64>, max_ticks: u64) -> RunStats {
    let mut session = Session::new(game.clone(), seed);
    let mut jumps = 0;
    let mut peak_obstacles = 0;

    while !session.state().is_terminal() && session.state().tick_count < max_ticks {
        if autopilot_wants_jump(session.state(), session.config()) {
            session.request_jump();
        }
        let result = session.tick();
        if result.jumped {
            jumps += 1;
        }
        peak_obstacles = peak_obstacles.max(session.state().obstacles.len());
    }

    let state = session.state();
    debug!(?seed, outcome = ?state.outcome, score = state.score, "run done");
    RunStats {
        seed,
        outcome: state.outcome,
        score: state.score,
        ticks: state.tick_count,
        jumps,
        peak_obstacles,
        final_snapshot: session.snapshot(),
    }
}

/// Scripted player: jump when falling one more tick would take the bird
/// below the gap it is aiming for, unless the jump itself would overshoot
/// the top of that gap.
pub fn autopilot_wants_jump(state: &GameState, config: &GameConfig) -> bool {
    let (gap_top, gap_bottom) = match state.next_obstacle(config) {
        Some(obstacle) => (obstacle.gap_y, obstacle.gap_y + config.gap_height),
        // Nothing ahead: hold the middle band of the screen
        None => {
            let top = (config.screen_height - config.gap_height) / 2.0;
            (top, top + config.gap_height)
        }
    };

    let falling_bottom =
        state.bird_y + state.bird_velocity + config.gravity + config.bird_height;
    let jump_top = state.bird_y + config.jump_impulse;

    if falling_bottom > config.screen_height {
        // About to hit the floor; any jump that stays on screen beats that
        return jump_top >= 0.0;
    }
    falling_bottom > gap_bottom && jump_top >= gap_top.max(0.0)
}
