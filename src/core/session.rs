//! Driver-side ownership of a run.
//!
//! A [`Session`] owns the configuration, the current [`GameState`] and the
//! random source. Input arriving between ticks is coalesced into a single
//! [`StepInput`], and restarting replaces the whole state in one assignment.

use crate::core::config::GameConfig;
use crate::core::constants::MAX_CATCH_UP_TICKS;
use crate::game::logic::step;
use crate::game::snapshot::Snapshot;
use crate::game::types::{GameState, Outcome, StepInput, StepResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::info;

pub struct Session {
    config: GameConfig,
    state: GameState,
    rng: StdRng,
    seed: Option<u64>,
    jump_pending: bool,
    quit_requested: bool,
    /// Runs started in this session, including the current one.
    runs: u32,
}

impl Session {
    /// Start a session. With a seed every run replays the same obstacle stream.
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let state = GameState::new(&config);
        info!(?seed, win_score = config.win_score, "session started");
        Self {
            rng: make_rng(seed),
            config,
            state,
            seed,
            jump_pending: false,
            quit_requested: false,
            runs: 1,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn outcome(&self) -> Outcome {
        self.state.outcome
    }

    /// Queue a jump for the next tick. Repeated requests collapse into one.
    pub fn request_jump(&mut self) {
        self.jump_pending = true;
    }

    pub fn jump_pending(&self) -> bool {
        self.jump_pending
    }

    /// Ask the driver loop to stop. Never consulted by `tick`.
    pub fn request_quit(&mut self) {
        self.quit_requested = true;
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Run one simulation step with the input gathered since the last tick.
    pub fn tick(&mut self) -> StepResult {
        let input = StepInput {
            jump_requested: std::mem::take(&mut self.jump_pending),
        };
        let result = step(&mut self.state, input, &self.config, &mut self.rng);
        if result.outcome.is_terminal() && !result.rejected {
            info!(
                outcome = ?result.outcome,
                score = self.state.score,
                ticks = self.state.tick_count,
                run = self.runs,
                "run finished"
            );
        }
        result
    }

    /// Throw the current run away and start over from the initial state.
    pub fn restart(&mut self) {
        self.state = GameState::new(&self.config);
        self.rng = make_rng(self.seed);
        self.jump_pending = false;
        self.runs += 1;
        info!(run = self.runs, "restarted");
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.state, &self.config)
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Fixed-timestep accumulator turning wall-clock time into whole ticks.
#[derive(Debug, Clone)]
pub struct TickClock {
    interval: Duration,
    accumulated: Duration,
}

impl TickClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            accumulated: Duration::ZERO,
        }
    }

    pub fn for_config(config: &GameConfig) -> Self {
        Self::new(config.tick_interval())
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// At most `MAX_CATCH_UP_TICKS` are returned at once; any backlog beyond
    /// that is dropped so a stalled terminal does not fast-forward the run.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        if self.interval.is_zero() {
            return 0;
        }
        self.accumulated += elapsed;
        let mut due = 0;
        while self.accumulated >= self.interval && due < MAX_CATCH_UP_TICKS {
            self.accumulated -= self.interval;
            due += 1;
        }
        if due == MAX_CATCH_UP_TICKS {
            self.accumulated = self.accumulated.min(self.interval);
        }
        due
    }

    /// Time until the next tick is due.
    pub fn until_next(&self) -> Duration {
        self.interval.saturating_sub(self.accumulated)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}
