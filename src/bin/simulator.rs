//! Flappy Bird headless simulator
//!
//! Plays many games with a scripted autopilot and prints a summary. Uses the
//! same session and `step` as the terminal game.
//!
//! Usage:
//!   cargo run --bin simulator -- [OPTIONS]
//!
//! Options:
//!   --runs N        Number of runs with incrementing seeds (default: 100)
//!   --seed N        Seed of the first run (default: 42)
//!   --random        Unseeded runs
//!   --max-ticks N   Ticks before a run counts as timed out (default: 10000)
//!   --config PATH   JSON tuning file
//!   --json          Print each run's final snapshot as a JSON line
//!   --verbose       One line per run
//!   --quiet         Only the final summary line

use flappy_bird::core::logging::init_stderr_logging;
use flappy_bird::simulator::{run_simulation, SimConfig};
use flappy_bird::GameConfig;
use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;

struct CliConfig {
    sim: SimConfig,
    config_path: Option<PathBuf>,
    json: bool,
    quiet: bool,
}

fn print_usage() {
    eprintln!(
        "Flappy Bird Headless Simulator\n\
         \n\
         Usage: simulator [OPTIONS]\n\
         \n\
         Options:\n\
         \x20 --runs N        Number of runs (default: 100)\n\
         \x20 --seed N        Seed of the first run (default: 42)\n\
         \x20 --random        Unseeded runs\n\
         \x20 --max-ticks N   Tick limit per run (default: 10000)\n\
         \x20 --config PATH   JSON tuning file\n\
         \x20 --json          Final snapshot of each run as JSON lines\n\
         \x20 --verbose       One line per run\n\
         \x20 --quiet         Only the final summary line"
    );
}

fn usage_error(message: &str) -> ! {
    eprintln!("{message}");
    print_usage();
    std::process::exit(1);
}

fn value<T: FromStr>(args: &[String], i: usize, flag: &str) -> T {
    args.get(i)
        .and_then(|v| v.parse().ok())
        .unwrap_or_else(|| usage_error(&format!("{flag} requires a value")))
}

fn parse_args() -> CliConfig {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliConfig {
        sim: SimConfig::default(),
        config_path: None,
        json: false,
        quiet: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--runs" => {
                i += 1;
                cli.sim.num_runs = value(&args, i, "--runs");
            }
            "--seed" => {
                i += 1;
                cli.sim.seed = Some(value(&args, i, "--seed"));
            }
            "--random" => cli.sim.seed = None,
            "--max-ticks" => {
                i += 1;
                cli.sim.max_ticks_per_run = value(&args, i, "--max-ticks");
            }
            "--config" => {
                i += 1;
                cli.config_path = Some(value(&args, i, "--config"));
            }
            "--json" => cli.json = true,
            "--verbose" => cli.sim.verbose = true,
            "--quiet" => cli.quiet = true,
            "--help" | "-h" => {
                print_usage();
                std::process::exit(0);
            }
            other => usage_error(&format!("Unknown argument: {other}")),
        }
        i += 1;
    }
    cli
}

fn main() -> io::Result<()> {
    let mut cli = parse_args();
    init_stderr_logging(if cli.sim.verbose { "debug" } else { "warn" });

    if let Some(path) = &cli.config_path {
        cli.sim.game = GameConfig::load(path)?;
    }

    let report = run_simulation(&cli.sim);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if cli.json {
        for run in &report.runs {
            let line = serde_json::to_string(&run.final_snapshot)
                .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
            writeln!(out, "{line}")?;
        }
    }

    if cli.quiet {
        writeln!(
            out,
            "runs={} wins={} avg_score={:.2} best={}",
            report.num_runs, report.wins, report.avg_score, report.best_score
        )?;
    } else {
        writeln!(out, "{report}")?;
    }
    Ok(())
}
