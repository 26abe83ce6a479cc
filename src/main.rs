use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy_bird::build_info;
use flappy_bird::core::constants::INPUT_POLL_MS;
use flappy_bird::core::logging::init_file_logging;
use flappy_bird::input::{map_key, GameCommand};
use flappy_bird::ui::draw_ui;
use flappy_bird::{GameConfig, Session, TickClock};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info};

struct CliArgs {
    seed: Option<u64>,
    config_path: Option<PathBuf>,
}

fn print_help() {
    println!("Flappy Bird - terminal edition\n");
    println!("Usage: flappy_bird [options]\n");
    println!("Options:");
    println!("  --seed N         Seed obstacle generation (every run replays the same pipes)");
    println!("  --config PATH    Load tuning from a JSON file");
    println!("  --version        Show version information");
    println!("  --help           Show this help message\n");
    println!("Controls: Space/Up jump, R restart, Q/Esc exit");
}

fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    eprintln!("Run 'flappy_bird --help' for usage.");
    std::process::exit(1);
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut cli = CliArgs {
        seed: None,
        config_path: None,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--version" | "-v" => {
                println!("{}", build_info::version_line());
                std::process::exit(0);
            }
            "--seed" => {
                i += 1;
                let value = args.get(i).unwrap_or_else(|| fail("--seed needs a value"));
                let seed = value
                    .parse()
                    .unwrap_or_else(|_| fail(&format!("Invalid seed: {}", value)));
                cli.seed = Some(seed);
            }
            "--config" => {
                i += 1;
                let value = args
                    .get(i)
                    .unwrap_or_else(|| fail("--config needs a path"));
                cli.config_path = Some(PathBuf::from(value));
            }
            other => fail(&format!("Unknown argument: {}", other)),
        }
        i += 1;
    }
    cli
}

fn main() -> io::Result<()> {
    let cli = parse_args();

    let config = match &cli.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let log_path = init_file_logging();
    info!(version = %build_info::version_line(), ?log_path, "starting");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let mut session = Session::new(config, cli.seed);
    let result = run(&mut terminal, &mut session);

    // Restore the terminal whatever happened in the loop
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        error!(error = %e, "game loop failed");
    }
    info!(runs = session.runs(), "exiting");
    result
}

/// Driver loop: gather input, advance the fixed-rate clock, step, draw.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    session: &mut Session,
) -> io::Result<()> {
    let mut clock = TickClock::for_config(session.config());
    let mut last_frame = Instant::now();

    loop {
        let snapshot = session.snapshot();
        terminal.draw(|frame| draw_ui(frame, &snapshot, session.seed()))?;

        let timeout = clock
            .until_next()
            .max(Duration::from_millis(INPUT_POLL_MS));
        if event::poll(timeout)? {
            // Drain everything queued so several presses collapse into one jump
            loop {
                if let Event::Key(key) = event::read()? {
                    match map_key(key) {
                        GameCommand::Jump => session.request_jump(),
                        GameCommand::Restart => {
                            session.restart();
                            clock.reset();
                        }
                        GameCommand::Quit => session.request_quit(),
                        GameCommand::Other => {}
                    }
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if session.quit_requested() {
            return Ok(());
        }

        let now = Instant::now();
        let due = clock.advance(now.duration_since(last_frame));
        last_frame = now;
        for _ in 0..due {
            session.tick();
        }
    }
}
