use std::fs::File;
use std::io;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use lifeloop_engine::Simulation;
use lifeloop_seed::PatternLibrary;
use lifeloop_term::app::{self, RunOptions};
use lifeloop_term::cli::{self, Command, TermConfig};
use lifeloop_term::input::TerminalKeys;
use lifeloop_term::terminal::TerminalGuard;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive.
const LOG_ENV: &str = "LIFELOOP_LOG";

fn main() -> ExitCode {
    let command = match cli::parse_args(std::env::args().skip(1)) {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::USAGE);
            return ExitCode::from(2);
        }
    };

    let result = match command {
        Command::Help => {
            println!("{}", cli::USAGE);
            Ok(())
        }
        Command::ListPatterns => {
            for name in PatternLibrary::builtin().names() {
                println!("{name}");
            }
            Ok(())
        }
        Command::Run(config) => run(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: TermConfig) -> Result<()> {
    if let Some(path) = &config.log_file {
        init_logging(path)?;
    }

    let mut seeder = config.seeder().context("failed to build seeder")?;
    let mut sim = Simulation::seeded(config.sim.clone(), &mut *seeder)
        .context("failed to create simulation")?;
    info!(
        rows = sim.rows(),
        cols = sim.cols(),
        seeder = seeder.name(),
        "starting run"
    );

    let summary = {
        let mut guard = TerminalGuard::enter(io::stdout()).context("failed to set up terminal")?;
        app::run(
            &mut sim,
            RunOptions::from(&config),
            guard.out(),
            &mut TerminalKeys,
        )
        .context("terminal I/O failed")?
    };

    println!("{summary}");
    Ok(())
}

/// Send `tracing` output to `path`, filtered by `LIFELOOP_LOG`
/// (default `debug`).
///
/// Logging never goes to the terminal: it would tear the display.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))
        .context("failed to install log subscriber")
}
