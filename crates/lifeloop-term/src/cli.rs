//! Command-line parsing and front-end configuration.

use std::error::Error;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use lifeloop_core::Seeder;
use lifeloop_engine::{ConfigError, SimConfig};
use lifeloop_seed::{
    Composite, PatternLibrary, PatternSeeder, RandomSeeder, SeedError, DEFAULT_DENSITY,
};
use tracing::debug;

/// Delay between generations when `--delay-ms` is not given.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(25);

/// Usage text printed by `--help` and after argument errors.
pub const USAGE: &str = "\
Usage: lifeloop [OPTIONS]

Runs Conway's Game of Life in the terminal and reports when the pattern
settles into a still life or a repeating cycle.

Options:
  --rows N                 grid height (default 55)
  --cols N                 grid width (default 140)
  --density P              live-cell probability for random fill (default 0.5)
  --seed S                 RNG seed for random fill (default: random)
  --delay-ms D             delay between generations in ms (default 25)
  --pattern NAME[@ROW,COL] stamp a named pattern instead of random fill;
                           repeatable, centred when no position is given
  --on-loop prompt|stop|ignore
                           what to do when a loop is detected (default prompt)
  --max-generations N      exit after N generations
  --log-file PATH          write debug logs to PATH (filter with LIFELOOP_LOG)
  --list-patterns          print the built-in pattern names and exit
  -h, --help               print this help and exit

Keys: ESC or q quits.";

// ── OnLoop ──────────────────────────────────────────────────────

/// Front-end reaction to a detected loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OnLoop {
    /// Show the loop panel and wait for a key: ESC exits, anything else
    /// continues.
    #[default]
    Prompt,
    /// Show the loop panel and end the run.
    Stop,
    /// Show the loop panel and keep running.
    Ignore,
}

impl FromStr for OnLoop {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prompt" => Ok(Self::Prompt),
            "stop" => Ok(Self::Stop),
            "ignore" => Ok(Self::Ignore),
            _ => Err("expected prompt, stop or ignore".into()),
        }
    }
}

// ── PatternPlacement ────────────────────────────────────────────

/// A `--pattern` argument: a pattern name and an optional top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternPlacement {
    /// Pattern name, matched case-insensitively.
    pub name: String,
    /// Top-left corner; `None` centres the pattern.
    pub origin: Option<(i32, i32)>,
}

impl FromStr for PatternPlacement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, origin) = match s.rsplit_once('@') {
            Some((name, pos)) => {
                let (row, col) = pos
                    .split_once(',')
                    .ok_or_else(|| format!("position '{pos}' is not ROW,COL"))?;
                let row = row
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("row '{row}': {e}"))?;
                let col = col
                    .trim()
                    .parse::<i32>()
                    .map_err(|e| format!("column '{col}': {e}"))?;
                (name, Some((row, col)))
            }
            None => (s, None),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err("pattern name is empty".into());
        }
        Ok(Self {
            name: name.to_owned(),
            origin,
        })
    }
}

// ── CliError ────────────────────────────────────────────────────

/// Errors from argument parsing and configuration validation.
#[derive(Debug)]
pub enum CliError {
    /// An argument that is not a known flag.
    UnknownArgument(String),
    /// A flag given without its value.
    MissingValue {
        /// The flag.
        flag: &'static str,
    },
    /// A flag value that could not be parsed.
    InvalidValue {
        /// The flag.
        flag: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
    /// The simulation configuration is invalid.
    Config(ConfigError),
    /// The seeding configuration is invalid.
    Seed(SeedError),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownArgument(arg) => write!(f, "unknown argument '{arg}'"),
            Self::MissingValue { flag } => write!(f, "{flag} needs a value"),
            Self::InvalidValue {
                flag,
                value,
                reason,
            } => write!(f, "invalid value '{value}' for {flag}: {reason}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Seed(e) => write!(f, "invalid seeding: {e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Seed(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<SeedError> for CliError {
    fn from(e: SeedError) -> Self {
        Self::Seed(e)
    }
}

// ── TermConfig ──────────────────────────────────────────────────

/// Everything the binary needs to start a run.
#[derive(Clone, Debug, PartialEq)]
pub struct TermConfig {
    /// Grid size and history capacity.
    pub sim: SimConfig,
    /// Live-cell probability for random fill.
    pub density: f64,
    /// RNG seed for random fill; drawn at startup when `None`.
    pub seed: Option<u64>,
    /// Delay between generations.
    pub delay: Duration,
    /// Patterns to stamp. Empty means random fill.
    pub patterns: Vec<PatternPlacement>,
    /// Reaction to detected loops.
    pub on_loop: OnLoop,
    /// Stop after this many generations.
    pub max_generations: Option<u64>,
    /// Destination for debug logs.
    pub log_file: Option<PathBuf>,
}

impl Default for TermConfig {
    fn default() -> Self {
        Self {
            sim: SimConfig::default(),
            density: DEFAULT_DENSITY,
            seed: None,
            delay: DEFAULT_DELAY,
            patterns: Vec::new(),
            on_loop: OnLoop::default(),
            max_generations: None,
            log_file: None,
        }
    }
}

impl TermConfig {
    /// Check the simulation config, the density, and every pattern name.
    pub fn validate(&self) -> Result<(), CliError> {
        self.sim.validate()?;
        RandomSeeder::new(self.density, 0)?;
        let library = PatternLibrary::builtin();
        for placement in &self.patterns {
            library.lookup(&placement.name)?;
        }
        Ok(())
    }

    /// Build the seeder this configuration asks for.
    ///
    /// Named patterns win over random fill.
    pub fn seeder(&self) -> Result<Box<dyn Seeder + Send>, SeedError> {
        if self.patterns.is_empty() {
            let seeder = match self.seed {
                Some(seed) => RandomSeeder::new(self.density, seed)?,
                None => {
                    let seeder = RandomSeeder::from_entropy(self.density)?;
                    debug!(seed = seeder.rng_seed(), "drew random seed");
                    seeder
                }
            };
            return Ok(Box::new(seeder));
        }

        let library = PatternLibrary::builtin();
        let mut composite = Composite::new();
        for placement in &self.patterns {
            let pattern = library.lookup(&placement.name)?.clone();
            composite.push(match placement.origin {
                Some((row, col)) => PatternSeeder::at(pattern, row, col),
                None => PatternSeeder::centered(pattern),
            });
        }
        Ok(Box::new(composite))
    }
}

// ── Parsing ─────────────────────────────────────────────────────

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Run the simulation.
    Run(TermConfig),
    /// Print usage.
    Help,
    /// Print the built-in pattern names.
    ListPatterns,
}

/// Parse arguments, excluding the program name.
///
/// The resulting configuration is validated before it is returned.
pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut config = TermConfig::default();
    let mut args = args.into_iter().map(Into::into);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "--list-patterns" => return Ok(Command::ListPatterns),
            "--rows" => config.sim.rows = value(&mut args, "--rows")?,
            "--cols" => config.sim.cols = value(&mut args, "--cols")?,
            "--density" => config.density = value(&mut args, "--density")?,
            "--seed" => config.seed = Some(value(&mut args, "--seed")?),
            "--delay-ms" => {
                config.delay = Duration::from_millis(value(&mut args, "--delay-ms")?)
            }
            "--pattern" => config.patterns.push(value(&mut args, "--pattern")?),
            "--on-loop" => config.on_loop = value(&mut args, "--on-loop")?,
            "--max-generations" => {
                config.max_generations = Some(value(&mut args, "--max-generations")?)
            }
            "--log-file" => {
                config.log_file = Some(PathBuf::from(raw(&mut args, "--log-file")?))
            }
            _ => return Err(CliError::UnknownArgument(arg)),
        }
    }

    config.validate()?;
    Ok(Command::Run(config))
}

fn raw(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<String, CliError> {
    args.next().ok_or(CliError::MissingValue { flag })
}

fn value<T>(args: &mut impl Iterator<Item = String>, flag: &'static str) -> Result<T, CliError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let value = raw(args, flag)?;
    value.parse().map_err(|e: T::Err| CliError::InvalidValue {
        flag,
        reason: e.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use lifeloop_core::GridError;
    use proptest::prelude::*;

    fn run(args: &[&str]) -> TermConfig {
        match parse_args(args.iter().copied()) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected a run config, got {other:?}"),
        }
    }

    #[test]
    fn no_arguments_gives_defaults() {
        let config = run(&[]);
        assert_eq!(config, TermConfig::default());
        assert_eq!(config.sim.rows, 55);
        assert_eq!(config.sim.cols, 140);
        assert_eq!(config.delay, Duration::from_millis(25));
        assert_eq!(config.on_loop, OnLoop::Prompt);
    }

    #[test]
    fn all_flags_parse() {
        let config = run(&[
            "--rows",
            "20",
            "--cols",
            "30",
            "--density",
            "0.25",
            "--seed",
            "99",
            "--delay-ms",
            "0",
            "--on-loop",
            "STOP",
            "--max-generations",
            "500",
            "--log-file",
            "/tmp/lifeloop.log",
        ]);
        assert_eq!((config.sim.rows, config.sim.cols), (20, 30));
        assert_eq!(config.density, 0.25);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.on_loop, OnLoop::Stop);
        assert_eq!(config.max_generations, Some(500));
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/lifeloop.log")));
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(
            parse_args(["--rows", "0", "--help"]).unwrap(),
            Command::Help
        );
        assert_eq!(parse_args(["-h"]).unwrap(), Command::Help);
        assert_eq!(
            parse_args(["--list-patterns"]).unwrap(),
            Command::ListPatterns
        );
    }

    #[test]
    fn patterns_accumulate() {
        let config = run(&["--pattern", "glider@1,2", "--pattern", "Pulsar"]);
        assert_eq!(
            config.patterns,
            [
                PatternPlacement {
                    name: "glider".into(),
                    origin: Some((1, 2)),
                },
                PatternPlacement {
                    name: "Pulsar".into(),
                    origin: None,
                },
            ]
        );
    }

    #[test]
    fn placement_accepts_names_with_spaces_and_negative_origins() {
        let p: PatternPlacement = "Gosper Glider Gun@-3, 4".parse().unwrap();
        assert_eq!(p.name, "Gosper Glider Gun");
        assert_eq!(p.origin, Some((-3, 4)));
    }

    #[test]
    fn placement_rejects_malformed_positions() {
        assert!("glider@3".parse::<PatternPlacement>().is_err());
        assert!("glider@a,1".parse::<PatternPlacement>().is_err());
        assert!("@1,1".parse::<PatternPlacement>().is_err());
    }

    #[test]
    fn unknown_argument_is_reported() {
        let err = parse_args(["--speed", "3"]).unwrap_err();
        assert!(matches!(err, CliError::UnknownArgument(ref a) if a == "--speed"));
    }

    #[test]
    fn missing_value_is_reported() {
        let err = parse_args(["--rows"]).unwrap_err();
        assert_eq!(err.to_string(), "--rows needs a value");
    }

    #[test]
    fn unparsable_value_is_reported() {
        let err = parse_args(["--cols", "wide"]).unwrap_err();
        assert!(matches!(err, CliError::InvalidValue { flag: "--cols", .. }));
        let err = parse_args(["--on-loop", "panic"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value 'panic' for --on-loop: expected prompt, stop or ignore"
        );
    }

    #[test]
    fn validation_runs_after_parsing() {
        assert!(matches!(
            parse_args(["--rows", "0"]).unwrap_err(),
            CliError::Config(_)
        ));
        assert!(matches!(
            parse_args(["--rows", "2147483647", "--cols", "2147483647"]).unwrap_err(),
            CliError::Config(ConfigError::Grid(GridError::TooManyCells { .. }))
        ));
        assert!(matches!(
            parse_args(["--density", "1.5"]).unwrap_err(),
            CliError::Seed(SeedError::InvalidDensity { .. })
        ));
        let err = parse_args(["--pattern", "spaceship"]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Seed(SeedError::UnknownPattern { .. })
        ));
        assert!(err.source().is_some());
    }

    #[test]
    fn random_seeder_when_no_patterns() {
        let config = TermConfig {
            seed: Some(5),
            ..TermConfig::default()
        };
        assert_eq!(config.seeder().unwrap().name(), "random");
    }

    #[test]
    fn composite_seeder_when_patterns_given() {
        let config = run(&["--pattern", "block@0,0", "--pattern", "blinker@5,5"]);
        assert_eq!(config.seeder().unwrap().name(), "composite");
    }

    proptest! {
        #[test]
        fn any_dimensions_in_range_parse(rows in 1usize..500, cols in 1usize..500) {
            let config = run(&["--rows", &rows.to_string(), "--cols", &cols.to_string()]);
            prop_assert_eq!(config.sim.rows, rows);
            prop_assert_eq!(config.sim.cols, cols);
        }
    }
}
