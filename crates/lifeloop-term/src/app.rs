//! The interactive run loop.
//!
//! Each iteration waits up to the configured delay for a key (pacing
//! and cancellation in one call), ticks the simulation, and redraws.
//! Loop handling depends on [`OnLoop`]; a loop that has already been
//! announced is not announced again while it persists.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use crossterm::queue;
use crossterm::terminal::{BeginSynchronizedUpdate, EndSynchronizedUpdate};
use lifeloop_core::Generation;
use lifeloop_engine::{LoopInfo, Simulation};
use tracing::debug;

use crate::cli::{OnLoop, TermConfig};
use crate::input::{Key, KeySource};
use crate::render;

// ── LoopWatch ───────────────────────────────────────────────────

/// How this tick's detection result relates to the previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopEvent {
    /// No loop, and none last tick either.
    Quiet,
    /// A loop with a period not seen on the previous tick.
    Started(LoopInfo),
    /// The same period as the previous tick.
    Continuing(LoopInfo),
    /// A loop was reported last tick but not this one.
    Ended,
}

/// Tracks the active loop across ticks.
///
/// The detector reports a start generation relative to the tail of the
/// history window, so it moves every tick even for a steady
/// oscillator. Continuity is therefore judged by period alone.
#[derive(Clone, Debug, Default)]
pub struct LoopWatch {
    active_period: Option<usize>,
}

impl LoopWatch {
    /// Classify the detection result of the latest tick.
    pub fn observe(&mut self, detected: Option<LoopInfo>) -> LoopEvent {
        let previous = self.active_period;
        self.active_period = detected.map(|info| info.period_length);
        match (previous, detected) {
            (None, None) => LoopEvent::Quiet,
            (Some(_), None) => LoopEvent::Ended,
            (Some(period), Some(info)) if period == info.period_length => {
                LoopEvent::Continuing(info)
            }
            (_, Some(info)) => LoopEvent::Started(info),
        }
    }
}

// ── RunOptions / RunSummary ─────────────────────────────────────

/// Settings for [`run`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    /// Delay between generations; also the key-poll timeout.
    pub delay: Duration,
    /// Reaction to detected loops.
    pub on_loop: OnLoop,
    /// Stop after this many generations.
    pub max_generations: Option<u64>,
}

impl From<&TermConfig> for RunOptions {
    fn from(config: &TermConfig) -> Self {
        Self {
            delay: config.delay,
            on_loop: config.on_loop,
            max_generations: config.max_generations,
        }
    }
}

/// Why a run ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExitReason {
    /// The user pressed a quit key.
    UserQuit,
    /// A loop was detected in [`OnLoop::Stop`] mode.
    LoopDetected,
    /// The generation limit was reached.
    GenerationLimit,
}

/// Outcome of a finished run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Generation the simulation was at when the run ended.
    pub generation: Generation,
    /// Why the run ended.
    pub exit: ExitReason,
    /// The most recently reported loop, if any.
    pub last_loop: Option<LoopInfo>,
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self.exit {
            ExitReason::UserQuit => "stopped by user",
            ExitReason::LoopDetected => "stopped on loop",
            ExitReason::GenerationLimit => "generation limit reached",
        };
        write!(f, "Generation {}: {reason}.", self.generation)?;
        if let Some(info) = &self.last_loop {
            write!(f, " {info}")?;
        }
        Ok(())
    }
}

// ── run ─────────────────────────────────────────────────────────

/// Drive `sim` until the user quits, a loop stops the run, or the
/// generation limit is hit.
///
/// Draws into `out` and reads keys from `keys`. The simulation is
/// expected to be seeded already; its current grid is drawn first.
pub fn run<W: Write, K: KeySource>(
    sim: &mut Simulation,
    options: RunOptions,
    out: &mut W,
    keys: &mut K,
) -> io::Result<RunSummary> {
    let rows = sim.rows();
    let mut watch = LoopWatch::default();
    let mut last_loop = None;

    render::draw_frame(out, sim.grid(), sim.generation())?;
    out.flush()?;

    let exit = loop {
        if options
            .max_generations
            .is_some_and(|max| sim.generation().0 >= max)
        {
            break ExitReason::GenerationLimit;
        }
        if keys.poll_key(options.delay)? == Some(Key::Quit) {
            break ExitReason::UserQuit;
        }

        let outcome = sim.tick();
        let event = watch.observe(outcome.loop_info);

        queue!(out, BeginSynchronizedUpdate)?;
        render::draw_frame(out, sim.grid(), outcome.generation)?;
        match event {
            LoopEvent::Quiet => {}
            LoopEvent::Ended => render::clear_loop_panel(out, rows)?,
            LoopEvent::Started(info) | LoopEvent::Continuing(info) => {
                last_loop = Some(info);
                render::draw_loop_panel(out, rows, &info, outcome.generation)?;
            }
        }
        queue!(out, EndSynchronizedUpdate)?;
        out.flush()?;

        let LoopEvent::Started(info) = event else {
            continue;
        };
        debug!(
            generation = %outcome.generation,
            period = info.period_length,
            on_loop = ?options.on_loop,
            "announcing loop"
        );
        match options.on_loop {
            OnLoop::Ignore => {}
            OnLoop::Stop => break ExitReason::LoopDetected,
            OnLoop::Prompt => {
                render::draw_prompt(out, rows)?;
                out.flush()?;
                if keys.wait_key()? == Key::Quit {
                    break ExitReason::UserQuit;
                }
                render::clear_prompt(out, rows)?;
                out.flush()?;
            }
        }
    };

    let summary = RunSummary {
        generation: sim.generation(),
        exit,
        last_loop,
    };
    debug!(%summary, "run finished");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(period: usize, start: u64) -> LoopInfo {
        LoopInfo {
            period_length: period,
            loop_start_generation: Generation(start),
        }
    }

    #[test]
    fn quiet_until_a_loop_appears() {
        let mut watch = LoopWatch::default();
        assert_eq!(watch.observe(None), LoopEvent::Quiet);
        assert_eq!(watch.observe(None), LoopEvent::Quiet);
        assert_eq!(
            watch.observe(Some(info(2, 0))),
            LoopEvent::Started(info(2, 0))
        );
    }

    #[test]
    fn sliding_start_is_the_same_loop() {
        let mut watch = LoopWatch::default();
        watch.observe(Some(info(2, 10)));
        assert_eq!(
            watch.observe(Some(info(2, 11))),
            LoopEvent::Continuing(info(2, 11))
        );
        assert_eq!(
            watch.observe(Some(info(2, 12))),
            LoopEvent::Continuing(info(2, 12))
        );
    }

    #[test]
    fn period_change_starts_a_new_loop() {
        let mut watch = LoopWatch::default();
        watch.observe(Some(info(2, 0)));
        assert_eq!(
            watch.observe(Some(info(1, 5))),
            LoopEvent::Started(info(1, 5))
        );
    }

    #[test]
    fn lapse_ends_and_rearms() {
        let mut watch = LoopWatch::default();
        watch.observe(Some(info(3, 0)));
        assert_eq!(watch.observe(None), LoopEvent::Ended);
        assert_eq!(watch.observe(None), LoopEvent::Quiet);
        assert_eq!(
            watch.observe(Some(info(3, 9))),
            LoopEvent::Started(info(3, 9))
        );
    }

    #[test]
    fn summary_display() {
        let summary = RunSummary {
            generation: Generation(12),
            exit: ExitReason::LoopDetected,
            last_loop: Some(info(1, 10)),
        };
        assert_eq!(
            summary.to_string(),
            "Generation 12: stopped on loop. Pattern has reached a stable state \
             (still life). Loop started at generation 10."
        );
        let summary = RunSummary {
            generation: Generation(3),
            exit: ExitReason::UserQuit,
            last_loop: None,
        };
        assert_eq!(summary.to_string(), "Generation 3: stopped by user.");
    }

    #[test]
    fn options_from_config() {
        let config = TermConfig {
            delay: Duration::from_millis(5),
            on_loop: OnLoop::Ignore,
            max_generations: Some(9),
            ..TermConfig::default()
        };
        assert_eq!(
            RunOptions::from(&config),
            RunOptions {
                delay: Duration::from_millis(5),
                on_loop: OnLoop::Ignore,
                max_generations: Some(9),
            }
        );
    }
}
