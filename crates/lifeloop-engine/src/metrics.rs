//! Per-tick timing and population metrics.

/// Metrics collected during a single [`tick()`](crate::Simulation::tick).
///
/// All durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the entire tick.
    pub total_us: u64,
    /// Time spent in the generation stepper.
    pub step_us: u64,
    /// Time spent building and recording the state token.
    pub record_us: u64,
    /// Time spent in loop detection.
    pub detect_us: u64,
    /// Live cells after the tick.
    pub population: usize,
    /// Retained history entries after the tick.
    pub history_len: usize,
}
