//! Engine run metrics.
//!
//! The intended usage is:
//!
//! - `Parser::run` for normal operation.
//! - `Parser::run_with_metrics` for profiling and for the CLI debug report.
//!
//! Timing is kept here and never on `ParsedNotificationRules`, so parse output
//! stays identical between runs.

use crate::{NotificationRule, Stage};
use std::time::Duration;

#[derive(Debug, Default, Clone)]
pub struct RunMetrics {
    /// Total elapsed time for [`Parser::run_with_metrics`].
    pub total: Duration,
    /// One entry per stage that was reached, in evaluation order.
    pub stages: Vec<StageMetrics>,
    /// Time spent on Schengen and operating-hours annotation.
    pub annotate: Duration,
}

/// Timing and counts for a single stage.
#[derive(Debug, Clone)]
pub struct StageMetrics {
    pub stage: Stage,
    pub duration: Duration,
    /// Rules that survived bucket gating and were evaluated.
    pub rules_considered: usize,
    /// Regex matches seen across those rules.
    pub matches: usize,
    /// Rules emitted by the stage (after dedup).
    pub produced: usize,
}

impl StageMetrics {
    pub(crate) fn new(stage: Stage) -> Self {
        StageMetrics { stage, duration: Duration::ZERO, rules_considered: 0, matches: 0, produced: 0 }
    }
}

/// Parser output bundled with timing information.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub rules: Vec<NotificationRule>,
    /// Name of the short-circuit rule that fired, if any.
    pub short_circuit: Option<&'static str>,
    pub metrics: RunMetrics,
}
