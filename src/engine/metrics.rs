//! Scan run metrics.
//!
//! Metrics are intentionally simple and *opt-in*: the plain `Scanner::run`
//! path collects nothing, while `run_with_metrics` records per-block timings
//! and discovery counts for the verbose API and the CLI trace.

use std::time::Duration;

use crate::number::Number;

#[derive(Debug, Default, Clone)]
pub(crate) struct RunMetrics {
    /// Total elapsed time for the whole scan.
    pub total: Duration,
    /// Per-block metrics, in scan order.
    pub blocks: Vec<BlockMetrics>,
}

/// Timing and discovery counts for a single block.
#[derive(Debug, Default, Clone)]
pub(crate) struct BlockMetrics {
    /// Elapsed time scanning the block.
    pub duration: Duration,
    /// Number of numeral candidates the tokenizer produced.
    pub candidates: usize,
    /// Largest scaled value found in this block, if any.
    pub best: Option<Number>,
}

/// Bundle of a finished run: the overall maximum plus stage timings.
#[derive(Debug, Clone)]
pub(crate) struct RunResult {
    pub max: Option<Number>,
    pub metrics: RunMetrics,
}
