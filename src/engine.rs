//! Scanning engine.
//!
//! This module is the operational core: it drives one invocation of the
//! scan, block by block, through a fixed pipeline:
//!
//! ```text
//! block text ── NumeralTokenizer ──> (Number, end)      (tokenizer.rs)
//!                                         │
//!                                         v
//!                              context_window            (context.rs)
//!                                         │ (before, after)
//!                                         v
//!                              scale_for_context          (scaler.rs)
//!                                         │ ScaleFactor
//!                                         v
//!                               MaxAggregator ──> Option<Number>
//! ```
//!
//! Tokenizer state is local to one block; the aggregator's running maximum
//! persists across blocks and is the only state shared between them. The
//! whole pipeline is single-threaded and makes one left-to-right pass per
//! block.
//!
//! ## Debugging
//!
//! Setting `MAGNITUDE_DEBUG_SCAN=1` prints a trace line for every candidate
//! the tokenizer produces, including its context-derived scale factor.

mod context;
mod metrics;
mod scaler;
mod tokenizer;

pub(crate) use metrics::{BlockMetrics, RunMetrics, RunResult};

use std::time::Instant;

use crate::api::Options;
use crate::number::Number;
use context::context_window;
use scaler::scale_for_context;
use tokenizer::NumeralTokenizer;

/// Folds scaled numerals into a running maximum across blocks.
///
/// Absent means "no numeral seen yet"; once set, the value never decreases.
#[derive(Debug, Default)]
struct MaxAggregator {
    max: Option<Number>,
}

impl MaxAggregator {
    /// Keep the strictly larger of the current maximum and `value`. Ties
    /// keep the earlier occurrence.
    fn offer(&mut self, value: Number) {
        if self.max.map_or(true, |current| value.value() > current.value()) {
            self.max = Some(value);
        }
    }

    fn result(&self) -> Option<Number> {
        self.max
    }
}

/// Drives one invocation: fresh tokenizer per block, shared running maximum.
///
/// Usage: create with `Scanner::new(&options)` then call `run(blocks)` or
/// `run_with_metrics(blocks)`.
pub(crate) struct Scanner {
    window: usize,
    aggregator: MaxAggregator,
}

impl Scanner {
    pub fn new(options: &Options) -> Self {
        Scanner { window: options.window_size, aggregator: MaxAggregator::default() }
    }

    /// Scan one block: tokenize, scale each candidate from its surrounding
    /// context, and fold it into the running maximum. Returns the candidate
    /// count and the best scaled value within this block.
    fn scan_block(&mut self, index: usize, text: &str) -> (usize, Option<Number>) {
        let debug = std::env::var_os("MAGNITUDE_DEBUG_SCAN").is_some();
        let mut candidates = 0;
        let mut block_best: Option<Number> = None;

        for (number, end) in NumeralTokenizer::new(text) {
            let (before, after) = context_window(text, end, self.window);
            let factor = scale_for_context(&before, &after);
            let scaled = number.scaled_by(factor.multiplier());

            if debug {
                eprintln!("[scan:token] block={index} end={end} raw={number:?} factor={factor:?} scaled={scaled:?}");
            }

            candidates += 1;
            if block_best.map_or(true, |best| scaled.value() > best.value()) {
                block_best = Some(scaled);
            }
            self.aggregator.offer(scaled);
        }

        (candidates, block_best)
    }

    /// Scan every block in order and return the overall maximum.
    pub fn run<I, S>(mut self, blocks: I) -> Option<Number>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, block) in blocks.into_iter().enumerate() {
            self.scan_block(index, block.as_ref());
        }
        self.aggregator.result()
    }

    /// Like [`Scanner::run`] but records per-block timings and candidate
    /// counts for the verbose API and CLI traces. [`Scanner::run`] skips
    /// metric collection entirely.
    pub fn run_with_metrics<I, S>(mut self, blocks: I) -> RunResult
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let total_start = Instant::now();
        let mut metrics = RunMetrics::default();

        for (index, block) in blocks.into_iter().enumerate() {
            let block_start = Instant::now();
            let (candidates, best) = self.scan_block(index, block.as_ref());
            metrics.blocks.push(BlockMetrics { duration: block_start.elapsed(), candidates, best });
        }

        metrics.total = total_start.elapsed();
        RunResult { max: self.aggregator.result(), metrics }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregator_is_monotonic() {
        let mut agg = MaxAggregator::default();
        assert_eq!(agg.result(), None);

        agg.offer(Number::Int(5));
        assert_eq!(agg.result(), Some(Number::Int(5)));

        // Smaller and equal offers leave the maximum alone.
        agg.offer(Number::Int(3));
        agg.offer(Number::Float(5.0));
        assert_eq!(agg.result(), Some(Number::Int(5)));

        agg.offer(Number::Float(5.5));
        assert_eq!(agg.result(), Some(Number::Float(5.5)));
    }

    #[test]
    fn maximum_persists_across_blocks() {
        let mut scanner = Scanner::new(&Options::default());
        scanner.scan_block(0, "we sold 9000 units");
        scanner.scan_block(1, "and 12 more");
        assert_eq!(scanner.aggregator.result(), Some(Number::Int(9000)));
    }

    #[test]
    fn block_metrics_count_candidates() {
        let scanner = Scanner::new(&Options::default());
        let run = scanner.run_with_metrics(["1 and 2", "none", "3"]);

        assert_eq!(run.max, Some(Number::Int(3)));
        assert_eq!(run.metrics.blocks.len(), 3);
        assert_eq!(run.metrics.blocks[0].candidates, 2);
        assert_eq!(run.metrics.blocks[1].candidates, 0);
        assert_eq!(run.metrics.blocks[1].best, None);
        assert_eq!(run.metrics.blocks[2].best, Some(Number::Int(3)));
    }
}
