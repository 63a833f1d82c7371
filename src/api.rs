use std::time::Duration;

use crate::engine::{RunResult, Scanner};
use crate::number::Number;

/// Default context window, in characters per side.
pub const DEFAULT_WINDOW_SIZE: usize = 1500;

/// Options that affect scanning.
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of characters inspected on each side of a numeral when
    /// inferring its scale. Must be positive; windows clip at block
    /// boundaries and never cross them.
    pub window_size: usize,
}

impl Default for Options {
    fn default() -> Self {
        Options { window_size: DEFAULT_WINDOW_SIZE }
    }
}

/// Result from [`scan_verbose_with`].
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    /// Largest context-scaled number across all blocks, if any was found.
    pub max: Option<Number>,
    /// Total elapsed time for the scan.
    pub elapsed: Duration,
    /// Per-block breakdown.
    pub details: ScanDetails,
}

/// Per-block breakdown returned by [`scan_verbose_with`].
///
/// This is intentionally compact: it is meant for debugging and performance
/// inspection, not for re-deriving the result.
#[derive(Debug, Clone)]
pub struct ScanDetails {
    pub blocks: Vec<BlockSummary>,
}

/// A compact per-block summary used in verbose output.
#[derive(Debug, Clone)]
pub struct BlockSummary {
    /// Zero-based position of the block in the input sequence.
    pub index: usize,
    /// Time spent scanning the block.
    pub duration: Duration,
    /// Number of numeral candidates found in the block.
    pub candidates: usize,
    /// Largest scaled value within the block, if any.
    pub best: Option<Number>,
}

/// Scan `blocks` in order and return the largest context-scaled number, or
/// `None` when no numeral literal occurs in any block.
///
/// # Example
/// ```
/// use magnitude::{Number, find_max_number};
///
/// let max = find_max_number(["Revenue was 2.5m dollars"]);
/// assert_eq!(max, Some(Number::Float(2_500_000.0)));
///
/// assert_eq!(find_max_number(["no figures here"]), None);
/// ```
pub fn find_max_number<I, S>(blocks: I) -> Option<Number>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    find_max_number_with(blocks, &Options::default())
}

/// Scan `blocks` with explicit [`Options`].
///
/// Use this when the default 1500-character context window is too wide (for
/// example, to keep a table-wide "(in millions)" declaration from reaching
/// figures in a different table).
pub fn find_max_number_with<I, S>(blocks: I, options: &Options) -> Option<Number>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Scanner::new(options).run(blocks)
}

/// Scan `blocks` and return the result together with per-block timings and
/// candidate counts.
///
/// This is useful for profiling and for the CLI's verbose trace. The plain
/// [`find_max_number_with`] path does not collect these extras.
pub fn scan_verbose_with<I, S>(blocks: I, options: &Options) -> ScanOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let RunResult { max, metrics } = Scanner::new(options).run_with_metrics(blocks);

    let blocks = metrics
        .blocks
        .iter()
        .enumerate()
        .map(|(index, block)| BlockSummary {
            index,
            duration: block.duration,
            candidates: block.candidates,
            best: block.best,
        })
        .collect();

    ScanOutcome { max, elapsed: metrics.total, details: ScanDetails { blocks } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_examples_matching() {
        // Array of (expected_max, blocks).
        let cases: Vec<(Option<Number>, Vec<&str>)> = vec![
            (None, vec![]),
            (None, vec!["only words and punctuation..."]),
            (Some(Number::Int(1_234_567)), vec!["1,234,567"]),
            (Some(Number::Int(1_234_567)), vec!["1234567"]),
            // Second decimal point splits the literal into 1.234 and 5.
            (Some(Number::Int(5)), vec!["1.234.5"]),
            // Document-level declaration wins over the local "b " suffix.
            (Some(Number::Int(5_000_000)), vec!["Revenue (in millions) was 5 b total"]),
            // Local suffix fallback when no declaration is in the window.
            (Some(Number::Float(2_500_000.0)), vec!["Revenue was 2.5m dollars"]),
            (Some(Number::Int(5_000)), vec!["5 thousand widgets"]),
            // Digit runs at block boundaries clip, not pad, their windows.
            (Some(Number::Int(7)), vec!["7"]),
            (Some(Number::Int(9)), vec!["ends with 9"]),
            // Case-insensitive cue matching.
            (Some(Number::Int(4_000_000_000)), vec!["(In Billions) total: 4"]),
            // The maximum is shared across blocks.
            (Some(Number::Float(12_500_000_000.0)), vec!["Total assets (in billions): 12.5", "Net income: 3m"]),
        ];

        for (expected, blocks) in cases {
            assert_eq!(find_max_number(blocks.clone()), expected, "blocks: {blocks:?}");
        }
    }

    #[test]
    fn rescanning_is_idempotent() {
        let blocks = ["Total assets (in billions): 12.5", "Net income: 3m"];
        assert_eq!(find_max_number(blocks), find_max_number(blocks));
    }

    #[test]
    fn running_maximum_is_monotonic_over_prefixes() {
        let blocks = ["3 thousand", "no numbers", "2", "4 million", "1"];

        let mut previous = f64::NEG_INFINITY;
        for upto in 0..=blocks.len() {
            let max = find_max_number(&blocks[..upto]).map_or(f64::NEG_INFINITY, Number::value);
            assert!(max >= previous, "prefix of {upto} blocks decreased the maximum");
            previous = max;
        }
        assert_eq!(previous, 4_000_000.0);
    }

    #[test]
    fn narrow_window_limits_cue_reach() {
        let block = "(in millions) ......................... 5";
        assert_eq!(find_max_number([block]), Some(Number::Int(5_000_000)));

        // A 10-char window cannot see the declaration at the block start.
        let narrow = Options { window_size: 10 };
        assert_eq!(find_max_number_with([block], &narrow), Some(Number::Int(5)));
    }

    #[test]
    fn verbose_scan_reports_per_block_summaries() {
        let outcome = scan_verbose_with(["12 and 30", "nothing"], &Options::default());

        assert_eq!(outcome.max, Some(Number::Int(30)));
        assert_eq!(outcome.details.blocks.len(), 2);
        assert_eq!(outcome.details.blocks[0].index, 0);
        assert_eq!(outcome.details.blocks[0].candidates, 2);
        assert_eq!(outcome.details.blocks[0].best, Some(Number::Int(30)));
        assert_eq!(outcome.details.blocks[1].candidates, 0);
        assert!(outcome.elapsed >= Duration::ZERO);
    }
}
