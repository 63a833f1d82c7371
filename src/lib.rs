mod api;
mod engine;
mod number;

pub mod extract;

pub use api::{
    BlockSummary, DEFAULT_WINDOW_SIZE, Options, ScanDetails, ScanOutcome, find_max_number, find_max_number_with,
    scan_verbose_with,
};
pub use number::Number;
