use std::path::Path;

use magnitude::{Number, ScanOutcome};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Format a result value: integral values with comma grouping, fractional
/// values with two decimals.
pub fn format_number(number: Number) -> String {
    match number {
        Number::Int(n) => group_thousands(n),
        // Scaled floats are often whole; print them like integers then.
        Number::Float(x) if x.fract() == 0.0 && x.abs() < i64::MAX as f64 => group_thousands(x as i64),
        Number::Float(x) => format!("{x:.2}"),
    }
}

fn group_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if n < 0 { format!("-{grouped}") } else { grouped }
}

/// Print the verbose per-block trace for a finished scan.
pub fn print_run(source: &Path, outcome: &ScanOutcome, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("\n{}", palette.bold(palette.paint(format!("Scanning: {}", source.display()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Blocks ━━━", ansi::GRAY));
    if outcome.details.blocks.is_empty() {
        println!("{}", palette.dim("  No text blocks extracted"));
    }
    for block in &outcome.details.blocks {
        let best = block.best.map_or_else(|| "-".to_string(), format_number);
        println!(
            "  {}  {:>4} candidates, best {}  {}",
            palette.paint(format!("page {:>3}", block.index + 1), ansi::BLUE),
            block.candidates,
            palette.bold(best),
            palette.dim(format!("({:?})", block.duration)),
        );
    }

    println!("\n{}", palette.dim(format!("  Total: {:?}", outcome.elapsed)));
}
