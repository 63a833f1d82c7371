mod report;

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use magnitude::{DEFAULT_WINDOW_SIZE, Options, scan_verbose_with};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    // If no filename was given, fall back to the first PDF in the current
    // directory.
    let path = match config.file.or_else(first_pdf_in_cwd) {
        Some(path) => path,
        None => {
            eprintln!("Error: No PDF files found in the current directory.");
            std::process::exit(1);
        }
    };

    let pages = match magnitude::extract::load_pages(&path) {
        Ok(pages) => pages,
        Err(err) => {
            eprintln!("Error: {err}");
            std::process::exit(1);
        }
    };

    let opts = Options { window_size: config.window_size };
    let outcome = scan_verbose_with(&pages, &opts);

    if config.verbose {
        report::print_run(&path, &outcome, config.color);
    }

    match outcome.max {
        Some(number) => println!("{}", report::format_number(number)),
        None => {
            println!("No numbers found in the PDF.");
            std::process::exit(1);
        }
    }
}

struct CliConfig {
    file: Option<PathBuf>,
    window_size: usize,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut file: Option<PathBuf> = None;
    let mut window_size = DEFAULT_WINDOW_SIZE;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("magnitude {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "-v" | "--verbose" => verbose = true,
            "--window" => {
                let value = args.next().ok_or_else(|| "error: --window expects a value".to_string())?;
                window_size = parse_window(&value)?;
            }
            _ if arg.starts_with("--window=") => {
                window_size = parse_window(arg.trim_start_matches("--window="))?;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                if file.is_some() {
                    return Err("error: input file provided multiple times".to_string());
                }
                file = Some(PathBuf::from(arg));
            }
        }
    }

    Ok(CliConfig { file, window_size, verbose, color })
}

fn parse_window(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(format!("error: invalid --window '{value}' (expected a positive integer)")),
    }
}

/// First `*.pdf`/`*.PDF` in the current directory, sorted by name.
fn first_pdf_in_cwd() -> Option<PathBuf> {
    let mut pdfs: Vec<PathBuf> = std::fs::read_dir(".")
        .ok()?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("pdf")))
        .collect();
    pdfs.sort();
    pdfs.into_iter().next()
}

fn help_text() -> String {
    format!(
        "magnitude {version}

Finds the largest number mentioned in a PDF, scaling each candidate by
magnitude cues ('(in millions)', '2.5m', '5 thousand') from its context.

Usage:
  magnitude [OPTIONS] [file.pdf]

If no file is given, the first *.pdf in the current directory is used.

Options:
  --window <n>    Context window size in characters per side.
                  Default: {default_window}
  -v, --verbose   Print a per-page scan trace before the result.
  --color         Force ANSI color output.
  --no-color      Disable ANSI color output.
  -h, --help      Show this help message.
  -V, --version   Print version information.

Exit codes:
  0  Success.
  1  No numbers found, or the file could not be read.
  2  Invalid arguments.",
        version = env!("CARGO_PKG_VERSION"),
        default_window = DEFAULT_WINDOW_SIZE
    )
}
