//! CLI entry point for fsreport

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use fsreport::{OutputConfig, ReportFormatter, ScanConfig, Scanner, print_json};
use tracing_subscriber::EnvFilter;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "fsreport")]
#[command(about = "Directory tree report with size subtotals, extension statistics and the largest files")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Descend only N levels deep (0 = files of the root only)
    #[arg(short = 'L', long = "level")]
    level: Option<usize>,

    /// Number of largest files to keep
    #[arg(short = 'n', long = "top", default_value = "10")]
    top: usize,

    /// Skip per-entry extras (access time, read-only flag)
    #[arg(long = "skip-metadata")]
    skip_metadata: bool,

    /// Print statistics only, without the directory tree
    #[arg(long = "no-tree")]
    no_tree: bool,

    /// Hide created/modified timestamps in the tree
    #[arg(long = "no-dates")]
    no_dates: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log every visited directory to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("fsreport=debug")
        } else {
            EnvFilter::new("fsreport=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    let scan_config = ScanConfig {
        max_depth: args.level.unwrap_or(usize::MAX),
        top_files: args.top,
        skip_expensive_metadata: args.skip_metadata,
    };

    let result = match Scanner::new(scan_config).scan(&args.path) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("fsreport: {}", e);
            process::exit(1);
        }
    };

    if !result.skipped.is_empty() {
        eprintln!(
            "fsreport: {} entries could not be read and were skipped",
            result.skipped.len()
        );
    }

    let written = if args.json {
        print_json(&result)
    } else {
        let output_config = OutputConfig {
            use_color: should_use_color(args.color),
            show_tree: !args.no_tree,
            show_dates: !args.no_dates,
        };
        ReportFormatter::new(output_config).print(&result)
    };

    if let Err(e) = written {
        eprintln!("fsreport: error writing output: {}", e);
        process::exit(1);
    }
}
