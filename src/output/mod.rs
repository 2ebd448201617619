//! Report rendering for the CLI
//!
//! The scan itself has no knowledge of these formatters; they only read a
//! finished `ScanResult`.
//!
//! - `config` - Output configuration types
//! - `report` - Console tree and statistics tables
//! - `json` - JSON output
//! - `utils` - Number, timestamp and prefix helpers

mod config;
mod json;
mod report;
mod utils;

pub use config::OutputConfig;
pub use json::print_json;
pub use report::ReportFormatter;
pub use utils::{format_number, format_timestamp};
