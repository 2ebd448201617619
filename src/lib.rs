//! fsreport - directory tree report with subtotals and file statistics
//!
//! [`scan`] walks a directory down to a configured depth and returns a
//! [`ScanResult`]: the hierarchy with per-directory size subtotals, per-extension
//! counts and sizes, and the largest files. Rendering is left to the caller;
//! the `output` module holds the console and JSON renderers used by the CLI.

pub mod error;
pub mod output;
pub mod scan;
pub mod stats;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{ScanError, SkipReason, SkippedEntry};
pub use output::{OutputConfig, ReportFormatter, print_json};
pub use scan::{ScanResult, Scanner, scan};
pub use stats::{
    ExtensionAccumulator, Metric, OTHERS_NAME, Rollup, StatItem, TopKTracker, extension_of, rollup,
};
pub use tree::{DirectoryWalker, EntryExtras, HierarchyEntry, ScanConfig, ScanContext, format_size};
