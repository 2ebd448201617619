//! Directory hierarchy construction
//!
//! `DirectoryWalker` visits a tree depth-first down to a configured depth and
//! returns a `HierarchyEntry` per directory with size subtotals. Every file
//! it records is also fed into the `ScanContext` statistics.

mod config;
mod context;
mod node;
mod utils;
mod walker;

pub use config::ScanConfig;
pub use context::ScanContext;
pub use node::{EntryExtras, Files, HierarchyEntry};
pub use utils::format_size;
pub use walker::DirectoryWalker;
