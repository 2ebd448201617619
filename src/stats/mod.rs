//! Aggregate file statistics
//!
//! - `item` - the `StatItem` record and the `Metric` used to order it
//! - `extensions` - per-extension count and size
//! - `top_files` - the K largest files
//! - `rollup` - top-N rows plus an "Others" overflow row, for display

mod extensions;
mod item;
mod rollup;
mod top_files;

pub use extensions::{ExtensionAccumulator, extension_of};
pub use item::{Metric, StatItem};
pub use rollup::{OTHERS_NAME, ROLLUP_ROWS, Rollup, rollup};
pub use top_files::{DEFAULT_TOP_FILES, TopKTracker};
