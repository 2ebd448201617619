//! Top-N listing with an "Others" overflow row
//!
//! Renderers show the ten biggest entries of a statistics view and fold the
//! rest into a single row. The overflow row sums the same metric the table
//! displays, so a size table and a count table over the same entries produce
//! different "Others" rows.

use serde::Serialize;

use super::item::{Metric, StatItem};

/// Rows shown before the overflow row.
pub const ROLLUP_ROWS: usize = 10;

/// Name of the synthetic overflow row.
pub const OTHERS_NAME: &str = "Others";

#[derive(Debug, Clone, Serialize)]
pub struct Rollup {
    pub metric: Metric,
    /// Largest entries first.
    pub top: Vec<StatItem>,
    /// Present only when there were more than [`ROLLUP_ROWS`] entries.
    pub others: Option<StatItem>,
}

impl Rollup {
    /// Top rows followed by the overflow row, if any.
    pub fn rows(&self) -> impl Iterator<Item = &StatItem> {
        self.top.iter().chain(self.others.as_ref())
    }

    /// Sum of the displayed metric over every row.
    pub fn total(&self) -> u64 {
        self.rows().map(|item| self.metric.value(item)).sum()
    }
}

/// Build a rollup of `items` by `metric`.
///
/// `items` is expected ascending by `metric`; it is re-sorted (stably) so an
/// unsorted input still yields the right rows.
pub fn rollup(items: &[StatItem], metric: Metric) -> Rollup {
    let mut sorted = items.to_vec();
    metric.sort(&mut sorted);

    let split = sorted.len().saturating_sub(ROLLUP_ROWS);
    let top: Vec<StatItem> = sorted[split..].iter().rev().cloned().collect();

    let others = if split > 0 {
        let rest = &sorted[..split];
        Some(StatItem::new(
            OTHERS_NAME,
            rest.iter().map(|i| i.count).sum(),
            rest.iter().map(|i| i.size).sum(),
        ))
    } else {
        None
    };

    Rollup {
        metric,
        top,
        others,
    }
}
