//! Named count/size record shared by every statistics view

use std::cmp::Ordering;

use serde::Serialize;

/// A name with a file count and a byte size.
///
/// For extension statistics `count` is the number of contributing files and
/// `size` their total length. For top-file entries `count` is always 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatItem {
    pub name: String,
    pub count: u64,
    pub size: u64,
}

impl StatItem {
    pub fn new(name: impl Into<String>, count: u64, size: u64) -> Self {
        Self {
            name: name.into(),
            count,
            size,
        }
    }

    /// A single file entry.
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self::new(name, 1, size)
    }

    /// Default ordering: ascending by size.
    pub fn cmp_by_size(&self, other: &Self) -> Ordering {
        self.size.cmp(&other.size)
    }

    pub fn cmp_by_count(&self, other: &Self) -> Ordering {
        self.count.cmp(&other.count)
    }
}

/// Which column of a [`StatItem`] a view is sorted and summed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Size,
    Count,
}

impl Metric {
    pub fn value(self, item: &StatItem) -> u64 {
        match self {
            Metric::Size => item.size,
            Metric::Count => item.count,
        }
    }

    pub fn compare(self, a: &StatItem, b: &StatItem) -> Ordering {
        match self {
            Metric::Size => a.cmp_by_size(b),
            Metric::Count => a.cmp_by_count(b),
        }
    }

    /// Sort ascending by this metric. Stable, so ties keep their input order.
    pub fn sort(self, items: &mut [StatItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }

    pub fn label(self) -> &'static str {
        match self {
            Metric::Size => "Size",
            Metric::Count => "Count",
        }
    }
}
