//! Bounded tracker of the largest files seen during a scan

use super::item::StatItem;

/// Number of files kept by default.
pub const DEFAULT_TOP_FILES: usize = 10;

/// Keeps the `capacity` largest files offered so far.
///
/// Entries are held in a plain vector. Until the tracker is full every offer
/// is admitted; the vector is sorted ascending by size once it fills up and
/// after every later admission, so the smallest kept file is always at index 0.
/// K is small, so the re-sort is cheaper than it looks.
#[derive(Debug)]
pub struct TopKTracker {
    capacity: usize,
    items: Vec<StatItem>,
}

impl TopKTracker {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Offer a file. Returns whether it was admitted.
    ///
    /// Once full, a file must be strictly larger than the current minimum to
    /// get in; a tie with the minimum keeps the file that was seen first.
    pub fn offer(&mut self, name: &str, size: u64) -> bool {
        if self.capacity == 0 {
            return false;
        }

        if self.items.len() < self.capacity {
            self.items.push(StatItem::file(name, size));
            if self.items.len() == self.capacity {
                self.sort();
            }
            return true;
        }

        if size <= self.items[0].size {
            return false;
        }

        self.items.remove(0);
        self.items.push(StatItem::file(name, size));
        self.sort();
        true
    }

    /// Smallest size that would currently be displaced, if full.
    pub fn threshold(&self) -> Option<u64> {
        if self.is_full() {
            self.items.first().map(|i| i.size)
        } else {
            None
        }
    }

    /// Kept files, ascending by size.
    pub fn snapshot(&self) -> Vec<StatItem> {
        let mut items = self.items.clone();
        items.sort_by(StatItem::cmp_by_size);
        items
    }

    pub fn into_snapshot(mut self) -> Vec<StatItem> {
        self.sort();
        self.items
    }

    fn sort(&mut self) {
        self.items.sort_by(StatItem::cmp_by_size);
    }
}

impl Default for TopKTracker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_FILES)
    }
}
