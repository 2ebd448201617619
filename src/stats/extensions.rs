//! Per-extension file count and total size

use std::collections::HashMap;

use super::item::StatItem;

/// Return the extension of a file name: the text after the last `.`, without
/// the dot. Names with no dot have the empty extension.
pub fn extension_of(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => "",
    }
}

/// Running totals keyed by extension.
#[derive(Debug, Default)]
pub struct ExtensionAccumulator {
    by_extension: HashMap<String, StatItem>,
}

impl ExtensionAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one file under its extension.
    pub fn record(&mut self, file_name: &str, size: u64) {
        let ext = extension_of(file_name);
        match self.by_extension.get_mut(ext) {
            Some(item) => {
                item.count += 1;
                item.size += size;
            }
            None => {
                self.by_extension
                    .insert(ext.to_string(), StatItem::new(ext, 1, size));
            }
        }
    }

    pub fn get(&self, extension: &str) -> Option<&StatItem> {
        self.by_extension.get(extension)
    }

    pub fn len(&self) -> usize {
        self.by_extension.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_extension.is_empty()
    }

    /// All entries, in no particular order.
    pub fn snapshot(&self) -> Vec<StatItem> {
        self.by_extension.values().cloned().collect()
    }

    pub fn into_snapshot(self) -> Vec<StatItem> {
        self.by_extension.into_values().collect()
    }
}
