//! Hierarchy entries produced by the walker

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Optional per-entry details, collected unless the scan skips them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryExtras {
    pub accessed_at: DateTime<Utc>,
    pub readonly: bool,
}

/// One directory or file in the scanned hierarchy.
///
/// A file's `size` is its length. A directory's `size` is the sum of its
/// children's sizes, so it only reflects what the walk actually visited.
/// Children of a directory come subdirectories first, then files, each
/// group in the order the filesystem listed them.
#[derive(Debug, Clone, Serialize)]
pub struct HierarchyEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub size: u64,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
    pub depth: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<EntryExtras>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyEntry>,
}

impl HierarchyEntry {
    /// Number of file leaves in this subtree.
    pub fn file_count(&self) -> usize {
        if self.is_dir {
            self.children.iter().map(HierarchyEntry::file_count).sum()
        } else {
            1
        }
    }

    /// Number of directories in this subtree, this one included.
    pub fn dir_count(&self) -> usize {
        if self.is_dir {
            1 + self
                .children
                .iter()
                .map(HierarchyEntry::dir_count)
                .sum::<usize>()
        } else {
            0
        }
    }

    /// All file leaves in this subtree, depth-first.
    pub fn files(&self) -> Files<'_> {
        Files { stack: vec![self] }
    }

    /// Immediate subdirectories.
    pub fn subdirs(&self) -> impl Iterator<Item = &HierarchyEntry> {
        self.children.iter().filter(|c| c.is_dir)
    }
}

/// Iterator over the file leaves of a hierarchy.
pub struct Files<'a> {
    stack: Vec<&'a HierarchyEntry>,
}

impl<'a> Iterator for Files<'a> {
    type Item = &'a HierarchyEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(entry) = self.stack.pop() {
            if !entry.is_dir {
                return Some(entry);
            }
            self.stack.extend(entry.children.iter().rev());
        }
        None
    }
}
