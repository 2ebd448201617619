//! Shared filesystem helpers for the walker

use std::fs::Metadata;
use std::io;
use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Utc};

use super::node::EntryExtras;

/// Display name of a path: its last component, or the whole path for roots
/// like `/` that have none.
pub fn entry_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Convert a timestamp read, falling back to the Unix epoch when the
/// platform or filesystem cannot supply it.
pub fn timestamp(time: io::Result<SystemTime>) -> DateTime<Utc> {
    match time {
        Ok(t) => DateTime::<Utc>::from(t),
        Err(_) => DateTime::<Utc>::UNIX_EPOCH,
    }
}

/// Creation and modification time of an entry.
pub fn timestamps(meta: &Metadata) -> (DateTime<Utc>, DateTime<Utc>) {
    (timestamp(meta.created()), timestamp(meta.modified()))
}

pub fn extras(meta: &Metadata) -> EntryExtras {
    EntryExtras {
        accessed_at: timestamp(meta.accessed()),
        readonly: meta.permissions().readonly(),
    }
}

/// Format a size in bytes to human-readable format.
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}G", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}M", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}K", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(0), "0B");
        assert_eq!(format_size(1023), "1023B");
        assert_eq!(format_size(1024), "1.0K");
        assert_eq!(format_size(1536), "1.5K");
        assert_eq!(format_size(5 * 1024 * 1024), "5.0M");
        assert_eq!(format_size(3 * 1024 * 1024 * 1024), "3.0G");
    }

    #[test]
    fn test_entry_name() {
        assert_eq!(entry_name(&PathBuf::from("/tmp/data")), "data");
        assert_eq!(entry_name(&PathBuf::from("/")), "/");
    }

    #[test]
    fn test_unavailable_timestamp_is_epoch() {
        let err = io::Error::new(io::ErrorKind::Unsupported, "no birth time");
        assert_eq!(timestamp(Err(err)), DateTime::<Utc>::UNIX_EPOCH);
    }
}
