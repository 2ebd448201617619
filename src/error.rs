//! Error types for scanning
//!
//! Only root-level failures abort a scan. Everything below the root is
//! recovered where it happens and reported as a [`SkippedEntry`] on the result.

use std::io;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// Fatal scan errors, surfaced to the caller before or at the root.
#[derive(Error, Debug)]
pub enum ScanError {
    /// The scan root does not exist or is not a directory
    #[error("cannot access '{}': no such directory", .path.display())]
    RootNotFound { path: PathBuf },

    /// The scan root exists but could not be enumerated
    #[error("cannot read '{}': {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScanError>;

/// Why an entry below the root was left out of the scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    AccessDenied,
    Io,
}

impl From<&io::Error> for SkipReason {
    fn from(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => SkipReason::AccessDenied,
            _ => SkipReason::Io,
        }
    }
}

/// An entry that was dropped from the hierarchy and the statistics.
#[derive(Debug, Clone, Serialize)]
pub struct SkippedEntry {
    pub path: PathBuf,
    pub reason: SkipReason,
    pub message: String,
}

impl SkippedEntry {
    pub fn new(path: PathBuf, err: &io::Error) -> Self {
        Self {
            path,
            reason: SkipReason::from(err),
            message: err.to_string(),
        }
    }
}
