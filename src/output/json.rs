//! JSON output formatting

use std::io;

use crate::scan::ScanResult;

/// Print a scan result as pretty-printed JSON to stdout.
pub fn print_json(result: &ScanResult) -> io::Result<()> {
    let json = serde_json::to_string_pretty(result).map_err(io::Error::other)?;
    println!("{}", json);
    Ok(())
}
