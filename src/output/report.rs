//! Console report: the directory tree followed by statistics tables
//!
//! `ReportFormatter` renders into any `WriteColor`, so the same code backs
//! the coloured terminal output and the plain string used by tests.

use std::io::{self, Write};
use termcolor::{Buffer, Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::scan::ScanResult;
use crate::stats::{Metric, Rollup, StatItem, rollup};
use crate::tree::{HierarchyEntry, format_size};

use super::config::OutputConfig;
use super::utils::{continuation_prefix, format_number, format_timestamp};

/// Formatter for the full console report.
pub struct ReportFormatter {
    config: OutputConfig,
}

impl ReportFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Render the report without colour.
    pub fn format(&self, result: &ScanResult) -> String {
        let mut buffer = Buffer::no_color();
        // writing into an in-memory buffer cannot fail
        let _ = self.write_report(&mut buffer, result);
        String::from_utf8_lossy(buffer.as_slice()).into_owned()
    }

    pub fn print(&self, result: &ScanResult) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);
        self.write_report(&mut stdout, result)
    }

    fn write_report<W: WriteColor>(&self, out: &mut W, result: &ScanResult) -> io::Result<()> {
        if self.config.show_tree {
            self.write_entry(out, &result.hierarchy, "", true, true)?;
            writeln!(out)?;
        }

        writeln!(
            out,
            "{} directories, {} files, {} total",
            result.directories_scanned,
            result.files_scanned,
            format_size(result.total_size())
        )?;
        writeln!(out)?;

        let extensions = &result.extension_stats;
        write_table(out, "Extensions by size", &rollup(extensions, Metric::Size))?;
        write_table(out, "Extensions by count", &rollup(extensions, Metric::Count))?;
        write_table(out, "Largest files", &rollup(&result.top_files, Metric::Size))?;
        Ok(())
    }

    fn write_entry<W: WriteColor>(
        &self,
        out: &mut W,
        entry: &HierarchyEntry,
        prefix: &str,
        is_last: bool,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            let connector = if is_last { "└── " } else { "├── " };
            write!(out, "{}{}", prefix, connector)?;
        }

        if entry.is_dir {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        }
        write!(out, "{}", entry.name)?;
        out.reset()?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "  {}", format_size(entry.size))?;
        out.reset()?;

        if self.config.show_dates {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
            write!(
                out,
                "  {}  {}",
                format_timestamp(&entry.created_at),
                format_timestamp(&entry.modified_at)
            )?;
            out.reset()?;
        }
        writeln!(out)?;

        let child_prefix = if is_root {
            String::new()
        } else {
            continuation_prefix(prefix, is_last)
        };
        let count = entry.children.len();
        for (i, child) in entry.children.iter().enumerate() {
            self.write_entry(out, child, &child_prefix, i + 1 == count, false)?;
        }
        Ok(())
    }
}

/// Write one statistics table: header, top rows, and the "Others" row.
fn write_table<W: WriteColor>(out: &mut W, title: &str, table: &Rollup) -> io::Result<()> {
    let mut bold = ColorSpec::new();
    bold.set_bold(true);

    out.set_color(&bold)?;
    writeln!(out, "{}", title)?;
    out.reset()?;

    if table.top.is_empty() {
        writeln!(out, "  (none)")?;
        writeln!(out)?;
        return Ok(());
    }

    let width = table
        .rows()
        .map(|i| display_name(i).chars().count())
        .max()
        .unwrap_or(0)
        .max(4);

    writeln!(out, "  {:<width$}  {:>14}", "Name", table.metric.label())?;
    for item in &table.top {
        write_row(out, item, table.metric, width)?;
    }
    if let Some(others) = &table.others {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Black)).set_intense(true))?;
        write_row(out, others, table.metric, width)?;
        out.reset()?;
    }
    writeln!(
        out,
        "  {:<width$}  {:>14}",
        "Total",
        format_number(table.total())
    )?;
    writeln!(out)?;
    Ok(())
}

fn write_row<W: WriteColor>(
    out: &mut W,
    item: &StatItem,
    metric: Metric,
    width: usize,
) -> io::Result<()> {
    writeln!(
        out,
        "  {:<width$}  {:>14}",
        display_name(item),
        format_number(metric.value(item))
    )
}

/// Extension rows with no extension still need a visible label.
fn display_name(item: &StatItem) -> &str {
    if item.name.is_empty() {
        "(none)"
    } else {
        &item.name
    }
}
