// mod.rs - Output helpers: report rendering and output paths

use crate::core::validator::RowReport;
use std::fs::create_dir_all;
use std::io::{self, Write};
use std::path::Path;

/// Ensure parent directory exists before creating file
pub fn ensure_parent_dir(file_path: &Path) -> io::Result<()> {
    if let Some(parent) = file_path.parent() {
        create_dir_all(parent)?;
    }
    Ok(())
}

/// Write one block for a failing row: heading, one bullet per error, raw row, blank line
pub fn write_row_block<W: Write>(writer: &mut W, report: &RowReport<'_>) -> io::Result<()> {
    writeln!(writer, "Row {} has errors:", report.row_number())?;
    for error in &report.errors {
        writeln!(writer, "  - {}", error)?;
    }
    writeln!(writer, "  Row data: {}", report.record)?;
    writeln!(writer)?;
    Ok(())
}

/// Write every failing row in order. Nothing is written for an empty slice.
pub fn write_report<W: Write>(writer: &mut W, reports: &[RowReport<'_>]) -> io::Result<()> {
    for report in reports {
        write_row_block(writer, report)?;
    }
    Ok(())
}
