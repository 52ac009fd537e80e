//! Output of projected rows: CSV file, CSV on stdout, or a console table

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use comfy_table::{ContentArrangement, Table, presets};
use tempfile::NamedTempFile;
use tracing::info;

use crate::error::{PubMedError, Result};
use crate::filter::OutputRow;

/// How rows are shown when no output file is given
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConsoleFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Same CSV as the file sink, on stdout
    Csv,
}

/// Where the final rows go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    /// CSV file, replaced atomically
    CsvFile(PathBuf),
    /// Standard output
    Console(ConsoleFormat),
}

impl Sink {
    pub fn write(&self, rows: &[OutputRow]) -> Result<()> {
        match self {
            Sink::CsvFile(path) => {
                write_csv_file(rows, path)?;
                info!(rows = rows.len(), path = %path.display(), "Results saved");
            }
            Sink::Console(ConsoleFormat::Csv) => {
                let stdout = io::stdout();
                write_csv(rows, stdout.lock())?;
            }
            Sink::Console(ConsoleFormat::Table) => {
                let rendered = render_table(rows);
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{rendered}")
                    .and_then(|_| stdout.flush())
                    .map_err(|source| PubMedError::IoError {
                        path: "<stdout>".to_string(),
                        source,
                    })?;
            }
        }
        Ok(())
    }
}

/// Write the header and every row as CSV
///
/// The header is written even when `rows` is empty.
pub fn write_csv<W: Write>(rows: &[OutputRow], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(OutputRow::HEADERS)?;
    for row in rows {
        wtr.write_record(row.fields())?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Write CSV to `path` through a temp file in the same directory
///
/// The target is only replaced once every row has been written and synced,
/// so a failure never leaves a truncated file behind.
pub fn write_csv_file(rows: &[OutputRow], path: &Path) -> Result<()> {
    let io_error = |source: io::Error| PubMedError::IoError {
        path: path.display().to_string(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(io_error)?;
    write_csv(rows, &mut tmp)?;
    finish_output_file(tmp.as_file()).map_err(io_error)?;
    tmp.persist(path).map_err(|e| io_error(e.error))?;
    Ok(())
}

fn finish_output_file(file: &File) -> io::Result<()> {
    // Temp files are created owner-only; output should look like any other file
    #[cfg(unix)]
    {
        use std::fs::Permissions;
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(Permissions::from_mode(0o644))?;
    }
    file.sync_all()
}

/// Render rows as a table for the terminal
pub fn render_table(rows: &[OutputRow]) -> String {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(OutputRow::HEADERS);

    for row in rows {
        table.add_row(row.fields());
    }

    table.to_string()
}
