//! CSV export of response-time reports.
//!
//! The file always starts with the header
//! `email,user type,commented at,formula,weekends,response time`, even for a
//! ticket without comments, followed by one line per report row.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use response_times::libs::export::ReportWriter;
//! use response_times::libs::ticket::Ticket;
//!
//! let ticket = Ticket::from_url("https://acme.zendesk.com/agent/tickets/123")?;
//! let writer = ReportWriter::new(&ticket, None)?; // writes 123.csv
//! writer.write(&[])?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::libs::report::{ReportRow, REPORT_HEADER};
use crate::libs::ticket::Ticket;
use crate::msg_bail_anyhow;
use anyhow::Result;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes report rows to a CSV file.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_path: PathBuf,
}

impl ReportWriter {
    /// Resolves the output path, defaulting to `<ticket id>.csv`.
    ///
    /// # Errors
    ///
    /// Fails when the path does not end in `.csv`.
    pub fn new(ticket: &Ticket, output_path: Option<PathBuf>) -> Result<Self> {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(ticket.default_output()));
        if !has_csv_extension(&output_path) {
            msg_bail_anyhow!(Message::OutputNotCsv(output_path.display().to_string()));
        }
        Ok(Self { output_path })
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Creates or truncates the output file and writes all rows.
    pub fn write(&self, rows: &[ReportRow]) -> Result<()> {
        let file = File::create(&self.output_path)?;
        write_rows(file, rows)
    }
}

fn has_csv_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false)
}

/// Writes the header and rows to any writer.
pub fn write_rows<W: Write>(writer: W, rows: &[ReportRow]) -> Result<()> {
    // The header is written by hand so that empty reports still carry it.
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    wtr.write_record(REPORT_HEADER)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
