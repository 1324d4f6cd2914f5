//! CSV report writer.

use crate::enrich::EnrichedRecord;
use crate::error::Result;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// CSV column order for the report
pub const REPORT_COLUMNS: &[&str] = &[
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Write the header and one row per record to `writer`.
///
/// The header is written even when `records` is empty.
pub fn write_to<W: Write>(writer: W, records: &[EnrichedRecord]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(REPORT_COLUMNS)?;
    for record in records {
        wtr.serialize(record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the report to `path`, replacing any existing file
pub fn write_report(records: &[EnrichedRecord], path: &Path) -> Result<()> {
    let file = File::create(path)?;
    write_to(file, records)?;
    info!(path = %path.display(), rows = records.len(), "Report written");
    Ok(())
}
