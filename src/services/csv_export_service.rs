use csv::{QuoteStyle, Terminator, WriterBuilder};
use thiserror::Error;

use crate::models::{ReportRow, REPORT_COLUMNS};

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("failed to write CSV record: {0}")]
    Write(#[from] csv::Error),
    #[error("failed to flush CSV output: {0}")]
    Flush(#[from] std::io::Error),
    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// Renders the report header plus one line per row.
///
/// Every field is quoted, embedded quotes are doubled and every line ends with `\n`.
pub fn serialize_report(rows: &[ReportRow]) -> Result<String, CsvError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(REPORT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.to_record())?;
    }

    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8(bytes)?)
}
