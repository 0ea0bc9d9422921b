//! Emit stage: write `OutputRecord`s as comma-delimited text.
//!
//! The header row is always written, even with no records. Values are quoted
//! only when they contain a comma, a quote or a line break, and embedded
//! quotes are doubled. Lines end in `\r\n`.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::PipelineError;
use crate::record::{OUTPUT_HEADER, OutputRecord};

/// Write `records` to `path`, replacing any existing file.
///
/// The parent directory is never created; if it is missing the open fails
/// with `DestinationUnwritable`.
pub fn write_records(path: &Path, records: &[OutputRecord]) -> Result<(), PipelineError> {
    let file = File::create(path).map_err(|source| PipelineError::DestinationUnwritable {
        path: path.to_path_buf(),
        source,
    })?;
    write_to(file, records, path)
}

/// Write header and `records` to `writer`. `destination` names it in errors.
pub fn write_to<W: io::Write>(
    writer: W,
    records: &[OutputRecord],
    destination: &Path,
) -> Result<(), PipelineError> {
    let unwritable = |source: io::Error| PipelineError::DestinationUnwritable {
        path: destination.to_path_buf(),
        source,
    };

    let mut wtr = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    wtr.write_record(OUTPUT_HEADER)
        .map_err(|e| unwritable(into_io(e)))?;
    for record in records {
        wtr.serialize(record).map_err(|e| unwritable(into_io(e)))?;
    }
    wtr.flush().map_err(unwritable)?;

    debug!(destination = %destination.display(), rows = records.len(), "emitted records");
    Ok(())
}

fn into_io(err: csv::Error) -> io::Error {
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => source,
        _ => io::Error::other(message),
    }
}
