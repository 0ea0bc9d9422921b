//! Ingest stage: read the source file into `InputRecord`s.
//!
//! Columns are addressed by header name, so the source may order them freely
//! and carry any number of extra columns. The whole file is loaded before
//! the pipeline moves on; a single bad row fails the run.

use std::fs::File;
use std::io;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::debug;

use crate::error::PipelineError;
use crate::record::{InputRecord, REQUIRED_FIELDS, is_iso_date};

/// Header line number, for errors about the header itself.
const HEADER_LINE: u64 = 1;

/// Positions of the required columns within a source row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnIndex {
    date: usize,
    stop_name: usize,
    gtfs_longitude: usize,
    gtfs_latitude: usize,
    entries: usize,
    exits: usize,
}

impl ColumnIndex {
    /// Resolve every required column against a header row.
    ///
    /// When a name is repeated the last occurrence wins.
    pub fn from_headers(headers: &StringRecord) -> Result<Self, PipelineError> {
        let find = |name: &str| {
            headers
                .iter()
                .enumerate()
                .filter(|(_, h)| *h == name)
                .map(|(i, _)| i)
                .last()
                .ok_or_else(|| {
                    PipelineError::malformed(HEADER_LINE, format!("header lacks column '{name}'"))
                })
        };

        Ok(Self {
            date: find(REQUIRED_FIELDS[0])?,
            stop_name: find(REQUIRED_FIELDS[1])?,
            gtfs_longitude: find(REQUIRED_FIELDS[2])?,
            gtfs_latitude: find(REQUIRED_FIELDS[3])?,
            entries: find(REQUIRED_FIELDS[4])?,
            exits: find(REQUIRED_FIELDS[5])?,
        })
    }

    /// Pull the required fields out of one data row.
    pub fn extract(&self, row: &StringRecord, line: u64) -> Result<InputRecord, PipelineError> {
        let get = |idx: usize, name: &str| {
            row.get(idx)
                .map(str::to_string)
                .ok_or_else(|| PipelineError::malformed(line, format!("missing field '{name}'")))
        };

        let date = get(self.date, "date")?;
        if !is_iso_date(&date) {
            return Err(PipelineError::malformed(
                line,
                format!("date '{date}' is not YYYY-MM-DD"),
            ));
        }

        Ok(InputRecord {
            date,
            stop_name: get(self.stop_name, "stop_name")?,
            gtfs_longitude: get(self.gtfs_longitude, "gtfs_longitude")?,
            gtfs_latitude: get(self.gtfs_latitude, "gtfs_latitude")?,
            entries: get(self.entries, "entries")?,
            exits: get(self.exits, "exits")?,
        })
    }
}

/// Read every row of the file at `path`.
pub fn read_records(path: &Path) -> Result<Vec<InputRecord>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read_from(file, path)
}

/// Read every row from `reader`. `origin` names the source in errors.
pub fn read_from<R: io::Read>(reader: R, origin: &Path) -> Result<Vec<InputRecord>, PipelineError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| csv_error(e, origin))?
        .clone();
    let columns = ColumnIndex::from_headers(&headers)?;

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row.map_err(|e| csv_error(e, origin))?;
        let line = row.position().map_or(0, |p| p.line());
        records.push(columns.extract(&row, line)?);
    }

    debug!(source = %origin.display(), rows = records.len(), "ingested source");
    Ok(records)
}

/// I/O failures mean the source is unreadable; anything else is bad content.
fn csv_error(err: csv::Error, origin: &Path) -> PipelineError {
    let line = err.position().map_or(0, |p| p.line());
    let reason = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(source) => PipelineError::SourceNotFound {
            path: origin.to_path_buf(),
            source,
        },
        _ => PipelineError::malformed(line, reason),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<Vec<InputRecord>, PipelineError> {
        read_from(text.as_bytes(), Path::new("test.csv"))
    }

    #[test]
    fn test_reads_rows_in_source_order() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits
2020-09-01,B,3.0,4.0,20,15
2020-07-31,A,1.0,2.0,10,5
";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].stop_name, "B");
        assert_eq!(records[1].stop_name, "A");
        assert_eq!(records[1].entries, "10");
    }

    #[test]
    fn test_columns_addressed_by_name() {
        let text = "exits,division,entries,gtfs_latitude,stop_name,date,gtfs_longitude
15,IRT,20,4.0,B,2020-08-01,3.0
";
        let records = parse(text).unwrap();
        assert_eq!(
            records[0],
            InputRecord {
                date: "2020-08-01".to_string(),
                stop_name: "B".to_string(),
                gtfs_longitude: "3.0".to_string(),
                gtfs_latitude: "4.0".to_string(),
                entries: "20".to_string(),
                exits: "15".to_string(),
            }
        );
    }

    #[test]
    fn test_quoted_values_are_unescaped() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits
2020-08-01,\"Court Sq, \"\"Queens\"\"\",3.0,4.0,20,15
";
        let records = parse(text).unwrap();
        assert_eq!(records[0].stop_name, "Court Sq, \"Queens\"");
    }

    #[test]
    fn test_header_only_gives_no_rows() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits\n";
        assert!(parse(text).unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits

2020-08-01,B,3.0,4.0,20,15

";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].stop_name, "B");
    }

    #[test]
    fn test_bom_and_crlf_source() {
        let text = "\u{feff}date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits\r\n\
                    2020-08-01,B,3.0,4.0,20,15\r\n";
        let records = parse(text).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].date, "2020-08-01");
        assert_eq!(records[0].exits, "15");
    }

    #[test]
    fn test_missing_header_column_is_malformed() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries
2020-08-01,B,3.0,4.0,20
";
        let err = parse(text).unwrap_err();
        match err {
            PipelineError::MalformedRow { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("exits"));
            }
            other => panic!("Expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_short_row_is_malformed() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits
2020-08-01,B,3.0,4.0,20,15
2020-08-02,C,5.0,6.0,30
";
        let err = parse(text).unwrap_err();
        match err {
            PipelineError::MalformedRow { line, reason } => {
                assert_eq!(line, 3);
                assert!(reason.contains("'exits'"));
            }
            other => panic!("Expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_non_iso_date_is_malformed() {
        let text = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits
08/01/2020,B,3.0,4.0,20,15
";
        let err = parse(text).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedRow { line: 2, .. }));
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let mut bytes = b"date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits\n".to_vec();
        bytes.extend_from_slice(b"2020-08-01,\xff\xfe,3.0,4.0,20,15\n");
        let err = read_from(bytes.as_slice(), Path::new("test.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::MalformedRow { .. }));
    }

    #[test]
    fn test_unreadable_source_is_source_not_found() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = read_records(dir.path()).unwrap_err();
        match err {
            PipelineError::SourceNotFound { path, .. } => assert_eq!(path, dir.path()),
            other => panic!("Expected SourceNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file_is_source_not_found() {
        let err = read_records(Path::new("definitely/not/here/metro.csv")).unwrap_err();
        assert!(matches!(err, PipelineError::SourceNotFound { .. }));
    }
}
