//! Ridership record types.
//!
//! An `InputRecord` holds the six source columns the pipeline cares about,
//! exactly as they appeared in the file. An `OutputRecord` is the projected
//! row written to the destination; its field order is the column order.
//!
//! No value is ever parsed as a number. Coordinates and counts keep their
//! original text, including leading zeros and trailing precision.

use chrono::NaiveDate;
use serde::Serialize;

/// Source columns every row must provide.
pub const REQUIRED_FIELDS: [&str; 6] = [
    "date",
    "stop_name",
    "gtfs_longitude",
    "gtfs_latitude",
    "entries",
    "exits",
];

/// Destination header, in column order.
pub const OUTPUT_HEADER: [&str; 7] = [
    "id",
    "date",
    "stop_name",
    "gtfs_longitude",
    "gtfs_latitude",
    "entries",
    "exits",
];

/// One source row, reduced to the required columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputRecord {
    pub date: String,
    pub stop_name: String,
    pub gtfs_longitude: String,
    pub gtfs_latitude: String,
    pub entries: String,
    pub exits: String,
}

/// One destination row.
///
/// Declaration order matters: `csv::Writer::serialize` emits fields in the
/// order they are declared here, which must match `OUTPUT_HEADER`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub date: String,
    pub stop_name: String,
    pub gtfs_longitude: String,
    pub gtfs_latitude: String,
    pub entries: String,
    pub exits: String,
}

impl OutputRecord {
    /// Project an input row, deriving `id` from its coordinates.
    ///
    /// The id is longitude followed by latitude with no separator, so two
    /// different stops can end up sharing one.
    pub fn from_input(input: InputRecord) -> Self {
        let id = format!("{}{}", input.gtfs_longitude, input.gtfs_latitude);
        Self {
            id,
            date: input.date,
            stop_name: input.stop_name,
            gtfs_longitude: input.gtfs_longitude,
            gtfs_latitude: input.gtfs_latitude,
            entries: input.entries,
            exits: input.exits,
        }
    }
}

/// Check that `s` is an ISO-8601 calendar date written as `YYYY-MM-DD`.
///
/// Lexicographic comparison of dates is only order-preserving for this exact
/// shape, so anything else (`8/1/2020`, `2020-8-1`, `2020-02-30`) is refused.
pub fn is_iso_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return false;
    }

    let (Ok(year), Ok(month), Ok(day)) = (
        s[0..4].parse::<i32>(),
        s[5..7].parse::<u32>(),
        s[8..10].parse::<u32>(),
    ) else {
        return false;
    };
    NaiveDate::from_ymd_opt(year, month, day).is_some()
}
