//! Filter+Project and Sort stages.
//!
//! Dates are compared as plain strings. Ingest only admits `YYYY-MM-DD`
//! values, for which string order and calendar order agree.

use tracing::debug;

use crate::record::{InputRecord, OutputRecord};

/// Keep records dated on or after `threshold` and project them.
///
/// Surviving records keep their source order. Dropped records produce
/// neither output nor an error.
pub fn filter_project(records: Vec<InputRecord>, threshold: &str) -> Vec<OutputRecord> {
    let total = records.len();
    let kept: Vec<OutputRecord> = records
        .into_iter()
        .filter(|r| r.date.as_str() >= threshold)
        .map(OutputRecord::from_input)
        .collect();
    debug!(threshold, kept = kept.len(), dropped = total - kept.len(), "filtered records");
    kept
}

/// Sort by date, ascending.
///
/// `sort_by` is stable, so equal dates keep their relative order.
pub fn sort_by_date(records: &mut [OutputRecord]) {
    records.sort_by(|a, b| a.date.cmp(&b.date));
}
