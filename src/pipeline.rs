//! The record pipeline: Ingest, Filter+Project, Sort, Emit.
//!
//! Each stage runs to completion over the whole data set before the next
//! starts. The destination is only opened once ingest has succeeded, so a
//! malformed source never leaves a partial output file behind.

use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::emit::write_records;
use crate::error::PipelineError;
use crate::ingest::read_records;
use crate::record::{InputRecord, OutputRecord};
use crate::transform::{filter_project, sort_by_date};

/// Record counts from one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PipelineSummary {
    pub rows_read: usize,
    pub rows_kept: usize,
    pub rows_dropped: usize,
}

/// Batch pipeline over a ridership CSV.
#[derive(Debug, Clone, Default)]
pub struct RecordPipeline {
    config: PipelineConfig,
}

impl RecordPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Filter, project and sort records already in memory.
    pub fn process(&self, records: Vec<InputRecord>) -> Vec<OutputRecord> {
        let mut output = filter_project(records, &self.config.threshold);
        sort_by_date(&mut output);
        output
    }

    /// Run every stage against the configured files.
    pub fn run(&self) -> Result<PipelineSummary, PipelineError> {
        debug!(source = %self.config.source.display(), "reading source");
        let input = read_records(&self.config.source)?;
        let rows_read = input.len();

        let output = self.process(input);
        let summary = PipelineSummary {
            rows_read,
            rows_kept: output.len(),
            rows_dropped: rows_read - output.len(),
        };

        write_records(&self.config.destination, &output)?;

        info!(
            destination = %self.config.destination.display(),
            rows_read = summary.rows_read,
            rows_kept = summary.rows_kept,
            rows_dropped = summary.rows_dropped,
            "pipeline complete"
        );
        Ok(summary)
    }
}
