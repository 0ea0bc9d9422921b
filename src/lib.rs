//! # metro-pipeline
//!
//! Cleans a transit ridership export for charting.
//!
//! The pipeline reads `metro.csv`, keeps rows dated on or after
//! `2020-08-01`, derives an `id` from each stop's coordinates, sorts by date
//! and writes `output/metro.csv`.
//!
//! ## Stages
//!
//! - **Ingest**: load every row, addressing columns by header name
//! - **Filter+Project**: drop early rows, build the seven-column output row
//! - **Sort**: stable ascending sort on the date string
//! - **Emit**: write header and rows as comma-delimited text
//!
//! Any failure aborts the run. Nothing is written unless the source was read
//! in full.
//!
//! ## Example
//!
//! ```
//! use metro_pipeline::{RecordPipeline, read_from};
//! use std::path::Path;
//!
//! let csv = "date,stop_name,gtfs_longitude,gtfs_latitude,entries,exits
//! 2020-07-31,A,1.0,2.0,10,5
//! 2020-08-01,B,3.0,4.0,20,15
//! ";
//!
//! let input = read_from(csv.as_bytes(), Path::new("metro.csv")).unwrap();
//! let output = RecordPipeline::default().process(input);
//!
//! assert_eq!(output.len(), 1);
//! assert_eq!(output[0].id, "3.04.0");
//! ```

pub mod config;
pub mod emit;
pub mod error;
pub mod ingest;
pub mod pipeline;
pub mod record;
pub mod transform;

pub use config::{DATE_THRESHOLD, DESTINATION_PATH, PipelineConfig, SOURCE_PATH};
pub use emit::{write_records, write_to};
pub use error::PipelineError;
pub use ingest::{ColumnIndex, read_from, read_records};
pub use pipeline::{PipelineSummary, RecordPipeline};
pub use record::{InputRecord, OUTPUT_HEADER, OutputRecord, REQUIRED_FIELDS, is_iso_date};
pub use transform::{filter_project, sort_by_date};
