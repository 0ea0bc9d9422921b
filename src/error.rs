//! Error type for the ridership pipeline.
//!
//! Every failure is fatal: the pipeline never recovers from an error, it
//! surfaces it to the caller and stops before anything else is written.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source file does not exist or could not be read.
    #[error("cannot read source '{}': {source}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A row lacks a required field or carries an unusable value.
    ///
    /// `line` is 1-based and counts the header as line 1.
    #[error("malformed row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },

    /// The destination could not be created or written.
    #[error("cannot write destination '{}': {source}", path.display())]
    DestinationUnwritable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl PipelineError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        Self::MalformedRow {
            line,
            reason: reason.into(),
        }
    }
}
