//! Fixed pipeline settings.

use std::path::PathBuf;

/// Source file, relative to the working directory.
pub const SOURCE_PATH: &str = "metro.csv";

/// Destination file. Its directory must already exist.
pub const DESTINATION_PATH: &str = "output/metro.csv";

/// Earliest date kept, compared as a string.
pub const DATE_THRESHOLD: &str = "2020-08-01";

/// Paths and threshold used by a `RecordPipeline`.
///
/// `Default` gives the fixed values the `metro-clean` binary runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub threshold: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(SOURCE_PATH),
            destination: PathBuf::from(DESTINATION_PATH),
            threshold: DATE_THRESHOLD.to_string(),
        }
    }
}

impl PipelineConfig {
    /// Same threshold as the default, different files.
    pub fn with_paths(source: impl Into<PathBuf>, destination: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            destination: destination.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_fixed_values() {
        let config = PipelineConfig::default();
        assert_eq!(config.source, PathBuf::from("metro.csv"));
        assert_eq!(config.destination, PathBuf::from("output/metro.csv"));
        assert_eq!(config.threshold, "2020-08-01");
    }

    #[test]
    fn test_with_paths_keeps_threshold() {
        let config = PipelineConfig::with_paths("in.csv", "out/in.csv");
        assert_eq!(config.source, PathBuf::from("in.csv"));
        assert_eq!(config.destination, PathBuf::from("out/in.csv"));
        assert_eq!(config.threshold, DATE_THRESHOLD);
    }
}
