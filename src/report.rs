//! Run reporting and persistence
//!
//! This module captures the outcome of a summation run (timing, checksum,
//! parameters) in a serializable form for the CLI application and other
//! scenarios where runs need to be recorded and compared later.

use crate::core::{KernelSumError, Result, SummationStrategy};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Record of one summation run
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunReport {
    /// Enumeration strategy used ("direct" or "blocked")
    pub strategy: String,
    /// Number of feature vectors
    pub n: usize,
    /// Vector dimensionality
    pub dim: usize,
    /// Block size, present for blocked runs
    pub block_size: Option<usize>,
    /// RNG seed the inputs were generated from
    pub seed: u64,
    /// Wall-clock duration of the accumulate call, in seconds
    pub elapsed_seconds: f64,
    /// Sum of all accumulator entries
    pub checksum: f64,
    /// Report metadata
    pub metadata: ReportMetadata,
}

/// Report metadata for tracking and validation
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ReportMetadata {
    /// Library version used to produce the run
    pub library_version: String,
    /// Creation timestamp
    pub created_at: String,
}

impl RunReport {
    /// Create a report for a finished run
    pub fn new(
        strategy: SummationStrategy,
        n: usize,
        dim: usize,
        block_size: Option<usize>,
        seed: u64,
        elapsed_seconds: f64,
        checksum: f64,
    ) -> Self {
        let strategy = match strategy {
            SummationStrategy::Direct => "direct",
            SummationStrategy::Blocked => "blocked",
        };
        Self {
            strategy: strategy.to_string(),
            n,
            dim,
            block_size,
            seed,
            elapsed_seconds,
            checksum,
            metadata: ReportMetadata {
                library_version: env!("CARGO_PKG_VERSION").to_string(),
                created_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    /// Save report to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path).map_err(KernelSumError::IoError)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| KernelSumError::SerializationError(e.to_string()))?;
        Ok(())
    }

    /// Load report from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path).map_err(KernelSumError::IoError)?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| KernelSumError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample_report() -> RunReport {
        RunReport::new(
            SummationStrategy::Blocked,
            1000,
            100,
            Some(10),
            42,
            0.125,
            512.5,
        )
    }

    #[test]
    fn test_report_fields() {
        let report = sample_report();
        assert_eq!(report.strategy, "blocked");
        assert_eq!(report.n, 1000);
        assert_eq!(report.dim, 100);
        assert_eq!(report.block_size, Some(10));
        assert_eq!(report.metadata.library_version, env!("CARGO_PKG_VERSION"));
        assert!(!report.metadata.created_at.is_empty());
    }

    #[test]
    fn test_direct_strategy_has_no_block_size() {
        let report = RunReport::new(SummationStrategy::Direct, 10, 100, None, 0, 0.001, 1.0);
        assert_eq!(report.strategy, "direct");
        assert_eq!(report.block_size, None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let report = sample_report();
        let file = NamedTempFile::new().expect("Failed to create temp file");

        report.save_to_file(file.path()).unwrap();
        let loaded = RunReport::load_from_file(file.path()).unwrap();

        assert_eq!(loaded.strategy, report.strategy);
        assert_eq!(loaded.n, report.n);
        assert_eq!(loaded.block_size, report.block_size);
        assert_eq!(loaded.seed, report.seed);
        assert_eq!(loaded.elapsed_seconds, report.elapsed_seconds);
        assert_eq!(loaded.checksum, report.checksum);
    }

    #[test]
    fn test_load_missing_file() {
        let result = RunReport::load_from_file("/nonexistent/report.json");
        assert!(matches!(result, Err(KernelSumError::IoError(_))));
    }
}
