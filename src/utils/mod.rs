//! Utility functions for summation runs

use crate::core::FeatureSet;

/// Precondition checks shared by the summation engines
pub mod validation {
    use super::*;
    use crate::core::{KernelSumError, Result};

    /// Verify that the three engine buffers agree on n.
    ///
    /// Runs before any accumulation so a mismatch is rejected outright
    /// rather than silently truncated or padded.
    pub fn check_buffer_lengths(
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &[f64],
    ) -> Result<()> {
        if features.len() != coefficients.len() || features.len() != accumulator.len() {
            return Err(KernelSumError::BufferLengthMismatch {
                features: features.len(),
                coefficients: coefficients.len(),
                accumulator: accumulator.len(),
            });
        }
        Ok(())
    }

    /// Verify that a block size is usable (>= 1)
    pub fn check_block_size(block_size: usize) -> Result<()> {
        if block_size < 1 {
            return Err(KernelSumError::InvalidBlockSize(block_size));
        }
        Ok(())
    }
}

/// Summary statistics over accumulator buffers
pub mod stats {
    use super::AccumulatorSummary;

    /// Plain sum of all accumulator entries.
    ///
    /// Cheap order-dependent digest of a run's output, printed by the CLI
    /// so two runs over the same inputs can be compared at a glance.
    pub fn checksum(values: &[f64]) -> f64 {
        values.iter().sum()
    }

    /// Compute summary statistics for an accumulator buffer
    pub fn summarize(values: &[f64]) -> AccumulatorSummary {
        if values.is_empty() {
            return AccumulatorSummary::default();
        }

        let sum = checksum(values);
        let min = values.iter().fold(f64::INFINITY, |a, &b| a.min(b));
        let max = values.iter().fold(f64::NEG_INFINITY, |a, &b| a.max(b));

        AccumulatorSummary {
            sum,
            min,
            max,
            mean: sum / values.len() as f64,
            len: values.len(),
        }
    }

    /// Largest per-index relative deviation between two equal-length buffers.
    ///
    /// The deviation at index i is |a[i] - b[i]| / max(|a[i]|, |b[i]|), with
    /// exact agreement (including 0 vs 0) counting as zero deviation.
    ///
    /// # Panics
    /// Panics if the buffers have different lengths
    pub fn max_relative_deviation(a: &[f64], b: &[f64]) -> f64 {
        assert_eq!(a.len(), b.len(), "Buffers must have same length");

        a.iter()
            .zip(b.iter())
            .map(|(&x, &y)| {
                if x == y {
                    0.0
                } else {
                    (x - y).abs() / x.abs().max(y.abs())
                }
            })
            .fold(0.0, f64::max)
    }
}

/// Summary statistics for an accumulator buffer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatorSummary {
    pub sum: f64,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub len: usize,
}
