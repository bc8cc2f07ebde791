//! High-level API for kernel summation
//!
//! This module provides a user-friendly interface over the summation
//! engines, with a builder for choosing the kernel, the enumeration
//! strategy, and the block size.
//!
//! # Quick Start
//!
//! ```rust
//! use kernsum::api::KernelSum;
//! use kernsum::core::{FeatureSet, FeatureVector};
//!
//! # fn main() -> kernsum::Result<()> {
//! let features = FeatureSet::from_vectors(vec![
//!     FeatureVector::zeros(),
//!     FeatureVector::zeros(),
//! ]);
//! let coefficients = vec![1.0, 2.0];
//!
//! let output = KernelSum::new()
//!     .with_block_size(16)
//!     .compute(&features, &coefficients)?;
//! assert_eq!(output.len(), 2);
//! # Ok(())
//! # }
//! ```

use crate::core::{FeatureSet, Result, SummationConfig, SummationStrategy};
use crate::engine::{BlockedSummation, DirectSummation};
use crate::kernel::{GaussianKernel, Kernel};

/// High-level summation interface with builder pattern
pub struct KernelSum<K: Kernel = GaussianKernel> {
    kernel: K,
    config: SummationConfig,
}

impl KernelSum<GaussianKernel> {
    /// Create a summation with the standard Gaussian kernel and defaults
    pub fn new() -> Self {
        Self {
            kernel: GaussianKernel::standard(),
            config: SummationConfig::default(),
        }
    }
}

impl Default for KernelSum<GaussianKernel> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Kernel + Clone> KernelSum<K> {
    /// Create a summation with a custom kernel
    pub fn with_kernel(kernel: K) -> Self {
        Self {
            kernel,
            config: SummationConfig::default(),
        }
    }

    /// Set the pair enumeration strategy
    pub fn with_strategy(mut self, strategy: SummationStrategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    /// Set the block size used by the blocked strategy
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.config.block_size = block_size;
        self
    }

    /// Compute the kernel-weighted sums, allocating the output vector
    pub fn compute(&self, features: &FeatureSet, coefficients: &[f64]) -> Result<Vec<f64>> {
        let mut accumulator = vec![0.0; features.len()];
        self.compute_into(features, coefficients, &mut accumulator)?;
        Ok(accumulator)
    }

    /// Compute the kernel-weighted sums into a caller-owned buffer.
    ///
    /// The buffer is zeroed by the engine; its prior contents are ignored.
    pub fn compute_into(
        &self,
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &mut [f64],
    ) -> Result<()> {
        match self.config.strategy {
            SummationStrategy::Direct => DirectSummation::new(self.kernel.clone())
                .accumulate(features, coefficients, accumulator),
            SummationStrategy::Blocked => {
                BlockedSummation::new(self.kernel.clone(), self.config.block_size)?
                    .accumulate(features, coefficients, accumulator)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FeatureVector, KernelSumError, DIM};

    fn small_set(n: usize) -> FeatureSet {
        let mut set = FeatureSet::new();
        for i in 0..n {
            let mut components = [0.0; DIM];
            components[i % DIM] = i as f64 * 0.1;
            set.push(FeatureVector::new(components));
        }
        set
    }

    #[test]
    fn test_builder_defaults() {
        let features = small_set(3);
        let coefficients = vec![1.0, 2.0, 3.0];

        let output = KernelSum::new().compute(&features, &coefficients).unwrap();
        assert_eq!(output.len(), 3);
    }

    #[test]
    fn test_strategies_agree() {
        let features = small_set(6);
        let coefficients: Vec<f64> = (0..6).map(|i| (i as f64) - 2.5).collect();

        let direct = KernelSum::new()
            .with_strategy(SummationStrategy::Direct)
            .compute(&features, &coefficients)
            .unwrap();
        let blocked = KernelSum::new()
            .with_strategy(SummationStrategy::Blocked)
            .with_block_size(4)
            .compute(&features, &coefficients)
            .unwrap();

        for (d, b) in direct.iter().zip(blocked.iter()) {
            assert!((d - b).abs() <= 1e-12 * d.abs().max(b.abs()).max(1.0));
        }
    }

    #[test]
    fn test_custom_kernel() {
        let features = small_set(2);
        let coefficients = vec![1.0, 1.0];

        let wide = KernelSum::with_kernel(GaussianKernel::new(0.01))
            .compute(&features, &coefficients)
            .unwrap();
        let narrow = KernelSum::with_kernel(GaussianKernel::new(10.0))
            .compute(&features, &coefficients)
            .unwrap();

        // A wider kernel weights the off-diagonal pair more heavily
        assert!(wide[0] > narrow[0]);
    }

    #[test]
    fn test_invalid_block_size_surfaces() {
        let features = small_set(2);
        let err = KernelSum::new()
            .with_block_size(0)
            .compute(&features, &[1.0, 1.0])
            .unwrap_err();
        assert!(matches!(err, KernelSumError::InvalidBlockSize(0)));
    }

    #[test]
    fn test_compute_into_reuses_buffer() {
        let features = small_set(4);
        let coefficients = vec![1.0; 4];
        let mut buffer = vec![f64::NAN; 4];

        KernelSum::new()
            .compute_into(&features, &coefficients, &mut buffer)
            .unwrap();
        assert!(buffer.iter().all(|f| f.is_finite()));
    }
}
