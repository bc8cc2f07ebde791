//! Cache-blocked summation engine

use crate::core::{FeatureSet, Result};
use crate::kernel::Kernel;
use crate::utils::validation;
use log::debug;

/// Tiled symmetric summation.
///
/// Partitions the index range [0, n) into contiguous blocks of `block_size`
/// indices and enumerates the same unordered pairs as
/// [`DirectSummation`](crate::engine::DirectSummation), block by block: each
/// block is first paired with itself (a self-contained triangle walk), then
/// with every earlier block (all cross-pairs between the two). While a block
/// pair is being processed only 2·`block_size` feature vectors are touched,
/// so they stay cache-resident across `block_size`² kernel evaluations.
///
/// For any block size >= 1 the output matches the direct engine up to
/// floating-point summation order, since only the enumeration order of the
/// pair set changes. The final block may be shorter than `block_size`; every
/// step operates on actual remaining length.
#[derive(Debug)]
pub struct BlockedSummation<K: Kernel> {
    kernel: K,
    block_size: usize,
}

impl<K: Kernel> BlockedSummation<K> {
    /// Create a blocked engine with the given kernel and block size.
    ///
    /// Rejects a zero block size before any computation can run.
    pub fn new(kernel: K, block_size: usize) -> Result<Self> {
        validation::check_block_size(block_size)?;
        Ok(Self { kernel, block_size })
    }

    /// Get the configured block size
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Accumulate kernel-weighted sums into `accumulator`.
    ///
    /// The accumulator is zeroed once here, before any block is processed.
    /// The per-block steps below only ever add to it; the diagonal step in
    /// particular depends on the buffer having been cleared globally.
    pub fn accumulate(
        &self,
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &mut [f64],
    ) -> Result<()> {
        validation::check_buffer_lengths(features, coefficients, accumulator)?;

        let n = features.len();
        let b = self.block_size;
        debug!("blocked summation over {n} vectors, block size {b}");

        accumulator.fill(0.0);
        let mut block_start = 0;
        while block_start < n {
            let block_end = usize::min(block_start + b, n);
            self.diagonal_block(features, coefficients, accumulator, block_start, block_end);

            let mut earlier_start = 0;
            while earlier_start < block_start {
                let earlier_end = usize::min(earlier_start + b, block_start);
                self.off_diagonal_block(
                    features,
                    coefficients,
                    accumulator,
                    block_start..block_end,
                    earlier_start..earlier_end,
                );
                earlier_start += b;
            }

            block_start += b;
        }

        Ok(())
    }

    /// Pair one block with itself: the triangle walk restricted to
    /// [start, end). Adds into the accumulator without clearing it.
    fn diagonal_block(
        &self,
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &mut [f64],
        start: usize,
        end: usize,
    ) {
        for i in start..end {
            accumulator[i] += coefficients[i];
            for j in start..i {
                let kr = self.kernel.compute(features.get(i), features.get(j));
                accumulator[i] += kr * coefficients[j];
                accumulator[j] += kr * coefficients[i];
            }
        }
    }

    /// Pair two distinct blocks: every cross-pair (p, q) evaluated once,
    /// feeding both slots. Each side's slot takes the kernel value weighted
    /// by the partner's coefficient.
    fn off_diagonal_block(
        &self,
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &mut [f64],
        rows: std::ops::Range<usize>,
        cols: std::ops::Range<usize>,
    ) {
        for p in rows {
            for q in cols.clone() {
                let kr = self.kernel.compute(features.get(p), features.get(q));
                accumulator[p] += kr * coefficients[q];
                accumulator[q] += kr * coefficients[p];
            }
        }
    }
}
