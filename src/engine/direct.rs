//! Direct symmetric summation engine

use crate::core::{FeatureSet, Result};
use crate::kernel::Kernel;
use crate::utils::validation;
use log::debug;

/// Row-at-a-time symmetric summation.
///
/// Walks the strictly-lower triangle of the implicit kernel matrix: for each
/// pair (i, j) with j < i the kernel is evaluated once and the result feeds
/// both accumulator slots, `f[i] += kr·c[j]` and `f[j] += kr·c[i]`. That
/// double-sided update halves the kernel evaluations to n(n-1)/2 — the
/// evaluation count, not the surrounding arithmetic, dominates the cost.
///
/// The diagonal is never evaluated: `f[i]` receives `c[i]` directly, which
/// models an implicit unit diagonal K[i][i] = 1.
///
/// The double-sided write means two different loop positions touch the same
/// accumulator slot, so a parallel split over rows or pairs must reduce
/// per-worker partial accumulators instead of sharing this buffer.
pub struct DirectSummation<K: Kernel> {
    kernel: K,
}

impl<K: Kernel> DirectSummation<K> {
    /// Create a direct engine with the given kernel
    pub fn new(kernel: K) -> Self {
        Self { kernel }
    }

    /// Accumulate kernel-weighted sums into `accumulator`.
    ///
    /// The accumulator is zeroed here as part of the contract; callers do
    /// not need to clear it first. All three buffers must agree on length,
    /// and the accumulator must not alias the inputs.
    pub fn accumulate(
        &self,
        features: &FeatureSet,
        coefficients: &[f64],
        accumulator: &mut [f64],
    ) -> Result<()> {
        validation::check_buffer_lengths(features, coefficients, accumulator)?;

        let n = features.len();
        debug!("direct summation over {n} vectors ({} pairs)", n * n.saturating_sub(1) / 2);

        accumulator.fill(0.0);
        for i in 0..n {
            accumulator[i] += coefficients[i];
            for j in 0..i {
                let kr = self.kernel.compute(features.get(i), features.get(j));
                accumulator[i] += kr * coefficients[j];
                accumulator[j] += kr * coefficients[i];
            }
        }

        Ok(())
    }
}
