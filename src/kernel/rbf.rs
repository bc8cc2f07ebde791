//! Gaussian RBF kernel implementation
//!
//! The Gaussian kernel is defined as: K(x, y) = exp(-γ * ||x - y||²)
//! where γ (gamma) controls the kernel width. With the default γ = 1/2 this
//! is exactly exp(-||x - y||²/2), the standard radial affinity score.

use crate::core::FeatureVector;
use crate::kernel::Kernel;

/// Gaussian kernel: K(x, y) = exp(-γ * ||x - y||²)
///
/// The gamma parameter controls the "reach" of each data point:
/// - High gamma: only close points have noticeable affinity
/// - Low gamma: distant points still contribute
#[derive(Debug, Clone, Copy)]
pub struct GaussianKernel {
    gamma: f64,
}

impl GaussianKernel {
    /// Create a new Gaussian kernel with specified gamma parameter
    ///
    /// # Panics
    /// Panics if gamma is not positive
    pub fn new(gamma: f64) -> Self {
        assert!(gamma > 0.0, "Gamma must be positive, got: {}", gamma);
        Self { gamma }
    }

    /// Create the standard-width Gaussian kernel exp(-||x - y||²/2)
    pub fn standard() -> Self {
        Self::new(0.5)
    }

    /// Get the gamma parameter
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

impl Default for GaussianKernel {
    /// Default Gaussian kernel with gamma = 1/2
    fn default() -> Self {
        Self::standard()
    }
}

impl Kernel for GaussianKernel {
    fn compute(&self, x: &FeatureVector, y: &FeatureVector) -> f64 {
        (-self.gamma * squared_euclidean_distance(x, y)).exp()
    }
}

/// Compute squared Euclidean distance between two feature vectors
///
/// ||x - y||² = Σ_d (x[d] - y[d])²
///
/// Total over finite inputs with no failure modes. Both vectors have the
/// same compile-time length, so the loop has a fixed trip count and
/// contiguous aligned accesses.
#[inline]
pub fn squared_euclidean_distance(x: &FeatureVector, y: &FeatureVector) -> f64 {
    x.as_slice()
        .iter()
        .zip(y.as_slice().iter())
        .map(|(&a, &b)| {
            let diff = a - b;
            diff * diff
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DIM;

    fn basis_vector(d: usize, value: f64) -> FeatureVector {
        let mut components = [0.0; DIM];
        components[d] = value;
        FeatureVector::new(components)
    }

    #[test]
    fn test_gaussian_kernel_creation() {
        let kernel = GaussianKernel::new(0.25);
        assert_eq!(kernel.gamma(), 0.25);

        let standard = GaussianKernel::standard();
        assert_eq!(standard.gamma(), 0.5);

        let default = GaussianKernel::default();
        assert_eq!(default.gamma(), 0.5);
    }

    #[test]
    #[should_panic(expected = "Gamma must be positive")]
    fn test_gaussian_kernel_invalid_gamma() {
        GaussianKernel::new(-0.5);
    }

    #[test]
    #[should_panic(expected = "Gamma must be positive")]
    fn test_gaussian_kernel_zero_gamma() {
        GaussianKernel::new(0.0);
    }

    #[test]
    fn test_gaussian_kernel_identical_vectors() {
        let kernel = GaussianKernel::standard();
        let x = basis_vector(0, 3.0);

        // K(x, x) is always 1 for a Gaussian kernel
        assert!((kernel.compute(&x, &x) - 1.0).abs() < 1e-15);
    }

    #[test]
    fn test_gaussian_kernel_known_value() {
        let kernel = GaussianKernel::standard();
        let x = basis_vector(0, 1.0);
        let y = basis_vector(0, 3.0);

        // ||x - y||² = (1 - 3)² = 4, K = exp(-4/2)
        let expected = (-2.0_f64).exp();
        assert!((kernel.compute(&x, &y) - expected).abs() < 1e-15);
    }

    #[test]
    fn test_gaussian_kernel_symmetry() {
        let kernel = GaussianKernel::standard();
        let mut a = [0.0; DIM];
        let mut b = [0.0; DIM];
        for d in 0..DIM {
            a[d] = (d as f64) * 0.01;
            b[d] = 1.0 - (d as f64) * 0.02;
        }
        let x = FeatureVector::new(a);
        let y = FeatureVector::new(b);

        // Exact equality: both orders reduce to the same distance sum
        assert_eq!(kernel.compute(&x, &y), kernel.compute(&y, &x));
    }

    #[test]
    fn test_gaussian_kernel_different_gammas() {
        let x = basis_vector(0, 1.0);
        let y = basis_vector(0, 3.0);

        let kernel_low = GaussianKernel::new(0.1);
        let kernel_high = GaussianKernel::new(10.0);

        let result_low = kernel_low.compute(&x, &y);
        let result_high = kernel_high.compute(&x, &y);

        // Lower gamma decays more slowly with distance
        assert!(result_low > result_high);
        assert!((result_low - (-0.1 * 4.0_f64).exp()).abs() < 1e-15);
        assert!((result_high - (-10.0 * 4.0_f64).exp()).abs() < 1e-15);
    }

    #[test]
    fn test_gaussian_kernel_monotone_decay() {
        let kernel = GaussianKernel::standard();
        let x = basis_vector(0, 0.0);
        let k1 = kernel.compute(&x, &basis_vector(0, 1.0));
        let k2 = kernel.compute(&x, &basis_vector(0, 2.0));
        let k3 = kernel.compute(&x, &basis_vector(0, 3.0));

        assert!(k1 > k2);
        assert!(k2 > k3);
        for k in [k1, k2, k3] {
            assert!((0.0..=1.0).contains(&k));
        }
    }

    #[test]
    fn test_squared_euclidean_distance() {
        let mut a = [0.0; DIM];
        let mut b = [0.0; DIM];
        a[0] = 1.0;
        a[2] = 3.0;
        b[2] = 2.0;
        b[3] = 1.0;
        let x = FeatureVector::new(a);
        let y = FeatureVector::new(b);

        // (1-0)² + (3-2)² + (0-1)² = 3
        assert_eq!(squared_euclidean_distance(&x, &y), 3.0);
    }

    #[test]
    fn test_squared_euclidean_distance_identical() {
        let x = basis_vector(5, 2.5);
        assert_eq!(squared_euclidean_distance(&x, &x), 0.0);
    }

    #[test]
    fn test_gaussian_kernel_numerical_stability() {
        let kernel = GaussianKernel::new(1e-6);
        let x = basis_vector(0, 1e6);
        let y = basis_vector(0, -1e6);

        // Huge distances and tiny gamma must not overflow or go negative
        let result = kernel.compute(&x, &y);
        assert!(result.is_finite());
        assert!((0.0..=1.0).contains(&result));
    }
}
