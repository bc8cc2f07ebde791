//! Input generation for summation runs
//!
//! The engines consume prebuilt buffers; this module is the harness side
//! that fills them. Generation is seeded so a run can be reproduced from
//! its report.

use crate::core::{FeatureSet, FeatureVector, DIM};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a reproducible generator from a seed
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate one feature vector with components uniform in [0, 1)
pub fn random_feature_vector(rng: &mut StdRng) -> FeatureVector {
    let mut components = [0.0; DIM];
    for c in components.iter_mut() {
        *c = rng.gen::<f64>();
    }
    FeatureVector::new(components)
}

/// Generate a feature set of `n` random vectors
pub fn random_feature_set(n: usize, rng: &mut StdRng) -> FeatureSet {
    let mut set = FeatureSet::new();
    for _ in 0..n {
        set.push(random_feature_vector(rng));
    }
    set
}

/// Generate `n` coefficients uniform in [0, 1)
pub fn random_coefficients(n: usize, rng: &mut StdRng) -> Vec<f64> {
    (0..n).map(|_| rng.gen::<f64>()).collect()
}
