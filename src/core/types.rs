//! Core type definitions for kernel summation

use crate::core::error::{KernelSumError, Result};

/// Number of components in every feature vector.
///
/// Fixed at compile time so the vector layout is a flat array with no
/// per-instance length bookkeeping.
pub const DIM: usize = 100;

/// A single data point: a fixed-dimension vector of `DIM` doubles.
///
/// The representation is 32-byte aligned so the component array can be
/// loaded with aligned vector instructions. Instances are immutable once
/// filled; one instance exists per data point.
#[derive(Clone, Debug, PartialEq)]
#[repr(align(32))]
pub struct FeatureVector {
    components: [f64; DIM],
}

impl FeatureVector {
    /// Create a feature vector from a full component array
    pub fn new(components: [f64; DIM]) -> Self {
        Self { components }
    }

    /// Create a feature vector with all components zero
    pub fn zeros() -> Self {
        Self {
            components: [0.0; DIM],
        }
    }

    /// Create a feature vector from a slice of exactly `DIM` values
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        if values.len() != DIM {
            return Err(KernelSumError::DimensionMismatch {
                expected: DIM,
                actual: values.len(),
            });
        }
        let mut components = [0.0; DIM];
        components.copy_from_slice(values);
        Ok(Self { components })
    }

    /// Components as a slice
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Component at position `d`
    ///
    /// # Panics
    /// Panics if `d >= DIM`
    pub fn get(&self, d: usize) -> f64 {
        self.components[d]
    }
}

/// An ordered, read-only collection of feature vectors, indexed 0..n-1.
///
/// Created once at startup and only read thereafter; it is safe to share
/// across threads by reference.
#[derive(Clone, Debug, Default)]
pub struct FeatureSet {
    vectors: Vec<FeatureVector>,
}

impl FeatureSet {
    /// Create an empty feature set
    pub fn new() -> Self {
        Self {
            vectors: Vec::new(),
        }
    }

    /// Create a feature set from prebuilt vectors
    pub fn from_vectors(vectors: Vec<FeatureVector>) -> Self {
        Self { vectors }
    }

    /// Create a feature set from raw rows, validating each row's length
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let vectors = rows
            .iter()
            .map(|row| FeatureVector::from_slice(row))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { vectors })
    }

    /// Append a vector during initial construction
    pub fn push(&mut self, vector: FeatureVector) {
        self.vectors.push(vector);
    }

    /// Number of feature vectors
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Vector at index `i`
    ///
    /// # Panics
    /// Panics if `i >= len()`
    pub fn get(&self, i: usize) -> &FeatureVector {
        &self.vectors[i]
    }

    /// Iterate over the vectors in index order
    pub fn iter(&self) -> std::slice::Iter<'_, FeatureVector> {
        self.vectors.iter()
    }
}

/// Strategy used to enumerate the unordered index pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SummationStrategy {
    /// Row-at-a-time symmetric double loop over the lower triangle
    Direct,
    /// Tiled enumeration over fixed-size index blocks for cache locality
    #[default]
    Blocked,
}

/// Configuration for the summation engine
#[derive(Debug, Clone)]
pub struct SummationConfig {
    /// Pair enumeration strategy
    pub strategy: SummationStrategy,
    /// Block edge length for the blocked strategy (must be >= 1)
    pub block_size: usize,
}

/// Default block size for the blocked strategy.
///
/// Small enough that two blocks of `DIM`-component vectors stay resident in
/// L1 while all cross-pairs between them are evaluated.
pub const DEFAULT_BLOCK_SIZE: usize = 10;

impl Default for SummationConfig {
    fn default() -> Self {
        Self {
            strategy: SummationStrategy::default(),
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}
