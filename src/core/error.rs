//! Error types for kernel summation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum KernelSumError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error(
        "buffer length mismatch: {features} feature vectors, \
         {coefficients} coefficients, {accumulator} accumulator slots"
    )]
    BufferLengthMismatch {
        features: usize,
        coefficients: usize,
        accumulator: usize,
    },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("invalid block size: {0} (block size must be at least 1)")]
    InvalidBlockSize(usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(String),
}

pub type Result<T> = std::result::Result<T, KernelSumError>;
