//! Rust implementation of dense Gaussian kernel summation
//!
//! Computes f[i] = c[i] + Σ_{j≠i} k(x_i, x_j)·c[j] for the Gaussian radial
//! kernel k(x, y) = exp(-‖x-y‖²/2), evaluating each unordered pair exactly
//! once and offering a cache-blocked enumeration of the pair set.

pub mod api;
pub mod core;
pub mod data;
pub mod engine;
pub mod kernel;
pub mod report;
pub mod utils;

// Re-export main types for convenience
pub use crate::api::KernelSum;
pub use crate::core::error::{KernelSumError, Result};
pub use crate::core::types::*;
pub use crate::engine::{BlockedSummation, DirectSummation};
pub use crate::kernel::{GaussianKernel, Kernel};
pub use crate::report::RunReport;
pub use crate::utils::AccumulatorSummary;

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
