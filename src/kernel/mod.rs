//! Kernel functions for pairwise summation

pub mod rbf;
pub mod traits;

pub use self::rbf::*;
pub use self::traits::*;
