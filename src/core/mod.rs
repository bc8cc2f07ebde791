//! Core types for kernel summation

pub mod error;
pub mod types;

pub use self::error::*;
pub use self::types::*;
