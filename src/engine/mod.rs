//! Summation engines
//!
//! Both engines compute f[i] = c[i] + Σ_{j≠i} k(x_i, x_j)·c[j] over the same
//! set of unordered index pairs; they differ only in enumeration order. The
//! direct engine walks the strictly-lower triangle row by row, the blocked
//! engine tiles the triangle into fixed-size index blocks for cache locality.

pub mod blocked;
pub mod direct;

pub use self::blocked::BlockedSummation;
pub use self::direct::DirectSummation;
