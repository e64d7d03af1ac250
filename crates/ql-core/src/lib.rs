//! # ql-core
//!
//! Core types and error definitions shared by every crate in the workspace:
//! the numeric type aliases and the error enum with its `ensure!` family of
//! macros.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and the `ensure!` / `ensure_config!` macros.
pub mod errors;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for sizes, counts and indices.
pub type Size = usize;

/// A time measurement in years.
pub type Time = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
