//! Error types.
//!
//! A single `thiserror`-derived enum covers every failure the workspace can
//! report. Model constructors validate their inputs up front and return
//! `Err` instead of producing a half-built object; there is no recovery path
//! once a model has been rejected.

use thiserror::Error;

/// The top-level error type.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A requested operation is not valid for the object's current inputs
    /// (e.g. a simulation window the model cannot serve).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Model parameters are malformed; the model cannot be built.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// Date construction or arithmetic went out of range.
    #[error("date error: {0}")]
    Date(String),

    /// A single argument failed to parse or validate.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use ql_core::{ensure, errors::Error};
/// fn window(start: i32, end: i32) -> ql_core::Result<i32> {
///     ensure!(start <= end, "start {start} after end {end}");
///     Ok(end - start)
/// }
/// assert_eq!(window(1, 3), Ok(2));
/// assert!(matches!(window(3, 1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Configuration(...))` if `$cond` is false.
///
/// Used by model constructors to reject malformed parameters.
///
/// # Example
/// ```
/// use ql_core::{ensure_config, errors::Error};
/// fn scale(max_loss: f64) -> ql_core::Result<f64> {
///     ensure_config!(max_loss > 0.0, "max loss must be positive, got {max_loss}");
///     Ok(max_loss)
/// }
/// assert!(scale(100.0).is_ok());
/// assert!(matches!(scale(-1.0), Err(Error::Configuration(_))));
/// ```
#[macro_export]
macro_rules! ensure_config {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Configuration(
                format!($($msg)*)
            ));
        }
    };
}
