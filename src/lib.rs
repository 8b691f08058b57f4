//! # u-numkit
//!
//! Validated numeric utilities for the U-Engine ecosystem.
//!
//! Each function takes plain scalars, validates them up front, and either
//! returns a value derived by a fixed formula or a [`NumericError`]. There
//! is no shared state: every function is safe to call from any thread.
//!
//! ## Modules
//!
//! - [`geometry`] — areas, lengths, distances and angles
//! - [`arith`] — averages, linear roots, powers, extrema
//! - [`integer`] — primality, Fibonacci, digit sums, powers of two
//! - [`rounding`] — floor/ceil/round/trunc and rounding to powers of ten
//! - [`format`] — radix, fixed, exponential and precision notation
//! - [`value`] — dynamically typed scalars, coercion and string parsing
//! - [`random`] — random integers in a closed range
//!
//! ## Errors
//!
//! [`NumericError::TypeMismatch`] marks an argument of the wrong kind (NaN
//! where a number is required, a string where a number is required, and so
//! on). [`NumericError::InvalidValue`] marks an argument of the right kind
//! outside the allowed domain. A few functions return NaN or a caller
//! supplied default instead of failing; their docs say so.
//!
//! ## Logging
//!
//! Rejected arguments are reported through `tracing` at `debug` level.
//! Install a subscriber to see them.

pub mod arith;
pub mod error;
pub mod format;
pub mod geometry;
pub mod integer;
pub mod random;
pub mod rounding;
pub mod value;

pub use error::{NumericError, Result};
