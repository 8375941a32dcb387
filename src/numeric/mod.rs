// ============================================================================
// Numeric Module
// Float-backed currency/score values with host-number semantics
// ============================================================================
//
// This module provides:
// - NumericValue: immutable wrapper around one f64 magnitude
// - NumericInput: the closed set of shapes a value can be built from
// - RoundingMode: the nine rounding enumerants (five share half-away-from-zero)
// - NumericError: the single radix range error
//
// Design principles:
// - Every operation returns a new value
// - Fail soft: bad input degrades to zero or NaN, never panics
// - Only radix text conversion returns Result

mod errors;
mod input;
mod rounding;
pub(crate) mod text;
mod value;

pub use errors::{NumericError, NumericResult};
pub use input::{NumericInput, MAX_SAFE_INTEGER, MIN_SAFE_INTEGER};
pub use rounding::RoundingMode;
pub use value::{NumberFormat, NumericValue};
