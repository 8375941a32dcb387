// ============================================================================
// Numeric Errors
// Error types for NumericValue operations
// ============================================================================

use std::fmt;

/// Errors that can occur during numeric value operations.
///
/// Arithmetic and comparison are fail-soft and never produce one of these;
/// only explicit radix text conversion does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Requested radix is outside 2..=36
    RadixOutOfRange(u32),
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::RadixOutOfRange(radix) => {
                write!(f, "radix out of range: {} is not between 2 and 36", radix)
            },
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
