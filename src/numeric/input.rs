// ============================================================================
// Numeric Input
// Closed sum type for everything a NumericValue can be built from
// ============================================================================

use super::text;
use super::value::NumericValue;

/// Largest integer a double holds exactly.
pub const MAX_SAFE_INTEGER: i128 = 9_007_199_254_740_991;

/// Smallest integer a double holds exactly.
pub const MIN_SAFE_INTEGER: i128 = -9_007_199_254_740_991;

/// Smallest positive double, returned for underflowing exponent operands.
const MIN_POSITIVE_SUBNORMAL: f64 = 5e-324;

/// The shapes a numeric value or operand may arrive in.
///
/// Conversion is total: every variant resolves to some `f64`, and
/// [`NumericInput::Empty`] (the catch-all) resolves to zero.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum NumericInput {
    /// Wide integer, typically a server-side 64-bit amount
    Integer(i128),
    /// Native number
    Number(f64),
    /// Decimal text
    Text(String),
    /// Text re-parsed as an integer in a non-decimal radix
    Radix { text: String, radix: u32 },
    /// Another value, copied by magnitude
    Value(NumericValue),
    /// Missing input
    #[default]
    Empty,
}

impl NumericInput {
    /// Attach a radix to an input.
    ///
    /// Radix 10 leaves the input untouched. Numbers are stringified and
    /// re-parsed, so fractional numbers truncate. Integers, values and
    /// empty input ignore the radix.
    pub fn radix(input: impl Into<NumericInput>, radix: u32) -> Self {
        let input = input.into();
        if radix == 10 {
            return input;
        }
        match input {
            NumericInput::Number(n) => NumericInput::Radix {
                text: text::shortest(n),
                radix,
            },
            NumericInput::Text(text) | NumericInput::Radix { text, .. } => {
                NumericInput::Radix { text, radix }
            },
            other => other,
        }
    }

    /// Resolve as a constructor argument.
    pub(crate) fn to_magnitude(&self) -> f64 {
        match self {
            NumericInput::Integer(i) => integer_magnitude(*i),
            NumericInput::Number(n) => *n,
            NumericInput::Text(s) => {
                if s == "-0" {
                    -0.0
                } else {
                    text::parse_float(s)
                }
            },
            NumericInput::Radix { text: s, radix } => text::parse_int(s, *radix),
            NumericInput::Value(v) => v.to_number(),
            NumericInput::Empty => 0.0,
        }
    }

    /// Resolve as the right-hand side of an operation.
    ///
    /// Same as construction, except that text which underflows to zero
    /// through a negative exponent resolves to the smallest positive double.
    pub(crate) fn to_operand(&self) -> f64 {
        match self {
            NumericInput::Text(s) => {
                let parsed = text::parse_float(s);
                if parsed == 0.0 && !matches!(s.as_str(), "0" | "-0" | "+0") {
                    if s.contains("e-") || s.contains("E-") {
                        return MIN_POSITIVE_SUBNORMAL;
                    }
                    if !s.contains('e') && !s.contains('E') {
                        return 0.0;
                    }
                }
                parsed
            },
            other => other.to_magnitude(),
        }
    }
}

fn integer_magnitude(value: i128) -> f64 {
    if !(MIN_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&value) {
        tracing::warn!(
            value = %value,
            "integer exceeds safe integer range, precision may be lost"
        );
    }
    value as f64
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                #[inline]
                fn from(value: $t) -> Self {
                    NumericInput::Number(f64::from(value))
                }
            }
        )*
    };
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericInput {
                #[inline]
                fn from(value: $t) -> Self {
                    NumericInput::Integer(value as i128)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, u8, u16, u32, f32, f64);
impl_from_integer!(i64, u64, i128, isize, usize);

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        NumericInput::Text(value.to_string())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        NumericInput::Text(value)
    }
}

impl From<&String> for NumericInput {
    fn from(value: &String) -> Self {
        NumericInput::Text(value.clone())
    }
}

impl From<NumericValue> for NumericInput {
    fn from(value: NumericValue) -> Self {
        NumericInput::Value(value)
    }
}

impl From<&NumericValue> for NumericInput {
    fn from(value: &NumericValue) -> Self {
        NumericInput::Value(*value)
    }
}

impl<T: Into<NumericInput>> From<Option<T>> for NumericInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(NumericInput::Empty, Into::into)
    }
}
