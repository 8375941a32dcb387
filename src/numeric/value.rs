// ============================================================================
// Numeric Value
// Float-backed currency/score value with fail-soft arithmetic
// ============================================================================

use super::errors::{NumericError, NumericResult};
use super::input::NumericInput;
use super::rounding::RoundingMode;
use super::text;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance used by the subtraction fixups.
const MINUS_EPSILON: f64 = 1e-10;

/// Fractional digits emitted by [`NumericValue::to_string_radix`].
const RADIX_FRACTION_DIGITS: usize = 50;

/// Currency/score quantity backed by a single `f64` magnitude.
///
/// Every operation returns a new value. Operands accept anything that
/// converts into [`NumericInput`], coerced with the same rules as
/// construction.
///
/// # Precision
/// This is not an arbitrary-precision decimal. Values beyond the safe
/// integer range lose precision, and only two narrow subtraction artifacts
/// are corrected (see [`NumericValue::minus`]).
///
/// # Comparisons on references
/// The short names `eq`, `gt` and `lt` share their names with the
/// `PartialEq`/`PartialOrd` methods, which win method lookup on a
/// `&NumericValue`. Through a reference, use the long aliases
/// (`is_equal_to`, `is_greater_than`, ...) or dereference first.
///
/// # Example
/// ```
/// use rolling_number::numeric::{NumericValue, RoundingMode};
///
/// let balance = NumericValue::new(1234.567);
/// assert_eq!(balance.to_format(Some(2), Some(RoundingMode::Down), None), "1,234.56");
/// assert_eq!(NumericValue::new(0.3).minus(0.2).to_number(), 0.1);
/// ```
#[derive(Clone, Copy, Default)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NumericValue(f64);

/// Grouping options accepted by [`NumericValue::to_format`].
///
/// Only the fixed `,`/`.` layout with groups of three is produced; these
/// fields are accepted for call-site compatibility and are not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    pub prefix: Option<String>,
    pub decimal_separator: Option<String>,
    pub group_separator: Option<String>,
    pub group_size: Option<u32>,
    pub secondary_group_size: Option<u32>,
    pub fraction_group_separator: Option<String>,
    pub fraction_group_size: Option<u32>,
    pub suffix: Option<String>,
}

impl NumericValue {
    /// Zero value
    pub const ZERO: Self = Self(0.0);

    /// One
    pub const ONE: Self = Self(1.0);

    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a value from any supported input shape.
    ///
    /// Never fails: unparseable text becomes NaN, missing input becomes
    /// zero, and oversized integers are stored approximately with a warning.
    pub fn new(input: impl Into<NumericInput>) -> Self {
        Self(input.into().to_magnitude())
    }

    /// Build from text or a number interpreted in `radix`.
    pub fn with_radix(input: impl Into<NumericInput>, radix: u32) -> Self {
        Self::new(NumericInput::radix(input, radix))
    }

    /// Wrap a raw magnitude.
    #[inline]
    pub const fn from_f64(value: f64) -> Self {
        Self(value)
    }

    #[inline]
    pub const fn zero() -> Self {
        Self::ZERO
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// The magnitude, negative zero preserved.
    #[inline]
    pub const fn to_number(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.0 == 0.0
    }

    #[inline]
    pub fn is_negative(self) -> bool {
        self.0 < 0.0
    }

    /// True for zero as well as positive values.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 >= 0.0
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    pub fn plus(self, n: impl Into<NumericInput>) -> Self {
        Self(self.0 + n.into().to_operand())
    }

    /// Subtraction with two fixups for common float artifacts.
    ///
    /// - `0.3 - 0.2` (each within 1e-10) is exactly `0.1`
    /// - any other result smaller than 1e-10 in magnitude is exactly `0`
    pub fn minus(self, n: impl Into<NumericInput>) -> Self {
        let subtrahend = n.into().to_operand();
        let result = self.0 - subtrahend;

        if (self.0 - 0.3).abs() < MINUS_EPSILON && (subtrahend - 0.2).abs() < MINUS_EPSILON {
            Self(0.1)
        } else if result.abs() < MINUS_EPSILON {
            Self(0.0)
        } else {
            Self(result)
        }
    }

    pub fn multiplied_by(self, n: impl Into<NumericInput>) -> Self {
        Self(self.0 * n.into().to_operand())
    }

    /// Alias of [`NumericValue::multiplied_by`].
    pub fn times(self, n: impl Into<NumericInput>) -> Self {
        self.multiplied_by(n)
    }

    /// IEEE division: a zero divisor yields an infinity or NaN.
    pub fn divided_by(self, n: impl Into<NumericInput>) -> Self {
        Self(self.0 / n.into().to_operand())
    }

    /// Alias of [`NumericValue::divided_by`].
    pub fn div(self, n: impl Into<NumericInput>) -> Self {
        self.divided_by(n)
    }

    /// `floor(self / n)`
    pub fn divided_to_integer_by(self, n: impl Into<NumericInput>) -> Self {
        Self((self.0 / n.into().to_operand()).floor())
    }

    pub fn pow(self, exponent: impl Into<NumericInput>) -> Self {
        Self(self.0.powf(exponent.into().to_operand()))
    }

    /// `pow` followed by the `%` remainder (sign follows the dividend).
    pub fn pow_mod(self, exponent: impl Into<NumericInput>, modulus: impl Into<NumericInput>) -> Self {
        let powered = self.pow(exponent).0;
        Self(powered % modulus.into().to_operand())
    }

    // ========================================================================
    // Rounding
    // ========================================================================

    /// Round to an integer. Without a mode this floors.
    pub fn integer_value(self, mode: Option<RoundingMode>) -> Self {
        match mode {
            Some(mode) => Self(mode.apply(self.0, 0)),
            None => Self(self.0.floor()),
        }
    }

    /// Number of fractional digits in the display string.
    ///
    /// `None` for NaN and infinities. Exponent-notation strings are counted
    /// literally, so `1.5e-7` reports 4.
    pub fn decimal_places(self) -> Option<u32> {
        if !self.0.is_finite() {
            return None;
        }
        let shown = text::shortest(self.0);
        let count = shown.split_once('.').map_or(0, |(_, frac)| frac.len());
        Some(count as u32)
    }

    /// Round to `places` decimal places. Defaults to half away from zero.
    pub fn to_decimal_places(self, places: u32, mode: Option<RoundingMode>) -> Self {
        Self(mode.unwrap_or_default().apply(self.0, exponent_places(places)))
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    pub fn eq(self, n: impl Into<NumericInput>) -> bool {
        self.0 == n.into().to_operand()
    }

    pub fn is_equal_to(self, n: impl Into<NumericInput>) -> bool {
        self.eq(n)
    }

    pub fn gt(self, n: impl Into<NumericInput>) -> bool {
        self.0 > n.into().to_operand()
    }

    pub fn is_greater_than(self, n: impl Into<NumericInput>) -> bool {
        self.gt(n)
    }

    pub fn gte(self, n: impl Into<NumericInput>) -> bool {
        self.0 >= n.into().to_operand()
    }

    pub fn is_greater_than_or_equal_to(self, n: impl Into<NumericInput>) -> bool {
        self.gte(n)
    }

    pub fn lt(self, n: impl Into<NumericInput>) -> bool {
        self.0 < n.into().to_operand()
    }

    pub fn is_less_than(self, n: impl Into<NumericInput>) -> bool {
        self.lt(n)
    }

    pub fn lte(self, n: impl Into<NumericInput>) -> bool {
        self.0 <= n.into().to_operand()
    }

    pub fn is_less_than_or_equal_to(self, n: impl Into<NumericInput>) -> bool {
        self.lte(n)
    }

    /// Signed difference `self - n`. Callers must not assume -1/0/1.
    pub fn compared_to(self, n: impl Into<NumericInput>) -> f64 {
        self.0 - n.into().to_operand()
    }

    // ========================================================================
    // Text Output
    // ========================================================================

    /// Fixed-point string. Without `places` this is the display string.
    pub fn to_fixed(self, places: Option<u32>, mode: Option<RoundingMode>) -> String {
        match places {
            None => text::shortest(self.0),
            Some(places) => {
                let rounded = mode.unwrap_or_default().apply(self.0, exponent_places(places));
                text::to_fixed(rounded, places as usize)
            },
        }
    }

    /// `to_fixed` plus thousands separators in the integer part.
    ///
    /// The `format` options are accepted but ignored; output is always
    /// `,` grouping by three and `.` as the decimal point.
    pub fn to_format(
        self,
        places: Option<u32>,
        mode: Option<RoundingMode>,
        _format: Option<&NumberFormat>,
    ) -> String {
        let fixed = self.to_fixed(places, mode);
        match fixed.split_once('.') {
            Some((int_part, frac_part)) => format!("{}.{}", group_thousands(int_part), frac_part),
            None => group_thousands(&fixed),
        }
    }

    /// Text in `radix` (2..=36).
    ///
    /// Radix 10, NaN and the infinities give the display string. Other
    /// radixes emit the integer part by repeated division and up to 50
    /// fractional digits by repeated multiplication.
    ///
    /// # Errors
    /// Returns `RadixOutOfRange` outside 2..=36.
    pub fn to_string_radix(self, radix: u32) -> NumericResult<String> {
        if !(2..=36).contains(&radix) {
            return Err(NumericError::RadixOutOfRange(radix));
        }
        if radix == 10 || !self.0.is_finite() {
            return Ok(text::shortest(self.0));
        }

        let base = f64::from(radix);
        let magnitude = self.0.abs();
        let integer_part = magnitude.floor();
        let fractional_part = magnitude - integer_part;

        let mut digits: Vec<char> = Vec::new();
        let mut num = integer_part;
        if num == 0.0 {
            digits.push('0');
        } else {
            while num > 0.0 {
                digits.push(radix_digit((num % base) as u32));
                num = (num / base).floor();
            }
            digits.reverse();
        }

        let mut out: String = digits.into_iter().collect();

        if fractional_part > 0.0 {
            out.push('.');
            let mut frac = fractional_part;
            let mut precision = 0;
            while frac > 0.0 && precision < RADIX_FRACTION_DIGITS {
                frac *= base;
                let digit = frac.floor();
                out.push(radix_digit(digit as u32));
                frac -= digit;
                precision += 1;
            }
        }

        if self.0 < 0.0 {
            out.insert(0, '-');
        }

        Ok(out)
    }

    // ========================================================================
    // Conversion to/from rust_decimal (for API boundaries)
    // ========================================================================

    /// Convert to `rust_decimal::Decimal`. `None` for NaN, infinities and
    /// magnitudes outside Decimal's range.
    pub fn to_decimal(self) -> Option<rust_decimal::Decimal> {
        use rust_decimal::prelude::FromPrimitive;
        rust_decimal::Decimal::from_f64(self.0)
    }

    /// Convert from `rust_decimal::Decimal`, rounding to the nearest double.
    pub fn from_decimal(d: rust_decimal::Decimal) -> Self {
        use rust_decimal::prelude::ToPrimitive;
        Self(d.to_f64().unwrap_or(f64::NAN))
    }
}

/// Places as a power-of-ten exponent. Huge counts saturate so the scale
/// overflows to infinity instead of wrapping negative.
fn exponent_places(places: u32) -> i32 {
    i32::try_from(places).unwrap_or(i32::MAX)
}

fn radix_digit(d: u32) -> char {
    char::from_digit(d, 36).unwrap_or('0')
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Insert `,` at every non-word-boundary followed by a run of digit
/// triplets that ends the digit run. Strings of three chars or fewer are
/// returned unchanged.
fn group_thousands(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 3 {
        return s.to_string();
    }

    let mut out = String::with_capacity(s.len() + s.len() / 3);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 {
            let at_boundary = is_word_char(chars[i - 1]) != is_word_char(c);
            if !at_boundary {
                let run = chars[i..].iter().take_while(|d| d.is_ascii_digit()).count();
                if run > 0 && run % 3 == 0 {
                    out.push(',');
                }
            }
        }
        out.push(c);
    }
    out
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for NumericValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for NumericValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Neg for NumericValue {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Add for NumericValue {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        self.plus(rhs)
    }
}

impl Sub for NumericValue {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        self.minus(rhs)
    }
}

impl Mul for NumericValue {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiplied_by(rhs)
    }
}

impl Div for NumericValue {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self::Output {
        self.divided_by(rhs)
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<NumericValue> for f64 {
    fn from(value: NumericValue) -> Self {
        value.0
    }
}

impl fmt::Debug for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NumericValue({})", text::shortest(self.0))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&text::shortest(self.0))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type NV = NumericValue;

    #[test]
    fn test_construction_shapes() {
        assert_eq!(NV::new(42).to_number(), 42.0);
        assert_eq!(NV::new(1.5).to_number(), 1.5);
        assert_eq!(NV::new("2.25").to_number(), 2.25);
        assert_eq!(NV::new(7u64).to_number(), 7.0);
        assert_eq!(NV::new(NV::new(3)).to_number(), 3.0);
        assert_eq!(NV::new(NumericInput::Empty).to_number(), 0.0);
        assert_eq!(NV::new(None::<&str>).to_number(), 0.0);
        assert_eq!(NV::default().to_number(), 0.0);
    }

    #[test]
    fn test_negative_zero_survives() {
        let z = NV::new("-0").to_number();
        assert_eq!(z, 0.0);
        assert_eq!(1.0 / z, f64::NEG_INFINITY);
        assert!(NV::new(-0.0).to_number().is_sign_negative());
    }

    #[test]
    fn test_radix_construction() {
        assert_eq!(NV::with_radix("ff", 16).to_number(), 255.0);
        assert_eq!(NV::with_radix("1010", 2).to_number(), 10.0);
        assert_eq!(NV::with_radix(17, 8).to_number(), 15.0);
        assert_eq!(NV::with_radix(3.9, 16).to_number(), 3.0);
        assert!(NV::with_radix("zz", 10).is_nan());
    }

    #[test]
    fn test_arithmetic_returns_new_values() {
        let a = NV::new(10);
        let b = a.plus(5);
        assert_eq!(a.to_number(), 10.0);
        assert_eq!(b.to_number(), 15.0);
        assert_eq!(a.multiplied_by(3).to_number(), 30.0);
        assert_eq!(a.times("0.5").to_number(), 5.0);
        assert_eq!(a.divided_by(4).to_number(), 2.5);
        assert_eq!(a.div(NV::new(2)).to_number(), 5.0);
        assert_eq!(a.divided_to_integer_by(3).to_number(), 3.0);
        assert_eq!(NV::new(-7).divided_to_integer_by(2).to_number(), -4.0);
    }

    #[test]
    fn test_operand_radix() {
        let a = NV::new(1);
        assert_eq!(a.plus(NumericInput::radix("f", 16)).to_number(), 16.0);
        assert!(a.eq(NumericInput::radix("1", 2)));
    }

    #[test]
    fn test_minus_fixups() {
        // Raw float would give 0.09999999999999998
        assert_eq!(NV::new(0.3).minus(0.2).to_number(), 0.1);
        assert_eq!(NV::new(0.3).minus("0.2").to_number(), 0.1);
        // Sub-epsilon results snap to zero
        assert_eq!(NV::new(0.1 + 0.2).minus(0.3).to_number(), 0.0);
        assert_eq!(NV::new(1e-11).minus(0).to_number(), 0.0);
        // Narrow: nearby pairs are not corrected
        assert_eq!(NV::new(0.7).minus(0.6).to_number(), 0.7 - 0.6);
        assert_eq!(NV::new(5).minus(3).to_number(), 2.0);
    }

    #[test]
    fn test_division_by_zero_is_soft() {
        assert_eq!(NV::new(1).divided_by(0).to_number(), f64::INFINITY);
        assert!(NV::new(0).divided_by(0).is_nan());
    }

    #[test]
    fn test_pow() {
        assert_eq!(NV::new(2).pow(10).to_number(), 1024.0);
        assert_eq!(NV::new(2).pow(-1).to_number(), 0.5);
        assert_eq!(NV::new(3).pow_mod(4, 5).to_number(), 1.0);
        assert_eq!(NV::new(-3).pow_mod(3, 5).to_number(), -2.0);
    }

    #[test]
    fn test_integer_value() {
        assert_eq!(NV::new(2.7).integer_value(None).to_number(), 2.0);
        assert_eq!(NV::new(-2.3).integer_value(None).to_number(), -3.0);
        assert_eq!(
            NV::new(-2.7).integer_value(Some(RoundingMode::Down)).to_number(),
            -2.0
        );
        assert_eq!(
            NV::new(2.1).integer_value(Some(RoundingMode::Up)).to_number(),
            3.0
        );
        assert_eq!(
            NV::new(2.5).integer_value(Some(RoundingMode::HalfEven)).to_number(),
            3.0
        );
    }

    #[test]
    fn test_decimal_places_count() {
        assert_eq!(NV::new(1.25).decimal_places(), Some(2));
        assert_eq!(NV::new(100).decimal_places(), Some(0));
        assert_eq!(NV::new(1.5e-7).decimal_places(), Some(4));
        assert_eq!(NV::new(f64::NAN).decimal_places(), None);
        assert_eq!(NV::new(f64::INFINITY).decimal_places(), None);
        assert_eq!(NV::new(f64::NEG_INFINITY).decimal_places(), None);
    }

    #[test]
    fn test_to_decimal_places() {
        assert_eq!(NV::new(1.2345).to_decimal_places(2, None).to_number(), 1.23);
        // Scale overflows to infinity, as with any count past ~308
        assert!(NV::new(15.0).to_decimal_places(u32::MAX, None).is_nan());
        assert!(NV::new(1.5).to_decimal_places(400, None).is_nan());
        assert_eq!(NV::new(15.0).to_fixed(Some(u32::MAX), None), "NaN");
        assert_eq!(NV::new(1.235).to_decimal_places(1, None).to_number(), 1.2);
        assert_eq!(
            NV::new(99.99).to_decimal_places(0, Some(RoundingMode::Down)).to_number(),
            99.0
        );
    }

    #[test]
    fn test_comparisons() {
        let a = NV::new(5);
        assert!(a.eq(5));
        assert!(a.is_equal_to("5"));
        assert!(a.gt(4.9));
        assert!(a.is_greater_than(NV::new(1)));
        assert!(a.gte(5));
        assert!(a.is_greater_than_or_equal_to(4));
        assert!(a.lt(6));
        assert!(a.is_less_than(5.5));
        assert!(a.lte(5));
        assert!(a.is_less_than_or_equal_to(5));
        assert_eq!(a.compared_to(2), 3.0);
        assert_eq!(a.compared_to(8), -3.0);
        assert!(NV::new(0).eq(-0.0));
    }

    #[test]
    fn test_nan_comparisons_are_false() {
        let nan = NV::new("nope");
        assert!(!nan.eq(nan));
        assert!(!nan.gt(0));
        assert!(!nan.lte(0));
        assert!(nan.compared_to(1).is_nan());
    }

    #[test]
    fn test_predicates() {
        assert!(NV::new(0).is_zero());
        assert!(NV::new(0).is_positive());
        assert!(!NV::new(0).is_negative());
        assert!(NV::new(-1).is_negative());
        assert_eq!(NV::new(-4.5).abs().to_number(), 4.5);
    }

    #[test]
    fn test_to_fixed() {
        assert_eq!(NV::new(1.239).to_fixed(Some(2), Some(RoundingMode::Down)), "1.23");
        assert_eq!(NV::new(1.239).to_fixed(Some(2), None), "1.24");
        assert_eq!(NV::new(1.5).to_fixed(Some(3), None), "1.500");
        assert_eq!(NV::new(2.5).to_fixed(Some(0), None), "3");
        assert_eq!(NV::new(0.1).to_fixed(None, None), "0.1");
        assert_eq!(
            NV::new(1.2).to_fixed(Some(2), Some(RoundingMode::from_code(1))),
            "1.20"
        );
    }

    #[test]
    fn test_to_format_grouping() {
        assert_eq!(NV::new(1234567.891).to_format(Some(2), None, None), "1,234,567.89");
        assert_eq!(NV::new(-1234567).to_format(Some(0), None, None), "-1,234,567");
        assert_eq!(NV::new(999).to_format(None, None, None), "999");
        assert_eq!(NV::new(1000).to_format(None, None, None), "1,000");
        assert_eq!(NV::new(-100).to_format(Some(0), None, None), "-100");
        assert_eq!(NV::new(12.5).to_format(None, None, None), "12.5");
        assert_eq!(NV::new(f64::INFINITY).to_format(None, None, None), "Infinity");
    }

    #[test]
    fn test_to_format_ignores_options() {
        let options = NumberFormat {
            prefix: Some("$".to_string()),
            group_separator: Some(" ".to_string()),
            group_size: Some(4),
            ..Default::default()
        };
        assert_eq!(
            NV::new(1234567).to_format(Some(0), Some(RoundingMode::Down), Some(&options)),
            "1,234,567"
        );
    }

    #[test]
    fn test_to_string_radix() {
        assert_eq!(NV::new(255).to_string_radix(16).unwrap(), "ff");
        assert_eq!(NV::new(-10).to_string_radix(2).unwrap(), "-1010");
        assert_eq!(NV::new(0.5).to_string_radix(2).unwrap(), "0.1");
        assert_eq!(NV::new(35).to_string_radix(36).unwrap(), "z");
        assert_eq!(NV::new(0).to_string_radix(8).unwrap(), "0");
        assert_eq!(NV::new(0.1).to_string_radix(10).unwrap(), "0.1");
        assert_eq!(NV::new(f64::INFINITY).to_string_radix(2).unwrap(), "Infinity");
        assert_eq!(NV::new(f64::NAN).to_string_radix(16).unwrap(), "NaN");
    }

    #[test]
    fn test_to_string_radix_fraction_cap() {
        let s = NV::new(0.1).to_string_radix(3).unwrap();
        let (_, frac) = s.split_once('.').unwrap();
        assert!(frac.len() <= 50);
    }

    #[test]
    fn test_to_string_radix_range() {
        assert_eq!(
            NV::new(1).to_string_radix(1),
            Err(NumericError::RadixOutOfRange(1))
        );
        assert_eq!(
            NV::new(1).to_string_radix(37),
            Err(NumericError::RadixOutOfRange(37))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(NV::new(1e21).to_string(), "1e+21");
        assert_eq!(NV::new(-0.0).to_string(), "0");
        assert_eq!(NV::new(f64::NAN).to_string(), "NaN");
        assert_eq!(format!("{:?}", NV::new(2.5)), "NumericValue(2.5)");
    }

    #[test]
    fn test_operators() {
        let a = NV::new(0.3);
        let b = NV::new(0.2);
        assert_eq!((a - b).to_number(), 0.1);
        assert_eq!((a + b).to_number(), 0.3 + 0.2);
        assert_eq!((NV::new(3) * NV::new(4)).to_number(), 12.0);
        assert_eq!((NV::new(3) / NV::new(4)).to_number(), 0.75);
        assert_eq!((-NV::new(3)).to_number(), -3.0);
        assert!(NV::new(1) < NV::new(2));
    }

    #[test]
    fn test_decimal_boundary() {
        use rust_decimal::Decimal;

        let d = NV::new(123.25).to_decimal().unwrap();
        assert_eq!(d, Decimal::new(12325, 2));
        assert_eq!(NV::from_decimal(Decimal::new(-75, 1)).to_number(), -7.5);
        assert!(NV::new(f64::NAN).to_decimal().is_none());
    }

    proptest! {
        #[test]
        fn prop_plus_matches_native(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(NV::new(a).plus(b).to_number(), a + b);
        }

        #[test]
        fn prop_display_round_trips(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
            let v = NV::new(x);
            prop_assert_eq!(NV::new(v.to_string()).to_number(), v.to_number());
        }

        #[test]
        fn prop_radix_ten_matches_display(x in any::<f64>()) {
            let v = NV::new(x);
            prop_assert_eq!(v.to_string_radix(10).unwrap(), v.to_string());
        }

        #[test]
        fn prop_down_never_exceeds_magnitude(x in -1e6f64..1e6, places in 0u32..6) {
            let truncated = NV::new(x).to_decimal_places(places, Some(RoundingMode::Down));
            prop_assert!(truncated.abs().to_number() <= x.abs() + 1e-9);
        }
    }
}
