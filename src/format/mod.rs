// ============================================================================
// Format Module
// Currency-style text: thousands grouping and K/M/B/T exponent suffixes
// ============================================================================

use crate::numeric::{text, NumericInput, NumericResult, NumericValue, RoundingMode};

/// Smallest `max_length` honoured by the suffix formatters.
pub const FORMAT_MIN_LENGTH: usize = 4;

/// Integer rounding used when picking exponents and percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundMode {
    #[default]
    Floor,
    Ceil,
    /// Half toward +infinity
    Round,
}

impl RoundMode {
    pub fn apply(self, value: f64) -> f64 {
        match self {
            RoundMode::Floor => value.floor(),
            RoundMode::Ceil => value.ceil(),
            RoundMode::Round => {
                let floor = value.floor();
                if value - floor >= 0.5 {
                    floor + 1.0
                } else {
                    floor
                }
            },
        }
    }
}

// ============================================================================
// Exponent
// ============================================================================

/// Power-of-ten steps with a display suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[repr(u8)]
pub enum Exponent {
    #[default]
    None = 0,
    Kilo = 3,
    Mega = 6,
    Giga = 9,
    Tera = 12,
    Peta = 15,
    Exa = 18,
    Zetta = 21,
    Yotta = 24,
}

impl Exponent {
    pub const ASCENDING: [Exponent; 8] = [
        Exponent::Kilo,
        Exponent::Mega,
        Exponent::Giga,
        Exponent::Tera,
        Exponent::Peta,
        Exponent::Exa,
        Exponent::Zetta,
        Exponent::Yotta,
    ];

    pub const DESCENDING: [Exponent; 8] = [
        Exponent::Yotta,
        Exponent::Zetta,
        Exponent::Exa,
        Exponent::Peta,
        Exponent::Tera,
        Exponent::Giga,
        Exponent::Mega,
        Exponent::Kilo,
    ];

    pub fn power(self) -> u32 {
        self as u32
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Exponent::None => "",
            Exponent::Kilo => "K",
            Exponent::Mega => "M",
            Exponent::Giga => "B",
            Exponent::Tera => "T",
            Exponent::Peta => "P",
            Exponent::Exa => "E",
            Exponent::Zetta => "Z",
            Exponent::Yotta => "Y",
        }
    }

    /// Unknown suffixes map to `None`.
    pub fn from_suffix(suffix: &str) -> Self {
        Self::ASCENDING
            .into_iter()
            .find(|e| e.suffix() == suffix)
            .unwrap_or(Exponent::None)
    }

    pub fn from_power(power: u32) -> Option<Self> {
        match power {
            0 => Some(Exponent::None),
            _ => Self::ASCENDING.into_iter().find(|e| e.power() == power),
        }
    }

    /// Nearest exponent to `n` digits: negative input counts as zero,
    /// `n / 3` is rounded with `mode`, and the result is capped at Yotta.
    pub fn parse(n: f64, mode: RoundMode) -> Self {
        let clamped = if n > 0.0 { n } else { 0.0 };
        let steps = mode.apply(clamped / 3.0).min(8.0);
        Self::from_power(steps as u32 * 3).unwrap_or(Exponent::Yotta)
    }

    /// `10^power` as a value.
    pub fn divisor(self) -> NumericValue {
        NumericValue::new(10).pow(self.power())
    }
}

// ============================================================================
// Formatters
// ============================================================================

/// Length of the integer part as text. From 1e21 up this is the
/// exponential spelling, so `1e21` counts 5.
fn int_digits(value: NumericValue) -> usize {
    value
        .integer_value(Some(RoundingMode::Down))
        .abs()
        .to_fixed(Some(0), None)
        .len()
}

/// Length of the grouped integer part, commas included.
fn grouped_int_len(value: NumericValue) -> usize {
    value
        .integer_value(Some(RoundingMode::Down))
        .abs()
        .to_format(Some(0), Some(RoundingMode::Down), None)
        .len()
}

/// Longest suffix that still leaves at least a third of the grouped width.
fn shortest_exponent(grouped_len: usize, max_len: usize) -> Exponent {
    if grouped_len <= max_len {
        return Exponent::None;
    }
    Exponent::DESCENDING
        .into_iter()
        .find(|e| grouped_len * 3 > e.power() as usize * 4)
        .unwrap_or(Exponent::None)
}

/// Decimal places left after integer digits, the point, and the suffix.
fn fitting_places(max_len: usize, expo: Exponent, quotient: NumericValue, max_places: usize) -> u32 {
    let max_num_len = max_len as i64 - i64::from(expo != Exponent::None);
    let room = max_num_len - grouped_int_len(quotient) as i64 - 1;
    room.clamp(0, max_places as i64) as u32
}

fn strip_fraction_zeros(formatted: &str) -> String {
    match formatted.split_once('.') {
        Some((int_part, frac_part)) => {
            let frac = frac_part.trim_end_matches('0');
            if frac.is_empty() {
                int_part.to_string()
            } else {
                format!("{}.{}", int_part, frac)
            }
        },
        None => formatted.to_string(),
    }
}

/// Grouped text with a suffix once the integer part outgrows `max_length`.
///
/// `max_length == 0` disables suffixes. Otherwise `max_length` is raised to
/// at least 4 and the smallest exponent `e` with `digits + 1 <= max + e` is
/// used. Digits past `decimal_place` are cut, and with one decimal place a
/// trailing `.0` is dropped.
pub fn format(value: impl Into<NumericInput>, max_length: usize, decimal_place: u32) -> String {
    let input = NumericValue::new(value);

    if max_length == 0 {
        return input.to_format(Some(decimal_place), Some(RoundingMode::Down), None);
    }

    let max_len = max_length.max(FORMAT_MIN_LENGTH);
    let digits = int_digits(input);
    let expo = if digits <= max_len {
        Exponent::None
    } else {
        Exponent::ASCENDING
            .into_iter()
            .find(|e| digits < max_len + e.power() as usize)
            .unwrap_or(Exponent::Yotta)
    };

    let quotient = input.div(expo.divisor());
    let formatted = quotient.to_format(Some(decimal_place), Some(RoundingMode::Down), None);

    if decimal_place == 1 {
        let trimmed = match formatted.split_once('.') {
            Some((int_part, frac_part)) if frac_part.bytes().all(|b| b == b'0') => int_part,
            _ => formatted.as_str(),
        };
        return format!("{}{}", trimmed, expo.suffix());
    }

    format!("{}{}", formatted, expo.suffix())
}

/// Grouped text. `None` places keeps every digit of the display string.
pub fn format_easy(value: impl Into<NumericInput>, decimal_place: Option<u32>, mode: RoundingMode) -> String {
    let input = NumericValue::new(value);
    match decimal_place {
        Some(places) => input.to_format(Some(places), Some(mode), None),
        None => input.to_format(None, None, None),
    }
}

/// Suffixed text with as few decimals as possible.
///
/// Fractions are cut to fit `max_length` (at most `max_decimal` places) and
/// trailing zeros are removed.
pub fn format_tiny(value: impl Into<NumericInput>, max_length: usize, max_decimal: u32) -> String {
    let input = NumericValue::new(value);
    let mut quotient = input;
    let mut places = max_decimal;
    let mut expo = Exponent::None;

    if max_length > 0 {
        let max_len = max_length.max(FORMAT_MIN_LENGTH);
        expo = shortest_exponent(grouped_int_len(input), max_len);
        quotient = input.div(expo.divisor());
        places = fitting_places(max_len, expo, quotient, max_decimal as usize);
    }

    let formatted = quotient.to_format(Some(places), Some(RoundingMode::Down), None);
    format!("{}{}", strip_fraction_zeros(&formatted), expo.suffix())
}

/// Suffixed text that fills `max_length` with decimals.
///
/// A negative `max_decimal_*` means unlimited (bounded by the width).
pub fn format_fill(
    value: impl Into<NumericInput>,
    max_length: usize,
    max_decimal_with_expo: i32,
    max_decimal_without_expo: i32,
) -> String {
    let input = NumericValue::new(value);

    if max_length == 0 {
        return match u32::try_from(max_decimal_without_expo) {
            Ok(places) => input.to_format(Some(places), Some(RoundingMode::Down), None),
            Err(_) => input.to_format(None, None, None),
        };
    }

    let max_len = max_length.max(FORMAT_MIN_LENGTH);
    let expo = shortest_exponent(grouped_int_len(input), max_len);
    let quotient = input.div(expo.divisor());
    let max_num_len = max_len - usize::from(expo != Exponent::None);

    let max_decimal = if expo != Exponent::None {
        max_decimal_with_expo
    } else {
        max_decimal_without_expo
    };
    let max_places = usize::try_from(max_decimal).unwrap_or(max_num_len);
    let places = fitting_places(max_len, expo, quotient, max_places);

    format!(
        "{}{}",
        quotient.to_format(Some(places), Some(RoundingMode::Down), None),
        expo.suffix()
    )
}

/// [`format_tiny`] with a fixed exponent.
pub fn expo_format_tiny(
    value: impl Into<NumericInput>,
    expo: Exponent,
    max_length: usize,
    max_decimal: u32,
) -> String {
    let quotient = NumericValue::new(value).div(expo.divisor());
    let places = if max_length > 0 {
        fitting_places(max_length.max(FORMAT_MIN_LENGTH), expo, quotient, max_decimal as usize)
    } else {
        max_decimal
    };

    let formatted = quotient.to_format(Some(places), Some(RoundingMode::Down), None);
    format!("{}{}", strip_fraction_zeros(&formatted), expo.suffix())
}

/// [`format_fill`] with a fixed exponent.
pub fn expo_format_fill(
    value: impl Into<NumericInput>,
    expo: Exponent,
    max_length: usize,
    max_decimal_with_expo: i32,
    max_decimal_without_expo: i32,
) -> String {
    let quotient = NumericValue::new(value).div(expo.divisor());
    let max_decimal = if expo != Exponent::None {
        max_decimal_with_expo
    } else {
        max_decimal_without_expo
    };

    if max_length == 0 {
        let formatted = match u32::try_from(max_decimal) {
            Ok(places) => quotient.to_format(Some(places), Some(RoundingMode::Down), None),
            Err(_) => quotient.to_format(None, None, None),
        };
        return format!("{}{}", formatted, expo.suffix());
    }

    let max_len = max_length.max(FORMAT_MIN_LENGTH);
    let max_num_len = max_len - usize::from(expo != Exponent::None);
    let max_places = usize::try_from(max_decimal).unwrap_or(max_num_len);
    let places = fitting_places(max_len, expo, quotient, max_places);

    format!(
        "{}{}",
        quotient.to_format(Some(places), Some(RoundingMode::Down), None),
        expo.suffix()
    )
}

/// `value` in `radix`, left-padded with `0` to `digits` characters.
///
/// # Errors
/// Returns `RadixOutOfRange` outside 2..=36.
pub fn prefix_format(value: f64, digits: usize, radix: u32) -> NumericResult<String> {
    let text = NumericValue::from_f64(value).to_string_radix(radix)?;
    Ok(format!("{:0>width$}", text, width = digits))
}

/// `value` as a percentage with exactly `decimal` places.
pub fn to_percentages(value: f64, decimal: u32, mode: RoundMode) -> String {
    let factor = 10f64.powi(decimal as i32);
    let adjusted = mode.apply(value * factor) / factor;
    format!("{}%", text::to_fixed(adjusted, decimal as usize))
}

// ============================================================================
// Zero Trimming
// ============================================================================

/// Whether the whole string reads as one number (surrounding whitespace
/// allowed, empty counts as zero).
fn is_numeric_text(s: &str) -> bool {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return true;
    }

    let unsigned = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if unsigned == "Infinity" {
        return true;
    }

    let radix_body = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)]
        .into_iter()
        .find_map(|(prefix, radix)| trimmed.strip_prefix(prefix).map(|body| (body, radix)));
    if let Some((body, radix)) = radix_body {
        return !body.is_empty() && body.chars().all(|c| c.is_digit(radix));
    }

    unsigned
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'))
        && trimmed.parse::<f64>().is_ok()
}

/// Drop redundant zeros from a numeric string: leading zeros of the
/// integer part (one is kept before a non-digit), trailing fraction zeros,
/// and an all-zero fraction with its point. Non-numeric text is returned
/// as given.
pub fn trim_zero(num_str: &str) -> String {
    if !is_numeric_text(num_str) {
        return num_str.to_string();
    }

    // Leading zeros, keeping the sign
    let (sign, rest) = match num_str.chars().next() {
        Some(c @ ('+' | '-')) => (Some(c), &num_str[1..]),
        _ => (None, num_str),
    };
    let zeros = rest.bytes().take_while(|&b| b == b'0').count();
    let rest = if zeros > 0 && rest[zeros..].starts_with(|c: char| c.is_ascii_digit()) {
        &rest[zeros..]
    } else if zeros > 1 {
        &rest[zeros - 1..]
    } else {
        rest
    };

    let mut out = String::with_capacity(num_str.len());
    if let Some(sign) = sign {
        out.push(sign);
    }
    out.push_str(rest);

    // Trailing zeros after a nonzero fraction digit
    if let Some(dot) = out.rfind('.') {
        let frac = &out[dot + 1..];
        if !frac.is_empty() && frac.bytes().all(|b| b.is_ascii_digit()) {
            let kept = frac.trim_end_matches('0');
            if kept.is_empty() {
                out.truncate(dot);
            } else {
                let cut = dot + 1 + kept.len();
                out.truncate(cut);
            }
        }
    }

    if out.bytes().any(|b| b.is_ascii_digit()) {
        out
    } else {
        "0".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponent_suffixes() {
        assert_eq!(Exponent::None.suffix(), "");
        assert_eq!(Exponent::Giga.suffix(), "B");
        assert_eq!(Exponent::from_suffix("T"), Exponent::Tera);
        assert_eq!(Exponent::from_suffix("Q"), Exponent::None);
        assert_eq!(Exponent::from_suffix(""), Exponent::None);
        assert_eq!(Exponent::from_power(18), Some(Exponent::Exa));
        assert_eq!(Exponent::from_power(4), None);
    }

    #[test]
    fn test_exponent_parse() {
        assert_eq!(Exponent::parse(7.0, RoundMode::Floor), Exponent::Mega);
        assert_eq!(Exponent::parse(7.0, RoundMode::Ceil), Exponent::Giga);
        assert_eq!(Exponent::parse(7.5, RoundMode::Round), Exponent::Giga);
        assert_eq!(Exponent::parse(-4.0, RoundMode::Floor), Exponent::None);
        assert_eq!(Exponent::parse(100.0, RoundMode::Floor), Exponent::Yotta);
    }

    #[test]
    fn test_round_mode() {
        assert_eq!(RoundMode::Round.apply(2.5), 3.0);
        assert_eq!(RoundMode::Round.apply(-2.5), -2.0);
        assert_eq!(RoundMode::Floor.apply(-2.1), -3.0);
        assert_eq!(RoundMode::Ceil.apply(2.1), 3.0);
    }

    #[test]
    fn test_format_without_max_length() {
        assert_eq!(format(1234567.891, 0, 2), "1,234,567.89");
        assert_eq!(format(999, 0, 0), "999");
    }

    #[test]
    fn test_format_with_suffix() {
        assert_eq!(format(12345, 19, 0), "12,345");
        assert_eq!(format(1234567, 4, 0), "1M");
        assert_eq!(format(1234567, 6, 0), "1,234K");
        // Below the minimum width
        assert_eq!(format(12345, 2, 0), "12K");
        assert_eq!(format(1200000, 4, 1), "1.2M");
        assert_eq!(format(1000000, 4, 1), "1M");
        assert_eq!(format(1234567, 4, 2), "1.23M");
    }

    #[test]
    fn test_format_counts_exponential_spelling() {
        // "1e+21" is 5 characters, so only Kilo is needed
        assert_eq!(format(1e21, 4, 0), "1,000,000,000,000,000,000K");
        // "1.5e+21" is 7
        assert_eq!(format(1.5e21, 4, 0), "1,500,000,000,000,000M");
        assert_eq!(format(-1e21, 4, 0), "-1,000,000,000,000,000,000K");
    }

    #[test]
    fn test_format_easy() {
        assert_eq!(format_easy(1234.5678, Some(2), RoundingMode::Down), "1,234.56");
        assert_eq!(format_easy(1234.5678, Some(2), RoundingMode::HalfUp), "1,234.57");
        assert_eq!(format_easy(1234.5678, None, RoundingMode::Down), "1,234.5678");
    }

    #[test]
    fn test_format_tiny() {
        assert_eq!(format_tiny(1234567, 6, 3), "1.234M");
        assert_eq!(format_tiny(1000000, 6, 3), "1M");
        assert_eq!(format_tiny(12.5, 0, 3), "12.5");
        assert_eq!(format_tiny(12, 8, 3), "12");
    }

    #[test]
    fn test_format_fill() {
        assert_eq!(format_fill(1000000, 6, 3, 0), "1.000M");
        assert_eq!(format_fill(123.456, 8, 3, 2), "123.45");
        assert_eq!(format_fill(123.456, 0, 3, 1), "123.4");
        assert_eq!(format_fill(123.456, 0, 3, -1), "123.456");
    }

    #[test]
    fn test_expo_formatters() {
        assert_eq!(expo_format_tiny(1500, Exponent::Kilo, 0, 3), "1.5K");
        assert_eq!(expo_format_tiny(1500, Exponent::None, 0, 3), "1,500");
        assert_eq!(expo_format_fill(1500, Exponent::Kilo, 0, 3, 0), "1.500K");
        assert_eq!(expo_format_fill(1500, Exponent::Kilo, 8, -1, 0), "1.50000K");
    }

    #[test]
    fn test_prefix_format() {
        assert_eq!(prefix_format(5.0, 2, 10).unwrap(), "05");
        assert_eq!(prefix_format(255.0, 4, 16).unwrap(), "00ff");
        assert_eq!(prefix_format(123.0, 2, 10).unwrap(), "123");
        assert!(prefix_format(1.0, 2, 40).is_err());
    }

    #[test]
    fn test_to_percentages() {
        assert_eq!(to_percentages(12.3456, 2, RoundMode::Floor), "12.34%");
        assert_eq!(to_percentages(12.3456, 2, RoundMode::Ceil), "12.35%");
        assert_eq!(to_percentages(50.0, 0, RoundMode::Floor), "50%");
    }

    #[test]
    fn test_trim_zero() {
        assert_eq!(trim_zero("007.500"), "7.5");
        assert_eq!(trim_zero("-0012.0"), "-12");
        assert_eq!(trim_zero("000"), "0");
        assert_eq!(trim_zero("0.50"), "0.5");
        assert_eq!(trim_zero("00.5"), "0.5");
        assert_eq!(trim_zero("100"), "100");
        assert_eq!(trim_zero("abc"), "abc");
        assert_eq!(trim_zero(""), "0");
    }
}
