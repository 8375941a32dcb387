// ============================================================================
// Number Text
// Host number <-> text rules used by NumericValue
// ============================================================================
//
// Display strings follow the classic host-number conventions the rest of the
// client formats against: shortest round-trip digits, plain notation inside
// [1e-6, 1e21), exponent notation outside, and "Infinity"/"NaN" spellings.
// Parsing mirrors the lenient prefix parsers (`parseFloat` / `parseInt`).

/// Fractional digits needed to print any finite f64 exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// Largest precision accepted by [`to_fixed`].
pub(crate) const MAX_FIXED_DIGITS: usize = 100;

/// Shortest round-trip string for `x`.
pub(crate) fn shortest(x: f64) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x == 0.0 {
        // Negative zero prints as "0"
        return "0".to_string();
    }
    if x.is_infinite() {
        return if x > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    let sign = if x < 0.0 { "-" } else { "" };
    let sci = format!("{:e}", x.abs());
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return format!("{sign}{sci}");
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= 21 {
        let mut s = digits;
        s.push_str(&"0".repeat((n - k) as usize));
        s
    } else if 0 < n && n <= 21 {
        let (int_digits, frac_digits) = digits.split_at(n as usize);
        format!("{int_digits}.{frac_digits}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let e_sign = if e >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{e_sign}{}", e.abs())
        } else {
            format!("{lead}.{rest}e{e_sign}{}", e.abs())
        }
    };

    format!("{sign}{body}")
}

/// Fixed-point string with `digits` fractional digits.
///
/// Rounds on the exact binary value, ties away from zero. Magnitudes at or
/// above 1e21 fall back to [`shortest`]. `digits` is capped at 100.
pub(crate) fn to_fixed(x: f64, digits: usize) -> String {
    if x.is_nan() {
        return "NaN".to_string();
    }
    if x.abs() >= 1e21 {
        return shortest(x);
    }

    let digits = digits.min(MAX_FIXED_DIGITS);
    let negative = x < 0.0;
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, x.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .map(|b| b - b'0')
        .collect();

    let round_up = frac_part
        .as_bytes()
        .get(digits)
        .is_some_and(|&next| next >= b'5');

    let mut int_len = int_part.len();
    if round_up {
        let mut carry = true;
        for d in kept.iter_mut().rev() {
            if !carry {
                break;
            }
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                carry = false;
            }
        }
        if carry {
            kept.insert(0, 1);
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(kept.len() + 2);
    if negative {
        out.push('-');
    }
    for (i, d) in kept.iter().enumerate() {
        if i == int_len {
            out.push('.');
        }
        out.push(char::from(b'0' + d));
    }
    out
}

fn is_host_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

/// Lenient decimal parse: longest numeric prefix, NaN when none.
pub(crate) fn parse_float(s: &str) -> f64 {
    let s = s.trim_start_matches(is_host_whitespace);
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        },
        Some(b'+') => {
            pos += 1;
            false
        },
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return if negative { f64::NEG_INFINITY } else { f64::INFINITY };
    }

    let start = pos;
    let count_digits = |from: usize| bytes[from..].iter().take_while(|b| b.is_ascii_digit()).count();

    let int_digits = count_digits(pos);
    pos += int_digits;

    let mut frac_digits = 0;
    if bytes.get(pos) == Some(&b'.') {
        frac_digits = count_digits(pos + 1);
        if int_digits > 0 || frac_digits > 0 {
            pos += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut exp_pos = pos + 1;
        if matches!(bytes.get(exp_pos), Some(b'+') | Some(b'-')) {
            exp_pos += 1;
        }
        let exp_digits = count_digits(exp_pos);
        if exp_digits > 0 {
            pos = exp_pos + exp_digits;
        }
    }

    let magnitude: f64 = s[start..pos].parse().unwrap_or(f64::NAN);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Lenient integer parse in `radix`: digits up to the first invalid one.
///
/// Radix 0 means 10; any other radix outside 2..=36 yields NaN. Radix 16
/// accepts a `0x` prefix.
pub(crate) fn parse_int(s: &str, radix: u32) -> f64 {
    let mut s = s.trim_start_matches(is_host_whitespace);

    let negative = if let Some(rest) = s.strip_prefix('-') {
        s = rest;
        true
    } else {
        if let Some(rest) = s.strip_prefix('+') {
            s = rest;
        }
        false
    };

    let radix = if radix == 0 { 10 } else { radix };
    if !(2..=36).contains(&radix) {
        return f64::NAN;
    }
    if radix == 16 {
        if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            s = rest;
        }
    }

    let mut value = 0.0_f64;
    let mut any = false;
    for c in s.chars() {
        let Some(d) = c.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(d);
        any = true;
    }

    if !any {
        return f64::NAN;
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_plain_range() {
        assert_eq!(shortest(0.1), "0.1");
        assert_eq!(shortest(123.456), "123.456");
        assert_eq!(shortest(100.0), "100");
        assert_eq!(shortest(-42.5), "-42.5");
        assert_eq!(shortest(0.000001), "0.000001");
        assert_eq!(shortest(1e20), "100000000000000000000");
    }

    #[test]
    fn test_shortest_exponent_range() {
        assert_eq!(shortest(1e21), "1e+21");
        assert_eq!(shortest(1.5e-7), "1.5e-7");
        assert_eq!(shortest(1e-7), "1e-7");
        assert_eq!(shortest(5e-324), "5e-324");
    }

    #[test]
    fn test_shortest_special_values() {
        assert_eq!(shortest(f64::NAN), "NaN");
        assert_eq!(shortest(f64::INFINITY), "Infinity");
        assert_eq!(shortest(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(shortest(-0.0), "0");
    }

    #[test]
    fn test_to_fixed_rounds_exact_value() {
        assert_eq!(to_fixed(1.005, 2), "1.00"); // 1.00499999...
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(9.999, 2), "10.00");
        assert_eq!(to_fixed(1234.5, 3), "1234.500");
    }

    #[test]
    fn test_to_fixed_signs() {
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(f64::NAN, 2), "NaN");
        assert_eq!(to_fixed(f64::INFINITY, 2), "Infinity");
        assert_eq!(to_fixed(1e21, 2), "1e+21");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float("3.14abc"), 3.14);
        assert_eq!(parse_float("  -12"), -12.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3x"), 1000.0);
        assert_eq!(parse_float("1e"), 1.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
        assert!(parse_float("abc").is_nan());
        assert!(parse_float("").is_nan());
        assert!(parse_float(".").is_nan());
    }

    #[test]
    fn test_parse_int_radix() {
        assert_eq!(parse_int("ff", 16), 255.0);
        assert_eq!(parse_int("0xff", 16), 255.0);
        assert_eq!(parse_int("-101", 2), -5.0);
        assert_eq!(parse_int("12.9", 8), 10.0);
        assert_eq!(parse_int("z", 36), 35.0);
        assert_eq!(parse_int("42", 0), 42.0);
        assert!(parse_int("9", 8).is_nan());
        assert!(parse_int("1", 37).is_nan());
        assert!(parse_int("1", 1).is_nan());
    }
}
