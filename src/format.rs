//! Number-to-string conversions.
//!
//! | Function | Output |
//! |---|---|
//! | [`to_shortest_string`] | shortest round-trip decimal, `1e+21` style exponent |
//! | [`to_radix_string`] | digits `0-9a-z` in base 2..=36 |
//! | [`to_fixed`] | fixed number of fraction digits |
//! | [`to_exponential`] | `d.ddde±N` |
//! | [`to_precision`] | fixed number of significant digits |
//!
//! # Rounding
//!
//! `to_fixed`, `to_exponential` and `to_precision` round the *exact* binary
//! value of the input, half away from zero. `1.005` is stored as
//! `1.00499999999999989…`, so `to_fixed(1.005, 2)` is `"1.00"`, while
//! `2.5` is exact and `to_fixed(2.5, 0)` is `"3"`.
//!
//! The exact decimal expansion is obtained from the standard library's
//! formatter with a precision large enough to hold every digit of any
//! `f64` (at most 767 significant digits, 1074 fraction digits).
//!
//! # Radix conversion
//!
//! The fraction part of [`to_radix_string`] stops as soon as the digits
//! written identify the input uniquely: generation ends once the remaining
//! fraction is below half the gap to the next representable `f64`, scaled
//! along with the digits.

use crate::error::{require_number, NumericError, Result};

/// Largest digit count accepted by the fixed/exponential/precision notations.
pub const MAX_FRACTION_DIGITS: usize = 100;

/// Inputs at or above this magnitude bypass fixed notation.
const FIXED_NOTATION_LIMIT: f64 = 1e21;

/// 2^53: integers at or above this have no fractional bits.
const TWO_POW_53: f64 = 9_007_199_254_740_992.0;

const EXACT_SIGNIFICANT_DIGITS: usize = 800;
const EXACT_FRACTION_DIGITS: usize = 1100;

const RADIX_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

// ============================================================================
// Shortest decimal
// ============================================================================

/// Shortest decimal string that parses back to `x`.
///
/// Plain notation is used while the decimal exponent lies in `[-7, 21)`;
/// outside it the output switches to `d.ddde±N`. Negative zero prints as
/// `"0"`.
///
/// # Examples
/// ```
/// use u_numkit::format::to_shortest_string;
/// assert_eq!(to_shortest_string(-525.5), "-525.5");
/// assert_eq!(to_shortest_string(1e21), "1e+21");
/// assert_eq!(to_shortest_string(0.000001), "0.000001");
/// assert_eq!(to_shortest_string(1e-7), "1e-7");
/// assert_eq!(to_shortest_string(f64::NAN), "NaN");
/// ```
pub fn to_shortest_string(x: f64) -> String {
    if let Some(s) = non_finite(x) {
        return s.to_string();
    }
    if x == 0.0 {
        return "0".to_string();
    }

    // `{:e}` yields the shortest round-trip digits as "d.ddde<exp>"
    let (digits, exp) = split_exponential(&format!("{:e}", x.abs()));
    let k = digits.len() as i32;
    let n = exp + 1;

    let mut out = String::with_capacity(digits.len() + 8);
    if x < 0.0 {
        out.push('-');
    }
    if k <= n && n <= 21 {
        out.push_str(&digits);
        out.push_str(&"0".repeat((n - k) as usize));
    } else if 0 < n && n <= 21 {
        out.push_str(&digits[..n as usize]);
        out.push('.');
        out.push_str(&digits[n as usize..]);
    } else if -6 < n && n <= 0 {
        out.push_str("0.");
        out.push_str(&"0".repeat((-n) as usize));
        out.push_str(&digits);
    } else {
        push_scientific(&mut out, digits.as_bytes(), n - 1);
    }
    out
}

// ============================================================================
// Radix
// ============================================================================

/// String representation of `x` in the given base.
///
/// Base 10 delegates to [`to_shortest_string`].
///
/// # Errors
/// - `TypeMismatch` if `x` is NaN.
/// - `InvalidValue` if `base` is outside `2..=36`.
///
/// # Examples
/// ```
/// use u_numkit::format::to_radix_string;
/// assert_eq!(to_radix_string(255.0, 16).unwrap(), "ff");
/// assert_eq!(to_radix_string(2.0, 2).unwrap(), "10");
/// assert_eq!(to_radix_string(-255.5, 16).unwrap(), "-ff.8");
/// assert!(to_radix_string(10.0, 37).is_err());
/// ```
pub fn to_radix_string(x: f64, base: u32) -> Result<String> {
    require_number("number", x)?;
    if !(2..=36).contains(&base) {
        return Err(NumericError::invalid(
            "base",
            format!("must be between 2 and 36, got {base}"),
        ));
    }
    if base == 10 || x.is_infinite() {
        return Ok(to_shortest_string(x));
    }

    let radix = f64::from(base);
    let negative = x < 0.0;
    let value = x.abs();

    let mut integer = value.floor();
    let mut fraction = value - integer;
    // half the distance to the next representable value, never below the
    // smallest subnormal
    let next = f64::from_bits(value.to_bits() + 1);
    let mut delta = (0.5 * (next - value)).max(f64::from_bits(1));

    let mut fraction_digits: Vec<u32> = Vec::new();
    if fraction >= delta {
        loop {
            fraction *= radix;
            delta *= radix;
            let digit = fraction as u32;
            fraction_digits.push(digit);
            fraction -= f64::from(digit);
            let past_half = fraction > 0.5 || (fraction == 0.5 && (digit & 1) == 1);
            if past_half && fraction + delta > 1.0 {
                round_up_fraction(&mut fraction_digits, &mut integer, base);
                break;
            }
            if fraction < delta {
                break;
            }
        }
    }

    let mut integer_digits: Vec<u8> = Vec::new();
    while integer / radix >= TWO_POW_53 {
        integer /= radix;
        integer_digits.push(b'0');
    }
    loop {
        let remainder = integer % radix;
        integer_digits.push(RADIX_DIGITS[remainder as usize]);
        integer = (integer - remainder) / radix;
        if integer <= 0.0 {
            break;
        }
    }

    let mut out = String::with_capacity(integer_digits.len() + fraction_digits.len() + 2);
    if negative {
        out.push('-');
    }
    out.extend(integer_digits.iter().rev().map(|&b| char::from(b)));
    if !fraction_digits.is_empty() {
        out.push('.');
        out.extend(
            fraction_digits
                .iter()
                .map(|&d| char::from(RADIX_DIGITS[d as usize])),
        );
    }
    Ok(out)
}

/// Adds one unit in the last fraction place, dropping digits that overflow
/// and carrying into the integer part when none remain.
fn round_up_fraction(digits: &mut Vec<u32>, integer: &mut f64, base: u32) {
    while let Some(last) = digits.pop() {
        if last + 1 < base {
            digits.push(last + 1);
            return;
        }
    }
    *integer += 1.0;
}

// ============================================================================
// Fixed / exponential / precision
// ============================================================================

/// Fixed-point notation with `fraction_digits` digits after the point.
///
/// Magnitudes of `1e21` and above fall back to [`to_shortest_string`].
/// Non-finite inputs return `"NaN"`, `"Infinity"` or `"-Infinity"`.
///
/// # Errors
/// - `InvalidValue` if `fraction_digits > 100`.
///
/// # Examples
/// ```
/// use u_numkit::format::to_fixed;
/// assert_eq!(to_fixed(12345.0, 2).unwrap(), "12345.00");
/// assert_eq!(to_fixed(12.345, 1).unwrap(), "12.3");
/// assert_eq!(to_fixed(2.5, 0).unwrap(), "3");
/// ```
pub fn to_fixed(x: f64, fraction_digits: usize) -> Result<String> {
    check_digit_count("fraction_digits", fraction_digits, 0)?;
    if !x.is_finite() || x.abs() >= FIXED_NOTATION_LIMIT {
        return Ok(to_shortest_string(x));
    }

    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, x.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));
    let frac_part = frac_part.as_bytes();

    let mut digits: Vec<u8> = int_part.as_bytes().to_vec();
    digits.extend_from_slice(&frac_part[..fraction_digits]);
    if frac_part[fraction_digits] >= b'5' && increment(&mut digits) {
        digits.insert(0, b'1');
    }

    let int_len = digits.len() - fraction_digits;
    let mut out = String::with_capacity(digits.len() + 2);
    if x < 0.0 {
        out.push('-');
    }
    out.push_str(ascii(&digits[..int_len]));
    if fraction_digits > 0 {
        out.push('.');
        out.push_str(ascii(&digits[int_len..]));
    }
    Ok(out)
}

/// Exponential notation with one integer digit and `fraction_digits`
/// digits after the point.
///
/// # Errors
/// - `InvalidValue` if `fraction_digits > 100`.
///
/// # Examples
/// ```
/// use u_numkit::format::to_exponential;
/// assert_eq!(to_exponential(12345.0, 2).unwrap(), "1.23e+4");
/// assert_eq!(to_exponential(0.00015, 1).unwrap(), "1.5e-4");
/// assert_eq!(to_exponential(0.0, 0).unwrap(), "0e+0");
/// ```
pub fn to_exponential(x: f64, fraction_digits: usize) -> Result<String> {
    check_digit_count("fraction_digits", fraction_digits, 0)?;
    if let Some(s) = non_finite(x) {
        return Ok(s.to_string());
    }

    let (digits, exp) = round_significant(x.abs(), fraction_digits + 1);
    let mut out = String::with_capacity(digits.len() + 8);
    if x < 0.0 {
        out.push('-');
    }
    push_scientific(&mut out, &digits, exp);
    Ok(out)
}

/// Notation with exactly `precision` significant digits.
///
/// Exponential notation is used when the decimal exponent is below `-6` or
/// at least `precision`; plain notation otherwise.
///
/// # Errors
/// - `InvalidValue` if `precision` is 0 or above 100.
///
/// # Examples
/// ```
/// use u_numkit::format::to_precision;
/// assert_eq!(to_precision(12345.0, 7).unwrap(), "12345.00");
/// assert_eq!(to_precision(12.345, 4).unwrap(), "12.35");
/// assert_eq!(to_precision(12345.0, 2).unwrap(), "1.2e+4");
/// assert_eq!(to_precision(0.00012, 2).unwrap(), "0.00012");
/// ```
pub fn to_precision(x: f64, precision: usize) -> Result<String> {
    check_digit_count("precision", precision, 1)?;
    if let Some(s) = non_finite(x) {
        return Ok(s.to_string());
    }

    let (digits, exp) = round_significant(x.abs(), precision);
    let p = precision as i32;
    let mut out = String::with_capacity(digits.len() + 10);
    if x < 0.0 {
        out.push('-');
    }
    if exp < -6 || exp >= p {
        push_scientific(&mut out, &digits, exp);
    } else if exp >= 0 {
        let split = (exp + 1) as usize;
        out.push_str(ascii(&digits[..split]));
        if split < digits.len() {
            out.push('.');
            out.push_str(ascii(&digits[split..]));
        }
    } else {
        out.push_str("0.");
        out.push_str(&"0".repeat((-(exp + 1)) as usize));
        out.push_str(ascii(&digits));
    }
    Ok(out)
}

// ============================================================================
// Digit helpers
// ============================================================================

fn check_digit_count(name: &'static str, count: usize, min: usize) -> Result<()> {
    if count < min || count > MAX_FRACTION_DIGITS {
        return Err(NumericError::invalid(
            name,
            format!("must be between {min} and {MAX_FRACTION_DIGITS}, got {count}"),
        ));
    }
    Ok(())
}

fn non_finite(x: f64) -> Option<&'static str> {
    if x.is_nan() {
        Some("NaN")
    } else if x == f64::INFINITY {
        Some("Infinity")
    } else if x == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Splits `"d.ddde<exp>"` into its digit string and decimal exponent.
fn split_exponential(s: &str) -> (String, i32) {
    let (mantissa, exp) = s.split_once('e').unwrap_or((s, "0"));
    let digits = mantissa.chars().filter(char::is_ascii_digit).collect();
    (digits, exp.parse().unwrap_or(0))
}

/// Rounds a non-negative finite value to `count` significant digits, half
/// away from zero on the exact binary value.
///
/// Returns ASCII digits and the decimal exponent of the first digit.
fn round_significant(a: f64, count: usize) -> (Vec<u8>, i32) {
    if a == 0.0 {
        return (vec![b'0'; count], 0);
    }
    let (exact, mut exp) = split_exponential(&format!("{:.*e}", EXACT_SIGNIFICANT_DIGITS, a));
    let exact = exact.as_bytes();
    let mut digits = exact[..count].to_vec();
    if exact[count] >= b'5' && increment(&mut digits) {
        digits = vec![b'0'; count];
        digits[0] = b'1';
        exp += 1;
    }
    (digits, exp)
}

/// Adds one to an ASCII digit string in place. Returns true when the carry
/// runs off the front (every digit was `9`).
fn increment(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

fn push_scientific(out: &mut String, digits: &[u8], exp: i32) {
    out.push(char::from(digits[0]));
    if digits.len() > 1 {
        out.push('.');
        out.push_str(ascii(&digits[1..]));
    }
    out.push('e');
    out.push(if exp >= 0 { '+' } else { '-' });
    out.push_str(&exp.unsigned_abs().to_string());
}

fn ascii(digits: &[u8]) -> &str {
    // digits are always drawn from b'0'..=b'9'
    std::str::from_utf8(digits).unwrap_or_default()
}

// ============================================================================
// Tests
// ============================================================================
