//! Dynamically typed scalars, numeric coercion and string parsing.
//!
//! [`Value`] models the scalar kinds a loosely typed caller can hand over
//! (numbers, strings, booleans, null/undefined, and a number held in an
//! object wrapper). The predicates and coercions in this module decide what
//! counts as a number.
//!
//! # String grammar
//!
//! Whitespace is the Unicode `White_Space` set without U+0085, plus the
//! byte-order mark U+FEFF. A decimal literal is
//!
//! ```text
//! [+-]? ( "Infinity" | digits ("." digits?)? exponent? | "." digits exponent? )
//! exponent = [eE] [+-]? digits
//! ```
//!
//! - [`Value::to_number`] needs the whole trimmed string to be a literal,
//!   or an unsigned `0x`/`0o`/`0b` integer; the empty string is `0`.
//! - [`parse_float_prefix`] takes the longest literal prefix.
//! - [`parse_int_prefix`] takes the longest run of digits valid in the base.
//!
//! Integer digits in bases other than 10 are accumulated in `f64`; results
//! above 2^53 in such bases may differ from the correctly rounded value in
//! the last place.

use std::fmt;

use crate::error::{NumericError, Result};

/// Largest integer `n` such that `n` and `n + 1` are both exactly
/// representable as `f64` (2^53 − 1).
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A dynamically typed scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    /// A number held in an object wrapper. Coerces like the number it holds
    /// but is not itself of number kind.
    Wrapped(f64),
    Str(String),
}

impl Value {
    /// Name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Undefined => "undefined",
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::Wrapped(_) => "wrapped number",
            Value::Str(_) => "string",
        }
    }

    /// Numeric coercion. Never fails; unconvertible values become NaN.
    ///
    /// | Kind | Result |
    /// |---|---|
    /// | `Undefined` | NaN |
    /// | `Null` | 0 |
    /// | `Bool` | 0 or 1 |
    /// | `Number`, `Wrapped` | the number |
    /// | `Str` | [`string_to_number`] |
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(b) => f64::from(u8::from(*b)),
            Value::Number(n) | Value::Wrapped(n) => *n,
            Value::Str(s) => string_to_number(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => write!(f, "undefined"),
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) | Value::Wrapped(n) => {
                write!(f, "{}", crate::format::to_shortest_string(*n))
            }
            Value::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(f64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

fn mismatch(name: &'static str, expected: &'static str, value: &Value) -> NumericError {
    NumericError::type_mismatch(name, expected, format!("{} {value}", value.kind()))
}

// ============================================================================
// Coercion and predicates
// ============================================================================

/// Converts `value` to a number, or returns `default` when the conversion
/// yields NaN.
///
/// # Examples
/// ```
/// use u_numkit::value::{to_number, Value};
/// assert_eq!(to_number(&Value::Null, 0.0), 0.0);
/// assert_eq!(to_number(&"test".into(), 0.0), 0.0);
/// assert_eq!(to_number(&"1".into(), 0.0), 1.0);
/// assert_eq!(to_number(&Value::Wrapped(42.0), 0.0), 42.0);
/// ```
pub fn to_number(value: &Value, default: f64) -> f64 {
    let n = value.to_number();
    if n.is_nan() {
        default
    } else {
        n
    }
}

/// Unwraps a number or wrapped number to its primitive value.
///
/// # Errors
/// - `TypeMismatch` for every other kind.
///
/// # Examples
/// ```
/// use u_numkit::value::{number_value, Value};
/// assert_eq!(number_value(&Value::Wrapped(5.0)).unwrap(), 5.0);
/// assert_eq!(number_value(&Value::Number(-5.0)).unwrap(), -5.0);
/// assert!(number_value(&"5".into()).is_err());
/// ```
pub fn number_value(value: &Value) -> Result<f64> {
    match value {
        Value::Number(n) | Value::Wrapped(n) => Ok(*n),
        other => Err(mismatch("value", "a number or wrapped number", other)),
    }
}

/// True iff `value` is a finite number. Strings and wrapped numbers are not.
///
/// # Examples
/// ```
/// use u_numkit::value::{is_number, Value};
/// assert!(is_number(&Value::Number(0.0)));
/// assert!(!is_number(&Value::Number(f64::INFINITY)));
/// assert!(!is_number(&"5".into()));
/// ```
pub fn is_number(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite())
}

/// True iff `value` is a number with no fractional part.
///
/// # Examples
/// ```
/// use u_numkit::value::{is_integer, Value};
/// assert!(is_integer(&Value::Number(5.0)));
/// assert!(!is_integer(&Value::Number(5.1)));
/// assert!(!is_integer(&"5".into()));
/// ```
pub fn is_integer(value: &Value) -> bool {
    matches!(value, Value::Number(n) if n.is_finite() && n.trunc() == *n)
}

/// Whether a number is an integer with magnitude at most
/// [`MAX_SAFE_INTEGER`].
///
/// # Errors
/// - `TypeMismatch` if `value` is not of number kind.
///
/// # Examples
/// ```
/// use u_numkit::value::{is_safe_integer, Value};
/// assert!(is_safe_integer(&Value::Number(10.0)).unwrap());
/// assert!(!is_safe_integer(&Value::Number(3.5)).unwrap());
/// assert!(!is_safe_integer(&Value::Number(2f64.powi(53))).unwrap());
/// ```
pub fn is_safe_integer(value: &Value) -> Result<bool> {
    match value {
        Value::Number(n) => Ok(is_integer(value) && n.abs() <= MAX_SAFE_INTEGER),
        other => Err(mismatch("value", "a number", other)),
    }
}

// ============================================================================
// Parsing
// ============================================================================

/// Parses a whole string as a number.
///
/// # Errors
/// - `InvalidValue` if the string does not convert to a number.
///
/// # Examples
/// ```
/// use u_numkit::value::parse_number;
/// assert_eq!(parse_number("100").unwrap(), 100.0);
/// assert_eq!(parse_number("-525.5").unwrap(), -525.5);
/// assert!(parse_number("abc").is_err());
/// ```
pub fn parse_number(s: &str) -> Result<f64> {
    let n = string_to_number(s);
    if n.is_nan() {
        return Err(NumericError::invalid(
            "value",
            format!("{s:?} is not a valid number"),
        ));
    }
    Ok(n)
}

/// Leading floating-point number of a string value, or NaN if there is none.
///
/// # Errors
/// - `TypeMismatch` if `value` is not a string.
///
/// # Examples
/// ```
/// use u_numkit::value::parse_float;
/// assert_eq!(parse_float(&"4.567abcdefgh".into()).unwrap(), 4.567);
/// assert!(parse_float(&"abcdefgh".into()).unwrap().is_nan());
/// assert!(parse_float(&4.5.into()).is_err());
/// ```
pub fn parse_float(value: &Value) -> Result<f64> {
    match value {
        Value::Str(s) => Ok(parse_float_prefix(s)),
        other => Err(mismatch("value", "a string", other)),
    }
}

/// Leading integer of a string value in `base`, or NaN if there is none.
///
/// # Errors
/// - `TypeMismatch` if `value` is not a string.
/// - `InvalidValue` if `base` is outside `2..=36`.
///
/// # Examples
/// ```
/// use u_numkit::value::parse_int;
/// assert_eq!(parse_int(&"4.567abcdefgh".into(), 10).unwrap(), 4.0);
/// assert_eq!(parse_int(&"1.234".into(), 2).unwrap(), 1.0);
/// assert_eq!(parse_int(&"10".into(), 8).unwrap(), 8.0);
/// assert!(parse_int(&"abcdefgh".into(), 10).unwrap().is_nan());
/// ```
pub fn parse_int(value: &Value, base: u32) -> Result<f64> {
    let s = match value {
        Value::Str(s) => s,
        other => return Err(mismatch("value", "a string", other)),
    };
    if !(2..=36).contains(&base) {
        return Err(NumericError::invalid(
            "base",
            format!("must be an integer between 2 and 36, got {base}"),
        ));
    }
    Ok(parse_int_prefix(s, base))
}

/// Converts a whole string to a number; NaN when it is not a literal.
pub fn string_to_number(s: &str) -> f64 {
    let t = s.trim_matches(is_space);
    if t.is_empty() {
        return 0.0;
    }

    let radix = match t.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &t[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return accumulate_digits(digits, radix);
    }

    if scan_decimal_literal(t) != t.len() {
        return f64::NAN;
    }
    decimal_literal_value(t)
}

/// Longest leading decimal literal after leading whitespace; NaN if none.
///
/// # Examples
/// ```
/// use u_numkit::value::parse_float_prefix;
/// assert_eq!(parse_float_prefix("  -12.5e2xyz"), -1250.0);
/// assert_eq!(parse_float_prefix("Infinityx"), f64::INFINITY);
/// assert!(parse_float_prefix(".").is_nan());
/// ```
pub fn parse_float_prefix(s: &str) -> f64 {
    let t = s.trim_start_matches(is_space);
    match scan_decimal_literal(t) {
        0 => f64::NAN,
        len => decimal_literal_value(&t[..len]),
    }
}

/// Longest leading integer in `base` after whitespace and an optional sign.
///
/// With base 16 a `0x`/`0X` prefix is skipped. Returns NaN when no digit is
/// found. `base` must lie in `2..=36`; other bases yield NaN.
///
/// # Examples
/// ```
/// use u_numkit::value::parse_int_prefix;
/// assert_eq!(parse_int_prefix("-0x1F", 16), -31.0);
/// assert_eq!(parse_int_prefix("  12abc", 10), 12.0);
/// assert!(parse_int_prefix("z", 35).is_nan());
/// ```
pub fn parse_int_prefix(s: &str, base: u32) -> f64 {
    if !(2..=36).contains(&base) {
        return f64::NAN;
    }
    let mut t = s.trim_start_matches(is_space);
    let negative = t.starts_with('-');
    if let Some(rest) = t.strip_prefix(['+', '-']) {
        t = rest;
    }
    if base == 16 {
        if let Some(rest) = t.strip_prefix("0x").or_else(|| t.strip_prefix("0X")) {
            t = rest;
        }
    }

    let len = t
        .find(|c: char| !c.is_digit(base))
        .unwrap_or(t.len());
    if len == 0 {
        return f64::NAN;
    }
    let digits = &t[..len];
    let magnitude = if base == 10 {
        // correctly rounded for long digit runs
        digits.parse().unwrap_or(f64::NAN)
    } else {
        accumulate_digits(digits, base)
    };
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

/// Byte length of the longest decimal literal at the start of `s`.
fn scan_decimal_literal(s: &str) -> usize {
    let b = s.as_bytes();
    let count_digits = |from: usize| b[from..].iter().take_while(|c| c.is_ascii_digit()).count();

    let mut i = 0;
    if matches!(b.first(), Some(b'+' | b'-')) {
        i += 1;
    }
    if s[i..].starts_with("Infinity") {
        return i + "Infinity".len();
    }

    let int_digits = count_digits(i);
    i += int_digits;
    let mut frac_digits = 0;
    if b.get(i) == Some(&b'.') {
        frac_digits = count_digits(i + 1);
        if int_digits > 0 || frac_digits > 0 {
            i += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if matches!(b.get(i), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j), Some(b'+' | b'-')) {
            j += 1;
        }
        let exp_digits = count_digits(j);
        if exp_digits > 0 {
            i = j + exp_digits;
        }
    }
    i
}

/// Value of a string already accepted by [`scan_decimal_literal`].
fn decimal_literal_value(literal: &str) -> f64 {
    match literal {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ => literal.parse().unwrap_or(f64::NAN),
    }
}

fn accumulate_digits(digits: &str, radix: u32) -> f64 {
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_number_defaults() {
        assert_eq!(to_number(&Value::Null, 0.0), 0.0);
        assert_eq!(to_number(&Value::Undefined, 7.0), 7.0);
        assert_eq!(to_number(&"1".into(), 0.0), 1.0);
        assert_eq!(to_number(&42.0.into(), 0.0), 42.0);
        assert_eq!(to_number(&true.into(), 0.0), 1.0);
        assert_eq!(to_number(&"".into(), 9.0), 0.0);
    }

    #[test]
    fn test_string_to_number_literals() {
        assert_eq!(string_to_number("\t 42 \n"), 42.0);
        assert_eq!(string_to_number("\u{feff}7"), 7.0);
        assert_eq!(string_to_number(".5"), 0.5);
        assert_eq!(string_to_number("1."), 1.0);
        assert_eq!(string_to_number("+.5e-3"), 0.0005);
        assert_eq!(string_to_number("-Infinity"), f64::NEG_INFINITY);
        assert!(string_to_number("-0").is_sign_negative());
        assert_eq!(string_to_number("1e400"), f64::INFINITY);
    }

    #[test]
    fn test_string_to_number_prefixed_integers() {
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("0b101"), 5.0);
        assert_eq!(string_to_number("0o17"), 15.0);
        assert!(string_to_number("0X").is_nan());
        assert!(string_to_number("-0x10").is_nan());
        assert!(string_to_number("0b102").is_nan());
    }

    #[test]
    fn test_string_to_number_rejects() {
        for s in ["abc", "1e", "1_000", "1,5", "inf", "infinity", "NaN", ".", "++1", "1.2.3", "\u{85}12"] {
            assert!(string_to_number(s).is_nan(), "{s:?} should be NaN");
        }
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("37").unwrap(), 37.0);
        assert_eq!(parse_number("  ").unwrap(), 0.0);
        assert!(parse_number("12e+").unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_number_value() {
        assert!(number_value(&Value::Null).unwrap_err().is_type_mismatch());
        assert!(number_value(&Value::Undefined).is_err());
        assert!(number_value(&Value::Number(f64::NAN)).unwrap().is_nan());
    }

    #[test]
    fn test_is_number() {
        assert!(is_number(&Value::from(5_i32)));
        assert!(!is_number(&Value::Number(f64::NAN)));
        assert!(!is_number(&Value::Wrapped(5.0)));
        assert!(!is_number(&Value::Bool(true)));
    }

    #[test]
    fn test_is_integer() {
        assert!(is_integer(&Value::Number(-0.0)));
        assert!(is_integer(&Value::Number(1e300)));
        assert!(!is_integer(&Value::Number(f64::INFINITY)));
        assert!(!is_integer(&Value::Wrapped(5.0)));
    }

    #[test]
    fn test_is_safe_integer() {
        assert!(is_safe_integer(&Value::Number(MAX_SAFE_INTEGER)).unwrap());
        assert!(is_safe_integer(&Value::Number(-MAX_SAFE_INTEGER)).unwrap());
        assert!(!is_safe_integer(&Value::Number(f64::NAN)).unwrap());
        assert!(is_safe_integer(&"10".into()).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("1e3"), 1000.0);
        assert_eq!(parse_float_prefix("1e"), 1.0);
        assert_eq!(parse_float_prefix("12e+3x"), 12000.0);
        assert_eq!(parse_float_prefix("\u{3000}3.5\u{3000}"), 3.5);
        assert!(parse_float_prefix("").is_nan());
        assert!(parse_float_prefix("-").is_nan());
        assert!(parse_float_prefix("infinity").is_nan());
    }

    #[test]
    fn test_parse_float_type() {
        assert!(parse_float(&Value::Null).unwrap_err().is_type_mismatch());
        assert!(parse_float(&Value::Wrapped(1.0)).is_err());
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("ff", 16), 255.0);
        assert_eq!(parse_int_prefix("0xff", 16), 255.0);
        assert_eq!(parse_int_prefix("0xff", 10), 0.0);
        assert_eq!(parse_int_prefix("Z9", 36), 1269.0);
        assert_eq!(parse_int_prefix("1e3", 10), 1.0);
        assert!(parse_int_prefix("-0", 10).is_sign_negative());
        assert!(parse_int_prefix("2", 2).is_nan());
        assert_eq!(
            parse_int_prefix("123456789012345678901234567890", 10),
            1.2345678901234568e29
        );
    }

    #[test]
    fn test_parse_int_validation() {
        assert!(parse_int(&"10".into(), 1).unwrap_err().is_invalid_value());
        assert!(parse_int(&"10".into(), 37).unwrap_err().is_invalid_value());
        assert!(parse_int(&Value::from(10_i64), 10).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Str("a".into()).to_string(), "\"a\"");
        assert_eq!(Value::Number(1e21).to_string(), "1e+21");
        assert_eq!(Value::Undefined.to_string(), "undefined");
    }

    #[test]
    fn test_mismatch_message_names_kind() {
        let e = number_value(&"5".into()).unwrap_err();
        assert_eq!(
            e.to_string(),
            "value must be a number or wrapped number, got string \"5\""
        );
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::format::to_shortest_string;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn parse_number_round_trips(x in proptest::num::f64::NORMAL | proptest::num::f64::ZERO) {
            let parsed = parse_number(&to_shortest_string(x)).unwrap();
            prop_assert_eq!(parsed, x);
        }

        #[test]
        fn parse_number_accepts_display(x in -1e9_f64..1e9) {
            prop_assert_eq!(parse_number(&x.to_string()).unwrap(), x);
        }

        #[test]
        fn parse_int_matches_from_str_radix(n in 0_i64..1_000_000_000, base in 2_u32..=36) {
            let s = crate::format::to_radix_string(n as f64, base).unwrap();
            prop_assert_eq!(parse_int_prefix(&s, base), n as f64);
        }

        #[test]
        fn parse_float_ignores_trailing_garbage(x in -1e6_f64..1e6, tail in "[a-df-z ]{0,5}") {
            let s = format!("{}{tail}", to_shortest_string(x));
            prop_assert_eq!(parse_float_prefix(&s), x);
        }

        #[test]
        fn safe_integers_are_integers(n in -9_007_199_254_740_991_i64..=9_007_199_254_740_991) {
            let v = Value::from(n);
            prop_assert!(is_safe_integer(&v).unwrap());
            prop_assert!(is_integer(&v));
        }
    }
}
