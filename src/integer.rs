//! Integer and number-theoretic helpers.
//!
//! Inputs are `i64` so that negative arguments remain representable and
//! are rejected explicitly. Results that do not fit the return type are
//! rejected as well rather than wrapping.
//!
//! # Algorithms
//!
//! - **Primality**: trial division by 2 and the odd integers up to √n.
//! - **Fibonacci**: iterative pair update, F(0) = 0, F(1) = 1.
//! - **Sum 1..n**: Gauss' closed form n(n+1)/2.

use crate::error::{NumericError, Result};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_FIBONACCI_INDEX: i64 = 93;

fn require_non_negative(name: &'static str, n: i64) -> Result<u64> {
    u64::try_from(n)
        .map_err(|_| NumericError::invalid(name, format!("must be non-negative, got {n}")))
}

/// Last decimal digit of a non-negative integer.
///
/// # Examples
/// ```
/// use u_numkit::integer::last_digit;
/// assert_eq!(last_digit(100).unwrap(), 0);
/// assert_eq!(last_digit(37).unwrap(), 7);
/// assert!(last_digit(-1).is_err());
/// ```
pub fn last_digit(value: i64) -> Result<u8> {
    let value = require_non_negative("value", value)?;
    Ok((value % 10) as u8)
}

/// Primality test by trial division.
///
/// Never fails: integers below 2 are simply not prime.
///
/// # Complexity
/// Time: O(√n), Space: O(1)
///
/// # Examples
/// ```
/// use u_numkit::integer::is_prime;
/// assert!(is_prime(2));
/// assert!(is_prime(17));
/// assert!(!is_prime(1));
/// assert!(!is_prime(9));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut i = 3;
    // i <= n / i avoids overflowing i * i near i64::MAX
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Fibonacci number at `index`, with F(0) = 0 and F(1) = 1.
///
/// # Errors
/// - `InvalidValue` if `index` is negative or above
///   [`MAX_FIBONACCI_INDEX`].
///
/// # Examples
/// ```
/// use u_numkit::integer::fibonacci;
/// assert_eq!(fibonacci(0).unwrap(), 0);
/// assert_eq!(fibonacci(10).unwrap(), 55);
/// assert!(fibonacci(-1).is_err());
/// ```
pub fn fibonacci(index: i64) -> Result<u64> {
    let index = require_non_negative("index", index)?;
    if index > MAX_FIBONACCI_INDEX as u64 {
        return Err(NumericError::invalid(
            "index",
            format!("must be at most {MAX_FIBONACCI_INDEX}, got {index}"),
        ));
    }

    let (mut prev, mut current) = (0_u64, 1_u64);
    if index == 0 {
        return Ok(prev);
    }
    for _ in 1..index {
        let next = prev + current;
        prev = current;
        current = next;
    }
    Ok(current)
}

/// Sum of the integers `1..=n`.
///
/// # Errors
/// - `InvalidValue` if `n < 1` or the sum overflows `i64`.
///
/// # Examples
/// ```
/// use u_numkit::integer::sum_to_n;
/// assert_eq!(sum_to_n(5).unwrap(), 15);
/// assert_eq!(sum_to_n(1).unwrap(), 1);
/// assert!(sum_to_n(0).is_err());
/// ```
pub fn sum_to_n(n: i64) -> Result<i64> {
    if n < 1 {
        return Err(NumericError::invalid(
            "n",
            format!("must be a positive integer, got {n}"),
        ));
    }
    // one of n, n + 1 is even; divide it first
    let (a, b) = if n % 2 == 0 { (n / 2, n + 1) } else { (n, n / 2 + 1) };
    a.checked_mul(b)
        .ok_or_else(|| NumericError::invalid("n", format!("sum 1..={n} overflows i64")))
}

/// Sum of the decimal digits of a non-negative integer.
///
/// # Examples
/// ```
/// use u_numkit::integer::sum_of_digits;
/// assert_eq!(sum_of_digits(123).unwrap(), 6);
/// assert_eq!(sum_of_digits(202).unwrap(), 4);
/// ```
pub fn sum_of_digits(num: i64) -> Result<u32> {
    let mut rest = require_non_negative("num", num)?;
    let mut sum = 0;
    while rest > 0 {
        sum += (rest % 10) as u32;
        rest /= 10;
    }
    Ok(sum)
}

/// Returns true if `x` is an integral power of two (`2^k`, `k ∈ ℤ`).
///
/// Fractional powers such as `0.5` count. Zero, negatives, NaN and
/// infinities return false.
///
/// # Examples
/// ```
/// use u_numkit::integer::is_power_of_two;
/// assert!(is_power_of_two(16.0));
/// assert!(is_power_of_two(0.25));
/// assert!(!is_power_of_two(15.0));
/// assert!(!is_power_of_two(-4.0));
/// ```
pub fn is_power_of_two(x: f64) -> bool {
    x > 0.0 && x.log2().fract() == 0.0
}

/// Count of odd numbers in `0..=number`.
///
/// Not implemented yet; always fails with
/// [`NumericError::NotImplemented`].
pub fn count_odd_numbers(_number: i64) -> Result<u64> {
    Err(NumericError::NotImplemented("count_odd_numbers"))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_is_prime(n: i64) -> bool {
        n >= 2 && (2..).take_while(|d| d * d <= n).all(|d| n % d != 0)
    }

    #[test]
    fn test_last_digit() {
        assert_eq!(last_digit(5).unwrap(), 5);
        assert_eq!(last_digit(0).unwrap(), 0);
        assert!(last_digit(-10).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_is_prime_examples() {
        for n in [5, 7, 11, 17] {
            assert!(is_prime(n), "{n} should be prime");
        }
        for n in [4, 6, 12, 16] {
            assert!(!is_prime(n), "{n} should not be prime");
        }
    }

    #[test]
    fn test_is_prime_matches_naive() {
        for n in -10..=10_000 {
            assert_eq!(is_prime(n), naive_is_prime(n), "mismatch at {n}");
        }
    }

    #[test]
    fn test_is_prime_large() {
        assert!(is_prime(1_000_000_007));
        assert!(!is_prime(3 * 1_000_000_007));
        assert!(!is_prime(i64::MAX));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn test_fibonacci_small() {
        let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
        for (i, &f) in expected.iter().enumerate() {
            assert_eq!(fibonacci(i as i64).unwrap(), f);
        }
    }

    #[test]
    fn test_fibonacci_bounds() {
        assert_eq!(fibonacci(93).unwrap(), 12_200_160_415_121_876_738);
        assert!(fibonacci(94).unwrap_err().is_invalid_value());
        assert!(fibonacci(-1).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_sum_to_n() {
        assert_eq!(sum_to_n(10).unwrap(), 55);
        assert!(sum_to_n(-3).unwrap_err().is_invalid_value());
        assert!(sum_to_n(i64::MAX).unwrap_err().is_invalid_value());
    }

    #[test]
    fn test_sum_of_digits() {
        assert_eq!(sum_of_digits(5).unwrap(), 5);
        assert_eq!(sum_of_digits(0).unwrap(), 0);
        assert_eq!(sum_of_digits(i64::MAX).unwrap(), 88);
        assert!(sum_of_digits(-1).is_err());
    }

    #[test]
    fn test_is_power_of_two() {
        assert!(is_power_of_two(1.0));
        assert!(is_power_of_two(4.0));
        assert!(!is_power_of_two(0.0));
        assert!(!is_power_of_two(f64::NAN));
        assert!(!is_power_of_two(f64::INFINITY));
        assert!(!is_power_of_two(3.0));
    }

    #[test]
    fn test_count_odd_numbers_always_fails() {
        for n in [0, 4, 5, 10, 15, -1] {
            assert_eq!(
                count_odd_numbers(n),
                Err(NumericError::NotImplemented("count_odd_numbers"))
            );
        }
    }
}
