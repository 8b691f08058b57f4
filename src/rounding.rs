//! Rounding to integers and to powers of ten.
//!
//! [`round`] breaks ties toward +∞ (`2.5 → 3`, `-2.5 → -2`), which differs
//! from [`f64::round`] (ties away from zero). The other modes map directly
//! onto the standard library.

use crate::error::{require_number, Result};

/// Rounds to the nearest integer, ties toward +∞. Keeps the sign of zero.
fn round_half_up(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    if rounded == 0.0 && x.is_sign_negative() {
        -0.0
    } else {
        rounded
    }
}

/// Rounds `num` to a multiple of `10^pow`.
///
/// # Errors
/// - `TypeMismatch` if either argument is NaN.
///
/// # Examples
/// ```
/// use u_numkit::rounding::round_to_power_of_ten;
/// assert_eq!(round_to_power_of_ten(1234.0, 0).unwrap(), 1234.0);
/// assert_eq!(round_to_power_of_ten(1234.0, 2).unwrap(), 1200.0);
/// assert_eq!(round_to_power_of_ten(1678.0, 2).unwrap(), 1700.0);
/// assert_eq!(round_to_power_of_ten(1678.0, 3).unwrap(), 2000.0);
/// ```
pub fn round_to_power_of_ten(num: f64, pow: i32) -> Result<f64> {
    require_number("num", num)?;
    let factor = 10f64.powi(pow);
    Ok(round_half_up(num / factor) * factor)
}

/// Largest integer `≤ x`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::floor;
/// assert_eq!(floor(5.9).unwrap(), 5.0);
/// assert_eq!(floor(-5.1).unwrap(), -6.0);
/// ```
pub fn floor(x: f64) -> Result<f64> {
    require_number("number", x)?;
    Ok(x.floor())
}

/// Smallest integer `≥ x`.
///
/// # Examples
/// ```
/// use u_numkit::rounding::ceil;
/// assert_eq!(ceil(5.1).unwrap(), 6.0);
/// assert_eq!(ceil(-5.9).unwrap(), -5.0);
/// ```
pub fn ceil(x: f64) -> Result<f64> {
    require_number("number", x)?;
    Ok(x.ceil())
}

/// Nearest integer, ties toward +∞.
///
/// # Examples
/// ```
/// use u_numkit::rounding::round;
/// assert_eq!(round(5.5).unwrap(), 6.0);
/// assert_eq!(round(5.4).unwrap(), 5.0);
/// assert_eq!(round(-5.5).unwrap(), -5.0);
/// ```
pub fn round(x: f64) -> Result<f64> {
    require_number("number", x)?;
    Ok(round_half_up(x))
}

/// Integer part of `x` (rounds toward zero).
///
/// # Examples
/// ```
/// use u_numkit::rounding::trunc;
/// assert_eq!(trunc(5.5).unwrap(), 5.0);
/// assert_eq!(trunc(-5.5).unwrap(), -5.0);
/// ```
pub fn trunc(x: f64) -> Result<f64> {
    require_number("number", x)?;
    Ok(x.trunc())
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn floor_le_round_le_ceil(x in -1e12_f64..1e12) {
            let (f, r, c) = (floor(x).unwrap(), round(x).unwrap(), ceil(x).unwrap());
            prop_assert!(f <= r && r <= c);
            prop_assert!((r - x).abs() <= 0.5);
        }

        #[test]
        fn trunc_moves_toward_zero(x in -1e12_f64..1e12) {
            let t = trunc(x).unwrap();
            prop_assert!(t.abs() <= x.abs());
            prop_assert!(t == 0.0 || t.signum() == x.signum());
        }

        #[test]
        fn power_of_ten_result_is_multiple(num in 0_i64..10_000_000, pow in 0_i32..6) {
            let factor = 10_i64.pow(pow as u32);
            let r = round_to_power_of_ten(num as f64, pow).unwrap();
            prop_assert_eq!(r as i64 % factor, 0);
            prop_assert!((r - num as f64).abs() <= factor as f64 / 2.0);
        }
    }
}
