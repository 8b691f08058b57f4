//! Plane and solid geometry formulas.
//!
//! | Function | Formula |
//! |---|---|
//! | [`rectangle_area`] | w·h |
//! | [`circle_circumference`] | 2πr |
//! | [`distance_between_points`] | √((x₂−x₁)² + (y₂−y₁)²) |
//! | [`angle_between_vectors`] | acos(u·v / (‖u‖‖v‖)) |
//! | [`parallelepiped_diagonal`] | √(a² + b² + c²) |
//! | [`hypotenuse`] | √(a² + b²) |
//!
//! Every argument is checked for NaN before use; lengths that must be
//! positive are checked after that.

use std::f64::consts::PI;

use crate::error::{require_number, NumericError, Result};

/// Area of a rectangle with the given sides.
///
/// # Errors
/// - `TypeMismatch` if either side is NaN.
/// - `InvalidValue` if either side is `≤ 0`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::rectangle_area;
/// assert_eq!(rectangle_area(5.0, 10.0).unwrap(), 50.0);
/// assert!(rectangle_area(0.0, 10.0).is_err());
/// ```
pub fn rectangle_area(width: f64, height: f64) -> Result<f64> {
    require_number("width", width)?;
    require_number("height", height)?;
    if width <= 0.0 {
        return Err(NumericError::invalid(
            "width",
            format!("must be positive, got {width}"),
        ));
    }
    if height <= 0.0 {
        return Err(NumericError::invalid(
            "height",
            format!("must be positive, got {height}"),
        ));
    }
    Ok(width * height)
}

/// Circumference 2πr of a circle.
///
/// # Examples
/// ```
/// use u_numkit::geometry::circle_circumference;
/// assert!((circle_circumference(5.0).unwrap() - 31.41592653589793).abs() < 1e-12);
/// assert_eq!(circle_circumference(0.0).unwrap(), 0.0);
/// ```
pub fn circle_circumference(radius: f64) -> Result<f64> {
    require_number("radius", radius)?;
    if radius < 0.0 {
        return Err(NumericError::invalid(
            "radius",
            format!("must be non-negative, got {radius}"),
        ));
    }
    Ok(2.0 * PI * radius)
}

/// Euclidean distance between `(x1, y1)` and `(x2, y2)`.
///
/// # Examples
/// ```
/// use u_numkit::geometry::distance_between_points;
/// let d = distance_between_points(-5.0, 0.0, 10.0, -10.0).unwrap();
/// assert!((d - 18.027756377319946).abs() < 1e-12);
/// ```
pub fn distance_between_points(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<f64> {
    require_number("x1", x1)?;
    require_number("y1", y1)?;
    require_number("x2", x2)?;
    require_number("y2", y2)?;
    Ok((x2 - x1).hypot(y2 - y1))
}

/// Angle in radians between vectors `(x1, y1)` and `(x2, y2)`.
///
/// The result lies in `[0, π]`. The cosine is clamped to `[-1, 1]` so that
/// rounding in the dot product never produces NaN for parallel vectors.
///
/// # Errors
/// - `TypeMismatch` if any coordinate is NaN.
/// - `InvalidValue` if either vector has zero length (the angle is undefined).
///
/// # Examples
/// ```
/// use u_numkit::geometry::angle_between_vectors;
/// use std::f64::consts::{FRAC_PI_2, PI};
/// assert!((angle_between_vectors(1.0, 0.0, 0.0, 1.0).unwrap() - FRAC_PI_2).abs() < 1e-12);
/// assert!((angle_between_vectors(0.0, 1.0, 0.0, -1.0).unwrap() - PI).abs() < 1e-12);
/// ```
pub fn angle_between_vectors(x1: f64, y1: f64, x2: f64, y2: f64) -> Result<f64> {
    require_number("x1", x1)?;
    require_number("y1", y1)?;
    require_number("x2", x2)?;
    require_number("y2", y2)?;

    let norm1 = x1.hypot(y1);
    let norm2 = x2.hypot(y2);
    if norm1 == 0.0 {
        return Err(NumericError::invalid("(x1, y1)", "zero-length vector"));
    }
    if norm2 == 0.0 {
        return Err(NumericError::invalid("(x2, y2)", "zero-length vector"));
    }

    let cos = (x1 * x2 + y1 * y2) / (norm1 * norm2);
    Ok(cos.clamp(-1.0, 1.0).acos())
}

/// Diagonal √(a² + b² + c²) of a rectangular parallelepiped.
///
/// # Examples
/// ```
/// use u_numkit::geometry::parallelepiped_diagonal;
/// let d = parallelepiped_diagonal(1.0, 2.0, 3.0).unwrap();
/// assert!((d - 3.741657386773941).abs() < 1e-12);
/// ```
pub fn parallelepiped_diagonal(a: f64, b: f64, c: f64) -> Result<f64> {
    require_number("a", a)?;
    require_number("b", b)?;
    require_number("c", c)?;
    Ok((a * a + b * b + c * c).sqrt())
}

/// Hypotenuse of a right triangle with legs `a` and `b`.
///
/// Uses [`f64::hypot`], which avoids intermediate overflow.
///
/// # Examples
/// ```
/// use u_numkit::geometry::hypotenuse;
/// assert_eq!(hypotenuse(3.0, 4.0).unwrap(), 5.0);
/// assert!(hypotenuse(-3.0, 4.0).is_err());
/// ```
pub fn hypotenuse(a: f64, b: f64) -> Result<f64> {
    require_number("a", a)?;
    require_number("b", b)?;
    if a <= 0.0 || b <= 0.0 {
        return Err(NumericError::invalid(
            "sides",
            format!("both must be positive, got {a} and {b}"),
        ));
    }
    Ok(a.hypot(b))
}

// ============================================================================
// Tests
// ============================================================================
