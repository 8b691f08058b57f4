//! Error type shared by every validating function in the crate.
//!
//! Two contract kinds are distinguished: an argument of the wrong kind
//! ([`NumericError::TypeMismatch`], which includes NaN where a number is
//! required) and an argument of the right kind outside the allowed domain
//! ([`NumericError::InvalidValue`]).

use thiserror::Error;

/// Error returned when an argument fails validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NumericError {
    /// The argument is not of the expected kind.
    #[error("{name} must be {expected}, got {found}")]
    TypeMismatch {
        name: &'static str,
        expected: &'static str,
        found: String,
    },
    /// The argument has the right kind but lies outside the allowed domain.
    #[error("invalid {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },
    /// The operation has no implementation yet.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, NumericError>;

impl NumericError {
    pub(crate) fn type_mismatch(
        name: &'static str,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        let found = found.into();
        tracing::debug!(argument = name, expected, %found, "argument has wrong kind");
        Self::TypeMismatch {
            name,
            expected,
            found,
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        tracing::debug!(argument = name, %reason, "argument out of domain");
        Self::InvalidValue { name, reason }
    }

    /// Returns true for [`NumericError::TypeMismatch`].
    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Self::TypeMismatch { .. })
    }

    /// Returns true for [`NumericError::InvalidValue`].
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }
}

/// Rejects NaN with a [`NumericError::TypeMismatch`].
pub(crate) fn require_number(name: &'static str, x: f64) -> Result<f64> {
    if x.is_nan() {
        return Err(NumericError::type_mismatch(name, "a number", "NaN"));
    }
    Ok(x)
}

/// Rejects NaN (type mismatch) and infinities (invalid value).
pub(crate) fn require_finite(name: &'static str, x: f64) -> Result<f64> {
    require_number(name, x)?;
    if x.is_infinite() {
        return Err(NumericError::invalid(
            name,
            format!("must be finite, got {x}"),
        ));
    }
    Ok(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_type_mismatch() {
        let e = NumericError::type_mismatch("width", "a number", "NaN");
        assert_eq!(e.to_string(), "width must be a number, got NaN");
        assert!(e.is_type_mismatch());
        assert!(!e.is_invalid_value());
    }

    #[test]
    fn test_display_invalid_value() {
        let e = NumericError::invalid("radius", "must be non-negative, got -1");
        assert_eq!(e.to_string(), "invalid radius: must be non-negative, got -1");
        assert!(e.is_invalid_value());
    }

    #[test]
    fn test_display_not_implemented() {
        let e = NumericError::NotImplemented("count_odd_numbers");
        assert_eq!(e.to_string(), "count_odd_numbers is not implemented");
        assert!(!e.is_type_mismatch());
        assert!(!e.is_invalid_value());
    }

    #[test]
    fn test_require_number() {
        assert_eq!(require_number("x", 1.5), Ok(1.5));
        assert_eq!(require_number("x", f64::INFINITY), Ok(f64::INFINITY));
        assert!(require_number("x", f64::NAN).unwrap_err().is_type_mismatch());
    }

    #[test]
    fn test_require_finite() {
        assert_eq!(require_finite("x", -3.0), Ok(-3.0));
        assert!(require_finite("x", f64::NAN).unwrap_err().is_type_mismatch());
        assert!(require_finite("x", f64::NEG_INFINITY)
            .unwrap_err()
            .is_invalid_value());
    }
}
