//! Random integers in a closed range.
//!
//! [`random_integer`] draws from the thread-local generator, which is
//! seeded from OS entropy and safe to use from any number of threads.
//! [`random_integer_with`] takes any [`Rng`], so tests and simulations can
//! pass a seeded generator from [`create_rng`] and get a reproducible
//! sequence.

use rand::Rng;

use crate::error::{NumericError, Result};

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++ on 64-bit targets). The sequence is
/// deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_numkit::random::{create_rng, random_integer_with};
/// let mut a = create_rng(42);
/// let mut b = create_rng(42);
/// assert_eq!(
///     random_integer_with(&mut a, 0, 1000).unwrap(),
///     random_integer_with(&mut b, 0, 1000).unwrap(),
/// );
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Uniformly random integer in `[min, max]` (both ends included), drawn
/// from the thread-local generator.
///
/// # Errors
/// - `InvalidValue` if `min > max`.
///
/// # Examples
/// ```
/// use u_numkit::random::random_integer;
/// let k = random_integer(-5, 0).unwrap();
/// assert!((-5..=0).contains(&k));
/// assert!(random_integer(5, 1).is_err());
/// ```
pub fn random_integer(min: i64, max: i64) -> Result<i64> {
    random_integer_with(&mut rand::rng(), min, max)
}

/// Uniformly random integer in `[min, max]` drawn from `rng`.
///
/// # Errors
/// - `InvalidValue` if `min > max`.
pub fn random_integer_with<R: Rng>(rng: &mut R, min: i64, max: i64) -> Result<i64> {
    if min > max {
        return Err(NumericError::invalid(
            "range",
            format!("min must not exceed max, got {min} > {max}"),
        ));
    }
    let k = rng.random_range(min..=max);
    tracing::trace!(min, max, k, "drew random integer");
    Ok(k)
}

// ============================================================================
// Tests
// ============================================================================
