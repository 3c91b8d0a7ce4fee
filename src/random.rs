//! Random fill helpers.
//!
//! The demo draws all values from a single `StdRng` seeded once at startup.
//! An unseeded run uses [`DEFAULT_SEED`], so its output is reproducible.

use crate::dynamic_array::DynamicArray;
use crate::element::Element;
use crate::error::{Result, VecbitsError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 1;

/// Build the process generator from `seed`.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a random integer in range [min, max] (inclusive).
///
/// # Examples
///
/// ```
/// use vecbits::random::rand_in_range;
/// use rand::SeedableRng;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(0);
/// let val = rand_in_range(10, 20, &mut rng);
/// assert!(val >= 10 && val <= 20);
/// ```
#[inline]
pub fn rand_in_range<R: Rng>(min: i64, max: i64, rng: &mut R) -> i64 {
    rng.gen_range(min..=max)
}

/// Append `count` values drawn uniformly from [min, max] to `array`.
///
/// # Errors
///
/// Returns [`VecbitsError::InvalidRange`] if `min > max` or either bound is
/// not representable in `T`. The array is left untouched in that case.
pub fn fill_random<T: Element, R: Rng>(
    array: &mut DynamicArray<T>,
    count: usize,
    min: i64,
    max: i64,
    rng: &mut R,
) -> Result<()> {
    if min > max || T::from_i64(min).is_none() || T::from_i64(max).is_none() {
        return Err(VecbitsError::InvalidRange { min, max });
    }

    for _ in 0..count {
        let value = rand_in_range(min, max, rng);
        array.push(T::from_i64(value).ok_or(VecbitsError::InvalidRange { min, max })?);
    }
    Ok(())
}
