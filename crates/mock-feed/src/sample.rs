//! Random sampling primitives.
//!
//! Every helper takes the RNG first so callers can thread a single seeded
//! generator through a whole dataset build and get reproducible output.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::error::SampleError;

/// Start of the historical stamp window, 2018-10-10T23:45:00Z in
/// milliseconds since the Unix epoch.
pub const STAMP_WINDOW_START_MS: i64 = 1_539_215_100_000;

/// End of the historical stamp window, 2022-12-07T00:10:00Z in
/// milliseconds since the Unix epoch. Exclusive.
pub const STAMP_WINDOW_END_MS: i64 = 1_670_371_800_000;

/// Generates a numeric token by sampling `digits` digits uniformly from
/// 0-9 and folding them into a number.
///
/// Leading zeros contribute nothing, so the token may be numerically
/// shorter than the requested digit count. Callers must tolerate this;
/// it is the historical behaviour, kept on purpose. `digits` must be at
/// most 19 so the token fits in a `u64`.
pub fn digit_token(rng: &mut impl Rng, digits: u32) -> u64 {
    debug_assert!(digits <= 19, "token would overflow u64");
    (0..digits).fold(0, |token, _| token * 10 + rng.random_range(0..10))
}

/// Picks one element uniformly from `pool`.
///
/// # Errors
///
/// Returns [`SampleError::EmptyPool`] if `pool` has no elements. Pools
/// taken from a [`FixtureCatalog`](crate::FixtureCatalog) are guaranteed
/// non-empty by construction.
pub fn pick<'a, T>(rng: &mut impl Rng, pool: &'a [T]) -> Result<&'a T, SampleError> {
    pool.choose(rng).ok_or(SampleError::EmptyPool)
}

/// Samples a uniform integer in `[min, max)`.
///
/// # Errors
///
/// Returns [`SampleError::InvalidRange`] unless `max > min`.
pub fn int_in(rng: &mut impl Rng, min: u64, max: u64) -> Result<u64, SampleError> {
    if max <= min {
        return Err(SampleError::InvalidRange { min, max });
    }
    Ok(rng.random_range(min..max))
}

/// Returns true with the given probability.
///
/// `probability` is clamped to `[0, 1]`; a NaN input counts as zero.
pub fn chance(rng: &mut impl Rng, probability: f64) -> bool {
    let bounded = if probability.is_nan() {
        0.0
    } else {
        probability.clamp(0.0, 1.0)
    };
    rng.random_bool(bounded)
}

/// Samples a uniform instant within the fixed historical window, returned
/// as milliseconds since the Unix epoch.
///
/// The window runs from [`STAMP_WINDOW_START_MS`] (inclusive) to
/// [`STAMP_WINDOW_END_MS`] (exclusive).
pub fn stamp_in_window(rng: &mut impl Rng) -> i64 {
    rng.random_range(STAMP_WINDOW_START_MS..STAMP_WINDOW_END_MS)
}
