/*!
 * Random number utility backing the `/api/random` endpoint.
 */

use rand::Rng;
use std::ops::RangeInclusive;

/// Inclusive range served by the random endpoint
pub const RANDOM_RANGE: RangeInclusive<u32> = 1..=99;

/// Draw a uniform integer from `RANDOM_RANGE`
///
/// Uses the thread-local generator, so concurrent callers never contend.
pub fn random_number() -> u32 {
    rand::rng().random_range(RANDOM_RANGE)
}
