//! Prime counting over a bounded range.

use crate::primality::is_prime;

/// Count the primes in `[2, limit]` inclusive.
///
/// Bounds below 2, including negatives, yield 0. The count is accumulated
/// locally and returned by value; repeated calls with the same bound give
/// identical results.
pub fn count_primes(limit: i64) -> i64 {
    let mut count = 0;
    for n in 2..=limit {
        if is_prime(n) {
            count += 1;
        }
    }
    count
}
