//! Trial-division primality test.
//!
//! Divisor candidates run up to the exact integer square root of the
//! candidate (`i64::isqrt`), never a floating-point approximation, so the
//! bound can neither undershoot (excluding a true divisor) nor overshoot.

/// Return true iff `n` is prime.
///
/// Total over `i64`: everything below 2, including negatives, is not prime.
/// After dispatching 2 and the even numbers, only odd divisors from 3
/// through `n.isqrt()` inclusive are trialed.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let bound = n.isqrt();
    let mut d = 3;
    while d <= bound {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}
