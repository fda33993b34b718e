//! primecount-core: trial-division primality testing and prime counting
//!
//! The computational kernel of the benchmark, kept free of any process
//! concerns (argument parsing, logging, timing) so the binary crate can
//! measure it in isolation.
//!
//! Both functions are pure and total over `i64`: negatives and zero are
//! valid inputs, they are simply not prime. Nothing here holds state
//! between calls.
//!
//! # Example
//!
//! ```
//! use primecount_core::{count_primes, is_prime};
//!
//! assert!(is_prime(17));
//! assert_eq!(count_primes(10), 4); // 2, 3, 5, 7
//! ```

pub mod counter;
pub mod primality;

pub use counter::count_primes;
pub use primality::is_prime;
