//! # primefilter
//!
//! Filters a sequence of numbers against the occurrence counts of a second
//! one: any value that appears in the filters sequence a prime number of
//! times is dropped from the subject sequence, everything else is kept in
//! its original order. A value that never appears in the filters sequence
//! has an occurrence count of zero, which is not prime, so it always
//! survives.
//!
//! ```
//! use primefilter::filter_elements;
//!
//! // 2 occurs twice (prime) and 3 once (not prime)
//! let kept = filter_elements(&[1, 2, 3, 4], &[2, 2, 3]);
//! assert_eq!(kept, vec![1, 3, 4]);
//! ```
//!
//! When the same filters sequence serves several subject sequences, build
//! the table once and reuse it:
//!
//! ```
//! use primefilter::{Filter, FrequencyFilter};
//!
//! let table: FrequencyFilter<i64> = [5, 5, 5].into_iter().collect();
//! assert!(!table.detect(&5)); // three occurrences, 3 is prime
//! assert!(table.detect(&6)); // never tallied
//! ```
pub mod filtering;
pub mod primality;

pub use filtering::{filter_elements, Filter, FrequencyFilter};
pub use primality::is_prime;
