//! Frequency-primality filtering.
//!
//! A [FrequencyFilter] tallies how many times each distinct value occurs
//! in a filters sequence, then classifies every count with
//! [crate::primality::is_prime]. Detection drops a value exactly when its
//! count is prime; a value that was never tallied has an implicit count of
//! zero, which is not prime, so it passes.
use std::collections::HashMap;
use std::hash::Hash;

use itertools::Itertools;
use log::debug;

use super::Filter;
use crate::primality::is_prime;

/// Keep/drop table derived from one filters sequence.
///
/// Holds one boolean per distinct tallied value: `true` when that value's
/// occurrence count is prime. The table is consulted by key lookup only,
/// so no iteration order is guaranteed or relied upon. It is built fresh
/// per run and carries no state between runs.
pub struct FrequencyFilter<T> {
    primality: HashMap<T, bool>,
}

impl<T: Eq + Hash> FrequencyFilter<T> {
    /// Tally `filters` and classify each distinct value's count.
    pub fn from_filters(filters: &[T]) -> Self
    where
        T: Clone,
    {
        filters.iter().cloned().collect()
    }

    /// Number of distinct values tallied.
    pub fn len(&self) -> usize {
        self.primality.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primality.is_empty()
    }
}

impl<T: Eq + Hash> FromIterator<T> for FrequencyFilter<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        // first pass counts, second pass classifies
        let counts = iter.into_iter().counts();

        debug!("tallied {} distinct filter values", counts.len());

        let primality = counts
            .into_iter()
            .map(|(value, count)| {
                // a count outside u64 classifies as zero, hence non-prime
                let count = u64::try_from(count).unwrap_or_default();
                (value, is_prime(count))
            })
            .collect();

        Self { primality }
    }
}

impl<T> Default for FrequencyFilter<T> {
    /// Empty table: every lookup is absent, everything passes.
    fn default() -> Self {
        FrequencyFilter {
            primality: HashMap::new(),
        }
    }
}

impl<T: Eq + Hash> Filter<&T> for FrequencyFilter<T> {
    fn detect(&self, item: &T) -> bool {
        // absent means a count of zero, and zero is not prime
        !self.primality.get(item).copied().unwrap_or(false)
    }
}

/// Filter `subject` against the occurrence counts of `filters`.
///
/// Returns a new vector holding the elements of `subject`, in their
/// original order, minus every element whose value occurs in `filters` a
/// prime number of times. Neither input is mutated. An empty `filters`
/// sequence yields `subject` unchanged.
pub fn filter_elements<T>(subject: &[T], filters: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let filter = FrequencyFilter::from_filters(filters);

    subject
        .iter()
        .filter(|value| filter.detect(*value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{filter_elements, FrequencyFilter};
    use crate::filtering::Filter;

    #[test]
    fn table_covers_distinct_values_only() {
        let f = FrequencyFilter::from_filters(&[2, 2, 3]);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn default_is_empty_and_passes_everything() {
        let f: FrequencyFilter<i64> = FrequencyFilter::default();
        assert!(f.is_empty());
        assert_eq!(true, f.detect(&42));
    }

    #[test]
    fn prime_count_drops_value() {
        // 2 occurs twice (prime), 3 once (not prime)
        let f = FrequencyFilter::from_filters(&[2, 2, 3]);
        assert_eq!(false, f.detect(&2));
        assert_eq!(true, f.detect(&3));
    }

    #[test]
    fn untallied_value_passes() {
        let f = FrequencyFilter::from_filters(&[2, 2, 3]);
        assert_eq!(true, f.detect(&4));
    }

    #[test]
    fn builds_from_iterator() {
        // 1 occurs 4 times (not prime), 9 occurs 5 times (prime)
        let f: FrequencyFilter<u32> = [1, 1, 9, 9, 1, 9, 9, 1, 9].into_iter().collect();
        assert_eq!(f.len(), 2);
        assert_eq!(true, f.detect(&1));
        assert_eq!(false, f.detect(&9));
    }

    #[test]
    fn filter_elements_keeps_order_and_duplicates() {
        // 7 occurs 3 times in filters, 3 is prime
        let out = filter_elements(&[7, 1, 7, 2, 7], &[7, 7, 7, 8]);
        assert_eq!(out, vec![1, 2]);
    }

    #[test]
    fn filter_elements_empty_filters() {
        let out = filter_elements(&[7, 8, 9], &[]);
        assert_eq!(out, vec![7, 8, 9]);
    }
}
