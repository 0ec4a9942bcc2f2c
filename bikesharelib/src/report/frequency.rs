//! Occurrence counting with a deterministic tie-break.
//!
//! Keys are held in a `BTreeMap`, so "most common" always resolves ties to
//! the smallest key in the key type's natural order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A value and how many times it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally<T> {
    pub value: T,
    pub count: usize,
}

impl<T> Tally<T> {
    pub fn new(value: T, count: usize) -> Self {
        Self { value, count }
    }

    /// Convert the value, keeping the count.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Tally<U> {
        Tally {
            value: f(self.value),
            count: self.count,
        }
    }
}

/// Occurrence counts per key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frequency<K: Ord> {
    counts: BTreeMap<K, usize>,
    total: usize,
}

impl<K: Ord> Default for Frequency<K> {
    fn default() -> Self {
        Self {
            counts: BTreeMap::new(),
            total: 0,
        }
    }
}

impl<K: Ord> Frequency<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of `key`.
    pub fn add(&mut self, key: K) {
        *self.counts.entry(key).or_insert(0) += 1;
        self.total += 1;
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of occurrences recorded.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn count(&self, key: &K) -> usize {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Highest count of any key.
    pub fn max_count(&self) -> Option<usize> {
        self.counts.values().copied().max()
    }

    /// The most frequent key; ties go to the smallest key.
    pub fn most_common(&self) -> Option<Tally<&K>> {
        let mut best: Option<Tally<&K>> = None;
        for (key, &count) in &self.counts {
            if best.as_ref().map_or(true, |b| count > b.count) {
                best = Some(Tally::new(key, count));
            }
        }
        best
    }

    /// Every key sharing the highest count, in ascending key order.
    pub fn modes(&self) -> Vec<&K> {
        match self.max_count() {
            Some(max) => self
                .counts
                .iter()
                .filter(|&(_, &count)| count == max)
                .map(|(key, _)| key)
                .collect(),
            None => Vec::new(),
        }
    }

    /// All keys ordered by count descending, then key ascending.
    pub fn sorted_by_count(&self) -> Vec<Tally<&K>> {
        let mut tallies: Vec<Tally<&K>> = self
            .counts
            .iter()
            .map(|(key, &count)| Tally::new(key, count))
            .collect();
        // Stable sort keeps ascending key order among equal counts
        tallies.sort_by(|a, b| b.count.cmp(&a.count));
        tallies
    }

    /// Smallest and largest key.
    pub fn range(&self) -> Option<(&K, &K)> {
        let first = self.counts.keys().next()?;
        let last = self.counts.keys().next_back()?;
        Some((first, last))
    }
}

impl<K: Ord> FromIterator<K> for Frequency<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut freq = Frequency::new();
        for key in iter {
            freq.add(key);
        }
        freq
    }
}

impl<K: Ord> Extend<K> for Frequency<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.add(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let freq: Frequency<&str> = ["b", "a", "b", "c", "b"].into_iter().collect();
        assert_eq!(freq.len(), 3);
        assert_eq!(freq.total(), 5);
        assert_eq!(freq.count(&"b"), 3);
        assert_eq!(freq.count(&"z"), 0);
        assert_eq!(freq.max_count(), Some(3));
    }

    #[test]
    fn test_most_common() {
        let freq: Frequency<u32> = [8, 17, 8, 9].into_iter().collect();
        assert_eq!(freq.most_common(), Some(Tally::new(&8, 2)));
    }

    #[test]
    fn test_most_common_tie_goes_to_smallest_key() {
        let freq: Frequency<&str> = ["Tuesday", "Monday", "Tuesday", "Monday"]
            .into_iter()
            .collect();
        assert_eq!(freq.most_common(), Some(Tally::new(&"Monday", 2)));

        let freq: Frequency<u32> = [17, 8].into_iter().collect();
        assert_eq!(freq.most_common().map(|t| *t.value), Some(8));
    }

    #[test]
    fn test_most_common_count_is_maximum() {
        let freq: Frequency<u32> = [3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5].into_iter().collect();
        let best = freq.most_common().unwrap();
        for key in [1, 2, 3, 4, 5, 6, 9] {
            assert!(best.count >= freq.count(&key));
        }
        assert_eq!(*best.value, 5);
    }

    #[test]
    fn test_modes_returns_every_tied_key() {
        let pairs = [("a", "b"), ("c", "d"), ("a", "b"), ("c", "d"), ("e", "f")];
        let freq: Frequency<(&str, &str)> = pairs.into_iter().collect();
        assert_eq!(freq.modes(), vec![&("a", "b"), &("c", "d")]);
    }

    #[test]
    fn test_empty() {
        let freq: Frequency<u32> = Frequency::new();
        assert!(freq.is_empty());
        assert_eq!(freq.most_common(), None);
        assert_eq!(freq.max_count(), None);
        assert!(freq.modes().is_empty());
        assert_eq!(freq.range(), None);
    }

    #[test]
    fn test_sorted_by_count() {
        let users = ["Customer", "Subscriber", "Subscriber", "Dependent", "Customer"];
        let freq: Frequency<&str> = users.into_iter().collect();
        let sorted: Vec<(&str, usize)> = freq
            .sorted_by_count()
            .into_iter()
            .map(|t| (*t.value, t.count))
            .collect();
        assert_eq!(
            sorted,
            vec![("Customer", 2), ("Subscriber", 2), ("Dependent", 1)]
        );
    }

    #[test]
    fn test_range() {
        let freq: Frequency<i32> = [1980, 1975, 1992].into_iter().collect();
        assert_eq!(freq.range(), Some((&1975, &1992)));
    }
}
