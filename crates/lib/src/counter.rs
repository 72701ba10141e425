use std::collections::hash_map::{self, HashMap};
use std::hash::Hash;


/// Counts occurrences of values.
#[derive(Debug, Clone)]
pub struct Counter<T> {
    map: HashMap<T, usize>,
}

impl<T> Counter<T>
where
    T: Hash + Eq,
{
    /// Construct a new empty counter.
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    /// Construct a new empty counter with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: HashMap::with_capacity(capacity),
        }
    }

    /// Count one occurrence of `value`.
    #[inline]
    pub fn insert(&mut self, value: T) {
        *self.map.entry(value).or_default() += 1;
    }

    /// Get the number of times `value` has been counted, zero if never.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::Counter;
    ///
    /// let counter = [4, 3, 5, 3, 9, 3].into_iter().collect::<Counter<i64>>();
    /// assert_eq!(counter.get(&3), 3);
    /// assert_eq!(counter.get(&4), 1);
    /// assert_eq!(counter.get(&2), 0);
    /// ```
    #[inline]
    pub fn get(&self, value: &T) -> usize {
        self.map.get(value).copied().unwrap_or_default()
    }

    /// Number of distinct values counted.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Test if nothing has been counted.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Total number of occurrences counted.
    pub fn total(&self) -> usize {
        self.map.values().sum()
    }

    /// Iterate over values and their counts, in no particular order.
    pub fn iter(&self) -> hash_map::Iter<'_, T, usize> {
        self.map.iter()
    }
}

impl<T> Default for Counter<T>
where
    T: Hash + Eq,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Extend<T> for Counter<T>
where
    T: Hash + Eq,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for Counter<T>
where
    T: Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut counter = Self::new();
        counter.extend(iter);
        counter
    }
}
