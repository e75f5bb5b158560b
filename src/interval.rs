use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{Error, ItemSet};

/// A closed interval `[start, end]` carrying a set of payload items.
///
/// Equality and hashing are structural over the bounds and the item set.
/// Intervals are not [`Ord`]; use [`Interval::cmp_by_end()`] to order them by
/// their upper bound.
#[derive(Debug, Clone)]
pub struct Interval<T> {
    start: i64,
    end: i64,
    items: ItemSet<T>,
}

impl<T> Interval<T>
where
    T: Hash + Eq,
{
    /// Construct a new [`Interval`] covering `start..=end`.
    ///
    /// The bounds are not validated; an inverted interval is accepted and
    /// produces well-defined (but meaningless) query answers once indexed. Use
    /// [`Interval::try_new()`] to reject inverted bounds.
    pub fn new<I>(start: i64, end: i64, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self {
            start,
            end,
            items: items.into_iter().collect(),
        }
    }

    /// Construct a new [`Interval`], returning [`Error::InvertedInterval`] if
    /// `start > end`.
    pub fn try_new<I>(start: i64, end: i64, items: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
    {
        if start > end {
            return Err(Error::InvertedInterval { start, end });
        }
        Ok(Self::new(start, end, items))
    }

    /// Extend `self` to span both intervals and union in the items of `other`.
    ///
    /// Returns [`Error::ReadOnly`] (leaving `self` unchanged) if the item set
    /// of `self` is read-only.
    pub fn merge(&mut self, other: &Self) -> Result<&mut Self, Error>
    where
        T: Clone,
    {
        if self.items.is_read_only() {
            return Err(Error::ReadOnly);
        }
        self.merge_unchecked(other);
        Ok(self)
    }

    /// As [`Interval::merge()`], for intervals known to be privately owned and
    /// writable.
    pub(crate) fn merge_unchecked(&mut self, other: &Self)
    where
        T: Clone,
    {
        self.start = self.start.min(other.start);
        self.end = self.end.max(other.end);
        self.items.union_unchecked(&other.items);
    }
}

impl<T> Interval<T> {
    pub(crate) fn from_parts(start: i64, end: i64, items: ItemSet<T>) -> Self {
        Self { start, end, items }
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// The items carried by this interval.
    pub fn items(&self) -> &ItemSet<T> {
        &self.items
    }

    /// Returns true if `point` lies within the closed interval.
    pub fn has_index(&self, point: i64) -> bool {
        self.start <= point && point <= self.end
    }

    /// Returns true if the closed interval `[lo, hi]` intersects `self`.
    pub fn has_interval(&self, lo: i64, hi: i64) -> bool {
        hi >= self.start && lo <= self.end
    }

    /// Order by the upper bound only.
    pub fn cmp_by_end(&self, other: &Self) -> Ordering {
        self.end.cmp(&other.end)
    }

    /// Sum of both bounds, widened so it cannot overflow.
    pub(crate) fn bound_sum(&self) -> i128 {
        i128::from(self.start) + i128::from(self.end)
    }

    /// Duplicate the bounds and items into a new [`Interval`] with a freshly
    /// allocated, writable item set.
    pub fn copy(&self) -> Self
    where
        T: Clone,
    {
        Self {
            start: self.start,
            end: self.end,
            items: self.items.to_set(),
        }
    }

    /// Decompose into the bounds and the item set.
    pub fn into_parts(self) -> (i64, i64, ItemSet<T>) {
        (self.start, self.end, self.items)
    }
}

impl<T> PartialEq for Interval<T>
where
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.items == other.items
    }
}

impl<T> Eq for Interval<T> where T: Hash + Eq {}

impl<T> Hash for Interval<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.start.hash(state);
        self.end.hash(state);
        self.items.hash(state);
    }
}
