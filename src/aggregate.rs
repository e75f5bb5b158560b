use std::{hash::Hash, ops::Deref};

use crate::{Interval, ItemSet};

#[derive(Debug, Clone)]
enum Repr<'a, T> {
    /// No interval matched; holds the shared sentinel.
    Empty(&'a Interval<T>),

    /// Exactly one interval matched; aliases the interval stored in the index.
    Shared(&'a Interval<T>),

    /// Two or more intervals matched and were merged into a private copy.
    Owned(Interval<T>),
}

/// The merged result of a query against an [`IntervalIndex`].
///
/// A query matching a single interval returns a reference to the interval
/// stored within the index without copying it. Once a second match is found,
/// the new match is copied and the first is merged into that copy; all
/// subsequent matches are merged into the same private copy. A query that
/// matches nothing returns the shared empty sentinel ([`Interval::empty()`]).
///
/// The aggregated interval is only reachable through shared references:
/// [`Aggregate::items()`] may alias index storage (or the sentinel) and is
/// read-only, while [`Aggregate::to_item_set()`] and
/// [`Aggregate::into_owned()`] always produce independently mutable values.
///
/// [`IntervalIndex`]: crate::IntervalIndex
#[derive(Debug, Clone)]
pub struct Aggregate<'a, T>(Repr<'a, T>);

impl<'a, T> Aggregate<'a, T>
where
    T: Hash + Eq + Clone,
{
    pub(crate) fn new(sentinel: &'a Interval<T>) -> Self {
        debug_assert!(sentinel.items().is_read_only());
        Self(Repr::Empty(sentinel))
    }

    /// Fold `v` into this aggregate, copying on the second match.
    pub(crate) fn absorb(&mut self, v: &'a Interval<T>) {
        match &mut self.0 {
            Repr::Empty(_) => self.0 = Repr::Shared(v),
            Repr::Shared(first) => {
                let first = *first;
                let mut merged = v.copy();
                merged.merge_unchecked(first);
                self.0 = Repr::Owned(merged);
            }
            Repr::Owned(merged) => merged.merge_unchecked(v),
        }
    }

    /// Returns true if no interval matched the query.
    ///
    /// When true, [`Aggregate::interval()`] is the shared sentinel.
    pub fn is_empty(&self) -> bool {
        matches!(self.0, Repr::Empty(_))
    }

    /// Returns true if the result aliases an interval stored in the index.
    pub fn is_shared(&self) -> bool {
        matches!(self.0, Repr::Shared(_))
    }

    /// The aggregated interval.
    pub fn interval(&self) -> &Interval<T> {
        match &self.0 {
            Repr::Empty(v) => v,
            Repr::Shared(v) => v,
            Repr::Owned(v) => v,
        }
    }

    /// The aggregated items, without copying.
    ///
    /// The returned set may be the one stored in the index, or the read-only
    /// set backing the shared sentinel.
    pub fn items(&self) -> &ItemSet<T> {
        self.interval().items()
    }

    /// A freshly allocated, writable snapshot of the aggregated items.
    ///
    /// Allocates on every call, including for an empty result.
    pub fn to_item_set(&self) -> ItemSet<T> {
        self.items().to_set()
    }

    /// Detach the result from the index, returning a writable [`Interval`].
    pub fn into_owned(self) -> Interval<T> {
        match self.0 {
            Repr::Empty(v) => v.copy(),
            Repr::Shared(v) => v.copy(),
            Repr::Owned(v) => v,
        }
    }
}

impl<T> Deref for Aggregate<'_, T>
where
    T: Hash + Eq + Clone,
{
    type Target = Interval<T>;

    fn deref(&self) -> &Self::Target {
        self.interval()
    }
}
