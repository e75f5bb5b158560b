//! Genome-wide indexing, with one [`IntervalIndex`] per partition.
//!
//! Intervals on different contigs never overlap, so a
//! [`PartitionedIndex`] keeps a separate [`IntervalIndex`] for each partition
//! key (typically a chromosome or contig name) and routes every query to the
//! index of the requested partition.
//!
//! ```
//! use stabix::{Interval, PartitionedIndex};
//!
//! let index = [
//!     ("chr1", Interval::new(1000, 2000, ["BRCA1"])),
//!     ("chr1", Interval::new(1500, 6000, ["TP53"])),
//!     ("chr2", Interval::new(1000, 3000, ["EGFR"])),
//! ]
//! .into_iter()
//! .collect::<PartitionedIndex<_, _>>();
//!
//! assert_eq!(index.stab("chr1", 1800).items().len(), 2);
//! assert!(index.stab("chr2", 1800).items().contains("EGFR"));
//!
//! // Unknown partitions never match.
//! assert!(index.stab("chrX", 1800).is_empty());
//! ```

use std::{borrow::Borrow, hash::Hash, ops::ControlFlow};

use fxhash::FxHashMap;
use log::debug;

use crate::{Aggregate, Interval, IntervalIndex};

/// A set of [`IntervalIndex`] instances keyed by partition.
#[derive(Debug, Clone)]
pub struct PartitionedIndex<K, T>
where
    T: 'static,
{
    partitions: FxHashMap<K, IntervalIndex<T>>,
    empty: &'static Interval<T>,
}

impl<K, T> Default for PartitionedIndex<K, T>
where
    K: Hash + Eq,
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::build(std::iter::empty())
    }
}

impl<K, T> PartitionedIndex<K, T>
where
    K: Hash + Eq,
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    /// Group `(partition, interval)` pairs by partition and build an
    /// [`IntervalIndex`] for each.
    pub fn build<I>(intervals: I) -> Self
    where
        I: IntoIterator<Item = (K, Interval<T>)>,
    {
        let mut grouped = FxHashMap::<K, Vec<Interval<T>>>::default();
        for (key, v) in intervals {
            grouped.entry(key).or_default().push(v);
        }

        let partitions = grouped
            .into_iter()
            .map(|(key, v)| (key, IntervalIndex::build(v)))
            .collect::<FxHashMap<_, _>>();

        debug!(
            "built partitioned index with {} partitions and {} intervals",
            partitions.len(),
            partitions.values().map(IntervalIndex::len).sum::<usize>(),
        );

        Self {
            partitions,
            empty: Interval::empty(),
        }
    }

    /// Merge all intervals in `partition` containing `point`.
    pub fn stab<Q>(&self, partition: &Q, point: i64) -> Aggregate<'_, T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.get(partition) {
            Some(v) => v.stab(point),
            None => Aggregate::new(self.empty),
        }
    }

    /// Merge all intervals in `partition` overlapping `[lo, hi]`.
    pub fn range<Q>(&self, partition: &Q, lo: i64, hi: i64) -> Aggregate<'_, T>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.get(partition) {
            Some(v) => v.range(lo, hi),
            None => Aggregate::new(self.empty),
        }
    }

    /// Returns true if any interval in `partition` contains `point`.
    pub fn contains<Q>(&self, partition: &Q, point: i64) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(partition).is_some_and(|v| v.contains(point))
    }

    /// See [`IntervalIndex::for_each_at()`].
    pub fn for_each_at<Q, F>(&self, partition: &Q, point: i64, visitor: F) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        F: FnMut(&T) -> ControlFlow<()>,
    {
        self.get(partition)
            .is_some_and(|v| v.for_each_at(point, visitor))
    }
}

impl<K, T> PartitionedIndex<K, T>
where
    K: Hash + Eq,
    T: 'static,
{
    /// The index of `partition`, if any intervals were assigned to it.
    pub fn get<Q>(&self, partition: &Q) -> Option<&IntervalIndex<T>>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.partitions.get(partition)
    }

    /// Iterate over the partitions, in arbitrary order.
    pub fn partitions(&self) -> impl Iterator<Item = (&K, &IntervalIndex<T>)> {
        self.partitions.iter()
    }

    /// The number of partitions.
    pub fn len(&self) -> usize {
        self.partitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }
}

impl<K, T> FromIterator<(K, Interval<T>)> for PartitionedIndex<K, T>
where
    K: Hash + Eq,
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = (K, Interval<T>)>>(iter: I) -> Self {
        Self::build(iter)
    }
}
