use std::{collections::VecDeque, hash::Hash, ops::ControlFlow};

use log::{debug, log_enabled, Level};

use crate::{
    iter::{Iter, NodeIter},
    node::Node,
    Aggregate, Interval,
};

/// A static index of closed [`Interval`]s answering point ("stabbing") and
/// range overlap queries.
///
/// The index is built once from a list of intervals and never modified. Each
/// query merges every matching interval into a single [`Aggregate`] result,
/// spanning all matches and holding the union of their items.
///
/// An [`IntervalIndex`] is [`Send`] and [`Sync`] when `T` is, and may be
/// queried from any number of threads concurrently.
#[derive(Debug, Clone)]
pub struct IntervalIndex<T>
where
    T: 'static,
{
    root: Option<Box<Node<T>>>,
    len: usize,

    /// The shared "no match" sentinel for `T`, resolved once at build time.
    empty: &'static Interval<T>,
}

impl<T> Default for IntervalIndex<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::build(Vec::new())
    }
}

impl<T> IntervalIndex<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    /// Build an index over `intervals`.
    ///
    /// Bounds are not validated; inverted intervals are indexed without error
    /// and produce well-defined but meaningless answers.
    pub fn build(intervals: Vec<Interval<T>>) -> Self {
        let len = intervals.len();
        let root = Node::build(intervals);

        let this = Self {
            root,
            len,
            empty: Interval::empty(),
        };

        if log_enabled!(Level::Debug) {
            debug!(
                "built interval index with {} intervals in {} nodes (depth {})",
                this.len,
                NodeIter::new(this.root.as_deref()).count(),
                this.depth(),
            );
        }

        this
    }

    /// Merge all intervals containing `point`.
    ///
    /// Returns an empty [`Aggregate`] holding the shared sentinel if no
    /// interval contains `point`.
    pub fn stab(&self, point: i64) -> Aggregate<'_, T> {
        let mut acc = Aggregate::new(self.empty);

        let _ = self.walk_point(point, |v| {
            acc.absorb(v);
            ControlFlow::Continue(())
        });

        acc
    }

    /// Merge all intervals overlapping the closed range `[lo, hi]`.
    ///
    /// Returns an empty [`Aggregate`] holding the shared sentinel if no
    /// interval overlaps the range.
    pub fn range(&self, lo: i64, hi: i64) -> Aggregate<'_, T> {
        let mut acc = Aggregate::new(self.empty);

        // Breadth-first walk of every subtree that may overlap the range.
        let mut queue = VecDeque::new();
        queue.extend(self.root.as_deref());

        while let Some(n) = queue.pop_front() {
            // Intervals are ascending by start bound, so once one starts after
            // the range none of the remainder can overlap it.
            for v in n.by_start().iter().take_while(|v| v.start() <= hi) {
                if v.has_interval(lo, hi) {
                    acc.absorb(v);
                }
            }

            if lo < n.center() {
                queue.extend(n.left());
            }
            if hi >= n.center() {
                queue.extend(n.right());
            }
        }

        acc
    }

    /// Returns true if any interval contains `point`.
    pub fn contains(&self, point: i64) -> bool {
        self.for_each_at(point, |_| ControlFlow::Break(()))
    }

    /// Call `visitor` with each item of every interval containing `point`.
    ///
    /// An item held by more than one matching interval is visited once per
    /// interval. The walk ends as soon as `visitor` returns
    /// [`ControlFlow::Break`].
    ///
    /// Returns true if any interval contained `point`, whether or not it held
    /// any items.
    pub fn for_each_at<F>(&self, point: i64, mut visitor: F) -> bool
    where
        F: FnMut(&T) -> ControlFlow<()>,
    {
        let mut found = false;

        let _ = self.walk_point(point, |v| {
            found = true;
            v.items().iter().try_for_each(&mut visitor)
        });

        found
    }

    /// Call `visitor` with every item of every indexed interval, in the order
    /// of [`IntervalIndex::iter()`].
    pub fn for_each_item<F>(&self, visitor: F)
    where
        F: FnMut(&T),
    {
        self.iter().flat_map(Interval::items).for_each(visitor)
    }
}

impl<T> IntervalIndex<T>
where
    T: 'static,
{
    /// Iterate over all indexed intervals.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }

    /// The number of intervals in the index.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The height of the tree, where a tree of a single node has a depth of 0.
    ///
    /// Informational only.
    pub fn depth(&self) -> u32 {
        self.root.as_deref().map(Node::depth).unwrap_or_default()
    }

    /// Walk the root-to-leaf path for `point`, calling `f` with every interval
    /// containing it.
    fn walk_point<'a, F>(&'a self, point: i64, mut f: F) -> ControlFlow<()>
    where
        F: FnMut(&'a Interval<T>) -> ControlFlow<()>,
    {
        let mut ptr = self.root.as_deref();

        while let Some(n) = ptr {
            if point < n.center() {
                // Ascending by start: no interval after the first starting
                // beyond "point" can contain it.
                for v in n.by_start().iter().take_while(|v| v.start() <= point) {
                    if v.has_index(point) {
                        f(v)?;
                    }
                }
                ptr = n.left();
            } else {
                // Descending by end: no interval after the first ending before
                // "point" can contain it.
                for v in n.by_end().take_while(|v| v.end() >= point) {
                    if v.has_index(point) {
                        f(v)?;
                    }
                }
                ptr = n.right();
            }
        }

        ControlFlow::Continue(())
    }
}

impl<T> FromIterator<Interval<T>> for IntervalIndex<T>
where
    T: Hash + Eq + Clone + Send + Sync + 'static,
{
    fn from_iter<I: IntoIterator<Item = Interval<T>>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a IntervalIndex<T>
where
    T: 'static,
{
    type Item = &'a Interval<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
