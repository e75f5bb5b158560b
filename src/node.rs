use crate::Interval;

#[derive(Debug, Clone)]
pub(crate) struct Node<T> {
    /// Child nodes pointers.
    ///
    /// All intervals in the left subtree end before `center`, and all
    /// intervals in the right subtree start after it.
    left: Option<Box<Node<T>>>,
    right: Option<Box<Node<T>>>,

    /// The height of the subtree rooted at this node.
    ///
    /// A leaf has a depth of 0. Informational only: the tree shape is fixed at
    /// build time and never rebalanced.
    depth: u32,

    center: i64,

    /// The intervals straddling `center`, ascending by start bound.
    by_start: Vec<Interval<T>>,

    /// Indexes into `by_start`, ordered descending by end bound.
    by_end: Box<[usize]>,
}

impl<T> Node<T> {
    /// Build a tree over `intervals`, returning [`None`] if there are none.
    pub(crate) fn build(mut intervals: Vec<Interval<T>>) -> Option<Box<Self>> {
        if intervals.is_empty() {
            return None;
        }

        // Every subsequent partition preserves this relative order, so the
        // first and last entries of any sublist bound its extent.
        intervals.sort_by_key(Interval::bound_sum);

        Some(Self::build_sorted(intervals))
    }

    fn build_sorted(intervals: Vec<Interval<T>>) -> Box<Self> {
        let center = match intervals.as_slice() {
            [only] => midpoint(only.start(), only.end()),
            [first, .., last] => midpoint(first.start(), last.end()),
            [] => unreachable!("sublists are never empty"),
        };

        if intervals.len() == 1 {
            return Box::new(Self::new(center, intervals, None, None));
        }

        let n = intervals.len();
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut here = Vec::new();

        for v in intervals {
            if v.end() < center {
                left.push(v);
            } else if v.start() > center {
                right.push(v);
            } else {
                here.push(v);
            }
        }

        // Well-formed intervals always leave the last entry out of "left" and
        // the first out of "right". Inverted intervals may not, in which case
        // the whole sublist is kept here to guarantee termination.
        if left.len() == n {
            return Box::new(Self::new(center, left, None, None));
        }
        if right.len() == n {
            return Box::new(Self::new(center, right, None, None));
        }

        let left = (!left.is_empty()).then(|| Self::build_sorted(left));
        let right = (!right.is_empty()).then(|| Self::build_sorted(right));

        Box::new(Self::new(center, here, left, right))
    }

    fn new(
        center: i64,
        mut here: Vec<Interval<T>>,
        left: Option<Box<Self>>,
        right: Option<Box<Self>>,
    ) -> Self {
        // Stable sorts, so intervals with equal bounds retain their relative
        // order and are never combined.
        here.sort_by_key(Interval::start);

        let mut by_end = (0..here.len()).collect::<Vec<_>>();
        by_end.sort_by(|&a, &b| here[b].cmp_by_end(&here[a]));

        let depth = left
            .as_deref()
            .map(|v| v.depth() + 1)
            .max(right.as_deref().map(|v| v.depth() + 1))
            .unwrap_or_default();

        Self {
            left,
            right,
            depth,
            center,
            by_start: here,
            by_end: by_end.into_boxed_slice(),
        }
    }

    pub(crate) fn center(&self) -> i64 {
        self.center
    }

    pub(crate) fn depth(&self) -> u32 {
        self.depth
    }

    /// The intervals assigned to this node, ascending by start bound.
    pub(crate) fn by_start(&self) -> &[Interval<T>] {
        &self.by_start
    }

    /// The intervals assigned to this node, descending by end bound.
    pub(crate) fn by_end(&self) -> impl Iterator<Item = &Interval<T>> + '_ {
        self.by_end.iter().map(|&i| &self.by_start[i])
    }

    pub(crate) fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    pub(crate) fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }
}

/// Compute `(a + b) / 2`, truncated towards zero, without overflowing.
fn midpoint(a: i64, b: i64) -> i64 {
    let v = (i128::from(a) + i128::from(b)) / 2;

    // Correctness: the mean of two i64 values lies between them.
    v as i64
}
