use std::slice;

use crate::{node::Node, Interval};

/// A pre-order walk over the nodes of a tree: a node is yielded before its
/// left subtree, which is yielded before its right subtree.
#[derive(Debug)]
pub(crate) struct NodeIter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> NodeIter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.into_iter().collect(),
        }
    }
}

impl<'a, T> Iterator for NodeIter<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let v = self.stack.pop()?;

        // Push the right child first so the left subtree is visited next.
        self.stack.extend(v.right());
        self.stack.extend(v.left());

        Some(v)
    }
}

/// An iterator over every [`Interval`] stored in an
/// [`IntervalIndex`](crate::IntervalIndex).
///
/// Intervals are yielded in a pre-order walk of the tree: the intervals held by
/// a node (ascending by start bound), then those of its left subtree, then
/// those of its right subtree.
#[derive(Debug)]
pub struct Iter<'a, T> {
    nodes: NodeIter<'a, T>,
    current: slice::Iter<'a, Interval<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            nodes: NodeIter::new(root),
            current: Default::default(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Interval<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(v) = self.current.next() {
                return Some(v);
            }

            // Advance to the next node with intervals, if any.
            self.current = self.nodes.next()?.by_start().iter();
        }
    }
}
