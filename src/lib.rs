//! A static, centred interval index for genomic stabbing and range queries.
//!
//! An [`IntervalIndex`] is built once from a list of closed [`Interval`]s,
//! each carrying a set of payload items, and answers two classes of query:
//!
//! * [`IntervalIndex::stab()`]: which intervals contain a point?
//! * [`IntervalIndex::range()`]: which intervals overlap a closed range?
//!
//! Rather than returning each matching interval, a query merges all matches
//! into a single [`Aggregate`], spanning every match and holding the union of
//! their items. A query matching one interval borrows it from the index
//! without copying; the shared, read-only [`Interval::empty()`] sentinel is
//! returned when nothing matches.
//!
//! ```
//! use stabix::{Interval, IntervalIndex};
//!
//! let index = IntervalIndex::build(vec![
//!     Interval::new(1, 5, ["a"]),
//!     Interval::new(3, 8, ["b"]),
//!     Interval::new(10, 15, ["c"]),
//! ]);
//!
//! let got = index.stab(4);
//! assert!(got.items().contains("a"));
//! assert!(got.items().contains("b"));
//! assert_eq!((got.start(), got.end()), (1, 8));
//!
//! assert_eq!(index.range(4, 11).items().len(), 3);
//!
//! // No interval contains 9.
//! assert!(index.stab(9).is_empty());
//! assert!(!index.contains(9));
//! ```
//!
//! The items of a result are read-only; call [`Aggregate::to_item_set()`] or
//! [`Aggregate::into_owned()`] for a writable copy:
//!
//! ```compile_fail
//! # use stabix::{Interval, IntervalIndex};
//! let index = IntervalIndex::build(vec![Interval::new(1, 5, ["a"])]);
//! index.stab(9).items().try_insert("z");
//! ```
//!
//! A [`PartitionedIndex`] keeps one [`IntervalIndex`] per contig.

mod aggregate;
mod error;
mod interval;
mod items;
mod iter;
mod node;
mod partition;
mod sentinel;
mod tree;

#[cfg(test)]
mod test_utils;

pub use aggregate::*;
pub use error::*;
pub use interval::*;
pub use items::*;
pub use iter::Iter;
pub use partition::*;
pub use tree::*;
