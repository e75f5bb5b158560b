use std::{collections::HashSet, hash::Hash};

use proptest::prelude::*;

use crate::{Interval, ItemSet};

/// Interval bounds are generated within [-`POINT_MAX`, `POINT_MAX`).
pub(crate) const POINT_MAX: i64 = 20;

/// Maximum number of intervals in an arbitrary set.
const N_VALUES: usize = 50;

/// A small item domain encourages items to be shared between intervals.
const ITEM_MAX: u16 = 30;

pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn arbitrary_items() -> impl Strategy<Value = HashSet<u16>> {
    prop::collection::hash_set(0..ITEM_MAX, 0..4)
}

/// Generate an arbitrary well-formed interval with up to 3 items.
pub(crate) fn arbitrary_interval() -> impl Strategy<Value = Interval<u16>> {
    (-POINT_MAX..POINT_MAX, 0..POINT_MAX, arbitrary_items())
        .prop_map(|(start, len, items)| Interval::new(start, start + len, items))
}

/// A bound anywhere in the `i64` domain, biased towards its extremes.
pub(crate) fn arbitrary_bound() -> impl Strategy<Value = i64> {
    prop_oneof![
        4 => any::<i64>(),
        1 => Just(i64::MIN),
        1 => Just(i64::MAX),
        1 => Just(0),
    ]
}

/// Generate a list of intervals with bounds anywhere in the `i64` domain,
/// potentially inverted (`start > end`).
pub(crate) fn arbitrary_unchecked_intervals() -> impl Strategy<Value = Vec<Interval<u16>>> {
    prop::collection::vec(
        (arbitrary_bound(), arbitrary_bound(), arbitrary_items())
            .prop_map(|(start, end, items)| Interval::new(start, end, items)),
        0..N_VALUES,
    )
}

/// Generate a list of well-formed intervals with bounds anywhere in the `i64`
/// domain.
pub(crate) fn arbitrary_wide_intervals() -> impl Strategy<Value = Vec<Interval<u16>>> {
    prop::collection::vec(
        (arbitrary_bound(), arbitrary_bound(), arbitrary_items())
            .prop_map(|(a, b, items)| Interval::new(a.min(b), a.max(b), items)),
        0..N_VALUES,
    )
}

/// Generate a list of up to [`N_VALUES`] arbitrary intervals, potentially
/// containing duplicates.
pub(crate) fn arbitrary_intervals() -> impl Strategy<Value = Vec<Interval<u16>>> {
    prop::collection::vec(arbitrary_interval(), 0..N_VALUES)
}

/// The union of the items of all `values` containing `point`.
pub(crate) fn brute_stab<T>(values: &[Interval<T>], point: i64) -> ItemSet<T>
where
    T: Hash + Eq + Clone,
{
    values
        .iter()
        .filter(|v| v.has_index(point))
        .flat_map(|v| v.items().iter().cloned())
        .collect()
}

/// The union of the items of all `values` overlapping `[lo, hi]`.
pub(crate) fn brute_range<T>(values: &[Interval<T>], lo: i64, hi: i64) -> ItemSet<T>
where
    T: Hash + Eq + Clone,
{
    values
        .iter()
        .filter(|v| v.has_interval(lo, hi))
        .flat_map(|v| v.items().iter().cloned())
        .collect()
}
