//! The process-wide "no match" sentinel.
//!
//! Rust has no generic statics, so one read-only empty [`Interval`] is leaked
//! per item type on first use and recorded in a registry keyed by [`TypeId`].
//! Every later request for the same item type returns the same `'static`
//! reference, making the sentinel comparable by identity.

use std::{
    any::{Any, TypeId},
    hash::Hash,
    sync::{Mutex, PoisonError},
};

use fxhash::FxHashMap;
use log::trace;
use once_cell::sync::Lazy;

use crate::{Interval, ItemSet};

/// Lower and upper bound of the sentinel interval.
pub(crate) const SENTINEL_BOUND: i64 = i64::MIN;

type Registry = FxHashMap<TypeId, &'static (dyn Any + Send + Sync)>;

static SENTINELS: Lazy<Mutex<Registry>> = Lazy::new(Default::default);

impl<T> Interval<T>
where
    T: Hash + Eq + Send + Sync + 'static,
{
    /// Return the shared, read-only empty sentinel for item type `T`.
    ///
    /// The sentinel spans `[i64::MIN, i64::MIN]` and holds no items. Its item
    /// set is read-only and it is only reachable through a shared reference,
    /// so it can never be modified. Repeated calls return the same reference.
    pub fn empty() -> &'static Self {
        // The registry holds only leaked, immutable values, so a panic while
        // the lock was held cannot leave it in an inconsistent state.
        let mut sentinels = SENTINELS.lock().unwrap_or_else(PoisonError::into_inner);

        let sentinel = *sentinels.entry(TypeId::of::<T>()).or_insert_with(|| {
            trace!(
                "registering empty sentinel for item type {}",
                std::any::type_name::<T>()
            );

            let v: &'static Self = Box::leak(Box::new(Self::from_parts(
                SENTINEL_BOUND,
                SENTINEL_BOUND,
                ItemSet::read_only_empty(),
            )));
            v as &'static (dyn Any + Send + Sync)
        });

        match sentinel.downcast_ref::<Self>() {
            Some(v) => v,
            None => unreachable!("sentinel registry is keyed by item TypeId"),
        }
    }

    /// Returns true if `self` is the shared empty sentinel (by identity, not by
    /// value).
    ///
    /// Only an interval that looks like the sentinel is compared against the
    /// registry, which is locked to do so. To test a query result prefer
    /// [`Aggregate::is_empty()`], which never locks.
    ///
    /// [`Aggregate::is_empty()`]: crate::Aggregate::is_empty
    pub fn is_sentinel(&self) -> bool {
        if !self.is_sentinel_shaped() {
            return false;
        }
        std::ptr::eq(self, Self::empty())
    }
}

impl<T> Interval<T> {
    fn is_sentinel_shaped(&self) -> bool {
        self.start() == SENTINEL_BOUND
            && self.end() == SENTINEL_BOUND
            && self.items().is_empty()
            && self.items().is_read_only()
    }
}
