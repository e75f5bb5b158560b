use std::{
    borrow::Borrow,
    collections::hash_set,
    fmt::Debug,
    hash::{Hash, Hasher},
};

use fxhash::FxHashSet;

use crate::Error;

/// An unordered set of payload items attached to an [`Interval`].
///
/// Equality and hashing are structural: two [`ItemSet`] instances holding the
/// same items are equal and hash identically, regardless of the order the
/// items were inserted in, and regardless of whether either set is read-only.
///
/// A set may be marked read-only, after which every mutation returns
/// [`Error::ReadOnly`]. The set backing the shared empty sentinel is always
/// read-only.
///
/// [`Interval`]: crate::Interval
#[derive(Clone)]
pub struct ItemSet<T> {
    set: FxHashSet<T>,
    read_only: bool,
}

impl<T> Default for ItemSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemSet<T> {
    /// Construct an empty, writable [`ItemSet`].
    pub fn new() -> Self {
        Self {
            set: FxHashSet::default(),
            read_only: false,
        }
    }

    pub(crate) fn read_only_empty() -> Self {
        Self::new().into_read_only()
    }

    /// Mark this set as read-only.
    pub fn into_read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    /// Returns true if mutations of this set are rejected.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Visit the items in an arbitrary order.
    pub fn iter(&self) -> hash_set::Iter<'_, T> {
        self.set.iter()
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
    {
        self.set.contains(value)
    }

    /// Add `value` to the set, returning true if it was not already present.
    pub fn try_insert(&mut self, value: T) -> Result<bool, Error>
    where
        T: Hash + Eq,
    {
        self.check_writable()?;
        Ok(self.set.insert(value))
    }

    /// Remove `value` from the set, returning true if it was present.
    pub fn try_remove<Q>(&mut self, value: &Q) -> Result<bool, Error>
    where
        T: Borrow<Q> + Hash + Eq,
        Q: Hash + Eq + ?Sized,
    {
        self.check_writable()?;
        Ok(self.set.remove(value))
    }

    pub fn try_clear(&mut self) -> Result<(), Error> {
        self.check_writable()?;
        self.set.clear();
        Ok(())
    }

    /// Return a freshly allocated, writable copy of this set.
    ///
    /// Unlike [`Clone`], the copy is never read-only.
    pub fn to_set(&self) -> Self
    where
        T: Clone,
    {
        Self {
            set: self.set.clone(),
            read_only: false,
        }
    }

    /// Union the items of `other` into `self`, ignoring the read-only flag.
    ///
    /// Only ever called on sets that are private to the caller.
    pub(crate) fn union_unchecked(&mut self, other: &Self)
    where
        T: Hash + Eq + Clone,
    {
        debug_assert!(!self.read_only);
        self.set.extend(other.set.iter().cloned());
    }

    fn check_writable(&self) -> Result<(), Error> {
        if self.read_only {
            return Err(Error::ReadOnly);
        }
        Ok(())
    }
}

impl<T> PartialEq for ItemSet<T>
where
    T: Hash + Eq,
{
    fn eq(&self, other: &Self) -> bool {
        self.set == other.set
    }
}

impl<T> Eq for ItemSet<T> where T: Hash + Eq {}

impl<T> Hash for ItemSet<T>
where
    T: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Per-item digests are combined commutatively so that the hash does not
        // depend on the iteration order of the underlying set.
        let digest = self
            .set
            .iter()
            .map(fxhash::hash64)
            .fold(0_u64, u64::wrapping_add);

        state.write_usize(self.set.len());
        state.write_u64(digest);
    }
}

impl<T> Debug for ItemSet<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.set.iter()).finish()
    }
}

impl<T> FromIterator<T> for ItemSet<T>
where
    T: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            set: iter.into_iter().collect(),
            read_only: false,
        }
    }
}

impl<'a, T> IntoIterator for &'a ItemSet<T> {
    type Item = &'a T;
    type IntoIter = hash_set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.iter()
    }
}

impl<T> IntoIterator for ItemSet<T> {
    type Item = T;
    type IntoIter = hash_set::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.set.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::BuildHasher;

    use fxhash::FxBuildHasher;
    use proptest::prelude::*;

    use super::*;

    /// Hash `v` with a fixed-key hasher, so digests are comparable across
    /// calls.
    fn hash_of<T: Hash>(v: &T) -> u64 {
        FxBuildHasher::default().hash_one(v)
    }

    #[test]
    fn test_read_only_rejects_mutation() {
        let mut s = ItemSet::<&str>::read_only_empty();
        assert!(s.is_read_only());

        assert_eq!(s.try_insert("a"), Err(Error::ReadOnly));
        assert_eq!(s.try_remove("a"), Err(Error::ReadOnly));
        assert_eq!(s.try_clear(), Err(Error::ReadOnly));

        // Nothing was changed by the failed calls.
        assert!(s.is_empty());
    }

    #[test]
    fn test_clone_keeps_read_only_to_set_does_not() {
        let s = ["a", "b"].into_iter().collect::<ItemSet<_>>().into_read_only();

        let mut cloned = s.clone();
        assert!(cloned.is_read_only());
        assert_eq!(cloned.try_insert("c"), Err(Error::ReadOnly));

        let mut copy = s.to_set();
        assert!(!copy.is_read_only());
        assert_eq!(copy.try_insert("c"), Ok(true));
        assert_eq!(copy.try_insert("c"), Ok(false));
        assert_eq!(copy.try_remove("a"), Ok(true));

        // The source is untouched by mutations of the copy.
        assert_eq!(s.len(), 2);
        assert!(s.contains("a"));
        assert!(!s.contains("c"));
    }

    #[test]
    fn test_eq_ignores_read_only_flag() {
        let a = [1, 2, 3].into_iter().collect::<ItemSet<u32>>();
        let b = a.clone().into_read_only();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        let reordered = [3, 2, 1].into_iter().collect::<ItemSet<u32>>();
        assert_eq!(hash_of(&a), hash_of(&reordered));
        assert_ne!(hash_of(&a), hash_of(&[1, 2].into_iter().collect::<ItemSet<u32>>()));
    }

    proptest! {
        /// Sets with the same content compare and hash equal irrespective of
        /// insertion order.
        #[test]
        fn prop_structural_eq_hash(
            values in prop::collection::vec(any::<u16>(), 0..50),
        ) {
            let forward = values.iter().copied().collect::<ItemSet<_>>();
            let reverse = values.iter().rev().copied().collect::<ItemSet<_>>();

            let mut incremental = ItemSet::new();
            for v in values.iter().rev() {
                incremental.try_insert(*v).unwrap();
            }

            assert_eq!(forward, reverse);
            assert_eq!(forward, incremental);
            assert_eq!(hash_of(&forward), hash_of(&reverse));
            assert_eq!(hash_of(&forward), hash_of(&incremental));
        }

        /// Sets with differing content are not equal.
        #[test]
        fn prop_ne(
            a in prop::collection::hash_set(any::<u16>(), 0..20),
            b in prop::collection::hash_set(any::<u16>(), 0..20),
        ) {
            let sa = a.iter().copied().collect::<ItemSet<_>>();
            let sb = b.iter().copied().collect::<ItemSet<_>>();
            assert_eq!(sa == sb, a == b);
        }
    }
}
