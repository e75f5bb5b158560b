use thiserror::Error;

/// Errors returned by the fallible operations of this crate.
///
/// Queries never fail; only attempts to mutate shared, read-only state and the
/// validating [`Interval::try_new()`](crate::Interval::try_new) constructor
/// return an [`Error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An insert, remove or clear was attempted on a read-only
    /// [`ItemSet`](crate::ItemSet), such as the one backing the shared empty
    /// sentinel.
    #[error("attempted to mutate a read-only item set")]
    ReadOnly,

    /// The lower bound of a closed interval exceeds its upper bound.
    #[error("inverted interval: start {start} is greater than end {end}")]
    InvertedInterval { start: i64, end: i64 },
}
