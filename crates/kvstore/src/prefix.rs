//! Prefix scans: range iteration over every key that starts with a prefix.
//!
//! Both directions scan `[prefix, end)`, where `end` is the
//! [`prefix_end_bytes`] of the prefix. An empty prefix scans the whole store.
//!
//! [`prefix_end_bytes`]: keyrange::prefix_end_bytes

use keyrange::KeyRange;
use tracing::trace;

use crate::store::{BoxedIterator, KvStore, Result};

/// Opens an ascending cursor over all keys starting with `prefix`.
///
/// # Errors
///
/// Propagates the store's error if the range cannot be opened.
pub fn prefix_iterator<'a, S>(store: &'a S, prefix: &[u8]) -> Result<BoxedIterator<'a>>
where
    S: KvStore + ?Sized,
{
    let range = KeyRange::prefix(prefix);
    trace!(start = ?range.start, end = ?range.end, "opening prefix scan");
    store.iterator(range.start(), range.end())
}

/// Opens a descending cursor over all keys starting with `prefix`.
///
/// # Errors
///
/// Propagates the store's error if the range cannot be opened.
pub fn reverse_prefix_iterator<'a, S>(store: &'a S, prefix: &[u8]) -> Result<BoxedIterator<'a>>
where
    S: KvStore + ?Sized,
{
    let range = KeyRange::prefix(prefix);
    trace!(start = ?range.start, end = ?range.end, "opening reverse prefix scan");
    store.reverse_iterator(range.start(), range.end())
}
