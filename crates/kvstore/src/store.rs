//! The ordered store capability consumed by the scan and diff helpers.
//!
//! A store exposes half-open range iteration `[start, end)` in either
//! direction through a cursor. Cursors yield keys in strict order with no
//! duplicates and stay stable for the lifetime of one scan. Dropping a cursor
//! releases it.

use std::fmt;
use std::io;

use thiserror::Error;

/// Errors surfaced by an ordered store while opening or walking a range.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store has been closed and can no longer be iterated.
    #[error("store is closed")]
    Closed,

    /// An underlying I/O error.
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    /// Any other failure reported by the storage backend.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Result alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

/// A single key-value pair, owned.
#[derive(Clone, PartialEq, Eq)]
pub struct KvPair {
    pub key: Vec<u8>,
    pub value: Vec<u8>,
}

impl KvPair {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Escaped bytes, so distinct binary keys never print alike.
impl fmt::Debug for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" -> \"{}\"",
            self.key.escape_ascii(),
            self.value.escape_ascii()
        )
    }
}

/// Lossy UTF-8, for human-readable output.
impl fmt::Display for KvPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}",
            String::from_utf8_lossy(&self.key),
            String::from_utf8_lossy(&self.value)
        )
    }
}

/// A cursor over a key range.
///
/// `key` and `value` may only be called while `valid` returns `true`.
pub trait KvIterator {
    /// The `[start, end)` bounds the cursor was opened with.
    fn domain(&self) -> (Option<&[u8]>, Option<&[u8]>);

    /// Returns `true` while the cursor is positioned on an entry.
    fn valid(&self) -> bool;

    fn key(&self) -> &[u8];

    fn value(&self) -> &[u8];

    /// Moves to the next entry in iteration order.
    fn next(&mut self) -> Result<()>;
}

/// Cursor type handed out by [`KvStore`].
pub type BoxedIterator<'a> = Box<dyn KvIterator + 'a>;

/// An ordered key-value store that can be iterated by range.
///
/// `None` for `start` or `end` means the range is unbounded on that side.
pub trait KvStore {
    /// Opens an ascending cursor over `[start, end)`.
    fn iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Result<BoxedIterator<'_>>;

    /// Opens a descending cursor over `[start, end)`.
    fn reverse_iterator(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Result<BoxedIterator<'_>>;
}

/// Adapts a cursor into a standard [`Iterator`] of owned pairs.
///
/// Stops after the first error.
pub struct Pairs<'a> {
    inner: BoxedIterator<'a>,
    failed: bool,
}

impl<'a> Pairs<'a> {
    pub fn new(inner: BoxedIterator<'a>) -> Self {
        Self {
            inner,
            failed: false,
        }
    }
}

impl Iterator for Pairs<'_> {
    type Item = Result<KvPair>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || !self.inner.valid() {
            return None;
        }

        let pair = KvPair::new(self.inner.key(), self.inner.value());
        match self.inner.next() {
            Ok(()) => Some(Ok(pair)),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
