//! # KeyRange - byte-range arithmetic for ordered key spaces
//!
//! Helpers for turning raw byte prefixes into half-open scan ranges over a
//! byte-lexicographically ordered store.
//!
//! ## Bounds
//!
//! ```text
//! prefix "ab"        -> [ "ab", "ac" )
//! prefix "a\xFF"     -> [ "a\xFF", "b" )
//! prefix "\xFF\xFF"  -> [ "\xFF\xFF", <unbounded> )
//! prefix ""          -> [ <unbounded>, <unbounded> )
//! max key "k" (incl) -> [ .., "k\x00" )
//! ```
//!
//! Every function that derives a new byte sequence returns a fresh
//! allocation; the caller's buffer is never aliased or mutated.
//!
//! ## Example
//!
//! ```rust
//! use keyrange::{prefix_end_bytes, KeyRange};
//!
//! assert_eq!(prefix_end_bytes(b"ab"), Some(b"ac".to_vec()));
//!
//! let range = KeyRange::prefix(b"user/");
//! assert!(range.contains(b"user/42"));
//! assert!(!range.contains(b"users"));
//! ```

/// Returns the exclusive upper bound for a scan over every key starting with
/// `prefix`, or `None` when no such bound exists (unbounded).
///
/// Working from the last byte backwards, the first byte below `0xFF` is
/// incremented and everything after it is dropped. Trailing `0xFF` bytes
/// cannot be incremented and are removed. An empty prefix, or one made only
/// of `0xFF` bytes, has no finite upper bound.
///
/// # Examples
///
/// - `b"a"` -> `Some(b"b")`
/// - `[0x61, 0xFF]` -> `Some([0x62])`
/// - `[0xFF, 0xFF]` -> `None`
/// - `[]` -> `None`
pub fn prefix_end_bytes(prefix: &[u8]) -> Option<Vec<u8>> {
    let mut end = prefix.to_vec();

    while let Some(last) = end.last_mut() {
        if *last != 0xFF {
            *last += 1;
            return Some(end);
        }
        end.pop();
    }

    None
}

/// Returns an exclusive upper bound that still includes `max_key` itself.
///
/// Appending a single `0x00` yields the immediate successor of `max_key`:
/// `max_key` sorts strictly before it and no other key fits in between.
pub fn inclusive_end_bytes(max_key: &[u8]) -> Vec<u8> {
    let mut end = Vec::with_capacity(max_key.len() + 1);
    end.extend_from_slice(max_key);
    end.push(0x00);
    end
}

/// Copies a byte buffer, keeping "no buffer" and "empty buffer" distinct.
pub fn cp(buf: Option<&[u8]>) -> Option<Vec<u8>> {
    buf.map(|b| b.to_vec())
}

/// A half-open key range `[start, end)`.
///
/// `None` on either side means the range is unbounded in that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyRange {
    pub start: Option<Vec<u8>>,
    pub end: Option<Vec<u8>>,
}

impl KeyRange {
    pub fn new(start: Option<Vec<u8>>, end: Option<Vec<u8>>) -> Self {
        Self { start, end }
    }

    /// The range covering the whole key space.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// The range covering every key that starts with `prefix`.
    ///
    /// An empty prefix matches everything, so the result is fully unbounded.
    pub fn prefix(prefix: &[u8]) -> Self {
        if prefix.is_empty() {
            return Self::unbounded();
        }
        Self {
            start: Some(prefix.to_vec()),
            end: prefix_end_bytes(prefix),
        }
    }

    /// The range `[start, max_key]`, expressed with an exclusive end.
    pub fn inclusive(start: Option<Vec<u8>>, max_key: &[u8]) -> Self {
        Self {
            start,
            end: Some(inclusive_end_bytes(max_key)),
        }
    }

    pub fn start(&self) -> Option<&[u8]> {
        self.start.as_deref()
    }

    pub fn end(&self) -> Option<&[u8]> {
        self.end.as_deref()
    }

    pub fn contains(&self, key: &[u8]) -> bool {
        let above_start = match &self.start {
            Some(s) => key >= s.as_slice(),
            None => true,
        };
        let below_end = match &self.end {
            Some(e) => key < e.as_slice(),
            None => true,
        };
        above_start && below_end
    }

    /// Returns `true` if no key can fall inside the range.
    pub fn is_empty(&self) -> bool {
        match (&self.start, &self.end) {
            (Some(s), Some(e)) => s >= e,
            _ => false,
        }
    }
}
