//! In-memory ordered store.
//!
//! A `BTreeMap` keyed by raw bytes, so iteration order is byte-lexicographic
//! for free. Used as the reference [`KvStore`] backend in tests and benches.

use std::collections::BTreeMap;
use std::ops::Bound;

use crate::store::{BoxedIterator, KvIterator, KvStore, Result, StoreError};

#[derive(Debug, Default, Clone)]
pub struct MemStore {
    map: BTreeMap<Vec<u8>, Vec<u8>>,
    closed: bool,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a key.
    pub fn set(&mut self, key: Vec<u8>, value: Vec<u8>) {
        self.map.insert(key, value);
    }

    pub fn get(&self, key: &[u8]) -> Option<&[u8]> {
        self.map.get(key).map(Vec::as_slice)
    }

    /// Removes a key, returning its value if it was present.
    pub fn delete(&mut self, key: &[u8]) -> Option<Vec<u8>> {
        self.map.remove(key)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Marks the store closed. Later range opens fail with
    /// [`StoreError::Closed`].
    pub fn close(&mut self) {
        self.closed = true;
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn open(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        reverse: bool,
    ) -> Result<MemIterator<'_>> {
        if self.closed {
            return Err(StoreError::Closed);
        }
        Ok(MemIterator::new(&self.map, start, end, reverse))
    }
}

impl<K, V> FromIterator<(K, V)> for MemStore
where
    K: Into<Vec<u8>>,
    V: Into<Vec<u8>>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut store = MemStore::new();
        for (k, v) in iter {
            store.set(k.into(), v.into());
        }
        store
    }
}

impl KvStore for MemStore {
    fn iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Result<BoxedIterator<'_>> {
        Ok(Box::new(self.open(start, end, false)?))
    }

    fn reverse_iterator(
        &self,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
    ) -> Result<BoxedIterator<'_>> {
        Ok(Box::new(self.open(start, end, true)?))
    }
}

type Entries<'a> = Box<dyn Iterator<Item = (&'a Vec<u8>, &'a Vec<u8>)> + 'a>;

/// Cursor over a [`MemStore`] range.
///
/// Borrows the map, so the store cannot change while the cursor is alive.
pub struct MemIterator<'a> {
    entries: Entries<'a>,
    current: Option<(&'a [u8], &'a [u8])>,
    start: Option<Vec<u8>>,
    end: Option<Vec<u8>>,
}

impl<'a> MemIterator<'a> {
    fn new(
        map: &'a BTreeMap<Vec<u8>, Vec<u8>>,
        start: Option<&[u8]>,
        end: Option<&[u8]>,
        reverse: bool,
    ) -> Self {
        let inverted = matches!((start, end), (Some(s), Some(e)) if s > e);

        let mut entries: Entries<'a> = if inverted {
            // BTreeMap::range panics on start > end.
            Box::new(std::iter::empty::<(&'a Vec<u8>, &'a Vec<u8>)>())
        } else {
            let lo = start.map_or(Bound::Unbounded, Bound::Included);
            let hi = end.map_or(Bound::Unbounded, Bound::Excluded);
            let range = map.range::<[u8], _>((lo, hi));
            if reverse {
                Box::new(range.rev())
            } else {
                Box::new(range)
            }
        };

        let current = entries.next().map(|(k, v)| (k.as_slice(), v.as_slice()));
        Self {
            entries,
            current,
            start: start.map(<[u8]>::to_vec),
            end: end.map(<[u8]>::to_vec),
        }
    }
}

impl KvIterator for MemIterator<'_> {
    fn domain(&self) -> (Option<&[u8]>, Option<&[u8]>) {
        (self.start.as_deref(), self.end.as_deref())
    }

    fn valid(&self) -> bool {
        self.current.is_some()
    }

    fn key(&self) -> &[u8] {
        self.current.map(|(k, _)| k).unwrap_or_default()
    }

    fn value(&self) -> &[u8] {
        self.current.map(|(_, v)| v).unwrap_or_default()
    }

    fn next(&mut self) -> Result<()> {
        if self.current.is_some() {
            self.current = self
                .entries
                .next()
                .map(|(k, v)| (k.as_slice(), v.as_slice()));
        }
        Ok(())
    }
}
