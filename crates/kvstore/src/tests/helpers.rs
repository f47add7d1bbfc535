use crate::*;
use std::io;

/// Builds a store from string pairs.
pub fn store(pairs: &[(&str, &str)]) -> MemStore {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

/// Drains a cursor into owned pairs.
pub fn drain(iter: BoxedIterator<'_>) -> Result<Vec<KvPair>> {
    Pairs::new(iter).collect()
}

/// Keys of the given pairs, as strings.
pub fn keys(pairs: &[KvPair]) -> Vec<String> {
    pairs
        .iter()
        .map(|p| String::from_utf8_lossy(&p.key).into_owned())
        .collect()
}

pub fn pair(key: &str, value: &str) -> KvPair {
    KvPair::new(key, value)
}

/// A store whose range opens always fail with an I/O error.
pub struct BrokenStore;

impl KvStore for BrokenStore {
    fn iterator(&self, _: Option<&[u8]>, _: Option<&[u8]>) -> Result<BoxedIterator<'_>> {
        Err(io::Error::other("disk on fire").into())
    }

    fn reverse_iterator(&self, _: Option<&[u8]>, _: Option<&[u8]>) -> Result<BoxedIterator<'_>> {
        Err(io::Error::other("disk on fire").into())
    }
}

/// A store whose cursors fail after yielding `ok_steps` entries.
pub struct FlakyStore {
    pub inner: MemStore,
    pub ok_steps: usize,
}

struct FlakyIterator<'a> {
    inner: BoxedIterator<'a>,
    remaining: usize,
}

impl KvIterator for FlakyIterator<'_> {
    fn domain(&self) -> (Option<&[u8]>, Option<&[u8]>) {
        self.inner.domain()
    }

    fn valid(&self) -> bool {
        self.inner.valid()
    }

    fn key(&self) -> &[u8] {
        self.inner.key()
    }

    fn value(&self) -> &[u8] {
        self.inner.value()
    }

    fn next(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(StoreError::Backend("cursor lost".into()));
        }
        self.remaining -= 1;
        self.inner.next()
    }
}

impl KvStore for FlakyStore {
    fn iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Result<BoxedIterator<'_>> {
        Ok(Box::new(FlakyIterator {
            inner: self.inner.iterator(start, end)?,
            remaining: self.ok_steps,
        }))
    }

    fn reverse_iterator(&self, start: Option<&[u8]>, end: Option<&[u8]>) -> Result<BoxedIterator<'_>> {
        Ok(Box::new(FlakyIterator {
            inner: self.inner.reverse_iterator(start, end)?,
            remaining: self.ok_steps,
        }))
    }
}
