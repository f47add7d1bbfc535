//! Store comparison: walks two stores in lockstep and reports the first
//! point where they diverge.
//!
//! ```text
//!   A: a=1  b=2  c=3
//!   B: a=1  b=2  c=4
//!      ok   ok   ^-- first divergence, count = 2
//! ```
//!
//! Both stores are scanned over their full key range in ascending order. The
//! comparison assumes both yield keys in the same order; differing orders
//! show up as a divergence.

use std::fmt;

use config::DiffConfig;
use tracing::{debug, trace};

use crate::store::{KvIterator, KvPair, KvStore, Result};

/// Outcome of comparing two stores.
///
/// When `equal` is `false`, `a` and `b` hold the pairs at the first point of
/// divergence. A `None` side means that store ran out of keys first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffReport {
    pub a: Option<KvPair>,
    pub b: Option<KvPair>,
    /// Number of pairs that matched before the walk stopped.
    pub count: u64,
    pub equal: bool,
}

impl DiffReport {
    pub fn equal(count: u64) -> Self {
        Self {
            a: None,
            b: None,
            count,
            equal: true,
        }
    }

    pub fn diverged(a: Option<KvPair>, b: Option<KvPair>, count: u64) -> Self {
        Self {
            a,
            b,
            count,
            equal: false,
        }
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.equal {
            return write!(f, "stores equal ({} pairs)", self.count);
        }
        let side = |p: &Option<KvPair>| match p {
            Some(p) => p.to_string(),
            None => "<end>".to_string(),
        };
        write!(
            f,
            "stores diverge after {} pairs: a[{}] b[{}]",
            self.count,
            side(&self.a),
            side(&self.b)
        )
    }
}

/// Compares two stores, skipping value comparison for keys that start with
/// any of `skip_prefixes`.
///
/// Keys must still match one-for-one under a skip prefix; only the values are
/// exempt. A skip prefix longer than a key never matches it.
///
/// # Errors
///
/// Returns the store's error if either full-range cursor cannot be opened, or
/// if a cursor fails while advancing. No report is produced in that case.
pub fn diff_kv_stores<A, B>(a: &A, b: &B, skip_prefixes: &[&[u8]]) -> Result<DiffReport>
where
    A: KvStore + ?Sized,
    B: KvStore + ?Sized,
{
    walk(a, b, skip_prefixes, 0)
}

/// Same as [`diff_kv_stores`], driven by a [`DiffConfig`].
pub fn diff_with_config<A, B>(a: &A, b: &B, config: &DiffConfig) -> Result<DiffReport>
where
    A: KvStore + ?Sized,
    B: KvStore + ?Sized,
{
    walk(a, b, &config.skip_prefix_slices(), config.progress_interval)
}

fn walk<A, B>(a: &A, b: &B, skip_prefixes: &[&[u8]], progress_interval: u64) -> Result<DiffReport>
where
    A: KvStore + ?Sized,
    B: KvStore + ?Sized,
{
    debug!(skip_prefixes = skip_prefixes.len(), "starting store diff");

    // Both cursors are owned here and dropped on every return path.
    let mut iter_a = a.iterator(None, None)?;
    let mut iter_b = b.iterator(None, None)?;
    let mut count: u64 = 0;

    while iter_a.valid() || iter_b.valid() {
        let kv_a = take_current(&mut *iter_a)?;
        let kv_b = take_current(&mut *iter_b)?;

        let (kv_a, kv_b) = match (kv_a, kv_b) {
            (Some(x), Some(y)) if x.key == y.key => (x, y),
            (x, y) => {
                let report = DiffReport::diverged(x, y, count);
                debug!(count, "store diff found key divergence");
                return Ok(report);
            }
        };

        if !skips_value(&kv_a.key, skip_prefixes) && kv_a.value != kv_b.value {
            debug!(count, "store diff found value divergence");
            return Ok(DiffReport::diverged(Some(kv_a), Some(kv_b), count));
        }

        count += 1;
        if progress_interval > 0 && count.is_multiple_of(progress_interval) {
            trace!(count, "store diff progress");
        }
    }

    debug!(count, "store diff complete, stores equal");
    Ok(DiffReport::equal(count))
}

/// Reads the pair under the cursor and advances it. An exhausted cursor
/// yields `None` and is left alone.
fn take_current<I: KvIterator + ?Sized>(iter: &mut I) -> Result<Option<KvPair>> {
    if !iter.valid() {
        return Ok(None);
    }
    let pair = KvPair::new(iter.key(), iter.value());
    iter.next()?;
    Ok(Some(pair))
}

fn skips_value(key: &[u8], skip_prefixes: &[&[u8]]) -> bool {
    skip_prefixes.iter().any(|prefix| key.starts_with(prefix))
}
