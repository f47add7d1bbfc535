//! # KvStore - primitives over an ordered key-value store
//!
//! Read-only helpers layered on any store that can iterate a byte-ordered
//! key range:
//!
//! | Module     | Purpose                                                  |
//! |------------|----------------------------------------------------------|
//! | [`store`]  | `KvStore` / `KvIterator` traits, `StoreError`, `KvPair`  |
//! | [`prefix`] | ascending and descending prefix scans                    |
//! | [`diff`]   | lockstep comparison of two stores, first divergence      |
//! | [`mem`]    | `MemStore`, a `BTreeMap`-backed store                     |
//!
//! Range arithmetic lives in the [`keyrange`] crate and is re-exported here.
//!
//! ## Example
//!
//! ```rust
//! use kvstore::{diff_kv_stores, prefix_iterator, MemStore, Pairs};
//!
//! let a: MemStore = [("acc/1", "10"), ("acc/2", "20"), ("meta", "x")]
//!     .into_iter()
//!     .collect();
//! let b: MemStore = [("acc/1", "10"), ("acc/2", "20"), ("meta", "y")]
//!     .into_iter()
//!     .collect();
//!
//! let accounts: Vec<_> = Pairs::new(prefix_iterator(&a, b"acc/").unwrap())
//!     .collect::<Result<_, _>>()
//!     .unwrap();
//! assert_eq!(accounts.len(), 2);
//!
//! let report = diff_kv_stores(&a, &b, &[b"meta".as_slice()]).unwrap();
//! assert!(report.equal);
//! assert_eq!(report.count, 3);
//! ```
pub mod diff;
pub mod mem;
pub mod prefix;
pub mod store;

pub use diff::{diff_kv_stores, diff_with_config, DiffReport};
pub use keyrange::{cp, inclusive_end_bytes, prefix_end_bytes, KeyRange};
pub use mem::{MemIterator, MemStore};
pub use prefix::{prefix_iterator, reverse_prefix_iterator};
pub use store::{BoxedIterator, KvIterator, KvPair, KvStore, Pairs, Result, StoreError};

#[cfg(test)]
mod tests;
