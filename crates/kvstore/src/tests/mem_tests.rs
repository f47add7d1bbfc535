use super::helpers::*;
use crate::*;
use anyhow::Result;

// -------------------- Basic CRUD --------------------

#[test]
fn set_and_get_single_key() {
    let mut s = MemStore::new();
    s.set(b"k1".to_vec(), b"v1".to_vec());
    assert_eq!(s.len(), 1);
    assert_eq!(s.get(b"k1"), Some(&b"v1"[..]));
}

#[test]
fn set_replaces_existing_value() {
    let mut s = MemStore::new();
    s.set(b"k".to_vec(), b"old".to_vec());
    s.set(b"k".to_vec(), b"new".to_vec());
    assert_eq!(s.len(), 1);
    assert_eq!(s.get(b"k"), Some(&b"new"[..]));
}

#[test]
fn delete_removes_key() {
    let mut s = store(&[("a", "1"), ("b", "2")]);
    assert_eq!(s.delete(b"a"), Some(b"1".to_vec()));
    assert_eq!(s.delete(b"a"), None);
    assert!(s.get(b"a").is_none());
    assert_eq!(s.len(), 1);
}

#[test]
fn empty_key_is_a_real_key() {
    let mut s = MemStore::new();
    s.set(Vec::new(), b"root".to_vec());
    assert_eq!(s.get(b""), Some(&b"root"[..]));
}

// -------------------- Iteration --------------------

#[test]
fn full_scan_is_ascending() -> Result<()> {
    let s = store(&[("c", "3"), ("a", "1"), ("b", "2")]);
    let pairs = drain(s.iterator(None, None)?)?;
    assert_eq!(keys(&pairs), vec!["a", "b", "c"]);
    assert_eq!(pairs[0], pair("a", "1"));
    Ok(())
}

#[test]
fn reverse_scan_is_descending() -> Result<()> {
    let s = store(&[("c", "3"), ("a", "1"), ("b", "2")]);
    let pairs = drain(s.reverse_iterator(None, None)?)?;
    assert_eq!(keys(&pairs), vec!["c", "b", "a"]);
    Ok(())
}

#[test]
fn bounded_scan_is_half_open() -> Result<()> {
    let s: MemStore = (b'a'..=b'z').map(|c| (vec![c], vec![c])).collect();

    let pairs = drain(s.iterator(Some(&b"b"[..]), Some(&b"e"[..]))?)?;
    assert_eq!(keys(&pairs), vec!["b", "c", "d"]);

    let pairs = drain(s.reverse_iterator(Some(&b"b"[..]), Some(&b"e"[..]))?)?;
    assert_eq!(keys(&pairs), vec!["d", "c", "b"]);
    Ok(())
}

#[test]
fn open_ended_bounds() -> Result<()> {
    let s = store(&[("a", "1"), ("b", "2"), ("c", "3")]);
    assert_eq!(keys(&drain(s.iterator(Some(&b"b"[..]), None)?)?), vec!["b", "c"]);
    assert_eq!(keys(&drain(s.iterator(None, Some(&b"b"[..]))?)?), vec!["a"]);
    Ok(())
}

#[test]
fn inverted_range_is_empty() -> Result<()> {
    let s = store(&[("a", "1"), ("b", "2")]);
    let iter = s.iterator(Some(&b"z"[..]), Some(&b"a"[..]))?;
    assert!(!iter.valid());
    let iter = s.reverse_iterator(Some(&b"b"[..]), Some(&b"b"[..]))?;
    assert!(!iter.valid());
    Ok(())
}

#[test]
fn cursor_reports_domain() -> Result<()> {
    let s = store(&[("a", "1")]);
    let iter = s.iterator(Some(&b"a"[..]), None)?;
    assert_eq!(iter.domain(), (Some(&b"a"[..]), None));
    Ok(())
}

#[test]
fn next_on_exhausted_cursor_is_noop() -> Result<()> {
    let s = store(&[("a", "1")]);
    let mut iter = s.iterator(None, None)?;
    iter.next()?;
    assert!(!iter.valid());
    iter.next()?;
    assert!(!iter.valid());
    Ok(())
}

#[test]
fn closed_store_refuses_iteration() {
    let mut s = store(&[("a", "1")]);
    s.close();
    assert!(s.is_closed());
    assert!(matches!(s.iterator(None, None), Err(StoreError::Closed)));
    assert!(matches!(s.reverse_iterator(None, None), Err(StoreError::Closed)));
}

#[test]
fn pairs_stops_after_error() -> Result<()> {
    let s = FlakyStore {
        inner: store(&[("a", "1"), ("b", "2"), ("c", "3")]),
        ok_steps: 1,
    };
    let results: Vec<_> = Pairs::new(s.iterator(None, None)?).collect();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap(), &pair("a", "1"));
    assert!(matches!(results[1], Err(StoreError::Backend(_))));
    Ok(())
}
