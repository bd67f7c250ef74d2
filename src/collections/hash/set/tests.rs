#![cfg(test)]

use super::*;
use crate::collections::contiguous::Vector;
use crate::util::alloc::CountedDrop;
use crate::util::hash::ManualHash;

fn slot_order(set: &HashSet<ManualHash<&'static str>>) -> Vector<&'static str> {
    set.inner.table.entries().map(|(k, _)| k.clone().value()).collect()
}

#[test]
fn test_insert_contains_remove() {
    let mut set = HashSet::new();
    assert!(set.insert(10_i64));
    assert!(set.insert(20));
    assert!(!set.insert(10), "Inserting a present item should return false.");
    assert_eq!(set.len(), 2);

    assert!(set.contains(&10));
    assert!(!set.contains(&30));
    assert_eq!(set.get(&20), Some(&20));

    assert_eq!(set.remove(&10), Some(10));
    assert_eq!(set.remove(&10), None, "Removing an absent item should do nothing.");
    assert_eq!(set.len(), 1);
    assert!(!set.contains(&10));
}

#[test]
fn test_hash_collisions() {
    let mut set = HashSet::with_cap(8);
    set.insert(ManualHash::new(0, "zero"));
    set.insert(ManualHash::new(0, "one"));
    set.insert(ManualHash::new(2, "two"));
    set.insert(ManualHash::new(0, "three"));
    set.insert(ManualHash::new(2, "four"));
    set.insert(ManualHash::new(1, "five"));

    set.remove(&ManualHash::new(0, "zero"));
    set.remove(&ManualHash::new(2, "two"));

    assert_eq!(
        *slot_order(&set),
        ["one", "three", "four", "five"],
        "HashSet should handle hash collisions so that no elements are lost during removal."
    );

    let mut set = HashSet::with_cap(6);
    set.insert(ManualHash::new(5, "zero"));
    set.insert(ManualHash::new(5, "one"));
    set.insert(ManualHash::new(1, "two"));
    set.insert(ManualHash::new(5, "three"));

    assert_eq!(set.cap(), 6, "Collisions in the last slot should wrap rather than grow.");
    assert_eq!(*slot_order(&set), ["one", "two", "three", "zero"]);

    set.remove(&ManualHash::new(5, "zero"));

    assert_eq!(
        *slot_order(&set),
        ["three", "two", "one"],
        "Removal should pull wrapped items back across the end of the table."
    );
    assert!(set.contains(&ManualHash::new(5, "three")) && set.contains(&ManualHash::new(1, "two")));
}

#[test]
fn test_get_returns_stored_item() {
    let set = HashSet::from([String::from("stored")]);
    let item = set.get("stored").expect("the item was inserted");
    assert_eq!(item, "stored", "Items should be found through a borrowed form.");
    assert_eq!(set.get("missing"), None);
}

#[test]
fn test_clear_and_reuse() {
    let mut set: HashSet<char> = "hello world".chars().collect();
    assert_eq!(set.len(), 8);

    set.clear();
    assert!(set.is_empty());
    assert_eq!(set.cap(), 0);

    set.extend(['a', 'b']);
    assert!(set.contains(&'a') && set.contains(&'b'));
    assert_eq!(set.len(), 2);
}

#[test]
fn test_reserve() {
    let mut set = HashSet::from([1_u8, 2, 3]);
    set.reserve(64);
    assert_eq!(set.cap(), 64);
    assert!((1..=3).all(|i| set.contains(&i)), "Reserving should keep every item.");

    assert!(set.try_reserve(usize::MAX).is_err());
    assert_eq!(set.cap(), 64);
    assert_eq!(set.try_insert(4), Ok(true));
    assert_eq!(set.try_insert(4), Ok(false));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut set = HashSet::new();
    for i in 0..5 {
        set.insert(ManualHash::new(i, (i, counter.clone())));
    }

    drop(set.remove(&ManualHash::new(2, (2, counter.clone()))));
    // The removed item and the lookup key.
    assert_eq!(counter.dropped(), 2);

    drop(set);
    assert_eq!(counter.dropped(), 6, "Every item should be dropped exactly once.");
}

#[test]
fn test_format() {
    let set = HashSet::from([7]);
    assert_eq!(format!("{set}"), "#{7}");
    assert_eq!(format!("{}", HashSet::<u8>::new()), "#{}");
    assert!(format!("{set:?}").starts_with("HashSet { slots: [(7: ())]"));
}
