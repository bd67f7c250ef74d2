#![cfg(test)]

use super::*;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_access() {
    let mut vec = Vector::new();
    assert_eq!(vec.len(), 0);
    assert!(vec.is_empty());

    vec.push_back(10);
    vec.push_back(20);
    vec.push_back(30);

    assert_eq!(vec.len(), 3);
    assert_eq!(vec[0], 10);
    assert_eq!(vec[1], 20);
    assert_eq!(vec[2], 30);
    assert!(vec.cap() >= 3, "Capacity should grow to fit every element.");
}

#[test]
fn test_push_and_pop_front() {
    let mut vec = Vector::from([2, 3]);
    vec.push_front(1);
    vec.push_front(0);
    assert_eq!(&*vec, &[0, 1, 2, 3], "push_front should prepend in reverse order.");

    assert_eq!(vec.pop_front(), Some(0));
    assert_eq!(vec.pop_front(), Some(1));
    assert_eq!(vec.pop_back(), Some(3));
    assert_eq!(vec.pop_front(), Some(2));
    assert_eq!(vec.pop_front(), None, "Popping an empty Vector should produce None.");
    assert_eq!(vec.pop_back(), None);
}

#[test]
fn test_pop() {
    let mut vec = Vector::new();
    vec.push_back(10);
    vec.push_back(20);

    assert_eq!(vec.pop_back(), Some(20));
    assert_eq!(vec.len(), 1);
    assert_eq!(vec[0], 10);
}

#[test]
fn test_insert_and_remove() {
    let mut vec: Vector<_> = (0..5).collect();
    vec.insert(2, 100);
    vec.insert(6, 200);
    assert_eq!(&*vec, &[0, 1, 100, 2, 3, 4, 200]);

    assert_eq!(vec.remove(2), 100);
    assert_eq!(vec.remove(5), 200);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4], "Removal should close the gap.");

    assert_eq!(
        vec.try_remove(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Removing past the end should be reported as an error."
    );
    assert_eq!(vec.len(), 5, "A failed removal should leave the Vector unchanged.");

    assert_panics!({
        let mut vec = Vector::from([1, 2, 3]);
        vec.insert(4, 0);
    });
    assert_panics!({
        let mut vec = Vector::<u8>::new();
        vec.remove(0);
    });
}

#[test]
fn test_checked_access() {
    let mut vec = Vector::from([10, 20, 30]);
    assert_eq!(vec.try_get(0), Ok(&10));
    assert_eq!(vec.try_get(3), Err(IndexOutOfBounds { index: 3, len: 3 }));

    *vec.try_get_mut(1).expect("index 1 is in bounds") = 25;
    assert_eq!(vec[1], 25, "Writes through try_get_mut should be visible.");
    assert!(vec.try_get_mut(10).is_err());

    assert_panics!({
        let vec = Vector::from([1]);
        let _ = vec[1];
    });
}

#[test]
fn test_resize_and_clear() {
    let mut vec = Vector::from([1, 2]);
    vec.resize(5, 7);
    assert_eq!(&*vec, &[1, 2, 7, 7, 7]);

    let mut next = 0;
    vec.resize_with(7, || { next += 1; next });
    assert_eq!(&*vec, &[1, 2, 7, 7, 7, 1, 2]);

    vec.resize(2, 0);
    assert_eq!(&*vec, &[1, 2], "Resizing down should truncate.");

    let cap = vec.cap();
    vec.clear();
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing shouldn't change the capacity.");
}

#[test]
fn test_drop_accounting() {
    let counter = CountedDrop::new();
    let mut vec: Vector<_> = (0..10).map(|_| counter.clone()).collect();

    vec.push_front(counter.clone());
    drop(vec.remove(3));
    assert_eq!(counter.dropped(), 1, "Only the removed element should be dropped.");

    vec.truncate(6);
    assert_eq!(counter.dropped(), 5);

    drop(vec.pop_front());
    drop(vec);
    assert_eq!(counter.dropped(), 11, "Every element should be dropped exactly once.");
}

#[test]
fn test_zst_support() {
    let mut vec = Vector::new();
    for _ in 0..10 {
        vec.push_back(ZeroSizedType);
    }
    vec.insert(3, ZeroSizedType);
    assert_eq!(vec.len(), 11);
    assert_eq!(vec.pop_front(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 10);
}

#[test]
fn test_equality_and_format() {
    let vec = Vector::from([1, 2, 3]);
    assert_eq!(vec.clone(), vec, "A clone should equal the original.");
    assert_eq!(vec, (1..=3).collect::<Vector<_>>());
    assert_eq!(format!("{vec}"), "![1, 2, 3]");
}
