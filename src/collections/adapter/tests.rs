#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;

#[test]
fn test_stack_order() {
    let mut stack = Stack::from([10, 20, 30]);
    assert_eq!(stack.top(), Some(&30), "The last element should be on top.");

    stack.pop();
    assert_eq!(stack.top(), Some(&20));

    stack.pop();
    assert_eq!(stack.top(), Some(&10));
    assert_eq!(stack.len(), 1);

    assert_eq!(stack.pop(), Some(10));
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None, "Popping an empty Stack should produce None.");
    assert_eq!(stack.top(), None);
}

#[test]
fn test_stack_push_and_top_mut() {
    let mut stack: Stack<_> = (1..=3).collect();
    stack.push(4);
    *stack.top_mut().expect("the stack isn't empty") *= 10;

    assert_eq!(stack.pop(), Some(40));
    assert_eq!(stack.len(), 3);

    stack.clear();
    assert!(stack.is_empty());
    assert_eq!(stack, Stack::default());
}

#[test]
fn test_queue_order() {
    let mut queue = Queue::from([10, 20, 30]);
    assert_eq!(queue.front(), Some(&10), "The first element should be at the front.");
    assert_eq!(queue.back(), Some(&30));
    assert_eq!(queue.len(), 3);

    queue.pop();
    assert_eq!(queue.front(), Some(&20));
    assert_eq!(queue.len(), 2);

    queue.push(40);
    assert_eq!(queue.back(), Some(&40));
    assert_eq!(queue.pop(), Some(20));
    assert_eq!(queue.pop(), Some(30));
    assert_eq!(queue.pop(), Some(40));
    assert_eq!(queue.pop(), None, "Popping an empty Queue should produce None.");
    assert_eq!(queue.front(), None);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new();
    let mut stack: Stack<_> = (0..4).map(|_| counter.clone()).collect();
    let mut queue: Queue<_> = (0..4).map(|_| counter.clone()).collect();

    drop(stack.pop());
    drop(queue.pop());
    assert_eq!(counter.dropped(), 2);

    queue.clear();
    assert_eq!(counter.dropped(), 5);

    drop(stack);
    drop(queue);
    assert_eq!(counter.dropped(), 8, "Every element should be dropped exactly once.");
}

#[test]
fn test_format() {
    let stack = Stack::from([1, 2]);
    assert_eq!(format!("{stack}"), "^[1, 2]");
    assert_eq!(format!("{stack:?}"), "Stack { contents: [1, 2], len: 2 }");

    let queue = Queue::from(['a']);
    assert_eq!(format!("{queue}"), "<['a']");
    assert_eq!(queue.clone(), queue);
}
