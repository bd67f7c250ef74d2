use probe_collections::collections::adapter::{Queue, Stack};
use probe_collections::collections::contiguous::{FixedArray, Vector};
use probe_collections::collections::hash::{fnv1, HashMap, HashSet};
use probe_collections::IndexOutOfBounds;

#[test]
fn float_keyed_map() {
    let mut map = HashMap::from([(1.5_f32, 10), (2.5, 20), (3.5, 30)]);
    assert_eq!(map.len(), 3);
    assert!(map.contains(&1.5));
    assert!(map.contains(&2.5));
    assert!(map.contains(&3.5));

    map.remove(&2.5);
    assert_eq!(map.len(), 2);
    assert!(!map.contains(&2.5));
}

#[test]
fn map_grows_through_small_capacities() {
    let mut map = HashMap::new();
    let mut caps = Vector::new();

    for key in 0_u8..16 {
        map.insert(key, u32::from(key));
        if caps.last() != Some(&map.cap()) {
            caps.push_back(map.cap());
        }
    }

    assert_eq!(*caps, [1, 2, 4, 8, 16], "The map should double each time it fills up.");
    assert!((0_u8..16).all(|key| map.get(&key) == Some(&u32::from(key))));
}

#[test]
fn string_set() {
    let mut set: HashSet<String> = ["red", "green", "blue"].iter().map(|s| s.to_string()).collect();
    assert!(set.contains("green"));
    assert!(!set.insert(String::from("red")));

    assert_eq!(set.remove("green").as_deref(), Some("green"));
    assert_eq!(set.len(), 2);

    set.clear();
    assert!(set.is_empty());
    assert!(set.insert(String::from("green")));
}

#[test]
fn stack_scenario() {
    let mut stack = Stack::from([10, 20, 30]);
    assert_eq!(stack.top(), Some(&30));

    stack.pop();
    assert_eq!(stack.top(), Some(&20));

    stack.pop();
    assert_eq!(stack.top(), Some(&10));
    assert_eq!(stack.len(), 1);
}

#[test]
fn queue_scenario() {
    let mut queue = Queue::from([10, 20, 30]);
    assert_eq!(queue.front(), Some(&10));
    assert_eq!(queue.len(), 3);

    queue.pop();
    assert_eq!(queue.front(), Some(&20));
    assert_eq!(queue.len(), 2);
}

#[test]
fn vector_and_fixed_array() {
    let mut vec = Vector::from([1, 2, 3]);
    vec.push_back(4);
    vec.push_front(0);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
    assert_eq!(vec.pop_front(), Some(0));
    assert_eq!(vec.try_get(10), Err(IndexOutOfBounds { index: 10, len: 4 }));

    let mut arr: FixedArray<u8, 3> = FixedArray::new();
    arr[2] = 9;
    assert_eq!(arr.len(), 3);
    assert_eq!(arr.into_inner(), [0, 0, 9]);
}

#[test]
fn fnv1_known_values() {
    assert_eq!(fnv1(b""), 0x811c_9dc5);
    assert_eq!(fnv1(b"a"), 0x050c_5d7e);
}
