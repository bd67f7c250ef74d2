#![cfg(test)]

use crate::collections::hash::{ByteHash, Fnv1Hasher};

/// A key with a hash chosen by the test rather than computed from its bytes. Equality only
/// considers `value`, so two ManualHashes with the same hash and different values collide without
/// being equal.
#[derive(Debug, Clone)]
pub struct ManualHash<T: PartialEq> {
    hash: u32,
    value: T,
}

impl<T: PartialEq> ManualHash<T> {
    pub const fn new(hash: u32, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }

    pub fn value(self) -> T {
        self.value
    }
}

impl<T: PartialEq> ByteHash for ManualHash<T> {
    fn write_bytes(&self, state: &mut Fnv1Hasher) {
        state.update(&self.hash.to_le_bytes());
    }

    fn byte_hash(&self) -> u32 {
        self.hash
    }
}

impl<T: PartialEq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
