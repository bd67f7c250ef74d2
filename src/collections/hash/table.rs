//! The storage layer shared by [`HashMap`](super::HashMap) and [`HashSet`](super::HashSet).
//!
//! A [`ProbeTable`] owns three parallel buffers: one [`Marker`] per slot, plus a key and a value
//! buffer that are only initialized where the marker isn't [`Marker::Empty`]. The table knows
//! nothing about hashing or probing, it just keeps the markers and payloads in sync.

use std::fmt::{self, Debug, Formatter};
use std::mem::MaybeUninit;

use crate::collections::contiguous::Array;
use crate::util::error::ReserveError;
use crate::util::fmt::DebugRaw;
use crate::util::result::ReserveResultExtension;

/// The state of a single slot. Occupancy is tracked here rather than through a reserved hash
/// value, so a key whose hash is 0 is stored like any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Marker {
    /// The slot holds no entry.
    #[default]
    Empty,
    /// The slot holds a settled entry with the contained hash.
    Occupied(u32),
    /// The slot holds an entry that still has to be moved during growth.
    Relocating(u32),
}

impl Marker {
    /// Returns the hash stored in this marker, or None if the slot is empty.
    pub(crate) const fn hash(self) -> Option<u32> {
        match self {
            Marker::Empty => None,
            Marker::Occupied(hash) | Marker::Relocating(hash) => Some(hash),
        }
    }
}

/// An entry taken out of a table: the stored hash, key and value.
pub(crate) type Slot<K, V> = (u32, K, V);

pub(crate) struct ProbeTable<K, V> {
    // Invariants:
    // - The capacity is markers.size(), keys and values are at least that long.
    // - For every index below the capacity, keys[index] and values[index] are initialized if and
    //   only if markers[index] isn't Empty.
    markers: Array<Marker>,
    keys: Array<MaybeUninit<K>>,
    values: Array<MaybeUninit<V>>,
}

impl<K, V> ProbeTable<K, V> {
    /// Creates a table with capacity 0, without allocating.
    pub(crate) const fn new() -> ProbeTable<K, V> {
        ProbeTable {
            markers: Array::new(),
            keys: Array::new(),
            values: Array::new(),
        }
    }

    /// Creates a table with `cap` empty slots.
    ///
    /// # Panics
    /// Panics if the required memory layout overflows, or if allocation fails.
    pub(crate) fn with_cap(cap: usize) -> ProbeTable<K, V> {
        let mut table = ProbeTable::new();
        table.try_grow_to(cap).or_handle_alloc();
        table
    }

    /// Returns the number of slots in the table.
    pub(crate) const fn cap(&self) -> usize {
        self.markers.size()
    }

    /// Returns the marker of the slot at `index`.
    pub(crate) fn marker(&self, index: usize) -> Marker {
        self.markers[index]
    }

    /// Counts the slots holding an entry.
    pub(crate) fn len(&self) -> usize {
        self.markers.iter().filter(|m| **m != Marker::Empty).count()
    }

    /// Returns the key and value stored at `index`, or None if the slot is empty.
    pub(crate) fn entry(&self, index: usize) -> Option<(&K, &V)> {
        if self.markers[index] == Marker::Empty {
            return None;
        }

        // SAFETY: The slot isn't empty, so both payloads are initialized.
        unsafe {
            Some((
                self.keys[index].assume_init_ref(),
                self.values[index].assume_init_ref(),
            ))
        }
    }

    /// Returns the key stored at `index`, or None if the slot is empty.
    pub(crate) fn key(&self, index: usize) -> Option<&K> {
        self.entry(index).map(|(k, _)| k)
    }

    /// Returns a mutable reference to the value stored at `index`, or None if the slot is empty.
    /// There is no mutable access to keys.
    pub(crate) fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        if self.markers[index] == Marker::Empty {
            return None;
        }

        // SAFETY: The slot isn't empty, so the value is initialized.
        unsafe { Some(self.values[index].assume_init_mut()) }
    }

    /// Takes the entry out of the slot at `index`, leaving it empty. Returns None if the slot was
    /// already empty.
    pub(crate) fn take(&mut self, index: usize) -> Option<Slot<K, V>> {
        let hash = self.markers[index].hash()?;
        self.markers[index] = Marker::Empty;

        // SAFETY: The slot wasn't empty, so both payloads were initialized. The marker is now
        // Empty, so they won't be read or dropped again.
        unsafe {
            Some((
                hash,
                self.keys[index].assume_init_read(),
                self.values[index].assume_init_read(),
            ))
        }
    }

    /// Writes an entry into the slot at `index` and marks it [`Marker::Occupied`]. If the slot
    /// already held an entry, it is returned rather than dropped.
    pub(crate) fn replace(
        &mut self,
        index: usize,
        hash: u32,
        key: K,
        value: V,
    ) -> Option<Slot<K, V>> {
        let previous = self.take(index);

        self.keys[index].write(key);
        self.values[index].write(value);
        self.markers[index] = Marker::Occupied(hash);

        previous
    }

    /// Marks every occupied slot as [`Marker::Relocating`].
    pub(crate) fn mark_relocating(&mut self) {
        for marker in self.markers.iter_mut() {
            if let Marker::Occupied(hash) = *marker {
                *marker = Marker::Relocating(hash);
            }
        }
    }

    /// Grows the table to `new_cap` slots. Existing slots keep their index and every new slot is
    /// empty. Does nothing if `new_cap` doesn't exceed the current capacity.
    ///
    /// The key and value buffers are grown before the markers, so on failure the capacity is
    /// unchanged and every entry is where it was.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the required memory layout overflows, or if allocation fails.
    pub(crate) fn try_grow_to(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        if self.keys.size() < new_cap {
            self.keys.try_realloc(new_cap)?;
        }
        if self.values.size() < new_cap {
            self.values.try_realloc(new_cap)?;
        }
        self.markers.try_realloc_with_default(new_cap)
    }

    /// Drops every entry and releases all three buffers, leaving the table with capacity 0.
    pub(crate) fn clear(&mut self) {
        for index in 0..self.cap() {
            drop(self.take(index));
        }

        self.markers = Array::new();
        self.keys = Array::new();
        self.values = Array::new();
    }

    /// Returns an iterator over the occupied slots, in index order.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&K, &V)> {
        (0..self.cap()).filter_map(move |index| self.entry(index))
    }
}

impl<K, V> Drop for ProbeTable<K, V> {
    fn drop(&mut self) {
        for index in 0..self.cap() {
            drop(self.take(index));
        }
    }
}

impl<K: Clone, V: Clone> Clone for ProbeTable<K, V> {
    fn clone(&self) -> Self {
        let mut table = ProbeTable::with_cap(self.cap());

        for index in 0..self.cap() {
            if let (Some(hash), Some((key, value))) = (self.markers[index].hash(), self.entry(index))
            {
                table.replace(index, hash, key.clone(), value.clone());
            }
        }

        table
    }
}

impl<K: Debug, V: Debug> Debug for ProbeTable<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries((0..self.cap()).map(|index| DebugRaw(match self.entry(index) {
                Some((k, v)) => format!("({k:?}: {v:?})"),
                None => "-".into(),
            })))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::alloc::CountedDrop;

    #[test]
    fn test_replace_and_take() {
        let mut table = ProbeTable::with_cap(4);
        assert_eq!(table.cap(), 4);
        assert_eq!(table.len(), 0);

        assert!(table.replace(2, 0, "a", 1).is_none());
        assert_eq!(table.marker(2), Marker::Occupied(0), "A hash of 0 should be stored as occupied.");
        assert_eq!(table.entry(2), Some((&"a", &1)));
        assert_eq!(table.key(1), None);

        assert_eq!(table.replace(2, 7, "b", 2), Some((0, "a", 1)));
        *table.value_mut(2).expect("slot 2 is occupied") += 10;
        assert_eq!(table.take(2), Some((7, "b", 12)));
        assert_eq!(table.take(2), None, "Taking from an empty slot should produce None.");
        assert_eq!(table.marker(2), Marker::Empty);
    }

    #[test]
    fn test_grow_keeps_slots() {
        let mut table = ProbeTable::with_cap(2);
        table.replace(1, 5, 10_u32, "ten");
        table.try_grow_to(8).expect("growing to 8 slots should succeed");

        assert_eq!(table.cap(), 8);
        assert_eq!(table.entry(1), Some((&10, &"ten")), "Existing slots should keep their index.");
        assert!((2..8).all(|i| table.marker(i) == Marker::Empty), "New slots should be empty.");

        assert!(table.try_grow_to(4).is_ok());
        assert_eq!(table.cap(), 8, "Shrinking requests should be ignored.");

        assert!(table.try_grow_to(usize::MAX).is_err_and(|e| e.is_capacity_overflow()));
        assert_eq!(table.cap(), 8, "A failed growth should leave the capacity unchanged.");
        assert_eq!(table.entry(1), Some((&10, &"ten")));
    }

    #[test]
    fn test_mark_relocating() {
        let mut table = ProbeTable::with_cap(3);
        table.replace(0, 1, 'a', ());
        table.replace(2, 3, 'c', ());
        table.mark_relocating();

        assert_eq!(table.marker(0), Marker::Relocating(1));
        assert_eq!(table.marker(1), Marker::Empty);
        assert_eq!(table.marker(2), Marker::Relocating(3));
        assert_eq!(table.len(), 2, "Relocating slots still hold entries.");
    }

    #[test]
    fn test_drop_and_clear() {
        let counter = CountedDrop::new();
        let mut table = ProbeTable::with_cap(4);
        for index in 0..3 {
            table.replace(index, index as u32, counter.clone(), counter.clone());
        }

        let copy = table.clone();
        assert_eq!(copy.len(), 3);
        drop(copy);
        assert_eq!(counter.dropped(), 6, "Dropping a table should drop every key and value.");

        table.clear();
        assert_eq!(counter.dropped(), 12);
        assert_eq!(table.cap(), 0, "Clearing should release every slot.");
        drop(table);
        assert_eq!(counter.dropped(), 12, "A cleared table has nothing left to drop.");
    }
}
