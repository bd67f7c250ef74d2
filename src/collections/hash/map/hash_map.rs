use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Chain;
use std::mem;
use std::ops::Range;

use crate::collections::hash::table::{Marker, ProbeTable};
use crate::collections::hash::ByteHash;
use crate::util::error::{CapacityOverflow, ReserveError};
use crate::util::option::OptionExtension;
use crate::util::result::ReserveResultExtension;

const GROWTH_FACTOR: usize = 2;

/// A map of keys to values using open addressing with linear probing, where keys are hashed with
/// FNV-1 through [`ByteHash`].
///
/// Each entry lives in the first free slot at or after its home index (`hash % cap`), wrapping
/// around to slot 0 past the end of the table. The table only grows when every slot is taken,
/// so a single growth always makes room for the new entry, however many keys share a hash.
/// Growth doubles the capacity (starting from 1) and moves entries in place. Removal shifts later
/// entries of the same cluster back, so the map never needs tombstones.
///
/// Clusters get long as the table fills up, so [`HashMap::reserve`] ahead of a large batch of
/// insertions keeps probes short.
///
/// Equality of keys is only checked when their hashes match, so keys with colliding hashes are
/// still stored as distinct entries.
///
/// It is a logic error for keys in a HashMap to be manipulated in a way that changes their hash.
/// Because of this, HashMap's API prevents mutable access to its keys.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashMap.
/// - `c`: The capacity of the HashMap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(c)` |
/// | `insert` | `O(1)`*, `O(c)`** |
/// | `get` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `reserve` | `O(c)`, `O(1)`*** |
/// | `clear` | `O(c)` |
///
/// \* In the event of a hash collision, these functions take additional time while they probe
/// forward along the cluster.
///
/// \** If every slot is taken, `insert` has to grow the map first.
///
/// \*** If the requested capacity doesn't exceed the current one, `reserve` does nothing.
#[derive(Clone)]
pub struct HashMap<K: ByteHash + PartialEq, V> {
    pub(crate) table: ProbeTable<K, V>,
}

/// The outcome of probing for a key.
enum Probe {
    /// The key is stored at the contained index.
    Found(usize),
    /// The key isn't stored and the contained index is the first empty slot of its cluster.
    Vacant(usize),
    /// The probe visited every slot without finding the key or an empty slot.
    Exhausted,
}

impl<K: ByteHash + PartialEq, V> HashMap<K, V> {
    /// Creates a new HashMap with capacity 0. Memory will be allocated on the first insertion.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::hash::HashMap;
    /// let map: HashMap<u32, &str> = HashMap::new();
    /// assert_eq!(map.cap(), 0);
    /// assert!(map.is_empty());
    /// ```
    pub const fn new() -> HashMap<K, V> {
        HashMap {
            table: ProbeTable::new(),
        }
    }

    /// Creates a new HashMap with the provided `cap`acity, allowing `cap` insertions without
    /// reallocation.
    ///
    /// # Panics
    /// Panics if the memory layout of the table would overflow. Allocation failures are passed to
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn with_cap(cap: usize) -> HashMap<K, V> {
        HashMap {
            table: ProbeTable::with_cap(cap),
        }
    }

    /// Returns the number of entries in the HashMap. This counts the occupied slots, so it takes
    /// time proportional to the capacity.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the HashMap contains no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the current capacity of the HashMap.
    pub const fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, increasing the capacity if
    /// required. If the key was already associated with a value, the previous value is returned.
    ///
    /// As with the standard library, the key isn't changed if it already exists.
    ///
    /// # Panics
    /// Panics if the capacity would overflow. Allocation failures are passed to
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::hash::HashMap;
    /// let mut map = HashMap::new();
    /// assert_eq!(map.insert(1.5_f32, 10), None);
    /// assert_eq!(map.insert(1.5_f32, 15), Some(10));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.try_insert(key, value).or_handle_alloc()
    }

    /// Inserts the provided `key`-`value` pair into the HashMap, as with [`HashMap::insert`], but
    /// reports failed growth as an error.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the map is full and growing it would overflow the capacity or
    /// fail to allocate. Growth fails before any entry has moved, so the stored entries are
    /// unchanged and the provided entry is dropped.
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, ReserveError> {
        let hash = key.byte_hash();

        let index = match self.probe(hash, &key) {
            Probe::Found(index) => {
                let existing = self.table.value_mut(index).unreachable();
                return Ok(Some(mem::replace(existing, value)));
            },
            Probe::Vacant(index) => index,
            Probe::Exhausted => {
                // The table is full and the key isn't in it. After one growth there are more
                // slots than entries, so the probe wraps onto a free slot.
                self.try_reserve(grown_cap(self.cap())?)?;
                self.first_free(hash).unreachable()
            },
        };

        let _empty = self.table.replace(index, hash, key, value);
        Ok(None)
    }

    /// Returns the entry for the provided `key` as a key-value pair or None if there is no entry.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        // Q represents a borrowed form of K, which must hash and compare the same way.
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        match self.probe(key.byte_hash(), key) {
            Probe::Found(index) => self.table.entry(index),
            _ => None,
        }
    }

    /// Returns a reference to the value associated with the provided `key` or None if the map
    /// contains no values for `key`.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::hash::HashMap;
    /// let map = HashMap::from([(String::from("a"), 1), (String::from("b"), 2)]);
    /// assert_eq!(map.get("a"), Some(&1));
    /// assert_eq!(map.get("c"), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        self.get_entry(key).map(|(_, v)| v)
    }

    /// Returns a mutable reference to the value associated with the provided `key` or None if the
    /// map contains no values for `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        match self.probe(key.byte_hash(), key) {
            Probe::Found(index) => self.table.value_mut(index),
            _ => None,
        }
    }

    /// Returns true if there is a value associated with the provided `key`.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        matches!(self.probe(key.byte_hash(), key), Probe::Found(_))
    }

    /// Removes the entry associated with `key`, returning it if it exists.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        let Probe::Found(index) = self.probe(key.byte_hash(), key) else {
            return None;
        };

        let (_, removed_key, removed_value) = self.table.take(index).unreachable();

        // Close the gap: any later entry of the cluster that had to probe across the hole moves
        // back into it. Distances are counted forward, wrapping past the end of the table. The
        // hole is empty, so the scan stops before coming back around to it.
        let cap = self.cap();
        let mut hole = index;
        for next in probe_order(index, cap).skip(1) {
            let Some(hash) = self.table.marker(next).hash() else {
                break;
            };

            let from_home = (next + cap - self.home(hash)) % cap;
            let from_hole = (next + cap - hole) % cap;
            if from_home >= from_hole {
                let (hash, key, value) = self.table.take(next).unreachable();
                let _empty = self.table.replace(hole, hash, key, value);
                hole = next;
            }
        }

        Some((removed_key, removed_value))
    }

    /// Removes the entry associated with `key`, returning the value if it exists.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        self.remove_entry(key).map(|(_, v)| v)
    }

    /// Increases the capacity of the HashMap to `new_cap`, moving existing entries to their place
    /// under the new capacity. Requests that don't exceed the current capacity are ignored.
    ///
    /// # Panics
    /// Panics if the capacity would overflow. Allocation failures are passed to
    /// [`handle_alloc_error`](std::alloc::handle_alloc_error).
    pub fn reserve(&mut self, new_cap: usize) {
        self.try_reserve(new_cap).or_handle_alloc()
    }

    /// Increases the capacity of the HashMap to `new_cap`, as with [`HashMap::reserve`], but
    /// reports failed allocation as an error.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the memory layout for `new_cap` slots would overflow or if
    /// allocation fails. In that case the map is unchanged.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if new_cap <= self.cap() {
            return Ok(());
        }

        self.table.try_grow_to(new_cap)?;
        self.relocate();
        Ok(())
    }

    /// Drops every entry and releases the table's memory, leaving the HashMap with capacity 0.
    pub fn clear(&mut self) {
        self.table.clear();
    }
}

impl<K: ByteHash + PartialEq, V> HashMap<K, V> {
    /// Calculates the home index for the provided `hash`, which is 0 if the capacity is 0.
    pub(crate) fn home(&self, hash: u32) -> usize {
        (hash as usize).checked_rem(self.cap()).unwrap_or(0)
    }

    /// Scans forward from the home index of `hash`, wrapping around, until the key or an empty
    /// slot is found. Keys are only compared when their stored hash matches.
    fn probe<Q>(&self, hash: u32, key: &Q) -> Probe
    where
        K: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        for index in probe_order(self.home(hash), self.cap()) {
            match self.table.marker(index) {
                Marker::Empty => return Probe::Vacant(index),
                Marker::Occupied(existing) | Marker::Relocating(existing) if existing == hash => {
                    let existing_key: &Q = self.table.key(index).unreachable().borrow();
                    if existing_key == key {
                        return Probe::Found(index);
                    }
                },
                _ => {},
            }
        }

        Probe::Exhausted
    }

    /// Returns the first slot from the home index of `hash` that isn't settled, which is either
    /// empty or still relocating. Returns None if every slot is settled.
    fn first_free(&self, hash: u32) -> Option<usize> {
        probe_order(self.home(hash), self.cap())
            .find(|index| !matches!(self.table.marker(*index), Marker::Occupied(_)))
    }

    /// Moves every entry to its place under the current capacity, after the table has grown.
    ///
    /// All entries start out marked as relocating. Slots are scanned from the start, and each
    /// relocating entry is placed in the first slot from its home that isn't settled. If that slot
    /// held another relocating entry, that entry is placed next. A placement never skips over an
    /// entry that still has to move, so the clusters of settled entries never contain a gap.
    fn relocate(&mut self) {
        self.table.mark_relocating();

        for index in 0..self.cap() {
            if !matches!(self.table.marker(index), Marker::Relocating(_)) {
                continue;
            }

            let mut in_hand = self.table.take(index);
            while let Some((hash, key, value)) = in_hand {
                // The entry in hand isn't in the table, so at least one slot is unsettled.
                let free = self.first_free(hash).unreachable();
                in_hand = self.table.replace(free, hash, key, value);
            }
        }
    }
}

/// Returns the slot indices in probing order: from `home` to the end of the table, then from the
/// start of the table back up to `home`.
fn probe_order(home: usize, cap: usize) -> Chain<Range<usize>, Range<usize>> {
    (home..cap).chain(0..home)
}

/// Returns the capacity the table grows to from `cap`: 1 for an empty table, otherwise `cap`
/// multiplied by the growth factor.
pub(crate) const fn grown_cap(cap: usize) -> Result<usize, CapacityOverflow> {
    if cap == 0 {
        return Ok(1);
    }

    match cap.checked_mul(GROWTH_FACTOR) {
        Some(new_cap) => Ok(new_cap),
        None => Err(CapacityOverflow),
    }
}

impl<K: ByteHash + PartialEq, V> Default for HashMap<K, V> {
    fn default() -> Self {
        HashMap::new()
    }
}

impl<K: ByteHash + PartialEq, V> Extend<(K, V)> for HashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: ByteHash + PartialEq, V> FromIterator<(K, V)> for HashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut map = HashMap::with_cap(iter.size_hint().0);
        map.extend(iter);
        map
    }
}

impl<K: ByteHash + PartialEq, V, const N: usize> From<[(K, V); N]> for HashMap<K, V> {
    fn from(value: [(K, V); N]) -> Self {
        value.into_iter().collect()
    }
}

impl<K: ByteHash + PartialEq + Debug, V: Debug> Debug for HashMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashMap")
            .field("slots", &self.table)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<K: ByteHash + PartialEq + Debug, V: Debug> Display for HashMap<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map().entries(self.table.entries()).finish()
    }
}
