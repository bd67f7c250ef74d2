use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::hash::{ByteHash, HashMap};
use crate::util::error::ReserveError;

/// A set of unique items, stored as the keys of a [`HashMap`] with unit values. Probing, growth
/// and removal behave exactly as they do for [`HashMap`].
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `c`: The capacity of the HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(c)` |
/// | `insert` | `O(1)`*, `O(c)` |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `reserve` | `O(c)` |
///
/// \* With additional time for probing past colliding entries.
#[derive(Clone)]
pub struct HashSet<T: ByteHash + PartialEq> {
    // The unit type makes the value buffer zero sized.
    pub(crate) inner: HashMap<T, ()>,
}

impl<T: ByteHash + PartialEq> HashSet<T> {
    /// Creates a new HashSet with capacity 0.
    pub const fn new() -> HashSet<T> {
        HashSet {
            inner: HashMap::new(),
        }
    }

    /// Creates a new HashSet with the provided `cap`acity.
    ///
    /// # Panics
    /// Panics if the memory layout of the table would overflow.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet {
            inner: HashMap::with_cap(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub const fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present. An existing equal
    /// item is kept rather than replaced.
    ///
    /// # Panics
    /// Panics if the capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::hash::HashSet;
    /// let mut set = HashSet::new();
    /// assert!(set.insert(3));
    /// assert!(!set.insert(3));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item, ()).is_none()
    }

    /// Adds `item` to the HashSet as with [`HashSet::insert`], but reports failed growth as an
    /// error.
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the set had to grow and either the capacity overflowed or
    /// allocation failed.
    pub fn try_insert(&mut self, item: T) -> Result<bool, ReserveError> {
        self.inner.try_insert(item, ()).map(|previous| previous.is_none())
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        self.inner.get_entry(item).map(|(k, _)| k)
    }

    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Removes the item equal to `item` from the HashSet, returning it if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ByteHash + PartialEq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(k, _)| k)
    }

    /// Increases the capacity of the HashSet to `new_cap`. See [`HashMap::reserve`].
    ///
    /// # Panics
    /// Panics if the capacity would overflow.
    pub fn reserve(&mut self, new_cap: usize) {
        self.inner.reserve(new_cap)
    }

    /// Increases the capacity of the HashSet to `new_cap`. See [`HashMap::try_reserve`].
    ///
    /// # Errors
    /// Returns a [`ReserveError`] if the capacity overflows or allocation fails. In that case the
    /// set is unchanged.
    pub fn try_reserve(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        self.inner.try_reserve(new_cap)
    }

    /// Drops every item and releases the set's memory.
    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T: ByteHash + PartialEq> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ByteHash + PartialEq> Extend<T> for HashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.inner.extend(iter.into_iter().map(|item| (item, ())))
    }
}

impl<T: ByteHash + PartialEq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        HashSet {
            inner: iter.into_iter().map(|item| (item, ())).collect(),
        }
    }
}

impl<T: ByteHash + PartialEq, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: ByteHash + PartialEq + Debug> Debug for HashSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("slots", &self.inner.table)
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: ByteHash + PartialEq + Debug> Display for HashSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.inner.table.entries().map(|(k, _)| k)).finish()
    }
}
