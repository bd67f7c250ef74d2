use std::array;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Deref, DerefMut, Index, IndexMut};

use crate::util::error::IndexOutOfBounds;
use crate::util::result::ResultExtension;

/// An array with a size fixed at compile time, stored inline rather than on the heap.
///
/// Unlike [`Array`](super::Array), a FixedArray never allocates, so none of its methods can fail
/// other than through out of bounds indexing.
///
/// # Time Complexity
/// All methods are `O(1)`, except for construction which is `O(N)`.
#[derive(Clone, PartialEq, Eq)]
pub struct FixedArray<T, const N: usize> {
    pub(crate) data: [T; N],
}

impl<T: Default, const N: usize> FixedArray<T, N> {
    /// Creates a new FixedArray with every element set to the default value of `T`.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::FixedArray;
    /// let arr: FixedArray<u32, 5> = FixedArray::new();
    /// assert_eq!(arr.len(), 5);
    /// assert_eq!(&*arr, &[0; 5]);
    /// ```
    pub fn new() -> FixedArray<T, N> {
        FixedArray {
            data: array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> FixedArray<T, N> {
    /// Returns the number of elements in the FixedArray, which is always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns true if `N` is zero.
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= N`.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::contiguous::FixedArray;
    /// let arr = FixedArray::from([10, 20, 30]);
    /// assert_eq!(arr.try_get(1), Ok(&20));
    /// assert!(arr.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.data.get(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= N`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        self.data.get_mut(index).ok_or(IndexOutOfBounds { index, len: N })
    }

    /// Consumes the FixedArray, returning the underlying array.
    pub fn into_inner(self) -> [T; N] {
        self.data
    }
}

impl<T, const N: usize> Index<usize> for FixedArray<T, N> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= N`.
    fn index(&self, index: usize) -> &Self::Output {
        self.try_get(index).throw()
    }
}

impl<T, const N: usize> IndexMut<usize> for FixedArray<T, N> {
    /// # Panics
    /// Panics if `index >= N`.
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.try_get_mut(index).throw()
    }
}

impl<T, const N: usize> From<[T; N]> for FixedArray<T, N> {
    fn from(data: [T; N]) -> Self {
        FixedArray { data }
    }
}

impl<T: Default, const N: usize> Default for FixedArray<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for FixedArray<T, N> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T, const N: usize> DerefMut for FixedArray<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl<T, const N: usize> AsRef<[T]> for FixedArray<T, N> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T, const N: usize> AsMut<[T]> for FixedArray<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.data
    }
}

impl<T: Debug, const N: usize> Debug for FixedArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("FixedArray")
            .field("contents", &self.data.as_slice())
            .field("len", &N)
            .finish()
    }
}

impl<T: Debug, const N: usize> Display for FixedArray<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
