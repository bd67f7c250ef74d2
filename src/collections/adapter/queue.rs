use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Vector;

/// A first-in first-out collection, backed by a [`Vector`]. Elements are pushed to the back and
/// popped from the front.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the Queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(n)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
///
/// \* `push` is `O(n)` when the underlying Vector has to grow.
#[derive(Clone, PartialEq, Eq)]
pub struct Queue<T> {
    pub(crate) inner: Vector<T>,
}

impl<T> Queue<T> {
    /// Creates a new, empty Queue without allocating.
    pub const fn new() -> Queue<T> {
        Queue {
            inner: Vector::new(),
        }
    }

    /// Adds `value` to the back of the Queue.
    ///
    /// # Panics
    /// Panics if the capacity would overflow.
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    /// Removes and returns the element at the front of the Queue, or None if it is empty. The
    /// remaining elements are shifted forward.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::adapter::Queue;
    /// let mut queue = Queue::from([1, 2]);
    /// assert_eq!(queue.pop(), Some(1));
    /// assert_eq!(queue.front(), Some(&2));
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    /// Returns a reference to the element that will be popped next.
    pub fn front(&self) -> Option<&T> {
        self.inner.first()
    }

    /// Returns a reference to the most recently pushed element.
    pub fn back(&self) -> Option<&T> {
        self.inner.last()
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Queue {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(value: [T; N]) -> Self {
        Queue {
            inner: Vector::from(value),
        }
    }
}

impl<T: Debug> Debug for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Queue")
            .field("contents", &&*self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Queue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
