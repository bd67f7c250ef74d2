use std::fmt::{self, Debug, Display, Formatter};

use crate::collections::contiguous::Vector;

/// A last-in first-out collection, backed by a [`Vector`] whose back is the top of the Stack.
///
/// # Time Complexity
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `pop` | `O(1)` |
/// | `top` | `O(1)` |
///
/// \* `push` is `O(n)` when the underlying Vector has to grow.
#[derive(Clone, PartialEq, Eq)]
pub struct Stack<T> {
    pub(crate) inner: Vector<T>,
}

impl<T> Stack<T> {
    /// Creates a new, empty Stack without allocating.
    pub const fn new() -> Stack<T> {
        Stack {
            inner: Vector::new(),
        }
    }

    /// Pushes `value` onto the top of the Stack.
    ///
    /// # Panics
    /// Panics if the capacity would overflow.
    ///
    /// # Examples
    /// ```
    /// # use probe_collections::collections::adapter::Stack;
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// stack.push(2);
    /// assert_eq!(stack.top(), Some(&2));
    /// ```
    pub fn push(&mut self, value: T) {
        self.inner.push_back(value)
    }

    /// Removes and returns the top element, or None if the Stack is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop_back()
    }

    /// Returns a reference to the top element, or None if the Stack is empty.
    pub fn top(&self) -> Option<&T> {
        self.inner.last()
    }

    /// Returns a mutable reference to the top element, or None if the Stack is empty.
    pub fn top_mut(&mut self) -> Option<&mut T> {
        self.inner.last_mut()
    }

    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Drops every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes every item in order, so the last item ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(value: [T; N]) -> Self {
        Stack {
            inner: Vector::from(value),
        }
    }
}

impl<T: Debug> Debug for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack")
            .field("contents", &&*self.inner)
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Debug> Display for Stack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "^")?;
        f.debug_list().entries(self.inner.iter()).finish()
    }
}
