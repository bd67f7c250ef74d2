//! A module containing [`Array`] and [`FixedArray`].
//!
//! [`Array`] is sized at runtime and backs every other buffer in this crate. [`FixedArray`] is sized
//! at compile time and stored inline. Borrowed iteration over either uses [`std::slice::Iter`] and
//! [`std::slice::IterMut`] through [`Deref<Target = [T]>`](std::ops::Deref).
//!
//! Both types are also re-exported under the parent module.

mod array;
mod fixed;

pub use array::*;
pub use fixed::*;
