//! A module containing [`Vector`].
//!
//! Borrowed iteration uses [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut) from
//! [`std::slice`], through [`Deref<Target = [T]>`](std::ops::Deref).
//!
//! [`Vector`] is also re-exported under the parent module.

mod tests;
mod vector;

pub use vector::*;
