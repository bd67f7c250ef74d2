//! Various general-purpose collection types.
//!
//! # Method
//! Contiguous types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves them from repeating slice functionality. The hash-based types don't, because their slots
//! are mostly empty and their order means nothing.

#[cfg(feature = "adapter")]
pub mod adapter;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
