//! A small collections library built around an open-addressing hash table.
//!
//! # Purpose
//! The centre of this crate is [`HashMap`](collections::hash::HashMap) (and
//! [`HashSet`](collections::hash::HashSet), which wraps it): a linear-probing table that hashes
//! keys with 32-bit FNV-1, wraps its probes around the end of the table, grows by doubling once
//! full and removes entries without tombstones. Around it sit the containers it's built from or
//! alongside: [`Array`](collections::contiguous::Array), [`FixedArray`](collections::contiguous::FixedArray),
//! [`Vector`](collections::contiguous::Vector), [`Stack`](collections::adapter::Stack) and
//! [`Queue`](collections::adapter::Queue).
//!
//! All memory is managed by hand through [`Array`](collections::contiguous::Array), which is the
//! only place allocations happen. Every unsafe block states why it's sound.
//!
//! # Error Handling
//! Most growing methods panic on failure, because it would be unergonomic to handle a capacity
//! overflow on every push. Each of them has a `try_` counterpart that returns a [`Result`]
//! instead.
//!
//! Errors are strongly typed: structs (often ZSTs) that implement [`Error`](std::error::Error),
//! combined into enums such as [`ReserveError`] for static dispatch. Allocation failures in the
//! panicking methods go to [`handle_alloc_error`](std::alloc::handle_alloc_error), as they do in
//! the standard library.
//!
//! # Features
//! - `contiguous`: [`Array`](collections::contiguous::Array), [`FixedArray`](collections::contiguous::FixedArray)
//!   and [`Vector`](collections::contiguous::Vector).
//! - `adapter`: [`Stack`](collections::adapter::Stack) and [`Queue`](collections::adapter::Queue).
//! - `hash`: [`HashMap`](collections::hash::HashMap), [`HashSet`](collections::hash::HashSet) and
//!   the FNV-1 hashing they use.
//!
//! All of them are enabled by `collections-all`, the default.

#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use util::error::{AllocFailure, CapacityOverflow, IndexOutOfBounds, ReserveError};
