//! Hash-based collections using open addressing with linear probing.
//!
//! Keys are hashed with 32-bit FNV-1 over the bytes written by their [`ByteHash`] implementation.
//! [`HashSet`] is a [`HashMap`] with unit values, so both share the same probing and growth.

pub mod fnv;
pub mod map;
pub mod set;
mod table;

#[doc(inline)]
pub use fnv::{fnv1, ByteHash, Fnv1Hasher, FNV_OFFSET_BASIS, FNV_PRIME};
#[doc(inline)]
pub use map::HashMap;
#[doc(inline)]
pub use set::HashSet;
