//! A module containing [`HashMap`].
//!
//! [`HashMap`] is also re-exported under the parent module.

mod hash_map;

pub use hash_map::*;
