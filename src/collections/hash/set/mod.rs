//! A module containing [`HashSet`].
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod tests;

pub use hash_set::*;
