#![warn(missing_docs)]

pub mod alloc;
pub mod error;
pub mod fmt;
#[cfg(feature = "hash")]
pub mod hash;
pub mod option;
pub mod panic;
pub mod result;
