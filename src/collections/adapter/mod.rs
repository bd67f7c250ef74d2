//! Restricted-access collections built on [`Vector`](super::contiguous::Vector).
//!
//! [`Stack`] only exposes the most recently pushed element, while [`Queue`] pushes to the back and
//! pops from the front.

mod queue;
mod stack;
mod tests;

pub use queue::*;
pub use stack::*;
