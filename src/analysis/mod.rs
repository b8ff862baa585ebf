//! Analysis modules.
//!
//! Statistics over blog lists live in [`aggregator`].

pub mod aggregator;

pub use aggregator::*;
