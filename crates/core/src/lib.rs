//! Core traits and utilities shared by the quadroot crates.
//!
//! - [`Observer`]: receives solver events and optionally returns control actions
//! - [`partition`]: splits a list into fixed-size or near-equal groups

mod observer;

pub mod partition;

pub use observer::Observer;
