//! Core functionality for the troupe actor runtime.

pub mod actor;

pub use actor::*;
