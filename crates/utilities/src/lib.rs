//! Utility types and functions for the FA toolset.
//!
//! Forbid unsafe code in this crate.
#![forbid(unsafe_code)]

mod debug_trace;
mod error;
mod indexed_set;
mod tagged_index;

pub use error::*;
pub use indexed_set::*;
pub use random_test::*;
pub use tagged_index::*;
