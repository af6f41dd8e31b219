//!
//! A crate containing deterministic finite automata related functionality.
//!
//! This crate does not use unsafe code.

#![forbid(unsafe_code)]

mod dfa;
mod display;
mod error;
mod random_dfa;
mod state;
mod swap;

#[cfg(test)]
mod test_utility;

pub use dfa::*;
pub use display::*;
pub use error::*;
pub use random_dfa::*;
pub use state::*;
pub use swap::*;
