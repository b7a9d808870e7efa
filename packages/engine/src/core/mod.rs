//! Core - diagnostics and error types shared by every layer
//!
//! Must be declared first in lib.rs so the console macros are in scope
//! for the rest of the crate.

#[macro_use]
pub mod utils;
pub mod error;

pub use error::GridError;
