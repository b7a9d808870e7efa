//! Systems - the rules that mutate the grid
//!
//! brush    - user paint stamp
//! gravity  - per-tick grain fall

pub mod brush;
pub mod gravity;

pub use brush::Brush;
pub use gravity::{GrainFall, TickStats};
