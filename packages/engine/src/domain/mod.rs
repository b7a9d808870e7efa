//! Domain - what a cell can be, how it looks, and the world constants

pub mod cells;
pub mod config;
