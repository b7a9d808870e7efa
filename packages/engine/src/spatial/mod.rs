//! Spatial - grid storage and addressing

pub mod grid;
