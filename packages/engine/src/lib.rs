//! Grainfall Engine - falling-sand cellular automaton in WASM
//!
//! One substance, one rule: grains painted with a square brush fall
//! straight down or diagonally, searching up to `fall_distance` rows
//! below themselves each tick. The host owns the frame loop, input and
//! presentation; the engine owns the grid and its color buffer.
//!
//! Architecture:
//! - core/       - Console diagnostics and error types
//! - domain/     - Cell states, colors, constants
//! - spatial/    - Bounds-checked flat grid
//! - systems/    - Brush and gravity rules
//! - simulation/ - Orchestration and the JS facade
//! - input/      - Pointer to grid mapping for hosts

// Console macros (must be first for macro scope!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod input;
pub mod simulation;

// Short paths used across the crate
pub use domain::cells;
pub use domain::config;
pub use spatial::grid;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("Grainfall engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::GridError;
pub use domain::cells::Cell;
pub use domain::config::SimConfig;
pub use input::PointerMapping;
pub use simulation::{PerfStats, World, WorldCore};

// Cell and color constants for JS
#[wasm_bindgen]
pub fn cell_empty() -> u8 { Cell::Empty as u8 }
#[wasm_bindgen]
pub fn cell_sand() -> u8 { Cell::Sand as u8 }
#[wasm_bindgen]
pub fn background_color() -> u32 { cells::BG_COLOR }
#[wasm_bindgen]
pub fn grain_color() -> u32 { cells::GRAIN_COLOR }
