//! World - the grain automaton and its host-facing surface
//!
//! WorldCore owns the grid and the fixed constants and only orchestrates:
//! painting lives in systems/brush.rs, the fall rule in systems/gravity.rs.
//!
//! Host loop, once per frame:
//!   1. `paint` (only while the pointer button is held)
//!   2. `step`
//!   3. read `color_buffer` / `colors_ptr` (or `extract_top_down`) and present

use crate::cells::Cell;
use crate::config::SimConfig;
use crate::grid::Grid;
use crate::input::PointerMapping;
use crate::systems::{Brush, GrainFall};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
mod facade;

pub use facade::{AbiLayout, World};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

pub(crate) struct AbiLayoutData {
    pub(crate) cells_ptr: *const u8,
    pub(crate) cells_len_elements: usize,
    pub(crate) colors_ptr: *const u32,
    pub(crate) colors_len_elements: usize,
    pub(crate) colors_len_bytes: usize,
    pub(crate) top_down_ptr: *const u32,
    pub(crate) top_down_len_elements: usize,
}

/// The simulation world
pub struct WorldCore {
    config: SimConfig,
    grid: Grid,
    brush: Brush,
    fall: GrainFall,

    // State
    grain_count: u32,
    frame: u64,

    // Canvas transfer buffer (rows flipped so row 0 is the top)
    top_down_buffer: Vec<u32>,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl WorldCore {
    /// Create a world with default brush and fall distance. Dimensions
    /// outside the valid range are clamped into it (zero becomes 1).
    pub fn new(width: u32, height: u32) -> Self {
        init::create_world_core(init::sanitize_dimensions(width, height))
    }

    pub fn with_config(config: SimConfig) -> Result<Self, String> {
        config.validate().map_err(|e| {
            console_error!("config rejected: {}", e);
            e
        })?;
        Ok(init::create_world_core(config))
    }

    pub fn from_config_json(json: &str) -> Result<Self, String> {
        let config = SimConfig::from_json(json).map_err(|e| {
            console_error!("config bundle rejected: {}", e);
            e
        })?;
        Ok(init::create_world_core(config))
    }

    pub fn width(&self) -> u32 { self.grid.width() }

    pub fn height(&self) -> u32 { self.grid.height() }

    pub fn config(&self) -> &SimConfig { &self.config }

    pub fn brush_size(&self) -> u32 { self.brush.size() }

    pub fn fall_distance(&self) -> u32 { self.fall.fall_distance() }

    pub fn grain_count(&self) -> u32 { self.grain_count }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn grid(&self) -> &Grid { &self.grid }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.grid.pos(x, y).map(|p| self.grid.get_at(p))
    }

    pub fn get_config_json(&self) -> String {
        settings::config_json(self)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Paint the configured brush centered at `(x, y)`
    pub fn paint(&mut self, x: i32, y: i32) {
        let brush = self.brush;
        commands::paint(self, x, y, brush);
    }

    /// Paint with an explicit brush size
    pub fn paint_with_size(&mut self, x: i32, y: i32, brush_size: u32) {
        commands::paint(self, x, y, Brush::new(brush_size));
    }

    /// Map a host pointer position and paint there if it lands inside the gate.
    /// Returns whether anything was attempted.
    pub fn paint_at_pointer(&mut self, px: f64, py: f64, mapping: &PointerMapping) -> bool {
        commands::paint_at_pointer(self, px, py, mapping)
    }

    /// Add a single grain
    pub fn add_grain(&mut self, x: i32, y: i32) -> bool {
        commands::add_grain(self, x, y)
    }

    /// Remove a single grain
    pub fn remove_grain(&mut self, x: i32, y: i32) -> bool {
        commands::remove_grain(self, x, y)
    }

    /// Clear all grains
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        step::step(self);
    }

    // === Render output ===

    /// Display colors, row 0 = bottom
    pub fn color_buffer(&self) -> &[u32] {
        self.grid.colors()
    }

    /// Copy colors into the transfer buffer with row 0 = top
    pub fn extract_top_down(&mut self) -> *const u32 {
        render_extract::extract_top_down(self)
    }

    pub fn top_down_buffer(&self) -> &[u32] {
        &self.top_down_buffer
    }

    /// Get pointer to cells array (for JS)
    pub fn cells_ptr(&self) -> *const u8 {
        self.grid.cells_ptr()
    }

    /// Get pointer to colors array (for JS rendering)
    pub fn colors_ptr(&self) -> *const u32 {
        self.grid.colors_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.grid.size()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.grid.size()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.grid.size() * std::mem::size_of::<u32>()
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            cells_ptr: self.cells_ptr(),
            cells_len_elements: self.cells_len(),
            colors_ptr: self.colors_ptr(),
            colors_len_elements: self.colors_len_elements(),
            colors_len_bytes: self.colors_len_bytes(),
            top_down_ptr: self.top_down_buffer.as_ptr(),
            top_down_len_elements: self.top_down_buffer.len(),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
