use crate::config::{clamp_size, SimConfig};
use crate::grid::Grid;
use crate::systems::{Brush, GrainFall};

use super::perf_stats::PerfStats;
use super::WorldCore;

/// Allocate the grid once, all cells Empty. `config` must already be valid.
pub(super) fn create_world_core(config: SimConfig) -> WorldCore {
    console_log!(
        "world {}x{} (brush {}, fall distance {})",
        config.width,
        config.height,
        config.brush_size,
        config.fall_distance
    );

    WorldCore {
        config,
        grid: Grid::new(config.width, config.height),
        brush: Brush::new(config.brush_size),
        fall: GrainFall::new(config.fall_distance),
        grain_count: 0,
        frame: 0,
        // Sized lazily by the first `extract_top_down`
        top_down_buffer: Vec::new(),
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}

/// Pull requested dimensions into the range `SimConfig::validate` accepts.
pub(super) fn sanitize_dimensions(width: u32, height: u32) -> SimConfig {
    let (w, h) = clamp_size(width, height);
    if (w, h) != (width, height) {
        console_warn!("grid {}x{} out of range, using {}x{}", width, height, w, h);
    }
    let config = SimConfig::with_size(w, h);
    debug_assert!(config.validate().is_ok());
    config
}
