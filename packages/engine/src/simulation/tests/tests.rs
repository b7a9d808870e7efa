use super::*;
use crate::cells::{BG_COLOR, GRAIN_COLOR};

fn world(width: u32, height: u32, brush_size: u32, fall_distance: u32) -> WorldCore {
    WorldCore::with_config(SimConfig {
        width,
        height,
        brush_size,
        fall_distance,
    })
    .unwrap()
}

fn sand_at(world: &WorldCore) -> Vec<(u32, u32)> {
    world
        .grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, c)| **c == Cell::Sand)
        .map(|(i, _)| world.grid.coords(i))
        .collect()
}

#[test]
fn new_world_is_empty_and_black() {
    let world = WorldCore::new(16, 9);
    assert_eq!((world.width(), world.height()), (16, 9));
    assert_eq!(world.grain_count(), 0);
    assert_eq!(world.frame(), 0);
    assert_eq!(world.color_buffer().len(), 16 * 9);
    assert!(world.color_buffer().iter().all(|c| *c == BG_COLOR));
    assert_eq!(world.brush_size(), 10);
    assert_eq!(world.fall_distance(), 10);
}

#[test]
fn zero_dimensions_are_raised() {
    let world = WorldCore::new(0, 5);
    assert_eq!((world.width(), world.height()), (1, 5));
}

#[test]
fn oversized_dimensions_are_clamped_to_a_valid_config() {
    let config = init::sanitize_dimensions(65536, 65537);
    assert_eq!((config.width, config.height), (65536, 65535));
    assert!(config.validate().is_ok());

    let config = init::sanitize_dimensions(u32::MAX, 9);
    assert_eq!((config.width, config.height), (i32::MAX as u32, 2));
    assert!(config.validate().is_ok());

    assert_eq!(init::sanitize_dimensions(32, 16), SimConfig::with_size(32, 16));
}

#[test]
fn invalid_config_is_rejected() {
    assert!(WorldCore::with_config(SimConfig::with_size(0, 4)).is_err());
    assert!(WorldCore::from_config_json(r#"{"brushSize": 0}"#).is_err());
    assert!(WorldCore::from_config_json("{").is_err());
}

#[test]
fn single_grain_falls_to_the_floor_in_one_step() {
    let mut world = world(10, 10, 1, 10);
    world.paint(5, 9);
    world.step();
    assert_eq!(sand_at(&world), vec![(5, 0)]);
    assert_eq!(world.frame(), 1);
}

#[test]
fn blocked_grain_slides_down_left_first() {
    let mut world = world(10, 10, 1, 1);
    world.add_grain(5, 0);
    world.add_grain(5, 1);
    world.step();
    assert_eq!(sand_at(&world), vec![(4, 0), (5, 0)]);
}

#[test]
fn fully_blocked_grain_stays() {
    let mut world = world(10, 10, 1, 1);
    for x in 4..=6 {
        world.add_grain(x, 0);
    }
    world.add_grain(5, 1);
    let before = sand_at(&world);
    world.step();
    assert_eq!(sand_at(&world), before);
}

#[test]
fn floating_stack_collapses_in_one_step() {
    // Scan order puts the lowest grain straight down, the next one
    // down-left, the top one down-right.
    let mut world = world(10, 10, 1, 10);
    for y in 5..8 {
        world.add_grain(5, y);
    }
    world.step();
    assert_eq!(sand_at(&world), vec![(4, 0), (5, 0), (6, 0)]);
}

#[test]
fn resting_stack_compresses_more_than_one_row() {
    // (0,2) slides to (1,1), is re-scanned with column 1 and slides again to (2,0).
    let mut world = world(4, 3, 1, 3);
    for (x, y) in [(0, 0), (1, 0), (0, 1), (0, 2)] {
        world.add_grain(x, y);
    }
    world.step();
    assert_eq!(sand_at(&world), vec![(0, 0), (1, 0), (2, 0), (0, 1)]);
}

#[test]
fn brush_paints_square_and_counts_grains() {
    let mut world = world(20, 20, 4, 2);
    world.paint(10, 10);
    assert_eq!(world.grain_count(), 16);
    world.paint(10, 10);
    assert_eq!(world.grain_count(), 16);
    world.paint(11, 10);
    assert_eq!(world.grain_count(), 20);
    assert_eq!(world.grid.count(Cell::Sand), 20);
}

#[test]
fn paint_near_edge_is_clipped() {
    let mut world = world(6, 6, 10, 1);
    world.paint(0, 0);
    // [-5, 5) x [-5, 5) clipped to [0, 5) x [0, 5)
    assert_eq!(world.grain_count(), 25);
    assert_eq!(world.cell(5, 0), Some(Cell::Empty));
    assert_eq!(world.cell(0, 5), Some(Cell::Empty));
}

#[test]
fn steps_conserve_grain_count() {
    let mut world = world(32, 24, 6, 5);
    world.paint(8, 20);
    world.paint(16, 12);
    world.paint(30, 23);
    let painted = world.grain_count();
    assert!(painted > 0);
    for _ in 0..60 {
        world.step();
        assert_eq!(world.grid.count(Cell::Sand) as u32, painted);
        assert_eq!(world.grain_count(), painted);
    }
}

#[test]
fn colors_mirror_cells_after_every_step() {
    let mut world = world(16, 16, 5, 3);
    world.paint(8, 12);
    for _ in 0..10 {
        world.step();
        for (cell, color) in world.grid.cells().iter().zip(world.color_buffer()) {
            assert_eq!(cell.color(), *color);
        }
    }
}

#[test]
fn pile_settles_on_the_floor() {
    let mut world = world(16, 16, 4, 4);
    world.paint(8, 14);
    // 16 grains: a stable free-standing pile is at most 4 rows tall.
    for _ in 0..300 {
        world.step();
    }
    for (x, y) in sand_at(&world) {
        assert!(y < 4, "grain still high at ({}, {})", x, y);
    }
    let settled = sand_at(&world);
    world.step();
    assert_eq!(sand_at(&world), settled);
}

#[test]
fn add_and_remove_grain() {
    let mut world = world(4, 4, 1, 1);
    assert!(world.add_grain(1, 1));
    assert!(!world.add_grain(1, 1));
    assert!(!world.add_grain(4, 1));
    assert_eq!(world.grain_count(), 1);

    assert!(world.remove_grain(1, 1));
    assert!(!world.remove_grain(1, 1));
    assert!(!world.remove_grain(-1, 1));
    assert_eq!(world.grain_count(), 0);
    assert_eq!(world.color_buffer()[5], BG_COLOR);
}

#[test]
fn clear_resets_grid_and_frame() {
    let mut world = world(8, 8, 3, 2);
    world.paint(4, 4);
    world.step();
    world.clear();
    assert_eq!(world.grain_count(), 0);
    assert_eq!(world.frame(), 0);
    assert!(sand_at(&world).is_empty());
}

#[test]
fn cell_is_none_outside() {
    let world = world(4, 4, 1, 1);
    assert_eq!(world.cell(3, 3), Some(Cell::Empty));
    assert_eq!(world.cell(4, 3), None);
    assert_eq!(world.cell(0, -1), None);
}

#[test]
fn extract_top_down_flips_rows() {
    let mut world = world(3, 2, 1, 0);
    world.add_grain(0, 0);
    world.add_grain(2, 1);

    world.extract_top_down();
    let buf = world.top_down_buffer();
    // Top row first: grid row 1, then grid row 0.
    assert_eq!(buf, &[BG_COLOR, BG_COLOR, GRAIN_COLOR, GRAIN_COLOR, BG_COLOR, BG_COLOR]);
    assert_eq!(world.color_buffer(), &[GRAIN_COLOR, BG_COLOR, BG_COLOR, BG_COLOR, BG_COLOR, GRAIN_COLOR]);
}

#[test]
fn abi_layout_reports_buffer_sizes() {
    let mut world = world(5, 4, 1, 1);
    let before = world.abi_layout_data();
    assert_eq!(before.colors_len_elements, 20);
    assert_eq!(before.colors_len_bytes, 80);
    assert_eq!(before.cells_len_elements, 20);
    assert_eq!(before.top_down_len_elements, 0);

    let ptr = world.extract_top_down();
    let after = world.abi_layout_data();
    assert_eq!(after.top_down_ptr, ptr);
    assert_eq!(after.top_down_len_elements, 20);
}

#[test]
fn pointer_paint_uses_mapping_and_gate() {
    let mut world = world(100, 100, 1, 1);
    let mapping = PointerMapping::new(50.0, 50.0, 200.0, 200.0);

    assert!(world.paint_at_pointer(150.0, 110.0, &mapping));
    assert_eq!(world.cell(50, 30), Some(Cell::Sand));

    // Lands on column 0: gated, nothing painted.
    assert!(!world.paint_at_pointer(50.0, 110.0, &mapping));
    // Outside the display.
    assert!(!world.paint_at_pointer(400.0, 110.0, &mapping));
    assert_eq!(world.grain_count(), 1);
}

#[test]
fn perf_stats_track_last_step() {
    let mut world = world(10, 10, 1, 10);
    world.add_grain(5, 9);
    world.add_grain(2, 0);

    world.step();
    assert_eq!(world.get_perf_stats(), PerfStats::default());

    world.enable_perf_metrics(true);
    world.step();
    let stats = world.get_perf_stats();
    assert_eq!(stats.grains_scanned(), 2);
    assert_eq!(stats.grains_moved(), 0);
    assert_eq!(stats.grain_count(), 2);
    assert_eq!(stats.frame(), 2);
    assert!(stats.step_ms() >= 0.0);

    world.enable_perf_metrics(false);
    assert_eq!(world.get_perf_stats(), PerfStats::default());
}

#[test]
fn config_json_reflects_constants() {
    let world = WorldCore::from_config_json(r#"{"width": 12, "height": 8, "gravity": 2}"#).unwrap();
    assert_eq!(world.config(), &SimConfig { width: 12, height: 8, brush_size: 10, fall_distance: 2 });
    assert_eq!(
        world.get_config_json(),
        r#"{"width":12,"height":8,"brushSize":10,"fallDistance":2}"#
    );
}
