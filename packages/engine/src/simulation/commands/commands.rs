use crate::cells::Cell;
use crate::input::PointerMapping;
use crate::systems::Brush;

use super::WorldCore;

pub(super) fn paint(world: &mut WorldCore, x: i32, y: i32, brush: Brush) {
    let painted = brush.stamp(&mut world.grid, x, y);
    world.grain_count += painted;
}

pub(super) fn paint_at_pointer(world: &mut WorldCore, px: f64, py: f64, mapping: &PointerMapping) -> bool {
    let (width, height) = (world.grid.width(), world.grid.height());
    let (x, y) = mapping.to_grid(px, py, width, height);
    if !PointerMapping::accepts(x, y, width, height) {
        return false;
    }
    let brush = world.brush;
    paint(world, x, y, brush);
    true
}

pub(super) fn add_grain(world: &mut WorldCore, x: i32, y: i32) -> bool {
    let Some(pos) = world.grid.pos(x, y) else {
        return false;
    };
    if world.grid.set_at(pos, Cell::Sand) != Cell::Empty {
        return false;
    }
    world.grain_count += 1;
    true
}

pub(super) fn remove_grain(world: &mut WorldCore, x: i32, y: i32) -> bool {
    let Some(pos) = world.grid.pos(x, y) else {
        return false;
    };
    if world.grid.set_at(pos, Cell::Empty) != Cell::Sand {
        return false;
    }
    world.grain_count -= 1;
    true
}

pub(super) fn clear(world: &mut WorldCore) {
    world.grid.clear();
    world.grain_count = 0;
    world.frame = 0;
    world.perf_stats.reset();
}
