use crate::cells::Cell;

use super::{PerfTimer, WorldCore};

pub(super) fn step(world: &mut WorldCore) {
    let timer = PerfTimer::start_if(world.perf_enabled);

    let tick = world.fall.tick(&mut world.grid);

    // Moves never create or destroy grains.
    debug_assert_eq!(
        world.grid.count(Cell::Sand),
        world.grain_count as usize,
        "grain count drifted on frame {}",
        world.frame
    );

    world.frame += 1;

    if let Some(timer) = timer {
        world.perf_stats.reset();
        world.perf_stats.grains_scanned = tick.scanned;
        world.perf_stats.grains_moved = tick.moved;
        world.perf_stats.grain_count = world.grain_count;
        world.perf_stats.frame = world.frame;
        world.perf_stats.step_ms = timer.elapsed_ms();
    }
}
