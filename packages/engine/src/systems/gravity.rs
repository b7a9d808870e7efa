//! GrainFall - the per-tick gravity rule
//!
//! Scan order is column-major: x outer, y inner, both ascending. Grains
//! are not flagged once moved, so a grain that slides down-right into a
//! column not yet scanned is visited again later in the same tick and can
//! keep falling. Straight and down-left moves land in cells the scan has
//! already passed.
//!
//! Candidate rows run farthest-first, from `y - fall_distance` up to
//! `y - 1`. Within a row: straight down, down-left, down-right. Only the
//! landing cell is tested; cells between the grain and its landing cell
//! are not, so a grain can jump over occupied cells.

use crate::cells::Cell;
use crate::grid::{Grid, GridPos};

/// Column offsets tried for each candidate row, in order.
const COLUMN_OFFSETS: [i32; 3] = [0, -1, 1];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Sand visits, including re-visits of grains that moved down-right
    pub scanned: u32,
    pub moved: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GrainFall {
    fall_distance: u32,
}

impl GrainFall {
    pub fn new(fall_distance: u32) -> Self {
        Self { fall_distance }
    }

    #[inline]
    pub fn fall_distance(&self) -> u32 {
        self.fall_distance
    }

    /// First empty landing cell for the grain at `(x, y)`, if any.
    pub fn find_target(&self, grid: &Grid, x: i32, y: i32) -> Option<GridPos> {
        // Rows below 0 never qualify, so start the search at the floor.
        let first_row = (y as i64 - self.fall_distance as i64).max(0) as i32;

        for target_y in first_row..y {
            for dx in COLUMN_OFFSETS {
                if grid.is_empty(x + dx, target_y) {
                    return grid.pos(x + dx, target_y);
                }
            }
        }
        None
    }

    /// Advance the grid by one tick. Grain count is unchanged.
    pub fn tick(&self, grid: &mut Grid) -> TickStats {
        let mut stats = TickStats::default();
        let width = grid.width() as i32;
        let height = grid.height() as i32;

        for x in 0..width {
            for y in 0..height {
                let Some(from) = grid.pos(x, y) else {
                    continue;
                };
                if grid.get_at(from) != Cell::Sand {
                    continue;
                }
                stats.scanned += 1;

                if let Some(to) = self.find_target(grid, x, y) {
                    grid.move_grain(from, to);
                    stats.moved += 1;
                }
            }
        }
        stats
    }
}
