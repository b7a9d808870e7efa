//! Brush - square paint stamp
//!
//! Size 1 paints the center cell only. Any other size paints the
//! half-open square [x - s/2, x + s/2) x [y - s/2, y + s/2) with truncating
//! division, so odd sizes come out one cell narrower than `s`.
//! Cells outside the grid are skipped.

use crate::cells::Cell;
use crate::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Brush {
    size: u32,
}

impl Brush {
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Square covered at `(cx, cy)` as half-open `(x0, x1, y0, y1)`, before clipping.
    pub fn footprint(&self, cx: i32, cy: i32) -> (i64, i64, i64, i64) {
        let (cx, cy) = (cx as i64, cy as i64);
        if self.size == 1 {
            return (cx, cx + 1, cy, cy + 1);
        }
        let half = (self.size / 2) as i64;
        (cx - half, cx + half, cy - half, cy + half)
    }

    /// Paint Sand under the brush. Returns how many cells went Empty -> Sand.
    pub fn stamp(&self, grid: &mut Grid, cx: i32, cy: i32) -> u32 {
        let (x0, x1, y0, y1) = self.footprint(cx, cy);

        // Clip to the grid; clipped cells are exactly the ones skipped.
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(grid.width() as i64);
        let y1 = y1.min(grid.height() as i64);

        let mut painted = 0u32;
        for x in x0..x1 {
            for y in y0..y1 {
                if grid.set(x as i32, y as i32, Cell::Sand) == Cell::Empty {
                    painted += 1;
                }
            }
        }
        painted
    }
}
