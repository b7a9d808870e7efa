//! Grid - flat cell storage with a mirrored color buffer
//!
//! Two parallel arrays indexed by `x + y * width`:
//!   cells[]   semantic state (Empty / Sand)
//!   colors[]  ABGR display value, always `color_of(cells[i])`
//!
//! Row 0 is the bottom row; grains fall toward smaller `y`.
//! Both arrays are private and every write goes through one place, so a
//! reader never sees them out of sync.

use crate::cells::{Cell, BG_COLOR};

mod indexing;
mod accessors;
mod moves;

pub use indexing::GridPos;

pub struct Grid {
    width: u32,
    height: u32,
    size: usize,

    cells: Vec<Cell>,
    colors: Vec<u32>,
}

impl Grid {
    /// Allocate a `width x height` grid with every cell `Empty`.
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            width,
            height,
            size,
            cells: vec![Cell::Empty; size],
            colors: vec![BG_COLOR; size],
        }
    }
}
