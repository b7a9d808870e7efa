use crate::cells::color_of;

use super::super::*;

impl Grid {
    // === Cell access ===
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells[self.index(x, y)]
    }

    #[inline]
    pub fn get_at(&self, pos: GridPos) -> Cell {
        self.cells[pos.index()]
    }

    /// False outside the grid: the border behaves like a wall.
    #[inline]
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        match self.pos(x, y) {
            Some(pos) => self.cells[pos.index()].is_empty(),
            None => false,
        }
    }

    /// Write a cell and its color. Returns the previous state.
    #[inline]
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Cell {
        let idx = self.index(x, y);
        self.write(idx, cell)
    }

    #[inline]
    pub fn set_at(&mut self, pos: GridPos, cell: Cell) -> Cell {
        self.write(pos.index(), cell)
    }

    // Single write path for both arrays.
    #[inline]
    pub(in crate::spatial::grid) fn write(&mut self, idx: usize, cell: Cell) -> Cell {
        let prev = self.cells[idx];
        self.cells[idx] = cell;
        self.colors[idx] = color_of(cell);
        prev
    }

    // === Color access ===
    #[inline]
    pub fn color(&self, x: i32, y: i32) -> u32 {
        self.colors[self.index(x, y)]
    }

    // === Whole-grid views ===
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn colors(&self) -> &[u32] {
        &self.colors
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
        self.colors.fill(BG_COLOR);
    }
}
