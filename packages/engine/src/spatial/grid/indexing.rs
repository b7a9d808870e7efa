use crate::core::GridError;

use super::*;

/// A coordinate checked against a grid's bounds, with its flat index.
///
/// Only `Grid::pos` builds one, so holding a `GridPos` means the bounds
/// check has already happened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridPos {
    x: u32,
    y: u32,
    idx: usize,
}

impl GridPos {
    #[inline]
    pub fn x(&self) -> u32 { self.x }

    #[inline]
    pub fn y(&self) -> u32 { self.y }

    #[inline]
    pub fn index(&self) -> usize { self.idx }
}

impl Grid {
    // === Dimensions ===
    #[inline]
    pub fn width(&self) -> u32 { self.width }

    #[inline]
    pub fn height(&self) -> u32 { self.height }

    #[inline]
    pub fn size(&self) -> usize { self.size }

    // === Bounds checking ===
    #[inline]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height
    }

    #[inline]
    pub fn pos(&self, x: i32, y: i32) -> Option<GridPos> {
        if !self.in_bounds(x, y) {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        Some(GridPos {
            x,
            y,
            idx: (y as usize) * (self.width as usize) + (x as usize),
        })
    }

    // === Index conversion ===
    pub fn try_index(&self, x: i32, y: i32) -> Result<usize, GridError> {
        self.pos(x, y)
            .map(|p| p.idx)
            .ok_or(GridError::CoordinateOutOfRange {
                x,
                y,
                width: self.width,
                height: self.height,
            })
    }

    /// Flat index of an in-range coordinate.
    ///
    /// Panics on out-of-range input: raw `x + y * width` would silently
    /// alias a neighbouring row.
    #[inline]
    pub fn index(&self, x: i32, y: i32) -> usize {
        match self.try_index(x, y) {
            Ok(idx) => idx,
            Err(err) => panic!("grid index: {}", err),
        }
    }

    #[inline]
    pub fn coords(&self, idx: usize) -> (u32, u32) {
        let x = (idx % self.width as usize) as u32;
        let y = (idx / self.width as usize) as u32;
        (x, y)
    }
}
