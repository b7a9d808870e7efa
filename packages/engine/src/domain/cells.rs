//! Cell states and their display colors
//!
//! Colors are ABGR packed (little-endian: 0xAABBGGRR -> bytes [RR,GG,BB,AA])
//! so the color buffer can back a canvas ImageData without conversion.

/// Background: RGB(0,0,0), alpha 255
pub const BG_COLOR: u32 = 0xFF00_0000;

/// Grain: RGB(255,235,4), alpha 255
pub const GRAIN_COLOR: u32 = 0xFF04_EBFF;

/// State of one grid cell. `repr(u8)` so the cell array can be viewed from JS.
#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty = 0,
    Sand = 1,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    #[inline]
    pub fn color(self) -> u32 {
        color_of(self)
    }
}

/// Display projection of a cell state.
#[inline]
pub const fn color_of(cell: Cell) -> u32 {
    match cell {
        Cell::Empty => BG_COLOR,
        Cell::Sand => GRAIN_COLOR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_are_rgba_bytes_in_memory() {
        assert_eq!(BG_COLOR.to_le_bytes(), [0, 0, 0, 255]);
        assert_eq!(GRAIN_COLOR.to_le_bytes(), [255, 235, 4, 255]);
    }

    #[test]
    fn projection_is_two_valued() {
        assert_eq!(color_of(Cell::Empty), BG_COLOR);
        assert_eq!(Cell::Sand.color(), GRAIN_COLOR);
        assert_ne!(BG_COLOR, GRAIN_COLOR);
    }

    #[test]
    fn js_ids_and_default() {
        assert_eq!(Cell::Empty as u8, 0);
        assert_eq!(Cell::Sand as u8, 1);
        assert_eq!(Cell::default(), Cell::Empty);
        assert!(Cell::default().is_empty());
        assert!(!Cell::Sand.is_empty());
    }
}
