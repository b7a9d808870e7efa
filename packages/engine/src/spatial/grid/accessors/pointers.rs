use super::super::*;

impl Grid {
    // === Raw pointers for JS views into wasm memory ===
    pub fn cells_ptr(&self) -> *const u8 {
        // Cell is repr(u8)
        self.cells.as_ptr() as *const u8
    }

    pub fn colors_ptr(&self) -> *const u32 {
        self.colors.as_ptr()
    }
}
