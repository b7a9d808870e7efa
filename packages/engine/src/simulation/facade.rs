use wasm_bindgen::prelude::*;

use crate::input::PointerMapping;

use super::perf_stats::PerfStats;
use super::WorldCore;

#[wasm_bindgen]
pub struct AbiLayout {
    cells_ptr: u32,
    cells_len_elements: u32,
    colors_ptr: u32,
    colors_len_elements: u32,
    colors_len_bytes: u32,
    top_down_ptr: u32,
    top_down_len_elements: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn cells_ptr(&self) -> u32 { self.cells_ptr }
    #[wasm_bindgen(getter)]
    pub fn cells_len_elements(&self) -> u32 { self.cells_len_elements }

    #[wasm_bindgen(getter)]
    pub fn colors_ptr(&self) -> u32 { self.colors_ptr }
    #[wasm_bindgen(getter)]
    pub fn colors_len_elements(&self) -> u32 { self.colors_len_elements }
    #[wasm_bindgen(getter)]
    pub fn colors_len_bytes(&self) -> u32 { self.colors_len_bytes }

    /// Zero until the first `extract_top_down`
    #[wasm_bindgen(getter)]
    pub fn top_down_ptr(&self) -> u32 { self.top_down_ptr }
    #[wasm_bindgen(getter)]
    pub fn top_down_len_elements(&self) -> u32 { self.top_down_len_elements }
}

#[wasm_bindgen]
pub struct World {
    core: WorldCore,
}

#[wasm_bindgen]
impl World {
    /// Create a new world with given dimensions and default constants
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: WorldCore::new(width, height),
        }
    }

    /// Create a world from a JSON config bundle
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(json: String) -> Result<World, JsValue> {
        let core = WorldCore::from_config_json(&json).map_err(|e| JsValue::from_str(&e))?;
        Ok(Self { core })
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn brush_size(&self) -> u32 { self.core.brush_size() }

    #[wasm_bindgen(getter)]
    pub fn fall_distance(&self) -> u32 { self.core.fall_distance() }

    #[wasm_bindgen(getter)]
    pub fn grain_count(&self) -> u32 { self.core.grain_count() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    pub fn get_config_json(&self) -> String {
        self.core.get_config_json()
    }

    /// Cell state at `(x, y)` (0 = empty, 1 = sand), undefined outside the grid
    pub fn cell_at(&self, x: i32, y: i32) -> Option<u8> {
        self.core.cell(x, y).map(|c| c as u8)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }

    /// Paint the configured brush at a grid coordinate
    pub fn paint(&mut self, x: i32, y: i32) {
        self.core.paint(x, y);
    }

    pub fn paint_with_size(&mut self, x: i32, y: i32, brush_size: u32) {
        self.core.paint_with_size(x, y, brush_size);
    }

    /// Paint from a pointer event in canvas space (top-left origin).
    /// `left`/`top`/`display_width`/`display_height` describe where the grid is drawn.
    pub fn paint_at_pointer(
        &mut self,
        px: f64,
        py: f64,
        left: f64,
        top: f64,
        display_width: f64,
        display_height: f64,
    ) -> bool {
        let mapping = PointerMapping::new(left, top, display_width, display_height).with_flip_y(true);
        self.core.paint_at_pointer(px, py, &mapping)
    }

    pub fn add_grain(&mut self, x: i32, y: i32) -> bool {
        self.core.add_grain(x, y)
    }

    pub fn remove_grain(&mut self, x: i32, y: i32) -> bool {
        self.core.remove_grain(x, y)
    }

    /// Clear all grains
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Step the simulation forward one tick
    pub fn step(&mut self) {
        self.core.step();
    }

    /// Get pointer to cells array (one byte per cell)
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.cells_len()
    }

    /// Get pointer to colors array (ABGR, row 0 = bottom)
    pub fn colors_ptr(&self) -> *const u32 {
        self.core.colors_ptr()
    }

    pub fn colors_len_elements(&self) -> usize {
        self.core.colors_len_elements()
    }

    pub fn colors_len_bytes(&self) -> usize {
        self.core.colors_len_bytes()
    }

    /// Fill the transfer buffer with rows flipped (row 0 = top) and return it.
    /// Ready for `new ImageData(new Uint8ClampedArray(memory.buffer, ptr, w * h * 4), w)`.
    pub fn extract_top_down(&mut self) -> *const u32 {
        self.core.extract_top_down()
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            cells_ptr: data.cells_ptr as u32,
            cells_len_elements: data.cells_len_elements as u32,
            colors_ptr: data.colors_ptr as u32,
            colors_len_elements: data.colors_len_elements as u32,
            colors_len_bytes: data.colors_len_bytes as u32,
            top_down_ptr: if data.top_down_len_elements == 0 { 0 } else { data.top_down_ptr as u32 },
            top_down_len_elements: data.top_down_len_elements as u32,
        }
    }
}

impl World {
    /// Native access to the core (tests, native hosts)
    pub fn core(&self) -> &WorldCore {
        &self.core
    }
}
