use wasm_bindgen::prelude::*;

/// Snapshot of the last step. All zeros until perf metrics are enabled.
#[wasm_bindgen]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) grains_scanned: u32,
    pub(super) grains_moved: u32,
    pub(super) grain_count: u32,
    pub(super) frame: u64,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn grains_scanned(&self) -> u32 { self.grains_scanned }
    #[wasm_bindgen(getter)]
    pub fn grains_moved(&self) -> u32 { self.grains_moved }
    #[wasm_bindgen(getter)]
    pub fn grain_count(&self) -> u32 { self.grain_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
}
