use wasm_bindgen::prelude::*;

#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) boat_ms: f64,
    pub(super) camera_ms: f64,
    pub(super) ticks: u32,
    pub(super) sinking_ticks: u32,
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
    pub fn boat_ms(&self) -> f64 { self.boat_ms }
    #[wasm_bindgen(getter)]
    pub fn camera_ms(&self) -> f64 { self.camera_ms }
    /// Boat ticks since perf metrics were enabled
    #[wasm_bindgen(getter)]
    pub fn ticks(&self) -> u32 { self.ticks }
    #[wasm_bindgen(getter)]
    pub fn sinking_ticks(&self) -> u32 { self.sinking_ticks }
}
