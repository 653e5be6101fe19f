use wasm_bindgen::prelude::*;

/// Snapshot of the last frame's timings and counters. All zeros while
/// perf metrics are disabled.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) stars_ms: f64,
    pub(super) nucleus_ms: f64,
    pub(super) view_ms: f64,
    pub(super) star_rate_resets: u32,
    pub(super) star_respawns: u32,
    pub(super) star_count: u32,
    pub(super) nucleus_vertices: u32,
    pub(super) frame: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 {
        self.step_ms
    }
    #[wasm_bindgen(getter)]
    pub fn stars_ms(&self) -> f64 {
        self.stars_ms
    }
    #[wasm_bindgen(getter)]
    pub fn nucleus_ms(&self) -> f64 {
        self.nucleus_ms
    }
    #[wasm_bindgen(getter)]
    pub fn view_ms(&self) -> f64 {
        self.view_ms
    }
    #[wasm_bindgen(getter)]
    pub fn star_rate_resets(&self) -> u32 {
        self.star_rate_resets
    }
    #[wasm_bindgen(getter)]
    pub fn star_respawns(&self) -> u32 {
        self.star_respawns
    }
    #[wasm_bindgen(getter)]
    pub fn star_count(&self) -> u32 {
        self.star_count
    }
    #[wasm_bindgen(getter)]
    pub fn nucleus_vertices(&self) -> u32 {
        self.nucleus_vertices
    }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u32 {
        self.frame
    }
}
