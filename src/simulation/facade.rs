use wasm_bindgen::prelude::*;

use crate::config::SceneConfig;

use super::perf_stats::PerfStats;
use super::SceneCore;

/// Pointer/length table for the per-frame upload buffers, fetched in one
/// call so the host can set up its typed-array views without a round of
/// getter chatter.
#[wasm_bindgen]
pub struct AbiLayout {
    star_positions_ptr: u32,
    star_positions_len_elements: u32,
    star_positions_len_bytes: u32,
    star_rates_ptr: u32,
    star_rates_len_elements: u32,
    star_rates_len_bytes: u32,
    nucleus_positions_ptr: u32,
    nucleus_positions_len_elements: u32,
    nucleus_positions_len_bytes: u32,
    view_proj_ptr: u32,
    view_proj_len_elements: u32,
    view_proj_len_bytes: u32,
}

#[wasm_bindgen]
impl AbiLayout {
    #[wasm_bindgen(getter)]
    pub fn star_positions_ptr(&self) -> u32 {
        self.star_positions_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn star_positions_len_elements(&self) -> u32 {
        self.star_positions_len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn star_positions_len_bytes(&self) -> u32 {
        self.star_positions_len_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn star_rates_ptr(&self) -> u32 {
        self.star_rates_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn star_rates_len_elements(&self) -> u32 {
        self.star_rates_len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn star_rates_len_bytes(&self) -> u32 {
        self.star_rates_len_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn nucleus_positions_ptr(&self) -> u32 {
        self.nucleus_positions_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn nucleus_positions_len_elements(&self) -> u32 {
        self.nucleus_positions_len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn nucleus_positions_len_bytes(&self) -> u32 {
        self.nucleus_positions_len_bytes
    }

    #[wasm_bindgen(getter)]
    pub fn view_proj_ptr(&self) -> u32 {
        self.view_proj_ptr
    }
    #[wasm_bindgen(getter)]
    pub fn view_proj_len_elements(&self) -> u32 {
        self.view_proj_len_elements
    }
    #[wasm_bindgen(getter)]
    pub fn view_proj_len_bytes(&self) -> u32 {
        self.view_proj_len_bytes
    }
}

/// The scene as seen from JavaScript.
#[wasm_bindgen]
pub struct Scene {
    core: SceneCore,
}

#[wasm_bindgen]
impl Scene {
    /// Create a scene with default configuration for a viewport size.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Scene {
            core: SceneCore::new(width, height),
        }
    }

    /// Create a scene from a JSON configuration document; missing keys
    /// fall back to the defaults.
    #[wasm_bindgen(js_name = withConfigJson)]
    pub fn with_config_json(width: u32, height: u32, json: &str) -> Result<Scene, JsValue> {
        let config = SceneConfig::from_json(json).map_err(|e| JsValue::from_str(&e))?;
        let core =
            SceneCore::with_config(width, height, config).map_err(|e| JsValue::from_str(&e))?;
        Ok(Scene { core })
    }

    /// Effective configuration as JSON.
    pub fn config_json(&self) -> String {
        self.core.config_json()
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.core.width()
    }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.core.height()
    }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> f64 {
        self.core.frame() as f64
    }

    #[wasm_bindgen(getter)]
    pub fn star_count(&self) -> u32 {
        self.core.star_count() as u32
    }

    #[wasm_bindgen(getter)]
    pub fn nucleus_vertex_count(&self) -> u32 {
        self.core.nucleus_vertex_count() as u32
    }

    /// Advance one frame; call once per `requestAnimationFrame` with
    /// `performance.now()`.
    pub fn tick(&mut self, now_ms: f64) {
        self.core.tick(now_ms);
    }

    /// Report a container resize; coalesced and applied after the
    /// configured debounce window.
    pub fn notify_resize(&mut self, width: u32, height: u32, now_ms: f64) {
        self.core.notify_resize(width, height, now_ms);
    }

    /// Queue an orbit rotation in radians.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.core.rotate(d_azimuth, d_polar);
    }

    /// Queue a zoom wheel delta.
    pub fn zoom(&mut self, delta: f32) {
        self.core.zoom(delta);
    }

    /// Bitmask of buffers changed since the last call (see `dirty_*`
    /// constants); cleared on read.
    pub fn take_dirty(&mut self) -> u32 {
        self.core.take_dirty()
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.core.perf_stats()
    }

    // === Animated buffers (re-upload when dirty) ===

    pub fn star_positions_ptr(&self) -> *const f32 {
        self.core.star_positions().as_ptr()
    }

    pub fn star_positions_len_elements(&self) -> usize {
        self.core.star_positions().len()
    }

    pub fn star_rates_ptr(&self) -> *const f32 {
        self.core.star_rates().as_ptr()
    }

    pub fn star_rates_len_elements(&self) -> usize {
        self.core.star_rates().len()
    }

    pub fn nucleus_positions_ptr(&self) -> *const f32 {
        self.core.nucleus_positions().as_ptr()
    }

    pub fn nucleus_positions_len_elements(&self) -> usize {
        self.core.nucleus_positions().len()
    }

    /// Column-major view-projection matrix, 16 floats.
    pub fn view_proj_ptr(&self) -> *const f32 {
        self.core.view_proj().as_ptr()
    }

    pub fn view_proj_len_elements(&self) -> usize {
        self.core.view_proj().len()
    }

    // === Static buffers (upload once) ===

    pub fn far_star_positions_ptr(&self) -> *const f32 {
        self.core.far_star_positions().as_ptr()
    }

    pub fn far_star_positions_len_elements(&self) -> usize {
        self.core.far_star_positions().len()
    }

    pub fn nucleus_uvs_ptr(&self) -> *const f32 {
        self.core.nucleus_uvs().as_ptr()
    }

    pub fn nucleus_uvs_len_elements(&self) -> usize {
        self.core.nucleus_uvs().len()
    }

    pub fn nucleus_indices_ptr(&self) -> *const u32 {
        self.core.nucleus_indices().as_ptr()
    }

    pub fn nucleus_indices_len_elements(&self) -> usize {
        self.core.nucleus_indices().len()
    }

    pub fn backdrop_positions_ptr(&self) -> *const f32 {
        self.core.backdrop_positions().as_ptr()
    }

    pub fn backdrop_positions_len_elements(&self) -> usize {
        self.core.backdrop_positions().len()
    }

    pub fn backdrop_uvs_ptr(&self) -> *const f32 {
        self.core.backdrop_uvs().as_ptr()
    }

    pub fn backdrop_uvs_len_elements(&self) -> usize {
        self.core.backdrop_uvs().len()
    }

    pub fn backdrop_indices_ptr(&self) -> *const u32 {
        self.core.backdrop_indices().as_ptr()
    }

    pub fn backdrop_indices_len_elements(&self) -> usize {
        self.core.backdrop_indices().len()
    }

    // === Rigid transforms (host applies as model rotations) ===

    pub fn nucleus_rotation_x(&self) -> f32 {
        self.core.nucleus_rotation()[0]
    }

    pub fn nucleus_rotation_y(&self) -> f32 {
        self.core.nucleus_rotation()[1]
    }

    pub fn nucleus_rotation_z(&self) -> f32 {
        self.core.nucleus_rotation()[2]
    }

    pub fn backdrop_rotation_x(&self) -> f32 {
        self.core.backdrop_rotation()[0]
    }

    pub fn backdrop_rotation_y(&self) -> f32 {
        self.core.backdrop_rotation()[1]
    }

    pub fn backdrop_rotation_z(&self) -> f32 {
        self.core.backdrop_rotation()[2]
    }

    pub fn abi_layout(&self) -> AbiLayout {
        let data = self.core.abi_layout_data();
        AbiLayout {
            star_positions_ptr: data.star_positions_ptr as u32,
            star_positions_len_elements: data.star_positions_len_elements as u32,
            star_positions_len_bytes: data.star_positions_len_bytes as u32,
            star_rates_ptr: data.star_rates_ptr as u32,
            star_rates_len_elements: data.star_rates_len_elements as u32,
            star_rates_len_bytes: data.star_rates_len_bytes as u32,
            nucleus_positions_ptr: data.nucleus_positions_ptr as u32,
            nucleus_positions_len_elements: data.nucleus_positions_len_elements as u32,
            nucleus_positions_len_bytes: data.nucleus_positions_len_bytes as u32,
            view_proj_ptr: data.view_proj_ptr as u32,
            view_proj_len_elements: data.view_proj_len_elements as u32,
            view_proj_len_bytes: data.view_proj_len_bytes as u32,
        }
    }
}
