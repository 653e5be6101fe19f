//! Scene core — the simulation context behind the wasm facade.
//!
//! `SceneCore` owns every per-frame buffer and collaborator; the frame
//! driver (`step`) runs once per host animation frame. Nothing in here
//! touches the renderer: the host reads the buffers this module exposes
//! and uploads whichever ones the dirty mask names.

use crate::backdrop::Backdrop;
use crate::config::SceneConfig;
use crate::noise_field::NoiseField;
use crate::nucleus::Nucleus;
use crate::starfield::Starfield;
use crate::view::{OrbitRig, PerspectiveCamera, TrackballRig};
use crate::viewport::{Debounce, Viewport};

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/random.rs"]
pub(crate) mod random;
#[path = "init/init.rs"]
mod init;
#[path = "step/step.rs"]
mod step;
mod facade;

pub use facade::{AbiLayout, Scene};
pub use perf_stats::PerfStats;

use perf_timer::Stopwatch;

/// Dirty bits returned by `take_dirty`; each names one upload the host
/// still owes the GPU.
pub const DIRTY_STARS: u32 = 1 << 0;
pub const DIRTY_NUCLEUS: u32 = 1 << 1;
pub const DIRTY_VIEW: u32 = 1 << 2;

pub(crate) struct AbiLayoutData {
    pub(crate) star_positions_ptr: *const f32,
    pub(crate) star_positions_len_elements: usize,
    pub(crate) star_positions_len_bytes: usize,
    pub(crate) star_rates_ptr: *const f32,
    pub(crate) star_rates_len_elements: usize,
    pub(crate) star_rates_len_bytes: usize,
    pub(crate) nucleus_positions_ptr: *const f32,
    pub(crate) nucleus_positions_len_elements: usize,
    pub(crate) nucleus_positions_len_bytes: usize,
    pub(crate) view_proj_ptr: *const f32,
    pub(crate) view_proj_len_elements: usize,
    pub(crate) view_proj_len_bytes: usize,
}

/// The simulation context: all mutable scene state, no globals.
pub struct SceneCore {
    config: SceneConfig,

    stars: Starfield,
    far_star_positions: Vec<f32>,
    nucleus: Nucleus,
    backdrop: Backdrop,
    noise: NoiseField,

    camera: PerspectiveCamera,
    orbit: OrbitRig,
    trackball: TrackballRig,
    viewport: Viewport,
    resize_debounce: Debounce<(u32, u32)>,
    view_proj: Vec<f32>,

    frame: u64,
    rng_state: u32,
    dirty: u32,

    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Create a scene with default configuration for a viewport size.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_scene_core(width, height, SceneConfig::default())
    }

    pub fn with_config(width: u32, height: u32, config: SceneConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(init::create_scene_core(width, height, config))
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn config_json(&self) -> String {
        self.config.to_json()
    }

    pub fn width(&self) -> u32 {
        self.viewport.width
    }

    pub fn height(&self) -> u32 {
        self.viewport.height
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn star_count(&self) -> usize {
        self.stars.len()
    }

    pub fn nucleus_vertex_count(&self) -> usize {
        self.nucleus.vertex_count()
    }

    /// Advance the scene by one frame. `now_ms` is the host's monotonic
    /// wall clock (`performance.now()`).
    pub fn tick(&mut self, now_ms: f64) {
        step::step(self, now_ms);
    }

    /// Debounced viewport change; takes effect in a later `tick` once the
    /// burst settles.
    pub fn notify_resize(&mut self, width: u32, height: u32, now_ms: f64) {
        self.resize_debounce.signal((width, height), now_ms);
    }

    /// Queue an orbit rotation (radians), applied next frame.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.orbit.rotate(d_azimuth, d_polar);
    }

    /// Queue a zoom wheel delta, applied next frame.
    pub fn zoom(&mut self, delta: f32) {
        self.trackball.zoom(delta);
    }

    /// Return and clear the pending upload mask.
    pub fn take_dirty(&mut self) -> u32 {
        std::mem::take(&mut self.dirty)
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn perf_stats(&self) -> PerfStats {
        self.perf_stats.clone()
    }

    // === Buffer access (host upload surface) ===

    pub fn star_positions(&self) -> &[f32] {
        self.stars.positions()
    }

    pub fn star_rates(&self) -> &[f32] {
        self.stars.rates()
    }

    pub fn far_star_positions(&self) -> &[f32] {
        &self.far_star_positions
    }

    pub fn nucleus_positions(&self) -> &[f32] {
        self.nucleus.positions()
    }

    pub fn nucleus_uvs(&self) -> &[f32] {
        self.nucleus.uvs()
    }

    pub fn nucleus_indices(&self) -> &[u32] {
        self.nucleus.indices()
    }

    pub fn nucleus_rotation(&self) -> [f32; 3] {
        self.nucleus.rotation()
    }

    pub fn backdrop_positions(&self) -> &[f32] {
        self.backdrop.positions()
    }

    pub fn backdrop_uvs(&self) -> &[f32] {
        self.backdrop.uvs()
    }

    pub fn backdrop_indices(&self) -> &[u32] {
        self.backdrop.indices()
    }

    pub fn backdrop_rotation(&self) -> [f32; 3] {
        self.backdrop.rotation()
    }

    /// Column-major view-projection matrix, 16 floats.
    pub fn view_proj(&self) -> &[f32] {
        &self.view_proj
    }

    pub(crate) fn abi_layout_data(&self) -> AbiLayoutData {
        AbiLayoutData {
            star_positions_ptr: self.stars.positions().as_ptr(),
            star_positions_len_elements: self.stars.positions().len(),
            star_positions_len_bytes: std::mem::size_of_val(self.stars.positions()),
            star_rates_ptr: self.stars.rates().as_ptr(),
            star_rates_len_elements: self.stars.rates().len(),
            star_rates_len_bytes: std::mem::size_of_val(self.stars.rates()),
            nucleus_positions_ptr: self.nucleus.positions().as_ptr(),
            nucleus_positions_len_elements: self.nucleus.positions().len(),
            nucleus_positions_len_bytes: std::mem::size_of_val(self.nucleus.positions()),
            view_proj_ptr: self.view_proj.as_ptr(),
            view_proj_len_elements: self.view_proj.len(),
            view_proj_len_bytes: std::mem::size_of_val(self.view_proj.as_slice()),
        }
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
