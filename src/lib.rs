//! Nebula Engine - Scene simulation core in WASM
//!
//! The JS host owns WebGL (upload, draw calls, textures, input events);
//! this crate owns every per-frame number of the scene:
//! - starfield   - animated recycler stars + static far layer
//! - nucleus     - noise-displaced icosphere surface
//! - backdrop    - slowly spinning background sphere
//! - view        - camera plus orbit/trackball control rigs
//! - simulation/ - frame driver, wasm facade, perf metrics

pub mod backdrop;
pub mod config;
pub mod geometry;
pub mod noise_field;
pub mod nucleus;
pub mod simulation;
pub mod starfield;
pub mod view;
pub mod viewport;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Nebula WASM engine initialized".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use config::SceneConfig;
pub use simulation::{AbiLayout, PerfStats, Scene, SceneCore};
pub use simulation::{DIRTY_NUCLEUS, DIRTY_STARS, DIRTY_VIEW};

// Export dirty-mask constants for JS
#[wasm_bindgen]
pub fn dirty_stars() -> u32 {
    DIRTY_STARS
}
#[wasm_bindgen]
pub fn dirty_nucleus() -> u32 {
    DIRTY_NUCLEUS
}
#[wasm_bindgen]
pub fn dirty_view() -> u32 {
    DIRTY_VIEW
}
