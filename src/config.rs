//! Scene configuration document.
//!
//! Every tunable of the scene lives here so the host can override the
//! defaults with a JSON document at construction time and read the
//! effective values back (`to_json`). Defaults reproduce the reference
//! scene exactly.

use serde::{Deserialize, Serialize};

/// All scene tunables. Unknown JSON keys are rejected; missing keys fall
/// back to their defaults.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    // Animated starfield
    pub star_count: u32,
    /// Radius of the shell stars (re)spawn onto
    pub star_spawn_radius: f32,
    /// Rate range assigned at startup, [low, high)
    pub star_initial_rate: [f32; 2],
    /// Rate range assigned on any reset, [low, high)
    pub star_respawn_rate: [f32; 2],
    /// Subtracted from each star's rate every frame
    pub star_rate_decay: f32,
    /// Rates strictly below this are re-randomized
    pub star_rate_floor: f32,
    /// Half-width of the x/z band around the central axis that triggers respawn
    pub star_axis_epsilon: f32,

    // Static far starfield
    pub far_star_count: u32,
    /// Spawn radius range for the static layer, [low, high)
    pub far_star_radius: [f32; 2],

    // Nucleus
    pub nucleus_radius: f32,
    /// Icosphere detail (10*detail^2 + 2 vertices)
    pub nucleus_detail: u32,
    /// Relative bump amplitude applied to the rest radius
    pub nucleus_bump: f32,
    pub nucleus_noise_freq: f64,
    /// Per-axis time multipliers; distinct values keep the pulse non-uniform
    pub nucleus_noise_phase: [f64; 3],
    /// Wall-clock milliseconds to noise-time
    pub nucleus_time_scale: f64,
    /// Rigid spin per axis per frame, radians
    pub nucleus_spin: f32,

    // Backdrop sphere
    pub backdrop_radius: f32,
    pub backdrop_segments: [u32; 2],
    pub backdrop_spin: f32,

    // Camera and control rigs
    pub camera_fov_deg: f32,
    pub camera_near: f32,
    pub camera_far: f32,
    /// Initial distance from the origin along +Z
    pub camera_distance: f32,
    pub orbit_min_distance: f32,
    pub orbit_max_distance: f32,
    pub orbit_auto_rotate_speed: f32,
    pub trackball_zoom_speed: f32,

    /// Resize coalescing window, milliseconds
    pub resize_debounce_ms: f64,

    pub noise_seed: u32,
    pub rng_seed: u32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        SceneConfig {
            star_count: 1000,
            star_spawn_radius: 150.0,
            star_initial_rate: [100.0, 150.0],
            star_respawn_rate: [50.0, 200.0],
            star_rate_decay: 0.3,
            star_rate_floor: 10.0,
            star_axis_epsilon: 5.0,

            far_star_count: 1000,
            far_star_radius: [70.0, 149.0],

            nucleus_radius: 30.0,
            nucleus_detail: 10,
            nucleus_bump: 0.16,
            nucleus_noise_freq: 2.0,
            nucleus_noise_phase: [0.8, 1.2, 0.4],
            nucleus_time_scale: 0.0003,
            nucleus_spin: 0.002,

            backdrop_radius: 150.0,
            backdrop_segments: [40, 40],
            backdrop_spin: 0.000_01,

            camera_fov_deg: 75.0,
            camera_near: 0.1,
            camera_far: 1000.0,
            camera_distance: 230.0,
            orbit_min_distance: 150.0,
            orbit_max_distance: 350.0,
            orbit_auto_rotate_speed: 2.0,
            trackball_zoom_speed: 0.5,

            resize_debounce_ms: 88.0,

            noise_seed: 0,
            rng_seed: 12345,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Reject values that would break structural invariants (zero-sized
    /// buffers, degenerate meshes, inverted ranges).
    pub fn validate(&self) -> Result<(), String> {
        if self.star_count == 0 {
            return Err("star_count must be at least 1".into());
        }
        if self.star_spawn_radius <= 0.0 {
            return Err("star_spawn_radius must be positive".into());
        }
        if self.star_rate_decay <= 0.0 {
            return Err("star_rate_decay must be positive".into());
        }
        for (name, range) in [
            ("star_initial_rate", self.star_initial_rate),
            ("star_respawn_rate", self.star_respawn_rate),
            ("far_star_radius", self.far_star_radius),
        ] {
            if !(range[0] > 0.0 && range[0] <= range[1]) {
                return Err(format!("{name} must be a positive [low, high] range"));
            }
        }
        if self.nucleus_radius <= 0.0 || self.backdrop_radius <= 0.0 {
            return Err("mesh radii must be positive".into());
        }
        if self.nucleus_detail == 0 {
            return Err("nucleus_detail must be at least 1".into());
        }
        if self.backdrop_segments[0] < 3 || self.backdrop_segments[1] < 2 {
            return Err("backdrop_segments too small for a closed sphere".into());
        }
        if self.camera_near <= 0.0 || self.camera_far <= self.camera_near {
            return Err("camera near/far planes are inverted".into());
        }
        if !(self.orbit_min_distance > 0.0 && self.orbit_min_distance <= self.orbit_max_distance) {
            return Err("orbit distance limits are inverted".into());
        }
        if self.resize_debounce_ms < 0.0 {
            return Err("resize_debounce_ms must not be negative".into());
        }
        Ok(())
    }
}
