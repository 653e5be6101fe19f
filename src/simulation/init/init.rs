use glam::Vec3;

use crate::backdrop::Backdrop;
use crate::config::SceneConfig;
use crate::noise_field::NoiseField;
use crate::nucleus::Nucleus;
use crate::starfield::{scatter_shell, Starfield};
use crate::view::{OrbitRig, PerspectiveCamera, TrackballRig};
use crate::viewport::{Debounce, Viewport};

use super::perf_stats::PerfStats;
use super::step;
use super::{SceneCore, DIRTY_NUCLEUS, DIRTY_STARS, DIRTY_VIEW};

pub(super) fn create_scene_core(width: u32, height: u32, config: SceneConfig) -> SceneCore {
    let mut rng_state = config.rng_seed.max(1);

    let stars = Starfield::new(&config, &mut rng_state);
    let far_star_positions =
        scatter_shell(config.far_star_count, config.far_star_radius, &mut rng_state);
    let nucleus = Nucleus::new(&config);
    let backdrop = Backdrop::new(&config);
    let noise = NoiseField::new(config.noise_seed);

    let viewport = Viewport::new(width, height);
    let camera = PerspectiveCamera::new(
        config.camera_fov_deg,
        viewport.aspect(),
        config.camera_near,
        config.camera_far,
        Vec3::new(0.0, 0.0, config.camera_distance),
    );
    let orbit = OrbitRig::new(
        config.orbit_min_distance,
        config.orbit_max_distance,
        config.orbit_auto_rotate_speed,
    );
    let trackball = TrackballRig::new(config.trackball_zoom_speed);
    let resize_debounce = Debounce::new(config.resize_debounce_ms);

    let mut core = SceneCore {
        config,
        stars,
        far_star_positions,
        nucleus,
        backdrop,
        noise,
        camera,
        orbit,
        trackball,
        viewport,
        resize_debounce,
        view_proj: vec![0.0; 16],
        frame: 0,
        rng_state,
        // Everything needs a first upload.
        dirty: DIRTY_STARS | DIRTY_NUCLEUS | DIRTY_VIEW,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    };
    step::refresh_view_proj(&mut core);
    core
}
