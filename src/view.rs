//! Camera and the two control rigs.
//!
//! Two rigs share one camera, split the way the reference scene splits
//! them: the orbit rig owns rotation (auto-rotate, distance clamp, pan
//! and zoom disabled), the trackball rig owns zoom only. Each rig keeps
//! its own target; the frame driver copies the orbit target onto the
//! trackball target every frame (one direction, never back), so zooming
//! always happens around whatever the orbit rig is looking at.
//!
//! Input arrives as accumulated deltas and is consumed on `update`, so
//! host event handlers can fire at any cadence relative to the frame
//! loop.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec3};

pub struct PerspectiveCamera {
    pub fov_y_deg: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl PerspectiveCamera {
    pub fn new(fov_y_deg: f32, aspect: f32, near: f32, far: f32, position: Vec3) -> Self {
        PerspectiveCamera {
            fov_y_deg,
            aspect: aspect.max(f32::EPSILON),
            near,
            far,
            position,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect.max(f32::EPSILON);
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y_deg.to_radians(), self.aspect, self.near, self.far)
    }

    pub fn view(&self, target: Vec3) -> Mat4 {
        Mat4::look_at_rh(self.position, target, Vec3::Y)
    }
}

/// Keep the polar angle off the poles so look-at never degenerates.
const POLAR_LIMIT: f32 = 1e-3;

pub struct OrbitRig {
    pub target: Vec3,
    pub auto_rotate: bool,
    pub auto_rotate_speed: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pending_azimuth: f32,
    pending_polar: f32,
}

impl OrbitRig {
    pub fn new(min_distance: f32, max_distance: f32, auto_rotate_speed: f32) -> Self {
        OrbitRig {
            target: Vec3::ZERO,
            auto_rotate: true,
            auto_rotate_speed,
            min_distance,
            max_distance,
            pending_azimuth: 0.0,
            pending_polar: 0.0,
        }
    }

    /// Queue a rotation; applied (and cleared) by the next `update`.
    pub fn rotate(&mut self, d_azimuth: f32, d_polar: f32) {
        self.pending_azimuth += d_azimuth;
        self.pending_polar += d_polar;
    }

    /// Per-frame angle at the nominal 60 Hz refresh: one full turn per
    /// 60 seconds at speed 1.0.
    fn auto_rotation_angle(&self) -> f32 {
        TAU / 60.0 / 60.0 * self.auto_rotate_speed
    }

    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        let offset = camera.position - self.target;
        let length = offset.length();
        let radius = length.clamp(self.min_distance, self.max_distance);

        let mut azimuth = offset.x.atan2(offset.z);
        let mut polar = if length > f32::EPSILON {
            (offset.y / length).clamp(-1.0, 1.0).acos()
        } else {
            PI / 2.0
        };

        if self.auto_rotate {
            azimuth += self.auto_rotation_angle();
        }
        azimuth += self.pending_azimuth;
        polar = (polar + self.pending_polar).clamp(POLAR_LIMIT, PI - POLAR_LIMIT);
        self.pending_azimuth = 0.0;
        self.pending_polar = 0.0;

        camera.position = self.target
            + Vec3::new(
                radius * polar.sin() * azimuth.sin(),
                radius * polar.cos(),
                radius * polar.sin() * azimuth.cos(),
            );
    }
}

pub struct TrackballRig {
    pub target: Vec3,
    pub zoom_speed: f32,
    pending_zoom: f32,
}

impl TrackballRig {
    pub fn new(zoom_speed: f32) -> Self {
        TrackballRig {
            target: Vec3::ZERO,
            zoom_speed,
            pending_zoom: 0.0,
        }
    }

    /// Queue a wheel delta; positive moves the camera away.
    pub fn zoom(&mut self, delta: f32) {
        self.pending_zoom += delta;
    }

    pub fn update(&mut self, camera: &mut PerspectiveCamera) {
        if self.pending_zoom == 0.0 {
            return;
        }
        // Scale the eye vector; the clamp keeps a wild wheel burst from
        // flipping through the target. The orbit rig re-clamps distance
        // on its next update.
        let factor = (1.0 + self.pending_zoom * self.zoom_speed).clamp(0.2, 5.0);
        self.pending_zoom = 0.0;
        camera.position = self.target + (camera.position - self.target) * factor;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(75.0, 16.0 / 9.0, 0.1, 1000.0, Vec3::new(0.0, 0.0, 230.0))
    }

    #[test]
    fn orbit_clamps_distance_to_limits() {
        let mut cam = camera();
        cam.position = Vec3::new(0.0, 0.0, 500.0);
        let mut orbit = OrbitRig::new(150.0, 350.0, 2.0);
        orbit.update(&mut cam);
        let distance = (cam.position - orbit.target).length();
        assert!((distance - 350.0).abs() < 1e-3, "got {distance}");

        cam.position = Vec3::new(0.0, 0.0, 10.0);
        orbit.update(&mut cam);
        let distance = (cam.position - orbit.target).length();
        assert!((distance - 150.0).abs() < 1e-3, "got {distance}");
    }

    #[test]
    fn auto_rotate_advances_azimuth_keeps_distance() {
        let mut cam = camera();
        let mut orbit = OrbitRig::new(150.0, 350.0, 2.0);
        let before = cam.position;
        orbit.update(&mut cam);
        assert!(
            (cam.position - before).length() > 1e-4,
            "auto-rotate should move the camera"
        );
        let distance = (cam.position - orbit.target).length();
        assert!((distance - 230.0).abs() < 1e-3);
        // Auto-rotate is horizontal: height is untouched.
        assert!(cam.position.y.abs() < 1e-4);
    }

    #[test]
    fn queued_rotation_is_consumed_once() {
        let mut cam = camera();
        let mut orbit = OrbitRig::new(150.0, 350.0, 2.0);
        orbit.auto_rotate = false;
        orbit.rotate(0.5, 0.0);
        orbit.update(&mut cam);
        let after_first = cam.position;
        orbit.update(&mut cam);
        assert!(
            (cam.position - after_first).length() < 1e-3,
            "second update must not replay the delta"
        );
    }

    #[test]
    fn polar_rotation_clamps_at_poles() {
        let mut cam = camera();
        let mut orbit = OrbitRig::new(150.0, 350.0, 2.0);
        orbit.auto_rotate = false;
        orbit.rotate(0.0, -10.0);
        orbit.update(&mut cam);
        assert!(cam.position.is_finite());
        let distance = (cam.position - orbit.target).length();
        assert!((distance - 230.0).abs() < 1e-3);
    }

    #[test]
    fn trackball_zoom_scales_eye_vector() {
        let mut cam = camera();
        let mut trackball = TrackballRig::new(0.5);
        trackball.zoom(0.4);
        trackball.update(&mut cam);
        // factor = 1 + 0.4 * 0.5 = 1.2
        assert!((cam.position.z - 276.0).abs() < 1e-3, "got {}", cam.position.z);
        // Delta consumed: another update is a no-op.
        trackball.update(&mut cam);
        assert!((cam.position.z - 276.0).abs() < 1e-3);
    }

    #[test]
    fn view_projection_is_finite() {
        let cam = camera();
        let matrix = cam.projection() * cam.view(Vec3::ZERO);
        assert!(matrix.to_cols_array().iter().all(|v| v.is_finite()));
    }
}
