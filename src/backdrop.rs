//! Backdrop: the inside-out textured sphere behind everything else.
//!
//! Geometry is static; only the rigid spin advances, slowly enough that
//! the backdrop reads as fixed over any single viewing session.

use crate::config::SceneConfig;
use crate::geometry::{uv_sphere, MeshData};

pub struct Backdrop {
    mesh: MeshData,
    spin_step: f32,
    rotation: [f32; 3],
}

impl Backdrop {
    pub fn new(config: &SceneConfig) -> Self {
        Backdrop {
            mesh: uv_sphere(
                config.backdrop_radius,
                config.backdrop_segments[0],
                config.backdrop_segments[1],
            ),
            spin_step: config.backdrop_spin,
            rotation: [0.0; 3],
        }
    }

    pub fn positions(&self) -> &[f32] {
        &self.mesh.positions
    }

    pub fn uvs(&self) -> &[f32] {
        &self.mesh.uvs
    }

    pub fn indices(&self) -> &[u32] {
        &self.mesh.indices
    }

    pub fn rotation(&self) -> [f32; 3] {
        self.rotation
    }

    pub fn spin(&mut self) {
        for axis in &mut self.rotation {
            *axis += self.spin_step;
        }
    }
}
