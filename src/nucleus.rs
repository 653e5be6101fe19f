//! The nucleus: a noise-displaced icosphere.
//!
//! Every frame each vertex is pushed along its own outward direction to
//! `rest_radius * (1 + bump * noise)`, with the noise sampled at the
//! vertex direction plus a per-axis time phase. Displacement is purely
//! radial, so directions are stable frame to frame and the update has no
//! history: re-running it at the same instant is a fixed point.
//!
//! The whole-object spin is a separate rigid transform the host applies;
//! it never feeds back into the vertex buffer.

use glam::Vec3;

use crate::config::SceneConfig;
use crate::geometry::{icosphere, MeshData};
use crate::noise_field::NoiseField;

pub struct Nucleus {
    mesh: MeshData,
    rest_radius: f32,
    bump: f32,
    noise_freq: f64,
    noise_phase: [f64; 3],
    time_scale: f64,
    spin_step: f32,
    rotation: [f32; 3],
}

impl Nucleus {
    pub fn new(config: &SceneConfig) -> Self {
        Nucleus {
            mesh: icosphere(config.nucleus_radius, config.nucleus_detail),
            rest_radius: config.nucleus_radius,
            bump: config.nucleus_bump,
            noise_freq: config.nucleus_noise_freq,
            noise_phase: config.nucleus_noise_phase,
            time_scale: config.nucleus_time_scale,
            spin_step: config.nucleus_spin,
            rotation: [0.0; 3],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
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

    /// Recompute every vertex position from the time-varying noise field.
    pub fn displace(&mut self, field: &NoiseField, now_ms: f64) {
        let t = now_ms * self.time_scale;
        let rest_radius = self.rest_radius;
        let bump = self.bump;
        let freq = self.noise_freq;
        let [phase_x, phase_y, phase_z] = self.noise_phase;

        let update = |vertex: &mut [f32]| {
            let p = Vec3::new(vertex[0], vertex[1], vertex[2]);
            let length = p.length();
            if length <= f32::EPSILON {
                // A vertex can only reach the center through external
                // tampering; leave it rather than divide by ~zero.
                return;
            }
            let dir = p / length;
            let n = field.noise3(
                dir.x as f64 * freq + t * phase_x,
                dir.y as f64 * freq + t * phase_y,
                dir.z as f64 * freq + t * phase_z,
            );
            push_vertex(vertex, dir, rest_radius, bump, n as f32);
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            self.mesh.positions.par_chunks_exact_mut(3).for_each(update);
        }
        #[cfg(not(feature = "parallel"))]
        self.mesh.positions.chunks_exact_mut(3).for_each(update);
    }

    /// Advance the rigid spin by one frame.
    pub fn spin(&mut self) {
        for axis in &mut self.rotation {
            *axis += self.spin_step;
        }
    }
}

/// Write `dir * rest_radius * (1 + bump * noise)` into a vertex slot.
#[inline]
pub(crate) fn push_vertex(vertex: &mut [f32], dir: Vec3, rest_radius: f32, bump: f32, noise: f32) {
    let distance = rest_radius * (1.0 + bump * noise);
    vertex[0] = dir.x * distance;
    vertex[1] = dir.y * distance;
    vertex[2] = dir.z * distance;
}
