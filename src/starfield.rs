//! Star layers.
//!
//! The animated layer is a fixed-size set of particles that drift toward
//! the origin and recycle back onto the spawn shell. Positions (x3) and
//! rates (x1) live in two parallel flat buffers so the host can upload
//! them directly; the accessors below keep the 3:1 index relationship in
//! one place instead of scattering `i * 3` arithmetic.

use crate::config::SceneConfig;
use crate::simulation::random::{rand_range, random_point_on_sphere};

/// Per-pass counters for perf reporting.
#[derive(Clone, Copy, Default)]
pub struct StarPassStats {
    pub rate_resets: u32,
    pub respawns: u32,
}

pub struct Starfield {
    positions: Vec<f32>,
    rates: Vec<f32>,
    spawn_radius: f32,
    respawn_rate: [f32; 2],
    rate_decay: f32,
    rate_floor: f32,
    axis_epsilon: f32,
}

impl Starfield {
    pub fn new(config: &SceneConfig, rng: &mut u32) -> Self {
        let count = config.star_count as usize;
        let mut positions = Vec::with_capacity(count * 3);
        let mut rates = Vec::with_capacity(count);
        for _ in 0..count {
            positions.extend_from_slice(&random_point_on_sphere(rng, config.star_spawn_radius));
            rates.push(rand_range(
                rng,
                config.star_initial_rate[0],
                config.star_initial_rate[1],
            ));
        }
        Starfield {
            positions,
            rates,
            spawn_radius: config.star_spawn_radius,
            respawn_rate: config.star_respawn_rate,
            rate_decay: config.star_rate_decay,
            rate_floor: config.star_rate_floor,
            axis_epsilon: config.star_axis_epsilon,
        }
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    pub fn positions(&self) -> &[f32] {
        &self.positions
    }

    pub fn rates(&self) -> &[f32] {
        &self.rates
    }

    pub fn point(&self, i: usize) -> [f32; 3] {
        let base = i * 3;
        [
            self.positions[base],
            self.positions[base + 1],
            self.positions[base + 2],
        ]
    }

    pub fn rate(&self, i: usize) -> f32 {
        self.rates[i]
    }

    pub(crate) fn set_point(&mut self, i: usize, p: [f32; 3]) {
        let base = i * 3;
        self.positions[base..base + 3].copy_from_slice(&p);
    }

    pub(crate) fn set_rate(&mut self, i: usize, rate: f32) {
        self.rates[i] = rate;
    }

    /// One recycler pass over every star.
    ///
    /// Order per star: drift toward the origin (step size shrinks with
    /// rate and with distance), decay the rate, then check the rate floor
    /// BEFORE the axis-proximity respawn. Both resets can fire in the
    /// same frame; the floor reset never touches the position.
    pub fn advance(&mut self, rng: &mut u32) -> StarPassStats {
        let mut stats = StarPassStats::default();
        let [respawn_low, respawn_high] = self.respawn_rate;

        for (i, rate_slot) in self.rates.iter_mut().enumerate() {
            let base = i * 3;
            let mut x = self.positions[base];
            let mut y = self.positions[base + 1];
            let mut z = self.positions[base + 2];
            let mut rate = *rate_slot;

            x += (0.0 - x) / rate;
            y += (0.0 - y) / rate;
            z += (0.0 - z) / rate;

            rate -= self.rate_decay;
            if rate < self.rate_floor {
                rate = rand_range(rng, respawn_low, respawn_high);
                stats.rate_resets += 1;
            }

            // Axis-plane proximity only: the y coordinate is deliberately
            // ignored, so stars recycle anywhere along the central axis.
            if x.abs() < self.axis_epsilon && z.abs() < self.axis_epsilon {
                let p = random_point_on_sphere(rng, self.spawn_radius);
                x = p[0];
                y = p[1];
                z = p[2];
                rate = rand_range(rng, respawn_low, respawn_high);
                stats.respawns += 1;
            }

            self.positions[base] = x;
            self.positions[base + 1] = y;
            self.positions[base + 2] = z;
            *rate_slot = rate;
        }

        stats
    }
}

/// Static far-star layer: one position triple per star, scattered over a
/// band of shell radii. Never animated after creation.
pub fn scatter_shell(count: u32, radius_range: [f32; 2], rng: &mut u32) -> Vec<f32> {
    let mut positions = Vec::with_capacity(count as usize * 3);
    for _ in 0..count {
        let radius = rand_range(rng, radius_range[0], radius_range[1]);
        positions.extend_from_slice(&random_point_on_sphere(rng, radius));
    }
    positions
}
