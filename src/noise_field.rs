//! Coherent 3D noise source for the nucleus surface.
//!
//! Thin wrapper over OpenSimplex so the rest of the engine only sees a
//! pure `noise3(x, y, z) -> [-1, 1]` call. Deterministic for a given
//! seed: same inputs, same output.

use noise::{NoiseFn, OpenSimplex};

pub struct NoiseField {
    source: OpenSimplex,
}

impl NoiseField {
    pub fn new(seed: u32) -> Self {
        NoiseField {
            source: OpenSimplex::new(seed),
        }
    }

    /// Sample the field. Output is smooth in all three coordinates and
    /// bounded to [-1, 1].
    #[inline]
    pub fn noise3(&self, x: f64, y: f64, z: f64) -> f64 {
        self.source.get([x, y, z])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_unit_range() {
        let field = NoiseField::new(7);
        for i in 0..500 {
            let t = i as f64 * 0.37;
            let n = field.noise3(t.sin() * 2.0, t.cos() * 2.0, t * 0.01);
            assert!((-1.0..=1.0).contains(&n), "out of range at t={t}: {n}");
        }
    }

    #[test]
    fn deterministic_per_seed() {
        let a = NoiseField::new(42);
        let b = NoiseField::new(42);
        assert_eq!(a.noise3(1.3, 2.7, 0.5), b.noise3(1.3, 2.7, 0.5));
    }

    #[test]
    fn different_seeds_decorrelate() {
        let a = NoiseField::new(1);
        let b = NoiseField::new(2);
        let differs = (0..32).any(|i| {
            let x = i as f64 * 0.41 + 0.13;
            a.noise3(x, x * 0.7, 0.5) != b.noise3(x, x * 0.7, 0.5)
        });
        assert!(differs, "seeds 1 and 2 produced identical samples");
    }
}
