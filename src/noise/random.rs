//! Seeded random stream for tile noise and per-field offsets.

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, StandardNormal};

/// Deterministic random stream. The same seed yields the same sequence on
/// every platform.
pub struct RandomStream {
    rng: ChaCha8Rng,
}

impl RandomStream {
    pub fn new(seed: u64) -> Self {
        RandomStream {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Normally distributed sample.
    pub fn rand_norm(&mut self, mean: f32, std_dev: f32) -> f32 {
        let z: f32 = StandardNormal.sample(&mut self.rng);
        mean + std_dev * z
    }

    /// Uniform sample in `[-1, 1)` per component, scaled to unit length.
    pub fn vec3_norm(&mut self) -> Vec3 {
        loop {
            let v = Vec3::new(
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
                self.rng.gen_range(-1.0..1.0),
            );
            // redraw near-zero vectors
            if v.length_squared() > 1e-12 {
                return v.normalize();
            }
        }
    }
}
