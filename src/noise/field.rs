//! Wavelet noise field instances.
//!
//! Each instance carries its own sampling parameters and a random seed offset,
//! and shares the one process-wide noise tile.

use std::fmt;
use std::sync::Arc;

use glam::Vec3;

use super::random::RandomStream;
use super::tile::{shared_tile, NoiseTile};
use crate::config::NoiseFieldConfig;
use crate::error::{NoiseError, NoiseResult};

/// A noise field bound to a simulation grid resolution.
pub struct WaveletNoiseField {
    config: NoiseFieldConfig,
    grid_size_inv: Vec3,
    seed_offset: Vec3,
    tile: Arc<NoiseTile>,
}

impl WaveletNoiseField {
    /// Create a field for a `width x height x depth` grid (`depth == 1` is 2D).
    ///
    /// Builds the shared tile on first use, loading it from or saving it to
    /// `config.tile_cache_path` when `config.load_from_file` is set.
    pub fn new(width: i16, height: i16, depth: i16, config: NoiseFieldConfig) -> NoiseResult<Self> {
        for (axis, extent) in [width, height, depth].into_iter().enumerate() {
            if extent <= 0 {
                return Err(NoiseError::InvalidExtent {
                    axis,
                    extent: extent as i64,
                });
            }
        }

        let is_3d = depth > 1;
        let grid_size_inv = Vec3::new(
            1.0 / width as f32,
            1.0 / height as f32,
            if is_3d { 1.0 / depth as f32 } else { 1.0 },
        );

        let seed_offset = RandomStream::new(config.offset_seed()).vec3_norm();
        let tile = shared_tile(&config.tile_options())?;

        Ok(WaveletNoiseField {
            config,
            grid_size_inv,
            seed_offset,
            tile,
        })
    }

    pub fn config(&self) -> &NoiseFieldConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut NoiseFieldConfig {
        &mut self.config
    }

    /// Per-axis inverse grid resolution; z is 1 for 2D grids.
    pub fn grid_size_inv(&self) -> Vec3 {
        self.grid_size_inv
    }

    /// Normalized random offset drawn from the instance seed.
    pub fn seed_offset(&self) -> Vec3 {
        self.seed_offset
    }

    pub fn tile(&self) -> &Arc<NoiseTile> {
        &self.tile
    }
}

impl fmt::Display for WaveletNoiseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.config;
        write!(
            f,
            "WaveletNoiseField: pos offset={} scale={}, value offset={} scale={}, clamp={} range=[{}, {}], time anim={}, grid inv={}",
            c.pos_offset,
            c.pos_scale,
            c.val_offset,
            c.val_scale,
            c.clamp,
            c.clamp_neg,
            c.clamp_pos,
            c.time_anim,
            self.grid_size_inv
        )
    }
}
