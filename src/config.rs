//! Configuration for noise fields and the shared tile.
//!
//! Both structs deserialize with defaults for every missing key, so a host can
//! hand over a partial document.

use std::path::PathBuf;

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Edge length of the canonical noise tile.
pub const TILE_SIZE: usize = 128;

/// Process-level seed used for the tile and, offset by `FIELD_SEED_OFFSET`,
/// for fields constructed without a fixed seed.
pub const GLOBAL_RANDOM_SEED: u64 = 13_322_223;

pub const FIELD_SEED_OFFSET: u64 = 123;

pub const DEFAULT_TILE_CACHE: &str = "waveletNoiseTile.bin";

/// How the shared tile is obtained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TileOptions {
    /// Seed of the white noise the tile is filtered from.
    pub seed: u64,
    /// Cache file to load from, and to save to after a fresh generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cache_path: Option<PathBuf>,
}

impl Default for TileOptions {
    fn default() -> Self {
        TileOptions {
            seed: GLOBAL_RANDOM_SEED,
            cache_path: None,
        }
    }
}

/// Per-instance parameters of a wavelet noise field.
///
/// Offsets, scales, clamping and time animation are consumed by whoever samples
/// the field; construction only reads the seed and cache settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseFieldConfig {
    pub pos_offset: Vec3,
    pub pos_scale: Vec3,
    pub val_offset: f32,
    pub val_scale: f32,
    pub clamp: bool,
    pub clamp_neg: f32,
    pub clamp_pos: f32,
    pub time_anim: f32,
    /// Seed for the per-instance offset. `None` uses the global seed.
    pub fixed_seed: Option<u64>,
    pub load_from_file: bool,
    pub tile_cache_path: PathBuf,
}

impl Default for NoiseFieldConfig {
    fn default() -> Self {
        NoiseFieldConfig {
            pos_offset: Vec3::ZERO,
            pos_scale: Vec3::ONE,
            val_offset: 0.0,
            val_scale: 1.0,
            clamp: false,
            clamp_neg: 0.0,
            clamp_pos: 1.0,
            time_anim: 0.0,
            fixed_seed: None,
            load_from_file: false,
            tile_cache_path: PathBuf::from(DEFAULT_TILE_CACHE),
        }
    }
}

impl NoiseFieldConfig {
    /// Seed of the per-instance offset stream.
    pub fn offset_seed(&self) -> u64 {
        self.fixed_seed
            .unwrap_or(GLOBAL_RANDOM_SEED + FIELD_SEED_OFFSET)
    }

    /// Tile options implied by this configuration.
    pub fn tile_options(&self) -> TileOptions {
        TileOptions {
            seed: GLOBAL_RANDOM_SEED,
            cache_path: if self.load_from_file {
                Some(self.tile_cache_path.clone())
            } else {
                None
            },
        }
    }
}
