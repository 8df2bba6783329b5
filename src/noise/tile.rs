//! Periodic band-limited noise tile.
//!
//! Generation:
//! - Fill an N³ cube with standard-normal white noise
//! - Downsample+upsample every line along x, then y, then z (periodic)
//! - Subtract that coarse reconstruction, keeping the high band
//! - Add a copy shifted by an odd offset on every axis, with x and z
//!   exchanged, to cancel the even/odd variance difference of the filter bank
//!
//! The tile is built at most once per process and shared behind an `Arc`.

use std::sync::Arc;

use log::{info, warn};
use once_cell::sync::OnceCell;
use rayon::prelude::*;

use super::cache;
use super::filters::{smooth_axis, Boundary};
use super::indexing::{mod_slow, PeriodicIndexer};
use super::random::RandomStream;
use crate::config::{TileOptions, TILE_SIZE};
use crate::error::NoiseResult;

static NOISE_TILE: OnceCell<Arc<NoiseTile>> = OnceCell::new();

/// A cubic, periodic noise lattice, x fastest, then y, then z.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseTile {
    size: usize,
    data: Vec<f32>,
}

impl NoiseTile {
    pub(crate) fn from_raw(size: usize, data: Vec<f32>) -> Self {
        assert_eq!(data.len(), size * size * size, "tile data does not match edge {size}");
        NoiseTile { size, data }
    }

    /// Edge length.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Sample at an integer lattice position, wrapping on every axis.
    pub fn value_at(&self, x: i32, y: i32, z: i32) -> f32 {
        let n = self.size as i32;
        let idx = mod_slow(x, n) + mod_slow(y, n) * self.size + mod_slow(z, n) * self.size * self.size;
        self.data[idx]
    }
}

/// Generate the canonical `TILE_SIZE` tile from `seed`.
pub fn generate_tile(seed: u64) -> NoiseResult<NoiseTile> {
    generate_tile_of_size(TILE_SIZE, seed)
}

/// Generate a tile of edge `size`.
///
/// Tile wrapping uses the fast 128 modulo, so any other size is rejected
/// before work starts.
pub fn generate_tile_of_size(size: usize, seed: u64) -> NoiseResult<NoiseTile> {
    let wrap = PeriodicIndexer::fast(size)?;
    info!("generating {size}^3 noise tile");

    let mut stream = RandomStream::new(seed);
    let mut noise: Vec<f32> = (0..size * size * size)
        .map(|_| stream.rand_norm(0.0, 1.0))
        .collect();

    let coarse = coarse_reconstruction(&noise, size, wrap);
    subtract_coarse(&mut noise, &coarse);
    drop(coarse);
    add_parity_shift(&mut noise, size, wrap);

    Ok(NoiseTile { size, data: noise })
}

/// Load the tile from `options.cache_path` if present, otherwise generate it
/// and try to write the cache. Never touches the shared tile.
pub fn obtain_tile(options: &TileOptions) -> NoiseResult<NoiseTile> {
    if let Some(path) = &options.cache_path {
        if let Some(tile) = cache::load_tile(path, TILE_SIZE) {
            info!("noise tile loaded from {}", path.display());
            return Ok(tile);
        }
    }

    let tile = generate_tile(options.seed)?;

    if let Some(path) = &options.cache_path {
        match cache::save_tile(path, &tile) {
            Ok(()) => info!("noise tile saved to {}", path.display()),
            Err(err) => warn!("failed to save noise tile to {}: {}", path.display(), err),
        }
    }
    Ok(tile)
}

/// The process-wide tile, built on first call.
///
/// Later calls return the same `Arc` and ignore `options`. Concurrent first
/// callers block until one of them has finished building; a failed build
/// leaves nothing behind, so the next call tries again.
pub fn shared_tile(options: &TileOptions) -> NoiseResult<Arc<NoiseTile>> {
    NOISE_TILE
        .get_or_try_init(|| obtain_tile(options).map(Arc::new))
        .map(Arc::clone)
}

/// The process-wide tile if it has been built.
pub fn try_shared_tile() -> Option<Arc<NoiseTile>> {
    NOISE_TILE.get().cloned()
}

/// Low-pass reconstruction of a periodic cube: per-axis downsample+upsample
/// over x, y and z in turn.
pub(crate) fn coarse_reconstruction(noise: &[f32], size: usize, wrap: PeriodicIndexer) -> Vec<f32> {
    let dims = [size; 3];
    let mut temp1 = vec![0.0f32; noise.len()];
    let mut temp2 = noise.to_vec();
    for axis in 0..3 {
        smooth_axis(&mut temp2, &mut temp1, dims, axis, Boundary::Periodic(wrap));
    }
    temp2
}

pub(crate) fn subtract_coarse(noise: &mut [f32], coarse: &[f32]) {
    noise
        .par_iter_mut()
        .zip(coarse.par_iter())
        .for_each(|(value, &c)| *value -= c);
}

/// Half the edge, bumped to the next odd number.
pub(crate) fn parity_offset(size: usize) -> usize {
    let offset = size / 2;
    if offset % 2 == 0 {
        offset + 1
    } else {
        offset
    }
}

/// Add an odd-offset copy of `noise` onto itself, reading from a snapshot.
///
/// The copy is written with x and z exchanged:
/// `noise[x,y,z] += noise[z+o, y+o, x+o]` (periodic).
pub(crate) fn add_parity_shift(noise: &mut [f32], size: usize, wrap: PeriodicIndexer) {
    let offset = parity_offset(size) as i32;
    let slab = size * size;
    let mut shifted = vec![0.0f32; noise.len()];
    {
        let source: &[f32] = &*noise;
        // Each slab of the copy is one source x, filled y-major with z fastest
        shifted
            .par_chunks_mut(slab)
            .enumerate()
            .for_each(|(x, out)| {
                let sx = wrap.wrap(x as i32 + offset);
                for y in 0..size {
                    let sy = wrap.wrap(y as i32 + offset);
                    for z in 0..size {
                        let sz = wrap.wrap(z as i32 + offset);
                        out[y * size + z] = source[sx + sy * size + sz * slab];
                    }
                }
            });
    }

    noise
        .par_iter_mut()
        .zip(shifted.par_iter())
        .for_each(|(value, &s)| *value += s);
}
