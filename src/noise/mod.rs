//! Wavelet noise core: filter bank, tile generation and grid coefficients.
//!
//! The FFI layer in `ffi/` calls into these modules.

pub mod cache;
pub mod coefficients;
pub mod field;
pub mod filters;
pub mod grid;
pub mod indexing;
pub mod random;
pub mod strided;
pub mod tile;

pub use coefficients::compute_coefficients;
pub use field::WaveletNoiseField;
pub use filters::{downsample, downsample_clamped, smooth_axis, upsample, upsample_clamped, Boundary};
pub use grid::{create_grid, grid_get, grid_set, in_bounds, index_of, Grid};
pub use indexing::{mod_fast_128, mod_slow, PeriodicIndexer};
pub use random::RandomStream;
pub use strided::{LineView, LineViewMut};
pub use tile::{generate_tile, generate_tile_of_size, obtain_tile, shared_tile, try_shared_tile, NoiseTile};
