//! Wavelet Noise - band-limited tileable 3D noise for simulation grids
//!
//! Builds one periodic 128³ noise tile per process from filtered white noise,
//! and computes per-cell turbulence energy coefficients directly on
//! caller-owned grids using the same filter bank with clamped boundaries.
//!
//! A C ABI for host simulators lives in `ffi`.

pub mod config;
pub mod error;
pub mod ffi;
pub mod noise;

pub use config::{NoiseFieldConfig, TileOptions, TILE_SIZE};
pub use error::{NoiseError, NoiseResult};
pub use noise::{compute_coefficients, create_grid, shared_tile, Grid, NoiseTile, WaveletNoiseField};
