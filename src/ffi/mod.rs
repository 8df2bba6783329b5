//! C FFI layer for host simulators.
//!
//! This module exports C ABI functions prefixed `wn_`.
//! All functions are marked with `#[no_mangle]` and use `extern "C"`.
//!
//! The actual logic is in the `noise` module. These functions are thin wrappers
//! that handle null checks, pointer safety, and C-to-Rust conversions.

pub mod field;
pub mod grid;
pub mod tile;

pub use field::{wn_field_create, wn_field_destroy, wn_field_seed_offset};
pub use grid::{wn_compute_coefficients, wn_grid_create, wn_grid_destroy, wn_grid_get, wn_grid_set};
pub use tile::{wn_tile_size, wn_tile_value};
