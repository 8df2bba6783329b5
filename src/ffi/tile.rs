//! Read access to the shared noise tile.

use crate::config::TILE_SIZE;
use crate::noise::try_shared_tile;

/// Edge length of the noise tile.
#[no_mangle]
pub extern "C" fn wn_tile_size() -> i32 {
    TILE_SIZE as i32
}

/// Tile sample at a lattice position, wrapped on every axis.
///
/// # Returns
/// The sample, or 0 if no noise field has built the tile yet.
#[no_mangle]
pub extern "C" fn wn_tile_value(x: i32, y: i32, z: i32) -> f32 {
    match try_shared_tile() {
        Some(tile) => tile.value_at(x, y, z),
        None => 0.0,
    }
}
