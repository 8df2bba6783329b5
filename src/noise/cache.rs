//! On-disk noise tile cache.
//!
//! The file is a flat, headerless run of `size³` native-endian f32 samples, so
//! it is only valid for the tile size and float width that wrote it. A file of
//! any other length is ignored.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::{debug, warn};

use super::tile::NoiseTile;
use crate::error::NoiseResult;

/// Load a cached tile of edge `size`. Any failure is a cache miss.
pub fn load_tile(path: &Path, size: usize) -> Option<NoiseTile> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            debug!("noise tile cache miss at {}: {}", path.display(), err);
            return None;
        }
    };

    let count = size * size * size;
    let expected_bytes = (count * std::mem::size_of::<f32>()) as u64;
    match file.metadata() {
        Ok(meta) if meta.len() == expected_bytes => {}
        Ok(meta) => {
            warn!(
                "ignoring noise tile cache {}: {} bytes, expected {}",
                path.display(),
                meta.len(),
                expected_bytes
            );
            return None;
        }
        Err(err) => {
            warn!("ignoring noise tile cache {}: {}", path.display(), err);
            return None;
        }
    }

    let mut data = vec![0.0f32; count];
    if let Err(err) = file.read_exact(bytemuck::cast_slice_mut(&mut data)) {
        warn!("failed to read noise tile cache {}: {}", path.display(), err);
        return None;
    }

    Some(NoiseTile::from_raw(size, data))
}

/// Write `tile` as a flat sample blob, replacing any existing file.
pub fn save_tile(path: &Path, tile: &NoiseTile) -> NoiseResult<()> {
    let mut file = File::create(path)?;
    file.write_all(bytemuck::cast_slice(tile.data()))?;
    file.flush()?;
    Ok(())
}
