//! Periodic index wrapping.

use log::error;

use crate::config::TILE_SIZE;
use crate::error::{NoiseError, NoiseResult};

/// `k mod 128` for any `k`, negative included.
#[inline]
pub fn mod_fast_128(k: i32) -> usize {
    (k & 127) as usize
}

/// Euclidean `k mod n`. `n` must be positive.
#[inline]
pub fn mod_slow(k: i32, n: i32) -> usize {
    k.rem_euclid(n) as usize
}

/// Wrap-around indexer for one periodic extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PeriodicIndexer {
    /// Bit-mask wrap, valid only for an extent of 128.
    Fast128,
    General(i32),
}

impl PeriodicIndexer {
    /// The fast indexer, refused for any extent other than the tile size.
    pub fn fast(n: usize) -> NoiseResult<Self> {
        if n != TILE_SIZE {
            error!("fast 128 modulo requested for extent {n}, only {TILE_SIZE} is supported");
            return Err(NoiseError::UnsupportedTileSize {
                size: n,
                expected: TILE_SIZE,
            });
        }
        Ok(PeriodicIndexer::Fast128)
    }

    pub fn general(n: usize) -> Self {
        assert!(n > 0 && n <= i32::MAX as usize, "periodic extent out of range: {n}");
        PeriodicIndexer::General(n as i32)
    }

    /// Fast path when `n` allows it, general modulo otherwise.
    pub fn for_extent(n: usize) -> Self {
        if n == TILE_SIZE {
            PeriodicIndexer::Fast128
        } else {
            Self::general(n)
        }
    }

    pub fn extent(&self) -> usize {
        match *self {
            PeriodicIndexer::Fast128 => TILE_SIZE,
            PeriodicIndexer::General(n) => n as usize,
        }
    }

    #[inline]
    pub fn wrap(&self, k: i32) -> usize {
        match *self {
            PeriodicIndexer::Fast128 => mod_fast_128(k),
            PeriodicIndexer::General(n) => mod_slow(k, n),
        }
    }
}
