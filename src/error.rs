//! Error type shared by tile generation, coefficient evaluation and the cache.

/// Errors raised by noise operations.
#[derive(thiserror::Error, Debug)]
pub enum NoiseError {
    #[error("unsupported noise tile size {size}, fast periodic indexing requires {expected}")]
    UnsupportedTileSize { size: usize, expected: usize },

    #[error("grid extents differ: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: [usize; 3],
        found: [usize; 3],
    },

    #[error("grid holds {found} cells, its extents need {expected}")]
    CellCountMismatch { expected: usize, found: usize },

    #[error("invalid extent {extent} along axis {axis}")]
    InvalidExtent { axis: usize, extent: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for noise operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
