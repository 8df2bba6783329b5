//! Real-valued simulation grid and cell access helpers.

/// A 2D or 3D grid of f32 values, x fastest, then y, then z.
/// A grid with `depth == 1` is treated as 2D.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub width: i16,
    pub height: i16,
    pub depth: i16,
    pub cells: Vec<f32>,
}

impl Grid {
    #[inline]
    pub fn is_3d(&self) -> bool {
        self.depth > 1
    }

    /// Extents as `[x, y, z]`.
    #[inline]
    pub fn dims(&self) -> [usize; 3] {
        [
            self.width.max(0) as usize,
            self.height.max(0) as usize,
            self.depth.max(0) as usize,
        ]
    }
}

/// Initialize a zeroed grid with the given dimensions.
/// Non-positive extents produce an empty grid.
pub fn create_grid(width: i16, height: i16, depth: i16) -> Grid {
    let size = (width.max(0) as usize) * (height.max(0) as usize) * (depth.max(0) as usize);
    Grid {
        width,
        height,
        depth,
        cells: vec![0.0; size],
    }
}

/// Calculate the linear index for a 3D coordinate.
#[inline]
pub fn index_of(grid: &Grid, x: i16, y: i16, z: i16) -> usize {
    z as usize * grid.height as usize * grid.width as usize
        + y as usize * grid.width as usize
        + x as usize
}

/// Check if coordinates are within grid bounds.
#[inline]
pub fn in_bounds(grid: &Grid, x: i16, y: i16, z: i16) -> bool {
    x >= 0 && x < grid.width && y >= 0 && y < grid.height && z >= 0 && z < grid.depth
}

/// Set a cell value. Out-of-bounds writes are ignored.
pub fn grid_set(grid: &mut Grid, x: i16, y: i16, z: i16, value: f32) {
    if in_bounds(grid, x, y, z) {
        let idx = index_of(grid, x, y, z);
        grid.cells[idx] = value;
    }
}

/// Get a cell value, 0 when out of bounds.
pub fn grid_get(grid: &Grid, x: i16, y: i16, z: i16) -> f32 {
    if in_bounds(grid, x, y, z) {
        grid.cells[index_of(grid, x, y, z)]
    } else {
        0.0
    }
}
