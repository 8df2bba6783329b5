//! Turbulence energy coefficients computed directly on a simulation grid.
//!
//! The grid is smoothed with the clamped filter bank (x, y, and z for 3D
//! grids), the per-cell residual against that coarse version becomes a weight
//! `sqrt(|residual|)`, and each interior cell is replaced by the mean weight
//! of its axis neighbours. The shared noise tile is not involved.

use rayon::prelude::*;

use super::filters::{smooth_axis, Boundary};
use super::grid::Grid;
use crate::error::{NoiseError, NoiseResult};

/// Overwrite the interior of `input` with its smoothed high-band energy.
///
/// `temp1` and `temp2` must share `input`'s extents. On return `temp2` holds
/// the coarse reconstruction and `temp1` the per-cell weights. Border cells of
/// `input` keep their values.
pub fn compute_coefficients(input: &mut Grid, temp1: &mut Grid, temp2: &mut Grid) -> NoiseResult<()> {
    let dims = input.dims();
    for scratch in [&*temp1, &*temp2] {
        if scratch.dims() != dims {
            return Err(NoiseError::ShapeMismatch {
                expected: dims,
                found: scratch.dims(),
            });
        }
    }

    let expected: usize = dims.iter().product();
    for grid in [&*input, &*temp1, &*temp2] {
        if grid.cells.len() != expected {
            return Err(NoiseError::CellCountMismatch {
                expected,
                found: grid.cells.len(),
            });
        }
    }

    let is_3d = input.is_3d();
    let axes = if is_3d { 3 } else { 2 };
    for axis in 0..axes {
        if dims[axis] < 2 {
            return Err(NoiseError::InvalidExtent {
                axis,
                extent: dims[axis] as i64,
            });
        }
    }
    if dims[2] == 0 {
        return Err(NoiseError::InvalidExtent { axis: 2, extent: 0 });
    }

    temp1.cells.fill(0.0);
    // The first pass reads the input; running it in place on a copy is the same.
    temp2.cells.copy_from_slice(&input.cells);

    for axis in 0..axes {
        smooth_axis(&mut temp2.cells, &mut temp1.cells, dims, axis, Boundary::Clamped);
    }

    residual_weights(&input.cells, &temp2.cells, &mut temp1.cells);
    smooth_weights(&temp1.cells, &mut input.cells, dims, is_3d);
    Ok(())
}

/// `weights[i] = sqrt(|original[i] - coarse[i]|)`
pub(crate) fn residual_weights(original: &[f32], coarse: &[f32], weights: &mut [f32]) {
    weights
        .par_iter_mut()
        .zip(original.par_iter().zip(coarse.par_iter()))
        .for_each(|(w, (&o, &c))| *w = (o - c).abs().sqrt());
}

/// Mean of the 4 (2D) or 6 (3D) axis neighbours, written to interior cells only.
pub(crate) fn smooth_weights(weights: &[f32], out: &mut [f32], dims: [usize; 3], is_3d: bool) {
    let [sx, sy, sz] = dims;
    let slab = sx * sy;
    if sx < 3 || sy < 3 {
        return;
    }

    let factor: f32 = if is_3d { 1.0 / 6.0 } else { 1.0 / 4.0 };
    let (z_start, z_end) = if is_3d {
        (1, sz.saturating_sub(1))
    } else {
        (0, sz)
    };
    if z_end <= z_start {
        return;
    }

    out.par_chunks_mut(slab)
        .enumerate()
        .skip(z_start)
        .take(z_end - z_start)
        .for_each(|(k, out_slab)| {
            for j in 1..sy - 1 {
                for i in 1..sx - 1 {
                    let idx = k * slab + j * sx + i;
                    let mut res = weights[idx - 1] + weights[idx + 1];
                    res += weights[idx - sx] + weights[idx + sx];
                    if is_3d {
                        res += weights[idx - slab] + weights[idx + slab];
                    }
                    out_slab[j * sx + i] = res * factor;
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::grid::{create_grid, grid_get, grid_set, in_bounds};
    use approx::assert_abs_diff_eq;

    fn triple(width: i16, height: i16, depth: i16) -> (Grid, Grid, Grid) {
        (
            create_grid(width, height, depth),
            create_grid(width, height, depth),
            create_grid(width, height, depth),
        )
    }

    fn is_border(grid: &Grid, x: i16, y: i16, z: i16) -> bool {
        let flat = x == 0 || y == 0 || x == grid.width - 1 || y == grid.height - 1;
        flat || (grid.is_3d() && (z == 0 || z == grid.depth - 1))
    }

    #[test]
    fn test_zero_grid_stays_zero() {
        let (mut input, mut t1, mut t2) = triple(8, 8, 8);
        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();
        assert!(input.cells.iter().all(|&c| c == 0.0));
        assert!(t2.cells.iter().all(|&c| c == 0.0));
    }

    #[test]
    fn test_constant_grid_has_no_energy() {
        let (mut input, mut t1, mut t2) = triple(10, 9, 7);
        input.cells.fill(2.0);
        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();

        // The coarse version reconstructs the constant up to the kernel's rounding.
        for &c in &t2.cells {
            assert_abs_diff_eq!(c, 2.0, epsilon = 1e-5);
        }
        for z in 0..7 {
            for y in 0..9 {
                for x in 0..10 {
                    let v = grid_get(&input, x, y, z);
                    if is_border(&input, x, y, z) {
                        assert_eq!(v, 2.0);
                    } else {
                        assert_abs_diff_eq!(v, 0.0, epsilon = 5e-3);
                    }
                }
            }
        }
    }

    #[test]
    fn test_border_cells_untouched() {
        let (mut input, mut t1, mut t2) = triple(6, 6, 6);
        for z in 0..6 {
            for y in 0..6 {
                for x in 0..6 {
                    let v = if is_border(&input, x, y, z) { 5.0 } else { -1.0 };
                    grid_set(&mut input, x, y, z, v);
                }
            }
        }
        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();
        for z in 0..6 {
            for y in 0..6 {
                for x in 0..6 {
                    if is_border(&input, x, y, z) {
                        assert_eq!(grid_get(&input, x, y, z), 5.0);
                    } else {
                        assert!(grid_get(&input, x, y, z) >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_impulse_is_symmetric_and_non_negative() {
        let (mut input, mut t1, mut t2) = triple(8, 8, 8);
        grid_set(&mut input, 4, 4, 4, 1.0);
        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();

        assert!(input.cells.iter().all(|&c| c >= 0.0));
        for z in 1..7i16 {
            for y in 1..7i16 {
                for x in 1..7i16 {
                    let v = grid_get(&input, x, y, z);
                    assert_abs_diff_eq!(v, grid_get(&input, y, x, z), epsilon = 1e-5);
                    assert_abs_diff_eq!(v, grid_get(&input, z, y, x), epsilon = 1e-5);
                    assert_abs_diff_eq!(v, grid_get(&input, x, z, y), epsilon = 1e-5);
                }
            }
        }
        assert!(grid_get(&input, 3, 4, 4) > grid_get(&input, 1, 1, 1));
        assert!(grid_get(&input, 4, 4, 4) > 0.0);
    }

    #[test]
    fn test_2d_grid_skips_z_pass() {
        let (mut input, mut t1, mut t2) = triple(12, 10, 1);
        for (i, c) in input.cells.iter_mut().enumerate() {
            *c = ((i * 37) % 11) as f32 * 0.1;
        }
        let original = input.cells.clone();

        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();

        let dims = [12, 10, 1];
        let mut coarse = original.clone();
        let mut scratch = vec![0.0; coarse.len()];
        smooth_axis(&mut coarse, &mut scratch, dims, 0, Boundary::Clamped);
        smooth_axis(&mut coarse, &mut scratch, dims, 1, Boundary::Clamped);
        assert_eq!(t2.cells, coarse);

        let mut weights = vec![0.0; coarse.len()];
        residual_weights(&original, &coarse, &mut weights);
        assert_eq!(t1.cells, weights);

        // Interior cells: four neighbours, divided by four
        let sx = 12;
        let idx = 3 * sx + 5;
        let mut expected = weights[idx - 1] + weights[idx + 1];
        expected += weights[idx - sx] + weights[idx + sx];
        assert_eq!(input.cells[idx], expected * 0.25);
        // Border rows keep the input
        assert_eq!(input.cells[0], original[0]);
        assert_eq!(input.cells[sx * 9 + 4], original[sx * 9 + 4]);
    }

    #[test]
    fn test_smoothing_divisor() {
        let dims2 = [5, 5, 1];
        let ones = vec![1.0f32; 25];
        let mut out = vec![0.0f32; 25];
        smooth_weights(&ones, &mut out, dims2, false);
        assert_eq!(out[2 * 5 + 2], 1.0);
        assert_eq!(out[0], 0.0);

        let dims3 = [5, 5, 5];
        let ones = vec![1.0f32; 125];
        let mut out = vec![0.0f32; 125];
        smooth_weights(&ones, &mut out, dims3, true);
        assert_abs_diff_eq!(out[2 * 25 + 2 * 5 + 2], 1.0, epsilon = 1e-6);
        assert_eq!(out[2 * 5 + 2], 0.0);
    }

    #[test]
    fn test_shape_mismatch() {
        let mut input = create_grid(8, 8, 8);
        let mut t1 = create_grid(8, 8, 8);
        let mut t2 = create_grid(8, 8, 4);
        match compute_coefficients(&mut input, &mut t1, &mut t2) {
            Err(NoiseError::ShapeMismatch { expected, found }) => {
                assert_eq!(expected, [8, 8, 8]);
                assert_eq!(found, [8, 8, 4]);
            }
            other => panic!("expected shape mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_cell_count_mismatch() {
        let (mut input, mut t1, mut t2) = triple(8, 8, 8);
        t1.cells.truncate(100);
        match compute_coefficients(&mut input, &mut t1, &mut t2) {
            Err(NoiseError::CellCountMismatch { expected, found }) => {
                assert_eq!(expected, 512);
                assert_eq!(found, 100);
            }
            other => panic!("expected cell count mismatch, got {:?}", other),
        }

        // A truncated input is rejected before anything is written
        let (mut input, mut t1, mut t2) = triple(8, 8, 8);
        input.cells.pop();
        t2.cells.fill(3.0);
        assert!(matches!(
            compute_coefficients(&mut input, &mut t1, &mut t2),
            Err(NoiseError::CellCountMismatch { expected: 512, found: 511 })
        ));
        assert!(t2.cells.iter().all(|&c| c == 3.0));
    }

    #[test]
    fn test_too_short_axis() {
        let (mut input, mut t1, mut t2) = triple(1, 8, 1);
        assert!(matches!(
            compute_coefficients(&mut input, &mut t1, &mut t2),
            Err(NoiseError::InvalidExtent { axis: 0, extent: 1 })
        ));
    }

    #[test]
    fn test_odd_extents() {
        let (mut input, mut t1, mut t2) = triple(7, 5, 3);
        grid_set(&mut input, 3, 2, 1, 4.0);
        compute_coefficients(&mut input, &mut t1, &mut t2).unwrap();
        assert!(in_bounds(&input, 6, 4, 2));
        assert!(input.cells.iter().all(|c| c.is_finite()));
        assert!(grid_get(&input, 3, 2, 1) > 0.0);
    }
}
