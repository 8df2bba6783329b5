//! Grid creation, cell access, and coefficient evaluation.

use crate::noise;
use crate::noise::Grid;

/// Creates a zeroed grid. A depth of 1 makes a 2D grid.
///
/// # Returns
/// A pointer to the new Grid, or null for non-positive extents.
///
/// # Safety
/// The returned pointer must eventually be freed with `wn_grid_destroy()`.
#[no_mangle]
pub extern "C" fn wn_grid_create(width: i16, height: i16, depth: i16) -> *mut Grid {
    if width <= 0 || height <= 0 || depth <= 0 {
        return std::ptr::null_mut();
    }

    Box::into_raw(Box::new(noise::create_grid(width, height, depth)))
}

/// Destroys a grid. Null is a no-op.
///
/// # Safety
/// - `ptr` must be a pointer returned by `wn_grid_create()`, or null
/// - `ptr` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn wn_grid_destroy(ptr: *mut Grid) {
    if !ptr.is_null() {
        drop(Box::from_raw(ptr));
    }
}

/// Sets a cell value. Out-of-bounds coordinates are silently ignored.
///
/// # Safety
/// - `ptr` must be a valid Grid pointer, or null
#[no_mangle]
pub unsafe extern "C" fn wn_grid_set(ptr: *mut Grid, x: i16, y: i16, z: i16, value: f32) {
    if ptr.is_null() {
        return;
    }

    noise::grid_set(&mut *ptr, x, y, z, value);
}

/// Gets a cell value.
///
/// # Safety
/// - `ptr` must be a valid Grid pointer, or null
///
/// # Returns
/// The cell value, or 0 for null pointers and out-of-bounds coordinates.
#[no_mangle]
pub unsafe extern "C" fn wn_grid_get(ptr: *const Grid, x: i16, y: i16, z: i16) -> f32 {
    if ptr.is_null() {
        return 0.0;
    }

    noise::grid_get(&*ptr, x, y, z)
}

/// Replaces the interior of `input` with its turbulence energy coefficients,
/// using `temp1` and `temp2` as workspace.
///
/// # Safety
/// - each pointer must be a valid Grid pointer, or null
///
/// # Returns
/// 0 on success, 1 if any pointer is null, 2 if two pointers are the same
/// grid, 3 if the extents do not match or are too small.
#[no_mangle]
pub unsafe extern "C" fn wn_compute_coefficients(
    input: *mut Grid,
    temp1: *mut Grid,
    temp2: *mut Grid,
) -> i32 {
    if input.is_null() || temp1.is_null() || temp2.is_null() {
        return 1;
    }
    if input == temp1 || input == temp2 || temp1 == temp2 {
        return 2;
    }

    match noise::compute_coefficients(&mut *input, &mut *temp1, &mut *temp2) {
        Ok(()) => 0,
        Err(err) => {
            log::warn!("coefficient evaluation rejected: {}", err);
            3
        }
    }
}
