//! FFI interface for noise field instances.

use crate::config::NoiseFieldConfig;
use crate::noise::WaveletNoiseField;

/// Create a noise field for a `width x height x depth` grid.
///
/// `fixed_seed` of -1 (or any negative value) selects the global seed.
/// A non-zero `load_from_file` loads the shared tile from
/// `waveletNoiseTile.bin` in the working directory, or writes it there after
/// generating.
///
/// # Returns
/// A pointer to the new field, or null on invalid extents or a failed tile
/// build.
#[no_mangle]
pub extern "C" fn wn_field_create(
    width: i16,
    height: i16,
    depth: i16,
    fixed_seed: i64,
    load_from_file: u8,
) -> *mut WaveletNoiseField {
    let config = NoiseFieldConfig {
        fixed_seed: if fixed_seed < 0 {
            None
        } else {
            Some(fixed_seed as u64)
        },
        load_from_file: load_from_file != 0,
        ..Default::default()
    };

    match WaveletNoiseField::new(width, height, depth, config) {
        Ok(field) => Box::into_raw(Box::new(field)),
        Err(err) => {
            log::error!("failed to create noise field: {}", err);
            std::ptr::null_mut()
        }
    }
}

/// Destroy a field. The shared tile stays alive.
///
/// # Safety
/// - `field` must be a pointer returned by `wn_field_create()`, or null
/// - `field` must not be used after this call
#[no_mangle]
pub unsafe extern "C" fn wn_field_destroy(field: *mut WaveletNoiseField) {
    if !field.is_null() {
        drop(Box::from_raw(field));
    }
}

/// Write the field's normalized seed offset to `out[0..3]`.
///
/// # Safety
/// - `field` must be a valid field pointer, or null
/// - `out` must point to at least 3 writable floats, or be null
///
/// # Returns
/// 0 on success, 1 on a null pointer.
#[no_mangle]
pub unsafe extern "C" fn wn_field_seed_offset(field: *const WaveletNoiseField, out: *mut f32) -> i32 {
    if field.is_null() || out.is_null() {
        return 1;
    }

    let offset = (*field).seed_offset();
    let out = std::slice::from_raw_parts_mut(out, 3);
    out.copy_from_slice(&offset.to_array());
    0
}
