//! Downsample/upsample filter bank for wavelet noise.
//!
//! Two boundary treatments share the same kernels:
//! - Periodic: source indices wrap around the line (tileable data)
//! - Clamped: source indices saturate to the first/last sample (finite grids)
//!
//! `smooth_axis` runs a downsample immediately followed by an upsample over
//! every line of a flat 3D buffer along one axis, leaving a coarse
//! reconstruction of that axis in place.

use rayon::prelude::*;

use super::indexing::{mod_slow, PeriodicIndexer};
use super::strided::{LineView, LineViewMut};

/// 32-tap half-band analysis kernel, centered between taps 15 and 16.
pub const DOWNSAMPLE_COEFFS: [f32; 32] = [
    0.000334, -0.001528, 0.000410, 0.003545, -0.000938, -0.008233, 0.002172, 0.019120,
    -0.005040, -0.044412, 0.011655, 0.103311, -0.025936, -0.243780, 0.033979, 0.655340,
    0.655340, 0.033979, -0.243780, -0.025936, 0.103311, 0.011655, -0.044412, -0.005040,
    0.019120, 0.002172, -0.008233, -0.000938, 0.003546, 0.000410, -0.001528, 0.000334,
];

/// 4-tap refinement kernel.
pub const UPSAMPLE_COEFFS: [f32; 4] = [0.25, 0.75, 0.75, 0.25];

const DOWNSAMPLE_CENTER: i32 = 16;
const UPSAMPLE_CENTER: i32 = 1;

/// Periodic downsample: `to[i]` for `i < n/2` from `from[2i-16 ..= 2i+15]`,
/// wrapped modulo `n = from.len()`.
///
/// Panics if `wrap` was built for a different extent than `from`.
pub fn downsample(from: &LineView, to: &mut LineViewMut, wrap: PeriodicIndexer) {
    let n = from.len();
    assert_eq!(
        wrap.extent(),
        n,
        "periodic indexer extent does not match line length"
    );
    assert_eq!(to.len(), n / 2);

    for i in 0..n / 2 {
        let center = 2 * i as i32;
        let mut acc = 0.0f32;
        for k in center - DOWNSAMPLE_CENTER..center + DOWNSAMPLE_CENTER {
            let tap = DOWNSAMPLE_COEFFS[(k - center + DOWNSAMPLE_CENTER) as usize];
            acc += tap * from.get(wrap.wrap(k));
        }
        to.set(i, acc);
    }
}

/// Periodic upsample: `to[i]` for `i < n` from `from[i/2-1 ..= i/2+2]`,
/// wrapped modulo `n/2`. Each output is scaled by one half.
pub fn upsample(from: &LineView, to: &mut LineViewMut) {
    let n = to.len();
    let half = (n / 2) as i32;
    assert!(half > 0, "upsample needs at least two output samples");
    assert_eq!(from.len(), n / 2);

    for i in 0..n {
        let center = (i / 2) as i32;
        let mut acc = 0.0f32;
        for k in center - UPSAMPLE_CENTER..center + 3 {
            let tap = UPSAMPLE_COEFFS[(k - center + UPSAMPLE_CENTER) as usize];
            acc += 0.5 * tap * from.get(mod_slow(k, half));
        }
        to.set(i, acc);
    }
}

/// Downsample with edge replication instead of wrap-around.
pub fn downsample_clamped(from: &LineView, to: &mut LineViewMut) {
    let n = from.len() as i32;
    assert_eq!(to.len(), from.len() / 2);

    for i in 0..n / 2 {
        let center = 2 * i;
        let mut acc = 0.0f32;
        for k in center - DOWNSAMPLE_CENTER..center + DOWNSAMPLE_CENTER {
            let value = if k < 0 {
                from.get(0)
            } else if k > n - 1 {
                from.get((n - 1) as usize)
            } else {
                from.get(k as usize)
            };
            acc += DOWNSAMPLE_COEFFS[(k - center + DOWNSAMPLE_CENTER) as usize] * value;
        }
        to.set(i as usize, acc);
    }
}

/// Upsample with edge replication instead of wrap-around.
pub fn upsample_clamped(from: &LineView, to: &mut LineViewMut) {
    let n = to.len();
    let half = (n / 2) as i32;
    assert!(half > 0, "upsample needs at least two output samples");
    assert_eq!(from.len(), n / 2);

    for i in 0..n {
        let center = (i / 2) as i32;
        let mut acc = 0.0f32;
        for k in center - UPSAMPLE_CENTER..center + 3 {
            let value = if k > half - 1 {
                from.get((half - 1) as usize)
            } else if k < 0 {
                from.get(0)
            } else {
                from.get(k as usize)
            };
            acc += 0.5 * UPSAMPLE_COEFFS[(k - center + UPSAMPLE_CENTER) as usize] * value;
        }
        to.set(i, acc);
    }
}

/// Boundary treatment of an axis pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Periodic(PeriodicIndexer),
    Clamped,
}

impl Boundary {
    fn downsample(&self, from: &LineView, to: &mut LineViewMut) {
        match *self {
            Boundary::Periodic(wrap) => downsample(from, to, wrap),
            Boundary::Clamped => downsample_clamped(from, to),
        }
    }

    fn upsample(&self, from: &LineView, to: &mut LineViewMut) {
        match *self {
            Boundary::Periodic(_) => upsample(from, to),
            Boundary::Clamped => upsample_clamped(from, to),
        }
    }
}

/// Downsample then upsample every line of `buf` along `axis`.
///
/// `buf` and `scratch` are row-major with extents `dims` (x fastest). The
/// coarse lines end up back in `buf`; `scratch` holds the half-resolution
/// samples of each line at the line's first `n/2` positions.
pub fn smooth_axis(
    buf: &mut [f32],
    scratch: &mut [f32],
    dims: [usize; 3],
    axis: usize,
    boundary: Boundary,
) {
    let total: usize = dims.iter().product();
    assert_eq!(buf.len(), total);
    assert_eq!(scratch.len(), total);

    let n = dims[axis];
    let half = n / 2;
    // Lines along `axis` never leave a block of dims[0..=axis] cells, and
    // within a block they start at 0..inner with stride inner.
    let inner: usize = dims[..axis].iter().product();
    let block = inner * n;
    if block == 0 {
        return;
    }

    buf.par_chunks_mut(block)
        .zip(scratch.par_chunks_mut(block))
        .for_each(|(buf_block, scratch_block)| {
            for base in 0..inner {
                {
                    let from = LineView::new(buf_block, base, inner, n);
                    let mut to = LineViewMut::new(scratch_block, base, inner, half);
                    boundary.downsample(&from, &mut to);
                }
                let from = LineView::new(scratch_block, base, inner, half);
                let mut to = LineViewMut::new(buf_block, base, inner, n);
                boundary.upsample(&from, &mut to);
            }
        });
}
