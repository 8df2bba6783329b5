//! Strided 1D views over flat 3D buffers.
//!
//! A line along any axis of a row-major buffer is a base offset plus a fixed
//! element stride: stride 1 walks x, stride `width` walks y, stride
//! `width * height` walks z.

/// Read-only strided line.
#[derive(Clone, Copy)]
pub struct LineView<'a> {
    data: &'a [f32],
    base: usize,
    stride: usize,
    len: usize,
}

impl<'a> LineView<'a> {
    /// Panics if the last element would fall outside `data`.
    pub fn new(data: &'a [f32], base: usize, stride: usize, len: usize) -> Self {
        assert_line_fits(data.len(), base, stride, len);
        LineView {
            data,
            base,
            stride,
            len,
        }
    }

    /// Whole slice as a stride-1 line.
    pub fn contiguous(data: &'a [f32]) -> Self {
        Self::new(data, 0, 1, data.len())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> f32 {
        assert!(i < self.len, "index {i} past line of length {}", self.len);
        self.data[self.base + i * self.stride]
    }
}

/// Writable strided line.
pub struct LineViewMut<'a> {
    data: &'a mut [f32],
    base: usize,
    stride: usize,
    len: usize,
}

impl<'a> LineViewMut<'a> {
    /// Panics if the last element would fall outside `data`.
    pub fn new(data: &'a mut [f32], base: usize, stride: usize, len: usize) -> Self {
        assert_line_fits(data.len(), base, stride, len);
        LineViewMut {
            data,
            base,
            stride,
            len,
        }
    }

    pub fn contiguous(data: &'a mut [f32]) -> Self {
        let len = data.len();
        Self::new(data, 0, 1, len)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn get(&self, i: usize) -> f32 {
        assert!(i < self.len, "index {i} past line of length {}", self.len);
        self.data[self.base + i * self.stride]
    }

    #[inline]
    pub fn set(&mut self, i: usize, value: f32) {
        assert!(i < self.len, "index {i} past line of length {}", self.len);
        self.data[self.base + i * self.stride] = value;
    }

    /// Reborrow as a read-only view of the same line.
    pub fn as_view(&self) -> LineView<'_> {
        LineView {
            data: &*self.data,
            base: self.base,
            stride: self.stride,
            len: self.len,
        }
    }
}

fn assert_line_fits(data_len: usize, base: usize, stride: usize, len: usize) {
    if len > 0 {
        let last = base + (len - 1) * stride;
        assert!(
            last < data_len,
            "strided line out of range: base {base}, stride {stride}, len {len}, buffer {data_len}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_walks_axes() {
        // 4x3x2 buffer holding its own linear index
        let data: Vec<f32> = (0..24).map(|i| i as f32).collect();

        let x_line = LineView::new(&data, 5, 1, 4);
        assert_eq!(x_line.get(0), 5.0);
        assert_eq!(x_line.get(3), 8.0);

        let y_line = LineView::new(&data, 1, 4, 3);
        assert_eq!(y_line.get(2), 9.0);

        let z_line = LineView::new(&data, 2, 12, 2);
        assert_eq!(z_line.get(1), 14.0);
    }

    #[test]
    fn test_mut_view_only_touches_its_line() {
        let mut data = vec![0.0f32; 12];
        {
            let mut line = LineViewMut::new(&mut data, 1, 4, 3);
            for i in 0..line.len() {
                line.set(i, 1.0);
            }
            assert_eq!(line.as_view().get(2), 1.0);
        }
        let touched: Vec<usize> = (0..12).filter(|&i| data[i] != 0.0).collect();
        assert_eq!(touched, vec![1, 5, 9]);
    }

    #[test]
    #[should_panic(expected = "strided line out of range")]
    fn test_line_past_end_panics() {
        let data = vec![0.0f32; 8];
        let _ = LineView::new(&data, 1, 4, 3);
    }

    #[test]
    #[should_panic(expected = "past line of length")]
    fn test_get_past_line_panics() {
        // The buffer is long enough, the view is not
        let data = vec![0.0f32; 16];
        let line = LineView::new(&data, 0, 1, 4);
        let _ = line.get(4);
    }

    #[test]
    fn test_empty_line_is_allowed() {
        let data: Vec<f32> = Vec::new();
        assert!(LineView::new(&data, 0, 1, 0).is_empty());
    }
}
