//! Provides helpers for bounded byte copies and wrap-around slice access.

/// Copy as many bytes as possible from one slice to another.
///
/// Returns the number of bytes copied.
#[inline]
pub(crate) fn copy(src: &[u8], dest: &mut [u8]) -> usize {
    let len = src.len().min(dest.len());
    dest[..len].copy_from_slice(&src[..len]);
    len
}

/// Extension trait for slices for addressing spans that wrap around the end
/// of the slice.
///
/// A span is given as a starting index and a length instead of a pair of
/// indices so that both an empty span and a span covering the entire slice
/// can be expressed. Callers must keep `start` within the slice and `len` no
/// greater than the slice length.
pub(crate) trait WrappingSlice {
    /// Gets the span of `len` bytes beginning at `start` as a pair of slices,
    /// wrapping around the end. The second slice is empty if the span is
    /// contiguous.
    fn wrapping_span(&self, start: usize, len: usize) -> (&[u8], &[u8]);

    /// Gets the span of `len` bytes beginning at `start` as a pair of mutable
    /// slices, wrapping around the end.
    fn wrapping_span_mut(&mut self, start: usize, len: usize) -> (&mut [u8], &mut [u8]);
}

impl WrappingSlice for [u8] {
    fn wrapping_span(&self, start: usize, len: usize) -> (&[u8], &[u8]) {
        if start + len <= self.len() {
            (&self[start..start + len], &[])
        } else {
            let wrapped = start + len - self.len();
            (&self[start..], &self[..wrapped])
        }
    }

    fn wrapping_span_mut(&mut self, start: usize, len: usize) -> (&mut [u8], &mut [u8]) {
        if start + len <= self.len() {
            (&mut self[start..start + len], &mut [])
        } else {
            let wrapped = start + len - self.len();
            let (head, tail) = self.split_at_mut(start);
            (tail, &mut head[..wrapped])
        }
    }
}
