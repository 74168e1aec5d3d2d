use std::fmt;
use std::io::{self, Read, Write};

use thiserror::Error;

use crate::arrays::{self, WrappingSlice};

/// Error returned when a buffer is constructed with zero capacity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("ring buffer capacity must be at least one byte")]
pub struct CapacityError;

/// Fixed-capacity ring buffer for bytes.
///
/// Bytes are appended in bulk at the write cursor and removed in bulk from
/// the front at the read cursor, first in, first out. Both cursors wrap
/// around the end of the backing array, so space freed by reads is reused
/// without moving any stored bytes. The capacity is chosen at construction
/// and never changes; once the buffer is full, no more bytes are accepted
/// until some are read.
#[derive(Clone)]
pub struct RingBuffer {
    /// Backing array where bytes are stored. Its length is the capacity and
    /// never changes after construction.
    array: Box<[u8]>,

    /// Index of the oldest stored byte. Always less than the capacity; wraps
    /// back to zero instead of running past the end of the array.
    read_pos: usize,

    /// Index where the next filled byte will be placed. Wraps the same way
    /// as `read_pos`.
    write_pos: usize,

    /// Number of stored bytes. The cursors alone cannot tell an empty buffer
    /// from a full one, since they coincide in both states; this count is
    /// what disambiguates them.
    len: usize,
}

impl RingBuffer {
    /// Create a new buffer holding at most `capacity` bytes.
    ///
    /// The backing array is allocated once, up front. A capacity of zero is
    /// rejected with [`CapacityError`].
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError);
        }

        Ok(Self {
            array: vec![0; capacity].into_boxed_slice(),
            read_pos: 0,
            write_pos: 0,
            len: 0,
        })
    }

    /// Returns the fixed capacity of the buffer.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.array.len()
    }

    /// Returns the number of bytes available to read.
    #[inline]
    pub fn data_available(&self) -> usize {
        self.len
    }

    /// Returns the number of bytes that can be filled before the buffer is
    /// full.
    ///
    /// Together with [`data_available`] this always sums to the capacity.
    ///
    /// [`data_available`]: Self::data_available
    #[inline]
    pub fn capacity_available(&self) -> usize {
        self.array.len() - self.len
    }

    /// Returns `true` if the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no more bytes can be filled until some are read.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.array.len()
    }

    /// Copy bytes from `src` into the buffer until either the buffer is full
    /// or the source is exhausted.
    ///
    /// The free region may wrap around the end of the backing array, in
    /// which case the transfer is performed as two contiguous copies.
    /// Returns the number of bytes copied, which is zero when the buffer is
    /// already full or `src` is empty. The rest of `src` is left untouched.
    pub fn fill(&mut self, src: &[u8]) -> usize {
        // We can only accept as many bytes as there is room for.
        let count = src.len().min(self.capacity_available());
        if count == 0 {
            return 0;
        }

        let slices = self.array.wrapping_span_mut(self.write_pos, count);

        let mut filled = arrays::copy(src, slices.0);
        filled += arrays::copy(&src[filled..], slices.1);
        debug_assert_eq!(filled, count);

        self.write_pos = (self.write_pos + count) % self.array.len();
        self.len += count;
        count
    }

    /// Copy bytes from the front of the buffer into `dest` and consume them,
    /// up to the length of the destination.
    ///
    /// Bytes come out in the order they were filled in. Like [`fill`], a
    /// stored region that wraps around the end of the backing array is
    /// handled as two contiguous copies. Returns the number of bytes copied,
    /// which is zero when the buffer is empty or `dest` has no room.
    ///
    /// [`fill`]: Self::fill
    pub fn read(&mut self, dest: &mut [u8]) -> usize {
        let count = self.copy_to(dest);
        self.consume(count)
    }

    /// Copy bytes from the front of the buffer into `dest` without consuming
    /// them.
    ///
    /// Returns the number of bytes copied. If there are fewer bytes in the
    /// buffer than the length of `dest`, then only part of `dest` will be
    /// written to.
    pub fn copy_to(&self, dest: &mut [u8]) -> usize {
        if self.is_empty() {
            return 0;
        }

        let slices = self.array.wrapping_span(self.read_pos, self.len);

        let mut copied = arrays::copy(slices.0, dest);
        copied += arrays::copy(slices.1, &mut dest[copied..]);

        copied
    }

    /// Consume up to `count` bytes from the front of the buffer and discard
    /// them.
    ///
    /// Returns the number of bytes consumed, which may be less than `count`
    /// if `count` was greater than the number of bytes in the buffer.
    ///
    /// This operation has a runtime cost of `O(1)`.
    pub fn consume(&mut self, count: usize) -> usize {
        // We can only consume as many bytes as are in the buffer.
        let count = count.min(self.len);
        self.read_pos = (self.read_pos + count) % self.array.len();
        self.len -= count;
        count
    }

    /// Remove all bytes from the buffer.
    ///
    /// Only the cursors are reset; the backing array is not zeroed.
    pub fn clear(&mut self) {
        self.read_pos = 0;
        self.write_pos = 0;
        self.len = 0;
    }
}

impl fmt::Debug for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("read_pos", &self.read_pos)
            .field("write_pos", &self.write_pos)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}

impl Read for RingBuffer {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(RingBuffer::read(self, buf))
    }
}

impl Write for RingBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(self.fill(buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
