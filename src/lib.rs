//! Fixed-capacity ring buffer for bytes.
//!
//! A [`RingBuffer`] owns a single byte array of the size chosen at
//! construction and moves bytes through it first in, first out. Bulk
//! transfers wrap around the end of the array transparently, so space freed
//! by reads is reused without ever moving stored bytes or reallocating.
//!
//! ```
//! use torc::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(8)?;
//!
//! assert_eq!(buffer.fill(b"hello"), 5);
//! assert_eq!(buffer.data_available(), 5);
//!
//! let mut dest = [0; 8];
//! let count = buffer.read(&mut dest);
//! assert_eq!(&dest[..count], b"hello");
//! # Ok::<(), torc::CapacityError>(())
//! ```

mod arrays;
pub mod buffer;

pub use crate::buffer::{CapacityError, RingBuffer};
