use crate::{BoundsCheck, BoundsCheckError, Buffer};
use alloc::{boxed::Box, vec::Vec};
use core::cell::Cell;

/// A fixed-length raw byte buffer that can be detached.
///
/// Once detached, the buffer reports a length of zero and every access fails.
pub struct ArrayBuffer {
    bytes: Box<[Cell<u8>]>,
    detached: Cell<bool>,
}

impl ArrayBuffer {
    /// Allocates a zero-filled buffer of `len` bytes.
    pub fn new(len: usize) -> Self {
        Self {
            bytes: core::iter::repeat_with(|| Cell::new(0)).take(len).collect(),
            detached: Cell::new(false),
        }
    }

    /// Allocates a buffer containing a copy of the given bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().map(Cell::new).collect(),
            detached: Cell::new(false),
        }
    }

    /// Returns `true` if [`ArrayBuffer::detach()`] was called.
    pub fn is_detached(&self) -> bool {
        self.detached.get()
    }

    /// Detaches the buffer, making its contents inaccessible.
    pub fn detach(&self) {
        self.detached.set(true);
        for b in self.bytes.iter() {
            b.set(0);
        }
    }

    /// Copies the contents of the buffer, or returns an empty vector if it is detached.
    pub fn to_vec(&self) -> Vec<u8> {
        if self.is_detached() {
            Vec::new()
        } else {
            self.bytes.iter().map(Cell::get).collect()
        }
    }

    fn contents(&self) -> BoundsCheck<&[Cell<u8>]> {
        if self.is_detached() {
            Err(BoundsCheckError)
        } else {
            Ok(&self.bytes)
        }
    }
}

impl Buffer for ArrayBuffer {
    fn byte_len(&self) -> usize {
        if self.is_detached() {
            0
        } else {
            self.bytes.len()
        }
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) -> BoundsCheck<()> {
        Buffer::copy_to_slice(self.contents()?, offset, dst)
    }

    fn copy_from_slice(&self, offset: usize, src: &[u8]) -> BoundsCheck<()> {
        Buffer::copy_from_slice(self.contents()?, offset, src)
    }
}

impl core::fmt::Debug for ArrayBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ArrayBuffer")
            .field("byte_len", &self.byte_len())
            .field("detached", &self.is_detached())
            .finish_non_exhaustive()
    }
}
