//! Byte buffers and typed array views that SIMD.js vectors are loaded from and stored into.
//!
//! The [`Buffer`] trait describes a little-endian sequence of bytes that can be read and written
//! through a shared reference. [`ArrayBuffer`] and [`TypedArray`] model the host objects that
//! back the `load` and `store` operations.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

mod hex_dump;

#[cfg(feature = "alloc")]
mod array_buffer;
#[cfg(feature = "alloc")]
mod typed_array;

pub use hex_dump::HexDump;
pub use simdjs_rt_core::{BoundsCheck, BoundsCheckError};

#[cfg(feature = "alloc")]
pub use array_buffer::ArrayBuffer;
#[cfg(feature = "alloc")]
pub use typed_array::{ElementKind, InvalidViewError, TypedArray};

use core::cell::Cell;

macro_rules! unaligned_accesses {
    {
        $($num:ty : $load:ident / $store:ident;)*
    } => {$(
        fn $load<B: Buffer + ?Sized>(buf: &B, offset: usize) -> BoundsCheck<$num> {
            let mut dst = [0u8; core::mem::size_of::<$num>()];
            match buf.copy_to_slice(offset, &mut dst) {
                Ok(()) => Ok(<$num>::from_le_bytes(dst)),
                Err(e) => Err(e),
            }
        }

        fn $store<B: Buffer + ?Sized>(buf: &B, offset: usize, value: $num) -> BoundsCheck<()> {
            buf.copy_from_slice(offset, &value.to_le_bytes())
        }
    )*};
}

unaligned_accesses! {
    i16 : unaligned_i16_load / unaligned_i16_store;
    i32 : unaligned_i32_load / unaligned_i32_store;
    f32 : unaligned_f32_load / unaligned_f32_store;
    f64 : unaligned_f64_load / unaligned_f64_store;
}

/// Trait for a fixed-length sequence of bytes that can be read and written through a shared
/// reference.
///
/// Multi-byte values are always accessed in little-endian byte order, matching the byte order of
/// typed arrays on common platforms.
pub trait Buffer {
    /// Returns the number of bytes that can currently be accessed.
    fn byte_len(&self) -> usize;

    /// Copies bytes starting at the specified byte offset into the given slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the range `offset..(offset + dst.len())` is not in bounds.
    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) -> BoundsCheck<()>;

    /// Copies bytes from the given slice into the buffer starting at the specified byte offset.
    ///
    /// # Errors
    ///
    /// Returns an error if the range `offset..(offset + src.len())` is not in bounds.
    fn copy_from_slice(&self, offset: usize, src: &[u8]) -> BoundsCheck<()>;

    /// Loads the value of the byte stored at the given offset.
    fn i8_load(&self, offset: usize) -> BoundsCheck<i8> {
        let mut dst = 0u8;
        match self.copy_to_slice(offset, core::slice::from_mut(&mut dst)) {
            Ok(()) => Ok(i8::from_le_bytes([dst])),
            Err(e) => Err(e),
        }
    }

    /// Loads a 16-bit integer from the given offset.
    fn i16_load(&self, offset: usize) -> BoundsCheck<i16> {
        unaligned_i16_load(self, offset)
    }

    /// Loads a 32-bit integer from the given offset.
    fn i32_load(&self, offset: usize) -> BoundsCheck<i32> {
        unaligned_i32_load(self, offset)
    }

    /// Loads a 32-bit float from the given offset, preserving *NaN* payloads.
    fn f32_load(&self, offset: usize) -> BoundsCheck<f32> {
        unaligned_f32_load(self, offset)
    }

    /// Loads a 64-bit float from the given offset.
    fn f64_load(&self, offset: usize) -> BoundsCheck<f64> {
        unaligned_f64_load(self, offset)
    }

    /// Writes into the byte at the given offset.
    fn i8_store(&self, offset: usize, value: i8) -> BoundsCheck<()> {
        self.copy_from_slice(offset, &value.to_le_bytes())
    }

    /// Stores a 16-bit integer at the given offset.
    fn i16_store(&self, offset: usize, value: i16) -> BoundsCheck<()> {
        unaligned_i16_store(self, offset, value)
    }

    /// Stores a 32-bit integer at the given offset.
    fn i32_store(&self, offset: usize, value: i32) -> BoundsCheck<()> {
        unaligned_i32_store(self, offset, value)
    }

    /// Stores a 32-bit float at the given offset.
    fn f32_store(&self, offset: usize, value: f32) -> BoundsCheck<()> {
        unaligned_f32_store(self, offset, value)
    }

    /// Stores a 64-bit float at the given offset.
    fn f64_store(&self, offset: usize, value: f64) -> BoundsCheck<()> {
        unaligned_f64_store(self, offset, value)
    }
}

fn byte_range(offset: usize, len: usize, limit: usize) -> BoundsCheck<core::ops::Range<usize>> {
    match offset.checked_add(len) {
        Some(end) if end <= limit => Ok(offset..end),
        _ => Err(BoundsCheckError),
    }
}

impl Buffer for [Cell<u8>] {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) -> BoundsCheck<()> {
        let src = &self[byte_range(offset, dst.len(), self.len())?];
        for (d, s) in dst.iter_mut().zip(src) {
            *d = s.get();
        }
        Ok(())
    }

    fn copy_from_slice(&self, offset: usize, src: &[u8]) -> BoundsCheck<()> {
        let dst = &self[byte_range(offset, src.len(), self.len())?];
        for (d, s) in dst.iter().zip(src) {
            d.set(*s);
        }
        Ok(())
    }
}
