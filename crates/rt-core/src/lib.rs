//! Provides the foundation for the `simdjs` runtime crates: the error types raised by vector
//! operations and the result types shared between them.
//!
//! The `simdjs-rt-*` crates each provide support for a different aspect of the SIMD.js vector
//! types.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::cast_possible_truncation)]
#![deny(clippy::exhaustive_enums)]
#![deny(clippy::exhaustive_structs)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod error;

pub use error::{Error, ErrorKind, RangeError, Result, TypeError};

/// Error type used when a byte offset into a buffer was out of bounds.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct BoundsCheckError;

impl core::fmt::Display for BoundsCheckError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("out-of-bounds byte offset")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoundsCheckError {}

/// Result type used for functions that need to indicate if a byte offset is out of bounds.
pub type BoundsCheck<T> = core::result::Result<T, BoundsCheckError>;
