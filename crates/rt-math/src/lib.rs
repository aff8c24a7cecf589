//! Numeric support functions for the `simdjs` vector types.
//!
//! This provides the ECMAScript numeric coercions used when casting values into vector lanes
//! (see [`to_int32()`] and friends), the range-checked narrowing used by lane conversions, and the
//! float lane operations whose semantics differ from Rust's own [`f32`] methods.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![deny(missing_debug_implementations)]
#![deny(missing_docs)]
#![deny(unreachable_pub)]
#![forbid(unsafe_code)]
#![deny(clippy::std_instead_of_core)]

#[cfg(feature = "std")]
extern crate std;

mod coerce;
mod display;
mod float;
mod narrow;

pub use coerce::{
    to_int16, to_int32, to_int8, to_integer_or_infinity, to_length, to_uint16, to_uint32,
    to_uint8, MAX_SAFE_INTEGER,
};
pub use display::NumberDisplay;
pub use float::{
    f32_max, f32_max_num, f32_min, f32_min_num, reciprocal_approximation,
    reciprocal_sqrt_approximation,
};
pub use narrow::{
    i16_narrow, i16_trunc_f32, i32_narrow, i32_trunc_f32, i8_narrow, i8_trunc_f32, saturate,
    u16_narrow, u16_trunc_f32, u32_narrow, u32_trunc_f32, u8_narrow, u8_trunc_f32,
    LaneConversionError,
};
