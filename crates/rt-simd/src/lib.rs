//! Implements the SIMD.js vector types: `Float32x4`, the signed and unsigned integer vectors
//! `Int32x4` through `Uint8x16`, and the boolean vectors `Bool32x4`, `Bool16x8`, and `Bool8x16`.
//!
//! Every vector type is described by a [`SimdType`], which provides the lane-wise operations as
//! methods. Vectors themselves are [`SimdValue`]s, which are never modified after they are
//! constructed.
//!
//! ```
//! use simdjs_rt_simd::{SimdType, SimdValue};
//!
//! let a = SimdValue::int8x16([127; 16]);
//! let b = SimdValue::int8x16([1; 16]);
//! let wrapped = SimdType::Int8x16.add(&a, &b)?;
//! let saturated = SimdType::Int8x16.add_saturate(&a, &b)?;
//! assert_eq!(wrapped.to_int8x16(), Some([-128; 16]));
//! assert_eq!(saturated.to_int8x16(), Some([127; 16]));
//! # Ok::<_, simdjs_rt_simd::Error>(())
//! ```
//!
//! # Builtin Functions
//!
//! The [`Builtin`] functions provide the calling convention used by scripts, taking and returning
//! [`Value`]s. Each vector type only provides some of the builtins, which can be looked up by name
//! with [`SimdType::builtin()`].
//!
//! If the `tracing` feature is enabled, calls to builtins emit [`tracing`] events with the target
//! `simdjs::builtins`.
//!
//! [`tracing`]: https://docs.rs/tracing

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

extern crate alloc;

mod builtins;
mod cast;
mod cfg;
mod descriptor;
mod display;
mod memory;
mod ops;
mod value;
mod vector;

pub use builtins::{simd_types, Builtin, BuiltinFunction, PrototypeBuiltin};
pub use cast::{Lane, Scalar};
pub use descriptor::{LaneKind, LaneWidth, NotFoundError, SimdType};
pub use display::{DefaultLocale, LocaleDisplay, LocaleFormat};
pub use memory::{load_from_buffer, store_to_buffer};
pub use ops::to_lane_index;
pub use simdjs_rt_core::{Error, ErrorKind, Result};
pub use value::{Object, Value};
pub use vector::SimdValue;
