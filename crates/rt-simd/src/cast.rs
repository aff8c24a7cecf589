//! Converts scalars into the lane representation of each vector type.

use crate::{LaneWidth, SimdType, Value};
use simdjs_rt_core::Result;
use simdjs_rt_math as math;

/// The value of a single lane of a [`SimdValue`].
///
/// Integer lanes hold the lane's bits sign-extended to an [`i32`], even for unsigned vector
/// types. Use [`SimdType::unsigned_lane()`] to read the unsigned value.
///
/// [`SimdValue`]: crate::SimdValue
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum Lane {
    #[allow(missing_docs)]
    Int(i32),
    #[allow(missing_docs)]
    Float(f32),
    #[allow(missing_docs)]
    Bool(bool),
}

/// A primitive value that can be cast into a [`Lane`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
#[allow(missing_docs)]
pub enum Scalar {
    I32(i32),
    U32(u32),
    I16(i16),
    U16(u16),
    I8(i8),
    U8(u8),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl Scalar {
    /// Widens the scalar to a Number.
    pub fn to_f64(self) -> f64 {
        match self {
            Self::I32(i) => f64::from(i),
            Self::U32(u) => f64::from(u),
            Self::I16(i) => f64::from(i),
            Self::U16(u) => f64::from(u),
            Self::I8(i) => f64::from(i),
            Self::U8(u) => f64::from(u),
            Self::F32(f) => f64::from(f),
            Self::F64(f) => f,
            Self::Bool(b) => f64::from(u8::from(b)),
        }
    }

    /// Implements the `ToBoolean` conversion.
    pub fn to_boolean(self) -> bool {
        match self {
            Self::Bool(b) => b,
            Self::F32(f) => !(f == 0.0 || f.is_nan()),
            Self::F64(f) => !(f == 0.0 || f.is_nan()),
            other => other.to_f64() != 0.0,
        }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn to_f32(self) -> f32 {
        match self {
            Self::F32(f) => f,
            Self::F64(f) => f as f32,
            Self::I32(i) => i as f32,
            Self::U32(u) => u as f32,
            other => other.to_f64() as f32,
        }
    }
}

macro_rules! scalar_from {
    ($($num:ty => $case:ident),*) => {$(
        impl From<$num> for Scalar {
            fn from(value: $num) -> Self {
                Self::$case(value)
            }
        }
    )*};
}

scalar_from! {
    i32 => I32, u32 => U32, i16 => I16, u16 => U16, i8 => I8, u8 => U8,
    f32 => F32, f64 => F64, bool => Bool
}

impl SimdType {
    /// Casts a scalar into a lane of this vector type.
    ///
    /// Integer casts wrap around silently: a Number is truncated toward zero and reduced modulo
    /// `2^N`, while an integer scalar that is already as wide as the lane keeps its bits.
    pub fn cast(self, scalar: Scalar) -> Lane {
        let width = self.lane_width();
        match self {
            Self::Float32x4 => Lane::Float(scalar.to_f32()),
            Self::Bool32x4 | Self::Bool16x8 | Self::Bool8x16 => Lane::Bool(scalar.to_boolean()),
            Self::Int32x4 | Self::Uint32x4 => Lane::Int(match scalar {
                Scalar::I32(i) => i,
                Scalar::U32(u) => width.wrap(i64::from(u)),
                other if self.is_unsigned() => {
                    width.wrap(i64::from(math::to_uint32(other.to_f64())))
                }
                other => math::to_int32(other.to_f64()),
            }),
            Self::Int16x8 | Self::Uint16x8 => Lane::Int(match scalar {
                Scalar::I16(i) => i32::from(i),
                Scalar::U16(u) => width.wrap(i64::from(u)),
                other if self.is_unsigned() => i32::from(math::to_uint16(other.to_f64())),
                other => i32::from(math::to_int16(other.to_f64())),
            }),
            Self::Int8x16 | Self::Uint8x16 => Lane::Int(match scalar {
                Scalar::I8(i) => i32::from(i),
                Scalar::U8(u) => width.wrap(i64::from(u)),
                other if self.is_unsigned() => i32::from(math::to_uint8(other.to_f64())),
                other => i32::from(math::to_int8(other.to_f64())),
            }),
        }
        .normalize(width)
    }

    /// Converts a host value into a lane of this vector type.
    ///
    /// Boolean vector types use `ToBoolean`, while every other type first applies `ToNumber`.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if the `value` cannot be converted to a Number.
    pub fn cast_value(self, value: &Value) -> Result<Lane> {
        if self.is_bool() {
            Ok(Lane::Bool(value.to_boolean()))
        } else {
            Ok(self.cast(Scalar::F64(value.to_number()?)))
        }
    }

    /// Interprets an integer lane of this vector type as an unsigned integer.
    pub fn unsigned_lane(self, lane: i32) -> u32 {
        self.lane_width().zero_extend(lane)
    }

    /// Gets the numeric value of an integer lane, taking the signedness of this vector type into
    /// account.
    pub fn int_lane_value(self, lane: i32) -> i64 {
        if self.is_unsigned() {
            i64::from(self.unsigned_lane(lane))
        } else {
            i64::from(lane)
        }
    }
}

impl Lane {
    /// Sign-extends integer lanes from the given width.
    fn normalize(self, width: LaneWidth) -> Self {
        match self {
            Self::Int(i) => Self::Int(width.wrap(i64::from(i))),
            other => other,
        }
    }
}
