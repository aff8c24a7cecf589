//! Conversions between vector types, either by lane value or by bit pattern.

use crate::{Lane, Scalar, SimdType, SimdValue};
use simdjs_rt_core::{Error, Result};
use simdjs_rt_math::{self as math, LaneConversionError};

fn out_of_range(error: LaneConversionError) -> Error {
    match error {
        LaneConversionError::NotANumber => {
            Error::range_error("NaN cannot be converted to an integer lane")
        }
        LaneConversionError::OutOfRange => {
            Error::range_error("value is out of range for the lane type")
        }
    }
}

impl SimdType {
    /// Checks if values can be converted lane by lane from the `source` type.
    ///
    /// The types must differ, have the same number of lanes, and must not be boolean vectors.
    pub fn can_convert_from(self, source: SimdType) -> bool {
        source != self
            && source.lane_count() == self.lane_count()
            && !source.is_bool()
            && !self.is_bool()
    }

    fn lane_from_float(self, value: f32) -> core::result::Result<Scalar, LaneConversionError> {
        Ok(match self {
            Self::Int32x4 => math::i32_trunc_f32(value)?.into(),
            Self::Uint32x4 => math::u32_trunc_f32(value)?.into(),
            Self::Int16x8 => math::i16_trunc_f32(value)?.into(),
            Self::Uint16x8 => math::u16_trunc_f32(value)?.into(),
            Self::Int8x16 => math::i8_trunc_f32(value)?.into(),
            Self::Uint8x16 => math::u8_trunc_f32(value)?.into(),
            Self::Float32x4 | Self::Bool32x4 | Self::Bool16x8 | Self::Bool8x16 => value.into(),
        })
    }

    #[allow(clippy::cast_precision_loss)]
    fn lane_from_int(self, value: i64) -> core::result::Result<Scalar, LaneConversionError> {
        Ok(match self {
            Self::Int32x4 => math::i32_narrow(value)?.into(),
            Self::Uint32x4 => math::u32_narrow(value)?.into(),
            Self::Int16x8 => math::i16_narrow(value)?.into(),
            Self::Uint16x8 => math::u16_narrow(value)?.into(),
            Self::Int8x16 => math::i8_narrow(value)?.into(),
            Self::Uint8x16 => math::u8_narrow(value)?.into(),
            Self::Float32x4 | Self::Bool32x4 | Self::Bool16x8 | Self::Bool8x16 => {
                Scalar::F32(value as f32)
            }
        })
    }

    /// Converts the value of each lane of a `source` vector into a lane of this type.
    ///
    /// Float lanes are truncated toward zero when converted to integers.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if [`SimdType::can_convert_from()`] returns `false` for the source
    /// type, or if `value` is not of the source type. Returns a `RangeError` if any lane is *NaN*
    /// or does not fit into a lane of this type.
    pub fn convert_from(self, source: SimdType, value: &SimdValue) -> Result<SimdValue> {
        if !self.can_convert_from(source) {
            return Err(Error::type_error("invalid source type for lane conversion"));
        }

        let value = source.operand(value)?;
        SimdValue::try_from_fn(self, |i| {
            let scalar = match value.get_lane(i) {
                Lane::Float(f) => self.lane_from_float(f).map_err(out_of_range)?,
                Lane::Int(bits) => self
                    .lane_from_int(source.int_lane_value(bits))
                    .map_err(out_of_range)?,
                Lane::Bool(_) => return Err(super::unsupported()),
            };
            Ok(self.cast(scalar))
        })
    }

    /// Reinterprets the bits of a `source` vector as a vector of this type.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if the `source` is this type, if either type is a boolean vector, or
    /// if `value` is not of the source type.
    ///
    /// # Panics
    ///
    /// Panics if the types do not have the same size.
    pub fn convert_bits_from(self, source: SimdType, value: &SimdValue) -> Result<SimdValue> {
        if self.is_bool() || source.is_bool() {
            return Err(super::unsupported());
        } else if source == self {
            return Err(Error::type_error("invalid source type for lane conversion"));
        }

        let value = source.operand(value)?;

        assert_eq!(
            self.byte_size(),
            source.byte_size(),
            "cannot reinterpret {source} as {self}"
        );

        let mut block = [0u8; 16];
        let block = core::cell::Cell::from_mut(&mut block[..]).as_slice_of_cells();
        crate::memory::store_to_buffer(block, 0, value, source.lane_count())?;
        Ok(crate::memory::load_from_buffer(
            block,
            0,
            self,
            self.lane_count(),
        )?)
    }
}
