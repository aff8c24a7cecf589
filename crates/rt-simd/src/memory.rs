//! Moves vector lanes into and out of byte buffers and typed arrays.
//!
//! Lanes are laid out back to back in little-endian byte order. Boolean lanes are written as
//! lane masks, with every bit set for `true`.

use crate::{Lane, LaneWidth, Scalar, SimdType, SimdValue, Value};
use simdjs_rt_core::{BoundsCheck, BoundsCheckError, Error, Result};
use simdjs_rt_math as math;
use simdjs_rt_memory::{Buffer, TypedArray};

fn check_lanes<B: Buffer + ?Sized>(
    buffer: &B,
    byte_offset: usize,
    ty: SimdType,
    length: usize,
) -> BoundsCheck<()> {
    assert!(
        length <= ty.lane_count(),
        "cannot access {length} lanes of {ty}"
    );

    match byte_offset.checked_add(ty.bytes_per_lane() * length) {
        Some(end) if end <= buffer.byte_len() => Ok(()),
        _ => Err(BoundsCheckError),
    }
}

/// Reads the first `length` lanes of a vector of the given type from the `buffer`, starting at
/// the `byte_offset`. The remaining lanes are zero or `false`.
///
/// # Errors
///
/// Returns an error if the lanes do not fit in the `buffer`. Nothing is read in that case.
///
/// # Panics
///
/// Panics if `length` is greater than the lane count of `ty`.
pub fn load_from_buffer<B: Buffer + ?Sized>(
    buffer: &B,
    byte_offset: usize,
    ty: SimdType,
    length: usize,
) -> BoundsCheck<SimdValue> {
    check_lanes(buffer, byte_offset, ty, length)?;

    SimdValue::try_from_fn(ty, |i| {
        if i >= length {
            return Ok(ty.cast(Scalar::I32(0)));
        }

        let offset = byte_offset + i * ty.bytes_per_lane();
        if ty.is_float() {
            return Ok(Lane::Float(buffer.f32_load(offset)?));
        }

        let bits = match ty.lane_width() {
            LaneWidth::W8 => i32::from(buffer.i8_load(offset)?),
            LaneWidth::W16 => i32::from(buffer.i16_load(offset)?),
            LaneWidth::W32 => buffer.i32_load(offset)?,
        };

        Ok(if ty.is_bool() {
            Lane::Bool(bits != 0)
        } else {
            Lane::Int(bits)
        })
    })
}

/// Writes the first `length` lanes of the `value` into the `buffer`, starting at the
/// `byte_offset`.
///
/// # Errors
///
/// Returns an error if the lanes do not fit in the `buffer`. Nothing is written in that case.
///
/// # Panics
///
/// Panics if `length` is greater than the lane count of the `value`.
pub fn store_to_buffer<B: Buffer + ?Sized>(
    buffer: &B,
    byte_offset: usize,
    value: &SimdValue,
    length: usize,
) -> BoundsCheck<()> {
    let ty = value.simd_type();
    check_lanes(buffer, byte_offset, ty, length)?;

    for (i, lane) in value.lanes().take(length).enumerate() {
        let offset = byte_offset + i * ty.bytes_per_lane();
        let bits = match lane {
            Lane::Float(f) => {
                buffer.f32_store(offset, f)?;
                continue;
            }
            Lane::Int(bits) => bits,
            Lane::Bool(b) => -i32::from(b),
        };

        // Integer lanes are sign-extended, so the low bytes hold the lane.
        buffer.copy_from_slice(offset, &bits.to_le_bytes()[..ty.bytes_per_lane()])?;
    }

    Ok(())
}

impl SimdType {
    /// Validates the arguments of a `load` or `store`, returning the typed array and the byte
    /// offset into it.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    fn typed_array_index<'a>(
        self,
        tarray: &'a Value,
        index: &Value,
        length: usize,
    ) -> Result<(&'a TypedArray, usize)> {
        let Value::TypedArray(array) = tarray else {
            return Err(Error::type_error("TypedArray expected"));
        };

        if array.is_detached() {
            return Err(Error::type_error("detached buffer"));
        }

        let number = index.to_number()?;
        let indx = math::to_length(number);
        if !matches!(index, Value::Null) && number != indx {
            return Err(Error::range_error("invalid index"));
        }

        // `indx` is at most 2^53 - 1, so the products are exact.
        let byte_index = indx * array.kind().bytes_per_element() as f64;
        let byte_count = (self.bytes_per_lane() * length) as f64;
        if byte_index + byte_count > array.byte_length() as f64 {
            return Err(Error::range_error("index out of bounds"));
        }

        Ok((array, byte_index as usize))
    }

    /// Implements the `load` family of operations, reading `length` lanes from the elements of a
    /// typed array starting at the given element `index`.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `tarray` is not a [`Value::TypedArray`] or its buffer was
    /// detached. Returns a `RangeError` if the `index` is not an integer, or if the lanes would
    /// extend past the end of the typed array.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero or greater than the lane count.
    pub fn load(self, tarray: &Value, index: &Value, length: usize) -> Result<SimdValue> {
        assert_ne!(length, 0, "cannot load zero lanes");
        if self.is_bool() {
            return Err(crate::ops::unsupported());
        }

        let (array, byte_index) = self.typed_array_index(tarray, index, length)?;
        Ok(load_from_buffer(array, byte_index, self, length)?)
    }

    /// Implements the `store` family of operations, writing the first `length` lanes of `value`
    /// into the elements of a typed array starting at the given element `index`.
    ///
    /// Returns the stored vector.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `tarray` is not a [`Value::TypedArray`] or its buffer was
    /// detached, or if `value` is not a vector of this type. Returns a `RangeError` if the `index`
    /// is not an integer, or if the lanes would extend past the end of the typed array.
    ///
    /// # Panics
    ///
    /// Panics if `length` is zero or greater than the lane count.
    pub fn store(
        self,
        tarray: &Value,
        index: &Value,
        value: &Value,
        length: usize,
    ) -> Result<SimdValue> {
        assert_ne!(length, 0, "cannot store zero lanes");
        if self.is_bool() {
            return Err(crate::ops::unsupported());
        }

        if !matches!(tarray, Value::TypedArray(_)) {
            return Err(Error::type_error("TypedArray expected"));
        }

        let value = *self.operand_value(value)?;
        let (array, byte_index) = self.typed_array_index(tarray, index, length)?;
        store_to_buffer(array, byte_index, &value, length)?;
        Ok(value)
    }
}
