//! Construction, lane access, and lane permutation.

use crate::{Scalar, SimdType, SimdValue, Value};
use simdjs_rt_core::{Error, Result};
use simdjs_rt_math as math;

/// Converts a lane index argument into a lane index less than `limit`.
///
/// The argument is converted to a Number, which must be an integer: `1.5` and `NaN` are rejected
/// rather than truncated. `-0` is accepted as lane `0`.
///
/// # Errors
///
/// Returns a `RangeError` if the index is not an integer in `0..limit`, or a `TypeError` if it
/// cannot be converted to a Number.
pub fn to_lane_index(limit: usize, lane: &Value) -> Result<usize> {
    let index = lane.to_number()?;
    let length = math::to_length(index);
    let is_integer = index == length;
    match usize::try_from(math::to_int32(index)) {
        Ok(lane) if is_integer && lane < limit => Ok(lane),
        _ => Err(Error::range_error("lane out of bounds")),
    }
}

impl SimdType {
    /// Checks that `a` is a vector of this type, returning a copy of it.
    pub fn check(self, a: &Value) -> Result<SimdValue> {
        self.operand_value(a).copied()
    }

    /// Constructs a vector, casting each of the `args` into the corresponding lane.
    ///
    /// Extra arguments are ignored, and lanes without an argument are zero or `false`.
    pub fn create(self, args: &[Value]) -> Result<SimdValue> {
        SimdValue::try_from_fn(self, |i| match args.get(i) {
            Some(arg) => self.cast_value(arg),
            None => Ok(self.cast(Scalar::I32(0))),
        })
    }

    /// Constructs a vector with every lane set to the cast `scalar`.
    pub fn splat(self, scalar: &Value) -> Result<SimdValue> {
        let lane = self.cast_value(scalar)?;
        Ok(SimdValue::from_fn(self, |_| lane))
    }

    /// Gets the value of the lane at the given index.
    ///
    /// See [`SimdValue::lane_value()`] for how lanes are converted to values.
    pub fn extract_lane(self, a: &SimdValue, lane: &Value) -> Result<Value> {
        let a = self.operand(a)?;
        let index = to_lane_index(self.lane_count(), lane)?;
        Ok(a.lane_value(index))
    }

    /// Returns a copy of `a` with the lane at the given index replaced with the cast
    /// `replacement`.
    pub fn replace_lane(
        self,
        a: &SimdValue,
        lane: &Value,
        replacement: &Value,
    ) -> Result<SimdValue> {
        let a = self.operand(a)?;
        let index = to_lane_index(self.lane_count(), lane)?;
        let replacement = self.cast_value(replacement)?;
        Ok(SimdValue::from_fn(self, |i| {
            if i == index {
                replacement
            } else {
                a.get_lane(i)
            }
        }))
    }

    /// Rearranges the lanes of `a`, where lane `i` of the result is the lane of `a` given by
    /// `lanes[i]`. Missing indices default to `0`.
    pub fn swizzle(self, a: &SimdValue, lanes: &[Value]) -> Result<SimdValue> {
        let a = self.operand(a)?;
        let count = self.lane_count();
        let indices = self.lane_indices(lanes, count)?;
        Ok(SimdValue::from_fn(self, |i| a.get_lane(indices[i])))
    }

    /// Selects lanes from `a` and `b`, where indices less than the lane count refer to `a`, and
    /// the remaining indices refer to `b`. Missing indices default to `0`.
    pub fn shuffle(self, a: &SimdValue, b: &SimdValue, lanes: &[Value]) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        let count = self.lane_count();
        let indices = self.lane_indices(lanes, count * 2)?;
        Ok(SimdValue::from_fn(self, |i| match indices[i] {
            index if index < count => a.get_lane(index),
            index => b.get_lane(index - count),
        }))
    }

    /// Validates every lane index before any lane of the result is computed.
    fn lane_indices(self, lanes: &[Value], limit: usize) -> Result<[usize; 16]> {
        let mut indices = [0; 16];
        for (index, lane) in indices.iter_mut().zip(lanes).take(self.lane_count()) {
            *index = to_lane_index(limit, lane)?;
        }
        Ok(indices)
    }
}
