//! Saturating arithmetic and shifts on integer lanes.

use crate::{SimdType, SimdValue, Value};
use simdjs_rt_core::Result;
use simdjs_rt_math as math;

impl SimdType {
    fn saturating<F>(self, a: &SimdValue, b: &SimdValue, op: F) -> Result<SimdValue>
    where
        F: Fn(i64, i64) -> i64,
    {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        let (min, max) = self.int_range().ok_or_else(super::unsupported)?;
        a.int_zip(b, |x, y| {
            let exact = op(self.int_lane_value(x), self.int_lane_value(y));
            math::saturate(exact, min, max)
        })
    }

    /// Adds each pair of integer lanes, clamping the sum to the range of the lane type.
    pub fn add_saturate(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.saturating(a, b, |x, y| x + y)
    }

    /// Subtracts each lane of `b` from the corresponding lane of `a`, clamping the difference to
    /// the range of the lane type.
    pub fn sub_saturate(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.saturating(a, b, |x, y| x - y)
    }

    /// Converts a shift amount with `ToUint32`, then masks it to the number of bits in a lane.
    fn shift_amount(self, bits: &Value) -> Result<u32> {
        Ok(math::to_uint32(bits.to_number()?) % self.lane_width().bits())
    }

    /// Shifts the bits of each integer lane to the left.
    ///
    /// The shift amount is taken modulo the number of bits in a lane.
    pub fn shift_left_by_scalar(self, a: &SimdValue, bits: &Value) -> Result<SimdValue> {
        let a = self.operand(a)?;
        let bits = self.shift_amount(bits)?;
        a.int_map(|x| i64::from(x) << bits)
    }

    /// Shifts the bits of each integer lane to the right.
    ///
    /// Signed lanes are shifted arithmetically, and unsigned lanes are shifted logically. The
    /// shift amount is taken modulo the number of bits in a lane.
    pub fn shift_right_by_scalar(self, a: &SimdValue, bits: &Value) -> Result<SimdValue> {
        let a = self.operand(a)?;
        let bits = self.shift_amount(bits)?;
        if self.is_unsigned() {
            a.int_map(|x| i64::from(self.unsigned_lane(x) >> bits))
        } else {
            a.int_map(|x| i64::from(x >> bits))
        }
    }
}
