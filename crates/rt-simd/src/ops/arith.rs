//! Arithmetic operations.
//!
//! Integer arithmetic wraps around at the lane width. Float lanes use IEEE single precision.

use crate::{LaneKind, SimdType, SimdValue};
use simdjs_rt_core::Result;
use simdjs_rt_math as math;

impl SimdType {
    /// Adds each pair of lanes.
    pub fn add(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Float => a.float_zip(b, |x, y| x + y),
            _ => a.int_zip(b, |x, y| i64::from(x) + i64::from(y)),
        }
    }

    /// Subtracts each lane of `b` from the corresponding lane of `a`.
    pub fn sub(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Float => a.float_zip(b, |x, y| x - y),
            _ => a.int_zip(b, |x, y| i64::from(x) - i64::from(y)),
        }
    }

    /// Multiplies each pair of lanes.
    pub fn mul(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Float => a.float_zip(b, |x, y| x * y),
            _ => a.int_zip(b, |x, y| i64::from(x) * i64::from(y)),
        }
    }

    /// Divides each lane of `a` by the corresponding lane of `b`. Only float lanes are supported.
    pub fn div(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_zip(self.operand(b)?, |x, y| x / y)
    }

    /// Negates each lane.
    pub fn neg(self, a: &SimdValue) -> Result<SimdValue> {
        let a = self.operand(a)?;
        match self.kind() {
            LaneKind::Float => a.float_map(|x| -x),
            _ => a.int_map(|x| -i64::from(x)),
        }
    }

    /// Computes the absolute value of each float lane.
    pub fn abs(self, a: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_map(<f32 as num_traits::Float>::abs)
    }

    /// Computes the square root of each float lane.
    pub fn sqrt(self, a: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_map(<f32 as num_traits::Float>::sqrt)
    }

    /// Takes the smaller of each pair of float lanes, propagating *NaN*.
    pub fn min(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_zip(self.operand(b)?, math::f32_min)
    }

    /// Takes the larger of each pair of float lanes, propagating *NaN*.
    pub fn max(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_zip(self.operand(b)?, math::f32_max)
    }

    /// Like [`SimdType::min()`], but a lane that is *NaN* in only one operand takes the other
    /// operand's value.
    pub fn min_num(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_zip(self.operand(b)?, math::f32_min_num)
    }

    /// Like [`SimdType::max()`], but a lane that is *NaN* in only one operand takes the other
    /// operand's value.
    pub fn max_num(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_zip(self.operand(b)?, math::f32_max_num)
    }

    /// Approximates `1 / x` for each float lane.
    pub fn reciprocal_approximation(self, a: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?.float_map(math::reciprocal_approximation)
    }

    /// Approximates `1 / sqrt(x)` for each float lane.
    pub fn reciprocal_sqrt_approximation(self, a: &SimdValue) -> Result<SimdValue> {
        self.operand(a)?
            .float_map(math::reciprocal_sqrt_approximation)
    }
}
