//! The lane-wise operations on SIMD.js vectors.
//!
//! Operations are methods on the [`SimdType`] they are invoked through. Each one checks that its
//! operands have that exact type before computing anything, and the lane storage of the operands
//! selects the integer, float, or boolean variant of the operation once per call.

mod arith;
mod bitwise;
mod compare;
mod convert;
mod integer;
mod lanes;

pub use lanes::to_lane_index;

use crate::vector::Lanes;
use crate::{SimdType, SimdValue, Value};
use simdjs_rt_core::{Error, Result};

const SIMD_TYPE_EXPECTED: &str = "SIMD type expected";
const UNSUPPORTED: &str = "operation is not supported by this SIMD type";

impl SimdType {
    /// Checks that the `operand` is a vector of this type.
    pub(crate) fn operand(self, operand: &SimdValue) -> Result<&SimdValue> {
        if operand.simd_type() == self {
            Ok(operand)
        } else {
            Err(Error::type_error(SIMD_TYPE_EXPECTED))
        }
    }

    /// Checks that the `operand` is a vector of this type, given as a script value.
    pub(crate) fn operand_value(self, operand: &Value) -> Result<&SimdValue> {
        match operand {
            Value::Simd(v) => self.operand(v),
            _ => Err(Error::type_error(SIMD_TYPE_EXPECTED)),
        }
    }
}

pub(crate) fn unsupported() -> Error {
    Error::type_error(UNSUPPORTED)
}

impl SimdValue {
    fn int_map<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(i32) -> i64,
    {
        let ty = self.simd_type();
        let width = ty.lane_width();
        match self.raw_lanes() {
            Lanes::Int(a) => {
                let mut result = [0; 16];
                for (r, a) in result.iter_mut().zip(a).take(ty.lane_count()) {
                    *r = width.wrap(f(*a));
                }
                Ok(Self::from_raw(ty, Lanes::Int(result)))
            }
            _ => Err(unsupported()),
        }
    }

    fn int_zip<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(i32, i32) -> i64,
    {
        let ty = self.simd_type();
        let width = ty.lane_width();
        match (self.raw_lanes(), other.raw_lanes()) {
            (Lanes::Int(a), Lanes::Int(b)) => {
                let mut result = [0; 16];
                for (i, r) in result.iter_mut().enumerate().take(ty.lane_count()) {
                    *r = width.wrap(f(a[i], b[i]));
                }
                Ok(Self::from_raw(ty, Lanes::Int(result)))
            }
            _ => Err(unsupported()),
        }
    }

    fn float_map<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(f32) -> f32,
    {
        match self.raw_lanes() {
            Lanes::Float(a) => Ok(Self::from_raw(self.simd_type(), Lanes::Float(a.map(f)))),
            _ => Err(unsupported()),
        }
    }

    fn float_zip<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(f32, f32) -> f32,
    {
        match (self.raw_lanes(), other.raw_lanes()) {
            (Lanes::Float(a), Lanes::Float(b)) => {
                let result = core::array::from_fn(|i| f(a[i], b[i]));
                Ok(Self::from_raw(self.simd_type(), Lanes::Float(result)))
            }
            _ => Err(unsupported()),
        }
    }

    fn bool_map<F>(&self, f: F) -> Result<Self>
    where
        F: Fn(bool) -> bool,
    {
        let ty = self.simd_type();
        match self.raw_lanes() {
            Lanes::Bool(a) => {
                let mut result = [false; 16];
                for (r, a) in result.iter_mut().zip(a).take(ty.lane_count()) {
                    *r = f(*a);
                }
                Ok(Self::from_raw(ty, Lanes::Bool(result)))
            }
            _ => Err(unsupported()),
        }
    }

    fn bool_zip<F>(&self, other: &Self, f: F) -> Result<Self>
    where
        F: Fn(bool, bool) -> bool,
    {
        let ty = self.simd_type();
        match (self.raw_lanes(), other.raw_lanes()) {
            (Lanes::Bool(a), Lanes::Bool(b)) => {
                let mut result = [false; 16];
                for (i, r) in result.iter_mut().enumerate().take(ty.lane_count()) {
                    *r = f(a[i], b[i]);
                }
                Ok(Self::from_raw(ty, Lanes::Bool(result)))
            }
            _ => Err(unsupported()),
        }
    }

    /// Compares each pair of lanes, producing a vector of the matching boolean type.
    ///
    /// Integer lanes are compared by their numeric value, so unsigned lanes are zero-extended.
    fn compare_with<I, F>(&self, other: &Self, int_cmp: I, float_cmp: F) -> Result<Self>
    where
        I: Fn(i64, i64) -> bool,
        F: Fn(f32, f32) -> bool,
    {
        let ty = self.simd_type();
        let mut result = [false; 16];
        match (self.raw_lanes(), other.raw_lanes()) {
            (Lanes::Int(a), Lanes::Int(b)) => {
                for (i, r) in result.iter_mut().enumerate().take(ty.lane_count()) {
                    *r = int_cmp(ty.int_lane_value(a[i]), ty.int_lane_value(b[i]));
                }
            }
            (Lanes::Float(a), Lanes::Float(b)) => {
                for (i, r) in result.iter_mut().enumerate().take(ty.lane_count()) {
                    *r = float_cmp(a[i], b[i]);
                }
            }
            _ => return Err(unsupported()),
        }
        Ok(Self::from_raw(ty.bool_type(), Lanes::Bool(result)))
    }
}
