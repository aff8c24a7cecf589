//! Bitwise operations on integer lanes, and logical operations on boolean lanes.

use crate::{LaneKind, SimdType, SimdValue};
use simdjs_rt_core::Result;

impl SimdType {
    #[allow(missing_docs)]
    pub fn and(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Bool => a.bool_zip(b, |x, y| x & y),
            _ => a.int_zip(b, |x, y| i64::from(x & y)),
        }
    }

    #[allow(missing_docs)]
    pub fn or(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Bool => a.bool_zip(b, |x, y| x | y),
            _ => a.int_zip(b, |x, y| i64::from(x | y)),
        }
    }

    #[allow(missing_docs)]
    pub fn xor(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        match self.kind() {
            LaneKind::Bool => a.bool_zip(b, |x, y| x ^ y),
            _ => a.int_zip(b, |x, y| i64::from(x ^ y)),
        }
    }

    #[allow(missing_docs)]
    pub fn not(self, a: &SimdValue) -> Result<SimdValue> {
        let a = self.operand(a)?;
        match self.kind() {
            LaneKind::Bool => a.bool_map(|x| !x),
            _ => a.int_map(|x| i64::from(!x)),
        }
    }
}
