//! Comparisons, boolean reductions, and lane selection.

use crate::vector::Lanes;
use crate::{SimdType, SimdValue};
use simdjs_rt_core::{Error, Result};

macro_rules! comparisons {
    {$(
        $(#[$meta:meta])*
        $name:ident => $op:tt;
    )*} => {$(
        $(#[$meta])*
        pub fn $name(self, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
            self.operand(a)?.compare_with(self.operand(b)?, |x, y| x $op y, |x, y| x $op y)
        }
    )*};
}

impl SimdType {
    comparisons! {
        /// Checks if each lane of `a` is less than the corresponding lane of `b`.
        less_than => <;
        /// Checks if each lane of `a` is less than or equal to the corresponding lane of `b`.
        less_than_or_equal => <=;
        /// Checks if each lane of `a` is greater than the corresponding lane of `b`.
        greater_than => >;
        /// Checks if each lane of `a` is greater than or equal to the corresponding lane of `b`.
        greater_than_or_equal => >=;
        /// Checks if each pair of lanes are equal. *NaN* lanes are never equal.
        equal => ==;
        /// Checks if each pair of lanes are not equal. *NaN* lanes are never equal.
        not_equal => !=;
    }

    fn bool_lanes(self, a: &SimdValue) -> Result<&[bool]> {
        match self.operand(a)?.raw_lanes() {
            Lanes::Bool(lanes) => Ok(&lanes[..self.lane_count()]),
            _ => Err(super::unsupported()),
        }
    }

    /// Returns `true` if any lane of the boolean vector is `true`.
    pub fn any_true(self, a: &SimdValue) -> Result<bool> {
        Ok(self.bool_lanes(a)?.iter().any(|b| *b))
    }

    /// Returns `true` if every lane of the boolean vector is `true`.
    pub fn all_true(self, a: &SimdValue) -> Result<bool> {
        Ok(self.bool_lanes(a)?.iter().all(|b| *b))
    }

    /// Picks each lane from `a` where the `selector` is `true`, and from `b` otherwise.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `a` or `b` are not of this type, or if the `selector` is not a
    /// vector of this type's [boolean type].
    ///
    /// [boolean type]: SimdType::bool_type()
    pub fn select(self, selector: &SimdValue, a: &SimdValue, b: &SimdValue) -> Result<SimdValue> {
        let (a, b) = (self.operand(a)?, self.operand(b)?);
        let selector = match selector.raw_lanes() {
            Lanes::Bool(lanes) if selector.simd_type() == self.bool_type() => lanes,
            _ => {
                return Err(Error::type_error(
                    "selector must be a boolean vector with a matching lane count",
                ))
            }
        };

        Ok(SimdValue::from_fn(self, |i| {
            if selector[i] {
                a.get_lane(i)
            } else {
                b.get_lane(i)
            }
        }))
    }
}
