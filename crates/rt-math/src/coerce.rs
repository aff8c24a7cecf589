//! ECMAScript numeric conversions from a Number value to integers.
//!
//! These never fail: out of range values wrap around modulo `2^N`, and *NaN* and the infinities
//! become zero.

use num_traits::Float;

/// The largest integer `n` such that `n` and `n + 1` are both exactly representable as an [`f64`].
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Implements the [`ToIntegerOrInfinity`] abstract operation.
///
/// [`ToIntegerOrInfinity`]: https://tc39.es/ecma262/#sec-tointegerorinfinity
pub fn to_integer_or_infinity(number: f64) -> f64 {
    if number.is_nan() {
        0.0
    } else if number.is_infinite() {
        number
    } else {
        // Adding zero turns `-0` into `+0`.
        Float::trunc(number) + 0.0
    }
}

/// Implements the [`ToLength`] abstract operation on a value that was already converted to a
/// Number.
///
/// [`ToLength`]: https://tc39.es/ecma262/#sec-tolength
pub fn to_length(number: f64) -> f64 {
    let len = to_integer_or_infinity(number);
    if len <= 0.0 {
        0.0
    } else {
        len.min(MAX_SAFE_INTEGER)
    }
}

macro_rules! modular_conversions {
    {$(
        $name:ident -> $int:ty = $op_name:literal;
    )*} => {$(
        #[doc = concat!(
            "Implements the [`", $op_name, "`] abstract operation.\n\n",
            "[`", $op_name, "`]: https://tc39.es/ecma262/#sec-", $op_name
        )]
        pub fn $name(number: f64) -> $int {
            const MODULUS: f64 = (1u64 << <$int>::BITS) as f64;

            if !number.is_finite() {
                return 0;
            }

            let mut int = Float::trunc(number) % MODULUS;
            if int < 0.0 {
                int += MODULUS;
            }

            // `0 <= int < MODULUS`, so this keeps the low bits.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                int as u64 as $int
            }
        }
    )*};
}

modular_conversions! {
    to_int32 -> i32 = "toint32";
    to_uint32 -> u32 = "touint32";
    to_int16 -> i16 = "toint16";
    to_uint16 -> u16 = "touint16";
    to_int8 -> i8 = "toint8";
    to_uint8 -> u8 = "touint8";
}
