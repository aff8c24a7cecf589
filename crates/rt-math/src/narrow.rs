//! Range-checked conversion of lane values into narrower integer lanes.

use core::fmt;

/// Error type used when a lane value cannot be represented in the destination lane type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LaneConversionError {
    /// The source lane was *NaN*.
    NotANumber,
    /// The source lane, after truncation, was outside of the destination lane's range.
    OutOfRange,
}

impl fmt::Display for LaneConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NotANumber => "NaN cannot be converted to an integer lane",
            Self::OutOfRange => "value is out of range for the lane type",
        })
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LaneConversionError {}

macro_rules! lane_narrowing {
    {$(
        $int:ty => $trunc:ident / $narrow:ident;
    )*} => {$(
        #[doc = concat!(
            "Truncates an [`f32`] lane toward zero and converts it to an [`", stringify!($int),
            "`] lane.\n\nFails on [`f32::NAN`], and if the truncated value (including infinities) ",
            "does not fit into an [`", stringify!($int), "`]."
        )]
        #[inline]
        pub fn $trunc(value: f32) -> Result<$int, LaneConversionError> {
            if value.is_nan() {
                return Err(LaneConversionError::NotANumber);
            }

            <$int as num_traits::cast::NumCast>::from(value).ok_or(LaneConversionError::OutOfRange)
        }

        #[doc = concat!(
            "Converts an integer lane value to an [`", stringify!($int), "`], failing if it is ",
            "outside of [`", stringify!($int), "::MIN`]..=[`", stringify!($int), "::MAX`]."
        )]
        #[inline]
        pub fn $narrow(value: i64) -> Result<$int, LaneConversionError> {
            <$int>::try_from(value).map_err(|_| LaneConversionError::OutOfRange)
        }
    )*};
}

lane_narrowing! {
    i32 => i32_trunc_f32 / i32_narrow;
    u32 => u32_trunc_f32 / u32_narrow;
    i16 => i16_trunc_f32 / i16_narrow;
    u16 => u16_trunc_f32 / u16_narrow;
    i8 => i8_trunc_f32 / i8_narrow;
    u8 => u8_trunc_f32 / u8_narrow;
}

/// Clamps a full-precision integer lane result to `min..=max`.
#[inline]
pub fn saturate(value: i64, min: i64, max: i64) -> i64 {
    value.clamp(min, max)
}
