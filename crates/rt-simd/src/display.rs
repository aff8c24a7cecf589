//! String conversion of vector values.

use crate::{SimdValue, Value};
use alloc::string::String;
use core::fmt::{self, Write as _};

/// Formats the vector as `SIMD.<TypeName>(<lane>,<lane>,...)`, converting each lane as if by
/// `ToString`.
impl fmt::Display for SimdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIMD.{}(", self.simd_type())?;
        for i in 0..self.lane_count() {
            if i > 0 {
                f.write_char(',')?;
            }
            fmt::Display::fmt(&self.lane_value(i), f)?;
        }
        f.write_char(')')
    }
}

/// Trait for the locale-sensitive formatting used by [`SimdValue::to_locale_string()`].
pub trait LocaleFormat {
    /// Writes the locale-specific representation of a Number.
    fn write_number(&self, out: &mut dyn fmt::Write, n: f64) -> fmt::Result;

    /// Writes the locale-specific representation of a boolean, which is `true` or `false` by
    /// default.
    fn write_boolean(&self, out: &mut dyn fmt::Write, b: bool) -> fmt::Result {
        out.write_str(if b { "true" } else { "false" })
    }
}

/// Formats numbers the way the `en-US` locale does, with `,` separating groups of three digits
/// and at most three fractional digits.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultLocale;

impl LocaleFormat for DefaultLocale {
    fn write_number(&self, out: &mut dyn fmt::Write, n: f64) -> fmt::Result {
        if n.is_nan() {
            return out.write_str("NaN");
        }

        if n.is_sign_negative() {
            out.write_char('-')?;
        }

        let n = num_traits::Float::abs(n);
        if n.is_infinite() {
            return out.write_char('∞');
        }

        let mut digits = String::new();
        write!(digits, "{n:.3}")?;

        let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        for (i, digit) in integer.chars().enumerate() {
            if i > 0 && (integer.len() - i) % 3 == 0 {
                out.write_char(',')?;
            }
            out.write_char(digit)?;
        }

        let fraction = fraction.trim_end_matches('0');
        if !fraction.is_empty() {
            write!(out, ".{fraction}")?;
        }
        Ok(())
    }
}

/// Formats a vector like its [`Display`] implementation, but with lanes separated by `, ` and
/// formatted according to a [`LocaleFormat`].
///
/// Returned by [`SimdValue::locale_display()`].
///
/// [`Display`]: fmt::Display
pub struct LocaleDisplay<'a, L: LocaleFormat + ?Sized> {
    value: &'a SimdValue,
    locale: &'a L,
}

impl<L: LocaleFormat + ?Sized> Clone for LocaleDisplay<'_, L> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<L: LocaleFormat + ?Sized> Copy for LocaleDisplay<'_, L> {}

impl<L: LocaleFormat + ?Sized> fmt::Debug for LocaleDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocaleDisplay")
            .field("value", self.value)
            .finish_non_exhaustive()
    }
}

impl<L: LocaleFormat + ?Sized> fmt::Display for LocaleDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SIMD.{}(", self.value.simd_type())?;
        for i in 0..self.value.lane_count() {
            if i > 0 {
                f.write_str(", ")?;
            }

            match self.value.lane_value(i) {
                Value::Number(n) => self.locale.write_number(&mut *f, n)?,
                Value::Boolean(b) => self.locale.write_boolean(&mut *f, b)?,
                other => fmt::Display::fmt(&other, f)?,
            }
        }
        f.write_char(')')
    }
}

impl SimdValue {
    /// Returns a [`LocaleDisplay`] that formats this vector according to the `locale`.
    pub fn locale_display<'a, L: LocaleFormat + ?Sized>(
        &'a self,
        locale: &'a L,
    ) -> LocaleDisplay<'a, L> {
        LocaleDisplay {
            value: self,
            locale,
        }
    }

    /// Formats the vector with [`SimdValue::locale_display()`].
    ///
    /// # Errors
    ///
    /// Returns an error if the `locale` fails to format a lane.
    pub fn to_locale_string<L: LocaleFormat + ?Sized>(
        &self,
        locale: &L,
    ) -> Result<String, fmt::Error> {
        let mut s = String::new();
        write!(s, "{}", self.locale_display(locale))?;
        Ok(s)
    }
}
