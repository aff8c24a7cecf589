use core::fmt::Write as _;

/// Formats an [`f64`] the way [`Number::toString`] does with a radix of 10.
///
/// ```
/// # use simdjs_rt_math::NumberDisplay;
/// assert_eq!(NumberDisplay(42.0).to_string(), "42");
/// assert_eq!(NumberDisplay(-0.0).to_string(), "0");
/// assert_eq!(NumberDisplay(1.5e-7).to_string(), "1.5e-7");
/// assert_eq!(NumberDisplay(1e21).to_string(), "1e+21");
/// ```
///
/// [`Number::toString`]: https://tc39.es/ecma262/#sec-numeric-types-number-tostring
#[derive(Clone, Copy, Debug, PartialEq)]
#[allow(clippy::exhaustive_structs)]
pub struct NumberDisplay(pub f64);

/// The shortest decimal digits that round-trip an [`f64`], along with its decimal exponent.
struct Decimal {
    digits: [u8; 32],
    len: usize,
    exponent: i32,
    in_exponent: bool,
    exponent_negative: bool,
}

impl Decimal {
    fn new(magnitude: f64) -> Result<Self, core::fmt::Error> {
        let mut decimal = Self {
            digits: [0; 32],
            len: 0,
            exponent: 0,
            in_exponent: false,
            exponent_negative: false,
        };

        // `LowerExp` produces the shortest representation, in the form `d.ddde-N`.
        write!(decimal, "{magnitude:e}")?;

        if decimal.exponent_negative {
            decimal.exponent = -decimal.exponent;
        }

        Ok(decimal)
    }

    fn digits(&self) -> &str {
        // Only ASCII digits are ever stored.
        core::str::from_utf8(&self.digits[..self.len]).unwrap_or_default()
    }
}

impl core::fmt::Write for Decimal {
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        for b in s.bytes() {
            match b {
                b'e' => self.in_exponent = true,
                b'-' if self.in_exponent => self.exponent_negative = true,
                b'0'..=b'9' if self.in_exponent => {
                    self.exponent = self.exponent * 10 + i32::from(b - b'0');
                }
                b'0'..=b'9' => {
                    *self.digits.get_mut(self.len).ok_or(core::fmt::Error)? = b;
                    self.len += 1;
                }
                _ => (),
            }
        }
        Ok(())
    }
}

fn write_zeroes(f: &mut core::fmt::Formatter<'_>, count: i32) -> core::fmt::Result {
    for _ in 0..count {
        f.write_char('0')?;
    }
    Ok(())
}

impl core::fmt::Display for NumberDisplay {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return f.write_str("NaN");
        } else if value == 0.0 {
            return f.write_str("0");
        } else if value.is_infinite() {
            return f.write_str(if value < 0.0 { "-Infinity" } else { "Infinity" });
        }

        if value < 0.0 {
            f.write_char('-')?;
        }

        let decimal = Decimal::new(num_traits::Float::abs(value))?;
        let digits = decimal.digits();

        // The value is `digits * 10^(n - k)`.
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let k = digits.len() as i32;
        let n = decimal.exponent + 1;

        if k <= n && n <= 21 {
            f.write_str(digits)?;
            write_zeroes(f, n - k)
        } else if 0 < n && n <= 21 {
            #[allow(clippy::cast_sign_loss)]
            let (integer, fraction) = digits.split_at(n as usize);
            write!(f, "{integer}.{fraction}")
        } else if -6 < n && n <= 0 {
            f.write_str("0.")?;
            write_zeroes(f, -n)?;
            f.write_str(digits)
        } else {
            let (first, rest) = digits.split_at(1);
            f.write_str(first)?;
            if !rest.is_empty() {
                write!(f, ".{rest}")?;
            }
            let e = n - 1;
            write!(f, "e{}{}", if e < 0 { '-' } else { '+' }, e.unsigned_abs())
        }
    }
}
