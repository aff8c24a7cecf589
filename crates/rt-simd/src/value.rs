//! The host values that SIMD.js operations accept as arguments and return.

use crate::SimdValue;
use alloc::rc::Rc;
use simdjs_rt_core::{Error, Result};
use simdjs_rt_memory::TypedArray;

/// An ordinary object with no behavior relevant to vector operations.
///
/// Objects are only ever compared by identity.
#[derive(Clone, Debug, Default)]
pub struct Object(Rc<()>);

impl Object {
    /// Allocates a new object, distinct from every other object.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if both refer to the same object.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// A value passed to or returned from a SIMD.js operation.
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum Value {
    #[allow(missing_docs)]
    Undefined,
    #[allow(missing_docs)]
    Null,
    #[allow(missing_docs)]
    Boolean(bool),
    #[allow(missing_docs)]
    Number(f64),
    #[allow(missing_docs)]
    String(Rc<str>),
    /// A vector value.
    Simd(SimdValue),
    /// A view of an [`ArrayBuffer`], used by the `load` and `store` operations.
    ///
    /// [`ArrayBuffer`]: simdjs_rt_memory::ArrayBuffer
    TypedArray(TypedArray),
    #[allow(missing_docs)]
    Object(Object),
}

fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }

    digits
        .chars()
        .try_fold(0.0, |n: f64, c| {
            c.to_digit(radix)
                .map(|d| n * f64::from(radix) + f64::from(d))
        })
        .unwrap_or(f64::NAN)
}

/// Implements [`StringToNumber`].
///
/// [`StringToNumber`]: https://tc39.es/ecma262/#sec-stringtonumber
fn string_to_number(s: &str) -> f64 {
    let s = s.trim_matches(is_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return parse_radix(digits, radix);
        }
    }

    match s {
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        // Rust also accepts spellings like `inf` and `NaN`, which are not numeric literals.
        _ if s
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-')) =>
        {
            s.parse().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    }
}

impl Value {
    /// Creates a string value.
    pub fn string(s: &str) -> Self {
        Self::String(Rc::from(s))
    }

    /// Implements the [`ToNumber`] conversion.
    ///
    /// Objects and typed arrays have no primitive value here, so they become *NaN*.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` for vector values.
    ///
    /// [`ToNumber`]: https://tc39.es/ecma262/#sec-tonumber
    pub fn to_number(&self) -> Result<f64> {
        Ok(match self {
            Self::Undefined => f64::NAN,
            Self::Null => 0.0,
            Self::Boolean(b) => f64::from(u8::from(*b)),
            Self::Number(n) => *n,
            Self::String(s) => string_to_number(s),
            Self::Simd(_) => return Err(Error::type_error("cannot convert a SIMD value to a number")),
            Self::TypedArray(_) | Self::Object(_) => f64::NAN,
        })
    }

    /// Implements the [`ToBoolean`] conversion.
    ///
    /// [`ToBoolean`]: https://tc39.es/ecma262/#sec-toboolean
    pub fn to_boolean(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Boolean(b) => *b,
            Self::Number(n) => !(*n == 0.0 || n.is_nan()),
            Self::String(s) => !s.is_empty(),
            Self::Simd(_) | Self::TypedArray(_) | Self::Object(_) => true,
        }
    }

    /// Gets the vector, if this is a [`Value::Simd`].
    pub fn as_simd(&self) -> Option<&SimdValue> {
        match self {
            Self::Simd(v) => Some(v),
            _ => None,
        }
    }

    /// Gets the number, if this is a [`Value::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Gets the boolean, if this is a [`Value::Boolean`].
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Implements the [`SameValueZero`] comparison.
    ///
    /// Numbers are equal if they are both *NaN* or compare equal (so `+0` equals `-0`), vectors
    /// are compared lane by lane, and objects are compared by identity.
    ///
    /// [`SameValueZero`]: https://tc39.es/ecma262/#sec-samevaluezero
    pub fn same_value_zero(a: &Self, b: &Self) -> bool {
        match (a, b) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => (a.is_nan() && b.is_nan()) || a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Simd(a), Self::Simd(b)) => a.same_value_zero(b),
            (Self::TypedArray(a), Self::TypedArray(b)) => {
                Rc::ptr_eq(a.buffer(), b.buffer())
                    && a.kind() == b.kind()
                    && a.byte_offset() == b.byte_offset()
                    && a.length() == b.length()
            }
            (Self::Object(a), Self::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

macro_rules! value_from {
    ($($source:ty => |$v:ident| $value:expr,)*) => {$(
        impl From<$source> for Value {
            fn from($v: $source) -> Self {
                $value
            }
        }
    )*};
}

value_from! {
    bool => |b| Self::Boolean(b),
    f64 => |n| Self::Number(n),
    i32 => |n| Self::Number(f64::from(n)),
    &str => |s| Self::string(s),
    SimdValue => |v| Self::Simd(v),
    TypedArray => |array| Self::TypedArray(array),
    Object => |o| Self::Object(o),
}

/// Formats the value the way `ToString` would.
impl core::fmt::Display for Value {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => core::fmt::Display::fmt(b, f),
            Self::Number(n) => core::fmt::Display::fmt(&simdjs_rt_math::NumberDisplay(*n), f),
            Self::String(s) => f.write_str(s),
            Self::Simd(v) => core::fmt::Display::fmt(v, f),
            Self::TypedArray(array) => {
                for i in 0..array.length() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    let element = array.get(i).map_err(|_| core::fmt::Error)?;
                    write!(f, "{}", simdjs_rt_math::NumberDisplay(element))?;
                }
                Ok(())
            }
            Self::Object(_) => f.write_str("[object Object]"),
        }
    }
}
