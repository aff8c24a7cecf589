//! Errors raised by SIMD.js operations.

use core::fmt::Display;

macro_rules! script_errors {
    {$(
        $(#[$meta:meta])*
        $name:ident = $js_name:literal;
    )*} => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        pub struct $name {
            message: &'static str,
        }

        impl $name {
            #[doc = concat!("Creates a new `", $js_name, "` with the given message.")]
            pub const fn new(message: &'static str) -> Self {
                Self { message }
            }

            /// Gets the message describing why the error was raised.
            pub const fn message(&self) -> &'static str {
                self.message
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, concat!($js_name, ": {}"), self.message)
            }
        }

        #[cfg(feature = "std")]
        impl std::error::Error for $name {}
    )*};
}

script_errors! {
    /// Error raised when an operand has the wrong kind, such as passing a scalar where a vector
    /// is expected or passing a vector of the wrong type.
    TypeError = "TypeError";
    /// Error raised when a value is outside of the allowed range, such as a lane index that is
    /// out of bounds or a lane value that does not fit into the target lane type.
    RangeError = "RangeError";
}

/// Indicates which kind of [`Error`] was raised.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// See [`TypeError`].
    Type,
    /// See [`RangeError`].
    Range,
}

/// Error type raised by SIMD.js operations.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum Error {
    #[allow(missing_docs)]
    Type(TypeError),
    #[allow(missing_docs)]
    Range(RangeError),
}

/// Result type used by SIMD.js operations.
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for creating a [`TypeError`].
    pub const fn type_error(message: &'static str) -> Self {
        Self::Type(TypeError::new(message))
    }

    /// Shorthand for creating a [`RangeError`].
    pub const fn range_error(message: &'static str) -> Self {
        Self::Range(RangeError::new(message))
    }

    #[allow(missing_docs)]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(_) => ErrorKind::Type,
            Self::Range(_) => ErrorKind::Range,
        }
    }

    /// Gets the message describing why the error was raised.
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Type(e) => e.message(),
            Self::Range(e) => e.message(),
        }
    }
}

impl From<TypeError> for Error {
    fn from(error: TypeError) -> Self {
        Self::Type(error)
    }
}

impl From<RangeError> for Error {
    fn from(error: RangeError) -> Self {
        Self::Range(error)
    }
}

impl From<crate::BoundsCheckError> for Error {
    fn from(error: crate::BoundsCheckError) -> Self {
        let _ = error;
        Self::range_error("out-of-bounds byte offset")
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Type(e) => Display::fmt(e, f),
            Self::Range(e) => Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(match self {
            Self::Type(e) => e,
            Self::Range(e) => e,
        })
    }
}
