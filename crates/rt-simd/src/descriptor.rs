//! The registry of SIMD.js vector types.

/// Classifies the values stored in the lanes of a [`SimdType`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum LaneKind {
    /// Two's complement signed integers.
    SignedInt,
    /// Unsigned integers.
    UnsignedInt,
    /// 32-bit IEEE floats.
    Float,
    /// Booleans.
    Bool,
}

impl LaneKind {
    /// Returns `true` for [`LaneKind::SignedInt`] and [`LaneKind::UnsignedInt`].
    pub const fn is_integer(self) -> bool {
        matches!(self, Self::SignedInt | Self::UnsignedInt)
    }

    #[allow(missing_docs)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SignedInt => "signed integer",
            Self::UnsignedInt => "unsigned integer",
            Self::Float => "float",
            Self::Bool => "boolean",
        }
    }
}

/// The width of an integer lane.
///
/// Integer lanes are always stored as an [`i32`] sign-extended from their width, regardless of
/// whether the [`SimdType`] is signed.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum LaneWidth {
    #[allow(missing_docs)]
    W8,
    #[allow(missing_docs)]
    W16,
    #[allow(missing_docs)]
    W32,
}

impl LaneWidth {
    /// The number of bits in a lane.
    pub const fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
        }
    }

    /// Keeps the low bits of `value`, sign-extending them into the stored lane representation.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn wrap(self, value: i64) -> i32 {
        match self {
            Self::W8 => value as i8 as i32,
            Self::W16 => value as i16 as i32,
            Self::W32 => value as i32,
        }
    }

    /// Interprets the low bits of a stored lane as an unsigned integer.
    #[allow(clippy::cast_sign_loss)]
    pub const fn zero_extend(self, lane: i32) -> u32 {
        match self {
            Self::W8 => lane as u8 as u32,
            Self::W16 => lane as u16 as u32,
            Self::W32 => lane as u32,
        }
    }
}

/// Error type used when a [`SimdType`] or builtin could not be found by name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct NotFoundError;

impl core::fmt::Display for NotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("no such SIMD type or operation")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for NotFoundError {}

macro_rules! simd_types {
    {$(
        $name:ident = [$lanes:literal x $bytes:literal] $kind:ident $(in $min:literal ..= $max:literal)?;
    )*} => {
        /// Identifies one of the ten SIMD.js vector types.
        ///
        /// Every type is exactly 128 bits wide.
        #[derive(Clone, Copy, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        #[allow(missing_docs)]
        pub enum SimdType {
            $($name,)*
        }

        impl SimdType {
            /// Every vector type, in registry order.
            pub const ALL: [Self; 10] = [$(Self::$name,)*];

            /// The name of the vector type's constructor, such as `Int32x4`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$name => stringify!($name),)*
                }
            }

            /// The number of lanes in the vector type.
            pub const fn lane_count(self) -> usize {
                match self {
                    $(Self::$name => $lanes,)*
                }
            }

            /// The size of a single lane, in bytes.
            pub const fn bytes_per_lane(self) -> usize {
                match self {
                    $(Self::$name => $bytes,)*
                }
            }

            #[allow(missing_docs)]
            pub const fn kind(self) -> LaneKind {
                match self {
                    $(Self::$name => LaneKind::$kind,)*
                }
            }

            /// For integer vector types, the smallest and largest values a lane can hold.
            pub const fn int_range(self) -> Option<(i64, i64)> {
                match self {
                    $(Self::$name => simd_types!(@range $($min, $max)?),)*
                }
            }
        }
    };
    (@range $min:literal, $max:literal) => { Some(($min, $max)) };
    (@range) => { None };
}

simd_types! {
    Float32x4 = [4 x 4] Float;
    Int32x4 = [4 x 4] SignedInt in -2147483648 ..= 2147483647;
    Int16x8 = [8 x 2] SignedInt in -32768 ..= 32767;
    Int8x16 = [16 x 1] SignedInt in -128 ..= 127;
    Uint32x4 = [4 x 4] UnsignedInt in 0 ..= 4294967295;
    Uint16x8 = [8 x 2] UnsignedInt in 0 ..= 65535;
    Uint8x16 = [16 x 1] UnsignedInt in 0 ..= 255;
    Bool32x4 = [4 x 4] Bool;
    Bool16x8 = [8 x 2] Bool;
    Bool8x16 = [16 x 1] Bool;
}

impl SimdType {
    /// Looks up a vector type by its constructor name.
    ///
    /// # Errors
    ///
    /// Returns an error if no vector type has the given `name`.
    pub fn lookup(name: &str) -> Result<Self, NotFoundError> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name() == name)
            .ok_or(NotFoundError)
    }

    /// The total width of the vector type, in bits.
    pub const fn bit_width(self) -> usize {
        self.lane_count() * self.bytes_per_lane() * 8
    }

    /// The size of the vector type, in bytes.
    pub const fn byte_size(self) -> usize {
        self.lane_count() * self.bytes_per_lane()
    }

    /// The width of the vector type's lanes.
    pub const fn lane_width(self) -> LaneWidth {
        match self.bytes_per_lane() {
            1 => LaneWidth::W8,
            2 => LaneWidth::W16,
            _ => LaneWidth::W32,
        }
    }

    #[allow(missing_docs)]
    pub const fn is_bool(self) -> bool {
        matches!(self.kind(), LaneKind::Bool)
    }

    #[allow(missing_docs)]
    pub const fn is_float(self) -> bool {
        matches!(self.kind(), LaneKind::Float)
    }

    #[allow(missing_docs)]
    pub const fn is_integer(self) -> bool {
        self.kind().is_integer()
    }

    #[allow(missing_docs)]
    pub const fn is_unsigned(self) -> bool {
        matches!(self.kind(), LaneKind::UnsignedInt)
    }

    /// Gets the boolean vector type with the same number of lanes, which is the type of the
    /// result of comparisons and the selector of [`SimdType::select()`].
    ///
    /// # Panics
    ///
    /// Panics if the vector type is not 128 bits wide.
    pub fn bool_type(self) -> Self {
        assert_eq!(self.bit_width(), 128, "{self} is not 128 bits");
        match self.lane_count() {
            4 => Self::Bool32x4,
            8 => Self::Bool16x8,
            16 => Self::Bool8x16,
            lanes => unreachable!("no boolean vector type has {lanes} lanes"),
        }
    }
}

impl core::str::FromStr for SimdType {
    type Err = NotFoundError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl core::fmt::Display for SimdType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::fmt::Debug for SimdType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}
