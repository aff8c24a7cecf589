use crate::{ArrayBuffer, BoundsCheck, BoundsCheckError, Buffer};
use alloc::{rc::Rc, vec::Vec};

macro_rules! element_kinds {
    {$(
        $kind:ident = $bytes:literal;
    )*} => {
        /// The type of the elements of a [`TypedArray`].
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        #[allow(missing_docs)]
        pub enum ElementKind {
            $($kind,)*
        }

        impl ElementKind {
            /// Every element kind, in the order the typed array constructors are usually listed.
            pub const ALL: &'static [Self] = &[$(Self::$kind,)*];

            /// The size of a single element, in bytes.
            pub const fn bytes_per_element(self) -> usize {
                match self {
                    $(Self::$kind => $bytes,)*
                }
            }

            /// The name of the typed array constructor, such as `Int32Array`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$kind => concat!(stringify!($kind), "Array"),)*
                }
            }
        }
    };
}

element_kinds! {
    Int8 = 1;
    Uint8 = 1;
    Uint8Clamped = 1;
    Int16 = 2;
    Uint16 = 2;
    Int32 = 4;
    Uint32 = 4;
    Float32 = 4;
    Float64 = 8;
}

impl ElementKind {
    /// Looks up an element kind by its constructor name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }

    /// Converts a Number to this element type, returning its little-endian bytes along with the
    /// number of bytes used.
    fn encode(self, value: f64) -> ([u8; 8], usize) {
        use simdjs_rt_math as math;

        let mut bytes = [0u8; 8];
        let len = self.bytes_per_element();
        match self {
            Self::Int8 => bytes[..1].copy_from_slice(&math::to_int8(value).to_le_bytes()),
            Self::Uint8 => bytes[0] = math::to_uint8(value),
            Self::Uint8Clamped => {
                let clamped = if value.is_nan() {
                    0.0
                } else {
                    round_ties_even(value.clamp(0.0, 255.0))
                };
                bytes[0] = math::to_uint8(clamped);
            }
            Self::Int16 => bytes[..2].copy_from_slice(&math::to_int16(value).to_le_bytes()),
            Self::Uint16 => bytes[..2].copy_from_slice(&math::to_uint16(value).to_le_bytes()),
            Self::Int32 => bytes[..4].copy_from_slice(&math::to_int32(value).to_le_bytes()),
            Self::Uint32 => bytes[..4].copy_from_slice(&math::to_uint32(value).to_le_bytes()),
            #[allow(clippy::cast_possible_truncation)]
            Self::Float32 => bytes[..4].copy_from_slice(&(value as f32).to_le_bytes()),
            Self::Float64 => bytes = value.to_le_bytes(),
        }
        (bytes, len)
    }
}

impl core::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type used when a [`TypedArray`] view does not fit in its [`ArrayBuffer`], or its byte
/// offset is not a multiple of the element size.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct InvalidViewError;

impl core::fmt::Display for InvalidViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("invalid typed array length or offset")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidViewError {}

/// A view of the elements of an [`ArrayBuffer`].
///
/// Cloning a [`TypedArray`] produces another view of the same buffer.
#[derive(Clone, Debug)]
pub struct TypedArray {
    buffer: Rc<ArrayBuffer>,
    kind: ElementKind,
    byte_offset: usize,
    length: usize,
}

/// Rounds to the nearest integer, with ties going to the even neighbor.
fn round_ties_even(value: f64) -> f64 {
    let floor = num_traits::Float::floor(value);
    let diff = value - floor;
    if diff < 0.5 || (diff == 0.5 && floor % 2.0 == 0.0) {
        floor
    } else {
        floor + 1.0
    }
}

impl TypedArray {
    /// Allocates a new zero-filled [`ArrayBuffer`] with room for `length` elements.
    pub fn new(kind: ElementKind, length: usize) -> Self {
        Self {
            buffer: Rc::new(ArrayBuffer::new(length * kind.bytes_per_element())),
            kind,
            byte_offset: 0,
            length,
        }
    }

    /// Allocates a new typed array containing the given elements, converted as if by assigning
    /// each one to an element of the array.
    pub fn from_elements(kind: ElementKind, elements: &[f64]) -> Self {
        let mut bytes = Vec::with_capacity(elements.len() * kind.bytes_per_element());
        for value in elements {
            let (element, len) = kind.encode(*value);
            bytes.extend_from_slice(&element[..len]);
        }

        Self {
            buffer: Rc::new(ArrayBuffer::from_bytes(&bytes)),
            kind,
            byte_offset: 0,
            length: elements.len(),
        }
    }

    /// Creates a view of `length` elements, starting at `byte_offset` into the `buffer`.
    ///
    /// # Errors
    ///
    /// Returns an error if the `byte_offset` is not a multiple of the element size, or if the
    /// view extends past the end of the `buffer`.
    pub fn with_buffer(
        buffer: Rc<ArrayBuffer>,
        kind: ElementKind,
        byte_offset: usize,
        length: usize,
    ) -> Result<Self, InvalidViewError> {
        let fits = length
            .checked_mul(kind.bytes_per_element())
            .and_then(|len| len.checked_add(byte_offset))
            .is_some_and(|end| end <= buffer.byte_len());

        if byte_offset % kind.bytes_per_element() != 0 || !fits {
            return Err(InvalidViewError);
        }

        Ok(Self {
            buffer,
            kind,
            byte_offset,
            length,
        })
    }

    #[allow(missing_docs)]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The [`ArrayBuffer`] this is a view of.
    pub fn buffer(&self) -> &Rc<ArrayBuffer> {
        &self.buffer
    }

    /// Returns `true` if the underlying [`ArrayBuffer`] was detached.
    pub fn is_detached(&self) -> bool {
        self.buffer.is_detached()
    }

    /// Offset, in bytes, of the first element from the start of the [`ArrayBuffer`].
    pub fn byte_offset(&self) -> usize {
        if self.is_detached() {
            0
        } else {
            self.byte_offset
        }
    }

    /// The number of elements, or `0` if the buffer was detached.
    pub fn length(&self) -> usize {
        if self.is_detached() {
            0
        } else {
            self.length
        }
    }

    /// The size of the view in bytes, or `0` if the buffer was detached.
    pub fn byte_length(&self) -> usize {
        self.length() * self.kind.bytes_per_element()
    }

    fn element_offset(&self, index: usize) -> BoundsCheck<usize> {
        if index < self.length() {
            Ok(index * self.kind.bytes_per_element())
        } else {
            Err(BoundsCheckError)
        }
    }

    /// Reads the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns an error if the `index` is out of bounds.
    pub fn get(&self, index: usize) -> BoundsCheck<f64> {
        let offset = self.element_offset(index)?;
        Ok(match self.kind {
            ElementKind::Int8 => f64::from(self.i8_load(offset)?),
            ElementKind::Uint8 | ElementKind::Uint8Clamped => {
                f64::from(u8::from_le_bytes(self.i8_load(offset)?.to_le_bytes()))
            }
            ElementKind::Int16 => f64::from(self.i16_load(offset)?),
            ElementKind::Uint16 => {
                f64::from(u16::from_le_bytes(self.i16_load(offset)?.to_le_bytes()))
            }
            ElementKind::Int32 => f64::from(self.i32_load(offset)?),
            ElementKind::Uint32 => {
                f64::from(u32::from_le_bytes(self.i32_load(offset)?.to_le_bytes()))
            }
            ElementKind::Float32 => f64::from(self.f32_load(offset)?),
            ElementKind::Float64 => self.f64_load(offset)?,
        })
    }

    /// Writes the element at the given index, converting the `value` to the element type.
    ///
    /// # Errors
    ///
    /// Returns an error if the `index` is out of bounds.
    pub fn set(&self, index: usize, value: f64) -> BoundsCheck<()> {
        let offset = self.element_offset(index)?;
        let (element, len) = self.kind.encode(value);
        self.copy_from_slice(offset, &element[..len])
    }
}

/// Byte offsets are relative to the start of the view.
impl Buffer for TypedArray {
    fn byte_len(&self) -> usize {
        self.byte_length()
    }

    fn copy_to_slice(&self, offset: usize, dst: &mut [u8]) -> BoundsCheck<()> {
        match offset.checked_add(dst.len()) {
            Some(end) if end <= self.byte_length() => {
                self.buffer.copy_to_slice(self.byte_offset + offset, dst)
            }
            _ => Err(BoundsCheckError),
        }
    }

    fn copy_from_slice(&self, offset: usize, src: &[u8]) -> BoundsCheck<()> {
        match offset.checked_add(src.len()) {
            Some(end) if end <= self.byte_length() => {
                self.buffer.copy_from_slice(self.byte_offset + offset, src)
            }
            _ => Err(BoundsCheckError),
        }
    }
}
