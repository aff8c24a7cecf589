//! Provides the [`SimdValue`] container.

use crate::{Lane, SimdType, Value};

/// Lane storage, selected by the [`LaneKind`] of the vector type.
///
/// Lanes past the vector type's lane count are always zero or `false`.
///
/// [`LaneKind`]: crate::LaneKind
#[derive(Clone, Copy, Debug)]
pub(crate) enum Lanes {
    Int([i32; 16]),
    Float([f32; 4]),
    Bool([bool; 16]),
}

/// A SIMD.js vector value: a [`SimdType`] and one [`Lane`] for each of its lanes.
///
/// Operations never modify their operands. Every operation that produces a vector returns a new
/// [`SimdValue`].
#[derive(Clone, Copy)]
pub struct SimdValue {
    ty: SimdType,
    lanes: Lanes,
}

macro_rules! typed_lanes {
    {$(
        $ty:ident : [$num:ident; $count:literal] => $new:ident / $get:ident;
    )*} => {$(
        #[doc = concat!(
            "Creates a new [`SimdType::", stringify!($ty), "`] vector from an array of [`",
            stringify!($num), "`] lanes."
        )]
        pub fn $new(lanes: [$num; $count]) -> Self {
            let mut v = Self::new(SimdType::$ty);
            for (i, lane) in lanes.into_iter().enumerate() {
                v.set_lane(i, SimdType::$ty.cast(lane.into()));
            }
            v
        }

        #[doc = concat!(
            "Gets the lanes of a [`SimdType::", stringify!($ty), "`] vector, or [`None`] if ",
            "the vector has a different type."
        )]
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        pub fn $get(&self) -> Option<[$num; $count]> {
            if self.ty != SimdType::$ty {
                return None;
            }

            let mut lanes = [<$num>::default(); $count];
            for (i, lane) in lanes.iter_mut().enumerate() {
                *lane = typed_lanes!(@get self, i, $num);
            }
            Some(lanes)
        }
    )*};
    (@get $self:ident, $i:ident, f32) => {
        match $self.get_lane($i) {
            Lane::Float(f) => f,
            _ => f32::NAN,
        }
    };
    (@get $self:ident, $i:ident, bool) => {
        matches!($self.get_lane($i), Lane::Bool(true))
    };
    (@get $self:ident, $i:ident, $num:ty) => {
        match $self.get_lane($i) {
            Lane::Int(bits) => bits as $num,
            _ => 0,
        }
    };
}

impl SimdValue {
    /// Creates a vector of the given type with every lane set to zero or `false`.
    pub const fn new(ty: SimdType) -> Self {
        let lanes = match ty.kind() {
            crate::LaneKind::Float => Lanes::Float([0.0; 4]),
            crate::LaneKind::Bool => Lanes::Bool([false; 16]),
            _ => Lanes::Int([0; 16]),
        };
        Self { ty, lanes }
    }

    /// Creates a vector of the given type, computing each lane with a closure.
    ///
    /// # Panics
    ///
    /// Panics if the closure returns a [`Lane`] of the wrong kind.
    pub fn from_fn<F: FnMut(usize) -> Lane>(ty: SimdType, mut f: F) -> Self {
        let mut v = Self::new(ty);
        for i in 0..ty.lane_count() {
            v.set_lane(i, f(i));
        }
        v
    }

    /// Creates a vector of the given type, computing each lane with a fallible closure.
    ///
    /// Fails with the first error returned by the closure. No partially constructed vector is
    /// ever returned.
    ///
    /// # Panics
    ///
    /// Panics if the closure returns a [`Lane`] of the wrong kind.
    pub fn try_from_fn<E, F>(ty: SimdType, mut f: F) -> Result<Self, E>
    where
        F: FnMut(usize) -> Result<Lane, E>,
    {
        let mut v = Self::new(ty);
        for i in 0..ty.lane_count() {
            v.set_lane(i, f(i)?);
        }
        Ok(v)
    }

    typed_lanes! {
        Float32x4: [f32; 4] => float32x4 / to_float32x4;
        Int32x4: [i32; 4] => int32x4 / to_int32x4;
        Int16x8: [i16; 8] => int16x8 / to_int16x8;
        Int8x16: [i8; 16] => int8x16 / to_int8x16;
        Uint32x4: [u32; 4] => uint32x4 / to_uint32x4;
        Uint16x8: [u16; 8] => uint16x8 / to_uint16x8;
        Uint8x16: [u8; 16] => uint8x16 / to_uint8x16;
        Bool32x4: [bool; 4] => bool32x4 / to_bool32x4;
        Bool16x8: [bool; 8] => bool16x8 / to_bool16x8;
        Bool8x16: [bool; 16] => bool8x16 / to_bool8x16;
    }

    /// The type of the vector.
    pub const fn simd_type(&self) -> SimdType {
        self.ty
    }

    /// The number of lanes, which is always the lane count of the vector's type.
    pub const fn lane_count(&self) -> usize {
        self.ty.lane_count()
    }

    pub(crate) const fn from_raw(ty: SimdType, lanes: Lanes) -> Self {
        Self { ty, lanes }
    }

    pub(crate) fn raw_lanes(&self) -> &Lanes {
        &self.lanes
    }

    /// Gets the lane at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the `index` is not less than the lane count.
    pub fn get_lane(&self, index: usize) -> Lane {
        assert!(
            index < self.lane_count(),
            "lane index {index} is out of bounds for {}",
            self.ty
        );

        match &self.lanes {
            Lanes::Int(lanes) => Lane::Int(lanes[index]),
            Lanes::Float(lanes) => Lane::Float(lanes[index]),
            Lanes::Bool(lanes) => Lane::Bool(lanes[index]),
        }
    }

    /// Sets the lane at the given index.
    ///
    /// This is only used while a vector is being constructed, so it is not public.
    ///
    /// # Panics
    ///
    /// Panics if the `index` is not less than the lane count, or if the lane is of the wrong kind.
    pub(crate) fn set_lane(&mut self, index: usize, lane: Lane) {
        assert!(
            index < self.ty.lane_count(),
            "lane index {index} is out of bounds for {}",
            self.ty
        );

        match (&mut self.lanes, lane) {
            (Lanes::Int(lanes), Lane::Int(i)) => {
                lanes[index] = self.ty.lane_width().wrap(i64::from(i));
            }
            (Lanes::Float(lanes), Lane::Float(f)) => lanes[index] = f,
            (Lanes::Bool(lanes), Lane::Bool(b)) => lanes[index] = b,
            (_, lane) => panic!("{lane:?} is not a valid lane for {}", self.ty),
        }
    }

    /// Returns an iterator over the lanes of the vector.
    pub fn lanes(&self) -> impl ExactSizeIterator<Item = Lane> + '_ {
        (0..self.lane_count()).map(|i| self.get_lane(i))
    }

    /// Gets the value of a lane as it is visible to scripts.
    ///
    /// Unsigned lanes are zero-extended, float lanes are widened to an [`f64`], and boolean lanes
    /// become [`Value::Boolean`].
    pub fn lane_value(&self, index: usize) -> Value {
        match self.get_lane(index) {
            Lane::Int(i) => Value::Number(self.ty.int_lane_value(i) as f64),
            Lane::Float(f) => Value::Number(f64::from(f)),
            Lane::Bool(b) => Value::Boolean(b),
        }
    }

    /// Implements the `SameValueZero` comparison for two vectors.
    ///
    /// Two vectors are equal if they have the same number of lanes, and each pair of lanes are
    /// equal, where *NaN* is equal to *NaN* and `+0` is equal to `-0`.
    pub fn same_value_zero(&self, other: &Self) -> bool {
        self.lane_count() == other.lane_count()
            && (0..self.lane_count())
                .all(|i| Value::same_value_zero(&self.lane_value(i), &other.lane_value(i)))
    }
}

/// Compares vectors with [`SimdValue::same_value_zero()`].
impl PartialEq for SimdValue {
    fn eq(&self, other: &Self) -> bool {
        self.same_value_zero(other)
    }
}

impl core::fmt::Debug for SimdValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.ty)?;
        let mut list = f.debug_list();
        match &self.lanes {
            Lanes::Int(lanes) => list.entries(&lanes[..self.lane_count()]),
            Lanes::Float(lanes) => list.entries(&lanes[..]),
            Lanes::Bool(lanes) => list.entries(&lanes[..self.lane_count()]),
        };
        list.finish()
    }
}
