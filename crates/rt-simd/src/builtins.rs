//! Dispatches the named builtin functions of each vector type to the lane-wise operations.

use crate::{NotFoundError, SimdType, SimdValue, Value};
use alloc::borrow::Cow;
use simdjs_rt_core::{Error, Result};

macro_rules! builtins {
    {$(
        $(#[$meta:meta])*
        $case:ident = $name:literal / $length:literal;
    )*} => {
        /// Identifies a builtin function of a vector type constructor, such as `Int32x4.add`.
        ///
        /// Not every vector type provides every builtin, see [`Builtin::is_supported()`].
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum Builtin {
            $(
                $(#[$meta])*
                #[allow(missing_docs)]
                $case,
            )*
            /// Converts the lane values of a vector of the given type, such as `fromInt32x4`.
            From(SimdType),
            /// Reinterprets the bits of a vector of the given type, such as `fromInt32x4Bits`.
            FromBits(SimdType),
        }

        impl Builtin {
            const NAMED: &'static [Self] = &[$(Self::$case,)*];

            /// The name of the builtin function, as it appears on the constructor.
            pub fn name(self) -> &'static str {
                match self {
                    $(Self::$case => $name,)*
                    Self::From(source) => conversion_name(source, false),
                    Self::FromBits(source) => conversion_name(source, true),
                }
            }

            /// The number of fixed parameters that the builtin function takes.
            ///
            /// `swizzle` and `shuffle` additionally take one lane index per lane.
            pub fn fixed_len(self) -> usize {
                match self {
                    $(Self::$case => $length,)*
                    Self::From(_) | Self::FromBits(_) => 1,
                }
            }
        }
    };
}

builtins! {
    Splat = "splat" / 1;
    Check = "check" / 1;
    Add = "add" / 2;
    Sub = "sub" / 2;
    Mul = "mul" / 2;
    Div = "div" / 2;
    Max = "max" / 2;
    Min = "min" / 2;
    MaxNum = "maxNum" / 2;
    MinNum = "minNum" / 2;
    Neg = "neg" / 1;
    Sqrt = "sqrt" / 1;
    ReciprocalApproximation = "reciprocalApproximation" / 1;
    ReciprocalSqrtApproximation = "reciprocalSqrtApproximation" / 1;
    Abs = "abs" / 1;
    And = "and" / 2;
    Or = "or" / 2;
    Xor = "xor" / 2;
    Not = "not" / 1;
    LessThan = "lessThan" / 2;
    LessThanOrEqual = "lessThanOrEqual" / 2;
    GreaterThan = "greaterThan" / 2;
    GreaterThanOrEqual = "greaterThanOrEqual" / 2;
    Equal = "equal" / 2;
    NotEqual = "notEqual" / 2;
    AnyTrue = "anyTrue" / 1;
    AllTrue = "allTrue" / 1;
    Select = "select" / 3;
    AddSaturate = "addSaturate" / 2;
    SubSaturate = "subSaturate" / 2;
    ShiftLeftByScalar = "shiftLeftByScalar" / 2;
    ShiftRightByScalar = "shiftRightByScalar" / 2;
    ExtractLane = "extractLane" / 2;
    ReplaceLane = "replaceLane" / 3;
    Load = "load" / 2;
    Load1 = "load1" / 2;
    Load2 = "load2" / 2;
    Load3 = "load3" / 2;
    Store = "store" / 3;
    Store1 = "store1" / 3;
    Store2 = "store2" / 3;
    Store3 = "store3" / 3;
    Swizzle = "swizzle" / 1;
    Shuffle = "shuffle" / 2;
}

fn conversion_name(source: SimdType, bits: bool) -> &'static str {
    macro_rules! names {
        ($($ty:ident),*) => {
            match (source, bits) {
                $(
                    (SimdType::$ty, false) => concat!("from", stringify!($ty)),
                    (SimdType::$ty, true) => concat!("from", stringify!($ty), "Bits"),
                )*
            }
        };
    }

    names!(
        Float32x4, Int32x4, Int16x8, Int8x16, Uint32x4, Uint16x8, Uint8x16, Bool32x4, Bool16x8,
        Bool8x16
    )
}

impl Builtin {
    /// Returns an iterator over every builtin, including the conversions from every vector type.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::NAMED.iter().copied().chain(
            SimdType::ALL
                .into_iter()
                .flat_map(|source| [Self::From(source), Self::FromBits(source)]),
        )
    }

    /// Looks up a builtin by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().find(|builtin| builtin.name() == name)
    }

    /// Returns `true` if vectors of the given type provide this builtin.
    pub fn is_supported(self, ty: SimdType) -> bool {
        match self {
            Self::Splat | Self::Check | Self::ExtractLane | Self::ReplaceLane => true,
            Self::Add
            | Self::Sub
            | Self::Mul
            | Self::LessThan
            | Self::LessThanOrEqual
            | Self::GreaterThan
            | Self::GreaterThanOrEqual
            | Self::Equal
            | Self::NotEqual
            | Self::Select
            | Self::Load
            | Self::Store
            | Self::Swizzle
            | Self::Shuffle => !ty.is_bool(),
            Self::Div
            | Self::Max
            | Self::Min
            | Self::MaxNum
            | Self::MinNum
            | Self::Sqrt
            | Self::ReciprocalApproximation
            | Self::ReciprocalSqrtApproximation
            | Self::Abs => ty.is_float(),
            Self::Neg => !ty.is_bool() && !ty.is_unsigned(),
            Self::And | Self::Or | Self::Xor | Self::Not => !ty.is_float(),
            Self::AnyTrue | Self::AllTrue => ty.is_bool(),
            Self::AddSaturate
            | Self::SubSaturate
            | Self::ShiftLeftByScalar
            | Self::ShiftRightByScalar => ty.is_integer(),
            Self::Load1
            | Self::Load2
            | Self::Load3
            | Self::Store1
            | Self::Store2
            | Self::Store3 => !ty.is_bool() && ty.lane_count() == 4,
            Self::From(source) | Self::FromBits(source) => !ty.is_bool() && !source.is_bool(),
        }
    }
}

/// A [`Builtin`] bound to the vector type it is called on.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct BuiltinFunction {
    ty: SimdType,
    builtin: Builtin,
}

impl SimdType {
    /// Gets the builtin function with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no builtin with the given `name`, or if this vector type does
    /// not provide it.
    pub fn builtin(self, name: &str) -> core::result::Result<BuiltinFunction, NotFoundError> {
        match Builtin::from_name(name) {
            Some(builtin) if builtin.is_supported(self) => Ok(BuiltinFunction { ty: self, builtin }),
            _ => Err(NotFoundError),
        }
    }

    /// Returns an iterator over every builtin function that this vector type provides.
    pub fn builtins(self) -> impl Iterator<Item = BuiltinFunction> {
        Builtin::all()
            .filter(move |builtin| builtin.is_supported(self))
            .map(move |builtin| BuiltinFunction { ty: self, builtin })
    }
}

/// Returns the vector types in registry order, as enumerated by the `SIMDTypes` entrypoint.
pub fn simd_types() -> impl ExactSizeIterator<Item = SimdType> {
    SimdType::ALL.into_iter()
}

fn vector(ty: SimdType, arg: &Value) -> Result<&SimdValue> {
    ty.operand_value(arg)
}

fn selector(arg: &Value) -> Result<&SimdValue> {
    arg.as_simd().ok_or(Error::type_error(
        "selector must be a boolean vector with a matching lane count",
    ))
}

impl BuiltinFunction {
    /// The vector type that the builtin is called on.
    pub fn simd_type(&self) -> SimdType {
        self.ty
    }

    #[allow(missing_docs)]
    pub fn builtin(&self) -> Builtin {
        self.builtin
    }

    /// The name of the builtin function.
    pub fn name(&self) -> &'static str {
        self.builtin.name()
    }

    /// The `length` property of the builtin function, which is the number of parameters it
    /// declares.
    pub fn length(&self) -> usize {
        match self.builtin {
            Builtin::Swizzle | Builtin::Shuffle => {
                self.builtin.fixed_len() + self.ty.lane_count()
            }
            builtin => builtin.fixed_len(),
        }
    }

    /// Calls the builtin function with the given arguments.
    ///
    /// Missing arguments are [`Value::Undefined`], except for missing lane indices, which are
    /// `0`. Extra arguments are ignored.
    ///
    /// # Errors
    ///
    /// Returns the `TypeError` or `RangeError` raised by the operation.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        crate::builtin_event!(trace, self, "calling builtin", args = args.len());

        let fixed_len = self.builtin.fixed_len();
        let args: Cow<'_, [Value]> = if args.len() < fixed_len {
            let mut padded = args.to_vec();
            padded.resize(fixed_len, Value::Undefined);
            Cow::Owned(padded)
        } else {
            Cow::Borrowed(args)
        };

        let result = self.dispatch(&args);
        if let Err(error) = &result {
            crate::builtin_event!(debug, self, "builtin failed", error = error);
        }
        result
    }

    fn dispatch(&self, args: &[Value]) -> Result<Value> {
        let ty = self.ty;
        let unary = |op: fn(SimdType, &SimdValue) -> Result<SimdValue>| {
            op(ty, vector(ty, &args[0])?).map(Value::Simd)
        };
        let binary = |op: fn(SimdType, &SimdValue, &SimdValue) -> Result<SimdValue>| {
            op(ty, vector(ty, &args[0])?, vector(ty, &args[1])?).map(Value::Simd)
        };
        let load = |length| ty.load(&args[0], &args[1], length).map(Value::Simd);
        let store = |length| ty.store(&args[0], &args[1], &args[2], length).map(Value::Simd);

        match self.builtin {
            Builtin::Splat => ty.splat(&args[0]).map(Value::Simd),
            Builtin::Check => ty.check(&args[0]).map(Value::Simd),
            Builtin::Add => binary(SimdType::add),
            Builtin::Sub => binary(SimdType::sub),
            Builtin::Mul => binary(SimdType::mul),
            Builtin::Div => binary(SimdType::div),
            Builtin::Max => binary(SimdType::max),
            Builtin::Min => binary(SimdType::min),
            Builtin::MaxNum => binary(SimdType::max_num),
            Builtin::MinNum => binary(SimdType::min_num),
            Builtin::Neg => unary(SimdType::neg),
            Builtin::Sqrt => unary(SimdType::sqrt),
            Builtin::ReciprocalApproximation => unary(SimdType::reciprocal_approximation),
            Builtin::ReciprocalSqrtApproximation => unary(SimdType::reciprocal_sqrt_approximation),
            Builtin::Abs => unary(SimdType::abs),
            Builtin::And => binary(SimdType::and),
            Builtin::Or => binary(SimdType::or),
            Builtin::Xor => binary(SimdType::xor),
            Builtin::Not => unary(SimdType::not),
            Builtin::LessThan => binary(SimdType::less_than),
            Builtin::LessThanOrEqual => binary(SimdType::less_than_or_equal),
            Builtin::GreaterThan => binary(SimdType::greater_than),
            Builtin::GreaterThanOrEqual => binary(SimdType::greater_than_or_equal),
            Builtin::Equal => binary(SimdType::equal),
            Builtin::NotEqual => binary(SimdType::not_equal),
            Builtin::AnyTrue => ty.any_true(vector(ty, &args[0])?).map(Value::Boolean),
            Builtin::AllTrue => ty.all_true(vector(ty, &args[0])?).map(Value::Boolean),
            Builtin::Select => ty
                .select(
                    selector(&args[0])?,
                    vector(ty, &args[1])?,
                    vector(ty, &args[2])?,
                )
                .map(Value::Simd),
            Builtin::AddSaturate => binary(SimdType::add_saturate),
            Builtin::SubSaturate => binary(SimdType::sub_saturate),
            Builtin::ShiftLeftByScalar => ty
                .shift_left_by_scalar(vector(ty, &args[0])?, &args[1])
                .map(Value::Simd),
            Builtin::ShiftRightByScalar => ty
                .shift_right_by_scalar(vector(ty, &args[0])?, &args[1])
                .map(Value::Simd),
            Builtin::ExtractLane => ty.extract_lane(vector(ty, &args[0])?, &args[1]),
            Builtin::ReplaceLane => ty
                .replace_lane(vector(ty, &args[0])?, &args[1], &args[2])
                .map(Value::Simd),
            Builtin::Load => load(ty.lane_count()),
            Builtin::Load1 => load(1),
            Builtin::Load2 => load(2),
            Builtin::Load3 => load(3),
            Builtin::Store => store(ty.lane_count()),
            Builtin::Store1 => store(1),
            Builtin::Store2 => store(2),
            Builtin::Store3 => store(3),
            Builtin::Swizzle => ty
                .swizzle(vector(ty, &args[0])?, &args[1..])
                .map(Value::Simd),
            Builtin::Shuffle => ty
                .shuffle(vector(ty, &args[0])?, vector(ty, &args[1])?, &args[2..])
                .map(Value::Simd),
            Builtin::From(source) => ty
                .convert_from(source, vector(source, &args[0])?)
                .map(Value::Simd),
            Builtin::FromBits(source) => ty
                .convert_bits_from(source, vector(source, &args[0])?)
                .map(Value::Simd),
        }
    }
}

impl core::fmt::Display for BuiltinFunction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}", self.ty, self.builtin.name())
    }
}

/// The functions on the prototype of every vector type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum PrototypeBuiltin {
    /// Formats the vector with [`SimdValue`]'s [`Display`] implementation.
    ///
    /// [`Display`]: core::fmt::Display
    ToString,
    /// Formats the vector with [`SimdValue::locale_display()`] in the [`DefaultLocale`].
    ///
    /// [`DefaultLocale`]: crate::DefaultLocale
    ToLocaleString,
    /// Returns the vector itself.
    ValueOf,
}

impl PrototypeBuiltin {
    #[allow(missing_docs)]
    pub const ALL: [Self; 3] = [Self::ToString, Self::ToLocaleString, Self::ValueOf];

    #[allow(missing_docs)]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ToString => "toString",
            Self::ToLocaleString => "toLocaleString",
            Self::ValueOf => "valueOf",
        }
    }

    /// Looks up a prototype function by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    /// Calls the prototype function of the given vector type with the `this` value.
    ///
    /// # Errors
    ///
    /// Returns a `TypeError` if `this` is not a vector of the given type.
    pub fn call(self, ty: SimdType, this: &Value) -> Result<Value> {
        use alloc::string::ToString as _;

        let this = ty.operand_value(this)?;
        Ok(match self {
            Self::ToString => Value::string(&this.to_string()),
            Self::ToLocaleString => {
                Value::string(&this.locale_display(&crate::DefaultLocale).to_string())
            }
            Self::ValueOf => Value::Simd(*this),
        })
    }
}
