use std::cmp::Ordering;
use std::fmt;

use super::kind::NumericType;

// ── Scalar ────────────────────────────────────────────────────────────────

/// A numeric value tagged with its concrete type.
///
/// This is what crosses the [`WidgetBackend`](crate::backend::WidgetBackend)
/// boundary for drag and slider controls, so the backend never needs to be
/// generic over the member type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    I8(i8),
    U8(u8),
    I16(i16),
    U16(u16),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl Scalar {
    pub fn numeric_type(self) -> NumericType {
        match self {
            Scalar::I8(_) => NumericType::I8,
            Scalar::U8(_) => NumericType::U8,
            Scalar::I16(_) => NumericType::I16,
            Scalar::U16(_) => NumericType::U16,
            Scalar::I32(_) => NumericType::I32,
            Scalar::U32(_) => NumericType::U32,
            Scalar::I64(_) => NumericType::I64,
            Scalar::U64(_) => NumericType::U64,
            Scalar::F32(_) => NumericType::F32,
            Scalar::F64(_) => NumericType::F64,
        }
    }

    /// Lossy widening, for display and interpolation only.
    pub fn to_f64(self) -> f64 {
        match self {
            Scalar::I8(v) => v as f64,
            Scalar::U8(v) => v as f64,
            Scalar::I16(v) => v as f64,
            Scalar::U16(v) => v as f64,
            Scalar::I32(v) => v as f64,
            Scalar::U32(v) => v as f64,
            Scalar::I64(v) => v as f64,
            Scalar::U64(v) => v as f64,
            Scalar::F32(v) => v as f64,
            Scalar::F64(v) => v,
        }
    }

    /// Builds a scalar of the same type as `self` from `v`.
    ///
    /// Integers are rounded and saturate at the type bounds.
    #[must_use]
    pub fn with_f64(self, v: f64) -> Scalar {
        match self {
            Scalar::I8(_) => Scalar::I8(v.round() as i8),
            Scalar::U8(_) => Scalar::U8(v.round() as u8),
            Scalar::I16(_) => Scalar::I16(v.round() as i16),
            Scalar::U16(_) => Scalar::U16(v.round() as u16),
            Scalar::I32(_) => Scalar::I32(v.round() as i32),
            Scalar::U32(_) => Scalar::U32(v.round() as u32),
            Scalar::I64(_) => Scalar::I64(v.round() as i64),
            Scalar::U64(_) => Scalar::U64(v.round() as u64),
            Scalar::F32(_) => Scalar::F32(v as f32),
            Scalar::F64(_) => Scalar::F64(v),
        }
    }

    /// Adds `delta` without leaving the type's range.
    ///
    /// Integer arithmetic goes through `i128` so 64-bit values keep their
    /// precision.
    #[must_use]
    pub fn offset(self, delta: f64) -> Scalar {
        fn step<T: TryFrom<i128>>(v: i128, delta: f64, min: i128, max: i128) -> Option<T> {
            T::try_from((v.saturating_add(delta.round() as i128)).clamp(min, max)).ok()
        }
        let moved = match self {
            Scalar::I8(v) => step(v as i128, delta, i8::MIN as i128, i8::MAX as i128).map(Scalar::I8),
            Scalar::U8(v) => step(v as i128, delta, 0, u8::MAX as i128).map(Scalar::U8),
            Scalar::I16(v) => step(v as i128, delta, i16::MIN as i128, i16::MAX as i128).map(Scalar::I16),
            Scalar::U16(v) => step(v as i128, delta, 0, u16::MAX as i128).map(Scalar::U16),
            Scalar::I32(v) => step(v as i128, delta, i32::MIN as i128, i32::MAX as i128).map(Scalar::I32),
            Scalar::U32(v) => step(v as i128, delta, 0, u32::MAX as i128).map(Scalar::U32),
            Scalar::I64(v) => step(v as i128, delta, i64::MIN as i128, i64::MAX as i128).map(Scalar::I64),
            Scalar::U64(v) => step(v as i128, delta, 0, u64::MAX as i128).map(Scalar::U64),
            Scalar::F32(v) => Some(Scalar::F32(v + delta as f32)),
            Scalar::F64(v) => Some(Scalar::F64(v + delta)),
        };
        moved.unwrap_or(self)
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::I8(v) => write!(f, "{v}"),
            Scalar::U8(v) => write!(f, "{v}"),
            Scalar::I16(v) => write!(f, "{v}"),
            Scalar::U16(v) => write!(f, "{v}"),
            Scalar::I32(v) => write!(f, "{v}"),
            Scalar::U32(v) => write!(f, "{v}"),
            Scalar::I64(v) => write!(f, "{v}"),
            Scalar::U64(v) => write!(f, "{v}"),
            Scalar::F32(v) => write!(f, "{v:.3}"),
            Scalar::F64(v) => write!(f, "{v:.3}"),
        }
    }
}

// ── Numeric ───────────────────────────────────────────────────────────────

/// Integer and floating point member types.
///
/// Only types implementing this trait accept [`Range`](super::Range) and
/// [`DynamicRange`](super::DynamicRange) modifiers.
pub trait Numeric: Copy + PartialOrd + fmt::Debug + 'static {
    const TYPE: NumericType;
    const ZERO: Self;

    fn to_scalar(self) -> Scalar;

    /// `None` when `scalar` holds a different numeric type.
    fn from_scalar(scalar: Scalar) -> Option<Self>;

    /// Bit-exact equality, so a NaN float compares equal to itself.
    fn same(self, other: Self) -> bool;

    #[inline]
    fn zero() -> Self {
        Self::ZERO
    }
}

macro_rules! impl_numeric_int {
    ($($t:ty => $variant:ident / $kind:ident),* $(,)?) => {$(
        impl Numeric for $t {
            const TYPE: NumericType = NumericType::$kind;
            const ZERO: Self = 0;

            #[inline]
            fn to_scalar(self) -> Scalar {
                Scalar::$variant(self as _)
            }

            #[inline]
            fn from_scalar(scalar: Scalar) -> Option<Self> {
                match scalar {
                    Scalar::$variant(v) => <$t>::try_from(v).ok(),
                    _ => None,
                }
            }

            #[inline]
            fn same(self, other: Self) -> bool {
                self == other
            }
        }
    )*};
}

impl_numeric_int! {
    i8 => I8 / I8,
    u8 => U8 / U8,
    i16 => I16 / I16,
    u16 => U16 / U16,
    i32 => I32 / I32,
    u32 => U32 / U32,
    i64 => I64 / I64,
    u64 => U64 / U64,
    isize => I64 / I64,
    usize => U64 / U64,
}

macro_rules! impl_numeric_float {
    ($($t:ty => $variant:ident),* $(,)?) => {$(
        impl Numeric for $t {
            const TYPE: NumericType = NumericType::$variant;
            const ZERO: Self = 0.0;

            #[inline]
            fn to_scalar(self) -> Scalar {
                Scalar::$variant(self)
            }

            #[inline]
            fn from_scalar(scalar: Scalar) -> Option<Self> {
                match scalar {
                    Scalar::$variant(v) => Some(v),
                    _ => None,
                }
            }

            #[inline]
            fn same(self, other: Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }
    )*};
}

impl_numeric_float! {
    f32 => F32,
    f64 => F64,
}

/// Clamps `value` into the inclusive range spanned by `a` and `b`.
///
/// Reversed bounds are swapped. A value that compares with nothing (NaN)
/// lands on the lower bound.
pub fn clamp_inclusive<N: Numeric>(value: N, a: N, b: N) -> N {
    let (lo, hi) = if b < a { (b, a) } else { (a, b) };
    match value.partial_cmp(&lo) {
        None | Some(Ordering::Less) => lo,
        _ if value > hi => hi,
        _ => value,
    }
}
