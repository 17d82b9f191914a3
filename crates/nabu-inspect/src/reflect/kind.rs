use std::fmt;

use crate::container::ContainerFlags;

/// Concrete numeric representation of a scalar member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericType {
    I8,
    U8,
    I16,
    U16,
    I32,
    U32,
    I64,
    U64,
    F32,
    F64,
}

impl NumericType {
    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, NumericType::F32 | NumericType::F64)
    }

    pub const fn name(self) -> &'static str {
        match self {
            NumericType::I8 => "i8",
            NumericType::U8 => "u8",
            NumericType::I16 => "i16",
            NumericType::U16 => "u16",
            NumericType::I32 => "i32",
            NumericType::U32 => "u32",
            NumericType::I64 => "i64",
            NumericType::U64 => "u64",
            NumericType::F32 => "f32",
            NumericType::F64 => "f64",
        }
    }
}

// ── ValueKind ─────────────────────────────────────────────────────────────

/// Rendering strategy selected for a value type.
///
/// Every type that can appear as a member maps to exactly one kind through
/// [`Inspect::KIND`](crate::render::Inspect::KIND). The set is closed: adding
/// a new value shape means adding a variant here and one render strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Numeric(NumericType),
    Bool,
    Text,
    Enum,
    /// Homogeneous container; the flags tell sequences from maps and fixed
    /// from resizable storage.
    Container(ContainerFlags),
    Pair,
    /// A reflected type rendered through its registered members.
    Composite,
    /// No render strategy. Members of this kind are diagnosed and skipped.
    Unrenderable,
}

impl ValueKind {
    #[inline]
    pub const fn is_renderable(self) -> bool {
        !matches!(self, ValueKind::Unrenderable)
    }

    /// Scalars, booleans and text render on a single line; everything else
    /// gets its own collapsible section when it appears as a sequence element.
    #[inline]
    pub const fn is_trivial(self) -> bool {
        matches!(self, ValueKind::Numeric(_) | ValueKind::Bool | ValueKind::Text)
    }

    pub fn is_key_value(self) -> bool {
        match self {
            ValueKind::Container(flags) => flags.contains(ContainerFlags::KEY_VALUE),
            _ => false,
        }
    }

    pub fn is_mutable_container(self) -> bool {
        match self {
            ValueKind::Container(flags) => flags.contains(ContainerFlags::MUTABLE),
            _ => false,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Numeric(n) => write!(f, "numeric ({})", n.name()),
            ValueKind::Bool => f.write_str("bool"),
            ValueKind::Text => f.write_str("text"),
            ValueKind::Enum => f.write_str("enum"),
            ValueKind::Container(flags) if flags.contains(ContainerFlags::KEY_VALUE) => f.write_str("map"),
            ValueKind::Container(flags) if flags.contains(ContainerFlags::MUTABLE) => f.write_str("sequence"),
            ValueKind::Container(_) => f.write_str("array"),
            ValueKind::Pair => f.write_str("pair"),
            ValueKind::Composite => f.write_str("composite"),
            ValueKind::Unrenderable => f.write_str("unrenderable"),
        }
    }
}
