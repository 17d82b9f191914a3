//! Type-level description of what can be inspected.
//!
//! [`kind`] classifies value types into render strategies, [`modifier`]
//! holds the annotations members carry, and [`TypeInfo`] plus [`Registry`]
//! describe each reflected type's members.

pub mod enumeration;
pub mod kind;
pub mod member;
pub mod modifier;
pub mod numeric;
pub mod registry;
pub mod type_info;

pub use enumeration::{Enumeration, Variant, flags_preview, toggle_flag};
pub use kind::{NumericType, ValueKind};
pub use member::{Location, Member};
pub use modifier::{
    ActionModifier, ContainerAddCallback, CustomName, DynamicRange, DynamicTooltip, EnumFlags,
    EnumRadioButton, FieldModifier, ModifiedCallback, ModifierSet, NotifyChange, PaddingX, PaddingY,
    PairName, Range, ReadOnly, StyleColor, StyleVar, Tooltip, TypeModifier,
};
pub use numeric::{Numeric, Scalar, clamp_inclusive};
pub use registry::{Registry, RegistryError};
pub use type_info::{ActionBuilder, FieldBuilder, TypeInfo};
