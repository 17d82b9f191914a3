//! Nabu inspect: draws editable views of reflected Rust values through an
//! immediate-mode widget backend.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use nabu_inspect::prelude::*;
//!
//! #[derive(Default)]
//! struct Light { intensity: f32, enabled: bool, label: String }
//!
//! let mut registry = Registry::new();
//! registry.register(
//!     TypeInfo::<Light>::new("Light")
//!         .field_with("intensity", |l| &l.intensity, |l| &mut l.intensity, |f| f.with(Range::new(0.0, 10.0)))
//!         .field("enabled", |l| &l.enabled, |l| &mut l.enabled)
//!         .field("label", |l| &l.label, |l| &mut l.label),
//! );
//!
//! let renderer = TypeRenderer::new(&registry);
//! // In your frame callback, with `ui` implementing `WidgetBackend`:
//! let changed = renderer.render_type(&mut ui, &mut light);
//! ```
//!
//! Nested types are drawn through their own registration once they opt in
//! with [`reflected!`]; enums with [`enumeration!`] or [`flags_enumeration!`].

pub mod backend;
pub mod container;
pub mod logging;
pub mod reflect;
pub mod render;

#[doc(hidden)]
pub use bitflags;

pub use backend::WidgetBackend;
pub use reflect::{Registry, TypeInfo};
pub use render::{Inspect, RenderOptions, TypeRenderer};

/// Everything needed to register and draw types.
pub mod prelude {
    pub use crate::backend::{ColorSlot, IdSource, PackedColor, StyleValue, VarSlot, WidgetBackend};
    pub use crate::reflect::{
        ContainerAddCallback, CustomName, DynamicRange, DynamicTooltip, EnumFlags, EnumRadioButton,
        Enumeration, ModifiedCallback, NotifyChange, PaddingX, PaddingY, PairName, Range, ReadOnly,
        Registry, Scalar, StyleColor, StyleVar, Tooltip, TypeInfo, ValueKind,
    };
    pub use crate::render::{Inspect, Metadata, Opaque, RenderOptions, TypeRenderer, display_value};
    pub use crate::{enumeration, flags_enumeration, reflected};
}
