//! Typed annotations attached to members and types at registration time.
//!
//! Attachment is checked by the compiler: a field of type `V` on owner `T`
//! only accepts modifiers implementing [`FieldModifier<T, V>`], actions only
//! accept [`ActionModifier<T>`], and the type itself [`TypeModifier<T>`].
//! Attaching a [`Range`] to a `String`, or [`EnumFlags`] to an `i32`, does
//! not compile.
//!
//! Modifiers that shape a single value ([`Range`], the enum display modes
//! and [`PairName`]) are also accepted on a `Vec`, `VecDeque` or array of
//! such values and then apply to every element.

use std::any::{Any, type_name};
use std::collections::VecDeque;
use std::fmt;

use crate::backend::{ColorSlot, PackedColor, StyleValue, VarSlot};
use crate::container::Resizable;

use super::enumeration::Enumeration;
use super::numeric::{Numeric, clamp_inclusive};

// ── Usage scopes ──────────────────────────────────────────────────────────

/// Modifier usable on a data field of type `V` owned by `T`.
pub trait FieldModifier<T, V>: Any {}

/// Modifier usable on an action of `T`.
pub trait ActionModifier<T>: Any {}

/// Modifier usable on the reflected type `T` itself.
pub trait TypeModifier<T>: Any {}

/// Implements both field and action scopes, for modifiers valid on any member.
macro_rules! member_modifier {
    ($($ty:ty),* $(,)?) => {$(
        impl<T: 'static, V: 'static> FieldModifier<T, V> for $ty {}
        impl<T: 'static> ActionModifier<T> for $ty {}
    )*};
}

/// Extends a value-shaping modifier to sequences of that value.
macro_rules! element_modifier {
    ($ty:ty, <$($p:ident),+> $elem:ty where $($bound:tt)+) => {
        impl<T: 'static, $($p),+> FieldModifier<T, Vec<$elem>> for $ty where $($bound)+ {}
        impl<T: 'static, $($p),+> FieldModifier<T, VecDeque<$elem>> for $ty where $($bound)+ {}
        impl<T: 'static, $($p),+, const N: usize> FieldModifier<T, [$elem; N]> for $ty where $($bound)+ {}
    };
}

// ── ModifierSet ───────────────────────────────────────────────────────────

/// The modifiers attached to one member or type, queried by type.
#[derive(Default)]
pub struct ModifierSet {
    entries: Vec<Entry>,
}

struct Entry {
    name: &'static str,
    value: Box<dyn Any>,
}

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert<M: Any>(&mut self, modifier: M) {
        self.entries.push(Entry { name: type_name::<M>(), value: Box::new(modifier) });
    }

    /// First attached modifier of type `M`.
    pub fn get<M: Any>(&self) -> Option<&M> {
        self.entries.iter().find_map(|e| e.value.downcast_ref::<M>())
    }

    #[inline]
    pub fn has<M: Any>(&self) -> bool {
        self.get::<M>().is_some()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ModifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.iter().map(|e| e.name)).finish()
    }
}

// ── Access ────────────────────────────────────────────────────────────────

/// Renders the control disabled; no edit is ever committed.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReadOnly;

impl<T: 'static, V: 'static> FieldModifier<T, V> for ReadOnly {}

// ── Bounds ────────────────────────────────────────────────────────────────

/// Fixed inclusive bounds. Switches the control to a slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range<V> {
    pub min: V,
    pub max: V,
}

impl<V: Numeric> Range<V> {
    pub const fn new(min: V, max: V) -> Self {
        Self { min, max }
    }

    /// `value` clamped into `[min, max]`.
    #[inline]
    pub fn clamp(&self, value: V) -> V {
        clamp_inclusive(value, self.min, self.max)
    }

    #[inline]
    pub fn contains(&self, value: V) -> bool {
        self.clamp(value).same(value)
    }
}

impl<T: 'static, V: Numeric> FieldModifier<T, V> for Range<V> {}
element_modifier!(Range<V>, <V> V where V: Numeric);

/// Bounds read live from sibling fields of the owning instance.
pub struct DynamicRange<T, V> {
    min: Option<fn(&T) -> V>,
    max: fn(&T) -> V,
    floor: fn() -> V,
}

impl<T, V: Numeric> DynamicRange<T, V> {
    /// `[0, max(owner)]`.
    pub fn up_to(max: fn(&T) -> V) -> Self {
        Self { min: None, max, floor: V::zero }
    }

    /// `[min(owner), max(owner)]`.
    pub fn between(min: fn(&T) -> V, max: fn(&T) -> V) -> Self {
        Self { min: Some(min), max, floor: V::zero }
    }
}

impl<T, V> DynamicRange<T, V> {
    /// Reads the current bounds from `owner`.
    pub fn resolve(&self, owner: &T) -> Range<V> {
        Range { min: self.min.map_or_else(self.floor, |min| min(owner)), max: (self.max)(owner) }
    }
}

impl<T: 'static, V: Numeric> FieldModifier<T, V> for DynamicRange<T, V> {}

// ── Change reporting ──────────────────────────────────────────────────────

/// Sets a sibling boolean when the member changes.
///
/// Takes precedence over [`ModifiedCallback`] when both are attached.
pub struct NotifyChange<T> {
    pub flag: fn(&mut T) -> &mut bool,
}

impl<T> NotifyChange<T> {
    pub fn new(flag: fn(&mut T) -> &mut bool) -> Self {
        Self { flag }
    }
}

impl<T: 'static, V: 'static> FieldModifier<T, V> for NotifyChange<T> {}

/// Called with the owning instance after the member changes.
pub struct ModifiedCallback<T> {
    pub callback: fn(&mut T),
}

impl<T> ModifiedCallback<T> {
    pub fn new(callback: fn(&mut T)) -> Self {
        Self { callback }
    }
}

impl<T: 'static, V: 'static> FieldModifier<T, V> for ModifiedCallback<T> {}

/// Called with the owning instance and the element just added to a resizable
/// sequence, by the "Add element" or insert controls.
///
/// Fixed arrays have no add controls and do not accept it.
pub struct ContainerAddCallback<T, E> {
    pub callback: fn(&mut T, &mut E),
}

impl<T, E> ContainerAddCallback<T, E> {
    pub fn new(callback: fn(&mut T, &mut E)) -> Self {
        Self { callback }
    }
}

impl<T: 'static, E: 'static, V> FieldModifier<T, V> for ContainerAddCallback<T, E>
where
    V: Resizable<Element = E>,
{
}

// ── Enum display modes ────────────────────────────────────────────────────

/// Displays an enum as a set of toggleable flags.
///
/// Wins over [`EnumRadioButton`] when both are attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumFlags;

impl<T: 'static, V: Enumeration> FieldModifier<T, V> for EnumFlags {}
element_modifier!(EnumFlags, <E> E where E: Enumeration);

/// Displays an enum as one radio button per named value.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumRadioButton;

impl<T: 'static, V: Enumeration> FieldModifier<T, V> for EnumRadioButton {}
element_modifier!(EnumRadioButton, <E> E where E: Enumeration);

// ── Text ──────────────────────────────────────────────────────────────────

/// Static hover text. Wins over [`DynamicTooltip`] when both are attached.
#[derive(Debug, Clone, Copy)]
pub struct Tooltip {
    pub text: &'static str,
}

impl Tooltip {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

/// Hover text read live from a sibling string. Suppressed while that string
/// is empty.
pub struct DynamicTooltip<T> {
    pub text: fn(&T) -> &str,
}

impl<T> DynamicTooltip<T> {
    pub fn new(text: fn(&T) -> &str) -> Self {
        Self { text }
    }
}

impl<T: 'static, V: 'static> FieldModifier<T, V> for DynamicTooltip<T> {}
impl<T: 'static> ActionModifier<T> for DynamicTooltip<T> {}

/// Display name overriding the declared one.
#[derive(Debug, Clone, Copy)]
pub struct CustomName {
    pub text: &'static str,
}

impl CustomName {
    pub const fn new(text: &'static str) -> Self {
        Self { text }
    }
}

impl<T: 'static> TypeModifier<T> for CustomName {}

/// Labels for the two halves of a pair. Defaults come from
/// [`RenderOptions::pair_labels`](crate::render::RenderOptions).
#[derive(Debug, Clone, Copy)]
pub struct PairName {
    pub first: &'static str,
    pub second: &'static str,
}

impl PairName {
    pub const fn new(first: &'static str, second: &'static str) -> Self {
        Self { first, second }
    }
}

impl<T: 'static, A: 'static, B: 'static> FieldModifier<T, (A, B)> for PairName {}
element_modifier!(PairName, <A, B> (A, B) where A: 'static, B: 'static);

// ── Layout & style ────────────────────────────────────────────────────────

/// Horizontal space laid out inline before the control, at any depth.
#[derive(Debug, Clone, Copy)]
pub struct PaddingX {
    pub value: f32,
}

impl PaddingX {
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

/// Vertical space before the control. Top-level members only.
#[derive(Debug, Clone, Copy)]
pub struct PaddingY {
    pub value: f32,
}

impl PaddingY {
    pub const fn new(value: f32) -> Self {
        Self { value }
    }
}

/// Color overrides pushed around the member (or every member of a type).
#[derive(Debug, Clone, Default)]
pub struct StyleColor {
    pub colors: Vec<(ColorSlot, PackedColor)>,
}

impl StyleColor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, slot: ColorSlot, color: PackedColor) -> Self {
        self.colors.push((slot, color));
        self
    }
}

impl<T: 'static> TypeModifier<T> for StyleColor {}

/// Style variable overrides pushed around the member (or every member of a type).
#[derive(Debug, Clone, Default)]
pub struct StyleVar {
    pub vars: Vec<(VarSlot, StyleValue)>,
}

impl StyleVar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, slot: VarSlot, value: StyleValue) -> Self {
        self.vars.push((slot, value));
        self
    }
}

impl<T: 'static> TypeModifier<T> for StyleVar {}

member_modifier!(Tooltip, CustomName, PaddingX, PaddingY, StyleColor, StyleVar);
