//! The renderer dispatch core.
//!
//! [`TypeRenderer::render_type`] walks a registered type's members, instance
//! fields and actions first, then static fields, and draws each one through
//! [`display_value`]. Values pick their drawing strategy through
//! [`Inspect`]; composites recurse back into the member walk one level deeper.
//!
//! The owning instance is never borrowed while one of its fields is: dynamic
//! bounds are read from it before the field is drawn, and change
//! notifications, callbacks, tooltips and add callbacks run after.

mod enums;
mod inspect;
mod map;
mod metadata;
mod options;
mod pair;
mod sequence;

pub use enums::inspect_enum;
pub use inspect::{Inspect, Opaque, inspect_numeric};
pub use map::inspect_map;
pub use metadata::Metadata;
pub use options::RenderOptions;
pub use sequence::inspect_sequence;

use std::any::{Any, type_name};
use std::cell::RefCell;

use crate::backend::{IdSource, WidgetBackend};
use crate::reflect::{
    DynamicRange, DynamicTooltip, Location, Member, ModifiedCallback, ModifierSet, NotifyChange,
    PaddingX, PaddingY, ReadOnly, Registry, StyleColor, StyleVar, Tooltip, TypeInfo,
};

// ── TypeRenderer ──────────────────────────────────────────────────────────

/// Draws registered types through a [`WidgetBackend`].
///
/// ```rust,ignore
/// let renderer = TypeRenderer::new(&registry).with_options(RenderOptions::default().with_window(true));
/// // Once per frame:
/// if renderer.render_type(&mut ui, &mut settings) {
///     settings.save();
/// }
/// ```
pub struct TypeRenderer<'r> {
    registry: &'r Registry,
    options: RenderOptions,
}

impl<'r> TypeRenderer<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry, options: RenderOptions::default() }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    #[inline]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    #[inline]
    pub fn registry(&self) -> &'r Registry {
        self.registry
    }

    /// Runs one pass over `obj`. Returns whether any of its values changed.
    ///
    /// An unregistered `T` is reported and draws nothing.
    pub fn render_type<T: 'static>(&self, ui: &mut dyn WidgetBackend, obj: &mut T) -> bool {
        let Some(info) = self.registry.get::<T>() else {
            if self.registry.first_miss::<T>() {
                log::warn!("`{}` is not registered; nothing to render", type_name::<T>());
            }
            return false;
        };

        let cx = Context { registry: self.registry, options: &self.options, read_only: false };
        if !self.options.in_window {
            return display_members(ui, obj, info, &cx, 0);
        }

        let open = ui.begin_window(info.display_name());
        let changed = open && display_members(ui, obj, info, &cx, 0);
        ui.end_window();
        changed
    }
}

// ── Member walk ───────────────────────────────────────────────────────────

struct Context<'a> {
    registry: &'a Registry,
    options: &'a RenderOptions,
    /// Set inside a read-only field: nested members commit nothing either.
    read_only: bool,
}

/// What a type-erased field needs to draw itself.
pub(crate) struct FieldScope<'a> {
    name: &'a str,
    depth: usize,
    read_only: bool,
    modifiers: &'a ModifierSet,
    registry: &'a Registry,
    options: &'a RenderOptions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pass {
    Instance,
    Static,
}

fn display_members<T: 'static>(
    ui: &mut dyn WidgetBackend,
    obj: &mut T,
    info: &TypeInfo<T>,
    cx: &Context<'_>,
    depth: usize,
) -> bool {
    let style = push_style(ui, info.modifiers());

    let mut changed = display_pass(ui, obj, info, cx, depth, Pass::Instance);
    if info.has_static_fields() {
        ui.separator();
    }
    changed |= display_pass(ui, obj, info, cx, depth, Pass::Static);

    pop_style(ui, style);
    changed
}

fn display_pass<T: 'static>(
    ui: &mut dyn WidgetBackend,
    obj: &mut T,
    info: &TypeInfo<T>,
    cx: &Context<'_>,
    depth: usize,
    pass: Pass,
) -> bool {
    let mut changed = false;
    for member in info.members() {
        if member.is_function() {
            if pass == Pass::Static {
                continue;
            }
            display_action(ui, obj, member, depth);
        } else {
            if member.is_static() != (pass == Pass::Static) {
                continue;
            }
            changed |= display_field(ui, obj, member, cx, depth);
        }
        display_tooltip(ui, obj, member.modifiers());
    }
    changed
}

fn display_field<T: 'static>(
    ui: &mut dyn WidgetBackend,
    obj: &mut T,
    member: &Member<T>,
    cx: &Context<'_>,
    depth: usize,
) -> bool {
    let Some(field) = member.field() else {
        return false;
    };
    let kind = field.kind();
    if !kind.is_renderable() {
        if member.first_diagnosis() {
            log::warn!("`{}::{}` has no render strategy; skipped", type_name::<T>(), member.declared_name());
        }
        return false;
    }

    let modifiers = member.modifiers();
    let read_only = cx.read_only || !member.is_writable() || modifiers.has::<ReadOnly>();

    ui.begin_disabled(read_only);
    let style = push_style(ui, modifiers);
    let scope =
        FieldScope { name: member.name(), depth, read_only, modifiers, registry: cx.registry, options: cx.options };
    let changed = field.render(obj, ui, scope);
    pop_style(ui, style);
    ui.end_disabled();

    if changed {
        notify_change(obj, modifiers);
    }
    changed
}

/// At most one of the notification modifiers fires; [`NotifyChange`] wins.
fn notify_change<T: 'static>(obj: &mut T, modifiers: &ModifierSet) {
    if let Some(notify) = modifiers.get::<NotifyChange<T>>() {
        *(notify.flag)(obj) = true;
    } else if let Some(on_change) = modifiers.get::<ModifiedCallback<T>>() {
        (on_change.callback)(obj);
    }
}

fn display_action<T: 'static>(ui: &mut dyn WidgetBackend, obj: &mut T, member: &Member<T>, depth: usize) {
    let Some(action) = member.action() else {
        return;
    };
    let name = member.name();

    ui.push_id(IdSource::Str(name));
    apply_padding(ui, member.modifiers(), depth);
    let style = push_style(ui, member.modifiers());
    let clicked = ui.button(name);
    pop_style(ui, style);
    ui.pop_id();

    if clicked {
        log::trace!("invoking `{}::{name}`", type_name::<T>());
        action(obj);
    }
}

/// A static [`Tooltip`] wins over a [`DynamicTooltip`]; an empty dynamic
/// text shows nothing.
fn display_tooltip<T: 'static>(ui: &mut dyn WidgetBackend, obj: &T, modifiers: &ModifierSet) {
    if let Some(tooltip) = modifiers.get::<Tooltip>() {
        ui.set_item_tooltip(tooltip.text);
    } else if let Some(tooltip) = modifiers.get::<DynamicTooltip<T>>() {
        let text = (tooltip.text)(obj);
        if !text.is_empty() {
            ui.set_item_tooltip(text);
        }
    }
}

// ── Layout & style ────────────────────────────────────────────────────────

fn apply_padding(ui: &mut dyn WidgetBackend, modifiers: &ModifierSet, depth: usize) {
    if depth == 0 {
        if let Some(padding) = modifiers.get::<PaddingY>() {
            ui.dummy(0.0, padding.value);
        }
    }
    if let Some(padding) = modifiers.get::<PaddingX>() {
        ui.dummy(padding.value, 0.0);
        ui.same_line();
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct PushedStyle {
    colors: usize,
    vars: usize,
}

fn push_style(ui: &mut dyn WidgetBackend, modifiers: &ModifierSet) -> PushedStyle {
    let mut pushed = PushedStyle::default();
    if let Some(style) = modifiers.get::<StyleColor>() {
        for &(slot, color) in &style.colors {
            ui.push_style_color(slot, color);
        }
        pushed.colors = style.colors.len();
    }
    if let Some(style) = modifiers.get::<StyleVar>() {
        for &(slot, value) in &style.vars {
            ui.push_style_var(slot, value);
        }
        pushed.vars = style.vars.len();
    }
    pushed
}

fn pop_style(ui: &mut dyn WidgetBackend, pushed: PushedStyle) {
    if pushed.vars > 0 {
        ui.pop_style_var(pushed.vars);
    }
    if pushed.colors > 0 {
        ui.pop_style_color(pushed.colors);
    }
}

// ── Value rendering ───────────────────────────────────────────────────────

/// Draws one value: fields, container elements, map keys and values, and
/// pair halves all go through here.
///
/// The value's controls are scoped under its display name on the id stack.
/// Padding modifiers apply before them.
pub fn display_value<V: Inspect>(value: &mut V, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
    ui.push_id(IdSource::Str(meta.name()));
    apply_padding(ui, meta.modifiers(), meta.depth());
    let changed = value.inspect(ui, meta);
    ui.pop_id();
    changed
}

pub(crate) fn render_field<T: 'static, V: Inspect>(
    location: &Location<T, V>,
    owner: &mut T,
    ui: &mut dyn WidgetBackend,
    scope: FieldScope<'_>,
) -> bool {
    let modifiers = scope.modifiers;
    let dynamic = modifiers.get::<DynamicRange<T, V>>().map(|r| r.resolve(owner));

    let added = RefCell::new(Vec::new());
    let meta = Metadata {
        name: scope.name,
        depth: scope.depth,
        read_only: scope.read_only,
        modifiers,
        bounds: dynamic.as_ref().map(|r| r as &dyn Any),
        added: Some(&added),
        registry: scope.registry,
        options: scope.options,
    };
    let changed = location.with_mut(owner, |value| display_value(value, ui, &meta));

    let added = added.into_inner();
    if !added.is_empty() {
        V::after_add(owner, location, modifiers, &added);
    }
    changed
}

/// Draws a reflected composite by walking its registered members one level
/// deeper. An unregistered type is reported once and draws nothing.
pub fn render_nested<T: 'static>(value: &mut T, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
    let registry = meta.registry();
    let Some(info) = registry.get::<T>() else {
        if registry.first_miss::<T>() {
            log::warn!("`{}` holds a `{}`, which is not registered; skipped", meta.name(), type_name::<T>());
        }
        return false;
    };
    let cx = Context { registry, options: meta.options(), read_only: meta.is_read_only() };
    display_members(ui, value, info, &cx, meta.depth() + 1)
}

/// Implements [`Inspect`] for registered composite types, drawing them
/// through their [`TypeInfo`].
///
/// ```rust,ignore
/// nabu_inspect::reflected!(Transform, Light);
/// ```
#[macro_export]
macro_rules! reflected {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::render::Inspect for $ty {
            const KIND: $crate::reflect::ValueKind = $crate::reflect::ValueKind::Composite;

            fn inspect(
                &mut self,
                ui: &mut dyn $crate::backend::WidgetBackend,
                meta: &$crate::render::Metadata<'_>,
            ) -> bool {
                $crate::render::render_nested(self, ui, meta)
            }
        }
    )+};
}
