use std::ops::{Deref, DerefMut};

use crate::backend::WidgetBackend;
use crate::reflect::{Location, ModifierSet, Numeric, ValueKind};

use super::metadata::Metadata;

/// A value type the renderer knows how to draw.
///
/// Built-in implementations cover the numeric primitives, `bool`, `String`,
/// fixed arrays, `Vec`, `VecDeque`, `HashMap`, `BTreeMap` and pairs. Reflected
/// composites get theirs from [`reflected!`](crate::reflected), enums from
/// [`enumeration!`](crate::enumeration) or
/// [`flags_enumeration!`](crate::flags_enumeration).
///
/// A type may also implement it by hand to take over its own drawing. Such
/// an implementation must not write to `self` while
/// [`Metadata::is_read_only`] is set:
///
/// ```rust,ignore
/// impl Inspect for Vector2 {
///     const KIND: ValueKind = ValueKind::Composite;
///
///     fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
///         let mut x = Scalar::F32(self.x);
///         let changed = ui.drag_scalar("##x", &mut x, meta.options().drag_speed);
///         // ...
///     }
/// }
/// ```
pub trait Inspect: Sized + 'static {
    const KIND: ValueKind;

    /// Draws `self` and applies the user's edits. Returns whether the value
    /// changed.
    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool;

    /// Runs after a field of this type has been rendered, with the owner
    /// accessible again. `added` lists the positions of elements created
    /// during the pass.
    fn after_add<T: 'static>(owner: &mut T, location: &Location<T, Self>, modifiers: &ModifierSet, added: &[usize]) {
        let _ = (owner, location, modifiers, added);
    }
}

// ── Scalars ───────────────────────────────────────────────────────────────

/// Slider when the member has bounds, drag otherwise. Bounded results are
/// clamped before they are committed.
pub fn inspect_numeric<N: Numeric>(value: &mut N, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
    let range = meta.range::<N>();
    let mut scalar = value.to_scalar();
    let moved = match range {
        Some(r) => ui.slider_scalar(meta.name(), &mut scalar, r.min.to_scalar(), r.max.to_scalar()),
        None => ui.drag_scalar(meta.name(), &mut scalar, meta.options().drag_speed),
    };
    if !moved || meta.is_read_only() {
        return false;
    }

    let Some(mut next) = N::from_scalar(scalar) else {
        log::warn!("`{}`: backend returned {:?} for a {} value", meta.name(), scalar, N::TYPE.name());
        return false;
    };
    if let Some(r) = range {
        next = r.clamp(next);
    }
    if next.same(*value) {
        return false;
    }
    *value = next;
    true
}

macro_rules! impl_inspect_numeric {
    ($($t:ty),* $(,)?) => {$(
        impl Inspect for $t {
            const KIND: ValueKind = ValueKind::Numeric(<$t as Numeric>::TYPE);

            #[inline]
            fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
                inspect_numeric(self, ui, meta)
            }
        }
    )*};
}

impl_inspect_numeric!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize, f32, f64);

impl Inspect for bool {
    const KIND: ValueKind = ValueKind::Bool;

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        let mut next = *self;
        if ui.checkbox(meta.name(), &mut next) && next != *self && !meta.is_read_only() {
            *self = next;
            return true;
        }
        false
    }
}

impl Inspect for String {
    const KIND: ValueKind = ValueKind::Text;

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        let mut next = self.clone();
        if ui.input_text(meta.name(), &mut next) && next != *self && !meta.is_read_only() {
            *self = next;
            return true;
        }
        false
    }
}

// ── Opaque ────────────────────────────────────────────────────────────────

/// A value the inspector does not draw.
///
/// Registering a field of this type is allowed; the renderer reports it
/// once and skips it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Opaque<T>(pub T);

impl<T> Deref for Opaque<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> DerefMut for Opaque<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: 'static> Inspect for Opaque<T> {
    const KIND: ValueKind = ValueKind::Unrenderable;

    fn inspect(&mut self, _ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        log::trace!("`{}` is opaque; skipped", meta.name());
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::NumericType;

    #[test]
    fn kinds_of_builtin_scalars() {
        assert_eq!(<u16 as Inspect>::KIND, ValueKind::Numeric(NumericType::U16));
        assert_eq!(<usize as Inspect>::KIND, ValueKind::Numeric(NumericType::U64));
        assert_eq!(<f32 as Inspect>::KIND, ValueKind::Numeric(NumericType::F32));
        assert_eq!(<bool as Inspect>::KIND, ValueKind::Bool);
        assert_eq!(<String as Inspect>::KIND, ValueKind::Text);
        assert_eq!(<Opaque<std::fs::File> as Inspect>::KIND, ValueKind::Unrenderable);
    }

    #[test]
    fn opaque_derefs_to_inner() {
        let mut o = Opaque(vec![1, 2]);
        o.push(3);
        assert_eq!(o.len(), 3);
    }
}
