use std::any::Any;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use crate::backend::WidgetBackend;
use crate::render::{FieldScope, Inspect, render_field};

use super::kind::ValueKind;
use super::modifier::{CustomName, ModifierSet};

// ── Location ──────────────────────────────────────────────────────────────

/// Where a field's value lives.
pub enum Location<T, V: 'static> {
    /// Inside each instance of the owning type.
    Instance { get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V },
    /// Process-wide storage shared by every instance.
    Static(&'static Mutex<V>),
    /// Read-only view. Rendered on a scratch copy that is discarded.
    Constant { get: fn(&T) -> &V, clone: fn(&V) -> V },
}

impl<T, V: 'static> Location<T, V> {
    #[inline]
    pub fn is_static(&self) -> bool {
        matches!(self, Location::Static(_))
    }

    #[inline]
    pub fn is_writable(&self) -> bool {
        !matches!(self, Location::Constant { .. })
    }

    pub fn with_ref<R>(&self, owner: &T, f: impl FnOnce(&V) -> R) -> R {
        match self {
            Location::Instance { get, .. } | Location::Constant { get, .. } => f(get(owner)),
            Location::Static(cell) => f(&*cell.lock().unwrap_or_else(PoisonError::into_inner)),
        }
    }

    /// Runs `f` on the value's storage. The location stays put for the whole
    /// call, so a read and the write that follows it hit the same value.
    pub fn with_mut<R>(&self, owner: &mut T, f: impl FnOnce(&mut V) -> R) -> R {
        match self {
            Location::Instance { get_mut, .. } => f(get_mut(owner)),
            Location::Static(cell) => f(&mut *cell.lock().unwrap_or_else(PoisonError::into_inner)),
            Location::Constant { get, clone } => {
                let mut scratch = clone(get(owner));
                f(&mut scratch)
            }
        }
    }
}

// ── Type-erased field ─────────────────────────────────────────────────────

pub(crate) trait ErasedField<T>: Any {
    fn kind(&self) -> ValueKind;
    fn is_static(&self) -> bool;
    fn is_writable(&self) -> bool;
    fn render(&self, owner: &mut T, ui: &mut dyn WidgetBackend, scope: FieldScope<'_>) -> bool;
    fn as_any(&self) -> &dyn Any;
}

pub(crate) struct TypedField<T, V: 'static> {
    pub(crate) location: Location<T, V>,
}

impl<T: 'static, V: Inspect> ErasedField<T> for TypedField<T, V> {
    #[inline]
    fn kind(&self) -> ValueKind {
        V::KIND
    }

    #[inline]
    fn is_static(&self) -> bool {
        self.location.is_static()
    }

    #[inline]
    fn is_writable(&self) -> bool {
        self.location.is_writable()
    }

    fn render(&self, owner: &mut T, ui: &mut dyn WidgetBackend, scope: FieldScope<'_>) -> bool {
        render_field(&self.location, owner, ui, scope)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

// ── Member ────────────────────────────────────────────────────────────────

pub(crate) enum MemberBody<T> {
    Field(Box<dyn ErasedField<T>>),
    Action(fn(&mut T)),
}

/// One registered field or action of a reflected type.
///
/// Whether a member is a field or an action is fixed when it is registered.
pub struct Member<T> {
    name: &'static str,
    modifiers: ModifierSet,
    body: MemberBody<T>,
    diagnosed: AtomicBool,
}

impl<T: 'static> Member<T> {
    pub(crate) fn new(name: &'static str, modifiers: ModifierSet, body: MemberBody<T>) -> Self {
        Self { name, modifiers, body, diagnosed: AtomicBool::new(false) }
    }

    /// Display name: the [`CustomName`] modifier if attached, else the declared name.
    pub fn name(&self) -> &'static str {
        self.modifiers.get::<CustomName>().map_or(self.name, |c| c.text)
    }

    #[inline]
    pub fn declared_name(&self) -> &'static str {
        self.name
    }

    #[inline]
    pub fn is_function(&self) -> bool {
        matches!(self.body, MemberBody::Action(_))
    }

    pub fn is_static(&self) -> bool {
        match &self.body {
            MemberBody::Field(field) => field.is_static(),
            MemberBody::Action(_) => false,
        }
    }

    /// Actions are never writable.
    pub fn is_writable(&self) -> bool {
        match &self.body {
            MemberBody::Field(field) => field.is_writable(),
            MemberBody::Action(_) => false,
        }
    }

    /// Render strategy of a field's value; `None` for actions.
    pub fn value_kind(&self) -> Option<ValueKind> {
        match &self.body {
            MemberBody::Field(field) => Some(field.kind()),
            MemberBody::Action(_) => None,
        }
    }

    #[inline]
    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Runs `f` on this field's value as stored for `owner`.
    ///
    /// `None` for actions and when the field does not hold a `V`.
    pub fn with_value<V: 'static, R>(&self, owner: &mut T, f: impl FnOnce(&mut V) -> R) -> Option<R> {
        let MemberBody::Field(field) = &self.body else {
            return None;
        };
        let typed = field.as_any().downcast_ref::<TypedField<T, V>>()?;
        Some(typed.location.with_mut(owner, f))
    }

    /// The callable of an action member.
    pub fn action(&self) -> Option<fn(&mut T)> {
        match self.body {
            MemberBody::Action(f) => Some(f),
            MemberBody::Field(_) => None,
        }
    }

    pub(crate) fn field(&self) -> Option<&dyn ErasedField<T>> {
        match &self.body {
            MemberBody::Field(field) => Some(field.as_ref()),
            MemberBody::Action(_) => None,
        }
    }

    /// `true` the first time it is called for this member.
    pub(crate) fn first_diagnosis(&self) -> bool {
        !self.diagnosed.swap(true, Ordering::Relaxed)
    }
}

impl<T: 'static> fmt::Debug for Member<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("Member");
        s.field("name", &self.name);
        match self.value_kind() {
            Some(kind) => s.field("kind", &format_args!("{kind}")),
            None => s.field("kind", &"action"),
        };
        s.field("static", &self.is_static()).field("modifiers", &self.modifiers).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reflect::ReadOnly;

    #[derive(Default)]
    struct Sample {
        value: i32,
        hits: u32,
    }

    static SHARED: Mutex<i32> = Mutex::new(5);

    fn field<V: Inspect>(name: &'static str, location: Location<Sample, V>) -> Member<Sample> {
        Member::new(name, ModifierSet::new(), MemberBody::Field(Box::new(TypedField { location })))
    }

    #[test]
    fn instance_location_reaches_owner() {
        let member = field("value", Location::Instance { get: |s| &s.value, get_mut: |s| &mut s.value });
        let mut sample = Sample::default();
        member.with_value::<i32, _>(&mut sample, |v| *v = 42);
        assert_eq!(sample.value, 42);
        assert!(!member.is_static());
        assert!(member.is_writable());
        assert!(!member.is_function());
    }

    #[test]
    fn static_location_ignores_owner() {
        let member = field("shared", Location::Static(&SHARED));
        let mut a = Sample::default();
        let mut b = Sample::default();
        member.with_value::<i32, _>(&mut a, |v| *v += 1);
        assert_eq!(member.with_value::<i32, _>(&mut b, |v| *v), Some(6));
        assert!(member.is_static());
    }

    #[test]
    fn constant_location_discards_edits() {
        let member = field("value", Location::Constant { get: |s| &s.value, clone: i32::clone });
        let mut sample = Sample { value: 3, hits: 0 };
        member.with_value::<i32, _>(&mut sample, |v| *v = 99);
        assert_eq!(sample.value, 3);
        assert!(!member.is_writable());
    }

    #[test]
    fn wrong_value_type_is_none() {
        let member = field("value", Location::Instance { get: |s| &s.value, get_mut: |s| &mut s.value });
        let mut sample = Sample::default();
        assert_eq!(member.with_value::<u32, _>(&mut sample, |v| *v), None);
    }

    #[test]
    fn custom_name_overrides_declared_name() {
        let mut modifiers = ModifierSet::new();
        modifiers.insert(CustomName::new("Hit count"));
        modifiers.insert(ReadOnly);
        let member = Member::<Sample>::new(
            "hits",
            modifiers,
            MemberBody::Field(Box::new(TypedField {
                location: Location::Instance { get: |s: &Sample| &s.hits, get_mut: |s: &mut Sample| &mut s.hits },
            })),
        );
        assert_eq!(member.name(), "Hit count");
        assert_eq!(member.declared_name(), "hits");
    }

    #[test]
    fn actions_are_functions() {
        let member = Member::<Sample>::new("bump", ModifierSet::new(), MemberBody::Action(|s| s.hits += 1));
        let mut sample = Sample::default();
        assert!(member.is_function());
        assert!(!member.is_writable());
        assert_eq!(member.value_kind(), None);
        if let Some(f) = member.action() {
            f(&mut sample);
        }
        assert_eq!(sample.hits, 1);
    }

    #[test]
    fn diagnosis_fires_once() {
        let member = Member::<Sample>::new("bump", ModifierSet::new(), MemberBody::Action(|_| {}));
        assert!(member.first_diagnosis());
        assert!(!member.first_diagnosis());
    }
}
