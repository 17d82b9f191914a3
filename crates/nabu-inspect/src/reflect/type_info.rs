use std::fmt;
use std::marker::PhantomData;
use std::sync::Mutex;

use crate::render::Inspect;

use super::member::{Location, Member, MemberBody, TypedField};
use super::modifier::{ActionModifier, CustomName, FieldModifier, ModifierSet, TypeModifier};

/// The registered shape of a reflected type: its members in declaration
/// order and its type-level modifiers.
///
/// ```rust,ignore
/// let info = TypeInfo::<Player>::new("Player")
///     .field("name", |p| &p.name, |p| &mut p.name)
///     .field_with("health", |p| &p.health, |p| &mut p.health, |f| f.with(Range::new(0, 100)))
///     .constant("id", |p| &p.id)
///     .action("respawn", Player::respawn);
/// ```
pub struct TypeInfo<T> {
    name: &'static str,
    modifiers: ModifierSet,
    members: Vec<Member<T>>,
}

impl<T: 'static> TypeInfo<T> {
    pub fn new(name: &'static str) -> Self {
        Self { name, modifiers: ModifierSet::new(), members: Vec::new() }
    }

    /// Attaches a type-level modifier.
    pub fn with<M: TypeModifier<T>>(mut self, modifier: M) -> Self {
        self.modifiers.insert(modifier);
        self
    }

    // ── Fields ────────────────────────────────────────────────────────────

    pub fn field<V: Inspect>(self, name: &'static str, get: fn(&T) -> &V, get_mut: fn(&mut T) -> &mut V) -> Self {
        self.field_with(name, get, get_mut, |f| f)
    }

    pub fn field_with<V: Inspect>(
        self,
        name: &'static str,
        get: fn(&T) -> &V,
        get_mut: fn(&mut T) -> &mut V,
        build: impl FnOnce(FieldBuilder<T, V>) -> FieldBuilder<T, V>,
    ) -> Self {
        self.push_field(name, Location::Instance { get, get_mut }, build)
    }

    /// A field that is displayed but never written.
    pub fn constant<V: Inspect + Clone>(self, name: &'static str, get: fn(&T) -> &V) -> Self {
        self.constant_with(name, get, |f| f)
    }

    pub fn constant_with<V: Inspect + Clone>(
        self,
        name: &'static str,
        get: fn(&T) -> &V,
        build: impl FnOnce(FieldBuilder<T, V>) -> FieldBuilder<T, V>,
    ) -> Self {
        self.push_field(name, Location::Constant { get, clone: V::clone }, build)
    }

    /// A field stored once for the whole process, rendered after the
    /// instance fields.
    pub fn static_field<V: Inspect>(self, name: &'static str, cell: &'static Mutex<V>) -> Self {
        self.static_field_with(name, cell, |f| f)
    }

    pub fn static_field_with<V: Inspect>(
        self,
        name: &'static str,
        cell: &'static Mutex<V>,
        build: impl FnOnce(FieldBuilder<T, V>) -> FieldBuilder<T, V>,
    ) -> Self {
        self.push_field(name, Location::Static(cell), build)
    }

    fn push_field<V: Inspect>(
        mut self,
        name: &'static str,
        location: Location<T, V>,
        build: impl FnOnce(FieldBuilder<T, V>) -> FieldBuilder<T, V>,
    ) -> Self {
        let modifiers = build(FieldBuilder::new()).modifiers;
        let body = MemberBody::Field(Box::new(TypedField { location }));
        self.members.push(Member::new(name, modifiers, body));
        self
    }

    // ── Actions ───────────────────────────────────────────────────────────

    pub fn action(self, name: &'static str, f: fn(&mut T)) -> Self {
        self.action_with(name, f, |a| a)
    }

    pub fn action_with(
        mut self,
        name: &'static str,
        f: fn(&mut T),
        build: impl FnOnce(ActionBuilder<T>) -> ActionBuilder<T>,
    ) -> Self {
        let modifiers = build(ActionBuilder::new()).modifiers;
        self.members.push(Member::new(name, modifiers, MemberBody::Action(f)));
        self
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The type-level [`CustomName`] if attached, else the registered name.
    pub fn display_name(&self) -> &'static str {
        self.modifiers.get::<CustomName>().map_or(self.name, |c| c.text)
    }

    #[inline]
    pub fn members(&self) -> &[Member<T>] {
        &self.members
    }

    #[inline]
    pub fn modifiers(&self) -> &ModifierSet {
        &self.modifiers
    }

    /// Looks a member up by declared name.
    pub fn member(&self, declared_name: &str) -> Option<&Member<T>> {
        self.members.iter().find(|m| m.declared_name() == declared_name)
    }

    pub fn has_static_fields(&self) -> bool {
        self.members.iter().any(|m| !m.is_function() && m.is_static())
    }
}

impl<T: 'static> fmt::Debug for TypeInfo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("modifiers", &self.modifiers)
            .field("members", &self.members)
            .finish()
    }
}

// ── Member builders ───────────────────────────────────────────────────────

/// Collects the modifiers of a field of type `V` on `T`.
pub struct FieldBuilder<T, V> {
    modifiers: ModifierSet,
    _owner: PhantomData<fn(&T, &V)>,
}

impl<T: 'static, V: 'static> FieldBuilder<T, V> {
    fn new() -> Self {
        Self { modifiers: ModifierSet::new(), _owner: PhantomData }
    }

    pub fn with<M: FieldModifier<T, V>>(mut self, modifier: M) -> Self {
        self.modifiers.insert(modifier);
        self
    }
}

/// Collects the modifiers of an action on `T`.
pub struct ActionBuilder<T> {
    modifiers: ModifierSet,
    _owner: PhantomData<fn(&T)>,
}

impl<T: 'static> ActionBuilder<T> {
    fn new() -> Self {
        Self { modifiers: ModifierSet::new(), _owner: PhantomData }
    }

    pub fn with<M: ActionModifier<T>>(mut self, modifier: M) -> Self {
        self.modifiers.insert(modifier);
        self
    }
}
