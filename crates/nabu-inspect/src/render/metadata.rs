use std::any::Any;
use std::cell::RefCell;

use crate::reflect::{ModifierSet, Numeric, Range, Registry};

use super::options::RenderOptions;

/// What a renderer knows about the value it is drawing.
///
/// Built fresh for every member on every pass and handed one level down the
/// traversal by reference.
pub struct Metadata<'a> {
    pub(crate) name: &'a str,
    pub(crate) depth: usize,
    /// Edits are drawn but never committed. Inherited by every element and
    /// nested member below.
    pub(crate) read_only: bool,
    pub(crate) modifiers: &'a ModifierSet,
    /// A `DynamicRange` of the member's own value type, already resolved
    /// against the owner.
    pub(crate) bounds: Option<&'a dyn Any>,
    /// Indices of sequence elements added this pass.
    pub(crate) added: Option<&'a RefCell<Vec<usize>>>,
    pub(crate) registry: &'a Registry,
    pub(crate) options: &'a RenderOptions,
}

impl<'a> Metadata<'a> {
    /// Display name; also the label of the value's control.
    #[inline]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// Zero for the members of the top-level type, one more for every level
    /// of nesting below it.
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[inline]
    pub fn is_top_level(&self) -> bool {
        self.depth == 0
    }

    /// Renderers draw the user's edit but must not write it back.
    #[inline]
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    #[inline]
    pub fn modifiers(&self) -> &'a ModifierSet {
        self.modifiers
    }

    #[inline]
    pub fn registry(&self) -> &'a Registry {
        self.registry
    }

    #[inline]
    pub fn options(&self) -> &'a RenderOptions {
        self.options
    }

    /// Bounds for a numeric value of type `V`, if the member has any. A
    /// fixed [`Range`] wins over a dynamic one and also reaches the elements
    /// of a sequence.
    pub fn range<V: Numeric>(&self) -> Option<Range<V>> {
        self.modifiers
            .get::<Range<V>>()
            .or_else(|| self.bounds.and_then(|b| b.downcast_ref::<Range<V>>()))
            .copied()
    }

    /// Metadata for an element of this value: container entries and pair halves.
    pub fn child<'b>(&'b self, name: &'b str) -> Metadata<'b> {
        Metadata {
            name,
            depth: self.depth + 1,
            read_only: self.read_only,
            modifiers: self.modifiers,
            bounds: None,
            added: None,
            registry: self.registry,
            options: self.options,
        }
    }

    pub(crate) fn record_added(&self, index: usize) {
        if let Some(added) = self.added {
            added.borrow_mut().push(index);
        }
    }

    /// An element was inserted before `index`: later recorded elements move up.
    pub(crate) fn record_inserted(&self, index: usize) {
        if let Some(added) = self.added {
            let mut added = added.borrow_mut();
            for i in added.iter_mut().filter(|i| **i >= index) {
                *i += 1;
            }
            added.push(index);
        }
    }

    /// The element at `index` is gone: forget it and move later ones down.
    pub(crate) fn record_removed(&self, index: usize) {
        if let Some(added) = self.added {
            let mut added = added.borrow_mut();
            added.retain(|i| *i != index);
            for i in added.iter_mut().filter(|i| **i > index) {
                *i -= 1;
            }
        }
    }
}
