use std::collections::VecDeque;
use std::mem;

use crate::backend::{IdSource, WidgetBackend};
use crate::container::{ContainerFlags, SequenceAdapter};
use crate::reflect::{ContainerAddCallback, Location, ModifierSet, ValueKind};

use super::display_value;
use super::inspect::Inspect;
use super::metadata::Metadata;

/// Draws a positional container under a collapsible header.
///
/// Resizable containers get an "Add element" button and, in front of every
/// element, a remove (`-`) and an insert-before (`+`) button. Elements that
/// are not a single-line scalar get their own header. A read-only sequence
/// still draws its buttons but ignores them.
pub fn inspect_sequence<S>(seq: &mut S, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool
where
    S: SequenceAdapter,
    S::Element: Inspect,
{
    if !ui.collapsing_header(meta.name()) {
        return false;
    }

    let resizable = S::FLAGS.contains(ContainerFlags::MUTABLE);
    let editable = !meta.is_read_only();
    let mut changed = false;

    if resizable && ui.button("Add element") && editable {
        if let Some(index) = seq.push_default() {
            meta.record_added(index);
            changed = true;
        }
    }

    let mut len = seq.len();
    let mut i = 0;
    while i < len {
        if resizable {
            ui.push_id(IdSource::Index(i));
            if ui.button("-") && editable && seq.remove(i) {
                len -= 1;
                meta.record_removed(i);
                changed = true;

                // Nothing is left at or after `i`.
                if len == 0 || i == len {
                    ui.pop_id();
                    break;
                }
            }

            ui.same_line();

            if ui.button("+") && editable && seq.insert_default(i) {
                len += 1;
                meta.record_inserted(i);
                changed = true;
            }

            ui.pop_id();
            ui.same_line();
        }

        let label = i.to_string();
        i += 1;

        if !<S::Element as Inspect>::KIND.is_trivial() && !ui.collapsing_header(&label) {
            continue;
        }
        let Some(element) = seq.element_mut(i - 1) else {
            break;
        };
        changed |= display_value(element, ui, &meta.child(&label));
    }

    changed
}

/// Hands every element added during the pass to the field's
/// [`ContainerAddCallback`], together with the owner.
///
/// The element is moved out of its slot for the call and put back after.
pub(crate) fn run_add_callbacks<T, S>(owner: &mut T, location: &Location<T, S>, modifiers: &ModifierSet, added: &[usize])
where
    T: 'static,
    S: SequenceAdapter,
    S::Element: Default,
{
    let Some(on_add) = modifiers.get::<ContainerAddCallback<T, S::Element>>() else {
        return;
    };

    for &index in added {
        let Some(mut element) = location.with_mut(owner, |seq| seq.element_mut(index).map(mem::take)) else {
            continue;
        };
        (on_add.callback)(owner, &mut element);
        location.with_mut(owner, |seq| {
            if let Some(slot) = seq.element_mut(index) {
                *slot = element;
            }
        });
    }
}

// ── Inspect impls ─────────────────────────────────────────────────────────

impl<E: Inspect, const N: usize> Inspect for [E; N] {
    const KIND: ValueKind = ValueKind::Container(<Self as SequenceAdapter>::FLAGS);

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        inspect_sequence(self, ui, meta)
    }
}

impl<E: Inspect + Default> Inspect for Vec<E> {
    const KIND: ValueKind = ValueKind::Container(<Self as SequenceAdapter>::FLAGS);

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        inspect_sequence(self, ui, meta)
    }

    fn after_add<T: 'static>(owner: &mut T, location: &Location<T, Self>, modifiers: &ModifierSet, added: &[usize]) {
        run_add_callbacks(owner, location, modifiers, added);
    }
}

impl<E: Inspect + Default> Inspect for VecDeque<E> {
    const KIND: ValueKind = ValueKind::Container(<Self as SequenceAdapter>::FLAGS);

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        inspect_sequence(self, ui, meta)
    }

    fn after_add<T: 'static>(owner: &mut T, location: &Location<T, Self>, modifiers: &ModifierSet, added: &[usize]) {
        run_add_callbacks(owner, location, modifiers, added);
    }
}
