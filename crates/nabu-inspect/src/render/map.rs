use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::backend::{IdSource, WidgetBackend};
use crate::container::MapAdapter;
use crate::reflect::ValueKind;

use super::display_value;
use super::inspect::Inspect;
use super::metadata::Metadata;

/// Draws a keyed container under a collapsible header: one row per entry
/// with a remove button, the key and the value.
///
/// Values are edited in place. Removals and key renames are collected while
/// the entries are drawn and applied once the loop is over; only the last
/// rename of a pass is applied. A read-only map still draws its buttons but
/// ignores them.
pub fn inspect_map<M>(map: &mut M, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool
where
    M: MapAdapter,
    M::Key: Inspect,
    M::Value: Inspect,
{
    if !ui.collapsing_header(meta.name()) {
        return false;
    }

    let editable = !meta.is_read_only();
    let mut changed = false;
    if ui.button("Add element") && editable {
        changed = map.add_default();
    }

    let width = meta.options().map_item_width;
    let mut removed = Vec::new();
    let mut rename = None;

    for (i, key) in map.keys().into_iter().enumerate() {
        ui.push_id(IdSource::Index(i));

        if ui.button("-") && editable {
            ui.pop_id();
            removed.push(key);
            changed = true;
            continue;
        }
        ui.same_line();

        let mut edited = key.clone();
        ui.set_next_item_width(width);
        if display_value(&mut edited, ui, &meta.child("##key")) {
            rename = Some((key.clone(), edited));
            changed = true;
        }

        ui.same_line();
        ui.text("|");
        ui.same_line();

        ui.set_next_item_width(width);
        if let Some(value) = map.value_mut(&key) {
            let label = i.to_string();
            changed |= display_value(value, ui, &meta.child(&label));
        }

        ui.pop_id();
    }

    for key in &removed {
        map.remove(key);
    }
    if let Some((old, new)) = rename {
        if let Some(value) = map.remove(&old) {
            map.replace(new, value);
            log::debug!("`{}`: key renamed", meta.name());
        }
    }

    changed
}

impl<K, V, S> Inspect for HashMap<K, V, S>
where
    K: Inspect + Eq + Hash + Clone + Default,
    V: Inspect + Default + PartialEq,
    S: BuildHasher + 'static,
{
    const KIND: ValueKind = ValueKind::Container(<Self as MapAdapter>::FLAGS);

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        inspect_map(self, ui, meta)
    }
}

impl<K, V> Inspect for BTreeMap<K, V>
where
    K: Inspect + Ord + Clone + Default,
    V: Inspect + Default + PartialEq,
{
    const KIND: ValueKind = ValueKind::Container(<Self as MapAdapter>::FLAGS);

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        inspect_map(self, ui, meta)
    }
}
