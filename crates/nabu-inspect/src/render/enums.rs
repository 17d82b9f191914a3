use std::any::type_name;

use crate::backend::WidgetBackend;
use crate::reflect::{EnumFlags, EnumRadioButton, Enumeration, Variant, flags_preview, toggle_flag};

use super::metadata::Metadata;

/// Draws an enumeration in the mode its modifiers select: flags,
/// radio buttons, or a plain dropdown.
///
/// Bits the user picks that the type cannot represent are logged and
/// dropped.
pub fn inspect_enum<E: Enumeration>(value: &mut E, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
    let variants = E::variants();
    let bits = value.to_raw();

    let modifiers = meta.modifiers();
    let next = if modifiers.has::<EnumFlags>() {
        flags(ui, meta, &variants, bits)
    } else if modifiers.has::<EnumRadioButton>() {
        radio(ui, meta, &variants, bits)
    } else {
        dropdown(ui, meta, &variants, bits)
    };

    if next == bits || meta.is_read_only() {
        return false;
    }
    match E::from_raw(next) {
        Some(v) => {
            *value = v;
            true
        }
        None => {
            log::warn!("`{}`: {next:#x} is not a value of {}", meta.name(), type_name::<E>());
            false
        }
    }
}

fn flags(ui: &mut dyn WidgetBackend, meta: &Metadata<'_>, variants: &[Variant], bits: u64) -> u64 {
    let none_label = meta.options().flags_none_label.as_str();
    let mut next = bits;
    if !ui.begin_combo(meta.name(), &flags_preview(variants, bits, none_label)) {
        return next;
    }

    if !variants.iter().any(|v| v.bits == 0) && ui.menu_item(none_label, bits == 0) {
        next = 0;
    }
    for v in variants {
        let selected = if v.bits == 0 { bits == 0 } else { bits & v.bits == v.bits };
        if ui.menu_item(v.name, selected) {
            next = if v.bits == 0 { 0 } else { toggle_flag(next, v.bits) };
        }
    }

    ui.end_combo();
    next
}

fn radio(ui: &mut dyn WidgetBackend, meta: &Metadata<'_>, variants: &[Variant], bits: u64) -> u64 {
    ui.separator_text(meta.name());
    let mut next = bits;
    for v in variants {
        if ui.radio_button(v.name, bits == v.bits) {
            next = v.bits;
        }
    }
    next
}

fn dropdown(ui: &mut dyn WidgetBackend, meta: &Metadata<'_>, variants: &[Variant], bits: u64) -> u64 {
    let current = variants.iter().find(|v| v.bits == bits);
    let preview = match current {
        Some(v) => v.name.to_string(),
        None => format!("{bits:#x}"),
    };

    let mut next = bits;
    if ui.begin_combo(meta.name(), &preview) {
        for v in variants {
            if ui.menu_item(v.name, v.bits == bits) {
                next = v.bits;
            }
        }
        ui.end_combo();
    }
    next
}
