//! Scripted demos. Each one registers its types, then plays a few frames of
//! input against an instance and prints what was drawn.

mod basics;
mod containers;
mod enums;
mod scene;

use std::fmt;

use anyhow::bail;
use nabu_inspect::{Registry, RenderOptions, TypeRenderer};
use nabu_ui::{Ui, UiInput};

pub struct Demo {
    pub name: &'static str,
    pub about: &'static str,
    pub run: fn(&Registry) -> anyhow::Result<()>,
}

pub fn registry() -> Registry {
    let mut registry = Registry::new();
    basics::register(&mut registry);
    containers::register(&mut registry);
    enums::register(&mut registry);
    scene::register(&mut registry);
    registry
}

pub fn all() -> Vec<Demo> {
    vec![
        Demo { name: "base", about: "numbers, booleans and text", run: basics::base_types },
        Demo { name: "range", about: "fixed and dynamic bounds", run: basics::ranges },
        Demo { name: "callbacks", about: "change notification and actions", run: basics::callbacks },
        Demo { name: "presentation", about: "tooltips, pairs, padding and style", run: basics::presentation },
        Demo { name: "static", about: "static fields after the instance", run: basics::statics },
        Demo { name: "enums", about: "dropdown, radio and flags", run: enums::run },
        Demo { name: "containers", about: "sequences and maps", run: containers::run },
        Demo { name: "scene", about: "nested composites and a custom drawer", run: scene::run },
    ]
}

/// One frame of scripted input.
pub(crate) struct Step {
    label: &'static str,
    input: UiInput,
}

pub(crate) fn step(label: &'static str, input: UiInput) -> Step {
    Step { label, input }
}

/// Plays `steps` against `obj`, printing each frame and the value after it.
///
/// Fails when a step targets a widget that was not drawn, so the scripts
/// stay in sync with the registrations.
pub(crate) fn play<T: fmt::Debug + 'static>(
    registry: &Registry,
    options: RenderOptions,
    obj: &mut T,
    steps: Vec<Step>,
) -> anyhow::Result<()> {
    let info = registry.try_get::<T>()?;
    let renderer = TypeRenderer::new(registry).with_options(options);
    let mut ui = Ui::new();

    println!("  ── {} ──", info.display_name());
    for Step { label, input } in steps {
        let (changed, frame) = ui.run(input, |ui| renderer.render_type(ui, obj));
        println!("  > {label}{}", if changed { " (changed)" } else { "" });
        for line in frame.to_string().lines() {
            println!("    {line}");
        }
        if frame.unbalanced {
            bail!("step `{label}` left the widget stacks unbalanced");
        }
        if let Some(missed) = frame.unmatched.first() {
            bail!("step `{label}`: nothing drawn at `{}`", missed.path);
        }
        println!("    = {obj:?}");
    }
    Ok(())
}
