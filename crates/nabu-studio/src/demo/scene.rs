use nabu_inspect::prelude::*;
use nabu_inspect::reflect::Numeric;
use nabu_ui::UiInput;

use super::{play, step};

/// Drawn by hand as two drags on one line instead of through a registration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f32,
    pub y: f32,
}

impl Default for Vector2 {
    fn default() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Inspect for Vector2 {
    const KIND: ValueKind = ValueKind::Composite;

    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        let speed = meta.options().drag_speed;
        ui.text(meta.name());

        let mut changed = false;
        for (label, axis) in [("x", &mut self.x), ("y", &mut self.y)] {
            let mut value = axis.to_scalar();
            ui.same_line();
            ui.set_next_item_width(0.3);
            if ui.drag_scalar(label, &mut value, speed) && !meta.is_read_only() {
                if let Some(next) = f32::from_scalar(value).filter(|v| !v.same(*axis)) {
                    *axis = next;
                    changed = true;
                }
            }
        }
        changed
    }
}

#[derive(Debug)]
pub struct Transform {
    pub position: Vector2,
    pub scale: Vector2,
    pub rotation: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self { position: Vector2::default(), scale: Vector2 { x: 1.0, y: 1.0 }, rotation: 0.0 }
    }
}

nabu_inspect::reflected!(Transform);

#[derive(Debug, Default)]
pub struct Scene {
    pub name: String,
    pub transform: Transform,
    pub children: Vec<Transform>,
}

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TypeInfo::<Transform>::new("Transform")
                .field("position", |t| &t.position, |t| &mut t.position)
                .field("scale", |t| &t.scale, |t| &mut t.scale)
                .field_with("rotation", |t| &t.rotation, |t| &mut t.rotation, |f| {
                    f.with(Range::new(-180.0, 180.0)).with(Tooltip::new("Degrees"))
                }),
        )
        .register(
            TypeInfo::<Scene>::new("Scene")
                .field("name", |s| &s.name, |s| &mut s.name)
                .field("transform", |s| &s.transform, |s| &mut s.transform)
                .field("children", |s| &s.children, |s| &mut s.children),
        );
}

pub(super) fn run(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Scene { name: "root".into(), ..Scene::default() };
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("move", UiInput::new().drag_by("transform/position/x", 50.0)),
        step("over-rotate", UiInput::new().set_scalar("transform/rotation/rotation", 270.0)),
        step("add a child", UiInput::new().click("children/Add element")),
        step("scale the child", UiInput::new().set_scalar("children/0/scale/x", 2.0)),
        step("collapse the child", UiInput::new().click("children/0")),
    ])
}
