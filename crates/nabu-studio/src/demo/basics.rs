use std::sync::{Mutex, PoisonError};

use nabu_inspect::prelude::*;
use nabu_ui::UiInput;

use super::{play, step};

static INSTANCES: Mutex<u32> = Mutex::new(1);

#[derive(Debug, Default)]
pub struct BaseTypes {
    pub int_value: i32,
    pub float_value: f32,
    pub double_value: f64,
    pub small: u8,
    pub flag: bool,
    pub text: String,
}

#[derive(Debug)]
pub struct Ranges {
    pub value_clamped: i32,
    pub max_value: f32,
    pub value_dynamic: f32,
    pub ratio: f64,
}

#[derive(Debug, Default)]
pub struct Callbacks {
    pub watched: i32,
    pub changed: bool,
    pub callback_value: f32,
    pub callback_count: u32,
}

#[derive(Debug, Default)]
pub struct Presentation {
    pub hint: String,
    pub described: i32,
    pub warning: String,
    pub spaced: i32,
    pub indented: f32,
    pub pair: (i32, f32),
    pub named: (String, bool),
    pub version: u32,
}

#[derive(Debug, Default)]
pub struct TestStruct {
    pub a: i32,
    pub b: f32,
}

pub(super) fn register(registry: &mut Registry) {
    registry
        .register(
            TypeInfo::<BaseTypes>::new("BaseTypes")
                .field("intValue", |s| &s.int_value, |s| &mut s.int_value)
                .field("floatValue", |s| &s.float_value, |s| &mut s.float_value)
                .field("doubleValue", |s| &s.double_value, |s| &mut s.double_value)
                .field("small", |s| &s.small, |s| &mut s.small)
                .field("flag", |s| &s.flag, |s| &mut s.flag)
                .field("text", |s| &s.text, |s| &mut s.text),
        )
        .register(
            TypeInfo::<Ranges>::new("Ranges")
                .field_with("valueClamped", |s| &s.value_clamped, |s| &mut s.value_clamped, |f| {
                    f.with(Range::new(0, 100))
                })
                .field("maxValue", |s| &s.max_value, |s| &mut s.max_value)
                .field_with("valueDynamic", |s| &s.value_dynamic, |s| &mut s.value_dynamic, |f| {
                    f.with(DynamicRange::up_to(|s: &Ranges| s.max_value))
                })
                .field_with("ratio", |s| &s.ratio, |s| &mut s.ratio, |f| f.with(Range::new(0.0, 1.0))),
        )
        .register(
            TypeInfo::<Callbacks>::new("Callbacks")
                .field_with("watched", |s| &s.watched, |s| &mut s.watched, |f| {
                    f.with(NotifyChange::new(|s: &mut Callbacks| &mut s.changed))
                })
                .constant("changed", |s| &s.changed)
                .field_with("callbackValue", |s| &s.callback_value, |s| &mut s.callback_value, |f| {
                    f.with(ModifiedCallback::new(|s: &mut Callbacks| s.callback_count += 1))
                })
                .constant("callbackCount", |s| &s.callback_count)
                .action_with(
                    "Reset",
                    |s| *s = Callbacks::default(),
                    |a| a.with(Tooltip::new("Clears every value")),
                ),
        )
        .register(
            TypeInfo::<Presentation>::new("Presentation")
                .with(CustomName::new("Presentation settings"))
                .with(StyleVar::new().set(VarSlot::FrameRounding, StyleValue::Float(4.0)))
                .field("hint", |s| &s.hint, |s| &mut s.hint)
                .field_with("described", |s| &s.described, |s| &mut s.described, |f| {
                    f.with(DynamicTooltip::new(|s: &Presentation| s.hint.as_str()))
                })
                .field_with("warning", |s| &s.warning, |s| &mut s.warning, |f| {
                    f.with(StyleColor::new().set(ColorSlot::Text, PackedColor::rgb(230, 80, 60)))
                        .with(Tooltip::new("Shown in red"))
                })
                .field_with("spaced", |s| &s.spaced, |s| &mut s.spaced, |f| f.with(PaddingY::new(12.0)))
                .field_with("indented", |s| &s.indented, |s| &mut s.indented, |f| f.with(PaddingX::new(16.0)))
                .field("pair", |s| &s.pair, |s| &mut s.pair)
                .field_with("named", |s| &s.named, |s| &mut s.named, |f| f.with(PairName::new("Label", "Visible")))
                .field_with("version", |s| &s.version, |s| &mut s.version, |f| {
                    f.with(ReadOnly).with(CustomName::new("Version"))
                }),
        )
        .register(
            TypeInfo::<TestStruct>::new("TestStruct")
                .field("a", |s| &s.a, |s| &mut s.a)
                .static_field("instances", &INSTANCES)
                .field("b", |s| &s.b, |s| &mut s.b)
                .action("MyFunction", |_| {
                    *INSTANCES.lock().unwrap_or_else(PoisonError::into_inner) += 1;
                }),
        );
}

pub(super) fn base_types(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = BaseTypes { text: "nabu".into(), ..BaseTypes::default() };
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("initial", UiInput::new()),
        step(
            "edit everything",
            UiInput::new()
                .set_scalar("intValue/intValue", 42.0)
                .drag_by("floatValue/floatValue", 25.0)
                .set_scalar("doubleValue/doubleValue", 0.125)
                .set_scalar("small/small", 300.0)
                .toggle("flag/flag")
                .type_text("text/text", " studio"),
        ),
    ])
}

pub(super) fn ranges(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Ranges { value_clamped: 10, max_value: 20.0, value_dynamic: 5.0, ratio: 0.5 };
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("clamp a typed value", UiInput::new().set_scalar("valueClamped/valueClamped", 250.0)),
        step("shrink the dynamic bound", UiInput::new().set_scalar("maxValue/maxValue", 3.0)),
        step("edit under the new bound", UiInput::new().set_scalar("valueDynamic/valueDynamic", 9.0)),
        step("slide", UiInput::new().slide_to("ratio/ratio", 0.25)),
    ])
}

pub(super) fn callbacks(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Callbacks::default();
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("notify", UiInput::new().set_scalar("watched/watched", 3.0)),
        step("callback", UiInput::new().drag_by("callbackValue/callbackValue", 15.0)),
        step("read-only edits are dropped", UiInput::new().set_scalar("callbackCount/callbackCount", 99.0)),
        step("reset", UiInput::new().click("Reset/Reset")),
    ])
}

pub(super) fn presentation(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = Presentation { warning: "careful".into(), version: 3, ..Presentation::default() };
    let options = RenderOptions::default().with_window(true);
    play(registry, options, &mut obj, vec![
        step("initial", UiInput::new()),
        step(
            "give the dynamic tooltip some text",
            UiInput::new()
                .set_text("Presentation settings/hint/hint", "read live from `hint`")
                .set_scalar("Presentation settings/pair/First/First", 7.0)
                .toggle("Presentation settings/named/Visible/Visible"),
        ),
        step("redraw", UiInput::new()),
    ])
}

pub(super) fn statics(registry: &Registry) -> anyhow::Result<()> {
    let mut obj = TestStruct::default();
    play(registry, RenderOptions::default(), &mut obj, vec![
        step("run the action", UiInput::new().click("MyFunction/MyFunction")),
        step("edit the shared value", UiInput::new().set_scalar("instances/instances", 10.0)),
    ])?;
    log::info!("instances: {}", INSTANCES.lock().unwrap_or_else(PoisonError::into_inner));
    Ok(())
}
