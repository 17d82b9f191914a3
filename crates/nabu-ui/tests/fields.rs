//! Member dispatch and modifiers, driven through the headless backend.

use std::sync::Mutex;

use nabu_inspect::prelude::*;
use nabu_ui::{Frame, NodeKind, Ui, UiInput};

fn pass<T: 'static>(registry: &Registry, obj: &mut T, input: UiInput) -> (bool, Frame) {
    let renderer = TypeRenderer::new(registry);
    Ui::new().run(input, |ui| renderer.render_type(ui, obj))
}

fn registry_of<T: 'static>(info: TypeInfo<T>) -> Registry {
    let mut registry = Registry::new();
    registry.register(info);
    registry
}

// ── Scalars ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct Scalars {
    value_clamped: i32,
    plain: f32,
    flag: bool,
    name: String,
}

fn scalars() -> Registry {
    registry_of(
        TypeInfo::<Scalars>::new("Scalars")
            .field_with("valueClamped", |s| &s.value_clamped, |s| &mut s.value_clamped, |f| f.with(Range::new(0, 10)))
            .field("plain", |s| &s.plain, |s| &mut s.plain)
            .field("flag", |s| &s.flag, |s| &mut s.flag)
            .field("name", |s| &s.name, |s| &mut s.name),
    )
}

#[test]
fn range_clamps_typed_value() {
    let registry = scalars();
    let mut obj = Scalars::default();
    let (changed, frame) = pass(&registry, &mut obj, UiInput::new().set_scalar("valueClamped/valueClamped", 100.0));
    assert!(changed);
    assert_eq!(obj.value_clamped, 10);
    let node = frame.node("valueClamped/valueClamped").map(|n| n.kind.clone());
    assert!(matches!(node, Some(NodeKind::Slider { min: Scalar::I32(0), max: Scalar::I32(10), .. })));
}

#[test]
fn unbounded_numbers_drag() {
    let registry = scalars();
    let mut obj = Scalars::default();
    let (changed, frame) = pass(&registry, &mut obj, UiInput::new().drag_by("plain/plain", 10.0));
    assert!(changed);
    assert!((obj.plain - 1.0).abs() < 1e-6);
    assert_eq!(frame.node("plain/plain").map(|n| n.kind.tag()), Some("drag"));
}

#[test]
fn bool_and_text_fields() {
    let registry = scalars();
    let mut obj = Scalars::default();
    let input = UiInput::new().toggle("flag/flag").set_text("name/name", "lamp");
    let (changed, _) = pass(&registry, &mut obj, input);
    assert!(changed);
    assert!(obj.flag);
    assert_eq!(obj.name, "lamp");
}

#[test]
fn no_input_means_no_change() {
    let registry = scalars();
    let mut obj = Scalars { value_clamped: 4, ..Scalars::default() };
    let (changed, frame) = pass(&registry, &mut obj, UiInput::new());
    assert!(!changed);
    assert_eq!(obj.value_clamped, 4);
    assert!(!frame.unbalanced);
    assert!(frame.contains("name/name"));
}

#[test]
fn setting_the_same_value_is_not_a_change() {
    let registry = scalars();
    let mut obj = Scalars { value_clamped: 4, ..Scalars::default() };
    let (changed, _) = pass(&registry, &mut obj, UiInput::new().set_scalar("valueClamped/valueClamped", 4.0));
    assert!(!changed);
}

// ── Dynamic bounds ────────────────────────────────────────────────────────

#[derive(Default)]
struct Bounded {
    limit: i32,
    value: i32,
    both: i32,
}

fn bounded() -> Registry {
    registry_of(
        TypeInfo::<Bounded>::new("Bounded")
            .field("limit", |s| &s.limit, |s| &mut s.limit)
            .field_with("value", |s| &s.value, |s| &mut s.value, |f| {
                f.with(DynamicRange::up_to(|s: &Bounded| s.limit))
            })
            .field_with("both", |s| &s.both, |s| &mut s.both, |f| {
                f.with(DynamicRange::up_to(|s: &Bounded| s.limit)).with(Range::new(0, 3))
            }),
    )
}

#[test]
fn dynamic_range_follows_sibling() {
    let registry = bounded();
    let mut obj = Bounded { limit: 5, ..Bounded::default() };
    let (_, frame) = pass(&registry, &mut obj, UiInput::new().set_scalar("value/value", 9.0));
    assert_eq!(obj.value, 5);
    let node = frame.node("value/value").map(|n| n.kind.clone());
    assert!(matches!(node, Some(NodeKind::Slider { max: Scalar::I32(5), .. })));
}

#[test]
fn fixed_range_wins_over_dynamic() {
    let registry = bounded();
    let mut obj = Bounded { limit: 5, ..Bounded::default() };
    pass(&registry, &mut obj, UiInput::new().set_scalar("both/both", 9.0));
    assert_eq!(obj.both, 3);
}

#[test]
fn edited_limit_applies_next_pass() {
    let registry = bounded();
    let mut obj = Bounded { limit: 5, value: 5, ..Bounded::default() };
    pass(&registry, &mut obj, UiInput::new().set_scalar("limit/limit", 2.0));
    assert_eq!(obj.limit, 2);
    pass(&registry, &mut obj, UiInput::new().set_scalar("value/value", 4.0));
    assert_eq!(obj.value, 2);
}

// ── Change reporting ──────────────────────────────────────────────────────

#[derive(Default)]
struct Watched {
    both: i32,
    callback_only: i32,
    dirty: bool,
    calls: u32,
}

fn watched() -> Registry {
    registry_of(
        TypeInfo::<Watched>::new("Watched")
            .field_with("both", |s| &s.both, |s| &mut s.both, |f| {
                f.with(NotifyChange::new(|s: &mut Watched| &mut s.dirty))
                    .with(ModifiedCallback::new(|s: &mut Watched| s.calls += 1))
            })
            .field_with("callbackOnly", |s| &s.callback_only, |s| &mut s.callback_only, |f| {
                f.with(ModifiedCallback::new(|s: &mut Watched| s.calls += 1))
            }),
    )
}

#[test]
fn notify_change_wins_over_callback() {
    let registry = watched();
    let mut obj = Watched::default();
    pass(&registry, &mut obj, UiInput::new().set_scalar("both/both", 3.0));
    assert!(obj.dirty);
    assert_eq!(obj.calls, 0);
}

#[test]
fn callback_runs_once_per_change() {
    let registry = watched();
    let mut obj = Watched::default();
    pass(&registry, &mut obj, UiInput::new().set_scalar("callbackOnly/callbackOnly", 3.0));
    assert_eq!(obj.calls, 1);
    assert!(!obj.dirty);
    pass(&registry, &mut obj, UiInput::new());
    assert_eq!(obj.calls, 1);
}

// ── Access ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Locked {
    frozen: i32,
    id: u32,
    list: Vec<i32>,
    named: (String, bool),
}

fn locked() -> Registry {
    registry_of(
        TypeInfo::<Locked>::new("Locked")
            .field_with("frozen", |s| &s.frozen, |s| &mut s.frozen, |f| f.with(ReadOnly))
            .constant("id", |s| &s.id)
            .field_with("list", |s| &s.list, |s| &mut s.list, |f| f.with(ReadOnly))
            .field_with("named", |s| &s.named, |s| &mut s.named, |f| f.with(ReadOnly)),
    )
}

/// Forwards to another backend but never disables anything, so every
/// scripted edit reaches the controls.
struct IgnoresDisabled<'a>(&'a mut dyn WidgetBackend);

impl WidgetBackend for IgnoresDisabled<'_> {
    fn begin_window(&mut self, title: &str) -> bool {
        self.0.begin_window(title)
    }
    fn end_window(&mut self) {
        self.0.end_window()
    }
    fn collapsing_header(&mut self, label: &str) -> bool {
        self.0.collapsing_header(label)
    }
    fn separator(&mut self) {
        self.0.separator()
    }
    fn separator_text(&mut self, label: &str) {
        self.0.separator_text(label)
    }
    fn text(&mut self, text: &str) {
        self.0.text(text)
    }
    fn drag_scalar(&mut self, label: &str, value: &mut Scalar, speed: f32) -> bool {
        self.0.drag_scalar(label, value, speed)
    }
    fn slider_scalar(&mut self, label: &str, value: &mut Scalar, min: Scalar, max: Scalar) -> bool {
        self.0.slider_scalar(label, value, min, max)
    }
    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        self.0.checkbox(label, value)
    }
    fn input_text(&mut self, label: &str, value: &mut String) -> bool {
        self.0.input_text(label, value)
    }
    fn begin_combo(&mut self, label: &str, preview: &str) -> bool {
        self.0.begin_combo(label, preview)
    }
    fn end_combo(&mut self) {
        self.0.end_combo()
    }
    fn menu_item(&mut self, label: &str, selected: bool) -> bool {
        self.0.menu_item(label, selected)
    }
    fn radio_button(&mut self, label: &str, active: bool) -> bool {
        self.0.radio_button(label, active)
    }
    fn button(&mut self, label: &str) -> bool {
        self.0.button(label)
    }
    fn set_item_tooltip(&mut self, text: &str) {
        self.0.set_item_tooltip(text)
    }
    fn dummy(&mut self, width: f32, height: f32) {
        self.0.dummy(width, height)
    }
    fn same_line(&mut self) {
        self.0.same_line()
    }
    fn set_next_item_width(&mut self, fraction: f32) {
        self.0.set_next_item_width(fraction)
    }
    fn push_id(&mut self, id: IdSource<'_>) {
        self.0.push_id(id)
    }
    fn pop_id(&mut self) {
        self.0.pop_id()
    }
    fn begin_disabled(&mut self, _disabled: bool) {
        self.0.begin_disabled(false)
    }
    fn end_disabled(&mut self) {
        self.0.end_disabled()
    }
    fn push_style_color(&mut self, slot: ColorSlot, color: PackedColor) {
        self.0.push_style_color(slot, color)
    }
    fn pop_style_color(&mut self, count: usize) {
        self.0.pop_style_color(count)
    }
    fn push_style_var(&mut self, slot: VarSlot, value: StyleValue) {
        self.0.push_style_var(slot, value)
    }
    fn pop_style_var(&mut self, count: usize) {
        self.0.pop_style_var(count)
    }
}

#[test]
fn read_only_drops_edits() {
    let registry = locked();
    let mut obj = Locked { frozen: 1, id: 7, ..Locked::default() };
    let input = UiInput::new().set_scalar("frozen/frozen", 5.0).set_scalar("id/id", 9.0);
    let (changed, frame) = pass(&registry, &mut obj, input);
    assert!(!changed);
    assert_eq!((obj.frozen, obj.id), (1, 7));
    assert_eq!(frame.dropped.len(), 2);
    assert!(frame.node("frozen/frozen").is_some_and(|n| n.disabled));
    assert!(frame.node("id/id").is_some_and(|n| n.disabled));
}

#[test]
fn read_only_commits_nothing_even_when_the_backend_accepts_edits() {
    let registry = locked();
    let renderer = TypeRenderer::new(&registry);
    let mut obj = Locked { frozen: 1, id: 7, list: vec![3], named: ("a".into(), false) };
    let input = UiInput::new()
        .set_scalar("frozen/frozen", 5.0)
        .set_scalar("id/id", 9.0)
        .click("list/Add element")
        .click("list/0/-")
        .set_scalar("list/0/0", 8.0)
        .set_text("named/First/First", "b")
        .toggle("named/Second/Second");
    let (changed, frame) = Ui::new().run(input, |ui| renderer.render_type(&mut IgnoresDisabled(ui), &mut obj));
    assert!(!changed);
    assert_eq!((obj.frozen, obj.id), (1, 7));
    assert_eq!(obj.list, [3]);
    assert_eq!(obj.named, ("a".to_string(), false));
    assert!(frame.dropped.is_empty());
    assert!(frame.unmatched.is_empty());
}

// ── Tooltips ──────────────────────────────────────────────────────────────

#[derive(Default)]
struct Hinted {
    fixed: i32,
    live: i32,
    hint: String,
}

fn hinted() -> Registry {
    registry_of(
        TypeInfo::<Hinted>::new("Hinted")
            .field_with("fixed", |s| &s.fixed, |s| &mut s.fixed, |f| {
                f.with(DynamicTooltip::new(|s: &Hinted| s.hint.as_str())).with(Tooltip::new("always"))
            })
            .field_with("live", |s| &s.live, |s| &mut s.live, |f| {
                f.with(DynamicTooltip::new(|s: &Hinted| s.hint.as_str()))
            }),
    )
}

#[test]
fn static_tooltip_wins() {
    let registry = hinted();
    let mut obj = Hinted { hint: "live text".into(), ..Hinted::default() };
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    assert_eq!(frame.node("fixed/fixed").and_then(|n| n.tooltip.as_deref()), Some("always"));
    assert_eq!(frame.node("live/live").and_then(|n| n.tooltip.as_deref()), Some("live text"));
}

#[test]
fn empty_dynamic_tooltip_is_suppressed() {
    let registry = hinted();
    let mut obj = Hinted::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    assert_eq!(frame.node("live/live").and_then(|n| n.tooltip.clone()), None);
}

// ── Layout ────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Inner {
    v: f32,
    w: f32,
}

#[derive(Default)]
struct Padded {
    inner: Inner,
    top: f32,
}

nabu_inspect::reflected!(Inner);

fn padded() -> Registry {
    let mut registry = Registry::new();
    registry
        .register(
            TypeInfo::<Inner>::new("Inner")
                .field_with("v", |s| &s.v, |s| &mut s.v, |f| f.with(PaddingY::new(4.0)))
                .field_with("w", |s| &s.w, |s| &mut s.w, |f| f.with(PaddingX::new(3.0))),
        )
        .register(
            TypeInfo::<Padded>::new("Padded")
                .field("inner", |s| &s.inner, |s| &mut s.inner)
                .field_with("top", |s| &s.top, |s| &mut s.top, |f| f.with(PaddingY::new(8.0))),
        );
    registry
}

#[test]
fn vertical_padding_only_at_top_level() {
    let registry = padded();
    let mut obj = Padded::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    let heights: Vec<f32> = frame
        .nodes
        .iter()
        .filter_map(|n| match n.kind {
            NodeKind::Dummy { height, .. } if height > 0.0 => Some(height),
            _ => None,
        })
        .collect();
    assert_eq!(heights, [8.0]);
}

#[test]
fn horizontal_padding_at_any_depth() {
    let registry = padded();
    let mut obj = Padded::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    assert!(frame.nodes_tagged("dummy").any(|n| matches!(n.kind, NodeKind::Dummy { width, .. } if width == 3.0)));
    assert!(frame.node("inner/w/w").is_some_and(|n| n.same_line));
}

#[test]
fn nested_members_are_addressable() {
    let registry = padded();
    let mut obj = Padded::default();
    let (changed, _) = pass(&registry, &mut obj, UiInput::new().set_scalar("inner/v/v", 2.5));
    assert!(changed);
    assert_eq!(obj.inner.v, 2.5);
}

#[derive(Default)]
struct Styled {
    loud: i32,
    quiet: i32,
}

#[test]
fn style_pushes_are_scoped() {
    let red = PackedColor::rgb(255, 0, 0);
    let registry = registry_of(
        TypeInfo::<Styled>::new("Styled")
            .with(StyleVar::new().set(VarSlot::Alpha, StyleValue::Float(0.5)))
            .field_with("loud", |s| &s.loud, |s| &mut s.loud, |f| {
                f.with(StyleColor::new().set(ColorSlot::Text, red))
            })
            .field("quiet", |s| &s.quiet, |s| &mut s.quiet),
    );
    let mut obj = Styled::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());

    let loud = frame.node("loud/loud").map(|n| n.style.clone()).unwrap_or_default();
    let quiet = frame.node("quiet/quiet").map(|n| n.style.clone()).unwrap_or_default();
    assert_eq!(loud.color(ColorSlot::Text), Some(red));
    assert_eq!(quiet.color(ColorSlot::Text), None);
    assert_eq!(quiet.var(VarSlot::Alpha), Some(StyleValue::Float(0.5)));
    assert!(!frame.unbalanced);
}

// ── Static fields ─────────────────────────────────────────────────────────

static SHARED: Mutex<i32> = Mutex::new(0);

#[derive(Default)]
struct WithStatic {
    a: i32,
    b: i32,
}

#[test]
fn static_fields_follow_a_separator() {
    let registry = registry_of(
        TypeInfo::<WithStatic>::new("WithStatic")
            .field("a", |s| &s.a, |s| &mut s.a)
            .static_field("shared", &SHARED)
            .field("b", |s| &s.b, |s| &mut s.b),
    );
    let mut obj = WithStatic::default();
    let (changed, frame) = pass(&registry, &mut obj, UiInput::new().set_scalar("shared/shared", 12.0));
    assert!(changed);
    assert_eq!(*SHARED.lock().unwrap(), 12);

    let separator = frame.nodes.iter().position(|n| n.kind == NodeKind::Separator);
    let (a, b, shared) = (frame.position("a/a"), frame.position("b/b"), frame.position("shared/shared"));
    assert!(a.is_some());
    assert!(a < b);
    assert!(b < separator);
    assert!(separator < shared);
}

#[test]
fn no_separator_without_static_fields() {
    let registry = scalars();
    let mut obj = Scalars::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    assert_eq!(frame.nodes_tagged("separator").count(), 0);
}

// ── Actions ───────────────────────────────────────────────────────────────

#[derive(Default)]
struct Clicky {
    presses: u32,
    level: i32,
}

fn clicky() -> Registry {
    registry_of(
        TypeInfo::<Clicky>::new("Clicky")
            .field("level", |s| &s.level, |s| &mut s.level)
            .action("MyFunction", |s| s.presses += 1)
            .action_with("reset", |s| s.level = 0, |a| a.with(CustomName::new("Reset level")).with(Tooltip::new("zero"))),
    )
}

#[test]
fn actions_run_on_click() {
    let registry = clicky();
    let mut obj = Clicky { level: 3, ..Clicky::default() };
    let input = UiInput::new().click("MyFunction/MyFunction").click("Reset level/Reset level");
    let (changed, frame) = pass(&registry, &mut obj, input);
    assert_eq!(obj.presses, 1);
    assert_eq!(obj.level, 0);
    assert!(!changed);
    assert_eq!(frame.node("Reset level/Reset level").and_then(|n| n.tooltip.as_deref()), Some("zero"));
}

#[test]
fn actions_keep_declaration_order() {
    let registry = clicky();
    let mut obj = Clicky::default();
    let (_, frame) = pass(&registry, &mut obj, UiInput::new());
    let level = frame.position("level/level");
    assert!(level.is_some());
    assert!(level < frame.position("MyFunction/MyFunction"));
}

// ── Skipped values ────────────────────────────────────────────────────────

#[derive(Default)]
struct Unlisted {
    x: i32,
}

nabu_inspect::reflected!(Unlisted);

#[derive(Default)]
struct Holder {
    missing: Unlisted,
    handle: Opaque<u64>,
    kept: i32,
}

#[test]
fn unrenderable_members_are_skipped() {
    let registry = registry_of(
        TypeInfo::<Holder>::new("Holder")
            .field("missing", |s| &s.missing, |s| &mut s.missing)
            .field("handle", |s| &s.handle, |s| &mut s.handle)
            .field("kept", |s| &s.kept, |s| &mut s.kept),
    );
    let mut obj = Holder::default();
    for _ in 0..2 {
        let (changed, frame) = pass(&registry, &mut obj, UiInput::new().set_scalar("missing/x/x", 1.0));
        assert!(!changed);
        assert_eq!(frame.nodes.len(), 1);
        assert!(frame.contains("kept/kept"));
        assert_eq!(frame.unmatched.len(), 1);
    }
    assert_eq!(obj.missing.x, 0);
}

#[test]
fn unregistered_root_draws_nothing() {
    let registry = Registry::new();
    let mut obj = Unlisted::default();
    let (changed, frame) = pass(&registry, &mut obj, UiInput::new());
    assert!(!changed);
    assert!(frame.nodes.is_empty());
}

// ── Pairs ─────────────────────────────────────────────────────────────────

#[derive(Default)]
struct Pairs {
    pair1: (i32, f32),
    pair2: (String, bool),
}

#[test]
fn pair_halves_are_labelled() {
    let registry = registry_of(
        TypeInfo::<Pairs>::new("Pairs")
            .field("pair1", |s| &s.pair1, |s| &mut s.pair1)
            .field_with("pair2", |s| &s.pair2, |s| &mut s.pair2, |f| f.with(PairName::new("Key", "Enabled"))),
    );
    let mut obj = Pairs::default();
    let input = UiInput::new()
        .set_scalar("pair1/First/First", 4.0)
        .set_scalar("pair1/Second/Second", 0.5)
        .set_text("pair2/Key/Key", "k");
    let (changed, frame) = pass(&registry, &mut obj, input);
    assert!(changed);
    assert_eq!(obj.pair1, (4, 0.5));
    assert_eq!(obj.pair2.0, "k");
    assert!(frame.contains("pair2/Enabled/Enabled"));
    assert_eq!(frame.node("pair1/pair1").map(|n| n.kind.tag()), Some("separator-text"));
}

// ── Windows ───────────────────────────────────────────────────────────────

#[test]
fn window_uses_display_name() {
    let registry = registry_of(
        TypeInfo::<Styled>::new("Styled")
            .with(CustomName::new("Settings"))
            .field("loud", |s| &s.loud, |s| &mut s.loud),
    );
    let renderer = TypeRenderer::new(&registry).with_options(RenderOptions::default().with_window(true));
    let mut obj = Styled::default();
    let mut ui = Ui::new();

    let (changed, frame) =
        ui.run(UiInput::new().set_scalar("Settings/loud/loud", 2.0), |ui| renderer.render_type(ui, &mut obj));
    assert!(changed);
    assert_eq!(obj.loud, 2);
    assert!(matches!(frame.node("Settings").map(|n| &n.kind), Some(NodeKind::Window { open: true })));

    ui.set_open("Settings", false);
    let (_, frame) = ui.run(UiInput::new(), |ui| renderer.render_type(ui, &mut obj));
    assert_eq!(frame.nodes.len(), 1);
    assert!(!frame.unbalanced);
}
