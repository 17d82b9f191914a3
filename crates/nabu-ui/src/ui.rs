use std::collections::HashMap;

use nabu_inspect::backend::{ColorSlot, IdSource, PackedColor, StyleValue, VarSlot, WidgetBackend};
use nabu_inspect::reflect::Scalar;

use crate::frame::{Frame, Node, NodeKind};
use crate::id::{IdStack, WidgetId};
use crate::input::{Action, Interaction, UiInput, apply_scalar};
use crate::style::StyleStack;
use crate::text_edit::TextEditState;

/// Settings of the headless backend.
#[derive(Debug, Clone, PartialEq)]
pub struct UiConfig {
    /// Whether headers and windows start open.
    pub default_open: bool,
    /// Width in pixels that [`WidgetBackend::set_next_item_width`] fractions
    /// are taken of.
    pub window_width: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { default_open: true, window_width: 400.0 }
    }
}

impl UiConfig {
    pub fn with_default_open(mut self, open: bool) -> Self {
        self.default_open = open;
        self
    }

    pub fn with_window_width(mut self, width: f32) -> Self {
        self.window_width = width.max(0.0);
        self
    }
}

// ── Ui ────────────────────────────────────────────────────────────────────

/// A [`WidgetBackend`] with no window or GPU behind it.
///
/// Each [`run`](Ui::run) is one frame: scripted [`UiInput`] is delivered to
/// the widgets it targets as they are submitted, and every submitted widget
/// is recorded into the returned [`Frame`]. Header open states and text
/// cursors persist across frames.
///
/// ```rust,ignore
/// let mut ui = Ui::new();
/// let (changed, frame) = ui.run(UiInput::new().click("items/Add element"), |ui| {
///     renderer.render_type(ui, &mut settings)
/// });
/// println!("{frame}");
/// ```
#[derive(Debug, Default)]
pub struct Ui {
    config: UiConfig,
    open: HashMap<WidgetId, bool>,
    text_states: HashMap<WidgetId, TextEditState>,
    pass: FramePass,
    frames: u64,
}

/// Per-frame state, reset by [`Ui::run`].
#[derive(Debug, Default)]
struct FramePass {
    ids: IdStack,
    disabled: Vec<bool>,
    style: StyleStack,
    nodes: Vec<Node>,
    pending: Vec<(Interaction, bool)>,
    dropped: Vec<Interaction>,
    same_line: bool,
    next_width: Option<f32>,
    combos: Vec<Combo>,
}

#[derive(Debug)]
struct Combo {
    select: Option<usize>,
    item: usize,
}

impl Ui {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: UiConfig) -> Self {
        Self { config, ..Self::default() }
    }

    #[inline]
    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Frames run so far.
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    /// Runs one frame: `f` submits widgets, `input` acts on them.
    pub fn run<R>(&mut self, input: UiInput, f: impl FnOnce(&mut Self) -> R) -> (R, Frame) {
        self.pass = FramePass {
            pending: input.interactions.into_iter().map(|i| (i, false)).collect(),
            ..FramePass::default()
        };
        let result = f(self);
        let frame = self.finish();
        self.frames += 1;
        (result, frame)
    }

    /// Forces the header or window at `path` open or closed.
    pub fn set_open(&mut self, path: &str, open: bool) {
        self.open.insert(WidgetId::from_path(path), open);
    }

    pub fn is_open(&self, path: &str) -> bool {
        self.open.get(&WidgetId::from_path(path)).copied().unwrap_or(self.config.default_open)
    }

    /// Cursor and selection of the text field at `path`, once it has been drawn.
    pub fn text_state(&self, path: &str) -> Option<&TextEditState> {
        self.text_states.get(&WidgetId::from_path(path))
    }

    fn finish(&mut self) -> Frame {
        let pass = std::mem::take(&mut self.pass);
        let unbalanced =
            pass.ids.depth() > 0 || !pass.disabled.is_empty() || !pass.style.is_empty() || !pass.combos.is_empty();
        if unbalanced {
            log::warn!(
                "frame {} ended with {} ids, {} disabled scopes, {} combos still pushed",
                self.frames,
                pass.ids.depth(),
                pass.disabled.len(),
                pass.combos.len(),
            );
        }

        let unmatched: Vec<_> = pass.pending.into_iter().filter(|(_, used)| !used).map(|(i, _)| i).collect();
        for i in &unmatched {
            log::debug!("no widget at `{}` for {:?}", i.path, i.action);
        }
        log::trace!("frame {}: {} widgets", self.frames, pass.nodes.len());

        Frame { nodes: pass.nodes, dropped: pass.dropped, unmatched, unbalanced }
    }

    // ── Submission helpers ────────────────────────────────────────────────

    fn disabled(&self) -> bool {
        self.pass.disabled.last().copied().unwrap_or(false)
    }

    /// Takes the interactions aimed at `id`. Those aimed at a disabled
    /// widget are recorded as dropped instead.
    fn take_actions(&mut self, id: WidgetId) -> Vec<Action> {
        let disabled = self.disabled();
        let mut actions = Vec::new();
        for (interaction, used) in &mut self.pass.pending {
            if *used || interaction.target != id {
                continue;
            }
            *used = true;
            if disabled {
                self.pass.dropped.push(interaction.clone());
            } else {
                actions.push(interaction.action.clone());
            }
        }
        actions
    }

    fn record(&mut self, id: WidgetId, path: String, label: &str, kind: NodeKind) {
        let width = match kind {
            NodeKind::Dummy { .. } => None,
            _ => self.pass.next_width.take(),
        };
        let node = Node {
            id,
            path,
            label: visible(label).to_string(),
            kind,
            disabled: self.disabled(),
            same_line: std::mem::take(&mut self.pass.same_line),
            width,
            tooltip: None,
            style: self.pass.style.snapshot(),
            depth: self.pass.ids.depth(),
        };
        self.pass.nodes.push(node);
    }

    /// A widget that only reports clicks.
    fn clickable(&mut self, label: &str, kind: NodeKind) -> bool {
        let (id, path) = self.pass.ids.widget(label);
        let clicked = self.take_actions(id).iter().any(|a| *a == Action::Click);
        self.record(id, path, label, kind);
        clicked
    }

    /// Header and window state: a click flips it.
    fn toggled_open(&mut self, id: WidgetId) -> bool {
        let mut open = self.open.get(&id).copied().unwrap_or(self.config.default_open);
        for action in self.take_actions(id) {
            if action == Action::Click {
                open = !open;
            }
        }
        self.open.insert(id, open);
        open
    }

    fn edit_scalar(&mut self, label: &str, value: &mut Scalar, speed: f32, bounds: Option<(Scalar, Scalar)>) -> (WidgetId, String, bool) {
        let (id, path) = self.pass.ids.widget(label);
        let mut changed = false;
        for action in self.take_actions(id) {
            match apply_scalar(*value, &action, speed, bounds) {
                Some(next) if next != *value => {
                    *value = next;
                    changed = true;
                }
                Some(_) => {}
                None => log::debug!("`{path}` ignores {action:?}"),
            }
        }
        (id, path, changed)
    }
}

/// The part of a label shown to the user.
fn visible(label: &str) -> &str {
    label.split_once("##").map_or(label, |(shown, _)| shown)
}

// ── WidgetBackend ─────────────────────────────────────────────────────────

impl WidgetBackend for Ui {
    fn begin_window(&mut self, title: &str) -> bool {
        let (id, path) = self.pass.ids.widget(title);
        let open = self.toggled_open(id);
        self.record(id, path, title, NodeKind::Window { open });
        self.pass.ids.push(title.to_string());
        open
    }

    fn end_window(&mut self) {
        self.pop_id();
    }

    fn collapsing_header(&mut self, label: &str) -> bool {
        let (id, path) = self.pass.ids.widget(label);
        let open = self.toggled_open(id);
        self.record(id, path, label, NodeKind::Header { open });
        open
    }

    fn separator(&mut self) {
        let (id, path) = self.pass.ids.widget("##separator");
        self.record(id, path, "", NodeKind::Separator);
    }

    fn separator_text(&mut self, label: &str) {
        let (id, path) = self.pass.ids.widget(label);
        self.record(id, path, label, NodeKind::SeparatorText);
    }

    fn text(&mut self, text: &str) {
        let (id, path) = self.pass.ids.widget(text);
        self.record(id, path, text, NodeKind::Text);
    }

    fn drag_scalar(&mut self, label: &str, value: &mut Scalar, speed: f32) -> bool {
        let (id, path, changed) = self.edit_scalar(label, value, speed, None);
        self.record(id, path, label, NodeKind::Drag { value: *value });
        changed
    }

    fn slider_scalar(&mut self, label: &str, value: &mut Scalar, min: Scalar, max: Scalar) -> bool {
        // Typed values are not clamped here; that is the caller's job.
        let (id, path, changed) = self.edit_scalar(label, value, 1.0, Some((min, max)));
        self.record(id, path, label, NodeKind::Slider { value: *value, min, max });
        changed
    }

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool {
        let (id, path) = self.pass.ids.widget(label);
        let before = *value;
        for action in self.take_actions(id) {
            if matches!(action, Action::Click | Action::Toggle) {
                *value = !*value;
            }
        }
        self.record(id, path, label, NodeKind::Checkbox { checked: *value });
        *value != before
    }

    fn input_text(&mut self, label: &str, value: &mut String) -> bool {
        let (id, path) = self.pass.ids.widget(label);
        let actions = self.take_actions(id);

        let state = self.text_states.entry(id).or_insert_with(|| TextEditState::new(value.as_str()));
        if state.text != *value {
            *state = TextEditState::new(value.as_str());
        }
        for action in actions {
            match action {
                Action::SetText(text) => *state = TextEditState::new(text),
                Action::TypeText(text) => state.insert_str(&text),
                Action::Key(key) => {
                    state.on_key(key);
                }
                Action::Click => {}
                other => log::debug!("`{path}` ignores {other:?}"),
            }
        }

        let changed = state.text != *value;
        if changed {
            value.clone_from(&state.text);
        }
        self.record(id, path, label, NodeKind::InputText { text: value.clone() });
        changed
    }

    fn begin_combo(&mut self, label: &str, preview: &str) -> bool {
        let (id, path) = self.pass.ids.widget(label);
        let mut select = None;
        for action in self.take_actions(id) {
            match action {
                Action::SelectIndex(n) => select = Some(n),
                Action::Click => {}
                other => log::debug!("`{path}` ignores {other:?}"),
            }
        }
        self.record(id, path, label, NodeKind::Combo { preview: preview.to_string() });

        // The list is always shown so its items can be targeted.
        self.pass.ids.push(label.to_string());
        self.pass.combos.push(Combo { select, item: 0 });
        true
    }

    fn end_combo(&mut self) {
        if self.pass.combos.pop().is_none() {
            log::warn!("end_combo without begin_combo");
            return;
        }
        self.pop_id();
    }

    fn menu_item(&mut self, label: &str, selected: bool) -> bool {
        let picked = match self.pass.combos.last_mut() {
            Some(combo) => {
                let picked = combo.select == Some(combo.item);
                combo.item += 1;
                picked
            }
            None => false,
        };
        let clicked = self.clickable(label, NodeKind::MenuItem { selected });
        picked || clicked
    }

    fn radio_button(&mut self, label: &str, active: bool) -> bool {
        self.clickable(label, NodeKind::Radio { active })
    }

    fn button(&mut self, label: &str) -> bool {
        self.clickable(label, NodeKind::Button)
    }

    fn set_item_tooltip(&mut self, text: &str) {
        match self.pass.nodes.last_mut() {
            Some(node) => node.tooltip = Some(text.to_string()),
            None => log::debug!("tooltip `{text}` with no widget to attach to"),
        }
    }

    fn dummy(&mut self, width: f32, height: f32) {
        let (id, path) = self.pass.ids.widget("##dummy");
        self.record(id, path, "", NodeKind::Dummy { width, height });
    }

    fn same_line(&mut self) {
        self.pass.same_line = true;
    }

    fn set_next_item_width(&mut self, fraction: f32) {
        self.pass.next_width = Some(fraction.clamp(0.0, 1.0) * self.config.window_width);
    }

    fn push_id(&mut self, id: IdSource<'_>) {
        let segment = match id {
            IdSource::Str(s) => s.to_string(),
            IdSource::Index(i) => i.to_string(),
        };
        self.pass.ids.push(segment);
    }

    fn pop_id(&mut self) {
        if !self.pass.ids.pop() {
            log::warn!("pop_id on an empty id stack");
        }
    }

    fn begin_disabled(&mut self, disabled: bool) {
        let inherited = self.disabled();
        self.pass.disabled.push(inherited || disabled);
    }

    fn end_disabled(&mut self) {
        if self.pass.disabled.pop().is_none() {
            log::warn!("end_disabled without begin_disabled");
        }
    }

    fn push_style_color(&mut self, slot: ColorSlot, color: PackedColor) {
        self.pass.style.push_color(slot, color);
    }

    fn pop_style_color(&mut self, count: usize) {
        let missing = self.pass.style.pop_colors(count);
        if missing > 0 {
            log::warn!("pop_style_color({count}) with {missing} too few pushed");
        }
    }

    fn push_style_var(&mut self, slot: VarSlot, value: StyleValue) {
        self.pass.style.push_var(slot, value);
    }

    fn pop_style_var(&mut self, count: usize) {
        let missing = self.pass.style.pop_vars(count);
        if missing > 0 {
            log::warn!("pop_style_var({count}) with {missing} too few pushed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::EditKey;

    #[test]
    fn button_click_matches_by_path() {
        let mut ui = Ui::new();
        let (clicked, frame) = ui.run(UiInput::new().click("panel/ok"), |ui| {
            ui.push_id(IdSource::Str("panel"));
            let ok = ui.button("ok");
            let cancel = ui.button("cancel");
            ui.pop_id();
            (ok, cancel)
        });
        assert_eq!(clicked, (true, false));
        assert!(frame.unmatched.is_empty());
        assert!(!frame.unbalanced);
        assert_eq!(frame.nodes.len(), 2);
    }

    #[test]
    fn disabled_widgets_drop_input() {
        let mut ui = Ui::new();
        let (clicked, frame) = ui.run(UiInput::new().click("ok"), |ui| {
            ui.begin_disabled(true);
            let ok = ui.button("ok");
            ui.end_disabled();
            ok
        });
        assert!(!clicked);
        assert_eq!(frame.dropped.len(), 1);
        assert!(frame.node("ok").is_some_and(|n| n.disabled));
    }

    #[test]
    fn unmatched_input_is_reported() {
        let mut ui = Ui::new();
        let (_, frame) = ui.run(UiInput::new().click("missing"), |ui| ui.button("ok"));
        assert_eq!(frame.unmatched.len(), 1);
    }

    #[test]
    fn header_state_persists() {
        let mut ui = Ui::new();
        let (open, _) = ui.run(UiInput::new().click("items"), |ui| ui.collapsing_header("items"));
        assert!(!open);
        let (open, _) = ui.run(UiInput::new(), |ui| ui.collapsing_header("items"));
        assert!(!open);
        assert!(!ui.is_open("items"));
        ui.set_open("items", true);
        let (open, _) = ui.run(UiInput::new(), |ui| ui.collapsing_header("items"));
        assert!(open);
    }

    #[test]
    fn combo_select_picks_nth_item() {
        let mut ui = Ui::new();
        let (picked, frame) = ui.run(UiInput::new().select("mode", 1), |ui| {
            let mut picked = Vec::new();
            if ui.begin_combo("mode", "A") {
                picked.push(ui.menu_item("A", true));
                picked.push(ui.menu_item("B", false));
                ui.end_combo();
            }
            picked
        });
        assert_eq!(picked, [false, true]);
        assert!(frame.contains("mode/B"));
    }

    #[test]
    fn text_edits_apply_in_order() {
        let mut ui = Ui::new();
        let mut name = String::from("abc");
        let input = UiInput::new().key("name", EditKey::Backspace).type_text("name", "de");
        let (changed, _) = ui.run(input, |ui| ui.input_text("name", &mut name));
        assert!(changed);
        assert_eq!(name, "abde");
        assert_eq!(ui.text_state("name").map(|s| s.cursor), Some(4));
    }

    #[test]
    fn slider_accepts_out_of_range_values() {
        let mut ui = Ui::new();
        let mut value = Scalar::I32(5);
        let (changed, _) = ui.run(UiInput::new().set_scalar("v", 100.0), |ui| {
            ui.slider_scalar("v", &mut value, Scalar::I32(0), Scalar::I32(10))
        });
        assert!(changed);
        assert_eq!(value, Scalar::I32(100));
    }

    #[test]
    fn width_skips_dummies() {
        let mut ui = Ui::with_config(UiConfig::default().with_window_width(200.0));
        let (_, frame) = ui.run(UiInput::new(), |ui| {
            ui.set_next_item_width(0.5);
            ui.dummy(4.0, 0.0);
            ui.same_line();
            ui.text("label");
        });
        assert_eq!(frame.node("##dummy").and_then(|n| n.width), None);
        let label = frame.node("label");
        assert_eq!(label.and_then(|n| n.width), Some(100.0));
        assert!(label.is_some_and(|n| n.same_line));
    }

    #[test]
    fn unbalanced_frames_are_flagged() {
        let mut ui = Ui::new();
        let (_, frame) = ui.run(UiInput::new(), |ui| ui.push_id(IdSource::Index(0)));
        assert!(frame.unbalanced);
        let (_, frame) = ui.run(UiInput::new(), |ui| ui.text("next"));
        assert!(!frame.unbalanced);
        assert!(frame.contains("next"));
    }

    #[test]
    fn labels_hide_id_suffix() {
        assert_eq!(visible("Save##toolbar"), "Save");
        assert_eq!(visible("##key"), "");
        assert_eq!(visible("plain"), "plain");
    }
}
