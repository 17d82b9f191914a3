use nabu_inspect::reflect::Scalar;

use crate::id::WidgetId;

/// What the simulated user does to one widget.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Press and release: buttons, headers, menu items, radio buttons,
    /// checkboxes.
    Click,
    /// Flip a checkbox.
    Toggle,
    /// Type an exact number into a drag or slider.
    SetScalar(f64),
    /// Drag by `pixels`; the value moves by `pixels * speed`.
    DragBy(f64),
    /// Put a slider's grab at `t` in `[0, 1]` along its track.
    SlideTo(f64),
    /// Replace a text field's contents.
    SetText(String),
    /// Type at the cursor of a text field.
    TypeText(String),
    /// Press an editing key in a text field.
    Key(EditKey),
    /// Pick the n-th item of an open combo.
    SelectIndex(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
    SelectAll,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Interaction {
    pub target: WidgetId,
    /// The path the target was built from, for diagnostics.
    pub path: String,
    pub action: Action,
}

// ── UiInput ───────────────────────────────────────────────────────────────

/// Scripted input for one frame.
///
/// Interactions are matched against widgets by id as they are submitted and
/// applied in the order they were added.
///
/// ```rust,ignore
/// let input = UiInput::new()
///     .click("vector/Add element")
///     .set_scalar("valueClamped/valueClamped", 100.0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct UiInput {
    pub interactions: Vec<Interaction>,
}

impl UiInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &str, action: Action) -> Self {
        self.interactions.push(Interaction { target: WidgetId::from_path(path), path: path.to_string(), action });
        self
    }

    pub fn click(self, path: &str) -> Self {
        self.with(path, Action::Click)
    }

    pub fn toggle(self, path: &str) -> Self {
        self.with(path, Action::Toggle)
    }

    pub fn set_scalar(self, path: &str, value: f64) -> Self {
        self.with(path, Action::SetScalar(value))
    }

    pub fn drag_by(self, path: &str, pixels: f64) -> Self {
        self.with(path, Action::DragBy(pixels))
    }

    pub fn slide_to(self, path: &str, t: f64) -> Self {
        self.with(path, Action::SlideTo(t))
    }

    pub fn set_text(self, path: &str, text: impl Into<String>) -> Self {
        self.with(path, Action::SetText(text.into()))
    }

    pub fn type_text(self, path: &str, text: impl Into<String>) -> Self {
        self.with(path, Action::TypeText(text.into()))
    }

    pub fn key(self, path: &str, key: EditKey) -> Self {
        self.with(path, Action::Key(key))
    }

    pub fn select(self, path: &str, index: usize) -> Self {
        self.with(path, Action::SelectIndex(index))
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.interactions.is_empty()
    }
}

/// Applies a numeric action to `value`. `None` when the action does not
/// apply to numbers.
pub(crate) fn apply_scalar(value: Scalar, action: &Action, speed: f32, bounds: Option<(Scalar, Scalar)>) -> Option<Scalar> {
    match *action {
        Action::SetScalar(v) => Some(value.with_f64(v)),
        Action::DragBy(pixels) => Some(value.offset(pixels * speed as f64)),
        Action::SlideTo(t) => {
            let (min, max) = bounds?;
            let (lo, hi) = (min.to_f64(), max.to_f64());
            Some(value.with_f64(lo + t.clamp(0.0, 1.0) * (hi - lo)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_targets_paths() {
        let input = UiInput::new().click("a/b").set_text("c", "hi");
        assert_eq!(input.interactions.len(), 2);
        assert_eq!(input.interactions[0].target, WidgetId::from_path("a/b"));
        assert_eq!(input.interactions[1].action, Action::SetText("hi".into()));
    }

    #[test]
    fn scalar_actions() {
        assert_eq!(apply_scalar(Scalar::I32(0), &Action::SetScalar(7.0), 1.0, None), Some(Scalar::I32(7)));
        assert_eq!(apply_scalar(Scalar::I32(10), &Action::DragBy(20.0), 0.5, None), Some(Scalar::I32(20)));
        let bounds = Some((Scalar::F32(0.0), Scalar::F32(10.0)));
        assert_eq!(apply_scalar(Scalar::F32(1.0), &Action::SlideTo(0.5), 1.0, bounds), Some(Scalar::F32(5.0)));
        assert_eq!(apply_scalar(Scalar::F32(1.0), &Action::SlideTo(0.5), 1.0, None), None);
        assert_eq!(apply_scalar(Scalar::F32(1.0), &Action::Click, 1.0, None), None);
    }
}
