use crate::reflect::Scalar;

// ── Identity ──────────────────────────────────────────────────────────────

/// One segment pushed onto the backend's id stack.
///
/// Every member render is scoped by its display name and every container
/// element by its index, so sibling controls with the same label never alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdSource<'a> {
    Str(&'a str),
    Index(usize),
}

// ── Style ─────────────────────────────────────────────────────────────────

/// A style color addressed by a [`StyleColor`](crate::reflect::StyleColor) modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Text,
    TextDisabled,
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    Button,
    ButtonHovered,
    ButtonActive,
    Header,
    CheckMark,
    SliderGrab,
    Separator,
}

/// Straight-alpha RGBA packed as `0xRRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PackedColor(pub u32);

impl PackedColor {
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | a as u32)
    }

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// `[r, g, b, a]`.
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        self.0.to_be_bytes()
    }
}

/// A style variable addressed by a [`StyleVar`](crate::reflect::StyleVar) modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarSlot {
    Alpha,
    FramePadding,
    FrameRounding,
    FrameBorderSize,
    ItemSpacing,
    GrabMinSize,
    IndentSpacing,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleValue {
    Float(f32),
    Vec2(f32, f32),
}

// ── WidgetBackend ─────────────────────────────────────────────────────────

/// The immediate-mode widget library the renderer draws through.
///
/// Every call is synchronous and returns what the user did to that control
/// during the current frame. Calls that take a `&mut` value write the
/// user's edit into it and return `true`; the renderer decides whether the
/// edit is committed.
///
/// Controls are identified by their label combined with the current id
/// stack. A label starting with `##` is an id only and is not displayed.
pub trait WidgetBackend {
    /// Opens a top-level window. `false` means collapsed: draw nothing, but
    /// still call [`end_window`](Self::end_window).
    fn begin_window(&mut self, title: &str) -> bool;
    fn end_window(&mut self);

    /// A section header. Returns whether it is open.
    fn collapsing_header(&mut self, label: &str) -> bool;

    fn separator(&mut self);
    fn separator_text(&mut self, label: &str);
    fn text(&mut self, text: &str);

    /// Unbounded edit; `speed` is the value change per unit of drag.
    fn drag_scalar(&mut self, label: &str, value: &mut Scalar, speed: f32) -> bool;

    /// Bounded edit. `min` and `max` have the same numeric type as `value`.
    fn slider_scalar(&mut self, label: &str, value: &mut Scalar, min: Scalar, max: Scalar) -> bool;

    fn checkbox(&mut self, label: &str, value: &mut bool) -> bool;
    fn input_text(&mut self, label: &str, value: &mut String) -> bool;

    /// Opens a dropdown showing `preview`. When it returns `true`, items
    /// follow and [`end_combo`](Self::end_combo) closes the list.
    fn begin_combo(&mut self, label: &str, preview: &str) -> bool;
    fn end_combo(&mut self);

    /// An entry of an open combo. Returns whether it was clicked.
    fn menu_item(&mut self, label: &str, selected: bool) -> bool;

    /// Returns whether it was clicked.
    fn radio_button(&mut self, label: &str, active: bool) -> bool;

    /// Returns whether it was clicked.
    fn button(&mut self, label: &str) -> bool;

    /// Attaches hover text to the last submitted control.
    fn set_item_tooltip(&mut self, text: &str);

    /// Empty space of the given size.
    fn dummy(&mut self, width: f32, height: f32);

    /// Places the next control on the same line as the previous one.
    fn same_line(&mut self);

    /// Width of the next control as a fraction of the window width.
    fn set_next_item_width(&mut self, fraction: f32);

    fn push_id(&mut self, id: IdSource<'_>);
    fn pop_id(&mut self);

    /// Controls submitted until the matching [`end_disabled`](Self::end_disabled)
    /// are drawn greyed out and ignore input when `disabled` is true.
    fn begin_disabled(&mut self, disabled: bool);
    fn end_disabled(&mut self);

    fn push_style_color(&mut self, slot: ColorSlot, color: PackedColor);
    fn pop_style_color(&mut self, count: usize);
    fn push_style_var(&mut self, slot: VarSlot, value: StyleValue);
    fn pop_style_var(&mut self, count: usize);
}
