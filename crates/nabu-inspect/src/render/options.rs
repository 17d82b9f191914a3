/// Knobs of a render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Wrap the pass in a backend window titled with the type's display name.
    pub in_window: bool,
    /// Value change per unit of drag for unbounded numeric edits.
    pub drag_speed: f32,
    /// Width of a map's key and value controls, as a fraction of the window.
    pub map_item_width: f32,
    /// Preview and clear entry of a flags enum with no bit set.
    pub flags_none_label: String,
    /// Labels of a pair's halves when no `PairName` is attached.
    pub pair_labels: (String, String),
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            in_window: false,
            drag_speed: 0.1,
            map_item_width: 0.45,
            flags_none_label: "<None>".to_string(),
            pair_labels: ("First".to_string(), "Second".to_string()),
        }
    }
}

impl RenderOptions {
    pub fn with_window(mut self, in_window: bool) -> Self {
        self.in_window = in_window;
        self
    }

    pub fn with_drag_speed(mut self, speed: f32) -> Self {
        self.drag_speed = speed;
        self
    }

    pub fn with_map_item_width(mut self, fraction: f32) -> Self {
        self.map_item_width = fraction.clamp(0.0, 1.0);
        self
    }

    pub fn with_flags_none_label(mut self, label: impl Into<String>) -> Self {
        self.flags_none_label = label.into();
        self
    }

    pub fn with_pair_labels(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.pair_labels = (first.into(), second.into());
        self
    }
}
