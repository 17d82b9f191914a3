use crate::backend::WidgetBackend;
use crate::reflect::{PairName, ValueKind};

use super::display_value;
use super::inspect::Inspect;
use super::metadata::Metadata;

impl<A: Inspect, B: Inspect> Inspect for (A, B) {
    const KIND: ValueKind = ValueKind::Pair;

    /// Both halves are drawn even when the first one changed.
    fn inspect(&mut self, ui: &mut dyn WidgetBackend, meta: &Metadata<'_>) -> bool {
        ui.separator_text(meta.name());

        let (first, second) = match meta.modifiers().get::<PairName>() {
            Some(names) => (names.first, names.second),
            None => {
                let labels = &meta.options().pair_labels;
                (labels.0.as_str(), labels.1.as_str())
            }
        };

        display_value(&mut self.0, ui, &meta.child(first)) | display_value(&mut self.1, ui, &meta.child(second))
    }
}
