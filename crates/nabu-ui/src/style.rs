use nabu_inspect::backend::{ColorSlot, PackedColor, StyleValue, VarSlot};

/// Style overrides in effect when a widget was submitted.
///
/// Later pushes shadow earlier ones for the same slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSnapshot {
    pub colors: Vec<(ColorSlot, PackedColor)>,
    pub vars: Vec<(VarSlot, StyleValue)>,
}

impl StyleSnapshot {
    pub fn color(&self, slot: ColorSlot) -> Option<PackedColor> {
        self.colors.iter().rev().find(|(s, _)| *s == slot).map(|&(_, c)| c)
    }

    pub fn var(&self, slot: VarSlot) -> Option<StyleValue> {
        self.vars.iter().rev().find(|(s, _)| *s == slot).map(|&(_, v)| v)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty() && self.vars.is_empty()
    }
}

/// Push/pop stacks behind the backend's style calls.
#[derive(Debug, Default)]
pub(crate) struct StyleStack {
    current: StyleSnapshot,
}

impl StyleStack {
    pub fn push_color(&mut self, slot: ColorSlot, color: PackedColor) {
        self.current.colors.push((slot, color));
    }

    /// Pops up to `count` colors. Returns how many were missing.
    pub fn pop_colors(&mut self, count: usize) -> usize {
        pop_n(&mut self.current.colors, count)
    }

    pub fn push_var(&mut self, slot: VarSlot, value: StyleValue) {
        self.current.vars.push((slot, value));
    }

    pub fn pop_vars(&mut self, count: usize) -> usize {
        pop_n(&mut self.current.vars, count)
    }

    pub fn snapshot(&self) -> StyleSnapshot {
        self.current.clone()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }
}

fn pop_n<T>(stack: &mut Vec<T>, count: usize) -> usize {
    let available = count.min(stack.len());
    stack.truncate(stack.len() - available);
    count - available
}
