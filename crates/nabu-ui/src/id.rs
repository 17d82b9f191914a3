//! Widget identity.
//!
//! A widget is identified by the path of id segments in effect when it was
//! submitted plus its own label: the segments pushed with
//! [`WidgetBackend::push_id`](nabu_inspect::WidgetBackend::push_id), then the
//! label. Ids are stable across frames as long as the path is.

use std::fmt;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;
const SEPARATOR: u8 = 0xff;

// ── WidgetId ──────────────────────────────────────────────────────────────

/// FNV-1a hash of a widget's id path.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct WidgetId(u64);

impl WidgetId {
    /// The empty path.
    pub const ROOT: WidgetId = WidgetId(FNV_OFFSET);

    /// The id one segment below `self`.
    #[must_use]
    pub fn child(self, segment: &str) -> WidgetId {
        let mut h = self.0;
        for &b in segment.as_bytes().iter().chain(std::iter::once(&SEPARATOR)) {
            h ^= b as u64;
            h = h.wrapping_mul(FNV_PRIME);
        }
        WidgetId(h)
    }

    /// Id of a `/`-separated path, e.g. `"settings/volume/volume"`.
    pub fn from_path(path: &str) -> WidgetId {
        path.split('/').fold(WidgetId::ROOT, WidgetId::child)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl Default for WidgetId {
    fn default() -> Self {
        Self::ROOT
    }
}

impl fmt::Debug for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WidgetId({:016x})", self.0)
    }
}

impl From<&str> for WidgetId {
    fn from(path: &str) -> Self {
        WidgetId::from_path(path)
    }
}

// ── IdStack ───────────────────────────────────────────────────────────────

/// The segments pushed so far this frame, with their running hash.
#[derive(Debug, Default)]
pub(crate) struct IdStack {
    ids: Vec<WidgetId>,
    segments: Vec<String>,
}

impl IdStack {
    pub fn top(&self) -> WidgetId {
        self.ids.last().copied().unwrap_or(WidgetId::ROOT)
    }

    pub fn push(&mut self, segment: String) {
        self.ids.push(self.top().child(&segment));
        self.segments.push(segment);
    }

    /// `false` when there was nothing to pop.
    pub fn pop(&mut self) -> bool {
        self.segments.pop();
        self.ids.pop().is_some()
    }

    pub fn depth(&self) -> usize {
        self.ids.len()
    }

    /// Id and readable path of a widget labelled `label` at the current position.
    pub fn widget(&self, label: &str) -> (WidgetId, String) {
        let id = self.top().child(label);
        let mut path = self.segments.join("/");
        if !path.is_empty() {
            path.push('/');
        }
        path.push_str(label);
        (id, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_and_children_agree() {
        let built = WidgetId::ROOT.child("settings").child("volume");
        assert_eq!(built, WidgetId::from_path("settings/volume"));
    }

    #[test]
    fn segment_boundaries_matter() {
        assert_ne!(WidgetId::from_path("ab/c"), WidgetId::from_path("a/bc"));
        assert_ne!(WidgetId::from_path("a"), WidgetId::ROOT);
    }

    #[test]
    fn stack_tracks_path() {
        let mut stack = IdStack::default();
        stack.push("vector".to_string());
        stack.push("0".to_string());
        let (id, path) = stack.widget("-");
        assert_eq!(path, "vector/0/-");
        assert_eq!(id, WidgetId::from_path("vector/0/-"));
        assert!(stack.pop());
        assert!(stack.pop());
        assert!(!stack.pop());
        assert_eq!(stack.widget("x").1, "x");
    }
}
