use std::collections::VecDeque;

use super::ContainerFlags;

/// Positional access over a homogeneous container.
///
/// Fixed-size containers report `FLAGS` without [`ContainerFlags::MUTABLE`]
/// and refuse every structural operation.
pub trait SequenceAdapter: 'static {
    type Element: 'static;

    const FLAGS: ContainerFlags;

    fn len(&self) -> usize;

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn element_mut(&mut self, index: usize) -> Option<&mut Self::Element>;

    /// Appends a default element. Returns its index.
    fn push_default(&mut self) -> Option<usize>;

    /// Inserts a default element before `index`, shifting the rest up.
    fn insert_default(&mut self, index: usize) -> bool;

    fn remove(&mut self, index: usize) -> bool;
}

/// Sequences whose length can change.
pub trait Resizable: SequenceAdapter {}

// ── Fixed arrays ──────────────────────────────────────────────────────────

impl<E: 'static, const N: usize> SequenceAdapter for [E; N] {
    type Element = E;

    const FLAGS: ContainerFlags = ContainerFlags::FIXED_SEQUENCE;

    #[inline]
    fn len(&self) -> usize {
        N
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut E> {
        self.get_mut(index)
    }

    fn push_default(&mut self) -> Option<usize> {
        None
    }

    fn insert_default(&mut self, _index: usize) -> bool {
        false
    }

    fn remove(&mut self, _index: usize) -> bool {
        false
    }
}

// ── Vec ───────────────────────────────────────────────────────────────────

impl<E: Default + 'static> SequenceAdapter for Vec<E> {
    type Element = E;

    const FLAGS: ContainerFlags = ContainerFlags::RESIZABLE_SEQUENCE;

    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut E> {
        self.get_mut(index)
    }

    fn push_default(&mut self) -> Option<usize> {
        self.push(E::default());
        Some(Vec::len(self) - 1)
    }

    fn insert_default(&mut self, index: usize) -> bool {
        if index > Vec::len(self) {
            return false;
        }
        self.insert(index, E::default());
        true
    }

    fn remove(&mut self, index: usize) -> bool {
        if index >= Vec::len(self) {
            return false;
        }
        Vec::remove(self, index);
        true
    }
}

impl<E: Default + 'static> Resizable for Vec<E> {}

// ── VecDeque ──────────────────────────────────────────────────────────────

impl<E: Default + 'static> SequenceAdapter for VecDeque<E> {
    type Element = E;

    const FLAGS: ContainerFlags = ContainerFlags::RESIZABLE_SEQUENCE;

    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn element_mut(&mut self, index: usize) -> Option<&mut E> {
        self.get_mut(index)
    }

    fn push_default(&mut self) -> Option<usize> {
        self.push_back(E::default());
        Some(VecDeque::len(self) - 1)
    }

    fn insert_default(&mut self, index: usize) -> bool {
        if index > VecDeque::len(self) {
            return false;
        }
        self.insert(index, E::default());
        true
    }

    fn remove(&mut self, index: usize) -> bool {
        VecDeque::remove(self, index).is_some()
    }
}

impl<E: Default + 'static> Resizable for VecDeque<E> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_refuses_structural_edits() {
        let mut a = [1, 2, 3];
        assert_eq!(SequenceAdapter::len(&a), 3);
        assert_eq!(a.push_default(), None);
        assert!(!a.insert_default(0));
        assert!(!SequenceAdapter::remove(&mut a, 0));
        assert_eq!(a, [1, 2, 3]);
    }

    #[test]
    fn vec_insert_shifts_later_elements() {
        let mut v = vec![1, 2, 3];
        assert!(v.insert_default(1));
        assert_eq!(v, vec![1, 0, 2, 3]);
    }

    #[test]
    fn vec_push_reports_new_index() {
        let mut v: Vec<String> = Vec::new();
        assert_eq!(v.push_default(), Some(0));
        assert_eq!(v.push_default(), Some(1));
    }

    #[test]
    fn out_of_range_edits_are_refused() {
        let mut v = vec![1];
        assert!(!SequenceAdapter::remove(&mut v, 1));
        assert!(!v.insert_default(2));
        assert!(SequenceAdapter::remove(&mut v, 0));
        assert!(SequenceAdapter::is_empty(&v));
    }

    #[test]
    fn deque_behaves_like_vec() {
        let mut d: VecDeque<u8> = VecDeque::from([5, 6]);
        assert!(d.insert_default(0));
        assert_eq!(d, VecDeque::from([0, 5, 6]));
        assert!(SequenceAdapter::remove(&mut d, 2));
        assert_eq!(d, VecDeque::from([0, 5]));
        assert_eq!(<VecDeque<u8> as SequenceAdapter>::FLAGS, ContainerFlags::RESIZABLE_SEQUENCE);
    }
}
