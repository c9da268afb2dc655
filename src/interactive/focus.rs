//! Focus ring
//!
//! Tab moves focus to the next member, wrapping at the end. The ring holds
//! identifiers rather than widgets; the owner applies the change.

/// Circular list of focusable members with exactly one current
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FocusRing<T> {
    members: Vec<T>,
    current: usize,
}

impl<T: Copy + Eq> FocusRing<T> {
    /// Ring starting at `first`, followed by `rest` in order
    pub fn new(first: T, rest: impl IntoIterator<Item = T>) -> Self {
        let mut members = vec![first];
        members.extend(rest);
        Self { members, current: 0 }
    }

    #[must_use]
    pub fn current(&self) -> T {
        self.members[self.current]
    }

    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Always false; a ring has at least one member
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Move to the next member
    ///
    /// Returns `(previous, now_current)` so the caller can deselect one and
    /// select the other.
    pub fn advance(&mut self) -> (T, T) {
        let previous = self.current();
        self.current = (self.current + 1) % self.members.len();
        (previous, self.current())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_first_member() {
        let ring = FocusRing::new('a', ['b', 'c']);
        assert_eq!(ring.current(), 'a');
        assert_eq!(ring.current_index(), 0);
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn advance_reports_old_and_new() {
        let mut ring = FocusRing::new('a', ['b', 'c']);
        assert_eq!(ring.advance(), ('a', 'b'));
        assert_eq!(ring.advance(), ('b', 'c'));
        assert_eq!(ring.advance(), ('c', 'a'));
    }

    #[test]
    fn index_after_n_advances_is_n_mod_len() {
        let mut ring = FocusRing::new(0, 1..4);
        assert_eq!(ring.len(), 4);
        for n in 1..=13 {
            ring.advance();
            assert_eq!(ring.current_index(), n % 4);
        }
    }

    #[test]
    fn four_advances_return_to_start() {
        let mut ring = FocusRing::new(0, [1, 2, 3]);
        for _ in 0..4 {
            ring.advance();
        }
        assert_eq!(ring.current_index(), 0);
    }

    #[test]
    fn single_member_ring_stays_put() {
        let mut ring = FocusRing::new('x', []);
        assert_eq!(ring.advance(), ('x', 'x'));
        assert!(!ring.is_empty());
    }
}
