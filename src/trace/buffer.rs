//! Working buffer of unmatched openers
//!
//! A single double-ended sequence serves both disciplines: openers are always
//! appended at the tail, and the [`Mode`] only picks which end a closer
//! removes from. Snapshots are owned copies, so steps recorded earlier are
//! unaffected by later mutation.

use super::bracket::Bracket;
use super::mode::Mode;
use std::collections::VecDeque;

/// Insertion-ordered buffer, oldest opener at the head
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    items: VecDeque<Bracket>,
}

impl Buffer {
    pub fn new() -> Self {
        Buffer {
            items: VecDeque::new(),
        }
    }

    /// Append an opener at the tail
    pub fn push_tail(&mut self, bracket: Bracket) {
        self.items.push_back(bracket);
    }

    /// Remove the most recently inserted opener
    pub fn pop_tail(&mut self) -> Option<Bracket> {
        self.items.pop_back()
    }

    /// Remove the oldest opener still present
    pub fn pop_head(&mut self) -> Option<Bracket> {
        self.items.pop_front()
    }

    /// Remove from the end selected by `mode`
    pub fn remove(&mut self, mode: Mode) -> Option<Bracket> {
        match mode {
            Mode::Stack => self.pop_tail(),
            Mode::Queue => self.pop_head(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Owned copy of the contents, oldest first
    pub fn snapshot(&self) -> Vec<Bracket> {
        self.items.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> Buffer {
        let mut buffer = Buffer::new();
        buffer.push_tail(Bracket::OpenParen);
        buffer.push_tail(Bracket::OpenSquare);
        buffer.push_tail(Bracket::OpenCurly);
        buffer
    }

    #[test]
    fn test_stack_removes_tail() {
        let mut buffer = filled();
        assert_eq!(buffer.remove(Mode::Stack), Some(Bracket::OpenCurly));
        assert_eq!(
            buffer.snapshot(),
            vec![Bracket::OpenParen, Bracket::OpenSquare]
        );
    }

    #[test]
    fn test_queue_removes_head() {
        let mut buffer = filled();
        assert_eq!(buffer.remove(Mode::Queue), Some(Bracket::OpenParen));
        assert_eq!(
            buffer.snapshot(),
            vec![Bracket::OpenSquare, Bracket::OpenCurly]
        );
    }

    #[test]
    fn test_empty_removal() {
        let mut buffer = Buffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.remove(Mode::Stack), None);
        assert_eq!(buffer.remove(Mode::Queue), None);
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut buffer = filled();
        let before = buffer.snapshot();
        buffer.pop_tail();
        buffer.push_tail(Bracket::OpenParen);
        assert_eq!(before.len(), 3);
        assert_eq!(before[2], Bracket::OpenCurly);
        assert_eq!(buffer.len(), 3);
    }
}
