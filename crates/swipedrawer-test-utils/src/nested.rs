//! Controllable nested scroll state.

use std::sync::Arc;

use parking_lot::Mutex;
use swipedrawer_engine::{Direction, NestedScroll};

/// Nested content whose scrollable directions can be changed from the test
/// while the drawer holds a clone.
#[derive(Debug, Clone, Default)]
pub struct MockNestedScroll {
    scrollable: Arc<Mutex<Direction>>,
    queries: Arc<Mutex<usize>>,
}

impl MockNestedScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nested content that can still scroll toward `directions`.
    pub fn scrollable(directions: Direction) -> Self {
        let mock = Self::default();
        mock.set_scrollable(directions);
        mock
    }

    pub fn set_scrollable(&self, directions: Direction) {
        *self.scrollable.lock() = directions;
    }

    /// How many times the drawer asked.
    pub fn query_count(&self) -> usize {
        *self.queries.lock()
    }
}

impl NestedScroll for MockNestedScroll {
    fn can_scroll(&self, direction: Direction) -> bool {
        *self.queries.lock() += 1;
        self.scrollable.lock().intersects(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scrollable_directions() {
        let mock = MockNestedScroll::scrollable(Direction::TOP);
        let shared = mock.clone();
        assert!(shared.can_scroll(Direction::TOP));
        assert!(!shared.can_scroll(Direction::LEFT));

        mock.set_scrollable(Direction::NONE);
        assert!(!shared.can_scroll(Direction::TOP));
        assert_eq!(mock.query_count(), 3);
    }
}
