//! Listener that records swipe events for later assertions.

use std::sync::Arc;

use parking_lot::Mutex;
use swipedrawer_engine::{Direction, SwipeEvent, SwipeListener};

/// Records every [`SwipeEvent`] it receives.
///
/// Clones share the same log, so a test keeps one handle and gives the other
/// to the drawer.
#[derive(Debug, Clone, Default)]
pub struct RecordingListener {
    events: Arc<Mutex<Vec<SwipeEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<SwipeEvent> {
        self.events.lock().clone()
    }

    /// Distances of the recorded events, in order.
    pub fn distances(&self) -> Vec<i32> {
        self.events.lock().iter().map(|e| e.distance).collect()
    }

    /// Events reported while `direction` was active.
    pub fn events_for(&self, direction: Direction) -> Vec<SwipeEvent> {
        self.events
            .lock()
            .iter()
            .filter(|e| e.direction == direction)
            .copied()
            .collect()
    }

    pub fn last(&self) -> Option<SwipeEvent> {
        self.events.lock().last().copied()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl SwipeListener for RecordingListener {
    fn on_swipe(&mut self, event: SwipeEvent) {
        self.events.lock().push(event);
    }
}
