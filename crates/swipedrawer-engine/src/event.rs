//! Pointer input and swipe notifications.

use swipedrawer_core::math::Vec2;

use crate::direction::Direction;

/// Pointer event kinds delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAction {
    /// Pointer went down.
    Down,
    /// Pointer moved while down.
    Move,
    /// Pointer lifted.
    Up,
    /// Host aborted the gesture.
    Cancel,
}

/// Identifier of one pointer (finger or mouse).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PointerId(pub u32);

/// A pointer sample in container-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub action: PointerAction,
    pub pointer: PointerId,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn new(action: PointerAction, pointer: PointerId, position: Vec2) -> Self {
        Self {
            action,
            pointer,
            position,
        }
    }

    /// Down event for the primary pointer.
    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Down, PointerId::default(), Vec2::new(x, y))
    }

    /// Move event for the primary pointer.
    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Move, PointerId::default(), Vec2::new(x, y))
    }

    /// Up event for the primary pointer.
    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerAction::Up, PointerId::default(), Vec2::new(x, y))
    }

    /// Cancel event for the primary pointer.
    pub fn cancel() -> Self {
        Self::new(PointerAction::Cancel, PointerId::default(), Vec2::ZERO)
    }

    /// Same event for a different pointer.
    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }
}

/// Progress of the content surface along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwipeEvent {
    /// Active direction, `NONE` when settling without one.
    pub direction: Direction,
    /// Distance from origin along the event's axis, in pixels.
    pub distance: i32,
    /// Drag range of that axis.
    pub max: i32,
}

/// Receives a [`SwipeEvent`] every time the content surface moves.
pub trait SwipeListener {
    fn on_swipe(&mut self, event: SwipeEvent);
}

impl<F: FnMut(SwipeEvent)> SwipeListener for F {
    fn on_swipe(&mut self, event: SwipeEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |event: SwipeEvent| seen.push(event.distance);
            listener.on_swipe(SwipeEvent {
                direction: Direction::TOP,
                distance: 12,
                max: 180,
            });
        }
        assert_eq!(seen, vec![12]);
    }

    #[test]
    fn test_event_constructors() {
        let event = PointerEvent::moved(3.0, 4.0).with_pointer(PointerId(2));
        assert_eq!(event.action, PointerAction::Move);
        assert_eq!(event.pointer, PointerId(2));
        assert_eq!(event.position, Vec2::new(3.0, 4.0));
    }
}
