//! Per-drawer gesture state.

use crate::direction::Direction;

/// Phase of the capture/settle loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    /// Content is at rest and nothing is captured.
    #[default]
    Idle,
    /// A pointer holds the content surface.
    Dragging,
    /// Content is animating toward a settle target.
    Settling,
}

/// The mutable state threaded through resolution, clamping and settling.
///
/// Created once per drawer and reset in place, never rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GestureState {
    /// Direction of the gesture in progress, `NONE` until resolved.
    pub current_direction: Direction,
    /// Panel currently pinned open, `NONE` when closed.
    pub lock_direction: Direction,
    pub phase: DragPhase,
    /// Allowed directions captured when the drag began.
    pub gesture_mask: Direction,
}

impl GestureState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.lock_direction != Direction::NONE
    }

    /// Clear both direction fields.
    pub fn clear_directions(&mut self) {
        self.current_direction = Direction::NONE;
        self.lock_direction = Direction::NONE;
    }
}
