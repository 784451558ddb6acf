//! Bounding of proposed content positions during a drag.
//!
//! All positional correctness of the drawer comes down to [`DragClamp::clamp`]:
//! it decides, per axis and per frame, where the content surface may be.

use crate::direction::{Axis, Direction};
use crate::geometry::DrawerGeometry;
use crate::state::GestureState;

/// Scroll state of content nested inside the content surface.
///
/// A drag toward a direction is handed to the nested content first: while it
/// can still scroll that way, the drawer does not move.
pub trait NestedScroll {
    /// Whether nested content would consume a drag that reveals `direction`.
    ///
    /// For [`Direction::TOP`] (finger moving down) this is "can scroll back
    /// toward its start vertically".
    fn can_scroll(&self, direction: Direction) -> bool;
}

/// Content with nothing scrollable inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNestedScroll;

impl NestedScroll for NoNestedScroll {
    fn can_scroll(&self, _direction: Direction) -> bool {
        false
    }
}

impl<F: Fn(Direction) -> bool> NestedScroll for F {
    fn can_scroll(&self, direction: Direction) -> bool {
        self(direction)
    }
}

/// Per-frame clamp over one drawer's geometry.
pub struct DragClamp<'a> {
    geometry: &'a DrawerGeometry,
    nested: &'a dyn NestedScroll,
}

impl<'a> DragClamp<'a> {
    pub fn new(geometry: &'a DrawerGeometry, nested: &'a dyn NestedScroll) -> Self {
        Self { geometry, nested }
    }

    /// Bound `proposed` on `axis`.
    ///
    /// `current` is the settled coordinate on that axis, returned unchanged when
    /// the axis is frozen by a lock.
    pub fn clamp(&self, axis: Axis, proposed: i32, current: i32, state: &GestureState) -> i32 {
        if state.is_locked() {
            self.clamp_locked(axis, proposed, current, state)
        } else {
            self.clamp_unlocked(axis, proposed, state)
        }
    }

    fn clamp_unlocked(&self, axis: Axis, proposed: i32, state: &GestureState) -> i32 {
        let origin = axis.of(self.geometry.origin());
        let direction = state.current_direction;

        if direction.axis() != Some(axis)
            || !state.gesture_mask.contains(direction)
            || self.nested.can_scroll(direction)
        {
            return origin;
        }

        let range = self.geometry.drag_range(axis);
        match direction.sign() {
            1 if proposed >= origin => proposed.min(origin + range),
            -1 if proposed <= origin => proposed.max(origin - range),
            // Moving against the gesture direction holds at origin.
            _ => origin,
        }
    }

    fn clamp_locked(&self, axis: Axis, proposed: i32, current: i32, state: &GestureState) -> i32 {
        let lock = state.lock_direction;
        if lock.axis() != Some(axis) || state.current_direction.is_orthogonal_to(lock) {
            return current;
        }

        let origin = axis.of(self.geometry.origin());
        let revealed = match self.geometry.revealed_position(lock) {
            Some(position) => axis.of(position),
            // A lock without a panel only happens if measurements changed under
            // it; fall back to the damping bound.
            None => origin + lock.sign() * self.geometry.drag_range(axis),
        };

        let (low, high) = if revealed >= origin {
            (origin, revealed)
        } else {
            (revealed, origin)
        };
        proposed.clamp(low, high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Measurements, PanelSet, SurfaceSpec};
    use crate::state::DragPhase;
    use swipedrawer_core::geometry::{Insets, Size};

    fn geometry() -> DrawerGeometry {
        let panels = PanelSet {
            left: Some(SurfaceSpec::new(100, 600)),
            top: Some(SurfaceSpec::new(300, 120)),
            right: Some(SurfaceSpec::new(60, 600)),
            bottom: Some(SurfaceSpec::new(300, 50)),
        };
        let measurements = Measurements {
            container: Size::new(300, 600),
            content: SurfaceSpec::new(300, 600),
            panels,
        };
        DrawerGeometry::new(measurements, 0.3)
    }

    fn dragging(current: Direction, lock: Direction, mask: Direction) -> GestureState {
        GestureState {
            current_direction: current,
            lock_direction: lock,
            phase: DragPhase::Dragging,
            gesture_mask: mask,
        }
    }

    const ALL: Direction = Direction::all();

    #[test]
    fn test_unlocked_left_bounds() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let state = dragging(Direction::LEFT, Direction::NONE, ALL);

        assert_eq!(clamp.clamp(Axis::Horizontal, 40, 0, &state), 40);
        assert_eq!(clamp.clamp(Axis::Horizontal, 95, 0, &state), 90);
        assert_eq!(clamp.clamp(Axis::Horizontal, -10, 0, &state), 0);
        // Orthogonal axis stays at origin.
        assert_eq!(clamp.clamp(Axis::Vertical, 30, 0, &state), 0);
    }

    #[test]
    fn test_unlocked_right_and_bottom_mirror() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);

        let right = dragging(Direction::RIGHT, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Horizontal, -50, 0, &right), -50);
        assert_eq!(clamp.clamp(Axis::Horizontal, -500, 0, &right), -90);
        assert_eq!(clamp.clamp(Axis::Horizontal, 5, 0, &right), 0);

        let bottom = dragging(Direction::BOTTOM, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Vertical, -500, 0, &bottom), -180);
    }

    #[test]
    fn test_disallowed_direction_holds_origin() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let state = dragging(Direction::LEFT, Direction::NONE, Direction::TOP);
        assert_eq!(clamp.clamp(Axis::Horizontal, 40, 0, &state), 0);
    }

    #[test]
    fn test_nested_scroll_guard() {
        let geometry = geometry();
        let nested = |d: Direction| d == Direction::TOP;
        let clamp = DragClamp::new(&geometry, &nested);

        let top = dragging(Direction::TOP, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Vertical, 60, 0, &top), 0);

        let bottom = dragging(Direction::BOTTOM, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Vertical, -60, 0, &bottom), -60);
    }

    #[test]
    fn test_unresolved_direction_holds_origin() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let state = dragging(Direction::NONE, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Horizontal, 40, 0, &state), 0);
        assert_eq!(clamp.clamp(Axis::Vertical, 40, 0, &state), 0);
    }

    #[test]
    fn test_locked_axis_bounded_by_revealed() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);

        let state = dragging(Direction::RIGHT, Direction::LEFT, ALL);
        assert_eq!(clamp.clamp(Axis::Horizontal, 70, 100, &state), 70);
        assert_eq!(clamp.clamp(Axis::Horizontal, 130, 100, &state), 100);
        assert_eq!(clamp.clamp(Axis::Horizontal, -20, 100, &state), 0);

        let state = dragging(Direction::BOTTOM, Direction::BOTTOM, ALL);
        assert_eq!(clamp.clamp(Axis::Vertical, -80, -50, &state), -50);
        assert_eq!(clamp.clamp(Axis::Vertical, 10, -50, &state), 0);
    }

    #[test]
    fn test_locked_orthogonal_axis_frozen() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let state = dragging(Direction::LEFT, Direction::LEFT, ALL);

        for proposed in [-1000, -1, 0, 1, 37, 1000] {
            assert_eq!(clamp.clamp(Axis::Vertical, proposed, 0, &state), 0);
        }
    }

    #[test]
    fn test_locked_orthogonal_gesture_frozen() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let state = dragging(Direction::TOP, Direction::LEFT, ALL);

        assert_eq!(clamp.clamp(Axis::Horizontal, 20, 100, &state), 100);
        assert_eq!(clamp.clamp(Axis::Vertical, 20, 0, &state), 0);
    }

    #[test]
    fn test_locked_ignores_mask_and_nested_scroll() {
        let geometry = geometry();
        let nested = |_: Direction| true;
        let clamp = DragClamp::new(&geometry, &nested);
        let state = dragging(Direction::RIGHT, Direction::LEFT, Direction::NONE);
        assert_eq!(clamp.clamp(Axis::Horizontal, 50, 100, &state), 50);
    }

    #[test]
    fn test_bounds_follow_content_margins() {
        let mut measurements = *geometry().measurements();
        measurements.content = SurfaceSpec::new(280, 580).margins(Insets::uniform(10));
        let geometry = DrawerGeometry::new(measurements, 0.3);
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);

        let state = dragging(Direction::LEFT, Direction::NONE, ALL);
        assert_eq!(clamp.clamp(Axis::Horizontal, 5, 10, &state), 10);
        assert_eq!(clamp.clamp(Axis::Horizontal, 500, 10, &state), 100);
    }

    #[test]
    fn test_clamp_is_idempotent_and_bounded() {
        let geometry = geometry();
        let clamp = DragClamp::new(&geometry, &NoNestedScroll);
        let locks = [Direction::NONE, Direction::LEFT, Direction::TOP, Direction::RIGHT, Direction::BOTTOM];

        for lock in locks {
            for current in Direction::CARDINALS.into_iter().chain([Direction::NONE]) {
                let state = dragging(current, lock, ALL);
                for axis in [Axis::Horizontal, Axis::Vertical] {
                    let settled = 7;
                    for proposed in (-400..=400).step_by(13) {
                        let once = clamp.clamp(axis, proposed, settled, &state);
                        let twice = clamp.clamp(axis, once, settled, &state);
                        assert_eq!(once, twice, "lock={lock:?} dir={current:?} {axis:?} {proposed}");

                        if lock == Direction::NONE {
                            let range = geometry.drag_range(axis);
                            assert!((-range..=range).contains(&once));
                        }
                    }
                }
            }
        }
    }
}
