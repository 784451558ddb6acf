//! Lock and settle policy for the content surface.
//!
//! [`SettleController`] owns the gesture state and the content position. It
//! answers [`DragHelper`](crate::drag_helper::DragHelper) through
//! [`DragCallback`]: which captures are allowed, how motion is clamped, where a
//! release settles and what each phase change clears.

use swipedrawer_core::math::{IVec2, Vec2};

use crate::clamp::{DragClamp, NestedScroll, NoNestedScroll};
use crate::direction::{Axis, Direction};
use crate::drag_helper::DragCallback;
use crate::event::{PointerId, SwipeEvent, SwipeListener};
use crate::geometry::DrawerGeometry;
use crate::layout::PanelLayout;
use crate::state::{DragPhase, GestureState};

pub struct SettleController {
    geometry: DrawerGeometry,
    layout: PanelLayout,
    state: GestureState,
    position: IVec2,
    /// Directions new gestures may use.
    allowed: Direction,
    swipe_enabled: bool,
    enabled: bool,
    listener: Option<Box<dyn SwipeListener>>,
    nested: Box<dyn NestedScroll>,
}

impl std::fmt::Debug for SettleController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SettleController")
            .field("geometry", &self.geometry)
            .field("state", &self.state)
            .field("position", &self.position)
            .field("allowed", &self.allowed)
            .field("swipe_enabled", &self.swipe_enabled)
            .field("enabled", &self.enabled)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

impl SettleController {
    /// A controller with content resting at the geometry's origin.
    pub fn new(geometry: DrawerGeometry, allowed: Direction) -> Self {
        let position = geometry.origin();
        Self {
            layout: PanelLayout::compute(&geometry, position),
            geometry,
            state: GestureState::new(),
            position,
            allowed,
            swipe_enabled: true,
            enabled: true,
            listener: None,
            nested: Box::new(NoNestedScroll),
        }
    }

    pub fn geometry(&self) -> &DrawerGeometry {
        &self.geometry
    }

    pub(crate) fn geometry_mut(&mut self) -> &mut DrawerGeometry {
        &mut self.geometry
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub(crate) fn state_mut(&mut self) -> &mut GestureState {
        &mut self.state
    }

    pub fn position(&self) -> IVec2 {
        self.position
    }

    pub fn allowed(&self) -> Direction {
        self.allowed
    }

    pub(crate) fn set_allowed(&mut self, allowed: Direction) {
        self.allowed = allowed;
    }

    pub fn swipe_enabled(&self) -> bool {
        self.swipe_enabled
    }

    pub(crate) fn set_swipe_enabled(&mut self, enabled: bool) {
        self.swipe_enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_listener(&mut self, listener: Option<Box<dyn SwipeListener>>) {
        self.listener = listener;
    }

    pub(crate) fn set_nested_scroll(&mut self, nested: Box<dyn NestedScroll>) {
        self.nested = nested;
    }

    /// Where content rests for the current lock.
    pub fn rest_position(&self) -> IVec2 {
        self.geometry
            .revealed_position(self.state.lock_direction)
            .unwrap_or_else(|| self.geometry.origin())
    }

    /// Replace the geometry and put content at the new origin with no lock.
    pub(crate) fn remeasure(&mut self, geometry: DrawerGeometry) {
        self.geometry = geometry;
        self.position = geometry.origin();
        self.layout = PanelLayout::compute(&self.geometry, self.position);
        self.state.clear_directions();
    }

    /// Record the direction resolved for the gesture in progress.
    pub(crate) fn set_current_direction(&mut self, direction: Direction) {
        if self.state.current_direction != direction {
            tracing::debug!("Resolved swipe direction {:?}", direction);
        }
        self.state.current_direction = direction;
    }

    fn emit(&mut self, delta: IVec2) {
        let Some(listener) = self.listener.as_mut() else {
            return;
        };
        let axis = self.state.current_direction.axis().unwrap_or(if delta.x != 0 {
            Axis::Horizontal
        } else {
            Axis::Vertical
        });
        let event = SwipeEvent {
            direction: self.state.current_direction,
            distance: axis.of(self.position) - axis.of(self.geometry.origin()),
            max: self.geometry.drag_range(axis),
        };
        listener.on_swipe(event);
    }

    fn clamp(&self, axis: Axis, proposed: i32) -> i32 {
        DragClamp::new(&self.geometry, self.nested.as_ref()).clamp(
            axis,
            proposed,
            axis.of(self.position),
            &self.state,
        )
    }
}

impl DragCallback for SettleController {
    fn try_capture(&mut self, _pointer: PointerId, position: Vec2) -> bool {
        self.enabled
            && self.swipe_enabled
            && self
                .layout
                .content
                .contains(position.x.floor() as i32, position.y.floor() as i32)
    }

    fn clamp_horizontal(&mut self, proposed: i32, _dx: i32) -> i32 {
        self.clamp(Axis::Horizontal, proposed)
    }

    fn clamp_vertical(&mut self, proposed: i32, _dy: i32) -> i32 {
        self.clamp(Axis::Vertical, proposed)
    }

    fn on_position_changed(&mut self, position: IVec2, delta: IVec2) {
        self.position = position;
        self.layout
            .update(&self.geometry, position, self.state.current_direction.axis());
        tracing::trace!("Content at {:?}", position);
        self.emit(delta);
    }

    fn on_release(&mut self) -> Option<IVec2> {
        let direction = self.state.current_direction;
        let axis = direction.axis()?;
        let origin = self.geometry.origin();
        let displacement = direction.sign() * (axis.of(self.position) - axis.of(origin));

        match (
            self.geometry.release_threshold(direction),
            self.geometry.revealed_position(direction),
        ) {
            (Some(threshold), Some(revealed)) if displacement >= threshold => {
                tracing::debug!("Locking {:?} panel open", direction);
                self.state.lock_direction = direction;
                Some(revealed)
            }
            _ => Some(origin),
        }
    }

    fn on_phase_changed(&mut self, previous: DragPhase, phase: DragPhase) -> Option<IVec2> {
        tracing::debug!("Drag phase {:?} -> {:?}", previous, phase);
        self.state.phase = phase;
        match phase {
            DragPhase::Dragging => {
                if previous == DragPhase::Settling && !self.state.is_locked() {
                    // Grabbing a drawer that is closing sends it home instead.
                    return Some(self.geometry.origin());
                }
                self.state.gesture_mask = self.allowed;
            }
            DragPhase::Idle => {
                self.state.current_direction = Direction::NONE;
                if self.position == self.geometry.origin() && self.state.is_locked() {
                    tracing::debug!("Unlocked {:?} panel", self.state.lock_direction);
                    self.state.lock_direction = Direction::NONE;
                }
            }
            DragPhase::Settling => {}
        }
        None
    }

    fn content_position(&self) -> IVec2 {
        self.position
    }

    fn drag_range(&self) -> IVec2 {
        self.geometry.drag_ranges()
    }
}
