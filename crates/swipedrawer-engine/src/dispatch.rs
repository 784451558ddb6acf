//! Pointer routing for [`SwipeDrawer`].
//!
//! Hosts that let children see pointer events first call
//! [`SwipeDrawer::intercept_pointer`] until it returns true, then deliver the
//! rest of the gesture to [`SwipeDrawer::handle_pointer`]. Hosts without
//! children can use `handle_pointer` alone.

use swipedrawer_core::profiling::profile_function;

use crate::direction::Direction;
use crate::drawer::SwipeDrawer;
use crate::event::{PointerAction, PointerEvent};

impl SwipeDrawer {
    /// Parent-intercept path. Returns true when the drawer takes the gesture.
    pub fn intercept_pointer(&mut self, event: &PointerEvent) -> bool {
        profile_function!();
        if !self.helper.tracks(event.pointer) {
            return false;
        }

        let handled = if self.controller.is_enabled() {
            self.track_direction(event);
            self.helper.should_intercept(event, &mut self.controller)
        } else {
            self.cancel_gesture();
            false
        };

        if !handled {
            self.controller.set_current_direction(Direction::NONE);
        }
        handled
    }

    /// Own-touch path. Returns true when the event was consumed.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> bool {
        profile_function!();
        if !self.helper.tracks(event.pointer) {
            return false;
        }
        if !self.controller.is_enabled() {
            self.cancel_gesture();
            return false;
        }

        self.track_direction(event);
        self.helper.process_pointer(event, &mut self.controller);
        true
    }

    /// Feed the resolver. Runs before the drag helper sees the event so the
    /// first clamp of a gesture already knows its direction.
    fn track_direction(&mut self, event: &PointerEvent) {
        match event.action {
            PointerAction::Down => {
                self.resolver.begin(event.position);
                self.controller.set_current_direction(Direction::NONE);
            }
            PointerAction::Move => {
                if self.controller.state().current_direction != Direction::NONE {
                    return;
                }
                if let Some(direction) = self.resolver.resolve(event.position) {
                    self.controller.set_current_direction(direction);
                }
            }
            PointerAction::Up | PointerAction::Cancel => self.resolver.clear(),
        }
    }
}
