//! Scripted pointer traces and frame pumping.

use swipedrawer_core::math::Vec2;
use swipedrawer_engine::{PointerAction, PointerEvent, PointerId, SwipeDrawer};

/// One 60 Hz frame in seconds.
pub const FRAME: f32 = 1.0 / 60.0;

/// Frames after which [`settle`] gives up.
const MAX_SETTLE_FRAMES: usize = 600;

/// A recorded pointer trace.
#[derive(Debug, Clone, Default)]
pub struct TouchScript {
    pointer: PointerId,
    events: Vec<PointerEvent>,
    cursor: Vec2,
}

impl TouchScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Down at `from`, `steps` evenly spaced moves ending at `to`, then up.
    pub fn drag(from: (f32, f32), to: (f32, f32), steps: usize) -> Self {
        Self::press(from, to, steps).up()
    }

    /// A script for a pointer that is already down at `(x, y)`, used to
    /// continue a gesture started by an earlier script.
    pub fn resume(x: f32, y: f32) -> Self {
        Self {
            cursor: Vec2::new(x, y),
            ..Self::default()
        }
    }

    /// Like [`TouchScript::drag`] but the pointer stays down.
    pub fn press(from: (f32, f32), to: (f32, f32), steps: usize) -> Self {
        Self::new().down(from.0, from.1).move_to(to.0, to.1, steps)
    }

    /// Use `pointer` for events added after this call.
    pub fn with_pointer(mut self, pointer: PointerId) -> Self {
        self.pointer = pointer;
        self
    }

    pub fn down(mut self, x: f32, y: f32) -> Self {
        self.push(PointerAction::Down, Vec2::new(x, y));
        self
    }

    /// `steps` evenly spaced moves from the last position to `(x, y)`.
    pub fn move_to(mut self, x: f32, y: f32, steps: usize) -> Self {
        let from = self.last_position();
        let to = Vec2::new(x, y);
        let steps = steps.max(1);
        for i in 1..=steps {
            // Scale before dividing so whole-pixel traces stay exact.
            let position = from + (to - from) * i as f32 / steps as f32;
            self.push(PointerAction::Move, position);
        }
        self
    }

    /// Moves by the given offsets, one event per offset.
    pub fn move_by(mut self, offsets: &[(f32, f32)]) -> Self {
        for (dx, dy) in offsets {
            let next = self.last_position() + Vec2::new(*dx, *dy);
            self.push(PointerAction::Move, next);
        }
        self
    }

    /// Up at the last position.
    pub fn up(mut self) -> Self {
        let at = self.last_position();
        self.push(PointerAction::Up, at);
        self
    }

    /// Cancel at the last position.
    pub fn cancel(mut self) -> Self {
        let at = self.last_position();
        self.push(PointerAction::Cancel, at);
        self
    }

    pub fn events(&self) -> &[PointerEvent] {
        &self.events
    }

    /// Deliver every event through the own-touch path.
    pub fn run(&self, drawer: &mut SwipeDrawer) {
        for event in &self.events {
            drawer.handle_pointer(event);
        }
    }

    /// Deliver events the way a host with children does: through the intercept
    /// path until the drawer takes the gesture, then through the touch path.
    ///
    /// Returns the index of the event that was intercepted, if any.
    pub fn run_intercepted(&self, drawer: &mut SwipeDrawer) -> Option<usize> {
        let mut intercepted = None;
        for (index, event) in self.events.iter().enumerate() {
            if intercepted.is_some() {
                drawer.handle_pointer(event);
            } else if drawer.intercept_pointer(event) {
                intercepted = Some(index);
            }
        }
        intercepted
    }

    fn push(&mut self, action: PointerAction, position: Vec2) {
        self.cursor = position;
        self.events
            .push(PointerEvent::new(action, self.pointer, position));
    }

    fn last_position(&self) -> Vec2 {
        self.cursor
    }
}

/// Tick `drawer` until its settle finishes. Returns the frame count.
///
/// # Panics
///
/// Panics if the settle is still running after ten seconds of frames.
pub fn settle(drawer: &mut SwipeDrawer) -> usize {
    let mut frames = 0;
    while drawer.tick(FRAME) {
        frames += 1;
        assert!(
            frames < MAX_SETTLE_FRAMES,
            "settle still running after {frames} frames"
        );
    }
    frames
}

/// Tick `drawer` for exactly `frames` frames.
pub fn settle_frames(drawer: &mut SwipeDrawer, frames: usize) {
    for _ in 0..frames {
        drawer.tick(FRAME);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_script_shape() {
        let script = TouchScript::drag((0.0, 0.0), (0.0, 40.0), 4);
        let events = script.events();
        assert_eq!(events.len(), 6);
        assert_eq!(events[0].action, PointerAction::Down);
        assert_eq!(events[2].position, Vec2::new(0.0, 20.0));
        assert_eq!(events[5].action, PointerAction::Up);
        assert_eq!(events[5].position, Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_move_by_accumulates() {
        let script = TouchScript::new()
            .down(10.0, 10.0)
            .move_by(&[(5.0, 0.0), (5.0, 1.0)])
            .with_pointer(PointerId(3))
            .cancel();
        let events = script.events();
        assert_eq!(events[2].position, Vec2::new(20.0, 11.0));
        assert_eq!(events[3].pointer, PointerId(3));
    }

    #[test]
    fn test_resume_has_no_down() {
        let script = TouchScript::resume(0.0, 60.0).move_to(0.0, 100.0, 4).up();
        let events = script.events();
        assert_eq!(events.len(), 5);
        assert_eq!(events[0].action, PointerAction::Move);
        assert_eq!(events[0].position, Vec2::new(0.0, 70.0));
    }
}
