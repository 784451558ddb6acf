//! Pointer capture and settle pump for a single draggable surface.
//!
//! [`DragHelper`] owns the mechanics: which pointer is tracked, when the
//! surface is captured, how pointer motion turns into whole-pixel offsets and
//! how settle animations advance. Policy (what may be captured, where motion is
//! bounded, where a release settles) lives behind [`DragCallback`].

use swipedrawer_core::math::{IVec2, Vec2};
use swipedrawer_core::profiling::profile_function;

use crate::animation::{EasingFunction, SettleAnimation, settle_duration};
use crate::config::DrawerConfig;
use crate::event::{PointerAction, PointerEvent, PointerId};
use crate::state::DragPhase;

/// Policy consulted by [`DragHelper`].
pub trait DragCallback {
    /// Whether the surface may be captured by `pointer` at `position`.
    fn try_capture(&mut self, pointer: PointerId, position: Vec2) -> bool;

    /// Bound a proposed x coordinate. `dx` is the motion that produced it.
    fn clamp_horizontal(&mut self, proposed: i32, dx: i32) -> i32;

    /// Bound a proposed y coordinate. `dy` is the motion that produced it.
    fn clamp_vertical(&mut self, proposed: i32, dy: i32) -> i32;

    /// The surface moved to `position`, `delta` away from where it was.
    fn on_position_changed(&mut self, position: IVec2, delta: IVec2);

    /// The captured surface was let go. Returns where it should settle, or
    /// `None` to leave it in place.
    fn on_release(&mut self) -> Option<IVec2>;

    /// The phase changed. Returning a position starts a slide toward it.
    fn on_phase_changed(&mut self, previous: DragPhase, phase: DragPhase) -> Option<IVec2>;

    /// Current surface position.
    fn content_position(&self) -> IVec2;

    /// Drag range per axis. Axes with no range never capture by movement.
    fn drag_range(&self) -> IVec2;
}

/// Tracks one pointer and drives a surface through the drag phases.
#[derive(Debug, Clone)]
pub struct DragHelper {
    phase: DragPhase,
    active_pointer: Option<PointerId>,
    down: Vec2,
    last: Vec2,
    /// Sub-pixel pointer motion not yet applied.
    remainder: Vec2,
    settle: Option<SettleAnimation>,
    touch_slop: f32,
    base_duration: f32,
    max_duration: f32,
    easing: EasingFunction,
}

impl Default for DragHelper {
    fn default() -> Self {
        Self::new(&DrawerConfig::default())
    }
}

impl DragHelper {
    pub fn new(config: &DrawerConfig) -> Self {
        Self {
            phase: DragPhase::Idle,
            active_pointer: None,
            down: Vec2::ZERO,
            last: Vec2::ZERO,
            remainder: Vec2::ZERO,
            settle: None,
            touch_slop: config.touch_slop,
            base_duration: config.settle_base_duration,
            max_duration: config.settle_max_duration,
            easing: config.settle_easing,
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn touch_slop(&self) -> f32 {
        self.touch_slop
    }

    /// The pointer being tracked, if any.
    pub fn active_pointer(&self) -> Option<PointerId> {
        self.active_pointer
    }

    /// Whether events from `pointer` belong to the tracked gesture.
    pub fn tracks(&self, pointer: PointerId) -> bool {
        self.active_pointer.is_none_or(|active| active == pointer)
    }

    /// Target of the settle in progress.
    pub fn settle_target(&self) -> Option<IVec2> {
        self.settle.as_ref().map(SettleAnimation::target)
    }

    /// Parent-intercept path. Returns true once the surface is captured.
    ///
    /// A down event only captures when it lands on a settling surface; otherwise
    /// capture waits for motion beyond the touch slop.
    pub fn should_intercept(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) -> bool {
        profile_function!();
        if !self.tracks(event.pointer) {
            return self.phase == DragPhase::Dragging;
        }

        match event.action {
            PointerAction::Down => {
                self.begin_tracking(event);
                if self.phase == DragPhase::Settling {
                    self.try_capture(event, callback);
                }
            }
            PointerAction::Move => {
                if self.active_pointer.is_some() && self.phase != DragPhase::Dragging {
                    self.capture_past_slop(event, callback);
                }
                self.last = event.position;
            }
            PointerAction::Up | PointerAction::Cancel => {
                if self.phase == DragPhase::Dragging {
                    self.release(callback);
                }
                self.cancel();
            }
        }

        self.phase == DragPhase::Dragging
    }

    /// Own-touch path. A down event captures immediately.
    pub fn process_pointer(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        profile_function!();
        if !self.tracks(event.pointer) {
            return;
        }

        match event.action {
            PointerAction::Down => {
                self.begin_tracking(event);
                self.try_capture(event, callback);
            }
            PointerAction::Move => {
                if self.active_pointer.is_none() {
                    return;
                }
                if self.phase == DragPhase::Dragging {
                    let raw = event.position - self.last + self.remainder;
                    let step = raw.trunc();
                    self.remainder = raw - step;
                    self.drag_by(step.as_ivec2(), callback);
                } else {
                    self.capture_past_slop(event, callback);
                }
                self.last = event.position;
            }
            PointerAction::Up | PointerAction::Cancel => {
                if self.phase == DragPhase::Dragging {
                    self.release(callback);
                }
                self.cancel();
            }
        }
    }

    /// Settle a released surface at `target`.
    ///
    /// Returns false, and goes idle, when the surface is already there.
    pub fn settle_to(&mut self, target: IVec2, callback: &mut dyn DragCallback) -> bool {
        let from = callback.content_position();
        if from == target {
            self.settle = None;
            self.set_phase(DragPhase::Idle, callback);
            return false;
        }

        let delta = target - from;
        let range = callback.drag_range();
        let (distance, axis_range) = if delta.x.abs() >= delta.y.abs() {
            (delta.x, range.x)
        } else {
            (delta.y, range.y)
        };
        let duration = settle_duration(distance, axis_range, self.base_duration, self.max_duration);
        tracing::debug!("Settling from {:?} to {:?} over {:.3}s", from, target, duration);

        self.settle = Some(SettleAnimation::new(from, target, duration, self.easing));
        self.set_phase(DragPhase::Settling, callback);
        true
    }

    /// Slide the surface to `target` whether or not it is captured.
    ///
    /// Any drag in progress stops following the pointer.
    pub fn smooth_slide_to(&mut self, target: IVec2, callback: &mut dyn DragCallback) -> bool {
        self.remainder = Vec2::ZERO;
        self.settle_to(target, callback)
    }

    /// Advance the settle in progress by `dt` seconds.
    ///
    /// Returns true while more frames are needed.
    pub fn continue_settling(&mut self, dt: f32, callback: &mut dyn DragCallback) -> bool {
        profile_function!();
        if self.phase != DragPhase::Settling {
            return false;
        }
        if self.settle.is_none() {
            self.set_phase(DragPhase::Idle, callback);
            return false;
        }

        let Some(settle) = self.settle.as_mut() else {
            return false;
        };
        let running = settle.update(dt);
        let position = settle.position();
        let current = callback.content_position();
        if position != current {
            callback.on_position_changed(position, position - current);
        }

        if running {
            return true;
        }
        self.settle = None;
        self.set_phase(DragPhase::Idle, callback);
        // A phase callback may have started another slide.
        self.phase == DragPhase::Settling
    }

    /// Forget the tracked pointer. The surface and phase are left alone.
    pub fn cancel(&mut self) {
        self.active_pointer = None;
        self.remainder = Vec2::ZERO;
    }

    /// Stop everything and put the surface at `target` immediately.
    pub fn abort_to(&mut self, target: IVec2, callback: &mut dyn DragCallback) {
        self.cancel();
        self.settle = None;
        let current = callback.content_position();
        if current != target {
            callback.on_position_changed(target, target - current);
        }
        self.set_phase(DragPhase::Idle, callback);
    }

    fn begin_tracking(&mut self, event: &PointerEvent) {
        self.active_pointer = Some(event.pointer);
        self.down = event.position;
        self.last = event.position;
        self.remainder = Vec2::ZERO;
    }

    fn capture_past_slop(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) {
        let delta = event.position - self.down;
        if self.past_slop(delta, callback.drag_range()) {
            self.try_capture(event, callback);
        }
    }

    fn past_slop(&self, delta: Vec2, range: IVec2) -> bool {
        let horizontal = range.x > 0;
        let vertical = range.y > 0;
        match (horizontal, vertical) {
            (true, true) => delta.length_squared() > self.touch_slop * self.touch_slop,
            (true, false) => delta.x.abs() > self.touch_slop,
            (false, true) => delta.y.abs() > self.touch_slop,
            (false, false) => false,
        }
    }

    fn try_capture(&mut self, event: &PointerEvent, callback: &mut dyn DragCallback) -> bool {
        if self.phase == DragPhase::Dragging {
            return true;
        }
        if !callback.try_capture(event.pointer, event.position) {
            return false;
        }

        tracing::debug!("Captured content with pointer {:?}", event.pointer);
        self.settle = None;
        self.remainder = Vec2::ZERO;
        self.last = event.position;
        self.set_phase(DragPhase::Dragging, callback);
        self.phase == DragPhase::Dragging
    }

    fn drag_by(&mut self, step: IVec2, callback: &mut dyn DragCallback) {
        let current = callback.content_position();
        let mut target = current;
        if step.x != 0 {
            target.x = callback.clamp_horizontal(current.x.saturating_add(step.x), step.x);
        }
        if step.y != 0 {
            target.y = callback.clamp_vertical(current.y.saturating_add(step.y), step.y);
        }
        if target != current {
            tracing::trace!("Dragged content to {:?}", target);
            callback.on_position_changed(target, target - current);
        }
    }

    fn release(&mut self, callback: &mut dyn DragCallback) {
        tracing::debug!("Released content at {:?}", callback.content_position());
        match callback.on_release() {
            Some(target) => {
                self.settle_to(target, callback);
            }
            None => self.set_phase(DragPhase::Idle, callback),
        }
    }

    fn set_phase(&mut self, phase: DragPhase, callback: &mut dyn DragCallback) {
        if self.phase == phase {
            return;
        }
        let previous = self.phase;
        self.phase = phase;
        if let Some(target) = callback.on_phase_changed(previous, phase) {
            self.smooth_slide_to(target, callback);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A free surface bounded to 0..=100 on both axes.
    #[derive(Default)]
    struct Surface {
        position: IVec2,
        capturable: bool,
        release_to: Option<IVec2>,
        phases: Vec<(DragPhase, DragPhase)>,
        slide_on_recapture: Option<IVec2>,
    }

    impl DragCallback for Surface {
        fn try_capture(&mut self, _pointer: PointerId, _position: Vec2) -> bool {
            self.capturable
        }

        fn clamp_horizontal(&mut self, proposed: i32, _dx: i32) -> i32 {
            proposed.clamp(0, 100)
        }

        fn clamp_vertical(&mut self, proposed: i32, _dy: i32) -> i32 {
            proposed.clamp(0, 100)
        }

        fn on_position_changed(&mut self, position: IVec2, _delta: IVec2) {
            self.position = position;
        }

        fn on_release(&mut self) -> Option<IVec2> {
            self.release_to
        }

        fn on_phase_changed(&mut self, previous: DragPhase, phase: DragPhase) -> Option<IVec2> {
            self.phases.push((previous, phase));
            if previous == DragPhase::Settling && phase == DragPhase::Dragging {
                return self.slide_on_recapture;
            }
            None
        }

        fn content_position(&self) -> IVec2 {
            self.position
        }

        fn drag_range(&self) -> IVec2 {
            IVec2::splat(100)
        }
    }

    fn capturable() -> Surface {
        Surface {
            capturable: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_down_captures_on_touch_path() {
        let mut helper = DragHelper::default();
        let mut surface = capturable();

        helper.process_pointer(&PointerEvent::down(10.0, 10.0), &mut surface);
        assert_eq!(helper.phase(), DragPhase::Dragging);
        assert_eq!(surface.phases, vec![(DragPhase::Idle, DragPhase::Dragging)]);
    }

    #[test]
    fn test_intercept_waits_for_slop() {
        let mut helper = DragHelper::default();
        let mut surface = capturable();

        assert!(!helper.should_intercept(&PointerEvent::down(10.0, 10.0), &mut surface));
        assert!(!helper.should_intercept(&PointerEvent::moved(14.0, 14.0), &mut surface));
        assert!(helper.should_intercept(&PointerEvent::moved(20.0, 10.0), &mut surface));
        // The capturing sample does not move the surface.
        assert_eq!(surface.position, IVec2::ZERO);
    }

    #[test]
    fn test_fractional_motion_carries_over() {
        let mut helper = DragHelper::default();
        let mut surface = capturable();

        helper.process_pointer(&PointerEvent::down(0.0, 0.0), &mut surface);
        helper.process_pointer(&PointerEvent::moved(0.5, 0.0), &mut surface);
        assert_eq!(surface.position, IVec2::ZERO);
        helper.process_pointer(&PointerEvent::moved(1.25, 0.0), &mut surface);
        assert_eq!(surface.position, IVec2::new(1, 0));
        helper.process_pointer(&PointerEvent::moved(10.0, 3.5), &mut surface);
        assert_eq!(surface.position, IVec2::new(10, 3));
    }

    #[test]
    fn test_release_settles_then_idles() {
        let mut helper = DragHelper::default();
        let mut surface = Surface {
            release_to: Some(IVec2::ZERO),
            ..capturable()
        };

        helper.process_pointer(&PointerEvent::down(0.0, 0.0), &mut surface);
        helper.process_pointer(&PointerEvent::moved(40.0, 0.0), &mut surface);
        helper.process_pointer(&PointerEvent::up(40.0, 0.0), &mut surface);
        assert_eq!(helper.phase(), DragPhase::Settling);
        assert_eq!(helper.settle_target(), Some(IVec2::ZERO));

        let mut frames = 0;
        while helper.continue_settling(1.0 / 60.0, &mut surface) {
            frames += 1;
            assert!(frames < 120);
        }
        assert_eq!(surface.position, IVec2::ZERO);
        assert_eq!(helper.phase(), DragPhase::Idle);
        assert_eq!(helper.active_pointer(), None);
    }

    #[test]
    fn test_release_without_target_goes_idle() {
        let mut helper = DragHelper::default();
        let mut surface = Surface {
            release_to: None,
            ..capturable()
        };

        helper.process_pointer(&PointerEvent::down(0.0, 0.0), &mut surface);
        helper.process_pointer(&PointerEvent::moved(30.0, 0.0), &mut surface);
        helper.process_pointer(&PointerEvent::up(30.0, 0.0), &mut surface);
        assert_eq!(helper.phase(), DragPhase::Idle);
        assert_eq!(surface.position, IVec2::new(30, 0));
    }

    #[test]
    fn test_settle_to_current_position_is_idle() {
        let mut helper = DragHelper::default();
        let mut surface = capturable();
        assert!(!helper.smooth_slide_to(IVec2::ZERO, &mut surface));
        assert_eq!(helper.phase(), DragPhase::Idle);
        assert!(surface.phases.is_empty());
    }

    #[test]
    fn test_recapture_while_settling_can_redirect() {
        let mut helper = DragHelper::default();
        let mut surface = Surface {
            position: IVec2::new(50, 0),
            slide_on_recapture: Some(IVec2::ZERO),
            ..capturable()
        };

        assert!(helper.smooth_slide_to(IVec2::new(100, 0), &mut surface));
        helper.process_pointer(&PointerEvent::down(60.0, 10.0), &mut surface);

        assert_eq!(helper.phase(), DragPhase::Settling);
        assert_eq!(helper.settle_target(), Some(IVec2::ZERO));
    }

    #[test]
    fn test_other_pointers_are_ignored() {
        let mut helper = DragHelper::default();
        let mut surface = capturable();

        helper.process_pointer(&PointerEvent::down(0.0, 0.0), &mut surface);
        let stray = PointerEvent::moved(50.0, 0.0).with_pointer(PointerId(7));
        helper.process_pointer(&stray, &mut surface);
        assert_eq!(surface.position, IVec2::ZERO);
        assert!(!helper.tracks(PointerId(7)));
    }

    #[test]
    fn test_abort_snaps_and_idles() {
        let mut helper = DragHelper::default();
        let mut surface = Surface {
            position: IVec2::new(80, 0),
            ..capturable()
        };
        helper.smooth_slide_to(IVec2::ZERO, &mut surface);
        helper.abort_to(IVec2::new(100, 0), &mut surface);

        assert_eq!(surface.position, IVec2::new(100, 0));
        assert_eq!(helper.phase(), DragPhase::Idle);
        assert_eq!(helper.settle_target(), None);
    }

    #[test]
    fn test_slop_respects_axis_ranges() {
        let helper = DragHelper::default();
        assert!(!helper.past_slop(Vec2::new(0.0, 20.0), IVec2::new(90, 0)));
        assert!(helper.past_slop(Vec2::new(9.0, 0.0), IVec2::new(90, 0)));
        assert!(helper.past_slop(Vec2::new(6.0, 6.0), IVec2::new(90, 180)));
        assert!(!helper.past_slop(Vec2::new(50.0, 50.0), IVec2::ZERO));
    }
}
