//! Settle animations for the content surface.
//!
//! A settle is an eased slide between two whole-pixel positions, advanced by
//! the host calling `update(dt)` once per frame.

use swipedrawer_core::math::IVec2;

/// Easing functions for settle slides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    /// Linear interpolation
    Linear,
    /// Ease out (slow end)
    EaseOut,
    /// Ease in and out (slow start and end)
    EaseInOut,
    /// Cubic ease out
    CubicOut,
    /// Quintic ease out, the classic scroller curve
    QuintOut,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseOut => t * (2.0 - t),
            EasingFunction::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    -1.0 + (4.0 - 2.0 * t) * t
                }
            }
            EasingFunction::CubicOut => {
                let t = t - 1.0;
                t * t * t + 1.0
            }
            EasingFunction::QuintOut => {
                let t = t - 1.0;
                t * t * t * t * t + 1.0
            }
        }
    }
}

/// Animation state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimationState {
    /// Animation is running
    Running,
    /// Animation is completed
    Completed,
}

/// An eased slide of the content surface from one position to another.
#[derive(Debug, Clone)]
pub struct SettleAnimation {
    from: IVec2,
    to: IVec2,
    /// Duration in seconds
    duration: f32,
    /// Elapsed time in seconds
    elapsed: f32,
    easing: EasingFunction,
    state: AnimationState,
}

impl SettleAnimation {
    /// Create a new slide. A non-positive duration completes on the first update.
    pub fn new(from: IVec2, to: IVec2, duration: f32, easing: EasingFunction) -> Self {
        Self {
            from,
            to,
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
            state: AnimationState::Running,
        }
    }

    /// Start position.
    pub fn from(&self) -> IVec2 {
        self.from
    }

    /// Target position.
    pub fn target(&self) -> IVec2 {
        self.to
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Get the current state.
    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn is_done(&self) -> bool {
        self.state == AnimationState::Completed
    }

    /// Current position, rounded to whole pixels. Exactly the target once done.
    pub fn position(&self) -> IVec2 {
        if self.is_done() {
            return self.to;
        }
        let t = if self.duration > 0.0 {
            self.elapsed / self.duration
        } else {
            1.0
        };
        let eased = self.easing.apply(t);
        let delta = (self.to - self.from).as_vec2() * eased;
        self.from + delta.round().as_ivec2()
    }

    /// Update the animation by delta time.
    ///
    /// Returns true if the animation is still running.
    pub fn update(&mut self, delta_time: f32) -> bool {
        if self.state == AnimationState::Completed {
            return false;
        }

        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.state = AnimationState::Completed;
            return false;
        }

        true
    }
}

/// Duration of a settle covering `distance` pixels on an axis whose drag range
/// is `range`.
///
/// Grows with distance relative to the range and is capped at `max`.
pub fn settle_duration(distance: i32, range: i32, base: f32, max: f32) -> f32 {
    if distance == 0 {
        return 0.0;
    }
    let ratio = if range > 0 {
        distance.unsigned_abs() as f32 / range as f32
    } else {
        0.0
    };
    ((1.0 + ratio) * base).min(max)
}
