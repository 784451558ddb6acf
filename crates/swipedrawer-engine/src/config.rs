//! Drawer configuration.

use crate::animation::EasingFunction;
use crate::direction::Direction;
use crate::error::{DrawerError, DrawerResult};

/// Default damping factor.
pub const DEFAULT_FACTOR: f32 = 0.3;

/// Default touch slop in pixels.
pub const DEFAULT_TOUCH_SLOP: f32 = 8.0;

/// Base settle duration in seconds.
pub const BASE_SETTLE_DURATION: f32 = 0.256;

/// Upper bound on a settle in seconds.
pub const MAX_SETTLE_DURATION: f32 = 0.6;

/// Configuration for a [`SwipeDrawer`](crate::SwipeDrawer).
#[derive(Debug, Clone, PartialEq)]
pub struct DrawerConfig {
    /// Directions the content may be dragged toward.
    pub direction_mask: Direction,
    /// Fraction of the container extent an unlocked drag may cover.
    pub factor: f32,
    /// Pointer travel in pixels before a move captures the content.
    pub touch_slop: f32,
    pub settle_base_duration: f32,
    pub settle_max_duration: f32,
    pub settle_easing: EasingFunction,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            direction_mask: Direction::TOP,
            factor: DEFAULT_FACTOR,
            touch_slop: DEFAULT_TOUCH_SLOP,
            settle_base_duration: BASE_SETTLE_DURATION,
            settle_max_duration: MAX_SETTLE_DURATION,
            settle_easing: EasingFunction::QuintOut,
        }
    }
}

impl DrawerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the allowed directions.
    pub fn direction_mask(mut self, mask: Direction) -> Self {
        self.direction_mask = mask;
        self
    }

    /// Set the damping factor. Checked by [`DrawerConfig::validate`].
    pub fn factor(mut self, factor: f32) -> Self {
        self.factor = factor;
        self
    }

    /// Set the touch slop in pixels.
    pub fn touch_slop(mut self, slop: f32) -> Self {
        self.touch_slop = slop.max(0.0);
        self
    }

    /// Set the settle timing.
    pub fn settle_timing(mut self, base: f32, max: f32) -> Self {
        self.settle_base_duration = base.max(0.0);
        self.settle_max_duration = max.max(self.settle_base_duration);
        self
    }

    /// Set the settle easing.
    pub fn settle_easing(mut self, easing: EasingFunction) -> Self {
        self.settle_easing = easing;
        self
    }

    pub fn validate(&self) -> DrawerResult<()> {
        validate_factor(self.factor)
    }
}

/// Accept factors in (0, 1]; everything else, NaN included, is rejected.
pub fn validate_factor(factor: f32) -> DrawerResult<()> {
    if factor > 0.0 && factor <= 1.0 {
        Ok(())
    } else {
        Err(DrawerError::InvalidFactor(factor))
    }
}
