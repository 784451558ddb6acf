//! Swipe directions and drag axes.
//!
//! A direction names the panel being revealed, not the way content travels:
//! `LEFT` reveals the left panel, so content moves toward +x.

use bitflags::bitflags;
use swipedrawer_core::math::IVec2;

use crate::error::{DrawerError, DrawerResult};

bitflags! {
    /// Cardinal swipe directions.
    ///
    /// Used both for the single active direction of a gesture and for the set
    /// of directions a drawer allows. The empty set is [`Direction::NONE`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        const NONE   = 0;
        const LEFT   = 1 << 0;
        const TOP    = 1 << 1;
        const RIGHT  = 1 << 2;
        const BOTTOM = 1 << 3;
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::NONE
    }
}

impl Direction {
    /// The four cardinal directions in flag order.
    pub const CARDINALS: [Direction; 4] = [
        Direction::LEFT,
        Direction::TOP,
        Direction::RIGHT,
        Direction::BOTTOM,
    ];

    /// Parse raw flag bits, rejecting anything outside the four cardinals.
    pub fn try_from_bits(bits: u8) -> DrawerResult<Self> {
        Direction::from_bits(bits).ok_or(DrawerError::InvalidDirection(bits))
    }

    /// Parse raw bits that must name exactly one direction.
    pub fn try_cardinal(bits: u8) -> DrawerResult<Self> {
        let direction = Self::try_from_bits(bits)?;
        if direction.is_cardinal() {
            Ok(direction)
        } else {
            Err(DrawerError::InvalidDirection(bits))
        }
    }

    /// Exactly one flag set.
    pub const fn is_cardinal(&self) -> bool {
        self.bits().count_ones() == 1
    }

    /// Axis content travels along for this direction, if it is a single direction.
    pub const fn axis(&self) -> Option<Axis> {
        match self.bits() {
            1 | 4 => Some(Axis::Horizontal),
            2 | 8 => Some(Axis::Vertical),
            _ => None,
        }
    }

    /// Sign of content travel along [`Direction::axis`]: `+1` for LEFT/TOP,
    /// `-1` for RIGHT/BOTTOM, `0` otherwise.
    pub const fn sign(&self) -> i32 {
        match self.bits() {
            1 | 2 => 1,
            4 | 8 => -1,
            _ => 0,
        }
    }

    /// Whether both are single directions on perpendicular axes.
    pub fn is_orthogonal_to(&self, other: Direction) -> bool {
        matches!((self.axis(), other.axis()), (Some(a), Some(b)) if a != b)
    }
}

/// One of the two drag axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    /// The component of `v` on this axis.
    #[inline]
    pub fn of(self, v: IVec2) -> i32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    /// `v` with this axis' component replaced.
    #[inline]
    pub fn with(self, v: IVec2, value: i32) -> IVec2 {
        match self {
            Axis::Horizontal => IVec2::new(value, v.y),
            Axis::Vertical => IVec2::new(v.x, value),
        }
    }
}
