//! Integer and generic geometry primitives shared by the engine.

use std::ops::{Add, Mul};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl<T: Copy + Add<Output = T>> Rect<T> {
    /// Right edge (exclusive).
    pub fn right(&self) -> T {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    pub fn bottom(&self) -> T {
        self.y + self.height
    }
}

impl<T: Copy + PartialOrd + Add<Output = T>> Rect<T> {
    /// Half-open containment test: left/top edges are inside, right/bottom are not.
    pub fn contains(&self, x: T, y: T) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl<T: Mul + Copy> Mul<T> for Size<T> {
    type Output = Size<<T as Mul>::Output>;

    fn mul(self, rhs: T) -> Self::Output {
        Size {
            width: self.width * rhs,
            height: self.height * rhs,
        }
    }
}

/// Per-edge spacing, used for margins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets<T> {
    pub left: T,
    pub top: T,
    pub right: T,
    pub bottom: T,
}

impl<T> Insets<T> {
    pub fn new(left: T, top: T, right: T, bottom: T) -> Self {
        Insets {
            left,
            top,
            right,
            bottom,
        }
    }
}

impl<T: Copy> Insets<T> {
    /// The same inset on every edge.
    pub fn uniform(value: T) -> Self {
        Insets::new(value, value, value, value)
    }
}

impl<T: Copy + Add<Output = T>> Insets<T> {
    /// `left + right`.
    pub fn horizontal(&self) -> T {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(&self) -> T {
        self.top + self.bottom
    }
}
