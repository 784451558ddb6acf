/// Vector math re-exported from [`glam`].
///
/// Pointer coordinates arrive as [`Vec2`]; surface positions are whole pixels
/// and use [`IVec2`].
///
/// ```
/// use swipedrawer_core::math::{IVec2, Vec2};
///
/// let pointer = Vec2::new(12.5, 40.0);
/// let pixel = pointer.as_ivec2();
/// assert_eq!(pixel, IVec2::new(12, 40));
/// ```
///
/// [`glam`]: https://docs.rs/glam
pub mod fast {
    pub use glam::*;
}

pub use fast::{IVec2, Vec2};
