//! Direction resolution from the first meaningful pointer displacement.

use swipedrawer_core::math::Vec2;

use crate::direction::Direction;

/// Resolve the swipe direction for a displacement from the down point.
///
/// Steep motion (`|dy/dx| >= 1`) is vertical; `dx == 0` counts as steep. Down
/// motion reveals the top panel, right motion reveals the left panel.
pub fn resolve_direction(dx: f32, dy: f32) -> Direction {
    let steep = dx == 0.0 || (dy / dx).abs() >= 1.0;
    if steep {
        if dy >= 0.0 {
            Direction::TOP
        } else {
            Direction::BOTTOM
        }
    } else if dx >= 0.0 {
        Direction::LEFT
    } else {
        Direction::RIGHT
    }
}

/// Tracks the down point of the current gesture.
#[derive(Debug, Clone, Default)]
pub struct DirectionResolver {
    down: Option<Vec2>,
}

impl DirectionResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the down point of a new gesture.
    pub fn begin(&mut self, position: Vec2) {
        self.down = Some(position);
    }

    /// Forget the down point.
    pub fn clear(&mut self) {
        self.down = None;
    }

    /// Resolve a direction from a move sample.
    ///
    /// Returns `None` without a down point or when the sample has not moved
    /// away from it.
    pub fn resolve(&self, position: Vec2) -> Option<Direction> {
        let delta = position - self.down?;
        if delta == Vec2::ZERO {
            return None;
        }
        Some(resolve_direction(delta.x, delta.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slope_table() {
        assert_eq!(resolve_direction(1.0, 5.0), Direction::TOP);
        assert_eq!(resolve_direction(-1.0, 5.0), Direction::TOP);
        assert_eq!(resolve_direction(1.0, -5.0), Direction::BOTTOM);
        assert_eq!(resolve_direction(5.0, 1.0), Direction::LEFT);
        assert_eq!(resolve_direction(5.0, -1.0), Direction::LEFT);
        assert_eq!(resolve_direction(-5.0, 1.0), Direction::RIGHT);
    }

    #[test]
    fn test_diagonal_is_vertical() {
        assert_eq!(resolve_direction(4.0, 4.0), Direction::TOP);
        assert_eq!(resolve_direction(-4.0, -4.0), Direction::BOTTOM);
        assert_eq!(resolve_direction(4.0, -4.0), Direction::BOTTOM);
    }

    #[test]
    fn test_zero_dx_falls_back_to_vertical() {
        assert_eq!(resolve_direction(0.0, 3.0), Direction::TOP);
        assert_eq!(resolve_direction(0.0, -3.0), Direction::BOTTOM);
        assert_eq!(resolve_direction(0.0, 0.0), Direction::TOP);
        assert_eq!(resolve_direction(-0.0, -1.0), Direction::BOTTOM);
    }

    #[test]
    fn test_zero_dy_is_horizontal() {
        assert_eq!(resolve_direction(2.0, 0.0), Direction::LEFT);
        assert_eq!(resolve_direction(-2.0, 0.0), Direction::RIGHT);
    }

    #[test]
    fn test_exhaustive_grid_matches_table() {
        for dx in -20i32..=20 {
            for dy in -20i32..=20 {
                let (fx, fy) = (dx as f32, dy as f32);
                let expected = if dx == 0 || dy.abs() >= dx.abs() {
                    if dy >= 0 { Direction::TOP } else { Direction::BOTTOM }
                } else if dx >= 0 {
                    Direction::LEFT
                } else {
                    Direction::RIGHT
                };
                assert_eq!(resolve_direction(fx, fy), expected, "dx={dx} dy={dy}");
            }
        }
    }

    #[test]
    fn test_resolver_needs_down_and_motion() {
        let mut resolver = DirectionResolver::new();
        assert_eq!(resolver.resolve(Vec2::new(10.0, 10.0)), None);

        resolver.begin(Vec2::new(10.0, 10.0));
        assert_eq!(resolver.resolve(Vec2::new(10.0, 10.0)), None);
        assert_eq!(resolver.resolve(Vec2::new(30.0, 12.0)), Some(Direction::LEFT));
        assert_eq!(resolver.resolve(Vec2::new(10.0, 2.0)), Some(Direction::BOTTOM));

        resolver.clear();
        assert_eq!(resolver.resolve(Vec2::new(30.0, 12.0)), None);
    }
}
