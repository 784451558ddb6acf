//! Panel rectangles relative to the content surface.
//!
//! Each panel sits against the content's margin box on its side, so it comes
//! fully into view once content has travelled the panel's outer extent.

use swipedrawer_core::geometry::Rect;
use swipedrawer_core::math::IVec2;

use crate::direction::{Axis, Direction};
use crate::geometry::{DrawerGeometry, SurfaceSpec};

/// Current rectangles of the content surface and its panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelLayout {
    pub content: Rect<i32>,
    pub left: Option<Rect<i32>>,
    pub top: Option<Rect<i32>>,
    pub right: Option<Rect<i32>>,
    pub bottom: Option<Rect<i32>>,
}

impl PanelLayout {
    /// Full layout with content at `position`.
    pub fn compute(geometry: &DrawerGeometry, position: IVec2) -> Self {
        let mut layout = Self {
            content: content_rect(geometry, position),
            ..Default::default()
        };
        layout.relayout_axis(geometry, Axis::Horizontal);
        layout.relayout_axis(geometry, Axis::Vertical);
        layout
    }

    /// Move content to `position` and recompute panels for the moving axis.
    ///
    /// With no active axis both panel pairs are recomputed.
    pub fn update(&mut self, geometry: &DrawerGeometry, position: IVec2, moving: Option<Axis>) {
        self.content = content_rect(geometry, position);
        match moving {
            Some(axis) => self.relayout_axis(geometry, axis),
            None => {
                self.relayout_axis(geometry, Axis::Horizontal);
                self.relayout_axis(geometry, Axis::Vertical);
            }
        }
    }

    /// Rectangle of the panel for `direction`.
    pub fn panel(&self, direction: Direction) -> Option<Rect<i32>> {
        if direction == Direction::LEFT {
            self.left
        } else if direction == Direction::TOP {
            self.top
        } else if direction == Direction::RIGHT {
            self.right
        } else if direction == Direction::BOTTOM {
            self.bottom
        } else {
            None
        }
    }

    /// Recompute only the main-axis coordinate of the panels on `axis`; the
    /// cross-axis coordinate and size keep their previous values.
    fn relayout_axis(&mut self, geometry: &DrawerGeometry, axis: Axis) {
        let content = self.content;
        let cm = geometry.content().margins;
        match axis {
            Axis::Horizontal => {
                if let Some(panel) = geometry.panel(Direction::LEFT) {
                    let x = content.x - cm.left - panel.margins.right - panel.size.width;
                    self.left = Some(move_x(self.left, x, || side_rect(panel, content, x)));
                }
                if let Some(panel) = geometry.panel(Direction::RIGHT) {
                    let x = content.right() + cm.right + panel.margins.left;
                    self.right = Some(move_x(self.right, x, || side_rect(panel, content, x)));
                }
            }
            Axis::Vertical => {
                if let Some(panel) = geometry.panel(Direction::TOP) {
                    let y = content.y - cm.top - panel.margins.bottom - panel.size.height;
                    self.top = Some(move_y(self.top, y, || end_rect(panel, content, y)));
                }
                if let Some(panel) = geometry.panel(Direction::BOTTOM) {
                    let y = content.bottom() + cm.bottom + panel.margins.top;
                    self.bottom = Some(move_y(self.bottom, y, || end_rect(panel, content, y)));
                }
            }
        }
    }
}

fn content_rect(geometry: &DrawerGeometry, position: IVec2) -> Rect<i32> {
    let size = geometry.content().size;
    Rect::new(position.x, position.y, size.width, size.height)
}

/// Left/right panel: spans the content height inside its own vertical margins.
fn side_rect(panel: &SurfaceSpec, content: Rect<i32>, x: i32) -> Rect<i32> {
    Rect::new(
        x,
        content.y + panel.margins.top,
        panel.size.width,
        (content.height - panel.margins.vertical()).max(0),
    )
}

/// Top/bottom panel: spans the content width inside its own horizontal margins.
fn end_rect(panel: &SurfaceSpec, content: Rect<i32>, y: i32) -> Rect<i32> {
    Rect::new(
        content.x + panel.margins.left,
        y,
        (content.width - panel.margins.horizontal()).max(0),
        panel.size.height,
    )
}

fn move_x(previous: Option<Rect<i32>>, x: i32, initial: impl FnOnce() -> Rect<i32>) -> Rect<i32> {
    match previous {
        Some(rect) => Rect { x, ..rect },
        None => initial(),
    }
}

fn move_y(previous: Option<Rect<i32>>, y: i32, initial: impl FnOnce() -> Rect<i32>) -> Rect<i32> {
    match previous {
        Some(rect) => Rect { y, ..rect },
        None => initial(),
    }
}
