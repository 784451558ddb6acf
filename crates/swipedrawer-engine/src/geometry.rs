//! Measured geometry of a drawer: container, content surface and panels.

use swipedrawer_core::geometry::{Insets, Size};
use swipedrawer_core::math::IVec2;

use crate::direction::{Axis, Direction};
use crate::error::{DrawerError, DrawerResult};

/// Measured size and margins of one surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceSpec {
    pub size: Size<i32>,
    pub margins: Insets<i32>,
}

impl SurfaceSpec {
    /// A surface with no margins.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            margins: Insets::default(),
        }
    }

    /// Set the margins.
    pub fn margins(mut self, margins: Insets<i32>) -> Self {
        self.margins = margins;
        self
    }

    /// Width including horizontal margins.
    pub fn outer_width(&self) -> i32 {
        self.margins.left + self.size.width + self.margins.right
    }

    /// Height including vertical margins.
    pub fn outer_height(&self) -> i32 {
        self.margins.top + self.size.height + self.margins.bottom
    }

    /// Size along `axis`, margins excluded.
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.size.width,
            Axis::Vertical => self.size.height,
        }
    }

    /// Outer size along `axis`.
    pub fn outer_extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.outer_width(),
            Axis::Vertical => self.outer_height(),
        }
    }

    fn validate(&self) -> DrawerResult<()> {
        if self.size.width < 0 || self.size.height < 0 {
            return Err(DrawerError::InvalidGeometry("surface size is negative"));
        }
        Ok(())
    }
}

/// Up to four panels, one per cardinal direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelSet {
    pub left: Option<SurfaceSpec>,
    pub top: Option<SurfaceSpec>,
    pub right: Option<SurfaceSpec>,
    pub bottom: Option<SurfaceSpec>,
}

impl PanelSet {
    /// The panel revealed by `direction`, if configured.
    pub fn get(&self, direction: Direction) -> Option<&SurfaceSpec> {
        if direction == Direction::LEFT {
            self.left.as_ref()
        } else if direction == Direction::TOP {
            self.top.as_ref()
        } else if direction == Direction::RIGHT {
            self.right.as_ref()
        } else if direction == Direction::BOTTOM {
            self.bottom.as_ref()
        } else {
            None
        }
    }

    /// Replace the panel for a single direction. Ignored for non-cardinal input.
    pub fn set(&mut self, direction: Direction, panel: Option<SurfaceSpec>) {
        if direction == Direction::LEFT {
            self.left = panel;
        } else if direction == Direction::TOP {
            self.top = panel;
        } else if direction == Direction::RIGHT {
            self.right = panel;
        } else if direction == Direction::BOTTOM {
            self.bottom = panel;
        }
    }

    /// Directions that have a panel.
    pub fn configured(&self) -> Direction {
        Direction::CARDINALS
            .into_iter()
            .filter(|d| self.get(*d).is_some())
            .fold(Direction::NONE, |acc, d| acc | d)
    }
}

/// Output of the host's measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurements {
    pub container: Size<i32>,
    pub content: SurfaceSpec,
    pub panels: PanelSet,
}

impl Measurements {
    /// Measurements whose container wraps the content and its margins.
    pub fn wrap_content(content: SurfaceSpec, panels: PanelSet) -> Self {
        Self {
            container: Size::new(content.outer_width(), content.outer_height()),
            content,
            panels,
        }
    }

    pub(crate) fn validate(&self) -> DrawerResult<()> {
        if self.container.width < 0 || self.container.height < 0 {
            return Err(DrawerError::InvalidGeometry("container size is negative"));
        }
        self.content.validate()?;
        for direction in Direction::CARDINALS {
            if let Some(panel) = self.panels.get(direction) {
                panel.validate()?;
            }
        }
        Ok(())
    }
}

/// Geometry derived from one measurement pass plus the damping factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawerGeometry {
    measurements: Measurements,
    factor: f32,
}

impl DrawerGeometry {
    pub fn new(measurements: Measurements, factor: f32) -> Self {
        Self {
            measurements,
            factor,
        }
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn container(&self) -> Size<i32> {
        self.measurements.container
    }

    pub fn content(&self) -> &SurfaceSpec {
        &self.measurements.content
    }

    pub fn panels(&self) -> &PanelSet {
        &self.measurements.panels
    }

    pub fn panel(&self, direction: Direction) -> Option<&SurfaceSpec> {
        self.measurements.panels.get(direction)
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }

    pub(crate) fn set_factor(&mut self, factor: f32) {
        self.factor = factor;
    }

    /// Rest position of the content surface.
    pub fn origin(&self) -> IVec2 {
        let margins = self.measurements.content.margins;
        IVec2::new(margins.left, margins.top)
    }

    /// Maximum unlocked travel along `axis`: container extent scaled by the
    /// damping factor, truncated to whole pixels.
    pub fn drag_range(&self, axis: Axis) -> i32 {
        let extent = match axis {
            Axis::Horizontal => self.measurements.container.width,
            Axis::Vertical => self.measurements.container.height,
        };
        (extent as f32 * self.factor) as i32
    }

    /// Drag range on both axes.
    pub fn drag_ranges(&self) -> IVec2 {
        IVec2::new(
            self.drag_range(Axis::Horizontal),
            self.drag_range(Axis::Vertical),
        )
    }

    /// Distance content travels to fully reveal the panel for `direction`.
    pub fn panel_extent(&self, direction: Direction) -> Option<i32> {
        let axis = direction.axis()?;
        self.panel(direction).map(|panel| panel.outer_extent(axis))
    }

    /// Displacement a release needs to lock the panel for `direction` open:
    /// the panel's own size along its axis, without margins.
    pub fn release_threshold(&self, direction: Direction) -> Option<i32> {
        let axis = direction.axis()?;
        self.panel(direction).map(|panel| panel.extent(axis))
    }

    /// Content position at which the panel for `direction` is fully visible.
    pub fn revealed_position(&self, direction: Direction) -> Option<IVec2> {
        let axis = direction.axis()?;
        let extent = self.panel_extent(direction)?;
        let origin = self.origin();
        Some(axis.with(origin, axis.of(origin) + direction.sign() * extent))
    }
}
