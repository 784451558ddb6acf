//! The public drawer: builder, commands, configuration and queries.

use swipedrawer_core::geometry::{Rect, Size};
use swipedrawer_core::math::IVec2;
use swipedrawer_core::profiling::profile_function;

use crate::clamp::NestedScroll;
use crate::config::{DrawerConfig, validate_factor};
use crate::direction::Direction;
use crate::drag_helper::DragHelper;
use crate::error::{DrawerError, DrawerResult};
use crate::event::SwipeListener;
use crate::geometry::{DrawerGeometry, Measurements, PanelSet, SurfaceSpec};
use crate::resolver::DirectionResolver;
use crate::settle::SettleController;
use crate::state::{DragPhase, GestureState};

/// Builder for [`SwipeDrawer`].
#[derive(Default)]
pub struct SwipeDrawerBuilder {
    config: DrawerConfig,
    container: Option<Size<i32>>,
    content: Option<SurfaceSpec>,
    panels: PanelSet,
    listener: Option<Box<dyn SwipeListener>>,
    nested: Option<Box<dyn NestedScroll>>,
}

impl SwipeDrawerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: DrawerConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the allowed swipe directions.
    pub fn direction_mask(mut self, mask: Direction) -> Self {
        self.config.direction_mask = mask;
        self
    }

    /// Set the damping factor.
    pub fn factor(mut self, factor: f32) -> Self {
        self.config.factor = factor;
        self
    }

    /// Fix the container size. Without it the container wraps the content.
    pub fn container(mut self, width: i32, height: i32) -> Self {
        self.container = Some(Size::new(width, height));
        self
    }

    /// Set the content surface. Required.
    pub fn content(mut self, content: SurfaceSpec) -> Self {
        self.content = Some(content);
        self
    }

    /// Attach the panel revealed by `direction`.
    pub fn panel(mut self, direction: Direction, panel: SurfaceSpec) -> Self {
        self.panels.set(direction, Some(panel));
        self
    }

    pub fn left_panel(self, panel: SurfaceSpec) -> Self {
        self.panel(Direction::LEFT, panel)
    }

    pub fn top_panel(self, panel: SurfaceSpec) -> Self {
        self.panel(Direction::TOP, panel)
    }

    pub fn right_panel(self, panel: SurfaceSpec) -> Self {
        self.panel(Direction::RIGHT, panel)
    }

    pub fn bottom_panel(self, panel: SurfaceSpec) -> Self {
        self.panel(Direction::BOTTOM, panel)
    }

    pub fn listener(mut self, listener: impl SwipeListener + 'static) -> Self {
        self.listener = Some(Box::new(listener));
        self
    }

    pub fn nested_scroll(mut self, nested: impl NestedScroll + 'static) -> Self {
        self.nested = Some(Box::new(nested));
        self
    }

    /// Validate and build the drawer.
    pub fn build(self) -> DrawerResult<SwipeDrawer> {
        let content = self.content.ok_or(DrawerError::MissingContent)?;
        self.config.validate()?;

        let measurements = match self.container {
            Some(container) => Measurements {
                container,
                content,
                panels: self.panels,
            },
            None => Measurements::wrap_content(content, self.panels),
        };
        measurements.validate()?;

        let geometry = DrawerGeometry::new(measurements, self.config.factor);
        let mut controller = SettleController::new(geometry, self.config.direction_mask);
        controller.set_listener(self.listener);
        if let Some(nested) = self.nested {
            controller.set_nested_scroll(nested);
        }

        tracing::debug!(
            "Built drawer: container {:?}, panels {:?}, mask {:?}",
            measurements.container,
            measurements.panels.configured(),
            self.config.direction_mask
        );

        Ok(SwipeDrawer {
            helper: DragHelper::new(&self.config),
            resolver: DirectionResolver::new(),
            controller,
            config: self.config,
        })
    }
}

/// A content surface that can be swiped aside to reveal up to four panels.
///
/// The drawer is driven by pointer events (see
/// [`SwipeDrawer::handle_pointer`]) and by [`SwipeDrawer::tick`] once per
/// frame while a settle is running.
///
/// # Example
///
/// ```
/// use swipedrawer_engine::{Direction, SurfaceSpec, SwipeDrawer};
///
/// let mut drawer = SwipeDrawer::builder()
///     .container(300, 600)
///     .content(SurfaceSpec::new(300, 600))
///     .left_panel(SurfaceSpec::new(100, 600))
///     .build()
///     .unwrap();
///
/// drawer.expand_left();
/// while drawer.tick(1.0 / 60.0) {}
/// assert_eq!(drawer.content_position().x, 100);
/// assert_eq!(drawer.state().lock_direction, Direction::LEFT);
/// ```
#[derive(Debug)]
pub struct SwipeDrawer {
    pub(crate) config: DrawerConfig,
    pub(crate) resolver: DirectionResolver,
    pub(crate) helper: DragHelper,
    pub(crate) controller: SettleController,
}

impl SwipeDrawer {
    pub fn builder() -> SwipeDrawerBuilder {
        SwipeDrawerBuilder::new()
    }

    /// Drop any capture and slide content back to its origin with no lock.
    pub fn reset(&mut self) {
        self.helper.cancel();
        self.resolver.clear();
        self.controller.state_mut().clear_directions();
        let origin = self.controller.geometry().origin();
        self.helper.smooth_slide_to(origin, &mut self.controller);
    }

    /// Reset, then slide the panel for `direction` fully open and lock it.
    ///
    /// A direction with no panel only resets.
    pub fn expand(&mut self, direction: Direction) -> DrawerResult<()> {
        let direction = Direction::try_cardinal(direction.bits())?;

        self.reset();
        match self.controller.geometry().revealed_position(direction) {
            Some(revealed) => {
                tracing::debug!("Expanding {:?} panel", direction);
                self.controller.state_mut().lock_direction = direction;
                self.helper.smooth_slide_to(revealed, &mut self.controller);
            }
            None => tracing::debug!("No {:?} panel to expand", direction),
        }
        Ok(())
    }

    pub fn expand_left(&mut self) {
        self.expand_cardinal(Direction::LEFT);
    }

    pub fn expand_top(&mut self) {
        self.expand_cardinal(Direction::TOP);
    }

    pub fn expand_right(&mut self) {
        self.expand_cardinal(Direction::RIGHT);
    }

    pub fn expand_bottom(&mut self) {
        self.expand_cardinal(Direction::BOTTOM);
    }

    fn expand_cardinal(&mut self, direction: Direction) {
        if let Err(err) = self.expand(direction) {
            tracing::warn!("{}", err);
        }
    }

    /// Allow or refuse new captures. A drag in progress is not affected.
    pub fn enable_swipe(&mut self, enabled: bool) {
        self.controller.set_swipe_enabled(enabled);
    }

    /// Host enable state. Disabling cancels the gesture in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.controller.set_enabled(enabled);
        if !enabled {
            self.cancel_gesture();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.controller.is_enabled()
    }

    /// Add directions to the allowed mask. Takes effect at the next capture.
    pub fn enable_drag_direction(&mut self, direction: Direction) {
        let allowed = self.controller.allowed() | direction;
        self.controller.set_allowed(allowed);
    }

    /// Remove directions from the allowed mask. Takes effect at the next capture.
    pub fn disable_drag_direction(&mut self, direction: Direction) {
        let allowed = self.controller.allowed() & !direction;
        self.controller.set_allowed(allowed);
    }

    /// [`SwipeDrawer::enable_drag_direction`] from raw flag bits.
    pub fn enable_drag_direction_bits(&mut self, bits: u8) -> DrawerResult<()> {
        let direction = self.checked_bits(bits)?;
        self.enable_drag_direction(direction);
        Ok(())
    }

    /// [`SwipeDrawer::disable_drag_direction`] from raw flag bits.
    pub fn disable_drag_direction_bits(&mut self, bits: u8) -> DrawerResult<()> {
        let direction = self.checked_bits(bits)?;
        self.disable_drag_direction(direction);
        Ok(())
    }

    fn checked_bits(&self, bits: u8) -> DrawerResult<Direction> {
        Direction::try_from_bits(bits).inspect_err(|err| tracing::warn!("{}", err))
    }

    /// Whether every direction in `direction` is allowed. `NONE` never is.
    pub fn is_drag_direction_allowed(&self, direction: Direction) -> bool {
        !direction.is_empty() && self.controller.allowed().contains(direction)
    }

    pub fn direction_mask(&self) -> Direction {
        self.controller.allowed()
    }

    /// Change the damping factor. Rejected values keep the previous factor.
    pub fn set_factor(&mut self, factor: f32) -> DrawerResult<()> {
        if let Err(err) = validate_factor(factor) {
            tracing::warn!("{}; keeping {}", err, self.controller.geometry().factor());
            return Err(err);
        }
        self.config.factor = factor;
        self.controller.geometry_mut().set_factor(factor);
        Ok(())
    }

    pub fn set_listener(&mut self, listener: impl SwipeListener + 'static) {
        self.controller.set_listener(Some(Box::new(listener)));
    }

    pub fn clear_listener(&mut self) {
        self.controller.set_listener(None);
    }

    pub fn set_nested_scroll(&mut self, nested: impl NestedScroll + 'static) {
        self.controller.set_nested_scroll(Box::new(nested));
    }

    /// Apply a new measurement pass.
    ///
    /// Cancels any gesture and puts content at the new origin with no lock.
    pub fn set_measurements(&mut self, measurements: Measurements) -> DrawerResult<()> {
        measurements.validate()?;
        self.helper.cancel();
        self.resolver.clear();
        let geometry = DrawerGeometry::new(measurements, self.controller.geometry().factor());
        self.controller.remeasure(geometry);
        let origin = geometry.origin();
        self.helper.abort_to(origin, &mut self.controller);
        Ok(())
    }

    /// Advance a running settle by `dt` seconds.
    ///
    /// Returns true while another frame is needed.
    pub fn tick(&mut self, dt: f32) -> bool {
        profile_function!();
        self.helper.continue_settling(dt, &mut self.controller)
    }

    pub fn state(&self) -> &GestureState {
        self.controller.state()
    }

    pub fn phase(&self) -> DragPhase {
        self.helper.phase()
    }

    pub fn is_settling(&self) -> bool {
        self.helper.phase() == DragPhase::Settling
    }

    /// Target of the settle in progress.
    pub fn settle_target(&self) -> Option<IVec2> {
        self.helper.settle_target()
    }

    pub fn content_position(&self) -> IVec2 {
        self.controller.position()
    }

    pub fn content_rect(&self) -> Rect<i32> {
        self.controller.layout().content
    }

    /// Current rectangle of the panel for `direction`, if it exists.
    pub fn panel_rect(&self, direction: Direction) -> Option<Rect<i32>> {
        self.controller.layout().panel(direction)
    }

    pub fn origin(&self) -> IVec2 {
        self.controller.geometry().origin()
    }

    pub fn geometry(&self) -> &DrawerGeometry {
        self.controller.geometry()
    }

    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// Snap content to where it rests for the current lock and go idle.
    pub(crate) fn cancel_gesture(&mut self) {
        self.helper.cancel();
        self.resolver.clear();
        let rest = self.controller.rest_position();
        self.helper.abort_to(rest, &mut self.controller);
        self.controller.state_mut().current_direction = Direction::NONE;
    }
}
