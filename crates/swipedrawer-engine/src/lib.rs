//! Swipedrawer Engine - drag-to-reveal drawer gestures
//!
//! A content surface that can be dragged toward up to four cardinal
//! directions, revealing the panel on that side:
//! - Direction resolution from the first pointer motion
//! - Damped, clamped motion in whole pixels
//! - Lock/settle state machine driven by `tick(dt)`
//! - Panel rectangles that follow the content surface
//!
//! ## Quick Start
//!
//! ```rust
//! use swipedrawer_engine::{Direction, PointerEvent, SurfaceSpec, SwipeDrawer};
//!
//! let mut drawer = SwipeDrawer::builder()
//!     .container(300, 600)
//!     .content(SurfaceSpec::new(300, 600))
//!     .top_panel(SurfaceSpec::new(300, 120))
//!     .factor(0.3)
//!     .build()
//!     .unwrap();
//!
//! // Pull down: reveals the top panel, damped to 30% of the height.
//! drawer.handle_pointer(&PointerEvent::down(150.0, 10.0));
//! drawer.handle_pointer(&PointerEvent::moved(150.0, 160.0));
//! drawer.handle_pointer(&PointerEvent::up(150.0, 160.0));
//!
//! // In the frame loop:
//! while drawer.tick(1.0 / 60.0) {}
//! assert_eq!(drawer.content_position().y, 120);
//! assert_eq!(drawer.state().lock_direction, Direction::TOP);
//! ```

pub mod animation;
pub mod clamp;
pub mod config;
pub mod direction;
pub mod dispatch;
pub mod drag_helper;
pub mod drawer;
pub mod error;
pub mod event;
pub mod geometry;
pub mod layout;
pub mod resolver;
pub mod settle;
pub mod state;

pub use animation::{EasingFunction, SettleAnimation};
pub use clamp::{DragClamp, NestedScroll, NoNestedScroll};
pub use config::DrawerConfig;
pub use direction::{Axis, Direction};
pub use drag_helper::{DragCallback, DragHelper};
pub use drawer::{SwipeDrawer, SwipeDrawerBuilder};
pub use error::{DrawerError, DrawerResult};
pub use event::{PointerAction, PointerEvent, PointerId, SwipeEvent, SwipeListener};
pub use geometry::{DrawerGeometry, Measurements, PanelSet, SurfaceSpec};
pub use layout::PanelLayout;
pub use resolver::{DirectionResolver, resolve_direction};
pub use settle::SettleController;
pub use state::{DragPhase, GestureState};
