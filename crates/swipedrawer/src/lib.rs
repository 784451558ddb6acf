//! Swipedrawer - drag-to-reveal drawer containers
//!
//! A content surface that the user drags toward one of four directions to
//! reveal the panel on that side. Typical uses are side drawers and
//! pull-to-refresh headers.
//!
//! - **Gesture engine**: direction resolution, damped clamping, lock/settle
//! - **Panel layout**: panel rectangles that follow the content surface
//! - **Headless**: the host feeds pointer events and frame ticks, and reads
//!   back integer rectangles
//!
//! # Quick Start
//!
//! ```rust
//! use swipedrawer::prelude::*;
//!
//! let mut drawer = SwipeDrawer::builder()
//!     .container(300, 600)
//!     .content(SurfaceSpec::new(300, 600))
//!     .left_panel(SurfaceSpec::new(100, 600))
//!     .direction_mask(Direction::LEFT | Direction::TOP)
//!     .listener(|event: SwipeEvent| println!("{:?}", event))
//!     .build()
//!     .unwrap();
//!
//! drawer.expand_left();
//! while drawer.tick(1.0 / 60.0) {}
//!
//! let panel = drawer.panel_rect(Direction::LEFT).unwrap();
//! assert_eq!(panel.x, 0);
//! ```
//!
//! # Features
//!
//! - `profiling` - serve puffin scopes over HTTP via
//!   `swipedrawer::core::profiling::init_profiling`

pub use swipedrawer_core as core;
pub use swipedrawer_core::{geometry, logging, math};
pub use swipedrawer_engine as engine;

pub use swipedrawer_engine::{
    Direction, DragPhase, DrawerConfig, DrawerError, DrawerResult, EasingFunction, GestureState,
    Measurements, NestedScroll, PanelSet, PointerAction, PointerEvent, PointerId, SurfaceSpec,
    SwipeDrawer, SwipeDrawerBuilder, SwipeEvent, SwipeListener,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use swipedrawer_engine::{
        Direction, DragPhase, DrawerConfig, DrawerError, DrawerResult, Measurements,
        NestedScroll, PanelSet, PointerEvent, SurfaceSpec, SwipeDrawer, SwipeEvent, SwipeListener,
    };

    // Core types
    pub use swipedrawer_core::geometry::{Insets, Rect, Size};
    pub use swipedrawer_core::math::{IVec2, Vec2};
}
