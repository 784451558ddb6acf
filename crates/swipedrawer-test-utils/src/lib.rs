//! Test utilities for swipedrawer.
//!
//! Shared helpers for engine tests and benchmarks:
//!
//! - [`RecordingListener`] - records every [`SwipeEvent`](swipedrawer_engine::SwipeEvent)
//! - [`MockNestedScroll`] - nested scroll state that tests can flip mid-gesture
//! - [`TouchScript`] - scripted pointer traces replayed against a drawer
//! - [`settle`] - tick a drawer until its settle finishes
//!
//! # Example
//!
//! ```rust
//! use swipedrawer_engine::{SurfaceSpec, SwipeDrawer};
//! use swipedrawer_test_utils::{RecordingListener, TouchScript, settle};
//!
//! let recorder = RecordingListener::new();
//! let mut drawer = SwipeDrawer::builder()
//!     .container(300, 600)
//!     .content(SurfaceSpec::new(300, 600))
//!     .listener(recorder.clone())
//!     .build()
//!     .unwrap();
//!
//! TouchScript::drag((150.0, 10.0), (150.0, 100.0), 9).run(&mut drawer);
//! settle(&mut drawer);
//!
//! assert!(recorder.len() > 0);
//! assert_eq!(drawer.content_position(), drawer.origin());
//! ```

pub mod nested;
pub mod recording;
pub mod script;

pub use nested::MockNestedScroll;
pub use recording::RecordingListener;
pub use script::{FRAME, TouchScript, settle, settle_frames};
