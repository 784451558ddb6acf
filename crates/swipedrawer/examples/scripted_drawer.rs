//! Scripted drawer session.
//!
//! This example shows how to:
//! - Build a drawer with a left and a top panel
//! - Feed it a pointer trace the way a host would
//! - Pump settle frames and read back content and panel rectangles
//! - Open and close panels with commands
//!
//! Run with: cargo run -p swipedrawer --example scripted_drawer
//! Set RUST_LOG=swipedrawer_engine=trace to see every frame.

use swipedrawer::prelude::*;

const FRAME: f32 = 1.0 / 60.0;

fn pump(drawer: &mut SwipeDrawer, label: &str) {
    let mut frames = 0;
    while drawer.tick(FRAME) {
        swipedrawer::core::profiling::new_frame();
        frames += 1;
    }
    println!(
        "{label}: settled after {frames} frames at {:?} (lock {:?})",
        drawer.content_position(),
        drawer.state().lock_direction
    );
}

fn drag(drawer: &mut SwipeDrawer, from: Vec2, to: Vec2, steps: u32) {
    drawer.handle_pointer(&PointerEvent::down(from.x, from.y));
    for i in 1..=steps {
        let p = from.lerp(to, i as f32 / steps as f32);
        drawer.handle_pointer(&PointerEvent::moved(p.x, p.y));
    }
    drawer.handle_pointer(&PointerEvent::up(to.x, to.y));
}

fn main() -> Result<(), DrawerError> {
    swipedrawer::logging::init();

    let mut drawer = SwipeDrawer::builder()
        .container(360, 640)
        .content(SurfaceSpec::new(360, 640))
        .left_panel(SurfaceSpec::new(96, 640))
        .top_panel(SurfaceSpec::new(360, 72).margins(Insets::new(0, 0, 0, 8)))
        .direction_mask(Direction::LEFT | Direction::TOP)
        .listener(|event: SwipeEvent| {
            tracing::info!(
                "swipe {:?}: {} / {}",
                event.direction,
                event.distance,
                event.max
            );
        })
        .build()?;

    // Pull down far enough to pin the refresh header open.
    drag(&mut drawer, Vec2::new(180.0, 40.0), Vec2::new(182.0, 160.0), 12);
    pump(&mut drawer, "pull to refresh");
    println!("top panel at {:?}", drawer.panel_rect(Direction::TOP));

    drawer.reset();
    pump(&mut drawer, "refresh finished");

    // A short sideways swipe snaps back.
    drag(&mut drawer, Vec2::new(20.0, 300.0), Vec2::new(70.0, 305.0), 5);
    pump(&mut drawer, "short swipe");

    // Commands always win over gestures.
    drawer.expand(Direction::LEFT)?;
    pump(&mut drawer, "expand left");
    println!("left panel at {:?}", drawer.panel_rect(Direction::LEFT));

    drawer.set_factor(0.5)?;
    drawer.reset();
    pump(&mut drawer, "reset");

    Ok(())
}
