//! Snackbar Demo
//!
//! Runs two snackbar lifecycles against a manually advanced scheduler:
//! - Entrance, auto-dismiss after the configured duration, completion report
//! - Entrance interrupted by a swipe that flings the snackbar off-screen
//!
//! Run with: cargo run -p petal_material --example snackbar_demo

use petal_animation::AnimationScheduler;
use petal_material::snackbar::{DismissDirection, SnackbarController};

const FRAME_MS: f32 = 50.0;
const VIEWPORT_WIDTH: f32 = 320.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("-- auto-dismiss after 1000ms --");
    let scheduler = AnimationScheduler::new();
    let snackbar = SnackbarController::new(scheduler.handle(), VIEWPORT_WIDTH)
        .on_finished(|| println!("  [host] snackbar finished, removing from tree"));

    snackbar.start(1000.0);
    run_frames(&scheduler, &snackbar, 2000.0);

    println!("-- swipe-dismissed mid-entrance --");
    let snackbar = SnackbarController::new(scheduler.handle(), VIEWPORT_WIDTH)
        .on_finished(|| println!("  [host] snackbar finished, removing from tree"));

    snackbar.start(3000.0);
    scheduler.advance(100.0);
    println!("  [gesture] swipe right past threshold");
    snackbar.dismiss_by_gesture(DismissDirection::Right);
    run_frames(&scheduler, &snackbar, 500.0);
}

fn run_frames(scheduler: &AnimationScheduler, snackbar: &SnackbarController, total_ms: f32) {
    let mut elapsed = 0.0;
    while elapsed < total_ms && !snackbar.is_finished() {
        scheduler.advance(FRAME_MS);
        elapsed += FRAME_MS;

        let offset = snackbar.offset();
        println!(
            "  t={:>4.0}ms shown {:.2} offset ({:>6.1}, {:>5.1})",
            elapsed,
            snackbar.shown_opacity(),
            offset.x,
            offset.y,
        );
    }
    // Flush anything left (exit tail after the completion report)
    scheduler.advance(total_ms);
}
