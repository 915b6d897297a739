//! FAB Group Disclosure Demo
//!
//! Drives a DisclosureController through an open/close cycle and prints the
//! derived per-item animation parameters each simulated frame:
//! - Staggered item fade-in (items nearest the trigger reveal first)
//! - Scale tracking opacity from 0.8 to 1.0
//! - Backdrop opacity and trigger rotation from the same driver
//!
//! Run with: cargo run -p petal_material --example fab_group_demo

use petal_animation::AnimationScheduler;
use petal_material::disclosure::DisclosureController;

const FRAME_MS: f32 = 50.0;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let scheduler = AnimationScheduler::new();
    let mut fab_group = DisclosureController::new(scheduler.handle(), 3)
        .on_visual_mode_change(|open| println!("  [status bar] dark content: {open}"));

    println!("press: opening");
    fab_group.toggle();
    run_until_settled(&scheduler, &fab_group);

    println!("press: closing");
    fab_group.toggle();
    run_until_settled(&scheduler, &fab_group);
}

fn run_until_settled(scheduler: &AnimationScheduler, fab_group: &DisclosureController) {
    let mut elapsed = 0.0;
    loop {
        scheduler.advance(FRAME_MS);
        elapsed += FRAME_MS;

        let items: Vec<String> = fab_group
            .item_animations()
            .iter()
            .map(|a| format!("op {:.2} sc {:.2}", a.opacity, a.scale))
            .collect();
        println!(
            "  t={:>4.0}ms driver {:.2} backdrop {:.2} rot {:>5.1}° | {}",
            elapsed,
            fab_group.driver_value(),
            fab_group.backdrop_opacity(),
            fab_group.trigger_rotation(),
            items.join(" | "),
        );

        if !fab_group.is_animating() {
            break;
        }
    }
}
