//! Petal Animation System
//!
//! Timed tweens, easing functions, and the scheduler that drives them.
//!
//! # Features
//!
//! - **Timed Tweens**: duration-based animations with easing profiles
//! - **Mid-flight Redirection**: retargeting supersedes an in-flight
//!   animation from its current value, never queueing behind it
//! - **One-shot Timers**: auto-dismiss and delayed-reveal timers, cancelable
//!   up to the moment they fire
//! - **Breakpoint Interpolation**: piecewise-linear mapping used to derive
//!   many per-item curves from a single driver value
//! - **Explicit Clock**: the host loop (or a test) advances time; nothing
//!   here touches the wall clock unless asked to via `tick()`
//!
//! # Example
//!
//! ```ignore
//! use petal_animation::{AnimatedValue, AnimationScheduler, Easing};
//!
//! let scheduler = AnimationScheduler::new();
//! let mut opacity = AnimatedValue::new(scheduler.handle(), 0.0);
//!
//! opacity.animate_to(1.0, 250.0, Easing::SineOut);
//!
//! // Each frame:
//! scheduler.tick();
//! let current = opacity.get();
//! ```

pub mod easing;
pub mod scheduler;
pub mod tween;
pub mod values;

pub use easing::Easing;
pub use scheduler::{
    AnimatedValue, AnimationScheduler, DoneCallback, SchedulerHandle, TimerId, TweenId,
};
pub use tween::{Tween, MIN_DURATION_MS};
pub use values::{interpolate, Interpolate, Vec2};
