//! Duration-based tween animation
//!
//! A tween moves a scalar from its start value to a target over a fixed
//! duration, shaped by an [`Easing`]. Retargeting an in-flight tween
//! supersedes it: the new animation starts from the current interpolated
//! value, and the old completion edge never fires.

use crate::easing::Easing;
use crate::values::Interpolate;

/// Minimum tween duration in milliseconds
///
/// Non-positive durations are clamped here rather than rejected.
pub const MIN_DURATION_MS: f32 = 1.0;

/// A timed scalar animation
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    start: f32,
    target: f32,
    elapsed_ms: f32,
    duration_ms: f32,
    easing: Easing,
    done: bool,
}

impl Tween {
    /// Create a tween from `from` to `to` over `duration_ms`
    pub fn new(from: f32, to: f32, duration_ms: f32, easing: Easing) -> Self {
        Self {
            start: from,
            target: to,
            elapsed_ms: 0.0,
            duration_ms: duration_ms.max(MIN_DURATION_MS),
            easing,
            done: false,
        }
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let progress = (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0);
        self.start.lerp(&self.target, self.easing.apply(progress))
    }

    /// The value this tween is animating towards
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Normalized progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    /// Whether the tween has reached its target
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Redirect towards a new target from the current interpolated value
    ///
    /// The elapsed time resets; the superseded animation's completion edge
    /// never fires.
    pub fn retarget(&mut self, to: f32, duration_ms: f32, easing: Easing) {
        self.start = self.value();
        self.target = to;
        self.elapsed_ms = 0.0;
        self.duration_ms = duration_ms.max(MIN_DURATION_MS);
        self.easing = easing;
        self.done = false;
    }

    /// Advance by delta time, returning `true` exactly once on completion
    ///
    /// The scheduler uses the `true` edge to fire the tween's completion
    /// callback; subsequent steps on a finished tween return `false`.
    pub fn step(&mut self, dt_ms: f32) -> bool {
        if self.done {
            return false;
        }

        self.elapsed_ms += dt_ms;

        if self.elapsed_ms >= self.duration_ms {
            self.elapsed_ms = self.duration_ms;
            self.done = true;
            return true;
        }

        false
    }
}
