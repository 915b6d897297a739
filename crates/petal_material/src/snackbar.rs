//! Snackbar show / auto-dismiss / swipe-dismiss state machine
//!
//! A snackbar slides in from its resting offset, stays up for a configured
//! duration, then slides back out and reports completion exactly once. The
//! auto-dismiss timer arms when the entrance finishes, so the duration
//! means "time fully shown". Any of the three dismissal paths (timer,
//! action press, swipe) pre-empts the others; whichever runs first wins
//! and the rest become no-ops.
//!
//! # Example
//!
//! ```ignore
//! use petal_material::snackbar::SnackbarController;
//!
//! let snackbar = SnackbarController::new(scheduler.handle(), viewport_width)
//!     .on_finished(|| remove_snackbar_from_tree());
//!
//! snackbar.start(3000.0);
//!
//! // Each frame:
//! scheduler.tick();
//! draw_snackbar(snackbar.shown_opacity(), snackbar.offset());
//!
//! // Action button pressed:
//! snackbar.cancel_pending_timer();
//! ```

use petal_animation::{AnimatedValue, Easing, SchedulerHandle, TimerId, Vec2};
use std::sync::{Arc, Mutex, Weak};

/// Entrance slide/fade duration
pub const ENTRANCE_DURATION_MS: f32 = 250.0;

/// Exit slide/fade duration
pub const EXIT_DURATION_MS: f32 = 250.0;

/// Vertical offset the snackbar enters from and exits to
pub const REST_OFFSET: f32 = 48.0;

/// Auto-dismiss delay when the caller doesn't supply one
pub const DEFAULT_DURATION_MS: f32 = 3000.0;

/// Fraction of the viewport width a drag must cover to dismiss
pub const GESTURE_DISMISS_FRACTION: f32 = 0.25;

/// Horizontal direction of a swipe dismissal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DismissDirection {
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    Idle,
    Entering,
    Shown,
    Exiting,
    Finished,
}

struct SnackbarInner {
    handle: SchedulerHandle,
    shown: AnimatedValue,
    offset_x: AnimatedValue,
    offset_y: AnimatedValue,
    timer: Option<TimerId>,
    phase: Phase,
    viewport_width: f32,
    on_finished: Option<Box<dyn FnOnce() + Send>>,
}

/// Timed-dismiss controller behind a snackbar
///
/// Owns the shown/offset animation values, the single pending auto-dismiss
/// timer, and the completion callback. Dropping the controller cancels the
/// timer and all animations, so no callback can fire against a disposed
/// instance.
pub struct SnackbarController {
    inner: Arc<Mutex<SnackbarInner>>,
}

impl SnackbarController {
    /// Create a hidden snackbar resting below its slot
    ///
    /// `viewport_width` sizes the swipe-dismiss exit translation.
    pub fn new(handle: SchedulerHandle, viewport_width: f32) -> Self {
        let shown = AnimatedValue::new(handle.clone(), 0.0);
        let offset_x = AnimatedValue::new(handle.clone(), 0.0);
        let offset_y = AnimatedValue::new(handle.clone(), REST_OFFSET);

        Self {
            inner: Arc::new(Mutex::new(SnackbarInner {
                handle,
                shown,
                offset_x,
                offset_y,
                timer: None,
                phase: Phase::Idle,
                viewport_width,
                on_finished: None,
            })),
        }
    }

    /// Set the completion callback
    ///
    /// Invoked exactly once, after the exit animation settles. Never
    /// invoked synchronously from a dismiss call, and never at all if the
    /// controller is disposed first.
    pub fn on_finished<F>(self, callback: F) -> Self
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.lock().unwrap().on_finished = Some(Box::new(callback));
        self
    }

    /// Begin the entrance animation and schedule auto-dismissal
    ///
    /// The snackbar fades in and slides to its resting position; once the
    /// entrance settles, a one-shot timer for `duration_ms` arms and calls
    /// [`dismiss`](Self::dismiss) on expiry. Starting an already-started
    /// snackbar is a no-op.
    pub fn start(&self, duration_ms: f32) {
        let mut inner = self.inner.lock().unwrap();
        if inner.phase != Phase::Idle {
            tracing::warn!(phase = ?inner.phase, "snackbar start ignored");
            return;
        }
        inner.phase = Phase::Entering;
        tracing::debug!(duration_ms, "snackbar entering");

        inner
            .offset_y
            .animate_to(0.0, ENTRANCE_DURATION_MS, Easing::SineOut);

        let weak = Arc::downgrade(&self.inner);
        inner.shown.animate_to_with(
            1.0,
            ENTRANCE_DURATION_MS,
            Easing::SineOut,
            move || Self::entrance_complete(&weak, duration_ms),
        );
    }

    /// [`start`](Self::start) with the default 3000 ms duration
    pub fn start_default(&self) {
        self.start(DEFAULT_DURATION_MS);
    }

    fn entrance_complete(weak: &Weak<Mutex<SnackbarInner>>, duration_ms: f32) {
        let Some(inner_arc) = weak.upgrade() else {
            return;
        };
        let mut inner = inner_arc.lock().unwrap();
        if inner.phase != Phase::Entering {
            return;
        }
        inner.phase = Phase::Shown;

        let timer_weak = Weak::clone(weak);
        let timer = inner.handle.set_timeout(duration_ms, move || {
            if let Some(arc) = timer_weak.upgrade() {
                Self::begin_exit(&arc, None);
            }
        });
        inner.timer = timer;
    }

    /// Dismiss along the default (vertical) exit path
    ///
    /// Cancels any pending auto-dismiss timer first. Calls made while an
    /// exit is already in flight, or after completion, are no-ops.
    pub fn dismiss(&self) {
        Self::begin_exit(&self.inner, None);
    }

    /// Dismiss by flinging off-screen in the swipe direction
    ///
    /// Same completion contract as [`dismiss`](Self::dismiss); safe to call
    /// mid-entrance.
    pub fn dismiss_by_gesture(&self, direction: DismissDirection) {
        Self::begin_exit(&self.inner, Some(direction));
    }

    /// Cancel the auto-dismiss timer and exit immediately
    ///
    /// The action-button path: the user already responded, so the wait is
    /// pointless. Equivalent to [`dismiss`](Self::dismiss) but named for
    /// the short-circuit it performs.
    pub fn cancel_pending_timer(&self) {
        {
            let mut inner = self.inner.lock().unwrap();
            if let Some(id) = inner.timer.take() {
                inner.handle.clear_timeout(id);
            }
        }
        Self::begin_exit(&self.inner, None);
    }

    fn begin_exit(inner_arc: &Arc<Mutex<SnackbarInner>>, gesture: Option<DismissDirection>) {
        let mut inner = inner_arc.lock().unwrap();
        if matches!(inner.phase, Phase::Exiting | Phase::Finished) {
            tracing::debug!(phase = ?inner.phase, "snackbar dismiss ignored");
            return;
        }

        // At most one dismissal path in flight: kill the timer before
        // starting the exit animation.
        if let Some(id) = inner.timer.take() {
            inner.handle.clear_timeout(id);
        }
        inner.phase = Phase::Exiting;
        tracing::debug!(gesture = ?gesture, "snackbar exiting");

        match gesture {
            Some(DismissDirection::Left) => {
                let target = -inner.viewport_width;
                inner.offset_x.animate_to(target, EXIT_DURATION_MS, Easing::SineOut);
            }
            Some(DismissDirection::Right) => {
                let target = inner.viewport_width;
                inner.offset_x.animate_to(target, EXIT_DURATION_MS, Easing::SineOut);
            }
            None => {
                inner
                    .offset_y
                    .animate_to(REST_OFFSET, EXIT_DURATION_MS, Easing::SineOut);
            }
        }

        // Redirecting `shown` also supersedes a still-pending entrance
        // completion, so a mid-entrance dismiss can't arm the timer late.
        let weak = Arc::downgrade(inner_arc);
        inner
            .shown
            .animate_to_with(0.0, EXIT_DURATION_MS, Easing::SineOut, move || {
                Self::exit_complete(&weak)
            });
    }

    fn exit_complete(weak: &Weak<Mutex<SnackbarInner>>) {
        let Some(inner_arc) = weak.upgrade() else {
            return;
        };
        let callback = {
            let mut inner = inner_arc.lock().unwrap();
            if inner.phase == Phase::Finished {
                return;
            }
            inner.phase = Phase::Finished;
            inner.on_finished.take()
        };
        // Invoke outside the lock: the callback may tear the snackbar down.
        if let Some(callback) = callback {
            callback();
        }
    }

    /// Current opacity driver in [0, 1]
    pub fn shown_opacity(&self) -> f32 {
        self.inner.lock().unwrap().shown.get()
    }

    /// Current translation from the resting position
    pub fn offset(&self) -> Vec2 {
        let inner = self.inner.lock().unwrap();
        Vec2::new(inner.offset_x.get(), inner.offset_y.get())
    }

    /// Whether the exit has completed
    pub fn is_finished(&self) -> bool {
        self.inner.lock().unwrap().phase == Phase::Finished
    }

    /// Tear down without reporting completion
    ///
    /// Clears the pending timer and drops the completion callback so
    /// nothing fires against a disposed instance. Safe to call twice.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(id) = inner.timer.take() {
            inner.handle.clear_timeout(id);
        }
        inner.phase = Phase::Finished;
        inner.on_finished = None;
    }
}

impl Drop for SnackbarController {
    fn drop(&mut self) {
        self.dispose();
    }
}

/// Whether a drag displacement is far enough to dismiss
///
/// A horizontal drag past a quarter of the viewport width counts as a
/// swipe-dismiss; the host then calls
/// [`dismiss_by_gesture`](SnackbarController::dismiss_by_gesture).
pub fn gesture_exceeds_threshold(displacement: f32, viewport_width: f32) -> bool {
    displacement.abs() >= viewport_width * GESTURE_DISMISS_FRACTION
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_animation::AnimationScheduler;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn finished_counter(
        controller: SnackbarController,
    ) -> (SnackbarController, Arc<AtomicUsize>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let controller = controller.on_finished(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (controller, fired)
    }

    #[test]
    fn test_entrance_then_auto_dismiss() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(3000.0);
        scheduler.advance(ENTRANCE_DURATION_MS);

        assert!((snackbar.shown_opacity() - 1.0).abs() < 1e-4);
        assert!(snackbar.offset().y.abs() < 1e-4);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        // Timer armed after the entrance; expires and triggers the exit
        scheduler.advance(3000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        scheduler.advance(EXIT_DURATION_MS);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(snackbar.is_finished());
        assert!(snackbar.shown_opacity().abs() < 1e-4);
        assert!((snackbar.offset().y - REST_OFFSET).abs() < 1e-3);
    }

    #[test]
    fn test_cancel_pending_timer_short_circuits() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(3000.0);
        scheduler.advance(ENTRANCE_DURATION_MS);

        snackbar.cancel_pending_timer();
        scheduler.advance(EXIT_DURATION_MS);
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        // The original 3000ms never produces a second callback
        scheduler.advance(3000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gesture_dismiss_mid_entrance() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(3000.0);
        scheduler.advance(100.0);

        snackbar.dismiss_by_gesture(DismissDirection::Right);
        scheduler.advance(EXIT_DURATION_MS);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!((snackbar.offset().x - 320.0).abs() < 1e-2);

        // The superseded entrance completion never arms the timer
        scheduler.advance(5000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_double_dismiss_reports_once() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(1000.0);
        scheduler.advance(ENTRANCE_DURATION_MS);

        snackbar.dismiss();
        snackbar.dismiss();
        snackbar.dismiss_by_gesture(DismissDirection::Left);

        scheduler.advance(EXIT_DURATION_MS);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        // The ignored gesture dismiss didn't move the snackbar sideways
        assert!(snackbar.offset().x.abs() < 1e-4);
    }

    #[test]
    fn test_dispose_prevents_callbacks() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(3000.0);
        scheduler.advance(ENTRANCE_DURATION_MS);

        snackbar.dispose();
        snackbar.dispose(); // double-teardown is a no-op

        scheduler.advance(10_000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_dismiss_after_dispose_is_noop() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(1000.0);
        snackbar.dispose();
        snackbar.dismiss();
        snackbar.cancel_pending_timer();

        scheduler.advance(10_000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_non_positive_duration_clamps() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(0.0);
        scheduler.advance(ENTRANCE_DURATION_MS);
        scheduler.advance(1.0);
        scheduler.advance(EXIT_DURATION_MS);

        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_start_twice_is_noop() {
        let scheduler = AnimationScheduler::new();
        let (snackbar, fired) =
            finished_counter(SnackbarController::new(scheduler.handle(), 320.0));

        snackbar.start(1000.0);
        snackbar.start(1000.0);

        scheduler.advance(ENTRANCE_DURATION_MS);
        scheduler.advance(1000.0);
        scheduler.advance(EXIT_DURATION_MS);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_gesture_threshold() {
        assert!(gesture_exceeds_threshold(80.0, 320.0));
        assert!(gesture_exceeds_threshold(-80.0, 320.0));
        assert!(!gesture_exceeds_threshold(79.9, 320.0));
        assert!(!gesture_exceeds_threshold(0.0, 320.0));
    }
}
