//! Text field focus, label-float, and error state machine
//!
//! A Material text field floats its label above the input on focus,
//! reveals its placeholder shortly after the label clears out of the way,
//! and wiggles the label horizontally while an error is shown. This module
//! owns those transitions; measuring, drawing, and the input buffer itself
//! belong to the host.

use petal_animation::{interpolate, AnimatedValue, Easing, SchedulerHandle, TimerId};
use std::sync::{Arc, Mutex, Weak};

/// Focus transition duration
pub const FOCUS_DURATION_MS: f32 = 150.0;

/// Blur transition duration
pub const BLUR_DURATION_MS: f32 = 180.0;

/// Delay between the focus transition settling and the placeholder showing
pub const PLACEHOLDER_DELAY_MS: f32 = 50.0;

/// Vertical travel of a fully floated label
pub const MINIMIZED_LABEL_Y_OFFSET: f32 = -22.0;

/// Label font size when resting over the input
pub const MAXIMIZED_LABEL_FONT_SIZE: f32 = 16.0;

/// Label font size when floated
pub const MINIMIZED_LABEL_FONT_SIZE: f32 = 12.0;

/// Peak horizontal displacement of the error wiggle
pub const LABEL_WIGGLE_X_OFFSET: f32 = 4.0;

/// Derived label placement
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelMetrics {
    /// Vertical offset from the resting baseline (negative is up)
    pub y_offset: f32,
    /// Current font size
    pub font_size: f32,
}

struct TextFieldInner {
    handle: SchedulerHandle,
    focused: AnimatedValue,
    error_shown: AnimatedValue,
    has_error: bool,
    placeholder_visible: bool,
    placeholder_timer: Option<TimerId>,
}

/// Focus / error / placeholder state behind a text field
pub struct TextFieldState {
    inner: Arc<Mutex<TextFieldInner>>,
}

impl TextFieldState {
    /// Create an unfocused field
    pub fn new(handle: SchedulerHandle) -> Self {
        Self::with_error(handle, false)
    }

    /// Create with an initial error state (no animation)
    pub fn with_error(handle: SchedulerHandle, has_error: bool) -> Self {
        let focused = AnimatedValue::new(handle.clone(), 0.0);
        let error_shown = AnimatedValue::new(handle.clone(), if has_error { 1.0 } else { 0.0 });

        Self {
            inner: Arc::new(Mutex::new(TextFieldInner {
                handle,
                focused,
                error_shown,
                has_error,
                placeholder_visible: false,
                placeholder_timer: None,
            })),
        }
    }

    /// Focus gained: float the label, then reveal the placeholder
    ///
    /// The placeholder appears a beat after the focus transition settles,
    /// so it never overlaps the label mid-float.
    pub fn focus(&self) {
        let mut inner = self.inner.lock().unwrap();
        Self::clear_placeholder_timer(&mut inner);

        let weak = Arc::downgrade(&self.inner);
        inner
            .focused
            .animate_to_with(1.0, FOCUS_DURATION_MS, Easing::EaseInOut, move || {
                Self::focus_settled(&weak);
            });
    }

    fn focus_settled(weak: &Weak<Mutex<TextFieldInner>>) {
        let Some(inner_arc) = weak.upgrade() else {
            return;
        };
        let mut inner = inner_arc.lock().unwrap();

        let reveal_weak = Weak::clone(weak);
        let timer = inner.handle.set_timeout(PLACEHOLDER_DELAY_MS, move || {
            if let Some(arc) = reveal_weak.upgrade() {
                arc.lock().unwrap().placeholder_visible = true;
            }
        });
        inner.placeholder_timer = timer;
    }

    /// Focus lost: hide the placeholder immediately and drop the label
    pub fn blur(&self) {
        let mut inner = self.inner.lock().unwrap();
        Self::clear_placeholder_timer(&mut inner);
        inner.placeholder_visible = false;
        inner.focused.animate_to(0.0, BLUR_DURATION_MS, Easing::EaseInOut);
    }

    /// Animate the error underline/text in or out
    ///
    /// Setting the same error state again is a no-op (the transition is
    /// edge-triggered, not level-triggered).
    pub fn set_error(&self, has_error: bool) {
        let mut inner = self.inner.lock().unwrap();
        if has_error == inner.has_error {
            return;
        }
        inner.has_error = has_error;

        if has_error {
            inner
                .error_shown
                .animate_to(1.0, FOCUS_DURATION_MS, Easing::EaseInOut);
        } else {
            inner
                .error_shown
                .animate_to(0.0, BLUR_DURATION_MS, Easing::EaseInOut);
        }
    }

    /// Focus driver in [0, 1]
    pub fn focus_value(&self) -> f32 {
        self.inner.lock().unwrap().focused.get()
    }

    /// Error driver in [0, 1]
    pub fn error_value(&self) -> f32 {
        self.inner.lock().unwrap().error_shown.get()
    }

    /// Whether the placeholder should currently render
    pub fn placeholder_visible(&self) -> bool {
        self.inner.lock().unwrap().placeholder_visible
    }

    /// Whether the field is currently in the error state
    pub fn has_error(&self) -> bool {
        self.inner.lock().unwrap().has_error
    }

    /// Derived label placement for the current frame
    pub fn label_metrics(&self, has_value: bool) -> LabelMetrics {
        label_metrics(self.focus_value(), has_value)
    }

    /// Tear down, clearing the pending placeholder timer
    ///
    /// Safe to call twice; later focus/blur calls still work but the host
    /// normally drops the state right after.
    pub fn dispose(&self) {
        let mut inner = self.inner.lock().unwrap();
        Self::clear_placeholder_timer(&mut inner);
        inner.placeholder_visible = false;
    }

    fn clear_placeholder_timer(inner: &mut TextFieldInner) {
        if let Some(id) = inner.placeholder_timer.take() {
            inner.handle.clear_timeout(id);
        }
    }
}

impl Drop for TextFieldState {
    fn drop(&mut self) {
        self.dispose();
    }
}

// ============================================================================
// Derived Curves
// ============================================================================

/// Label offset and font size as a pure function of the focus driver
///
/// A field holding text keeps its label floated regardless of focus.
pub fn label_metrics(focus: f32, has_value: bool) -> LabelMetrics {
    let t = if has_value { 1.0 } else { focus.clamp(0.0, 1.0) };

    LabelMetrics {
        y_offset: MINIMIZED_LABEL_Y_OFFSET * t,
        font_size: MAXIMIZED_LABEL_FONT_SIZE
            + (MINIMIZED_LABEL_FONT_SIZE - MAXIMIZED_LABEL_FONT_SIZE) * t,
    }
}

/// Horizontal label wiggle as a pure function of the error driver
///
/// Peaks mid-transition and settles back to zero, so the label shakes once
/// as the error appears.
pub fn error_wiggle(error: f32) -> f32 {
    interpolate(error, &[0.0, 0.5, 1.0], &[0.0, LABEL_WIGGLE_X_OFFSET, 0.0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use petal_animation::AnimationScheduler;

    #[test]
    fn test_focus_reveals_placeholder_after_delay() {
        let scheduler = AnimationScheduler::new();
        let field = TextFieldState::new(scheduler.handle());

        field.focus();
        scheduler.advance(FOCUS_DURATION_MS);
        assert!((field.focus_value() - 1.0).abs() < 1e-4);
        assert!(!field.placeholder_visible());

        scheduler.advance(PLACEHOLDER_DELAY_MS);
        assert!(field.placeholder_visible());
    }

    #[test]
    fn test_blur_before_reveal_cancels_timer() {
        let scheduler = AnimationScheduler::new();
        let field = TextFieldState::new(scheduler.handle());

        field.focus();
        scheduler.advance(FOCUS_DURATION_MS);

        field.blur();
        scheduler.advance(1000.0);

        assert!(!field.placeholder_visible());
        assert!(field.focus_value().abs() < 1e-4);
        assert_eq!(scheduler.timer_count(), 0);
    }

    #[test]
    fn test_refocus_mid_blur_redirects() {
        let scheduler = AnimationScheduler::new();
        let field = TextFieldState::new(scheduler.handle());

        field.focus();
        scheduler.advance(FOCUS_DURATION_MS + PLACEHOLDER_DELAY_MS);

        field.blur();
        scheduler.advance(90.0);
        let mid = field.focus_value();
        assert!(mid > 0.0 && mid < 1.0);

        field.focus();
        scheduler.advance(FOCUS_DURATION_MS);
        assert!((field.focus_value() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_set_error_is_edge_triggered() {
        let scheduler = AnimationScheduler::new();
        let field = TextFieldState::new(scheduler.handle());

        field.set_error(true);
        scheduler.advance(FOCUS_DURATION_MS / 2.0);
        let mid = field.error_value();
        assert!(mid > 0.0 && mid < 1.0);

        // Re-asserting the same state doesn't restart the transition
        field.set_error(true);
        scheduler.advance(FOCUS_DURATION_MS / 2.0);
        assert!((field.error_value() - 1.0).abs() < 1e-4);

        field.set_error(false);
        scheduler.advance(BLUR_DURATION_MS);
        assert!(field.error_value().abs() < 1e-4);
    }

    #[test]
    fn test_label_metrics_float() {
        let resting = label_metrics(0.0, false);
        assert!(resting.y_offset.abs() < 1e-6);
        assert!((resting.font_size - MAXIMIZED_LABEL_FONT_SIZE).abs() < 1e-6);

        let floated = label_metrics(1.0, false);
        assert!((floated.y_offset - MINIMIZED_LABEL_Y_OFFSET).abs() < 1e-6);
        assert!((floated.font_size - MINIMIZED_LABEL_FONT_SIZE).abs() < 1e-6);

        // A field with content keeps the label floated while unfocused
        let held = label_metrics(0.0, true);
        assert_eq!(held, floated);
    }

    #[test]
    fn test_error_wiggle_peaks_mid_transition() {
        assert!(error_wiggle(0.0).abs() < 1e-6);
        assert!((error_wiggle(0.5) - LABEL_WIGGLE_X_OFFSET).abs() < 1e-6);
        assert!(error_wiggle(1.0).abs() < 1e-6);
        assert!((error_wiggle(0.25) - LABEL_WIGGLE_X_OFFSET / 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_dispose_clears_pending_timer() {
        let scheduler = AnimationScheduler::new();
        let field = TextFieldState::new(scheduler.handle());

        field.focus();
        scheduler.advance(FOCUS_DURATION_MS);

        field.dispose();
        field.dispose(); // double-teardown is a no-op

        scheduler.advance(1000.0);
        assert!(!field.placeholder_visible());
        assert_eq!(scheduler.timer_count(), 0);
    }
}
