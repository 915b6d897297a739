//! Disclosure controller for FAB-group action reveals
//!
//! Pressing the trigger button of a FAB group reveals a stack of secondary
//! actions. A single animated driver value in [0, 1] fans out to per-item
//! opacity/scale curves, the backdrop opacity, and the trigger icon's
//! rotation, so the whole reveal stays in lockstep and can be redirected
//! mid-flight by another press.
//!
//! # Example
//!
//! ```ignore
//! use petal_material::disclosure::DisclosureController;
//!
//! let mut fab_group = DisclosureController::new(scheduler.handle(), actions.len())
//!     .on_visual_mode_change(|open| set_status_bar_dark(open));
//!
//! // Trigger press:
//! fab_group.toggle();
//!
//! // Each frame:
//! scheduler.tick();
//! for (action, anim) in actions.iter().zip(fab_group.item_animations()) {
//!     draw_action(action, anim.opacity, anim.scale);
//! }
//! ```

use petal_animation::{interpolate, AnimatedValue, Easing, SchedulerHandle};
use smallvec::SmallVec;
use std::sync::Arc;

/// Opening animates the driver over this much time per revealed item
pub const OPEN_DURATION_PER_ITEM_MS: f32 = 100.0;

/// Closing always takes this long regardless of item count
pub const CLOSE_DURATION_MS: f32 = 200.0;

/// Items scale up from this factor while fading in
const ITEM_MIN_SCALE: f32 = 0.8;

/// The trigger icon rotates to this angle when fully open
const TRIGGER_OPEN_ROTATION_DEG: f32 = 135.0;

/// Fire-and-forget notification carrying the open state
pub type StateCallback = Arc<dyn Fn(bool) + Send + Sync>;

/// Who owns the open/closed state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureMode {
    /// The controller owns the state; `toggle`/`open`/`close` mutate it
    #[default]
    Internal,
    /// The host owns the state. `toggle` only notifies `on_state_change`;
    /// the host writes the new value back through `sync_external`, which
    /// always wins over anything requested internally.
    Controlled,
}

/// Derived per-item render parameters
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemAnimation {
    /// Item opacity in [0, 1]
    pub opacity: f32,
    /// Item scale in [0.8, 1]
    pub scale: f32,
}

/// Open/close state machine behind a FAB group
///
/// Owns the boolean disclosure state and the animated driver that every
/// derived curve reads from. The item count is fixed for the lifetime of
/// one controller; revealing a different set of actions means constructing
/// a new controller.
pub struct DisclosureController {
    mode: DisclosureMode,
    is_open: bool,
    item_count: usize,
    driver: AnimatedValue,
    on_state_change: Option<StateCallback>,
    on_visual_mode_change: Option<StateCallback>,
}

impl DisclosureController {
    /// Create a closed controller for `item_count` revealable items
    pub fn new(handle: SchedulerHandle, item_count: usize) -> Self {
        Self {
            mode: DisclosureMode::Internal,
            is_open: false,
            item_count,
            driver: AnimatedValue::new(handle, 0.0),
            on_state_change: None,
            on_visual_mode_change: None,
        }
    }

    /// Hand state ownership to the host (see [`DisclosureMode::Controlled`])
    pub fn controlled(mut self) -> Self {
        self.mode = DisclosureMode::Controlled;
        self
    }

    /// Start in the given state without animating
    pub fn with_open(mut self, open: bool) -> Self {
        self.is_open = open;
        self.driver.set_immediate(if open { 1.0 } else { 0.0 });
        self
    }

    /// Notify whenever a state change is requested or applied
    pub fn on_state_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_state_change = Some(Arc::new(callback));
        self
    }

    /// Side channel for host chrome that tracks the open state
    ///
    /// The original use case is flipping the status-bar style while the
    /// backdrop covers the screen; the controller itself only reports.
    pub fn on_visual_mode_change<F>(mut self, callback: F) -> Self
    where
        F: Fn(bool) + Send + Sync + 'static,
    {
        self.on_visual_mode_change = Some(Arc::new(callback));
        self
    }

    /// Flip the disclosure state
    ///
    /// Toggling again before the animation settles redirects the driver
    /// towards the new target from wherever it currently is.
    pub fn toggle(&mut self) {
        self.request(!self.is_open);
    }

    /// Open if closed; no-op if already open
    pub fn open(&mut self) {
        self.request(true);
    }

    /// Close if open; no-op if already closed
    pub fn close(&mut self) {
        self.request(false);
    }

    /// Resynchronize to an externally-owned open state
    ///
    /// The external signal always wins; call this on every host update in
    /// controlled mode. Applies in internal mode too, for hosts that force
    /// a state.
    pub fn sync_external(&mut self, open: bool) {
        if open != self.is_open {
            self.apply(open);
        }
    }

    fn request(&mut self, open: bool) {
        if open == self.is_open {
            return;
        }

        match self.mode {
            DisclosureMode::Controlled => {
                // External state wins: report the request and wait for the
                // host to write back via sync_external.
                if let Some(cb) = &self.on_state_change {
                    cb(open);
                }
            }
            DisclosureMode::Internal => {
                self.apply(open);
                if let Some(cb) = &self.on_state_change {
                    cb(open);
                }
            }
        }
    }

    fn apply(&mut self, open: bool) {
        tracing::debug!(open, items = self.item_count, "disclosure transition");
        self.is_open = open;

        if open {
            let duration = self.item_count as f32 * OPEN_DURATION_PER_ITEM_MS;
            self.driver.animate_to(1.0, duration, Easing::Linear);
        } else {
            self.driver.animate_to(0.0, CLOSE_DURATION_MS, Easing::SineOut);
        }

        if let Some(cb) = &self.on_visual_mode_change {
            cb(open);
        }
    }

    /// Current disclosure state
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Number of revealable items
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Raw driver value in [0, 1]
    pub fn driver_value(&self) -> f32 {
        self.driver.get()
    }

    /// Whether the driver is still moving
    pub fn is_animating(&self) -> bool {
        self.driver.is_animating()
    }

    /// Derived opacity/scale for every item, nearest-the-trigger last
    pub fn item_animations(&self) -> SmallVec<[ItemAnimation; 8]> {
        let driver = self.driver.get();
        (0..self.item_count)
            .map(|i| derive_item_animation(driver, i, self.item_count, self.is_open))
            .collect()
    }

    /// Derived backdrop opacity
    pub fn backdrop_opacity(&self) -> f32 {
        backdrop_opacity(self.driver.get(), self.is_open)
    }

    /// Derived trigger icon rotation in degrees
    pub fn trigger_rotation(&self) -> f32 {
        trigger_rotation(self.driver.get(), self.is_open)
    }
}

// ============================================================================
// Derived Curves
// ============================================================================

/// Per-item opacity/scale as a pure function of the driver
///
/// While opening, the [0, 1] driver range is split into `total` segments by
/// `total + 1` evenly spaced breakpoints; item `index` ramps 0 to 1 inside
/// its own segment, with items nearer the trigger (higher index) ramping
/// earlier. Scale tracks the item's opacity over [0.8, 1].
///
/// While closing, every item's opacity is the raw driver (they fade out
/// together) and scale holds at 1.
pub fn derive_item_animation(driver: f32, index: usize, total: usize, is_open: bool) -> ItemAnimation {
    if total == 0 || index >= total {
        return ItemAnimation {
            opacity: driver.clamp(0.0, 1.0),
            scale: 1.0,
        };
    }

    if !is_open {
        return ItemAnimation {
            opacity: driver.clamp(0.0, 1.0),
            scale: 1.0,
        };
    }

    let total_f = total as f32;
    let segment_lo = (total - index - 1) as f32 / total_f;
    let segment_hi = (total - index) as f32 / total_f;

    let opacity = interpolate(driver, &[segment_lo, segment_hi], &[0.0, 1.0]);
    let scale = ITEM_MIN_SCALE + (1.0 - ITEM_MIN_SCALE) * opacity;

    ItemAnimation { opacity, scale }
}

/// Backdrop opacity: reaches full strength halfway through the reveal,
/// tracks the driver directly on the way out
pub fn backdrop_opacity(driver: f32, is_open: bool) -> f32 {
    if is_open {
        interpolate(driver, &[0.0, 0.5, 1.0], &[0.0, 1.0, 1.0])
    } else {
        driver.clamp(0.0, 1.0)
    }
}

/// Trigger icon rotation in degrees ("+" turns into "×")
///
/// Finishes rotating halfway through the reveal; unwinds across the full
/// close animation.
pub fn trigger_rotation(driver: f32, is_open: bool) -> f32 {
    if is_open {
        interpolate(
            driver,
            &[0.0, 0.5, 1.0],
            &[0.0, TRIGGER_OPEN_ROTATION_DEG, TRIGGER_OPEN_ROTATION_DEG],
        )
    } else {
        interpolate(driver, &[0.0, 1.0], &[0.0, TRIGGER_OPEN_ROTATION_DEG])
    }
}
