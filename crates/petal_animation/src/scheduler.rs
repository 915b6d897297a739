//! Animation scheduler
//!
//! Manages all active tweens and timers and advances them by explicit time
//! deltas. Animations are implicitly registered when created through the
//! [`AnimatedValue`] wrapper; one-shot timers are registered through
//! [`SchedulerHandle::set_timeout`].
//!
//! The host event loop drives the scheduler once per frame via [`tick`]
//! (wall-clock) or [`advance`] (explicit delta, used by tests to mock the
//! clock). Completion callbacks are collected while the registry lock is
//! held and invoked after it is released, so a callback may freely re-enter
//! the scheduler to start follow-up animations or arm timers.
//!
//! [`tick`]: AnimationScheduler::tick
//! [`advance`]: AnimationScheduler::advance

use crate::easing::Easing;
use crate::tween::{Tween, MIN_DURATION_MS};
use slotmap::{new_key_type, SlotMap};
use std::sync::{Arc, Mutex, Weak};
use std::time::Instant;

new_key_type! {
    /// Handle to a registered tween
    pub struct TweenId;
    /// Handle to a pending one-shot timer
    pub struct TimerId;
}

/// Callback invoked when a tween completes or a timer expires
pub type DoneCallback = Box<dyn FnOnce() + Send>;

struct TweenSlot {
    tween: Tween,
    on_complete: Option<DoneCallback>,
}

struct TimerSlot {
    remaining_ms: f32,
    callback: Option<DoneCallback>,
}

/// Internal state of the animation scheduler
struct SchedulerInner {
    tweens: SlotMap<TweenId, TweenSlot>,
    timers: SlotMap<TimerId, TimerSlot>,
    last_frame: Instant,
}

/// The animation scheduler that advances all active tweens and timers
///
/// Typically one scheduler is created per window/surface and shared with
/// components via [`SchedulerHandle`]. Registrations are removed when their
/// wrapper ([`AnimatedValue`]) is dropped or, for timers, when they fire or
/// are cleared.
pub struct AnimationScheduler {
    inner: Arc<Mutex<SchedulerInner>>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(SchedulerInner {
                tweens: SlotMap::with_key(),
                timers: SlotMap::with_key(),
                last_frame: Instant::now(),
            })),
        }
    }

    /// Get a handle to this scheduler for passing to components
    ///
    /// The handle holds a weak reference; operations on a handle that has
    /// outlived its scheduler are no-ops.
    pub fn handle(&self) -> SchedulerHandle {
        SchedulerHandle {
            inner: Arc::downgrade(&self.inner),
        }
    }

    /// Advance all tweens and timers by an explicit delta (in milliseconds)
    ///
    /// Completion callbacks fire after the registry lock is released, in
    /// registration order: tween completions first, then timer expirations.
    /// A callback that registers new work sees it advanced on the *next*
    /// call, never re-entered within the same one.
    ///
    /// NOTE: finished tweens stay registered so their value remains
    /// readable at the target; they are only removed when their wrapper
    /// drops. Timers are one-shot and removed on expiry.
    pub fn advance(&self, dt_ms: f32) {
        let mut fired: Vec<DoneCallback> = Vec::new();

        {
            let mut inner = self.inner.lock().unwrap();

            for (_, slot) in inner.tweens.iter_mut() {
                if slot.tween.step(dt_ms) {
                    if let Some(cb) = slot.on_complete.take() {
                        fired.push(cb);
                    }
                }
            }

            let expired: Vec<TimerId> = inner
                .timers
                .iter_mut()
                .filter_map(|(id, slot)| {
                    slot.remaining_ms -= dt_ms;
                    (slot.remaining_ms <= 0.0).then_some(id)
                })
                .collect();

            for id in expired {
                if let Some(slot) = inner.timers.remove(id) {
                    if let Some(cb) = slot.callback {
                        fired.push(cb);
                    }
                }
            }
        }

        for cb in fired {
            cb();
        }
    }

    /// Advance by the wall-clock delta since the previous call
    ///
    /// Returns true if any animations or timers are still pending (the
    /// caller should schedule another frame).
    pub fn tick(&self) -> bool {
        let dt_ms = {
            let mut inner = self.inner.lock().unwrap();
            let now = Instant::now();
            let dt = (now - inner.last_frame).as_secs_f32() * 1000.0;
            inner.last_frame = now;
            dt
        };

        self.advance(dt_ms);
        self.has_active_animations()
    }

    /// Check if any tweens are in flight or timers pending
    pub fn has_active_animations(&self) -> bool {
        let inner = self.inner.lock().unwrap();
        inner.tweens.iter().any(|(_, s)| !s.tween.is_done()) || !inner.timers.is_empty()
    }

    /// Get the number of registered tweens
    pub fn tween_count(&self) -> usize {
        self.inner.lock().unwrap().tweens.len()
    }

    /// Get the number of pending timers
    pub fn timer_count(&self) -> usize {
        self.inner.lock().unwrap().timers.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// A weak handle to the animation scheduler
///
/// This is passed to components that need to register tweens and timers.
/// It won't prevent the scheduler from being dropped.
#[derive(Clone)]
pub struct SchedulerHandle {
    inner: Weak<Mutex<SchedulerInner>>,
}

impl SchedulerHandle {
    // =========================================================================
    // Tween Operations
    // =========================================================================

    /// Register a tween and return its ID
    pub fn register_tween(
        &self,
        tween: Tween,
        on_complete: Option<DoneCallback>,
    ) -> Option<TweenId> {
        self.inner.upgrade().map(|inner| {
            let mut guard = inner.lock().unwrap();
            // Reset last_frame to now to prevent a huge dt on the first tick
            guard.last_frame = Instant::now();
            guard.tweens.insert(TweenSlot { tween, on_complete })
        })
    }

    /// Check whether a tween is still registered
    pub fn contains_tween(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.lock().unwrap().tweens.contains_key(id))
            .unwrap_or(false)
    }

    /// Redirect a tween towards a new target from its current value
    ///
    /// Replaces the tween's completion callback; the superseded callback is
    /// dropped without firing.
    pub fn retarget_tween(
        &self,
        id: TweenId,
        to: f32,
        duration_ms: f32,
        easing: Easing,
        on_complete: Option<DoneCallback>,
    ) {
        if let Some(inner) = self.inner.upgrade() {
            if let Some(slot) = inner.lock().unwrap().tweens.get_mut(id) {
                slot.tween.retarget(to, duration_ms, easing);
                slot.on_complete = on_complete;
            }
        }
    }

    /// Get the current tween value
    pub fn get_tween_value(&self, id: TweenId) -> Option<f32> {
        self.inner
            .upgrade()
            .and_then(|inner| inner.lock().unwrap().tweens.get(id).map(|s| s.tween.value()))
    }

    /// Check if a tween has finished
    ///
    /// Returns `true` if the tween doesn't exist (nothing is animating).
    pub fn is_tween_done(&self, id: TweenId) -> bool {
        self.inner
            .upgrade()
            .and_then(|inner| {
                inner
                    .lock()
                    .unwrap()
                    .tweens
                    .get(id)
                    .map(|s| s.tween.is_done())
            })
            .unwrap_or(true)
    }

    /// Remove a tween, dropping any pending completion callback
    pub fn remove_tween(&self, id: TweenId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().tweens.remove(id);
        }
    }

    // =========================================================================
    // Timer Operations
    // =========================================================================

    /// Arm a one-shot timer
    ///
    /// The callback fires on the first `advance`/`tick` that carries total
    /// elapsed time past `duration_ms`. Non-positive durations clamp to
    /// 1 ms. Returns `None` if the scheduler has been dropped.
    pub fn set_timeout<F>(&self, duration_ms: f32, callback: F) -> Option<TimerId>
    where
        F: FnOnce() + Send + 'static,
    {
        self.inner.upgrade().map(|inner| {
            inner.lock().unwrap().timers.insert(TimerSlot {
                remaining_ms: duration_ms.max(MIN_DURATION_MS),
                callback: Some(Box::new(callback)),
            })
        })
    }

    /// Cancel a pending timer
    ///
    /// Clearing a timer that already fired (or never existed) is a no-op.
    pub fn clear_timeout(&self, id: TimerId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.lock().unwrap().timers.remove(id);
        }
    }

    /// Check if the scheduler is still alive
    pub fn is_alive(&self) -> bool {
        self.inner.strong_count() > 0
    }
}

// ============================================================================
// Animated Value
// ============================================================================

/// A tween-driven value that automatically registers with the scheduler
///
/// Starting a new animation while one is in flight redirects the existing
/// tween from its current value; the superseded animation's completion
/// callback never fires. Dropping the value unregisters it.
///
/// # Example
///
/// ```ignore
/// let mut opacity = AnimatedValue::new(scheduler.handle(), 0.0);
/// opacity.animate_to(1.0, 250.0, Easing::SineOut);
///
/// // Each frame:
/// scheduler.tick();
/// let current = opacity.get();
/// ```
pub struct AnimatedValue {
    handle: SchedulerHandle,
    tween_id: Option<TweenId>,
    /// The last known value (updated on set_immediate and used before any
    /// animation has been registered)
    current: f32,
    /// The value we're animating towards
    target: f32,
}

impl AnimatedValue {
    /// Create a new animated value with the given initial value
    pub fn new(handle: SchedulerHandle, initial: f32) -> Self {
        Self {
            handle,
            tween_id: None,
            current: initial,
            target: initial,
        }
    }

    /// Animate towards a target over a duration
    pub fn animate_to(&mut self, target: f32, duration_ms: f32, easing: Easing) {
        self.begin(target, duration_ms, easing, None);
    }

    /// Animate towards a target, invoking a callback when the tween settles
    ///
    /// Redirecting the value before it settles replaces the callback; the
    /// superseded one is dropped without firing.
    pub fn animate_to_with<F>(&mut self, target: f32, duration_ms: f32, easing: Easing, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.begin(target, duration_ms, easing, Some(Box::new(on_complete)));
    }

    fn begin(
        &mut self,
        target: f32,
        duration_ms: f32,
        easing: Easing,
        on_complete: Option<DoneCallback>,
    ) {
        self.current = self.get();
        self.target = target;

        match self.tween_id {
            Some(id) if self.handle.contains_tween(id) => {
                self.handle
                    .retarget_tween(id, target, duration_ms, easing, on_complete);
            }
            _ => {
                let tween = Tween::new(self.current, target, duration_ms, easing);
                self.tween_id = self.handle.register_tween(tween, on_complete);
            }
        }
    }

    /// Get the current animated value
    pub fn get(&self) -> f32 {
        if let Some(id) = self.tween_id {
            self.handle.get_tween_value(id).unwrap_or(self.target)
        } else {
            self.current
        }
    }

    /// Set value immediately without animation
    ///
    /// Removes any active tween, dropping its pending completion callback.
    pub fn set_immediate(&mut self, value: f32) {
        if let Some(id) = self.tween_id.take() {
            self.handle.remove_tween(id);
        }
        self.current = value;
        self.target = value;
    }

    /// Check if currently animating
    pub fn is_animating(&self) -> bool {
        self.tween_id
            .map(|id| !self.handle.is_tween_done(id))
            .unwrap_or(false)
    }

    /// Get the current target value
    pub fn target(&self) -> f32 {
        self.target
    }
}

impl Drop for AnimatedValue {
    fn drop(&mut self) {
        if let Some(id) = self.tween_id {
            self.handle.remove_tween(id);
        }
    }
}
