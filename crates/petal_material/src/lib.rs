//! # Petal Material Components (petal_material)
//!
//! Material-style component state machines built on `petal_animation`.
//!
//! ## Philosophy
//!
//! Each component here is the *controller* half of a widget: it owns the
//! open/shown/checked state, the animated driver values, and the timers,
//! and exposes derived per-frame render parameters. The host framework
//! owns everything visual (layout, theming, icon rendering, gesture
//! recognition) and feeds interaction events in.
//!
//! ## Components
//!
//! - **Disclosure**: FAB-group open/close with staggered item reveal
//! - **Snackbar**: show, auto-dismiss, and swipe-dismiss with a single
//!   completion report
//! - **Selection**: single/multi-select list dialog state surfaced only
//!   at commit points
//! - **TextField**: label float, placeholder reveal, and error wiggle
//!
//! ## Example
//!
//! ```ignore
//! use petal_animation::AnimationScheduler;
//! use petal_material::prelude::*;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut fab_group = DisclosureController::new(scheduler.handle(), 3);
//!
//! fab_group.toggle();
//! scheduler.tick();
//!
//! for anim in fab_group.item_animations() {
//!     // render with anim.opacity / anim.scale
//! }
//! ```

pub mod disclosure;
pub mod selection;
pub mod snackbar;
pub mod text_field;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::disclosure::{
        backdrop_opacity, derive_item_animation, trigger_rotation, DisclosureController,
        DisclosureMode, ItemAnimation,
    };
    pub use crate::selection::{SelectableRow, SelectionListState, SelectionMode};
    pub use crate::snackbar::{
        gesture_exceeds_threshold, DismissDirection, SnackbarController,
    };
    pub use crate::text_field::{error_wiggle, label_metrics, LabelMetrics, TextFieldState};
    // Re-export the clock types components are driven by
    pub use petal_animation::{AnimationScheduler, Easing, SchedulerHandle};
}
