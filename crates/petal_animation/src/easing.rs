//! Easing functions for timed animations
//!
//! An easing maps normalized progress (0.0 to 1.0) to an eased output,
//! shaping how a tween accelerates and decelerates over its duration.

use std::f32::consts::{FRAC_PI_2, PI};

/// Easing function applied to normalized animation progress
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Easing {
    /// Constant velocity
    #[default]
    Linear,
    /// Sinusoidal acceleration from rest
    SineIn,
    /// Sinusoidal deceleration into rest
    SineOut,
    /// Sinusoidal acceleration and deceleration
    SineInOut,
    /// Cubic acceleration from rest
    EaseIn,
    /// Cubic deceleration into rest
    EaseOut,
    /// Cubic acceleration and deceleration
    EaseInOut,
}

impl Easing {
    /// Apply the easing to a progress value
    ///
    /// Input is clamped to [0.0, 1.0]. Every easing maps 0.0 to 0.0 and
    /// 1.0 to 1.0.
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::SineIn => 1.0 - (t * FRAC_PI_2).cos(),
            Easing::SineOut => (t * FRAC_PI_2).sin(),
            Easing::SineInOut => 0.5 * (1.0 - (t * PI).cos()),
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::EaseInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 1e-6, "{:?} at 0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{:?} at 1", easing);
        }
    }

    #[test]
    fn test_clamps_out_of_range_input() {
        for easing in ALL {
            assert_eq!(easing.apply(-0.5), easing.apply(0.0));
            assert_eq!(easing.apply(1.5), easing.apply(1.0));
        }
    }

    #[test]
    fn test_linear_is_identity() {
        assert!((Easing::Linear.apply(0.25) - 0.25).abs() < 1e-6);
        assert!((Easing::Linear.apply(0.75) - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_sine_out_decelerates() {
        // An ease-out covers more than half the distance by the midpoint
        assert!(Easing::SineOut.apply(0.5) > 0.5);
        // And an ease-in covers less
        assert!(Easing::SineIn.apply(0.5) < 0.5);
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut prev = easing.apply(0.0);
            for i in 1..=100 {
                let next = easing.apply(i as f32 / 100.0);
                assert!(next >= prev - 1e-6, "{:?} not monotonic at {}", easing, i);
                prev = next;
            }
        }
    }
}
