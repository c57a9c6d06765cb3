//! Rate-limited values for click-free modulation.
//!
//! A modulation target that jumps (a waveform corner, a plateau edge, or a
//! parameter change between blocks) produces an audible click when applied
//! to a gain directly. [`RampedValue`] follows its target at a bounded speed
//! instead: each update moves the stored value by at most a fixed threshold.
//!
//! ## Usage
//!
//! ```rust
//! use sway_core::RampedValue;
//!
//! let mut pan = RampedValue::new(0.5, 0.005);
//!
//! // A hard jump to full left is spread over about 100 updates
//! for _ in 0..100 {
//!     pan.set_with_ramping_applied(1.0);
//! }
//! assert!((pan.get() - 1.0).abs() < 1e-5);
//!
//! // Within one step of the target it snaps
//! pan.set_with_ramping_applied(1.0);
//! assert_eq!(pan.get(), 1.0);
//! ```

/// A value that moves toward each new target by at most a fixed step.
///
/// Unlike [`set_immediate`](Self::set_immediate), every call to
/// [`set_with_ramping_applied`](Self::set_with_ramping_applied) is one ramp
/// step. Callers invoke it once per frame with the freshly computed target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RampedValue {
    /// Current value
    value: f32,
    /// Last requested target
    target: f32,
    /// Largest change allowed per update (always >= 0)
    threshold: f32,
}

impl RampedValue {
    /// Create a ramped value at `initial` with the given per-update threshold.
    ///
    /// Negative thresholds are treated as their magnitude.
    pub fn new(initial: f32, threshold: f32) -> Self {
        Self {
            value: initial,
            target: initial,
            threshold: threshold.abs(),
        }
    }

    /// Set the largest change allowed per update.
    pub fn set_ramping_threshold(&mut self, threshold: f32) {
        self.threshold = threshold.abs();
    }

    /// Get the per-update threshold.
    #[inline]
    pub fn ramping_threshold(&self) -> f32 {
        self.threshold
    }

    /// Move toward `target` by at most the threshold.
    ///
    /// If the distance to `target` is within the threshold the value snaps
    /// exactly to it. Returns `true` when the step was limited, i.e. the
    /// value is still on its way.
    #[inline]
    pub fn set_with_ramping_applied(&mut self, target: f32) -> bool {
        self.target = target;
        let delta = target - self.value;
        if delta > self.threshold {
            self.value += self.threshold;
            true
        } else if delta < -self.threshold {
            self.value -= self.threshold;
            true
        } else {
            self.value = target;
            false
        }
    }

    /// Jump to `value` without ramping.
    #[inline]
    pub fn set_immediate(&mut self, value: f32) {
        self.value = value;
        self.target = value;
    }

    /// Get the current value.
    #[inline]
    pub fn get(&self) -> f32 {
        self.value
    }

    /// Get the last requested target.
    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Check whether the value has reached its last target.
    #[inline]
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }
}

impl Default for RampedValue {
    /// Mid-point value that follows every update without limiting.
    fn default() -> Self {
        Self::new(0.5, f32::INFINITY)
    }
}
