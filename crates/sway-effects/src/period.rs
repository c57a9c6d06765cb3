//! Period resolution: from the period knob to a cycle length in samples.
//!
//! The period knob means two different things depending on the period unit:
//!
//! - **Time**: a continuous duration, `period * 25` seconds (0.25 s to 50 s
//!   over the knob range).
//! - **Beats**: one of ten power-of-two beat multiples, 1/8 to 64 beats,
//!   multiplied by the channel's beat length. When the channel has no beat
//!   length the time mapping is used instead.

use sway_core::GroupFeatures;

/// Seconds of period per unit of the period knob in time mode.
pub const TIME_PERIOD_SECONDS: f32 = 25.0;

/// Number of discrete beat-multiple steps in beat mode.
pub const BEAT_DIVISION_COUNT: usize = 10;

/// Display labels for the beat-multiple steps, indexed by
/// [`beat_division_index`].
pub const BEAT_DIVISION_LABELS: [&str; BEAT_DIVISION_COUNT] =
    ["1/8", "1/4", "1/2", "1", "2", "4", "8", "16", "32", "64"];

/// How the period knob is interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PeriodUnit {
    /// Free-running period in seconds.
    #[default]
    Time,
    /// Period locked to a multiple of the beat length.
    Beats,
}

impl PeriodUnit {
    /// Parameter labels, indexed by [`index`](Self::index).
    pub const LABELS: &'static [&'static str] = &["Time", "Beats"];

    /// Unit from its parameter value (0 = time, anything else = beats).
    pub fn from_index(index: usize) -> Self {
        match index {
            0 => PeriodUnit::Time,
            _ => PeriodUnit::Beats,
        }
    }

    /// Parameter value of this unit.
    pub fn index(self) -> usize {
        match self {
            PeriodUnit::Time => 0,
            PeriodUnit::Beats => 1,
        }
    }
}

/// Step index `floor(period * 9 / max_period)`.
///
/// In range for `period` in `[0, max_period]`: `0..=9`. Values exactly on a
/// step boundary round down.
#[inline]
pub fn beat_division_index(period: f32, max_period: f32) -> i32 {
    libm::floorf(period * 9.0 / max_period) as i32
}

/// Beat multiplier `2^(index - 3)` for the period knob.
///
/// # Example
///
/// ```rust
/// use sway_effects::period::beat_multiplier;
///
/// assert_eq!(beat_multiplier(0.01, 1.0), 0.125);
/// assert_eq!(beat_multiplier(1.0, 1.0), 64.0);
/// ```
#[inline]
pub fn beat_multiplier(period: f32, max_period: f32) -> f32 {
    libm::ldexpf(1.0, beat_division_index(period, max_period) - 3)
}

/// Label of the beat step selected by the period knob, if in range.
pub fn beat_division_label(period: f32, max_period: f32) -> Option<&'static str> {
    let index = beat_division_index(period, max_period);
    usize::try_from(index)
        .ok()
        .and_then(|i| BEAT_DIVISION_LABELS.get(i).copied())
}

/// Effective period length in samples.
///
/// Beat mode needs a beat length in `features`; without one it silently
/// falls back to the time mapping.
///
/// # Example
///
/// ```rust
/// use sway_core::GroupFeatures;
/// use sway_effects::period::{PeriodUnit, resolve_period};
///
/// let time = resolve_period(PeriodUnit::Time, 1.0, 1.0, 44100.0, GroupFeatures::none());
/// assert_eq!(time, 1_102_500.0);
///
/// let beats = GroupFeatures::with_beat_length(22050.0);
/// let synced = resolve_period(PeriodUnit::Beats, 1.0, 1.0, 44100.0, beats);
/// assert_eq!(synced, 1_411_200.0);
/// ```
pub fn resolve_period(
    unit: PeriodUnit,
    period: f32,
    max_period: f32,
    sample_rate: f32,
    features: GroupFeatures,
) -> f32 {
    match (unit, features.beat_length) {
        (PeriodUnit::Beats, Some(beat_length)) => beat_length * beat_multiplier(period, max_period),
        _ => period * sample_rate * TIME_PERIOD_SECONDS,
    }
}
