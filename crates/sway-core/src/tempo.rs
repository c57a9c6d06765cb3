//! Tempo information for beat-synced effects.
//!
//! The host analyses each channel's track and may or may not know its beat
//! length. [`GroupFeatures`] carries that knowledge into the processing call:
//! an effect that wants to lock to the beat checks for a beat length and
//! falls back to free-running time when there is none.

/// Samples per beat at the given tempo and sample rate.
///
/// # Example
///
/// ```rust
/// use sway_core::samples_per_beat;
///
/// // 120 BPM at 48 kHz = 24000 samples per beat
/// assert!((samples_per_beat(120.0, 48000.0) - 24000.0).abs() < 0.01);
/// ```
#[inline]
pub fn samples_per_beat(bpm: f32, sample_rate: f32) -> f32 {
    sample_rate * 60.0 / bpm
}

/// Per-channel features supplied by the host alongside each block.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GroupFeatures {
    /// Beat length in samples, `None` when unknown for this channel.
    pub beat_length: Option<f32>,
}

impl GroupFeatures {
    /// Features with no beat information.
    pub const fn none() -> Self {
        Self { beat_length: None }
    }

    /// Features with a known beat length in samples.
    ///
    /// Non-positive or non-finite lengths are treated as unknown.
    pub fn with_beat_length(beat_length: f32) -> Self {
        let valid = beat_length.is_finite() && beat_length > 0.0;
        Self {
            beat_length: valid.then_some(beat_length),
        }
    }

    /// Features derived from a tempo in BPM.
    pub fn from_bpm(bpm: f32, sample_rate: f32) -> Self {
        if bpm > 0.0 {
            Self::with_beat_length(samples_per_beat(bpm, sample_rate))
        } else {
            Self::none()
        }
    }

    /// Returns `true` when a beat length is available.
    #[inline]
    pub fn has_beat_length(&self) -> bool {
        self.beat_length.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beat_length_from_bpm() {
        let features = GroupFeatures::from_bpm(120.0, 44100.0);
        assert_eq!(features.beat_length, Some(22050.0));
        assert!(features.has_beat_length());
    }

    #[test]
    fn invalid_tempo_has_no_beat() {
        assert_eq!(GroupFeatures::from_bpm(0.0, 44100.0), GroupFeatures::none());
        assert_eq!(GroupFeatures::from_bpm(-90.0, 44100.0), GroupFeatures::none());
        assert!(!GroupFeatures::with_beat_length(f32::NAN).has_beat_length());
        assert!(!GroupFeatures::with_beat_length(0.0).has_beat_length());
    }

    #[test]
    fn default_is_unknown() {
        assert!(!GroupFeatures::default().has_beat_length());
    }
}
