//! Engine glue: one auto-pan channel behind the workspace [`Effect`] trait.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use sway_core::{EnableState, Effect, GroupFeatures, ParamDescriptor, ParameterInfo};

use crate::autopan::{AutoPan, PanState};
use crate::params::{AutoPanParams, PanSettings};

/// Auto-pan for a single stereo stream.
///
/// Owns the channel's [`PanState`], the enable state and the channel's
/// [`GroupFeatures`]. Switching the effect on yields one
/// [`EnableState::Enabling`] block (which restarts the cycle) followed by
/// [`EnableState::Enabled`] blocks. While disabled, `process_block` copies
/// input to output and `process_block_inplace` leaves the buffer alone.
///
/// # Example
///
/// ```rust
/// use sway_core::Effect;
/// use sway_effects::AutoPanEffect;
///
/// let mut effect = AutoPanEffect::new(48000.0);
/// effect.params().set_width(1.0);
/// effect.set_bpm(Some(120.0));
///
/// let input = vec![0.25; 1024];
/// let mut output = vec![0.0; 1024];
/// effect.process_block(&input, &mut output);
/// ```
#[derive(Debug, Clone)]
pub struct AutoPanEffect {
    pan: AutoPan,
    state: PanState,
    enable_state: EnableState,
    features: GroupFeatures,
    bpm: Option<f32>,
}

impl AutoPanEffect {
    /// Enabled auto-pan with default parameters.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_params(sample_rate, Arc::new(AutoPanParams::new()))
    }

    /// Enabled auto-pan reading from a shared parameter store.
    pub fn with_params(sample_rate: f32, params: Arc<AutoPanParams>) -> Self {
        Self {
            pan: AutoPan::with_params(sample_rate, params),
            state: PanState::new(),
            enable_state: EnableState::Enabling,
            features: GroupFeatures::none(),
            bpm: None,
        }
    }

    /// Enabled auto-pan starting from `settings`.
    pub fn with_settings(sample_rate: f32, settings: &PanSettings) -> Self {
        Self::with_params(sample_rate, Arc::new(AutoPanParams::from_settings(settings)))
    }

    /// The shared parameter store.
    pub fn params(&self) -> &Arc<AutoPanParams> {
        self.pan.params()
    }

    /// The underlying panner.
    pub fn auto_pan(&self) -> &AutoPan {
        &self.pan
    }

    /// The channel state.
    pub fn state(&self) -> &PanState {
        &self.state
    }

    /// Switch the effect on or off.
    ///
    /// Turning a disabled effect on makes the next block an `Enabling`
    /// block. Turning an active effect on again changes nothing.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enable_state = match (enabled, self.enable_state) {
            (false, _) => EnableState::Disabled,
            (true, EnableState::Disabled) => EnableState::Enabling,
            (true, active) => active,
        };
    }

    /// Returns `true` unless disabled.
    pub fn is_enabled(&self) -> bool {
        self.enable_state.is_active()
    }

    /// State the next block will be processed with.
    pub fn enable_state(&self) -> EnableState {
        self.enable_state
    }

    /// Replace the channel features.
    ///
    /// Clears any tempo set with [`set_bpm`](Self::set_bpm).
    pub fn set_features(&mut self, features: GroupFeatures) {
        self.features = features;
        self.bpm = None;
    }

    /// Channel features used for beat sync.
    pub fn features(&self) -> GroupFeatures {
        self.features
    }

    /// Derive the beat length from a tempo, or clear it with `None`.
    ///
    /// The beat length follows later sample rate changes.
    pub fn set_bpm(&mut self, bpm: Option<f32>) {
        self.bpm = bpm;
        self.features = match bpm {
            Some(bpm) => GroupFeatures::from_bpm(bpm, self.pan.sample_rate()),
            None => GroupFeatures::none(),
        };
    }

    /// Tempo set with [`set_bpm`](Self::set_bpm), if any.
    pub fn bpm(&self) -> Option<f32> {
        self.bpm
    }

    fn end_block(&mut self) {
        if self.enable_state == EnableState::Enabling {
            self.enable_state = EnableState::Enabled;
        }
    }
}

impl Effect for AutoPanEffect {
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        if self.enable_state.is_active() {
            self.pan.process_channel(
                &mut self.state,
                input,
                output,
                self.enable_state,
                self.features,
            );
            self.end_block();
        } else {
            output.copy_from_slice(input);
        }
    }

    fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        self.pan.process_channel_inplace(
            &mut self.state,
            buffer,
            self.enable_state,
            self.features,
        );
        self.end_block();
    }

    fn set_sample_rate(&mut self, sample_rate: f32) {
        self.pan.set_sample_rate(sample_rate);
        if let Some(bpm) = self.bpm {
            self.features = GroupFeatures::from_bpm(bpm, sample_rate);
        }
    }

    fn reset(&mut self) {
        self.state.reset();
    }
}

impl ParameterInfo for AutoPanEffect {
    fn param_count(&self) -> usize {
        self.pan.param_count()
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        self.pan.param_info(index)
    }

    fn get_param(&self, index: usize) -> f32 {
        self.pan.get_param(index)
    }

    fn set_param(&mut self, index: usize, value: f32) {
        self.pan.set_param(index, value);
    }
}
