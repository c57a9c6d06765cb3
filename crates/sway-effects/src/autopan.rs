//! The auto-pan block loop.
//!
//! [`AutoPan`] holds the shared parameters and the sample rate; each channel
//! the host processes owns a [`PanState`] that carries the phase counter, the
//! ramped pan fraction and the post-filter history from block to block.
//!
//! Per block:
//!
//! 1. Snapshot the parameters and resolve the period in samples.
//! 2. Restart the cycle if the phase ran past the period or the effect is
//!    being switched on.
//! 3. For each frame, evaluate the waveform, ramp the pan fraction toward it
//!    and scale left by `2 * frac`, right by `2 * (1 - frac)`.
//! 4. Hand the last frame's sinusoid (scaled by 0.01) to the post-filter as
//!    its delay amount and run it over the whole block.

#[cfg(not(feature = "std"))]
use alloc::sync::Arc;
#[cfg(feature = "std")]
use std::sync::Arc;

use sway_core::{EnableState, GroupFeatures, ParamDescriptor, ParameterInfo, RampedValue};

use crate::oscillator::PanShape;
use crate::pan_delay::{PanDelay, PostFilter};
use crate::params::{self, AutoPanParams, PanSettings};
use crate::period::resolve_period;

/// Largest change of the pan fraction per frame.
pub const POSITION_RAMPING_THRESHOLD: f32 = 0.005;

/// Scale from the block's final sinusoid to the post-filter delay amount.
pub const POST_FILTER_DELAY_SCALE: f32 = 0.01;

/// Per-channel auto-pan history.
///
/// Owned by exactly one channel and passed by `&mut` into every block call.
/// Starts at phase 0 with the pan fraction centred.
#[derive(Debug, Clone)]
pub struct PanState<F = PanDelay> {
    /// Frames since the start of the current cycle
    phase: u64,
    /// Ramped pan fraction: left (first slot) share, right gets `1 - frac`
    frac: RampedValue,
    /// Sinusoid of the last frame of the previous block
    last_sinusoid: f32,
    post_filter: F,
}

impl PanState<PanDelay> {
    /// Fresh state with the stock [`PanDelay`] post-filter.
    pub fn new() -> Self {
        Self::with_post_filter(PanDelay::new())
    }
}

impl Default for PanState<PanDelay> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: PostFilter> PanState<F> {
    /// Fresh state around a custom post-filter.
    pub fn with_post_filter(post_filter: F) -> Self {
        Self {
            phase: 0,
            frac: RampedValue::new(0.5, POSITION_RAMPING_THRESHOLD),
            last_sinusoid: 0.0,
            post_filter,
        }
    }

    /// Frames since the start of the current cycle.
    pub fn phase(&self) -> u64 {
        self.phase
    }

    /// Current (ramped) pan fraction.
    pub fn frac(&self) -> f32 {
        self.frac.get()
    }

    /// Sinusoid of the final frame of the last processed block.
    pub fn last_sinusoid(&self) -> f32 {
        self.last_sinusoid
    }

    /// The post-filter.
    pub fn post_filter(&self) -> &F {
        &self.post_filter
    }

    /// Mutable access to the post-filter.
    pub fn post_filter_mut(&mut self) -> &mut F {
        &mut self.post_filter
    }

    /// Back to phase 0, centred, with empty post-filter history.
    pub fn reset(&mut self) {
        self.phase = 0;
        self.frac.set_immediate(0.5);
        self.last_sinusoid = 0.0;
        self.post_filter.reset();
    }

    /// Advance one frame and return the ramped pan fraction for it.
    #[inline]
    fn advance(&mut self, shape: &PanShape, period: f32) -> f32 {
        let point = shape.evaluate(self.phase, period);
        self.frac.set_with_ramping_applied(point.target);
        self.last_sinusoid = point.sinusoid;
        self.phase += 1;
        self.frac.get()
    }
}

/// What the sample loop needs for one block.
#[derive(Debug, Clone, Copy)]
struct BlockPlan {
    settings: PanSettings,
    shape: PanShape,
    period: f32,
}

/// Stereo auto-panner.
///
/// Parameters live in a shared [`AutoPanParams`]; any number of channels can
/// be processed by one `AutoPan`, each with its own [`PanState`].
///
/// # Example
///
/// ```rust
/// use sway_core::{EnableState, GroupFeatures};
/// use sway_effects::{AutoPan, PanState};
///
/// let pan = AutoPan::new(48000.0);
/// pan.params().set_width(1.0);
/// pan.params().set_period(0.01);
///
/// let mut state = PanState::new();
/// let input = vec![0.5; 512];
/// let mut output = vec![0.0; 512];
/// pan.process_channel(&mut state, &input, &mut output, EnableState::Enabling, GroupFeatures::none());
///
/// assert_eq!(state.phase(), 256);
/// ```
#[derive(Debug, Clone)]
pub struct AutoPan {
    params: Arc<AutoPanParams>,
    sample_rate: f32,
}

impl AutoPan {
    /// Auto-pan with its own default parameters.
    pub fn new(sample_rate: f32) -> Self {
        Self::with_params(sample_rate, Arc::new(AutoPanParams::new()))
    }

    /// Auto-pan reading from a shared parameter store.
    pub fn with_params(sample_rate: f32, params: Arc<AutoPanParams>) -> Self {
        Self {
            params,
            sample_rate,
        }
    }

    /// The shared parameter store.
    pub fn params(&self) -> &Arc<AutoPanParams> {
        &self.params
    }

    /// Current sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Set the sample rate used by the time-based period.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
    }

    /// Period in samples for `settings`, beat-synced when possible.
    pub fn effective_period(&self, settings: &PanSettings, features: GroupFeatures) -> f32 {
        resolve_period(
            settings.period_unit,
            settings.period,
            self.params.period_max(),
            self.sample_rate,
            features,
        )
    }

    /// Process one block from `input` into `output`.
    ///
    /// Disabled blocks return immediately and leave `output` untouched. Only
    /// whole frames common to both buffers are panned; an odd trailing
    /// sample is left as it was.
    pub fn process_channel<F: PostFilter>(
        &self,
        state: &mut PanState<F>,
        input: &[f32],
        output: &mut [f32],
        enable_state: EnableState,
        features: GroupFeatures,
    ) {
        let Some(plan) = self.begin_block(state, enable_state, features) else {
            return;
        };
        for (inp, out) in input.chunks_exact(2).zip(output.chunks_exact_mut(2)) {
            let frac = state.advance(&plan.shape, plan.period);
            out[0] = inp[0] * frac * 2.0;
            out[1] = inp[1] * (1.0 - frac) * 2.0;
        }
        self.finish_block(state, output, &plan);
    }

    /// Process one block in place.
    ///
    /// Produces exactly what [`process_channel`](Self::process_channel)
    /// writes to a separate output buffer.
    pub fn process_channel_inplace<F: PostFilter>(
        &self,
        state: &mut PanState<F>,
        buffer: &mut [f32],
        enable_state: EnableState,
        features: GroupFeatures,
    ) {
        let Some(plan) = self.begin_block(state, enable_state, features) else {
            return;
        };
        for frame in buffer.chunks_exact_mut(2) {
            let frac = state.advance(&plan.shape, plan.period);
            frame[0] = frame[0] * frac * 2.0;
            frame[1] = frame[1] * (1.0 - frac) * 2.0;
        }
        self.finish_block(state, buffer, &plan);
    }

    fn begin_block<F: PostFilter>(
        &self,
        state: &mut PanState<F>,
        enable_state: EnableState,
        features: GroupFeatures,
    ) -> Option<BlockPlan> {
        if !enable_state.is_active() {
            return None;
        }
        let settings = self.params.snapshot();
        let period = self.effective_period(&settings, features);
        if state.phase as f32 > period || enable_state == EnableState::Enabling {
            state.phase = 0;
        }
        state.last_sinusoid = 0.0;
        Some(BlockPlan {
            settings,
            shape: settings.shape(),
            period,
        })
    }

    fn finish_block<F: PostFilter>(&self, state: &mut PanState<F>, block: &mut [f32], plan: &BlockPlan) {
        let amount = POST_FILTER_DELAY_SCALE * state.last_sinusoid;
        state.post_filter.set_delay_amount(amount);
        state.post_filter.process_inplace(block);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            quarter = libm::floorf(state.phase as f32 / plan.period * 4.0),
            beats = crate::period::beat_multiplier(plan.settings.period, self.params.period_max()),
            delay = amount,
            frac = state.frac.get(),
            phase = state.phase,
            samples = block.len(),
            "autopan block"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = plan;
    }
}

impl ParameterInfo for AutoPan {
    fn param_count(&self) -> usize {
        params::PARAM_COUNT
    }

    fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
        params::descriptor(index)
    }

    fn get_param(&self, index: usize) -> f32 {
        self.params.get(index)
    }

    fn set_param(&mut self, index: usize, value: f32) {
        self.params.set(index, value);
    }
}
