//! Core Effect trait and the host enable signal.
//!
//! The [`Effect`] trait is the interface the processing engine drives: one
//! call per audio block, on interleaved stereo samples
//! (`[l0, r0, l1, r1, ...]`).
//!
//! ## Design Decisions
//!
//! - **Block processing**: Effects see a whole block at a time so they can
//!   read parameters once per block and run a tight inner loop.
//!
//! - **Object-safe**: `Box<dyn Effect + Send>` is how the engine stores
//!   effects.
//!
//! - **No allocations**: All methods are designed to be called in real-time
//!   audio contexts with zero heap allocations.

/// Activation state of an effect for the current block.
///
/// Hosts report `Enabling` for exactly one block when an effect switches on,
/// so the effect can start from a clean state, then `Enabled` afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EnableState {
    /// Effect is off; processing is skipped.
    #[default]
    Disabled,
    /// First block after the effect was switched on.
    Enabling,
    /// Effect is running.
    Enabled,
}

impl EnableState {
    /// Returns `true` for `Enabling` and `Enabled`.
    #[inline]
    pub fn is_active(self) -> bool {
        !matches!(self, EnableState::Disabled)
    }
}

/// Core trait for all audio effects.
///
/// Buffers are interleaved stereo. An odd trailing sample (half a frame) is
/// never an error; each effect documents what it does with it.
///
/// # Example
///
/// ```rust
/// use sway_core::Effect;
///
/// struct Swap;
///
/// impl Effect for Swap {
///     fn process_block_inplace(&mut self, buffer: &mut [f32]) {
///         for frame in buffer.chunks_exact_mut(2) {
///             frame.swap(0, 1);
///         }
///     }
///
///     fn set_sample_rate(&mut self, _sample_rate: f32) {}
///
///     fn reset(&mut self) {}
/// }
///
/// let mut swap = Swap;
/// let mut output = [0.0; 4];
/// swap.process_block(&[1.0, 2.0, 3.0, 4.0], &mut output);
/// assert_eq!(output, [2.0, 1.0, 4.0, 3.0]);
/// ```
pub trait Effect {
    /// Process a block from `input` into `output`.
    ///
    /// Default implementation copies `input` to `output` and processes it
    /// in place. Effects may override this to avoid the copy.
    ///
    /// # Panics
    /// Default implementation panics if `input.len() != output.len()`
    fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(input);
        self.process_block_inplace(output);
    }

    /// Process a block in place.
    fn process_block_inplace(&mut self, buffer: &mut [f32]);

    /// Update the sample rate.
    ///
    /// Effects recalculate anything derived from it (periods in samples,
    /// delay capacities, ...).
    fn set_sample_rate(&mut self, sample_rate: f32);

    /// Reset internal state without changing parameters.
    fn reset(&mut self);

    /// Report processing latency in samples. Default returns 0.
    fn latency_samples(&self) -> usize {
        0
    }
}
