//! Post-filter run at the end of every auto-pan block.
//!
//! [`PostFilter`] is the narrow contract the block loop talks to: one delay
//! amount per block, then one pass over the whole interleaved block.
//! [`PanDelay`] is the stock implementation, a small inter-channel delay that
//! shifts one side against the other (the precedence effect strengthens the
//! perceived pan direction).

use sway_core::InterpolatedDelay;

/// Longest inter-channel offset [`PanDelay`] can hold, in frames.
///
/// 3300 frames is about 75 ms at 44.1 kHz, well past the few milliseconds
/// the precedence effect needs.
pub const PAN_MAX_DELAY_FRAMES: usize = 3300;

/// Block post-processor on interleaved stereo.
///
/// The auto-pan calls [`set_delay_amount`](Self::set_delay_amount) once per
/// block, then processes the block.
pub trait PostFilter {
    /// Signed inter-channel delay for the next block, in frames.
    ///
    /// Positive delays the left channel, negative delays the right.
    fn set_delay_amount(&mut self, amount: f32);

    /// Process `input` into `output`.
    ///
    /// Default implementation copies `input` to `output` and processes it in
    /// place.
    ///
    /// # Panics
    /// Default implementation panics if `input.len() != output.len()`
    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        output.copy_from_slice(input);
        self.process_inplace(output);
    }

    /// Process a block in place.
    fn process_inplace(&mut self, buffer: &mut [f32]);

    /// Clear any history.
    fn reset(&mut self);
}

/// Fractional inter-channel delay.
///
/// Each channel runs through its own [`InterpolatedDelay`]; only one of the
/// two is ever offset. When the amount changes between blocks the offset
/// glides linearly across the next block, reaching the new amount on its last
/// frame. An odd trailing sample passes through unchanged.
///
/// # Example
///
/// ```rust
/// use sway_effects::{PanDelay, PostFilter};
///
/// let mut delay = PanDelay::new();
/// delay.set_delay_amount(0.0);
///
/// let mut block = [0.25, -0.25, 0.5, -0.5];
/// delay.process_inplace(&mut block);
/// assert_eq!(block, [0.25, -0.25, 0.5, -0.5]);
/// ```
#[derive(Debug, Clone)]
pub struct PanDelay {
    left: InterpolatedDelay,
    right: InterpolatedDelay,
    /// Amount reached at the end of the previous block
    current: f32,
    /// Amount requested for the next block
    target: f32,
}

impl PanDelay {
    /// Delay with [`PAN_MAX_DELAY_FRAMES`] of headroom and no offset.
    pub fn new() -> Self {
        Self::with_capacity(PAN_MAX_DELAY_FRAMES)
    }

    /// Delay holding up to `frames` frames of offset.
    ///
    /// # Panics
    ///
    /// Panics if `frames` is 0.
    pub fn with_capacity(frames: usize) -> Self {
        Self {
            left: InterpolatedDelay::new(frames),
            right: InterpolatedDelay::new(frames),
            current: 0.0,
            target: 0.0,
        }
    }

    /// Amount the next block will glide toward.
    pub fn delay_amount(&self) -> f32 {
        self.target
    }

    /// Longest usable offset in frames.
    pub fn max_delay(&self) -> usize {
        self.left.max_delay()
    }

    /// Delay the frame by `amount` frames on one side.
    #[inline]
    fn delay_frame(&mut self, left: f32, right: f32, amount: f32) -> (f32, f32) {
        let left_delay = amount.max(0.0);
        let right_delay = (-amount).max(0.0);
        (
            self.left.write_read(left, left_delay),
            self.right.write_read(right, right_delay),
        )
    }

    /// Offset for frame `index` of `frames`, gliding to the target.
    #[inline]
    fn amount_at(&self, index: usize, frames: usize) -> f32 {
        if self.current == self.target {
            return self.target;
        }
        let t = (index + 1) as f32 / frames as f32;
        self.current + (self.target - self.current) * t
    }
}

impl Default for PanDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl PostFilter for PanDelay {
    fn set_delay_amount(&mut self, amount: f32) {
        let limit = self.max_delay() as f32;
        self.target = amount.clamp(-limit, limit);
    }

    fn process(&mut self, input: &[f32], output: &mut [f32]) {
        let frames = input.len().min(output.len()) / 2;
        for (index, (inp, out)) in input
            .chunks_exact(2)
            .zip(output.chunks_exact_mut(2))
            .enumerate()
        {
            let amount = self.amount_at(index, frames);
            let (l, r) = self.delay_frame(inp[0], inp[1], amount);
            out[0] = l;
            out[1] = r;
        }
        if frames > 0 {
            self.current = self.target;
        }
    }

    fn process_inplace(&mut self, buffer: &mut [f32]) {
        let frames = buffer.len() / 2;
        for (index, frame) in buffer.chunks_exact_mut(2).enumerate() {
            let amount = self.amount_at(index, frames);
            let (l, r) = self.delay_frame(frame[0], frame[1], amount);
            frame[0] = l;
            frame[1] = r;
        }
        if frames > 0 {
            self.current = self.target;
        }
    }

    fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.current = self.target;
    }
}
