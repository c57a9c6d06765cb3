//! Block-based processing of interleaved stereo buffers.

use sway_core::Effect;

/// Default block size in frames.
pub const DEFAULT_BLOCK_FRAMES: usize = 512;

/// Runs effects over interleaved stereo audio one block at a time.
///
/// Effects see fixed-size blocks (the last may be shorter), just as they
/// would from a host audio callback, so per-block state such as the
/// auto-pan's phase reset behaves the same offline as live. The `Send`
/// bound lets the engine move to an audio thread.
pub struct ProcessingEngine {
    effects: Vec<Box<dyn Effect + Send>>,
    sample_rate: f32,
    block_frames: usize,
}

impl ProcessingEngine {
    /// Create an empty engine.
    pub fn new(sample_rate: f32) -> Self {
        Self {
            effects: Vec::new(),
            sample_rate,
            block_frames: DEFAULT_BLOCK_FRAMES,
        }
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    /// Change the sample rate of the engine and every effect.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        self.sample_rate = sample_rate;
        for effect in &mut self.effects {
            effect.set_sample_rate(sample_rate);
        }
    }

    /// Frames per block.
    pub fn block_frames(&self) -> usize {
        self.block_frames
    }

    /// Set frames per block (at least one).
    pub fn set_block_frames(&mut self, frames: usize) {
        self.block_frames = frames.max(1);
    }

    /// Builder form of [`set_block_frames`](Self::set_block_frames).
    pub fn with_block_frames(mut self, frames: usize) -> Self {
        self.set_block_frames(frames);
        self
    }

    /// Append an effect; it is switched to the engine's sample rate.
    pub fn add_effect(&mut self, mut effect: Box<dyn Effect + Send>) {
        effect.set_sample_rate(self.sample_rate);
        self.effects.push(effect);
    }

    /// Number of effects.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// `true` with no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Summed latency of all effects, in frames.
    pub fn latency_samples(&self) -> usize {
        self.effects.iter().map(|e| e.latency_samples()).sum()
    }

    /// Reset every effect.
    pub fn reset(&mut self) {
        for effect in &mut self.effects {
            effect.reset();
        }
    }

    /// Run one block: first effect input to output, the rest in place.
    pub fn process_block(&mut self, input: &[f32], output: &mut [f32]) {
        debug_assert!(output.len() >= input.len());
        let output = &mut output[..input.len()];

        let Some((first, rest)) = self.effects.split_first_mut() else {
            output.copy_from_slice(input);
            return;
        };
        first.process_block(input, output);
        for effect in rest {
            effect.process_block_inplace(output);
        }
    }

    /// Run one block in place.
    pub fn process_block_inplace(&mut self, buffer: &mut [f32]) {
        for effect in &mut self.effects {
            effect.process_block_inplace(buffer);
        }
    }

    /// Process a whole interleaved buffer block by block.
    pub fn process_interleaved(&mut self, input: &[f32]) -> Vec<f32> {
        self.process_interleaved_with_progress(input, |_| {})
    }

    /// [`process_interleaved`](Self::process_interleaved), calling
    /// `progress` with the number of frames done after each block.
    pub fn process_interleaved_with_progress(
        &mut self,
        input: &[f32],
        mut progress: impl FnMut(usize),
    ) -> Vec<f32> {
        let mut output = vec![0.0; input.len()];
        let block_samples = self.block_frames * 2;
        let mut frames_done = 0;

        for (in_chunk, out_chunk) in input
            .chunks(block_samples)
            .zip(output.chunks_mut(block_samples))
        {
            self.process_block(in_chunk, out_chunk);
            frames_done += in_chunk.len() / 2;
            progress(frames_done);
        }

        tracing::debug!(
            frames = input.len() / 2,
            block_frames = self.block_frames,
            effects = self.effects.len(),
            "processed buffer"
        );
        output
    }
}

impl Default for ProcessingEngine {
    fn default() -> Self {
        Self::new(48000.0)
    }
}
