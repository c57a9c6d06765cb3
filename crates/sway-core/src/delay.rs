//! Fractional delay line for inter-channel time offsets.
//!
//! The auto-pan post-filter shifts one channel against the other by a
//! fraction of a frame up to a few milliseconds. [`InterpolatedDelay`] is the
//! per-channel building block: a circular buffer read with linear
//! interpolation so the offset can glide without zipper noise.

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std as alloc;

use alloc::vec;
use alloc::vec::Vec;

/// Interpolated delay line using a circular buffer (heap-allocated).
///
/// The buffer is allocated once at construction and never reallocates, so
/// [`write`](Self::write) and [`read`](Self::read) are safe to call from the
/// audio thread.
///
/// A delay of `0.0` returns the most recently written sample, so the usual
/// per-sample pattern is write-then-read.
///
/// # Example
///
/// ```rust
/// use sway_core::InterpolatedDelay;
///
/// let mut delay = InterpolatedDelay::new(16);
/// delay.write(0.0);
/// delay.write(1.0);
///
/// // Halfway between the last two samples
/// assert!((delay.read(0.5) - 0.5).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct InterpolatedDelay {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl InterpolatedDelay {
    /// Creates a new delay line holding `capacity` samples.
    ///
    /// The longest usable delay is `capacity - 1` samples.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Delay size must be > 0");

        Self {
            buffer: vec![0.0; capacity],
            write_pos: 0,
        }
    }

    /// Creates a delay line from sample rate and max delay time in seconds.
    pub fn from_time(sample_rate: f32, max_seconds: f32) -> Self {
        let capacity = (sample_rate * max_seconds) as usize + 1;
        Self::new(capacity)
    }

    /// Reads a delayed sample with linear interpolation.
    ///
    /// `delay_samples` is clamped to `[0, max_delay()]`.
    #[inline]
    pub fn read(&self, delay_samples: f32) -> f32 {
        let len = self.buffer.len();
        let delay = delay_samples.clamp(0.0, self.max_delay() as f32);

        let delay_int = delay as usize;
        let frac = delay - delay_int as f32;

        // Points at the sample written `delay_int` writes ago.
        let read_pos = (self.write_pos + len - delay_int - 1) % len;
        let older_pos = (read_pos + len - 1) % len;

        let a = self.buffer[read_pos];
        let b = self.buffer[older_pos];
        a + (b - a) * frac
    }

    /// Writes a sample and advances the write position.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Writes `sample`, then reads with the given delay.
    ///
    /// With a delay of `0.0` this returns `sample` unchanged.
    #[inline]
    pub fn write_read(&mut self, sample: f32, delay_samples: f32) -> f32 {
        self.write(sample);
        self.read(delay_samples)
    }

    /// Clears the delay line (sets all samples to 0).
    pub fn clear(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    /// Returns the buffer capacity in samples.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the longest delay that can be read, in samples.
    pub fn max_delay(&self) -> usize {
        self.buffer.len() - 1
    }
}
