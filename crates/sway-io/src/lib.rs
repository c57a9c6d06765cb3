//! WAV file I/O and offline block processing for the sway auto-pan.
//!
//! - [`read_wav_stereo`] / [`write_wav_stereo`]: any WAV in, interleaved
//!   stereo `f32` out, and back to 16/24-bit PCM or 32-bit float
//! - [`ProcessingEngine`]: runs effects over a buffer in fixed-size blocks
//!
//! ```rust,no_run
//! use sway_io::{ProcessingEngine, read_wav_stereo, write_wav_stereo};
//! use sway_effects::AutoPanEffect;
//!
//! let (samples, spec) = read_wav_stereo("input.wav")?;
//! let mut engine = ProcessingEngine::new(spec.sample_rate as f32);
//! engine.add_effect(Box::new(AutoPanEffect::new(spec.sample_rate as f32)));
//! let panned = engine.process_interleaved(&samples);
//! write_wav_stereo("output.wav", &panned, spec.sample_rate, 24)?;
//! # Ok::<(), sway_io::Error>(())
//! ```

mod engine;
mod wav;

pub use engine::{DEFAULT_BLOCK_FRAMES, ProcessingEngine};
pub use wav::{
    SUPPORTED_BIT_DEPTHS, WavFormat, WavInfo, WavSpec, read_wav_info, read_wav_stereo, to_stereo,
    write_wav_stereo,
};

/// Errors from audio file I/O.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// WAV file read/write error.
    #[error("WAV file error: {0}")]
    Wav(#[from] hound::Error),

    /// Output bit depth other than 16, 24 or 32.
    #[error("unsupported bit depth: {0} (expected 16, 24 or 32)")]
    UnsupportedBitDepth(u16),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for audio I/O operations.
pub type Result<T> = std::result::Result<T, Error>;
