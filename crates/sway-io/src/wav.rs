//! WAV file reading and writing.
//!
//! Audio is always handed out as interleaved stereo `f32` (`[l0, r0, l1, r1,
//! ...]`), the layout the auto-pan processes. Mono files are duplicated to
//! both channels; files with more than two channels keep the first two.

use crate::{Error, Result};
use hound::{SampleFormat, WavReader, WavWriter};
use std::path::Path;

/// Bit depths [`write_wav_stereo`] can produce.
pub const SUPPORTED_BIT_DEPTHS: [u16; 3] = [16, 24, 32];

/// WAV audio encoding format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WavFormat {
    /// Linear PCM (integer samples).
    Pcm,
    /// IEEE 754 floating-point samples.
    IeeeFloat,
}

/// WAV header details, read without loading sample data.
#[derive(Debug, Clone)]
pub struct WavInfo {
    /// Channels in the file.
    pub channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth per sample.
    pub bits_per_sample: u16,
    /// Samples per channel.
    pub num_frames: u64,
    /// Duration in seconds.
    pub duration_secs: f64,
    /// Encoding.
    pub format: WavFormat,
}

/// Read a WAV header.
pub fn read_wav_info<P: AsRef<Path>>(path: P) -> Result<WavInfo> {
    let reader = WavReader::open(path)?;
    let spec = reader.spec();
    let num_frames = u64::from(reader.duration());

    Ok(WavInfo {
        channels: spec.channels,
        sample_rate: spec.sample_rate,
        bits_per_sample: spec.bits_per_sample,
        num_frames,
        duration_secs: num_frames as f64 / f64::from(spec.sample_rate),
        format: match spec.sample_format {
            SampleFormat::Float => WavFormat::IeeeFloat,
            SampleFormat::Int => WavFormat::Pcm,
        },
    })
}

/// Format of the audio handed back by [`read_wav_stereo`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavSpec {
    /// Channels in the source file (the returned audio is always stereo).
    pub source_channels: u16,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Bit depth of the source file.
    pub bits_per_sample: u16,
}

/// Read a WAV file as interleaved stereo `f32` in [-1, 1].
///
/// ```rust,no_run
/// let (samples, spec) = sway_io::read_wav_stereo("input.wav")?;
/// println!("{} frames at {} Hz", samples.len() / 2, spec.sample_rate);
/// # Ok::<(), sway_io::Error>(())
/// ```
pub fn read_wav_stereo<P: AsRef<Path>>(path: P) -> Result<(Vec<f32>, WavSpec)> {
    let reader = WavReader::open(path)?;
    let hound_spec = reader.spec();
    let spec = WavSpec {
        source_channels: hound_spec.channels,
        sample_rate: hound_spec.sample_rate,
        bits_per_sample: hound_spec.bits_per_sample,
    };

    let samples: Vec<f32> = match hound_spec.sample_format {
        SampleFormat::Float => reader
            .into_samples::<f32>()
            .collect::<std::result::Result<_, _>>()?,
        SampleFormat::Int => {
            let scale = int_scale(hound_spec.bits_per_sample);
            reader
                .into_samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect::<std::result::Result<_, _>>()?
        }
    };

    Ok((to_stereo(&samples, usize::from(spec.source_channels)), spec))
}

/// Interleave `channels`-channel audio as stereo.
pub fn to_stereo(samples: &[f32], channels: usize) -> Vec<f32> {
    match channels {
        0 => Vec::new(),
        1 => samples.iter().flat_map(|&s| [s, s]).collect(),
        2 => samples.to_vec(),
        _ => samples
            .chunks_exact(channels)
            .flat_map(|frame| [frame[0], frame[1]])
            .collect(),
    }
}

/// Write interleaved stereo audio.
///
/// `bits_per_sample` of 16 or 24 writes integer PCM (clamped), 32 writes
/// IEEE float. A trailing unpaired sample is dropped.
pub fn write_wav_stereo<P: AsRef<Path>>(
    path: P,
    samples: &[f32],
    sample_rate: u32,
    bits_per_sample: u16,
) -> Result<()> {
    if !SUPPORTED_BIT_DEPTHS.contains(&bits_per_sample) {
        return Err(Error::UnsupportedBitDepth(bits_per_sample));
    }
    let spec = hound::WavSpec {
        channels: 2,
        sample_rate,
        bits_per_sample,
        sample_format: if bits_per_sample == 32 {
            SampleFormat::Float
        } else {
            SampleFormat::Int
        },
    };
    let mut writer = WavWriter::create(path, spec)?;
    let frames = samples.len() / 2 * 2;

    if bits_per_sample == 32 {
        for &sample in &samples[..frames] {
            writer.write_sample(sample)?;
        }
    } else {
        let scale = int_scale(bits_per_sample);
        for &sample in &samples[..frames] {
            writer.write_sample((sample * scale).clamp(-scale, scale - 1.0) as i32)?;
        }
    }

    writer.finalize()?;
    Ok(())
}

fn int_scale(bits_per_sample: u16) -> f32 {
    (1_i64 << (bits_per_sample.clamp(1, 32) - 1)) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_raw(path: &Path, channels: u16, bits: u16, samples: &[i32]) {
        let spec = hound::WavSpec {
            channels,
            sample_rate: 22050,
            bits_per_sample: bits,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn float_round_trip_is_exact() {
        let samples: Vec<f32> = (0..200).map(|i| (i as f32 * 0.1).sin()).collect();
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, 48000, 32).unwrap();

        let (loaded, spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(spec.sample_rate, 48000);
        assert_eq!(spec.source_channels, 2);
        assert_eq!(loaded, samples);
    }

    #[test]
    fn pcm16_round_trip_within_quantization() {
        let samples: Vec<f32> = (0..200).map(|i| (i as f32 * 0.1).sin() * 0.9).collect();
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &samples, 44100, 16).unwrap();

        let (loaded, spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(spec.bits_per_sample, 16);
        for (a, b) in samples.iter().zip(&loaded) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn pcm_write_clamps() {
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &[2.0, -2.0], 44100, 24).unwrap();
        let (loaded, _) = read_wav_stereo(file.path()).unwrap();
        assert!(loaded[0] < 1.0 && loaded[0] > 0.999);
        assert_eq!(loaded[1], -1.0);
    }

    #[test]
    fn mono_is_duplicated() {
        let file = NamedTempFile::new().unwrap();
        write_raw(file.path(), 1, 16, &[0, 16384, -16384]);
        let (loaded, spec) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(spec.source_channels, 1);
        assert_eq!(loaded, vec![0.0, 0.0, 0.5, 0.5, -0.5, -0.5]);
    }

    #[test]
    fn extra_channels_are_dropped() {
        let file = NamedTempFile::new().unwrap();
        write_raw(file.path(), 3, 16, &[8192, 16384, 32767, -8192, -16384, 0]);
        let (loaded, _) = read_wav_stereo(file.path()).unwrap();
        assert_eq!(loaded, vec![0.25, 0.5, -0.25, -0.5]);
    }

    #[test]
    fn unsupported_depth_is_rejected() {
        let file = NamedTempFile::new().unwrap();
        let err = write_wav_stereo(file.path(), &[0.0, 0.0], 48000, 8).unwrap_err();
        assert!(matches!(err, Error::UnsupportedBitDepth(8)));
    }

    #[test]
    fn odd_sample_is_dropped_on_write() {
        let file = NamedTempFile::new().unwrap();
        write_wav_stereo(file.path(), &[0.1, 0.2, 0.3], 48000, 32).unwrap();
        let info = read_wav_info(file.path()).unwrap();
        assert_eq!(info.num_frames, 1);
        assert_eq!(info.channels, 2);
        assert_eq!(info.format, WavFormat::IeeeFloat);
    }

    #[test]
    fn to_stereo_layouts() {
        assert_eq!(to_stereo(&[1.0, 2.0], 1), vec![1.0, 1.0, 2.0, 2.0]);
        assert_eq!(to_stereo(&[1.0, 2.0], 2), vec![1.0, 2.0]);
        assert_eq!(to_stereo(&[1.0, 2.0, 3.0, 4.0], 4), vec![1.0, 2.0]);
        assert!(to_stereo(&[1.0], 0).is_empty());
    }
}
