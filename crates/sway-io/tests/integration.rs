//! WAV files through the processing engine and the auto-pan.

use sway_core::Effect;
use sway_effects::{AutoPanEffect, PanSettings, PeriodUnit};
use sway_io::{
    ProcessingEngine, WavFormat, read_wav_info, read_wav_stereo, to_stereo, write_wav_stereo,
};
use tempfile::TempDir;

fn sine_stereo(sample_rate: u32, freq_hz: f32, frames: usize) -> Vec<f32> {
    (0..frames)
        .flat_map(|i| {
            let s = (2.0 * std::f32::consts::PI * freq_hz * i as f32 / sample_rate as f32).sin()
                * 0.5;
            [s, s]
        })
        .collect()
}

fn wide_settings() -> PanSettings {
    PanSettings {
        period_unit: PeriodUnit::Time,
        period: 0.01,
        smoothing: 0.0,
        width: 1.0,
    }
}

#[test]
fn file_to_file_through_auto_pan() {
    let dir = TempDir::new().unwrap();
    let input_path = dir.path().join("in.wav");
    let output_path = dir.path().join("out.wav");

    let sr = 44100;
    let input = sine_stereo(sr, 220.0, 8000);
    write_wav_stereo(&input_path, &input, sr, 32).unwrap();

    let (samples, spec) = read_wav_stereo(&input_path).unwrap();
    assert_eq!(samples, input);

    let mut engine = ProcessingEngine::new(spec.sample_rate as f32).with_block_frames(256);
    engine.add_effect(Box::new(AutoPanEffect::with_settings(
        spec.sample_rate as f32,
        &wide_settings(),
    )));
    let output = engine.process_interleaved(&samples);
    write_wav_stereo(&output_path, &output, spec.sample_rate, 24).unwrap();

    let info = read_wav_info(&output_path).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.sample_rate, sr);
    assert_eq!(info.bits_per_sample, 24);
    assert_eq!(info.format, WavFormat::Pcm);
    assert_eq!(info.num_frames, 8000);

    let (reloaded, _) = read_wav_stereo(&output_path).unwrap();
    assert_eq!(reloaded.len(), output.len());
    assert!(reloaded.iter().all(|s| s.is_finite() && s.abs() <= 1.0));
    // A full-width pan moves energy between the channels
    assert!(
        output
            .chunks_exact(2)
            .any(|frame| (frame[0] - frame[1]).abs() > 0.05)
    );
}

#[test]
fn engine_matches_direct_block_calls() {
    let sr = 48000.0;
    let input = sine_stereo(48000, 440.0, 3000);

    let mut engine = ProcessingEngine::new(sr).with_block_frames(128);
    engine.add_effect(Box::new(AutoPanEffect::with_settings(sr, &wide_settings())));
    let via_engine = engine.process_interleaved(&input);

    let mut effect = AutoPanEffect::with_settings(sr, &wide_settings());
    let mut direct = vec![0.0; input.len()];
    for (inp, out) in input.chunks(256).zip(direct.chunks_mut(256)) {
        effect.process_block(inp, out);
    }

    assert_eq!(via_engine, direct);
}

#[test]
fn mono_file_is_panned_as_stereo() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mono.wav");
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 22050,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for i in 0..100 {
        writer.write_sample(i as f32 / 100.0).unwrap();
    }
    writer.finalize().unwrap();

    let (samples, spec) = read_wav_stereo(&path).unwrap();
    assert_eq!(spec.source_channels, 1);
    assert_eq!(samples.len(), 200);
    assert_eq!(samples[..4], [0.0, 0.0, 0.01, 0.01]);
    assert_eq!(to_stereo(&[0.25], 1), vec![0.25, 0.25]);
}

#[test]
fn empty_buffer_round_trip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.wav");
    write_wav_stereo(&path, &[], 48000, 16).unwrap();

    let (samples, _) = read_wav_stereo(&path).unwrap();
    assert!(samples.is_empty());
    assert_eq!(read_wav_info(&path).unwrap().duration_secs, 0.0);

    let mut engine = ProcessingEngine::default();
    engine.add_effect(Box::new(AutoPanEffect::new(48000.0)));
    assert!(engine.process_interleaved(&samples).is_empty());
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    assert!(read_wav_stereo(dir.path().join("nope.wav")).is_err());
    assert!(read_wav_info(dir.path().join("nope.wav")).is_err());
}
