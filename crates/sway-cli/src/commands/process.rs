//! File-based auto-pan processing command.

use crate::commands::common::PanArgs;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use sway_core::samples_per_beat;
use sway_effects::PeriodUnit;
use sway_io::{ProcessingEngine, SUPPORTED_BIT_DEPTHS, read_wav_stereo, write_wav_stereo};
use std::path::PathBuf;

#[derive(Args)]
pub struct ProcessArgs {
    /// Input WAV file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output WAV file (always stereo)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    #[command(flatten)]
    pan: PanArgs,

    /// Processing block size in frames
    #[arg(long, default_value = "512")]
    block_size: usize,

    /// Output bit depth (16, 24, or 32)
    #[arg(long, default_value = "32")]
    bit_depth: u16,
}

pub fn run(args: ProcessArgs) -> anyhow::Result<()> {
    if !SUPPORTED_BIT_DEPTHS.contains(&args.bit_depth) {
        anyhow::bail!("unsupported bit depth {} (use 16, 24 or 32)", args.bit_depth);
    }
    if args.block_size == 0 {
        anyhow::bail!("block size must be at least 1 frame");
    }
    let preset = args.pan.build_preset()?;

    println!("Reading {}...", args.input.display());
    let (samples, spec) = read_wav_stereo(&args.input)?;
    let sample_rate = spec.sample_rate as f32;
    let frames = samples.len() / 2;
    println!(
        "  {} frames, {} channel(s), {} Hz, {:.2}s",
        frames,
        spec.source_channels,
        spec.sample_rate,
        frames as f32 / sample_rate
    );

    let effect = preset.build_effect(sample_rate);
    let settings = preset.settings();
    let period = effect
        .auto_pan()
        .effective_period(&settings, effect.features());
    tracing::info!(
        preset = %preset.name,
        sample_rate = spec.sample_rate,
        frames,
        block_size = args.block_size,
        period_samples = period,
        "processing"
    );

    println!("Preset: {}", preset.name);
    println!(
        "  unit {}, period {:.2}, smoothing {:.2}, width {:.2}",
        match settings.period_unit {
            PeriodUnit::Time => "time",
            PeriodUnit::Beats => "beats",
        },
        settings.period,
        settings.smoothing,
        settings.width
    );
    match (settings.period_unit, preset.bpm) {
        (PeriodUnit::Beats, Some(bpm)) => println!(
            "  {bpm} BPM ({:.0} samples per beat), cycle {:.2}s",
            samples_per_beat(bpm, sample_rate),
            period / sample_rate
        ),
        (PeriodUnit::Beats, None) => {
            tracing::warn!("beat-synced period without a tempo, using the time period");
            println!("  no tempo (--bpm): cycle {:.2}s", period / sample_rate);
        }
        (PeriodUnit::Time, _) => println!("  cycle {:.2}s", period / sample_rate),
    }

    let mut engine = ProcessingEngine::new(sample_rate).with_block_frames(args.block_size);
    engine.add_effect(Box::new(effect));

    let pb = ProgressBar::new(frames as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")?
            .progress_chars("##-"),
    );
    let output = engine.process_interleaved_with_progress(&samples, |done| {
        pb.set_position(done as u64);
    });
    pb.finish_with_message("done");

    let input_stats = ChannelStats::measure(&samples);
    let output_stats = ChannelStats::measure(&output);
    println!("\nStats:");
    println!("  Input:  {input_stats}");
    println!("  Output: {output_stats}");

    println!("\nWriting {}...", args.output.display());
    write_wav_stereo(&args.output, &output, spec.sample_rate, args.bit_depth)?;
    println!("Done!");

    Ok(())
}

/// Per-channel level summary of an interleaved stereo buffer.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ChannelStats {
    rms: [f32; 2],
    peak: [f32; 2],
}

impl ChannelStats {
    fn measure(samples: &[f32]) -> Self {
        let mut sum_sq = [0.0_f64; 2];
        let mut peak = [0.0_f32; 2];
        let mut frames = 0_usize;
        for frame in samples.chunks_exact(2) {
            for ch in 0..2 {
                sum_sq[ch] += f64::from(frame[ch]) * f64::from(frame[ch]);
                peak[ch] = peak[ch].max(frame[ch].abs());
            }
            frames += 1;
        }
        let rms = if frames == 0 {
            [0.0; 2]
        } else {
            sum_sq.map(|s| (s / frames as f64).sqrt() as f32)
        };
        Self { rms, peak }
    }
}

impl std::fmt::Display for ChannelStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "L RMS {:.1} dB, Peak {:.1} dB | R RMS {:.1} dB, Peak {:.1} dB",
            linear_to_db(self.rms[0]),
            linear_to_db(self.peak[0]),
            linear_to_db(self.rms[1]),
            linear_to_db(self.peak[1])
        )
    }
}

fn linear_to_db(linear: f32) -> f32 {
    if linear <= 0.0 {
        -120.0
    } else {
        20.0 * linear.log10()
    }
}
