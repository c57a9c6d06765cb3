//! Sway Effects - the stereo auto-pan effect
//!
//! Built on the primitives in sway-core:
//!
//! - [`period`] - Period knob to cycle length, free-running or beat-synced
//! - [`PanShape`] - Sine-to-square pan waveform with plateau dwell
//! - [`AutoPan`] / [`PanState`] - Per-channel block loop with ramped panning
//! - [`AutoPanParams`] - Lock-free parameter store shared with control threads
//! - [`PanDelay`] - Inter-channel delay post-filter behind [`PostFilter`]
//! - [`AutoPanEffect`] - Single-stream glue implementing [`sway_core::Effect`]
//!
//! ## Example
//!
//! ```rust
//! use sway_core::Effect;
//! use sway_effects::{AutoPanEffect, PeriodUnit};
//!
//! let mut pan = AutoPanEffect::new(48000.0);
//! pan.params().set_width(0.8);
//! pan.params().set_smoothing(0.2);
//! pan.params().set_period_unit(PeriodUnit::Beats);
//! pan.set_bpm(Some(128.0));
//!
//! let mut block = vec![0.5_f32; 256];
//! pan.process_block_inplace(&mut block);
//! ```
//!
//! ## Features
//!
//! - `std` (default): link the standard library.
//! - `tracing`: emit one `trace` event per processed block.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod autopan;
pub mod autopan_effect;
pub mod oscillator;
pub mod pan_delay;
pub mod params;
pub mod period;

// Re-export main types at crate root
pub use autopan::{AutoPan, POSITION_RAMPING_THRESHOLD, PanState};
pub use autopan_effect::AutoPanEffect;
pub use oscillator::{PanPoint, PanShape};
pub use pan_delay::{PAN_MAX_DELAY_FRAMES, PanDelay, PostFilter};
pub use params::{AutoPanParams, PanSettings};
pub use period::{PeriodUnit, resolve_period};
