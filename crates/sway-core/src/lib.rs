//! Sway Core - DSP primitives for the sway auto-panner
//!
//! This crate provides the building blocks the auto-pan effect is made of,
//! designed for real-time audio processing with zero allocation in the audio
//! path.
//!
//! # Core Abstractions
//!
//! ## Effect System
//!
//! - [`Effect`] - Object-safe trait for block-based interleaved stereo effects
//! - [`EnableState`] - Host activation signal (disabled / enabling / enabled)
//!
//! ## Ramping
//!
//! - [`RampedValue`] - Rate-limited value for click-free modulation
//!
//! ## Delay Lines
//!
//! - [`InterpolatedDelay`] - Fractional delay with linear interpolation
//!
//! ## Parameters & Tempo
//!
//! - [`ParameterInfo`] / [`ParamDescriptor`] - Runtime parameter discovery
//! - [`GroupFeatures`] - Per-channel beat information supplied by the host
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible. Disable the default `std` feature in
//! your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! sway-core = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod delay;
pub mod effect;
pub mod param_info;
pub mod ramp;
pub mod tempo;

// Re-export main types at crate root
pub use delay::InterpolatedDelay;
pub use effect::{EnableState, Effect};
pub use param_info::{ParamDescriptor, ParamFlags, ParamId, ParameterInfo};
pub use ramp::RampedValue;
pub use tempo::{GroupFeatures, samples_per_beat};
