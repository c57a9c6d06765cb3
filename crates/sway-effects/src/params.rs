//! Auto-pan parameters: descriptors, a per-block snapshot and a lock-free
//! shared store.
//!
//! A control thread (UI, CLI, preset loader) writes [`AutoPanParams`]; the
//! audio thread reads all four values once at the start of each block into a
//! [`PanSettings`] snapshot and holds it for the whole sample loop.
//!
//! Values live in `AtomicU32` cells holding `f32` bits, loaded and stored
//! with relaxed ordering. A block may observe one parameter before and
//! another after a concurrent update; that only affects one block's shape.

use core::sync::atomic::{AtomicU32, Ordering};

use sway_core::{ParamDescriptor, ParamId};

use crate::oscillator::PanShape;
use crate::period::PeriodUnit;

/// Number of auto-pan parameters.
pub const PARAM_COUNT: usize = 4;

/// Index of the period unit parameter.
pub const PERIOD_UNIT: usize = 0;
/// Index of the period parameter.
pub const PERIOD: usize = 1;
/// Index of the smoothing parameter.
pub const SMOOTHING: usize = 2;
/// Index of the width parameter.
pub const WIDTH: usize = 3;

/// Lowest accepted period knob value.
pub const PERIOD_MIN: f32 = 0.01;
/// Highest period knob value. Beat steps are measured against it.
pub const PERIOD_MAX: f32 = 1.0;
/// Highest smoothing: the whole half cycle is dwell.
pub const SMOOTHING_MAX: f32 = 0.5;

const DESCRIPTORS: [ParamDescriptor; PARAM_COUNT] = [
    ParamDescriptor::choice("Period Unit", "Unit", PeriodUnit::LABELS, 0)
        .with_id(ParamId(3000), "pan_period_unit"),
    ParamDescriptor::continuous("Period", "Period", PERIOD_MIN, PERIOD_MAX, 1.0)
        .with_id(ParamId(3001), "pan_period"),
    ParamDescriptor::continuous("Smoothing", "Smooth", 0.0, SMOOTHING_MAX, 0.0)
        .with_id(ParamId(3002), "pan_smoothing"),
    ParamDescriptor::continuous("Width", "Width", 0.0, 1.0, 0.0)
        .with_id(ParamId(3003), "pan_width"),
];

/// Descriptor of the auto-pan parameter at `index`.
pub fn descriptor(index: usize) -> Option<ParamDescriptor> {
    DESCRIPTORS.get(index).copied()
}

/// All auto-pan parameter descriptors, in index order.
pub fn descriptors() -> &'static [ParamDescriptor] {
    &DESCRIPTORS
}

/// Immutable parameter values for one block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanSettings {
    /// How `period` is interpreted.
    pub period_unit: PeriodUnit,
    /// Period knob, `[0.01, 1.0]`.
    pub period: f32,
    /// Dwell fraction of each half cycle, `[0.0, 0.5]`.
    pub smoothing: f32,
    /// Pan depth, `[0.0, 1.0]`. Zero keeps the signal centred.
    pub width: f32,
}

impl Default for PanSettings {
    fn default() -> Self {
        Self {
            period_unit: PeriodUnit::Time,
            period: DESCRIPTORS[PERIOD].default,
            smoothing: DESCRIPTORS[SMOOTHING].default,
            width: DESCRIPTORS[WIDTH].default,
        }
    }
}

impl PanSettings {
    /// Value of the parameter at `index`, `0.0` if out of range.
    pub fn get(&self, index: usize) -> f32 {
        match index {
            PERIOD_UNIT => self.period_unit.index() as f32,
            PERIOD => self.period,
            SMOOTHING => self.smoothing,
            WIDTH => self.width,
            _ => 0.0,
        }
    }

    /// Set the parameter at `index`, clamped to its range.
    pub fn set(&mut self, index: usize, value: f32) {
        let Some(desc) = descriptor(index) else {
            return;
        };
        let value = desc.clamp(value);
        match index {
            PERIOD_UNIT => self.period_unit = PeriodUnit::from_index(value as usize),
            PERIOD => self.period = value,
            SMOOTHING => self.smoothing = value,
            WIDTH => self.width = value,
            _ => {}
        }
    }

    /// Copy with every value clamped to its range.
    pub fn clamped(self) -> Self {
        let mut out = Self::default();
        for index in 0..PARAM_COUNT {
            out.set(index, self.get(index));
        }
        out
    }

    /// Waveform constants for these settings.
    pub fn shape(&self) -> PanShape {
        PanShape::new(self.smoothing, self.width)
    }
}

/// Lock-free parameter store shared between control and audio threads.
///
/// Wrap in an `Arc` to share. Writers clamp through the descriptors, so a
/// reader never sees an out-of-range value.
///
/// ```rust
/// use sway_effects::{AutoPanParams, PeriodUnit};
///
/// let params = AutoPanParams::new();
/// params.set_width(0.8);
/// params.set_period_unit(PeriodUnit::Beats);
///
/// let snapshot = params.snapshot();
/// assert_eq!(snapshot.width, 0.8);
/// assert_eq!(snapshot.period_unit, PeriodUnit::Beats);
/// ```
#[derive(Debug)]
pub struct AutoPanParams {
    values: [AtomicU32; PARAM_COUNT],
}

impl AutoPanParams {
    /// Store holding the default values.
    pub fn new() -> Self {
        Self::from_settings(&PanSettings::default())
    }

    /// Store initialised from `settings` (clamped).
    pub fn from_settings(settings: &PanSettings) -> Self {
        let settings = settings.clamped();
        Self {
            values: core::array::from_fn(|i| AtomicU32::new(settings.get(i).to_bits())),
        }
    }

    /// Current value of the parameter at `index`, `0.0` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> f32 {
        self.values
            .get(index)
            .map_or(0.0, |cell| f32::from_bits(cell.load(Ordering::Relaxed)))
    }

    /// Store `value` (clamped) for the parameter at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set(&self, index: usize, value: f32) {
        if let (Some(cell), Some(desc)) = (self.values.get(index), descriptor(index)) {
            cell.store(desc.clamp(value).to_bits(), Ordering::Relaxed);
        }
    }

    /// Read all four values at once.
    pub fn snapshot(&self) -> PanSettings {
        PanSettings {
            period_unit: PeriodUnit::from_index(self.get(PERIOD_UNIT) as usize),
            period: self.get(PERIOD),
            smoothing: self.get(SMOOTHING),
            width: self.get(WIDTH),
        }
    }

    /// Store every value from `settings`.
    pub fn store(&self, settings: &PanSettings) {
        for index in 0..PARAM_COUNT {
            self.set(index, settings.get(index));
        }
    }

    /// Current period unit.
    pub fn period_unit(&self) -> PeriodUnit {
        PeriodUnit::from_index(self.get(PERIOD_UNIT) as usize)
    }

    /// Set the period unit.
    pub fn set_period_unit(&self, unit: PeriodUnit) {
        self.set(PERIOD_UNIT, unit.index() as f32);
    }

    /// Current period knob value.
    pub fn period(&self) -> f32 {
        self.get(PERIOD)
    }

    /// Set the period knob (0.01 - 1.0).
    pub fn set_period(&self, period: f32) {
        self.set(PERIOD, period);
    }

    /// Maximum of the period knob.
    pub fn period_max(&self) -> f32 {
        DESCRIPTORS[PERIOD].max
    }

    /// Current smoothing.
    pub fn smoothing(&self) -> f32 {
        self.get(SMOOTHING)
    }

    /// Set the smoothing (0 - 0.5).
    pub fn set_smoothing(&self, smoothing: f32) {
        self.set(SMOOTHING, smoothing);
    }

    /// Current width.
    pub fn width(&self) -> f32 {
        self.get(WIDTH)
    }

    /// Set the width (0 - 1).
    pub fn set_width(&self, width: f32) {
        self.set(WIDTH, width);
    }
}

impl Default for AutoPanParams {
    fn default() -> Self {
        Self::new()
    }
}
