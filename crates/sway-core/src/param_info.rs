//! Parameter introspection for discoverable effect parameters.
//!
//! This module provides the [`ParameterInfo`] trait and supporting types that
//! let a host (a CLI, a preset loader, a plugin wrapper) discover and
//! manipulate an effect's parameters at runtime without knowing its concrete
//! type.
//!
//! # Design
//!
//! Parameters are accessed by zero-based index. Each one is described by a
//! [`ParamDescriptor`] carrying display names, range, default, a stable
//! [`ParamId`] for automation and preset persistence, and [`ParamFlags`].
//!
//! # Example
//!
//! ```rust
//! use sway_core::{ParameterInfo, ParamDescriptor, ParamId};
//!
//! struct Balance {
//!     amount: f32,
//! }
//!
//! impl ParameterInfo for Balance {
//!     fn param_count(&self) -> usize { 1 }
//!
//!     fn param_info(&self, index: usize) -> Option<ParamDescriptor> {
//!         match index {
//!             0 => Some(ParamDescriptor::continuous("Amount", "Amount", 0.0, 1.0, 0.5)
//!                 .with_id(ParamId(100), "bal_amount")),
//!             _ => None,
//!         }
//!     }
//!
//!     fn get_param(&self, index: usize) -> f32 {
//!         match index {
//!             0 => self.amount,
//!             _ => 0.0,
//!         }
//!     }
//!
//!     fn set_param(&mut self, index: usize, value: f32) {
//!         if let Some(desc) = self.param_info(index) {
//!             self.amount = desc.clamp(value);
//!         }
//!     }
//! }
//! ```

#[cfg(not(feature = "std"))]
use alloc::{format, string::String};

/// Stable parameter identifier that survives reordering.
///
/// Once assigned, a `ParamId` must never change for a given parameter: it is
/// what presets and host automation key on.
///
/// # Convention
///
/// Each effect gets a base ID; params are sequential from there
/// (auto-pan: 3000, 3001, 3002, 3003).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamId(pub u32);

/// Parameter capability flags for host communication.
///
/// Use [`union`](Self::union) to combine.
///
/// ```rust
/// use sway_core::ParamFlags;
///
/// let flags = ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED);
/// assert!(flags.contains(ParamFlags::STEPPED));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags(u8);

impl ParamFlags {
    /// No flags set.
    pub const NONE: Self = Self(0);
    /// Host can automate this parameter (default for all params).
    pub const AUTOMATABLE: Self = Self(1 << 0);
    /// Parameter has discrete steps (enum-like, integer values).
    pub const STEPPED: Self = Self(1 << 1);

    /// Returns `true` if all bits in `other` are set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns the union of two flag sets.
    #[inline]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

/// Trait for effects that expose introspectable parameters.
///
/// Indices must be stable for the lifetime of the effect instance; valid
/// indices are `0..param_count()`.
pub trait ParameterInfo {
    /// Returns the number of parameters this effect exposes.
    fn param_count(&self) -> usize;

    /// Returns the descriptor for the parameter at `index`, or `None` when
    /// out of range.
    fn param_info(&self, index: usize) -> Option<ParamDescriptor>;

    /// Gets the current value of the parameter at `index`.
    ///
    /// Returns `0.0` for out-of-range indices.
    fn get_param(&self, index: usize) -> f32;

    /// Sets the parameter at `index`, clamped to its descriptor range.
    ///
    /// Out-of-range indices are ignored.
    fn set_param(&mut self, index: usize, value: f32);

    /// Find a parameter index by name (case-insensitive).
    ///
    /// Matches against [`ParamDescriptor::name`],
    /// [`ParamDescriptor::short_name`] and [`ParamDescriptor::string_id`].
    fn find_param_by_name(&self, name: &str) -> Option<usize> {
        (0..self.param_count()).find(|&i| {
            self.param_info(i).is_some_and(|desc| {
                desc.name.eq_ignore_ascii_case(name)
                    || desc.short_name.eq_ignore_ascii_case(name)
                    || desc.string_id.eq_ignore_ascii_case(name)
            })
        })
    }
}

/// Describes a single parameter's metadata for display and validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamDescriptor {
    /// Full parameter name for display (e.g., "Period Unit").
    pub name: &'static str,

    /// Short name for narrow displays, max 8 characters.
    pub short_name: &'static str,

    /// Minimum allowed value.
    pub min: f32,

    /// Maximum allowed value.
    pub max: f32,

    /// Default value when the effect is created.
    pub default: f32,

    /// Recommended step increment for encoder-style control.
    pub step: f32,

    /// Stable numeric ID. Default: `ParamId(0)` (unassigned).
    pub id: ParamId,

    /// Human-readable stable ID used as the preset key
    /// (e.g., `"pan_width"`). Default: `""`.
    pub string_id: &'static str,

    /// Capability flags. Default: [`ParamFlags::AUTOMATABLE`].
    pub flags: ParamFlags,

    /// Display labels for stepped parameters, indexed by integer value.
    /// Empty for continuous parameters.
    pub labels: &'static [&'static str],
}

impl ParamDescriptor {
    /// Continuous parameter with custom name and range.
    pub const fn continuous(
        name: &'static str,
        short_name: &'static str,
        min: f32,
        max: f32,
        default: f32,
    ) -> Self {
        Self {
            name,
            short_name,
            min,
            max,
            default,
            step: 0.01,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE,
            labels: &[],
        }
    }

    /// Stepped parameter choosing one of `labels` (values `0..labels.len()`).
    pub const fn choice(
        name: &'static str,
        short_name: &'static str,
        labels: &'static [&'static str],
        default: usize,
    ) -> Self {
        let max = if labels.is_empty() {
            0.0
        } else {
            (labels.len() - 1) as f32
        };
        Self {
            name,
            short_name,
            min: 0.0,
            max,
            default: default as f32,
            step: 1.0,
            id: ParamId(0),
            string_id: "",
            flags: ParamFlags::AUTOMATABLE.union(ParamFlags::STEPPED),
            labels,
        }
    }

    /// Sets the stable parameter ID and string ID.
    ///
    /// ```rust
    /// use sway_core::{ParamDescriptor, ParamId};
    ///
    /// let desc = ParamDescriptor::continuous("Width", "Width", 0.0, 1.0, 0.0)
    ///     .with_id(ParamId(3003), "pan_width");
    /// assert_eq!(desc.id, ParamId(3003));
    /// assert_eq!(desc.string_id, "pan_width");
    /// ```
    pub const fn with_id(mut self, id: ParamId, string_id: &'static str) -> Self {
        self.id = id;
        self.string_id = string_id;
        self
    }

    /// Returns `true` for stepped (discrete) parameters.
    #[inline]
    pub const fn is_stepped(&self) -> bool {
        self.flags.contains(ParamFlags::STEPPED)
    }

    /// Clamps a value to this parameter's range.
    ///
    /// Stepped parameters are also rounded down to an integer step.
    ///
    /// ```rust
    /// use sway_core::ParamDescriptor;
    ///
    /// let desc = ParamDescriptor::continuous("Smoothing", "Smooth", 0.0, 0.5, 0.0);
    /// assert_eq!(desc.clamp(0.7), 0.5);
    /// assert_eq!(desc.clamp(-1.0), 0.0);
    /// ```
    #[inline]
    pub fn clamp(&self, value: f32) -> f32 {
        let clamped = if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        };
        if self.is_stepped() {
            libm::floorf(clamped)
        } else {
            clamped
        }
    }

    /// Format a value for display.
    ///
    /// Stepped parameters with labels show the label; everything else is
    /// printed with two decimals.
    pub fn format_value(&self, value: f32) -> String {
        let index = self.clamp(value) as usize;
        match self.labels.get(index) {
            Some(label) if self.is_stepped() => String::from(*label),
            _ => format!("{:.2}", value),
        }
    }

    /// Parse display text back into a value.
    ///
    /// Accepts a label (case-insensitive) for stepped parameters, or a plain
    /// number. Numbers come back as written; range policy (clamp or reject)
    /// is the caller's.
    ///
    /// ```rust
    /// use sway_core::ParamDescriptor;
    ///
    /// let unit = ParamDescriptor::choice("Period Unit", "Unit", &["Time", "Beats"], 0);
    /// assert_eq!(unit.parse_value("beats"), Some(1.0));
    /// assert_eq!(unit.parse_value("3"), Some(3.0));
    /// assert_eq!(unit.parse_value("sometimes"), None);
    /// ```
    pub fn parse_value(&self, text: &str) -> Option<f32> {
        let text = text.trim();
        match self
            .labels
            .iter()
            .position(|label| label.eq_ignore_ascii_case(text))
        {
            Some(index) => Some(index as f32),
            None => text.parse::<f32>().ok(),
        }
    }
}
