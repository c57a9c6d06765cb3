//! Preset and parameter validation.
//!
//! The effect itself clamps whatever it is given, so nothing here is needed
//! for safe audio. Validation exists so that a typo in a preset file or on
//! the command line is reported instead of silently clamped.
//!
//! # Example
//!
//! ```rust
//! use sway_config::{parse_param_value, validate_param};
//!
//! assert_eq!(validate_param("width", 0.5).unwrap(), 3);
//! assert!(validate_param("smoothing", 0.9).is_err());
//! assert_eq!(parse_param_value("period_unit", "beats").unwrap(), 1.0);
//! ```

use thiserror::Error;

use sway_core::ParamDescriptor;
use sway_effects::PanSettings;
use sway_effects::params;

use crate::Preset;

/// Lowest sample rate a preset may name.
pub const MIN_SAMPLE_RATE: u32 = 8000;
/// Highest sample rate a preset may name.
pub const MAX_SAMPLE_RATE: u32 = 384_000;
/// Accepted tempo range in BPM.
pub const BPM_RANGE: (f32, f32) = (20.0, 999.0);

/// Validation error types.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// No auto-pan parameter by that name.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// Parameter value out of range.
    #[error("parameter '{param}' value {value} out of range [{min}, {max}]")]
    OutOfRange {
        /// Name of the parameter.
        param: String,
        /// The offending value.
        value: f32,
        /// Minimum allowed value.
        min: f32,
        /// Maximum allowed value.
        max: f32,
    },

    /// Value text that is neither a number nor a label.
    #[error("invalid format for parameter '{param}': {reason}")]
    InvalidFormat {
        /// Name of the parameter.
        param: String,
        /// Description of the format error.
        reason: String,
    },

    /// Sample rate outside the supported range.
    #[error("sample rate {0} Hz out of range [{min}, {max}]", min = MIN_SAMPLE_RATE, max = MAX_SAMPLE_RATE)]
    SampleRate(u32),

    /// Tempo outside the supported range.
    #[error("tempo {0} BPM out of range [{min}, {max}]", min = BPM_RANGE.0, max = BPM_RANGE.1)]
    Tempo(f32),

    /// Preset without a name.
    #[error("preset name is empty")]
    EmptyName,

    /// Multiple validation errors.
    #[error("multiple validation errors: {}", .0.iter().map(|e| e.to_string()).collect::<Vec<_>>().join("; "))]
    Multiple(Vec<ValidationError>),
}

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Look up an auto-pan parameter by name.
///
/// Accepts the display name, short name or string id, case-insensitively,
/// with `-` and spaces treated as `_` (so `"period-unit"`, `"Period Unit"`
/// and `"pan_period_unit"` all match).
pub fn find_param(name: &str) -> Option<(usize, ParamDescriptor)> {
    let wanted = normalize(name);
    params::descriptors().iter().enumerate().find_map(|(index, desc)| {
        let matches = [desc.name, desc.short_name, desc.string_id]
            .iter()
            .any(|candidate| normalize(candidate) == wanted)
            || desc.string_id.strip_prefix("pan_") == Some(wanted.as_str());
        matches.then_some((index, *desc))
    })
}

fn normalize(name: &str) -> String {
    name.trim().to_ascii_lowercase().replace([' ', '-'], "_")
}

/// Check that `value` is in range for the named parameter.
///
/// Returns the parameter index on success.
pub fn validate_param(name: &str, value: f32) -> ValidationResult<usize> {
    let (index, desc) =
        find_param(name).ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
    check_range(desc.string_id, value, &desc)?;
    Ok(index)
}

fn check_range(param: &str, value: f32, desc: &ParamDescriptor) -> ValidationResult<()> {
    if value.is_finite() && value >= desc.min && value <= desc.max {
        Ok(())
    } else {
        Err(ValidationError::OutOfRange {
            param: param.to_string(),
            value,
            min: desc.min,
            max: desc.max,
        })
    }
}

/// Parse command-line or preset text for the named parameter.
///
/// Stepped parameters accept their labels (`"time"`, `"beats"`); every
/// parameter accepts a plain number. The result is range-checked, not
/// clamped.
pub fn parse_param_value(name: &str, text: &str) -> ValidationResult<f32> {
    let (_, desc) =
        find_param(name).ok_or_else(|| ValidationError::UnknownParameter(name.to_string()))?;
    let value = desc
        .parse_value(text)
        .ok_or_else(|| ValidationError::InvalidFormat {
            param: desc.string_id.to_string(),
            reason: if desc.labels.is_empty() {
                format!("'{}' is not a number", text.trim())
            } else {
                format!(
                    "'{}' is not a number or one of {}",
                    text.trim(),
                    desc.labels.join(", ")
                )
            },
        })?;
    check_range(desc.string_id, value, &desc)?;
    Ok(value)
}

/// Check all four parameter values.
pub fn validate_settings(settings: &PanSettings) -> ValidationResult<()> {
    let errors: Vec<_> = params::descriptors()
        .iter()
        .enumerate()
        .filter_map(|(index, desc)| check_range(desc.string_id, settings.get(index), desc).err())
        .collect();
    collect(errors)
}

/// Validate a preset's name, context and parameters.
///
/// Every problem is reported, not just the first.
///
/// # Example
///
/// ```rust
/// use sway_config::{Preset, validate_preset};
///
/// let mut preset = Preset::new("Too Wide");
/// preset.pan.width = 1.5;
/// preset.bpm = Some(0.0);
/// assert!(validate_preset(&preset).is_err());
/// ```
pub fn validate_preset(preset: &Preset) -> ValidationResult<()> {
    let mut errors = Vec::new();

    if preset.name.trim().is_empty() {
        errors.push(ValidationError::EmptyName);
    }
    if !(MIN_SAMPLE_RATE..=MAX_SAMPLE_RATE).contains(&preset.sample_rate) {
        errors.push(ValidationError::SampleRate(preset.sample_rate));
    }
    if let Some(bpm) = preset.bpm
        && !(bpm.is_finite() && bpm >= BPM_RANGE.0 && bpm <= BPM_RANGE.1)
    {
        errors.push(ValidationError::Tempo(bpm));
    }
    match validate_settings(&preset.settings()) {
        Ok(()) => {}
        Err(ValidationError::Multiple(inner)) => errors.extend(inner),
        Err(e) => errors.push(e),
    }

    collect(errors)
}

fn collect(mut errors: Vec<ValidationError>) -> ValidationResult<()> {
    match errors.len() {
        0 => Ok(()),
        1 => Err(errors.remove(0)),
        _ => Err(ValidationError::Multiple(errors)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_effects::PeriodUnit;

    #[test]
    fn find_param_by_any_spelling() {
        assert_eq!(find_param("width").map(|(i, _)| i), Some(3));
        assert_eq!(find_param("pan_smoothing").map(|(i, _)| i), Some(2));
        assert_eq!(find_param("Smooth").map(|(i, _)| i), Some(2));
        assert_eq!(find_param("period-unit").map(|(i, _)| i), Some(0));
        assert_eq!(find_param("Period Unit").map(|(i, _)| i), Some(0));
        assert_eq!(find_param("unit").map(|(i, _)| i), Some(0));
        assert!(find_param("depth").is_none());
    }

    #[test]
    fn range_checks() {
        assert_eq!(validate_param("period", 0.01), Ok(1));
        assert!(matches!(
            validate_param("period", 0.0),
            Err(ValidationError::OutOfRange { min, .. }) if min == 0.01
        ));
        assert!(validate_param("width", f32::NAN).is_err());
        assert_eq!(
            validate_param("feedback", 0.5),
            Err(ValidationError::UnknownParameter("feedback".to_string()))
        );
    }

    #[test]
    fn parse_labels_and_numbers() {
        assert_eq!(parse_param_value("period_unit", "Beats"), Ok(1.0));
        assert_eq!(parse_param_value("period_unit", "time"), Ok(0.0));
        assert_eq!(parse_param_value("smoothing", " 0.25 "), Ok(0.25));
        assert!(matches!(
            parse_param_value("width", "wide"),
            Err(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            parse_param_value("width", "2"),
            Err(ValidationError::OutOfRange { .. })
        ));
        let err = parse_param_value("period_unit", "bars").unwrap_err();
        assert!(err.to_string().contains("Time, Beats"), "got: {err}");
    }

    #[test]
    fn default_preset_is_valid() {
        assert_eq!(validate_preset(&Preset::new("Default")), Ok(()));
    }

    #[test]
    fn single_error_is_not_wrapped() {
        let mut preset = Preset::new("Fast");
        preset.pan.smoothing = 0.6;
        assert!(matches!(
            validate_preset(&preset),
            Err(ValidationError::OutOfRange { ref param, .. }) if param == "pan_smoothing"
        ));
    }

    #[test]
    fn all_errors_reported() {
        let mut preset = Preset::new("  ").with_sample_rate(1000).with_bpm(5000.0);
        preset.pan.width = -0.5;
        preset.pan.period = 4.0;
        let Err(ValidationError::Multiple(errors)) = validate_preset(&preset) else {
            panic!("expected multiple errors");
        };
        assert_eq!(errors.len(), 5);
        assert!(errors.contains(&ValidationError::EmptyName));
        assert!(errors.contains(&ValidationError::SampleRate(1000)));
        assert!(errors.contains(&ValidationError::Tempo(5000.0)));
    }

    #[test]
    fn settings_validation() {
        let settings = PanSettings {
            period_unit: PeriodUnit::Beats,
            period: 1.0,
            smoothing: 0.5,
            width: 1.0,
        };
        assert_eq!(validate_settings(&settings), Ok(()));
    }
}
