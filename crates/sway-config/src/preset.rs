//! Preset file format and operations.

use serde::{Deserialize, Serialize};
use std::path::Path;

use sway_effects::{AutoPanEffect, AutoPanParams, PanSettings, PeriodUnit};

use crate::error::ConfigError;

/// Auto-pan preset.
///
/// Presets are TOML files holding the four auto-pan parameters plus the
/// context they were made for. Missing fields take the parameter defaults.
///
/// # TOML Format
///
/// ```toml
/// name = "Ping Pong"
/// description = "Fast hard-panned bounce"
/// sample_rate = 48000
/// bpm = 120.0
///
/// [pan]
/// period_unit = "beats"
/// period = 0.4
/// smoothing = 0.35
/// width = 1.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Preset {
    /// Name of the preset.
    pub name: String,

    /// Optional description of the preset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Sample rate hint (defaults to 48000).
    #[serde(default = "default_sample_rate")]
    pub sample_rate: u32,

    /// Tempo used for beat sync when the audio carries none.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<f32>,

    /// Auto-pan parameter values.
    #[serde(default)]
    pub pan: PanConfig,
}

fn default_sample_rate() -> u32 {
    48000
}

/// The `[pan]` table of a preset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PanConfig {
    /// `"time"` or `"beats"`.
    #[serde(with = "period_unit_name")]
    pub period_unit: PeriodUnit,
    /// Period knob, 0.01 - 1.0.
    pub period: f32,
    /// Dwell fraction, 0.0 - 0.5.
    pub smoothing: f32,
    /// Pan depth, 0.0 - 1.0.
    pub width: f32,
}

impl Default for PanConfig {
    fn default() -> Self {
        PanSettings::default().into()
    }
}

impl From<PanSettings> for PanConfig {
    fn from(settings: PanSettings) -> Self {
        Self {
            period_unit: settings.period_unit,
            period: settings.period,
            smoothing: settings.smoothing,
            width: settings.width,
        }
    }
}

impl From<PanConfig> for PanSettings {
    fn from(config: PanConfig) -> Self {
        Self {
            period_unit: config.period_unit,
            period: config.period,
            smoothing: config.smoothing,
            width: config.width,
        }
    }
}

/// Serde adapter writing [`PeriodUnit`] as `"time"` / `"beats"`.
mod period_unit_name {
    use serde::{Deserialize, Deserializer, Serializer, de::Error};
    use sway_effects::PeriodUnit;

    #[allow(clippy::trivially_copy_pass_by_ref)]
    pub fn serialize<S: Serializer>(unit: &PeriodUnit, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(match unit {
            PeriodUnit::Time => "time",
            PeriodUnit::Beats => "beats",
        })
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PeriodUnit, D::Error> {
        let name = String::deserialize(deserializer)?;
        match name.to_ascii_lowercase().as_str() {
            "time" => Ok(PeriodUnit::Time),
            "beats" | "beat" => Ok(PeriodUnit::Beats),
            other => Err(D::Error::custom(format!(
                "unknown period unit '{other}', expected \"time\" or \"beats\""
            ))),
        }
    }
}

impl Preset {
    /// Create a preset with default parameters.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            sample_rate: default_sample_rate(),
            bpm: None,
            pan: PanConfig::default(),
        }
    }

    /// Capture the current values of a parameter store.
    pub fn from_params(name: impl Into<String>, params: &AutoPanParams) -> Self {
        Self::new(name).with_settings(params.snapshot())
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the sample rate hint.
    pub fn with_sample_rate(mut self, sample_rate: u32) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    /// Set the tempo.
    pub fn with_bpm(mut self, bpm: f32) -> Self {
        self.bpm = Some(bpm);
        self
    }

    /// Set all four parameters.
    pub fn with_settings(mut self, settings: PanSettings) -> Self {
        self.pan = settings.into();
        self
    }

    /// Parameter values as the effect sees them.
    pub fn settings(&self) -> PanSettings {
        self.pan.into()
    }

    /// Write this preset's parameters into a store.
    pub fn apply(&self, params: &AutoPanParams) {
        params.store(&self.settings());
    }

    /// Build an enabled auto-pan configured from this preset.
    ///
    /// The preset's tempo, if any, provides the beat length.
    pub fn build_effect(&self, sample_rate: f32) -> AutoPanEffect {
        let mut effect = AutoPanEffect::with_settings(sample_rate, &self.settings());
        effect.set_bpm(self.bpm);
        effect
    }

    /// Load a preset from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigError::read_file(path, e))?;
        Self::from_toml(&content)
    }

    /// Load a preset from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Save the preset to a TOML file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::create_dir(parent, e))?;
        }
        let content = self.to_toml()?;
        std::fs::write(path, content).map_err(|e| ConfigError::write_file(path, e))
    }

    /// Convert the preset to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

impl Default for Preset {
    fn default() -> Self {
        Self::new("Untitled")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sway_core::Effect;

    #[test]
    fn new_preset_is_transparent() {
        let preset = Preset::new("Test");
        assert_eq!(preset.name, "Test");
        assert_eq!(preset.sample_rate, 48000);
        assert!(preset.bpm.is_none());
        assert_eq!(preset.settings(), PanSettings::default());
    }

    #[test]
    fn from_toml_reads_pan_table() {
        let toml = r#"
name = "Bounce"
description = "Beat bounce"
sample_rate = 44100
bpm = 128.0

[pan]
period_unit = "beats"
period = 0.4
smoothing = 0.25
width = 0.8
"#;
        let preset = Preset::from_toml(toml).unwrap();
        assert_eq!(preset.description.as_deref(), Some("Beat bounce"));
        assert_eq!(preset.sample_rate, 44100);
        assert_eq!(preset.bpm, Some(128.0));
        assert_eq!(preset.pan.period_unit, PeriodUnit::Beats);
        assert_eq!(preset.pan.period, 0.4);
        assert_eq!(preset.pan.smoothing, 0.25);
        assert_eq!(preset.pan.width, 0.8);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let preset = Preset::from_toml("name = \"Minimal\"\n").unwrap();
        assert_eq!(preset.sample_rate, 48000);
        assert_eq!(preset.pan, PanConfig::default());

        let partial = Preset::from_toml("name = \"Half\"\n[pan]\nwidth = 0.5\n").unwrap();
        assert_eq!(partial.pan.width, 0.5);
        assert_eq!(partial.pan.period, 1.0);
        assert_eq!(partial.pan.period_unit, PeriodUnit::Time);
    }

    #[test]
    fn unknown_unit_is_rejected() {
        let err = Preset::from_toml("name = \"X\"\n[pan]\nperiod_unit = \"bars\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().contains("unknown period unit"));
    }

    #[test]
    fn to_toml_round_trip() {
        let original = Preset::new("Round Trip")
            .with_description("check")
            .with_bpm(90.0)
            .with_settings(PanSettings {
                period_unit: PeriodUnit::Beats,
                period: 0.6,
                smoothing: 0.1,
                width: 0.9,
            });
        let text = original.to_toml().unwrap();
        assert!(text.contains("period_unit = \"beats\""));
        assert!(text.contains("[pan]"));
        assert_eq!(Preset::from_toml(&text).unwrap(), original);
    }

    #[test]
    fn apply_and_capture_params() {
        let preset = Preset::new("A").with_settings(PanSettings {
            period_unit: PeriodUnit::Time,
            period: 0.3,
            smoothing: 0.2,
            width: 0.7,
        });
        let params = AutoPanParams::new();
        preset.apply(&params);
        assert_eq!(params.width(), 0.7);

        let captured = Preset::from_params("B", &params);
        assert_eq!(captured.pan, preset.pan);
    }

    #[test]
    fn build_effect_carries_tempo() {
        let preset = Preset::new("Beat").with_bpm(120.0);
        let mut effect = preset.build_effect(44100.0);
        assert_eq!(effect.features().beat_length, Some(22050.0));
        assert!(effect.is_enabled());
        let mut block = [0.5; 64];
        effect.process_block_inplace(&mut block);
        assert_eq!(effect.state().phase(), 32);
    }
}
