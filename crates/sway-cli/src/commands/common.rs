//! Preset loading and parameter overrides shared by `process` and `presets save`.

use anyhow::Context;
use clap::Args;
use sway_config::{Preset, parse_param_value, resolve_preset, validate_param, validate_preset};
use sway_effects::{PeriodUnit, params};

/// Auto-pan parameter flags. Each one overrides the preset value.
#[derive(Args, Debug, Default)]
pub struct PanArgs {
    /// Preset name (factory or user) or path to a preset file
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Period knob, 0.01 - 1.0 (x25 seconds, or a beat step with --beats)
    #[arg(long)]
    pub period: Option<f32>,

    /// Dwell at each side, 0.0 - 0.5
    #[arg(long)]
    pub smoothing: Option<f32>,

    /// Pan depth, 0.0 - 1.0
    #[arg(long)]
    pub width: Option<f32>,

    /// Lock the period to the tempo
    #[arg(long, conflicts_with = "time")]
    pub beats: bool,

    /// Free-running period in seconds
    #[arg(long)]
    pub time: bool,

    /// Tempo in BPM for beat-synced periods
    #[arg(long)]
    pub bpm: Option<f32>,

    /// Any parameter by name (e.g., "period_unit=beats", "pan_width=0.8")
    #[arg(long = "param", value_parser = parse_key_val, number_of_values = 1)]
    pub params: Vec<(String, String)>,
}

impl PanArgs {
    /// Load the selected preset (or defaults) and apply every override.
    ///
    /// The result is validated; out-of-range values are errors, not clamped.
    pub fn build_preset(&self) -> anyhow::Result<Preset> {
        let mut preset = match &self.preset {
            Some(name) => load_preset(name)?,
            None => Preset::new("Default"),
        };
        self.apply(&mut preset)?;
        validate_preset(&preset).context("invalid auto-pan settings")?;
        Ok(preset)
    }

    fn apply(&self, preset: &mut Preset) -> anyhow::Result<()> {
        let mut settings = preset.settings();

        for (name, text) in &self.params {
            let value = parse_param_value(name, text)
                .with_context(|| format!("--param {name}={text}"))?;
            let index = validate_param(name, value)?;
            settings.set(index, value);
        }
        for (index, value) in [
            (params::PERIOD, self.period),
            (params::SMOOTHING, self.smoothing),
            (params::WIDTH, self.width),
        ] {
            if let Some(value) = value {
                let name = params::descriptors()[index].string_id;
                validate_param(name, value)?;
                settings.set(index, value);
            }
        }
        if self.beats {
            settings.period_unit = PeriodUnit::Beats;
        } else if self.time {
            settings.period_unit = PeriodUnit::Time;
        }

        *preset = preset.clone().with_settings(settings);
        if let Some(bpm) = self.bpm {
            preset.bpm = Some(bpm);
        }
        Ok(())
    }
}

/// Parse a `key=value` string for clap's `value_parser`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .ok_or_else(|| format!("invalid parameter format: '{s}' (expected key=value)"))
}

/// Load a preset by factory name, user preset name or file path.
pub fn load_preset(name: &str) -> anyhow::Result<Preset> {
    resolve_preset(name).with_context(|| {
        format!("could not load preset '{name}' (see 'sway presets list')")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_val_parsing() {
        assert_eq!(
            parse_key_val("width = 0.5"),
            Ok(("width".to_string(), "0.5".to_string()))
        );
        assert!(parse_key_val("width").is_err());
    }

    #[test]
    fn flags_override_preset() {
        let args = PanArgs {
            preset: Some("ping-pong".to_string()),
            width: Some(0.25),
            beats: true,
            bpm: Some(90.0),
            ..PanArgs::default()
        };
        let preset = args.build_preset().unwrap();
        assert_eq!(preset.name, "Ping Pong");
        assert_eq!(preset.pan.width, 0.25);
        assert_eq!(preset.pan.smoothing, 0.35);
        assert_eq!(preset.pan.period_unit, PeriodUnit::Beats);
        assert_eq!(preset.bpm, Some(90.0));
    }

    #[test]
    fn named_params_apply_labels() {
        let args = PanArgs {
            params: vec![
                ("period_unit".to_string(), "beats".to_string()),
                ("pan_period".to_string(), "0.5".to_string()),
            ],
            ..PanArgs::default()
        };
        let preset = args.build_preset().unwrap();
        assert_eq!(preset.pan.period_unit, PeriodUnit::Beats);
        assert_eq!(preset.pan.period, 0.5);
    }

    #[test]
    fn out_of_range_is_an_error() {
        let args = PanArgs {
            smoothing: Some(0.8),
            ..PanArgs::default()
        };
        assert!(args.build_preset().is_err());

        let args = PanArgs {
            bpm: Some(2.0),
            ..PanArgs::default()
        };
        assert!(args.build_preset().is_err());
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = load_preset("no-such-preset-here").unwrap_err();
        assert!(format!("{err:#}").contains("preset not found"));
    }
}
