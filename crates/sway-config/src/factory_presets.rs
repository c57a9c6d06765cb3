//! Factory presets compiled into the library.
//!
//! Always available without any files on disk; they double as starting
//! points for user presets (`sway presets save <name> <path>`).

use crate::Preset;

/// Identifiers of the factory presets, in display order.
pub static FACTORY_PRESET_NAMES: &[&str] = &[
    "transparent",
    "gentle-sweep",
    "ping-pong",
    "hard-square",
    "quarter-note-bounce",
    "slow-drift",
];

static FACTORY_PRESETS_TOML: &[(&str, &str)] = &[
    ("transparent", TRANSPARENT),
    ("gentle-sweep", GENTLE_SWEEP),
    ("ping-pong", PING_PONG),
    ("hard-square", HARD_SQUARE),
    ("quarter-note-bounce", QUARTER_NOTE_BOUNCE),
    ("slow-drift", SLOW_DRIFT),
];

const TRANSPARENT: &str = r#"
name = "Transparent"
description = "Zero width: the image stays centred"

[pan]
period_unit = "time"
period = 1.0
smoothing = 0.0
width = 0.0
"#;

/// 5 second sine sweep, moderate depth.
const GENTLE_SWEEP: &str = r#"
name = "Gentle Sweep"
description = "Slow sine sweep across the middle of the stereo field"

[pan]
period_unit = "time"
period = 0.2
smoothing = 0.0
width = 0.6
"#;

/// 1 second cycle with short dwells at each side.
const PING_PONG: &str = r#"
name = "Ping Pong"
description = "Fast full-width bounce that rests briefly at each side"

[pan]
period_unit = "time"
period = 0.04
smoothing = 0.35
width = 1.0
"#;

/// 2 second square wave.
const HARD_SQUARE: &str = r#"
name = "Hard Square"
description = "Jumps between hard left and hard right, ramped to avoid clicks"

[pan]
period_unit = "time"
period = 0.08
smoothing = 0.5
width = 1.0
"#;

/// One beat per cycle at 120 BPM.
const QUARTER_NOTE_BOUNCE: &str = r#"
name = "Quarter Note Bounce"
description = "One left-right cycle per beat, synced to the tempo"
bpm = 120.0

[pan]
period_unit = "beats"
period = 0.4
smoothing = 0.25
width = 0.8
"#;

/// 50 second drift, barely noticeable.
const SLOW_DRIFT: &str = r#"
name = "Slow Drift"
description = "Very slow, narrow movement for pads and ambience"

[pan]
period_unit = "time"
period = 1.0
smoothing = 0.1
width = 0.4
"#;

/// All factory presets, in display order.
pub fn factory_presets() -> Vec<Preset> {
    FACTORY_PRESETS_TOML
        .iter()
        .filter_map(|(_, toml)| Preset::from_toml(toml).ok())
        .collect()
}

/// Get a factory preset by identifier or display name (case-insensitive).
///
/// # Example
///
/// ```rust
/// use sway_config::get_factory_preset;
///
/// let preset = get_factory_preset("ping-pong").unwrap();
/// assert_eq!(preset.name, "Ping Pong");
/// assert!(get_factory_preset("Ping Pong").is_some());
/// ```
pub fn get_factory_preset(name: &str) -> Option<Preset> {
    if let Some((_, toml)) = FACTORY_PRESETS_TOML
        .iter()
        .find(|(id, _)| id.eq_ignore_ascii_case(name))
    {
        return Preset::from_toml(toml).ok();
    }
    factory_presets()
        .into_iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Returns `true` if `name` names a factory preset.
pub fn is_factory_preset(name: &str) -> bool {
    get_factory_preset(name).is_some()
}
