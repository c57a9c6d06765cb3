//! Integration tests for the `sway` binary.

use std::path::Path;
use std::process::{Command, Output};

use sway_config::Preset;
use sway_io::{read_wav_info, read_wav_stereo, write_wav_stereo};
use tempfile::TempDir;

/// The `sway` binary with its user preset directory inside `home`.
fn sway_bin(home: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_sway"));
    cmd.env("XDG_CONFIG_HOME", home).env("RUST_LOG", "warn");
    cmd
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn write_tone(path: &Path, frames: usize) {
    let samples: Vec<f32> = (0..frames)
        .flat_map(|i| {
            let s = (i as f32 * 0.05).sin() * 0.5;
            [s, s]
        })
        .collect();
    write_wav_stereo(path, &samples, 44100, 16).unwrap();
}

// ---------------------------------------------------------------------------
// `sway params`
// ---------------------------------------------------------------------------

#[test]
fn params_lists_all_four() {
    let home = TempDir::new().unwrap();
    let output = sway_bin(home.path()).arg("params").output().unwrap();
    assert!(output.status.success());

    let text = stdout(&output);
    for key in ["pan_period_unit", "pan_period", "pan_smoothing", "pan_width"] {
        assert!(text.contains(key), "missing '{key}' in:\n{text}");
    }
    assert!(text.contains("3000"));
    assert!(text.contains("Time | Beats"));
    assert!(text.contains("Step"));
    assert!(text.contains("0.01"));
}

#[test]
fn params_beats_table() {
    let home = TempDir::new().unwrap();
    let output = sway_bin(home.path()).args(["params", "--beats"]).output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("1/8"));
    assert!(text.contains("64"));
}

// ---------------------------------------------------------------------------
// `sway process`
// ---------------------------------------------------------------------------

#[test]
fn process_writes_panned_stereo() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let out = dir.path().join("out.wav");
    write_tone(&input, 6000);

    let output = sway_bin(dir.path())
        .arg("process")
        .arg(&input)
        .arg(&out)
        .args(["--period", "0.01", "--width", "1.0", "--bit-depth", "24"])
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let text = stdout(&output);
    assert!(text.contains("Stats:"));
    assert!(text.contains("Done!"));

    let info = read_wav_info(&out).unwrap();
    assert_eq!(info.channels, 2);
    assert_eq!(info.bits_per_sample, 24);
    assert_eq!(info.num_frames, 6000);

    let (samples, _) = read_wav_stereo(&out).unwrap();
    assert!(
        samples
            .chunks_exact(2)
            .any(|frame| (frame[0] - frame[1]).abs() > 0.05)
    );
}

#[test]
fn process_with_factory_preset_and_tempo() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    let out = dir.path().join("out.wav");
    write_tone(&input, 2000);

    let output = sway_bin(dir.path())
        .arg("process")
        .arg(&input)
        .arg(&out)
        .args(["--preset", "quarter-note-bounce", "--bpm", "100", "--block-size", "64"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Quarter Note Bounce"));
    assert!(text.contains("100 BPM"));
    assert!(out.exists());
}

#[test]
fn process_rejects_bad_values() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("in.wav");
    write_tone(&input, 100);
    let out = dir.path().join("out.wav");

    for bad in [
        vec!["--smoothing", "0.9"],
        vec!["--bit-depth", "12"],
        vec!["--preset", "no-such-preset"],
        vec!["--param", "depth=0.5"],
        vec!["--beats", "--time"],
    ] {
        let output = sway_bin(dir.path())
            .arg("process")
            .arg(&input)
            .arg(&out)
            .args(&bad)
            .output()
            .unwrap();
        assert!(!output.status.success(), "{bad:?} should fail");
    }
    assert!(!out.exists());
}

#[test]
fn process_missing_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = sway_bin(dir.path())
        .arg("process")
        .arg(dir.path().join("missing.wav"))
        .arg(dir.path().join("out.wav"))
        .output()
        .unwrap();
    assert!(!output.status.success());
}

// ---------------------------------------------------------------------------
// `sway presets`
// ---------------------------------------------------------------------------

#[test]
fn presets_list_shows_factory() {
    let home = TempDir::new().unwrap();
    let output = sway_bin(home.path()).args(["presets", "list"]).output().unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    for name in ["transparent", "ping-pong", "hard-square", "slow-drift"] {
        assert!(text.contains(name), "missing '{name}'");
    }
}

#[test]
fn presets_show_prints_toml() {
    let home = TempDir::new().unwrap();
    let output = sway_bin(home.path())
        .args(["presets", "show", "hard-square"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("name = \"Hard Square\""));
    assert!(text.contains("smoothing = 0.5"));
}

#[test]
fn presets_save_then_use() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("mine.toml");

    let saved = sway_bin(home.path())
        .args(["presets", "save", "Mine"])
        .arg(&path)
        .args(["--preset", "gentle-sweep", "--width", "0.3", "-d", "narrow sweep"])
        .output()
        .unwrap();
    assert!(saved.status.success());
    assert!(path.exists());

    let again = sway_bin(home.path())
        .args(["presets", "save", "Mine"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!again.status.success(), "existing file needs --force");

    let shown = sway_bin(home.path())
        .args(["presets", "show"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(stdout(&shown).contains("name = \"Mine\""));

    let preset = Preset::load(&path).unwrap();
    assert_eq!(preset.pan.width, 0.3);
    assert_eq!(preset.pan.period, 0.2);
    assert_eq!(preset.description.as_deref(), Some("narrow sweep"));
}

#[test]
fn presets_saved_to_user_dir_are_listed() {
    let home = TempDir::new().unwrap();
    let saved = sway_bin(home.path())
        .args(["presets", "save", "desk", "--preset", "ping-pong", "-d", "desk monitors"])
        .output()
        .unwrap();
    assert!(saved.status.success());

    let listed = sway_bin(home.path())
        .args(["presets", "list", "--user"])
        .output()
        .unwrap();
    let text = stdout(&listed);
    assert!(text.contains("desk"), "got:\n{text}");
    assert!(text.contains("desk monitors"));
    assert!(!text.contains("Factory Presets"));
}
