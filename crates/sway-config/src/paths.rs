//! Where presets live on disk.
//!
//! - **User presets**: `<config dir>/sway/presets/` (`~/.config/sway/presets` on Linux)
//! - **System presets**: `/usr/share/sway/presets/` on Linux, the platform data
//!   directory elsewhere
//!
//! [`resolve_preset`] is the single entry point the command line uses: a
//! factory preset name, a path to a TOML file, or the stem of a file in one
//! of the preset directories.
//!
//! ```rust,no_run
//! use sway_config::paths;
//!
//! let preset = paths::resolve_preset("ping-pong").unwrap();
//! println!("{} from {:?}", preset.name, paths::user_presets_dir());
//! ```

use std::path::{Path, PathBuf};

use crate::{ConfigError, Preset, get_factory_preset};

const APP_NAME: &str = "sway";
const PRESETS_SUBDIR: &str = "presets";
const PRESET_EXTENSION: &str = "toml";

/// Per-user presets directory. Falls back to `./sway/presets`.
pub fn user_presets_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(PRESETS_SUBDIR)
}

/// System-wide, usually read-only, presets directory.
pub fn system_presets_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(PRESETS_SUBDIR)
    }
    #[cfg(not(target_os = "linux"))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(PRESETS_SUBDIR)
    }
}

/// Directories searched for presets by name, user first.
pub fn preset_search_dirs() -> [PathBuf; 2] {
    [user_presets_dir(), system_presets_dir()]
}

/// Find a preset file by path or by name.
///
/// An existing file path wins; otherwise `name` (with `.toml` appended if
/// missing) is looked up in the user then system presets directories.
pub fn find_preset_file(name: &str) -> Option<PathBuf> {
    find_preset_file_in(name, &preset_search_dirs())
}

/// [`find_preset_file`] over an explicit list of directories.
pub fn find_preset_file_in(name: &str, dirs: &[PathBuf]) -> Option<PathBuf> {
    let path = Path::new(name);
    if path.is_file() {
        return Some(path.to_path_buf());
    }

    let file_name = if path.extension().is_some_and(|ext| ext == PRESET_EXTENSION) {
        name.to_string()
    } else {
        format!("{name}.{PRESET_EXTENSION}")
    };
    dirs.iter()
        .map(|dir| dir.join(&file_name))
        .find(|candidate| candidate.is_file())
}

/// Load a preset by factory name, file path or preset-directory name.
///
/// # Errors
///
/// [`ConfigError::PresetNotFound`] when nothing matches, or the load error
/// of the file that did match.
pub fn resolve_preset(name: &str) -> Result<Preset, ConfigError> {
    resolve_preset_in(name, &preset_search_dirs())
}

/// [`resolve_preset`] over an explicit list of directories.
pub fn resolve_preset_in(name: &str, dirs: &[PathBuf]) -> Result<Preset, ConfigError> {
    if let Some(preset) = get_factory_preset(name) {
        return Ok(preset);
    }
    let path =
        find_preset_file_in(name, dirs).ok_or_else(|| ConfigError::PresetNotFound(name.into()))?;
    Preset::load(path)
}

/// Create the user presets directory if needed and return it.
pub fn ensure_user_presets_dir() -> Result<PathBuf, ConfigError> {
    let dir = user_presets_dir();
    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| ConfigError::create_dir(&dir, e))?;
    }
    Ok(dir)
}

/// Preset files in the user presets directory, sorted.
pub fn list_user_presets() -> Vec<PathBuf> {
    list_presets_in(&user_presets_dir())
}

/// Preset files in the system presets directory, sorted.
pub fn list_system_presets() -> Vec<PathBuf> {
    list_presets_in(&system_presets_dir())
}

/// `.toml` files directly inside `dir`, sorted by path.
///
/// A missing or unreadable directory yields an empty list.
pub fn list_presets_in(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut presets: Vec<_> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == PRESET_EXTENSION))
        .collect();
    presets.sort();
    presets
}

/// Preset name of a file: its stem.
///
/// ```rust
/// use sway_config::preset_name_from_path;
/// use std::path::Path;
///
/// assert_eq!(
///     preset_name_from_path(Path::new("/presets/wide_bounce.toml")),
///     Some("wide_bounce".to_string())
/// );
/// ```
pub fn preset_name_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map(str::to_string)
}
