//! Error types for preset and configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading, saving or checking presets.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// File that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// No factory preset, file or user preset by that name
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// A parameter given by name or value could not be used
    #[error("invalid parameter '{param}': {reason}")]
    InvalidParameter {
        /// Parameter name as given.
        param: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Preset values failed validation
    #[error("validation failed: {0}")]
    Validation(#[from] crate::validation::ValidationError),
}

impl ConfigError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::CreateDir {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter(param: impl Into<String>, reason: impl Into<String>) -> Self {
        ConfigError::InvalidParameter {
            param: param.into(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;
    use std::path::Path;

    fn io_err() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied")
    }

    #[test]
    fn io_variants_keep_path_and_source() {
        let read = ConfigError::read_file("/presets/a.toml", io_err());
        assert!(matches!(read, ConfigError::ReadFile { ref path, .. } if path == Path::new("/presets/a.toml")));
        assert!(read.source().is_some());
        assert!(read.to_string().contains("failed to read file '/presets/a.toml'"));

        let write = ConfigError::write_file("/out.toml", io_err());
        assert!(write.source().is_some());
        assert!(write.to_string().starts_with("failed to write file"));

        let dir = ConfigError::create_dir("/presets", io_err());
        assert!(dir.source().is_some());
        assert!(dir.to_string().contains("failed to create directory '/presets'"));
    }

    #[test]
    fn preset_not_found_display() {
        let err = ConfigError::PresetNotFound("wobble".to_string());
        assert_eq!(err.to_string(), "preset not found: wobble");
        assert!(err.source().is_none());
    }

    #[test]
    fn invalid_parameter_display() {
        let err = ConfigError::invalid_parameter("width", "not a number");
        assert_eq!(err.to_string(), "invalid parameter 'width': not a number");
        assert!(err.source().is_none());
    }

    #[test]
    fn toml_errors_convert() {
        let parse: Result<toml::Value, _> = toml::from_str("name = ");
        let err: ConfigError = parse.map_err(ConfigError::from).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
        assert!(err.to_string().starts_with("failed to parse TOML"));
    }
}
