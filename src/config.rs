// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Startup settings.
//!
//! Settings are read once from an optional `poi-viewer.yaml` placed next to
//! the executable. Every key is optional; missing keys keep their defaults.

use anyhow::{bail, Context, Result};
use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Name of the settings file looked up in the program directory.
pub const SETTINGS_FILE_NAME: &str = "poi-viewer.yaml";

/// Settings controlling where and how clicks are logged and drawn.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Directory for click logs. Relative paths resolve against the
    /// program directory; `None` means the program directory itself.
    pub output_dir: Option<PathBuf>,
    /// chrono format string for the log file stem.
    pub file_name_format: String,
    /// Log file extension, without the dot.
    pub file_extension: String,
    /// Marker radius in image pixels.
    pub marker_radius: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            output_dir: None,
            file_name_format: "%Y-%m-%d_%H-%M-%S".to_string(),
            file_extension: "txt".to_string(),
            marker_radius: 5.0,
        }
    }
}

impl Settings {
    /// Load settings from `dir`, falling back to defaults when no file exists.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let path = dir.join(SETTINGS_FILE_NAME);
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let settings = Self::from_yaml(&yaml)
            .with_context(|| format!("Invalid settings in {}", path.display()))?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse and validate settings from YAML text.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to a map
        let settings: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.file_name_format.is_empty() {
            bail!("file_name_format must not be empty");
        }
        if StrftimeItems::new(&self.file_name_format).any(|item| matches!(item, Item::Error)) {
            bail!("file_name_format is not a valid time format: {:?}", self.file_name_format);
        }
        if self.file_extension.contains(['/', '\\']) {
            bail!("file_extension must not contain path separators");
        }
        if !(self.marker_radius.is_finite() && self.marker_radius > 0.0) {
            bail!("marker_radius must be a positive number, got {}", self.marker_radius);
        }
        Ok(())
    }

    /// Resolve the log output directory against the program directory.
    pub fn resolve_output_dir(&self, program_dir: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => program_dir.join(dir),
            None => program_dir.to_path_buf(),
        }
    }
}

/// Directory containing the running executable.
pub fn program_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    let dir = exe
        .parent()
        .context("Executable path has no parent directory")?
        .to_path_buf();
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(dir.path()).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "file_extension: log\n").unwrap();

        let settings = Settings::load_from(dir.path()).unwrap();
        assert_eq!(settings.file_extension, "log");
        assert_eq!(settings.file_name_format, "%Y-%m-%d_%H-%M-%S");
        assert_eq!(settings.marker_radius, 5.0);
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(Settings::from_yaml("").unwrap(), Settings::default());
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(Settings::from_yaml("marker_radius: -1.0").is_err());
        assert!(Settings::from_yaml("file_name_format: \"%Q\"").is_err());
        assert!(Settings::from_yaml("file_extension: a/b").is_err());
        assert!(Settings::from_yaml("marker_radius: [1]").is_err());
    }

    #[test]
    fn test_resolve_output_dir() {
        let program = Path::new("/opt/poi");
        let mut settings = Settings::default();
        assert_eq!(settings.resolve_output_dir(program), PathBuf::from("/opt/poi"));

        settings.output_dir = Some(PathBuf::from("logs"));
        assert_eq!(settings.resolve_output_dir(program), PathBuf::from("/opt/poi/logs"));

        settings.output_dir = Some(PathBuf::from("/var/poi"));
        assert_eq!(settings.resolve_output_dir(program), PathBuf::from("/var/poi"));
    }
}
