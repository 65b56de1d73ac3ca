//! Global shiftreport configuration.
//!
//! The config file only controls where the calendar exports live. What gets
//! extracted (source files, window, exclusion rules) is fixed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ShiftReportError, ShiftReportResult};

static DEFAULT_EXPORT_DIR: &str = "migrate";
static DEFAULT_FALLBACK_DIR: &str = "~/Documents/GitHub/ShiftPlanner/migrate";

fn default_export_dir() -> PathBuf {
    PathBuf::from(DEFAULT_EXPORT_DIR)
}

fn default_fallback_dir() -> PathBuf {
    PathBuf::from(DEFAULT_FALLBACK_DIR)
}

/// Configuration at ~/.config/shiftreport/config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ShiftReportConfig {
    /// Primary directory holding the .ics export files, relative to the
    /// working directory unless absolute.
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Secondary directory tried when a file is absent from `export_dir`.
    #[serde(default = "default_fallback_dir")]
    pub fallback_dir: PathBuf,
}

impl Default for ShiftReportConfig {
    fn default() -> Self {
        ShiftReportConfig {
            export_dir: default_export_dir(),
            fallback_dir: default_fallback_dir(),
        }
    }
}

impl ShiftReportConfig {
    pub fn config_path() -> ShiftReportResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ShiftReportError::Config("Could not determine config directory".into()))?
            .join("shiftreport");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from ~/.config/shiftreport/config.toml, creating a
    /// commented default file on first run.
    pub fn load() -> ShiftReportResult<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            Self::create_default_config(&path)?;
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: ShiftReportConfig =
            toml::from_str(&content).map_err(|e| ShiftReportError::Config(e.to_string()))?;

        Ok(config)
    }

    /// The export directory with `~` expanded.
    pub fn export_path(&self) -> PathBuf {
        expand(&self.export_dir)
    }

    /// The fallback directory with `~` expanded.
    pub fn fallback_path(&self) -> PathBuf {
        expand(&self.fallback_dir)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> ShiftReportResult<()> {
        let contents = format!(
            "\
# shiftreport configuration

# Where the calendar exports live:
# export_dir = \"{DEFAULT_EXPORT_DIR}\"

# Tried when a file is missing from export_dir:
# fallback_dir = \"{DEFAULT_FALLBACK_DIR}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ShiftReportError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| ShiftReportError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

fn expand(path: &Path) -> PathBuf {
    let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
    PathBuf::from(expanded)
}
