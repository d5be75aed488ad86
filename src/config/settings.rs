//! Configuration settings for the pigeonhole generator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination file; standard output when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Emit the comment block in front of the problem line
    #[serde(default = "default_comments")]
    pub comments: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub level: LogLevel,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

fn default_comments() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: None,
            comments: default_comments(),
        }
    }
}

impl LogLevel {
    /// Filter string understood by `env_logger`
    pub fn as_filter_str(self) -> &'static str {
        match self {
            LogLevel::Off => "off",
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    /// Raise the level by the number of `-v` flags; never lowers it
    pub fn raised_by(self, verbosity: u8) -> Self {
        let requested = match verbosity {
            0 => return self,
            1 => LogLevel::Info,
            2 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        self.max(requested)
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.output.path {
            if path.is_dir() {
                anyhow::bail!("Output path is a directory: {}", path.display());
            }

            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if !parent.is_dir() {
                    anyhow::bail!("Output directory does not exist: {}", parent.display());
                }
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(ref output) = cli_overrides.output {
            self.output.path = Some(output.clone());
        }
        if cli_overrides.no_comments {
            self.output.comments = false;
        }
        self.logging.level = self.logging.level.raised_by(cli_overrides.verbosity);
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub no_comments: bool,
    pub verbosity: u8,
}
