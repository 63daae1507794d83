use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::core::visibility::VisibilityPreference;
use crate::error::ClockError;

pub const DEFAULT_SIZE: u32 = 400;
const MIN_SIZE: u32 = 64;

/// Optional JSON config file, every key may be omitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub time: Option<String>,
    pub size: Option<u32>,
    pub visibility: Option<VisibilityPreference>,
    pub animate: Option<bool>,
}

impl FileConfig {
    pub fn from_json(text: &str) -> Result<Self, ClockError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ClockError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }
}

/// Resolved settings for the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockConfig {
    pub time: Option<String>,
    pub size: u32,
    pub visibility: VisibilityPreference,
    pub animate: bool,
    pub emit_events: bool,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            time: None,
            size: DEFAULT_SIZE,
            visibility: VisibilityPreference::Auto,
            animate: true,
            emit_events: false,
        }
    }
}

impl ClockConfig {
    /// Command line flags win over the file, the file wins over defaults
    pub fn resolve(cli: &Cli, file: Option<FileConfig>) -> Result<Self, ClockError> {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        let size = cli.size.or(file.size).unwrap_or(defaults.size);
        if size < MIN_SIZE {
            return Err(ClockError::Config(format!(
                "size {} is below the minimum of {}",
                size, MIN_SIZE
            )));
        }

        Ok(Self {
            time: cli.time.clone().or(file.time).filter(|t| !t.is_empty()),
            size,
            visibility: cli.visibility.or(file.visibility).unwrap_or(defaults.visibility),
            animate: !cli.no_animate && file.animate.unwrap_or(defaults.animate),
            emit_events: cli.emit_events,
        })
    }

    /// Read the file named by `--config`, if any, and merge
    pub fn from_cli(cli: &Cli) -> Result<Self, ClockError> {
        let file = cli.config.as_deref().map(FileConfig::load).transpose()?;
        Self::resolve(cli, file)
    }
}
