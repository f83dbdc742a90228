//! Configuration management

use crate::domain::time_of_day::{self, hhmm};
use crate::domain::Category;
use crate::error::{PlannerError, Result};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "tripplan.toml";

/// Environment variable overriding the config location
pub const CONFIG_ENV_VAR: &str = "TRIPPLAN_CONFIG";

/// Where exports go unless configured otherwise
pub const DEFAULT_EXPORT_FILE: &str = "my_beautiful_itinerary.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub export_file: PathBuf,
    #[serde(with = "hhmm")]
    pub default_time: NaiveTime,
    pub default_category: Category,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_file: PathBuf::from(DEFAULT_EXPORT_FILE),
            default_time: time_of_day::default_time(),
            default_category: Category::default(),
        }
    }
}

impl Config {
    /// Resolve the config file path: explicit path, then TRIPPLAN_CONFIG,
    /// then ./tripplan.toml
    pub fn locate(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        std::env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Load config from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Ok(Config::default());
            }
            Err(e) => return Err(PlannerError::Io(e)),
        };

        toml::from_str(&contents).map_err(|e| {
            PlannerError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Save config to `path`
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;
        Ok(())
    }
}
