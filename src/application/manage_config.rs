//! Config management use case

use crate::domain::time_of_day::{format_24h, parse_time};
use crate::domain::Category;
use crate::error::{PlannerError, Result};
use crate::infrastructure::Config;
use std::path::PathBuf;
use std::str::FromStr;

const VALID_KEYS: &str = "export_file, default_time, default_category";

/// Service for reading and updating tripplan.toml
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.path)?;

        match key {
            "export_file" => Ok(config.export_file.display().to_string()),
            "default_time" => Ok(format_24h(config.default_time)),
            "default_category" => Ok(config.default_category.name().to_lowercase()),
            _ => Err(PlannerError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value and write the file
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;

        match key {
            "export_file" => {
                if value.trim().is_empty() {
                    return Err(PlannerError::Config(
                        "export_file cannot be empty".to_string(),
                    ));
                }
                config.export_file = PathBuf::from(value);
            }
            "default_time" => {
                config.default_time = parse_time(value).map_err(PlannerError::InvalidTime)?;
            }
            "default_category" => {
                config.default_category =
                    Category::from_str(value).map_err(PlannerError::InvalidCategory)?;
            }
            _ => {
                return Err(PlannerError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        config.save(&self.path)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn service(temp: &TempDir) -> ConfigService {
        ConfigService::new(temp.path().join("tripplan.toml"))
    }

    #[test]
    fn test_get_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert_eq!(service.get("export_file").unwrap(), "my_beautiful_itinerary.csv");
        assert_eq!(service.get("default_time").unwrap(), "09:00");
        assert_eq!(service.get("default_category").unwrap(), "sightseeing");
    }

    #[test]
    fn test_set_persists() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        service.set("default_time", "07:30 PM").unwrap();
        service.set("default_category", "R&R").unwrap();
        service.set("export_file", "osaka.csv").unwrap();

        assert_eq!(service.get("default_time").unwrap(), "19:30");
        assert_eq!(service.get("default_category").unwrap(), "r&r");
        assert_eq!(service.get("export_file").unwrap(), "osaka.csv");
        assert!(temp.path().join("tripplan.toml").exists());
    }

    #[test]
    fn test_set_rejects_bad_values() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        assert!(matches!(
            service.set("default_time", "teatime"),
            Err(PlannerError::InvalidTime(_))
        ));
        assert!(matches!(
            service.set("default_category", "nightlife"),
            Err(PlannerError::InvalidCategory(_))
        ));
        assert!(matches!(
            service.set("export_file", "  "),
            Err(PlannerError::Config(_))
        ));
        assert!(!temp.path().join("tripplan.toml").exists());
    }

    #[test]
    fn test_unknown_key() {
        let temp = TempDir::new().unwrap();
        let service = service(&temp);

        let err = service.get("theme").unwrap_err();
        assert!(err.to_string().contains("Unknown config key: 'theme'"));
        assert!(service.set("theme", "dark").is_err());
    }
}
