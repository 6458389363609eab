use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_base_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TRACKING_URL: &str = "https://api.nutrition-tracker.com/api";
pub const DEFAULT_FOOD_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_TOOLS_URL: &str = "http://localhost:3000";

/// Base URLs of the backend services. Immutable once handed to the
/// gateway; tests point these at a mock server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::Args))]
pub struct ClientConfig {
    /// Nutrition tracking service (nutrition, meals, goals, food search)
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_TRACKING_URL))]
    #[serde(default = "default_tracking_url")]
    pub tracking_base_url: String,

    /// Food catalogue and BMI calculator service
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_FOOD_URL))]
    #[serde(default = "default_food_url")]
    pub food_base_url: String,

    /// Local tools service (bmi, calories, contact form endpoints)
    #[cfg_attr(feature = "cli", arg(long, default_value = DEFAULT_TOOLS_URL))]
    #[serde(default = "default_tools_url")]
    pub tools_base_url: String,
}

fn default_tracking_url() -> String {
    DEFAULT_TRACKING_URL.to_string()
}

fn default_food_url() -> String {
    DEFAULT_FOOD_URL.to_string()
}

fn default_tools_url() -> String {
    DEFAULT_TOOLS_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            tracking_base_url: default_tracking_url(),
            food_base_url: default_food_url(),
            tools_base_url: default_tools_url(),
        }
    }
}

impl ClientConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClientConfig =
            toml::from_str(&content).map_err(|e| ClientError::Config {
                field: "config_file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for ClientConfig {
    fn validate(&self) -> Result<()> {
        validate_base_url("tracking_base_url", &self.tracking_base_url)?;
        validate_base_url("food_base_url", &self.food_base_url)?;
        validate_base_url("tools_base_url", &self.tools_base_url)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_known_backends() {
        let config = ClientConfig::default();
        assert_eq!(config.tracking_base_url, DEFAULT_TRACKING_URL);
        assert_eq!(config.food_base_url, DEFAULT_FOOD_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn toml_with_partial_fields_fills_defaults() {
        let parsed: ClientConfig =
            toml::from_str("tracking_base_url = \"http://127.0.0.1:8080/api\"").unwrap();
        assert_eq!(parsed.tracking_base_url, "http://127.0.0.1:8080/api");
        assert_eq!(parsed.food_base_url, DEFAULT_FOOD_URL);
    }

    #[test]
    fn bad_scheme_fails_validation() {
        let config = ClientConfig {
            tracking_base_url: "ftp://example.com/api".to_string(),
            ..ClientConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
