//! Configuration management for the login module
//!
//! Values come from built-in defaults, an optional `config.toml`, and
//! `LOGIN_MODULE_*` environment variables, in increasing priority.

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;

use crate::auth::is_valid_email;

/// Locations searched for `config.toml`, without extension.
const CONFIG_PATHS: [&str; 2] = [
    "login-module/config", // Container layout: /app/login-module/config.toml
    "config",              // Local development: ./config.toml
];

/// Prefix for environment overrides, e.g. `LOGIN_MODULE_FALLBACK_EMAIL`.
const ENV_PREFIX: &str = "LOGIN_MODULE";

/// Application configuration
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Banner shown above the login prompt
    pub app_title: String,

    /// Email shown on the dashboard when no one is logged in
    pub fallback_email: String,

    /// Longest console line accepted before parsing
    pub max_input_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Login Module".to_string(),
            fallback_email: "demo@example.com".to_string(),
            max_input_length: 512,
        }
    }
}

impl AppConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let builder = CONFIG_PATHS.iter().fold(Self::defaults()?, |builder, path| {
            builder.add_source(File::with_name(path).required(false))
        });
        Self::finish(builder)
    }

    /// Load configuration from TOML text instead of a file
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let builder = Self::defaults()?.add_source(File::from_str(contents, FileFormat::Toml));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("app_title", defaults.app_title)?
            .set_default("fallback_email", defaults.fallback_email)?
            .set_default("max_input_length", defaults.max_input_length as i64)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        let settings = builder
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app_title.trim().is_empty() {
            return Err(ConfigError::Message("app_title cannot be empty".into()));
        }

        if !is_valid_email(&self.fallback_email) {
            return Err(ConfigError::Message(format!(
                "fallback_email is not a valid email address: {}",
                self.fallback_email
            )));
        }

        if self.max_input_length == 0 {
            return Err(ConfigError::Message(
                "max_input_length must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            app_title = "Staff Portal"
            max_input_length = 128
            "#,
        )
        .unwrap();
        assert_eq!(config.app_title, "Staff Portal");
        assert_eq!(config.max_input_length, 128);
        assert_eq!(config.fallback_email, "demo@example.com");
    }

    #[test]
    fn test_rejects_invalid_fallback_email() {
        let result = AppConfig::from_toml_str(r#"fallback_email = "nobody""#);
        assert!(matches!(result, Err(ConfigError::Message(_))));
    }

    #[test]
    fn test_rejects_empty_title_and_zero_length() {
        let config = AppConfig {
            app_title: "   ".into(),
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());

        let config = AppConfig {
            max_input_length: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
