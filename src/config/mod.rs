//! Configuration management for the access layer
//!
//! YAML file, environment overrides, merging and validation.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    pub access: AccessConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::read_file(path.as_ref())?;
        config.validate()?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = std::fs::read_to_string(path)
            .map_err(|e| AccessError::config(format!("Failed to read config file: {}", e)))?;

        Self::parse(&content)
    }

    fn parse(content: &str) -> Result<Self> {
        let access: AccessConfig = serde_yaml::from_str(content)?;
        Ok(Self { access })
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config = Self::parse(content)?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables (and `.env` if present)
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");
        load_dotenv();

        let config = Self {
            access: AccessConfig::from_env()?,
        };
        config.validate()?;
        Ok(config)
    }

    /// File if given, then environment overrides on top
    pub fn load(path: Option<&Path>) -> Result<Self> {
        load_dotenv();
        Self::load_with(path, |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with an explicit variable source.
    ///
    /// Only the combined configuration is validated.
    pub fn load_with<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::read_file(path)?,
            None => Self::default(),
        };
        config.access.apply_env_with(lookup)?;
        config.validate()?;
        Ok(config)
    }

    pub fn session(&self) -> &SessionConfig {
        &self.access.session
    }

    pub fn routing(&self) -> &RoutingConfig {
        &self.access.routing
    }

    pub fn navigation(&self) -> &NavigationConfig {
        &self.access.navigation
    }

    pub fn logging(&self) -> &LoggingConfig {
        &self.access.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");
        self.access.validate()
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.access = self.access.merge(other.access);
        self
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(&self.access)?)
    }
}

fn load_dotenv() {
    if let Err(e) = dotenvy::dotenv() {
        debug!("No .env file loaded: {}", e);
    }
}
