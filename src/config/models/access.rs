//! Top-level access layer configuration

#![allow(missing_docs)]

use super::*;
use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

/// Main access configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AccessConfig {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub routing: RoutingConfig,
    #[serde(default)]
    pub navigation: NavigationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AccessConfig {
    /// Defaults overlaid with `COORDHUB_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Same as [`AccessConfig::from_env`] with an explicit variable source
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_env_with(lookup)?;
        Ok(config)
    }

    /// Overwrite fields with the `COORDHUB_*` variables that are set.
    ///
    /// Unlike [`AccessConfig::merge`], a variable that names a default value
    /// still wins, so `COORDHUB_LOG_JSON=false` turns JSON output off.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides to access configuration");

        let var = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let config = self;

        if let Some(key) = var("COORDHUB_TOKEN_KEY") {
            config.session.token_key = key;
        }
        if let Some(key) = var("COORDHUB_USER_DATA_KEY") {
            config.session.user_data_key = key;
        }
        if let Some(key) = var("COORDHUB_PERMISSIONS_KEY") {
            config.session.permissions_key = key;
        }
        if let Some(path) = var("COORDHUB_SESSION_STORE") {
            config.session.store_path = Some(PathBuf::from(path));
        }
        if let Some(path) = var("COORDHUB_LOGIN_PATH") {
            config.routing.login_path = path;
        }
        if let Some(path) = var("COORDHUB_HOME_PATH") {
            config.routing.home_path = path;
        }
        if let Some(level) = var("COORDHUB_LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(json) = var("COORDHUB_LOG_JSON") {
            config.logging.json = match json.to_lowercase().as_str() {
                "true" | "1" | "yes" | "on" => true,
                "false" | "0" | "no" | "off" => false,
                other => {
                    return Err(AccessError::config(format!(
                        "Invalid COORDHUB_LOG_JSON value: {}",
                        other
                    )));
                }
            };
        }

        Ok(())
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.session = self.session.merge(other.session);
        self.routing = self.routing.merge(other.routing);
        self.navigation = self.navigation.merge(other.navigation);
        self.logging = self.logging.merge(other.logging);
        self
    }
}
